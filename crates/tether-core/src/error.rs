//! Error types for the Tether workspace.
//!
//! Organized by subsystem: environment configuration, simulator
//! primitives, propagation, and path playback. Higher layers wrap the
//! lower ones via `From` so `?` works across the stack and the original
//! simulator fault stays reachable through [`Error::source`].

use std::error::Error;
use std::fmt;

use crate::env::BoundsKind;

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected while validating an [`EnvConfig`](crate::EnvConfig)
/// or a parameter update on a live [`Environment`](crate::Environment).
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// The control space must have at least one dimension.
    ZeroControlDimension,
    /// The simulation must contain at least one rigid body.
    ZeroRigidBodies,
    /// A flat bounds array has the wrong length.
    BoundsLength {
        /// Which bounds array.
        kind: BoundsKind,
        /// Required length.
        expected: usize,
        /// Supplied length.
        got: usize,
    },
    /// A bound is NaN.
    NanBound {
        /// Which bounds array.
        kind: BoundsKind,
        /// Flat index of the offending entry.
        index: usize,
    },
    /// A lower bound exceeds its upper bound (after infinity clamping).
    InvertedBounds {
        /// Which bounds array.
        kind: BoundsKind,
        /// Flat index of the lower bound of the offending pair.
        index: usize,
        /// The lower bound.
        lower: f64,
        /// The upper bound.
        upper: f64,
    },
    /// Step size is NaN, infinite, zero, or negative.
    InvalidStepSize {
        /// The invalid value.
        value: f64,
    },
    /// Control step range is empty or starts at zero.
    InvalidControlSteps {
        /// Requested minimum.
        min: u32,
        /// Requested maximum.
        max: u32,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroControlDimension => write!(f, "control dimension must be at least 1"),
            Self::ZeroRigidBodies => write!(f, "rigid body count must be at least 1"),
            Self::BoundsLength {
                kind,
                expected,
                got,
            } => write!(f, "{kind} bounds: expected {expected} entries, got {got}"),
            Self::NanBound { kind, index } => write!(f, "{kind} bounds: entry {index} is NaN"),
            Self::InvertedBounds {
                kind,
                index,
                lower,
                upper,
            } => write!(
                f,
                "{kind} bounds: lower bound {lower} at entry {index} exceeds upper bound {upper}"
            ),
            Self::InvalidStepSize { value } => {
                write!(f, "step size must be finite and positive, got {value}")
            }
            Self::InvalidControlSteps { min, max } => write!(
                f,
                "control steps must satisfy 1 <= min <= max, got min={min} max={max}"
            ),
        }
    }
}

impl Error for ConfigError {}

// ── WorldError ─────────────────────────────────────────────────────

/// Failures raised by the simulator integration behind
/// [`WorldPrimitives`](crate::WorldPrimitives), or by the guard around it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WorldError {
    /// The simulator rejected or failed an operation.
    Simulator {
        /// Human-readable description from the integration.
        reason: String,
    },
    /// The connection to the simulator is gone.
    Disconnected,
    /// Another thread panicked while holding the world guard; the live
    /// world may be mid-sequence and is no longer trusted.
    Poisoned,
}

impl fmt::Display for WorldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Simulator { reason } => write!(f, "simulator error: {reason}"),
            Self::Disconnected => write!(f, "simulator disconnected"),
            Self::Poisoned => write!(f, "world guard poisoned by a panicking holder"),
        }
    }
}

impl Error for WorldError {}

// ── PropagationError ───────────────────────────────────────────────

/// Errors from propagating a state under a control.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PropagationError {
    /// The control does not match the control space dimension.
    ControlDimension {
        /// Control space dimension.
        expected: usize,
        /// Supplied control length.
        got: usize,
    },
    /// A simulator primitive failed mid-propagation.
    World(WorldError),
}

impl fmt::Display for PropagationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ControlDimension { expected, got } => {
                write!(f, "control has {got} dimensions, expected {expected}")
            }
            Self::World(e) => write!(f, "propagation failed: {e}"),
        }
    }
}

impl Error for PropagationError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::World(e) => Some(e),
            _ => None,
        }
    }
}

impl From<WorldError> for PropagationError {
    fn from(e: WorldError) -> Self {
        Self::World(e)
    }
}

// ── PlaybackError ──────────────────────────────────────────────────

/// Errors from replaying a path against the live world.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlaybackError {
    /// The path is neither a control path nor a geometric path.
    UnknownPathType {
        /// Planner-reported name of the path kind.
        kind: String,
    },
    /// Propagating one of a control path's segments failed.
    Propagation(PropagationError),
    /// Writing a recorded state or stepping the world failed.
    World(WorldError),
}

impl fmt::Display for PlaybackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownPathType { kind } => write!(f, "unknown type of path: {kind}"),
            Self::Propagation(e) => write!(f, "playback: {e}"),
            Self::World(e) => write!(f, "playback: {e}"),
        }
    }
}

impl Error for PlaybackError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Propagation(e) => Some(e),
            Self::World(e) => Some(e),
            Self::UnknownPathType { .. } => None,
        }
    }
}

impl From<PropagationError> for PlaybackError {
    fn from(e: PropagationError) -> Self {
        Self::Propagation(e)
    }
}

impl From<WorldError> for PlaybackError {
    fn from(e: WorldError) -> Self {
        Self::World(e)
    }
}
