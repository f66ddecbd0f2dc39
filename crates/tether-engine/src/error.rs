//! Error types for planning sessions and path construction.

use std::error::Error;
use std::fmt;

use tether_core::{ConfigError, PlaybackError, PropagationError, WorldError};

// ── PathShapeError ─────────────────────────────────────────────────

/// A control path whose sequences do not line up.
///
/// A control path needs `states == controls + 1 == durations + 1`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathShapeError {
    /// Number of states supplied.
    pub states: usize,
    /// Number of controls supplied.
    pub controls: usize,
    /// Number of durations supplied.
    pub durations: usize,
}

impl fmt::Display for PathShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "control path needs states = controls + 1 = durations + 1, got {} states, {} controls, {} durations",
            self.states, self.controls, self.durations
        )
    }
}

impl Error for PathShapeError {}

// ── SetupError ─────────────────────────────────────────────────────

/// Errors from [`SimSetup`](crate::SimSetup) operations.
#[derive(Clone, Debug, PartialEq)]
pub enum SetupError {
    /// `solve()` was called before a planner was set.
    NoPlanner,
    /// `solve()` was called before a goal was set.
    NoGoal,
    /// A session parameter was rejected.
    Config(ConfigError),
    /// Reading the live start state failed.
    World(WorldError),
    /// The planner's search failed while propagating.
    Propagation(PropagationError),
    /// Replaying the solution failed.
    Playback(PlaybackError),
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoPlanner => write!(f, "no planner set"),
            Self::NoGoal => write!(f, "no goal set"),
            Self::Config(e) => write!(f, "config: {e}"),
            Self::World(e) => write!(f, "world: {e}"),
            Self::Propagation(e) => write!(f, "search: {e}"),
            Self::Playback(e) => write!(f, "{e}"),
        }
    }
}

impl Error for SetupError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::World(e) => Some(e),
            Self::Propagation(e) => Some(e),
            Self::Playback(e) => Some(e),
            Self::NoPlanner | Self::NoGoal => None,
        }
    }
}

impl From<ConfigError> for SetupError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<WorldError> for SetupError {
    fn from(e: WorldError) -> Self {
        Self::World(e)
    }
}

impl From<PropagationError> for SetupError {
    fn from(e: PropagationError) -> Self {
        Self::Propagation(e)
    }
}

impl From<PlaybackError> for SetupError {
    fn from(e: PlaybackError) -> Self {
        Self::Playback(e)
    }
}
