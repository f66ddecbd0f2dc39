//! Path representations produced by planners and the control simulator.

use tether_core::{Control, SimState};

use crate::error::PathShapeError;

// ── ControlPath ────────────────────────────────────────────────────

/// A path annotated with the controls that produced it.
///
/// Segment `i` goes from `states[i]` to `states[i + 1]` by holding
/// `controls[i]` for `durations[i]` simulator steps.
#[derive(Clone, Debug, PartialEq)]
pub struct ControlPath {
    states: Vec<SimState>,
    controls: Vec<Control>,
    durations: Vec<u32>,
}

impl ControlPath {
    /// Build from parallel sequences, checking their lengths line up.
    pub fn new(
        states: Vec<SimState>,
        controls: Vec<Control>,
        durations: Vec<u32>,
    ) -> Result<Self, PathShapeError> {
        if states.len() != controls.len() + 1 || controls.len() != durations.len() {
            return Err(PathShapeError {
                states: states.len(),
                controls: controls.len(),
                durations: durations.len(),
            });
        }
        Ok(Self {
            states,
            controls,
            durations,
        })
    }

    /// A path that starts, and so far ends, at `start`.
    pub fn from_start(start: SimState) -> Self {
        Self {
            states: vec![start],
            controls: Vec::new(),
            durations: Vec::new(),
        }
    }

    /// A single segment `from → to` under `control` for `steps` steps.
    pub fn segment(from: SimState, control: Control, steps: u32, to: SimState) -> Self {
        Self {
            states: vec![from, to],
            controls: vec![control],
            durations: vec![steps],
        }
    }

    /// Extend the path by one segment ending at `state`.
    pub fn push(&mut self, control: Control, steps: u32, state: SimState) {
        self.controls.push(control);
        self.durations.push(steps);
        self.states.push(state);
    }

    /// All states, start first.
    pub fn states(&self) -> &[SimState] {
        &self.states
    }

    /// One control per segment.
    pub fn controls(&self) -> &[Control] {
        &self.controls
    }

    /// One step count per segment.
    pub fn durations(&self) -> &[u32] {
        &self.durations
    }

    /// Number of states.
    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    /// Number of segments.
    pub fn control_count(&self) -> usize {
        self.controls.len()
    }

    /// The terminal state.
    pub fn final_state(&self) -> &SimState {
        // Never empty: every constructor stores at least one state.
        &self.states[self.states.len() - 1]
    }

    /// Total simulator steps over all segments.
    pub fn total_steps(&self) -> u64 {
        self.durations.iter().map(|&d| u64::from(d)).sum()
    }

    /// Total duration in seconds at `step_size` seconds per step.
    pub fn duration(&self, step_size: f64) -> f64 {
        self.total_steps() as f64 * step_size
    }

    /// The same states with the controls dropped.
    pub fn to_geometric(&self) -> GeometricPath {
        GeometricPath::new(self.states.clone())
    }
}

// ── GeometricPath ──────────────────────────────────────────────────

/// A path of states only, replayed one simulator step per waypoint.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GeometricPath {
    states: Vec<SimState>,
}

impl GeometricPath {
    /// Build from waypoints.
    pub fn new(states: Vec<SimState>) -> Self {
        Self { states }
    }

    /// Append a waypoint.
    pub fn push(&mut self, state: SimState) {
        self.states.push(state);
    }

    /// All waypoints, in order.
    pub fn states(&self) -> &[SimState] {
        &self.states
    }

    /// Number of waypoints.
    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    /// Whether there are no waypoints.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

// ── Path ───────────────────────────────────────────────────────────

/// Any path a planner may report.
#[derive(Clone, Debug, PartialEq)]
pub enum Path {
    /// States plus the controls and durations that connect them.
    Control(ControlPath),
    /// States only.
    Geometric(GeometricPath),
    /// A planner-specific representation that cannot be replayed on the
    /// live world.
    Opaque {
        /// Name of the representation, for error reporting.
        kind: String,
    },
}

impl Path {
    /// Short name of the path kind.
    pub fn kind(&self) -> &str {
        match self {
            Self::Control(_) => "control",
            Self::Geometric(_) => "geometric",
            Self::Opaque { kind } => kind,
        }
    }

    /// The states along the path, if known.
    pub fn states(&self) -> Option<&[SimState]> {
        match self {
            Self::Control(p) => Some(p.states()),
            Self::Geometric(p) => Some(p.states()),
            Self::Opaque { .. } => None,
        }
    }

    /// The control path, if this is one.
    pub fn as_control(&self) -> Option<&ControlPath> {
        match self {
            Self::Control(p) => Some(p),
            _ => None,
        }
    }

    /// The geometric path, if this is one.
    pub fn as_geometric(&self) -> Option<&GeometricPath> {
        match self {
            Self::Geometric(p) => Some(p),
            _ => None,
        }
    }
}

impl From<ControlPath> for Path {
    fn from(p: ControlPath) -> Self {
        Self::Control(p)
    }
}

impl From<GeometricPath> for Path {
    fn from(p: GeometricPath) -> Self {
        Self::Geometric(p)
    }
}
