//! The control space of the simulated system.

use std::sync::Arc;

use tether_core::{Control, PropagationError};

use crate::state_space::SimStateSpace;

/// Real-vector control space with per-dimension bounds taken from the
/// environment.
#[derive(Debug)]
pub struct SimControlSpace {
    state_space: Arc<SimStateSpace>,
    lower: Vec<f64>,
    upper: Vec<f64>,
}

impl SimControlSpace {
    /// Create the control space that acts on `state_space`.
    pub fn new(state_space: Arc<SimStateSpace>) -> Self {
        let (lower, upper) = state_space.environment().control_bounds();
        Self {
            state_space,
            lower,
            upper,
        }
    }

    /// The state space these controls act on.
    pub fn state_space(&self) -> &Arc<SimStateSpace> {
        &self.state_space
    }

    /// Number of control dimensions.
    pub fn dimension(&self) -> usize {
        self.lower.len()
    }

    /// `(lower, upper)` bounds per dimension.
    pub fn bounds(&self) -> (&[f64], &[f64]) {
        (&self.lower, &self.upper)
    }

    /// The zero control.
    pub fn null_control(&self) -> Control {
        Control::zeros(self.dimension())
    }

    /// Check that `control` has this space's dimension.
    pub fn check_control(&self, control: &Control) -> Result<(), PropagationError> {
        if control.dim() != self.dimension() {
            return Err(PropagationError::ControlDimension {
                expected: self.dimension(),
                got: control.dim(),
            });
        }
        Ok(())
    }

    /// Copy a raw control vector, checking its dimension.
    pub fn control_from_slice(&self, values: &[f64]) -> Result<Control, PropagationError> {
        let control = Control::from_slice(values);
        self.check_control(&control)?;
        Ok(control)
    }

    /// Whether every component of `control` lies within bounds.
    pub fn satisfies_bounds(&self, control: &Control) -> bool {
        control.dim() == self.dimension()
            && control
                .as_slice()
                .iter()
                .zip(self.lower.iter().zip(&self.upper))
                .all(|(v, (lo, hi))| v >= lo && v <= hi)
    }
}
