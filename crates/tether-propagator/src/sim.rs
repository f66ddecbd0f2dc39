//! Propagation by driving the live simulator.

use std::sync::Arc;

use tether_core::{Control, Environment, PropagationError, SimState, WorldPrimitives};

use crate::propagator::StatePropagator;

/// Propagates by replaying the control on the live world.
///
/// For `steps > 0` the primitive sequence is:
///
/// ```text
/// write_state(from) → apply_control(control) → world_step(step_size) × steps → read_state()
/// ```
///
/// The control is applied once, before the first step, and the result is
/// read only after the last one.
#[derive(Debug)]
pub struct SimStatePropagator {
    env: Arc<Environment>,
}

impl SimStatePropagator {
    /// Create a propagator driving `env`'s world.
    pub fn new(env: Arc<Environment>) -> Self {
        Self { env }
    }
}

impl StatePropagator for SimStatePropagator {
    fn environment(&self) -> &Arc<Environment> {
        &self.env
    }

    fn propagate_in(
        &self,
        world: &mut dyn WorldPrimitives,
        from: &SimState,
        control: &Control,
        steps: u32,
        step_size: f64,
    ) -> Result<SimState, PropagationError> {
        let expected = self.env.control_dim();
        if control.dim() != expected {
            return Err(PropagationError::ControlDimension {
                expected,
                got: control.dim(),
            });
        }
        if steps == 0 {
            return Ok(from.clone());
        }
        log::trace!("propagating {steps} steps of {step_size}s");
        world.write_state(from)?;
        world.apply_control(control.as_slice())?;
        for _ in 0..steps {
            world.world_step(step_size)?;
        }
        Ok(world.read_state()?)
    }
}
