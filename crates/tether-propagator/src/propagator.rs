//! The [`StatePropagator`] trait.

use std::sync::Arc;

use tether_core::{Control, Environment, PropagationError, SimState, WorldPrimitives};

/// Advances a state under a control.
///
/// # Contract
///
/// - `propagate_in` runs entirely on the world it is handed; the caller
///   already holds the guard and keeps holding it for the whole call.
/// - `propagate` acquires the guard itself, so that concurrent planner
///   threads never interleave their primitive sequences.
/// - Zero steps return `from` unchanged without touching the world.
///
/// # Object safety
///
/// This trait is object-safe; planning sessions store the propagator as
/// `Arc<dyn StatePropagator>`.
pub trait StatePropagator: Send + Sync {
    /// The environment whose world this propagator drives.
    fn environment(&self) -> &Arc<Environment>;

    /// Propagate `from` under `control` for `steps` steps of `step_size`
    /// seconds on an already-guarded world.
    fn propagate_in(
        &self,
        world: &mut dyn WorldPrimitives,
        from: &SimState,
        control: &Control,
        steps: u32,
        step_size: f64,
    ) -> Result<SimState, PropagationError>;

    /// Acquire the world guard and [`propagate_in`](Self::propagate_in).
    fn propagate(
        &self,
        from: &SimState,
        control: &Control,
        steps: u32,
        step_size: f64,
    ) -> Result<SimState, PropagationError> {
        let mut world = self.environment().lock_world()?;
        self.propagate_in(&mut *world, from, control, steps, step_size)
    }

    /// Whether negative durations are supported. The live world only runs
    /// forward.
    fn can_propagate_backward(&self) -> bool {
        false
    }
}
