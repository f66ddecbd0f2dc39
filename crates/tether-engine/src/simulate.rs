//! Trying out a single control on the live world.
//!
//! Each call reads the current world state and propagates from it while
//! holding the world guard once, so no other thread can move the world
//! between the read and the propagation.

use tether_core::{Control, PropagationError};

use crate::info::SpaceInformation;
use crate::path::{ControlPath, Path};

/// Apply `control` for `steps` steps from the current world state.
///
/// Returns a two-state control path `[s0, s1]` holding a copy of
/// `control` and the duration `[steps]`. The world is left at `s1`.
pub fn simulate_control(
    si: &SpaceInformation,
    control: &Control,
    steps: u32,
) -> Result<Path, PropagationError> {
    si.control_space().check_control(control)?;
    let mut world = si.environment().lock_world()?;
    let start = world.read_state()?;
    let end = si.propagator().propagate_in(
        &mut *world,
        &start,
        control,
        steps,
        si.propagation_step_size(),
    )?;
    drop(world);
    log::debug!("simulated {steps} steps of control {:?}", control.as_slice());
    Ok(ControlPath::segment(start, control.clone(), steps, end).into())
}

/// [`simulate_control`] from raw control values.
pub fn simulate_raw(
    si: &SpaceInformation,
    values: &[f64],
    steps: u32,
) -> Result<Path, PropagationError> {
    let control = si.control_space().control_from_slice(values)?;
    simulate_control(si, &control, steps)
}

/// [`simulate_control`] with the zero control.
pub fn simulate(si: &SpaceInformation, steps: u32) -> Result<Path, PropagationError> {
    simulate_control(si, &si.null_control(), steps)
}
