//! Replaying a path on the live world.
//!
//! The world guard is held for the whole replay: another thread's
//! propagation can never land between two segments.

use tether_core::PlaybackError;

use crate::info::SpaceInformation;
use crate::path::{ControlPath, GeometricPath, Path};

/// Replay `path` on the live world, leaving it at the path's last state.
///
/// - Control paths re-propagate every segment from its recorded start
///   state, then write the recorded final state so that simulator drift
///   never leaves the world off the plan.
/// - Geometric paths write the first state, then for each later state
///   advance one step and write that state.
/// - Empty paths do nothing.
/// - Opaque paths fail with [`PlaybackError::UnknownPathType`] before any
///   world call.
pub fn play_path(si: &SpaceInformation, path: &Path) -> Result<(), PlaybackError> {
    match path {
        Path::Control(p) => play_control(si, p),
        Path::Geometric(p) => play_geometric(si, p),
        Path::Opaque { kind } => Err(PlaybackError::UnknownPathType { kind: kind.clone() }),
    }
}

fn play_control(si: &SpaceInformation, path: &ControlPath) -> Result<(), PlaybackError> {
    let step_size = si.propagation_step_size();
    log::info!(
        "playing control path: {} segments ({:.3} seconds)",
        path.control_count(),
        path.duration(step_size)
    );
    let mut world = si.environment().lock_world()?;
    let segments = path
        .states()
        .iter()
        .zip(path.controls())
        .zip(path.durations());
    for (i, ((from, control), &steps)) in segments.enumerate() {
        log::debug!("segment {i}: {steps} steps");
        si.propagator()
            .propagate_in(&mut *world, from, control, steps, step_size)?;
    }
    world.write_state(path.final_state())?;
    Ok(())
}

fn play_geometric(si: &SpaceInformation, path: &GeometricPath) -> Result<(), PlaybackError> {
    let Some((first, rest)) = path.states().split_first() else {
        return Ok(());
    };
    let step_size = si.propagation_step_size();
    log::info!(
        "playing geometric path: {} states ({:.3} seconds)",
        path.state_count(),
        step_size * rest.len() as f64
    );
    let mut world = si.environment().lock_world()?;
    world.write_state(first)?;
    for state in rest {
        world.world_step(step_size)?;
        world.write_state(state)?;
    }
    Ok(())
}
