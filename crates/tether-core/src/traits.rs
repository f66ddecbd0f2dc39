//! The simulator contract.

use crate::error::WorldError;
use crate::state::SimState;

/// The four operations through which Tether touches the live simulator.
///
/// Implemented by exactly one simulator integration per session (typically
/// a process-boundary client). Tether never calls these directly on an
/// unguarded value: the implementation is moved into an
/// [`Environment`](crate::Environment) and is only reachable through a
/// [`WorldGuard`](crate::WorldGuard), so every multi-call sequence is
/// serialized against other planner threads.
///
/// # Contract
///
/// - `apply_control` configures the control used by all subsequent
///   `world_step` calls until the next `apply_control`.
/// - `world_step` advances simulated time by `duration` seconds.
/// - Failures are reported as [`WorldError`] and are propagated to the
///   caller unchanged; Tether never retries.
///
/// # Object safety
///
/// This trait is object-safe; the environment stores the provider as
/// `Box<dyn WorldPrimitives>`.
pub trait WorldPrimitives: Send + 'static {
    /// Snapshot the simulator's current live state.
    fn read_state(&mut self) -> Result<SimState, WorldError>;

    /// Force the simulator's live state to match `state`.
    fn write_state(&mut self, state: &SimState) -> Result<(), WorldError>;

    /// Act under `control` from now on.
    fn apply_control(&mut self, control: &[f64]) -> Result<(), WorldError>;

    /// Advance simulated time by `duration` seconds under the applied control.
    fn world_step(&mut self, duration: f64) -> Result<(), WorldError>;
}
