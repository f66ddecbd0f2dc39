//! Test utilities and an instrumented mock simulator for Tether development.
//!
//! [`KinematicWorld`] implements [`WorldPrimitives`] with trivially
//! predictable dynamics and records every primitive call, together with
//! the calling thread, into a shared [`CallLog`] that tests keep after the
//! world has been moved into an [`Environment`](tether_core::Environment).

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::sync::{Arc, Mutex, PoisonError};
use std::thread::{self, ThreadId};
use std::time::Duration;

use tether_core::{SimState, WorldError, WorldPrimitives};

pub use fixtures::{env_config, shared_env, unbounded_env_config};

/// Discriminant of a [`WorldCall`], used for fault injection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CallKind {
    Read,
    Write,
    Apply,
    Step,
}

/// One primitive invocation, with its argument.
#[derive(Clone, Debug, PartialEq)]
pub enum WorldCall {
    Read,
    Write(SimState),
    Apply(Vec<f64>),
    Step(f64),
}

impl WorldCall {
    pub fn kind(&self) -> CallKind {
        match self {
            Self::Read => CallKind::Read,
            Self::Write(_) => CallKind::Write,
            Self::Apply(_) => CallKind::Apply,
            Self::Step(_) => CallKind::Step,
        }
    }
}

/// A recorded call and the thread that issued it.
#[derive(Clone, Debug, PartialEq)]
pub struct CallRecord {
    pub thread: ThreadId,
    pub call: WorldCall,
}

/// Shared, cloneable log of primitive calls in issue order.
#[derive(Clone, Debug, Default)]
pub struct CallLog(Arc<Mutex<Vec<CallRecord>>>);

impl CallLog {
    fn push(&self, call: WorldCall) {
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(CallRecord {
                thread: thread::current().id(),
                call,
            });
    }

    /// All records, in issue order.
    pub fn records(&self) -> Vec<CallRecord> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// All calls, in issue order, without thread ids.
    pub fn calls(&self) -> Vec<WorldCall> {
        self.records().into_iter().map(|r| r.call).collect()
    }

    /// Number of recorded calls of the given kind.
    pub fn count(&self, kind: CallKind) -> usize {
        self.records()
            .iter()
            .filter(|r| r.call.kind() == kind)
            .count()
    }

    /// Forget everything recorded so far.
    pub fn clear(&self) {
        self.0.lock().unwrap_or_else(PoisonError::into_inner).clear();
    }
}

#[derive(Clone, Copy, Debug)]
struct Fault {
    kind: CallKind,
    succeed_first: usize,
    seen: usize,
}

/// Mock simulator with point-mass kinematics.
///
/// - `apply_control` copies the first three control values into the linear
///   velocity of body 0.
/// - `world_step(dt)` moves every body by `linear_velocity * dt`, plus the
///   configured drift on the x axis.
pub struct KinematicWorld {
    state: SimState,
    control: Vec<f64>,
    drift: f64,
    step_delay: Option<Duration>,
    fault: Option<Fault>,
    log: CallLog,
}

impl KinematicWorld {
    /// A world with `rigid_bodies` bodies at rest at the origin.
    pub fn new(rigid_bodies: usize) -> Self {
        Self {
            state: SimState::at_rest(rigid_bodies),
            control: Vec::new(),
            drift: 0.0,
            step_delay: None,
            fault: None,
            log: CallLog::default(),
        }
    }

    /// Start from `state` instead of rest.
    pub fn with_state(mut self, state: SimState) -> Self {
        self.state = state;
        self
    }

    /// Add `drift` to every body's x position on each step, emulating
    /// integration error in a real simulator.
    pub fn with_drift(mut self, drift: f64) -> Self {
        self.drift = drift;
        self
    }

    /// Sleep inside every `world_step`, widening race windows in
    /// contention tests.
    pub fn with_step_delay(mut self, delay: Duration) -> Self {
        self.step_delay = Some(delay);
        self
    }

    /// Fail the call of `kind` that follows `succeed_first` successful ones.
    pub fn failing_after(mut self, kind: CallKind, succeed_first: usize) -> Self {
        self.fault = Some(Fault {
            kind,
            succeed_first,
            seen: 0,
        });
        self
    }

    /// Handle to the call log; stays valid after the world is moved.
    pub fn log(&self) -> CallLog {
        self.log.clone()
    }

    fn record(&mut self, call: WorldCall) -> Result<(), WorldError> {
        let kind = call.kind();
        self.log.push(call);
        if let Some(fault) = self.fault.as_mut() {
            if fault.kind == kind {
                fault.seen += 1;
                if fault.seen > fault.succeed_first {
                    return Err(WorldError::Simulator {
                        reason: format!("injected {kind:?} fault"),
                    });
                }
            }
        }
        Ok(())
    }
}

impl WorldPrimitives for KinematicWorld {
    fn read_state(&mut self) -> Result<SimState, WorldError> {
        self.record(WorldCall::Read)?;
        Ok(self.state.clone())
    }

    fn write_state(&mut self, state: &SimState) -> Result<(), WorldError> {
        self.record(WorldCall::Write(state.clone()))?;
        self.state = state.clone();
        Ok(())
    }

    fn apply_control(&mut self, control: &[f64]) -> Result<(), WorldError> {
        self.record(WorldCall::Apply(control.to_vec()))?;
        self.control = control.to_vec();
        if let Some(body) = self.state.bodies_mut().first_mut() {
            for (v, c) in body.linear_velocity.iter_mut().zip(&self.control) {
                *v = *c;
            }
        }
        Ok(())
    }

    fn world_step(&mut self, duration: f64) -> Result<(), WorldError> {
        self.record(WorldCall::Step(duration))?;
        if let Some(delay) = self.step_delay {
            thread::sleep(delay);
        }
        for body in self.state.bodies_mut() {
            for (p, v) in body.position.iter_mut().zip(body.linear_velocity) {
                *p += v * duration;
            }
            body.position[0] += self.drift;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_integrates_applied_control() {
        let mut w = KinematicWorld::new(1);
        w.apply_control(&[2.0, -1.0]).unwrap();
        w.world_step(0.5).unwrap();
        let s = w.read_state().unwrap();
        assert_eq!(s.bodies()[0].position, [1.0, -0.5, 0.0]);
    }

    #[test]
    fn log_records_in_order() {
        let mut w = KinematicWorld::new(1);
        let log = w.log();
        w.apply_control(&[1.0]).unwrap();
        w.world_step(0.1).unwrap();
        w.read_state().unwrap();
        assert_eq!(
            log.calls(),
            vec![
                WorldCall::Apply(vec![1.0]),
                WorldCall::Step(0.1),
                WorldCall::Read
            ]
        );
    }

    #[test]
    fn fault_fires_after_successes() {
        let mut w = KinematicWorld::new(1).failing_after(CallKind::Step, 2);
        assert!(w.world_step(0.1).is_ok());
        assert!(w.world_step(0.1).is_ok());
        assert!(matches!(
            w.world_step(0.1),
            Err(WorldError::Simulator { .. })
        ));
    }
}
