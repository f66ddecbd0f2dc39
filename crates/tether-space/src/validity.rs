//! State validity checking.
//!
//! Collision checking belongs to the simulator; the checkers here only
//! reject states the planner should never propose.

use std::sync::Arc;

use tether_core::SimState;

use crate::state_space::SimStateSpace;

/// Decides whether a state may appear on a plan.
pub trait StateValidityChecker: Send + Sync {
    /// Whether `state` is valid.
    fn is_valid(&self, state: &SimState) -> bool;
}

impl<F> StateValidityChecker for F
where
    F: Fn(&SimState) -> bool + Send + Sync,
{
    fn is_valid(&self, state: &SimState) -> bool {
        self(state)
    }
}

/// Accepts every state.
#[derive(Clone, Copy, Debug, Default)]
pub struct AllValid;

impl StateValidityChecker for AllValid {
    fn is_valid(&self, _state: &SimState) -> bool {
        true
    }
}

/// Accepts finite states inside the environment's bounds.
///
/// The default checker installed by the setup when none is given.
#[derive(Debug)]
pub struct BoundsValidityChecker {
    space: Arc<SimStateSpace>,
}

impl BoundsValidityChecker {
    /// Check against `space`'s bounds.
    pub fn new(space: Arc<SimStateSpace>) -> Self {
        Self { space }
    }
}

impl StateValidityChecker for BoundsValidityChecker {
    fn is_valid(&self, state: &SimState) -> bool {
        state.is_finite() && self.space.satisfies_bounds(state)
    }
}
