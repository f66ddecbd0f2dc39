//! Goal conditions.

use std::sync::Arc;

use tether_core::SimState;
use tether_space::SimStateSpace;

/// A region of the state space a planner must reach.
pub trait Goal: Send + Sync {
    /// Distance from `state` to the goal region; zero inside it.
    fn distance(&self, state: &SimState) -> f64;

    /// Distance under which a state counts as reaching the goal.
    fn threshold(&self) -> f64 {
        0.0
    }

    /// Whether `state` reaches the goal.
    fn is_satisfied(&self, state: &SimState) -> bool {
        self.distance(state) <= self.threshold()
    }
}

/// The ball of radius `threshold` around one target state, in the state
/// space metric.
#[derive(Debug)]
pub struct GoalState {
    space: Arc<SimStateSpace>,
    target: SimState,
    threshold: f64,
}

impl GoalState {
    /// Goal at `target` with the given threshold.
    pub fn new(space: Arc<SimStateSpace>, target: SimState, threshold: f64) -> Self {
        Self {
            space,
            target,
            threshold,
        }
    }

    /// The target state.
    pub fn target(&self) -> &SimState {
        &self.target
    }
}

impl Goal for GoalState {
    fn distance(&self, state: &SimState) -> f64 {
        self.space.distance(state, &self.target)
    }

    fn threshold(&self) -> f64 {
        self.threshold
    }
}
