//! Start states, goal, and the solution a planner reports.

use std::fmt;
use std::sync::Arc;

use tether_core::SimState;

use crate::goal::Goal;
use crate::path::Path;

/// A path reported by a planner, with how well it meets the goal.
#[derive(Clone, Debug, PartialEq)]
pub struct PlannerSolution {
    /// The path itself.
    pub path: Path,
    /// Whether the path stops short of the goal.
    pub approximate: bool,
    /// Goal distance of the path's end; zero for exact solutions.
    pub difference: f64,
    /// Name of the planner that found it.
    pub planner: String,
}

impl PlannerSolution {
    /// An exact solution.
    pub fn exact(path: Path, planner: impl Into<String>) -> Self {
        Self {
            path,
            approximate: false,
            difference: 0.0,
            planner: planner.into(),
        }
    }

    /// A solution ending `difference` away from the goal.
    pub fn approximate(path: Path, difference: f64, planner: impl Into<String>) -> Self {
        Self {
            path,
            approximate: true,
            difference,
            planner: planner.into(),
        }
    }
}

/// What the planner is asked to solve, and what it found.
#[derive(Default)]
pub struct ProblemDefinition {
    start_states: Vec<SimState>,
    goal: Option<Arc<dyn Goal>>,
    solution: Option<PlannerSolution>,
}

impl ProblemDefinition {
    /// An empty problem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a start state.
    pub fn add_start_state(&mut self, state: SimState) {
        self.start_states.push(state);
    }

    /// Remove all start states.
    pub fn clear_start_states(&mut self) {
        self.start_states.clear();
    }

    /// The start states, in insertion order.
    pub fn start_states(&self) -> &[SimState] {
        &self.start_states
    }

    /// Number of start states.
    pub fn start_state_count(&self) -> usize {
        self.start_states.len()
    }

    /// Set the goal.
    pub fn set_goal(&mut self, goal: Arc<dyn Goal>) {
        self.goal = Some(goal);
    }

    /// The goal, if set.
    pub fn goal(&self) -> Option<&Arc<dyn Goal>> {
        self.goal.as_ref()
    }

    /// Record a solution, replacing any earlier one unless it was exact
    /// and the new one is not.
    pub fn add_solution(&mut self, solution: PlannerSolution) {
        let keep_existing = self
            .solution
            .as_ref()
            .is_some_and(|s| !s.approximate && solution.approximate);
        if !keep_existing {
            self.solution = Some(solution);
        }
    }

    /// The recorded solution.
    pub fn solution(&self) -> Option<&PlannerSolution> {
        self.solution.as_ref()
    }

    /// The recorded solution's path.
    pub fn solution_path(&self) -> Option<&Path> {
        self.solution.as_ref().map(|s| &s.path)
    }

    /// Whether a solution has been recorded.
    pub fn has_solution(&self) -> bool {
        self.solution.is_some()
    }

    /// Whether the recorded solution is approximate.
    pub fn has_approximate_solution(&self) -> bool {
        self.solution.as_ref().is_some_and(|s| s.approximate)
    }

    /// Forget the recorded solution.
    pub fn clear_solution(&mut self) {
        self.solution = None;
    }
}

impl fmt::Debug for ProblemDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProblemDefinition")
            .field("start_states", &self.start_states.len())
            .field("has_goal", &self.goal.is_some())
            .field("solution", &self.solution)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::GeometricPath;

    fn path() -> Path {
        GeometricPath::new(vec![SimState::at_rest(1)]).into()
    }

    #[test]
    fn exact_solution_is_not_downgraded() {
        let mut pdef = ProblemDefinition::new();
        pdef.add_solution(PlannerSolution::exact(path(), "a"));
        pdef.add_solution(PlannerSolution::approximate(path(), 1.0, "b"));
        assert_eq!(pdef.solution().unwrap().planner, "a");
        assert!(!pdef.has_approximate_solution());

        pdef.add_solution(PlannerSolution::exact(path(), "c"));
        assert_eq!(pdef.solution().unwrap().planner, "c");

        pdef.clear_solution();
        assert!(!pdef.has_solution());
        pdef.add_solution(PlannerSolution::approximate(path(), 1.0, "b"));
        assert!(pdef.has_approximate_solution());
    }

    #[test]
    fn start_states_accumulate() {
        let mut pdef = ProblemDefinition::new();
        assert_eq!(pdef.start_state_count(), 0);
        pdef.add_start_state(SimState::at_rest(1));
        pdef.add_start_state(SimState::at_rest(1));
        assert_eq!(pdef.start_states().len(), 2);
        pdef.clear_start_states();
        assert_eq!(pdef.start_state_count(), 0);
        assert!(pdef.goal().is_none());
    }
}
