//! The [`Planner`] trait.

use std::fmt;
use std::sync::Arc;

use tether_core::PropagationError;

use crate::info::SpaceInformation;
use crate::problem::ProblemDefinition;
use crate::termination::TerminationCondition;

/// Outcome of one [`Planner::solve`] call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PlannerStatus {
    /// A path reaching the goal was recorded.
    ExactSolution,
    /// A path ending near the goal was recorded.
    ApproximateSolution,
    /// The termination condition fired before a solution was found.
    Timeout,
    /// The environment shut down before a solution was found.
    Aborted,
}

impl PlannerStatus {
    /// Whether a solution, exact or approximate, was recorded.
    pub fn is_solved(self) -> bool {
        matches!(self, Self::ExactSolution | Self::ApproximateSolution)
    }
}

impl fmt::Display for PlannerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::ExactSolution => "exact solution",
            Self::ApproximateSolution => "approximate solution",
            Self::Timeout => "timeout",
            Self::Aborted => "aborted",
        })
    }
}

/// A kinodynamic planner driven by [`SimSetup`](crate::SimSetup).
///
/// Planners record what they find with
/// [`ProblemDefinition::add_solution`] and must poll the termination
/// condition often enough to stop promptly on shutdown. Worker threads
/// may propagate concurrently; the environment's guard serializes them.
pub trait Planner: Send {
    /// Name reported in logs and solutions.
    fn name(&self) -> &str;

    /// One-time preparation before the first solve.
    fn setup(&mut self, _si: &Arc<SpaceInformation>) {}

    /// Search until a solution is found or `ptc` fires.
    fn solve(
        &mut self,
        si: &Arc<SpaceInformation>,
        pdef: &mut ProblemDefinition,
        ptc: &dyn TerminationCondition,
    ) -> Result<PlannerStatus, PropagationError>;

    /// Drop any search data, keeping configuration.
    fn clear(&mut self) {}
}
