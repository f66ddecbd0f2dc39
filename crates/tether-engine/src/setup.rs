//! The planning session orchestrator.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use tether_core::{Control, Environment, PropagationError, SimState, WorldError};
use tether_propagator::SimStatePropagator;
use tether_space::{
    BoundsValidityChecker, PositionProjection, SimControlSpace, SimStateSpace,
    StateValidityChecker,
};

use crate::error::SetupError;
use crate::goal::Goal;
use crate::info::SpaceInformation;
use crate::path::Path;
use crate::planner::{Planner, PlannerStatus};
use crate::playback::play_path;
use crate::problem::ProblemDefinition;
use crate::simulate::{simulate, simulate_control, simulate_raw};
use crate::termination::{SimTerminationCondition, TerminationCondition};

/// Wires an [`Environment`] to a planner.
///
/// Construction builds the state space, control space and live-world
/// propagator, with the propagation step size and control duration range
/// taken from the environment. [`setup`](Self::setup) fills in whatever
/// the caller left unset:
///
/// - validity checker: [`BoundsValidityChecker`]
/// - default projection: [`PositionProjection`]
/// - start state: the live world's current state
///
/// Caller choices are never overwritten. [`solve`](Self::solve) runs
/// `setup` first, so calling it explicitly is optional.
pub struct SimSetup {
    env: Arc<Environment>,
    si: Arc<SpaceInformation>,
    pdef: ProblemDefinition,
    planner: Option<Box<dyn Planner>>,
    planner_ready: bool,
    last_status: Option<PlannerStatus>,
}

impl SimSetup {
    /// Build a session around `env`.
    pub fn new(env: Arc<Environment>) -> Self {
        let state_space = Arc::new(SimStateSpace::new(Arc::clone(&env)));
        let control_space = Arc::new(SimControlSpace::new(state_space));
        let propagator = Arc::new(SimStatePropagator::new(Arc::clone(&env)));
        let si = SpaceInformation::new(control_space, propagator);
        log::debug!(
            "session created: {} bodies, control dim {}, step {}s, durations {:?}",
            env.rigid_bodies(),
            env.control_dim(),
            si.propagation_step_size(),
            si.control_duration()
        );
        Self {
            env,
            si: Arc::new(si),
            pdef: ProblemDefinition::new(),
            planner: None,
            planner_ready: false,
            last_status: None,
        }
    }

    // ── Accessors ──────────────────────────────────────────────

    /// The shared environment.
    pub fn environment(&self) -> &Arc<Environment> {
        &self.env
    }

    /// The session's space information.
    pub fn space_information(&self) -> &Arc<SpaceInformation> {
        &self.si
    }

    /// Mutable access to the space information.
    ///
    /// If a planner still holds the previous handle, the information is
    /// copied and the planner is set up again before the next solve.
    pub fn space_information_mut(&mut self) -> &mut SpaceInformation {
        self.planner_ready = false;
        Arc::make_mut(&mut self.si)
    }

    /// The state space.
    pub fn state_space(&self) -> &Arc<SimStateSpace> {
        self.si.state_space()
    }

    /// The control space.
    pub fn control_space(&self) -> &Arc<SimControlSpace> {
        self.si.control_space()
    }

    /// The problem definition.
    pub fn problem_definition(&self) -> &ProblemDefinition {
        &self.pdef
    }

    /// Mutable access to the problem definition.
    pub fn problem_definition_mut(&mut self) -> &mut ProblemDefinition {
        &mut self.pdef
    }

    // ── Configuration ──────────────────────────────────────────

    /// Set the planner used by [`solve`](Self::solve).
    pub fn set_planner(&mut self, planner: Box<dyn Planner>) {
        self.planner = Some(planner);
        self.planner_ready = false;
    }

    /// The planner, if set.
    pub fn planner(&self) -> Option<&dyn Planner> {
        self.planner.as_deref()
    }

    /// Set the goal.
    pub fn set_goal(&mut self, goal: Arc<dyn Goal>) {
        self.pdef.set_goal(goal);
    }

    /// Replace all start states with `state`.
    pub fn set_start_state(&mut self, state: SimState) {
        self.pdef.clear_start_states();
        self.pdef.add_start_state(state);
    }

    /// Add another start state.
    pub fn add_start_state(&mut self, state: SimState) {
        self.pdef.add_start_state(state);
    }

    /// Install a validity checker.
    pub fn set_state_validity_checker(&mut self, checker: Arc<dyn StateValidityChecker>) {
        self.space_information_mut().set_validity_checker(checker);
    }

    /// Change the session's propagation step size. The environment keeps
    /// its own value.
    pub fn set_propagation_step_size(&mut self, step_size: f64) -> Result<(), SetupError> {
        self.space_information_mut()
            .set_propagation_step_size(step_size)?;
        Ok(())
    }

    /// Change the session's control duration range.
    pub fn set_min_max_control_duration(&mut self, min: u32, max: u32) -> Result<(), SetupError> {
        self.space_information_mut()
            .set_min_max_control_duration(min, max)?;
        Ok(())
    }

    // ── Live world ─────────────────────────────────────────────

    /// Read the live world's state.
    pub fn current_state(&self) -> Result<SimState, WorldError> {
        self.state_space().read_state()
    }

    /// Overwrite the live world's state.
    pub fn set_current_state(&self, state: &SimState) -> Result<(), WorldError> {
        self.state_space().write_state(state)
    }

    // ── Planning ───────────────────────────────────────────────

    /// Fill in defaults for anything the caller left unset, then set up
    /// the planner if it has not been yet.
    pub fn setup(&mut self) -> Result<(), SetupError> {
        if self.si.validity_checker().is_none() {
            log::info!("no validity checker set, using bounds checker");
            let checker = BoundsValidityChecker::new(Arc::clone(self.state_space()));
            self.set_state_validity_checker(Arc::new(checker));
        }
        let space = self.state_space();
        if !space.has_default_projection() {
            log::info!("no default projection set, projecting body positions onto the x/y plane");
            space.register_default_projection(Arc::new(PositionProjection::new(space)));
        }
        if self.pdef.start_state_count() == 0 {
            log::info!("no start state set, using the current world state");
            let start = self.current_state()?;
            self.pdef.add_start_state(start);
        }
        if !self.planner_ready {
            if let Some(planner) = self.planner.as_mut() {
                planner.setup(&self.si);
                self.planner_ready = true;
            }
        }
        Ok(())
    }

    /// Solve until a solution is found or the environment shuts down.
    pub fn solve(&mut self) -> Result<PlannerStatus, SetupError> {
        let ptc = SimTerminationCondition::new(Arc::clone(&self.env));
        self.solve_with(&ptc)
    }

    /// Solve until a solution is found, `limit` elapses, or the environment
    /// shuts down.
    pub fn solve_for(&mut self, limit: Duration) -> Result<PlannerStatus, SetupError> {
        let ptc = SimTerminationCondition::new(Arc::clone(&self.env)).with_time_limit(limit);
        self.solve_with(&ptc)
    }

    /// Solve under a caller-supplied termination condition.
    ///
    /// Any previous solution is discarded first. An unsolved search that
    /// ends while the environment is stopped reports
    /// [`PlannerStatus::Aborted`].
    pub fn solve_with(
        &mut self,
        ptc: &dyn TerminationCondition,
    ) -> Result<PlannerStatus, SetupError> {
        if self.planner.is_none() {
            return Err(SetupError::NoPlanner);
        }
        if self.pdef.goal().is_none() {
            return Err(SetupError::NoGoal);
        }
        self.setup()?;
        self.pdef.clear_solution();
        self.last_status = None;

        let planner = self.planner.as_mut().ok_or(SetupError::NoPlanner)?;
        log::info!("solving with {}", planner.name());
        let mut status = planner.solve(&self.si, &mut self.pdef, ptc)?;
        if !status.is_solved() && !self.env.is_running() {
            status = PlannerStatus::Aborted;
        }
        match status {
            PlannerStatus::ExactSolution | PlannerStatus::ApproximateSolution => {
                log::info!("{} found {status}", planner.name());
            }
            PlannerStatus::Timeout | PlannerStatus::Aborted => {
                log::warn!("{} stopped without a solution: {status}", planner.name());
            }
        }
        self.last_status = Some(status);
        Ok(status)
    }

    /// Status of the most recent solve, if it completed.
    pub fn last_status(&self) -> Option<PlannerStatus> {
        self.last_status
    }

    /// Whether the most recent solve recorded a solution.
    pub fn have_solution_path(&self) -> bool {
        self.pdef.has_solution()
    }

    /// Whether the recorded solution reaches the goal exactly.
    pub fn have_exact_solution_path(&self) -> bool {
        self.pdef.has_solution() && !self.pdef.has_approximate_solution()
    }

    /// The recorded solution path.
    pub fn solution_path(&self) -> Option<&Path> {
        self.pdef.solution_path()
    }

    /// Drop the planner's search data and the recorded solution. Goal,
    /// start states and configuration are kept.
    pub fn clear(&mut self) {
        if let Some(planner) = self.planner.as_mut() {
            planner.clear();
        }
        self.pdef.clear_solution();
        self.last_status = None;
    }

    // ── Playback and simulation ────────────────────────────────

    /// Replay `path` on the live world. See [`play_path`].
    pub fn play_path(&self, path: &Path) -> Result<(), SetupError> {
        Ok(play_path(&self.si, path)?)
    }

    /// Replay the recorded solution. Does nothing without one.
    pub fn play_solution_path(&self) -> Result<(), SetupError> {
        match self.pdef.solution_path() {
            Some(path) => self.play_path(path),
            None => {
                log::warn!("no solution path to play");
                Ok(())
            }
        }
    }

    /// See [`simulate_control`].
    pub fn simulate_control(&self, control: &Control, steps: u32) -> Result<Path, PropagationError> {
        simulate_control(&self.si, control, steps)
    }

    /// See [`simulate_raw`].
    pub fn simulate_raw(&self, values: &[f64], steps: u32) -> Result<Path, PropagationError> {
        simulate_raw(&self.si, values, steps)
    }

    /// See [`simulate`].
    pub fn simulate(&self, steps: u32) -> Result<Path, PropagationError> {
        simulate(&self.si, steps)
    }
}

impl fmt::Debug for SimSetup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SimSetup")
            .field("env", &self.env)
            .field("si", &self.si)
            .field("pdef", &self.pdef)
            .field("planner", &self.planner.as_ref().map(|p| p.name()))
            .field("last_status", &self.last_status)
            .finish()
    }
}
