//! Everything a planner needs to know about the space it searches.

use std::fmt;
use std::ops::RangeInclusive;
use std::sync::Arc;

use tether_core::{ConfigError, Control, Environment, PropagationError, SimState};
use tether_propagator::StatePropagator;
use tether_space::{
    ControlSampler, SimControlSpace, SimStateSpace, StateSampler, StateValidityChecker,
};

/// Bundles the spaces, propagator, validity checker and propagation
/// parameters of one planning session.
///
/// Cloning is cheap: every component is shared. A planner that keeps a
/// handle past [`Planner::setup`](crate::Planner::setup) should hold the
/// `Arc<SpaceInformation>` it was given.
#[derive(Clone)]
pub struct SpaceInformation {
    state_space: Arc<SimStateSpace>,
    control_space: Arc<SimControlSpace>,
    propagator: Arc<dyn StatePropagator>,
    validity_checker: Option<Arc<dyn StateValidityChecker>>,
    step_size: f64,
    min_control_steps: u32,
    max_control_steps: u32,
}

impl SpaceInformation {
    /// Assemble from a control space and propagator.
    ///
    /// The step size and control duration range start at the values the
    /// environment currently holds. No validity checker is installed.
    pub fn new(control_space: Arc<SimControlSpace>, propagator: Arc<dyn StatePropagator>) -> Self {
        let state_space = Arc::clone(control_space.state_space());
        let (step_size, (min_control_steps, max_control_steps)) = {
            let env = state_space.environment();
            (env.step_size(), env.control_steps())
        };
        Self {
            state_space,
            control_space,
            propagator,
            validity_checker: None,
            step_size,
            min_control_steps,
            max_control_steps,
        }
    }

    // ── Components ─────────────────────────────────────────────

    /// The environment all components share.
    pub fn environment(&self) -> &Arc<Environment> {
        self.state_space.environment()
    }

    /// The state space.
    pub fn state_space(&self) -> &Arc<SimStateSpace> {
        &self.state_space
    }

    /// The control space.
    pub fn control_space(&self) -> &Arc<SimControlSpace> {
        &self.control_space
    }

    /// The state propagator.
    pub fn propagator(&self) -> &Arc<dyn StatePropagator> {
        &self.propagator
    }

    /// Replace the state propagator.
    pub fn set_propagator(&mut self, propagator: Arc<dyn StatePropagator>) {
        self.propagator = propagator;
    }

    /// The validity checker, if one has been installed.
    pub fn validity_checker(&self) -> Option<&Arc<dyn StateValidityChecker>> {
        self.validity_checker.as_ref()
    }

    /// Install a validity checker, replacing any previous one.
    pub fn set_validity_checker(&mut self, checker: Arc<dyn StateValidityChecker>) {
        self.validity_checker = Some(checker);
    }

    // ── Propagation parameters ─────────────────────────────────

    /// Seconds per simulator step used by propagation and playback.
    pub fn propagation_step_size(&self) -> f64 {
        self.step_size
    }

    /// Change the propagation step size.
    pub fn set_propagation_step_size(&mut self, step_size: f64) -> Result<(), ConfigError> {
        if !step_size.is_finite() || step_size <= 0.0 {
            return Err(ConfigError::InvalidStepSize { value: step_size });
        }
        self.step_size = step_size;
        Ok(())
    }

    /// Range of consecutive steps a sampled control is held.
    pub fn control_duration(&self) -> RangeInclusive<u32> {
        self.min_control_steps..=self.max_control_steps
    }

    /// Change the control duration range.
    pub fn set_min_max_control_duration(&mut self, min: u32, max: u32) -> Result<(), ConfigError> {
        if min == 0 || min > max {
            return Err(ConfigError::InvalidControlSteps { min, max });
        }
        self.min_control_steps = min;
        self.max_control_steps = max;
        Ok(())
    }

    // ── Operations ─────────────────────────────────────────────

    /// Propagate `from` under `control` for `steps` steps at the session
    /// step size.
    pub fn propagate(
        &self,
        from: &SimState,
        control: &Control,
        steps: u32,
    ) -> Result<SimState, PropagationError> {
        self.propagator
            .propagate(from, control, steps, self.step_size)
    }

    /// Whether `state` passes the installed validity checker. Every state
    /// is valid while none is installed.
    pub fn is_valid(&self, state: &SimState) -> bool {
        self.validity_checker
            .as_ref()
            .is_none_or(|checker| checker.is_valid(state))
    }

    /// Distance between two states in the state space metric.
    pub fn distance(&self, a: &SimState, b: &SimState) -> f64 {
        self.state_space.distance(a, b)
    }

    /// The zero control.
    pub fn null_control(&self) -> Control {
        self.control_space.null_control()
    }

    /// A fresh seeded state sampler.
    pub fn state_sampler(&self, seed: u64) -> StateSampler {
        StateSampler::new(Arc::clone(&self.state_space), seed)
    }

    /// A fresh seeded control sampler.
    pub fn control_sampler(&self, seed: u64) -> ControlSampler {
        ControlSampler::new(Arc::clone(&self.control_space), seed)
    }
}

impl fmt::Debug for SpaceInformation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpaceInformation")
            .field("state_space", &self.state_space)
            .field("control_dim", &self.control_space.dimension())
            .field("has_validity_checker", &self.validity_checker.is_some())
            .field("step_size", &self.step_size)
            .field("control_duration", &self.control_duration())
            .finish()
    }
}
