//! Planner termination conditions.

use std::sync::Arc;
use std::time::{Duration, Instant};

use tether_core::Environment;

/// Polled by planners; once it returns `true` they should stop.
pub trait TerminationCondition: Sync {
    /// Whether the planner should stop now.
    fn should_terminate(&self) -> bool;
}

impl<F> TerminationCondition for F
where
    F: Fn() -> bool + Sync,
{
    fn should_terminate(&self) -> bool {
        self()
    }
}

/// Fires when the environment stops running or an optional deadline
/// passes.
#[derive(Debug)]
pub struct SimTerminationCondition {
    env: Arc<Environment>,
    deadline: Option<Instant>,
}

impl SimTerminationCondition {
    /// Stop only on environment shutdown.
    pub fn new(env: Arc<Environment>) -> Self {
        Self {
            env,
            deadline: None,
        }
    }

    /// Also stop at `deadline`.
    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Also stop once `limit` has elapsed from now.
    pub fn with_time_limit(self, limit: Duration) -> Self {
        let deadline = Instant::now() + limit;
        self.with_deadline(deadline)
    }

    /// Whether the environment stopped running.
    pub fn environment_stopped(&self) -> bool {
        !self.env.is_running()
    }
}

impl TerminationCondition for SimTerminationCondition {
    fn should_terminate(&self) -> bool {
        self.environment_stopped() || self.deadline.is_some_and(|d| Instant::now() >= d)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tether_test_utils::{env_config, shared_env, KinematicWorld};

    #[test]
    fn fires_on_shutdown() {
        let env = shared_env(env_config(1, 1), KinematicWorld::new(1));
        let ptc = SimTerminationCondition::new(Arc::clone(&env));
        assert!(!ptc.should_terminate());
        env.shutdown();
        assert!(ptc.should_terminate());
        assert!(ptc.environment_stopped());
    }

    #[test]
    fn fires_at_deadline() {
        let env = shared_env(env_config(1, 1), KinematicWorld::new(1));
        let past = SimTerminationCondition::new(Arc::clone(&env)).with_deadline(Instant::now());
        assert!(past.should_terminate());
        let later = SimTerminationCondition::new(env).with_time_limit(Duration::from_secs(3600));
        assert!(!later.should_terminate());
    }

    #[test]
    fn closures_are_conditions() {
        let always = || true;
        let ptc: &dyn TerminationCondition = &always;
        assert!(ptc.should_terminate());
    }
}
