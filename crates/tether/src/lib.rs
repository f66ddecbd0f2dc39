//! Tether: a bridge between sampling-based kinodynamic planners and a live,
//! time-stepped physics simulator.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Tether sub-crates. For most users, adding `tether` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use std::sync::Arc;
//! use tether::prelude::*;
//!
//! // A point mass whose velocity is set directly by the control.
//! struct PointMass(SimState);
//!
//! impl WorldPrimitives for PointMass {
//!     fn read_state(&mut self) -> Result<SimState, WorldError> {
//!         Ok(self.0.clone())
//!     }
//!     fn write_state(&mut self, state: &SimState) -> Result<(), WorldError> {
//!         self.0 = state.clone();
//!         Ok(())
//!     }
//!     fn apply_control(&mut self, control: &[f64]) -> Result<(), WorldError> {
//!         self.0.bodies_mut()[0].linear_velocity = [control[0], 0.0, 0.0];
//!         Ok(())
//!     }
//!     fn world_step(&mut self, duration: f64) -> Result<(), WorldError> {
//!         let body = &mut self.0.bodies_mut()[0];
//!         body.position[0] += body.linear_velocity[0] * duration;
//!         Ok(())
//!     }
//! }
//!
//! let config = EnvConfig {
//!     control_dim: 1,
//!     control_bounds: vec![-1.0, 1.0],
//!     rigid_bodies: 1,
//!     position_bounds: [f64::NEG_INFINITY, f64::INFINITY].repeat(3),
//!     linear_velocity_bounds: [-1.0, 1.0].repeat(3),
//!     angular_velocity_bounds: [-1.0, 1.0].repeat(3),
//!     step_size: 0.5,
//!     min_control_steps: 1,
//!     max_control_steps: 10,
//! };
//! let env = Arc::new(Environment::new(config, PointMass(SimState::at_rest(1))).unwrap());
//! let setup = SimSetup::new(Arc::clone(&env));
//!
//! // Two half-second steps at unit speed.
//! let path = setup.simulate_raw(&[1.0], 2).unwrap();
//! let end = path.as_control().unwrap().final_state();
//! assert_eq!(end.bodies()[0].position[0], 1.0);
//!
//! // Replaying puts the world back at the end of the path.
//! setup.set_current_state(&SimState::at_rest(1)).unwrap();
//! setup.play_path(&path).unwrap();
//! assert_eq!(setup.current_state().unwrap().bodies()[0].position[0], 1.0);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `tether-core` | States, controls, the environment, errors, the world contract |
//! | [`space`] | `tether-space` | State and control spaces, samplers, projections, validity |
//! | [`propagator`] | `tether-propagator` | The propagator trait and the live-world propagator |
//! | [`engine`] | `tether-engine` | Planning setup, simulation, playback |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// States, controls, the environment, and errors (`tether-core`).
///
/// Also defines [`types::WorldPrimitives`], the trait a simulator
/// integration implements.
pub use tether_core as types;

/// State and control spaces (`tether-space`).
///
/// Provides [`space::SimStateSpace`], [`space::SimControlSpace`], seeded
/// samplers, projections, and validity checkers.
pub use tether_space as space;

/// State propagation (`tether-propagator`).
///
/// [`propagator::SimStatePropagator`] drives the live world under the
/// environment's guard.
pub use tether_propagator as propagator;

/// Planning sessions (`tether-engine`).
///
/// [`engine::SimSetup`] wires an environment to a planner; paths are
/// replayed with [`engine::play_path`].
pub use tether_engine as engine;

/// Common imports for typical Tether usage.
///
/// ```rust
/// use tether::prelude::*;
/// ```
pub mod prelude {
    // Core types and traits
    pub use tether_core::{
        BodyState, Control, EnvConfig, Environment, SimState, WorldPrimitives,
    };

    // Errors
    pub use tether_core::{ConfigError, PlaybackError, PropagationError, WorldError};

    // Spaces
    pub use tether_space::{
        ProjectionEvaluator, SimControlSpace, SimStateSpace, StateValidityChecker,
    };

    // Propagator
    pub use tether_propagator::StatePropagator;

    // Engine
    pub use tether_engine::{
        ControlPath, GeometricPath, Goal, GoalState, Path, Planner, PlannerSolution,
        PlannerStatus, ProblemDefinition, SetupError, SimSetup, SpaceInformation,
        TerminationCondition,
    };
}
