//! Planning setup, control simulation, and path playback against a live
//! simulator.
//!
//! [`SimSetup`] is the entry point: given a shared
//! [`Environment`](tether_core::Environment) it assembles the state space,
//! control space and propagator, fills in sensible defaults, and hands a
//! ready problem to a user-supplied [`Planner`]. Once a [`Path`] exists it
//! can be replayed on the live world with [`play_path`], and single
//! controls can be tried out with [`simulate_control`].
//!
//! # Threading
//!
//! The live world is one shared resource. Every sequence of primitive
//! calls in this crate holds the environment's world guard for its whole
//! duration, so planner worker threads, simulation and playback never
//! interleave mid-sequence.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod goal;
pub mod info;
pub mod path;
pub mod planner;
pub mod playback;
pub mod problem;
pub mod setup;
pub mod simulate;
pub mod termination;

pub use error::{PathShapeError, SetupError};
pub use goal::{Goal, GoalState};
pub use info::SpaceInformation;
pub use path::{ControlPath, GeometricPath, Path};
pub use planner::{Planner, PlannerStatus};
pub use playback::play_path;
pub use problem::{PlannerSolution, ProblemDefinition};
pub use setup::SimSetup;
pub use simulate::{simulate, simulate_control, simulate_raw};
pub use termination::{SimTerminationCondition, TerminationCondition};
