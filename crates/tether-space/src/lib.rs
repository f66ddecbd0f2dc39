//! State and control spaces over a live simulator.
//!
//! [`SimStateSpace`] is the planner's view of the simulator state: it knows
//! the bounds from the shared [`Environment`](tether_core::Environment),
//! measures distances, and reads/writes the live world through the
//! environment's guard. [`SimControlSpace`] describes the control inputs.
//!
//! Planners draw random states and controls from the seeded
//! [`StateSampler`] and [`ControlSampler`], discretize states with a
//! [`ProjectionEvaluator`], and reject states with a
//! [`StateValidityChecker`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod control_space;
pub mod projection;
pub mod sampler;
pub mod state_space;
pub mod validity;

pub use control_space::SimControlSpace;
pub use projection::{PositionProjection, ProjectionEvaluator};
pub use sampler::{ControlSampler, StateSampler};
pub use state_space::{SimStateSpace, DEFAULT_PROJECTION};
pub use validity::{AllValid, BoundsValidityChecker, StateValidityChecker};
