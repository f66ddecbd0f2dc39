//! Core types and the simulator contract for Tether.
//!
//! This is the leaf crate of the workspace. It defines the planner-side
//! state and control representations, the four-primitive
//! [`WorldPrimitives`] contract that a simulator integration implements,
//! the shared [`Environment`] descriptor that owns the live world behind a
//! single guard, and the error types used across the workspace.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod control;
pub mod env;
pub mod error;
pub mod state;
pub mod traits;

pub use control::Control;
pub use env::{
    clamp_infinite_bounds, BoundsKind, EnvConfig, EnvParams, Environment, WorldGuard,
    SPATIAL_DIMS,
};
pub use error::{ConfigError, PlaybackError, PropagationError, WorldError};
pub use state::{BodyState, SimState};
pub use traits::WorldPrimitives;
