//! State propagation against the shared simulator world.
//!
//! The [`StatePropagator`] trait advances a state under a control by a
//! number of simulator steps. [`SimStatePropagator`] does so by driving the
//! live world: it restores the start state, applies the control, steps the
//! world, and reads the result back, all under one acquisition of the
//! environment's world guard.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod propagator;
pub mod sim;

pub use propagator::StatePropagator;
pub use sim::SimStatePropagator;
