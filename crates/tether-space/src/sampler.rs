//! Seeded samplers for states, controls, and control durations.
//!
//! Both samplers use a [`ChaCha8Rng`] seeded by the caller, so a planner
//! that seeds them deterministically draws identical sequences across runs.
//! Give each planner thread its own sampler.

use std::ops::RangeInclusive;
use std::sync::Arc;

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use tether_core::{BodyState, Control, SimState};

use crate::control_space::SimControlSpace;
use crate::state_space::{body_bounds, SimStateSpace};

/// Uniform sample in `[lo, hi]`.
///
/// Interpolates instead of computing `hi - lo`, which overflows for
/// clamped infinite bounds.
fn uniform(rng: &mut ChaCha8Rng, lo: f64, hi: f64) -> f64 {
    let u: f64 = rng.random();
    lo * (1.0 - u) + hi * u
}

fn uniform_in(rng: &mut ChaCha8Rng, bounds: &[f64]) -> [f64; 3] {
    [
        uniform(rng, bounds[0], bounds[1]),
        uniform(rng, bounds[2], bounds[3]),
        uniform(rng, bounds[4], bounds[5]),
    ]
}

/// Uniformly distributed unit quaternion `[w, x, y, z]` (Shoemake).
fn uniform_orientation(rng: &mut ChaCha8Rng) -> [f64; 4] {
    let u1: f64 = rng.random();
    let u2: f64 = rng.random();
    let u3: f64 = rng.random();
    let (a, b) = ((1.0 - u1).sqrt(), u1.sqrt());
    let tau = std::f64::consts::TAU;
    [
        b * (tau * u3).cos(),
        a * (tau * u2).sin(),
        a * (tau * u2).cos(),
        b * (tau * u3).sin(),
    ]
}

// ── StateSampler ───────────────────────────────────────────────────

/// Draws states uniformly from the state space's bounds.
pub struct StateSampler {
    space: Arc<SimStateSpace>,
    rng: ChaCha8Rng,
}

impl StateSampler {
    /// Create a sampler with a fixed seed.
    pub fn new(space: Arc<SimStateSpace>, seed: u64) -> Self {
        Self {
            space,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// A state drawn uniformly from the bounds box, with uniformly
    /// distributed orientations.
    pub fn sample_uniform(&mut self) -> SimState {
        let env = Arc::clone(self.space.environment());
        let p = env.params();
        let rng = &mut self.rng;
        SimState::from_bodies((0..env.rigid_bodies()).map(|i| BodyState {
            position: uniform_in(rng, body_bounds(&p.position_bounds, i)),
            linear_velocity: uniform_in(rng, body_bounds(&p.linear_velocity_bounds, i)),
            angular_velocity: uniform_in(rng, body_bounds(&p.angular_velocity_bounds, i)),
            orientation: uniform_orientation(rng),
        }))
    }

    /// A state within `distance` of `near` along every position and
    /// velocity axis, clamped back into bounds. Orientation is kept.
    pub fn sample_uniform_near(&mut self, near: &SimState, distance: f64) -> SimState {
        let mut out = near.clone();
        for body in out.bodies_mut() {
            for v in body
                .position
                .iter_mut()
                .chain(body.linear_velocity.iter_mut())
                .chain(body.angular_velocity.iter_mut())
            {
                *v += uniform(&mut self.rng, -distance, distance);
            }
        }
        self.space.enforce_bounds(&mut out);
        out
    }
}

// ── ControlSampler ─────────────────────────────────────────────────

/// Draws controls uniformly from the control bounds, and control
/// durations uniformly from a step range.
pub struct ControlSampler {
    space: Arc<SimControlSpace>,
    rng: ChaCha8Rng,
}

impl ControlSampler {
    /// Create a sampler with a fixed seed.
    pub fn new(space: Arc<SimControlSpace>, seed: u64) -> Self {
        Self {
            space,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// A control drawn uniformly from the control bounds.
    ///
    /// Control bounds are not clamped by the environment; infinite control
    /// bounds produce non-finite samples.
    pub fn sample(&mut self) -> Control {
        let (lower, upper) = self.space.bounds();
        lower
            .iter()
            .zip(upper)
            .map(|(lo, hi)| uniform(&mut self.rng, *lo, *hi))
            .collect()
    }

    /// A step count drawn uniformly from `steps`.
    ///
    /// # Panics
    ///
    /// Panics if `steps` is empty. Ranges from
    /// `SpaceInformation::control_duration` never are.
    pub fn sample_steps(&mut self, steps: RangeInclusive<u32>) -> u32 {
        self.rng.random_range(steps)
    }
}
