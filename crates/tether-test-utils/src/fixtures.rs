//! Reusable environment configurations.
//!
//! - [`env_config`]: finite bounds everywhere, 0.1 s steps, 1..=5 steps.
//! - [`unbounded_env_config`]: same, but positions unbounded (infinite).
//! - [`shared_env`]: build an `Arc<Environment>` around any world.

use std::sync::Arc;

use tether_core::{EnvConfig, Environment, WorldPrimitives, SPATIAL_DIMS};

fn pairs(lo: f64, hi: f64, count: usize) -> Vec<f64> {
    [lo, hi].repeat(count)
}

/// Finite bounds: positions in `[-10, 10]`, velocities in `[-5, 5]`,
/// controls in `[-1, 1]`.
pub fn env_config(rigid_bodies: usize, control_dim: usize) -> EnvConfig {
    let per_body = SPATIAL_DIMS * rigid_bodies;
    EnvConfig {
        control_dim,
        control_bounds: pairs(-1.0, 1.0, control_dim),
        rigid_bodies,
        position_bounds: pairs(-10.0, 10.0, per_body),
        linear_velocity_bounds: pairs(-5.0, 5.0, per_body),
        angular_velocity_bounds: pairs(-5.0, 5.0, per_body),
        step_size: 0.1,
        min_control_steps: 1,
        max_control_steps: 5,
    }
}

/// Like [`env_config`] but with infinite position bounds.
pub fn unbounded_env_config(rigid_bodies: usize, control_dim: usize) -> EnvConfig {
    EnvConfig {
        position_bounds: pairs(f64::NEG_INFINITY, f64::INFINITY, SPATIAL_DIMS * rigid_bodies),
        ..env_config(rigid_bodies, control_dim)
    }
}

/// Wrap `world` in a shared environment built from `config`.
///
/// # Panics
///
/// Panics if `config` is invalid.
pub fn shared_env(config: EnvConfig, world: impl WorldPrimitives) -> Arc<Environment> {
    Arc::new(Environment::new(config, world).expect("fixture config must be valid"))
}
