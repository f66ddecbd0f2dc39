//! The shared environment descriptor.
//!
//! An [`Environment`] is created once per simulation session and shared via
//! `Arc` by the state space, the propagator, the termination condition and
//! the setup that created them. It holds:
//!
//! - immutable structure (control dimension and bounds, rigid body count),
//! - mutable simulation parameters ([`EnvParams`]) that the owning
//!   application may adjust between planning attempts,
//! - the `running` liveness flag, flipped by [`Environment::shutdown`],
//! - the live world itself, behind the single guard that serializes every
//!   primitive sequence ([`Environment::lock_world`]).
//!
//! # Bounds layout
//!
//! ```text
//! control_bounds   [lo_0, hi_0, lo_1, hi_1, ...]              2 * control_dim
//! state bounds     body 0: [lo_x, hi_x, lo_y, hi_y, lo_z, hi_z]
//!                  body 1: [...]                              6 * rigid_bodies
//! ```
//!
//! Infinite state bounds are replaced by `±f64::MAX / 2` so that uniform
//! sampling over the box stays well-defined. Control bounds are taken as
//! given.

use std::fmt;
use std::ops::{Deref, DerefMut};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError, RwLock, RwLockReadGuard};

use crate::error::{ConfigError, WorldError};
use crate::traits::WorldPrimitives;

/// Number of spatial dimensions per rigid body.
pub const SPATIAL_DIMS: usize = 3;

/// Replacement magnitude for infinite state bounds.
const CLAMPED_BOUND: f64 = f64::MAX / 2.0;

// ── BoundsKind ─────────────────────────────────────────────────────

/// Identifies one of the descriptor's flat bounds arrays.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BoundsKind {
    /// Per-dimension control bounds.
    Control,
    /// Per-body position bounds.
    Position,
    /// Per-body linear velocity bounds.
    LinearVelocity,
    /// Per-body angular velocity bounds.
    AngularVelocity,
}

impl fmt::Display for BoundsKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Control => "control",
            Self::Position => "position",
            Self::LinearVelocity => "linear velocity",
            Self::AngularVelocity => "angular velocity",
        };
        f.write_str(name)
    }
}

/// Replace `+inf` with `f64::MAX / 2` and `-inf` with `-f64::MAX / 2`.
///
/// Returns the number of entries replaced.
pub fn clamp_infinite_bounds(bounds: &mut [f64]) -> usize {
    let mut replaced = 0;
    for b in bounds.iter_mut() {
        if *b == f64::INFINITY {
            *b = CLAMPED_BOUND;
            replaced += 1;
        } else if *b == f64::NEG_INFINITY {
            *b = -CLAMPED_BOUND;
            replaced += 1;
        }
    }
    replaced
}

fn check_pairs(kind: BoundsKind, bounds: &[f64]) -> Result<(), ConfigError> {
    if let Some(index) = bounds.iter().position(|b| b.is_nan()) {
        return Err(ConfigError::NanBound { kind, index });
    }
    for (pair, lu) in bounds.chunks_exact(2).enumerate() {
        if lu[0] > lu[1] {
            return Err(ConfigError::InvertedBounds {
                kind,
                index: pair * 2,
                lower: lu[0],
                upper: lu[1],
            });
        }
    }
    Ok(())
}

/// Length-check, clamp and pair-check a state bounds array.
fn sanitize_state_bounds(
    kind: BoundsKind,
    mut bounds: Vec<f64>,
    rigid_bodies: usize,
) -> Result<Vec<f64>, ConfigError> {
    let expected = 2 * SPATIAL_DIMS * rigid_bodies;
    if bounds.len() != expected {
        return Err(ConfigError::BoundsLength {
            kind,
            expected,
            got: bounds.len(),
        });
    }
    let replaced = clamp_infinite_bounds(&mut bounds);
    if replaced > 0 {
        log::debug!("clamped {replaced} infinite {kind} bounds");
    }
    check_pairs(kind, &bounds)?;
    Ok(bounds)
}

fn check_step_size(value: f64) -> Result<(), ConfigError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ConfigError::InvalidStepSize { value });
    }
    Ok(())
}

fn check_control_steps(min: u32, max: u32) -> Result<(), ConfigError> {
    if min == 0 || min > max {
        return Err(ConfigError::InvalidControlSteps { min, max });
    }
    Ok(())
}

// ── EnvConfig ──────────────────────────────────────────────────────

/// Every structural and tunable parameter of a simulation session.
///
/// Usually parsed from the simulator's own configuration by the embedding
/// application. Passed to [`Environment::new`], which validates it.
#[derive(Clone, Debug, PartialEq)]
pub struct EnvConfig {
    /// Dimension of the control space.
    pub control_dim: usize,
    /// Flat `[lo, hi]` pairs, one per control dimension.
    pub control_bounds: Vec<f64>,
    /// Number of rigid bodies in the simulation.
    pub rigid_bodies: usize,
    /// Flat `[lo, hi]` pairs per spatial dimension per body.
    pub position_bounds: Vec<f64>,
    /// Flat `[lo, hi]` pairs per spatial dimension per body.
    pub linear_velocity_bounds: Vec<f64>,
    /// Flat `[lo, hi]` pairs per spatial dimension per body.
    pub angular_velocity_bounds: Vec<f64>,
    /// Duration of one simulator step, in seconds.
    pub step_size: f64,
    /// Fewest consecutive steps a sampled control is held.
    pub min_control_steps: u32,
    /// Most consecutive steps a sampled control is held.
    pub max_control_steps: u32,
}

impl EnvConfig {
    /// Validate all structural invariants.
    ///
    /// Infinite state bounds are accepted (they are clamped on
    /// construction); NaN bounds and inverted pairs are not.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validated_state_bounds().map(|_| ())
    }

    /// Validate and return the clamped state bounds
    /// `(position, linear velocity, angular velocity)`.
    fn validated_state_bounds(&self) -> Result<(Vec<f64>, Vec<f64>, Vec<f64>), ConfigError> {
        if self.control_dim == 0 {
            return Err(ConfigError::ZeroControlDimension);
        }
        if self.control_bounds.len() != 2 * self.control_dim {
            return Err(ConfigError::BoundsLength {
                kind: BoundsKind::Control,
                expected: 2 * self.control_dim,
                got: self.control_bounds.len(),
            });
        }
        check_pairs(BoundsKind::Control, &self.control_bounds)?;
        if self.rigid_bodies == 0 {
            return Err(ConfigError::ZeroRigidBodies);
        }
        let position = sanitize_state_bounds(
            BoundsKind::Position,
            self.position_bounds.clone(),
            self.rigid_bodies,
        )?;
        let linear = sanitize_state_bounds(
            BoundsKind::LinearVelocity,
            self.linear_velocity_bounds.clone(),
            self.rigid_bodies,
        )?;
        let angular = sanitize_state_bounds(
            BoundsKind::AngularVelocity,
            self.angular_velocity_bounds.clone(),
            self.rigid_bodies,
        )?;
        check_step_size(self.step_size)?;
        check_control_steps(self.min_control_steps, self.max_control_steps)?;
        Ok((position, linear, angular))
    }
}

// ── EnvParams ──────────────────────────────────────────────────────

/// The tunable part of an [`Environment`].
///
/// Read through [`Environment::params`]; updated through the validated
/// setters on [`Environment`]. Updates must not race an in-progress
/// propagation: the guard covers the world, not these parameters.
#[derive(Clone, Debug, PartialEq)]
pub struct EnvParams {
    /// Clamped position bounds.
    pub position_bounds: Vec<f64>,
    /// Clamped linear velocity bounds.
    pub linear_velocity_bounds: Vec<f64>,
    /// Clamped angular velocity bounds.
    pub angular_velocity_bounds: Vec<f64>,
    /// Duration of one simulator step, in seconds.
    pub step_size: f64,
    /// Fewest consecutive steps a sampled control is held.
    pub min_control_steps: u32,
    /// Most consecutive steps a sampled control is held.
    pub max_control_steps: u32,
}

impl EnvParams {
    /// The bounds array of the given kind, or `None` for
    /// [`BoundsKind::Control`], which is not a state bound.
    pub fn state_bounds(&self, kind: BoundsKind) -> Option<&[f64]> {
        match kind {
            BoundsKind::Control => None,
            BoundsKind::Position => Some(&self.position_bounds),
            BoundsKind::LinearVelocity => Some(&self.linear_velocity_bounds),
            BoundsKind::AngularVelocity => Some(&self.angular_velocity_bounds),
        }
    }
}

// ── WorldGuard ─────────────────────────────────────────────────────

/// Exclusive access to the live world.
///
/// The only route to the [`WorldPrimitives`]. Hold it for exactly one
/// logical sequence (e.g. write, apply, step N times, read) and drop it.
pub struct WorldGuard<'a> {
    inner: MutexGuard<'a, Box<dyn WorldPrimitives>>,
}

impl Deref for WorldGuard<'_> {
    type Target = dyn WorldPrimitives;

    fn deref(&self) -> &Self::Target {
        &**self.inner
    }
}

impl DerefMut for WorldGuard<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut **self.inner
    }
}

// ── Environment ────────────────────────────────────────────────────

/// Simulation parameters plus the single guarded live world.
///
/// `Environment` is `Send + Sync` and meant to live in an `Arc` shared by
/// every component of a planning session. Dropping the last owner drops
/// the world provider; simulator teardown is the provider's business.
pub struct Environment {
    control_dim: usize,
    control_bounds: Vec<f64>,
    rigid_bodies: usize,
    params: RwLock<EnvParams>,
    running: AtomicBool,
    world: Mutex<Box<dyn WorldPrimitives>>,
}

// Compile-time assertion: Environment is shareable across planner threads.
const _: () = {
    #[allow(dead_code)]
    fn assert_send_sync<T: Send + Sync>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send_sync::<Environment>();
    }
};

impl Environment {
    /// Validate `config`, clamp infinite state bounds, and take ownership
    /// of the world provider.
    pub fn new(config: EnvConfig, world: impl WorldPrimitives) -> Result<Self, ConfigError> {
        let (position_bounds, linear_velocity_bounds, angular_velocity_bounds) =
            config.validated_state_bounds()?;
        Ok(Self {
            control_dim: config.control_dim,
            control_bounds: config.control_bounds,
            rigid_bodies: config.rigid_bodies,
            params: RwLock::new(EnvParams {
                position_bounds,
                linear_velocity_bounds,
                angular_velocity_bounds,
                step_size: config.step_size,
                min_control_steps: config.min_control_steps,
                max_control_steps: config.max_control_steps,
            }),
            running: AtomicBool::new(true),
            world: Mutex::new(Box::new(world)),
        })
    }

    /// Dimension of the control space.
    pub fn control_dim(&self) -> usize {
        self.control_dim
    }

    /// Number of rigid bodies in the simulation.
    pub fn rigid_bodies(&self) -> usize {
        self.rigid_bodies
    }

    /// The flat control bounds as supplied at construction.
    pub fn raw_control_bounds(&self) -> &[f64] {
        &self.control_bounds
    }

    /// Control bounds split into `(lower, upper)` vectors.
    pub fn control_bounds(&self) -> (Vec<f64>, Vec<f64>) {
        self.control_bounds
            .chunks_exact(2)
            .map(|lu| (lu[0], lu[1]))
            .unzip()
    }

    /// Read access to the tunable parameters.
    ///
    /// Do not hold the returned guard across a setter call on the same
    /// thread.
    pub fn params(&self) -> RwLockReadGuard<'_, EnvParams> {
        // Setters validate before taking the write lock, so a poisoned
        // lock still holds a consistent value.
        self.params.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Duration of one simulator step, in seconds.
    pub fn step_size(&self) -> f64 {
        self.params().step_size
    }

    /// `(min_control_steps, max_control_steps)`.
    pub fn control_steps(&self) -> (u32, u32) {
        let p = self.params();
        (p.min_control_steps, p.max_control_steps)
    }

    /// Change the simulator step size.
    pub fn set_step_size(&self, step_size: f64) -> Result<(), ConfigError> {
        check_step_size(step_size)?;
        self.update(|p| p.step_size = step_size);
        Ok(())
    }

    /// Change the range of consecutive steps a sampled control is held.
    pub fn set_control_steps(&self, min: u32, max: u32) -> Result<(), ConfigError> {
        check_control_steps(min, max)?;
        self.update(|p| {
            p.min_control_steps = min;
            p.max_control_steps = max;
        });
        Ok(())
    }

    /// Replace the position bounds. Infinite entries are clamped.
    pub fn set_position_bounds(&self, bounds: Vec<f64>) -> Result<(), ConfigError> {
        let bounds = sanitize_state_bounds(BoundsKind::Position, bounds, self.rigid_bodies)?;
        self.update(|p| p.position_bounds = bounds);
        Ok(())
    }

    /// Replace the linear velocity bounds. Infinite entries are clamped.
    pub fn set_linear_velocity_bounds(&self, bounds: Vec<f64>) -> Result<(), ConfigError> {
        let bounds = sanitize_state_bounds(BoundsKind::LinearVelocity, bounds, self.rigid_bodies)?;
        self.update(|p| p.linear_velocity_bounds = bounds);
        Ok(())
    }

    /// Replace the angular velocity bounds. Infinite entries are clamped.
    pub fn set_angular_velocity_bounds(&self, bounds: Vec<f64>) -> Result<(), ConfigError> {
        let bounds =
            sanitize_state_bounds(BoundsKind::AngularVelocity, bounds, self.rigid_bodies)?;
        self.update(|p| p.angular_velocity_bounds = bounds);
        Ok(())
    }

    fn update(&self, f: impl FnOnce(&mut EnvParams)) {
        let mut params = self.params.write().unwrap_or_else(PoisonError::into_inner);
        f(&mut params);
    }

    /// Whether the simulator is still running.
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }

    /// Signal that the simulator has been shut down externally.
    ///
    /// Searches observe this at their next termination check. In-flight
    /// propagations are not interrupted.
    pub fn shutdown(&self) {
        if self.running.swap(false, Ordering::AcqRel) {
            log::info!("simulator shutdown signalled; planning will stop at the next check");
        }
    }

    /// Acquire exclusive access to the live world.
    ///
    /// Blocks while another thread holds the guard.
    ///
    /// # Errors
    ///
    /// [`WorldError::Poisoned`] if a previous holder panicked.
    pub fn lock_world(&self) -> Result<WorldGuard<'_>, WorldError> {
        let inner = self.world.lock().map_err(|_| WorldError::Poisoned)?;
        Ok(WorldGuard { inner })
    }
}

impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Environment")
            .field("control_dim", &self.control_dim)
            .field("control_bounds", &self.control_bounds)
            .field("rigid_bodies", &self.rigid_bodies)
            .field("params", &*self.params())
            .field("running", &self.is_running())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::SimState;
    use proptest::prelude::*;

    struct NullWorld;

    impl WorldPrimitives for NullWorld {
        fn read_state(&mut self) -> Result<SimState, WorldError> {
            Ok(SimState::at_rest(1))
        }
        fn write_state(&mut self, _: &SimState) -> Result<(), WorldError> {
            Ok(())
        }
        fn apply_control(&mut self, _: &[f64]) -> Result<(), WorldError> {
            Ok(())
        }
        fn world_step(&mut self, _: f64) -> Result<(), WorldError> {
            Ok(())
        }
    }

    fn unit_box(bodies: usize) -> Vec<f64> {
        [-1.0, 1.0].repeat(SPATIAL_DIMS * bodies)
    }

    fn config() -> EnvConfig {
        EnvConfig {
            control_dim: 2,
            control_bounds: vec![-1.0, 1.0, -0.5, 0.5],
            rigid_bodies: 1,
            position_bounds: unit_box(1),
            linear_velocity_bounds: unit_box(1),
            angular_velocity_bounds: unit_box(1),
            step_size: 1.0 / 60.0,
            min_control_steps: 1,
            max_control_steps: 10,
        }
    }

    #[test]
    fn valid_config_constructs() {
        let env = Environment::new(config(), NullWorld).unwrap();
        assert_eq!(env.control_dim(), 2);
        assert_eq!(env.rigid_bodies(), 1);
        assert!(env.is_running());
        assert_eq!(env.control_steps(), (1, 10));
    }

    #[test]
    fn control_bounds_split_into_lower_and_upper() {
        let env = Environment::new(config(), NullWorld).unwrap();
        let (lo, hi) = env.control_bounds();
        assert_eq!(lo, vec![-1.0, -0.5]);
        assert_eq!(hi, vec![1.0, 0.5]);
    }

    #[test]
    fn infinite_state_bounds_are_clamped() {
        let mut cfg = config();
        cfg.position_bounds = vec![
            f64::NEG_INFINITY,
            f64::INFINITY,
            -2.0,
            2.0,
            0.0,
            f64::INFINITY,
        ];
        cfg.angular_velocity_bounds[0] = f64::NEG_INFINITY;
        let env = Environment::new(cfg, NullWorld).unwrap();
        let p = env.params();
        assert_eq!(
            p.position_bounds,
            vec![-f64::MAX / 2.0, f64::MAX / 2.0, -2.0, 2.0, 0.0, f64::MAX / 2.0]
        );
        assert_eq!(p.angular_velocity_bounds[0], -f64::MAX / 2.0);
        assert_eq!(p.linear_velocity_bounds, unit_box(1));
    }

    #[test]
    fn infinite_control_bounds_are_kept() {
        let mut cfg = config();
        cfg.control_bounds = vec![f64::NEG_INFINITY, f64::INFINITY, -1.0, 1.0];
        let env = Environment::new(cfg, NullWorld).unwrap();
        assert_eq!(env.raw_control_bounds()[0], f64::NEG_INFINITY);
        assert_eq!(env.raw_control_bounds()[1], f64::INFINITY);
    }

    #[test]
    fn wrong_state_bounds_length_fails() {
        let mut cfg = config();
        cfg.rigid_bodies = 2;
        match Environment::new(cfg, NullWorld) {
            Err(ConfigError::BoundsLength {
                kind: BoundsKind::Position,
                expected: 12,
                got: 6,
            }) => {}
            other => panic!("expected BoundsLength, got {other:?}"),
        }
    }

    #[test]
    fn wrong_control_bounds_length_fails() {
        let mut cfg = config();
        cfg.control_dim = 3;
        match cfg.validate() {
            Err(ConfigError::BoundsLength {
                kind: BoundsKind::Control,
                ..
            }) => {}
            other => panic!("expected control BoundsLength, got {other:?}"),
        }
    }

    #[test]
    fn nan_bound_fails() {
        let mut cfg = config();
        cfg.linear_velocity_bounds[3] = f64::NAN;
        match cfg.validate() {
            Err(ConfigError::NanBound {
                kind: BoundsKind::LinearVelocity,
                index: 3,
            }) => {}
            other => panic!("expected NanBound, got {other:?}"),
        }
    }

    #[test]
    fn inverted_after_clamping_fails() {
        let mut cfg = config();
        cfg.position_bounds[0] = f64::INFINITY;
        match cfg.validate() {
            Err(ConfigError::InvertedBounds { index: 0, .. }) => {}
            other => panic!("expected InvertedBounds, got {other:?}"),
        }
    }

    #[test]
    fn zero_dimensions_fail() {
        let mut cfg = config();
        cfg.control_dim = 0;
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroControlDimension));
        let mut cfg = config();
        cfg.rigid_bodies = 0;
        cfg.position_bounds.clear();
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroRigidBodies));
    }

    #[test]
    fn invalid_step_size_fails() {
        for bad in [0.0, -0.1, f64::NAN, f64::INFINITY] {
            let mut cfg = config();
            cfg.step_size = bad;
            match cfg.validate() {
                Err(ConfigError::InvalidStepSize { .. }) => {}
                other => panic!("expected InvalidStepSize for {bad}, got {other:?}"),
            }
        }
    }

    #[test]
    fn invalid_control_steps_fail() {
        for (min, max) in [(0, 5), (6, 5)] {
            let mut cfg = config();
            cfg.min_control_steps = min;
            cfg.max_control_steps = max;
            assert_eq!(
                cfg.validate(),
                Err(ConfigError::InvalidControlSteps { min, max })
            );
        }
    }

    #[test]
    fn setters_validate_and_apply() {
        let env = Environment::new(config(), NullWorld).unwrap();
        env.set_step_size(0.01).unwrap();
        assert_eq!(env.step_size(), 0.01);
        assert!(env.set_step_size(-1.0).is_err());
        assert_eq!(env.step_size(), 0.01);

        env.set_control_steps(2, 4).unwrap();
        assert_eq!(env.control_steps(), (2, 4));
        assert!(env.set_control_steps(5, 4).is_err());
        assert_eq!(env.control_steps(), (2, 4));
    }

    #[test]
    fn bounds_setters_keep_no_infinity_invariant() {
        let env = Environment::new(config(), NullWorld).unwrap();
        let mut b = unit_box(1);
        b[5] = f64::INFINITY;
        env.set_linear_velocity_bounds(b).unwrap();
        assert_eq!(env.params().linear_velocity_bounds[5], f64::MAX / 2.0);
        assert!(env.set_angular_velocity_bounds(vec![0.0; 2]).is_err());
    }

    #[test]
    fn shutdown_clears_running() {
        let env = Environment::new(config(), NullWorld).unwrap();
        env.shutdown();
        assert!(!env.is_running());
        env.shutdown();
        assert!(!env.is_running());
    }

    #[test]
    fn lock_world_reaches_primitives() {
        let env = Environment::new(config(), NullWorld).unwrap();
        let mut world = env.lock_world().unwrap();
        world.apply_control(&[0.0, 0.0]).unwrap();
        world.world_step(env.step_size()).unwrap();
        assert_eq!(world.read_state().unwrap(), SimState::at_rest(1));
    }

    #[test]
    fn poisoned_guard_is_reported() {
        use std::sync::Arc;

        let env = Arc::new(Environment::new(config(), NullWorld).unwrap());
        let env2 = Arc::clone(&env);
        let _ = std::thread::spawn(move || {
            let _guard = env2.lock_world().unwrap();
            panic!("simulated integration panic");
        })
        .join();
        assert_eq!(env.lock_world().err(), Some(WorldError::Poisoned));
    }

    fn arb_bound() -> impl Strategy<Value = f64> {
        prop_oneof![
            Just(f64::INFINITY),
            Just(f64::NEG_INFINITY),
            -1e6f64..1e6f64,
        ]
    }

    proptest! {
        #[test]
        fn clamp_replaces_only_infinities(raw in prop::collection::vec(arb_bound(), 0..64)) {
            let mut clamped = raw.clone();
            let replaced = clamp_infinite_bounds(&mut clamped);
            prop_assert_eq!(replaced, raw.iter().filter(|b| b.is_infinite()).count());
            for (before, after) in raw.iter().zip(&clamped) {
                if *before == f64::INFINITY {
                    prop_assert_eq!(*after, f64::MAX / 2.0);
                } else if *before == f64::NEG_INFINITY {
                    prop_assert_eq!(*after, -f64::MAX / 2.0);
                } else {
                    prop_assert_eq!(after.to_bits(), before.to_bits());
                }
                prop_assert!(after.is_finite());
            }
        }

        #[test]
        fn constructed_state_bounds_are_finite(
            lo in prop::collection::vec(prop_oneof![Just(f64::NEG_INFINITY), -10.0f64..0.0], 6),
            hi in prop::collection::vec(prop_oneof![Just(f64::INFINITY), 0.0f64..10.0], 6),
        ) {
            let interleaved: Vec<f64> = lo.iter().zip(&hi).flat_map(|(l, h)| [*l, *h]).collect();
            let mut cfg = config();
            cfg.rigid_bodies = 2;
            cfg.position_bounds = interleaved.clone();
            cfg.linear_velocity_bounds = interleaved.clone();
            cfg.angular_velocity_bounds = interleaved;
            let env = Environment::new(cfg, NullWorld).unwrap();
            let p = env.params();
            for kind in [BoundsKind::Position, BoundsKind::LinearVelocity, BoundsKind::AngularVelocity] {
                let bounds = p.state_bounds(kind).unwrap();
                prop_assert_eq!(bounds.len(), 12);
                prop_assert!(bounds.iter().all(|b| b.is_finite()));
            }
        }
    }
}
