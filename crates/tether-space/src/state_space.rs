//! The state space backed by the live simulator.

use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

use indexmap::IndexMap;
use tether_core::{Environment, SimState, WorldError, SPATIAL_DIMS};

use crate::projection::ProjectionEvaluator;

/// Registry key of the default projection.
pub const DEFAULT_PROJECTION: &str = "";

/// Degrees of freedom per rigid body: position, linear velocity, angular
/// velocity, and orientation.
const DOF_PER_BODY: usize = 4 * SPATIAL_DIMS;

type ProjectionMap = IndexMap<String, Arc<dyn ProjectionEvaluator>>;

/// Compound state space of every rigid body in the simulation.
///
/// Bounds are read from the environment on every query, so updates made
/// between planning attempts take effect immediately.
pub struct SimStateSpace {
    env: Arc<Environment>,
    projections: RwLock<ProjectionMap>,
}

impl SimStateSpace {
    /// Create a state space over `env`'s world.
    pub fn new(env: Arc<Environment>) -> Self {
        Self {
            env,
            projections: RwLock::new(IndexMap::new()),
        }
    }

    /// The shared environment.
    pub fn environment(&self) -> &Arc<Environment> {
        &self.env
    }

    /// Number of rigid bodies per state.
    pub fn rigid_bodies(&self) -> usize {
        self.env.rigid_bodies()
    }

    /// Total degrees of freedom.
    pub fn dimension(&self) -> usize {
        DOF_PER_BODY * self.rigid_bodies()
    }

    /// Snapshot the live world.
    pub fn read_state(&self) -> Result<SimState, WorldError> {
        self.env.lock_world()?.read_state()
    }

    /// Force the live world to `state`.
    pub fn write_state(&self, state: &SimState) -> Result<(), WorldError> {
        self.env.lock_world()?.write_state(state)
    }

    /// Whether `state` has the right body count and every position and
    /// velocity lies inside the environment's bounds.
    pub fn satisfies_bounds(&self, state: &SimState) -> bool {
        if state.body_count() != self.rigid_bodies() {
            return false;
        }
        let p = self.env.params();
        state.bodies().iter().enumerate().all(|(i, body)| {
            within(&body.position, body_bounds(&p.position_bounds, i))
                && within(&body.linear_velocity, body_bounds(&p.linear_velocity_bounds, i))
                && within(&body.angular_velocity, body_bounds(&p.angular_velocity_bounds, i))
        })
    }

    /// Clamp every position and velocity into bounds and renormalize
    /// orientations.
    pub fn enforce_bounds(&self, state: &mut SimState) {
        let p = self.env.params();
        for (i, body) in state.bodies_mut().iter_mut().enumerate() {
            if i >= self.env.rigid_bodies() {
                break;
            }
            clamp_into(&mut body.position, body_bounds(&p.position_bounds, i));
            clamp_into(
                &mut body.linear_velocity,
                body_bounds(&p.linear_velocity_bounds, i),
            );
            clamp_into(
                &mut body.angular_velocity,
                body_bounds(&p.angular_velocity_bounds, i),
            );
            normalize(&mut body.orientation);
        }
    }

    /// Sum over bodies of the Euclidean distances between positions and
    /// velocities plus the angle between orientations.
    ///
    /// States with different body counts are infinitely far apart. A NaN
    /// anywhere in either state makes the distance NaN.
    pub fn distance(&self, a: &SimState, b: &SimState) -> f64 {
        if a.body_count() != b.body_count() {
            return f64::INFINITY;
        }
        a.bodies()
            .iter()
            .zip(b.bodies())
            .map(|(x, y)| {
                euclidean(&x.position, &y.position)
                    + euclidean(&x.linear_velocity, &y.linear_velocity)
                    + euclidean(&x.angular_velocity, &y.angular_velocity)
                    + rotation_angle(&x.orientation, &y.orientation)
            })
            .sum()
    }

    // ── Projections ─────────────────────────────────────────────

    /// Register `projection` under `name`, replacing any previous one.
    pub fn register_projection(
        &self,
        name: impl Into<String>,
        projection: Arc<dyn ProjectionEvaluator>,
    ) {
        self.projections
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(name.into(), projection);
    }

    /// Register `projection` as the default.
    pub fn register_default_projection(&self, projection: Arc<dyn ProjectionEvaluator>) {
        self.register_projection(DEFAULT_PROJECTION, projection);
    }

    /// Whether a default projection is registered.
    pub fn has_default_projection(&self) -> bool {
        self.projection(DEFAULT_PROJECTION).is_some()
    }

    /// The projection registered under `name`.
    pub fn projection(&self, name: &str) -> Option<Arc<dyn ProjectionEvaluator>> {
        self.projections
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
            .cloned()
    }

    /// The default projection.
    pub fn default_projection(&self) -> Option<Arc<dyn ProjectionEvaluator>> {
        self.projection(DEFAULT_PROJECTION)
    }

    /// Names of all registered projections, in registration order.
    pub fn projection_names(&self) -> Vec<String> {
        self.projections
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect()
    }
}

impl fmt::Debug for SimStateSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SimStateSpace")
            .field("rigid_bodies", &self.rigid_bodies())
            .field("projections", &self.projection_names())
            .finish()
    }
}

/// The six `[lo, hi]` entries of body `index`.
pub(crate) fn body_bounds(bounds: &[f64], index: usize) -> &[f64] {
    let n = 2 * SPATIAL_DIMS;
    &bounds[n * index..n * (index + 1)]
}

fn within(values: &[f64; 3], bounds: &[f64]) -> bool {
    values
        .iter()
        .zip(bounds.chunks_exact(2))
        .all(|(v, lu)| *v >= lu[0] && *v <= lu[1])
}

fn clamp_into(values: &mut [f64; 3], bounds: &[f64]) {
    for (v, lu) in values.iter_mut().zip(bounds.chunks_exact(2)) {
        *v = v.clamp(lu[0], lu[1]);
    }
}

fn normalize(q: &mut [f64; 4]) {
    let norm = q.iter().map(|c| c * c).sum::<f64>().sqrt();
    if norm > f64::EPSILON && norm.is_finite() {
        q.iter_mut().for_each(|c| *c /= norm);
    } else {
        *q = [1.0, 0.0, 0.0, 0.0];
    }
}

fn euclidean(a: &[f64; 3], b: &[f64; 3]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f64>()
        .sqrt()
}

/// Angle between two unit quaternions, in `[0, π/2]`.
fn rotation_angle(a: &[f64; 4], b: &[f64; 4]) -> f64 {
    let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    // `clamp` keeps NaN, `min` would hide it.
    dot.abs().clamp(0.0, 1.0).acos()
}
