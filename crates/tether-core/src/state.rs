//! Planner-side representation of the simulator's world state.

use smallvec::SmallVec;

/// Kinematic state of a single rigid body.
///
/// Orientation is a unit quaternion stored as `[w, x, y, z]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BodyState {
    /// World-frame position.
    pub position: [f64; 3],
    /// World-frame linear velocity.
    pub linear_velocity: [f64; 3],
    /// World-frame angular velocity.
    pub angular_velocity: [f64; 3],
    /// Orientation quaternion `[w, x, y, z]`.
    pub orientation: [f64; 4],
}

impl BodyState {
    /// A body at the origin, at rest, with identity orientation.
    pub const fn at_rest() -> Self {
        Self {
            position: [0.0; 3],
            linear_velocity: [0.0; 3],
            angular_velocity: [0.0; 3],
            orientation: [1.0, 0.0, 0.0, 0.0],
        }
    }

    /// Whether every component is a finite number.
    pub fn is_finite(&self) -> bool {
        self.position
            .iter()
            .chain(&self.linear_velocity)
            .chain(&self.angular_velocity)
            .chain(&self.orientation)
            .all(|v| v.is_finite())
    }
}

impl Default for BodyState {
    fn default() -> Self {
        Self::at_rest()
    }
}

/// Snapshot of every rigid body in the simulation.
///
/// Bodies are stored in the simulator's canonical order. Two states are
/// equal only if every component of every body is bit-for-bit equal
/// (modulo the usual `NaN != NaN`).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SimState {
    bodies: SmallVec<[BodyState; 4]>,
}

impl SimState {
    /// A state with `rigid_bodies` bodies, all at rest at the origin.
    pub fn at_rest(rigid_bodies: usize) -> Self {
        Self {
            bodies: std::iter::repeat_n(BodyState::at_rest(), rigid_bodies).collect(),
        }
    }

    /// Build a state from explicit body states.
    pub fn from_bodies(bodies: impl IntoIterator<Item = BodyState>) -> Self {
        Self {
            bodies: bodies.into_iter().collect(),
        }
    }

    /// Number of rigid bodies.
    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    /// All bodies, in canonical order.
    pub fn bodies(&self) -> &[BodyState] {
        &self.bodies
    }

    /// Mutable access to all bodies.
    pub fn bodies_mut(&mut self) -> &mut [BodyState] {
        &mut self.bodies
    }

    /// A single body, or `None` if `index` is out of range.
    pub fn body(&self, index: usize) -> Option<&BodyState> {
        self.bodies.get(index)
    }

    /// Whether every component of every body is finite.
    pub fn is_finite(&self) -> bool {
        self.bodies.iter().all(BodyState::is_finite)
    }
}
