//! Projections from full states to low-dimensional grids.
//!
//! Grid-based planners discretize the state space by projecting each state
//! to a handful of coordinates and bucketing them into cells.

use smallvec::SmallVec;
use tether_core::SimState;

use crate::state_space::{body_bounds, SimStateSpace};

/// Cells per bounded axis used by [`PositionProjection`].
const CELLS_PER_AXIS: f64 = 20.0;

/// Maps a state to a point in a low-dimensional Euclidean space.
pub trait ProjectionEvaluator: Send + Sync {
    /// Dimension of the projected space.
    fn dimension(&self) -> usize;

    /// Grid cell extent along each projected axis.
    fn cell_sizes(&self) -> &[f64];

    /// Write the projection of `state` into `out` (length `dimension()`).
    fn project(&self, state: &SimState, out: &mut [f64]);

    /// Integer grid cell containing the projection of `state`.
    fn cell_of(&self, state: &SimState) -> SmallVec<[i64; 8]> {
        let mut point: SmallVec<[f64; 8]> = SmallVec::from_elem(0.0, self.dimension());
        self.project(state, &mut point);
        point
            .iter()
            .zip(self.cell_sizes())
            .map(|(v, size)| (v / size).floor() as i64)
            .collect()
    }
}

/// Projects every body onto its x/y position.
///
/// Cell sizes are a twentieth of each axis's bounded extent, fixed at
/// construction.
#[derive(Clone, Debug)]
pub struct PositionProjection {
    bodies: usize,
    cell_sizes: Vec<f64>,
}

impl PositionProjection {
    /// Build from the current position bounds of `space`.
    pub fn new(space: &SimStateSpace) -> Self {
        let bodies = space.rigid_bodies();
        let params = space.environment().params();
        let cell_sizes = (0..bodies)
            .flat_map(|i| {
                let b = body_bounds(&params.position_bounds, i);
                // Divide first: hi - lo overflows for clamped infinite bounds.
                [
                    b[1] / CELLS_PER_AXIS - b[0] / CELLS_PER_AXIS,
                    b[3] / CELLS_PER_AXIS - b[2] / CELLS_PER_AXIS,
                ]
            })
            .map(|size| if size > 0.0 { size } else { 1.0 })
            .collect();
        Self { bodies, cell_sizes }
    }
}

impl ProjectionEvaluator for PositionProjection {
    fn dimension(&self) -> usize {
        2 * self.bodies
    }

    fn cell_sizes(&self) -> &[f64] {
        &self.cell_sizes
    }

    fn project(&self, state: &SimState, out: &mut [f64]) {
        for (xy, body) in out.chunks_exact_mut(2).zip(state.bodies()) {
            xy[0] = body.position[0];
            xy[1] = body.position[1];
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use tether_test_utils::{env_config, shared_env, unbounded_env_config, KinematicWorld};

    #[test]
    fn projects_xy_of_every_body() {
        let space = SimStateSpace::new(shared_env(env_config(2, 1), KinematicWorld::new(2)));
        let proj = PositionProjection::new(&space);
        assert_eq!(proj.dimension(), 4);
        assert_eq!(proj.cell_sizes(), &[1.0, 1.0, 1.0, 1.0]);

        let mut st = SimState::at_rest(2);
        st.bodies_mut()[0].position = [1.5, -2.5, 9.0];
        st.bodies_mut()[1].position = [0.0, 3.0, 0.0];
        let mut out = [0.0; 4];
        proj.project(&st, &mut out);
        assert_eq!(out, [1.5, -2.5, 0.0, 3.0]);
        assert_eq!(proj.cell_of(&st).as_slice(), &[1, -3, 0, 3]);
    }

    #[test]
    fn unbounded_positions_yield_finite_cells() {
        let env = shared_env(unbounded_env_config(1, 1), KinematicWorld::new(1));
        let space = Arc::new(SimStateSpace::new(env));
        let proj = PositionProjection::new(&space);
        assert!(proj.cell_sizes().iter().all(|s| s.is_finite() && *s > 0.0));
    }
}
