//! Control vectors applied to the simulator.

use smallvec::SmallVec;

/// A control input: one value per control dimension.
///
/// Inline storage covers the common case of up to eight dimensions
/// without heap allocation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Control(SmallVec<[f64; 8]>);

impl Control {
    /// The null control: `dim` zeros.
    pub fn zeros(dim: usize) -> Self {
        Self(SmallVec::from_elem(0.0, dim))
    }

    /// Copy a raw control vector.
    pub fn from_slice(values: &[f64]) -> Self {
        Self(SmallVec::from_slice(values))
    }

    /// Number of control dimensions.
    pub fn dim(&self) -> usize {
        self.0.len()
    }

    /// The control values.
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Mutable access to the control values.
    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.0
    }
}

impl From<Vec<f64>> for Control {
    fn from(values: Vec<f64>) -> Self {
        Self(SmallVec::from_vec(values))
    }
}

impl FromIterator<f64> for Control {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
