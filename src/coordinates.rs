//! Coordinate systems
mod sinusoidal;
mod source;
mod transform;

pub use sinusoidal::SinusoidalCoordinates;

use crate::types::RealScalar;
use ndarray::{ArrayView1, ArrayViewMut1};

/// Normal magnetic field at the faces of a pencil
///
/// `global` holds the face-normal component `B^N` in global coordinates. The
/// forward transform writes the local normal component, averaged over the
/// left and right states, to `local`.
#[derive(Debug)]
pub struct NormalField<'a, T: RealScalar> {
    /// Global normal component, read
    pub global: ArrayView1<'a, T>,
    /// Local normal component, written
    pub local: ArrayViewMut1<'a, T>,
}

impl<'a, T: RealScalar> NormalField<'a, T> {
    /// Create new
    pub fn new(global: ArrayView1<'a, T>, local: ArrayViewMut1<'a, T>) -> Self {
        Self { global, local }
    }
}
