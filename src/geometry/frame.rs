//! Local orthonormal frames at faces
//!
//! At a face of orientation `N` the local x-axis is the face normal and the
//! local (x, y, z) axes are the global axes `N`, `N + 1`, `N + 2` (cyclically),
//! corrected for the shear. Time is unchanged by every frame.
use crate::types::{Direction, RealScalar};

/// Scalars a face frame is built from: `alpha` and `beta` at the face
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameCoefficients<T: RealScalar> {
    /// Scale factor `alpha`
    pub alpha: T,
    /// Shear term `beta`
    pub beta: T,
}

/// Linear maps between global contravariant components and a local orthonormal frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame<T: RealScalar> {
    direction: Direction,
    /// `forward[a][i]`: local component `a` per global component `i`
    forward: [[T; 3]; 3],
    /// `inverse[i][a]`: global component `i` per local component `a`
    inverse: [[T; 3]; 3],
}

impl<T: RealScalar> Frame<T> {
    /// Build the frame at a face of the given orientation
    ///
    /// The forward and inverse matrices are written side by side; each pair
    /// multiplies to the identity.
    pub fn new(direction: Direction, coefficients: FrameCoefficients<T>) -> Self {
        let FrameCoefficients { alpha, beta } = coefficients;
        let zero = T::zero();
        let one = T::one();
        let (forward, inverse) = match direction {
            Direction::X => (
                [[one, zero, zero], [-beta, one, zero], [zero, zero, one]],
                [[one, zero, zero], [beta, one, zero], [zero, zero, one]],
            ),
            Direction::Y => (
                [
                    [zero, one / alpha, zero],
                    [zero, zero, one],
                    [alpha, -beta / alpha, zero],
                ],
                [
                    [beta / alpha, zero, one / alpha],
                    [alpha, zero, zero],
                    [zero, one, zero],
                ],
            ),
            Direction::Z => (
                [[zero, zero, one], [one, zero, zero], [-beta, one, zero]],
                [[zero, one, zero], [zero, beta, one], [one, zero, zero]],
            ),
        };
        Self {
            direction,
            forward,
            inverse,
        }
    }

    /// Orientation of the face
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Map global contravariant spatial components to the local frame
    pub fn to_local(&self, v: [T; 3]) -> [T; 3] {
        let m = &self.forward;
        [0, 1, 2].map(|a| m[a][0] * v[0] + m[a][1] * v[1] + m[a][2] * v[2])
    }

    /// Map local spatial components back to global contravariant components
    pub fn to_global(&self, w: [T; 3]) -> [T; 3] {
        let m = &self.inverse;
        [0, 1, 2].map(|i| m[i][0] * w[0] + m[i][1] * w[1] + m[i][2] * w[2])
    }

    /// Global component `i` contributed by local component `a`
    pub fn inverse_entry(&self, i: usize, a: usize) -> T {
        self.inverse[i][a]
    }

    /// Factor turning a local normal flux into the global flux through the face
    pub fn normal_scale(&self) -> T {
        self.inverse[self.direction.index()][0]
    }
}
