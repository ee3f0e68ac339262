//! Metric coefficients
use crate::types::{
    slots::{I00, I11, I12, I22, I33, NMETRIC},
    RealScalar,
};

/// The two independent metric values at a point: `alpha^2` and `beta`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricCoefficients<T: RealScalar> {
    /// Squared scale factor `alpha^2 = 1 + beta^2`
    pub alpha_sq: T,
    /// Shear term `beta`
    pub beta: T,
}

impl<T: RealScalar> MetricCoefficients<T> {
    /// The metric these coefficients define
    pub fn metric(&self) -> Metric<T> {
        Metric::new(*self)
    }
}

/// Metric and inverse metric at a point
///
/// Only `g_00`, `g_11`, `g_12`, `g_22` and `g_33` can be non-zero; the time
/// components are always `-1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metric<T: RealScalar> {
    coefficients: MetricCoefficients<T>,
}

impl<T: RealScalar> Metric<T> {
    /// Create new
    pub fn new(coefficients: MetricCoefficients<T>) -> Self {
        Self { coefficients }
    }

    /// `g_00`
    pub fn g00(&self) -> T {
        -T::one()
    }
    /// `g_11`
    pub fn g11(&self) -> T {
        self.coefficients.alpha_sq
    }
    /// `g_12`
    pub fn g12(&self) -> T {
        -self.coefficients.beta
    }
    /// `g_22`
    pub fn g22(&self) -> T {
        T::one()
    }
    /// `g_33`
    pub fn g33(&self) -> T {
        T::one()
    }

    /// Metric components in slot order `[g00, g11, g12, g22, g33]`
    pub fn components(&self) -> [T; NMETRIC] {
        let mut g = [T::zero(); NMETRIC];
        g[I00] = self.g00();
        g[I11] = self.g11();
        g[I12] = self.g12();
        g[I22] = self.g22();
        g[I33] = self.g33();
        g
    }

    /// Inverse metric components in slot order
    ///
    /// The spatial block has unit determinant, so the inverse is a permutation
    /// of the metric with the sign of the cross term flipped.
    pub fn inverse_components(&self) -> [T; NMETRIC] {
        let mut gi = [T::zero(); NMETRIC];
        gi[I00] = -T::one();
        gi[I11] = T::one();
        gi[I12] = self.coefficients.beta;
        gi[I22] = self.coefficients.alpha_sq;
        gi[I33] = T::one();
        gi
    }

    /// Spatial block `g_ij` as a dense 3x3 matrix
    pub fn spatial(&self) -> [[T; 3]; 3] {
        let zero = T::zero();
        [
            [self.g11(), self.g12(), zero],
            [self.g12(), self.g22(), zero],
            [zero, zero, self.g33()],
        ]
    }

    /// `-g_mu_nu v^mu v^nu` for `v = (1, v1, v2, v3)`; positive for sub-luminal velocities
    pub fn normalisation(&self, v: [T; 3]) -> T {
        let two = T::from(2.0).unwrap();
        -(self.g00()
            + self.g11() * v[0] * v[0]
            + two * self.g12() * v[0] * v[1]
            + self.g22() * v[1] * v[1]
            + self.g33() * v[2] * v[2])
    }

    /// Lower the index of a spatial contravariant vector
    pub fn lower(&self, v: [T; 3]) -> [T; 3] {
        let g = self.spatial();
        [0, 1, 2].map(|i| g[i][0] * v[0] + g[i][1] * v[1] + g[i][2] * v[2])
    }
}
