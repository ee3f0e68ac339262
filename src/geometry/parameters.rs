//! Shear parameters and the closed-form relations they define
//!
//! The line element is
//! `ds^2 = -dt^2 + alpha^2 dx^2 - 2 beta dx dy + dy^2 + dz^2` with
//! `alpha^2 = 1 + a^2 k^2 cos^2(k x)` and `beta = a k cos(k x)`.
//! Cartesian coordinates are recovered from `y_flat = y - a sin(k x)`.
use crate::{
    error::{GeometryError, GeometryResult},
    types::RealScalar,
};

/// Amplitude `a` and wavenumber `k` of the sinusoidal shear
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SinusoidalParameters<T: RealScalar> {
    amplitude: T,
    wavenumber: T,
}

impl<T: RealScalar> Default for SinusoidalParameters<T> {
    fn default() -> Self {
        Self {
            amplitude: T::from(10.0).unwrap(),
            wavenumber: T::from(0.1).unwrap(),
        }
    }
}

impl<T: RealScalar> SinusoidalParameters<T> {
    /// Create new parameters
    pub fn new(amplitude: T, wavenumber: T) -> GeometryResult<Self> {
        let p = Self {
            amplitude,
            wavenumber,
        };
        p.validate()?;
        Ok(p)
    }

    /// Check that both parameters are finite
    pub fn validate(&self) -> GeometryResult<()> {
        if self.amplitude.is_finite() && self.wavenumber.is_finite() {
            Ok(())
        } else {
            Err(GeometryError::InvalidParameters {
                amplitude: self.amplitude.to_f64().unwrap_or(f64::NAN),
                wavenumber: self.wavenumber.to_f64().unwrap_or(f64::NAN),
            })
        }
    }

    /// Shear amplitude `a`
    pub fn amplitude(&self) -> T {
        self.amplitude
    }

    /// Shear wavenumber `k`
    pub fn wavenumber(&self) -> T {
        self.wavenumber
    }

    /// Maximum shear slope `a k`
    pub fn shear(&self) -> T {
        self.amplitude * self.wavenumber
    }

    /// `beta(x) = a k cos(k x)`
    pub fn beta(&self, x: T) -> T {
        self.shear() * (self.wavenumber * x).cos()
    }

    /// `alpha^2(x) = 1 + beta(x)^2`
    pub fn alpha_sq(&self, x: T) -> T {
        let beta = self.beta(x);
        T::one() + beta * beta
    }

    /// `alpha(x)`
    pub fn alpha(&self, x: T) -> T {
        self.alpha_sq(x).sqrt()
    }

    /// Width of the cell `[x_minus, x_plus]`: the integral of `alpha^2` over the cell
    ///
    /// Equal to `x_plus - x_minus` when the amplitude vanishes and never smaller.
    pub fn physical_width(&self, x_minus: T, x_plus: T) -> T {
        let two = T::from(2.0).unwrap();
        let four = T::from(4.0).unwrap();
        let ak = self.shear();
        let two_k = two * self.wavenumber;
        (two + ak * ak) / two * (x_plus - x_minus)
            - self.amplitude * ak * ((two_k * x_minus).sin() - (two_k * x_plus).sin()) / four
    }

    /// Source coefficient `(beta(x_minus) - beta(x_plus)) / (x_plus - x_minus)` of the cell `[x_minus, x_plus]`
    pub fn source_coefficient(&self, x_minus: T, x_plus: T) -> T {
        (self.beta(x_minus) - self.beta(x_plus)) / (x_plus - x_minus)
    }

    /// Map a point from sinusoidal to Cartesian coordinates
    pub fn to_cartesian(&self, point: [T; 3]) -> [T; 3] {
        [
            point[0],
            point[1] - self.amplitude * (self.wavenumber * point[0]).sin(),
            point[2],
        ]
    }

    /// Map a point from Cartesian to sinusoidal coordinates
    pub fn from_cartesian(&self, point: [T; 3]) -> [T; 3] {
        [
            point[0],
            point[1] + self.amplitude * (self.wavenumber * point[0]).sin(),
            point[2],
        ]
    }

    /// Euclidean distance between a point in sinusoidal coordinates and a point in Cartesian coordinates
    pub fn distance_between_points(&self, global: [T; 3], cartesian: [T; 3]) -> T {
        let a = self.to_cartesian(global);
        a.iter()
            .zip(cartesian.iter())
            .map(|(&p, &q)| (p - q) * (p - q))
            .fold(T::zero(), |acc, d| acc + d)
            .sqrt()
    }
}
