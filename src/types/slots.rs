//! Component slots in metric buffers and variable pencils

/// Metric component `g_00` (and `g^00`)
pub const I00: usize = 0;
/// Metric component `g_11`
pub const I11: usize = 1;
/// Metric component `g_12`
pub const I12: usize = 2;
/// Metric component `g_22`
pub const I22: usize = 3;
/// Metric component `g_33`
pub const I33: usize = 4;
/// Number of stored metric components
pub const NMETRIC: usize = 5;

/// Density
pub const IDN: usize = 0;
/// x-velocity
pub const IVX: usize = 1;
/// y-velocity
pub const IVY: usize = 2;
/// z-velocity
pub const IVZ: usize = 3;
/// Gas pressure (primitive) / energy (conserved)
pub const IEN: usize = 4;
/// Gas pressure
pub const IPR: usize = IEN;
/// x-momentum
pub const IM1: usize = IVX;
/// y-momentum
pub const IM2: usize = IVY;
/// z-momentum
pub const IM3: usize = IVZ;
/// Number of hydrodynamic variables
pub const NHYDRO: usize = 5;
/// First transverse magnetic field component
pub const IBY: usize = NHYDRO;
/// Second transverse magnetic field component
pub const IBZ: usize = NHYDRO + 1;
/// Number of variables in a pencil with magnetic fields
pub const NWAVE: usize = NHYDRO + 2;
