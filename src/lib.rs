//! Sinusoidal ("snake") coordinate geometry for finite-volume MHD
//!
//! The grid is a Cartesian grid sheared by `y = y_flat + a sin(k x)`. The metric
//! depends on `x` only, so every geometric table is indexed along the x-axis.
#![cfg_attr(feature = "strict", deny(warnings), deny(unused_crate_dependencies))]
#![warn(missing_docs)]

pub mod block;
pub mod coordinates;
pub mod error;
pub mod geometry;
#[cfg(feature = "serde")]
mod io;
pub mod shapes;
pub mod traits;
pub mod types;

pub use block::{Axis, Block, BlockBuilder};
pub use coordinates::{NormalField, SinusoidalCoordinates};
pub use error::{GeometryError, GeometryResult};
pub use geometry::SinusoidalParameters;
