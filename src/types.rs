//! Types

mod direction;
pub mod slots;
pub use direction::Direction;

use num::Float;
use std::fmt::{Debug, Display};

/// Real scalar type used for coordinates and physical quantities
pub trait RealScalar: Float + Debug + Display + Send + Sync + 'static {}

impl<T: Float + Debug + Display + Send + Sync + 'static> RealScalar for T {}

/// Where metric values are sampled
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum MetricLocation {
    /// Cell centres
    Cell,
    /// Faces of the given orientation
    Face(Direction),
}
