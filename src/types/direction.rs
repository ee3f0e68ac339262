//! Spatial directions

use std::fmt::{Display, Formatter};

/// One of the three spatial directions
///
/// The variant also tags the orientation of a face: `Direction::Y` faces are the
/// faces crossed when moving in the y-direction.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Direction {
    /// x (the distorted axis)
    X,
    /// y
    Y,
    /// z
    Z,
}

impl Direction {
    /// All directions in order
    pub const ALL: [Direction; 3] = [Direction::X, Direction::Y, Direction::Z];

    /// Axis index (0, 1 or 2)
    pub fn index(self) -> usize {
        match self {
            Direction::X => 0,
            Direction::Y => 1,
            Direction::Z => 2,
        }
    }

    /// Direction from an axis index
    pub fn from_index(index: usize) -> Self {
        match index % 3 {
            0 => Direction::X,
            1 => Direction::Y,
            _ => Direction::Z,
        }
    }

    /// Global axis playing the role of local axis `local` (0 = normal) at a face of this orientation
    ///
    /// Local axes permute cyclically: at a y-face the local (x, y, z) axes are the
    /// global (y, z, x) axes.
    pub fn global_axis(self, local: usize) -> usize {
        (self.index() + local) % 3
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::X => write!(f, "x"),
            Direction::Y => write!(f, "y"),
            Direction::Z => write!(f, "z"),
        }
    }
}
