//! Block description supplied by the mesh
//!
//! A block owns the face positions along each direction, including ghost
//! layers. Everything else (centres, spacings, index bounds) is derived once
//! when the block is created.
mod axis;
mod builder;

pub use axis::Axis;
pub use builder::BlockBuilder;

use crate::{
    error::{GeometryError, GeometryResult},
    types::{Direction, RealScalar},
};
use std::ops::RangeInclusive;

/// A mesh block: one axis per direction
#[derive(Debug, Clone)]
pub struct Block<T: RealScalar> {
    axes: [Axis<T>; 3],
}

impl<T: RealScalar> Block<T> {
    /// Create a block from three axes, ordered x, y, z
    pub fn new(x: Axis<T>, y: Axis<T>, z: Axis<T>) -> GeometryResult<Self> {
        let axes = [x, y, z];
        for (expected, axis) in Direction::ALL.into_iter().zip(&axes) {
            if axis.direction() != expected {
                return Err(GeometryError::MisplacedAxis {
                    expected,
                    found: axis.direction(),
                });
            }
        }
        Ok(Self { axes })
    }

    /// The axis along a direction
    pub fn axis(&self, direction: Direction) -> &Axis<T> {
        &self.axes[direction.index()]
    }

    /// Active (non-ghost) cell indices along a direction
    pub fn active_range(&self, direction: Direction) -> RangeInclusive<usize> {
        let axis = self.axis(direction);
        axis.start()..=axis.end()
    }

    /// Number of cells, including ghosts, along a direction
    pub fn cell_count(&self, direction: Direction) -> usize {
        self.axis(direction).cell_count()
    }

    /// Number of cells, including ghosts, in the whole block
    pub fn total_cell_count(&self) -> usize {
        self.axes.iter().map(|a| a.cell_count()).product()
    }

    /// Padded shape `[nk, nj, ni]` of a cell-centred volume
    pub fn volume_shape(&self) -> [usize; 3] {
        [
            self.cell_count(Direction::Z),
            self.cell_count(Direction::Y),
            self.cell_count(Direction::X),
        ]
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::traits::Builder;

    #[test]
    fn test_active_ranges() {
        let mut b = BlockBuilder::<f64>::new(2);
        b.set_uniform(Direction::X, 8, 0.0, 1.0);
        b.set_uniform(Direction::Y, 4, 0.0, 2.0);
        b.set_uniform(Direction::Z, 1, 0.0, 1.0);
        let block = b.create_block().unwrap();

        assert_eq!(block.active_range(Direction::X), 2..=9);
        assert_eq!(block.active_range(Direction::Y), 2..=5);
        assert_eq!(block.active_range(Direction::Z), 0..=0);
        assert_eq!(block.volume_shape(), [1, 8, 12]);
        assert_eq!(block.total_cell_count(), 96);
    }

    #[test]
    fn test_misplaced_axes() {
        let x = Axis::uniform(Direction::X, 4, 1, 0.0, 1.0).unwrap();
        let y = Axis::uniform(Direction::Y, 4, 1, 0.0, 1.0).unwrap();
        let z = Axis::uniform(Direction::Z, 1, 0, 0.0, 1.0).unwrap();
        let e = Block::new(y.clone(), x.clone(), z.clone()).unwrap_err();
        assert!(e.is_configuration());
        assert!(matches!(
            e,
            GeometryError::MisplacedAxis {
                expected: Direction::X,
                found: Direction::Y
            }
        ));
        assert!(Block::new(x, y, z).is_ok());
    }
}
