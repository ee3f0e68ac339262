//! Block builder

use super::{Axis, Block};
use crate::{
    error::{GeometryError, GeometryResult},
    traits::Builder,
    types::{Direction, RealScalar},
};

/// Face data recorded for one direction
#[derive(Debug, Clone)]
enum AxisData<T: RealScalar> {
    Faces(Vec<T>),
    Uniform { cells: usize, min: T, max: T },
}

/// Builder for a [`Block`]
///
/// Directions with a single cell are collapsed and carry no ghost layers; all
/// other directions are padded with `ghost` layers.
#[derive(Debug)]
pub struct BlockBuilder<T: RealScalar> {
    ghost: usize,
    axes: [Option<AxisData<T>>; 3],
}

impl<T: RealScalar> BlockBuilder<T> {
    /// Create a new builder
    pub fn new(ghost: usize) -> Self {
        Self {
            ghost,
            axes: [None, None, None],
        }
    }

    /// Use `cells` equal active cells spanning `[min, max]` along a direction
    pub fn set_uniform(&mut self, direction: Direction, cells: usize, min: T, max: T) {
        self.axes[direction.index()] = Some(AxisData::Uniform { cells, min, max });
    }

    fn ghost_for(&self, cells: usize) -> usize {
        if cells == 1 {
            0
        } else {
            self.ghost
        }
    }
}

impl<T: RealScalar> Builder for BlockBuilder<T> {
    type T = T;
    type Block = Block<T>;

    fn set_faces(&mut self, direction: Direction, faces: &[T]) {
        self.axes[direction.index()] = Some(AxisData::Faces(faces.to_vec()));
    }

    fn create_block(self) -> GeometryResult<Block<T>> {
        let [x, y, z] = Direction::ALL.map(|direction| {
            match &self.axes[direction.index()] {
                None => Err(GeometryError::MissingAxis(direction)),
                Some(AxisData::Faces(faces)) => Axis::new(
                    direction,
                    faces.clone(),
                    self.ghost_for(faces.len().saturating_sub(1)),
                ),
                Some(AxisData::Uniform { cells, min, max }) => {
                    Axis::uniform(direction, *cells, self.ghost_for(*cells), *min, *max)
                }
            }
            .inspect_err(|e| log::warn!("block rejected: {e}"))
        });
        let (x, y, z) = (x?, y?, z?);
        log::debug!(
            "created block with {} x {} x {} cells ({} ghost layers)",
            x.active_cell_count(),
            y.active_cell_count(),
            z.active_cell_count(),
            self.ghost
        );
        Block::new(x, y, z)
    }
}
