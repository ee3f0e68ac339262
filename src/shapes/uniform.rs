//! Rectangular blocks

use crate::{
    block::{Block, BlockBuilder},
    error::GeometryResult,
    traits::Builder,
    types::{Direction, RealScalar},
};

/// Create a block of equal cells
///
/// `bounds[d]` is the `[min, max]` extent of the active cells along direction
/// `d`. Directions with a single cell are collapsed and get no ghost layers.
pub fn uniform_block<T: RealScalar>(
    cells: [usize; 3],
    ghost: usize,
    bounds: [[T; 2]; 3],
) -> GeometryResult<Block<T>> {
    let mut b = BlockBuilder::new(ghost);
    for d in Direction::ALL {
        let n = d.index();
        b.set_uniform(d, cells[n], bounds[n][0], bounds[n][1]);
    }
    b.create_block()
}

/// Create a block whose x-widths grow geometrically by `ratio` from cell to cell
///
/// Ghost cells continue the progression outwards. y and z are uniform.
pub fn stretched_block<T: RealScalar>(
    cells: [usize; 3],
    ghost: usize,
    bounds: [[T; 2]; 3],
    ratio: T,
) -> GeometryResult<Block<T>> {
    let [x_min, x_max] = bounds[0];
    let nx = cells[0];
    let ghost_x = if nx == 1 { 0 } else { ghost };
    let total = (0..nx).fold(T::zero(), |acc, n| acc + ratio.powi(n as i32));
    let first = (x_max - x_min) / total;

    let mut faces = Vec::with_capacity(nx + 2 * ghost_x + 1);
    let mut x = x_min;
    for n in 1..=ghost_x {
        x = x - first * ratio.powi(-(n as i32));
        faces.push(x);
    }
    faces.reverse();
    faces.push(x_min);
    x = x_min;
    for n in 0..nx + ghost_x {
        x = if n + 1 == nx {
            x_max
        } else {
            x + first * ratio.powi(n as i32)
        };
        faces.push(x);
    }

    let mut b = BlockBuilder::new(ghost);
    b.set_faces(Direction::X, &faces);
    for d in [Direction::Y, Direction::Z] {
        let n = d.index();
        b.set_uniform(d, cells[n], bounds[n][0], bounds[n][1]);
    }
    b.create_block()
}
