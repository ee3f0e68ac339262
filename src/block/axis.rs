//! Face positions along one direction
use crate::{
    error::{GeometryError, GeometryResult},
    types::{Direction, RealScalar},
};

/// Face positions and derived cell data along one direction
///
/// Cell `i` lies between faces `i` and `i + 1`. The first and last `ghost`
/// cells are ghost cells. An axis with a single cell is collapsed: it carries
/// no ghosts and is used for the unused directions of 1D and 2D runs.
#[derive(Debug, Clone)]
pub struct Axis<T: RealScalar> {
    direction: Direction,
    ghost: usize,
    faces: Vec<T>,
    widths: Vec<T>,
    centers: Vec<T>,
    center_spacings: Vec<T>,
}

fn as_f64<T: RealScalar>(value: T) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}

impl<T: RealScalar> Axis<T> {
    /// Create an axis from face positions, including the faces of ghost cells
    pub fn new(direction: Direction, faces: Vec<T>, ghost: usize) -> GeometryResult<Self> {
        if faces.len() < 2 {
            return Err(GeometryError::TooFewFaces {
                direction,
                count: faces.len(),
            });
        }
        if let Some((index, value)) = faces.iter().enumerate().find(|(_, f)| !f.is_finite()) {
            return Err(GeometryError::NonFiniteFace {
                direction,
                index,
                value: as_f64(*value),
            });
        }
        if let Some(index) = (1..faces.len()).find(|&i| faces[i] <= faces[i - 1]) {
            return Err(GeometryError::NonMonotonicFaces {
                direction,
                index,
                lower: as_f64(faces[index - 1]),
                upper: as_f64(faces[index]),
            });
        }
        let cells = faces.len() - 1;
        if (cells == 1 && ghost > 0) || 2 * ghost >= cells {
            return Err(GeometryError::InvalidGhostWidth {
                direction,
                cells,
                ghost,
            });
        }

        let half = T::from(0.5).unwrap();
        let widths = faces.windows(2).map(|f| f[1] - f[0]).collect::<Vec<_>>();
        let centers = faces
            .windows(2)
            .map(|f| half * (f[0] + f[1]))
            .collect::<Vec<_>>();
        let center_spacings = if cells == 1 {
            widths.clone()
        } else {
            centers.windows(2).map(|c| c[1] - c[0]).collect()
        };

        Ok(Self {
            direction,
            ghost,
            faces,
            widths,
            centers,
            center_spacings,
        })
    }

    /// Create an axis of `cells` equal active cells spanning `[min, max]`, padded by `ghost` cells of the same width
    pub fn uniform(
        direction: Direction,
        cells: usize,
        ghost: usize,
        min: T,
        max: T,
    ) -> GeometryResult<Self> {
        if cells == 0 {
            return Err(GeometryError::TooFewFaces {
                direction,
                count: 1,
            });
        }
        let width = (max - min) / T::from(cells).unwrap();
        let faces = (0..cells + 2 * ghost + 1)
            .map(|n| {
                if n == ghost {
                    min
                } else if n == ghost + cells {
                    max
                } else {
                    min + (T::from(n).unwrap() - T::from(ghost).unwrap()) * width
                }
            })
            .collect();
        Self::new(direction, faces, ghost)
    }

    /// The direction of this axis
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Number of ghost layers on each side
    pub fn ghost(&self) -> usize {
        self.ghost
    }

    /// Number of cells, including ghosts
    pub fn cell_count(&self) -> usize {
        self.widths.len()
    }

    /// Number of active cells
    pub fn active_cell_count(&self) -> usize {
        self.cell_count() - 2 * self.ghost
    }

    /// Is this axis a single cell without ghosts?
    pub fn is_collapsed(&self) -> bool {
        self.cell_count() == 1
    }

    /// Index of the first active cell
    pub fn start(&self) -> usize {
        self.ghost
    }

    /// Index of the last active cell
    pub fn end(&self) -> usize {
        self.ghost + self.active_cell_count() - 1
    }

    /// Face positions
    pub fn faces(&self) -> &[T] {
        &self.faces
    }

    /// Position of face `i`
    pub fn face(&self, i: usize) -> T {
        self.faces[i]
    }

    /// Coordinate widths `xf(i + 1) - xf(i)`
    pub fn widths(&self) -> &[T] {
        &self.widths
    }

    /// Coordinate width of cell `i`
    pub fn width(&self, i: usize) -> T {
        self.widths[i]
    }

    /// Volume-centred positions
    pub fn centers(&self) -> &[T] {
        &self.centers
    }

    /// Volume-centred position of cell `i`
    pub fn center(&self, i: usize) -> T {
        self.centers[i]
    }

    /// Distances between neighbouring cell centres
    ///
    /// Entry `i` is `center(i + 1) - center(i)`, so there is one entry fewer than
    /// there are cells, except on a collapsed axis where the single entry is the
    /// cell width.
    pub fn center_spacings(&self) -> &[T] {
        &self.center_spacings
    }

    /// Distance from the centre of cell `i` to the centre of cell `i + 1`
    pub fn center_spacing(&self, i: usize) -> T {
        self.center_spacings[i]
    }
}
