//! Precomputed per-index geometry along the distorted axis
use super::{Frame, FrameCoefficients, MetricCoefficients, SinusoidalParameters};
use crate::{
    block::Axis,
    types::{Direction, RealScalar},
};
use itertools::izip;

/// Geometry table indexed along x
///
/// Cell quantities are stored for every padded cell. x-face quantities are
/// stored for every x-face (one more than the number of cells); y- and z-faces
/// sit at the x-centre of their cell and reuse the cell-centred values.
#[derive(Debug, Clone)]
pub struct GeometryTable<T: RealScalar> {
    widths: Vec<T>,
    source: Vec<T>,
    cell: Vec<MetricCoefficients<T>>,
    x_faces: Vec<MetricCoefficients<T>>,
    x_frames: Vec<FrameCoefficients<T>>,
    center_frames: Vec<FrameCoefficients<T>>,
}

fn coefficients<T: RealScalar>(
    parameters: &SinusoidalParameters<T>,
    x: T,
) -> (MetricCoefficients<T>, FrameCoefficients<T>) {
    let alpha_sq = parameters.alpha_sq(x);
    let beta = parameters.beta(x);
    (
        MetricCoefficients { alpha_sq, beta },
        FrameCoefficients {
            alpha: alpha_sq.sqrt(),
            beta,
        },
    )
}

impl<T: RealScalar> GeometryTable<T> {
    /// Build the table from the x-axis faces
    pub fn new(axis: &Axis<T>, parameters: &SinusoidalParameters<T>) -> Self {
        debug_assert!(axis.direction() == Direction::X);
        let n = axis.cell_count();
        let mut widths = Vec::with_capacity(n);
        let mut source = Vec::with_capacity(n);
        let mut cell = Vec::with_capacity(n);
        let mut center_frames = Vec::with_capacity(n);

        for (f, &x_c) in izip!(axis.faces().windows(2), axis.centers()) {
            let (x_m, x_p) = (f[0], f[1]);
            widths.push(parameters.physical_width(x_m, x_p));
            source.push(parameters.source_coefficient(x_m, x_p));
            let (metric, frame) = coefficients(parameters, x_c);
            cell.push(metric);
            center_frames.push(frame);
        }

        let (x_faces, x_frames) = axis
            .faces()
            .iter()
            .map(|&x| coefficients(parameters, x))
            .unzip();

        log::debug!(
            "built sinusoidal geometry table for {n} cells (a = {}, k = {})",
            parameters.amplitude(),
            parameters.wavenumber()
        );

        Self {
            widths,
            source,
            cell,
            x_faces,
            x_frames,
            center_frames,
        }
    }

    /// Number of cells in the table
    pub fn cell_count(&self) -> usize {
        self.cell.len()
    }

    /// Number of faces of the given orientation stored per x-index range
    pub fn face_count(&self, direction: Direction) -> usize {
        match direction {
            Direction::X => self.x_faces.len(),
            Direction::Y | Direction::Z => self.cell.len(),
        }
    }

    /// Physical width of cell `i` along x
    pub fn width(&self, i: usize) -> T {
        self.widths[i]
    }

    /// Source coefficient of cell `i`
    pub fn source(&self, i: usize) -> T {
        self.source[i]
    }

    /// Metric coefficients at the centre of cell `i`
    pub fn cell(&self, i: usize) -> MetricCoefficients<T> {
        self.cell[i]
    }

    /// Metric coefficients at face `i` of the given orientation
    pub fn face(&self, direction: Direction, i: usize) -> MetricCoefficients<T> {
        match direction {
            Direction::X => self.x_faces[i],
            Direction::Y | Direction::Z => self.cell[i],
        }
    }

    /// Frame coefficients at face `i` of the given orientation
    pub fn frame_coefficients(&self, direction: Direction, i: usize) -> FrameCoefficients<T> {
        match direction {
            Direction::X => self.x_frames[i],
            Direction::Y | Direction::Z => self.center_frames[i],
        }
    }

    /// Local frame at face `i` of the given orientation
    pub fn frame(&self, direction: Direction, i: usize) -> Frame<T> {
        Frame::new(direction, self.frame_coefficients(direction, i))
    }
}
