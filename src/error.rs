//! Errors

use crate::types::Direction;
use thiserror::Error;

/// Result type for geometry operations
pub type GeometryResult<T> = Result<T, GeometryError>;

/// Errors raised while building or using the coordinate geometry
#[derive(Error, Debug)]
pub enum GeometryError {
    /// An axis needs at least one cell
    #[error("{direction} axis has {count} face positions, at least 2 are required")]
    TooFewFaces {
        /// Axis
        direction: Direction,
        /// Number of faces supplied
        count: usize,
    },

    /// A face position is NaN or infinite
    #[error("{direction} face {index} is not finite: {value}")]
    NonFiniteFace {
        /// Axis
        direction: Direction,
        /// Face index
        index: usize,
        /// Offending value
        value: f64,
    },

    /// Face positions must be strictly increasing
    #[error("{direction} faces are not strictly increasing at face {index}: {lower} >= {upper}")]
    NonMonotonicFaces {
        /// Axis
        direction: Direction,
        /// Index of the upper face of the offending pair
        index: usize,
        /// Lower face position
        lower: f64,
        /// Upper face position
        upper: f64,
    },

    /// Ghost layers leave no active cells, or are requested on a collapsed axis
    #[error("{direction} axis with {cells} cells cannot carry {ghost} ghost layers")]
    InvalidGhostWidth {
        /// Axis
        direction: Direction,
        /// Number of cells including ghosts
        cells: usize,
        /// Requested ghost width
        ghost: usize,
    },

    /// An axis was supplied in the slot of another direction
    #[error("the {found} axis was supplied as the {expected} axis")]
    MisplacedAxis {
        /// Direction of the slot
        expected: Direction,
        /// Direction of the axis supplied
        found: Direction,
    },

    /// A direction was never given faces
    #[error("no faces were supplied for the {0} axis")]
    MissingAxis(Direction),

    /// Shear parameters must be finite
    #[error("invalid shear parameters: amplitude {amplitude}, wavenumber {wavenumber}")]
    InvalidParameters {
        /// Shear amplitude
        amplitude: f64,
        /// Shear wavenumber
        wavenumber: f64,
    },

    /// The adiabatic index must exceed 1
    #[error("adiabatic index must be greater than 1, got {0}")]
    InvalidAdiabaticIndex(f64),

    /// A caller buffer does not have the shape the operation needs
    #[error("{buffer} has shape {found:?}, expected {expected:?}")]
    ShapeMismatch {
        /// Name of the buffer
        buffer: &'static str,
        /// Required shape
        expected: Vec<usize>,
        /// Shape supplied
        found: Vec<usize>,
    },

    /// A velocity whose 4-velocity normalisation is not positive
    #[error("invalid local state at [k, j, i] = {index:?}: normalisation {radicand} is not positive")]
    InvalidLocalState {
        /// Cell or face index
        index: [usize; 3],
        /// Value of `-(g_mu_nu v^mu v^nu)`, must be positive
        radicand: f64,
    },

    /// File access failed
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// RON text could not be parsed
    #[cfg(feature = "serde")]
    #[error("could not parse RON: {0}")]
    RonParse(#[from] ron::error::SpannedError),

    /// RON text could not be written
    #[cfg(feature = "serde")]
    #[error("could not write RON: {0}")]
    RonWrite(#[from] ron::Error),
}

impl GeometryError {
    /// Is this a configuration error (rejected before any table is built)?
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::TooFewFaces { .. }
                | Self::NonFiniteFace { .. }
                | Self::NonMonotonicFaces { .. }
                | Self::InvalidGhostWidth { .. }
                | Self::MisplacedAxis { .. }
                | Self::MissingAxis(_)
                | Self::InvalidParameters { .. }
                | Self::InvalidAdiabaticIndex(_)
        )
    }
}
