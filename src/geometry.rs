//! Closed-form geometry of sinusoidal coordinates
mod frame;
mod metric;
mod parameters;
mod table;

pub use frame::{Frame, FrameCoefficients};
pub use metric::{Metric, MetricCoefficients};
pub use parameters::SinusoidalParameters;
pub use table::GeometryTable;
