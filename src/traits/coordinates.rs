//! Coordinate geometry consumed by the solver and the output layers
use crate::{
    block::Block,
    coordinates::NormalField,
    error::GeometryResult,
    types::{Direction, MetricLocation, RealScalar},
};
use ndarray::{ArrayView4, ArrayViewMut2, ArrayViewMut4};
use std::ops::RangeInclusive;

/// Geometry of a coordinate system on one mesh block
///
/// Row accessors take the `(k, j)` indices of a pencil along x and an x-index
/// range, and write entry `i` of the output for every `i` in the range. A range
/// that reaches outside the block panics.
pub trait Coordinates {
    /// Scalar type
    type T: RealScalar;

    /// The block this geometry was built on
    fn block(&self) -> &Block<Self::T>;

    /// Coordinate volumes `dx dy dz`
    fn cell_volume(
        &self,
        k: usize,
        j: usize,
        range: RangeInclusive<usize>,
        volumes: &mut [Self::T],
    );

    /// Coordinate areas of faces of the given orientation
    fn face_area(
        &self,
        direction: Direction,
        k: usize,
        j: usize,
        range: RangeInclusive<usize>,
        areas: &mut [Self::T],
    );

    /// Coordinate lengths of edges along the given direction
    fn edge_length(
        &self,
        direction: Direction,
        k: usize,
        j: usize,
        range: RangeInclusive<usize>,
        lengths: &mut [Self::T],
    );

    /// Physical width of cell `(k, j, i)` along the given direction
    fn center_width(&self, direction: Direction, k: usize, j: usize, i: usize) -> Self::T;

    /// The x-index range the solver samples the metric over
    fn metric_range(&self, location: MetricLocation) -> RangeInclusive<usize>;

    /// Metric and inverse metric, shape `[5, n]`
    fn metric(
        &self,
        location: MetricLocation,
        k: usize,
        j: usize,
        range: RangeInclusive<usize>,
        g: ArrayViewMut2<'_, Self::T>,
        g_inv: ArrayViewMut2<'_, Self::T>,
    ) -> GeometryResult<()>;

    /// Cell-centred metric and inverse metric
    fn cell_metric(
        &self,
        k: usize,
        j: usize,
        range: RangeInclusive<usize>,
        g: ArrayViewMut2<'_, Self::T>,
        g_inv: ArrayViewMut2<'_, Self::T>,
    ) -> GeometryResult<()> {
        self.metric(MetricLocation::Cell, k, j, range, g, g_inv)
    }

    /// Face-centred metric and inverse metric for faces of the given orientation
    fn face_metric(
        &self,
        direction: Direction,
        k: usize,
        j: usize,
        range: RangeInclusive<usize>,
        g: ArrayViewMut2<'_, Self::T>,
        g_inv: ArrayViewMut2<'_, Self::T>,
    ) -> GeometryResult<()> {
        self.metric(MetricLocation::Face(direction), k, j, range, g, g_inv)
    }

    /// Rewrite reconstructed primitive states at faces of the given orientation in the local frame
    ///
    /// `left` and `right` have shape `[nvar, n]`. Magnetic fields are
    /// transformed when `field` is supplied.
    #[allow(clippy::too_many_arguments)]
    fn prim_to_local(
        &self,
        direction: Direction,
        k: usize,
        j: usize,
        range: RangeInclusive<usize>,
        left: ArrayViewMut2<'_, Self::T>,
        right: ArrayViewMut2<'_, Self::T>,
        field: Option<NormalField<'_, Self::T>>,
    ) -> GeometryResult<()>;

    /// Rewrite local-frame fluxes through faces of the given orientation as global fluxes
    ///
    /// Magnetic fluxes are transformed when `magnetic` is set.
    fn flux_to_global(
        &self,
        direction: Direction,
        k: usize,
        j: usize,
        range: RangeInclusive<usize>,
        flux: ArrayViewMut2<'_, Self::T>,
        magnetic: bool,
    ) -> GeometryResult<()>;

    /// Add `dt` times the geometric source terms to the conserved variables of every active cell
    ///
    /// `prim` and `cons` have shape `[nvar, nk, nj, ni]` covering the padded block.
    fn add_source_terms(
        &self,
        dt: Self::T,
        gamma: Self::T,
        prim: ArrayView4<'_, Self::T>,
        cons: ArrayViewMut4<'_, Self::T>,
    ) -> GeometryResult<()>;

    /// Euclidean distance between a point in these coordinates and a point in Cartesian coordinates
    fn distance_between_points(&self, a: [Self::T; 3], b: [Self::T; 3]) -> Self::T;
}
