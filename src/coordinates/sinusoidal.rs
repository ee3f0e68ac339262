//! Sinusoidal coordinates
use super::{source, transform, NormalField};
use crate::{
    block::Block,
    error::{GeometryError, GeometryResult},
    geometry::{GeometryTable, SinusoidalParameters},
    traits::Coordinates,
    types::{slots::NMETRIC, Direction, MetricLocation, RealScalar},
};
use ndarray::{ArrayView4, ArrayViewMut2, ArrayViewMut4};
use std::ops::RangeInclusive;

/// Sinusoidal coordinates on one mesh block
///
/// All geometric tables are built in [`SinusoidalCoordinates::new`] and are
/// read-only afterwards, so a shared reference can be used from any number of
/// threads working on disjoint pencils.
#[derive(Debug, Clone)]
pub struct SinusoidalCoordinates<T: RealScalar> {
    block: Block<T>,
    parameters: SinusoidalParameters<T>,
    table: GeometryTable<T>,
}

impl<T: RealScalar> SinusoidalCoordinates<T> {
    /// Build the geometry of a block
    pub fn new(block: Block<T>, parameters: SinusoidalParameters<T>) -> GeometryResult<Self> {
        parameters
            .validate()
            .inspect_err(|e| log::warn!("coordinates rejected: {e}"))?;
        let table = GeometryTable::new(block.axis(Direction::X), &parameters);
        Ok(Self {
            block,
            parameters,
            table,
        })
    }

    /// Shear parameters
    pub fn parameters(&self) -> &SinusoidalParameters<T> {
        &self.parameters
    }

    /// Precomputed geometry along x
    pub fn table(&self) -> &GeometryTable<T> {
        &self.table
    }

    fn check_cells(&self, range: &RangeInclusive<usize>, len: usize) {
        assert!(
            *range.end() < len,
            "index range {range:?} is outside a row of {len} entries"
        );
    }

    fn widths(&self, direction: Direction) -> &[T] {
        self.block.axis(direction).widths()
    }
}

impl<T: RealScalar> Coordinates for SinusoidalCoordinates<T> {
    type T = T;

    fn block(&self) -> &Block<T> {
        &self.block
    }

    fn cell_volume(&self, k: usize, j: usize, range: RangeInclusive<usize>, volumes: &mut [T]) {
        self.check_cells(&range, self.table.cell_count());
        let dy = self.widths(Direction::Y)[j];
        let dz = self.widths(Direction::Z)[k];
        let dx = self.widths(Direction::X);
        for i in range {
            volumes[i] = dx[i] * dy * dz;
        }
    }

    fn face_area(
        &self,
        direction: Direction,
        k: usize,
        j: usize,
        range: RangeInclusive<usize>,
        areas: &mut [T],
    ) {
        self.check_cells(&range, self.table.face_count(direction));
        let dx = self.widths(Direction::X);
        let dy = self.widths(Direction::Y)[j];
        let dz = self.widths(Direction::Z)[k];
        for i in range {
            areas[i] = match direction {
                Direction::X => dy * dz,
                Direction::Y => dx[i] * dz,
                Direction::Z => dx[i] * dy,
            };
        }
    }

    fn edge_length(
        &self,
        direction: Direction,
        k: usize,
        j: usize,
        range: RangeInclusive<usize>,
        lengths: &mut [T],
    ) {
        // y- and z-edges sit on x-faces
        let len = match direction {
            Direction::X => self.table.cell_count(),
            Direction::Y | Direction::Z => self.table.face_count(Direction::X),
        };
        self.check_cells(&range, len);
        let dx = self.widths(Direction::X);
        let dy = self.widths(Direction::Y)[j];
        let dz = self.widths(Direction::Z)[k];
        for i in range {
            lengths[i] = match direction {
                Direction::X => dx[i],
                Direction::Y => dy,
                Direction::Z => dz,
            };
        }
    }

    fn center_width(&self, direction: Direction, k: usize, j: usize, i: usize) -> T {
        match direction {
            Direction::X => self.table.width(i),
            Direction::Y => self.widths(Direction::Y)[j],
            Direction::Z => self.widths(Direction::Z)[k],
        }
    }

    fn metric_range(&self, location: MetricLocation) -> RangeInclusive<usize> {
        let active = self.block.active_range(Direction::X);
        match location {
            MetricLocation::Cell => 0..=self.table.cell_count() - 1,
            MetricLocation::Face(Direction::X) => *active.start()..=*active.end() + 1,
            MetricLocation::Face(_) => active,
        }
    }

    fn metric(
        &self,
        location: MetricLocation,
        _k: usize,
        _j: usize,
        range: RangeInclusive<usize>,
        mut g: ArrayViewMut2<'_, T>,
        mut g_inv: ArrayViewMut2<'_, T>,
    ) -> GeometryResult<()> {
        let len = match location {
            MetricLocation::Cell => self.table.cell_count(),
            MetricLocation::Face(direction) => self.table.face_count(direction),
        };
        self.check_cells(&range, len);
        for (buffer, shape) in [
            ("metric", g.shape().to_vec()),
            ("inverse metric", g_inv.shape().to_vec()),
        ] {
            if shape[0] != NMETRIC || shape[1] <= *range.end() {
                return Err(GeometryError::ShapeMismatch {
                    buffer,
                    expected: vec![NMETRIC, *range.end() + 1],
                    found: shape,
                });
            }
        }

        for i in range {
            let metric = match location {
                MetricLocation::Cell => self.table.cell(i),
                MetricLocation::Face(direction) => self.table.face(direction, i),
            }
            .metric();
            for (c, (value, inverse)) in metric
                .components()
                .into_iter()
                .zip(metric.inverse_components())
                .enumerate()
            {
                g[[c, i]] = value;
                g_inv[[c, i]] = inverse;
            }
        }
        Ok(())
    }

    fn prim_to_local(
        &self,
        direction: Direction,
        k: usize,
        j: usize,
        range: RangeInclusive<usize>,
        left: ArrayViewMut2<'_, T>,
        right: ArrayViewMut2<'_, T>,
        field: Option<NormalField<'_, T>>,
    ) -> GeometryResult<()> {
        transform::prim_to_local(&self.table, direction, k, j, range, left, right, field)
    }

    fn flux_to_global(
        &self,
        direction: Direction,
        k: usize,
        j: usize,
        range: RangeInclusive<usize>,
        flux: ArrayViewMut2<'_, T>,
        magnetic: bool,
    ) -> GeometryResult<()> {
        transform::flux_to_global(&self.table, direction, k, j, range, flux, magnetic)
    }

    fn add_source_terms(
        &self,
        dt: T,
        gamma: T,
        prim: ArrayView4<'_, T>,
        cons: ArrayViewMut4<'_, T>,
    ) -> GeometryResult<()> {
        source::add_source_terms(&self.table, &self.block, dt, gamma, prim, cons)
    }

    fn distance_between_points(&self, a: [T; 3], b: [T; 3]) -> T {
        self.parameters.distance_between_points(a, b)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        shapes::{stretched_block, uniform_block},
        types::slots::{I11, I12, I22, IBY, IBZ, IDN, IEN, IM1, IM2, IM3, IPR, IVX, IVY, IVZ, NHYDRO, NWAVE},
    };
    use approx::assert_relative_eq;
    use ndarray::{Array1, Array2, Array4};

    fn coordinates(amplitude: f64, wavenumber: f64) -> SinusoidalCoordinates<f64> {
        let block = stretched_block(
            [8, 4, 3],
            2,
            [[0.0, 20.0], [-1.0, 1.0], [0.0, 3.0]],
            1.1,
        )
        .unwrap();
        SinusoidalCoordinates::new(block, SinusoidalParameters::new(amplitude, wavenumber).unwrap())
            .unwrap()
    }

    fn primitives(c: &SinusoidalCoordinates<f64>) -> Array4<f64> {
        let [nk, nj, ni] = c.block().volume_shape();
        Array4::from_shape_fn((NHYDRO, nk, nj, ni), |(n, k, j, i)| {
            let x = (i + 2 * j + 3 * k) as f64;
            match n {
                IDN => 1.0 + 0.1 * x,
                IPR => 0.5 + 0.01 * x,
                IVX => 0.2 * (0.3 * x).sin(),
                IVY => 0.1 * (0.2 * x).cos(),
                _ => -0.05,
            }
        })
    }

    #[test]
    fn test_measures_are_positive() {
        let c = coordinates(10.0, 0.1);
        let n = c.block().cell_count(Direction::X);
        let mut buffer = vec![0.0; n + 1];
        for k in 0..c.block().cell_count(Direction::Z) {
            for j in 0..c.block().cell_count(Direction::Y) {
                c.cell_volume(k, j, 0..=n - 1, &mut buffer);
                assert!(buffer[..n].iter().all(|v| *v > 0.0));
                for d in Direction::ALL {
                    c.face_area(d, k, j, 0..=n - 1, &mut buffer);
                    assert!(buffer[..n].iter().all(|v| *v > 0.0));
                    c.edge_length(d, k, j, 0..=n - 1, &mut buffer);
                    assert!(buffer[..n].iter().all(|v| *v > 0.0));
                }
            }
        }
    }

    #[test]
    fn test_volume_is_coordinate_volume() {
        let c = coordinates(10.0, 0.1);
        let block = c.block();
        let mut volumes = vec![0.0; block.cell_count(Direction::X)];
        c.cell_volume(3, 2, 2..=9, &mut volumes);
        for i in 2..=9 {
            let expected = block.axis(Direction::X).width(i)
                * block.axis(Direction::Y).width(2)
                * block.axis(Direction::Z).width(3);
            assert_relative_eq!(volumes[i], expected, epsilon = 1e-14);
            assert!(c.center_width(Direction::X, 3, 2, i) > block.axis(Direction::X).width(i));
        }
        assert_eq!(volumes[0], 0.0);
        assert_eq!(c.center_width(Direction::Y, 3, 2, 5), block.axis(Direction::Y).width(2));
    }

    #[test]
    #[should_panic]
    fn test_range_outside_block() {
        let c = coordinates(10.0, 0.1);
        let mut volumes = vec![0.0; 64];
        c.cell_volume(0, 0, 0..=12, &mut volumes);
    }

    #[test]
    fn test_metric_times_inverse_is_identity() {
        for amplitude in [0.0, 10.0] {
            let c = coordinates(amplitude, 0.1);
            let n = c.block().cell_count(Direction::X) + 1;
            let mut locations = vec![MetricLocation::Cell];
            locations.extend(Direction::ALL.map(MetricLocation::Face));
            for location in locations {
                let mut g = Array2::zeros((NMETRIC, n));
                let mut gi = Array2::zeros((NMETRIC, n));
                let range = c.metric_range(location);
                c.metric(location, 0, 0, range.clone(), g.view_mut(), gi.view_mut())
                    .unwrap();
                for i in range {
                    assert!(g[[I11, i]] >= 1.0);
                    // spatial block [[g11, g12], [g12, g22]] times its inverse
                    assert_relative_eq!(g[[I11, i]] * gi[[I11, i]] + g[[I12, i]] * gi[[I12, i]], 1.0, epsilon = 1e-13);
                    assert_relative_eq!(g[[I11, i]] * gi[[I12, i]] + g[[I12, i]] * gi[[I22, i]], 0.0, epsilon = 1e-13);
                    assert_relative_eq!(g[[I12, i]] * gi[[I12, i]] + g[[I22, i]] * gi[[I22, i]], 1.0, epsilon = 1e-13);
                    assert_eq!(g[[0, i]], -1.0);
                    assert_eq!(gi[[0, i]], -1.0);
                    if amplitude == 0.0 {
                        assert_eq!(g[[I12, i]], 0.0);
                    }
                }
            }
        }
    }

    #[test]
    fn test_metric_ranges() {
        let c = coordinates(1.0, 1.0);
        assert_eq!(c.metric_range(MetricLocation::Cell), 0..=11);
        assert_eq!(c.metric_range(MetricLocation::Face(Direction::X)), 2..=10);
        assert_eq!(c.metric_range(MetricLocation::Face(Direction::Y)), 2..=9);
    }

    #[test]
    fn test_metric_buffer_shape() {
        let c = coordinates(1.0, 1.0);
        let mut g = Array2::zeros((4, 20));
        let mut gi = Array2::zeros((NMETRIC, 20));
        let e = c
            .cell_metric(0, 0, 0..=11, g.view_mut(), gi.view_mut())
            .unwrap_err();
        assert!(matches!(e, GeometryError::ShapeMismatch { buffer: "metric", .. }));

        let mut g = Array2::zeros((NMETRIC, 11));
        let mut gi = Array2::zeros((NMETRIC, 10));
        let e = c
            .face_metric(Direction::X, 0, 0, 2..=10, g.view_mut(), gi.view_mut())
            .unwrap_err();
        assert!(matches!(
            e,
            GeometryError::ShapeMismatch { buffer: "inverse metric", ref found, .. } if *found == [NMETRIC, 10]
        ));

        let mut gi = Array2::zeros((NMETRIC, 11));
        c.face_metric(Direction::X, 0, 0, 2..=10, g.view_mut(), gi.view_mut())
            .unwrap();
        assert_relative_eq!(gi[[I22, 10]], g[[I11, 10]]);
    }

    #[test]
    fn test_transverse_edges_on_x_faces() {
        let block = uniform_block([4, 2, 1], 0, [[0.0, 1.0], [0.0, 1.0], [0.0, 3.0]]).unwrap();
        let c = SinusoidalCoordinates::new(block, SinusoidalParameters::default()).unwrap();
        let faces = c.metric_range(MetricLocation::Face(Direction::X));
        assert_eq!(faces, 0..=4);
        let mut lengths = vec![0.0; 5];
        c.edge_length(Direction::Y, 0, 1, faces.clone(), &mut lengths);
        assert!(lengths.iter().all(|l| *l == 0.5));
        c.edge_length(Direction::Z, 0, 1, faces, &mut lengths);
        assert!(lengths.iter().all(|l| *l == 3.0));
    }

    #[test]
    #[should_panic]
    fn test_x_edges_stop_at_last_cell() {
        let block = uniform_block([4, 2, 1], 0, [[0.0, 1.0], [0.0, 1.0], [0.0, 3.0]]).unwrap();
        let c = SinusoidalCoordinates::new(block, SinusoidalParameters::default()).unwrap();
        let mut lengths = vec![0.0; 5];
        c.edge_length(Direction::X, 0, 0, 0..=4, &mut lengths);
    }

    #[test]
    fn test_flat_source_terms_vanish() {
        let c = coordinates(0.0, 0.1);
        let prim = primitives(&c);
        let mut cons = Array4::from_elem(prim.raw_dim(), 2.5);
        c.add_source_terms(0.1, 5.0 / 3.0, prim.view(), cons.view_mut())
            .unwrap();
        assert!(cons.iter().all(|v| *v == 2.5));
    }

    #[test]
    fn test_source_terms() {
        let c = coordinates(10.0, 0.1);
        let prim = primitives(&c);
        let mut cons = Array4::zeros(prim.raw_dim());
        let gamma = 4.0 / 3.0;
        let dt = 0.01;
        c.add_source_terms(dt, gamma, prim.view(), cons.view_mut())
            .unwrap();

        let block = c.block();
        let [nk, nj, ni] = block.volume_shape();
        for k in 0..nk {
            for j in 0..nj {
                for i in 0..ni {
                    let active = block.active_range(Direction::Z).contains(&k)
                        && block.active_range(Direction::Y).contains(&j)
                        && block.active_range(Direction::X).contains(&i);
                    for n in [IDN, IM2, IM3, IEN] {
                        assert_eq!(cons[[n, k, j, i]], 0.0);
                    }
                    if !active {
                        assert_eq!(cons[[IM1, k, j, i]], 0.0);
                        continue;
                    }
                    let m = c.table().cell(i);
                    let (rho, p) = (prim[[IDN, k, j, i]], prim[[IPR, k, j, i]]);
                    let v = [prim[[IVX, k, j, i]], prim[[IVY, k, j, i]], prim[[IVZ, k, j, i]]];
                    let u0 = 1.0
                        / (1.0 - m.alpha_sq * v[0] * v[0] + 2.0 * m.beta * v[0] * v[1]
                            - v[1] * v[1]
                            - v[2] * v[2])
                            .sqrt();
                    let u_2 = -m.beta * u0 * v[0] + u0 * v[1];
                    let expected = dt
                        * c.table().source(i)
                        * (rho + gamma / (gamma - 1.0) * p)
                        * u0
                        * v[0]
                        * u_2;
                    assert_relative_eq!(cons[[IM1, k, j, i]], expected, epsilon = 1e-14);
                }
            }
        }
    }

    #[test]
    fn test_source_terms_reject_invalid_input() {
        let c = coordinates(10.0, 0.1);
        let mut prim = primitives(&c);
        let mut cons = Array4::zeros(prim.raw_dim());
        assert!(matches!(
            c.add_source_terms(0.1, 1.0, prim.view(), cons.view_mut()),
            Err(GeometryError::InvalidAdiabaticIndex(_))
        ));

        prim[[IVX, 2, 3, 4]] = 1.5;
        assert!(matches!(
            c.add_source_terms(0.1, 5.0 / 3.0, prim.view(), cons.view_mut()),
            Err(GeometryError::InvalidLocalState { index: [2, 3, 4], .. })
        ));

        let mut small = Array4::zeros((NHYDRO, 1, 1, 1));
        assert!(matches!(
            c.add_source_terms(0.1, 5.0 / 3.0, prim.view(), small.view_mut()),
            Err(GeometryError::ShapeMismatch { .. })
        ));
    }

    #[test]
    fn test_flat_transforms_keep_slots() {
        //! Local components are stored in the slots of the matching global axes
        let c = coordinates(0.0, 0.1);
        let n = c.block().cell_count(Direction::X) + 1;
        let range = c.metric_range(MetricLocation::Face(Direction::Y));
        let mut left = Array2::from_shape_fn((NWAVE, n), |(v, i)| 0.01 * (v + i) as f64);
        let mut right = left.mapv(|v| -v);
        let original = left.clone();
        let global = Array1::from_elem(n, 0.3);
        let mut local = Array1::zeros(n);
        c.prim_to_local(
            Direction::Y,
            0,
            0,
            range.clone(),
            left.view_mut(),
            right.view_mut(),
            Some(NormalField::new(global.view(), local.view_mut())),
        )
        .unwrap();
        for i in range {
            for v in [IDN, IVX, IVY, IVZ, IPR, IBY, IBZ] {
                assert_relative_eq!(left[[v, i]], original[[v, i]], epsilon = 1e-14);
                assert_relative_eq!(right[[v, i]], -original[[v, i]], epsilon = 1e-14);
            }
            assert_relative_eq!(local[i], 0.3, epsilon = 1e-14);
        }
    }

    #[test]
    fn test_transform_reports_invalid_state() {
        let c = coordinates(10.0, 0.1);
        let n = c.block().cell_count(Direction::X) + 1;
        let mut left = Array2::zeros((NHYDRO, n));
        let mut right = Array2::zeros((NHYDRO, n));
        right[[IVX, 5]] = 0.99;
        let e = c
            .prim_to_local(Direction::X, 1, 2, 2..=10, left.view_mut(), right.view_mut(), None)
            .unwrap_err();
        assert!(matches!(e, GeometryError::InvalidLocalState { index: [1, 2, 5], .. }));
        assert_eq!(right[[IVX, 5]], 0.99);
    }

    #[test]
    fn test_magnetic_pencil_needs_field_slots() {
        let c = coordinates(10.0, 0.1);
        let n = c.block().cell_count(Direction::X) + 1;
        let mut flux = Array2::zeros((NHYDRO, n));
        assert!(matches!(
            c.flux_to_global(Direction::Z, 0, 0, 2..=9, flux.view_mut(), true),
            Err(GeometryError::ShapeMismatch { .. })
        ));
        assert!(c
            .flux_to_global(Direction::Z, 0, 0, 2..=9, flux.view_mut(), false)
            .is_ok());
    }

    #[test]
    fn test_uniform_block_coordinates() {
        let block = uniform_block([16, 1, 1], 2, [[0.0, 1.0], [0.0, 1.0], [0.0, 1.0]]).unwrap();
        let c = SinusoidalCoordinates::new(block, SinusoidalParameters::default()).unwrap();
        assert_relative_eq!(
            c.distance_between_points([1.0, 0.5 + 10.0 * (0.1f64).sin(), 2.0], [1.0, 0.5, 2.0]),
            0.0,
            epsilon = 1e-14
        );
    }
}
