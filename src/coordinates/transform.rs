//! Transforms between the global frame and the local frame at a face
//!
//! One implementation serves all three face orientations. The orientation only
//! selects the [`Frame`] and the cyclic permutation of variable slots: at a
//! face of orientation `N`, local component `a` is stored in the slot of
//! global axis `N + a`.
use crate::{
    coordinates::NormalField,
    error::{GeometryError, GeometryResult},
    geometry::{Frame, GeometryTable, Metric},
    types::{
        slots::{IBY, IBZ, IDN, IEN, IM1, IVX, NHYDRO, NWAVE},
        Direction, RealScalar,
    },
};
use ndarray::{ArrayBase, ArrayViewMut2, Data, Ix1};
use std::ops::RangeInclusive;

/// A primitive state in a local frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct LocalState<T: RealScalar> {
    /// Local 3-velocity, x normal to the face
    pub velocity: [T; 3],
    /// Local magnetic field, x normal to the face
    pub field: Option<[T; 3]>,
}

/// Contravariant 4-velocity `(u^0, [u^1, u^2, u^3])` of a global 3-velocity
///
/// Fails with the normalisation value when it is not positive.
pub(crate) fn four_velocity<T: RealScalar>(metric: &Metric<T>, v: [T; 3]) -> Result<(T, [T; 3]), T> {
    let radicand = metric.normalisation(v);
    if !(radicand > T::zero()) {
        return Err(radicand);
    }
    let u0 = T::one() / radicand.sqrt();
    Ok((u0, v.map(|c| u0 * c)))
}

/// Express a global velocity and (optionally) magnetic field in the local frame
pub(crate) fn state_to_local<T: RealScalar>(
    metric: &Metric<T>,
    frame: &Frame<T>,
    velocity: [T; 3],
    field: Option<[T; 3]>,
) -> Result<LocalState<T>, T> {
    let (u0, u) = four_velocity(metric, velocity)?;
    let u_local = frame.to_local(u);
    let field = field.map(|b| {
        let u_lower = metric.lower(u);
        let b0 = b[0] * u_lower[0] + b[1] * u_lower[1] + b[2] * u_lower[2];
        let b_con = [0, 1, 2].map(|i| (b[i] + b0 * u[i]) / u0);
        let b_local = frame.to_local(b_con);
        [0, 1, 2].map(|a| u0 * b_local[a] - u_local[a] * b0)
    });
    Ok(LocalState {
        velocity: u_local.map(|c| c / u0),
        field,
    })
}

fn check_pencil<T>(
    buffer: &'static str,
    view: &ArrayViewMut2<'_, T>,
    rows: usize,
    end: usize,
) -> GeometryResult<()> {
    let shape = view.shape();
    if shape[0] < rows || shape[1] <= end {
        return Err(GeometryError::ShapeMismatch {
            buffer,
            expected: vec![rows, end + 1],
            found: shape.to_vec(),
        });
    }
    Ok(())
}

fn check_row<T, S: Data<Elem = T>>(
    buffer: &'static str,
    row: &ArrayBase<S, Ix1>,
    end: usize,
) -> GeometryResult<()> {
    if row.len() <= end {
        return Err(GeometryError::ShapeMismatch {
            buffer,
            expected: vec![end + 1],
            found: vec![row.len()],
        });
    }
    Ok(())
}

fn check_range<T: RealScalar>(
    table: &GeometryTable<T>,
    direction: Direction,
    range: &RangeInclusive<usize>,
) {
    assert!(
        *range.end() < table.face_count(direction),
        "{direction}-face range {range:?} is outside the table of {} faces",
        table.face_count(direction)
    );
}

/// Read the global velocity and transverse field from a pencil
fn read_state<T: RealScalar>(
    pencil: &ArrayViewMut2<'_, T>,
    direction: Direction,
    i: usize,
    normal: Option<T>,
) -> ([T; 3], Option<[T; 3]>) {
    let velocity = [0, 1, 2].map(|n| pencil[[IVX + n, i]]);
    let field = normal.map(|bn| {
        let mut b = [T::zero(); 3];
        b[direction.global_axis(0)] = bn;
        b[direction.global_axis(1)] = pencil[[IBY, i]];
        b[direction.global_axis(2)] = pencil[[IBZ, i]];
        b
    });
    (velocity, field)
}

/// Write a local state into the permuted slots of a pencil
fn write_state<T: RealScalar>(
    pencil: &mut ArrayViewMut2<'_, T>,
    direction: Direction,
    i: usize,
    state: &LocalState<T>,
) {
    for a in 0..3 {
        pencil[[IVX + direction.global_axis(a), i]] = state.velocity[a];
    }
    if let Some(b) = state.field {
        pencil[[IBY, i]] = b[1];
        pencil[[IBZ, i]] = b[2];
    }
}

/// Forward transform of the left and right states over a range of faces
#[allow(clippy::too_many_arguments)]
pub(crate) fn prim_to_local<T: RealScalar>(
    table: &GeometryTable<T>,
    direction: Direction,
    k: usize,
    j: usize,
    range: RangeInclusive<usize>,
    mut left: ArrayViewMut2<'_, T>,
    mut right: ArrayViewMut2<'_, T>,
    field: Option<NormalField<'_, T>>,
) -> GeometryResult<()> {
    check_range(table, direction, &range);
    let rows = if field.is_some() { NWAVE } else { NHYDRO };
    check_pencil("left primitives", &left, rows, *range.end())?;
    check_pencil("right primitives", &right, rows, *range.end())?;
    let mut field = field;
    if let Some(f) = &field {
        check_row("global normal field", &f.global, *range.end())?;
        check_row("local normal field", &f.local, *range.end())?;
    }
    log::trace!("prim_to_local: {direction}-faces k = {k}, j = {j}, i in {range:?}");

    for i in range {
        let metric = table.face(direction, i).metric();
        let frame = table.frame(direction, i);
        let normal = field.as_ref().map(|f| f.global[i]);
        let invalid = |radicand: T| GeometryError::InvalidLocalState {
            index: [k, j, i],
            radicand: radicand.to_f64().unwrap_or(f64::NAN),
        };

        let (v_l, b_l) = read_state(&left, direction, i, normal);
        let (v_r, b_r) = read_state(&right, direction, i, normal);
        let state_l = state_to_local(&metric, &frame, v_l, b_l).map_err(invalid)?;
        let state_r = state_to_local(&metric, &frame, v_r, b_r).map_err(invalid)?;

        write_state(&mut left, direction, i, &state_l);
        write_state(&mut right, direction, i, &state_r);
        if let (Some(f), Some(bl), Some(br)) = (field.as_mut(), state_l.field, state_r.field) {
            f.local[i] = T::from(0.5).unwrap() * (bl[0] + br[0]);
        }
    }
    Ok(())
}

/// Inverse transform of local fluxes over a range of faces
///
/// The local flux vector holds the density flux, `T^xt` in the energy slot and
/// `T^xa` in the permuted momentum slots. The global flux holds `T^N_mu`, the
/// stress-energy tensor with its second index lowered by the face metric.
pub(crate) fn flux_to_global<T: RealScalar>(
    table: &GeometryTable<T>,
    direction: Direction,
    k: usize,
    j: usize,
    range: RangeInclusive<usize>,
    mut flux: ArrayViewMut2<'_, T>,
    magnetic: bool,
) -> GeometryResult<()> {
    check_range(table, direction, &range);
    let rows = if magnetic { NWAVE } else { NHYDRO };
    check_pencil("fluxes", &flux, rows, *range.end())?;
    log::trace!("flux_to_global: {direction}-faces k = {k}, j = {j}, i in {range:?}");

    for i in range {
        let metric = table.face(direction, i).metric();
        let frame = table.frame(direction, i);
        let scale = frame.normal_scale();

        let local = [0, 1, 2].map(|a| flux[[IM1 + direction.global_axis(a), i]]);
        let t_con = frame.to_global(local).map(|c| scale * c);
        let t_time = scale * flux[[IEN, i]];
        let t_lower = metric.lower(t_con);

        flux[[IDN, i]] = scale * flux[[IDN, i]];
        flux[[IEN, i]] = metric.g00() * t_time;
        for (n, t) in t_lower.iter().enumerate() {
            flux[[IM1 + n, i]] = *t;
        }

        if magnetic {
            let f = frame
                .to_global([T::zero(), flux[[IBY, i]], flux[[IBZ, i]]])
                .map(|c| scale * c);
            flux[[IBY, i]] = f[direction.global_axis(1)];
            flux[[IBZ, i]] = f[direction.global_axis(2)];
        }
    }
    Ok(())
}
