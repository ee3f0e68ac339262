//! Geometric source terms
//!
//! The metric depends on x alone and not on time, so only the x-momentum
//! equation picks up a source: `S_1 = Gamma^2_11 T^1_2` with the connection
//! term discretised as the cell's source coefficient.
use super::transform::four_velocity;
use crate::{
    block::Block,
    error::{GeometryError, GeometryResult},
    geometry::GeometryTable,
    types::{
        slots::{IDN, IM1, IPR, IVX, IVY, IVZ, NHYDRO},
        Direction, RealScalar,
    },
};
use ndarray::{s, ArrayView4, ArrayViewMut4, Axis};
use rayon::prelude::*;

fn check_volume<T: RealScalar>(
    buffer: &'static str,
    shape: &[usize],
    block: &Block<T>,
) -> GeometryResult<()> {
    let [nk, nj, ni] = block.volume_shape();
    if shape.len() != 4 || shape[0] < NHYDRO || shape[1..] != [nk, nj, ni] {
        return Err(GeometryError::ShapeMismatch {
            buffer,
            expected: vec![NHYDRO, nk, nj, ni],
            found: shape.to_vec(),
        });
    }
    Ok(())
}

/// Add `dt` times the source terms to the x-momentum of every active cell
///
/// k-planes are processed in parallel. When a cell holds an invalid state the
/// error for one such cell is returned; planes already processed keep their update.
pub(crate) fn add_source_terms<T: RealScalar>(
    table: &GeometryTable<T>,
    block: &Block<T>,
    dt: T,
    gamma: T,
    prim: ArrayView4<'_, T>,
    mut cons: ArrayViewMut4<'_, T>,
) -> GeometryResult<()> {
    if !(gamma > T::one()) {
        return Err(GeometryError::InvalidAdiabaticIndex(
            gamma.to_f64().unwrap_or(f64::NAN),
        ));
    }
    check_volume("primitives", prim.shape(), block)?;
    check_volume("conserved variables", cons.shape(), block)?;

    let gamma_red = gamma / (gamma - T::one());
    let ks = block.active_range(Direction::Z);
    let js = block.active_range(Direction::Y);
    let is = block.active_range(Direction::X);
    let k_start = *ks.start();

    let mut momentum = cons.index_axis_mut(Axis(0), IM1);
    let mut momentum = momentum.slice_mut(s![ks.clone(), .., ..]);
    let prim = prim.slice(s![.., ks, .., ..]);

    momentum
        .axis_iter_mut(Axis(0))
        .into_par_iter()
        .zip(prim.axis_iter(Axis(1)).into_par_iter())
        .enumerate()
        .try_for_each(|(dk, (mut m1, prim))| {
            let k = k_start + dk;
            for j in js.clone() {
                for i in is.clone() {
                    let metric = table.cell(i).metric();
                    let v = [prim[[IVX, j, i]], prim[[IVY, j, i]], prim[[IVZ, j, i]]];
                    let (_, u) = four_velocity(&metric, v).map_err(|radicand| {
                        GeometryError::InvalidLocalState {
                            index: [k, j, i],
                            radicand: radicand.to_f64().unwrap_or(f64::NAN),
                        }
                    })?;
                    let u_2 = metric.g12() * u[0] + metric.g22() * u[1];
                    let enthalpy = prim[[IDN, j, i]] + gamma_red * prim[[IPR, j, i]];
                    let s1 = table.source(i) * enthalpy * u[0] * u_2;
                    m1[[j, i]] = m1[[j, i]] + dt * s1;
                }
            }
            Ok(())
        })
}
