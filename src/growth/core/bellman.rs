//! One application of the Bellman operator.
//!
//! ## What this module does
//! - Interpolates the candidate value function over the grid (the
//!   continuation value is conceptually a function of a continuous
//!   next-capital variable, even though it is evaluated at grid points here
//!   because the action space coincides with the state space).
//! - Forms `obj[i, j] = payoff[i, j] + β · V(grid[j])` and takes the row-wise
//!   maximum.
//! - Tie-breaking is an explicit contract: the **lowest** maximizing column
//!   index wins. The scan keeps the first strictly greater objective, which
//!   also makes it robust to sentinel-dominated rows — no sign-flip detour
//!   through a minimizer is needed.
//!
//! ## Guarantees
//! - Pure function of its inputs; two calls with identical inputs produce
//!   identical outputs.
//! - Returned arrays have one entry per grid point.
use crate::growth::{
    core::{grid::CapitalGrid, interp::LinearInterpolant, payoff::PayoffGrid},
    errors::{VFIError, VFIResult},
};
use ndarray::{Array1, ArrayView1};

/// Apply the Bellman operator once.
///
/// # Arguments
/// - `payoff`: sentinel-masked utility grid, built once per solve.
/// - `value`: candidate value function, one entry per grid point.
/// - `grid`: capital grid shared by states and actions.
/// - `discount`: β applied to the continuation value.
///
/// # Returns
/// `(new_value, argmax_indices)`: the updated value function and, per state,
/// the lowest column index attaining the row maximum.
///
/// # Errors
/// - [`VFIError::InvalidValueLength`] if `value` does not match the grid.
/// - Propagates [`VFIError::InvalidInterpolationNodes`] from interpolant
///   construction (unreachable for a grid built by [`CapitalGrid::build`]).
pub fn bellman_step(
    payoff: &PayoffGrid, value: ArrayView1<'_, f64>, grid: &CapitalGrid, discount: f64,
) -> VFIResult<(Array1<f64>, Array1<usize>)> {
    let n = grid.len();
    if value.len() != n {
        return Err(VFIError::InvalidValueLength { expected: n, actual: value.len() });
    }

    let interpolant = LinearInterpolant::new(grid.view(), value)?;
    let continuation = grid.points.mapv(|k| discount * interpolant.eval(k));

    let mut new_value = Array1::zeros(n);
    let mut argmax_indices = Array1::zeros(n);
    for i in 0..n {
        let mut best = f64::NEG_INFINITY;
        let mut best_j = 0usize;
        for j in 0..n {
            let objective = payoff.utilities[[i, j]] + continuation[j];
            if objective > best {
                best = objective;
                best_j = j;
            }
        }
        new_value[i] = best;
        argmax_indices[i] = best_j;
    }

    Ok((new_value, argmax_indices))
}

/// Sup-norm distance between two equally shaped value vectors.
///
/// Used by the solver as the convergence criterion; NaN never enters because
/// payoffs and continuation values are finite by construction.
pub fn sup_norm_diff(a: ArrayView1<'_, f64>, b: ArrayView1<'_, f64>) -> f64 {
    a.iter().zip(b.iter()).fold(0.0, |acc, (x, y)| acc.max((x - y).abs()))
}
