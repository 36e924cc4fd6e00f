//! simulation — forward iteration of a solved policy.
//!
//! Purpose
//! -------
//! Turn a converged policy function into a deterministic capital path:
//! starting from an arbitrary (not necessarily on-grid) capital level, apply
//! the piecewise-linear interpolant of the policy repeatedly for a fixed
//! horizon.
//!
//! Key behaviors
//! -------------
//! - `path[0]` is the initial capital exactly as supplied; `path[t]` is the
//!   interpolated policy evaluated at `path[t - 1]`.
//! - Off-grid starting points are handled by the same clamped interpolant
//!   the Bellman operator uses; starts outside the grid span map to the
//!   boundary policy values.
//! - Inputs are validated up front: a horizon of zero and non-finite
//!   starting capital are rejected before any work is done.
//!
//! Conventions
//! -----------
//! - The horizon counts path entries including the initial condition, so a
//!   horizon of 1 returns just the starting point.
//! - This module performs no I/O and no logging.
use crate::growth::{
    core::{
        grid::CapitalGrid,
        interp::LinearInterpolant,
        validation::{validate_horizon, validate_initial_capital},
    },
    errors::VFIResult,
};
use ndarray::{Array1, ArrayView1};

/// Simulate a deterministic capital path of length `horizon`.
///
/// # Arguments
/// - `grid`: capital grid the policy is defined on.
/// - `policy`: optimal next-capital per grid point, as extracted by the
///   solver.
/// - `initial_capital`: starting capital level, on- or off-grid.
/// - `horizon`: number of path entries, counting the initial condition.
///
/// # Returns
/// The capital path with `path[0] == initial_capital` and
/// `path[t] == g(path[t - 1])` for the interpolated policy `g`.
///
/// # Errors
/// - [`VFIError::InvalidHorizon`](crate::growth::errors::VFIError::InvalidHorizon)
///   if `horizon == 0`.
/// - [`VFIError::NonFiniteInitialCapital`](crate::growth::errors::VFIError::NonFiniteInitialCapital)
///   if the starting capital is NaN/±inf.
/// - [`VFIError::InvalidInterpolationNodes`](crate::growth::errors::VFIError::InvalidInterpolationNodes)
///   if the policy length does not match the grid.
pub fn simulate_policy_path(
    grid: &CapitalGrid, policy: ArrayView1<'_, f64>, initial_capital: f64, horizon: usize,
) -> VFIResult<Array1<f64>> {
    validate_horizon(horizon)?;
    validate_initial_capital(initial_capital)?;

    let interpolant = LinearInterpolant::new(grid.view(), policy)?;

    let mut path = Array1::zeros(horizon);
    path[0] = initial_capital;
    for t in 1..horizon {
        path[t] = interpolant.eval(path[t - 1]);
    }
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::growth::errors::VFIError;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Path length and the initial-condition contract.
    // - Absorption under a constant policy and stationarity under the
    //   identity policy.
    // - Off-grid starts through the clamped interpolant.
    // - Horizon and initial-capital validation.
    //
    // They intentionally DO NOT cover:
    // - Paths under solved policies; the integration suite exercises those.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify the path has exactly `horizon` entries and starts at the supplied
    // capital, even off-grid.
    //
    // Given
    // -----
    // - A 3-point grid, the identity policy, start 1.25, horizon 5.
    //
    // Expect
    // ------
    // - Length 5 and `path[0] == 1.25` exactly.
    fn path_has_horizon_entries_and_exact_start() {
        // Arrange
        let grid = CapitalGrid::build(1.0, 3.0, 3).unwrap();
        let policy = grid.points.clone();

        // Act
        let path = simulate_policy_path(&grid, policy.view(), 1.25, 5).unwrap();

        // Assert
        assert_eq!(path.len(), 5);
        assert_eq!(path[0], 1.25);
    }

    #[test]
    // Purpose
    // -------
    // Verify a constant policy absorbs the path after one step.
    //
    // Given
    // -----
    // - Policy mapping every state to 2.0; start 1.0; horizon 4.
    //
    // Expect
    // ------
    // - `path == [1.0, 2.0, 2.0, 2.0]`.
    fn constant_policy_absorbs_after_one_step() {
        // Arrange
        let grid = CapitalGrid::build(1.0, 3.0, 3).unwrap();
        let policy = array![2.0, 2.0, 2.0];

        // Act
        let path = simulate_policy_path(&grid, policy.view(), 1.0, 4).unwrap();

        // Assert
        assert_eq!(path, array![1.0, 2.0, 2.0, 2.0]);
    }

    #[test]
    // Purpose
    // -------
    // Verify the identity policy holds every starting point fixed, including
    // points between grid nodes.
    //
    // Given
    // -----
    // - Policy equal to the grid itself; an off-grid start 1.7.
    //
    // Expect
    // ------
    // - Every path entry equals 1.7 up to floating-point rounding.
    fn identity_policy_is_stationary_off_grid() {
        // Arrange
        let grid = CapitalGrid::build(1.0, 3.0, 5).unwrap();
        let policy = grid.points.clone();

        // Act
        let path = simulate_policy_path(&grid, policy.view(), 1.7, 4).unwrap();

        // Assert
        for &k in path.iter() {
            assert!((k - 1.7).abs() < 1e-12);
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify a start outside the grid span maps to the boundary policy value
    // on the first step.
    //
    // Given
    // -----
    // - A grid over [1, 3], policy equal to the grid, start 10.0.
    //
    // Expect
    // ------
    // - `path[1] == 3.0` (the clamped upper-boundary policy).
    fn start_above_grid_clamps_to_boundary_policy() {
        let grid = CapitalGrid::build(1.0, 3.0, 3).unwrap();
        let policy = grid.points.clone();

        let path = simulate_policy_path(&grid, policy.view(), 10.0, 3).unwrap();
        assert_eq!(path[1], 3.0);
    }

    #[test]
    // Purpose
    // -------
    // Ensure a zero horizon and a non-finite start are rejected up front.
    //
    // Given
    // -----
    // - Horizon 0, then start NaN with a valid horizon.
    //
    // Expect
    // ------
    // - `InvalidHorizon { horizon: 0 }` and `NonFiniteInitialCapital`.
    fn rejects_zero_horizon_and_non_finite_start() {
        let grid = CapitalGrid::build(1.0, 3.0, 3).unwrap();
        let policy = grid.points.clone();

        let err = simulate_policy_path(&grid, policy.view(), 1.0, 0).unwrap_err();
        assert_eq!(err, VFIError::InvalidHorizon { horizon: 0 });

        let err = simulate_policy_path(&grid, policy.view(), f64::NAN, 3).unwrap_err();
        assert!(matches!(err, VFIError::NonFiniteInitialCapital { .. }));
    }
}
