//! Discretized capital state space.
//!
//! The grid doubles as the action space: in this discretization next-period
//! capital is chosen from the same points as current capital, so every
//! component downstream (payoff grid, Bellman update, policy extraction)
//! indexes into one shared, immutable sequence.
//!
//! ## Invariants (enforced at construction)
//! - `n >= 2` points, evenly spaced, lower and upper **inclusive**.
//! - `0 < lower < upper`, both finite (production is evaluated at every
//!   point, so non-positive capital is rejected here rather than surfacing
//!   as NaN output downstream).
use crate::growth::errors::{VFIError, VFIResult};
use ndarray::{Array1, ArrayView1};

/// Ordered, evenly spaced capital grid shared read-only by all components.
///
/// Built once via [`CapitalGrid::build`]; treated as immutable afterwards.
/// The same points serve as states (rows of the payoff grid) and actions
/// (columns), and as interpolation nodes for the value function and policy.
#[derive(Debug, Clone, PartialEq)]
pub struct CapitalGrid {
    /// Grid points, strictly increasing, endpoints inclusive.
    pub points: Array1<f64>,
}

impl CapitalGrid {
    /// Build an evenly spaced capital grid of `n` points on `[lower, upper]`.
    ///
    /// # Arguments
    /// - `lower`: smallest capital level, finite and > 0.
    /// - `upper`: largest capital level, finite and > `lower`.
    /// - `n`: number of grid points, >= 2.
    ///
    /// # Returns
    /// A [`CapitalGrid`] whose first point equals `lower`, last point equals
    /// `upper`, with strictly increasing, evenly spaced points in between.
    ///
    /// # Errors
    /// - [`VFIError::TooFewGridPoints`] if `n < 2`.
    /// - [`VFIError::InvalidGridBounds`] if a bound is non-finite, if
    ///   `lower >= upper`, or if `lower <= 0`.
    pub fn build(lower: f64, upper: f64, n: usize) -> VFIResult<Self> {
        if n < 2 {
            return Err(VFIError::TooFewGridPoints { n });
        }
        if !lower.is_finite() || !upper.is_finite() {
            return Err(VFIError::InvalidGridBounds {
                lower,
                upper,
                reason: "Bounds must be finite.",
            });
        }
        if lower >= upper {
            return Err(VFIError::InvalidGridBounds {
                lower,
                upper,
                reason: "Lower bound must be strictly below upper bound.",
            });
        }
        if lower <= 0.0 {
            return Err(VFIError::InvalidGridBounds {
                lower,
                upper,
                reason: "Capital levels must be strictly positive.",
            });
        }
        Ok(CapitalGrid { points: Array1::linspace(lower, upper, n) })
    }

    /// Number of grid points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// A grid is never empty by construction, but clippy-friendly callers
    /// can still ask.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Smallest capital level (first point).
    pub fn lower(&self) -> f64 {
        self.points[0]
    }

    /// Largest capital level (last point).
    pub fn upper(&self) -> f64 {
        self.points[self.points.len() - 1]
    }

    /// Read-only view of the points.
    pub fn view(&self) -> ArrayView1<'_, f64> {
        self.points.view()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Grid shape: length, inclusive endpoints, strict monotonicity, even
    //   spacing.
    // - Constraint rejection: too few points, unordered/non-finite/non-positive
    //   bounds.
    //
    // They intentionally DO NOT cover:
    // - Feasibility masking or payoff construction on top of the grid; those
    //   are tested in the payoff module.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify the shape guarantees: n points, first == lower, last == upper,
    // strictly increasing with even spacing.
    //
    // Given
    // -----
    // - `lower = 0.05`, `upper = 5.0`, `n = 100`.
    //
    // Expect
    // ------
    // - Length 100, exact endpoints, every consecutive difference positive and
    //   equal to the previous one up to floating-point noise.
    fn build_produces_even_inclusive_grid() {
        // Arrange + Act
        let grid = CapitalGrid::build(0.05, 5.0, 100).expect("valid bounds should build");

        // Assert
        assert_eq!(grid.len(), 100);
        assert_eq!(grid.lower(), 0.05);
        assert_eq!(grid.upper(), 5.0);

        let step = (5.0 - 0.05) / 99.0;
        for w in grid.points.windows(2) {
            let diff = w[1] - w[0];
            assert!(diff > 0.0);
            assert!((diff - step).abs() < 1e-12);
        }
    }

    #[test]
    // Purpose
    // -------
    // Ensure that fewer than two points is rejected.
    //
    // Given
    // -----
    // - `n = 1`.
    //
    // Expect
    // ------
    // - `VFIError::TooFewGridPoints { n: 1 }`.
    fn build_rejects_single_point() {
        let err = CapitalGrid::build(0.1, 1.0, 1).unwrap_err();
        assert_eq!(err, VFIError::TooFewGridPoints { n: 1 });
    }

    #[test]
    // Purpose
    // -------
    // Ensure unordered bounds are rejected.
    //
    // Given
    // -----
    // - `lower == upper` and `lower > upper` configurations.
    //
    // Expect
    // ------
    // - `VFIError::InvalidGridBounds` in both cases.
    fn build_rejects_unordered_bounds() {
        for (lower, upper) in [(1.0, 1.0), (2.0, 1.0)] {
            let err = CapitalGrid::build(lower, upper, 10).unwrap_err();
            match err {
                VFIError::InvalidGridBounds { .. } => {}
                other => panic!("expected InvalidGridBounds, got {other:?}"),
            }
        }
    }

    #[test]
    // Purpose
    // -------
    // Ensure non-finite and non-positive bounds are rejected.
    //
    // Given
    // -----
    // - A NaN lower bound, an infinite upper bound, and a zero lower bound.
    //
    // Expect
    // ------
    // - `VFIError::InvalidGridBounds` for each configuration.
    fn build_rejects_non_finite_and_non_positive_bounds() {
        for (lower, upper) in [(f64::NAN, 1.0), (0.1, f64::INFINITY), (0.0, 1.0)] {
            let err = CapitalGrid::build(lower, upper, 10).unwrap_err();
            match err {
                VFIError::InvalidGridBounds { .. } => {}
                other => panic!("expected InvalidGridBounds, got {other:?}"),
            }
        }
    }
}
