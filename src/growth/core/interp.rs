//! Piecewise-linear interpolation over the capital grid.
//!
//! The Bellman operator treats the continuation value as a function of a
//! continuous next-capital variable, and path simulation evaluates the
//! policy between grid points. Both use this interpolant: exact at the
//! nodes, linear between them, clamped to the boundary values outside the
//! node span.
//!
//! ## Invariants (enforced at construction)
//! - Nodes and values have equal length >= 2.
//! - Nodes are finite and strictly increasing.
use crate::growth::errors::{VFIError, VFIResult};
use ndarray::ArrayView1;

/// Piecewise-linear interpolant over a strictly increasing node sequence.
///
/// Borrows its nodes and values; construction validates them once so that
/// [`eval`](LinearInterpolant::eval) can run branch-light in the hot loop.
#[derive(Debug, Clone, Copy)]
pub struct LinearInterpolant<'n, 'v> {
    nodes: ArrayView1<'n, f64>,
    values: ArrayView1<'v, f64>,
}

impl<'n, 'v> LinearInterpolant<'n, 'v> {
    /// Build an interpolant over `nodes` with one value per node.
    ///
    /// # Errors
    /// - [`VFIError::InvalidInterpolationNodes`] if the lengths differ, fewer
    ///   than two nodes are supplied, or the nodes are not finite and
    ///   strictly increasing.
    pub fn new(nodes: ArrayView1<'n, f64>, values: ArrayView1<'v, f64>) -> VFIResult<Self> {
        if nodes.len() != values.len() {
            return Err(VFIError::InvalidInterpolationNodes {
                reason: "Nodes and values must have equal length.",
            });
        }
        if nodes.len() < 2 {
            return Err(VFIError::InvalidInterpolationNodes {
                reason: "At least two nodes are required.",
            });
        }
        if nodes.iter().any(|x| !x.is_finite()) {
            return Err(VFIError::InvalidInterpolationNodes { reason: "Nodes must be finite." });
        }
        for idx in 1..nodes.len() {
            if nodes[idx] <= nodes[idx - 1] {
                return Err(VFIError::InvalidInterpolationNodes {
                    reason: "Nodes must be strictly increasing.",
                });
            }
        }
        Ok(LinearInterpolant { nodes, values })
    }

    /// Evaluate the interpolant at `x`.
    ///
    /// Exact at the nodes, linear between adjacent nodes, and clamped to the
    /// boundary values for `x` outside the node span.
    pub fn eval(&self, x: f64) -> f64 {
        let last = self.nodes.len() - 1;
        if x <= self.nodes[0] {
            return self.values[0];
        }
        if x >= self.nodes[last] {
            return self.values[last];
        }

        // Bracket x between adjacent nodes by bisection.
        let mut lo = 0usize;
        let mut hi = last;
        while hi - lo > 1 {
            let mid = (lo + hi) / 2;
            if self.nodes[mid] <= x {
                lo = mid;
            } else {
                hi = mid;
            }
        }

        let t = (x - self.nodes[lo]) / (self.nodes[hi] - self.nodes[lo]);
        self.values[lo] + t * (self.values[hi] - self.values[lo])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Exactness at nodes, linearity between nodes, clamped extrapolation.
    // - Construction rejection for mismatched, short, non-finite, or
    //   non-increasing node sequences.
    //
    // They intentionally DO NOT cover:
    // - Use of the interpolant inside the Bellman step or path simulation;
    //   those call sites have their own tests.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify exactness at every node, including both endpoints.
    //
    // Given
    // -----
    // - Nodes [0, 1, 2, 4] with values [0, 10, 20, 40].
    //
    // Expect
    // ------
    // - `eval(node) == value` exactly at each node.
    fn eval_is_exact_at_nodes() {
        // Arrange
        let nodes = array![0.0, 1.0, 2.0, 4.0];
        let values = array![0.0, 10.0, 20.0, 40.0];
        let interp = LinearInterpolant::new(nodes.view(), values.view()).unwrap();

        // Act + Assert
        for (x, v) in nodes.iter().zip(values.iter()) {
            assert_eq!(interp.eval(*x), *v);
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify linear interpolation between adjacent nodes.
    //
    // Given
    // -----
    // - Nodes [0, 1, 2] with values [0, 10, 30].
    //
    // Expect
    // ------
    // - `eval(0.5) == 5` and `eval(1.5) == 20`.
    fn eval_is_linear_between_nodes() {
        let nodes = array![0.0, 1.0, 2.0];
        let values = array![0.0, 10.0, 30.0];
        let interp = LinearInterpolant::new(nodes.view(), values.view()).unwrap();

        assert!((interp.eval(0.5) - 5.0).abs() < 1e-12);
        assert!((interp.eval(1.5) - 20.0).abs() < 1e-12);
    }

    #[test]
    // Purpose
    // -------
    // Verify clamped extrapolation outside the node span.
    //
    // Given
    // -----
    // - Nodes [1, 2] with values [10, 20].
    //
    // Expect
    // ------
    // - `eval(0) == 10` and `eval(3) == 20`.
    fn eval_clamps_outside_span() {
        let nodes = array![1.0, 2.0];
        let values = array![10.0, 20.0];
        let interp = LinearInterpolant::new(nodes.view(), values.view()).unwrap();

        assert_eq!(interp.eval(0.0), 10.0);
        assert_eq!(interp.eval(3.0), 20.0);
    }

    #[test]
    // Purpose
    // -------
    // Ensure invalid node sequences are rejected at construction.
    //
    // Given
    // -----
    // - Mismatched lengths, a single node, a NaN node, and a non-increasing
    //   pair.
    //
    // Expect
    // ------
    // - `VFIError::InvalidInterpolationNodes` for each case.
    fn new_rejects_invalid_nodes() {
        let values = array![1.0, 2.0];

        let short = array![1.0];
        let err = LinearInterpolant::new(short.view(), values.view()).unwrap_err();
        assert!(matches!(err, VFIError::InvalidInterpolationNodes { .. }));

        let single = array![1.0];
        let err = LinearInterpolant::new(single.view(), single.view()).unwrap_err();
        assert!(matches!(err, VFIError::InvalidInterpolationNodes { .. }));

        let with_nan = array![1.0, f64::NAN];
        let err = LinearInterpolant::new(with_nan.view(), values.view()).unwrap_err();
        assert!(matches!(err, VFIError::InvalidInterpolationNodes { .. }));

        let decreasing = array![2.0, 1.0];
        let err = LinearInterpolant::new(decreasing.view(), values.view()).unwrap_err();
        assert!(matches!(err, VFIError::InvalidInterpolationNodes { .. }));
    }
}
