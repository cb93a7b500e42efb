//! Tolerance comparison of kernel outputs against a reference product.
//!
//! When verification is on, the runner computes one trusted product per size
//! with the `ijk` kernel and checks every kernel's output against it. This is
//! a safety net, not a gate: a mismatch is reported and the benchmark keeps
//! going.
//!
//! Known limitation: `ijk` itself is the ground truth, so a bug in `ijk`
//! would go undetected - every kernel would be compared against the same
//! wrong answer.

use crate::matrix::Real;

/// Absolute tolerance for elementwise comparison.
///
/// Fills are small integers, so exact products stay well inside f32 range
/// for the default sizes; loop order only perturbs rounding of the sums.
pub const EPS: f64 = 1e-6;

/// True if every element of `x` is within `eps` of the matching element of
/// `y`. Differences are taken in f64 regardless of the element type.
pub fn within_tolerance(x: &[Real], y: &[Real], eps: f64) -> bool {
    x.iter()
        .zip(y)
        .all(|(&xi, &yi)| (f64::from(xi) - f64::from(yi)).abs() <= eps)
}
