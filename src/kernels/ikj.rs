use crate::matrix::Real;

/// Matrix multiplication in i-k-j loop order.
///
/// A[i,k] is hoisted into a register and the innermost loop sweeps a row of
/// B and a row of C with unit stride. This is the best-behaved order on a
/// row-major layout and the expected winner at scale.
///
/// Accumulates into C across the k loop, so C must be pre-zeroed.
///
/// # Arguments
///
/// * `a` - Matrix A (n × n), row-major
/// * `b` - Matrix B (n × n), row-major
/// * `c` - Matrix C (n × n), row-major, pre-zeroed, accumulated into
/// * `n` - Matrix dimension
pub fn matmul_ikj(a: &[Real], b: &[Real], c: &mut [Real], n: usize) {
    for i in 0..n {
        for k in 0..n {
            let r = a[i * n + k];
            for j in 0..n {
                c[i * n + j] += r * b[k * n + j];
            }
        }
    }
}
