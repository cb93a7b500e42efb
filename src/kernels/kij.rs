use crate::matrix::Real;

/// Matrix multiplication in k-i-j loop order.
///
/// Like i-k-j, the innermost loop sweeps rows of B and C with unit stride
/// and A[i,k] sits in a register; the k loop is just outermost instead of
/// in the middle. Expected to be close to i-k-j at scale.
///
/// Accumulates into C across the k loop, so C must be pre-zeroed.
///
/// # Arguments
///
/// * `a` - Matrix A (n × n), row-major
/// * `b` - Matrix B (n × n), row-major
/// * `c` - Matrix C (n × n), row-major, pre-zeroed, accumulated into
/// * `n` - Matrix dimension
pub fn matmul_kij(a: &[Real], b: &[Real], c: &mut [Real], n: usize) {
    for k in 0..n {
        for i in 0..n {
            let r = a[i * n + k];
            for j in 0..n {
                c[i * n + j] += r * b[k * n + j];
            }
        }
    }
}
