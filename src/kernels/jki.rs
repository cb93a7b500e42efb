use crate::matrix::Real;

/// Matrix multiplication in j-k-i loop order.
///
/// B[k,j] is hoisted into a register, but the innermost loop walks columns
/// of both A and C with stride `n`. Canonical worst case for a row-major
/// layout along with k-j-i.
///
/// Accumulates into C across the k loop, so C must be pre-zeroed.
///
/// # Arguments
///
/// * `a` - Matrix A (n × n), row-major
/// * `b` - Matrix B (n × n), row-major
/// * `c` - Matrix C (n × n), row-major, pre-zeroed, accumulated into
/// * `n` - Matrix dimension
pub fn matmul_jki(a: &[Real], b: &[Real], c: &mut [Real], n: usize) {
    for j in 0..n {
        for k in 0..n {
            let r = b[k * n + j];
            for i in 0..n {
                c[i * n + j] += a[i * n + k] * r;
            }
        }
    }
}
