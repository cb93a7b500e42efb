use crate::matrix::Real;

/// Matrix multiplication in k-j-i loop order.
///
/// Mirror of j-k-i with the k loop outermost: B[k,j] in a register, columns
/// of A and C walked with stride `n` in the innermost loop. The other
/// canonical worst case on a row-major layout.
///
/// Accumulates into C across the k loop, so C must be pre-zeroed.
///
/// # Arguments
///
/// * `a` - Matrix A (n × n), row-major
/// * `b` - Matrix B (n × n), row-major
/// * `c` - Matrix C (n × n), row-major, pre-zeroed, accumulated into
/// * `n` - Matrix dimension
pub fn matmul_kji(a: &[Real], b: &[Real], c: &mut [Real], n: usize) {
    for k in 0..n {
        for j in 0..n {
            let r = b[k * n + j];
            for i in 0..n {
                c[i * n + j] += a[i * n + k] * r;
            }
        }
    }
}
