use crate::matrix::Real;

/// Matrix multiplication in i-j-k loop order.
///
/// This is the textbook triple loop: each C[i,j] is reduced in a local
/// accumulator and written once, so C needs no pre-zeroing. The innermost
/// loop walks a column of B with stride `n`, which misses cache on every
/// iteration at large sizes.
///
/// # Arguments
///
/// * `a` - Matrix A (n × n), row-major
/// * `b` - Matrix B (n × n), row-major
/// * `c` - Matrix C (n × n), row-major, assigned (C = A * B)
/// * `n` - Matrix dimension
pub fn matmul_ijk(a: &[Real], b: &[Real], c: &mut [Real], n: usize) {
    for i in 0..n {
        for j in 0..n {
            let mut sum: Real = 0.0;
            for k in 0..n {
                sum += a[i * n + k] * b[k * n + j];
            }
            c[i * n + j] = sum;
        }
    }
}
