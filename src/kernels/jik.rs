use crate::matrix::Real;

/// Matrix multiplication in j-i-k loop order.
///
/// Same inner reduction as i-j-k (local accumulator, single write, no
/// pre-zero needed); only the order in which cells of C are visited differs,
/// column by column instead of row by row.
///
/// # Arguments
///
/// * `a` - Matrix A (n × n), row-major
/// * `b` - Matrix B (n × n), row-major
/// * `c` - Matrix C (n × n), row-major, assigned (C = A * B)
/// * `n` - Matrix dimension
pub fn matmul_jik(a: &[Real], b: &[Real], c: &mut [Real], n: usize) {
    for j in 0..n {
        for i in 0..n {
            let mut sum: Real = 0.0;
            for k in 0..n {
                sum += a[i * n + k] * b[k * n + j];
            }
            c[i * n + j] = sum;
        }
    }
}
