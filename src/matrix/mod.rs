//! Matrix storage: allocation, random fill, and zeroing.
//!
//! Matrices are flat row-major buffers of `n * n` elements; element (i, j)
//! lives at offset `i * n + j`. The buffer size is fixed for its lifetime.

use std::fmt;

use rand::Rng;

/// Matrix element type: f64 by default, f32 with the `f32` feature.
#[cfg(not(feature = "f32"))]
pub type Real = f64;
/// Matrix element type: f64 by default, f32 with the `f32` feature.
#[cfg(feature = "f32")]
pub type Real = f32;

/// Seed for the shared fill stream. Fixed so runs are reproducible.
pub const SEED: u64 = 12345;

/// A matrix buffer for the given dimension could not be allocated.
///
/// Covers both an out-of-memory reservation and an `n * n` element count
/// that overflows `usize`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllocError {
    pub n: usize,
}

impl fmt::Display for AllocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to allocate a {n}x{n} matrix", n = self.n)
    }
}

impl std::error::Error for AllocError {}

/// Allocate a zeroed n×n buffer, failing instead of aborting when the
/// reservation cannot be satisfied.
///
/// The runner relies on this to skip an oversized benchmark and keep going;
/// `vec![0.0; n * n]` would abort the whole process instead.
pub fn alloc(n: usize) -> Result<Vec<Real>, AllocError> {
    let len = n.checked_mul(n).ok_or(AllocError { n })?;
    let mut m = Vec::new();
    m.try_reserve_exact(len).map_err(|_| AllocError { n })?;
    m.resize(len, 0.0);
    Ok(m)
}

/// Fill a matrix with small pseudo-random integers in [0, 6).
///
/// Small integer values keep the products exactly representable, so all six
/// loop orders agree to within rounding. The generator is passed in rather
/// than being a process-wide global: the caller owns one stream seeded with
/// [`SEED`] and fills A before B, which fixes the consumption order and makes
/// runs bit-reproducible.
pub fn fill(m: &mut [Real], rng: &mut impl Rng) {
    for x in m.iter_mut() {
        *x = rng.random_range(0..6u32) as Real;
    }
}

/// Set every element to zero.
///
/// Kernels that accumulate into C (see [`crate::kernels::Kernel::needs_zero`])
/// require this before each run.
pub fn zero(m: &mut [Real]) {
    m.fill(0.0);
}
