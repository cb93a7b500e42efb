//! The six loop-order permutations of the matmul triple loop.
//!
//! All six compute the same product C = A × B over row-major n×n buffers;
//! they differ only in loop nesting, which changes the stride pattern and
//! therefore the cache behavior:
//! - `ikj`, `kij`: unit-stride inner loop over rows of B and C, fastest
//! - `ijk`, `jik`: local accumulator, but B read column-wise
//! - `jki`, `kji`: stride-n inner loop over columns of A and C, slowest
//!
//! `ijk` and `jik` assign C once per cell; the other four accumulate into C
//! and need it pre-zeroed (see [`Kernel::needs_zero`]).

pub mod ijk;
pub mod ikj;
pub mod jik;
pub mod jki;
pub mod kij;
pub mod kji;

pub use ijk::matmul_ijk;
pub use ikj::matmul_ikj;
pub use jik::matmul_jik;
pub use jki::matmul_jki;
pub use kij::matmul_kij;
pub use kji::matmul_kji;

use crate::matrix::Real;

/// One loop-order variant, carrying its label, its dispatch, and whether the
/// result buffer must be zeroed before it runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Kernel {
    Ijk,
    Ikj,
    Jik,
    Jki,
    Kij,
    Kji,
}

impl Kernel {
    /// All six permutations, in benchmark order. `Ijk` is first and doubles
    /// as the verification reference.
    pub const ALL: [Kernel; 6] = [
        Kernel::Ijk,
        Kernel::Ikj,
        Kernel::Jik,
        Kernel::Jki,
        Kernel::Kij,
        Kernel::Kji,
    ];

    /// Permutation label, e.g. `"ikj"`.
    pub fn name(self) -> &'static str {
        match self {
            Kernel::Ijk => "ijk",
            Kernel::Ikj => "ikj",
            Kernel::Jik => "jik",
            Kernel::Jki => "jki",
            Kernel::Kij => "kij",
            Kernel::Kji => "kji",
        }
    }

    /// Whether this kernel accumulates into C (caller must zero C first).
    /// `ijk` and `jik` assign a fully reduced sum instead.
    pub fn needs_zero(self) -> bool {
        !matches!(self, Kernel::Ijk | Kernel::Jik)
    }

    /// Compute C = A × B with this loop order.
    ///
    /// All three buffers must hold `n * n` elements, and C must be zeroed
    /// beforehand when [`needs_zero`](Kernel::needs_zero) says so.
    pub fn run(self, a: &[Real], b: &[Real], c: &mut [Real], n: usize) {
        match self {
            Kernel::Ijk => matmul_ijk(a, b, c, n),
            Kernel::Ikj => matmul_ikj(a, b, c, n),
            Kernel::Jik => matmul_jik(a, b, c, n),
            Kernel::Jki => matmul_jki(a, b, c, n),
            Kernel::Kij => matmul_kij(a, b, c, n),
            Kernel::Kji => matmul_kji(a, b, c, n),
        }
    }
}
