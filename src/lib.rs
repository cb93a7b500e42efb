//! Benchmark of the six loop-order permutations of matrix multiplication.
//!
//! Multiplying two row-major n×n matrices takes three nested loops over
//! i, j and k. The nesting order doesn't change the math, but it changes
//! the stride of the innermost loop - and at n=1000 and up that's easily a
//! 2× difference in wall time from cache behavior alone. This crate times
//! all six orders (ijk, ikj, jik, jki, kij, kji) so you can see it happen
//! on your own machine.
//!
//! ## Usage
//!
//! ```
//! use loop_orders::Kernel;
//!
//! let a = vec![1.0, 2.0, 3.0, 4.0];
//! let b = vec![5.0, 6.0, 7.0, 8.0];
//! let mut c = vec![0.0; 4];
//!
//! Kernel::Ikj.run(&a, &b, &mut c, 2);
//! assert_eq!(c, vec![19.0, 22.0, 43.0, 50.0]);
//! ```
//!
//! Or run the binary: `loop-orders --progress 500 1000`.
//!
//! ## What's inside
//!
//! - Six scalar kernels, one per loop permutation (deliberately no SIMD,
//!   no blocking - the point is the stride pattern, nothing else)
//! - A runner that fills matrices from a fixed-seed stream and times each
//!   kernel per size
//! - An optional once-a-second progress line on stderr for the slow orders
//! - Optional verification of every kernel against the ijk product
//!   (`--features verify`)
//! - `--features f32` for single-precision elements

pub mod kernels;
pub mod matrix;
pub mod progress;
pub mod runner;
pub mod verify;

pub use kernels::Kernel;
pub use matrix::Real;
pub use runner::Config;
