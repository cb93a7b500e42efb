//! Benchmark runner: allocation, fill, timing, progress and verification
//! across the requested matrix sizes.
//!
//! Per size the flow is: allocate A/B/C (plus the reference buffer when
//! verifying) → fill A then B from the shared seeded stream, timing each →
//! reference product → for each of the six kernels: zero C if the kernel
//! accumulates, time the kernel with the optional progress reporter running,
//! verify, report → drop the buffers and move on. A size whose allocation
//! fails is reported and skipped; later sizes still run.

use std::fmt;
use std::time::Instant;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::kernels::Kernel;
use crate::matrix::{self, Real, SEED};
use crate::progress::ProgressReporter;
use crate::verify;

/// Hard cap on the number of sizes a single run accepts.
pub const MAX_SIZES: usize = 16;

/// Sizes benchmarked when none are given on the command line.
pub const DEFAULT_SIZES: [usize; 5] = [100, 500, 1000, 5000, 10000];

/// What to benchmark and how.
#[derive(Clone, Debug)]
pub struct Config {
    /// Matrix dimensions, benchmarked in order.
    pub sizes: Vec<usize>,
    /// Show the elapsed-time line on stderr while a kernel runs.
    pub progress: bool,
    /// Check every kernel against the ijk reference product.
    pub verify: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            sizes: DEFAULT_SIZES.to_vec(),
            progress: false,
            verify: cfg!(feature = "verify"),
        }
    }
}

/// More sizes were requested than [`MAX_SIZES`] allows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TooManySizes;

impl fmt::Display for TooManySizes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "too many sizes (max {MAX_SIZES})")
    }
}

impl std::error::Error for TooManySizes {}

impl Config {
    /// Build a config from raw command-line arguments (program name already
    /// stripped).
    ///
    /// `--progress` enables the elapsed-time reporter; positive integers are
    /// collected as the size list, overriding [`DEFAULT_SIZES`]; anything
    /// else is ignored. Fails before any work if more than [`MAX_SIZES`]
    /// sizes are given.
    pub fn from_args<I>(args: I) -> Result<Config, TooManySizes>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = Config::default();
        let mut sizes = Vec::new();
        for arg in args {
            if arg == "--progress" {
                config.progress = true;
            } else if let Ok(n) = arg.parse::<usize>() {
                if n > 0 {
                    if sizes.len() == MAX_SIZES {
                        return Err(TooManySizes);
                    }
                    sizes.push(n);
                }
            }
        }
        if !sizes.is_empty() {
            config.sizes = sizes;
        }
        Ok(config)
    }
}

/// Measured result for one kernel at one size.
#[derive(Clone, Debug)]
pub struct KernelTiming {
    pub kernel: Kernel,
    pub seconds: f64,
    /// `None` when verification was off for this run.
    pub verified: Option<bool>,
}

/// Outcome of one entry in the size list.
#[derive(Clone, Debug)]
pub enum SizeOutcome {
    /// All six kernels ran and were timed.
    Completed {
        n: usize,
        timings: Vec<KernelTiming>,
    },
    /// Allocation failed; the size was skipped entirely.
    Skipped { n: usize },
}

/// Everything a run produced, one outcome per requested size, in order.
#[derive(Clone, Debug, Default)]
pub struct RunSummary {
    pub outcomes: Vec<SizeOutcome>,
}

struct Buffers {
    a: Vec<Real>,
    b: Vec<Real>,
    c: Vec<Real>,
    cref: Option<Vec<Real>>,
}

fn allocate(n: usize, verify: bool) -> Result<Buffers, matrix::AllocError> {
    let a = matrix::alloc(n)?;
    let b = matrix::alloc(n)?;
    let c = matrix::alloc(n)?;
    let cref = if verify { Some(matrix::alloc(n)?) } else { None };
    Ok(Buffers { a, b, c, cref })
}

fn print_size_info(n: usize, verify: bool) {
    let bytes_mat = n as f64 * n as f64 * size_of::<Real>() as f64;
    let mats = if verify { 4.0 } else { 3.0 };
    let label = if verify { "A,B,C + Cref" } else { "A,B,C" };
    let gib = bytes_mat * mats / (1024.0 * 1024.0 * 1024.0);
    let flops = 2.0 * (n as f64).powi(3);
    println!(
        "  ~memory ({}): {:.2} GiB | element = {} bytes | FLOPs ~ {:.2e}",
        label,
        gib,
        size_of::<Real>(),
        flops
    );
}

/// Run the whole benchmark described by `config`.
///
/// Prints human-readable results to stdout (warnings and the progress line
/// go to stderr) and returns a [`RunSummary`] with the same information in
/// structured form.
pub fn run(config: &Config) -> RunSummary {
    let mut rng = StdRng::seed_from_u64(SEED);
    let mut summary = RunSummary::default();

    for &n in &config.sizes {
        println!("=== n = {n} ===");
        print_size_info(n, config.verify);

        let mut bufs = match allocate(n, config.verify) {
            Ok(bufs) => bufs,
            Err(err) => {
                // Partially allocated buffers for this size drop here.
                eprintln!("{err}; skipping (try --features f32 or a smaller size)");
                summary.outcomes.push(SizeOutcome::Skipped { n });
                continue;
            }
        };

        // A before B: the order matters for reproducibility of the stream.
        let t = Instant::now();
        matrix::fill(&mut bufs.a, &mut rng);
        let fill_a = t.elapsed().as_secs_f64();
        let t = Instant::now();
        matrix::fill(&mut bufs.b, &mut rng);
        let fill_b = t.elapsed().as_secs_f64();
        println!("fill A   : {fill_a:.6} s");
        println!("fill B   : {fill_b:.6} s");
        println!("fill A+B : {:.6} s", fill_a + fill_b);

        if let Some(cref) = bufs.cref.as_mut() {
            Kernel::Ijk.run(&bufs.a, &bufs.b, cref, n);
        }

        let mut timings = Vec::with_capacity(Kernel::ALL.len());
        for kernel in Kernel::ALL {
            if kernel.needs_zero() {
                matrix::zero(&mut bufs.c);
            }

            let reporter = if config.progress {
                match ProgressReporter::start(format!("[{} n={}]", kernel.name(), n)) {
                    Ok(reporter) => Some(reporter),
                    Err(err) => {
                        // Progress is lost for this one kernel; the timing
                        // below is unaffected.
                        eprintln!("could not start progress reporter: {err}");
                        None
                    }
                }
            } else {
                None
            };

            let t0 = Instant::now();
            kernel.run(&bufs.a, &bufs.b, &mut bufs.c, n);
            let seconds = t0.elapsed().as_secs_f64();

            // Joined before the next kernel so stderr output stays ordered.
            if let Some(reporter) = reporter {
                reporter.stop();
            }

            let verified = bufs.cref.as_deref().map(|cref| {
                let ok = verify::within_tolerance(&bufs.c, cref, verify::EPS);
                if !ok {
                    eprintln!("verification FAILED for {} (n = {n})", kernel.name());
                }
                ok
            });

            println!("time {:<3} : {seconds:.6} s", kernel.name());
            timings.push(KernelTiming {
                kernel,
                seconds,
                verified,
            });
        }
        println!();

        summary.outcomes.push(SizeOutcome::Completed { n, timings });
        // A, B, C (and Cref) drop before the next size is allocated.
    }

    summary
}
