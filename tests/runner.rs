use loop_orders::matrix::{self, Real, SEED};
use loop_orders::progress::ProgressReporter;
use loop_orders::runner::{Config, SizeOutcome, run};
use loop_orders::{Kernel, runner};
use rand::SeedableRng;
use rand::rngs::StdRng;

// ============================================================
// Fill determinism
// ============================================================

#[test]
fn test_fill_is_bit_identical_across_runs() {
    let n = 50;

    let mut rng1 = StdRng::seed_from_u64(SEED);
    let mut a1 = matrix::alloc(n).unwrap();
    let mut b1 = matrix::alloc(n).unwrap();
    matrix::fill(&mut a1, &mut rng1);
    matrix::fill(&mut b1, &mut rng1);

    let mut rng2 = StdRng::seed_from_u64(SEED);
    let mut a2 = matrix::alloc(n).unwrap();
    let mut b2 = matrix::alloc(n).unwrap();
    matrix::fill(&mut a2, &mut rng2);
    matrix::fill(&mut b2, &mut rng2);

    assert_eq!(a1, a2);
    assert_eq!(b1, b2);
    // B consumes the stream after A, so the two fills differ.
    assert_ne!(a1, b1);
}

#[test]
fn test_fill_values_are_small_integers() {
    let mut rng = StdRng::seed_from_u64(SEED);
    let mut m = matrix::alloc(40).unwrap();
    matrix::fill(&mut m, &mut rng);

    for &v in &m {
        assert!((0.0..6.0).contains(&f64::from(v)));
        assert_eq!(f64::from(v).fract(), 0.0);
    }
}

// ============================================================
// Runner: skip-and-continue on allocation failure
// ============================================================

#[test]
fn test_failed_size_does_not_stop_later_sizes() {
    // (1 << 33)^2 elements overflows the usize element count, so allocation
    // fails deterministically without actually asking malloc for petabytes.
    let impossible = 1usize << 33;
    let config = Config {
        sizes: vec![impossible, 8],
        progress: false,
        verify: true,
    };

    let summary = run(&config);
    assert_eq!(summary.outcomes.len(), 2);

    match &summary.outcomes[0] {
        SizeOutcome::Skipped { n } => assert_eq!(*n, impossible),
        other => panic!("expected the oversized entry to be skipped, got {:?}", other),
    }
    match &summary.outcomes[1] {
        SizeOutcome::Completed { n, timings } => {
            assert_eq!(*n, 8);
            assert_eq!(timings.len(), 6);
            assert!(timings.iter().all(|t| t.verified == Some(true)));
        }
        other => panic!("expected n=8 to complete, got {:?}", other),
    }
}

#[test]
fn test_run_verifies_all_kernels_when_enabled() {
    let config = Config {
        sizes: vec![16, 24],
        progress: false,
        verify: true,
    };

    let summary = run(&config);
    for outcome in &summary.outcomes {
        match outcome {
            SizeOutcome::Completed { timings, .. } => {
                assert_eq!(timings.len(), Kernel::ALL.len());
                for timing in timings {
                    assert_eq!(timing.verified, Some(true), "{}", timing.kernel.name());
                    assert!(timing.seconds >= 0.0);
                }
            }
            other => panic!("unexpected outcome {:?}", other),
        }
    }
}

#[test]
fn test_run_without_verification_reports_none() {
    let config = Config {
        sizes: vec![8],
        progress: false,
        verify: false,
    };

    let summary = run(&config);
    match &summary.outcomes[0] {
        SizeOutcome::Completed { timings, .. } => {
            assert!(timings.iter().all(|t| t.verified.is_none()));
        }
        other => panic!("unexpected outcome {:?}", other),
    }
}

// ============================================================
// Progress reporter non-interference
// ============================================================

#[test]
fn test_progress_reporter_does_not_change_results() {
    let n = 64;
    let mut rng = StdRng::seed_from_u64(SEED);
    let mut a = matrix::alloc(n).unwrap();
    let mut b = matrix::alloc(n).unwrap();
    matrix::fill(&mut a, &mut rng);
    matrix::fill(&mut b, &mut rng);

    let mut quiet = matrix::alloc(n).unwrap();
    Kernel::Ikj.run(&a, &b, &mut quiet, n);

    let mut reported = matrix::alloc(n).unwrap();
    let reporter = ProgressReporter::start(format!("[ikj n={n}]")).unwrap();
    Kernel::Ikj.run(&a, &b, &mut reported, n);
    reporter.stop();

    // Bit-identical, not just within tolerance.
    assert_eq!(quiet, reported);
}

#[test]
fn test_progress_reporter_stop_is_prompt() {
    use std::time::Instant;

    let reporter = ProgressReporter::start("[test]".to_string()).unwrap();
    let t0 = Instant::now();
    reporter.stop();
    // The reporter polls its stop flag between short sleeps, so stopping
    // must not wait out the full one-second print interval.
    assert!(t0.elapsed().as_secs_f64() < 0.5);
}

// ============================================================
// Config / argument collection
// ============================================================

#[test]
fn test_args_default_sizes_and_flags() {
    let config = Config::from_args(Vec::new()).unwrap();
    assert_eq!(config.sizes, runner::DEFAULT_SIZES.to_vec());
    assert!(!config.progress);

    let args = ["--progress", "500", "junk", "0", "-3", "1000"];
    let config = Config::from_args(args.iter().map(|s| s.to_string())).unwrap();
    assert!(config.progress);
    // Non-numeric, zero and negative entries are ignored.
    assert_eq!(config.sizes, vec![500, 1000]);
}

#[test]
fn test_too_many_sizes_is_an_error() {
    let at_cap: Vec<String> = (1..=runner::MAX_SIZES).map(|n| n.to_string()).collect();
    assert!(Config::from_args(at_cap).is_ok());

    let over_cap: Vec<String> = (1..=runner::MAX_SIZES + 1).map(|n| n.to_string()).collect();
    assert!(Config::from_args(over_cap).is_err());
}

// ============================================================
// Allocation
// ============================================================

#[test]
fn test_alloc_is_zeroed_and_sized() {
    let m = matrix::alloc(10).unwrap();
    assert_eq!(m.len(), 100);
    assert!(m.iter().all(|&v| v == 0.0 as Real));
}

#[test]
fn test_alloc_overflow_fails_cleanly() {
    let err = matrix::alloc(usize::MAX).unwrap_err();
    assert_eq!(err.n, usize::MAX);
}
