//! Background elapsed-time display for long kernel runs.
//!
//! The reporter is a side channel only: it prints a `\r`-overwritten line on
//! stderr about once a second and never touches matrix data. The main thread
//! owns the lifecycle - start before the kernel, signal stop and join right
//! after the elapsed time has been captured, so the printing can't bleed into
//! the next measurement.

use std::io::{self, Write};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

/// Cadence of printed updates.
const PRINT_INTERVAL: Duration = Duration::from_secs(1);
/// The sleep between prints is sliced this fine so [`ProgressReporter::stop`]
/// doesn't have to wait out a full interval after a fast kernel.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Handle to a running progress thread. Dropping it without calling
/// [`stop`](ProgressReporter::stop) detaches the thread; always stop it.
pub struct ProgressReporter {
    stop: Arc<AtomicBool>,
    handle: JoinHandle<()>,
    label_len: usize,
}

impl ProgressReporter {
    /// Spawn the reporter thread for one timed section.
    ///
    /// `label` identifies the kernel and size, e.g. `[ikj n=5000]`. Returns
    /// an error if the thread could not be spawned; the caller degrades to
    /// running unreported, the measurement itself is unaffected.
    pub fn start(label: String) -> io::Result<ProgressReporter> {
        let stop = Arc::new(AtomicBool::new(false));
        let thread_stop = Arc::clone(&stop);
        let label_len = label.len();
        let handle = thread::Builder::new()
            .name("progress".into())
            .spawn(move || report_loop(&label, &thread_stop))?;
        Ok(ProgressReporter {
            stop,
            handle,
            label_len,
        })
    }

    /// Signal the thread to stop, wait for it, and wipe the progress line.
    pub fn stop(self) {
        self.stop.store(true, Ordering::Relaxed);
        let _ = self.handle.join();
        eprint!("\r{:width$}\r", "", width = self.label_len + 30);
        let _ = io::stderr().flush();
    }
}

fn report_loop(label: &str, stop: &AtomicBool) {
    let t0 = Instant::now();
    while !stop.load(Ordering::Relaxed) {
        eprint!("\r{}  elapsed: {:.2} s", label, t0.elapsed().as_secs_f64());
        let _ = io::stderr().flush();
        let mut slept = Duration::ZERO;
        while slept < PRINT_INTERVAL && !stop.load(Ordering::Relaxed) {
            thread::sleep(POLL_INTERVAL);
            slept += POLL_INTERVAL;
        }
    }
}
