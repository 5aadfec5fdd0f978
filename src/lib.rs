//! Repeated alloc-and-fill microbenchmark workload.

use std::io;
use std::time::Duration;

use cpu_time::ProcessTime;

/// Number of integer slots in each per-pass buffer
pub const BUFFER_SLOTS: usize = 100_000;
/// Loop exit threshold; each pass advances the counter by the probed slot
pub const PASS_TARGET: i32 = 10_000;
/// Slot read back after each fill (in bounds: 12_487 < 100_000)
pub const PROBE_INDEX: usize = 12_487;

/// Write 1 to every slot, in increasing index order.
pub fn fill_ones(buf: &mut [i32]) {
    for slot in buf.iter_mut() {
        *slot = 1;
    }
}

/// The measured loop: each pass allocates a fresh `BUFFER_SLOTS`-slot buffer,
/// fills it, and advances the counter by the value read at `PROBE_INDEX`.
///
/// The counter advance is the actual buffer read, so the fill cannot be
/// elided as dead code. Generic over the fill step so tests can instrument
/// it and scale the pass count; the real workload is [`run`].
pub fn run_fill_loop<F>(target: i32, mut fill: F) -> i32
where
    F: FnMut(&mut [i32]),
{
    let mut index = 0;
    while index < target {
        let mut buf = vec![0i32; BUFFER_SLOTS];
        fill(&mut buf);
        index += buf[PROBE_INDEX];
        std::hint::black_box(&buf);
    }
    index
}

/// The full workload: 10,000 passes of 100,000 writes each.
pub fn run() -> i32 {
    run_fill_loop(PASS_TARGET, fill_ones)
}

/// Run `f` between two reads of the process CPU clock (not wall-clock).
///
/// Clock failures propagate; they are environment faults, not results.
pub fn measure_cpu<T, F>(f: F) -> io::Result<(T, Duration)>
where
    F: FnOnce() -> T,
{
    let clock = ProcessTime::try_now()?;
    let out = f();
    let elapsed = clock.try_elapsed()?;
    Ok((out, elapsed))
}

/// Elapsed seconds with two fractional digits and a trailing `s`.
pub fn format_elapsed(elapsed: Duration) -> String {
    format!("{:.2}s", elapsed.as_secs_f64())
}
