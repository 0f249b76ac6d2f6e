//! Periodic recomputation of the current moment.
//!
//! The core has no timer. This loop polls the wall clock, decodes, and only
//! emits when the pulse actually changed.

use std::time::Duration;

use kairos_core::{KairosMoment, current_pulse, decode_moment, pulse_start_ms, time};

/// Lands each wake-up just past the pulse boundary rather than just before it.
const BOUNDARY_SLACK_MS: f64 = 1.0;

#[derive(Debug, Default)]
pub struct PulseWatcher {
    last_pulse: Option<i64>,
}

impl PulseWatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode `now_ms`; `Some` only if its pulse differs from the last one emitted.
    pub fn observe(&mut self, now_ms: f64) -> Option<KairosMoment> {
        let pulse = current_pulse(now_ms);
        if self.last_pulse == Some(pulse) {
            return None;
        }
        self.last_pulse = Some(pulse);
        Some(decode_moment(pulse))
    }
}

/// How long to sleep from `now_ms`: until the next pulse boundary, at most `max`.
pub fn next_wait(now_ms: f64, max: Duration) -> Duration {
    let boundary = pulse_start_ms(current_pulse(now_ms) + 1);
    let ms = (boundary - now_ms).max(0.0) + BOUNDARY_SLACK_MS;
    Duration::from_secs_f64(ms / 1000.0).min(max)
}

/// Run until `count` moments were emitted or Ctrl-C. Returns the number emitted.
pub async fn run<F>(interval: Duration, count: Option<usize>, mut emit: F) -> usize
where
    F: FnMut(&KairosMoment),
{
    if count == Some(0) {
        return 0;
    }
    let mut watcher = PulseWatcher::new();
    let mut emitted = 0;
    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    loop {
        let now = time::now_unix_millis();
        if let Some(moment) = watcher.observe(now) {
            tracing::debug!(pulse = moment.pulse, "pulse changed");
            emit(&moment);
            emitted += 1;
            if count.is_some_and(|n| emitted >= n) {
                break;
            }
        }

        tokio::select! {
            _ = &mut shutdown => {
                tracing::info!("interrupted after {emitted} moments");
                break;
            }
            _ = tokio::time::sleep(next_wait(now, interval)) => {}
        }
    }
    emitted
}
