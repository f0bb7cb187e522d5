//! Button sampling stage
//!
//! This module implements the producer end of the pipeline: it samples
//! the button input on a fixed period and forwards every raw level to
//! the interpreter stage.

use embassy_time::{Duration, Ticker};

use crate::channels::RawLevelChannel;
use crate::config::BUTTON_SAMPLE_PERIOD_MS;
use crate::traits::Button;

/// Periodic button sampler.
///
/// The ticker schedules each wake relative to a fixed reference rather
/// than relative to "now", so the sampling period does not drift when a
/// cycle's work takes nonzero time. Each sample is forwarded with a
/// non-blocking send; if the interpreter has fallen behind and the queue
/// is full, the sample is dropped.
pub async fn run_sampler<B: Button>(button: B, raw_levels: &RawLevelChannel) {
    let mut ticker = Ticker::every(Duration::from_millis(BUTTON_SAMPLE_PERIOD_MS));

    loop {
        let level = button.level();
        let _ = raw_levels.try_send(level);
        ticker.next().await;
    }
}
