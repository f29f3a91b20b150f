//! Countdown and settle timer tasks for the quiz engine

use std::time::Duration;
use tokio::{
    sync::mpsc,
    time::{interval_at, sleep, Instant},
};
use tracing::debug;

use crate::quiz::QuizEvent;

/// Period of the question countdown
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Background task that emits one tick per second until aborted
pub async fn question_timer_task(epoch: u64, tx: mpsc::UnboundedSender<QuizEvent>) {
    // first tick one full period after arming, not immediately
    let mut interval = interval_at(Instant::now() + TICK_PERIOD, TICK_PERIOD);

    loop {
        interval.tick().await;
        if tx.send(QuizEvent::Tick { epoch }).is_err() {
            debug!("Quiz event receiver dropped, stopping question timer");
            break;
        }
    }
}

/// One-shot task that reports the end of the settle delay
pub async fn settle_task(epoch: u64, delay: Duration, tx: mpsc::UnboundedSender<QuizEvent>) {
    sleep(delay).await;
    if tx.send(QuizEvent::Settled { epoch }).is_err() {
        debug!("Quiz event receiver dropped before settle completed");
    }
}
