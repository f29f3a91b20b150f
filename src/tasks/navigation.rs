//! Deferred navigation dispatch

use std::time::Duration;
use tokio::{sync::mpsc, time::sleep};
use tracing::{debug, warn};

use crate::{error::Result, state::TimerHandle, toggle::Navigator};

/// Delay between a switch turning on and the screen change
pub const NAVIGATION_DELAY: Duration = Duration::from_millis(160);

/// Navigator that forwards keys after a short delay.
///
/// A new key arriving while one is pending replaces it, so a burst of
/// switch flips produces a single screen change.
#[derive(Debug)]
pub struct DeferredNavigator<K> {
    delay: Duration,
    timer: TimerHandle,
    tx: mpsc::UnboundedSender<K>,
}

impl<K: Send + 'static> DeferredNavigator<K> {
    /// Must be called within a Tokio runtime
    pub fn new(delay: Duration, tx: mpsc::UnboundedSender<K>) -> Result<Self> {
        Ok(Self {
            delay,
            timer: TimerHandle::new("navigation")?,
            tx,
        })
    }

    pub fn is_pending(&self) -> bool {
        self.timer.is_armed()
    }

    /// Drop the pending dispatch, if any
    pub fn cancel(&mut self) {
        self.timer.disarm();
    }
}

impl<K: Send + 'static> Navigator<K> for DeferredNavigator<K> {
    fn navigate(&mut self, key: K) {
        let delay = self.delay;
        let tx = self.tx.clone();
        self.timer.arm(move |epoch| async move {
            sleep(delay).await;
            debug!("Dispatching navigation (epoch {})", epoch);
            if tx.send(key).is_err() {
                warn!("Navigation receiver dropped");
            }
        });
    }
}
