//! Exclusively owned handle over one background timer task

use std::future::Future;
use tokio::{runtime::Handle, task::JoinHandle};
use tracing::debug;

use crate::error::{GuideError, Result};

/// Owns at most one live timer task.
///
/// Every `arm` aborts the previous task and bumps the epoch. Timer tasks tag
/// their events with the epoch they were armed under, so the owner can drop
/// events that were already queued when their task was aborted.
///
/// Tasks are spawned on the runtime that was current at construction, so
/// `arm` works from any thread once the handle exists.
#[derive(Debug)]
pub struct TimerHandle {
    name: &'static str,
    runtime: Handle,
    epoch: u64,
    task: Option<JoinHandle<()>>,
}

impl TimerHandle {
    /// Create a disarmed handle bound to the current Tokio runtime
    pub fn new(name: &'static str) -> Result<Self> {
        let runtime = Handle::try_current().map_err(|_| GuideError::NoRuntime(name))?;
        Ok(Self {
            name,
            runtime,
            epoch: 0,
            task: None,
        })
    }

    /// Cancel any live task, then spawn the one built by `make` for the new epoch
    pub fn arm<F, Fut>(&mut self, make: F) -> u64
    where
        F: FnOnce(u64) -> Fut,
        Fut: Future<Output = ()> + Send + 'static,
    {
        self.disarm();
        self.epoch += 1;
        self.task = Some(self.runtime.spawn(make(self.epoch)));
        debug!("{} timer armed (epoch {})", self.name, self.epoch);
        self.epoch
    }

    /// Cancel the live task, if any. Safe to call repeatedly.
    pub fn disarm(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            debug!("{} timer disarmed (epoch {})", self.name, self.epoch);
        }
    }

    /// Whether a task is armed and has not run to completion
    pub fn is_armed(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    /// Whether an event tagged with `epoch` comes from the live task
    pub fn accepts(&self, epoch: u64) -> bool {
        self.task.is_some() && epoch == self.epoch
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }
}

impl Drop for TimerHandle {
    fn drop(&mut self) {
        self.disarm();
    }
}
