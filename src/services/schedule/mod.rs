//! Fixed-interval background jobs with an explicit cancellation handle.
//!
//! The day view runs two of these: the one-minute clock tick that moves the
//! time cursor, and the periodic refetch of the day's events. Both must stop
//! for good when the view is torn down.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

const MIN_PERIOD: Duration = Duration::from_millis(1);

pub struct PeriodicTask;

impl PeriodicTask {
    /// Run `job` now and then every `period` on the current tokio runtime.
    ///
    /// Ticks missed while the runtime was busy are skipped, not replayed.
    /// Must be called from within a tokio runtime.
    pub fn spawn<F>(name: &'static str, period: Duration, mut job: F) -> TaskHandle
    where
        F: FnMut() + Send + 'static,
    {
        let period = if period < MIN_PERIOD {
            log::warn!("Periodic task '{}' given a zero period, using {:?}", name, MIN_PERIOD);
            MIN_PERIOD
        } else {
            period
        };

        let cancelled = Arc::new(AtomicBool::new(false));
        let (stop_tx, mut stop_rx) = watch::channel(false);
        let task_cancelled = Arc::clone(&cancelled);

        let join = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                tokio::select! {
                    biased;
                    _ = stop_rx.changed() => break,
                    _ = ticker.tick() => {
                        if task_cancelled.load(Ordering::Acquire) {
                            break;
                        }
                        job();
                    }
                }
            }

            log::debug!("Periodic task '{}' stopped", name);
        });

        log::debug!("Periodic task '{}' started every {:?}", name, period);

        TaskHandle {
            name,
            cancelled,
            stop_tx,
            join: Some(join),
        }
    }
}

/// Owner of a running [`PeriodicTask`]. Dropping the handle cancels the task.
pub struct TaskHandle {
    name: &'static str,
    cancelled: Arc<AtomicBool>,
    stop_tx: watch::Sender<bool>,
    join: Option<JoinHandle<()>>,
}

impl TaskHandle {
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Stop the task. No new run of the job starts after this returns; a run
    /// already in progress on another worker finishes normally.
    pub fn cancel(&self) {
        if !self.cancelled.swap(true, Ordering::AcqRel) {
            // The receiver is gone once the task has exited on its own
            let _ = self.stop_tx.send(true);
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }

    pub fn is_finished(&self) -> bool {
        self.join.as_ref().is_none_or(|join| join.is_finished())
    }

    /// Cancel the task and wait for it to exit.
    pub async fn shutdown(mut self) {
        self.cancel();
        if let Some(join) = self.join.take() {
            if let Err(err) = join.await {
                log::warn!("Periodic task '{}' ended abnormally: {}", self.name, err);
            }
        }
    }
}

impl Drop for TaskHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}
