use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

use crate::error::ZeroPeriod;

/// Cancelable handle to a scheduled task.
///
/// Dropping the handle cancels the task. Cancelling twice, or cancelling a
/// task that already ran to completion, is a no-op.
#[derive(Debug)]
pub struct TaskHandle {
    task: Option<JoinHandle<()>>,
}

impl TaskHandle {
    /// A handle that owns nothing.
    pub fn inert() -> Self {
        Self { task: None }
    }

    pub fn cancel(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }

    /// True while the task is scheduled and has neither finished nor been cancelled.
    pub fn is_active(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    /// Cancels and waits until the task's future has been dropped.
    pub async fn shutdown(mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            let _ = task.await;
        }
    }
}

impl From<JoinHandle<()>> for TaskHandle {
    fn from(task: JoinHandle<()>) -> Self {
        Self { task: Some(task) }
    }
}

impl Drop for TaskHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Runs `f` once after `delay`.
pub fn schedule_once<F>(delay: Duration, f: F) -> TaskHandle
where
    F: FnOnce() + Send + 'static,
{
    let task = tokio::spawn(async move {
        time::sleep(delay).await;
        f();
    });
    TaskHandle { task: Some(task) }
}

/// Runs `f` every `period`, first firing one full period from now.
///
/// Late ticks are delayed rather than bursted, so the schedule restarts
/// after each firing instead of being corrected against the wall clock.
/// A zero period is refused before anything is spawned.
pub fn schedule_repeating<F>(period: Duration, mut f: F) -> Result<TaskHandle, ZeroPeriod>
where
    F: FnMut() + Send + 'static,
{
    if period.is_zero() {
        return Err(ZeroPeriod);
    }
    let task = tokio::spawn(async move {
        let mut ticker = time::interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            f();
        }
    });
    Ok(TaskHandle { task: Some(task) })
}
