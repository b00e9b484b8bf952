//! Debouncing utilities for LSP notifications.

use std::future::Future;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::task::JoinHandle;

/// A single slot holding at most one scheduled task.
///
/// Scheduling aborts whatever was pending, so only the last task scheduled
/// within a quiet period runs. Once a task's delay has elapsed it can no
/// longer be cancelled through the slot.
#[derive(Debug, Default)]
pub struct TimerSlot {
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl TimerSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs `task` after `delay`, replacing any pending task.
    pub fn schedule<F>(&self, delay: Duration, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            task.await;
        });

        if let Some(previous) = self.pending.lock().replace(handle) {
            previous.abort();
        }
    }

    /// Aborts the pending task, if any. Returns true if one was still waiting.
    pub fn cancel(&self) -> bool {
        match self.pending.lock().take() {
            Some(handle) => {
                let waiting = !handle.is_finished();
                handle.abort();
                waiting
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counter_task(counter: Arc<AtomicUsize>, value: usize) -> impl Future<Output = ()> {
        async move {
            counter.store(value, Ordering::SeqCst);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_only_last_task_runs() {
        let slot = TimerSlot::new();
        let fired = Arc::new(AtomicUsize::new(0));

        for i in 1..=5 {
            slot.schedule(Duration::from_millis(500), counter_task(fired.clone(), i));
            tokio::time::sleep(Duration::from_millis(100)).await;
        }
        assert_eq!(fired.load(Ordering::SeqCst), 0);

        tokio::time::sleep(Duration::from_millis(600)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 5);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_before_fire() {
        let slot = TimerSlot::new();
        let fired = Arc::new(AtomicUsize::new(0));

        slot.schedule(Duration::from_millis(500), counter_task(fired.clone(), 1));
        assert!(slot.cancel());

        tokio::time::sleep(Duration::from_secs(1)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 0);
        assert!(!slot.cancel());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_after_fire() {
        let slot = TimerSlot::new();
        let fired = Arc::new(AtomicUsize::new(0));

        slot.schedule(Duration::from_millis(10), counter_task(fired.clone(), 1));
        tokio::time::sleep(Duration::from_millis(50)).await;

        assert_eq!(fired.load(Ordering::SeqCst), 1);
        assert!(!slot.cancel());
    }
}
