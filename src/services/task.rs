//! Delayed background work whose result is dropped with its owner.

use std::time::Duration;
use tokio::{sync::watch, task::JoinHandle};

/// A delayed computation running on the runtime.
///
/// Dropping the handle aborts the task, so a result can only ever be
/// observed by whoever still holds it.
#[derive(Debug)]
pub struct SimulatedTask<T> {
    result: watch::Receiver<Option<T>>,
    handle: JoinHandle<()>,
}

impl<T> SimulatedTask<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Waits `delay`, then runs `produce` and publishes its value.
    pub fn spawn<F>(delay: Duration, produce: F) -> Self
    where
        F: FnOnce() -> T + Send + 'static,
    {
        let (tx, result) = watch::channel(None);
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // Receiver gone means the owner went away first.
            let _ = tx.send(Some(produce()));
        });
        Self { result, handle }
    }

    /// The published value, if the task has finished.
    pub fn result(&self) -> Option<T> {
        self.result.borrow().clone()
    }

    pub fn is_pending(&self) -> bool {
        self.result.borrow().is_none()
    }

}

impl<T> Drop for SimulatedTask<T> {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    };

    #[tokio::test]
    async fn publishes_after_delay() {
        let task = SimulatedTask::spawn(Duration::from_millis(10), || 42);
        assert!(task.is_pending());
        assert_eq!(task.result(), None);
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(task.result(), Some(42));
        assert!(!task.is_pending());
    }

    #[tokio::test]
    async fn dropping_the_handle_cancels_the_work() {
        let ran = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&ran);
        let task = SimulatedTask::spawn(Duration::from_millis(20), move || {
            flag.store(true, Ordering::SeqCst);
        });
        drop(task);
        tokio::time::sleep(Duration::from_millis(60)).await;
        assert!(!ran.load(Ordering::SeqCst));
    }
}
