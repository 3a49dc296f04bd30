//! "Refresh Analysis" on the feedback analytics page.
//!
//! The insights are fixtures; a refresh only waits, then stamps the analysis
//! with a new generation time.

use chrono::{DateTime, Utc};
use std::{sync::Arc, time::Duration};
use tokio::sync::Mutex;

use crate::{services::task::SimulatedTask, store::Store};

#[derive(Clone)]
pub struct AnalysisRefresher {
    running: Arc<Mutex<Option<SimulatedTask<DateTime<Utc>>>>>,
    delay: Duration,
}

impl AnalysisRefresher {
    pub fn new(delay: Duration) -> Self {
        Self {
            running: Arc::new(Mutex::new(None)),
            delay,
        }
    }

    /// Starts a refresh. Returns `false` if one is already running.
    pub async fn start(&self) -> bool {
        let mut running = self.running.lock().await;
        if running.as_ref().is_some_and(SimulatedTask::is_pending) {
            return false;
        }
        *running = Some(SimulatedTask::spawn(self.delay, Utc::now));
        log::info!("Feedback analysis refresh started");
        true
    }

    /// Applies a finished refresh to the store. Returns whether one is still running.
    pub async fn settle(&self, store: &Store) -> bool {
        let mut running = self.running.lock().await;
        let Some(task) = running.as_ref() else {
            return false;
        };
        match task.result() {
            Some(generated_at) => {
                store.mark_analysis_generated(generated_at).await;
                *running = None;
                log::info!("Feedback analysis refreshed at {generated_at}");
                false
            }
            None => true,
        }
    }

    /// Drops a refresh in progress without applying it.
    pub async fn cancel(&self) -> bool {
        self.running.lock().await.take().is_some()
    }
}
