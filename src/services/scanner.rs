//! Simulated barcode scanner.
//!
//! No camera frames are decoded. Starting a scan opens a session that yields
//! one of a handful of known product ids after a delay. A session belongs to
//! the scanner view that started it; closing the view cancels the scan.

use rand::seq::SliceRandom;
use serde::Serialize;
use std::{
    collections::HashMap,
    sync::Arc,
    time::{Duration, Instant},
};
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::services::task::SimulatedTask;

/// Ids a simulated scan can produce.
pub const SIMULATED_BARCODES: [&str; 5] = [
    "PRD-78321",
    "PRD-92381",
    "PRD-12465",
    "PRD-45692",
    "PRD-63741",
];

/// Sessions nobody came back for are dropped after this long.
const SESSION_TTL: Duration = Duration::from_secs(300);

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "barcode", rename_all = "lowercase")]
pub enum ScanStatus {
    Scanning,
    Scanned(String),
}

#[derive(Debug)]
struct ScanSession {
    task: SimulatedTask<String>,
    started: Instant,
}

#[derive(Clone)]
pub struct Scanner {
    sessions: Arc<Mutex<HashMap<Uuid, ScanSession>>>,
    delay: Duration,
}

impl Scanner {
    pub fn new(delay: Duration) -> Self {
        Self {
            sessions: Arc::new(Mutex::new(HashMap::new())),
            delay,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Opens a scan session and starts the simulated scan.
    pub async fn start(&self) -> Uuid {
        let id = Uuid::new_v4();
        let task = SimulatedTask::spawn(self.delay, simulated_barcode);
        let mut sessions = self.sessions.lock().await;
        sessions.retain(|_, s| s.started.elapsed() < SESSION_TTL);
        sessions.insert(
            id,
            ScanSession {
                task,
                started: Instant::now(),
            },
        );
        log::debug!("Scan session {id} started");
        id
    }

    /// `None` when the session is unknown, cancelled or already consumed.
    pub async fn status(&self, id: Uuid) -> Option<ScanStatus> {
        let sessions = self.sessions.lock().await;
        let session = sessions.get(&id)?;
        Some(match session.task.result() {
            Some(barcode) => ScanStatus::Scanned(barcode),
            None => ScanStatus::Scanning,
        })
    }

    /// Takes the scanned barcode and closes the session.
    pub async fn take(&self, id: Uuid) -> Option<String> {
        let mut sessions = self.sessions.lock().await;
        let barcode = sessions.get(&id)?.task.result()?;
        sessions.remove(&id);
        log::info!("Scan session {id} read {barcode}");
        Some(barcode)
    }

    /// Closes the session, aborting a scan still in progress.
    pub async fn cancel(&self, id: Uuid) -> bool {
        let removed = self.sessions.lock().await.remove(&id).is_some();
        if removed {
            log::debug!("Scan session {id} cancelled");
        }
        removed
    }
}

pub fn simulated_barcode() -> String {
    SIMULATED_BARCODES
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(SIMULATED_BARCODES[0])
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn settle(scanner: &Scanner) {
        tokio::time::sleep(scanner.delay() * 4).await;
    }

    #[tokio::test]
    async fn scan_yields_a_known_barcode_once() {
        let scanner = Scanner::new(Duration::from_millis(10));
        let id = scanner.start().await;
        assert_eq!(scanner.status(id).await, Some(ScanStatus::Scanning));
        assert_eq!(scanner.take(id).await, None);

        settle(&scanner).await;
        let barcode = match scanner.status(id).await {
            Some(ScanStatus::Scanned(barcode)) => barcode,
            other => panic!("expected a scanned barcode, got {other:?}"),
        };
        assert!(SIMULATED_BARCODES.contains(&barcode.as_str()));
        assert_eq!(scanner.take(id).await, Some(barcode));
        assert_eq!(scanner.status(id).await, None);
    }

    #[tokio::test]
    async fn cancelled_scan_never_delivers() {
        let scanner = Scanner::new(Duration::from_millis(10));
        let id = scanner.start().await;
        assert!(scanner.cancel(id).await);
        settle(&scanner).await;
        assert_eq!(scanner.status(id).await, None);
        assert_eq!(scanner.take(id).await, None);
        assert!(!scanner.cancel(id).await);
        assert!(scanner.sessions.lock().await.is_empty());
    }

    #[tokio::test]
    async fn sessions_are_independent() {
        let scanner = Scanner::new(Duration::from_millis(10));
        let first = scanner.start().await;
        let second = scanner.start().await;
        scanner.cancel(first).await;
        settle(&scanner).await;
        assert!(matches!(scanner.status(second).await, Some(ScanStatus::Scanned(_))));
    }

    #[test]
    fn simulated_barcodes_come_from_the_fixed_set() {
        for _ in 0..20 {
            assert!(SIMULATED_BARCODES.contains(&simulated_barcode().as_str()));
        }
    }
}
