//! Application state shared across handlers.

use std::sync::Arc;

use crate::{
    config::Config,
    services::{AnalysisRefresher, Scanner},
    store::{Store, StoreError},
};

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: Config,
    store: Store,
    scanner: Scanner,
    refresher: AnalysisRefresher,
}

impl AppState {
    pub fn new(config: Config, store: Store) -> Self {
        let scanner = Scanner::new(config.scan_delay);
        let refresher = AnalysisRefresher::new(config.analysis_delay);
        Self {
            inner: Arc::new(AppStateInner {
                config,
                store,
                scanner,
                refresher,
            }),
        }
    }

    /// State over the fixture data set.
    pub fn seeded(config: Config) -> Result<Self, StoreError> {
        Ok(Self::new(config, Store::seeded()?))
    }

    pub fn config(&self) -> &Config {
        &self.inner.config
    }

    pub fn store(&self) -> &Store {
        &self.inner.store
    }

    pub fn scanner(&self) -> &Scanner {
        &self.inner.scanner
    }

    pub fn refresher(&self) -> &AnalysisRefresher {
        &self.inner.refresher
    }
}
