//! Shared application state for request handlers.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::config::AppConfig;
use crate::store::ReadingStore;
use crate::tarot::{Deck, SpreadRegistry};

/// Shared application state, cloneable across handlers via Arc-wrapped fields.
///
/// Holds the configuration, the immutable deck and spread registry, the
/// reading store, and the readiness flag the health endpoint reports.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub deck: Arc<Deck>,
    pub spreads: Arc<SpreadRegistry>,
    pub store: ReadingStore,
    ready: Arc<AtomicBool>,
}

impl AppState {
    /// Creates application state from the given configuration. The service
    /// starts in the not-ready state; `mark_ready` is called once the
    /// endpoint is bound and storage has been verified.
    pub fn new(config: AppConfig) -> Self {
        let store = ReadingStore::new(config.storage.readings_dir.clone());
        Self {
            config: Arc::new(config),
            deck: Arc::new(Deck::golden_dawn()),
            spreads: Arc::new(SpreadRegistry::golden_dawn()),
            store,
            ready: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Flip the readiness flag. Called exactly once, after the listener is
    /// bound; from then on the health endpoint answers 200.
    pub fn mark_ready(&self) {
        self.ready.store(true, Ordering::Release);
    }

    /// Atomic readiness read for the health path. Never blocks, never touches
    /// storage, so a saturated handler pool cannot starve the probe.
    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Acquire)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_starts_not_ready() {
        let state = AppState::new(AppConfig::default());
        assert!(!state.is_ready());
        state.mark_ready();
        assert!(state.is_ready());
    }

    #[test]
    fn clones_share_readiness() {
        let state = AppState::new(AppConfig::default());
        let clone = state.clone();
        state.mark_ready();
        assert!(clone.is_ready());
    }
}
