//! Transport-agnostic application state.
//!
//! `CoreState` is the single shared state behind every HTTP handler.
//! Wrapped in `Arc` at startup. Uses `RwLock` for the chat session so
//! read-mostly endpoints (session, log, suggestions) never block each
//! other, and a `Mutex` for the pharmacy inventory where every access
//! mutates.

use std::sync::{Arc, Mutex, MutexGuard, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::config::Config;
use crate::desks::pharmacy::Inventory;
use crate::routing::IntentClassifier;
use crate::session::ChatSession;

// ═══════════════════════════════════════════════════════════
// CoreState — shared by all HTTP handlers
// ═══════════════════════════════════════════════════════════

pub struct CoreState {
    /// Chat transcript, activity log, and open workspace.
    session: RwLock<ChatSession>,
    /// Pharmacy stock. Seeded once at startup, mutated by dispensing.
    inventory: Mutex<Inventory>,
    /// Classifier seam. The production build injects the hosted-model
    /// client; tests inject a mock.
    classifier: Arc<dyn IntentClassifier>,
    /// Serializes classification so at most one remote call is ever
    /// outstanding. Tokio mutex because it is held across an await.
    routing_gate: tokio::sync::Mutex<()>,
    pub config: Config,
}

impl CoreState {
    pub fn new(config: Config, classifier: Arc<dyn IntentClassifier>) -> Self {
        Self {
            session: RwLock::new(ChatSession::new()),
            inventory: Mutex::new(Inventory::seeded()),
            classifier,
            routing_gate: tokio::sync::Mutex::new(()),
            config,
        }
    }

    // ── Session access ──────────────────────────────────────

    /// Acquire a read lock on the session. Must not be held across an
    /// await point.
    pub fn read_session(&self) -> Result<RwLockReadGuard<'_, ChatSession>, CoreError> {
        self.session.read().map_err(|_| CoreError::LockPoisoned)
    }

    /// Acquire a write lock on the session. Must not be held across an
    /// await point.
    pub fn write_session(&self) -> Result<RwLockWriteGuard<'_, ChatSession>, CoreError> {
        self.session.write().map_err(|_| CoreError::LockPoisoned)
    }

    // ── Inventory access ────────────────────────────────────

    pub fn lock_inventory(&self) -> Result<MutexGuard<'_, Inventory>, CoreError> {
        self.inventory.lock().map_err(|_| CoreError::LockPoisoned)
    }

    // ── Routing ─────────────────────────────────────────────

    pub fn classifier(&self) -> &dyn IntentClassifier {
        self.classifier.as_ref()
    }

    /// Hold the returned guard for the duration of a classification
    /// call so commands are routed one at a time.
    pub async fn acquire_routing_gate(&self) -> tokio::sync::MutexGuard<'_, ()> {
        self.routing_gate.lock().await
    }
}

// ═══════════════════════════════════════════════════════════
// Error types
// ═══════════════════════════════════════════════════════════

/// Errors from CoreState operations.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Internal lock error")]
    LockPoisoned,
}

// ═══════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::MockClassifier;

    fn state() -> CoreState {
        CoreState::new(
            Config::for_tests("test-key"),
            Arc::new(MockClassifier::no_call()),
        )
    }

    #[test]
    fn new_state_has_empty_session() {
        let state = state();
        let session = state.read_session().unwrap();
        assert!(session.turns().is_empty());
        assert!(session.workspace().is_none());
    }

    #[test]
    fn new_state_carries_seeded_inventory() {
        let state = state();
        let inventory = state.lock_inventory().unwrap();
        assert_eq!(inventory.drugs().len(), 4);
    }

    #[tokio::test]
    async fn routing_gate_serializes_holders() {
        let state = state();
        let guard = state.acquire_routing_gate().await;
        assert!(state.routing_gate.try_lock().is_err());
        drop(guard);
        assert!(state.routing_gate.try_lock().is_ok());
    }

    #[test]
    fn concurrent_session_reads_do_not_block() {
        use std::thread;

        let state = Arc::new(state());
        let mut handles = vec![];
        for _ in 0..10 {
            let state = Arc::clone(&state);
            handles.push(thread::spawn(move || {
                let session = state.read_session().unwrap();
                assert!(session.turns().is_empty());
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }
    }

    #[test]
    fn core_error_display() {
        assert_eq!(CoreError::LockPoisoned.to_string(), "Internal lock error");
    }
}
