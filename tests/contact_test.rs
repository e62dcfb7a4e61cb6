//! Contact intake integration tests
//!
//! Persistence is the source of truth: a configured store that rejects the
//! insert fails the submission, while the notification relay can never fail
//! it. Without a configured store the relay carries the message, and with
//! neither the submission is still accepted.

use async_trait::async_trait;
use serde_json::Value;
use std::sync::atomic::{AtomicUsize, Ordering as AtomicOrdering};
use std::sync::Arc;

use vitrine::contact::{ContactIntake, ContactMessage, NotificationRelay};
use vitrine::content::storage;
use vitrine::store::{ContentStore, MemoryStore, Ordering, PostgrestStore};
use vitrine::types::{Result, VitrineError};

/// A configured store that rejects every write
struct RejectingStore;

#[async_trait]
impl ContentStore for RejectingStore {
    fn is_configured(&self) -> bool {
        true
    }

    async fn fetch(&self, _table: &str, _order: Option<Ordering>) -> Result<Vec<Value>> {
        Ok(Vec::new())
    }

    async fn fetch_one(&self, _table: &str) -> Result<Option<Value>> {
        Ok(None)
    }

    async fn insert(&self, _table: &str, _record: Value) -> Result<Value> {
        Err(VitrineError::Store("insert rejected".into()))
    }

    async fn update(&self, _table: &str, _id: &str, _record: Value) -> Result<Value> {
        Err(VitrineError::Store("update rejected".into()))
    }

    async fn delete(&self, _table: &str, _id: &str) -> Result<()> {
        Err(VitrineError::Store("delete rejected".into()))
    }
}

/// Counts deliveries; fails them all when `failing` is set
struct CountingRelay {
    calls: AtomicUsize,
    failing: bool,
}

impl CountingRelay {
    fn new(failing: bool) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            failing,
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(AtomicOrdering::SeqCst)
    }
}

#[async_trait]
impl NotificationRelay for CountingRelay {
    async fn send_notification(&self, _message: &ContactMessage) -> Result<()> {
        self.calls.fetch_add(1, AtomicOrdering::SeqCst);
        if self.failing {
            Err(VitrineError::Relay("delivery failed".into()))
        } else {
            Ok(())
        }
    }
}

fn message() -> ContactMessage {
    ContactMessage {
        name: "Jordan".into(),
        email: "jordan@example.com".into(),
        message: "Interested in working together.".into(),
    }
}

// =============================================================================
// Persist-then-notify
// =============================================================================

#[tokio::test]
async fn successful_submission_persists_and_notifies_once() {
    let store = Arc::new(MemoryStore::new());
    let relay = Arc::new(CountingRelay::new(false));
    let intake = ContactIntake::new(store.clone(), Some(relay.clone()));

    let outcome = intake.submit(message()).await.unwrap();
    assert!(outcome.persisted);
    assert!(outcome.notified);
    assert_eq!(store.len(storage::CONTACT_MESSAGES), 1);
    assert_eq!(relay.calls(), 1);
}

#[tokio::test]
async fn persistence_failure_fails_the_submission() {
    let relay = Arc::new(CountingRelay::new(false));
    let intake = ContactIntake::new(Arc::new(RejectingStore), Some(relay.clone()));

    let err = intake.submit(message()).await.unwrap_err();
    assert!(matches!(err, VitrineError::Store(_)));
    // The relay is never reached when persistence fails
    assert_eq!(relay.calls(), 0);
}

#[tokio::test]
async fn relay_failure_never_fails_the_submission() {
    let store = Arc::new(MemoryStore::new());
    let relay = Arc::new(CountingRelay::new(true));
    let intake = ContactIntake::new(store.clone(), Some(relay.clone()));

    let outcome = intake.submit(message()).await.unwrap();
    assert!(outcome.persisted);
    assert!(!outcome.notified);
    assert_eq!(store.len(storage::CONTACT_MESSAGES), 1);
    assert_eq!(relay.calls(), 1);
}

// =============================================================================
// Unconfigured store
// =============================================================================

#[tokio::test]
async fn unconfigured_store_uses_relay_as_sole_durability() {
    let relay = Arc::new(CountingRelay::new(false));
    let intake = ContactIntake::new(
        Arc::new(PostgrestStore::unconfigured()),
        Some(relay.clone()),
    );

    let outcome = intake.submit(message()).await.unwrap();
    assert!(!outcome.persisted);
    assert!(outcome.notified);
    assert_eq!(relay.calls(), 1);
}

#[tokio::test]
async fn nothing_configured_still_accepts_the_submission() {
    let intake = ContactIntake::new(Arc::new(PostgrestStore::unconfigured()), None);

    let outcome = intake.submit(message()).await.unwrap();
    assert!(!outcome.persisted);
    assert!(!outcome.notified);
}

#[tokio::test]
async fn unconfigured_store_with_failing_relay_still_accepts() {
    let relay = Arc::new(CountingRelay::new(true));
    let intake = ContactIntake::new(
        Arc::new(PostgrestStore::unconfigured()),
        Some(relay.clone()),
    );

    let outcome = intake.submit(message()).await.unwrap();
    assert!(!outcome.persisted);
    assert!(!outcome.notified);
    assert_eq!(relay.calls(), 1);
}
