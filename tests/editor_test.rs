//! Admin working-set integration tests
//!
//! Covers save reconciliation (pending inserts vs persisted updates, in
//! working-set order), deletion semantics for pending vs persisted records,
//! and best-effort saves where one record fails and the rest still persist.

use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};

use vitrine::content::storage::{self, SkillRow, StatRow};
use vitrine::editor::{Editor, IncomingRecord, RecordId};
use vitrine::store::{ContentStore, MemoryStore, Ordering};
use vitrine::types::{Result, VitrineError};

/// Wraps a MemoryStore, logging every write call and optionally failing
/// writes whose record carries a poisoned label.
struct RecordingStore {
    inner: MemoryStore,
    ops: Mutex<Vec<String>>,
}

impl RecordingStore {
    fn new(inner: MemoryStore) -> Self {
        Self {
            inner,
            ops: Mutex::new(Vec::new()),
        }
    }

    fn ops(&self) -> Vec<String> {
        self.ops.lock().unwrap().clone()
    }

    fn log(&self, op: String) {
        self.ops.lock().unwrap().push(op);
    }

    fn poisoned(record: &Value) -> bool {
        record["label"] == "poison" || record["name"] == "poison"
    }
}

#[async_trait]
impl ContentStore for RecordingStore {
    fn is_configured(&self) -> bool {
        true
    }

    async fn fetch(&self, table: &str, order: Option<Ordering>) -> Result<Vec<Value>> {
        self.inner.fetch(table, order).await
    }

    async fn fetch_one(&self, table: &str) -> Result<Option<Value>> {
        self.inner.fetch_one(table).await
    }

    async fn insert(&self, table: &str, record: Value) -> Result<Value> {
        self.log(format!("insert:{}", table));
        if Self::poisoned(&record) {
            return Err(VitrineError::Store("poisoned record".into()));
        }
        self.inner.insert(table, record).await
    }

    async fn update(&self, table: &str, id: &str, record: Value) -> Result<Value> {
        self.log(format!("update:{}:{}", table, id));
        if Self::poisoned(&record) {
            return Err(VitrineError::Store("poisoned record".into()));
        }
        self.inner.update(table, id, record).await
    }

    async fn delete(&self, table: &str, id: &str) -> Result<()> {
        self.log(format!("delete:{}:{}", table, id));
        if id == "ghost" {
            return Err(VitrineError::Store("delete rejected".into()));
        }
        self.inner.delete(table, id).await
    }
}

fn stat(value: &str, label: &str, order: i32) -> StatRow {
    StatRow {
        value: value.into(),
        label: label.into(),
        order,
    }
}

// =============================================================================
// Save reconciliation
// =============================================================================

#[tokio::test]
async fn save_updates_persisted_and_inserts_pending_in_order() {
    let memory = MemoryStore::new();
    memory.seed(
        storage::STATS,
        vec![json!({ "value": "50+", "label": "Projects", "order": 1 })],
    );
    let store = Arc::new(RecordingStore::new(memory));

    let mut editor: Editor<StatRow> = Editor::new(store.clone());
    editor.load().await.unwrap();
    editor.add(stat("5+", "Years", 0));

    let report = editor.save().await.unwrap();
    assert_eq!(report.updated, 1);
    assert_eq!(report.inserted, 1);
    assert!(report.is_clean());

    // Persisted update first (position 0), pending insert after it
    let ops = store.ops();
    assert!(ops[0].starts_with("update:stats:"));
    assert_eq!(ops[1], "insert:stats");

    // Post-save reload made the inserted record persisted
    assert_eq!(editor.records().len(), 2);
    assert!(editor.records().iter().all(|r| !r.id.is_pending()));
}

#[tokio::test]
async fn wire_submission_without_ids_inserts_everything() {
    let store = Arc::new(RecordingStore::new(MemoryStore::new()));
    let incoming: Vec<IncomingRecord<StatRow>> = serde_json::from_value(json!([
        { "value": "10+", "label": "Talks", "order": 1 },
        { "id": null, "value": "3+", "label": "Awards", "order": 2 },
    ]))
    .unwrap();

    let mut editor: Editor<StatRow> = Editor::new(store.clone());
    editor.restore(incoming);
    assert!(editor.records().iter().all(|r| r.id.is_pending()));

    let report = editor.save().await.unwrap();
    assert_eq!(report.inserted, 2);
    assert_eq!(report.updated, 0);
    assert_eq!(store.ops(), vec!["insert:stats", "insert:stats"]);
}

// =============================================================================
// Deletion
// =============================================================================

#[tokio::test]
async fn removing_pending_record_never_touches_the_store() {
    let store = Arc::new(RecordingStore::new(MemoryStore::new()));
    let mut editor: Editor<SkillRow> = Editor::new(store.clone());

    let id = editor.add(SkillRow {
        name: "Scratch".into(),
        level: 10,
        icon_name: "code2".into(),
        color_from: "indigo-500".into(),
        color_to: "blue-500".into(),
        order: 0,
    });

    assert!(editor.remove(&id).await.unwrap());
    assert!(editor.records().is_empty());
    assert!(store.ops().is_empty());
}

#[tokio::test]
async fn removing_persisted_record_deletes_remotely_first() {
    let memory = MemoryStore::new();
    memory.seed(
        storage::STATS,
        vec![json!({ "value": "50+", "label": "Projects", "order": 1 })],
    );
    let store = Arc::new(RecordingStore::new(memory));

    let mut editor: Editor<StatRow> = Editor::new(store.clone());
    editor.load().await.unwrap();
    let id = editor.records()[0].id.clone();

    assert!(editor.remove(&id).await.unwrap());
    assert!(editor.records().is_empty());
    assert_eq!(store.ops().len(), 1);
    assert!(store.ops()[0].starts_with("delete:stats:"));
}

#[tokio::test]
async fn failed_remote_delete_keeps_the_record() {
    let store = Arc::new(RecordingStore::new(MemoryStore::new()));
    let mut editor: Editor<StatRow> = Editor::new(store.clone());

    // The wrapper rejects deletes for the "ghost" id
    let incoming: Vec<IncomingRecord<StatRow>> = serde_json::from_value(json!([
        { "id": "ghost", "value": "1+", "label": "Thing", "order": 1 },
    ]))
    .unwrap();
    editor.restore(incoming);

    let result = editor.remove(&RecordId::Persisted("ghost".into())).await;
    assert!(result.is_err());
    assert_eq!(editor.records().len(), 1);
}

// =============================================================================
// Best-effort saves
// =============================================================================

#[tokio::test]
async fn failing_record_is_reported_and_the_rest_still_persist() {
    let store = Arc::new(RecordingStore::new(MemoryStore::new()));
    let incoming: Vec<IncomingRecord<StatRow>> = serde_json::from_value(json!([
        { "value": "10+", "label": "Talks", "order": 1 },
        { "value": "bad", "label": "poison", "order": 2 },
        { "value": "3+", "label": "Awards", "order": 3 },
    ]))
    .unwrap();

    let mut editor: Editor<StatRow> = Editor::new(store.clone());
    editor.restore(incoming);

    let report = editor.save().await.unwrap();
    assert_eq!(report.inserted, 2);
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].position, 1);
    assert!(report.failures[0].error.contains("poisoned"));

    // All three writes were attempted, in order
    assert_eq!(store.ops().len(), 3);

    // The two good records survived the post-save reload
    assert_eq!(editor.records().len(), 2);
}
