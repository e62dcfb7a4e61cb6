//! Admin editing - per-kind working sets reconciled against the store
//!
//! An [`Editor`] holds the full record set of one content kind as a local
//! working set. Edits are local and free; an explicit save walks the set in
//! order and issues one insert (pending records) or update (persisted
//! records) per entry, sequentially awaited. Reconciliation is best-effort:
//! a failing record is recorded in the [`SaveReport`] and the loop
//! continues. After the loop the set is re-read so store-assigned ids
//! become visible.
//!
//! Record identity is a tagged union - a record is either persisted under a
//! store id or pending under a local key. Pending records are never sent to
//! remote delete; they only ever leave the local set.

pub mod inbox;
pub mod profile;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use tracing::{info, warn};

use crate::content::storage::{
    self, ExperienceRow, ProjectRow, RowEnvelope, SkillRow, SocialLinkRow, StatRow,
    TechCategoryRow,
};
use crate::store::{ContentStore, Ordering};
use crate::types::{Result, VitrineError};

pub use inbox::{MessageInbox, StoredMessage};
pub use profile::ProfileEditor;

/// Identity of a working-set record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordId {
    /// Persisted remotely under a store-assigned id
    Persisted(String),
    /// Created locally, not yet persisted; the key only has meaning inside
    /// one editor instance
    Pending(u64),
}

impl RecordId {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending(_))
    }

    /// Wire form: the store id for persisted records, `pending-{key}` for
    /// local ones
    pub fn as_wire(&self) -> String {
        match self {
            Self::Persisted(id) => id.clone(),
            Self::Pending(key) => format!("pending-{}", key),
        }
    }
}

/// A row type editable through an [`Editor`]
pub trait EditableRecord:
    Serialize + DeserializeOwned + Clone + Send + Sync + 'static
{
    const TABLE: &'static str;

    fn set_order(&mut self, order: i32);
}

macro_rules! editable {
    ($row:ty, $table:expr) => {
        impl EditableRecord for $row {
            const TABLE: &'static str = $table;

            fn set_order(&mut self, order: i32) {
                self.order = order;
            }
        }
    };
}

editable!(StatRow, storage::STATS);
editable!(ExperienceRow, storage::EXPERIENCES);
editable!(SkillRow, storage::SKILLS);
editable!(TechCategoryRow, storage::TECH_CATEGORIES);
editable!(ProjectRow, storage::PROJECTS);
editable!(SocialLinkRow, storage::SOCIAL_LINKS);

/// One record in the working set
#[derive(Debug, Clone)]
pub struct WorkingRecord<R> {
    pub id: RecordId,
    pub row: R,
}

impl<R: Serialize> WorkingRecord<R> {
    /// Serialize as the row fields plus an `id` in wire form
    pub fn to_value(&self) -> Result<Value> {
        let mut value = serde_json::to_value(&self.row)?;
        if let Some(obj) = value.as_object_mut() {
            obj.insert("id".into(), Value::String(self.id.as_wire()));
        }
        Ok(value)
    }
}

/// An incoming working-set record as submitted over the wire; a missing or
/// null id marks the record as pending
#[derive(Debug, Clone, Deserialize)]
pub struct IncomingRecord<R> {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(flatten)]
    pub row: R,
}

/// Result of one save reconciliation
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveReport {
    pub inserted: usize,
    pub updated: usize,
    pub failures: Vec<SaveFailure>,
}

/// A record that failed to persist during a save; the loop continued past it
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveFailure {
    /// Position of the record in the working set at save time
    pub position: usize,
    pub error: String,
}

impl SaveReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Working-set editor for one ordered content kind
pub struct Editor<R: EditableRecord> {
    store: Arc<dyn ContentStore>,
    records: Vec<WorkingRecord<R>>,
    next_local_key: u64,
    saving: bool,
}

impl<R: EditableRecord> Editor<R> {
    pub fn new(store: Arc<dyn ContentStore>) -> Self {
        Self {
            store,
            records: Vec::new(),
            next_local_key: 0,
            saving: false,
        }
    }

    /// Load the working set with one ordered remote read. An empty result
    /// is a valid empty working set - no static fallback here.
    pub async fn load(&mut self) -> Result<()> {
        let rows = self.store.fetch(R::TABLE, Some(Ordering::by_order())).await?;
        let mut records = Vec::with_capacity(rows.len());
        for row in rows {
            let envelope: RowEnvelope<R> = serde_json::from_value(row)?;
            records.push(WorkingRecord {
                id: RecordId::Persisted(envelope.id),
                row: envelope.row,
            });
        }
        self.records = records;
        Ok(())
    }

    /// Replace the working set wholesale (wire submissions); records
    /// without an id become pending.
    pub fn restore(&mut self, incoming: Vec<IncomingRecord<R>>) {
        self.records = incoming
            .into_iter()
            .map(|record| {
                let id = match record.id {
                    Some(id) if !id.is_empty() => RecordId::Persisted(id),
                    _ => {
                        self.next_local_key += 1;
                        RecordId::Pending(self.next_local_key)
                    }
                };
                WorkingRecord {
                    id,
                    row: record.row,
                }
            })
            .collect();
    }

    pub fn records(&self) -> &[WorkingRecord<R>] {
        &self.records
    }

    pub fn is_saving(&self) -> bool {
        self.saving
    }

    /// Append a new pending record, ordered after everything present
    pub fn add(&mut self, mut row: R) -> RecordId {
        row.set_order(self.records.len() as i32 + 1);
        self.next_local_key += 1;
        let id = RecordId::Pending(self.next_local_key);
        self.records.push(WorkingRecord {
            id: id.clone(),
            row,
        });
        id
    }

    /// Mutate one record by id. Returns false if the id is not in the set.
    pub fn edit(&mut self, id: &RecordId, f: impl FnOnce(&mut R)) -> bool {
        match self.records.iter_mut().find(|r| &r.id == id) {
            Some(record) => {
                f(&mut record.row);
                true
            }
            None => false,
        }
    }

    /// Remove one record. Pending records leave the local set only;
    /// persisted records are deleted remotely first and stay in the set if
    /// the delete fails.
    pub async fn remove(&mut self, id: &RecordId) -> Result<bool> {
        if let RecordId::Persisted(store_id) = id {
            self.store.delete(R::TABLE, store_id).await?;
            info!(table = R::TABLE, id = %store_id, "record deleted");
        }
        let before = self.records.len();
        self.records.retain(|r| &r.id != id);
        Ok(self.records.len() < before)
    }

    /// Reconcile the working set against the store: insert pending records
    /// (id omitted), update persisted ones, strictly in set order, one call
    /// at a time. Afterwards the set is re-read so assigned ids and
    /// ordering become visible.
    pub async fn save(&mut self) -> Result<SaveReport> {
        if self.saving {
            return Err(VitrineError::SaveInProgress);
        }
        self.saving = true;
        let outcome = self.reconcile().await;
        self.saving = false;
        outcome
    }

    async fn reconcile(&mut self) -> Result<SaveReport> {
        let mut report = SaveReport::default();

        for (position, record) in self.records.iter().enumerate() {
            let value = serde_json::to_value(&record.row)?;
            let outcome = match &record.id {
                RecordId::Pending(_) => {
                    self.store.insert(R::TABLE, value).await.map(|_| true)
                }
                RecordId::Persisted(store_id) => self
                    .store
                    .update(R::TABLE, store_id, value)
                    .await
                    .map(|_| false),
            };

            match outcome {
                Ok(true) => report.inserted += 1,
                Ok(false) => report.updated += 1,
                Err(e) => {
                    warn!(table = R::TABLE, position, error = %e, "record failed to persist");
                    report.failures.push(SaveFailure {
                        position,
                        error: e.to_string(),
                    });
                }
            }
        }

        info!(
            table = R::TABLE,
            inserted = report.inserted,
            updated = report.updated,
            failed = report.failures.len(),
            "working set saved"
        );

        self.load().await?;
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn skill(name: &str) -> SkillRow {
        SkillRow {
            name: name.into(),
            level: 80,
            icon_name: "Code2".into(),
            color_from: "indigo-500".into(),
            color_to: "blue-500".into(),
            order: 0,
        }
    }

    #[test]
    fn add_assigns_pending_id_and_next_order() {
        let mut editor: Editor<SkillRow> = Editor::new(Arc::new(MemoryStore::new()));
        let first = editor.add(skill("One"));
        let second = editor.add(skill("Two"));

        assert!(first.is_pending());
        assert_ne!(first, second);
        assert_eq!(editor.records()[0].row.order, 1);
        assert_eq!(editor.records()[1].row.order, 2);
    }

    #[test]
    fn edit_mutates_by_id() {
        let mut editor: Editor<SkillRow> = Editor::new(Arc::new(MemoryStore::new()));
        let id = editor.add(skill("One"));

        assert!(editor.edit(&id, |row| row.level = 99));
        assert_eq!(editor.records()[0].row.level, 99);
        assert!(!editor.edit(&RecordId::Persisted("missing".into()), |_| {}));
    }

    #[test]
    fn wire_ids() {
        assert_eq!(RecordId::Persisted("abc".into()).as_wire(), "abc");
        assert_eq!(RecordId::Pending(3).as_wire(), "pending-3");
    }

    #[tokio::test]
    async fn load_tags_every_record_persisted() {
        let store = Arc::new(MemoryStore::new());
        store.seed(
            storage::SKILLS,
            vec![serde_json::to_value(skill("One")).unwrap()],
        );

        let mut editor: Editor<SkillRow> = Editor::new(store);
        editor.load().await.unwrap();
        assert_eq!(editor.records().len(), 1);
        assert!(!editor.records()[0].id.is_pending());
    }
}
