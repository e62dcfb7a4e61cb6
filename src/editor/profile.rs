//! Profile editor - the single personal-info record
//!
//! Profile has exactly one row, so its save path is a single update keyed
//! by the loaded id, stamping `updated_at`. There is no insert/delete path.

use serde_json::Value;
use std::sync::Arc;
use tracing::info;

use crate::content::storage::{self, ProfileRow, RowEnvelope};
use crate::store::ContentStore;
use crate::types::{Result, VitrineError};

pub struct ProfileEditor {
    store: Arc<dyn ContentStore>,
    record: Option<(String, ProfileRow)>,
}

impl ProfileEditor {
    pub fn new(store: Arc<dyn ContentStore>) -> Self {
        Self {
            store,
            record: None,
        }
    }

    /// Load the profile record, if the store has one
    pub async fn load(&mut self) -> Result<()> {
        self.record = match self.store.fetch_one(storage::PERSONAL_INFO).await? {
            Some(row) => {
                let envelope: RowEnvelope<ProfileRow> = serde_json::from_value(row)?;
                Some((envelope.id, envelope.row))
            }
            None => None,
        };
        Ok(())
    }

    pub fn record(&self) -> Option<&ProfileRow> {
        self.record.as_ref().map(|(_, row)| row)
    }

    /// Mutate the loaded record in place
    pub fn edit(&mut self, f: impl FnOnce(&mut ProfileRow)) -> Result<()> {
        match &mut self.record {
            Some((_, row)) => {
                f(row);
                Ok(())
            }
            None => Err(VitrineError::NotFound("profile record not loaded".into())),
        }
    }

    /// Replace the loaded record's fields wholesale (wire submissions)
    pub fn replace(&mut self, row: ProfileRow) -> Result<()> {
        match &mut self.record {
            Some((_, current)) => {
                *current = row;
                Ok(())
            }
            None => Err(VitrineError::NotFound("profile record not loaded".into())),
        }
    }

    /// Persist the record with a single update, stamping `updated_at`
    pub async fn save(&mut self) -> Result<()> {
        let (id, row) = self
            .record
            .as_ref()
            .ok_or_else(|| VitrineError::NotFound("profile record not loaded".into()))?;

        let mut value = serde_json::to_value(row)?;
        if let Some(obj) = value.as_object_mut() {
            obj.insert(
                "updated_at".into(),
                Value::String(chrono::Utc::now().to_rfc3339()),
            );
        }

        self.store
            .update(storage::PERSONAL_INFO, id, value)
            .await?;
        info!(id = %id, "profile saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use serde_json::json;

    fn seed_profile(store: &MemoryStore) {
        store.seed(
            storage::PERSONAL_INFO,
            vec![json!({
                "name": "Avery",
                "full_name": "Avery Chen",
                "title": "Developer",
                "tagline": "t",
                "email": "a@b.dev",
                "location": "Remote",
                "bio": "b",
                "extended_bio": "eb",
            })],
        );
    }

    #[tokio::test]
    async fn load_edit_save_round_trip() {
        let store = Arc::new(MemoryStore::new());
        seed_profile(&store);

        let mut editor = ProfileEditor::new(store.clone());
        editor.load().await.unwrap();
        editor.edit(|row| row.title = "Staff Developer".into()).unwrap();
        editor.save().await.unwrap();

        let stored = store.fetch_one(storage::PERSONAL_INFO).await.unwrap().unwrap();
        assert_eq!(stored["title"], "Staff Developer");
        assert!(stored["updated_at"].is_string());
    }

    #[tokio::test]
    async fn save_without_record_is_not_found() {
        let mut editor = ProfileEditor::new(Arc::new(MemoryStore::new()));
        editor.load().await.unwrap();
        let err = editor.save().await.unwrap_err();
        assert!(matches!(err, VitrineError::NotFound(_)));
    }
}
