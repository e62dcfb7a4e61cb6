//! Contact message inbox - the read side of contact intake
//!
//! Messages list newest-first; the operator can mark them read or delete
//! them. Deletes go straight to the store (messages are never pending).

use std::sync::Arc;

use serde::Serialize;
use serde_json::json;

use crate::content::storage::{self, ContactMessageRow, RowEnvelope};
use crate::store::{ContentStore, Ordering};
use crate::types::Result;

/// A stored contact message with its id
#[derive(Debug, Clone, Serialize)]
pub struct StoredMessage {
    pub id: String,
    #[serde(flatten)]
    pub message: ContactMessageRow,
}

pub struct MessageInbox {
    store: Arc<dyn ContentStore>,
}

impl MessageInbox {
    pub fn new(store: Arc<dyn ContentStore>) -> Self {
        Self { store }
    }

    /// List all messages, newest first
    pub async fn list(&self) -> Result<Vec<StoredMessage>> {
        let rows = self
            .store
            .fetch(storage::CONTACT_MESSAGES, Some(Ordering::newest_first()))
            .await?;

        let mut messages = Vec::with_capacity(rows.len());
        for row in rows {
            let envelope: RowEnvelope<ContactMessageRow> = serde_json::from_value(row)?;
            messages.push(StoredMessage {
                id: envelope.id,
                message: envelope.row,
            });
        }
        Ok(messages)
    }

    pub async fn mark_read(&self, id: &str) -> Result<()> {
        self.store
            .update(storage::CONTACT_MESSAGES, id, json!({ "is_read": true }))
            .await?;
        Ok(())
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        self.store.delete(storage::CONTACT_MESSAGES, id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn seeded_store() -> Arc<MemoryStore> {
        let store = MemoryStore::new();
        store.seed(
            storage::CONTACT_MESSAGES,
            vec![
                json!({
                    "name": "Older",
                    "email": "old@example.com",
                    "message": "first",
                    "is_read": false,
                    "created_at": "2025-01-01T00:00:00Z",
                }),
                json!({
                    "name": "Newer",
                    "email": "new@example.com",
                    "message": "second",
                    "is_read": false,
                    "created_at": "2025-06-01T00:00:00Z",
                }),
            ],
        );
        Arc::new(store)
    }

    #[tokio::test]
    async fn lists_newest_first() {
        let inbox = MessageInbox::new(seeded_store());
        let messages = inbox.list().await.unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].message.name, "Newer");
        assert_eq!(messages[1].message.name, "Older");
    }

    #[tokio::test]
    async fn mark_read_flips_flag() {
        let store = seeded_store();
        let inbox = MessageInbox::new(store.clone());
        let id = inbox.list().await.unwrap()[0].id.clone();

        inbox.mark_read(&id).await.unwrap();
        let messages = inbox.list().await.unwrap();
        assert!(messages.iter().find(|m| m.id == id).unwrap().message.is_read);
    }

    #[tokio::test]
    async fn delete_removes_message() {
        let store = seeded_store();
        let inbox = MessageInbox::new(store.clone());
        let id = inbox.list().await.unwrap()[0].id.clone();

        inbox.delete(&id).await.unwrap();
        assert_eq!(inbox.list().await.unwrap().len(), 1);
    }
}
