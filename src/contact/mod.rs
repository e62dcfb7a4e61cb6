//! Contact intake - persist first, notify best-effort
//!
//! A visitor submission is durable once it lands in the store; the email
//! relay is a courtesy on top. Persistence failure (with a configured
//! store) fails the submission. Relay failure never does - it is logged and
//! the submitter still sees success. With no store configured the relay is
//! the sole durability mechanism, and with neither configured the payload
//! is logged and the submission is still accepted: the visitor is never
//! blocked on notification infrastructure.

pub mod relay;

use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use tracing::{info, warn};

use crate::content::storage;
use crate::store::ContentStore;
use crate::types::{Result, VitrineError};

pub use relay::{NotificationRelay, RelayConfig, ResendRelay};

/// A visitor-submitted contact message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactMessage {
    /// All three fields are required and must be non-blank
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty()
            || self.email.trim().is_empty()
            || self.message.trim().is_empty()
        {
            return Err(VitrineError::BadRequest("missing required fields".into()));
        }
        Ok(())
    }
}

/// What actually happened to an accepted submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IntakeOutcome {
    pub persisted: bool,
    pub notified: bool,
}

/// Accepts visitor submissions, persisting and relaying them
pub struct ContactIntake {
    store: Arc<dyn ContentStore>,
    relay: Option<Arc<dyn NotificationRelay>>,
}

impl ContactIntake {
    pub fn new(store: Arc<dyn ContentStore>, relay: Option<Arc<dyn NotificationRelay>>) -> Self {
        Self { store, relay }
    }

    /// Handle one submission. Returns `Err` only for invalid input or a
    /// failed persistence write against a configured store.
    pub async fn submit(&self, message: ContactMessage) -> Result<IntakeOutcome> {
        message.validate()?;

        let persisted = if self.store.is_configured() {
            self.store
                .insert(
                    storage::CONTACT_MESSAGES,
                    json!({
                        "name": message.name,
                        "email": message.email,
                        "message": message.message,
                        "is_read": false,
                    }),
                )
                .await?;
            true
        } else {
            false
        };

        let notified = match &self.relay {
            Some(relay) => match relay.send_notification(&message).await {
                Ok(()) => true,
                Err(e) => {
                    warn!(error = %e, "contact notification failed");
                    false
                }
            },
            None => false,
        };

        if !persisted && !notified {
            // Accept-and-log: nothing durable is configured
            info!(
                name = %message.name,
                email = %message.email,
                "contact message accepted with no store or relay configured"
            );
        }

        Ok(IntakeOutcome {
            persisted,
            notified,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{MemoryStore, PostgrestStore};

    fn message() -> ContactMessage {
        ContactMessage {
            name: "A".into(),
            email: "a@b.com".into(),
            message: "hi".into(),
        }
    }

    #[tokio::test]
    async fn blank_fields_are_rejected() {
        let intake = ContactIntake::new(Arc::new(MemoryStore::new()), None);
        let err = intake
            .submit(ContactMessage {
                name: "  ".into(),
                ..message()
            })
            .await
            .unwrap_err();
        assert!(matches!(err, VitrineError::BadRequest(_)));
    }

    #[tokio::test]
    async fn configured_store_without_relay_persists_once() {
        let store = Arc::new(MemoryStore::new());
        let intake = ContactIntake::new(store.clone(), None);

        let outcome = intake.submit(message()).await.unwrap();
        assert_eq!(
            outcome,
            IntakeOutcome {
                persisted: true,
                notified: false
            }
        );
        assert_eq!(store.len(storage::CONTACT_MESSAGES), 1);
    }

    #[tokio::test]
    async fn unconfigured_store_still_accepts() {
        let intake = ContactIntake::new(Arc::new(PostgrestStore::unconfigured()), None);
        let outcome = intake.submit(message()).await.unwrap();
        assert_eq!(
            outcome,
            IntakeOutcome {
                persisted: false,
                notified: false
            }
        );
    }
}
