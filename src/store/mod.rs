//! Remote store access
//!
//! The hosted backing store is an opaque external collaborator. Vitrine
//! talks to it through the [`ContentStore`] trait so the PostgREST client,
//! the in-memory dev/test backend, and anything else can be swapped without
//! touching the resolver or the editors. Store clients are constructed
//! explicitly and injected at construction time; there is no module-level
//! singleton.

pub mod memory;
pub mod postgrest;

use async_trait::async_trait;
use serde_json::Value;

use crate::types::Result;

pub use memory::MemoryStore;
pub use postgrest::{PostgrestConfig, PostgrestStore};

/// Sort specification for a store read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ordering {
    pub column: &'static str,
    pub ascending: bool,
}

impl Ordering {
    /// Ascending by the explicit `order` field - the storage intent for
    /// display ordering
    pub fn by_order() -> Self {
        Self {
            column: "order",
            ascending: true,
        }
    }

    /// Newest first by creation time (contact message inbox)
    pub fn newest_first() -> Self {
        Self {
            column: "created_at",
            ascending: false,
        }
    }
}

/// Operations the core consumes from the external backing store.
///
/// Rows cross this boundary as raw JSON objects; typed parsing happens in
/// the callers (resolver, editors) so the trait stays object-safe and
/// table-agnostic.
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Whether the store has an endpoint and credentials to talk to.
    /// Unconfigured is a recognized steady state, not an error.
    fn is_configured(&self) -> bool;

    /// Read all rows of a table, optionally sorted
    async fn fetch(&self, table: &str, order: Option<Ordering>) -> Result<Vec<Value>>;

    /// Read the single row of a singleton table (personal info)
    async fn fetch_one(&self, table: &str) -> Result<Option<Value>>;

    /// Insert a record without an id; the store assigns one and returns the
    /// stored row
    async fn insert(&self, table: &str, record: Value) -> Result<Value>;

    /// Update a record by id, returning the stored row
    async fn update(&self, table: &str, id: &str, record: Value) -> Result<Value>;

    /// Delete a record by id
    async fn delete(&self, table: &str, id: &str) -> Result<()>;
}
