//! In-memory store backend
//!
//! Dev-mode and test double for the hosted store: a table map assigning
//! uuid ids on insert and stamping `created_at`. Always configured.

use async_trait::async_trait;
use dashmap::DashMap;
use serde_json::Value;
use uuid::Uuid;

use crate::store::{ContentStore, Ordering};
use crate::types::{Result, VitrineError};

#[derive(Default)]
pub struct MemoryStore {
    tables: DashMap<String, Vec<Value>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Preload a table with rows (test/dev seeding). Rows without an id get
    /// one assigned.
    pub fn seed(&self, table: &str, rows: Vec<Value>) {
        let mut seeded = Vec::with_capacity(rows.len());
        for mut row in rows {
            if let Some(obj) = row.as_object_mut() {
                obj.entry("id")
                    .or_insert_with(|| Value::String(Uuid::new_v4().to_string()));
            }
            seeded.push(row);
        }
        self.tables.insert(table.to_string(), seeded);
    }

    /// Number of rows currently in a table
    pub fn len(&self, table: &str) -> usize {
        self.tables.get(table).map(|t| t.len()).unwrap_or(0)
    }

    pub fn is_empty(&self, table: &str) -> bool {
        self.len(table) == 0
    }

    fn sort_rows(rows: &mut [Value], order: Ordering) {
        rows.sort_by(|a, b| {
            let a = a.get(order.column);
            let b = b.get(order.column);
            let cmp = match (a, b) {
                (Some(Value::Number(x)), Some(Value::Number(y))) => x
                    .as_f64()
                    .partial_cmp(&y.as_f64())
                    .unwrap_or(std::cmp::Ordering::Equal),
                (Some(Value::String(x)), Some(Value::String(y))) => x.cmp(y),
                (Some(_), None) => std::cmp::Ordering::Less,
                (None, Some(_)) => std::cmp::Ordering::Greater,
                _ => std::cmp::Ordering::Equal,
            };
            if order.ascending {
                cmp
            } else {
                cmp.reverse()
            }
        });
    }

    fn row_id(row: &Value) -> Option<&str> {
        row.get("id").and_then(Value::as_str)
    }
}

#[async_trait]
impl ContentStore for MemoryStore {
    fn is_configured(&self) -> bool {
        true
    }

    async fn fetch(&self, table: &str, order: Option<Ordering>) -> Result<Vec<Value>> {
        let mut rows = self
            .tables
            .get(table)
            .map(|t| t.clone())
            .unwrap_or_default();
        if let Some(order) = order {
            Self::sort_rows(&mut rows, order);
        }
        Ok(rows)
    }

    async fn fetch_one(&self, table: &str) -> Result<Option<Value>> {
        Ok(self
            .tables
            .get(table)
            .and_then(|t| t.first().cloned()))
    }

    async fn insert(&self, table: &str, mut record: Value) -> Result<Value> {
        let obj = record
            .as_object_mut()
            .ok_or_else(|| VitrineError::BadRequest("record must be a JSON object".into()))?;
        obj.insert("id".into(), Value::String(Uuid::new_v4().to_string()));
        obj.entry("created_at")
            .or_insert_with(|| Value::String(chrono::Utc::now().to_rfc3339()));

        self.tables
            .entry(table.to_string())
            .or_default()
            .push(record.clone());
        Ok(record)
    }

    async fn update(&self, table: &str, id: &str, record: Value) -> Result<Value> {
        let patch = record
            .as_object()
            .ok_or_else(|| VitrineError::BadRequest("record must be a JSON object".into()))?
            .clone();

        let mut rows = self
            .tables
            .get_mut(table)
            .ok_or_else(|| VitrineError::NotFound(format!("{}/{}", table, id)))?;

        let row = rows
            .iter_mut()
            .find(|r| Self::row_id(r) == Some(id))
            .ok_or_else(|| VitrineError::NotFound(format!("{}/{}", table, id)))?;

        if let Some(obj) = row.as_object_mut() {
            for (key, value) in patch {
                if key != "id" {
                    obj.insert(key, value);
                }
            }
        }
        Ok(row.clone())
    }

    async fn delete(&self, table: &str, id: &str) -> Result<()> {
        if let Some(mut rows) = self.tables.get_mut(table) {
            rows.retain(|r| Self::row_id(r) != Some(id));
        }
        Ok(())
    }
}
