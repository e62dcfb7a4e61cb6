//! PostgREST store client
//!
//! Speaks the REST dialect of the hosted backend-as-a-service:
//! `GET /rest/v1/{table}?select=*&order=col.asc`, `POST` with
//! `Prefer: return=representation`, `PATCH`/`DELETE` filtered by
//! `?id=eq.{id}`. Every request carries the anon key as both `apikey` and
//! bearer token.
//!
//! Missing URL or key is a recognized steady state: the store reports
//! unconfigured and the resolver serves static defaults without ever
//! touching the network.

use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info};

use crate::store::{ContentStore, Ordering};
use crate::types::{Result, VitrineError};

/// Connection settings for the hosted store
#[derive(Debug, Clone, Default)]
pub struct PostgrestConfig {
    /// Base URL of the hosted backend (e.g. `https://xyz.supabase.co`)
    pub url: Option<String>,
    /// Anon/service API key
    pub api_key: Option<String>,
    /// Per-request timeout in milliseconds
    pub timeout_ms: u64,
}

impl PostgrestConfig {
    pub fn is_complete(&self) -> bool {
        matches!((&self.url, &self.api_key), (Some(u), Some(k)) if !u.is_empty() && !k.is_empty())
    }
}

struct Endpoint {
    base_url: String,
    api_key: String,
}

/// HTTP client for the hosted content store
pub struct PostgrestStore {
    client: reqwest::Client,
    endpoint: Option<Endpoint>,
}

impl PostgrestStore {
    /// Build the client. With an incomplete config this still succeeds and
    /// yields an unconfigured store; only transport setup can fail.
    pub fn init(config: PostgrestConfig) -> Result<Self> {
        let timeout = if config.timeout_ms > 0 {
            config.timeout_ms
        } else {
            10_000
        };
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(timeout))
            .build()?;

        let endpoint = if config.is_complete() {
            let base_url = config.url.unwrap_or_default();
            info!("Content store configured at {}", base_url);
            Some(Endpoint {
                base_url: base_url.trim_end_matches('/').to_string(),
                api_key: config.api_key.unwrap_or_default(),
            })
        } else {
            info!("Content store not configured - serving static defaults");
            None
        };

        Ok(Self { client, endpoint })
    }

    /// A store with no endpoint at all
    pub fn unconfigured() -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: None,
        }
    }

    fn endpoint(&self) -> Result<&Endpoint> {
        self.endpoint
            .as_ref()
            .ok_or_else(|| VitrineError::Store("remote store is not configured".into()))
    }

    fn request(&self, method: reqwest::Method, url: String) -> Result<reqwest::RequestBuilder> {
        let endpoint = self.endpoint()?;
        Ok(self
            .client
            .request(method, url)
            .header("apikey", &endpoint.api_key)
            .bearer_auth(&endpoint.api_key)
            .header("X-Client-Info", "vitrine"))
    }

    async fn check(response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(VitrineError::Store(format!(
                "store returned {}: {}",
                status, body
            )))
        }
    }
}

/// `{base}/rest/v1/{table}`
fn table_url(base_url: &str, table: &str) -> String {
    format!("{}/rest/v1/{}", base_url, table)
}

/// `order=col.asc` / `order=col.desc`
fn order_param(order: Ordering) -> String {
    format!(
        "{}.{}",
        order.column,
        if order.ascending { "asc" } else { "desc" }
    )
}

#[async_trait]
impl ContentStore for PostgrestStore {
    fn is_configured(&self) -> bool {
        self.endpoint.is_some()
    }

    async fn fetch(&self, table: &str, order: Option<Ordering>) -> Result<Vec<Value>> {
        let url = table_url(&self.endpoint()?.base_url, table);
        let mut request = self
            .request(reqwest::Method::GET, url)?
            .query(&[("select", "*")]);
        if let Some(order) = order {
            request = request.query(&[("order", order_param(order))]);
        }

        let response = Self::check(request.send().await?).await?;
        let rows: Vec<Value> = response.json().await?;
        debug!(table, rows = rows.len(), "fetched rows");
        Ok(rows)
    }

    async fn fetch_one(&self, table: &str) -> Result<Option<Value>> {
        let url = table_url(&self.endpoint()?.base_url, table);
        let request = self
            .request(reqwest::Method::GET, url)?
            .query(&[("select", "*"), ("limit", "1")]);

        let response = Self::check(request.send().await?).await?;
        let rows: Vec<Value> = response.json().await?;
        Ok(rows.into_iter().next())
    }

    async fn insert(&self, table: &str, record: Value) -> Result<Value> {
        let url = table_url(&self.endpoint()?.base_url, table);
        let request = self
            .request(reqwest::Method::POST, url)?
            .header("Prefer", "return=representation")
            .json(&record);

        let response = Self::check(request.send().await?).await?;
        let mut rows: Vec<Value> = response.json().await?;
        rows.pop()
            .ok_or_else(|| VitrineError::Store("insert returned no representation".into()))
    }

    async fn update(&self, table: &str, id: &str, record: Value) -> Result<Value> {
        let url = table_url(&self.endpoint()?.base_url, table);
        let request = self
            .request(reqwest::Method::PATCH, url)?
            .query(&[("id", format!("eq.{}", id))])
            .header("Prefer", "return=representation")
            .json(&record);

        let response = Self::check(request.send().await?).await?;
        let mut rows: Vec<Value> = response.json().await?;
        rows.pop()
            .ok_or_else(|| VitrineError::NotFound(format!("{}/{}", table, id)))
    }

    async fn delete(&self, table: &str, id: &str) -> Result<()> {
        let url = table_url(&self.endpoint()?.base_url, table);
        let request = self
            .request(reqwest::Method::DELETE, url)?
            .query(&[("id", format!("eq.{}", id))]);

        Self::check(request.send().await?).await?;
        Ok(())
    }
}
