//! Contact store: the external table contact submissions are written to.
//!
//! The store is opaque: storage, access policy and any validation beyond the
//! required fields live on its side. The only operation is inserting one row.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::contact::models::ContactRecord;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Store rejected insert (status {status}): {}", .message.as_deref().unwrap_or("no message"))]
    Rejected {
        status: u16,
        message: Option<String>,
    },
}

impl StoreError {
    /// The text a visitor may be shown, if the store answered with one.
    /// Transport failures never carry one.
    pub fn server_message(&self) -> Option<String> {
        match self {
            StoreError::Http(_) => None,
            StoreError::Rejected { message, .. } => message.clone(),
        }
    }
}

/// Longest plain-text error body passed through as a message.
const MAX_TEXT_MESSAGE_LEN: usize = 200;

/// PostgREST `message` if the body is its JSON error, else a short plain-text
/// body. Markup (proxy error pages) and empty bodies yield nothing.
fn rejection_message(body: &str) -> Option<String> {
    if let Ok(err) = serde_json::from_str::<PostgrestError>(body) {
        return err.message;
    }
    let text = body.trim();
    if text.is_empty() || text.starts_with('<') || text.chars().count() > MAX_TEXT_MESSAGE_LEN {
        return None;
    }
    Some(text.to_string())
}

/// Write side of the contact flow. `AppState` carries it as `Arc<dyn ContactStore>`.
#[async_trait]
pub trait ContactStore: Send + Sync {
    async fn insert(&self, record: &ContactRecord) -> Result<(), StoreError>;
}

#[derive(Debug, Deserialize)]
struct PostgrestError {
    message: Option<String>,
}

/// Inserts into a Supabase table through its PostgREST endpoint.
#[derive(Clone)]
pub struct SupabaseContactStore {
    client: Client,
    insert_url: String,
    api_key: String,
}

impl SupabaseContactStore {
    pub fn new(
        base_url: &str,
        api_key: String,
        table: &str,
        timeout: Duration,
    ) -> Result<Self, StoreError> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            insert_url: format!("{}/rest/v1/{}", base_url.trim_end_matches('/'), table),
            api_key,
        })
    }
}

#[async_trait]
impl ContactStore for SupabaseContactStore {
    async fn insert(&self, record: &ContactRecord) -> Result<(), StoreError> {
        let response = self
            .client
            .post(&self.insert_url)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .header("prefer", "return=minimal")
            .json(&[record])
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            debug!("Contact row inserted (status {})", status);
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(StoreError::Rejected {
            status: status.as_u16(),
            message: rejection_message(&body),
        })
    }
}
