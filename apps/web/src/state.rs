use std::sync::Arc;

use crate::contact::{ContactStore, ErrorClassifier};
use crate::content::Portfolio;

/// Shared application state injected into all route handlers via Axum extractors.
/// Everything here is read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub content: Arc<Portfolio>,
    /// Pluggable contact store. Default: SupabaseContactStore.
    pub contact_store: Arc<dyn ContactStore>,
    pub classifier: Arc<ErrorClassifier>,
}
