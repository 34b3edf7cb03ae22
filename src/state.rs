use std::sync::Arc;

use crate::config::Environment;
use crate::error::AppError;
use crate::services::document_service::DocumentStore;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    /// `None` when no database was configured at startup.
    pub store: Option<Arc<dyn DocumentStore>>,
    pub environment: Environment,
    pub jwt_secret_configured: bool,
}

impl AppState {
    /// Document store, or `DatabaseUnavailable` when running without a database.
    pub fn store(&self) -> Result<&dyn DocumentStore, AppError> {
        self.store.as_deref().ok_or(AppError::DatabaseUnavailable)
    }
}
