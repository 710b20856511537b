use pr_auth::JwtValidator;
use pr_core::PersonService;

use std::path::PathBuf;
use std::sync::Arc;

use sqlx::SqlitePool;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<PersonService>,
    pub jwt_validator: Arc<JwtValidator>,
    /// Used by the readiness probe only; handlers go through `service`
    pub pool: SqlitePool,
    /// Served read-only under `/pictures`
    pub upload_dir: PathBuf,
    /// Body limit for the upload route
    pub max_upload_bytes: usize,
}
