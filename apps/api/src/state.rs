use std::sync::Arc;

use crate::store::RecruitmentStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable persistence. Default: PgStore over the sqlx pool.
    pub store: Arc<dyn RecruitmentStore>,
}
