use database::storage::memory::MemoryStore;
use database::storage::{Context, ProjectStore, ThresholdStore};
use statistics::StatisticsManager;
use std::sync::Arc;

/// Shared by all workers; store handles are injected here instead of living
/// in process-wide globals.
#[derive(Clone)]
pub struct AppState {
    pub projects: Arc<dyn ProjectStore>,
    pub thresholds: Arc<dyn ThresholdStore>,
    pub statistics: StatisticsManager,
}

impl AppState {
    pub fn from_context(db_context: &Context, statistics: StatisticsManager) -> Self {
        Self {
            projects: Arc::new(db_context.dashboard_database_stg()),
            thresholds: Arc::new(db_context.color_settings_stg()),
            statistics,
        }
    }

    pub fn in_memory(store: Arc<MemoryStore>, statistics: StatisticsManager) -> Self {
        Self {
            projects: store.clone(),
            thresholds: store,
            statistics,
        }
    }
}
