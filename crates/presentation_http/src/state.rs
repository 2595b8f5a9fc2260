//! Application state shared across handlers

use std::sync::Arc;

use application::{CatalogService, HealthConfig, HealthService, VibeService};
use infrastructure::VideoServerAdapters;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Query pipeline
    pub vibe_service: Arc<VibeService>,
    /// Gallery listing and lookup
    pub catalog_service: Arc<CatalogService>,
    /// Backend health probes
    pub health_service: Arc<HealthService>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("vibe_service", &self.vibe_service)
            .field("catalog_service", &self.catalog_service)
            .field("health_service", &self.health_service)
            .finish()
    }
}

impl AppState {
    /// Wire every service to the given ports
    #[must_use]
    pub fn new(adapters: VideoServerAdapters, health: HealthConfig) -> Self {
        let VideoServerAdapters {
            classifier,
            search,
            catalog,
        } = adapters;

        Self {
            vibe_service: Arc::new(VibeService::new(classifier, search, Arc::clone(&catalog))),
            catalog_service: Arc::new(CatalogService::new(Arc::clone(&catalog))),
            health_service: Arc::new(HealthService::new(catalog).with_config(health)),
        }
    }
}
