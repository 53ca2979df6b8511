//! Web-side planner data loading
//!
//! Re-exports the core planner types and provides the loader used by the
//! browser front-end.

use serde::de::DeserializeOwned;

// Re-export all types from trip-planner-core
pub use trip_planner_core::*;

/// Loader for the catalog and planner settings bundled with the front-end.
#[derive(Debug, Clone, Copy, Default)]
pub struct WebCatalogLoader;

#[derive(Debug, thiserror::Error)]
pub enum WebDataError {
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CatalogLoader for WebCatalogLoader {
    type Error = WebDataError;

    fn load_catalog(&self) -> Result<Catalog, Self::Error> {
        Ok(Catalog::load_embedded()?)
    }

    fn load_config<T>(&self, config_name: &str) -> Result<T, Self::Error>
    where
        T: DeserializeOwned,
    {
        Ok(EmbeddedLoader.load_config(config_name)?)
    }
}

/// Catalog and settings for a fresh wizard.
///
/// A catalog that fails to load is logged and replaced with an empty one so the
/// wizard still renders; every slot then resolves to "not selected".
#[must_use]
pub fn load_planner() -> (Catalog, PlannerConfig) {
    let engine = PlannerEngine::new(WebCatalogLoader);
    let catalog = engine.catalog().unwrap_or_else(|err| {
        log::error!("failed to load catalog: {err}");
        Catalog::empty()
    });
    (catalog, engine.config())
}

/// New session for `flow` using the bundled settings.
#[must_use]
pub fn new_session(flow: WizardFlow) -> TripSession {
    PlannerEngine::new(WebCatalogLoader).create_session(flow)
}
