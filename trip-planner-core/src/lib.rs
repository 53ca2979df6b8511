//! Trip Planner Core
//!
//! Platform-agnostic logic for the multi-step trip planner wizard: the static
//! catalog, per-day slot assignments, pricing, the wizard state machine, drag-and-drop
//! assignment and the mocked suggestion flow. No UI or browser dependencies.

pub mod catalog;
pub mod config;
pub mod customization;
pub mod drag_drop;
pub mod error;
pub mod itinerary;
pub mod numbers;
pub mod pricing;
pub mod session;
pub mod suggestions;
pub mod summary;
pub mod user_info;
pub mod wizard;

// Re-export commonly used types
pub use catalog::{Catalog, CatalogItem, Category};
pub use config::PlannerConfig;
pub use customization::{DayCustomization, DayPlan, SlotAssigner};
pub use drag_drop::{Bounds, DragDropHandler, DragPayload, DropTarget};
pub use error::{CatalogError, ConfigError, ExportError, SuggestionError, TransitionError};
pub use itinerary::{DayActivity, from_customizations, from_plan};
pub use pricing::{
    COMMISSION_RATE, PriceBreakdown, customization_total, day_total, format_amount,
    format_currency, format_price, price_breakdown,
};
pub use session::{SuggestionState, TripSession};
#[cfg(feature = "async")]
pub use suggestions::SuggestionTask;
pub use suggestions::{
    MockSuggestions, SUGGESTION_DELAY_MS, SuggestionProvider, TripPlan, base_budget_for,
    mock_plans, progress_for_elapsed,
};
pub use summary::{ResolvedDay, TripSummary, booking_reference, export_filename, render_text};
pub use user_info::{BUDGET_RANGES, MONTHS, ORIGIN_CITIES, UserInfo, UserInfoField};
pub use wizard::{WizardController, WizardFlow, WizardStep};

/// Trait for abstracting catalog and configuration loading.
/// Platform-specific implementations should provide this.
pub trait CatalogLoader {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Load the item catalog
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be loaded.
    fn load_catalog(&self) -> Result<Catalog, Self::Error>;

    /// Load configuration data for a specific system
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded or parsed.
    fn load_config<T>(&self, config_name: &str) -> Result<T, Self::Error>
    where
        T: serde::de::DeserializeOwned;
}

/// Loader backed by the JSON bundled into the crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedLoader;

impl CatalogLoader for EmbeddedLoader {
    type Error = CatalogError;

    fn load_catalog(&self) -> Result<Catalog, Self::Error> {
        Catalog::load_embedded()
    }

    fn load_config<T>(&self, config_name: &str) -> Result<T, Self::Error>
    where
        T: serde::de::DeserializeOwned,
    {
        let json = match config_name {
            "planner" => include_str!("../data/planner.json"),
            other => {
                log::warn!("no embedded config named '{other}', using empty object");
                "{}"
            }
        };
        Ok(serde_json::from_str(json)?)
    }
}

/// Entry point that builds sessions from loaded catalog and configuration.
pub struct PlannerEngine<L>
where
    L: CatalogLoader,
{
    loader: L,
}

impl<L> PlannerEngine<L>
where
    L: CatalogLoader,
{
    pub const fn new(loader: L) -> Self {
        Self { loader }
    }

    /// # Errors
    ///
    /// Returns an error if the catalog cannot be loaded.
    pub fn catalog(&self) -> Result<Catalog, L::Error> {
        self.loader.load_catalog()
    }

    /// Planner settings, falling back to defaults when the loader has none
    /// or they fail validation.
    #[must_use]
    pub fn config(&self) -> PlannerConfig {
        match self.loader.load_config::<PlannerConfig>("planner") {
            Ok(config) if config.validate().is_ok() => config,
            Ok(_) => {
                log::warn!("planner config failed validation, using defaults");
                PlannerConfig::default()
            }
            Err(err) => {
                log::warn!("planner config unavailable ({err}), using defaults");
                PlannerConfig::default()
            }
        }
    }

    /// Start a new wizard session for `flow`.
    #[must_use]
    pub fn create_session(&self, flow: WizardFlow) -> TripSession {
        TripSession::new(flow, self.config())
    }

    /// Catalog plus a fresh session, the pair every front-end needs.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be loaded.
    pub fn start(&self, flow: WizardFlow) -> Result<(Catalog, TripSession), L::Error> {
        let catalog = self.catalog()?;
        Ok((catalog, self.create_session(flow)))
    }
}
