//! Mocked "AI" trip suggestions.
//!
//! The provider is synchronous and deterministic; the artificial wait lives in the
//! caller (a browser timer in the web front-end, [`SuggestionTask`] natively) so it can
//! be cancelled without touching the session.
use crate::numbers::{i64_to_f64, percent_of, round_f64_to_i64};
use crate::user_info::UserInfo;
use serde::{Deserialize, Serialize};

/// Default wait before suggestions appear.
pub const SUGGESTION_DELAY_MS: u64 = 3000;

/// A pre-packaged trip the user can choose instead of customizing day by day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripPlan {
    pub id: String,
    pub title: String,
    pub cities: Vec<String>,
    pub duration: u32,
    /// Whole currency units
    pub budget: i64,
    pub theme: String,
    pub description: String,
    pub highlights: Vec<String>,
    #[serde(default)]
    pub badge: Option<String>,
}

impl TripPlan {
    /// `"Dubai → Abu Dhabi"`
    #[must_use]
    pub fn route_label(&self) -> String {
        self.cities.join(" → ")
    }
}

/// Map a budget range label to the base budget the plans are scaled from.
#[must_use]
pub fn base_budget_for(budget_label: &str) -> i64 {
    if budget_label.contains("25,000") {
        35_000
    } else if budget_label.contains("50,000") {
        65_000
    } else if budget_label.contains("1,00,000") {
        120_000
    } else {
        85_000
    }
}

struct PlanTemplate {
    id: &'static str,
    title: &'static str,
    cities: &'static [&'static str],
    multiplier: f64,
    theme: &'static str,
    description: &'static str,
    highlights: [&'static str; 5],
    badge: &'static str,
}

const PLAN_TEMPLATES: [PlanTemplate; 3] = [
    PlanTemplate {
        id: "1",
        title: "Dubai Luxury Experience",
        cities: &["Dubai"],
        multiplier: 1.2,
        theme: "Luxury & Modern Marvels",
        description: "Experience the pinnacle of luxury in the world's most glamorous city",
        highlights: [
            "Burj Khalifa Top Deck",
            "Atlantis The Palm Stay",
            "Dubai Mall Shopping",
            "Desert Safari Adventure",
            "Luxury SUV Transport",
        ],
        badge: "🏆 Most Popular",
    },
    PlanTemplate {
        id: "2",
        title: "UAE Grand Tour",
        cities: &["Dubai", "Abu Dhabi", "Ras Al Khaimah"],
        multiplier: 0.9,
        theme: "Cultural Heritage & Adventure",
        description: "Discover the rich culture and modern wonders across three emirates",
        highlights: [
            "Sheikh Zayed Grand Mosque",
            "Ferrari World Abu Dhabi",
            "Jebel Jais Zipline",
            "Louvre Abu Dhabi",
            "Multi-Emirate Experience",
        ],
        badge: "🌟 Best Value",
    },
    PlanTemplate {
        id: "3",
        title: "Family Fun UAE",
        cities: &["Dubai", "Abu Dhabi"],
        multiplier: 0.8,
        theme: "Family Entertainment",
        description: "Perfect family adventure with theme parks and kid-friendly attractions",
        highlights: [
            "Wild Wadi Waterpark",
            "Ski Dubai Experience",
            "Warner Bros World",
            "Dubai Miracle Garden",
            "Family-Friendly Hotels",
        ],
        badge: "👨‍👩‍👧‍👦 Family Favorite",
    },
];

/// The three canned plans, scaled to the traveler's budget and duration.
#[must_use]
pub fn mock_plans(info: &UserInfo) -> Vec<TripPlan> {
    let base = i64_to_f64(base_budget_for(&info.budget));
    PLAN_TEMPLATES
        .iter()
        .map(|template| TripPlan {
            id: template.id.to_string(),
            title: template.title.to_string(),
            cities: template.cities.iter().map(ToString::to_string).collect(),
            duration: info.duration,
            budget: round_f64_to_i64(base * template.multiplier),
            theme: template.theme.to_string(),
            description: template.description.to_string(),
            highlights: template.highlights.iter().map(ToString::to_string).collect(),
            badge: Some(template.badge.to_string()),
        })
        .collect()
}

/// Source of suggested plans. A real backend would implement this.
pub trait SuggestionProvider {
    fn suggest(&self, info: &UserInfo) -> Vec<TripPlan>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MockSuggestions;

impl SuggestionProvider for MockSuggestions {
    fn suggest(&self, info: &UserInfo) -> Vec<TripPlan> {
        log::debug!("generating mock suggestions for budget '{}'", info.budget);
        mock_plans(info)
    }
}

/// Loading-bar percentage after `elapsed_ms` of a `delay_ms` wait.
#[must_use]
pub fn progress_for_elapsed(elapsed_ms: u64, delay_ms: u64) -> u8 {
    if delay_ms == 0 {
        return 100;
    }
    percent_of(elapsed_ms, delay_ms)
}

#[cfg(feature = "async")]
pub use task::SuggestionTask;

#[cfg(feature = "async")]
mod task {
    use super::{SuggestionProvider, TripPlan};
    use crate::error::SuggestionError;
    use crate::user_info::UserInfo;
    use std::time::Duration;
    use tokio::task::JoinHandle;

    /// Delayed suggestion request running on the tokio runtime.
    #[derive(Debug)]
    pub struct SuggestionTask {
        handle: JoinHandle<Vec<TripPlan>>,
    }

    impl SuggestionTask {
        pub fn spawn<P>(provider: P, info: UserInfo, delay: Duration) -> Self
        where
            P: SuggestionProvider + Send + 'static,
        {
            let handle = tokio::spawn(async move {
                tokio::time::sleep(delay).await;
                provider.suggest(&info)
            });
            Self { handle }
        }

        /// Abort the wait. A later [`wait`](Self::wait) reports `Cancelled`.
        pub fn cancel(&self) {
            self.handle.abort();
        }

        #[must_use]
        pub fn is_finished(&self) -> bool {
            self.handle.is_finished()
        }

        /// # Errors
        ///
        /// Returns `Cancelled` after [`cancel`](Self::cancel), or `Failed` if the task panicked.
        pub async fn wait(self) -> Result<Vec<TripPlan>, SuggestionError> {
            match self.handle.await {
                Ok(plans) => Ok(plans),
                Err(err) if err.is_cancelled() => Err(SuggestionError::Cancelled),
                Err(err) => Err(SuggestionError::Failed(err.to_string())),
            }
        }
    }
}
