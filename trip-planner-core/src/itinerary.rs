//! Day-by-day itinerary derived when the wizard reaches the itinerary step.
use crate::catalog::{Catalog, Category};
use crate::customization::DayPlan;
use crate::suggestions::TripPlan;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

pub const DEFAULT_CITY: &str = "UAE";
pub const DEFAULT_TRAVEL_TIME: &str = "0 hours";

/// Activities for a single day. At most one per category, so three inline slots.
pub type Activities = SmallVec<[String; 3]>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayActivity {
    pub day: u32,
    pub city: String,
    pub activities: Activities,
    pub travel_time: String,
    pub locations: Vec<String>,
}

impl DayActivity {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }
}

/// One entry per day with `"Hotel: X"`, `"Transport: X"` and `"Attraction: X"`
/// for every slot that resolves in the catalog.
#[must_use]
pub fn from_customizations(catalog: &Catalog, plan: &DayPlan, city: &str) -> Vec<DayActivity> {
    plan.days()
        .iter()
        .map(|day| {
            let mut activities = Activities::new();
            let mut locations = Vec::new();
            for category in Category::ALL {
                let Some(item) = catalog.resolve(category, day.slot(category)) else {
                    continue;
                };
                activities.push(format!("{}: {}", category.label(), item.name));
                if category != Category::Transport {
                    if let Some(location) = &item.location {
                        locations.push(location.clone());
                    }
                }
            }
            DayActivity {
                day: day.day,
                city: city.to_string(),
                activities,
                travel_time: DEFAULT_TRAVEL_TIME.to_string(),
                locations,
            }
        })
        .collect()
}

/// Spread a suggested plan over its days: cities rotate, two highlights per day
/// starting at the day offset.
#[must_use]
pub fn from_plan(plan: &TripPlan) -> Vec<DayActivity> {
    (0..plan.duration)
        .map(|offset| {
            let index = usize::try_from(offset).unwrap_or(usize::MAX);
            let city = if plan.cities.is_empty() {
                DEFAULT_CITY.to_string()
            } else {
                plan.cities[index % plan.cities.len()].clone()
            };
            let activities: Activities = plan
                .highlights
                .iter()
                .skip(index)
                .take(2)
                .cloned()
                .collect();
            DayActivity {
                day: offset + 1,
                locations: vec![city.clone()],
                city,
                activities,
                travel_time: DEFAULT_TRAVEL_TIME.to_string(),
            }
        })
        .collect()
}
