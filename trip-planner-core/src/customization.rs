//! Per-day slot assignments for the customization step.
use crate::catalog::Category;
use crate::numbers::usize_to_u32;
use serde::{Deserialize, Serialize};

/// One day of the trip with at most one item per category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayCustomization {
    pub day: u32,
    #[serde(default)]
    pub hotel_id: Option<String>,
    #[serde(default)]
    pub transport_id: Option<String>,
    #[serde(default)]
    pub attraction_id: Option<String>,
}

impl DayCustomization {
    #[must_use]
    pub fn empty(day: u32) -> Self {
        Self {
            day,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn slot(&self, category: Category) -> Option<&str> {
        match category {
            Category::Hotel => self.hotel_id.as_deref(),
            Category::Transport => self.transport_id.as_deref(),
            Category::Attraction => self.attraction_id.as_deref(),
        }
    }

    fn slot_mut(&mut self, category: Category) -> &mut Option<String> {
        match category {
            Category::Hotel => &mut self.hotel_id,
            Category::Transport => &mut self.transport_id,
            Category::Attraction => &mut self.attraction_id,
        }
    }

    pub fn set(&mut self, category: Category, item_id: impl Into<String>) {
        *self.slot_mut(category) = Some(item_id.into());
    }

    pub fn clear(&mut self, category: Category) {
        *self.slot_mut(category) = None;
    }

    #[must_use]
    pub fn has_selection(&self) -> bool {
        Category::ALL
            .iter()
            .any(|category| self.slot(*category).is_some())
    }

    /// Slots that are set, in category order.
    pub fn selections(&self) -> impl Iterator<Item = (Category, &str)> {
        Category::ALL
            .into_iter()
            .filter_map(|category| self.slot(category).map(|id| (category, id)))
    }
}

/// Capability used by the drag-and-drop handler to write into a day store.
pub trait SlotAssigner {
    /// Assign `item_id` to `(day, category)`, returning whether a day was written.
    fn assign(&mut self, day: u32, category: Category, item_id: &str) -> bool;

    /// First day lacking `category`, or day 1 when every day has it.
    fn first_open_day(&self, category: Category) -> u32;
}

/// Ordered, contiguous list of days `1..=duration`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayPlan {
    days: Vec<DayCustomization>,
}

impl Default for DayPlan {
    fn default() -> Self {
        Self::new(1)
    }
}

impl DayPlan {
    /// Build an empty plan with `duration` days; zero is raised to one.
    #[must_use]
    pub fn new(duration: u32) -> Self {
        let duration = duration.max(1);
        Self {
            days: (1..=duration).map(DayCustomization::empty).collect(),
        }
    }

    #[must_use]
    pub fn duration(&self) -> u32 {
        usize_to_u32(self.days.len())
    }

    #[must_use]
    pub fn days(&self) -> &[DayCustomization] {
        &self.days
    }

    #[must_use]
    pub fn day(&self, day: u32) -> Option<&DayCustomization> {
        let index = usize::try_from(day.checked_sub(1)?).ok()?;
        self.days.get(index)
    }

    fn day_mut(&mut self, day: u32) -> Option<&mut DayCustomization> {
        let index = usize::try_from(day.checked_sub(1)?).ok()?;
        self.days.get_mut(index)
    }

    /// Overwrite the `(day, category)` slot. Days outside the plan are ignored.
    pub fn set_slot(&mut self, day: u32, category: Category, item_id: impl Into<String>) -> bool {
        match self.day_mut(day) {
            Some(entry) => {
                entry.set(category, item_id);
                true
            }
            None => {
                log::debug!("ignoring {category} assignment for day {day} outside plan");
                false
            }
        }
    }

    pub fn clear_slot(&mut self, day: u32, category: Category) -> bool {
        self.day_mut(day).is_some_and(|entry| {
            entry.clear(category);
            true
        })
    }

    /// Change the number of days, keeping assignments for days that remain.
    pub fn resize(&mut self, duration: u32) {
        let duration = duration.max(1);
        let current = self.duration();
        if duration < current {
            self.days.truncate(usize::try_from(duration).unwrap_or(usize::MAX));
        } else {
            self.days
                .extend((current + 1..=duration).map(DayCustomization::empty));
        }
    }

    #[must_use]
    pub fn first_day_missing(&self, category: Category) -> Option<u32> {
        self.days
            .iter()
            .find(|entry| entry.slot(category).is_none())
            .map(|entry| entry.day)
    }

    /// Days with no slot set at all.
    #[must_use]
    pub fn incomplete_days(&self) -> Vec<u32> {
        self.days
            .iter()
            .filter(|entry| !entry.has_selection())
            .map(|entry| entry.day)
            .collect()
    }

    #[must_use]
    pub fn all_days_selected(&self) -> bool {
        self.days.iter().all(DayCustomization::has_selection)
    }

    /// Ids selected for `category` across all days, first-seen order, no repeats.
    #[must_use]
    pub fn distinct_ids(&self, category: Category) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for id in self.days.iter().filter_map(|entry| entry.slot(category)) {
            if !seen.contains(&id) {
                seen.push(id);
            }
        }
        seen
    }
}

impl SlotAssigner for DayPlan {
    fn assign(&mut self, day: u32, category: Category, item_id: &str) -> bool {
        self.set_slot(day, category, item_id)
    }

    fn first_open_day(&self, category: Category) -> u32 {
        self.first_day_missing(category).unwrap_or(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_plan_is_contiguous_and_empty() {
        let plan = DayPlan::new(3);
        let days: Vec<u32> = plan.days().iter().map(|entry| entry.day).collect();
        assert_eq!(days, vec![1, 2, 3]);
        assert_eq!(plan.incomplete_days(), vec![1, 2, 3]);
        assert_eq!(DayPlan::new(0).duration(), 1);
    }

    #[test]
    fn set_overwrites_and_clear_empties() {
        let mut plan = DayPlan::new(2);
        assert!(plan.set_slot(1, Category::Hotel, "hotel-rak-inn"));
        assert!(plan.set_slot(1, Category::Hotel, "hotel-marina-4"));
        assert_eq!(plan.day(1).unwrap().slot(Category::Hotel), Some("hotel-marina-4"));
        assert!(plan.clear_slot(1, Category::Hotel));
        assert!(!plan.day(1).unwrap().has_selection());
    }

    #[test]
    fn out_of_range_days_are_ignored() {
        let mut plan = DayPlan::new(2);
        assert!(!plan.set_slot(0, Category::Hotel, "x"));
        assert!(!plan.set_slot(3, Category::Hotel, "x"));
        assert!(!plan.clear_slot(9, Category::Hotel));
        assert_eq!(plan.incomplete_days(), vec![1, 2]);
    }

    #[test]
    fn resize_preserves_remaining_days() {
        let mut plan = DayPlan::new(3);
        plan.set_slot(1, Category::Transport, "basic");
        plan.set_slot(3, Category::Transport, "mid");
        plan.resize(2);
        assert_eq!(plan.duration(), 2);
        assert_eq!(plan.day(1).unwrap().slot(Category::Transport), Some("basic"));
        plan.resize(4);
        assert_eq!(plan.duration(), 4);
        assert!(plan.day(3).unwrap().slot(Category::Transport).is_none());
        assert_eq!(plan.day(4).unwrap().day, 4);
    }

    #[test]
    fn first_open_day_falls_back_to_day_one() {
        let mut plan = DayPlan::new(2);
        assert_eq!(plan.first_open_day(Category::Attraction), 1);
        plan.set_slot(1, Category::Attraction, "burj-khalifa");
        assert_eq!(plan.first_open_day(Category::Attraction), 2);
        plan.set_slot(2, Category::Attraction, "ain-dubai");
        assert_eq!(plan.first_open_day(Category::Attraction), 1);
    }

    #[test]
    fn distinct_ids_keep_first_seen_order() {
        let mut plan = DayPlan::new(3);
        plan.set_slot(1, Category::Hotel, "b");
        plan.set_slot(2, Category::Hotel, "a");
        plan.set_slot(3, Category::Hotel, "b");
        assert_eq!(plan.distinct_ids(Category::Hotel), vec!["b", "a"]);
    }
}
