//! Drag-and-drop assignment of catalog items to day slots.
//!
//! The handler owns only gesture state (the dragged payload and the highlighted
//! target). Writes go through [`SlotAssigner`], so the handler can be driven by
//! DOM events in the browser or by plain calls in tests.
use crate::catalog::Category;
use crate::customization::SlotAssigner;
use serde::{Deserialize, Serialize};

/// Item picked up from the sidebar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragPayload {
    pub category: Category,
    pub item_id: String,
}

impl DragPayload {
    #[must_use]
    pub fn new(category: Category, item_id: impl Into<String>) -> Self {
        Self {
            category,
            item_id: item_id.into(),
        }
    }

    /// `"category:id"`, the plain-text form carried by the browser data transfer.
    #[must_use]
    pub fn encode(&self) -> String {
        format!("{}:{}", self.category.key(), self.item_id)
    }

    #[must_use]
    pub fn decode(raw: &str) -> Option<Self> {
        let (category, item_id) = raw.split_once(':')?;
        if item_id.is_empty() {
            return None;
        }
        let category = category.parse().ok()?;
        Some(Self::new(category, item_id))
    }
}

/// A `(day, category)` drop zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DropTarget {
    pub day: u32,
    pub category: Category,
}

impl DropTarget {
    #[must_use]
    pub const fn new(day: u32, category: Category) -> Self {
        Self { day, category }
    }
}

/// Client-space rectangle of a drop zone, edges inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Bounds {
    #[must_use]
    pub const fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    #[must_use]
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.left && x <= self.right && y >= self.top && y <= self.bottom
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragDropHandler {
    payload: Option<DragPayload>,
    highlight: Option<DropTarget>,
}

impl DragDropHandler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn payload(&self) -> Option<&DragPayload> {
        self.payload.as_ref()
    }

    #[must_use]
    pub const fn highlight(&self) -> Option<DropTarget> {
        self.highlight
    }

    #[must_use]
    pub fn is_highlighted(&self, target: DropTarget) -> bool {
        self.highlight == Some(target)
    }

    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.payload.is_some()
    }

    pub fn drag_start(&mut self, category: Category, item_id: impl Into<String>) {
        self.payload = Some(DragPayload::new(category, item_id));
    }

    pub fn drag_over(&mut self, target: DropTarget) {
        self.highlight = Some(target);
    }

    /// Clear the highlight only once the pointer has actually left `bounds`.
    /// Leaving into a child element keeps it; the payload always survives.
    pub fn drag_leave(&mut self, pointer: (f64, f64), bounds: Bounds) {
        if !bounds.contains(pointer.0, pointer.1) {
            self.highlight = None;
        }
    }

    /// Write the active payload into `target`, then reset the gesture.
    /// Returns the assigned target, or `None` when nothing was dragged.
    pub fn drop<S>(&mut self, store: &mut S, target: DropTarget) -> Option<DropTarget>
    where
        S: SlotAssigner + ?Sized,
    {
        let payload = self.payload.take();
        self.highlight = None;
        let payload = payload?;
        if store.assign(target.day, target.category, &payload.item_id) {
            log::debug!(
                "dropped {} '{}' on day {} {}",
                payload.category,
                payload.item_id,
                target.day,
                target.category
            );
            Some(target)
        } else {
            None
        }
    }

    /// Gesture cancelled (released outside any drop zone).
    pub fn drag_end(&mut self) {
        self.payload = None;
        self.highlight = None;
    }

    /// Assign without dragging: first day lacking `category`, else day 1.
    pub fn quick_add<S>(store: &mut S, category: Category, item_id: &str) -> Option<DropTarget>
    where
        S: SlotAssigner + ?Sized,
    {
        let target = DropTarget::new(store.first_open_day(category), category);
        store
            .assign(target.day, target.category, item_id)
            .then_some(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::customization::DayPlan;

    #[derive(Default)]
    struct RecordingStore {
        writes: Vec<(u32, Category, String)>,
    }

    impl SlotAssigner for RecordingStore {
        fn assign(&mut self, day: u32, category: Category, item_id: &str) -> bool {
            self.writes.push((day, category, item_id.to_string()));
            true
        }

        fn first_open_day(&self, _category: Category) -> u32 {
            1
        }
    }

    #[test]
    fn drop_writes_payload_and_resets() {
        let mut store = RecordingStore::default();
        let mut handler = DragDropHandler::new();
        let target = DropTarget::new(2, Category::Hotel);

        handler.drag_start(Category::Hotel, "hotel-atlantis-5");
        handler.drag_over(target);
        assert!(handler.is_highlighted(target));

        assert_eq!(handler.drop(&mut store, target), Some(target));
        assert_eq!(store.writes, vec![(2, Category::Hotel, "hotel-atlantis-5".to_string())]);
        assert!(handler.payload().is_none());
        assert!(handler.highlight().is_none());
    }

    #[test]
    fn drop_without_payload_is_noop() {
        let mut store = RecordingStore::default();
        let mut handler = DragDropHandler::new();
        let target = DropTarget::new(1, Category::Transport);
        handler.drag_over(target);
        assert_eq!(handler.drop(&mut store, target), None);
        assert!(store.writes.is_empty());
        assert!(handler.highlight().is_none());
    }

    #[test]
    fn drag_leave_respects_bounds() {
        let mut handler = DragDropHandler::new();
        let bounds = Bounds::new(10.0, 10.0, 110.0, 60.0);
        handler.drag_start(Category::Attraction, "ain-dubai");
        handler.drag_over(DropTarget::new(1, Category::Attraction));

        handler.drag_leave((50.0, 30.0), bounds);
        assert!(handler.highlight().is_some());

        handler.drag_leave((150.0, 30.0), bounds);
        assert!(handler.highlight().is_none());
        assert!(handler.is_dragging());
    }

    #[test]
    fn drag_end_clears_everything() {
        let mut handler = DragDropHandler::new();
        handler.drag_start(Category::Hotel, "x");
        handler.drag_over(DropTarget::new(1, Category::Hotel));
        handler.drag_end();
        assert_eq!(handler, DragDropHandler::default());
    }

    #[test]
    fn quick_add_targets_first_open_day() {
        let mut plan = DayPlan::new(3);
        plan.set_slot(1, Category::Transport, "basic");
        let target = DragDropHandler::quick_add(&mut plan, Category::Transport, "mid");
        assert_eq!(target, Some(DropTarget::new(2, Category::Transport)));
        assert_eq!(plan.day(2).unwrap().slot(Category::Transport), Some("mid"));
    }

    #[test]
    fn payload_text_form_parses_back() {
        let payload = DragPayload::new(Category::Transport, "lux-suv");
        assert_eq!(payload.encode(), "transport:lux-suv");
        assert_eq!(DragPayload::decode("transport:lux-suv"), Some(payload));
        assert_eq!(DragPayload::decode("hotels:hotel-rak-inn").unwrap().category, Category::Hotel);
        assert!(DragPayload::decode("meal:x").is_none());
        assert!(DragPayload::decode("hotel:").is_none());
        assert!(DragPayload::decode("hotel").is_none());
    }
}
