use crate::app::state::AppState;
use crate::planner::{Bounds, Category, DragPayload, DropTarget};
use std::collections::BTreeSet;
use yew::prelude::*;

pub fn build_drag_start(state: &AppState) -> Callback<DragPayload> {
    let session_handle = state.session.clone();
    Callback::from(move |payload: DragPayload| {
        let mut sess = (*session_handle).clone();
        sess.drag_start(payload.category, payload.item_id);
        session_handle.set(sess);
    })
}

pub fn build_drag_over(state: &AppState) -> Callback<DropTarget> {
    let session_handle = state.session.clone();
    Callback::from(move |target: DropTarget| {
        // dragover fires continuously; only re-render when the zone changes
        if session_handle.drag().is_highlighted(target) {
            return;
        }
        let mut sess = (*session_handle).clone();
        sess.drag_over(target);
        session_handle.set(sess);
    })
}

pub fn build_drag_leave(state: &AppState) -> Callback<((f64, f64), Bounds)> {
    let session_handle = state.session.clone();
    Callback::from(move |(pointer, bounds): ((f64, f64), Bounds)| {
        let before = session_handle.drag().highlight();
        let mut sess = (*session_handle).clone();
        sess.drag_leave(pointer, bounds);
        if sess.drag().highlight() != before {
            session_handle.set(sess);
        }
    })
}

pub fn build_drop(state: &AppState) -> Callback<(DropTarget, Option<DragPayload>)> {
    let session_handle = state.session.clone();
    Callback::from(move |(target, carried): (DropTarget, Option<DragPayload>)| {
        let mut sess = (*session_handle).clone();
        // The dataTransfer copy covers a drag that began before the last render.
        if !sess.drag().is_dragging() {
            if let Some(payload) = carried {
                sess.drag_start(payload.category, payload.item_id);
            }
        }
        if let Some(placed) = sess.drop_on(target) {
            crate::a11y::set_status(&format!(
                "{} added to day {}",
                placed.category.label(),
                placed.day
            ));
        }
        session_handle.set(sess);
    })
}

pub fn build_drag_end(state: &AppState) -> Callback<()> {
    let session_handle = state.session.clone();
    Callback::from(move |()| {
        let drag = session_handle.drag();
        if !drag.is_dragging() && drag.highlight().is_none() {
            return;
        }
        let mut sess = (*session_handle).clone();
        sess.drag_end();
        session_handle.set(sess);
    })
}

pub fn build_quick_add(state: &AppState) -> Callback<DragPayload> {
    let session_handle = state.session.clone();
    Callback::from(move |payload: DragPayload| {
        let mut sess = (*session_handle).clone();
        match sess.quick_add(payload.category, &payload.item_id) {
            Some(placed) => {
                crate::a11y::set_status(&format!(
                    "{} added to day {}",
                    placed.category.label(),
                    placed.day
                ));
                session_handle.set(sess);
            }
            None => log::warn!("quick add of '{}' had no day to fill", payload.item_id),
        }
    })
}

pub fn build_remove(state: &AppState) -> Callback<DropTarget> {
    let session_handle = state.session.clone();
    Callback::from(move |target: DropTarget| {
        let mut sess = (*session_handle).clone();
        if sess.clear_slot(target.day, target.category) {
            crate::a11y::set_status(&format!(
                "{} removed from day {}",
                target.category.label(),
                target.day
            ));
            session_handle.set(sess);
        }
    })
}

fn toggled<T: Ord + Copy>(set: &BTreeSet<T>, value: T) -> BTreeSet<T> {
    let mut next = set.clone();
    if !next.remove(&value) {
        next.insert(value);
    }
    next
}

pub fn build_toggle_day(state: &AppState) -> Callback<u32> {
    let collapsed = state.collapsed_days.clone();
    Callback::from(move |day: u32| collapsed.set(toggled(&collapsed, day)))
}

pub fn build_toggle_section(state: &AppState) -> Callback<Category> {
    let collapsed = state.collapsed_sections.clone();
    Callback::from(move |category: Category| collapsed.set(toggled(&collapsed, category)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_twice_restores_the_set() {
        let start = BTreeSet::from([1_u32, 3]);
        let once = toggled(&start, 2);
        assert_eq!(once, BTreeSet::from([1, 2, 3]));
        assert_eq!(toggled(&once, 2), start);
    }
}
