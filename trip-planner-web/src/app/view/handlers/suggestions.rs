use crate::app::state::AppState;
use crate::planner::TripPlan;
use yew::prelude::*;

pub fn build_select_plan(state: &AppState) -> Callback<TripPlan> {
    let session_handle = state.session.clone();
    let prompt = state.prompt.clone();
    Callback::from(move |plan: TripPlan| {
        let mut sess = (*session_handle).clone();
        crate::a11y::set_status(&format!("{} selected", plan.title));
        sess.select_plan(plan);
        prompt.set(None);
        session_handle.set(sess);
    })
}
