mod customize;
mod suggestions;
mod summary;
mod wizard;

use crate::app::state::AppState;
use crate::planner::{Bounds, Category, DragPayload, DropTarget, TripPlan, UserInfo, WizardFlow};
use yew::prelude::*;
use yew_router::prelude::Navigator;

pub use customize::{
    build_drag_end, build_drag_leave, build_drag_over, build_drag_start, build_drop,
    build_quick_add, build_remove, build_toggle_day, build_toggle_section,
};
pub use suggestions::build_select_plan;
pub use summary::{build_book, build_export, build_preview};
pub use wizard::{
    build_back, build_dismiss_prompt, build_flow_change, build_go_home, build_next,
    build_user_info_change,
};

#[derive(Clone)]
pub struct AppHandlers {
    pub next: Callback<()>,
    pub back: Callback<()>,
    pub flow_change: Callback<WizardFlow>,
    pub user_info_change: Callback<UserInfo>,
    pub dismiss_prompt: Callback<()>,
    pub go_home: Callback<()>,
    pub drag_start: Callback<DragPayload>,
    pub drag_over: Callback<DropTarget>,
    pub drag_leave: Callback<((f64, f64), Bounds)>,
    pub drop: Callback<(DropTarget, Option<DragPayload>)>,
    pub drag_end: Callback<()>,
    pub quick_add: Callback<DragPayload>,
    pub remove: Callback<DropTarget>,
    pub toggle_day: Callback<u32>,
    pub toggle_section: Callback<Category>,
    pub select_plan: Callback<TripPlan>,
    pub export: Callback<()>,
    pub preview: Callback<bool>,
    pub book: Callback<()>,
}

impl AppHandlers {
    #[must_use]
    pub fn new(state: &AppState, navigator: Option<Navigator>) -> Self {
        Self {
            next: build_next(state),
            back: build_back(state),
            flow_change: build_flow_change(state),
            user_info_change: build_user_info_change(state),
            dismiss_prompt: build_dismiss_prompt(state),
            go_home: build_go_home(state, navigator),
            drag_start: build_drag_start(state),
            drag_over: build_drag_over(state),
            drag_leave: build_drag_leave(state),
            drop: build_drop(state),
            drag_end: build_drag_end(state),
            quick_add: build_quick_add(state),
            remove: build_remove(state),
            toggle_day: build_toggle_day(state),
            toggle_section: build_toggle_section(state),
            select_plan: build_select_plan(state),
            export: build_export(state),
            preview: build_preview(state),
            book: build_book(state),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::summary::BookingStatus;
    use crate::planner::{Catalog, PlannerConfig, TransitionError, TripSession};
    use futures::executor::block_on;
    use std::collections::BTreeSet;
    use yew::LocalServerRenderer;

    #[hook]
    fn use_test_state(session: TripSession) -> AppState {
        AppState {
            session: use_state(move || session),
            catalog: use_memo((), |()| Catalog::load_embedded().unwrap()),
            prompt: use_state(|| None::<TransitionError>),
            suggestion_progress: use_state(|| 0_u8),
            live_ticket: use_mut_ref(|| Some(7_u64)),
            arrived_plans: use_state(|| None),
            collapsed_days: use_state(BTreeSet::<u32>::new),
            collapsed_sections: use_state(BTreeSet::<Category>::new),
            booking: use_state(BookingStatus::default),
            show_preview: use_state(|| false),
        }
    }

    fn customize_session() -> TripSession {
        let catalog = Catalog::load_embedded().unwrap();
        let mut session = TripSession::new(WizardFlow::Customize, PlannerConfig::default());
        session.update_user_info(|info| {
            info.name = "Sara".into();
            info.budget = "AED 5,000 - AED 15,000".into();
            info.origin = "doha".into();
            info.month = "June".into();
            info.duration = 2;
        });
        session.next(&catalog).unwrap();
        session
    }

    #[function_component(CustomizeHandlersHarness)]
    fn customize_handlers_harness() -> Html {
        let app_state = use_test_state(customize_session());
        let handlers = AppHandlers::new(&app_state, None);
        let invoked = use_mut_ref(|| false);
        if !*invoked.borrow() {
            *invoked.borrow_mut() = true;
            let target = DropTarget::new(1, Category::Hotel);
            handlers.drag_start.emit(DragPayload::new(Category::Hotel, "hotel-rak-inn"));
            handlers.drag_over.emit(target);
            handlers
                .drag_leave
                .emit(((500.0, 500.0), Bounds::new(0.0, 0.0, 10.0, 10.0)));
            handlers.drop.emit((
                target,
                Some(DragPayload::new(Category::Hotel, "hotel-marina-4")),
            ));
            handlers.drag_end.emit(());
            handlers.quick_add.emit(DragPayload::new(Category::Attraction, "dubai-frame"));
            handlers.remove.emit(DropTarget::new(2, Category::Transport));
            handlers.toggle_day.emit(1);
            handlers.toggle_section.emit(Category::Transport);
            handlers.next.emit(());
            handlers.dismiss_prompt.emit(());
            handlers.back.emit(());
        }
        let live = app_state.is_live_ticket(7);
        html! { <div data-live={live.to_string()} /> }
    }

    #[function_component(FlowHandlersHarness)]
    fn flow_handlers_harness() -> Html {
        let app_state = use_test_state(TripSession::default());
        let handlers = AppHandlers::new(&app_state, None);
        let invoked = use_mut_ref(|| false);
        if !*invoked.borrow() {
            *invoked.borrow_mut() = true;
            handlers.flow_change.emit(WizardFlow::AiSuggestions);
            handlers.user_info_change.emit(UserInfo::default());
            handlers.next.emit(());
            handlers.back.emit(());
            handlers.go_home.emit(());
            handlers.preview.emit(true);
            handlers.book.emit(());
            let plans = crate::planner::mock_plans(&UserInfo::default());
            handlers.select_plan.emit(plans[0].clone());
        }
        html! { <div data-flow={app_state.session.flow().key()} /> }
    }

    fn chosen_plan_session() -> TripSession {
        let catalog = Catalog::load_embedded().unwrap();
        let mut session = TripSession::new(WizardFlow::AiSuggestions, PlannerConfig::default());
        session.update_user_info(|info| {
            info.name = "Omar".into();
            info.budget = "AED 15,000 - AED 30,000".into();
            info.origin = "doha".into();
            info.month = "March".into();
        });
        session.next(&catalog).unwrap();
        let ticket = session.begin_suggestions();
        let plans = crate::planner::mock_plans(session.user_info());
        session.complete_suggestions(ticket, plans);
        let plan = session.suggestions()[0].clone();
        session.select_plan(plan);
        session
    }

    #[function_component(LeaveSuggestionsHarness)]
    fn leave_suggestions_harness() -> Html {
        let app_state = use_test_state(chosen_plan_session());
        let handlers = AppHandlers::new(&app_state, None);
        let invoked = use_mut_ref(|| false);
        if !*invoked.borrow() {
            *invoked.borrow_mut() = true;
            handlers.next.emit(());
        }
        let live = app_state.is_live_ticket(7);
        html! { <div data-live={live.to_string()} /> }
    }

    #[test]
    fn next_from_suggestions_drops_the_live_ticket() {
        let html = block_on(LocalServerRenderer::<LeaveSuggestionsHarness>::new().render());
        assert!(html.contains("data-live=\"false\""));
    }

    #[test]
    fn customize_handlers_run_without_a_browser() {
        let html = block_on(LocalServerRenderer::<CustomizeHandlersHarness>::new().render());
        // back from customize drops the pending suggestion ticket
        assert!(html.contains("data-live=\"false\""));
    }

    #[test]
    fn wizard_handlers_run_without_a_browser() {
        let html = block_on(LocalServerRenderer::<FlowHandlersHarness>::new().render());
        assert!(html.contains("data-flow="));
    }

    #[test]
    fn handlers_struct_is_cloneable() {
        #[function_component(CloneHarness)]
        fn clone_harness() -> Html {
            let app_state = use_test_state(TripSession::default());
            let handlers = AppHandlers::new(&app_state, None);
            let copy = handlers.clone();
            html! { <span data-same={(copy.next == handlers.next).to_string()} /> }
        }
        let html = block_on(LocalServerRenderer::<CloneHarness>::new().render());
        assert!(html.contains("data-same=\"true\""));
    }
}
