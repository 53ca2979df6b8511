mod customize;
mod itinerary;
mod suggestions;
mod summary;
mod user_info;

use crate::app::state::AppState;
use crate::app::view::handlers::AppHandlers;
use crate::pages::not_found::NotFound;
use crate::planner::WizardStep;
use crate::router::Route;
use yew::prelude::*;

pub fn render_main_view(state: &AppState, handlers: &AppHandlers, route: Option<&Route>) -> Html {
    let not_found = matches!(route, None | Some(Route::NotFound));
    if not_found {
        return html! { <NotFound on_go_home={handlers.go_home.clone()} /> };
    }

    match state.session.step() {
        WizardStep::UserInfo => user_info::render_user_info(state, handlers),
        WizardStep::Customize => customize::render_customize(state, handlers),
        WizardStep::AiSuggestions => suggestions::render_suggestions(state, handlers),
        WizardStep::Itinerary => itinerary::render_itinerary(state, handlers),
        WizardStep::Summary => summary::render_summary(state, handlers),
    }
}
