use crate::app::state::AppState;
use crate::app::view::handlers::AppHandlers;
use crate::pages::suggestions::SuggestionsPage;
use std::rc::Rc;
use yew::prelude::*;

pub fn render_suggestions(state: &AppState, handlers: &AppHandlers) -> Html {
    html! {
        <SuggestionsPage
            session={Rc::new((*state.session).clone())}
            progress={*state.suggestion_progress}
            on_select={handlers.select_plan.clone()}
            on_back={handlers.back.clone()}
            on_next={handlers.next.clone()}
        />
    }
}
