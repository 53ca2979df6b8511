use crate::app::state::AppState;
use crate::app::view::handlers::AppHandlers;
use crate::pages::itinerary::ItineraryPage;
use std::rc::Rc;
use yew::prelude::*;

pub fn render_itinerary(state: &AppState, handlers: &AppHandlers) -> Html {
    html! {
        <ItineraryPage
            session={Rc::new((*state.session).clone())}
            catalog={state.catalog.clone()}
            on_back={handlers.back.clone()}
            on_next={handlers.next.clone()}
        />
    }
}
