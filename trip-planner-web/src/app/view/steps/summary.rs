use crate::app::state::AppState;
use crate::app::view::handlers::AppHandlers;
use crate::pages::summary::SummaryPage;
use std::rc::Rc;
use yew::prelude::*;

pub fn render_summary(state: &AppState, handlers: &AppHandlers) -> Html {
    let summary = Rc::new(state.session.summary(&state.catalog));
    html! {
        <SummaryPage
            summary={summary}
            booking={*state.booking}
            show_preview={*state.show_preview}
            on_back={handlers.back.clone()}
            on_download={handlers.export.clone()}
            on_preview={handlers.preview.clone()}
            on_book={handlers.book.clone()}
        />
    }
}
