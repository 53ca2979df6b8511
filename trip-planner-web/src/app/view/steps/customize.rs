use crate::app::state::AppState;
use crate::app::view::handlers::AppHandlers;
use crate::pages::customize::CustomizePage;
use std::rc::Rc;
use yew::prelude::*;

pub fn render_customize(state: &AppState, handlers: &AppHandlers) -> Html {
    html! {
        <CustomizePage
            session={Rc::new((*state.session).clone())}
            catalog={state.catalog.clone()}
            collapsed_days={Rc::new((*state.collapsed_days).clone())}
            collapsed_sections={Rc::new((*state.collapsed_sections).clone())}
            on_toggle_section={handlers.toggle_section.clone()}
            on_toggle_day={handlers.toggle_day.clone()}
            on_drag_start={handlers.drag_start.clone()}
            on_drag_end={handlers.drag_end.clone()}
            on_quick_add={handlers.quick_add.clone()}
            on_drag_over={handlers.drag_over.clone()}
            on_drag_leave={handlers.drag_leave.clone()}
            on_drop={handlers.drop.clone()}
            on_remove={handlers.remove.clone()}
            on_back={handlers.back.clone()}
            on_next={handlers.next.clone()}
        />
    }
}
