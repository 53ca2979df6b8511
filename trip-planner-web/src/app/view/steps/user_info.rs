use crate::app::state::AppState;
use crate::app::view::handlers::AppHandlers;
use crate::pages::user_info::UserInfoPage;
use yew::prelude::*;

pub fn render_user_info(state: &AppState, handlers: &AppHandlers) -> Html {
    let session = &*state.session;
    html! {
        <UserInfoPage
            info={session.user_info().clone()}
            flow={session.flow()}
            max_days={session.config().max_days}
            on_change={handlers.user_info_change.clone()}
            on_flow_change={handlers.flow_change.clone()}
            on_next={handlers.next.clone()}
        />
    }
}
