#[cfg(target_arch = "wasm32")]
use crate::router::Route;
#[cfg(target_arch = "wasm32")]
use yew::prelude::*;
#[cfg(target_arch = "wasm32")]
use yew_router::prelude::*;

pub mod routing;
pub mod state;
pub mod suggestions;
pub mod view;

#[cfg(target_arch = "wasm32")]
#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <AppInner />
        </BrowserRouter>
    }
}

#[cfg(target_arch = "wasm32")]
#[function_component(AppInner)]
pub fn app_inner() -> Html {
    let app_state = state::use_app_state();

    let navigator = use_navigator();
    let route = use_route::<Route>();

    routing::use_sync_route_with_step(&app_state.session, navigator.clone(), route.clone());
    routing::use_sync_step_with_route(&app_state, navigator.clone(), route.clone());
    suggestions::use_suggestion_loader(&app_state);

    view::render_app(&app_state, route.as_ref(), navigator)
}
