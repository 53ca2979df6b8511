#[cfg(target_arch = "wasm32")]
use crate::app::state::AppState;
#[cfg(any(target_arch = "wasm32", test))]
use crate::planner::{TripSession, WizardFlow, WizardStep};
#[cfg(any(target_arch = "wasm32", test))]
use crate::router::Route;
#[cfg(target_arch = "wasm32")]
use yew::prelude::*;
#[cfg(target_arch = "wasm32")]
use yew_router::prelude::Navigator;

/// What the address bar asks of the wizard.
#[cfg(any(target_arch = "wasm32", test))]
#[derive(Debug, Clone, PartialEq, Eq)]
enum RouteSync {
    InSync,
    /// Browser history moved to an earlier step of the flow
    Rewind(WizardStep),
    /// Address points somewhere the wizard may not jump to
    Replace(Route),
}

#[cfg(any(target_arch = "wasm32", test))]
fn next_route_for_step(step: WizardStep, current_route: Option<&Route>) -> Option<Route> {
    let new_route = Route::from_step(step);
    if Some(&new_route) == current_route {
        None
    } else {
        Some(new_route)
    }
}

#[cfg(any(target_arch = "wasm32", test))]
fn sync_for_route(session: &TripSession, route: Option<&Route>) -> RouteSync {
    let Some(target) = route.and_then(Route::to_step) else {
        return RouteSync::InSync;
    };
    let current = session.step();
    if target == current {
        RouteSync::InSync
    } else if is_route_transition_allowed(session.flow(), current, target) {
        RouteSync::Rewind(target)
    } else {
        RouteSync::Replace(Route::from_step(current))
    }
}

/// Only backwards moves within the active flow; forward moves go through the gates.
#[cfg(any(target_arch = "wasm32", test))]
fn is_route_transition_allowed(flow: WizardFlow, current: WizardStep, next: WizardStep) -> bool {
    let steps = flow.steps();
    let position = |step: WizardStep| steps.iter().position(|candidate| *candidate == step);
    match (position(current), position(next)) {
        (Some(from), Some(to)) => to < from,
        _ => false,
    }
}

#[cfg(target_arch = "wasm32")]
#[hook]
pub fn use_sync_route_with_step(
    session: &UseStateHandle<TripSession>,
    navigator: Option<Navigator>,
    active_route: Option<Route>,
) {
    use_effect_with(session.step(), move |step| {
        if let (Some(nav), Some(new_route)) = (
            navigator.as_ref(),
            next_route_for_step(*step, active_route.as_ref()),
        ) {
            nav.push(&new_route);
        }
    });
}

#[cfg(target_arch = "wasm32")]
#[hook]
pub fn use_sync_step_with_route(
    state: &AppState,
    navigator: Option<Navigator>,
    route: Option<Route>,
) {
    let state = state.clone();
    use_effect_with(route, move |route| {
        match sync_for_route(&state.session, route.as_ref()) {
            RouteSync::InSync => {}
            RouteSync::Rewind(step) => {
                let mut sess = (*state.session).clone();
                if sess.rewind_to(step) {
                    state.cancel_live_ticket();
                    state.prompt.set(None);
                    state.session.set(sess);
                }
            }
            RouteSync::Replace(fallback) => {
                if let Some(nav) = navigator.as_ref() {
                    nav.replace(&fallback);
                }
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planner::{Catalog, Category};

    fn session_at_itinerary() -> TripSession {
        let catalog = Catalog::load_embedded().unwrap();
        let mut session = TripSession::default();
        session.update_user_info(|info| {
            info.name = "Ana".into();
            info.budget = "AED 5,000 - AED 15,000".into();
            info.origin = "paris".into();
            info.month = "March".into();
            info.duration = 1;
        });
        session.next(&catalog).unwrap();
        session.set_slot(1, Category::Hotel, "hotel-rak-inn");
        session.next(&catalog).unwrap();
        session
    }

    #[test]
    fn next_route_for_step_skips_when_unchanged() {
        let route = Route::from_step(WizardStep::Customize);
        assert!(next_route_for_step(WizardStep::Customize, Some(&route)).is_none());
        assert_eq!(
            next_route_for_step(WizardStep::Summary, None),
            Some(Route::Summary)
        );
    }

    #[test]
    fn history_back_rewinds_and_forward_is_refused() {
        let session = session_at_itinerary();
        assert_eq!(
            sync_for_route(&session, Some(&Route::Customize)),
            RouteSync::Rewind(WizardStep::Customize)
        );
        assert_eq!(
            sync_for_route(&session, Some(&Route::Summary)),
            RouteSync::Replace(Route::Itinerary)
        );
        assert_eq!(
            sync_for_route(&session, Some(&Route::Itinerary)),
            RouteSync::InSync
        );
        assert_eq!(
            sync_for_route(&session, Some(&Route::NotFound)),
            RouteSync::InSync
        );
    }

    #[test]
    fn steps_of_the_other_flow_are_not_reachable() {
        assert!(!is_route_transition_allowed(
            WizardFlow::Customize,
            WizardStep::Itinerary,
            WizardStep::AiSuggestions
        ));
        assert!(is_route_transition_allowed(
            WizardFlow::AiSuggestions,
            WizardStep::Summary,
            WizardStep::AiSuggestions
        ));
        assert!(!is_route_transition_allowed(
            WizardFlow::AiSuggestions,
            WizardStep::UserInfo,
            WizardStep::Itinerary
        ));
        assert_eq!(
            sync_for_route(&TripSession::default(), Some(&Route::Suggestions)),
            RouteSync::Replace(Route::Home)
        );
    }
}
