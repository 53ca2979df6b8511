mod handlers;
mod steps;

pub use handlers::AppHandlers;

use crate::app::state::AppState;
use crate::components::modal::Modal;
use crate::planner::TransitionError;
use crate::router::Route;
use yew::prelude::*;
use yew_router::prelude::Navigator;

fn render_prompt(prompt: Option<&TransitionError>, on_close: &Callback<()>) -> Html {
    let Some(err) = prompt else {
        return Html::default();
    };
    let on_ok = {
        let cb = on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <Modal
            open={true}
            title={AttrValue::from(err.prompt_title())}
            on_close={on_close.clone()}
            return_focus_id={Some(AttrValue::from("next-btn"))}
        >
            <p role="alert">{ err.to_string() }</p>
            <button type="button" class="btn btn--primary" onclick={on_ok}>{ "OK" }</button>
        </Modal>
    }
}

pub fn render_app(state: &AppState, route: Option<&Route>, navigator: Option<Navigator>) -> Html {
    let handlers = AppHandlers::new(state, navigator);
    let main_view = steps::render_main_view(state, &handlers, route);
    let controller = *state.session.controller();

    html! {
        <>
            <crate::components::header::Header flow={state.session.flow()} />
            <main id="main" role="main">
                <style>{ crate::a11y::visible_focus_css() }</style>
                <div
                    id={crate::a11y::STATUS_REGION_ID}
                    class="sr-only"
                    role="status"
                    aria-live="polite"
                ></div>
                <crate::components::ui::step_progress::StepProgress controller={controller} />
                { main_view }
                { render_prompt(state.prompt.as_ref(), &handlers.dismiss_prompt) }
            </main>
            <crate::components::footer::Footer />
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::summary::BookingStatus;
    use crate::planner::{Catalog, Category, PlannerConfig, TripSession, WizardFlow};
    use futures::executor::block_on;
    use std::collections::BTreeSet;
    use yew::LocalServerRenderer;

    #[derive(Properties, PartialEq)]
    struct ShellProps {
        session: TripSession,
        prompt: Option<TransitionError>,
        route: Option<Route>,
    }

    #[function_component(ShellHarness)]
    fn shell_harness(p: &ShellProps) -> Html {
        let session = p.session.clone();
        let prompt = p.prompt.clone();
        let state = AppState {
            session: use_state(move || session),
            catalog: use_memo((), |()| Catalog::load_embedded().unwrap()),
            prompt: use_state(move || prompt),
            suggestion_progress: use_state(|| 60_u8),
            live_ticket: use_mut_ref(|| None::<u64>),
            arrived_plans: use_state(|| None),
            collapsed_days: use_state(BTreeSet::<u32>::new),
            collapsed_sections: use_state(BTreeSet::<Category>::new),
            booking: use_state(BookingStatus::default),
            show_preview: use_state(|| false),
        };
        render_app(&state, p.route.as_ref(), None)
    }

    fn render(session: TripSession, prompt: Option<TransitionError>, route: Option<Route>) -> String {
        block_on(
            LocalServerRenderer::<ShellHarness>::with_props(ShellProps {
                session,
                prompt,
                route,
            })
            .render(),
        )
    }

    #[test]
    fn shell_wraps_the_current_step() {
        let html = render(TripSession::default(), None, Some(Route::Home));
        assert!(html.contains("id=\"main\""));
        assert!(html.contains("id=\"planner-status\""));
        assert!(html.contains("Step 1 of 4"));
        assert!(html.contains("Traveler Information"));
        assert!(html.contains("All bookings are simulated."));
    }

    #[test]
    fn refused_transition_opens_prompt() {
        let prompt = TransitionError::NoPlanSelected;
        let html = render(TripSession::default(), Some(prompt), Some(Route::Home));
        assert!(html.contains("role=\"dialog\""));
        assert!(html.contains("No Plan Selected"));
        assert!(html.contains("Please choose one of the suggested plans"));
    }

    #[test]
    fn unknown_route_renders_not_found() {
        let html = render(TripSession::default(), None, Some(Route::NotFound));
        assert!(html.contains("Page not found"));
        assert!(!html.contains("Traveler Information"));
    }

    #[test]
    fn suggestion_step_shows_loading_progress() {
        let catalog = Catalog::load_embedded().unwrap();
        let mut session = TripSession::new(WizardFlow::AiSuggestions, PlannerConfig::default());
        session.update_user_info(|info| {
            info.name = "Mina".into();
            info.budget = "AED 30,000 - AED 60,000".into();
            info.origin = "tokyo".into();
            info.month = "October".into();
        });
        session.next(&catalog).unwrap();
        session.begin_suggestions();
        let html = render(session, None, Some(Route::Suggestions));
        assert!(html.contains("🤖 Dream AI Trip Planner"));
        assert!(html.contains("60%"));
    }
}
