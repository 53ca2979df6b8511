//! Browser timer driving the mocked suggestion wait.
#[cfg(target_arch = "wasm32")]
use crate::app::state::AppState;
use crate::planner::{SuggestionState, TripPlan, TripSession, WizardStep};
#[cfg(target_arch = "wasm32")]
use yew::prelude::*;

/// Progress bar refresh interval.
pub const TICK_MS: u64 = 200;

/// The suggestion step is showing and nothing has been requested yet.
#[must_use]
pub fn needs_suggestions(session: &TripSession) -> bool {
    session.step() == WizardStep::AiSuggestions
        && matches!(session.suggestion_state(), SuggestionState::Idle)
}

/// Number of progress ticks for a wait of `delay_ms`, at least one.
#[must_use]
pub const fn tick_count(delay_ms: u64) -> u64 {
    let ticks = delay_ms.div_ceil(TICK_MS);
    if ticks == 0 { 1 } else { ticks }
}

/// Complete `ticket` on the latest session. `None` when the session no longer
/// waits on that ticket.
#[must_use]
pub fn apply_arrived_plans(
    session: &TripSession,
    ticket: u64,
    plans: Vec<TripPlan>,
) -> Option<TripSession> {
    let mut sess = session.clone();
    sess.complete_suggestions(ticket, plans).then_some(sess)
}

#[cfg(target_arch = "wasm32")]
#[hook]
pub fn use_suggestion_loader(state: &AppState) {
    let needed = needs_suggestions(&state.session);
    {
        let state = state.clone();
        use_effect_with(needed, move |needed| {
            if *needed {
                start_suggestions(&state);
            }
        });
    }

    let state = state.clone();
    let arrived = (*state.arrived_plans).clone();
    use_effect_with(arrived, move |arrived| {
        if let Some((ticket, plans)) = arrived.clone() {
            state.arrived_plans.set(None);
            if state.is_live_ticket(ticket) {
                state.cancel_live_ticket();
            }
            match apply_arrived_plans(&state.session, ticket, plans) {
                Some(sess) => {
                    crate::a11y::set_status("Trip suggestions are ready");
                    state.session.set(sess);
                }
                None => log::debug!("suggestion ticket {ticket} arrived late; dropped"),
            }
        }
    });
}

/// Issue a ticket and hand the plans to the loader after the configured
/// delay unless it is cancelled first.
#[cfg(target_arch = "wasm32")]
pub fn start_suggestions(state: &AppState) {
    use crate::planner::{MockSuggestions, SuggestionProvider, progress_for_elapsed};

    let mut sess = (*state.session).clone();
    let ticket = sess.begin_suggestions();
    *state.live_ticket.borrow_mut() = Some(ticket);
    state.suggestion_progress.set(0);
    let delay_ms = sess.config().suggestion_delay_ms;
    let info = sess.user_info().clone();
    state.session.set(sess);

    let state = state.clone();
    wasm_bindgen_futures::spawn_local(async move {
        let tick = i32::try_from(TICK_MS).unwrap_or(i32::MAX);
        for step in 1..=tick_count(delay_ms) {
            if let Err(err) = crate::dom::sleep_ms(tick).await {
                crate::dom::console_error(&crate::dom::js_error_message(&err));
                break;
            }
            if !state.is_live_ticket(ticket) {
                log::debug!("suggestion ticket {ticket} cancelled");
                return;
            }
            let elapsed = (step * TICK_MS).min(delay_ms);
            state
                .suggestion_progress
                .set(progress_for_elapsed(elapsed, delay_ms));
        }
        if !state.is_live_ticket(ticket) {
            return;
        }
        state.suggestion_progress.set(100);
        state
            .arrived_plans
            .set(Some((ticket, MockSuggestions.suggest(&info))));
    });
}
