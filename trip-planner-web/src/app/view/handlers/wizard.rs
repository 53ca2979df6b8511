use crate::app::state::AppState;
use crate::pages::summary::BookingStatus;
use crate::planner::{UserInfo, WizardFlow, WizardStep};
use crate::router::Route;
use yew::prelude::*;
use yew_router::prelude::Navigator;

pub fn build_next(state: &AppState) -> Callback<()> {
    let state = state.clone();
    Callback::from(move |()| {
        let mut sess = (*state.session).clone();
        let from = sess.step();
        match sess.next(&state.catalog) {
            Ok(step) => {
                if from == WizardStep::AiSuggestions {
                    state.cancel_live_ticket();
                }
                crate::a11y::set_status(&format!("Now on {}", step.title()));
                state.prompt.set(None);
                state.session.set(sess);
            }
            Err(err) if err.is_user_facing() => {
                log::info!("next step refused: {err}");
                state.prompt.set(Some(err));
            }
            Err(err) => log::debug!("next ignored: {err}"),
        }
    })
}

pub fn build_back(state: &AppState) -> Callback<()> {
    let state = state.clone();
    Callback::from(move |()| {
        let mut sess = (*state.session).clone();
        match sess.back() {
            Ok(step) => {
                state.cancel_live_ticket();
                state.prompt.set(None);
                state.booking.set(BookingStatus::Idle);
                state.show_preview.set(false);
                crate::a11y::set_status(&format!("Back to {}", step.title()));
                state.session.set(sess);
            }
            Err(err) => log::debug!("back ignored: {err}"),
        }
    })
}

pub fn build_flow_change(state: &AppState) -> Callback<WizardFlow> {
    let session_handle = state.session.clone();
    let collapsed_days = state.collapsed_days.clone();
    Callback::from(move |flow: WizardFlow| {
        if session_handle.flow() == flow {
            return;
        }
        let mut sess = (*session_handle).clone();
        if sess.switch_flow(flow) {
            collapsed_days.set(Default::default());
            session_handle.set(sess);
        }
    })
}

pub fn build_user_info_change(state: &AppState) -> Callback<UserInfo> {
    let session_handle = state.session.clone();
    Callback::from(move |info: UserInfo| {
        let mut sess = (*session_handle).clone();
        sess.set_user_info(info);
        session_handle.set(sess);
    })
}

pub fn build_dismiss_prompt(state: &AppState) -> Callback<()> {
    let prompt = state.prompt.clone();
    Callback::from(move |()| prompt.set(None))
}

/// Leave an unknown address for the page of the current step.
pub fn build_go_home(state: &AppState, navigator: Option<Navigator>) -> Callback<()> {
    let session_handle = state.session.clone();
    Callback::from(move |()| {
        if let Some(nav) = navigator.as_ref() {
            nav.push(&Route::from_step(session_handle.step()));
        }
    })
}
