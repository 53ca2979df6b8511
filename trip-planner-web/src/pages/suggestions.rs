use crate::components::ui::plan_card::PlanCard;
use crate::planner::{SuggestionState, TripPlan, TripSession};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, Clone)]
pub struct SuggestionsPageProps {
    pub session: Rc<TripSession>,
    /// Percent of the simulated wait that has elapsed
    pub progress: u8,
    pub on_select: Callback<TripPlan>,
    pub on_back: Callback<()>,
    pub on_next: Callback<()>,
}

impl PartialEq for SuggestionsPageProps {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.session, &other.session) && self.progress == other.progress
    }
}

fn loading_view(session: &TripSession, progress: u8) -> Html {
    let info = session.user_info();
    html! {
        <div class="suggestions-loading" aria-busy="true">
            <h2>{ "AI is crafting your perfect UAE experience..." }</h2>
            <div class="progress-label">
                <span>{ "Analyzing preferences..." }</span>
                <span>{ format!("{progress}%") }</span>
            </div>
            <div
                class="progress"
                role="progressbar"
                aria-valuemin="0"
                aria-valuemax="100"
                aria-valuenow={progress.to_string()}
            >
                <div class="progress__bar" style={format!("width:{progress}%")}></div>
            </div>
            <p>{ "🤖 Processing your travel preferences..." }</p>
            <p class="muted">
                { format!(
                    "Matching you with the best UAE experiences for your {} journey from {}",
                    info.month,
                    info.origin_label()
                ) }
            </p>
            <div class="skeleton-list" aria-hidden="true">
                { for (0..3).map(|_| html! { <div class="skeleton-card"></div> }) }
            </div>
        </div>
    }
}

#[function_component(SuggestionsPage)]
pub fn suggestions_page(p: &SuggestionsPageProps) -> Html {
    let session = &p.session;
    let plans = match session.suggestion_state() {
        SuggestionState::Ready(plans) => plans,
        SuggestionState::Idle | SuggestionState::Loading { .. } => {
            return html! {
                <section class="panel step-panel" data-testid="suggestions-step">
                    { loading_view(session, p.progress) }
                </section>
            };
        }
    };

    let currency: AttrValue = session.config().currency.clone().into();
    let info = session.user_info();
    let note: (AttrValue, AttrValue) = (
        info.month.clone().into(),
        info.origin_label().to_string().into(),
    );
    let selected_id = session.selected_plan().map(|plan| plan.id.as_str());
    let on_back = {
        let cb = p.on_back.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let on_next = {
        let cb = p.on_next.clone();
        Callback::from(move |_| cb.emit(()))
    };

    html! {
        <section class="panel step-panel" data-testid="suggestions-step">
            <header class="step-panel__header">
                <h2>{ "AI-Powered UAE Trip Suggestions" }</h2>
                <p class="muted">
                    { format!(
                        "Based on your preferences, here are {} perfect UAE experiences crafted just for you ✨",
                        plans.len()
                    ) }
                </p>
            </header>
            <div class="plan-list">
                { for plans.iter().map(|plan| html! {
                    <PlanCard
                        key={plan.id.clone()}
                        plan={plan.clone()}
                        selected={selected_id == Some(plan.id.as_str())}
                        currency={currency.clone()}
                        travel_note={Some(note.clone())}
                        on_select={p.on_select.clone()}
                    />
                }) }
            </div>
            <div class="step-panel__actions">
                <button type="button" class="btn btn--outline" onclick={on_back}>
                    { "← Back to Preferences" }
                </button>
                <button
                    type="button"
                    class="btn btn--primary"
                    id="next-btn"
                    aria-disabled={selected_id.is_none().to_string()}
                    onclick={on_next}
                >
                    { "View Detailed Itinerary →" }
                </button>
            </div>
            <p class="muted confidence">{ "AI Confidence: 98% match with your preferences" }</p>
        </section>
    }
}
