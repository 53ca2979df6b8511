use crate::components::ui::user_info_form::UserInfoForm;
use crate::planner::{UserInfo, WizardFlow};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct UserInfoPageProps {
    pub info: UserInfo,
    pub flow: WizardFlow,
    pub max_days: u32,
    pub on_change: Callback<UserInfo>,
    pub on_flow_change: Callback<WizardFlow>,
    pub on_next: Callback<()>,
}

const FLOWS: [(WizardFlow, &str, &str); 2] = [
    (
        WizardFlow::Customize,
        "Customize My Trip",
        "Pick hotels, transport and attractions for every day",
    ),
    (
        WizardFlow::AiSuggestions,
        "AI Suggestions",
        "Choose from trip plans tailored to your preferences",
    ),
];

/// Label of the primary button, naming the step it leads to.
#[must_use]
pub fn next_label(flow: WizardFlow) -> String {
    format!("Next: {} →", flow.steps()[1].title())
}

fn flow_option(p: &UserInfoPageProps, flow: WizardFlow, label: &str, hint: &str) -> Html {
    let selected = p.flow == flow;
    let onclick = {
        let cb = p.on_flow_change.clone();
        Callback::from(move |_| cb.emit(flow))
    };
    html! {
        <button
            type="button"
            role="radio"
            class={classes!("flow-option", selected.then_some("flow-option--selected"))}
            aria-checked={selected.to_string()}
            data-flow={flow.key()}
            {onclick}
        >
            <strong>{ label.to_string() }</strong>
            <span class="muted">{ hint.to_string() }</span>
        </button>
    }
}

#[function_component(UserInfoPage)]
pub fn user_info_page(p: &UserInfoPageProps) -> Html {
    let on_next = {
        let cb = p.on_next.clone();
        Callback::from(move |_| cb.emit(()))
    };

    html! {
        <section class="panel step-panel" data-testid="user-info-step">
            <header class="step-panel__header">
                <h2>{ "Traveler Information" }</h2>
                <p class="muted">{ "Tell us about yourself and your travel plans" }</p>
            </header>
            <div class="flow-choice" role="radiogroup" aria-label="Planning mode">
                { for FLOWS.iter().map(|(flow, label, hint)| flow_option(p, *flow, label, hint)) }
            </div>
            <UserInfoForm
                info={p.info.clone()}
                max_days={p.max_days}
                on_change={p.on_change.clone()}
            />
            <div class="step-panel__actions">
                <button type="button" class="btn btn--primary" id="next-btn" onclick={on_next}>
                    { next_label(p.flow) }
                </button>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    fn props(flow: WizardFlow) -> UserInfoPageProps {
        UserInfoPageProps {
            info: UserInfo::default(),
            flow,
            max_days: 7,
            on_change: Callback::noop(),
            on_flow_change: Callback::noop(),
            on_next: Callback::noop(),
        }
    }

    #[test]
    fn next_button_names_the_following_step() {
        assert_eq!(next_label(WizardFlow::Customize), "Next: Customize Trip →");
        assert_eq!(next_label(WizardFlow::AiSuggestions), "Next: AI Suggestions →");
    }

    #[test]
    fn renders_form_and_marks_active_flow() {
        let html = block_on(
            LocalServerRenderer::<UserInfoPage>::with_props(props(WizardFlow::AiSuggestions))
                .render(),
        );
        assert!(html.contains("Traveler Information"));
        assert!(html.contains("Personal Details"));
        assert!(html.contains("flow-option--selected"));
        assert!(html.contains("data-flow=\"ai\""));
        assert!(html.contains("Next: AI Suggestions"));
    }
}
