use crate::planner::WizardController;
use crate::planner::numbers::usize_to_u32;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub controller: WizardController,
}

#[function_component(StepProgress)]
pub fn step_progress(p: &Props) -> Html {
    let current = p.controller.step();
    let number = p.controller.step_number();
    let percent = p.controller.progress_percent();
    let steps = p.controller.flow().steps().iter().enumerate().map(|(idx, step)| {
        let position = idx + 1;
        let class = classes!(
            "step-progress__step",
            (*step == current).then_some("step-progress__step--current"),
            (usize_to_u32(position) < number).then_some("step-progress__step--done"),
        );
        html! {
            <li {class} aria-current={(*step == current).then(|| AttrValue::from("step"))}>
                <span class="step-progress__icon" aria-hidden="true">{ step.icon() }</span>
                <span class="step-progress__title">{ step.title() }</span>
            </li>
        }
    });

    html! {
        <nav class="step-progress" aria-label="Planner progress">
            <div class="step-progress__meta">
                <span>{ format!("Step {number} of {}", p.controller.step_count()) }</span>
                <span>{ format!("{percent}% Complete") }</span>
            </div>
            <div
                class="step-progress__bar"
                role="progressbar"
                aria-valuemin="0"
                aria-valuemax="100"
                aria-valuenow={percent.to_string()}
            >
                <div class="step-progress__fill" style={format!("width: {percent}%")} />
            </div>
            <ol class="step-progress__steps">{ for steps }</ol>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planner::WizardFlow;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn first_step_shows_quarter_progress() {
        let props = Props {
            controller: WizardController::new(WizardFlow::AiSuggestions),
        };
        let html = block_on(LocalServerRenderer::<StepProgress>::with_props(props).render());
        assert!(html.contains("Step 1 of 4"));
        assert!(html.contains("25% Complete"));
        assert!(html.contains("AI Suggestions"));
        assert!(!html.contains("Customize Trip"));
    }
}
