use crate::planner::WizardFlow;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub flow: WizardFlow,
}

#[function_component(Header)]
pub fn header(p: &Props) -> Html {
    html! {
        <header role="banner" class="planner-header">
            <a href="#main" class="sr-only">{ "Skip to content" }</a>
            <h1 class="planner-header__title">{ p.flow.heading() }</h1>
            <p class="planner-header__tagline">{ p.flow.tagline() }</p>
        </header>
    }
}
