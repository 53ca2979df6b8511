use yew::prelude::*;

/// Shown when the address does not match a wizard step.
#[derive(Properties, PartialEq)]
pub struct Props {
    pub on_go_home: Callback<()>,
}

#[function_component(NotFound)]
pub fn not_found(props: &Props) -> Html {
    let go_home = {
        let cb = props.on_go_home.clone();
        Callback::from(move |_| cb.emit(()))
    };

    html! {
        <section class="panel not-found" aria-live="assertive">
            <h1>{ "Page not found" }</h1>
            <p>{ "This page is not part of the trip planner." }</p>
            <button type="button" onclick={go_home}>
                { "Back to the planner" }
            </button>
        </section>
    }
}
