use yew::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer>{ "Prices in AED. All bookings are simulated." }</footer>
    }
}
