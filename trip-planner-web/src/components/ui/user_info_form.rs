use crate::planner::{BUDGET_RANGES, MONTHS, ORIGIN_CITIES, UserInfo};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub info: UserInfo,
    pub max_days: u32,
    pub on_change: Callback<UserInfo>,
}

type Apply = fn(&mut UserInfo, String);

fn parse_count(input: &str) -> u32 {
    input.trim().parse().unwrap_or(0)
}

fn on_input(p: &Props, apply: Apply) -> Callback<InputEvent> {
    let cb = p.on_change.clone();
    let info = p.info.clone();
    Callback::from(move |e: InputEvent| {
        if let Some(input) = e.target_dyn_into::<web_sys::HtmlInputElement>() {
            let mut next = info.clone();
            apply(&mut next, input.value());
            cb.emit(next);
        }
    })
}

fn on_select(p: &Props, apply: Apply) -> Callback<Event> {
    let cb = p.on_change.clone();
    let info = p.info.clone();
    Callback::from(move |e: Event| {
        if let Some(select) = e.target_dyn_into::<web_sys::HtmlSelectElement>() {
            let mut next = info.clone();
            apply(&mut next, select.value());
            cb.emit(next);
        }
    })
}

fn options<'a>(
    current: &str,
    placeholder: &'static str,
    choices: impl Iterator<Item = (&'a str, &'a str)>,
) -> Html {
    html! {
        <>
            <option value="" selected={current.is_empty()} disabled={true}>{ placeholder }</option>
            { for choices.map(|(value, label)| html! {
                <option value={value.to_string()} selected={value == current}>{ label.to_string() }</option>
            }) }
        </>
    }
}

#[function_component(UserInfoForm)]
pub fn user_info_form(p: &Props) -> Html {
    let info = &p.info;
    let required = html! { <span class="required" aria-hidden="true">{ "*" }</span> };

    html! {
        <form class="user-info-form" onsubmit={Callback::from(|e: SubmitEvent| e.prevent_default())}>
            <fieldset>
                <legend>{ "Personal Details" }</legend>
                <label for="name">{ "Full Name " }{ required.clone() }</label>
                <input
                    id="name"
                    name="name"
                    autocomplete="name"
                    placeholder="Enter your full name"
                    value={info.name.clone()}
                    oninput={on_input(p, |info, value| info.name = value)}
                />
                <label for="origin">{ "Departure City " }{ required.clone() }</label>
                <select id="origin" name="origin" onchange={on_select(p, |info, value| info.origin = value)}>
                    { options(&info.origin, "Select departure city", ORIGIN_CITIES.iter().copied()) }
                </select>
            </fieldset>
            <fieldset>
                <legend>{ "Trip Details" }</legend>
                <label for="duration">{ "Trip Duration (Days)" }</label>
                <input
                    id="duration"
                    name="duration"
                    type="number"
                    min="1"
                    max={p.max_days.to_string()}
                    placeholder="e.g. 7"
                    value={info.duration.to_string()}
                    oninput={on_input(p, |info, value| info.duration = UserInfo::parse_duration(&value))}
                />
                <label for="month">{ "Journey Month " }{ required.clone() }</label>
                <select id="month" name="month" onchange={on_select(p, |info, value| info.month = value)}>
                    { options(&info.month, "Select month", MONTHS.iter().map(|month| (*month, *month))) }
                </select>
                <label for="budget">{ "Budget Range " }{ required }</label>
                <select id="budget" name="budget" onchange={on_select(p, |info, value| info.budget = value)}>
                    { options(&info.budget, "Select budget range", BUDGET_RANGES.iter().map(|range| (*range, *range))) }
                </select>
            </fieldset>
            <fieldset>
                <legend>{ "Travelers" }</legend>
                <label for="adults">{ "Adults (12+)" }</label>
                <input
                    id="adults"
                    name="adults"
                    type="number"
                    min="1"
                    value={info.adults.to_string()}
                    oninput={on_input(p, |info, value| info.adults = UserInfo::parse_adults(&value))}
                />
                <label for="children">{ "Children (2-11)" }</label>
                <input
                    id="children"
                    name="children"
                    type="number"
                    min="0"
                    value={info.children.to_string()}
                    oninput={on_input(p, |info, value| info.children = parse_count(&value))}
                />
                <label for="infants">{ "Infants (under 2)" }</label>
                <input
                    id="infants"
                    name="infants"
                    type="number"
                    min="0"
                    value={info.infants.to_string()}
                    oninput={on_input(p, |info, value| info.infants = parse_count(&value))}
                />
            </fieldset>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn form_lists_reference_data() {
        let props = Props {
            info: UserInfo {
                month: "March".into(),
                ..UserInfo::default()
            },
            max_days: 7,
            on_change: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<UserInfoForm>::with_props(props).render());
        assert!(html.contains("Enter your full name"));
        assert!(html.contains("AED 120,000+"));
        assert!(html.contains("December"));
        assert!(html.contains("Select departure city"));
        assert!(html.contains("max=\"7\""));
    }

    #[test]
    fn counts_default_to_zero() {
        assert_eq!(parse_count("2"), 2);
        assert_eq!(parse_count("-1"), 0);
        assert_eq!(parse_count(""), 0);
    }
}
