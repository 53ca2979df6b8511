use crate::planner::{TripPlan, format_price};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub plan: TripPlan,
    pub selected: bool,
    pub currency: AttrValue,
    /// Month and origin shown in the fit note, e.g. `("March", "Paris, France")`
    #[prop_or_default]
    pub travel_note: Option<(AttrValue, AttrValue)>,
    pub on_select: Callback<TripPlan>,
}

/// Confirmation shown under the chosen plan.
#[must_use]
pub fn selection_note(plan: &TripPlan, month: &str) -> String {
    let covered: Vec<&str> = plan.cities.iter().take(2).map(String::as_str).collect();
    let more = if plan.cities.len() > 2 {
        " and more emirates"
    } else {
        ""
    };
    format!(
        "Excellent choice! This plan perfectly covers {}{more} for your {month} trip",
        covered.join(" & ")
    )
}

#[function_component(PlanCard)]
pub fn plan_card(p: &Props) -> Html {
    let on_select = {
        let cb = p.on_select.clone();
        let plan = p.plan.clone();
        Callback::from(move |_| cb.emit(plan.clone()))
    };
    let plan = &p.plan;

    html! {
        <article
            class={classes!("plan-card", p.selected.then_some("plan-card--selected"))}
            data-plan-id={plan.id.clone()}
        >
            <header class="plan-card__header">
                <h3>{ plan.title.clone() }</h3>
                <div class="plan-card__badges">
                    if p.selected {
                        <span class="plan-card__selected">{ "Selected" }</span>
                    }
                    <span class="badge badge--outline">{ plan.theme.clone() }</span>
                    if let Some(badge) = plan.badge.as_ref() {
                        <span class="badge">{ badge.clone() }</span>
                    }
                </div>
                <p class="plan-card__description">{ plan.description.clone() }</p>
            </header>
            <dl class="plan-card__facts">
                <div>
                    <dt>{ "Destinations" }</dt>
                    <dd>{ plan.route_label() }</dd>
                </div>
                <div>
                    <dt>{ "Duration" }</dt>
                    <dd>{ format!("{} days", plan.duration) }</dd>
                </div>
                <div>
                    <dt>{ "Total Cost" }</dt>
                    <dd class="plan-card__budget">{ format_price(&p.currency, plan.budget) }</dd>
                </div>
            </dl>
            <h4>{ "Experience Highlights:" }</h4>
            <ul class="plan-card__highlights">
                { for plan.highlights.iter().map(|highlight| html! { <li>{ highlight.clone() }</li> }) }
            </ul>
            <footer class="plan-card__footer">
                if let Some((month, origin)) = p.travel_note.as_ref() {
                    <span class="muted">{ format!("Perfect for {month} travel from {origin}") }</span>
                }
                <button
                    type="button"
                    class={classes!("btn", if p.selected { "btn--success" } else { "btn--primary" })}
                    aria-pressed={p.selected.to_string()}
                    onclick={on_select}
                >
                    { if p.selected { "✓ Selected" } else { "Choose This Plan" } }
                </button>
            </footer>
            if p.selected {
                <p class="plan-card__note">
                    { selection_note(plan, p.travel_note.as_ref().map_or("", |(month, _)| month.as_str())) }
                </p>
            }
        </article>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planner::{UserInfo, mock_plans};
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    fn plan(idx: usize) -> TripPlan {
        mock_plans(&UserInfo::default()).remove(idx)
    }

    #[test]
    fn unselected_plan_offers_choice() {
        let props = Props {
            plan: plan(0),
            selected: false,
            currency: "AED".into(),
            travel_note: None,
            on_select: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<PlanCard>::with_props(props).render());
        assert!(html.contains("Dubai Luxury Experience"));
        assert!(html.contains("Choose This Plan"));
        assert!(html.contains("🏆 Most Popular"));
        assert!(html.contains("AED 102,000"));
    }

    #[test]
    fn selected_plan_confirms_coverage() {
        let props = Props {
            plan: plan(1),
            selected: true,
            currency: "AED".into(),
            travel_note: Some(("March".into(), "Paris, France".into())),
            on_select: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<PlanCard>::with_props(props).render());
        assert!(html.contains("✓ Selected"));
        assert!(html.contains("Perfect for March travel from Paris, France"));
        assert!(html.contains("and more emirates for your March trip"));
    }

    #[test]
    fn selection_note_names_first_two_cities() {
        assert_eq!(
            selection_note(&plan(1), "May"),
            "Excellent choice! This plan perfectly covers Dubai & Abu Dhabi and more emirates for your May trip"
        );
        assert_eq!(
            selection_note(&plan(0), "May"),
            "Excellent choice! This plan perfectly covers Dubai for your May trip"
        );
    }
}
