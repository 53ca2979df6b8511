use crate::planner::{Catalog, Category, DayActivity, TripSession, WizardFlow, format_price};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, Clone)]
pub struct ItineraryPageProps {
    pub session: Rc<TripSession>,
    pub catalog: Rc<Catalog>,
    pub on_back: Callback<()>,
    pub on_next: Callback<()>,
}

impl PartialEq for ItineraryPageProps {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.session, &other.session) && Rc::ptr_eq(&self.catalog, &other.catalog)
    }
}

/// Heading for the itinerary: the chosen plan's title or a generic one.
#[must_use]
pub fn itinerary_title(session: &TripSession) -> String {
    session
        .selected_plan()
        .map_or_else(|| "Your Custom Itinerary".to_string(), |plan| plan.title.clone())
}

fn slot_row(p: &ItineraryPageProps, day: u32, category: Category) -> Html {
    let currency = &p.session.config().currency;
    let item = p
        .catalog
        .resolve(category, p.session.days().day(day).and_then(|d| d.slot(category)));
    html! {
        <div class="itinerary-slot" data-category={category.key()}>
            <span class="itinerary-slot__label">{ format!("{}:", category.label()) }</span>
            {
                match item {
                    Some(item) => html! {
                        <>
                            <span class="itinerary-slot__name">{ item.name.clone() }</span>
                            <span class="badge badge--outline">{ format_price(currency, item.price) }</span>
                            if let Some(location) = item.location.as_ref() {
                                <span class="muted">{ location.clone() }</span>
                            }
                        </>
                    },
                    None => html! { <span class="muted itinerary-slot__empty">{ "Not selected" }</span> },
                }
            }
        </div>
    }
}

fn day_entry(p: &ItineraryPageProps, entry: &DayActivity) -> Html {
    let custom = p.session.flow() == WizardFlow::Customize;
    html! {
        <li class="itinerary-day" key={entry.day}>
            <header class="itinerary-day__header">
                <span class="day-card__number">{ entry.day }</span>
                <h3>{ format!("Day {} - {}", entry.day, entry.city) }</h3>
            </header>
            if custom {
                { for Category::ALL.iter().map(|category| slot_row(p, entry.day, *category)) }
            } else {
                <ul class="itinerary-day__activities">
                    { for entry.activities.iter().map(|activity| html! { <li>{ activity.clone() }</li> }) }
                </ul>
            }
            <p class="muted">
                <strong>{ "Travel Time: " }</strong>{ entry.travel_time.clone() }
            </p>
            if !entry.locations.is_empty() {
                <p class="muted">
                    <strong>{ "Locations: " }</strong>{ entry.locations.join(", ") }
                </p>
            }
        </li>
    }
}

#[function_component(ItineraryPage)]
pub fn itinerary_page(p: &ItineraryPageProps) -> Html {
    let on_back = {
        let cb = p.on_back.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let on_next = {
        let cb = p.on_next.clone();
        Callback::from(move |_| cb.emit(()))
    };

    html! {
        <section class="panel step-panel" data-testid="itinerary-step">
            <header class="step-panel__header">
                <h2>{ itinerary_title(&p.session) }</h2>
                <p class="muted">{ "Review your selected options for each day below." }</p>
            </header>
            <ol class="itinerary">
                { for p.session.itinerary().iter().map(|entry| day_entry(p, entry)) }
            </ol>
            <div class="step-panel__actions">
                <span>{ "Review your selections and proceed to confirm your trip!" }</span>
                <button type="button" class="btn btn--outline" onclick={on_back}>{ "← Back" }</button>
                <button type="button" class="btn btn--primary" id="next-btn" onclick={on_next}>
                    { "Review & Confirm →" }
                </button>
            </div>
        </section>
    }
}
