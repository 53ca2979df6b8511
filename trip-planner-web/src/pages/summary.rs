use crate::components::modal::Modal;
use crate::components::ui::price_breakdown::PriceBreakdownPanel;
use crate::planner::{Category, TripSummary, render_text};
use std::rc::Rc;
use yew::prelude::*;

/// Simulated checkout on the summary step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BookingStatus {
    #[default]
    Idle,
    Processing,
    Confirmed,
}

const IMPORTANT_NOTES: [&str; 4] = [
    "All prices are subject to availability and may change",
    "Cancellation policy applies as per terms and conditions",
    "Travel insurance is recommended",
    "Valid ID proof required for all travelers",
];

const PREVIEW_OPEN_ID: &str = "preview-open-btn";

#[derive(Properties, Clone)]
pub struct SummaryPageProps {
    pub summary: Rc<TripSummary>,
    pub booking: BookingStatus,
    pub show_preview: bool,
    pub on_back: Callback<()>,
    pub on_download: Callback<()>,
    pub on_preview: Callback<bool>,
    pub on_book: Callback<()>,
}

impl PartialEq for SummaryPageProps {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.summary, &other.summary)
            && self.booking == other.booking
            && self.show_preview == other.show_preview
    }
}

/// Label of the checkout button for the current booking state.
#[must_use]
pub fn book_label(summary: &TripSummary, status: BookingStatus) -> String {
    match status {
        BookingStatus::Processing => "Processing...".to_string(),
        BookingStatus::Idle | BookingStatus::Confirmed => {
            format!("Book Now - {}", summary.format_amount(summary.pricing.total))
        }
    }
}

fn emit_unit(cb: &Callback<()>) -> Callback<MouseEvent> {
    let cb = cb.clone();
    Callback::from(move |_| cb.emit(()))
}

fn detail(label: &str, value: &str) -> Html {
    html! {
        <div class="detail-row">
            <dt>{ label.to_string() }</dt>
            <dd>{ value.to_string() }</dd>
        </div>
    }
}

fn confirmed_view(p: &SummaryPageProps) -> Html {
    html! {
        <section class="panel booking-confirmed" data-testid="booking-confirmed" aria-live="polite">
            <h2>{ "Booking Confirmed! 🎉" }</h2>
            <p>
                { "Your dream trip has been booked successfully. You'll receive a confirmation email shortly." }
            </p>
            <button type="button" class="btn btn--primary" onclick={emit_unit(&p.on_download)}>
                { "Download Your Itinerary" }
            </button>
            <p class="muted">{ format!("Booking Reference: {}", p.summary.booking_reference) }</p>
        </section>
    }
}

fn customizations(summary: &TripSummary) -> Html {
    html! {
        <div class="summary-days">
            { for summary.days.iter().map(|day| html! {
                <article class="summary-day" key={day.day}>
                    <h4>{ format!("Day {}", day.day) }</h4>
                    { for Category::ALL.iter().map(|category| html! {
                        <p>
                            <span aria-hidden="true">{ category.fallback_icon() }</span>
                            <strong>{ format!(" {}: ", category.label()) }</strong>
                            {
                                match day.name(*category) {
                                    Some(name) => html! { <span>{ name.to_string() }</span> },
                                    None => html! { <span class="muted">{ "Not selected" }</span> },
                                }
                            }
                        </p>
                    }) }
                </article>
            }) }
        </div>
    }
}

fn preview(p: &SummaryPageProps) -> Html {
    let on_close = {
        let cb = p.on_preview.clone();
        Callback::from(move |()| cb.emit(false))
    };
    let body = match render_text(&p.summary) {
        Ok(text) => html! { <pre class="summary-preview">{ text }</pre> },
        Err(err) => html! { <p class="error" role="alert">{ err.to_string() }</p> },
    };
    html! {
        <Modal
            open={p.show_preview}
            title={AttrValue::from("Trip Summary Preview")}
            description={Some(AttrValue::from(p.summary.export_filename()))}
            return_focus_id={Some(AttrValue::from(PREVIEW_OPEN_ID))}
            on_close={on_close}
        >
            { body }
            <button type="button" class="btn btn--primary" onclick={emit_unit(&p.on_download)}>
                { "Download" }
            </button>
        </Modal>
    }
}

#[function_component(SummaryPage)]
pub fn summary_page(p: &SummaryPageProps) -> Html {
    if p.booking == BookingStatus::Confirmed {
        return confirmed_view(p);
    }
    let summary = &p.summary;
    let processing = p.booking == BookingStatus::Processing;
    let open_preview = {
        let cb = p.on_preview.clone();
        Callback::from(move |_| cb.emit(true))
    };

    html! {
        <section class="panel step-panel" data-testid="summary-step">
            <header class="step-panel__header">
                <h2>{ "Trip Summary & Confirmation" }</h2>
                <p class="muted">{ summary.title.clone() }</p>
            </header>
            <div class="summary-grid">
                <section aria-label="Traveler">
                    <h3>{ "Traveler" }</h3>
                    <dl>
                        { detail("Full Name", &summary.traveler) }
                        { detail("Departure City", &summary.origin) }
                        { detail("Journey Month", &summary.month) }
                    </dl>
                </section>
                <section aria-label="Trip Details">
                    <h3>{ "Trip Details" }</h3>
                    <dl>
                        { detail("Duration", &format!("{} days", summary.duration)) }
                        { detail("Budget Range", &summary.budget) }
                        { detail("Travelers", &summary.travelers) }
                        { detail("Destination", &summary.destination) }
                    </dl>
                </section>
            </div>
            <section aria-label="Your Customizations">
                <h3>{ "Your Customizations" }</h3>
                { customizations(summary) }
            </section>
            <PriceBreakdownPanel
                pricing={summary.pricing}
                currency={AttrValue::from(summary.currency.clone())}
            />
            <section aria-label="Itinerary Overview">
                <h3>{ "Itinerary Overview" }</h3>
                <ol class="itinerary-overview">
                    { for summary.itinerary.iter().map(|day| html! {
                        <li key={day.day}>
                            <strong>{ format!("Day {} - {}", day.day, day.city) }</strong>
                            <span class="muted">{ format!(" Travel: {}", day.travel_time) }</span>
                        </li>
                    }) }
                </ol>
            </section>
            <section aria-label="Highlights">
                <h3>{ "Highlights" }</h3>
                if summary.highlights.is_empty() {
                    <p class="muted">{ "No custom highlights selected." }</p>
                } else {
                    <ul>
                        { for summary.highlights.iter().map(|highlight| html! { <li>{ highlight.clone() }</li> }) }
                    </ul>
                }
            </section>
            <aside class="notes" aria-label="Important Notes">
                <h4>{ "Important Notes" }</h4>
                <ul>
                    { for IMPORTANT_NOTES.iter().map(|note| html! { <li>{ *note }</li> }) }
                </ul>
            </aside>
            <div class="step-panel__actions">
                <button type="button" class="btn btn--outline" onclick={emit_unit(&p.on_back)} disabled={processing}>
                    { "← Back to Customize" }
                </button>
                <button type="button" class="btn btn--outline" id={PREVIEW_OPEN_ID} onclick={open_preview}>
                    { "Preview & Download" }
                </button>
                <button
                    type="button"
                    class="btn btn--primary"
                    data-testid="book-now"
                    disabled={processing}
                    aria-busy={processing.to_string()}
                    onclick={emit_unit(&p.on_book)}
                >
                    { book_label(summary, p.booking) }
                </button>
            </div>
            { preview(p) }
        </section>
    }
}
