//! Trip summary, plain-text export and booking reference.
use crate::catalog::{Catalog, Category};
use crate::error::ExportError;
use crate::itinerary::DayActivity;
use crate::pricing::{PriceBreakdown, day_total, format_currency};
use crate::session::TripSession;
use once_cell::sync::Lazy;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::hash::Hasher;
use twox_hash::XxHash64;

pub const DEFAULT_TRIP_TITLE: &str = "UAE Trip";
const NOT_SELECTED: &str = "Not selected";
const REFERENCE_ALPHABET: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const REFERENCE_LEN: usize = 9;

static WHITESPACE_RUN: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(r"\s+").ok());

/// One day of the customization table with names resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedDay {
    pub day: u32,
    pub hotel: Option<String>,
    pub transport: Option<String>,
    pub attraction: Option<String>,
    pub total: i64,
}

impl ResolvedDay {
    #[must_use]
    pub fn name(&self, category: Category) -> Option<&str> {
        match category {
            Category::Hotel => self.hotel.as_deref(),
            Category::Transport => self.transport.as_deref(),
            Category::Attraction => self.attraction.as_deref(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripSummary {
    pub traveler: String,
    pub origin: String,
    pub month: String,
    pub budget: String,
    pub travelers: String,
    pub destination: String,
    pub title: String,
    pub duration: u32,
    pub cities: Vec<String>,
    pub currency: String,
    pub pricing: PriceBreakdown,
    pub highlights: Vec<String>,
    pub itinerary: Vec<DayActivity>,
    pub days: Vec<ResolvedDay>,
    pub booking_reference: String,
}

impl TripSummary {
    #[must_use]
    pub fn export_filename(&self) -> String {
        export_filename(Some(&self.title))
    }

    #[must_use]
    pub fn format_amount(&self, amount: f64) -> String {
        format_currency(&self.currency, amount)
    }
}

#[must_use]
pub fn build_summary(session: &TripSession, catalog: &Catalog) -> TripSummary {
    let info = session.user_info();
    let plan = session.selected_plan();
    let cities = plan.map(|plan| plan.cities.clone()).unwrap_or_default();

    let highlights = match plan {
        Some(plan) => plan.highlights.clone(),
        None => custom_highlights(session, catalog),
    };

    let days = session
        .days()
        .days()
        .iter()
        .map(|day| ResolvedDay {
            day: day.day,
            hotel: resolve_name(catalog, Category::Hotel, day.slot(Category::Hotel)),
            transport: resolve_name(catalog, Category::Transport, day.slot(Category::Transport)),
            attraction: resolve_name(catalog, Category::Attraction, day.slot(Category::Attraction)),
            total: day_total(catalog, day),
        })
        .collect();

    TripSummary {
        traveler: info.name.trim().to_string(),
        origin: info.origin_label().to_string(),
        month: info.month.clone(),
        budget: info.budget.clone(),
        travelers: info.travelers_label(),
        destination: destination_label(&cities),
        title: plan.map_or_else(|| DEFAULT_TRIP_TITLE.to_string(), |plan| plan.title.clone()),
        duration: plan.map_or(info.duration, |plan| plan.duration),
        cities,
        currency: session.config().currency.clone(),
        pricing: session.pricing(catalog),
        highlights,
        itinerary: session.itinerary().to_vec(),
        days,
        booking_reference: booking_reference(session_fingerprint(session)),
    }
}

fn resolve_name(catalog: &Catalog, category: Category, id: Option<&str>) -> Option<String> {
    catalog.resolve(category, id).map(|item| item.name.clone())
}

/// `"UAE: Dubai → Abu Dhabi"`, or just `"UAE"` without cities.
#[must_use]
pub fn destination_label(cities: &[String]) -> String {
    if cities.is_empty() {
        "UAE".to_string()
    } else {
        format!("UAE: {}", cities.join(" → "))
    }
}

/// Distinct hotels, then transports, then attractions, in first-selected order.
#[must_use]
pub fn custom_highlights(session: &TripSession, catalog: &Catalog) -> Vec<String> {
    Category::ALL
        .into_iter()
        .flat_map(|category| {
            session
                .days()
                .distinct_ids(category)
                .into_iter()
                .filter_map(move |id| catalog.find(category, id))
                .map(crate::catalog::CatalogItem::highlight)
        })
        .collect()
}

/// Title with whitespace runs dashed, plus `-itinerary.txt`.
#[must_use]
pub fn export_filename(title: Option<&str>) -> String {
    let title = title
        .map(str::trim)
        .filter(|title| !title.is_empty())
        .unwrap_or(DEFAULT_TRIP_TITLE);
    let dashed = WHITESPACE_RUN.as_ref().map_or_else(
        || title.split_whitespace().collect::<Vec<_>>().join("-"),
        |re| re.replace_all(title, "-").into_owned(),
    );
    format!("{dashed}-itinerary.txt")
}

/// Plain-text document offered for download.
///
/// # Errors
///
/// Returns [`ExportError::EmptyItinerary`] when no itinerary has been derived.
pub fn render_text(summary: &TripSummary) -> Result<String, ExportError> {
    if summary.itinerary.is_empty() {
        return Err(ExportError::EmptyItinerary);
    }
    write_document(summary).map_err(|err| ExportError::Generation(err.to_string()))
}

fn write_document(summary: &TripSummary) -> Result<String, std::fmt::Error> {
    let mut out = String::new();
    writeln!(out, "TRIP SUMMARY")?;
    writeln!(out, "============")?;
    writeln!(out)?;
    writeln!(out, "Traveler: {}", summary.traveler)?;
    writeln!(out, "Departure: {}", summary.origin)?;
    writeln!(out, "Journey Month: {}", summary.month)?;
    writeln!(out, "Budget Range: {}", summary.budget)?;
    writeln!(out, "Travelers: {}", summary.travelers)?;
    writeln!(out, "Trip: {}", summary.title)?;
    writeln!(out, "Duration: {} days", summary.duration)?;
    writeln!(out, "Destination: {}", summary.destination)?;
    writeln!(out, "Subtotal: {}", summary.format_amount(summary.pricing.subtotal))?;
    writeln!(
        out,
        "Commission (10%): {}",
        summary.format_amount(summary.pricing.commission)
    )?;
    writeln!(out, "Total Cost: {}", summary.format_amount(summary.pricing.total))?;
    writeln!(out, "Booking Reference: {}", summary.booking_reference)?;

    writeln!(out)?;
    writeln!(out, "ITINERARY")?;
    writeln!(out, "=========")?;
    for day in &summary.itinerary {
        writeln!(out)?;
        writeln!(out, "Day {} - {}", day.day, day.city)?;
        for activity in &day.activities {
            writeln!(out, "• {activity}")?;
        }
    }

    writeln!(out)?;
    writeln!(out, "CUSTOMIZATIONS")?;
    writeln!(out, "==============")?;
    for day in &summary.days {
        let slots: Vec<String> = Category::ALL
            .iter()
            .map(|category| {
                format!(
                    "{}: {}",
                    category.label(),
                    day.name(*category).unwrap_or(NOT_SELECTED)
                )
            })
            .collect();
        writeln!(out, "Day {}: {}", day.day, slots.join(" | "))?;
    }

    if !summary.highlights.is_empty() {
        writeln!(out)?;
        writeln!(out, "HIGHLIGHTS")?;
        writeln!(out, "==========")?;
        for highlight in &summary.highlights {
            writeln!(out, "• {highlight}")?;
        }
    }
    Ok(out)
}

/// Stable hash of the traveler details and selections.
#[must_use]
pub fn session_fingerprint(session: &TripSession) -> u64 {
    let mut hasher = XxHash64::with_seed(0);
    let bytes = serde_json::to_vec(&(session.user_info(), session.days(), session.selected_plan()))
        .unwrap_or_default();
    hasher.write(&bytes);
    hasher.finish()
}

/// `#TRP` followed by nine uppercase base-36 characters drawn from `seed`.
#[must_use]
pub fn booking_reference(seed: u64) -> String {
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    let code: String = (0..REFERENCE_LEN)
        .map(|_| char::from(REFERENCE_ALPHABET[rng.gen_range(0..REFERENCE_ALPHABET.len())]))
        .collect();
    format!("#TRP{code}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PlannerConfig;
    use crate::suggestions::mock_plans;
    use crate::wizard::WizardFlow;

    fn catalog() -> Catalog {
        Catalog::load_embedded().unwrap()
    }

    fn customized_session(catalog: &Catalog) -> TripSession {
        let mut session = TripSession::new(WizardFlow::Customize, PlannerConfig::default());
        session.update_user_info(|info| {
            info.name = "  Layla ".into();
            info.budget = "AED 5,000 - AED 15,000".into();
            info.origin = "doha".into();
            info.month = "May".into();
            info.duration = 3;
            info.children = 1;
        });
        session.next(catalog).unwrap();
        session.set_slot(1, Category::Hotel, "hotel-rak-inn");
        session.set_slot(2, Category::Hotel, "hotel-rak-inn");
        session.set_slot(2, Category::Transport, "basic");
        session.set_slot(3, Category::Attraction, "burj-khalifa");
        session.next(catalog).unwrap();
        session.next(catalog).unwrap();
        session
    }

    #[test]
    fn summary_resolves_labels_and_highlights() {
        let catalog = catalog();
        let summary = customized_session(&catalog).summary(&catalog);
        assert_eq!(summary.traveler, "Layla");
        assert_eq!(summary.origin, "Doha, Qatar");
        assert_eq!(summary.travelers, "2 Adults, 1 Child");
        assert_eq!(summary.budget, "AED 5,000 - AED 15,000");
        assert_eq!(summary.destination, "UAE");
        assert_eq!(summary.title, "UAE Trip");
        assert_eq!(
            summary.highlights,
            vec![
                "RAK Inn 3★ – Free Wi-Fi, Breakfast included".to_string(),
                "Basic Sedan – Up to 3 passengers, Air conditioned".to_string(),
                "Burj Khalifa – Top Deck – Observation deck, Skip-the-line entry".to_string(),
            ]
        );
        assert_eq!(summary.days[1].total, 450);
        assert!((summary.pricing.subtotal - 879.0).abs() < 1e-9);
    }

    #[test]
    fn text_export_lists_days_and_slots() {
        let catalog = catalog();
        let summary = customized_session(&catalog).summary(&catalog);
        let text = render_text(&summary).unwrap();
        assert!(text.starts_with("TRIP SUMMARY\n"));
        assert!(text.contains("Day 1 - UAE\n• Hotel: RAK Inn 3★\n"));
        assert!(text.contains("Day 3: Hotel: Not selected | Transport: Not selected | Attraction: Burj Khalifa – Top Deck"));
        assert!(text.contains("Total Cost: AED 966.90"));
        assert_eq!(summary.export_filename(), "UAE-Trip-itinerary.txt");
    }

    #[test]
    fn export_requires_an_itinerary() {
        let catalog = catalog();
        let summary = TripSession::default().summary(&catalog);
        assert!(matches!(render_text(&summary), Err(ExportError::EmptyItinerary)));
    }

    #[test]
    fn filenames_dash_whitespace_runs() {
        assert_eq!(export_filename(Some("UAE  Grand\tTour")), "UAE-Grand-Tour-itinerary.txt");
        assert_eq!(export_filename(None), "UAE-Trip-itinerary.txt");
        assert_eq!(export_filename(Some("   ")), "UAE-Trip-itinerary.txt");
    }

    #[test]
    fn plan_summary_uses_plan_details() {
        let catalog = catalog();
        let mut session = TripSession::new(WizardFlow::AiSuggestions, PlannerConfig::default());
        let plan = mock_plans(session.user_info()).remove(1);
        session.select_plan(plan);
        let summary = session.summary(&catalog);
        assert_eq!(summary.destination, "UAE: Dubai → Abu Dhabi → Ras Al Khaimah");
        assert_eq!(summary.export_filename(), "UAE-Grand-Tour-itinerary.txt");
        assert_eq!(summary.highlights.len(), 5);
    }

    #[test]
    fn booking_reference_is_seeded() {
        let reference = booking_reference(42);
        assert_eq!(reference, booking_reference(42));
        assert_ne!(reference, booking_reference(43));
        assert!(reference.starts_with("#TRP"));
        let code = &reference[4..];
        assert_eq!(code.len(), 9);
        assert!(code.chars().all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));
    }
}
