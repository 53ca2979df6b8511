use crate::app::state::AppState;
use crate::pages::summary::BookingStatus;
use crate::planner::{Catalog, ExportError, TripSession, render_text};
use yew::prelude::*;

/// Simulated payment processing time.
pub const BOOKING_DELAY_MS: i32 = 3000;

const EXPORT_FAILED: &str = "Error generating your itinerary file. Please try again.";

/// File name and text of the downloadable itinerary.
///
/// # Errors
///
/// Returns an [`ExportError`] when the document cannot be produced.
pub fn export_document(
    session: &TripSession,
    catalog: &Catalog,
) -> Result<(String, String), ExportError> {
    let summary = session.summary(catalog);
    let text = render_text(&summary)?;
    Ok((summary.export_filename(), text))
}

fn report_export_failure(detail: &str) {
    log::error!("itinerary export failed: {detail}");
    crate::dom::console_error(&format!("itinerary export failed: {detail}"));
    crate::dom::alert(EXPORT_FAILED);
}

pub fn build_export(state: &AppState) -> Callback<()> {
    let session_handle = state.session.clone();
    let catalog = state.catalog.clone();
    Callback::from(move |()| match export_document(&session_handle, &catalog) {
        Ok((filename, text)) => match crate::dom::download_text(&filename, &text) {
            Ok(()) => log::info!("downloaded {filename}"),
            Err(err) => report_export_failure(&crate::dom::js_error_message(&err)),
        },
        Err(err) => report_export_failure(&err.to_string()),
    })
}

pub fn build_preview(state: &AppState) -> Callback<bool> {
    let show_preview = state.show_preview.clone();
    Callback::from(move |open: bool| show_preview.set(open))
}

pub fn build_book(state: &AppState) -> Callback<()> {
    let booking = state.booking.clone();
    Callback::from(move |()| {
        if *booking != BookingStatus::Idle {
            return;
        }
        booking.set(BookingStatus::Processing);
        #[cfg(target_arch = "wasm32")]
        {
            let booking = booking.clone();
            wasm_bindgen_futures::spawn_local(async move {
                if let Err(err) = crate::dom::sleep_ms(BOOKING_DELAY_MS).await {
                    crate::dom::console_error(&crate::dom::js_error_message(&err));
                }
                booking.set(BookingStatus::Confirmed);
                crate::a11y::set_status("Booking confirmed");
            });
        }
        #[cfg(not(target_arch = "wasm32"))]
        booking.set(BookingStatus::Confirmed);
    })
}
