pub mod customize;
pub mod itinerary;
pub mod not_found;
pub mod suggestions;
pub mod summary;
pub mod user_info;
