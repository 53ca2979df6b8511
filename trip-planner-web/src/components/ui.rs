pub mod day_card;
pub mod plan_card;
pub mod price_breakdown;
pub mod sidebar_section;
pub mod step_progress;
pub mod user_info_form;
