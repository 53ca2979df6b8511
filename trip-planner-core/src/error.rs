//! Error types for the planner core.
use crate::catalog::Category;
use crate::user_info::UserInfoField;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("JSON parsing error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("unknown category '{0}'")]
    UnknownCategory(String),
    #[error("duplicate {category} id '{id}'")]
    DuplicateId { category: Category, id: String },
}

/// A wizard transition that was refused. The step does not change.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransitionError {
    #[error("Please fill in: {}", field_list(.missing))]
    IncompleteUserInfo { missing: Vec<UserInfoField> },
    #[error(
        "Please select at least one option (hotel, transport, or attraction) for each day before proceeding to the next step."
    )]
    IncompleteDays { days: Vec<u32> },
    #[error("Please choose one of the suggested plans before continuing.")]
    NoPlanSelected,
    #[error("already at the last step")]
    AtLastStep,
    #[error("already at the first step")]
    AtFirstStep,
}

impl TransitionError {
    /// Dialog title for the inline prompt shown instead of advancing.
    #[must_use]
    pub const fn prompt_title(&self) -> &'static str {
        match self {
            Self::IncompleteUserInfo { .. } => "Missing Traveler Details",
            Self::IncompleteDays { .. } => "Incomplete Customization",
            Self::NoPlanSelected => "No Plan Selected",
            Self::AtLastStep | Self::AtFirstStep => "Navigation",
        }
    }

    /// Boundary rejections are silent; the rest surface a prompt to the user.
    #[must_use]
    pub const fn is_user_facing(&self) -> bool {
        !matches!(self, Self::AtLastStep | Self::AtFirstStep)
    }
}

fn field_list(fields: &[UserInfoField]) -> String {
    fields
        .iter()
        .map(|field| field.label())
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("nothing to export: the itinerary is empty")]
    EmptyItinerary,
    #[error("document generation failed: {0}")]
    Generation(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SuggestionError {
    #[error("suggestion request was cancelled")]
    Cancelled,
    #[error("suggestion task failed: {0}")]
    Failed(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("JSON parsing error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("max_days must be at least 1")]
    ZeroMaxDays,
}
