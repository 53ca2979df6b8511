use crate::planner::WizardStep;
use yew_router::prelude::*;

#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/customize")]
    Customize,
    #[at("/suggestions")]
    Suggestions,
    #[at("/itinerary")]
    Itinerary,
    #[at("/summary")]
    Summary,
    #[at("/404")]
    #[not_found]
    NotFound,
}

impl Route {
    #[must_use]
    pub const fn from_step(step: WizardStep) -> Self {
        match step {
            WizardStep::UserInfo => Self::Home,
            WizardStep::Customize => Self::Customize,
            WizardStep::AiSuggestions => Self::Suggestions,
            WizardStep::Itinerary => Self::Itinerary,
            WizardStep::Summary => Self::Summary,
        }
    }

    #[must_use]
    pub const fn to_step(&self) -> Option<WizardStep> {
        match self {
            Self::Home => Some(WizardStep::UserInfo),
            Self::Customize => Some(WizardStep::Customize),
            Self::Suggestions => Some(WizardStep::AiSuggestions),
            Self::Itinerary => Some(WizardStep::Itinerary),
            Self::Summary => Some(WizardStep::Summary),
            Self::NotFound => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_step_round_trips_through_its_route() {
        let steps = [
            WizardStep::UserInfo,
            WizardStep::Customize,
            WizardStep::AiSuggestions,
            WizardStep::Itinerary,
            WizardStep::Summary,
        ];
        for step in steps {
            assert_eq!(Route::from_step(step).to_step(), Some(step));
        }
        assert!(Route::NotFound.to_step().is_none());
    }

    #[test]
    fn paths_match_step_names() {
        assert_eq!(Route::Home.to_path(), "/");
        assert_eq!(Route::Suggestions.to_path(), "/suggestions");
        assert_eq!(Route::recognize("/summary"), Some(Route::Summary));
    }
}
