//! Linear step machine for the two wizard flows.
use crate::numbers::{percent_of, usize_to_u32};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardFlow {
    /// Hand-picked items per day
    #[default]
    Customize,
    /// Pick one of the mocked suggested plans
    AiSuggestions,
}

impl WizardFlow {
    #[must_use]
    pub const fn steps(self) -> &'static [WizardStep; 4] {
        match self {
            Self::Customize => &[
                WizardStep::UserInfo,
                WizardStep::Customize,
                WizardStep::Itinerary,
                WizardStep::Summary,
            ],
            Self::AiSuggestions => &[
                WizardStep::UserInfo,
                WizardStep::AiSuggestions,
                WizardStep::Itinerary,
                WizardStep::Summary,
            ],
        }
    }

    #[must_use]
    pub const fn heading(self) -> &'static str {
        match self {
            Self::Customize => "✈️ Dream Trip Planner",
            Self::AiSuggestions => "🤖 Dream AI Trip Planner",
        }
    }

    #[must_use]
    pub const fn tagline(self) -> &'static str {
        match self {
            Self::Customize => "Plan your perfect getaway in 4 simple steps",
            Self::AiSuggestions => "Plan your perfect getaway with AI assistance in 4 simple steps",
        }
    }

    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Customize => "customize",
            Self::AiSuggestions => "ai",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    #[default]
    UserInfo,
    Customize,
    AiSuggestions,
    Itinerary,
    Summary,
}

impl WizardStep {
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::UserInfo => "User Information",
            Self::Customize => "Customize Trip",
            Self::AiSuggestions => "AI Suggestions",
            Self::Itinerary => "Itinerary",
            Self::Summary => "Summary",
        }
    }

    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::UserInfo => "👥",
            Self::Customize => "📍",
            Self::AiSuggestions => "✈️",
            Self::Itinerary => "📅",
            Self::Summary => "💰",
        }
    }
}

/// Position within a flow. Holds no session data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WizardController {
    flow: WizardFlow,
    index: usize,
}

impl WizardController {
    #[must_use]
    pub const fn new(flow: WizardFlow) -> Self {
        Self { flow, index: 0 }
    }

    #[must_use]
    pub const fn flow(&self) -> WizardFlow {
        self.flow
    }

    #[must_use]
    pub fn step(&self) -> WizardStep {
        self.flow
            .steps()
            .get(self.index)
            .copied()
            .unwrap_or_default()
    }

    /// 1-based step number for the progress header.
    #[must_use]
    pub fn step_number(&self) -> u32 {
        usize_to_u32(self.index + 1)
    }

    #[must_use]
    pub fn step_count(&self) -> u32 {
        usize_to_u32(self.flow.steps().len())
    }

    #[must_use]
    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    #[must_use]
    pub fn is_last(&self) -> bool {
        self.index + 1 == self.flow.steps().len()
    }

    /// Move forward one step. Returns `false` at the last step.
    pub fn advance(&mut self) -> bool {
        if self.is_last() {
            return false;
        }
        self.index += 1;
        true
    }

    /// Move back one step. Returns `false` at the first step.
    pub fn retreat(&mut self) -> bool {
        if self.is_first() {
            return false;
        }
        self.index -= 1;
        true
    }

    /// Jump to `step` if it belongs to this flow and is not ahead of the current one.
    pub fn rewind_to(&mut self, step: WizardStep) -> bool {
        match self.flow.steps().iter().position(|candidate| *candidate == step) {
            Some(index) if index <= self.index => {
                self.index = index;
                true
            }
            _ => false,
        }
    }

    /// `step / 4 * 100`, rounded.
    #[must_use]
    pub fn progress_percent(&self) -> u8 {
        percent_of(u64::from(self.step_number()), u64::from(self.step_count()))
    }
}

impl Default for WizardController {
    fn default() -> Self {
        Self::new(WizardFlow::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn customize_flow_walks_every_step() {
        let mut controller = WizardController::new(WizardFlow::Customize);
        let mut seen = vec![controller.step()];
        while controller.advance() {
            seen.push(controller.step());
        }
        assert_eq!(seen, WizardFlow::Customize.steps().to_vec());
        assert!(controller.is_last());
        assert!(!controller.advance());
    }

    #[test]
    fn retreat_stops_at_first_step() {
        let mut controller = WizardController::new(WizardFlow::AiSuggestions);
        assert!(!controller.retreat());
        controller.advance();
        assert_eq!(controller.step(), WizardStep::AiSuggestions);
        assert!(controller.retreat());
        assert_eq!(controller.step(), WizardStep::UserInfo);
    }

    #[test]
    fn progress_tracks_step_number() {
        let mut controller = WizardController::default();
        assert_eq!(controller.progress_percent(), 25);
        controller.advance();
        controller.advance();
        assert_eq!(controller.step_number(), 3);
        assert_eq!(controller.progress_percent(), 75);
    }

    #[test]
    fn rewind_never_skips_forward() {
        let mut controller = WizardController::new(WizardFlow::Customize);
        assert!(!controller.rewind_to(WizardStep::Summary));
        assert!(!controller.rewind_to(WizardStep::AiSuggestions));
        controller.advance();
        controller.advance();
        assert!(controller.rewind_to(WizardStep::Customize));
        assert_eq!(controller.step(), WizardStep::Customize);
    }
}
