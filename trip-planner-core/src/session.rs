//! Trip session: the single owner of wizard state.
use crate::catalog::{Catalog, Category};
use crate::config::PlannerConfig;
use crate::customization::DayPlan;
use crate::drag_drop::{Bounds, DragDropHandler, DropTarget};
use crate::error::TransitionError;
use crate::itinerary::{self, DayActivity};
use crate::pricing::{PriceBreakdown, price_breakdown};
use crate::suggestions::TripPlan;
use crate::summary::{self, TripSummary};
use crate::user_info::UserInfo;
use crate::wizard::{WizardController, WizardFlow, WizardStep};
use serde::{Deserialize, Serialize};

/// Lifecycle of the mocked suggestion request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SuggestionState {
    #[default]
    Idle,
    Loading {
        ticket: u64,
    },
    Ready(Vec<TripPlan>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripSession {
    controller: WizardController,
    config: PlannerConfig,
    user_info: UserInfo,
    days: DayPlan,
    drag: DragDropHandler,
    selected_plan: Option<TripPlan>,
    suggestions: SuggestionState,
    next_ticket: u64,
    itinerary: Vec<DayActivity>,
}

impl TripSession {
    #[must_use]
    pub fn new(flow: WizardFlow, config: PlannerConfig) -> Self {
        let user_info = UserInfo::default();
        let days = DayPlan::new(config.clamp_duration(user_info.duration));
        Self {
            controller: WizardController::new(flow),
            config,
            user_info: UserInfo {
                duration: days.duration(),
                ..user_info
            },
            days,
            drag: DragDropHandler::new(),
            selected_plan: None,
            suggestions: SuggestionState::Idle,
            next_ticket: 0,
            itinerary: Vec::new(),
        }
    }

    #[must_use]
    pub const fn controller(&self) -> &WizardController {
        &self.controller
    }

    #[must_use]
    pub const fn flow(&self) -> WizardFlow {
        self.controller.flow()
    }

    #[must_use]
    pub fn step(&self) -> WizardStep {
        self.controller.step()
    }

    /// Move to the other planner flow. Only possible before leaving the first
    /// step; traveler details and day slots carry over.
    pub fn switch_flow(&mut self, flow: WizardFlow) -> bool {
        if flow == self.flow() {
            return true;
        }
        if !self.controller.is_first() {
            return false;
        }
        log::info!("switching planner to {}", flow.key());
        self.controller = WizardController::new(flow);
        self.selected_plan = None;
        self.suggestions = SuggestionState::Idle;
        self.itinerary.clear();
        self.drag.drag_end();
        true
    }

    #[must_use]
    pub const fn config(&self) -> &PlannerConfig {
        &self.config
    }

    #[must_use]
    pub const fn user_info(&self) -> &UserInfo {
        &self.user_info
    }

    /// Replace traveler details. Duration is capped to the configured maximum
    /// and the day plan resized to match. Suggestions and any plan chosen from
    /// them were built from the old details and are dropped.
    pub fn set_user_info(&mut self, mut info: UserInfo) {
        info.duration = self.config.clamp_duration(info.duration);
        if info.duration != self.days.duration() {
            self.days.resize(info.duration);
        }
        if info != self.user_info {
            if !matches!(self.suggestions, SuggestionState::Idle) {
                log::debug!("traveler details changed; dropping stale suggestions");
                self.suggestions = SuggestionState::Idle;
            }
            self.clear_plan();
        }
        self.user_info = info;
    }

    pub fn update_user_info(&mut self, update: impl FnOnce(&mut UserInfo)) {
        let mut info = self.user_info.clone();
        update(&mut info);
        self.set_user_info(info);
    }

    #[must_use]
    pub const fn days(&self) -> &DayPlan {
        &self.days
    }

    pub fn set_slot(&mut self, day: u32, category: Category, item_id: impl Into<String>) -> bool {
        self.days.set_slot(day, category, item_id)
    }

    pub fn clear_slot(&mut self, day: u32, category: Category) -> bool {
        self.days.clear_slot(day, category)
    }

    #[must_use]
    pub const fn drag(&self) -> &DragDropHandler {
        &self.drag
    }

    pub fn drag_start(&mut self, category: Category, item_id: impl Into<String>) {
        self.drag.drag_start(category, item_id);
    }

    pub fn drag_over(&mut self, target: DropTarget) {
        self.drag.drag_over(target);
    }

    pub fn drag_leave(&mut self, pointer: (f64, f64), bounds: Bounds) {
        self.drag.drag_leave(pointer, bounds);
    }

    pub fn drop_on(&mut self, target: DropTarget) -> Option<DropTarget> {
        self.drag.drop(&mut self.days, target)
    }

    pub fn drag_end(&mut self) {
        self.drag.drag_end();
    }

    pub fn quick_add(&mut self, category: Category, item_id: &str) -> Option<DropTarget> {
        DragDropHandler::quick_add(&mut self.days, category, item_id)
    }

    #[must_use]
    pub const fn selected_plan(&self) -> Option<&TripPlan> {
        self.selected_plan.as_ref()
    }

    pub fn select_plan(&mut self, plan: TripPlan) {
        log::info!("selected plan '{}'", plan.title);
        self.selected_plan = Some(plan);
    }

    pub fn clear_plan(&mut self) {
        self.selected_plan = None;
    }

    #[must_use]
    pub const fn suggestion_state(&self) -> &SuggestionState {
        &self.suggestions
    }

    /// Ready suggestions, empty while idle or loading.
    #[must_use]
    pub fn suggestions(&self) -> &[TripPlan] {
        match &self.suggestions {
            SuggestionState::Ready(plans) => plans,
            _ => &[],
        }
    }

    #[must_use]
    pub const fn is_loading_suggestions(&self) -> bool {
        matches!(self.suggestions, SuggestionState::Loading { .. })
    }

    /// Start a suggestion request. Only the returned ticket can complete it.
    pub fn begin_suggestions(&mut self) -> u64 {
        self.next_ticket += 1;
        self.suggestions = SuggestionState::Loading {
            ticket: self.next_ticket,
        };
        self.next_ticket
    }

    /// Store suggestions for `ticket`. Stale or cancelled tickets are ignored.
    pub fn complete_suggestions(&mut self, ticket: u64, plans: Vec<TripPlan>) -> bool {
        match self.suggestions {
            SuggestionState::Loading { ticket: pending } if pending == ticket => {
                self.suggestions = SuggestionState::Ready(plans);
                true
            }
            _ => {
                log::debug!("discarding suggestions for stale ticket {ticket}");
                false
            }
        }
    }

    pub fn cancel_suggestions(&mut self) {
        if self.is_loading_suggestions() {
            self.suggestions = SuggestionState::Idle;
        }
    }

    #[must_use]
    pub fn itinerary(&self) -> &[DayActivity] {
        &self.itinerary
    }

    /// Trip price; the selected plan's budget is folded into the subtotal.
    #[must_use]
    pub fn pricing(&self, catalog: &Catalog) -> PriceBreakdown {
        price_breakdown(
            catalog,
            &self.days,
            self.selected_plan.as_ref().map(|plan| plan.budget),
        )
    }

    /// Check whether the current step may be left going forward.
    ///
    /// # Errors
    ///
    /// Returns the rejection the user should see when a gate is not met.
    pub fn check_gate(&self) -> Result<(), TransitionError> {
        match self.step() {
            WizardStep::UserInfo => {
                let missing = self.user_info.missing_fields();
                if missing.is_empty() {
                    Ok(())
                } else {
                    Err(TransitionError::IncompleteUserInfo { missing })
                }
            }
            WizardStep::Customize => {
                let days = self.days.incomplete_days();
                if days.is_empty() {
                    Ok(())
                } else {
                    Err(TransitionError::IncompleteDays { days })
                }
            }
            WizardStep::AiSuggestions => {
                if self.selected_plan.is_some() {
                    Ok(())
                } else {
                    Err(TransitionError::NoPlanSelected)
                }
            }
            WizardStep::Itinerary => Ok(()),
            WizardStep::Summary => Err(TransitionError::AtLastStep),
        }
    }

    /// Advance one step, deriving the itinerary when it is entered.
    ///
    /// # Errors
    ///
    /// Returns a [`TransitionError`] and leaves the step unchanged when a gate fails.
    pub fn next(&mut self, catalog: &Catalog) -> Result<WizardStep, TransitionError> {
        let from = self.step();
        if let Err(err) = self.check_gate() {
            log::debug!("transition from {from:?} rejected: {err}");
            return Err(err);
        }
        if !self.controller.advance() {
            return Err(TransitionError::AtLastStep);
        }
        if from == WizardStep::AiSuggestions {
            self.cancel_suggestions();
        }
        let to = self.step();
        match to {
            WizardStep::Itinerary => self.derive_itinerary(catalog),
            WizardStep::AiSuggestions => {
                self.suggestions = SuggestionState::Idle;
                self.clear_plan();
            }
            _ => {}
        }
        log::info!("wizard {from:?} -> {to:?}");
        Ok(to)
    }

    /// Retreat one step. Leaving the suggestion step cancels a pending request.
    ///
    /// # Errors
    ///
    /// Returns [`TransitionError::AtFirstStep`] on the first step.
    pub fn back(&mut self) -> Result<WizardStep, TransitionError> {
        let from = self.step();
        if !self.controller.retreat() {
            return Err(TransitionError::AtFirstStep);
        }
        if from == WizardStep::AiSuggestions {
            self.cancel_suggestions();
        }
        self.drag.drag_end();
        let to = self.step();
        log::info!("wizard {from:?} <- {to:?}");
        Ok(to)
    }

    /// Jump back to an earlier step of the same flow.
    pub fn rewind_to(&mut self, step: WizardStep) -> bool {
        let rewound = self.controller.rewind_to(step);
        if rewound {
            self.cancel_suggestions();
            self.drag.drag_end();
        }
        rewound
    }

    fn derive_itinerary(&mut self, catalog: &Catalog) {
        self.itinerary = match (self.flow(), &self.selected_plan) {
            (WizardFlow::AiSuggestions, Some(plan)) => itinerary::from_plan(plan),
            _ => itinerary::from_customizations(catalog, &self.days, &self.config.default_city),
        };
        log::debug!("derived itinerary with {} days", self.itinerary.len());
    }

    #[must_use]
    pub fn summary(&self, catalog: &Catalog) -> TripSummary {
        summary::build_summary(self, catalog)
    }
}

impl Default for TripSession {
    fn default() -> Self {
        Self::new(WizardFlow::default(), PlannerConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::suggestions::mock_plans;
    use crate::user_info::UserInfoField;

    fn catalog() -> Catalog {
        Catalog::load_embedded().unwrap()
    }

    fn filled(flow: WizardFlow, duration: u32) -> TripSession {
        let mut session = TripSession::new(flow, PlannerConfig::default());
        session.update_user_info(|info| {
            info.name = "Omar".into();
            info.budget = "AED 15,000 - AED 30,000".into();
            info.origin = "london".into();
            info.month = "December".into();
            info.duration = duration;
        });
        session
    }

    #[test]
    fn user_info_gate_lists_missing_fields() {
        let mut session = TripSession::default();
        session.update_user_info(|info| info.name = "Omar".into());
        let err = session.next(&catalog()).unwrap_err();
        assert_eq!(
            err,
            TransitionError::IncompleteUserInfo {
                missing: vec![UserInfoField::Origin, UserInfoField::Month, UserInfoField::Budget]
            }
        );
        assert_eq!(session.step(), WizardStep::UserInfo);
    }

    #[test]
    fn duration_is_capped_and_days_follow() {
        let mut session = filled(WizardFlow::Customize, 12);
        assert_eq!(session.user_info().duration, 7);
        assert_eq!(session.days().duration(), 7);
        session.update_user_info(|info| info.duration = 2);
        assert_eq!(session.days().duration(), 2);
        assert!(!session.set_slot(3, Category::Hotel, "hotel-rak-inn"));
    }

    #[test]
    fn customize_gate_requires_every_day() {
        let catalog = catalog();
        let mut session = filled(WizardFlow::Customize, 2);
        session.next(&catalog).unwrap();
        session.set_slot(1, Category::Hotel, "hotel-rak-inn");
        assert_eq!(
            session.next(&catalog),
            Err(TransitionError::IncompleteDays { days: vec![2] })
        );
        session.quick_add(Category::Hotel, "hotel-marina-4");
        assert_eq!(session.next(&catalog), Ok(WizardStep::Itinerary));
        assert_eq!(session.itinerary().len(), 2);
        assert_eq!(
            session.itinerary()[1].activities.to_vec(),
            vec!["Hotel: Marina View 4★".to_string()]
        );
    }

    #[test]
    fn ai_flow_needs_a_plan() {
        let catalog = catalog();
        let mut session = filled(WizardFlow::AiSuggestions, 3);
        assert_eq!(session.next(&catalog), Ok(WizardStep::AiSuggestions));
        assert_eq!(session.next(&catalog), Err(TransitionError::NoPlanSelected));

        let plans = mock_plans(session.user_info());
        session.select_plan(plans[2].clone());
        assert_eq!(session.next(&catalog), Ok(WizardStep::Itinerary));
        assert_eq!(session.itinerary()[1].city, "Abu Dhabi");

        let pricing = session.pricing(&catalog);
        assert_eq!(pricing.base_budget, 68_000);
        assert!((pricing.total - 74_800.0).abs() < 1e-6);
    }

    #[test]
    fn stale_suggestion_tickets_are_ignored() {
        let mut session = filled(WizardFlow::AiSuggestions, 3);
        let first = session.begin_suggestions();
        session.cancel_suggestions();
        assert!(!session.complete_suggestions(first, mock_plans(session.user_info())));
        assert!(session.suggestions().is_empty());

        let second = session.begin_suggestions();
        assert!(session.is_loading_suggestions());
        assert!(session.complete_suggestions(second, mock_plans(session.user_info())));
        assert_eq!(session.suggestions().len(), 3);
    }

    #[test]
    fn back_from_suggestions_cancels_loading() {
        let catalog = catalog();
        let mut session = filled(WizardFlow::AiSuggestions, 3);
        session.next(&catalog).unwrap();
        let ticket = session.begin_suggestions();
        assert_eq!(session.back(), Ok(WizardStep::UserInfo));
        assert_eq!(session.back(), Err(TransitionError::AtFirstStep));
        assert!(!session.complete_suggestions(ticket, Vec::new()));
    }

    #[test]
    fn changed_details_drop_the_chosen_plan() {
        let catalog = catalog();
        let mut session = filled(WizardFlow::AiSuggestions, 3);
        session.next(&catalog).unwrap();
        let ticket = session.begin_suggestions();
        assert!(session.complete_suggestions(ticket, mock_plans(session.user_info())));
        let plan = session.suggestions()[0].clone();
        session.select_plan(plan);
        session.back().unwrap();

        session.update_user_info(|info| info.duration = 5);
        assert!(session.selected_plan().is_none());
        session.next(&catalog).unwrap();
        assert_eq!(session.next(&catalog), Err(TransitionError::NoPlanSelected));

        let ticket = session.begin_suggestions();
        assert!(session.complete_suggestions(ticket, mock_plans(session.user_info())));
        let plan = session.suggestions()[0].clone();
        session.select_plan(plan);
        assert_eq!(session.next(&catalog), Ok(WizardStep::Itinerary));
        assert_eq!(session.itinerary().len(), 5);
        assert_eq!(session.summary(&catalog).duration, 5);
    }

    #[test]
    fn unchanged_details_keep_the_chosen_plan() {
        let mut session = filled(WizardFlow::AiSuggestions, 2);
        session.select_plan(mock_plans(session.user_info()).remove(1));
        let same = session.user_info().clone();
        session.set_user_info(same);
        assert!(session.selected_plan().is_some());
    }

    #[test]
    fn entering_suggestions_starts_without_a_plan() {
        let catalog = catalog();
        let mut session = filled(WizardFlow::AiSuggestions, 2);
        session.select_plan(mock_plans(session.user_info()).remove(0));
        session.next(&catalog).unwrap();
        assert!(session.selected_plan().is_none());
        assert_eq!(session.suggestion_state(), &SuggestionState::Idle);
    }

    #[test]
    fn leaving_suggestions_forward_cancels_loading() {
        let catalog = catalog();
        let mut session = filled(WizardFlow::AiSuggestions, 2);
        session.next(&catalog).unwrap();
        let first = session.begin_suggestions();
        assert!(session.complete_suggestions(first, mock_plans(session.user_info())));
        let plan = session.suggestions()[0].clone();
        session.select_plan(plan);
        let pending = session.begin_suggestions();

        assert_eq!(session.next(&catalog), Ok(WizardStep::Itinerary));
        assert!(!session.is_loading_suggestions());
        assert!(!session.complete_suggestions(pending, Vec::new()));
        assert_eq!(session.step(), WizardStep::Itinerary);
        assert_eq!(session.itinerary().len(), 2);
    }

    #[test]
    fn flow_switch_only_on_first_step() {
        let catalog = catalog();
        let mut session = filled(WizardFlow::Customize, 2);
        assert!(session.switch_flow(WizardFlow::AiSuggestions));
        assert_eq!(session.flow(), WizardFlow::AiSuggestions);
        assert_eq!(session.user_info().name, "Omar");

        session.next(&catalog).unwrap();
        assert!(!session.switch_flow(WizardFlow::Customize));
        assert!(session.switch_flow(WizardFlow::AiSuggestions));
        assert_eq!(session.step(), WizardStep::AiSuggestions);
    }

    #[test]
    fn summary_step_is_terminal() {
        let catalog = catalog();
        let mut session = filled(WizardFlow::Customize, 1);
        session.next(&catalog).unwrap();
        session.set_slot(1, Category::Transport, "basic");
        session.next(&catalog).unwrap();
        assert_eq!(session.next(&catalog), Ok(WizardStep::Summary));
        assert_eq!(session.next(&catalog), Err(TransitionError::AtLastStep));
        assert!(session.rewind_to(WizardStep::Customize));
        assert_eq!(session.step(), WizardStep::Customize);
    }
}
