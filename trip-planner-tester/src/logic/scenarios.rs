use anyhow::{Context, Result, bail, ensure};
use std::time::Duration;
use thiserror::Error;
use trip_planner_core::{
    BUDGET_RANGES, Bounds, Catalog, Category, DropTarget, ExportError, MONTHS, MockSuggestions,
    PlannerConfig, SuggestionError, SuggestionTask, TransitionError, TripSession, WizardFlow,
    WizardStep, format_amount, render_text,
};

/// Stand-in for the suggestion wait so runs stay fast.
const SUGGESTION_WAIT: Duration = Duration::from_millis(20);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScenarioKind {
    Smoke,
    Pricing,
    IncompleteDay,
    QuickAdd,
    Overwrite,
    SetClear,
    DragLeave,
    MissingDetails,
    AiSuggestions,
    StaleSuggestions,
}

#[derive(Debug, Clone, Copy)]
pub struct TestScenario {
    pub name: &'static str,
    pub description: &'static str,
    pub kind: ScenarioKind,
}

const SCENARIOS: [TestScenario; 10] = [
    TestScenario {
        name: "smoke",
        description: "Walk the customize flow end to end and export the summary",
        kind: ScenarioKind::Smoke,
    },
    TestScenario {
        name: "pricing",
        description: "Check subtotal, commission and total for a priced day",
        kind: ScenarioKind::Pricing,
    },
    TestScenario {
        name: "incomplete-day",
        description: "Refuse to leave customization while a day is empty",
        kind: ScenarioKind::IncompleteDay,
    },
    TestScenario {
        name: "quick-add",
        description: "Quick add fills the first open day, then day 1",
        kind: ScenarioKind::QuickAdd,
    },
    TestScenario {
        name: "overwrite",
        description: "A second drop on the same slot replaces the first",
        kind: ScenarioKind::Overwrite,
    },
    TestScenario {
        name: "set-clear",
        description: "Setting then clearing a slot leaves the day unpriced",
        kind: ScenarioKind::SetClear,
    },
    TestScenario {
        name: "drag-leave",
        description: "Leaving into a child keeps the highlight; leaving the zone clears it",
        kind: ScenarioKind::DragLeave,
    },
    TestScenario {
        name: "missing-details",
        description: "Traveler step names every blank required field",
        kind: ScenarioKind::MissingDetails,
    },
    TestScenario {
        name: "ai-suggestions",
        description: "Load mocked plans, pick one and price it into the summary",
        kind: ScenarioKind::AiSuggestions,
    },
    TestScenario {
        name: "stale-suggestions",
        description: "Cancelled or superseded suggestion requests never land",
        kind: ScenarioKind::StaleSuggestions,
    },
];

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("unknown scenario '{0}'")]
    Unknown(String),
}

#[must_use]
pub const fn list_scenarios() -> &'static [TestScenario] {
    &SCENARIOS
}

/// # Errors
///
/// Returns [`ScenarioError::Unknown`] when no scenario has that name.
pub fn get_scenario(name: &str) -> Result<TestScenario, ScenarioError> {
    SCENARIOS
        .iter()
        .find(|scenario| scenario.name == name)
        .copied()
        .ok_or_else(|| ScenarioError::Unknown(name.to_string()))
}

/// Run one iteration of `scenario`. Iterations vary the trip length.
///
/// # Errors
///
/// Returns the first expectation the planner failed to meet.
pub async fn run_check(scenario: &TestScenario, catalog: &Catalog, iteration: usize) -> Result<()> {
    let days = trip_days(iteration);
    match scenario.kind {
        ScenarioKind::Smoke => smoke(catalog, days),
        ScenarioKind::Pricing => pricing(catalog),
        ScenarioKind::IncompleteDay => incomplete_day(catalog, days.max(2)),
        ScenarioKind::QuickAdd => quick_add(days),
        ScenarioKind::Overwrite => overwrite(catalog),
        ScenarioKind::SetClear => set_clear(catalog, days),
        ScenarioKind::DragLeave => drag_leave(),
        ScenarioKind::MissingDetails => missing_details(catalog),
        ScenarioKind::AiSuggestions => ai_suggestions(catalog, days).await,
        ScenarioKind::StaleSuggestions => stale_suggestions(catalog).await,
    }
}

fn trip_days(iteration: usize) -> u32 {
    let max = PlannerConfig::default().max_days;
    u32::try_from(iteration).map_or(1, |i| i % max + 1)
}

fn new_session(flow: WizardFlow, days: u32) -> TripSession {
    let mut session = TripSession::new(flow, PlannerConfig::default());
    session.update_user_info(|info| {
        info.name = "QA Traveler".into();
        info.budget = BUDGET_RANGES[1].into();
        info.origin = "london".into();
        info.month = MONTHS[2].into();
        info.duration = days;
    });
    session
}

fn smoke(catalog: &Catalog, days: u32) -> Result<()> {
    let mut session = new_session(WizardFlow::Customize, days);
    session.next(catalog).context("leaving traveler details")?;
    for day in 1..=days {
        session.set_slot(day, Category::Hotel, "hotel-marina-4");
        session.set_slot(day, Category::Attraction, "burj-khalifa");
    }
    ensure!(
        session.next(catalog)? == WizardStep::Itinerary,
        "customization did not lead to the itinerary"
    );
    ensure!(
        session.itinerary().len() == days as usize,
        "itinerary has {} days, expected {days}",
        session.itinerary().len()
    );
    ensure!(session.next(catalog)? == WizardStep::Summary, "itinerary did not lead to summary");

    let summary = session.summary(catalog);
    let expected = session.pricing(catalog);
    ensure!(
        summary.pricing == expected,
        "summary total {} disagrees with session total {}",
        summary.pricing.total,
        expected.total
    );
    let text = render_text(&summary)?;
    ensure!(text.contains("Traveler: QA Traveler"), "export lost the traveler name");
    ensure!(
        text.contains(&format!("Total Cost: {}", summary.format_amount(expected.total))),
        "export total does not match the summary"
    );
    Ok(())
}

fn pricing(catalog: &Catalog) -> Result<()> {
    let mut session = new_session(WizardFlow::Customize, 1);
    session.set_slot(1, Category::Hotel, "hotel-atlantis-5");
    let price = session.pricing(catalog);
    ensure!(price.customization_total == 1200, "day total was {}", price.customization_total);
    ensure!(
        format_amount(price.commission) == "120.00",
        "commission was {}",
        format_amount(price.commission)
    );
    ensure!(
        format_amount(price.total) == "1,320.00",
        "total was {}",
        format_amount(price.total)
    );

    let mut session = new_session(WizardFlow::Customize, 3);
    session.set_slot(1, Category::Hotel, "hotel-rak-inn");
    session.set_slot(2, Category::Transport, "basic");
    session.set_slot(3, Category::Attraction, "burj-khalifa");
    let price = session.pricing(catalog);
    ensure!(price.customization_total == 629, "subtotal was {}", price.subtotal);
    ensure!((price.commission - 62.9).abs() < 1e-9, "commission was {}", price.commission);
    ensure!((price.total - 691.9).abs() < 1e-9, "total was {}", price.total);

    let mut session = new_session(WizardFlow::Customize, 1);
    let price = session.pricing(catalog);
    ensure!(price.total.abs() < f64::EPSILON, "empty trip costs {}", price.total);
    session.next(catalog)?;
    ensure!(
        session.next(catalog).is_err(),
        "an empty day was allowed through customization"
    );
    Ok(())
}

fn incomplete_day(catalog: &Catalog, days: u32) -> Result<()> {
    let mut session = new_session(WizardFlow::Customize, days);
    session.next(catalog)?;
    session.set_slot(1, Category::Transport, "basic");
    let expected: Vec<u32> = (2..=days).collect();
    match session.next(catalog) {
        Err(TransitionError::IncompleteDays { days: empty }) if empty == expected => {}
        other => bail!("expected days {expected:?} to block the step, got {other:?}"),
    }
    ensure!(
        session.step() == WizardStep::Customize,
        "refused transition still moved to {:?}",
        session.step()
    );
    Ok(())
}

fn quick_add(days: u32) -> Result<()> {
    let mut session = new_session(WizardFlow::Customize, days);
    for day in 1..=days {
        let placed = session.quick_add(Category::Attraction, "dubai-fountain");
        ensure!(
            placed == Some(DropTarget::new(day, Category::Attraction)),
            "quick add landed on {placed:?}, expected day {day}"
        );
    }
    let overflow = session.quick_add(Category::Attraction, "desert-safari");
    ensure!(
        overflow == Some(DropTarget::new(1, Category::Attraction)),
        "full trip quick add landed on {overflow:?}"
    );
    let first = session.days().day(1).and_then(|day| day.slot(Category::Attraction));
    ensure!(first == Some("desert-safari"), "day 1 attraction is {first:?}");
    Ok(())
}

fn overwrite(catalog: &Catalog) -> Result<()> {
    let mut session = new_session(WizardFlow::Customize, 2);
    let target = DropTarget::new(2, Category::Hotel);
    for item in ["hotel-rak-inn", "hotel-atlantis-5"] {
        session.drag_start(Category::Hotel, item);
        session.drag_over(target);
        ensure!(session.drop_on(target) == Some(target), "drop of {item} was not applied");
    }
    let slot = session.days().day(2).and_then(|day| day.slot(Category::Hotel));
    ensure!(slot == Some("hotel-atlantis-5"), "day 2 hotel is {slot:?}");
    ensure!(!session.drag().is_dragging(), "drop left a drag in progress");
    ensure!(session.drag().highlight().is_none(), "drop left a highlight");
    ensure!(
        session.pricing(catalog).customization_total == 1200,
        "only the replacing hotel should be priced"
    );
    Ok(())
}

fn set_clear(catalog: &Catalog, days: u32) -> Result<()> {
    let mut session = new_session(WizardFlow::Customize, days);
    ensure!(session.set_slot(days, Category::Transport, "lux-suv"), "set was refused");
    ensure!(session.clear_slot(days, Category::Transport), "clear was refused");
    let selected = session.days().day(days).is_some_and(|day| day.has_selection());
    ensure!(!selected, "day {days} still has a selection");
    ensure!(
        session.pricing(catalog).total.abs() < f64::EPSILON,
        "cleared trip still costs {}",
        session.pricing(catalog).total
    );
    ensure!(
        !session.set_slot(days + 1, Category::Transport, "basic"),
        "a day outside the trip accepted a selection"
    );
    Ok(())
}

fn drag_leave() -> Result<()> {
    let mut session = new_session(WizardFlow::Customize, 1);
    let target = DropTarget::new(1, Category::Attraction);
    let zone = Bounds::new(0.0, 0.0, 100.0, 50.0);
    session.drag_start(Category::Attraction, "ski-dubai");
    session.drag_over(target);
    session.drag_leave((40.0, 25.0), zone);
    ensure!(
        session.drag().highlight() == Some(target),
        "moving onto a child cleared the highlight"
    );
    session.drag_leave((140.0, 25.0), zone);
    ensure!(session.drag().highlight().is_none(), "leaving the zone kept the highlight");
    ensure!(session.drag().is_dragging(), "leaving the zone dropped the payload");
    session.drag_end();
    ensure!(
        session.drop_on(target).is_none(),
        "a drop after the gesture ended still assigned"
    );
    Ok(())
}

fn missing_details(catalog: &Catalog) -> Result<()> {
    let mut session = TripSession::new(WizardFlow::Customize, PlannerConfig::default());
    session.update_user_info(|info| info.name = "   ".into());
    match session.next(catalog) {
        Err(TransitionError::IncompleteUserInfo { missing }) if missing.len() == 4 => {}
        other => bail!("blank traveler details were not all reported: {other:?}"),
    }
    ensure!(session.step() == WizardStep::UserInfo, "blank details advanced the wizard");
    Ok(())
}

async fn ai_suggestions(catalog: &Catalog, days: u32) -> Result<()> {
    let mut session = new_session(WizardFlow::AiSuggestions, days);
    session.next(catalog)?;
    ensure!(
        matches!(session.next(catalog), Err(TransitionError::NoPlanSelected)),
        "suggestion step advanced without a plan"
    );

    let ticket = session.begin_suggestions();
    let task = SuggestionTask::spawn(MockSuggestions, session.user_info().clone(), SUGGESTION_WAIT);
    let plans = task.wait().await?;
    ensure!(session.complete_suggestions(ticket, plans), "live ticket was rejected");
    ensure!(session.suggestions().len() == 3, "expected three plans");

    let plan = session.suggestions()[0].clone();
    let base = plan.budget;
    session.select_plan(plan);
    session.next(catalog)?;
    ensure!(
        session.itinerary().len() == days as usize,
        "plan itinerary has {} days, expected {days}",
        session.itinerary().len()
    );
    ensure!(
        session.pricing(catalog).base_budget == base,
        "plan budget missing from the price"
    );
    session.next(catalog)?;
    let text = render_text(&session.summary(catalog))?;
    ensure!(text.contains("HIGHLIGHTS"), "plan highlights missing from export");
    Ok(())
}

async fn stale_suggestions(catalog: &Catalog) -> Result<()> {
    let mut session = new_session(WizardFlow::AiSuggestions, 3);
    session.next(catalog)?;

    let stale = session.begin_suggestions();
    let live = session.begin_suggestions();
    let plans = trip_planner_core::mock_plans(session.user_info());
    ensure!(
        !session.complete_suggestions(stale, plans.clone()),
        "superseded ticket was accepted"
    );
    ensure!(session.is_loading_suggestions(), "stale result ended the wait");

    let task = SuggestionTask::spawn(MockSuggestions, session.user_info().clone(), SUGGESTION_WAIT);
    task.cancel();
    match task.wait().await {
        Err(SuggestionError::Cancelled) => {}
        other => bail!("cancelled request finished with {other:?}"),
    }

    session.back()?;
    ensure!(
        !session.complete_suggestions(live, plans),
        "result landed after leaving the step"
    );
    ensure!(session.suggestions().is_empty(), "plans leaked into the traveler step");
    ensure!(
        matches!(
            render_text(&session.summary(catalog)),
            Err(ExportError::EmptyItinerary)
        ),
        "export succeeded without an itinerary"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scenario_names_are_unique() {
        let mut names: Vec<_> = list_scenarios().iter().map(|s| s.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), list_scenarios().len());
    }

    #[test]
    fn unknown_scenario_is_reported() {
        let err = get_scenario("nope").unwrap_err();
        assert_eq!(err.to_string(), "unknown scenario 'nope'");
    }

    #[test]
    fn iterations_cycle_through_trip_lengths() {
        assert_eq!(trip_days(0), 1);
        assert_eq!(trip_days(6), 7);
        assert_eq!(trip_days(7), 1);
    }

    #[tokio::test]
    async fn every_scenario_passes_on_the_embedded_catalog() {
        let catalog = Catalog::load_embedded().unwrap();
        for scenario in list_scenarios() {
            for iteration in 0..3 {
                run_check(scenario, &catalog, iteration)
                    .await
                    .unwrap_or_else(|err| panic!("{} failed: {err:#}", scenario.name));
            }
        }
    }
}
