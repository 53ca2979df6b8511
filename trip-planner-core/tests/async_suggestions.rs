#![cfg(feature = "async")]

use std::time::Duration;
use trip_planner_core::{
    MockSuggestions, PlannerConfig, SuggestionTask, TripSession, UserInfo, WizardFlow,
};

#[tokio::test(start_paused = true)]
async fn completed_task_fills_session() {
    let mut session = TripSession::new(WizardFlow::AiSuggestions, PlannerConfig::default());
    let ticket = session.begin_suggestions();
    let task = SuggestionTask::spawn(
        MockSuggestions,
        session.user_info().clone(),
        Duration::from_millis(session.config().suggestion_delay_ms),
    );
    assert!(!task.is_finished());
    let plans = task.wait().await.unwrap();
    assert!(session.complete_suggestions(ticket, plans));
    assert_eq!(session.suggestions().len(), 3);
}

#[tokio::test(start_paused = true)]
async fn cancelled_task_leaves_session_untouched() {
    let mut session = TripSession::new(WizardFlow::AiSuggestions, PlannerConfig::default());
    let before = session.clone();
    let task = SuggestionTask::spawn(MockSuggestions, UserInfo::default(), Duration::from_secs(3));
    task.cancel();
    assert!(task.wait().await.is_err());
    session.cancel_suggestions();
    assert_eq!(session, before);
}
