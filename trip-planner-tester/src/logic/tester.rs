use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use trip_planner_core::Catalog;

use super::scenarios::{TestScenario, run_check};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub scenario_name: String,
    pub passed: bool,
    pub iterations_run: usize,
    pub successful_iterations: usize,
    pub failures: Vec<String>,
    #[serde(with = "duration_serde")]
    pub average_duration: Duration,
}

pub struct LogicTester<'a> {
    catalog: &'a Catalog,
    verbose: bool,
}

impl<'a> LogicTester<'a> {
    pub const fn new(catalog: &'a Catalog, verbose: bool) -> Self {
        Self { catalog, verbose }
    }

    pub async fn run_scenario(&self, scenario: &TestScenario, iterations: usize) -> ScenarioResult {
        if self.verbose {
            println!(
                "🧪 Testing scenario: {} ({})",
                scenario.name.bright_white(),
                scenario.description
            );
        }

        let mut successes = 0;
        let mut failures = Vec::new();
        let mut performance_data = Vec::new();

        for i in 0..iterations {
            let start_time = Instant::now();
            match run_check(scenario, self.catalog, i).await {
                Ok(()) => {
                    successes += 1;
                    let duration = start_time.elapsed();
                    performance_data.push(duration);
                    if self.verbose {
                        println!("  ✅ Iteration {}/{iterations} passed ({duration:?})", i + 1);
                    }
                }
                Err(err) => {
                    log::debug!("{} iteration {} failed: {err:?}", scenario.name, i + 1);
                    let message = format!("Iteration {}: {err:#}", i + 1);
                    if self.verbose {
                        println!(
                            "  ❌ Iteration {}/{iterations} failed: {}",
                            i + 1,
                            message.clone().red()
                        );
                    }
                    failures.push(message);
                }
            }
        }

        ScenarioResult {
            scenario_name: scenario.name.to_string(),
            passed: failures.is_empty(),
            iterations_run: iterations,
            successful_iterations: successes,
            failures,
            average_duration: average(&performance_data),
        }
    }
}

fn average(samples: &[Duration]) -> Duration {
    if samples.is_empty() {
        return Duration::ZERO;
    }
    samples.iter().sum::<Duration>() / u32::try_from(samples.len()).unwrap_or(u32::MAX)
}

mod duration_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_millis().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let millis = u128::deserialize(deserializer)?;
        Ok(Duration::from_millis(u64::try_from(millis).unwrap_or(0)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::get_scenario;

    #[tokio::test]
    async fn passing_scenario_counts_every_iteration() {
        let catalog = Catalog::load_embedded().unwrap();
        let tester = LogicTester::new(&catalog, false);
        let scenario = get_scenario("pricing").unwrap();
        let result = tester.run_scenario(&scenario, 3).await;
        assert!(result.passed);
        assert_eq!(result.successful_iterations, 3);
        assert!(result.failures.is_empty());
    }

    #[tokio::test]
    async fn empty_catalog_reports_failures() {
        let catalog = Catalog::empty();
        let tester = LogicTester::new(&catalog, false);
        let scenario = get_scenario("pricing").unwrap();
        let result = tester.run_scenario(&scenario, 2).await;
        assert!(!result.passed);
        assert_eq!(result.successful_iterations, 0);
        assert_eq!(result.failures.len(), 2);
        assert!(result.failures[0].starts_with("Iteration 1:"));
    }

    #[test]
    fn average_of_nothing_is_zero() {
        assert_eq!(average(&[]), Duration::ZERO);
        assert_eq!(
            average(&[Duration::from_millis(10), Duration::from_millis(30)]),
            Duration::from_millis(20)
        );
    }

    #[test]
    fn durations_serialize_as_millis() {
        let result = ScenarioResult {
            scenario_name: "smoke".into(),
            passed: true,
            iterations_run: 1,
            successful_iterations: 1,
            failures: Vec::new(),
            average_duration: Duration::from_millis(42),
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["average_duration"], 42);
    }
}
