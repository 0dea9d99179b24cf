//! Scenario Benchmark
//!
//! Check the advisor against answer sets with known expected results.
//! Scenario files are JSON arrays of `ScenarioCase`.

use crate::engine;
use crate::error::AdvisorError;
use crate::formatter::{self, ConfidenceTier};
use crate::types::{Answers, Database, ScorePair};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A single scenario with ground truth
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioCase {
    pub id: String,

    #[serde(default)]
    pub description: String,

    pub answers: Answers,

    pub expected_winner: Database,

    /// Exact scores, when the scenario pins them
    #[serde(default)]
    pub expected_scores: Option<ScorePair>,

    #[serde(default)]
    pub expected_tier: Option<ConfidenceTier>,
}

/// Why one scenario failed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioFailure {
    pub scenario_id: String,
    pub reasons: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioResults {
    pub total: usize,
    pub passed: usize,
    pub failures: Vec<ScenarioFailure>,
}

impl ScenarioResults {
    pub fn all_passed(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Load scenarios from a JSON file
pub fn load_scenarios(path: &Path) -> Result<Vec<ScenarioCase>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read scenarios from {:?}", path))?;
    let scenarios: Vec<ScenarioCase> = serde_json::from_str(&content)
        .map_err(|e| AdvisorError::Scenario(format!("{:?}: {}", path, e)))?;
    Ok(scenarios)
}

/// Load every `*.json` scenario file in a directory, in path order
pub fn load_all_scenarios(dir: &Path) -> Result<Vec<ScenarioCase>> {
    let pattern = dir.join("*.json");
    let pattern = pattern
        .to_str()
        .with_context(|| format!("Non UTF-8 scenario directory {:?}", dir))?;

    let mut paths: Vec<_> = glob::glob(pattern)
        .with_context(|| format!("Bad scenario pattern {pattern}"))?
        .collect::<std::result::Result<_, _>>()
        .map_err(|e| AdvisorError::Scenario(e.to_string()))?;
    paths.sort();

    let mut all_scenarios = Vec::new();
    for path in paths {
        let scenarios = load_scenarios(&path)?;
        tracing::debug!(?path, count = scenarios.len(), "loaded scenarios");
        all_scenarios.extend(scenarios);
    }

    Ok(all_scenarios)
}

fn check_scenario(scenario: &ScenarioCase) -> Vec<String> {
    let scores = engine::score(&scenario.answers);
    let display = formatter::format(scores);
    let mut reasons = Vec::new();

    if display.winner != scenario.expected_winner {
        reasons.push(format!(
            "expected winner {}, got {}",
            scenario.expected_winner, display.winner
        ));
    }

    if let Some(expected) = scenario.expected_scores {
        if expected != scores {
            reasons.push(format!(
                "expected scores {}/{}, got {}/{}",
                expected.timescaledb_score,
                expected.clickhouse_score,
                scores.timescaledb_score,
                scores.clickhouse_score
            ));
        }
    }

    if let Some(expected) = scenario.expected_tier {
        match display.confidence {
            Some(confidence) if confidence.tier == expected => {}
            Some(confidence) => reasons.push(format!(
                "expected {expected} confidence, got {}",
                confidence.tier
            )),
            None => reasons.push(format!("expected {expected} confidence, got none")),
        }
    }

    reasons
}

/// Run every scenario and collect failures
pub fn run_scenarios(scenarios: &[ScenarioCase]) -> ScenarioResults {
    let failures: Vec<ScenarioFailure> = scenarios
        .iter()
        .filter_map(|scenario| {
            let reasons = check_scenario(scenario);
            (!reasons.is_empty()).then(|| ScenarioFailure {
                scenario_id: scenario.id.clone(),
                reasons,
            })
        })
        .collect();

    ScenarioResults {
        total: scenarios.len(),
        passed: scenarios.len() - failures.len(),
        failures,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const SCENARIOS: &str = r#"[
        {
            "id": "batch-warehouse",
            "answers": {
                "data_volume": "over_100gb",
                "query_pattern": "olap",
                "realtime_needs": "low",
                "data_retention": "over_7y",
                "team_expertise": "distributed_systems"
            },
            "expected_winner": "ClickHouse",
            "expected_scores": { "timescaledb_score": 0, "clickhouse_score": 12 },
            "expected_tier": "High"
        },
        {
            "id": "wrong-on-purpose",
            "answers": {
                "data_volume": "under_1gb",
                "query_pattern": "oltp",
                "realtime_needs": "critical",
                "data_retention": "under_1y",
                "team_expertise": "postgres_experts"
            },
            "expected_winner": "ClickHouse",
            "expected_tier": "Low"
        }
    ]"#;

    #[test]
    fn test_run_scenarios_reports_failures() {
        let scenarios: Vec<ScenarioCase> = serde_json::from_str(SCENARIOS).unwrap();
        let results = run_scenarios(&scenarios);

        assert_eq!(results.total, 2);
        assert_eq!(results.passed, 1);
        assert!(!results.all_passed());
        let failure = &results.failures[0];
        assert_eq!(failure.scenario_id, "wrong-on-purpose");
        assert_eq!(failure.reasons.len(), 2);
        assert!(failure.reasons[0].contains("expected winner ClickHouse, got TimescaleDB"));
    }

    #[test]
    fn test_load_all_scenarios_from_directory() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("a.json"), SCENARIOS).unwrap();
        std::fs::write(dir.path().join("b.json"), "[]").unwrap();
        std::fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let scenarios = load_all_scenarios(dir.path()).unwrap();
        assert_eq!(scenarios.len(), 2);
        assert_eq!(scenarios[0].id, "batch-warehouse");
    }

    #[test]
    fn test_bundled_scenarios_pass() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("scenarios");
        let scenarios = load_all_scenarios(&dir).unwrap();
        assert!(!scenarios.is_empty());
        let results = run_scenarios(&scenarios);
        assert!(results.all_passed(), "failures: {:?}", results.failures);
    }

    #[test]
    fn test_invalid_answer_in_file_is_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(
            &path,
            r#"[{"id": "x", "answers": {"data_volume": "huge", "query_pattern": "olap",
                "realtime_needs": "low", "data_retention": "over_7y",
                "team_expertise": "general_sql"}, "expected_winner": "ClickHouse"}]"#,
        )
        .unwrap();

        let err = load_scenarios(&path).unwrap_err();
        match err.downcast_ref::<AdvisorError>() {
            Some(AdvisorError::Scenario(msg)) => {
                assert!(msg.contains("huge"), "{msg}");
                assert!(msg.contains("bad.json"), "{msg}");
            }
            other => panic!("expected a scenario error, got {other:?}"),
        }
    }

    #[test]
    fn test_malformed_file_in_directory_names_the_file() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("a.json"), SCENARIOS).unwrap();
        std::fs::write(dir.path().join("b.json"), "{ not json").unwrap();

        let err = load_all_scenarios(dir.path()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<AdvisorError>(),
            Some(AdvisorError::Scenario(msg)) if msg.contains("b.json")
        ));
    }

    #[test]
    fn test_missing_file_is_an_io_failure_not_a_scenario_error() {
        let dir = tempdir().unwrap();
        let err = load_scenarios(&dir.path().join("absent.json")).unwrap_err();
        assert!(err.downcast_ref::<AdvisorError>().is_none());
        assert!(err.to_string().contains("Failed to read scenarios"));
    }
}
