//! Exhaustive sweep over every answer combination

use crate::engine;
use crate::formatter::{self, ConfidenceTier};
use crate::types::{Answers, Database};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepSummary {
    pub combinations: usize,
    pub wins: BTreeMap<Database, usize>,
    /// Combinations where both scores are equal (all counted as ClickHouse wins)
    pub ties: usize,
    pub tiers: BTreeMap<ConfidenceTier, usize>,
    pub min_total: u32,
    pub max_total: u32,
    pub max_timescaledb: u32,
    pub max_clickhouse: u32,
}

impl SweepSummary {
    pub fn win_rate(&self, database: Database) -> f64 {
        if self.combinations == 0 {
            return 0.0;
        }
        self.wins.get(&database).copied().unwrap_or(0) as f64 / self.combinations as f64
    }
}

/// Score and format all 4^5 combinations
pub fn sweep() -> SweepSummary {
    let mut summary = SweepSummary {
        combinations: 0,
        wins: BTreeMap::new(),
        ties: 0,
        tiers: BTreeMap::new(),
        min_total: u32::MAX,
        max_total: 0,
        max_timescaledb: 0,
        max_clickhouse: 0,
    };

    for answers in Answers::all_combinations() {
        let scores = engine::score(&answers);
        let display = formatter::format(scores);

        summary.combinations += 1;
        *summary.wins.entry(display.winner).or_default() += 1;
        if scores.timescaledb_score == scores.clickhouse_score {
            summary.ties += 1;
        }
        if let Some(confidence) = display.confidence {
            *summary.tiers.entry(confidence.tier).or_default() += 1;
        }
        summary.min_total = summary.min_total.min(scores.total());
        summary.max_total = summary.max_total.max(scores.total());
        summary.max_timescaledb = summary.max_timescaledb.max(scores.timescaledb_score);
        summary.max_clickhouse = summary.max_clickhouse.max(scores.clickhouse_score);
    }

    tracing::debug!(
        combinations = summary.combinations,
        ties = summary.ties,
        "sweep complete"
    );
    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sweep_covers_everything() {
        let summary = sweep();
        assert_eq!(summary.combinations, 1024);
        let wins: usize = summary.wins.values().sum();
        assert_eq!(wins, 1024);
        let tiers: usize = summary.tiers.values().sum();
        assert_eq!(tiers, 1024, "every combination has a non-zero total");
    }

    #[test]
    fn test_sweep_bounds() {
        let summary = sweep();
        assert!(summary.min_total >= 1);
        assert_eq!(summary.max_timescaledb, 11);
        assert_eq!(summary.max_clickhouse, 12);
        assert!(summary.ties > 0, "the table admits genuine ties");
    }

    #[test]
    fn test_both_databases_can_win() {
        let summary = sweep();
        assert!(summary.win_rate(Database::TimescaleDb) > 0.0);
        assert!(summary.win_rate(Database::ClickHouse) > 0.0);
        let total = summary.win_rate(Database::TimescaleDb) + summary.win_rate(Database::ClickHouse);
        assert!((total - 1.0).abs() < 1e-9);
    }
}
