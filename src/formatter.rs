//! Presentation formatter
//!
//! Turns a `ScorePair` into everything a front end needs to show: the winner,
//! a gauge position on the TimescaleDB (0.0) to ClickHouse (1.0) scale, a
//! confidence tier and the fixed advice text.

use crate::advice::{advice_for, Advice};
use crate::types::{Database, Recommendation, ScorePair};
use serde::{Deserialize, Serialize};
use std::fmt;

/// How decisive the scores are
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ConfidenceTier {
    High,
    Moderate,
    Low,
}

impl ConfidenceTier {
    /// Tier for the leading score out of `total`: above 70% is High, above
    /// 60% is Moderate, anything else is Low. Evaluated on integers so that
    /// exactly 70% and 60% never drift across a boundary.
    pub fn from_scores(leading: u32, total: u32) -> Self {
        let leading = u64::from(leading) * 10;
        let total = u64::from(total);
        if leading > total * 7 {
            ConfidenceTier::High
        } else if leading > total * 6 {
            ConfidenceTier::Moderate
        } else {
            ConfidenceTier::Low
        }
    }

    pub fn banner(&self) -> &'static str {
        match self {
            ConfidenceTier::High => "High Confidence Recommendation",
            ConfidenceTier::Moderate => "Moderate Confidence - Both options viable",
            ConfidenceTier::Low => "Low Confidence - Consider evaluating both options",
        }
    }
}

impl fmt::Display for ConfidenceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ConfidenceTier::High => "High",
            ConfidenceTier::Moderate => "Moderate",
            ConfidenceTier::Low => "Low",
        };
        f.write_str(name)
    }
}

/// Share of the total score held by each side
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Gauge {
    pub timescaledb_fraction: f64,
    pub clickhouse_fraction: f64,
    /// 0.0 = pure TimescaleDB, 1.0 = pure ClickHouse
    pub marker_position: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Confidence {
    pub percent: f64,
    pub tier: ConfidenceTier,
}

/// Everything needed to render a result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayState {
    pub winner: Database,
    pub headline: String,
    pub recommendation: Recommendation,
    /// Absent when both scores are zero
    pub gauge: Option<Gauge>,
    /// Absent when both scores are zero
    pub confidence: Option<Confidence>,
    pub advice: Advice,
}

/// Derive the display state for a score pair
pub fn format(scores: ScorePair) -> DisplayState {
    let recommendation = scores.recommendation();
    let winner = recommendation.winner;
    let total = scores.total();

    let (gauge, confidence) = if total == 0 {
        (None, None)
    } else {
        let total_f = f64::from(total);
        let timescaledb_fraction = f64::from(scores.timescaledb_score) / total_f;
        let clickhouse_fraction = f64::from(scores.clickhouse_score) / total_f;
        let leading = scores.timescaledb_score.max(scores.clickhouse_score);

        (
            Some(Gauge {
                timescaledb_fraction,
                clickhouse_fraction,
                marker_position: clickhouse_fraction,
            }),
            Some(Confidence {
                percent: timescaledb_fraction.max(clickhouse_fraction) * 100.0,
                tier: ConfidenceTier::from_scores(leading, total),
            }),
        )
    };

    DisplayState {
        winner,
        headline: winner.headline().to_string(),
        recommendation,
        gauge,
        confidence,
        advice: advice_for(winner),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_pure_clickhouse() {
        let state = format(ScorePair::new(0, 12));
        assert_eq!(state.winner, Database::ClickHouse);
        assert_eq!(state.headline, "ClickHouse");
        let gauge = state.gauge.unwrap();
        assert!((gauge.marker_position - 1.0).abs() < EPS);
        let confidence = state.confidence.unwrap();
        assert!((confidence.percent - 100.0).abs() < EPS);
        assert_eq!(confidence.tier, ConfidenceTier::High);
    }

    #[test]
    fn test_pure_timescaledb() {
        let state = format(ScorePair::new(11, 0));
        assert_eq!(state.winner, Database::TimescaleDb);
        assert_eq!(state.headline, "PostgreSQL with TimescaleDB");
        assert!(state.gauge.unwrap().marker_position.abs() < EPS);
        assert_eq!(state.confidence.unwrap().tier, ConfidenceTier::High);
        assert_eq!(state.advice.why_heading, "Why TimescaleDB?");
    }

    #[test]
    fn test_zero_total_omits_gauge_and_confidence() {
        let state = format(ScorePair::new(0, 0));
        assert_eq!(state.winner, Database::ClickHouse);
        assert!(state.gauge.is_none());
        assert!(state.confidence.is_none());
        assert_eq!(state.advice.why_heading, "Why ClickHouse?");
    }

    #[test]
    fn test_marker_is_clickhouse_share() {
        for (t, c) in [(6, 2), (5, 5), (7, 3), (1, 12), (3, 4)] {
            let gauge = format(ScorePair::new(t, c)).gauge.unwrap();
            let expected = f64::from(c) / f64::from(t + c);
            assert!((gauge.marker_position - expected).abs() < EPS);
            assert!((gauge.timescaledb_fraction + gauge.clickhouse_fraction - 1.0).abs() < EPS);
        }
    }

    #[test]
    fn test_tier_boundaries_on_scores() {
        // 70% exactly is Moderate, 60% exactly is Low
        assert_eq!(format(ScorePair::new(7, 3)).confidence.unwrap().tier, ConfidenceTier::Moderate);
        assert_eq!(format(ScorePair::new(6, 4)).confidence.unwrap().tier, ConfidenceTier::Low);
        assert_eq!(format(ScorePair::new(6, 2)).confidence.unwrap().tier, ConfidenceTier::High);
        assert_eq!(format(ScorePair::new(2, 3)).confidence.unwrap().tier, ConfidenceTier::Low);
        assert_eq!(format(ScorePair::new(5, 5)).confidence.unwrap().tier, ConfidenceTier::Low);
        assert_eq!(format(ScorePair::new(4, 7)).confidence.unwrap().tier, ConfidenceTier::Moderate);
    }

    #[test]
    fn test_tier_from_scores_boundaries() {
        assert_eq!(ConfidenceTier::from_scores(70, 100), ConfidenceTier::Moderate);
        assert_eq!(ConfidenceTier::from_scores(7001, 10000), ConfidenceTier::High);
        assert_eq!(ConfidenceTier::from_scores(60, 100), ConfidenceTier::Low);
        assert_eq!(ConfidenceTier::from_scores(605, 1000), ConfidenceTier::Moderate);
        assert_eq!(ConfidenceTier::from_scores(50, 100), ConfidenceTier::Low);
    }

    #[test]
    fn test_tie_uses_clickhouse_advice() {
        let state = format(ScorePair::new(5, 5));
        assert_eq!(state.winner, Database::ClickHouse);
        assert_eq!(state.recommendation.winning_score, 5);
        assert_eq!(state.advice.next_steps[0], "Set up ClickHouse cluster");
    }
}
