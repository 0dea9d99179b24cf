//! Recommendation engine
//!
//! A fixed weight table maps every option of every question to points for
//! TimescaleDB and ClickHouse. Scoring is the sum of the five rows picked by
//! the answers. Weights are deliberately not configurable.

use crate::error::Result;
use crate::questions::QuestionId;
use crate::types::*;
use serde::{Deserialize, Serialize};

/// Points one option adds to each database
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weight {
    pub timescaledb: u32,
    pub clickhouse: u32,
}

const fn w(timescaledb: u32, clickhouse: u32) -> Weight {
    Weight {
        timescaledb,
        clickhouse,
    }
}

/// Weight rows indexed by `Choice::index`
#[derive(Debug, Clone, Copy)]
pub struct WeightTable {
    pub data_volume: [Weight; 4],
    pub query_pattern: [Weight; 4],
    pub realtime_needs: [Weight; 4],
    pub data_retention: [Weight; 4],
    pub team_expertise: [Weight; 4],
}

pub const WEIGHTS: WeightTable = WeightTable {
    // < 1 GB, 1-10 GB, 10-100 GB, > 100 GB
    data_volume: [w(2, 0), w(1, 1), w(0, 2), w(0, 3)],
    // OLTP, OLAP, Mixed, Time-series analytics
    query_pattern: [w(3, 0), w(0, 3), w(2, 0), w(1, 2)],
    // Critical, Important, Moderate, Low
    realtime_needs: [w(2, 0), w(1, 1), w(0, 1), w(0, 2)],
    // < 1 year, 1-3 years, 3-7 years, > 7 years
    data_retention: [w(1, 0), w(1, 0), w(0, 2), w(0, 2)],
    // PostgreSQL experts, General SQL, Limited, Distributed systems
    team_expertise: [w(3, 0), w(1, 0), w(2, 0), w(0, 2)],
};

impl WeightTable {
    fn row<C: Choice>(rows: &[Weight; 4], choice: C) -> Weight {
        // Every Choice enum has exactly four options, so index() < 4
        rows[choice.index()]
    }

    pub fn data_volume(&self, value: DataVolume) -> Weight {
        Self::row(&self.data_volume, value)
    }

    pub fn query_pattern(&self, value: QueryPattern) -> Weight {
        Self::row(&self.query_pattern, value)
    }

    pub fn realtime_needs(&self, value: RealtimeNeed) -> Weight {
        Self::row(&self.realtime_needs, value)
    }

    pub fn data_retention(&self, value: DataRetention) -> Weight {
        Self::row(&self.data_retention, value)
    }

    pub fn team_expertise(&self, value: TeamExpertise) -> Weight {
        Self::row(&self.team_expertise, value)
    }
}

/// What a single answer contributed to the final scores
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contribution {
    pub question: QuestionId,
    pub answer: String,
    pub weight: Weight,
}

/// Per-question contributions in questionnaire order
pub fn breakdown(answers: &Answers) -> Vec<Contribution> {
    let contribution = |question, answer: &'static str, weight| Contribution {
        question,
        answer: answer.to_string(),
        weight,
    };

    vec![
        contribution(
            QuestionId::DataVolume,
            answers.data_volume.label(),
            WEIGHTS.data_volume(answers.data_volume),
        ),
        contribution(
            QuestionId::QueryPattern,
            answers.query_pattern.label(),
            WEIGHTS.query_pattern(answers.query_pattern),
        ),
        contribution(
            QuestionId::RealtimeNeeds,
            answers.realtime_needs.label(),
            WEIGHTS.realtime_needs(answers.realtime_needs),
        ),
        contribution(
            QuestionId::DataRetention,
            answers.data_retention.label(),
            WEIGHTS.data_retention(answers.data_retention),
        ),
        contribution(
            QuestionId::TeamExpertise,
            answers.team_expertise.label(),
            WEIGHTS.team_expertise(answers.team_expertise),
        ),
    ]
}

/// Score five typed answers
pub fn recommend(
    data_volume: DataVolume,
    query_pattern: QueryPattern,
    realtime_needs: RealtimeNeed,
    data_retention: DataRetention,
    team_expertise: TeamExpertise,
) -> ScorePair {
    score(&Answers::new(
        data_volume,
        query_pattern,
        realtime_needs,
        data_retention,
        team_expertise,
    ))
}

/// Score a bundled answer set
pub fn score(answers: &Answers) -> ScorePair {
    let scores = breakdown(answers)
        .iter()
        .fold(ScorePair::default(), |acc, c| {
            ScorePair::new(
                acc.timescaledb_score + c.weight.timescaledb,
                acc.clickhouse_score + c.weight.clickhouse,
            )
        });

    tracing::debug!(
        timescaledb = scores.timescaledb_score,
        clickhouse = scores.clickhouse_score,
        "scored answers"
    );
    scores
}

/// Score raw answer strings (labels or keys). Unknown values are rejected.
pub fn recommend_labels(
    data_volume: &str,
    query_pattern: &str,
    realtime_needs: &str,
    data_retention: &str,
    team_expertise: &str,
) -> Result<ScorePair> {
    let answers = Answers::from_labels(
        data_volume,
        query_pattern,
        realtime_needs,
        data_retention,
        team_expertise,
    )?;
    Ok(score(&answers))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AdvisorError;

    /// Straight transcription of the scoring rules as a chain of conditions,
    /// used to cross-check the table on every combination.
    fn reference_score(a: &Answers) -> (u32, u32) {
        let (mut t, mut c) = (0, 0);
        match a.data_volume {
            DataVolume::UnderOneGb => t += 2,
            DataVolume::OneToTenGb => {
                t += 1;
                c += 1
            }
            DataVolume::TenToHundredGb => c += 2,
            DataVolume::OverHundredGb => c += 3,
        }
        match a.query_pattern {
            QueryPattern::Oltp => t += 3,
            QueryPattern::Olap => c += 3,
            QueryPattern::Mixed => t += 2,
            QueryPattern::TimeSeriesAnalytics => {
                t += 1;
                c += 2
            }
        }
        match a.realtime_needs {
            RealtimeNeed::Critical => t += 2,
            RealtimeNeed::Important => {
                t += 1;
                c += 1
            }
            RealtimeNeed::Moderate => c += 1,
            RealtimeNeed::Low => c += 2,
        }
        match a.data_retention {
            DataRetention::UnderOneYear | DataRetention::OneToThreeYears => t += 1,
            DataRetention::ThreeToSevenYears | DataRetention::OverSevenYears => c += 2,
        }
        match a.team_expertise {
            TeamExpertise::PostgresExperts => t += 3,
            TeamExpertise::GeneralSql => t += 1,
            TeamExpertise::LimitedExperience => t += 2,
            TeamExpertise::DistributedSystems => c += 2,
        }
        (t, c)
    }

    #[test]
    fn test_table_matches_rules_for_all_combinations() {
        for answers in Answers::all_combinations() {
            let scores = score(&answers);
            let (t, c) = reference_score(&answers);
            assert_eq!(
                (scores.timescaledb_score, scores.clickhouse_score),
                (t, c),
                "mismatch for {answers:?}"
            );
        }
    }

    #[test]
    fn test_no_combination_scores_zero() {
        assert!(Answers::all_combinations().all(|a| score(&a).total() >= 1));
    }

    #[test]
    fn test_deterministic() {
        for answers in Answers::all_combinations().step_by(37) {
            assert_eq!(score(&answers), score(&answers));
        }
    }

    #[test]
    fn test_scenario_all_clickhouse() {
        let scores = recommend_labels(
            "> 100 GB/day",
            "OLAP - Complex analytical queries",
            "Low - Batch processing is fine",
            "> 7 years",
            "Experienced with distributed systems",
        )
        .unwrap();
        assert_eq!(scores, ScorePair::new(0, 12));
        assert_eq!(scores.winner(), Database::ClickHouse);
    }

    #[test]
    fn test_scenario_all_timescaledb() {
        let scores = recommend(
            DataVolume::UnderOneGb,
            QueryPattern::Oltp,
            RealtimeNeed::Critical,
            DataRetention::UnderOneYear,
            TeamExpertise::PostgresExperts,
        );
        assert_eq!(scores, ScorePair::new(11, 0));
        assert_eq!(scores.winner(), Database::TimescaleDb);
    }

    #[test]
    fn test_mixed_general_sql_is_not_a_tie() {
        let scores = recommend_labels(
            "1-10 GB/day",
            "Mixed - Both transactional and analytical",
            "Important - Need near real-time (seconds)",
            "1-3 years",
            "General SQL knowledge",
        )
        .unwrap();
        assert_eq!(scores, ScorePair::new(6, 2));
        assert_eq!(scores.winner(), Database::TimescaleDb);
    }

    #[test]
    fn test_genuine_tie_resolves_to_clickhouse() {
        let scores = recommend(
            DataVolume::OneToTenGb,
            QueryPattern::Oltp,
            RealtimeNeed::Low,
            DataRetention::OverSevenYears,
            TeamExpertise::GeneralSql,
        );
        assert_eq!(scores, ScorePair::new(5, 5));
        assert_eq!(scores.winner(), Database::ClickHouse);
    }

    #[test]
    fn test_unknown_answer_is_rejected() {
        let err = recommend_labels(
            "1-10 GB/day",
            "OLTP",
            "Important",
            "Forever",
            "General SQL knowledge",
        )
        .unwrap_err();
        assert!(matches!(
            err,
            AdvisorError::UnknownAnswer { question: QuestionId::DataRetention, .. }
        ));
    }

    #[test]
    fn test_breakdown_sums_to_scores() {
        for answers in Answers::all_combinations().step_by(11) {
            let parts = breakdown(&answers);
            assert_eq!(parts.len(), 5);
            let t: u32 = parts.iter().map(|c| c.weight.timescaledb).sum();
            let c: u32 = parts.iter().map(|c| c.weight.clickhouse).sum();
            assert_eq!(ScorePair::new(t, c), score(&answers));
        }
    }
}
