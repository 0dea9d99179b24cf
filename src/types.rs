//! Core types for the TimescaleDB / ClickHouse advisor
//!
//! Every answer is a closed enumeration. Labels are the exact strings the
//! questionnaire shows; keys are stable snake_case identifiers used by serde,
//! CLI flags and tool arguments.

use crate::error::{AdvisorError, Result};
use crate::questions::QuestionId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A closed, ordered set of options answering one question
pub trait Choice: Copy + Eq + fmt::Debug + 'static {
    const QUESTION: QuestionId;
    /// Options in questionnaire order
    const ALL: &'static [Self];

    fn key(&self) -> &'static str;
    fn label(&self) -> &'static str;
    /// Zero-based position in `ALL`
    fn index(&self) -> usize;

    fn from_index(index: usize) -> Result<Self> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(AdvisorError::ChoiceOutOfRange {
                question: Self::QUESTION,
                index,
                count: Self::ALL.len(),
            })
    }

    /// Parse a label or a key, see `option_matches`
    fn parse(value: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| option_matches(c.key(), c.label(), value))
            .ok_or_else(|| AdvisorError::UnknownAnswer {
                question: Self::QUESTION,
                value: value.to_string(),
                expected: Self::ALL
                    .iter()
                    .map(|c| c.key())
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }
}

/// Whether a typed reply selects the option with this key and label.
/// Labels compare case-insensitively; keys also treat `-` and `_` alike,
/// so `1-10gb` and `1_10GB` both select `1_10gb`.
pub fn option_matches(key: &str, label: &str, reply: &str) -> bool {
    let reply = reply.trim();
    label.eq_ignore_ascii_case(reply) || key == reply.to_ascii_lowercase().replace('-', "_")
}

macro_rules! choice_enum {
    (
        $(#[$meta:meta])*
        $name:ident for $question:expr => {
            $( $(#[$vmeta:meta])* $variant:ident = ($key:literal, $label:literal) ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $( $(#[$vmeta])* #[serde(rename = $key)] $variant ),+
        }

        impl Choice for $name {
            const QUESTION: QuestionId = $question;
            const ALL: &'static [Self] = &[ $( Self::$variant ),+ ];

            fn key(&self) -> &'static str {
                match self { $( Self::$variant => $key ),+ }
            }

            fn label(&self) -> &'static str {
                match self { $( Self::$variant => $label ),+ }
            }

            fn index(&self) -> usize {
                *self as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl std::str::FromStr for $name {
            type Err = AdvisorError;

            fn from_str(s: &str) -> Result<Self> {
                <Self as Choice>::parse(s)
            }
        }
    };
}

choice_enum! {
    /// Expected daily ingestion volume
    DataVolume for QuestionId::DataVolume => {
        UnderOneGb = ("under_1gb", "< 1 GB/day"),
        OneToTenGb = ("1_10gb", "1-10 GB/day"),
        TenToHundredGb = ("10_100gb", "10-100 GB/day"),
        OverHundredGb = ("over_100gb", "> 100 GB/day"),
    }
}

choice_enum! {
    /// Dominant query workload
    QueryPattern for QuestionId::QueryPattern => {
        Oltp = ("oltp", "OLTP - Many small, fast transactions"),
        Olap = ("olap", "OLAP - Complex analytical queries"),
        Mixed = ("mixed", "Mixed - Both transactional and analytical"),
        TimeSeriesAnalytics = ("time_series_analytics", "Time-series analytics"),
    }
}

choice_enum! {
    /// How fresh query results must be
    RealtimeNeed for QuestionId::RealtimeNeeds => {
        Critical = ("critical", "Critical - Need sub-second latency"),
        Important = ("important", "Important - Need near real-time (seconds)"),
        Moderate = ("moderate", "Moderate - Minutes delay acceptable"),
        Low = ("low", "Low - Batch processing is fine"),
    }
}

choice_enum! {
    /// How long data must be kept
    DataRetention for QuestionId::DataRetention => {
        UnderOneYear = ("under_1y", "< 1 year"),
        OneToThreeYears = ("1_3y", "1-3 years"),
        ThreeToSevenYears = ("3_7y", "3-7 years"),
        OverSevenYears = ("over_7y", "> 7 years"),
    }
}

choice_enum! {
    /// The team's database background
    TeamExpertise for QuestionId::TeamExpertise => {
        PostgresExperts = ("postgres_experts", "SQL experts with PostgreSQL experience"),
        GeneralSql = ("general_sql", "General SQL knowledge"),
        LimitedExperience = ("limited_experience", "Limited database experience"),
        DistributedSystems = ("distributed_systems", "Experienced with distributed systems"),
    }
}

/// One answer per question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Answers {
    pub data_volume: DataVolume,
    pub query_pattern: QueryPattern,
    pub realtime_needs: RealtimeNeed,
    pub data_retention: DataRetention,
    pub team_expertise: TeamExpertise,
}

impl Answers {
    pub fn new(
        data_volume: DataVolume,
        query_pattern: QueryPattern,
        realtime_needs: RealtimeNeed,
        data_retention: DataRetention,
        team_expertise: TeamExpertise,
    ) -> Self {
        Self {
            data_volume,
            query_pattern,
            realtime_needs,
            data_retention,
            team_expertise,
        }
    }

    /// Parse five raw answers, rejecting any unrecognized value
    pub fn from_labels(
        data_volume: &str,
        query_pattern: &str,
        realtime_needs: &str,
        data_retention: &str,
        team_expertise: &str,
    ) -> Result<Self> {
        Ok(Self {
            data_volume: data_volume.parse()?,
            query_pattern: query_pattern.parse()?,
            realtime_needs: realtime_needs.parse()?,
            data_retention: data_retention.parse()?,
            team_expertise: team_expertise.parse()?,
        })
    }

    /// Build answers from zero-based option indices in questionnaire order
    pub fn from_indices(indices: [usize; 5]) -> Result<Self> {
        let [volume, query, realtime, retention, expertise] = indices;
        Ok(Self {
            data_volume: DataVolume::from_index(volume)?,
            query_pattern: QueryPattern::from_index(query)?,
            realtime_needs: RealtimeNeed::from_index(realtime)?,
            data_retention: DataRetention::from_index(retention)?,
            team_expertise: TeamExpertise::from_index(expertise)?,
        })
    }

    /// Every possible answer set (4^5 = 1024 combinations)
    pub fn all_combinations() -> impl Iterator<Item = Answers> {
        DataVolume::ALL.iter().flat_map(|&volume| {
            QueryPattern::ALL.iter().flat_map(move |&query| {
                RealtimeNeed::ALL.iter().flat_map(move |&realtime| {
                    DataRetention::ALL.iter().flat_map(move |&retention| {
                        TeamExpertise::ALL.iter().map(move |&expertise| {
                            Answers::new(volume, query, realtime, retention, expertise)
                        })
                    })
                })
            })
        })
    }
}

/// Accumulated points per database
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScorePair {
    pub timescaledb_score: u32,
    pub clickhouse_score: u32,
}

impl ScorePair {
    pub fn new(timescaledb_score: u32, clickhouse_score: u32) -> Self {
        Self {
            timescaledb_score,
            clickhouse_score,
        }
    }

    pub fn total(&self) -> u32 {
        self.timescaledb_score + self.clickhouse_score
    }

    /// TimescaleDB only wins with a strictly higher score; ties go to ClickHouse
    pub fn winner(&self) -> Database {
        if self.timescaledb_score > self.clickhouse_score {
            Database::TimescaleDb
        } else {
            Database::ClickHouse
        }
    }

    pub fn recommendation(&self) -> Recommendation {
        let winner = self.winner();
        let (winning_score, losing_score) = match winner {
            Database::TimescaleDb => (self.timescaledb_score, self.clickhouse_score),
            Database::ClickHouse => (self.clickhouse_score, self.timescaledb_score),
        };
        Recommendation {
            winner,
            winning_score,
            losing_score,
        }
    }
}

/// The two candidate databases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Database {
    #[serde(rename = "TimescaleDB")]
    TimescaleDb,
    #[serde(rename = "ClickHouse")]
    ClickHouse,
}

impl Database {
    pub fn name(&self) -> &'static str {
        match self {
            Database::TimescaleDb => "TimescaleDB",
            Database::ClickHouse => "ClickHouse",
        }
    }

    /// Name used in the recommendation banner
    pub fn headline(&self) -> &'static str {
        match self {
            Database::TimescaleDb => "PostgreSQL with TimescaleDB",
            Database::ClickHouse => "ClickHouse",
        }
    }
}

impl fmt::Display for Database {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Winner plus the scores on either side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub winner: Database,
    pub winning_score: u32,
    pub losing_score: u32,
}
