//! Static advice shown with a recommendation
//!
//! These blocks depend only on the winning database, never on the scores.

use crate::types::Database;
use serde::{Deserialize, Serialize};

/// A bolded rationale headline with its explanation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RationalePoint {
    pub title: String,
    pub detail: String,
}

/// All fixed text for one database
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Advice {
    pub why_heading: String,
    pub rationale: Vec<RationalePoint>,
    pub best_for: Vec<String>,
    pub next_steps: Vec<String>,
}

const TIMESCALEDB_RATIONALE: &[(&str, &str)] = &[
    ("ACID Compliance", "Full ACID transactions for data consistency"),
    ("SQL Familiarity", "Standard PostgreSQL with time-series extensions"),
    ("Real-time Ingestion", "Excellent for high-frequency data insertion"),
    ("Mature Ecosystem", "Rich ecosystem of PostgreSQL tools and extensions"),
    ("Flexible Schema", "Supports both relational and time-series data models"),
];

const TIMESCALEDB_BEST_FOR: &[&str] = &[
    "IoT sensor data, financial tick data, monitoring metrics",
    "Applications requiring both transactional and analytical workloads",
    "Teams with PostgreSQL expertise",
];

const TIMESCALEDB_NEXT_STEPS: &[&str] = &[
    "Set up PostgreSQL with TimescaleDB extension",
    "Design your hypertables for time-series data",
    "Configure retention policies and compression",
];

const CLICKHOUSE_RATIONALE: &[(&str, &str)] = &[
    ("Columnar Storage", "Optimized for analytical queries"),
    ("High Compression", "Efficient storage for large datasets"),
    ("Massive Scale", "Handles petabytes of data efficiently"),
    ("Fast Analytics", "Sub-second response times for complex queries"),
    ("Distributed Architecture", "Built for horizontal scaling"),
];

const CLICKHOUSE_BEST_FOR: &[&str] = &[
    "Large-scale analytics, data warehousing, business intelligence",
    "High-volume data ingestion with batch processing",
    "Teams comfortable with distributed systems",
];

const CLICKHOUSE_NEXT_STEPS: &[&str] = &[
    "Set up ClickHouse cluster",
    "Design your table schemas with appropriate engines",
    "Configure data partitioning and replication",
];

/// Fixed advice for the given winner
pub fn advice_for(winner: Database) -> Advice {
    let (rationale, best_for, next_steps) = match winner {
        Database::TimescaleDb => (
            TIMESCALEDB_RATIONALE,
            TIMESCALEDB_BEST_FOR,
            TIMESCALEDB_NEXT_STEPS,
        ),
        Database::ClickHouse => (
            CLICKHOUSE_RATIONALE,
            CLICKHOUSE_BEST_FOR,
            CLICKHOUSE_NEXT_STEPS,
        ),
    };

    Advice {
        why_heading: format!("Why {}?", winner.name()),
        rationale: rationale
            .iter()
            .map(|(title, detail)| RationalePoint {
                title: title.to_string(),
                detail: detail.to_string(),
            })
            .collect(),
        best_for: best_for.iter().map(|s| s.to_string()).collect(),
        next_steps: next_steps.iter().map(|s| s.to_string()).collect(),
    }
}
