//! tsdb-advisor - TimescaleDB or ClickHouse?
//!
//! Five multiple-choice answers about a time-series workload are scored with
//! a fixed weight table and turned into a recommendation, a confidence tier
//! and a gauge on the TimescaleDB to ClickHouse scale.
//!
//! # Quick Start
//!
//! ```rust
//! use tsdb_advisor::{engine, formatter, types::*};
//!
//! let scores = engine::recommend(
//!     DataVolume::OverHundredGb,
//!     QueryPattern::Olap,
//!     RealtimeNeed::Low,
//!     DataRetention::OverSevenYears,
//!     TeamExpertise::DistributedSystems,
//! );
//! let state = formatter::format(scores);
//! assert_eq!(state.winner, Database::ClickHouse);
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────┐
//! │  Presenter (terminal, tools) │  asks questions, renders results
//! └──────────────┬───────────────┘
//!                │ Answers
//!                ▼
//! ┌──────────────────────────────┐
//! │  engine::recommend           │  weight table → ScorePair
//! └──────────────┬───────────────┘
//!                ▼
//! ┌──────────────────────────────┐
//! │  formatter::format           │  ScorePair → DisplayState
//! └──────────────────────────────┘
//! ```

pub mod advice;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod formatter;
pub mod mcp;
pub mod presenter;
pub mod questions;
pub mod render;
pub mod report;
pub mod types;

// Core
pub use engine::{breakdown, recommend, recommend_labels, score, Contribution, Weight, WEIGHTS};
pub use error::{AdvisorError, Result};
pub use formatter::{format, Confidence, ConfidenceTier, DisplayState, Gauge};
pub use types::*;

// Front ends
pub use config::{AdvisorConfig, OutputFormat};
pub use presenter::{run_questionnaire, Outcome, Presenter, TerminalPresenter};
pub use questions::{questionnaire, Question, QuestionId};
pub use render::{render_breakdown, render_text, RenderOptions};
pub use report::AdvisorReport;

// Tool surface
pub use mcp::{get_tools, handle_tool_call};
