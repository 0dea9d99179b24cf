//! Machine-readable recommendation report
//!
//! Each report carries:
//! - a fresh report id and timestamp
//! - the answers, scores and per-question breakdown
//! - the full display state
//! - a SHA-256 content hash over answers + scores
//!
//! The hash depends only on the answers, so two reports for the same
//! answers can be matched up even though their ids differ.

use crate::engine::{self, Contribution};
use crate::error::Result;
use crate::formatter::{self, DisplayState};
use crate::types::{Answers, ScorePair};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdvisorReport {
    pub report_id: String,
    pub created_at: DateTime<Utc>,
    pub answers: Answers,
    pub scores: ScorePair,
    pub breakdown: Vec<Contribution>,
    pub display: DisplayState,
    pub content_hash: String,
}

#[derive(Serialize)]
struct HashedContent<'a> {
    answers: &'a Answers,
    scores: &'a ScorePair,
}

impl AdvisorReport {
    /// Score the answers and build a report
    pub fn new(answers: Answers) -> Result<Self> {
        let scores = engine::score(&answers);
        Self::from_parts(answers, scores, formatter::format(scores))
    }

    /// Build a report from an already computed result
    pub fn from_parts(answers: Answers, scores: ScorePair, display: DisplayState) -> Result<Self> {
        let content_hash = content_hash(&answers, &scores)?;
        Ok(Self {
            report_id: Uuid::new_v4().to_string(),
            created_at: Utc::now(),
            breakdown: engine::breakdown(&answers),
            answers,
            scores,
            display,
            content_hash,
        })
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Hex SHA-256 of the canonical JSON encoding of answers and scores
pub fn content_hash(answers: &Answers, scores: &ScorePair) -> Result<String> {
    let canonical = serde_json::to_vec(&HashedContent { answers, scores })?;
    let mut hasher = Sha256::new();
    hasher.update(&canonical);
    Ok(hex::encode(hasher.finalize()))
}
