//! The five-question form
//!
//! Questions are derived from the `Choice` enums so option lists can never
//! drift from what the engine scores.

use crate::types::{Choice, DataRetention, DataVolume, QueryPattern, RealtimeNeed, TeamExpertise};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies one of the five questions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionId {
    DataVolume,
    QueryPattern,
    RealtimeNeeds,
    DataRetention,
    TeamExpertise,
}

impl QuestionId {
    pub const ALL: [QuestionId; 5] = [
        QuestionId::DataVolume,
        QuestionId::QueryPattern,
        QuestionId::RealtimeNeeds,
        QuestionId::DataRetention,
        QuestionId::TeamExpertise,
    ];

    /// 1-based position in the questionnaire
    pub fn number(&self) -> usize {
        match self {
            QuestionId::DataVolume => 1,
            QuestionId::QueryPattern => 2,
            QuestionId::RealtimeNeeds => 3,
            QuestionId::DataRetention => 4,
            QuestionId::TeamExpertise => 5,
        }
    }

    pub fn heading(&self) -> &'static str {
        match self {
            QuestionId::DataVolume => "Data Volume",
            QuestionId::QueryPattern => "Query Patterns",
            QuestionId::RealtimeNeeds => "Real-time Requirements",
            QuestionId::DataRetention => "Data Retention",
            QuestionId::TeamExpertise => "Team Expertise",
        }
    }

    pub fn prompt(&self) -> &'static str {
        match self {
            QuestionId::DataVolume => "What is your expected daily data ingestion volume?",
            QuestionId::QueryPattern => "What type of queries do you primarily run?",
            QuestionId::RealtimeNeeds => "How important is real-time data processing?",
            QuestionId::DataRetention => "How long do you need to keep your data?",
            QuestionId::TeamExpertise => "What is your team's database expertise level?",
        }
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.heading())
    }
}

/// One selectable option
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionOption {
    pub key: String,
    pub label: String,
}

/// A question as shown to the user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub number: usize,
    pub heading: String,
    pub prompt: String,
    pub options: Vec<QuestionOption>,
}

impl Question {
    /// Build the question answered by choice type `C`
    pub fn of<C: Choice>() -> Self {
        let id = C::QUESTION;
        Self {
            id,
            number: id.number(),
            heading: id.heading().to_string(),
            prompt: id.prompt().to_string(),
            options: C::ALL
                .iter()
                .map(|c| QuestionOption {
                    key: c.key().to_string(),
                    label: c.label().to_string(),
                })
                .collect(),
        }
    }
}

/// All five questions in the order they are asked
pub fn questionnaire() -> Vec<Question> {
    vec![
        Question::of::<DataVolume>(),
        Question::of::<QueryPattern>(),
        Question::of::<RealtimeNeed>(),
        Question::of::<DataRetention>(),
        Question::of::<TeamExpertise>(),
    ]
}
