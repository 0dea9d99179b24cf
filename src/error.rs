//! Error type shared by the advisor library

use crate::questions::QuestionId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AdvisorError {
    /// Unrecognized answers are always rejected, never scored as zero
    #[error("unknown answer {value:?} for {question}; expected one of: {expected}")]
    UnknownAnswer {
        question: QuestionId,
        value: String,
        expected: String,
    },

    #[error("choice {index} is out of range for {question} ({count} options)")]
    ChoiceOutOfRange {
        question: QuestionId,
        index: usize,
        count: usize,
    },

    #[error("input closed before all questions were answered")]
    InputClosed,

    #[error("configuration error: {0}")]
    Config(String),

    #[error("unknown tool: {0}")]
    UnknownTool(String),

    #[error("invalid tool arguments: {0}")]
    ToolArguments(String),

    #[error("scenario error: {0}")]
    Scenario(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AdvisorError>;
