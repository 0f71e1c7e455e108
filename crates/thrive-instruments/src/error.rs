use thiserror::Error;

use crate::responses::MissingItem;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScoringError {
    #[error("unknown instrument: {0}")]
    UnknownInstrument(String),

    #[error("{instrument}: {} required item(s) unanswered", .missing.len())]
    IncompleteInput {
        instrument: String,
        missing: Vec<MissingItem>,
    },

    #[error("{instrument}: {part} item {item} value {value} is outside range [{min}, {max}]")]
    OutOfRange {
        instrument: String,
        part: String,
        item: usize,
        value: i32,
        min: i32,
        max: i32,
    },

    #[error("{instrument}: {part} item {item} cannot be marked not applicable")]
    NotApplicableNotAllowed {
        instrument: String,
        part: String,
        item: usize,
    },

    #[error("{instrument}: {part} expects {expected} responses, got {actual}")]
    WrongLength {
        instrument: String,
        part: String,
        expected: usize,
        actual: usize,
    },

    #[error("unknown form part '{part}' for instrument '{instrument}'")]
    UnknownPart { instrument: String, part: String },

    #[error("{instrument}: {part} has no item {item}")]
    UnknownItem {
        instrument: String,
        part: String,
        item: usize,
    },

    /// The static tables of an instrument are inconsistent. Never caused by
    /// user input.
    #[error("{instrument}: invalid instrument table: {reason}")]
    InvalidInstrument { instrument: String, reason: String },
}
