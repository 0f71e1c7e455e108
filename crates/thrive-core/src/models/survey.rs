use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::CoreError;

/// A scored survey as handed to report rendering or persistence. The
/// scoring engine itself never stores these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoredSurvey {
    pub id: Uuid,
    pub instrument_id: String,
    pub scored_at: jiff::Timestamp,
    pub result: serde_json::Value,
}

impl ScoredSurvey {
    pub fn new(instrument_id: &str, result: &impl Serialize) -> Result<Self, CoreError> {
        if instrument_id.is_empty() {
            return Err(CoreError::MissingField("instrument_id".to_string()));
        }
        Ok(Self {
            id: Uuid::new_v4(),
            instrument_id: instrument_id.to_string(),
            scored_at: jiff::Timestamp::now(),
            result: serde_json::to_value(result)?,
        })
    }
}
