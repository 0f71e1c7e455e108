use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::instruments::mbi::MbiScore;
use crate::instruments::rumination::RuminationScore;
use crate::instruments::vlq::ValuesScore;

/// The scored outcome of one submitted survey, tagged by instrument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "instrument", rename_all = "snake_case")]
#[ts(export)]
pub enum ScoreResult {
    #[serde(rename = "rrs")]
    Rumination(RuminationScore),
    Mbi(MbiScore),
    #[serde(rename = "vlq")]
    Values(ValuesScore),
}

impl ScoreResult {
    pub fn instrument_id(&self) -> &'static str {
        match self {
            ScoreResult::Rumination(_) => "rrs",
            ScoreResult::Mbi(_) => "mbi",
            ScoreResult::Values(_) => "vlq",
        }
    }
}
