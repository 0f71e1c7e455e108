//! Draft answers for one survey and the state machine that gates scoring.
//!
//! `Unanswered → PartiallyAnswered → Complete → Scored`. Scoring runs only on
//! `submit`, against an immutable snapshot of the draft.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ScoringError;
use crate::responses::{MissingItem, Response, ResponseVector, Submission};
use crate::result::ScoreResult;
use crate::scoring::FormPart;
use crate::{get_instrument, Instrument};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SurveyState {
    Unanswered,
    PartiallyAnswered,
    Complete,
    Scored,
}

/// Completion state of a set of response vectors, one per form part.
/// A set with the wrong number of parts is never complete.
/// Never `Scored`; that state belongs to a [`SurveySession`].
pub fn completion(instrument: &dyn Instrument, responses: &[ResponseVector]) -> SurveyState {
    if !responses.iter().any(ResponseVector::has_any_answer) {
        SurveyState::Unanswered
    } else if responses.len() == instrument.parts().len()
        && instrument.missing_items(responses).is_empty()
    {
        SurveyState::Complete
    } else {
        SurveyState::PartiallyAnswered
    }
}

pub struct SurveySession {
    instrument: Box<dyn Instrument>,
    draft: Vec<Vec<Response>>,
    result: Option<ScoreResult>,
}

impl SurveySession {
    pub fn new(instrument: Box<dyn Instrument>) -> Self {
        let draft = instrument
            .parts()
            .iter()
            .map(|part| vec![Response::Unanswered; part.item_count()])
            .collect();
        Self {
            instrument,
            draft,
            result: None,
        }
    }

    pub fn for_instrument(id: &str) -> Result<Self, ScoringError> {
        get_instrument(id)
            .map(Self::new)
            .ok_or_else(|| ScoringError::UnknownInstrument(id.to_string()))
    }

    /// Resume a draft from its wire form.
    pub fn from_submission(
        instrument: Box<dyn Instrument>,
        submission: &Submission,
    ) -> Result<Self, ScoringError> {
        let draft = submission
            .decode(instrument.id(), instrument.parts())?
            .into_iter()
            .map(|vector| vector.as_slice().to_vec())
            .collect();
        Ok(Self {
            instrument,
            draft,
            result: None,
        })
    }

    pub fn instrument(&self) -> &dyn Instrument {
        self.instrument.as_ref()
    }

    /// Record an answer. Values outside the part's range are rejected here
    /// rather than at submission.
    pub fn answer(&mut self, part: &str, item: usize, value: i32) -> Result<(), ScoringError> {
        let (form_part, slot) = self.slot(part, item)?;
        if !form_part.range.contains(value) {
            return Err(ScoringError::OutOfRange {
                instrument: self.instrument.id().to_string(),
                part: part.to_string(),
                item,
                value,
                min: form_part.range.min,
                max: form_part.range.max,
            });
        }
        self.set(slot, Response::Answered(value));
        Ok(())
    }

    pub fn mark_not_applicable(&mut self, part: &str, item: usize) -> Result<(), ScoringError> {
        let (form_part, slot) = self.slot(part, item)?;
        if !form_part.allows_not_applicable(item) {
            return Err(ScoringError::NotApplicableNotAllowed {
                instrument: self.instrument.id().to_string(),
                part: part.to_string(),
                item,
            });
        }
        self.set(slot, Response::NotApplicable);
        Ok(())
    }

    pub fn clear(&mut self, part: &str, item: usize) -> Result<(), ScoringError> {
        let (_, slot) = self.slot(part, item)?;
        self.set(slot, Response::Unanswered);
        Ok(())
    }

    /// Immutable snapshot of the draft, one vector per form part.
    pub fn responses(&self) -> Vec<ResponseVector> {
        self.draft
            .iter()
            .map(|part| ResponseVector::new(part.clone()))
            .collect()
    }

    pub fn to_submission(&self) -> Submission {
        Submission(
            self.instrument
                .parts()
                .iter()
                .zip(self.responses())
                .map(|(part, vector)| (part.id.clone(), vector.to_wire()))
                .collect(),
        )
    }

    pub fn missing_items(&self) -> Vec<MissingItem> {
        self.instrument.missing_items(&self.responses())
    }

    pub fn state(&self) -> SurveyState {
        if self.result.is_some() {
            return SurveyState::Scored;
        }
        completion(self.instrument.as_ref(), &self.responses())
    }

    /// Score the draft. Fails with `IncompleteInput` until every required
    /// slot is answered.
    pub fn submit(&mut self) -> Result<&ScoreResult, ScoringError> {
        let responses = self.responses();
        let missing = self.instrument.missing_items(&responses);
        if !missing.is_empty() {
            return Err(ScoringError::IncompleteInput {
                instrument: self.instrument.id().to_string(),
                missing,
            });
        }
        let result = self.instrument.score(&responses)?;
        Ok(&*self.result.insert(result))
    }

    pub fn result(&self) -> Option<&ScoreResult> {
        self.result.as_ref()
    }

    fn slot(&self, part: &str, item: usize) -> Result<(&FormPart, (usize, usize)), ScoringError> {
        let (part_idx, form_part) = self
            .instrument
            .parts()
            .iter()
            .enumerate()
            .find(|(_, p)| p.id == part)
            .ok_or_else(|| ScoringError::UnknownPart {
                instrument: self.instrument.id().to_string(),
                part: part.to_string(),
            })?;
        if item == 0 || item > form_part.item_count() {
            return Err(ScoringError::UnknownItem {
                instrument: self.instrument.id().to_string(),
                part: part.to_string(),
                item,
            });
        }
        Ok((form_part, (part_idx, item - 1)))
    }

    fn set(&mut self, (part_idx, idx): (usize, usize), response: Response) {
        self.draft[part_idx][idx] = response;
        self.result = None;
    }
}
