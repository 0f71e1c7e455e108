use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ScoringError;
use crate::scoring::FormPart;

/// The answer held in one slot of a form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Response {
    Answered(i32),
    NotApplicable,
    #[default]
    Unanswered,
}

impl Response {
    /// Decode a wire value. `null` is unanswered; `0` means not applicable
    /// only where the item allows it and is a plain answer elsewhere.
    pub fn from_wire(raw: Option<i32>, not_applicable_allowed: bool) -> Self {
        match raw {
            None => Response::Unanswered,
            Some(0) if not_applicable_allowed => Response::NotApplicable,
            Some(value) => Response::Answered(value),
        }
    }

    pub fn to_wire(self) -> Option<i32> {
        match self {
            Response::Answered(value) => Some(value),
            Response::NotApplicable => Some(0),
            Response::Unanswered => None,
        }
    }

    pub fn value(self) -> Option<i32> {
        match self {
            Response::Answered(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_unanswered(self) -> bool {
        self == Response::Unanswered
    }
}

/// An immutable, ordered sequence of responses for one form part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseVector(Vec<Response>);

impl ResponseVector {
    pub fn new(responses: Vec<Response>) -> Self {
        Self(responses)
    }

    /// A fully answered vector.
    pub fn answered(values: impl IntoIterator<Item = i32>) -> Self {
        Self(values.into_iter().map(Response::Answered).collect())
    }

    pub fn unanswered(len: usize) -> Self {
        Self(vec![Response::Unanswered; len])
    }

    pub fn from_wire(raw: &[Option<i32>], part: &FormPart) -> Self {
        Self(
            raw.iter()
                .enumerate()
                .map(|(idx, &value)| Response::from_wire(value, part.allows_not_applicable(idx + 1)))
                .collect(),
        )
    }

    pub fn to_wire(&self) -> Vec<Option<i32>> {
        self.0.iter().map(|r| r.to_wire()).collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Response for a 1-based item number.
    pub fn get(&self, item: usize) -> Option<Response> {
        item.checked_sub(1).and_then(|idx| self.0.get(idx)).copied()
    }

    pub fn as_slice(&self) -> &[Response] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = Response> + '_ {
        self.0.iter().copied()
    }

    /// 1-based numbers of the unanswered items.
    pub fn unanswered_items(&self) -> Vec<usize> {
        self.iter()
            .enumerate()
            .filter(|(_, r)| r.is_unanswered())
            .map(|(idx, _)| idx + 1)
            .collect()
    }

    pub fn has_any_answer(&self) -> bool {
        self.iter().any(|r| !r.is_unanswered())
    }
}

impl FromIterator<Response> for ResponseVector {
    fn from_iter<I: IntoIterator<Item = Response>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// A required slot that has no answer yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MissingItem {
    pub part: String,
    pub item: usize,
}

/// Wire form of a survey: form-part id → responses indexed by item
/// number − 1, `null` for unanswered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Submission(pub BTreeMap<String, Vec<Option<i32>>>);

impl Submission {
    /// A submission with the single `responses` part.
    pub fn single(responses: Vec<Option<i32>>) -> Self {
        Self(BTreeMap::from([("responses".to_string(), responses)]))
    }

    pub fn paired(importance: Vec<Option<i32>>, commitment: Vec<Option<i32>>) -> Self {
        Self(BTreeMap::from([
            ("importance".to_string(), importance),
            ("commitment".to_string(), commitment),
        ]))
    }

    pub fn part(&self, id: &str) -> Option<&[Option<i32>]> {
        self.0.get(id).map(Vec::as_slice)
    }

    /// Decode each form part in declaration order. Absent parts decode as
    /// fully unanswered so drafts can be inspected.
    pub fn decode(
        &self,
        instrument: &str,
        parts: &[FormPart],
    ) -> Result<Vec<ResponseVector>, ScoringError> {
        if let Some(unknown) = self.0.keys().find(|k| !parts.iter().any(|p| &p.id == *k)) {
            return Err(ScoringError::UnknownPart {
                instrument: instrument.to_string(),
                part: unknown.clone(),
            });
        }

        parts
            .iter()
            .map(|part| match self.part(&part.id) {
                None => Ok(ResponseVector::unanswered(part.item_count())),
                Some(raw) if raw.len() != part.item_count() => Err(ScoringError::WrongLength {
                    instrument: instrument.to_string(),
                    part: part.id.clone(),
                    expected: part.item_count(),
                    actual: raw.len(),
                }),
                Some(raw) => Ok(ResponseVector::from_wire(raw, part)),
            })
            .collect()
    }
}

/// Check length, completeness, and range of a single-part vector and return
/// the plain values. Completeness is checked before range.
pub fn validate_part(
    instrument: &str,
    part: &FormPart,
    responses: &ResponseVector,
) -> Result<Vec<i32>, ScoringError> {
    if responses.len() != part.item_count() {
        return Err(ScoringError::WrongLength {
            instrument: instrument.to_string(),
            part: part.id.clone(),
            expected: part.item_count(),
            actual: responses.len(),
        });
    }

    let missing: Vec<MissingItem> = responses
        .unanswered_items()
        .into_iter()
        .map(|item| MissingItem {
            part: part.id.clone(),
            item,
        })
        .collect();
    if !missing.is_empty() {
        return Err(ScoringError::IncompleteInput {
            instrument: instrument.to_string(),
            missing,
        });
    }

    responses
        .iter()
        .enumerate()
        .map(|(idx, response)| check_response(instrument, part, idx + 1, response))
        .collect()
}

/// Range-check one answered slot. Not-applicable slots yield `0`, which
/// callers treat as excluded.
pub(crate) fn check_response(
    instrument: &str,
    part: &FormPart,
    item: usize,
    response: Response,
) -> Result<i32, ScoringError> {
    match response {
        Response::Answered(value) if part.range.contains(value) => Ok(value),
        Response::Answered(value) => Err(ScoringError::OutOfRange {
            instrument: instrument.to_string(),
            part: part.id.clone(),
            item,
            value,
            min: part.range.min,
            max: part.range.max,
        }),
        Response::NotApplicable if part.allows_not_applicable(item) => Ok(0),
        Response::NotApplicable => Err(ScoringError::NotApplicableNotAllowed {
            instrument: instrument.to_string(),
            part: part.id.clone(),
            item,
        }),
        Response::Unanswered => Err(ScoringError::IncompleteInput {
            instrument: instrument.to_string(),
            missing: vec![MissingItem {
                part: part.id.clone(),
                item,
            }],
        }),
    }
}
