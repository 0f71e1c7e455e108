pub mod mbi;
pub mod rumination;
pub mod vlq;

use crate::error::ScoringError;
use crate::responses::ResponseVector;
use crate::scoring::Anchor;

/// Check that the caller supplied exactly one vector per form part.
pub(crate) fn expect_parts<'a>(
    instrument: &str,
    expected: usize,
    responses: &'a [ResponseVector],
) -> Result<&'a [ResponseVector], ScoringError> {
    if responses.len() != expected {
        return Err(ScoringError::WrongLength {
            instrument: instrument.to_string(),
            part: "form parts".to_string(),
            expected,
            actual: responses.len(),
        });
    }
    Ok(responses)
}

pub(crate) fn anchors(labels: &[(i32, &str)]) -> Vec<Anchor> {
    labels
        .iter()
        .map(|&(value, label)| Anchor {
            value,
            label: label.to_string(),
        })
        .collect()
}
