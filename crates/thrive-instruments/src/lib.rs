//! thrive-instruments
//!
//! Survey instrument definitions and scoring. Pure computation, no I/O.
//! Defines the items, subscales, norms, and scoring rules for each
//! supported instrument.

pub mod error;
pub mod instruments;
pub mod responses;
pub mod result;
pub mod scoring;
pub mod session;

use error::ScoringError;
use responses::{MissingItem, ResponseVector, Submission};
use result::ScoreResult;
use scoring::{FormPart, Subscale};

/// Trait implemented by each survey instrument.
pub trait Instrument: Send + Sync {
    /// Unique identifier for this instrument (e.g., "rrs", "mbi").
    fn id(&self) -> &str;

    /// Human-readable name.
    fn name(&self) -> &str;

    fn description(&self) -> &str;

    /// The form parts a client answers, in submission order.
    fn parts(&self) -> &[FormPart];

    /// The subscales this instrument aggregates.
    fn subscales(&self) -> &[Subscale];

    /// Whether the subscales must cover every item exactly once.
    fn partitions_items(&self) -> bool {
        true
    }

    /// Required slots that are still unanswered. One vector per form part;
    /// a part with no vector counts as wholly unanswered.
    fn missing_items(&self, responses: &[ResponseVector]) -> Vec<MissingItem> {
        self.parts()
            .iter()
            .enumerate()
            .flat_map(|(idx, part)| {
                let items = match responses.get(idx) {
                    Some(vector) => vector.unanswered_items(),
                    None => (1..=part.item_count()).collect(),
                };
                items.into_iter().map(move |item| MissingItem {
                    part: part.id.clone(),
                    item,
                })
            })
            .collect()
    }

    /// Score one vector per form part.
    fn score(&self, responses: &[ResponseVector]) -> Result<ScoreResult, ScoringError>;

    /// Decode a wire submission and score it.
    fn score_submission(&self, submission: &Submission) -> Result<ScoreResult, ScoringError> {
        let responses = submission.decode(self.id(), self.parts())?;
        self.score(&responses)
    }

    /// Verify the static item and subscale tables.
    fn check_tables(&self) -> Result<(), ScoringError> {
        let item_count = self
            .parts()
            .first()
            .map(FormPart::item_count)
            .ok_or_else(|| ScoringError::InvalidInstrument {
                instrument: self.id().to_string(),
                reason: "no form parts".to_string(),
            })?;

        for part in self.parts() {
            if part.item_count() != item_count {
                return Err(ScoringError::InvalidInstrument {
                    instrument: self.id().to_string(),
                    reason: format!(
                        "part '{}' has {} items, expected {item_count}",
                        part.id,
                        part.item_count()
                    ),
                });
            }
            if let Some(bad) = part.items.iter().enumerate().find(|(idx, i)| i.number != idx + 1) {
                return Err(ScoringError::InvalidInstrument {
                    instrument: self.id().to_string(),
                    reason: format!("part '{}' item {} is out of order", part.id, bad.1.number),
                });
            }
        }

        scoring::check_subscales(self.id(), item_count, self.subscales(), self.partitions_items())
    }
}

/// Return all registered instruments.
pub fn all_instruments() -> Vec<Box<dyn Instrument>> {
    vec![
        Box::new(instruments::rumination::Rumination),
        Box::new(instruments::mbi::Mbi),
        Box::new(instruments::vlq::Vlq),
    ]
}

/// Look up an instrument by ID.
pub fn get_instrument(id: &str) -> Option<Box<dyn Instrument>> {
    all_instruments().into_iter().find(|i| i.id() == id)
}

/// Check every registered instrument's tables. Run once at process start.
pub fn verify_tables() -> Result<(), ScoringError> {
    all_instruments().iter().try_for_each(|i| i.check_tables())
}
