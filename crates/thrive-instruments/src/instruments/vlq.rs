use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::{anchors, expect_parts};
use crate::error::ScoringError;
use crate::responses::{check_response, MissingItem, Response, ResponseVector};
use crate::result::ScoreResult;
use crate::scoring::{FormPart, Item, Polarity, ScoreRange, ScoreType, Subscale};
use crate::Instrument;

/// VLQ: Valued Living Questionnaire.
/// Twelve life domains, each rated for importance and for how consistently
/// the client has lived by it (commitment), both 1–10. Intimate
/// relationships and parenting may be marked not applicable.
pub struct Vlq;

pub const ID: &str = "vlq";
pub const DOMAIN_COUNT: usize = 12;
pub const RESPONSE_RANGE: ScoreRange = ScoreRange::new(1, 10);

/// 1-based items that accept "not applicable" for importance.
pub const NOT_APPLICABLE_ITEMS: [usize; 2] = [1, 3];

/// Importance at or above which a domain counts as a top value.
pub const TOP_VALUE_MIN_IMPORTANCE: i32 = 9;
/// Commitment at or below which a top value is flagged.
pub const LOW_COMMITMENT_MAX: i32 = 6;

pub const IMPORTANCE: &str = "importance";
pub const COMMITMENT: &str = "commitment";

pub const DOMAINS: [&str; DOMAIN_COUNT] = [
    "Intimate relationships",
    "Family",
    "Parenting",
    "Friendships",
    "Work",
    "Education",
    "Recreation",
    "Spirituality",
    "Community",
    "Physical well-being",
    "Environment",
    "Creativity and aesthetics",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DomainScore {
    pub label: String,
    /// `None` when the domain was marked not applicable.
    pub importance: Option<i32>,
    pub commitment: Option<i32>,
    pub product: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ValuesScore {
    /// Σ importance × commitment / 12.
    pub overall_score: f64,
    pub top_values: Vec<String>,
    pub low_commitment_values: Vec<String>,
    pub domains: Vec<DomainScore>,
}

/// A domain that passed validation. `None` means not applicable.
type Rated = Option<(i32, i32)>;

/// Score parallel importance and commitment vectors of 12 responses each.
pub fn score(
    importance: &ResponseVector,
    commitment: &ResponseVector,
) -> Result<ValuesScore, ScoringError> {
    let rated = validate(importance, commitment)?;

    let overall: i32 = rated.iter().flatten().map(|(imp, com)| imp * com).sum();

    let domains = rated
        .iter()
        .zip(DOMAINS)
        .map(|(r, label)| DomainScore {
            label: label.to_string(),
            importance: r.map(|(imp, _)| imp),
            commitment: r.map(|(_, com)| com),
            product: r.map(|(imp, com)| imp * com),
        })
        .collect();

    Ok(ValuesScore {
        overall_score: f64::from(overall) / DOMAIN_COUNT as f64,
        top_values: ranked(&rated, |_| true),
        low_commitment_values: ranked(&rated, |com| com <= LOW_COMMITMENT_MAX),
        domains,
    })
}

/// Labels of the domains with importance ≥ 9 whose commitment satisfies
/// `keep`, highest importance first. Ties keep domain order.
fn ranked(rated: &[Rated], keep: impl Fn(i32) -> bool) -> Vec<String> {
    let mut hits: Vec<(usize, i32)> = rated
        .iter()
        .enumerate()
        .filter_map(|(idx, r)| r.map(|(imp, com)| (idx, imp, com)))
        .filter(|&(_, imp, com)| imp >= TOP_VALUE_MIN_IMPORTANCE && keep(com))
        .map(|(idx, imp, _)| (idx, imp))
        .collect();
    hits.sort_by(|a, b| b.1.cmp(&a.1));
    hits.into_iter()
        .map(|(idx, _)| DOMAINS[idx].to_string())
        .collect()
}

fn validate(
    importance: &ResponseVector,
    commitment: &ResponseVector,
) -> Result<Vec<Rated>, ScoringError> {
    let parts = parts_table();
    let (importance_part, commitment_part) = (&parts[0], &parts[1]);

    for (part, vector) in [(importance_part, importance), (commitment_part, commitment)] {
        if vector.len() != DOMAIN_COUNT {
            return Err(ScoringError::WrongLength {
                instrument: ID.to_string(),
                part: part.id.clone(),
                expected: DOMAIN_COUNT,
                actual: vector.len(),
            });
        }
    }

    let missing = missing_slots(importance, commitment);
    if !missing.is_empty() {
        return Err(ScoringError::IncompleteInput {
            instrument: ID.to_string(),
            missing,
        });
    }

    importance
        .iter()
        .zip(commitment.iter())
        .enumerate()
        .map(|(idx, (imp, com))| {
            let item = idx + 1;
            if imp == Response::NotApplicable {
                // Rejects N/A outside the permitted items; commitment is
                // ignored either way.
                check_response(ID, importance_part, item, imp)?;
                return Ok(None);
            }
            let imp = check_response(ID, importance_part, item, imp)?;
            let com = check_response(ID, commitment_part, item, com)?;
            Ok(Some((imp, com)))
        })
        .collect()
}

fn missing_slots(importance: &ResponseVector, commitment: &ResponseVector) -> Vec<MissingItem> {
    let mut missing: Vec<MissingItem> = importance
        .unanswered_items()
        .into_iter()
        .map(|item| MissingItem {
            part: IMPORTANCE.to_string(),
            item,
        })
        .collect();
    missing.extend(
        commitment
            .unanswered_items()
            .into_iter()
            .filter(|&item| importance.get(item) != Some(Response::NotApplicable))
            .map(|item| MissingItem {
                part: COMMITMENT.to_string(),
                item,
            }),
    );
    missing
}

fn parts_table() -> &'static [FormPart] {
    static PARTS: std::sync::LazyLock<Vec<FormPart>> = std::sync::LazyLock::new(|| {
        let items: Vec<Item> = DOMAINS
            .iter()
            .enumerate()
            .map(|(idx, label)| Item {
                number: idx + 1,
                prompt: label.to_string(),
            })
            .collect();

        vec![
            FormPart {
                id: IMPORTANCE.to_string(),
                name: "Importance".to_string(),
                items: items.clone(),
                range: RESPONSE_RANGE,
                anchors: anchors(&[(1, "Not at all important"), (10, "Extremely important")]),
                not_applicable: NOT_APPLICABLE_ITEMS.to_vec(),
            },
            FormPart {
                id: COMMITMENT.to_string(),
                name: "Consistency".to_string(),
                items,
                range: RESPONSE_RANGE,
                anchors: anchors(&[(1, "Not at all consistent"), (10, "Completely consistent")]),
                not_applicable: Vec::new(),
            },
        ]
    });
    &PARTS
}

impl Instrument for Vlq {
    fn id(&self) -> &str {
        ID
    }

    fn name(&self) -> &str {
        "Valued Living Questionnaire"
    }

    fn description(&self) -> &str {
        "How important each area of life is to you, and how consistently you have lived by it over the past week."
    }

    fn parts(&self) -> &[FormPart] {
        parts_table()
    }

    fn subscales(&self) -> &[Subscale] {
        static SUBSCALES: std::sync::LazyLock<Vec<Subscale>> = std::sync::LazyLock::new(|| {
            vec![Subscale {
                id: "valued_living".to_string(),
                name: "Valued living".to_string(),
                items: (1..=DOMAIN_COUNT).collect(),
                score_types: vec![ScoreType::Product],
                norms: None,
                polarity: Polarity::HigherIsBetter,
                description: Some(
                    "Mean importance × consistency product across all twelve domains".to_string(),
                ),
            }]
        });
        &SUBSCALES
    }

    fn missing_items(&self, responses: &[ResponseVector]) -> Vec<MissingItem> {
        match responses {
            [importance, commitment, ..] => missing_slots(importance, commitment),
            [importance] => missing_slots(importance, &ResponseVector::unanswered(DOMAIN_COUNT)),
            [] => {
                let blank = ResponseVector::unanswered(DOMAIN_COUNT);
                missing_slots(&blank, &blank)
            }
        }
    }

    fn score(&self, responses: &[ResponseVector]) -> Result<ScoreResult, ScoringError> {
        let parts = expect_parts(ID, 2, responses)?;
        score(&parts[0], &parts[1]).map(ScoreResult::Values)
    }
}
