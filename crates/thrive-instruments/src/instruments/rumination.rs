use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::{anchors, expect_parts};
use crate::error::ScoringError;
use crate::responses::{validate_part, ResponseVector};
use crate::result::ScoreResult;
use crate::scoring::{FormPart, Item, Norms, Polarity, ScoreRange, ScoreType, Subscale};
use crate::Instrument;

/// RRS: Ruminative Responses Scale.
/// 22 items rated 1–4. Depressive, reflective, and brooding subscales
/// partition the items. Reported as sums and T-scores, no levels.
pub struct Rumination;

pub const ID: &str = "rrs";
pub const ITEM_COUNT: usize = 22;
pub const RESPONSE_RANGE: ScoreRange = ScoreRange::new(1, 4);

pub const DEPRESSIVE_ITEMS: [usize; 9] = [1, 2, 3, 4, 6, 8, 9, 14, 17];
pub const REFLECTIVE_ITEMS: [usize; 6] = [7, 11, 12, 19, 20, 21];
pub const BROODING_ITEMS: [usize; 7] = [5, 10, 13, 15, 16, 18, 22];

pub const TOTAL_NORMS: Norms = Norms::new(40.73, 13.85);
pub const DEPRESSIVE_NORMS: Norms = Norms::new(16.25, 5.69);
pub const REFLECTIVE_NORMS: Norms = Norms::new(10.38, 4.11);
pub const BROODING_NORMS: Norms = Norms::new(14.13, 5.19);

const PROMPTS: [&str; ITEM_COUNT] = [
    "Think about how alone you feel",
    "Think \"I won't be able to do my job if I don't snap out of this\"",
    "Think about your feelings of fatigue and achiness",
    "Think about how hard it is to concentrate",
    "Think \"What am I doing to deserve this?\"",
    "Think about how passive and unmotivated you feel",
    "Analyze recent events to try to understand why you are depressed",
    "Think about how you don't seem to feel anything anymore",
    "Think \"Why can't I get going?\"",
    "Think \"Why do I always react this way?\"",
    "Go away by yourself and think about why you feel this way",
    "Write down what you are thinking about and analyze it",
    "Think about a recent situation, wishing it had gone better",
    "Think \"I won't be able to concentrate if I keep feeling this way\"",
    "Think \"Why do I have problems other people don't have?\"",
    "Think \"Why can't I handle things better?\"",
    "Think about how sad you feel",
    "Think about all your shortcomings, failings, faults, and mistakes",
    "Think about how you don't feel up to doing anything",
    "Analyze your personality to try to understand why you are depressed",
    "Go someplace alone to think about your feelings",
    "Think about how angry you are with yourself",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RuminationScore {
    pub total: i32,
    pub depressive: i32,
    pub reflective: i32,
    pub brooding: i32,
    pub t_total: i32,
    pub t_depressive: i32,
    pub t_reflective: i32,
    pub t_brooding: i32,
}

/// Score a complete 22-item response vector.
pub fn score(responses: &ResponseVector) -> Result<RuminationScore, ScoringError> {
    let values = validate_part(ID, &parts_table()[0], responses)?;

    let sum = |items: &[usize]| items.iter().map(|&i| values[i - 1]).sum::<i32>();
    let total: i32 = values.iter().sum();
    let depressive = sum(&DEPRESSIVE_ITEMS);
    let reflective = sum(&REFLECTIVE_ITEMS);
    let brooding = sum(&BROODING_ITEMS);

    Ok(RuminationScore {
        total,
        depressive,
        reflective,
        brooding,
        t_total: TOTAL_NORMS.t_score(f64::from(total)),
        t_depressive: DEPRESSIVE_NORMS.t_score(f64::from(depressive)),
        t_reflective: REFLECTIVE_NORMS.t_score(f64::from(reflective)),
        t_brooding: BROODING_NORMS.t_score(f64::from(brooding)),
    })
}

fn parts_table() -> &'static [FormPart] {
    static PARTS: std::sync::LazyLock<Vec<FormPart>> = std::sync::LazyLock::new(|| {
        vec![FormPart {
            id: "responses".to_string(),
            name: "Responses".to_string(),
            items: PROMPTS
                .iter()
                .enumerate()
                .map(|(idx, prompt)| Item {
                    number: idx + 1,
                    prompt: prompt.to_string(),
                })
                .collect(),
            range: RESPONSE_RANGE,
            anchors: anchors(&[
                (1, "Almost never"),
                (2, "Sometimes"),
                (3, "Often"),
                (4, "Almost always"),
            ]),
            not_applicable: Vec::new(),
        }]
    });
    &PARTS
}

impl Instrument for Rumination {
    fn id(&self) -> &str {
        ID
    }

    fn name(&self) -> &str {
        "Ruminative Responses Scale"
    }

    fn description(&self) -> &str {
        "How often you think or do each of these things when you feel down, sad, or depressed."
    }

    fn parts(&self) -> &[FormPart] {
        parts_table()
    }

    fn subscales(&self) -> &[Subscale] {
        static SUBSCALES: std::sync::LazyLock<Vec<Subscale>> = std::sync::LazyLock::new(|| {
            vec![
                subscale("depressive", "Depressive", &DEPRESSIVE_ITEMS, DEPRESSIVE_NORMS),
                subscale("reflective", "Reflective pondering", &REFLECTIVE_ITEMS, REFLECTIVE_NORMS),
                subscale("brooding", "Brooding", &BROODING_ITEMS, BROODING_NORMS),
            ]
        });
        &SUBSCALES
    }

    fn score(&self, responses: &[ResponseVector]) -> Result<ScoreResult, ScoringError> {
        let parts = expect_parts(ID, 1, responses)?;
        score(&parts[0]).map(ScoreResult::Rumination)
    }
}

fn subscale(id: &str, name: &str, items: &[usize], norms: Norms) -> Subscale {
    Subscale {
        id: id.to_string(),
        name: name.to_string(),
        items: items.to_vec(),
        score_types: vec![ScoreType::Raw, ScoreType::TScore],
        norms: Some(norms),
        polarity: Polarity::HigherIsWorse,
        description: None,
    }
}
