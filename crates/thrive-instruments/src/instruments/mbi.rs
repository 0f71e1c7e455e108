use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::{anchors, expect_parts};
use crate::error::ScoringError;
use crate::responses::{validate_part, ResponseVector};
use crate::result::ScoreResult;
use crate::scoring::{
    FormPart, Item, Norms, Polarity, ScoreRange, ScoreType, Subscale, SubscaleScore,
};
use crate::Instrument;

/// MBI: Maslach Burnout Inventory, 16-item form.
/// Items rated 0 (never) to 6 (every day). Exhaustion, cynicism, and
/// professional efficacy subscales, each reported as sum, mean, T-score,
/// and level. Higher efficacy is favorable.
pub struct Mbi;

pub const ID: &str = "mbi";
pub const ITEM_COUNT: usize = 16;
pub const RESPONSE_RANGE: ScoreRange = ScoreRange::new(0, 6);

pub const EXHAUSTION_ITEMS: [usize; 8] = [1, 2, 3, 6, 8, 13, 14, 16];
pub const CYNICISM_ITEMS: [usize; 4] = [5, 10, 11, 15];
pub const EFFICACY_ITEMS: [usize; 4] = [4, 7, 9, 12];

pub const EXHAUSTION_NORMS: Norms = Norms::new(30.0, 13.0);
pub const CYNICISM_NORMS: Norms = Norms::new(12.0, 8.0);
pub const EFFICACY_NORMS: Norms = Norms::new(34.0, 8.5);

const PROMPTS: [&str; ITEM_COUNT] = [
    "I feel emotionally drained from my work",
    "I feel used up at the end of the workday",
    "I feel tired when I get up in the morning and have to face another day at work",
    "I can effectively solve the problems that arise in my work",
    "I have become less interested in my work since I started this job",
    "Working all day is really a strain for me",
    "I feel I am making an effective contribution to what my organization does",
    "I feel burned out from my work",
    "In my opinion, I am good at my job",
    "I have become less enthusiastic about my work",
    "I just want to do my job and not be bothered",
    "I feel exhilarated when I accomplish something at work",
    "I feel frustrated by my job",
    "I feel I am working too hard at my job",
    "I doubt the significance of my work",
    "I feel like I am at the end of my rope",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MbiScore {
    pub exhaustion: SubscaleScore,
    pub cynicism: SubscaleScore,
    pub efficacy: SubscaleScore,
}

impl MbiScore {
    pub fn subscales(&self) -> [&SubscaleScore; 3] {
        [&self.exhaustion, &self.cynicism, &self.efficacy]
    }
}

/// Score a complete 16-item response vector.
pub fn score(responses: &ResponseVector) -> Result<MbiScore, ScoringError> {
    let part = &parts_table()[0];
    let values = validate_part(ID, part, responses)?;
    let [exhaustion, cynicism, efficacy] = subscale_tables();
    let compute = |subscale: &Subscale, norms: Norms| {
        SubscaleScore::compute(subscale, norms, &values).ok_or_else(|| {
            ScoringError::WrongLength {
                instrument: ID.to_string(),
                part: part.id.clone(),
                expected: ITEM_COUNT,
                actual: values.len(),
            }
        })
    };

    Ok(MbiScore {
        exhaustion: compute(exhaustion, EXHAUSTION_NORMS)?,
        cynicism: compute(cynicism, CYNICISM_NORMS)?,
        efficacy: compute(efficacy, EFFICACY_NORMS)?,
    })
}

fn subscale_tables() -> &'static [Subscale; 3] {
    static SUBSCALES: std::sync::LazyLock<[Subscale; 3]> = std::sync::LazyLock::new(|| {
        [
            subscale(
                "exhaustion",
                "Emotional exhaustion",
                &EXHAUSTION_ITEMS,
                EXHAUSTION_NORMS,
                Polarity::HigherIsWorse,
            ),
            subscale(
                "cynicism",
                "Cynicism",
                &CYNICISM_ITEMS,
                CYNICISM_NORMS,
                Polarity::HigherIsWorse,
            ),
            subscale(
                "efficacy",
                "Professional efficacy",
                &EFFICACY_ITEMS,
                EFFICACY_NORMS,
                Polarity::HigherIsBetter,
            ),
        ]
    });
    &SUBSCALES
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
                (0, "Never"),
                (1, "A few times a year or less"),
                (2, "Once a month or less"),
                (3, "A few times a month"),
                (4, "Once a week"),
                (5, "A few times a week"),
                (6, "Every day"),
            ]),
            not_applicable: Vec::new(),
        }]
    });
    &PARTS
}

impl Instrument for Mbi {
    fn id(&self) -> &str {
        ID
    }

    fn name(&self) -> &str {
        "Maslach Burnout Inventory"
    }

    fn description(&self) -> &str {
        "How often you have felt this way about your work."
    }

    fn parts(&self) -> &[FormPart] {
        parts_table()
    }

    fn subscales(&self) -> &[Subscale] {
        subscale_tables()
    }

    fn score(&self, responses: &[ResponseVector]) -> Result<ScoreResult, ScoringError> {
        let parts = expect_parts(ID, 1, responses)?;
        score(&parts[0]).map(ScoreResult::Mbi)
    }
}

fn subscale(id: &str, name: &str, items: &[usize], norms: Norms, polarity: Polarity) -> Subscale {
    Subscale {
        id: id.to_string(),
        name: name.to_string(),
        items: items.to_vec(),
        score_types: vec![ScoreType::Raw, ScoreType::Mean, ScoreType::TScore],
        norms: Some(norms),
        polarity,
        description: match polarity {
            Polarity::HigherIsBetter => Some("Higher scores are favorable".to_string()),
            Polarity::HigherIsWorse => Some("Higher scores indicate more burnout".to_string()),
        },
    }
}
