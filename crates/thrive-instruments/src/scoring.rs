use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ScoringError;

/// The type of score a subscale produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ScoreType {
    /// Unscaled sum of item responses.
    Raw,
    /// Sum divided by the number of items.
    Mean,
    /// T-score, mean=50, SD=10.
    TScore,
    /// Importance × commitment product.
    Product,
}

/// Inclusive range of valid integer responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreRange {
    pub min: i32,
    pub max: i32,
}

impl ScoreRange {
    pub const fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: i32) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// Population mean and standard deviation used to standardize a raw score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Norms {
    pub mean: f64,
    pub sd: f64,
}

impl Norms {
    pub const fn new(mean: f64, sd: f64) -> Self {
        Self { mean, sd }
    }

    /// `round(50 + 10 * (raw - mean) / sd)`.
    pub fn t_score(&self, raw: f64) -> i32 {
        round_half_away(50.0 + 10.0 * (raw - self.mean) / self.sd)
    }
}

/// Rounds to the nearest integer, ties away from zero (47.5 → 48, -2.5 → -3).
pub fn round_half_away(value: f64) -> i32 {
    value.round() as i32
}

/// Qualitative band of a T-score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Level {
    Low,
    Average,
    High,
}

impl Level {
    pub const HIGH_FROM: i32 = 60;
    pub const AVERAGE_FROM: i32 = 40;

    pub fn from_t_score(t_score: i32) -> Self {
        if t_score >= Self::HIGH_FROM {
            Level::High
        } else if t_score >= Self::AVERAGE_FROM {
            Level::Average
        } else {
            Level::Low
        }
    }
}

/// Which end of a subscale is the favorable one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Polarity {
    HigherIsWorse,
    HigherIsBetter,
}

/// How a level reads for the client. Only the interpretation flips with
/// polarity; the thresholds never do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Outlook {
    Favorable,
    Neutral,
    Concerning,
}

impl Polarity {
    pub fn outlook(self, level: Level) -> Outlook {
        match (self, level) {
            (_, Level::Average) => Outlook::Neutral,
            (Polarity::HigherIsWorse, Level::High) | (Polarity::HigherIsBetter, Level::Low) => {
                Outlook::Concerning
            }
            (Polarity::HigherIsWorse, Level::Low) | (Polarity::HigherIsBetter, Level::High) => {
                Outlook::Favorable
            }
        }
    }
}

/// Label attached to a response value on the answer scale.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Anchor {
    pub value: i32,
    pub label: String,
}

/// One prompt of a form part. `number` is 1-based.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Item {
    pub number: usize,
    pub prompt: String,
}

/// An ordered list of items answered on a common scale. Most instruments
/// have a single `responses` part; the VLQ has `importance` and
/// `commitment`.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FormPart {
    pub id: String,
    pub name: String,
    pub items: Vec<Item>,
    pub range: ScoreRange,
    pub anchors: Vec<Anchor>,
    /// 1-based item numbers that may be answered "not applicable".
    pub not_applicable: Vec<usize>,
}

impl FormPart {
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn allows_not_applicable(&self, item: usize) -> bool {
        self.not_applicable.contains(&item)
    }
}

/// A named subset of items aggregated independently.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Subscale {
    pub id: String,
    pub name: String,
    /// 1-based item numbers.
    pub items: Vec<usize>,
    pub score_types: Vec<ScoreType>,
    pub norms: Option<Norms>,
    pub polarity: Polarity,
    pub description: Option<String>,
}

impl Subscale {
    /// Sum of the subscale's items. `values` is indexed by item number − 1;
    /// `None` if an item falls outside it.
    pub fn sum(&self, values: &[i32]) -> Option<i32> {
        self.items
            .iter()
            .map(|&item| item.checked_sub(1).and_then(|idx| values.get(idx)).copied())
            .sum()
    }
}

/// Raw, mean, and standardized score of one subscale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SubscaleScore {
    pub id: String,
    pub name: String,
    pub sum: i32,
    pub item_count: usize,
    pub mean: f64,
    pub t_score: i32,
    pub level: Level,
    pub outlook: Outlook,
}

impl SubscaleScore {
    /// `None` if `values` is too short for the subscale's items.
    pub fn compute(subscale: &Subscale, norms: Norms, values: &[i32]) -> Option<Self> {
        let sum = subscale.sum(values)?;
        let item_count = subscale.items.len();
        let t_score = norms.t_score(f64::from(sum));
        let level = Level::from_t_score(t_score);
        Some(Self {
            id: subscale.id.clone(),
            name: subscale.name.clone(),
            sum,
            item_count,
            mean: f64::from(sum) / item_count as f64,
            t_score,
            level,
            outlook: subscale.polarity.outlook(level),
        })
    }

    /// Mean at display precision, two decimals with ties away from zero.
    pub fn mean_display(&self) -> String {
        format!("{:.2}", (self.mean * 100.0).round() / 100.0)
    }
}

/// Check that subscale indices are unique within each subscale and lie in
/// `[1, item_count]`. With `partition`, additionally require every item to
/// belong to exactly one subscale.
pub fn check_subscales(
    instrument: &str,
    item_count: usize,
    subscales: &[Subscale],
    partition: bool,
) -> Result<(), ScoringError> {
    let invalid = |reason: String| ScoringError::InvalidInstrument {
        instrument: instrument.to_string(),
        reason,
    };

    let mut seen = HashSet::new();
    for subscale in subscales {
        let mut own = HashSet::new();
        for &item in &subscale.items {
            if item == 0 || item > item_count {
                return Err(invalid(format!(
                    "subscale '{}' references item {item} outside [1, {item_count}]",
                    subscale.id
                )));
            }
            if !own.insert(item) {
                return Err(invalid(format!(
                    "subscale '{}' lists item {item} twice",
                    subscale.id
                )));
            }
            if partition && !seen.insert(item) {
                return Err(invalid(format!(
                    "item {item} belongs to more than one subscale"
                )));
            }
        }
    }

    if partition
        && let Some(orphan) = (1..=item_count).find(|item| !seen.contains(item))
    {
        return Err(invalid(format!("item {orphan} belongs to no subscale")));
    }

    Ok(())
}
