use thrive_instruments::error::ScoringError;
use thrive_instruments::instruments::rumination::{
    self, BROODING_ITEMS, DEPRESSIVE_ITEMS, ITEM_COUNT, REFLECTIVE_ITEMS, TOTAL_NORMS,
};
use thrive_instruments::responses::{Response, ResponseVector};

fn uniform(value: i32) -> ResponseVector {
    ResponseVector::answered(vec![value; ITEM_COUNT])
}

#[test]
fn all_ones_gives_minimum_total() {
    let score = rumination::score(&uniform(1)).unwrap();
    assert_eq!(score.total, 22);
    assert_eq!(score.depressive, 9);
    assert_eq!(score.reflective, 6);
    assert_eq!(score.brooding, 7);
    // 50 + 10 * (22 - 40.73) / 13.85 = 36.48
    assert_eq!(score.t_total, 36);
}

#[test]
fn all_fours_gives_maximum_total() {
    let score = rumination::score(&uniform(4)).unwrap();
    assert_eq!(score.total, 88);
    // 50 + 10 * (88 - 40.73) / 13.85 = 84.13
    assert_eq!(score.t_total, 84);
    // 50 + 10 * (36 - 16.25) / 5.69 = 84.71
    assert_eq!(score.t_depressive, 85);
}

#[test]
fn subscales_cover_every_item_once() {
    let mut items: Vec<usize> = DEPRESSIVE_ITEMS
        .iter()
        .chain(&REFLECTIVE_ITEMS)
        .chain(&BROODING_ITEMS)
        .copied()
        .collect();
    items.sort_unstable();
    assert_eq!(items, (1..=ITEM_COUNT).collect::<Vec<_>>());
}

#[test]
fn subscale_sums_add_up_to_total() {
    let values: Vec<i32> = (0..ITEM_COUNT).map(|i| (i % 4) as i32 + 1).collect();
    let score = rumination::score(&ResponseVector::answered(values.clone())).unwrap();
    assert_eq!(score.total, values.iter().sum::<i32>());
    assert_eq!(score.depressive + score.reflective + score.brooding, score.total);
}

#[test]
fn subscale_sum_uses_only_its_items() {
    let values: Vec<i32> = (1..=ITEM_COUNT)
        .map(|item| if BROODING_ITEMS.contains(&item) { 4 } else { 1 })
        .collect();
    let score = rumination::score(&ResponseVector::answered(values)).unwrap();
    assert_eq!(score.brooding, 28);
    assert_eq!(score.depressive, 9);
    assert_eq!(score.reflective, 6);
}

#[test]
fn t_score_is_monotone_in_raw_sum() {
    let scores: Vec<i32> = (22..=88).map(|raw| TOTAL_NORMS.t_score(f64::from(raw))).collect();
    assert!(scores.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn scoring_is_idempotent() {
    let responses = ResponseVector::answered((0..ITEM_COUNT).map(|i| (i % 3) as i32 + 2));
    assert_eq!(
        rumination::score(&responses).unwrap(),
        rumination::score(&responses).unwrap()
    );
}

#[test]
fn value_above_range_is_rejected_not_clamped() {
    let mut values = vec![Response::Answered(2); ITEM_COUNT];
    values[10] = Response::Answered(5);
    let err = rumination::score(&ResponseVector::new(values)).unwrap_err();
    assert_eq!(
        err,
        ScoringError::OutOfRange {
            instrument: "rrs".to_string(),
            part: "responses".to_string(),
            item: 11,
            value: 5,
            min: 1,
            max: 4,
        }
    );
}

#[test]
fn zero_is_out_of_range() {
    let mut values = vec![Response::Answered(1); ITEM_COUNT];
    values[0] = Response::Answered(0);
    let err = rumination::score(&ResponseVector::new(values)).unwrap_err();
    assert!(matches!(err, ScoringError::OutOfRange { item: 1, value: 0, .. }));
}

#[test]
fn missing_responses_are_listed() {
    let mut values = vec![Response::Answered(3); ITEM_COUNT];
    values[4] = Response::Unanswered;
    values[21] = Response::Unanswered;
    let err = rumination::score(&ResponseVector::new(values)).unwrap_err();
    match err {
        ScoringError::IncompleteInput { instrument, missing } => {
            assert_eq!(instrument, "rrs");
            let items: Vec<usize> = missing.iter().map(|m| m.item).collect();
            assert_eq!(items, vec![5, 22]);
        }
        other => panic!("expected IncompleteInput, got {other:?}"),
    }
}

#[test]
fn not_applicable_is_not_accepted() {
    let mut values = vec![Response::Answered(3); ITEM_COUNT];
    values[2] = Response::NotApplicable;
    let err = rumination::score(&ResponseVector::new(values)).unwrap_err();
    assert!(matches!(
        err,
        ScoringError::NotApplicableNotAllowed { item: 3, .. }
    ));
}

#[test]
fn short_vector_is_wrong_length() {
    let err = rumination::score(&ResponseVector::answered(vec![2; 21])).unwrap_err();
    assert!(matches!(
        err,
        ScoringError::WrongLength {
            expected: 22,
            actual: 21,
            ..
        }
    ));
}
