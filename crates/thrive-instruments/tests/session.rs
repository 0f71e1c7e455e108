use thrive_instruments::error::ScoringError;
use thrive_instruments::instruments::{mbi, rumination, vlq};
use thrive_instruments::responses::{ResponseVector, Submission};
use thrive_instruments::result::ScoreResult;
use thrive_instruments::session::{completion, SurveySession, SurveyState};
use thrive_instruments::{get_instrument, Instrument};

#[test]
fn walks_through_every_state() {
    let mut session = SurveySession::for_instrument("mbi").unwrap();
    assert_eq!(session.state(), SurveyState::Unanswered);

    session.answer("responses", 1, 0).unwrap();
    assert_eq!(session.state(), SurveyState::PartiallyAnswered);
    assert_eq!(session.missing_items().len(), mbi::ITEM_COUNT - 1);

    for item in 2..=mbi::ITEM_COUNT {
        session.answer("responses", item, 0).unwrap();
    }
    assert_eq!(session.state(), SurveyState::Complete);

    let result = session.submit().unwrap().clone();
    assert_eq!(session.state(), SurveyState::Scored);
    let ScoreResult::Mbi(score) = &result else {
        panic!("expected MBI result");
    };
    assert_eq!(score.exhaustion.t_score, 27);
    assert_eq!(session.result(), Some(&result));
}

#[test]
fn editing_after_scoring_drops_result() {
    let mut session = SurveySession::for_instrument("rrs").unwrap();
    for item in 1..=rumination::ITEM_COUNT {
        session.answer("responses", item, 2).unwrap();
    }
    session.submit().unwrap();
    assert_eq!(session.state(), SurveyState::Scored);

    session.answer("responses", 3, 4).unwrap();
    assert_eq!(session.state(), SurveyState::Complete);
    assert!(session.result().is_none());

    session.clear("responses", 3).unwrap();
    assert_eq!(session.state(), SurveyState::PartiallyAnswered);
}

#[test]
fn submit_is_blocked_until_complete() {
    let mut session = SurveySession::for_instrument("rrs").unwrap();
    session.answer("responses", 1, 1).unwrap();
    let err = session.submit().unwrap_err();
    match err {
        ScoringError::IncompleteInput { missing, .. } => assert_eq!(missing.len(), 21),
        other => panic!("expected IncompleteInput, got {other:?}"),
    }
    assert_eq!(session.state(), SurveyState::PartiallyAnswered);
}

#[test]
fn submitting_twice_gives_identical_results() {
    let mut session = SurveySession::for_instrument("rrs").unwrap();
    for item in 1..=rumination::ITEM_COUNT {
        session.answer("responses", item, (item % 4) as i32 + 1).unwrap();
    }
    let first = session.submit().unwrap().clone();
    let second = session.submit().unwrap().clone();
    assert_eq!(first, second);
}

#[test]
fn answer_rejects_values_outside_scale() {
    let mut session = SurveySession::for_instrument("rrs").unwrap();
    assert!(matches!(
        session.answer("responses", 1, 5),
        Err(ScoringError::OutOfRange { value: 5, .. })
    ));
    assert_eq!(session.state(), SurveyState::Unanswered);
}

#[test]
fn answer_rejects_unknown_slots() {
    let mut session = SurveySession::for_instrument("mbi").unwrap();
    assert!(matches!(
        session.answer("importance", 1, 3),
        Err(ScoringError::UnknownPart { .. })
    ));
    assert!(matches!(
        session.answer("responses", 0, 3),
        Err(ScoringError::UnknownItem { item: 0, .. })
    ));
    assert!(matches!(
        session.answer("responses", 17, 3),
        Err(ScoringError::UnknownItem { item: 17, .. })
    ));
}

#[test]
fn unknown_instrument() {
    assert!(matches!(
        SurveySession::for_instrument("phq9"),
        Err(ScoringError::UnknownInstrument(id)) if id == "phq9"
    ));
}

#[test]
fn values_session_with_not_applicable_domains() {
    let mut session = SurveySession::for_instrument("vlq").unwrap();
    session.mark_not_applicable(vlq::IMPORTANCE, 1).unwrap();
    session.mark_not_applicable(vlq::IMPORTANCE, 3).unwrap();
    assert!(matches!(
        session.mark_not_applicable(vlq::IMPORTANCE, 2),
        Err(ScoringError::NotApplicableNotAllowed { item: 2, .. })
    ));
    assert!(matches!(
        session.mark_not_applicable(vlq::COMMITMENT, 1),
        Err(ScoringError::NotApplicableNotAllowed { .. })
    ));

    for item in [2, 4, 5, 6, 7, 8, 9, 10, 11, 12] {
        session.answer(vlq::IMPORTANCE, item, 9).unwrap();
        assert_eq!(session.state(), SurveyState::PartiallyAnswered);
    }
    for item in [2, 4, 5, 6, 7, 8, 9, 10, 11, 12] {
        session.answer(vlq::COMMITMENT, item, 5).unwrap();
    }
    // Commitment for not-applicable domains is not required.
    assert_eq!(session.state(), SurveyState::Complete);

    let ScoreResult::Values(score) = session.submit().unwrap() else {
        panic!("expected values result");
    };
    assert_eq!(score.top_values.len(), 10);
    assert!(!score.top_values.contains(&"Parenting".to_string()));
    assert_eq!(score.overall_score, 450.0 / 12.0);
}

#[test]
fn draft_round_trips_through_wire_form() {
    let mut session = SurveySession::for_instrument("vlq").unwrap();
    session.mark_not_applicable(vlq::IMPORTANCE, 3).unwrap();
    session.answer(vlq::IMPORTANCE, 4, 7).unwrap();

    let submission = session.to_submission();
    let importance = submission.part(vlq::IMPORTANCE).unwrap();
    assert_eq!(importance[2], Some(0));
    assert_eq!(importance[3], Some(7));
    assert_eq!(importance[0], None);

    let resumed =
        SurveySession::from_submission(get_instrument("vlq").unwrap(), &submission).unwrap();
    assert_eq!(resumed.responses(), session.responses());
    assert_eq!(resumed.state(), SurveyState::PartiallyAnswered);
}

#[test]
fn completion_of_wire_drafts() {
    let instrument = get_instrument("rrs").unwrap();
    let empty = Submission::default()
        .decode(instrument.id(), instrument.parts())
        .unwrap();
    assert_eq!(completion(instrument.as_ref(), &empty), SurveyState::Unanswered);

    let full = Submission::single(vec![Some(3); rumination::ITEM_COUNT])
        .decode(instrument.id(), instrument.parts())
        .unwrap();
    assert_eq!(completion(instrument.as_ref(), &full), SurveyState::Complete);
}

#[test]
fn missing_form_part_is_never_complete() {
    let instrument = get_instrument("vlq").unwrap();
    let importance_only = [ResponseVector::answered(vec![5; vlq::DOMAIN_COUNT])];
    assert_eq!(
        completion(instrument.as_ref(), &importance_only),
        SurveyState::PartiallyAnswered
    );
    let missing = instrument.missing_items(&importance_only);
    assert_eq!(missing.len(), vlq::DOMAIN_COUNT);
    assert!(missing.iter().all(|m| m.part == vlq::COMMITMENT));

    let rrs = get_instrument("rrs").unwrap();
    let doubled = [
        ResponseVector::answered(vec![2; rumination::ITEM_COUNT]),
        ResponseVector::answered(vec![2; rumination::ITEM_COUNT]),
    ];
    assert_eq!(completion(rrs.as_ref(), &doubled), SurveyState::PartiallyAnswered);
    assert_eq!(rrs.missing_items(&[]).len(), rumination::ITEM_COUNT);
}

#[test]
fn unknown_part_in_submission() {
    let instrument = get_instrument("mbi").unwrap();
    let mut submission = Submission::single(vec![Some(1); mbi::ITEM_COUNT]);
    submission.0.insert("extra".to_string(), vec![]);
    assert!(matches!(
        instrument.score_submission(&submission),
        Err(ScoringError::UnknownPart { part, .. }) if part == "extra"
    ));
}
