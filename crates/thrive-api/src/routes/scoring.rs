use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;

use thrive_core::models::survey::ScoredSurvey;
use thrive_instruments::responses::{MissingItem, Submission};
use thrive_instruments::session::{completion, SurveyState};
use thrive_instruments::Instrument;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Serialize)]
pub struct DraftStatus {
    state: SurveyState,
    missing: Vec<MissingItem>,
}

fn find<'a>(state: &'a AppState, id: &str) -> Result<&'a dyn Instrument, ApiError> {
    state
        .instrument(id)
        .ok_or_else(|| ApiError::NotFound(format!("instrument not found: {id}")))
}

/// Completion state of a draft submission, so callers can gate submission.
/// A draft is only reported `complete` if it would also score; out-of-range
/// values in a complete draft fail here with the same 422 as `/score`.
pub async fn draft_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(submission): Json<Submission>,
) -> Result<Json<DraftStatus>, ApiError> {
    let instrument = find(&state, &id)?;
    let responses = submission.decode(instrument.id(), instrument.parts())?;
    let draft_state = completion(instrument, &responses);
    if draft_state == SurveyState::Complete {
        instrument.score(&responses)?;
    }

    Ok(Json(DraftStatus {
        state: draft_state,
        missing: instrument.missing_items(&responses),
    }))
}

pub async fn score_submission(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(submission): Json<Submission>,
) -> Result<Json<ScoredSurvey>, ApiError> {
    let instrument = find(&state, &id)?;
    let result = instrument.score_submission(&submission)?;
    let scored = ScoredSurvey::new(instrument.id(), &result)?;

    tracing::info!(
        instrument = instrument.id(),
        survey_id = %scored.id,
        "survey_scored"
    );

    Ok(Json(scored))
}
