use axum::{extract::State, Json};
use chrono::Utc;
use tracing::info;

use jf_common::api::{AnalyzeRequest, AnalyzeResponse};
use jf_common::matching::match_with_likely_skills;

use crate::error::ApiError;
use crate::SharedState;

/// Run one fit analysis for an already-extracted (candidate, job) pair.
pub async fn analyze(
    State(_state): State<SharedState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    validate(&request)?;

    let outcome = match_with_likely_skills(
        &request.job_requirements,
        &request.candidate_profile,
        &request.likely_skills,
    );
    let response = AnalyzeResponse::from_outcome(outcome, Utc::now());

    info!(
        final_score = response.final_score,
        decision = %response.decision,
        hard_capped = response.breakdown.is_hard_capped,
        missing = response.missing_skills.len(),
        "analysis complete"
    );

    Ok(Json(response))
}

/// Shape validation the engine itself does not perform: the host rejects
/// records the upstream extractor should never produce.
fn validate(request: &AnalyzeRequest) -> Result<(), ApiError> {
    if request.candidate_profile.experience.total_years < 0.0 {
        return Err(ApiError::BadRequest(
            "experience.totalYears must be non-negative".into(),
        ));
    }

    if let Some(years) = request.job_requirements.requirements.minimum_experience_years {
        if years < 0.0 {
            return Err(ApiError::BadRequest(
                "requirements.minimumExperienceYears must be non-negative".into(),
            ));
        }
    }

    Ok(())
}
