use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::matching::{AnalysisBreakdown, MatchOutcome};
use crate::scoring::{aggregate, decide, Decision};

pub const ANALYSIS_VERSION: &str = "v1";

/// Fit assessment returned to the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResponse {
    /// Aggregated 0-100 fit score (hard cap already applied).
    pub final_score: i32,
    pub decision: Decision,
    pub breakdown: AnalysisBreakdown,
    /// Required skills not found, original labels in job-list order.
    pub missing_skills: Vec<String>,
    /// Hint-suppressed labels, shown for context only.
    pub implied_skills: Vec<String>,
    pub notes: Vec<String>,
    pub analyzed_at: DateTime<Utc>,
    pub analysis_version: String,
}

impl AnalyzeResponse {
    /// Assemble the response from a match outcome: aggregate, decide, attach
    /// the breakdown and explanations unchanged.
    pub fn from_outcome(outcome: MatchOutcome, analyzed_at: DateTime<Utc>) -> Self {
        let final_score = aggregate(&outcome.breakdown);

        Self {
            final_score,
            decision: decide(final_score),
            breakdown: outcome.breakdown,
            missing_skills: outcome.missing_skills,
            implied_skills: outcome.implied_skills,
            notes: outcome.notes,
            analyzed_at,
            analysis_version: ANALYSIS_VERSION.to_string(),
        }
    }
}
