use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::education::education_rank;
use super::weights::{ScoreWeights, STANDARD_WEIGHTS, VISA_NO_REMOTE_PENALTY};
use crate::skill_normalizer::{normalize_skill, normalize_skill_set};
use crate::{CandidateProfile, JobRequirements};

/// Weighted sub-scores plus the informational sidecars. `job_reality` and
/// `competition` are reported but never summed into the final score;
/// `competition` is reserved for a capability this engine does not implement
/// and stays 0.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisBreakdown {
    pub required_skills: i32,
    pub preferred_skills: i32,
    pub tools: i32,
    pub experience: i32,
    pub education: i32,
    pub eligibility: i32,
    pub job_reality: i32,
    pub competition: i32,
    pub is_hard_capped: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatchOutcome {
    pub breakdown: AnalysisBreakdown,
    /// Required skills (original labels, job-list order) not found in the
    /// candidate's normalized skill set.
    pub missing_skills: Vec<String>,
    /// Missing labels suppressed by the likely-skills hint list; shown for
    /// context only and never part of the score.
    pub implied_skills: Vec<String>,
    pub notes: Vec<String>,
}

/// Evaluate a (job, candidate) pair with the standard weights.
pub fn match_job_with_candidate(
    job: &JobRequirements,
    candidate: &CandidateProfile,
) -> MatchOutcome {
    MatchEngine::new(STANDARD_WEIGHTS).evaluate(job, candidate)
}

/// Same as [`match_job_with_candidate`], with a likely-skills hint list that
/// suppresses missing-skill entries the candidate almost certainly covers.
pub fn match_with_likely_skills(
    job: &JobRequirements,
    candidate: &CandidateProfile,
    likely_skills: &[String],
) -> MatchOutcome {
    MatchEngine::new(STANDARD_WEIGHTS).evaluate_with_hints(job, candidate, likely_skills)
}

pub struct MatchEngine {
    weights: ScoreWeights,
}

impl MatchEngine {
    pub fn new(weights: ScoreWeights) -> Self {
        Self { weights }
    }

    pub fn evaluate(&self, job: &JobRequirements, candidate: &CandidateProfile) -> MatchOutcome {
        self.evaluate_with_hints(job, candidate, &[])
    }

    pub fn evaluate_with_hints(
        &self,
        job: &JobRequirements,
        candidate: &CandidateProfile,
        likely_skills: &[String],
    ) -> MatchOutcome {
        let weights = &self.weights;
        let mut notes: Vec<String> = Vec::new();

        let candidate_keys = candidate_skill_keys(candidate);

        // Required skills drive three outputs at once: the weighted
        // sub-score, the job-reality percentage, and the hard cap.
        let required = &job.requirements.required_skills;
        let (required_score, job_reality, is_hard_capped, unmatched) = if required.is_empty() {
            // Absence of a requirement cannot be held against the candidate.
            (weights.required_skills, 100, false, Vec::new())
        } else {
            let matched = required
                .iter()
                .filter(|s| candidate_keys.contains(&normalize_skill(s)))
                .count();
            let match_ratio = matched as f64 / required.len() as f64;
            let hard_capped = match_ratio < 0.5;

            if hard_capped {
                notes.push(
                    "Job Reality: Missing more than 50% of required skills. \
                     Final score capped at 49."
                        .to_string(),
                );
            }

            let unmatched: Vec<String> = required
                .iter()
                .filter(|s| !candidate_keys.contains(&normalize_skill(s)))
                .cloned()
                .collect();

            (
                match_ratio * weights.required_skills,
                (match_ratio * 100.0).round() as i32,
                hard_capped,
                unmatched,
            )
        };

        let (missing_skills, implied_skills) = partition_by_hints(unmatched, likely_skills);
        if !missing_skills.is_empty() {
            notes.push(format!(
                "Missing {} required skill{}",
                missing_skills.len(),
                if missing_skills.len() > 1 { "s" } else { "" }
            ));
        }

        let preferred_score = ratio_score(
            &job.requirements.preferred_skills,
            &candidate_keys,
            weights.preferred_skills,
        );
        let tools_score = ratio_score(&job.requirements.tools, &candidate_keys, weights.tools);

        // Experience: no floor (absent or zero) means full credit; the ratio
        // branch only runs below the floor, so it never exceeds 1.
        let min_years = job.requirements.minimum_experience_years.unwrap_or(0.0);
        let candidate_years = candidate.experience.total_years;
        let experience_score = if min_years > 0.0 {
            if candidate_years >= min_years {
                weights.experience
            } else {
                notes.push(format!(
                    "Experience Gap: Candidate has {} years, but {} required.",
                    candidate_years, min_years
                ));
                candidate_years / min_years * weights.experience
            }
        } else {
            weights.experience
        };

        // Education: full credit at or above the required rank (including
        // rank 0 vs rank 0); partial credit needs a recognizable degree.
        let job_rank = education_rank(job.requirements.education_level.as_deref());
        let candidate_rank = education_rank(candidate.education.highest_level.as_deref());
        let education_score = if candidate_rank >= job_rank {
            weights.education
        } else if candidate_rank > 0 {
            notes.push(format!(
                "Education Gap: Level ({}) is lower than required.",
                candidate.education.highest_level.as_deref().unwrap_or("unknown")
            ));
            candidate_rank as f64 / job_rank as f64 * weights.education
        } else {
            0.0
        };

        let mut eligibility_score = weights.eligibility;
        if job.meta.visa_required && !job.meta.remote_allowed {
            eligibility_score -= VISA_NO_REMOTE_PENALTY;
            notes.push("Eligibility Note: Job requires visa and is not remote.".to_string());
        }

        MatchOutcome {
            breakdown: AnalysisBreakdown {
                required_skills: round_points(required_score),
                preferred_skills: round_points(preferred_score),
                tools: round_points(tools_score),
                experience: round_points(experience_score),
                education: round_points(education_score),
                eligibility: round_points(eligibility_score),
                job_reality,
                competition: 0,
                is_hard_capped,
            },
            missing_skills,
            implied_skills,
            notes,
        }
    }
}

fn candidate_skill_keys(candidate: &CandidateProfile) -> HashSet<String> {
    let mut keys = normalize_skill_set(&candidate.skills.primary);
    keys.extend(normalize_skill_set(&candidate.skills.secondary));
    keys.extend(normalize_skill_set(&candidate.skills.tools));
    keys
}

/// Matched-fraction score for the bonus-only categories: an empty job list
/// awards the full weight, and nothing here ever penalizes.
fn ratio_score(job_list: &[String], candidate_keys: &HashSet<String>, weight: f64) -> f64 {
    if job_list.is_empty() {
        return weight;
    }

    let matched = job_list
        .iter()
        .filter(|s| candidate_keys.contains(&normalize_skill(s)))
        .count();
    matched as f64 / job_list.len() as f64 * weight
}

/// Split unmatched required labels into truly-missing vs hint-covered. A hint
/// covers a label when the normalized keys are equal, or both are at least 4
/// chars and one contains the other.
fn partition_by_hints(
    unmatched: Vec<String>,
    likely_skills: &[String],
) -> (Vec<String>, Vec<String>) {
    if unmatched.is_empty() || likely_skills.is_empty() {
        return (unmatched, Vec::new());
    }

    let likely_keys: Vec<String> = likely_skills
        .iter()
        .map(|s| normalize_skill(s))
        .filter(|k| !k.is_empty())
        .collect();

    let mut missing = Vec::new();
    let mut implied = Vec::new();
    for label in unmatched {
        if hint_covers(&normalize_skill(&label), &likely_keys) {
            implied.push(label);
        } else {
            missing.push(label);
        }
    }
    (missing, implied)
}

fn hint_covers(missing_key: &str, likely_keys: &[String]) -> bool {
    if missing_key.is_empty() {
        return false;
    }

    likely_keys.iter().any(|likely| {
        likely == missing_key
            || (missing_key.len() >= 4
                && likely.len() >= 4
                && (missing_key.contains(likely.as_str()) || likely.contains(missing_key)))
    })
}

/// Round half away from zero; sub-scores are non-negative by construction.
fn round_points(value: f64) -> i32 {
    value.round() as i32
}
