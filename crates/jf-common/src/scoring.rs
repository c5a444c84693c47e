use serde::{Deserialize, Serialize};
use strum::Display;

use crate::matching::AnalysisBreakdown;

/// Ceiling applied to the final score when required-skill coverage fell
/// below 50%.
pub const HARD_CAP_CEILING: i32 = 49;

/// Decision thresholds, evaluated highest first.
pub const APPLY_THRESHOLD: i32 = 70;
pub const APPLY_WITH_IMPROVEMENTS_THRESHOLD: i32 = 50;
pub const IMPROVE_THRESHOLD: i32 = 35;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Decision {
    Apply,
    ApplyWithImprovements,
    Improve,
    Skip,
}

/// Sum the six weighted sub-scores into the final 0-100 fit score.
///
/// `job_reality` and `competition` are informational sidecars and are NOT
/// folded in; the hard cap clamps the sum to [`HARD_CAP_CEILING`].
pub fn aggregate(breakdown: &AnalysisBreakdown) -> i32 {
    let total = breakdown.required_skills
        + breakdown.preferred_skills
        + breakdown.tools
        + breakdown.experience
        + breakdown.education
        + breakdown.eligibility;

    let total = if breakdown.is_hard_capped {
        total.min(HARD_CAP_CEILING)
    } else {
        total
    };

    clamp_score(total)
}

/// Map a final score onto the four-valued recommendation. Total over the
/// integer domain; thresholds are fixed and non-overlapping.
pub fn decide(score: i32) -> Decision {
    if score >= APPLY_THRESHOLD {
        Decision::Apply
    } else if score >= APPLY_WITH_IMPROVEMENTS_THRESHOLD {
        Decision::ApplyWithImprovements
    } else if score >= IMPROVE_THRESHOLD {
        Decision::Improve
    } else {
        Decision::Skip
    }
}

/// Bound a score into [0, 100].
pub fn clamp_score(score: i32) -> i32 {
    score.clamp(0, 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn breakdown(values: [i32; 6], is_hard_capped: bool) -> AnalysisBreakdown {
        AnalysisBreakdown {
            required_skills: values[0],
            preferred_skills: values[1],
            tools: values[2],
            experience: values[3],
            education: values[4],
            eligibility: values[5],
            job_reality: 100,
            competition: 0,
            is_hard_capped,
        }
    }

    #[test]
    fn perfect_breakdown_sums_to_one_hundred() {
        let score = aggregate(&breakdown([30, 10, 10, 25, 15, 10], false));
        assert_eq!(score, 100);
    }

    #[test]
    fn aggregate_ignores_informational_sidecars() {
        // Documented aggregation policy: only the six weighted categories
        // count; job_reality and competition are reported, never summed.
        let mut b = breakdown([10, 5, 5, 10, 5, 5], false);
        b.job_reality = 100;
        b.competition = 100;

        assert_eq!(aggregate(&b), 40);
    }

    #[test]
    fn hard_cap_clamps_even_a_maximal_sum() {
        let score = aggregate(&breakdown([30, 10, 10, 25, 15, 10], true));
        assert_eq!(score, HARD_CAP_CEILING);
    }

    #[test]
    fn hard_cap_leaves_lower_sums_untouched() {
        let score = aggregate(&breakdown([8, 10, 10, 5, 0, 10], true));
        assert_eq!(score, 43);
    }

    #[test]
    fn decision_boundaries() {
        assert_eq!(decide(70), Decision::Apply);
        assert_eq!(decide(69), Decision::ApplyWithImprovements);
        assert_eq!(decide(50), Decision::ApplyWithImprovements);
        assert_eq!(decide(49), Decision::Improve);
        assert_eq!(decide(35), Decision::Improve);
        assert_eq!(decide(34), Decision::Skip);
        assert_eq!(decide(0), Decision::Skip);
        assert_eq!(decide(100), Decision::Apply);
    }

    #[test]
    fn decision_serializes_screaming_snake_case() {
        assert_eq!(
            serde_json::to_string(&Decision::ApplyWithImprovements).unwrap(),
            "\"APPLY_WITH_IMPROVEMENTS\""
        );
        assert_eq!(Decision::Apply.to_string(), "APPLY");
    }

    #[test]
    fn clamp_bounds_scores() {
        assert_eq!(clamp_score(-3), 0);
        assert_eq!(clamp_score(104), 100);
        assert_eq!(clamp_score(77), 77);
    }
}
