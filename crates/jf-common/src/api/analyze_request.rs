use serde::Deserialize;

use crate::{CandidateProfile, JobRequirements};

/// HTTP analyze request: both records arrive already structured from the
/// upstream extraction step.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    pub candidate_profile: CandidateProfile,
    pub job_requirements: JobRequirements,
    /// Optional hint list of skills the candidate likely has; suppresses
    /// missing-skill entries without touching the score.
    #[serde(default)]
    pub likely_skills: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn likely_skills_default_to_empty() {
        let request: AnalyzeRequest = serde_json::from_str(
            r#"{ "candidateProfile": {}, "jobRequirements": {} }"#,
        )
        .unwrap();

        assert!(request.likely_skills.is_empty());
        assert_eq!(request.candidate_profile.experience.total_years, 0.0);
    }
}
