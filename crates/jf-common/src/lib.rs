pub mod api;
pub mod extraction;
pub mod logging;
pub mod matching;
pub mod scoring;
pub mod skill_normalizer;

use serde::{Deserialize, Serialize};

// Structured records produced by the upstream extraction step. Optional
// fields tolerate null; list fields default to empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CandidateProfile {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub experience: CandidateExperience,
    pub education: CandidateEducation,
    pub skills: CandidateSkills,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CandidateExperience {
    pub total_years: f64,
    pub current_role: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CandidateEducation {
    /// Free-text degree label, e.g. "Bachelor's Degree" or "none".
    pub highest_level: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CandidateSkills {
    pub primary: Vec<String>,
    pub secondary: Vec<String>,
    pub tools: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobRequirements {
    pub requirements: JobRequirementFields,
    pub meta: JobMeta,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobRequirementFields {
    pub required_skills: Vec<String>,
    pub preferred_skills: Vec<String>,
    pub tools: Vec<String>,
    /// Absent or zero means no experience floor.
    pub minimum_experience_years: Option<f64>,
    pub education_level: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobMeta {
    pub visa_required: bool,
    pub remote_allowed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn candidate_profile_tolerates_nulls_and_missing_lists() {
        let profile: CandidateProfile = serde_json::from_str(
            r#"{
                "fullName": null,
                "experience": { "totalYears": 2.5 },
                "skills": { "primary": ["Rust"] }
            }"#,
        )
        .unwrap();

        assert_eq!(profile.full_name, None);
        assert_eq!(profile.experience.total_years, 2.5);
        assert_eq!(profile.skills.primary, vec!["Rust".to_string()]);
        assert!(profile.skills.secondary.is_empty());
        assert_eq!(profile.education.highest_level, None);
    }

    #[test]
    fn job_requirements_uses_camel_case_wire_names() {
        let job: JobRequirements = serde_json::from_str(
            r#"{
                "requirements": {
                    "requiredSkills": ["React"],
                    "minimumExperienceYears": 3,
                    "educationLevel": "Bachelor's Degree"
                },
                "meta": { "visaRequired": true, "remoteAllowed": false }
            }"#,
        )
        .unwrap();

        assert_eq!(job.requirements.required_skills, vec!["React".to_string()]);
        assert_eq!(job.requirements.minimum_experience_years, Some(3.0));
        assert!(job.meta.visa_required);
        assert!(!job.meta.remote_allowed);
    }
}
