use jf_common::extraction::{ExtractedRecord, FixtureExtractor, TextExtractor};
use jf_common::matching::match_job_with_candidate;
use jf_common::scoring::{aggregate, decide, Decision};
use jf_common::{
    CandidateEducation, CandidateExperience, CandidateProfile, CandidateSkills, JobMeta,
    JobRequirementFields, JobRequirements,
};

fn fixture_candidate() -> CandidateProfile {
    CandidateProfile {
        full_name: Some("Jordan Rivera".into()),
        experience: CandidateExperience {
            total_years: 5.0,
            current_role: Some("Frontend Engineer".into()),
        },
        education: CandidateEducation {
            highest_level: Some("Bachelor's Degree".into()),
        },
        skills: CandidateSkills {
            primary: vec!["React".into(), "TypeScript".into()],
            secondary: vec!["Node.js".into()],
            tools: vec!["Git".into()],
        },
        ..CandidateProfile::default()
    }
}

fn fixture_job() -> JobRequirements {
    JobRequirements {
        requirements: JobRequirementFields {
            required_skills: vec!["React".into(), "TypeScript".into()],
            preferred_skills: vec!["Node.js".into()],
            tools: vec!["Git".into()],
            minimum_experience_years: Some(3.0),
            education_level: Some("Bachelor's Degree".into()),
        },
        meta: JobMeta {
            visa_required: false,
            remote_allowed: true,
        },
    }
}

#[test]
fn full_pipeline_from_extracted_records_to_decision() {
    let candidate_extractor =
        FixtureExtractor::new(ExtractedRecord::Candidate(fixture_candidate()));
    let job_extractor = FixtureExtractor::new(ExtractedRecord::Job(fixture_job()));

    let candidate = match candidate_extractor.extract("resume text").unwrap() {
        ExtractedRecord::Candidate(profile) => profile,
        other => panic!("expected candidate record, got {other:?}"),
    };
    let job = match job_extractor.extract("job description").unwrap() {
        ExtractedRecord::Job(requirements) => requirements,
        other => panic!("expected job record, got {other:?}"),
    };

    let outcome = match_job_with_candidate(&job, &candidate);
    let final_score = aggregate(&outcome.breakdown);

    assert_eq!(final_score, 100);
    assert_eq!(decide(final_score), Decision::Apply);
    assert!(outcome.missing_skills.is_empty());
    assert!(outcome.notes.is_empty());
}

#[test]
fn hard_capped_pipeline_lands_in_improve() {
    let mut job = fixture_job();
    job.requirements.required_skills = vec![
        "Go".into(),
        "Rust".into(),
        "Kafka".into(),
        "React".into(),
    ];

    let outcome = match_job_with_candidate(&job, &fixture_candidate());
    let final_score = aggregate(&outcome.breakdown);

    assert!(outcome.breakdown.is_hard_capped);
    assert_eq!(final_score, 49);
    assert_eq!(decide(final_score), Decision::Improve);
    assert_eq!(
        outcome.missing_skills,
        vec!["Go".to_string(), "Rust".to_string(), "Kafka".to_string()]
    );
}

#[test]
fn repeated_evaluation_is_deterministic() {
    let job = fixture_job();
    let candidate = fixture_candidate();

    let first = match_job_with_candidate(&job, &candidate);
    let second = match_job_with_candidate(&job, &candidate);

    assert_eq!(first, second);
}
