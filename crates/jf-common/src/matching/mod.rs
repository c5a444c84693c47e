pub mod education;
pub mod engine;
pub mod weights;

pub use engine::{
    match_job_with_candidate, match_with_likely_skills, AnalysisBreakdown, MatchEngine,
    MatchOutcome,
};
