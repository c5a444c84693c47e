use thiserror::Error;

use crate::{CandidateProfile, JobRequirements};

/// Failure modes of the upstream document/extraction collaborators.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unsupported file type: {0}")]
    InvalidType(String),
    #[error("document contained no extractable text")]
    EmptyContent,
    #[error("extraction failed: {0}")]
    Failed(String),
}

/// A structured record recovered from free text.
#[derive(Debug, Clone, PartialEq)]
pub enum ExtractedRecord {
    Candidate(CandidateProfile),
    Job(JobRequirements),
}

/// Injectable extraction capability. The matching engine never calls this
/// itself; hosts wire an implementation in front of it, and tests substitute
/// a deterministic stub.
pub trait TextExtractor {
    fn extract(&self, text: &str) -> Result<ExtractedRecord, ParseError>;
}

/// Deterministic extractor that returns a preloaded record. Rejects blank
/// input the way the real collaborators do.
#[derive(Debug, Clone)]
pub struct FixtureExtractor {
    record: ExtractedRecord,
}

impl FixtureExtractor {
    pub fn new(record: ExtractedRecord) -> Self {
        Self { record }
    }
}

impl TextExtractor for FixtureExtractor {
    fn extract(&self, text: &str) -> Result<ExtractedRecord, ParseError> {
        if text.trim().is_empty() {
            return Err(ParseError::EmptyContent);
        }
        Ok(self.record.clone())
    }
}
