pub mod analyze_request;
pub mod analyze_response;

pub use analyze_request::AnalyzeRequest;
pub use analyze_response::{AnalyzeResponse, ANALYSIS_VERSION};
