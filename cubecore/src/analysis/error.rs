use std::fmt::Display;
use thiserror::Error;

/// Per-event failure of the analysis. None of these abort a run, the caller
/// skips the rest of the event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AnalysisError {
    /// The algorithm result names no object container, or none of them holds any object.
    #[error("Object container size = 0")]
    EmptyInput,
    /// No anti-muon track, or its front state sits at the spatial origin.
    #[error("no vertex candidate")]
    NoVertexCandidate,
    /// Every object is an anti-muon, a muon descendant or unclassifiable.
    #[error("no first object candidate")]
    NoFirstObjectCandidate,
}

impl AnalysisError {
    pub fn reason(&self) -> FailureReason {
        match self {
            AnalysisError::EmptyInput => FailureReason::EmptyInput,
            AnalysisError::NoVertexCandidate => FailureReason::NoVertexCandidate,
            AnalysisError::NoFirstObjectCandidate => FailureReason::NoFirstObjectCandidate,
        }
    }
}

/// Stable reason code of an `AnalysisError`, for tallies and summaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureReason {
    EmptyInput,
    NoVertexCandidate,
    NoFirstObjectCandidate,
}

impl FailureReason {
    pub fn to_i32(&self) -> i32 {
        match self {
            FailureReason::EmptyInput => 1,
            FailureReason::NoVertexCandidate => 2,
            FailureReason::NoFirstObjectCandidate => 3,
        }
    }

    pub fn to_str(&self) -> &str {
        match self {
            FailureReason::EmptyInput => "EMPTY_INPUT",
            FailureReason::NoVertexCandidate => "NO_VERTEX_CANDIDATE",
            FailureReason::NoFirstObjectCandidate => "NO_FIRST_OBJECT_CANDIDATE",
        }
    }
}

impl Display for FailureReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_str())
    }
}
