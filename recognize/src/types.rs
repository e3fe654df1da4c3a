use serde::Serialize;

use crate::matcher::MatchCandidate;

/// Result of a single-image enrollment.
#[derive(Debug, Clone, Serialize)]
pub struct EnrollmentOutcome {
    pub identity: String,

    /// Total embeddings now stored for the identity.
    pub embedding_count: usize,

    /// Faces found in the frame. Only the first is enrolled; callers can
    /// use this to warn on multi-face images.
    pub faces_detected: usize,
}

/// Result of matching a query image against the enrolled population.
#[derive(Debug, Clone, Serialize)]
pub struct MatchOutcome {
    /// Faces found in the query frame. Only the first is matched.
    pub faces_detected: usize,

    /// Candidates at or above the confidence floor, best first.
    pub candidates: Vec<MatchCandidate>,
}

impl MatchOutcome {
    /// The top-ranked candidate, if any cleared the floor.
    pub fn best_match(&self) -> Option<&MatchCandidate> {
        self.candidates.first()
    }
}

/// Result of a multi-image training run. Per-image failures are counted,
/// never raised, so a run always completes.
#[derive(Debug, Clone, Serialize)]
pub struct TrainingOutcome {
    pub identity: String,
    pub processed: usize,
    pub total: usize,
}

impl TrainingOutcome {
    /// True if at least one image enrolled.
    pub fn succeeded(&self) -> bool {
        self.processed > 0
    }
}
