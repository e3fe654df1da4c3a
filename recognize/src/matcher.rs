use faceprint_store::EnrollmentRecord;
use serde::Serialize;

use crate::distance::euclidean_distance;

/// A scored candidate from a population scan. Derived, never stored.
#[derive(Debug, Clone, Serialize)]
pub struct MatchCandidate {
    pub identity: String,

    /// `1 - best_distance`. Higher means more similar; not a probability.
    pub confidence: f32,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

/// Scores `query` against every enrolled identity and returns the
/// candidates at or above `min_confidence`, best first.
///
/// An identity's best distance is the minimum Euclidean distance from the
/// query to any of its embeddings. Identities with no embeddings are
/// skipped; an empty population yields an empty result. Equal confidences
/// are broken by identity ascending, so repeated scans over a fixed
/// population rank identically.
pub fn rank_candidates(
    records: &[EnrollmentRecord],
    query: &[f32],
    min_confidence: f32,
) -> Vec<MatchCandidate> {
    let mut out = Vec::new();

    for rec in records {
        if rec.embeddings.is_empty() {
            continue;
        }

        let best = rec
            .embeddings
            .iter()
            .map(|e| euclidean_distance(query, e))
            .fold(f32::INFINITY, f32::min);

        let confidence = 1.0 - best;
        if confidence >= min_confidence {
            out.push(MatchCandidate {
                identity: rec.identity.clone(),
                confidence,
                display_name: rec.meta.display_name.clone(),
            });
        }
    }

    out.sort_by(|a, b| {
        b.confidence
            .partial_cmp(&a.confidence)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.identity.cmp(&b.identity))
    });
    out
}
