use serde::Deserialize;

/// Controls matching behavior.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RecognizerConfig {
    /// Minimum confidence for a candidate to appear in match results.
    ///
    /// Confidence is `1 - best_distance`. With unit-normalized embeddings
    /// the distance range `[0, 2]` puts confidence in `[-1, 1]`; negative
    /// values simply fail the floor. Default: 0.7.
    pub min_confidence: f32,

    /// Detector-side distance tolerance, exposed for adapters that
    /// configure the embedder. The core itself applies only
    /// `min_confidence`. Default: 0.6.
    pub distance_tolerance: f32,
}

impl RecognizerConfig {
    /// Replaces zeroed fields with their defaults.
    pub fn with_defaults(mut self) -> Self {
        if self.min_confidence == 0.0 {
            self.min_confidence = 0.7;
        }
        if self.distance_tolerance == 0.0 {
            self.distance_tolerance = 0.6;
        }
        self
    }
}

impl Default for RecognizerConfig {
    fn default() -> Self {
        Self {
            min_confidence: 0.7,
            distance_tolerance: 0.6,
        }
    }
}
