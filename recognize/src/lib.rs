//! Face enrollment and identification over an embedding store.
//!
//! # Pipeline
//!
//! 1. `FaceEmbedder::detect_and_embed`: image -> zero or more detections
//! 2. [`FaceRecognizer::enroll`]: first detection -> the identity's record
//! 3. [`rank_candidates`]: query embedding -> scored candidates over the
//!    whole enrolled population
//!
//! Matching is a linear scan: an identity's best distance is the minimum
//! Euclidean distance from the query to any of its embeddings, and
//! confidence is `1 - distance`. Populations are enrollment-scale, so no
//! index structure is involved.

mod config;
mod distance;
mod error;
mod matcher;
mod recognizer;
mod types;


pub use config::RecognizerConfig;
pub use distance::euclidean_distance;
pub use error::RecognizeError;
pub use matcher::{MatchCandidate, rank_candidates};
pub use recognizer::FaceRecognizer;
pub use types::{EnrollmentOutcome, MatchOutcome, TrainingOutcome};
