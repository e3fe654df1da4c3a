use std::sync::Arc;

use faceprint_embed::{FaceEmbedder, ImageFrame};
use faceprint_store::EncodingStore;

use crate::config::RecognizerConfig;
use crate::error::RecognizeError;
use crate::matcher::{MatchCandidate, rank_candidates};
use crate::types::{EnrollmentOutcome, MatchOutcome, TrainingOutcome};

/// Face enrollment and identification over a shared encoding store.
///
/// Suspends only at the embedder boundary; store access is synchronous,
/// so an aborted request can never leave a half-applied append.
pub struct FaceRecognizer {
    store: Arc<EncodingStore>,
    embedder: Arc<dyn FaceEmbedder>,
    cfg: RecognizerConfig,
}

impl FaceRecognizer {
    /// Creates a recognizer. Zeroed config fields fall back to defaults.
    pub fn new(
        store: Arc<EncodingStore>,
        embedder: Arc<dyn FaceEmbedder>,
        cfg: RecognizerConfig,
    ) -> Self {
        Self {
            store,
            embedder,
            cfg: cfg.with_defaults(),
        }
    }

    pub fn store(&self) -> &EncodingStore {
        &self.store
    }

    pub fn config(&self) -> &RecognizerConfig {
        &self.cfg
    }

    /// Detects the face in `image` and appends its embedding to
    /// `identity`'s record.
    ///
    /// When the frame holds several faces, only the first detection is
    /// enrolled; multi-subject enrollment is out of scope, and the face
    /// count in the outcome surfaces the choice.
    pub async fn enroll(
        &self,
        image: &ImageFrame,
        identity: &str,
    ) -> Result<EnrollmentOutcome, RecognizeError> {
        let (embedding, faces_detected) = self.embed_first_face(image).await?;
        let rec = self.store.append_embedding(identity, embedding)?;
        if faces_detected > 1 {
            tracing::debug!(
                identity = %rec.identity,
                faces_detected,
                "multiple faces in frame, first enrolled"
            );
        }
        Ok(EnrollmentOutcome {
            identity: rec.identity,
            embedding_count: rec.meta.embedding_count,
            faces_detected,
        })
    }

    /// Matches the face in `image` against the whole enrolled population.
    pub async fn identify(&self, image: &ImageFrame) -> Result<MatchOutcome, RecognizeError> {
        let (embedding, faces_detected) = self.embed_first_face(image).await?;
        let candidates = self.match_embedding(&embedding);
        Ok(MatchOutcome {
            faces_detected,
            candidates,
        })
    }

    /// Scores a query embedding against every enrolled identity.
    /// An empty population yields an empty result, not an error.
    pub fn match_embedding(&self, query: &[f32]) -> Vec<MatchCandidate> {
        rank_candidates(&self.store.records(), query, self.cfg.min_confidence)
    }

    /// Enrolls each image for `identity`, in input order.
    ///
    /// Individual failures (no face, embedder fault, bad identity,
    /// persistence error) are counted and logged, never propagated, and
    /// the remaining images are still processed.
    pub async fn train(&self, identity: &str, images: &[ImageFrame]) -> TrainingOutcome {
        let mut processed = 0;
        for (i, image) in images.iter().enumerate() {
            match self.enroll(image, identity).await {
                Ok(_) => processed += 1,
                Err(e) => {
                    tracing::warn!(identity, image = i, error = %e, "training image skipped");
                }
            }
        }
        TrainingOutcome {
            identity: identity.to_string(),
            processed,
            total: images.len(),
        }
    }

    /// First detection wins. A detection with an empty embedding is a
    /// model fault, not a miss.
    async fn embed_first_face(
        &self,
        image: &ImageFrame,
    ) -> Result<(Vec<f32>, usize), RecognizeError> {
        let detections = self.embedder.detect_and_embed(image).await?;
        let faces_detected = detections.len();
        let first = detections
            .into_iter()
            .next()
            .ok_or(RecognizeError::NoFaceDetected)?;
        if first.embedding.is_empty() {
            return Err(RecognizeError::EmbeddingFailure);
        }
        Ok((first.embedding, faces_detected))
    }
}
