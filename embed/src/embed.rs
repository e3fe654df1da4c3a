use serde::{Deserialize, Serialize};

use crate::error::EmbedError;
use crate::image::ImageFrame;

/// Location of a detected face within an image.
///
/// Coordinates are pixel offsets in the source frame, in the
/// top/right/bottom/left ordering used by dlib-style detectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub left: u32,
}

/// One detected face: where it is and what it embeds to.
#[derive(Debug, Clone)]
pub struct Detection {
    /// Face location in the source frame.
    pub bbox: BoundingBox,

    /// Dense embedding of the face, length [`FaceEmbedder::dimension`].
    pub embedding: Vec<f32>,
}

/// FaceEmbedder locates faces in an image and converts each into a dense
/// f32 embedding vector.
///
/// Detections are returned in detector order; an image with no faces yields
/// an empty vec, which is not an error at this layer. Embedding
/// dimensionality is fixed per implementation and identical across calls.
///
/// Implementations must be safe for concurrent use (Send + Sync).
#[async_trait::async_trait]
pub trait FaceEmbedder: Send + Sync {
    /// Detect all faces in the frame and embed each one.
    async fn detect_and_embed(&self, image: &ImageFrame) -> Result<Vec<Detection>, EmbedError>;

    /// Return the dimensionality of the embedding vectors (e.g., 128).
    fn dimension(&self) -> usize;
}
