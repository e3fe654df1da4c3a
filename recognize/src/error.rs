use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecognizeError {
    #[error("recognize: no face detected in image")]
    NoFaceDetected,

    #[error("recognize: detection produced no usable embedding")]
    EmbeddingFailure,

    #[error("recognize: embed error: {0}")]
    Embed(#[from] faceprint_embed::EmbedError),

    #[error("recognize: store error: {0}")]
    Store(#[from] faceprint_store::StoreError),
}
