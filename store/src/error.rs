use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("store: invalid identity: {0}")]
    InvalidIdentity(String),

    #[error("store: path traversal detected")]
    PathTraversal,

    #[error("store: empty embedding")]
    EmptyEmbedding,

    #[error("store: dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    #[error("store: persistence error: {0}")]
    Persistence(String),

    #[error("store: serialization error: {0}")]
    Serialization(String),
}

impl From<std::io::Error> for StoreError {
    fn from(e: std::io::Error) -> Self {
        StoreError::Persistence(e.to_string())
    }
}
