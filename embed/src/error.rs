use thiserror::Error;

#[derive(Error, Debug)]
pub enum EmbedError {
    #[error("embed: invalid image buffer: expected {expected} bytes, got {got}")]
    InvalidImage { expected: usize, got: usize },

    #[error("embed: model error: {0}")]
    Model(String),
}
