//! Face detection and embedding extraction interface.
//!
//! This crate defines the boundary between the recognition core and the
//! model runtime that turns pixels into embedding vectors. The core never
//! sees model internals: it hands an [`ImageFrame`] to a [`FaceEmbedder`]
//! and gets back zero or more [`Detection`]s, each pairing a bounding box
//! with a fixed-length embedding.

mod embed;
mod error;
mod image;

pub use embed::{BoundingBox, Detection, FaceEmbedder};
pub use error::EmbedError;
pub use image::ImageFrame;
