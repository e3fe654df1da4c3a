//! Durable face-embedding storage keyed by caller identity.
//!
//! One MessagePack record file per enrolled identity lives under a single
//! storage root, mirrored by an in-memory cache that serves all reads.
//! A mutation becomes visible in the cache only after it has landed on
//! disk, so the two views cannot silently diverge.
//!
//! Identity strings are validated before any path is built from them:
//! they are reduced to their final path segment, length-capped, and
//! restricted to `[a-zA-Z0-9_-]`. See [`Identity::validate`].

mod error;
mod identity;
mod record;
mod store;

pub use error::StoreError;
pub use identity::{Identity, MAX_IDENTITY_LEN};
pub use record::{EnrollmentRecord, EnrollmentSummary, RecordMeta};
pub use store::EncodingStore;
