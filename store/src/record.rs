use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::identity::Identity;

/// Metadata carried alongside an identity's embeddings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordMeta {
    /// Set on first enrollment, never changed afterwards.
    pub created_at: DateTime<Utc>,

    /// Refreshed on every mutation.
    pub updated_at: DateTime<Utc>,

    /// Always equal to the number of stored embeddings.
    pub embedding_count: usize,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    /// Bounded extension point for adapter-defined keys.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub extra: HashMap<String, serde_json::Value>,
}

/// All enrolled embeddings for one identity, plus metadata.
///
/// Owned exclusively by the [`EncodingStore`](crate::EncodingStore);
/// values handed out by the store are snapshots. Embeddings keep their
/// enrollment order and are never deduplicated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrollmentRecord {
    pub identity: String,
    pub embeddings: Vec<Vec<f32>>,
    pub meta: RecordMeta,
}

impl EnrollmentRecord {
    pub(crate) fn new(identity: &Identity, now: DateTime<Utc>) -> Self {
        Self {
            identity: identity.as_str().to_string(),
            embeddings: Vec::new(),
            meta: RecordMeta {
                created_at: now,
                updated_at: now,
                embedding_count: 0,
                display_name: None,
                extra: HashMap::new(),
            },
        }
    }

    /// Appends one embedding and refreshes the mutation metadata.
    pub(crate) fn push_embedding(&mut self, embedding: Vec<f32>, now: DateTime<Utc>) {
        self.embeddings.push(embedding);
        self.meta.updated_at = now;
        self.meta.embedding_count = self.embeddings.len();
    }

    pub fn summary(&self) -> EnrollmentSummary {
        EnrollmentSummary {
            identity: self.identity.clone(),
            embedding_count: self.meta.embedding_count,
            created_at: self.meta.created_at,
            updated_at: self.meta.updated_at,
            display_name: self.meta.display_name.clone(),
            extra: self.meta.extra.clone(),
        }
    }
}

/// One row of [`EncodingStore::list_all`](crate::EncodingStore::list_all).
#[derive(Debug, Clone, Serialize)]
pub struct EnrollmentSummary {
    pub identity: String,
    pub embedding_count: usize,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub extra: HashMap<String, serde_json::Value>,
}
