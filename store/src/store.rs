use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use chrono::Utc;

use crate::error::StoreError;
use crate::identity::Identity;
use crate::record::{EnrollmentRecord, EnrollmentSummary};

/// File extension for persisted enrollment records.
const RECORD_EXT: &str = "bin";

/// Durable identity-to-embeddings map with a disk-backed in-memory cache.
///
/// One MessagePack file per enrolled identity lives under the storage
/// root; the cache mirrors the full on-disk state and serves all reads.
/// Mutations persist to disk first and publish to the cache only on
/// success, so readers can never observe a record that disk does not
/// hold. The write lock is held across the whole persist-publish
/// sequence; concurrent appends to the same identity cannot lose an
/// embedding.
///
/// Thread-safe: all methods can be called concurrently.
pub struct EncodingStore {
    root: PathBuf,
    records: RwLock<HashMap<String, EnrollmentRecord>>,
}

impl EncodingStore {
    /// Opens the store rooted at `root`, creating the directory if needed,
    /// and loads every persisted record into the cache. Runs once,
    /// synchronously, before the store is shared with request handlers.
    ///
    /// A record file that fails to read or decode is skipped and logged;
    /// it does not abort startup.
    pub fn open(root: impl AsRef<Path>) -> Result<Self, StoreError> {
        fs::create_dir_all(root.as_ref())?;
        let root = fs::canonicalize(root.as_ref())?;
        let records = load_records(&root)?;
        tracing::info!(count = records.len(), "loaded enrolled identities");
        Ok(Self {
            root,
            records: RwLock::new(records),
        })
    }

    /// The canonicalized storage root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the identity's record, or None if not enrolled.
    /// Cache read only; never touches disk.
    pub fn get(&self, identity: &str) -> Option<EnrollmentRecord> {
        self.records.read().unwrap().get(identity).cloned()
    }

    /// Number of enrolled identities.
    pub fn len(&self) -> usize {
        self.records.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Appends one embedding to the identity's record, creating the record
    /// on first enrollment, and returns the updated record.
    ///
    /// The record is written to disk before the cache sees it; on a
    /// persistence failure the cache keeps its previous state and the
    /// error is returned.
    pub fn append_embedding(
        &self,
        identity: &str,
        embedding: Vec<f32>,
    ) -> Result<EnrollmentRecord, StoreError> {
        let id = Identity::validate(identity)?;
        if embedding.is_empty() {
            return Err(StoreError::EmptyEmbedding);
        }
        let path = self.record_path(&id)?;

        let mut records = self.records.write().unwrap();
        let now = Utc::now();
        let mut rec = match records.get(id.as_str()) {
            Some(existing) => {
                if let Some(first) = existing.embeddings.first() {
                    if embedding.len() != first.len() {
                        return Err(StoreError::DimensionMismatch {
                            expected: first.len(),
                            got: embedding.len(),
                        });
                    }
                }
                existing.clone()
            }
            None => EnrollmentRecord::new(&id, now),
        };
        rec.push_embedding(embedding, now);

        persist(&path, &rec)?;
        records.insert(id.as_str().to_string(), rec.clone());
        Ok(rec)
    }

    /// Removes the identity's record from disk and cache.
    ///
    /// Idempotent: deleting an identity that was never enrolled (or was
    /// already deleted) succeeds.
    pub fn delete(&self, identity: &str) -> Result<(), StoreError> {
        let id = Identity::validate(identity)?;
        let path = self.record_path(&id)?;

        let mut records = self.records.write().unwrap();
        match fs::remove_file(&path) {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => return Err(e.into()),
        }
        records.remove(id.as_str());
        Ok(())
    }

    /// Snapshot of every record's metadata, sorted by identity.
    pub fn list_all(&self) -> Vec<EnrollmentSummary> {
        let records = self.records.read().unwrap();
        let mut out: Vec<EnrollmentSummary> = records.values().map(|r| r.summary()).collect();
        out.sort_by(|a, b| a.identity.cmp(&b.identity));
        out
    }

    /// Consistent snapshot of every record, for population scans.
    pub fn records(&self) -> Vec<EnrollmentRecord> {
        self.records.read().unwrap().values().cloned().collect()
    }

    /// Maps a validated identity to its record file. A pure function of
    /// the identity, shared by the write, load and delete paths.
    fn record_path(&self, id: &Identity) -> Result<PathBuf, StoreError> {
        let path = self.root.join(format!("{}.{RECORD_EXT}", id.as_str()));
        // Validation pins the charset already; re-check containment anyway.
        if path.parent() != Some(self.root.as_path()) {
            return Err(StoreError::PathTraversal);
        }
        Ok(path)
    }
}

/// Serializes the record next to its final path, then renames it into
/// place. Partial writes never land at the final path.
fn persist(path: &Path, rec: &EnrollmentRecord) -> Result<(), StoreError> {
    let data = rmp_serde::to_vec_named(rec).map_err(|e| StoreError::Serialization(e.to_string()))?;
    let tmp = path.with_extension("tmp");
    fs::write(&tmp, &data)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

fn load_records(root: &Path) -> Result<HashMap<String, EnrollmentRecord>, StoreError> {
    let mut records = HashMap::new();

    for entry in fs::read_dir(root)?.flatten() {
        let path = entry.path();
        if path.extension().and_then(|s| s.to_str()) != Some(RECORD_EXT) {
            continue;
        }
        let data = match fs::read(&path) {
            Ok(data) => data,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "skipping unreadable record");
                continue;
            }
        };
        match rmp_serde::from_slice::<EnrollmentRecord>(&data) {
            Ok(rec) => {
                records.insert(rec.identity.clone(), rec);
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "skipping undecodable record");
            }
        }
    }

    Ok(records)
}
