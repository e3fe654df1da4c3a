use std::fmt;

use crate::error::StoreError;

/// Maximum accepted identity length, in characters.
pub const MAX_IDENTITY_LEN: usize = 128;

/// A validated identity string, safe to build a storage path from.
///
/// Construction goes through [`Identity::validate`] only; holding an
/// `Identity` is proof the value contains nothing but `[a-zA-Z0-9_-]`.
/// Identities are case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identity(String);

impl Identity {
    /// Normalizes and validates a caller-supplied identity.
    ///
    /// The raw value is trimmed and reduced to its final path segment, so
    /// a traversal payload like `"../../etc"` is defused to `"etc"` rather
    /// than merely rejected. The reduced value must be non-empty, at most
    /// [`MAX_IDENTITY_LEN`] characters, and match `[a-zA-Z0-9_-]+`.
    pub fn validate(raw: &str) -> Result<Identity, StoreError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(StoreError::InvalidIdentity("identity is required".into()));
        }

        // Discard any directory component, like basename(3).
        let reduced = trimmed.rsplit(['/', '\\']).next().unwrap_or("");
        if reduced.is_empty() {
            return Err(StoreError::InvalidIdentity(
                "identity has no usable segment".into(),
            ));
        }

        if reduced.chars().count() > MAX_IDENTITY_LEN {
            return Err(StoreError::InvalidIdentity(format!(
                "identity exceeds maximum length of {MAX_IDENTITY_LEN}"
            )));
        }

        if !reduced
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            return Err(StoreError::InvalidIdentity(
                "identity must contain only alphanumeric characters, underscores, and hyphens"
                    .into(),
            ));
        }

        Ok(Identity(reduced.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Identity {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_identities() {
        for raw in ["alice", "user_42", "a-b-c", "A", "0"] {
            let id = Identity::validate(raw).unwrap();
            assert_eq!(id.as_str(), raw);
        }
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(Identity::validate("  bob \n").unwrap().as_str(), "bob");
    }

    #[test]
    fn reduces_to_final_path_segment() {
        assert_eq!(Identity::validate("../../etc").unwrap().as_str(), "etc");
        assert_eq!(Identity::validate("a/b").unwrap().as_str(), "b");
        assert_eq!(Identity::validate("..\\..\\users").unwrap().as_str(), "users");
    }

    #[test]
    fn rejects_empty_and_whitespace() {
        assert!(Identity::validate("").is_err());
        assert!(Identity::validate("   ").is_err());
    }

    #[test]
    fn rejects_pure_traversal_sequences() {
        // The final segment is ".." or empty, neither of which survives.
        assert!(Identity::validate("..").is_err());
        assert!(Identity::validate("../..").is_err());
        assert!(Identity::validate("a/").is_err());
        assert!(Identity::validate("/").is_err());
    }

    #[test]
    fn rejects_bad_characters() {
        for raw in ["a b", "a.b", "naïve", "id!", "x\0y"] {
            assert!(Identity::validate(raw).is_err(), "accepted {raw:?}");
        }
    }

    #[test]
    fn rejects_overlong_identities() {
        let raw = "a".repeat(MAX_IDENTITY_LEN + 1);
        assert!(Identity::validate(&raw).is_err());

        let raw = "a".repeat(MAX_IDENTITY_LEN);
        assert!(Identity::validate(&raw).is_ok());
    }
}
