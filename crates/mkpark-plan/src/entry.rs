//! Path entries for rename manifests
//!
//! Provides [`PathEntry`], one literal relative path from the fixed list of
//! build-configuration files a rename pass walks.

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

/// One relative filesystem path in a rename manifest
///
/// Entries are plain strings: no normalization, no validation, no existence
/// checks. An entry has no identity beyond its position in the manifest, and
/// duplicate entries are legal and preserved.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PathEntry(String);

impl PathEntry {
    /// Create an entry holding exactly the given text
    #[inline]
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// The literal path text
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for PathEntry {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for PathEntry {
    fn from(path: &str) -> Self {
        Self(path.to_string())
    }
}

impl From<String> for PathEntry {
    fn from(path: String) -> Self {
        Self(path)
    }
}

impl AsRef<str> for PathEntry {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_keeps_text_verbatim() {
        let entry = PathEntry::new("./distrib/jpeg-6b/Android.mk");
        assert_eq!(entry.as_str(), "./distrib/jpeg-6b/Android.mk");
    }

    #[test]
    fn entry_accepts_token_free_text() {
        // Path validation is out of scope: any string is a legal entry.
        let entry = PathEntry::new("README.txt");
        assert_eq!(entry.as_str(), "README.txt");
    }

    #[test]
    fn entry_display_matches_text() {
        let entry = PathEntry::new("./Android.mk");
        assert_eq!(entry.to_string(), "./Android.mk");
    }

    #[test]
    fn entry_from_str_and_string() {
        let a = PathEntry::from("./Android.mk");
        let b = PathEntry::from("./Android.mk".to_string());
        assert_eq!(a, b);
    }

    #[test]
    fn entry_serializes_as_bare_string() {
        let entry = PathEntry::new("./Android.mk");
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(json, r#""./Android.mk""#);
    }
}
