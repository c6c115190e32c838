//! Past signoff record model
//!
//! A bulk attestation document committed to the repository, covering commits
//! that predate DCO enforcement. Only ever searched for commit hashes.

/// A past signoff document read from the repository tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PastSignoffRecord {
    /// Location within the tree (e.g. `dco-signoffs/jane-repo.txt`)
    pub path: String,
    /// Raw file content
    pub content: Vec<u8>,
}

impl PastSignoffRecord {
    /// Create a new record
    #[must_use]
    pub fn new(path: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Whether the record content contains `needle` anywhere
    #[must_use]
    pub fn mentions(&self, needle: &str) -> bool {
        let needle = needle.as_bytes();
        if needle.is_empty() || needle.len() > self.content.len() {
            return false;
        }
        self.content.windows(needle.len()).any(|w| w == needle)
    }
}
