//! In-memory content store.
//!
//! Holds the built-in texts and anything inserted at runtime. Also the
//! store used by tests and headless sessions.

use std::collections::BTreeMap;

use coal_types::error::{CoalError, Result};

use crate::{ContentKey, ContentProvider};

/// A content store backed by a `BTreeMap`.
#[derive(Debug, Clone, Default)]
pub struct MemoryContent {
    entries: BTreeMap<ContentKey, String>,
}

impl MemoryContent {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding every built-in text.
    pub fn builtin() -> Self {
        let mut store = Self::new();
        crate::builtin::populate(&mut store);
        store
    }

    /// Insert or replace the text for `key`.
    pub fn insert(&mut self, key: ContentKey, text: impl Into<String>) {
        self.entries.insert(key, text.into());
    }

    /// Whether the store has text for `key`.
    pub fn contains(&self, key: ContentKey) -> bool {
        self.entries.contains_key(&key)
    }

    /// Number of stored resources.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ContentProvider for MemoryContent {
    fn load(&self, key: ContentKey) -> Result<String> {
        self.entries
            .get(&key)
            .cloned()
            .ok_or_else(|| CoalError::Content(format!("no such resource: {key}")))
    }
}
