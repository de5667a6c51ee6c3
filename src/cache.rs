//! Memoization of rendered SQL text.

use std::sync::{Arc, PoisonError, RwLock};

use hashbrown::HashMap;

/// Thread-safe map from a statement-shape key (conventionally
/// `<table>_insert_one`) to previously rendered SQL text.
///
/// Read-mostly: lookups share the read lock, insertions take the write lock,
/// and neither lock is ever held across a database call. Entries are never
/// evicted - keys are bounded by the number of distinct row-mapping types an
/// application uses, so the cache stays small for the lifetime of its owning
/// configuration.
#[derive(Debug, Default)]
pub struct SqlCache {
    entries: RwLock<HashMap<String, Arc<str>>>,
}

impl SqlCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached text for `key`, if present.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<Arc<str>> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    /// Stores `sql` under `key`, replacing any previous entry.
    pub fn set(&self, key: impl Into<String>, sql: impl Into<Arc<str>>) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.into(), sql.into());
    }

    /// Returns the cached text for `key`, rendering and storing it on a miss.
    ///
    /// The render runs outside the lock, so concurrent misses on the same key
    /// may each invoke `render`; the first stored value wins and every caller
    /// observes the same text afterwards.
    pub fn get_or_render(&self, key: &str, render: impl FnOnce() -> String) -> Arc<str> {
        if let Some(sql) = self.get(key) {
            return sql;
        }
        let rendered: Arc<str> = render().into();
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(key.to_owned())
            .or_insert(rendered)
            .clone()
    }
}
