//! Insert-strategy configuration.

use std::sync::{Arc, LazyLock};

use crate::cache::SqlCache;
use crate::placeholder::Placeholder;

/// Strategy configuration shared by insert operations: the active
/// placeholder style, the prepared-statement policy, a diagnostics switch,
/// and the rendered-SQL cache.
///
/// A single configuration may be shared read-only across concurrent callers;
/// the embedded cache synchronizes internally. The non-cache fields are meant
/// to be set once at startup and left alone while operations are in flight.
#[derive(Debug, Default)]
pub struct InsertConfig {
    placeholder: Placeholder,
    log_sql: bool,
    prepare_threshold: Option<usize>,
    cache: SqlCache,
}

impl InsertConfig {
    /// Creates a configuration using `placeholder` marks, diagnostics off and
    /// prepared statements disabled.
    #[must_use]
    pub fn new(placeholder: Placeholder) -> Self {
        Self {
            placeholder,
            ..Self::default()
        }
    }

    /// Emits each rendered or prepared SQL string through `tracing` before it
    /// is executed.
    #[must_use]
    pub fn with_log_sql(mut self, log_sql: bool) -> Self {
        self.log_sql = log_sql;
        self
    }

    /// Enables prepared-statement reuse for bulk inserts where
    /// `rows.len() / batch_size > threshold`.
    ///
    /// Disabled by default: preparing costs an extra round trip that only
    /// pays off across enough repeated full batches. The prepared statement
    /// covers full batches only; a short final batch always falls back to
    /// freshly rendered SQL.
    #[must_use]
    pub fn with_prepare_threshold(mut self, threshold: usize) -> Self {
        self.prepare_threshold = Some(threshold);
        self
    }

    /// The active placeholder style.
    #[inline]
    #[must_use]
    pub fn placeholder(&self) -> &Placeholder {
        &self.placeholder
    }

    /// Whether rendered SQL is surfaced for diagnostics.
    #[inline]
    #[must_use]
    pub fn log_sql(&self) -> bool {
        self.log_sql
    }

    /// The prepared-statement threshold, `None` meaning "never prepare".
    #[inline]
    #[must_use]
    pub fn prepare_threshold(&self) -> Option<usize> {
        self.prepare_threshold
    }

    /// Looks up previously rendered SQL, e.g. under `<table>_insert_one`.
    #[must_use]
    pub fn cached_sql(&self, key: &str) -> Option<Arc<str>> {
        self.cache.get(key)
    }

    /// Stores rendered SQL under `key`, e.g. to pre-warm the cache.
    pub fn set_cached_sql(&self, key: impl Into<String>, sql: impl Into<Arc<str>>) {
        self.cache.set(key, sql);
    }

    #[inline]
    pub(crate) fn cache(&self) -> &SqlCache {
        &self.cache
    }
}

/// The process-wide default configuration: `?` marks, diagnostics off,
/// prepared statements disabled.
///
/// The module-level [`insert`](crate::insert()) and
/// [`bulk_insert`](crate::bulk_insert()) helpers run against it, which keeps
/// standalone programs to one line per call. Anything beyond that should own
/// an explicit [`InsertConfig`].
#[must_use]
pub fn default_config() -> &'static InsertConfig {
    static DEFAULT: LazyLock<InsertConfig> = LazyLock::new(InsertConfig::default);
    &DEFAULT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = InsertConfig::default();
        assert!(!config.log_sql());
        assert_eq!(config.prepare_threshold(), None);
        assert_eq!(config.placeholder().render(0, 0, 0), "?");
    }

    #[test]
    fn test_builder_setters() {
        let config = InsertConfig::new(Placeholder::Numbered)
            .with_log_sql(true)
            .with_prepare_threshold(2);
        assert!(config.log_sql());
        assert_eq!(config.prepare_threshold(), Some(2));
        assert_eq!(config.placeholder().render(0, 0, 0), "$1");
    }

    #[test]
    fn test_cache_accessors() {
        let config = InsertConfig::default();
        assert!(config.cached_sql("users_insert_one").is_none());
        config.set_cached_sql("users_insert_one", "insert into users (id) values (?)");
        assert_eq!(
            config.cached_sql("users_insert_one").as_deref(),
            Some("insert into users (id) values (?)")
        );
    }
}
