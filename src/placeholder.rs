//! Parameter placeholder generation.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

/// Generates the textual mark for one bound parameter position.
///
/// A mark is a function of three zero-based coordinates: the global flat
/// index of the parameter within the rendered fragment, its column index
/// within its row, and its row index. The built-in styles only consume the
/// global index (or none at all), but custom generators receive every
/// coordinate so a single logical column can, for example, bind one shared
/// name across all rows of a named-parameter dialect.
#[derive(Clone, Default)]
pub enum Placeholder {
    /// The constant token `?`, bound purely by occurrence order
    /// (SQLite/MySQL).
    #[default]
    Positional,

    /// `$1, $2, ...` - 1-based global numbering (PostgreSQL).
    Numbered,

    /// `@p0, @p1, ...` - 0-based global numbering (SQL Server).
    Prefixed,

    /// Caller-supplied generator over `(global, column, row)`.
    Custom(Arc<dyn Fn(usize, usize, usize) -> String + Send + Sync>),
}

impl Placeholder {
    /// Wraps a closure as a custom placeholder generator.
    ///
    /// The closure must be pure: identical coordinates must yield identical
    /// marks, since rendered SQL may be cached and reused.
    pub fn custom(f: impl Fn(usize, usize, usize) -> String + Send + Sync + 'static) -> Self {
        Placeholder::Custom(Arc::new(f))
    }

    /// Renders the mark for the parameter at flat index `global`, column
    /// `column` of row `row`. All coordinates are zero-based; `global` runs
    /// row-major with no gaps.
    #[must_use]
    pub fn render(&self, global: usize, column: usize, row: usize) -> Cow<'static, str> {
        match self {
            Placeholder::Positional => Cow::Borrowed("?"),
            Placeholder::Numbered => Cow::Owned(format!("${}", global + 1)),
            Placeholder::Prefixed => Cow::Owned(format!("@p{global}")),
            Placeholder::Custom(f) => Cow::Owned(f(global, column, row)),
        }
    }
}

impl fmt::Debug for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Placeholder::Positional => f.write_str("Positional"),
            Placeholder::Numbered => f.write_str("Numbered"),
            Placeholder::Prefixed => f.write_str("Prefixed"),
            Placeholder::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}
