//! SQL dialect identification.

use crate::placeholder::Placeholder;

/// SQL dialect for placeholder-syntax selection.
///
/// Each dialect binds parameters with a different mark syntax; the mapping to
/// concrete marks lives in [`Placeholder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Dialect {
    /// SQLite - `?` positional placeholders
    #[default]
    SQLite,

    /// MySQL - `?` positional placeholders
    MySQL,

    /// PostgreSQL - `$1, $2, ...` numbered placeholders (1-based)
    PostgreSQL,

    /// SQL Server - `@p0, @p1, ...` prefixed placeholders (0-based)
    SQLServer,
}

impl Dialect {
    /// Returns the default placeholder style for this dialect.
    #[inline]
    #[must_use]
    pub const fn placeholder(self) -> Placeholder {
        match self {
            Dialect::SQLite | Dialect::MySQL => Placeholder::Positional,
            Dialect::PostgreSQL => Placeholder::Numbered,
            Dialect::SQLServer => Placeholder::Prefixed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dialect_placeholders() {
        assert_eq!(Dialect::SQLite.placeholder().render(5, 2, 1), "?");
        assert_eq!(Dialect::MySQL.placeholder().render(5, 2, 1), "?");
        assert_eq!(Dialect::PostgreSQL.placeholder().render(5, 2, 1), "$6");
        assert_eq!(Dialect::SQLServer.placeholder().render(5, 2, 1), "@p5");
    }
}
