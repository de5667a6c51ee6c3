//! The database handle abstraction.
//!
//! [`Handle`] is the capability set required from whatever object currently
//! represents database access - a direct connection, an open transaction (or
//! savepoint), or a leased pooled connection. Query and insert helpers are
//! written against this trait only, so they behave identically whichever
//! provider the caller holds.

use rusqlite::{Connection, Row, Savepoint, ToSql, Transaction};

use crate::error::{Error, Result};
use crate::query::scan_rows;

/// A reusable bound statement obtained from [`Handle::prepare`].
pub trait Execute {
    /// Executes the statement with `params`, returning the affected row
    /// count.
    fn execute(&mut self, params: &[&dyn ToSql]) -> Result<usize>;
}

/// Minimal capability set for executing parameterized SQL.
///
/// Cancellation is the driver's concern (`rusqlite` exposes it through
/// [`rusqlite::InterruptHandle`]); an interrupted call surfaces here as the
/// driver error it produced, never swallowed.
pub trait Handle {
    /// Reusable statement handle returned by [`prepare`](Handle::prepare).
    type Stmt<'h>: Execute
    where
        Self: 'h;

    /// Executes `sql` with `params`, returning the affected row count.
    fn execute(&self, sql: &str, params: &[&dyn ToSql]) -> Result<usize>;

    /// Prepares `sql` for repeated execution with varying parameters.
    fn prepare(&self, sql: &str) -> Result<Self::Stmt<'_>>;

    /// Runs `sql` and scans every result row into a `T`, in result order.
    fn all<T>(&self, sql: &str, params: &[&dyn ToSql]) -> Result<Vec<T>>
    where
        T: for<'r> TryFrom<&'r Row<'r>>,
        for<'r> <T as TryFrom<&'r Row<'r>>>::Error: Into<Error>;

    /// Runs `sql` and scans the first result row into a `T`.
    ///
    /// Fails with [`Error::NotFound`] when the query returns no rows.
    fn get<T>(&self, sql: &str, params: &[&dyn ToSql]) -> Result<T>
    where
        T: for<'r> TryFrom<&'r Row<'r>>,
        for<'r> <T as TryFrom<&'r Row<'r>>>::Error: Into<Error>;
}

/// [`Execute`] provider wrapping a `rusqlite` prepared statement.
#[derive(Debug)]
pub struct PreparedStatement<'conn>(rusqlite::Statement<'conn>);

impl Execute for PreparedStatement<'_> {
    fn execute(&mut self, params: &[&dyn ToSql]) -> Result<usize> {
        Ok(self.0.execute(params)?)
    }
}

impl Handle for Connection {
    type Stmt<'h>
        = PreparedStatement<'h>
    where
        Self: 'h;

    fn execute(&self, sql: &str, params: &[&dyn ToSql]) -> Result<usize> {
        Ok(Connection::execute(self, sql, params)?)
    }

    fn prepare(&self, sql: &str) -> Result<PreparedStatement<'_>> {
        Ok(PreparedStatement(Connection::prepare(self, sql)?))
    }

    fn all<T>(&self, sql: &str, params: &[&dyn ToSql]) -> Result<Vec<T>>
    where
        T: for<'r> TryFrom<&'r Row<'r>>,
        for<'r> <T as TryFrom<&'r Row<'r>>>::Error: Into<Error>,
    {
        let mut stmt = Connection::prepare(self, sql)?;
        let mut rows = stmt.query(params)?;
        let mut list = Vec::new();
        scan_rows(&mut rows, &mut list)?;
        Ok(list)
    }

    fn get<T>(&self, sql: &str, params: &[&dyn ToSql]) -> Result<T>
    where
        T: for<'r> TryFrom<&'r Row<'r>>,
        for<'r> <T as TryFrom<&'r Row<'r>>>::Error: Into<Error>,
    {
        let mut stmt = Connection::prepare(self, sql)?;
        let mut rows = stmt.query(params)?;
        match rows.next()? {
            Some(row) => T::try_from(row).map_err(Into::into),
            None => Err(Error::NotFound),
        }
    }
}

// Transactions and savepoints deref to the connection they were opened on,
// so every capability delegates to the `Connection` impl.
macro_rules! delegate_handle {
    ($ty:ty) => {
        impl Handle for $ty {
            type Stmt<'h>
                = PreparedStatement<'h>
            where
                Self: 'h;

            fn execute(&self, sql: &str, params: &[&dyn ToSql]) -> Result<usize> {
                Handle::execute(&**self, sql, params)
            }

            fn prepare(&self, sql: &str) -> Result<PreparedStatement<'_>> {
                Handle::prepare(&**self, sql)
            }

            fn all<T>(&self, sql: &str, params: &[&dyn ToSql]) -> Result<Vec<T>>
            where
                T: for<'r> TryFrom<&'r Row<'r>>,
                for<'r> <T as TryFrom<&'r Row<'r>>>::Error: Into<Error>,
            {
                Handle::all(&**self, sql, params)
            }

            fn get<T>(&self, sql: &str, params: &[&dyn ToSql]) -> Result<T>
            where
                T: for<'r> TryFrom<&'r Row<'r>>,
                for<'r> <T as TryFrom<&'r Row<'r>>>::Error: Into<Error>,
            {
                Handle::get(&**self, sql, params)
            }
        }
    };
}

delegate_handle!(Transaction<'_>);
delegate_handle!(Savepoint<'_>);

/// Pooled connections lease a plain `Connection`, so the same delegation
/// applies to any `r2d2` manager producing one.
#[cfg(feature = "r2d2")]
impl<M> Handle for r2d2::PooledConnection<M>
where
    M: r2d2::ManageConnection<Connection = Connection>,
{
    type Stmt<'h>
        = PreparedStatement<'h>
    where
        Self: 'h;

    fn execute(&self, sql: &str, params: &[&dyn ToSql]) -> Result<usize> {
        Handle::execute(&**self, sql, params)
    }

    fn prepare(&self, sql: &str) -> Result<PreparedStatement<'_>> {
        Handle::prepare(&**self, sql)
    }

    fn all<T>(&self, sql: &str, params: &[&dyn ToSql]) -> Result<Vec<T>>
    where
        T: for<'r> TryFrom<&'r Row<'r>>,
        for<'r> <T as TryFrom<&'r Row<'r>>>::Error: Into<Error>,
    {
        Handle::all(&**self, sql, params)
    }

    fn get<T>(&self, sql: &str, params: &[&dyn ToSql]) -> Result<T>
    where
        T: for<'r> TryFrom<&'r Row<'r>>,
        for<'r> <T as TryFrom<&'r Row<'r>>>::Error: Into<Error>,
    {
        Handle::get(&**self, sql, params)
    }
}
