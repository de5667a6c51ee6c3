//! Read-path helpers and result-row scanning.

use rusqlite::{Row, Rows, ToSql};

use crate::error::{Error, Result};
use crate::handle::Handle;

/// Runs `sql` with `params` against `db` and returns every result row mapped
/// into a `T`.
pub fn query<T, H>(db: &H, sql: &str, params: &[&dyn ToSql]) -> Result<Vec<T>>
where
    H: Handle,
    T: for<'r> TryFrom<&'r Row<'r>>,
    for<'r> <T as TryFrom<&'r Row<'r>>>::Error: Into<Error>,
{
    db.all(sql, params)
}

/// Runs `sql` with `params` against `db` and maps the first result row into
/// a `T`, failing with [`Error::NotFound`] when there is none.
pub fn query_one<T, H>(db: &H, sql: &str, params: &[&dyn ToSql]) -> Result<T>
where
    H: Handle,
    T: for<'r> TryFrom<&'r Row<'r>>,
    for<'r> <T as TryFrom<&'r Row<'r>>>::Error: Into<Error>,
{
    db.get(sql, params)
}

/// Scans every remaining row of a result cursor into `list`.
///
/// Positions below the list's current length are overwritten in place;
/// further rows are appended. Scanning stops at the first row that fails to
/// convert, leaving the earlier slots filled.
pub fn scan_rows<T>(rows: &mut Rows<'_>, list: &mut Vec<T>) -> Result<()>
where
    T: for<'r> TryFrom<&'r Row<'r>>,
    for<'r> <T as TryFrom<&'r Row<'r>>>::Error: Into<Error>,
{
    let mut next = 0;
    while let Some(row) = rows.next()? {
        let value = T::try_from(row).map_err(Into::into)?;
        if next < list.len() {
            list[next] = value;
        } else {
            list.push(value);
        }
        next += 1;
    }
    Ok(())
}
