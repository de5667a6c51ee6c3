//! Batched insert planning and execution.

use std::sync::Arc;

use rusqlite::ToSql;
use smallvec::SmallVec;
use tracing::debug;

use crate::config::{InsertConfig, default_config};
use crate::error::{BulkInsertError, Error, Result};
use crate::handle::{Execute, Handle};
use crate::sql::insert_statement;

/// The write side of a row mapping: table name, column list, and the
/// parameter values for one row.
///
/// `COLUMNS` and [`params`](Insertable::params) must agree on one fixed
/// column order; that correspondence is the implementor's contract and is
/// never validated here - a mismatch surfaces as a driver bind error, not a
/// dedicated error kind.
pub trait Insertable {
    /// Target table name.
    const TABLE: &'static str;

    /// Column names, in binding order.
    const COLUMNS: &'static [&'static str];

    /// Parameter values for this row, in `COLUMNS` order.
    fn params(&self) -> Vec<&dyn ToSql>;
}

impl InsertConfig {
    /// Inserts `rows` in contiguous batches of at most `batch_size` rows
    /// each, returning the total number of affected rows.
    ///
    /// Empty input returns `Ok(0)` without touching the database, and a
    /// `batch_size` of zero is coerced to one. When the configured
    /// prepared-statement threshold fires (see
    /// [`with_prepare_threshold`](InsertConfig::with_prepare_threshold)),
    /// one statement sized for exactly `batch_size` rows is prepared up
    /// front and reused for every full batch; the short final batch, if any,
    /// executes freshly rendered SQL. Single-row statements are memoized per
    /// table so repeated one-row inserts skip re-rendering.
    ///
    /// Batches run strictly in sequence. The first execution error aborts
    /// the remaining batches and is returned together with the total
    /// affected so far - batches are not atomic as a group unless the caller
    /// passes a transaction handle.
    pub fn bulk_insert<H, T>(
        &self,
        db: &H,
        batch_size: usize,
        rows: &[T],
    ) -> Result<usize, BulkInsertError>
    where
        H: Handle,
        T: Insertable,
    {
        if rows.is_empty() {
            return Ok(0);
        }
        let batch_size = batch_size.max(1);

        // One statement prepared for exactly `batch_size` rows, reused for
        // every full batch.
        let mut reused = match self.prepare_threshold() {
            Some(threshold) if rows.len() / batch_size > threshold => {
                let sql = self.render_insert::<T>(batch_size);
                if self.log_sql() {
                    debug!(sql = %sql, "prepare");
                }
                let stmt = db
                    .prepare(&sql)
                    .map_err(|source| BulkInsertError { affected: 0, source })?;
                Some(stmt)
            }
            _ => None,
        };

        let mut total = 0usize;
        for batch in rows.chunks(batch_size) {
            let mut values: SmallVec<[&dyn ToSql; 16]> =
                SmallVec::with_capacity(T::COLUMNS.len() * batch.len());
            for row in batch {
                values.extend(row.params());
            }

            let result = match reused.as_mut() {
                Some(stmt) if batch.len() == batch_size => stmt.execute(&values),
                _ => {
                    let sql: Arc<str> = if batch.len() == 1 {
                        self.cache()
                            .get_or_render(&format!("{}_insert_one", T::TABLE), || {
                                self.render_insert::<T>(1)
                            })
                    } else {
                        self.render_insert::<T>(batch.len()).into()
                    };
                    if self.log_sql() {
                        debug!(sql = %sql, rows = batch.len(), "insert");
                    }
                    db.execute(&sql, &values)
                }
            };

            match result {
                Ok(affected) => total += affected,
                Err(source) => {
                    return Err(BulkInsertError {
                        affected: total,
                        source,
                    });
                }
            }
        }

        Ok(total)
    }

    /// Inserts a single row, returning the affected row count.
    ///
    /// This is [`bulk_insert`](InsertConfig::bulk_insert) specialized to one
    /// batch of one row, so it shares the SQL cache and diagnostics.
    pub fn insert<H, T>(&self, db: &H, row: &T) -> Result<usize>
    where
        H: Handle,
        T: Insertable,
    {
        self.bulk_insert(db, 1, std::slice::from_ref(row))
            .map_err(Error::from)
    }

    fn render_insert<T: Insertable>(&self, rows: usize) -> String {
        insert_statement(T::TABLE, T::COLUMNS, self.placeholder(), rows)
    }
}

/// Inserts a single row using the process-wide default configuration.
pub fn insert<H, T>(db: &H, row: &T) -> Result<usize>
where
    H: Handle,
    T: Insertable,
{
    default_config().insert(db, row)
}

/// Bulk-inserts `rows` using the process-wide default configuration.
pub fn bulk_insert<H, T>(db: &H, batch_size: usize, rows: &[T]) -> Result<usize, BulkInsertError>
where
    H: Handle,
    T: Insertable,
{
    default_config().bulk_insert(db, batch_size, rows)
}
