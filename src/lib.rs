//! Generic query and insert helpers for statically declared row mappings.
//!
//! Application code that already holds an open database handle - a
//! [`rusqlite::Connection`], an active [`rusqlite::Transaction`], or a leased
//! pooled connection - gets uniform `query`/`insert` operations for any type
//! that declares its table shape, instead of hand-writing parameter binding
//! and row scanning per query. The centerpiece is the bulk-insert engine:
//! it partitions a row list into batches, renders dialect-correct value-list
//! placeholders for any (column, row) shape, optionally amortizes cost
//! through a reused prepared statement, and memoizes the common single-row
//! statement per table.
//!
//! ```no_run
//! use rusqlite::{Connection, Row, ToSql};
//! use sqlbatch::{Error, Insertable};
//!
//! struct User {
//!     id: i64,
//!     name: String,
//! }
//!
//! impl Insertable for User {
//!     const TABLE: &'static str = "users";
//!     const COLUMNS: &'static [&'static str] = &["id", "name"];
//!
//!     fn params(&self) -> Vec<&dyn ToSql> {
//!         vec![&self.id, &self.name]
//!     }
//! }
//!
//! impl TryFrom<&Row<'_>> for User {
//!     type Error = Error;
//!
//!     fn try_from(row: &Row<'_>) -> Result<Self, Error> {
//!         Ok(User {
//!             id: row.get(0)?,
//!             name: row.get(1)?,
//!         })
//!     }
//! }
//!
//! fn main() -> sqlbatch::Result<()> {
//!     let conn = Connection::open_in_memory()?;
//!     conn.execute_batch("create table users (id integer primary key, name text not null)")?;
//!
//!     let rows: Vec<User> = (1..=2500)
//!         .map(|id| User { id, name: format!("user{id}") })
//!         .collect();
//!     let total = sqlbatch::bulk_insert(&conn, 1000, &rows)?;
//!     assert_eq!(total, 2500);
//!
//!     let found: Vec<User> =
//!         sqlbatch::query(&conn, "select id,name from users where id < ?", &[&10i64])?;
//!     assert_eq!(found.len(), 9);
//!     Ok(())
//! }
//! ```

pub mod cache;
pub mod config;
pub mod dialect;
pub mod error;
pub mod handle;
pub mod insert;
pub mod placeholder;
pub mod query;
pub mod sql;

// Re-export key types and traits
pub use cache::SqlCache;
pub use config::{InsertConfig, default_config};
pub use dialect::Dialect;
pub use error::{BulkInsertError, Error, Result};
pub use handle::{Execute, Handle, PreparedStatement};
pub use insert::{Insertable, bulk_insert, insert};
pub use placeholder::Placeholder;
pub use query::{query, query_one, scan_rows};
pub use sql::{insert_statement, insert_values};
