#![allow(dead_code)]

use rusqlite::{Connection, Row, ToSql};
use sqlbatch::{Error, Insertable};

/// Row mapping used across the integration tests.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: Option<String>,
}

impl User {
    pub fn new(id: i64, name: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            email: None,
        }
    }

    pub fn with_email(id: i64, name: &str, email: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            email: Some(email.to_string()),
        }
    }
}

impl Insertable for User {
    const TABLE: &'static str = "users";
    const COLUMNS: &'static [&'static str] = &["id", "name", "email"];

    fn params(&self) -> Vec<&dyn ToSql> {
        vec![&self.id, &self.name, &self.email]
    }
}

impl TryFrom<&Row<'_>> for User {
    type Error = Error;

    fn try_from(row: &Row<'_>) -> Result<Self, Error> {
        Ok(User {
            id: row.get(0)?,
            name: row.get(1)?,
            email: row.get(2)?,
        })
    }
}

/// Fresh in-memory database with the `users` table created.
pub fn setup_db() -> Connection {
    let conn = Connection::open_in_memory().expect("open in-memory database");
    conn.execute_batch(
        "create table users (id integer primary key, name text not null, email text)",
    )
    .expect("create schema");
    conn
}

pub fn count_users(conn: &Connection) -> i64 {
    conn.query_row("select count(*) from users", [], |row| row.get(0))
        .expect("count rows")
}

pub fn sample_users(n: usize) -> Vec<User> {
    (1..=n as i64).map(|id| User::new(id, &format!("user{id}"))).collect()
}
