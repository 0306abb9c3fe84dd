//! Catalog schema steps.
//!
//! Step `n` moves a database from `user_version = n - 1` to `n`. Step 1
//! creates `categories` and `questions`; step 2 seeds the six trivia
//! categories, which nothing in the crate modifies afterwards.

use crate::db::{DbError, DbResult};
use log::debug;
use rusqlite::Connection;

/// Schema steps in application order; index `i` is version `i + 1`.
const SCHEMA_STEPS: &[&str] = &[
    include_str!("0001_init.sql"),
    include_str!("0002_seed_categories.sql"),
];

/// Schema version a freshly opened catalog ends up at.
pub fn latest_version() -> u32 {
    SCHEMA_STEPS.len() as u32
}

/// Brings `conn` up to [`latest_version`] inside one transaction.
///
/// # Errors
/// - `DbError::UnsupportedSchemaVersion` when the file is ahead of this
///   build; nothing is modified in that case.
pub fn apply_migrations(conn: &mut Connection) -> DbResult<()> {
    let from = schema_version(conn)?;
    let latest = latest_version();

    if from > latest {
        return Err(DbError::UnsupportedSchemaVersion {
            db_version: from,
            latest_supported: latest,
        });
    }

    let pending = SCHEMA_STEPS.iter().zip(1u32..).skip(from as usize);
    let tx = conn.transaction()?;
    for (sql, version) in pending {
        tx.execute_batch(sql)?;
        tx.pragma_update(None, "user_version", version)?;
        debug!("event=db_migrate module=db status=applied version={version}");
    }
    tx.commit()?;

    Ok(())
}

fn schema_version(conn: &Connection) -> DbResult<u32> {
    Ok(conn.pragma_query_value(None, "user_version", |row| row.get(0))?)
}
