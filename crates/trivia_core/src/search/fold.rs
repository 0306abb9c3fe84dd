//! Unicode case folding for substring search.
//!
//! # Invariants
//! - SQL `casefold(x)` and [`casefold`] produce identical output.
//! - Search terms are matched verbatim after folding: no trimming and no
//!   wildcard characters.

use rusqlite::functions::FunctionFlags;
use rusqlite::Connection;

/// Name of the SQL scalar function registered by [`register_casefold`].
pub const CASEFOLD_SQL_FUNCTION: &str = "casefold";

/// Lowercases `text` using full Unicode case mapping.
pub fn casefold(text: &str) -> String {
    text.to_lowercase()
}

/// Registers `casefold(text)` on `conn`; `NULL` folds to `NULL`.
pub fn register_casefold(conn: &Connection) -> rusqlite::Result<()> {
    conn.create_scalar_function(
        CASEFOLD_SQL_FUNCTION,
        1,
        FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC,
        |ctx| {
            let text = ctx.get::<Option<String>>(0)?;
            Ok(text.as_deref().map(casefold))
        },
    )
}
