//! Schema initialization
//!
//! One table, created idempotently. Reopening an existing database never
//! alters or clears stored records; there are no further migrations.

use std::time::Duration;

use rusqlite::Connection;

/// How long a statement waits on a locked database before failing.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Apply connection pragmas for file-backed databases.
pub(crate) fn apply_pragmas(conn: &Connection) -> rusqlite::Result<()> {
    conn.busy_timeout(BUSY_TIMEOUT)?;

    // WAL mode for better concurrent performance
    let _: String = conn.pragma_update_and_check(None, "journal_mode", "WAL", |row| row.get(0))?;

    Ok(())
}

/// Ensure the `state` table exists.
///
/// The layout is fixed and must stay interchangeable with other writers of
/// the same database file: `key` is the primary key, `value` is nullable
/// text.
pub(crate) fn initialize(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS state (
            key   TEXT NOT NULL PRIMARY KEY,
            value TEXT
        );
    "#,
    )?;

    tracing::debug!("Ensured state table");
    Ok(())
}
