//! Store operations
//!
//! `StateStore` is a stateless facade over one open SQLite connection. All
//! operations are synchronous blocking calls; concurrent callers share the
//! connection through a mutex and everything beyond that is delegated to
//! SQLite's own locking.

use std::path::Path;
use std::sync::Arc;

use parking_lot::Mutex;
use rusqlite::{params, params_from_iter, Connection, InterruptHandle, OptionalExtension};

use crate::error::StoreError;
use crate::schema;
use crate::state::State;
use crate::Result;

pub struct StateStore {
    conn: Arc<Mutex<Connection>>,
}

impl StateStore {
    /// Open or create the database at `path` and ensure the schema.
    ///
    /// Safe to call repeatedly against the same path; existing records are
    /// never altered or cleared by reopening.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open(path).map_err(StoreError::Initialization)?;
        schema::apply_pragmas(&conn).map_err(StoreError::Initialization)?;
        schema::initialize(&conn).map_err(StoreError::Initialization)?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Open a private in-memory database with the same schema.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(StoreError::Initialization)?;
        schema::initialize(&conn).map_err(StoreError::Initialization)?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Handle for aborting an in-flight statement from another thread.
    ///
    /// An interrupted operation fails with [`StoreError::Query`] or
    /// [`StoreError::Write`]; it never completes silently.
    pub fn interrupt_handle(&self) -> InterruptHandle {
        self.conn.lock().get_interrupt_handle()
    }

    fn with_connection<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Connection) -> Result<T>,
    {
        let conn = self.conn.lock();
        f(&conn)
    }

    /// Look up one record by exact key match.
    ///
    /// A missing key is `Ok(None)`, never an error; an empty stored value
    /// comes back as `Some` with an empty string.
    pub fn get(&self, key: &str) -> Result<Option<State>> {
        self.with_connection(|conn| {
            conn.query_row(
                "SELECT key, value FROM state WHERE key = ?1",
                [key],
                |row| {
                    Ok(State {
                        key: row.get(0)?,
                        value: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
                    })
                },
            )
            .optional()
            .map_err(StoreError::Query)
        })
    }

    /// Insert exactly one new record.
    ///
    /// There is no update path: saving an already-present key fails with a
    /// [`StoreError::Write`] carrying the uniqueness violation, and the
    /// stored value is left untouched.
    pub fn save(&self, state: &State) -> Result<()> {
        state.validate()?;

        self.with_connection(|conn| {
            conn.execute(
                "INSERT INTO state (key, value) VALUES (?1, ?2)",
                params![state.key, state.value],
            )
            .map_err(StoreError::Write)?;
            Ok(())
        })?;

        tracing::debug!(key = %state.key, "Saved state record");
        Ok(())
    }

    /// Insert an ordered sequence of records as one multi-row statement.
    ///
    /// Every key is validated before anything is written, and the single
    /// statement is the transaction boundary: a failure on any row (for
    /// example a duplicate key) rejects the entire batch. An empty sequence
    /// is a no-op success.
    pub fn save_bulk(&self, states: &[State]) -> Result<()> {
        for state in states {
            state.validate()?;
        }
        if states.is_empty() {
            return Ok(());
        }

        let sql = bulk_insert_sql(states.len());
        let args = states
            .iter()
            .flat_map(|state| [state.key.as_str(), state.value.as_str()]);

        self.with_connection(|conn| {
            conn.execute(&sql, params_from_iter(args))
                .map_err(StoreError::Write)?;
            Ok(())
        })?;

        tracing::debug!(rows = states.len(), "Bulk saved state records");
        Ok(())
    }

    /// Remove the record matching `key` if present.
    ///
    /// Deleting an absent key is idempotent success.
    pub fn delete(&self, key: &str) -> Result<()> {
        let deleted = self.with_connection(|conn| {
            conn.execute("DELETE FROM state WHERE key = ?1", [key])
                .map_err(StoreError::Write)
        })?;

        tracing::debug!(key, deleted, "Deleted state record");
        Ok(())
    }
}

impl Clone for StateStore {
    fn clone(&self) -> Self {
        Self {
            conn: Arc::clone(&self.conn),
        }
    }
}

/// Statement text for an `rows`-row insert, values left to be bound.
///
/// Kept separate from binding so the SQL shape is testable on its own.
/// Values are always bound, never interpolated.
fn bulk_insert_sql(rows: usize) -> String {
    let placeholders = vec!["(?, ?)"; rows].join(", ");
    format!("INSERT INTO state (key, value) VALUES {placeholders}")
}
