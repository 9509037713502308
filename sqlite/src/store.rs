//! The statement builder and executor facade.

use std::path::Path;

use rusqlite::types::Value;
use rusqlite::{Connection, params_from_iter};
use tablekit_core::{ColumnSpec, Row, bind, build};
use tracing::debug;

use crate::cursor::Cursor;
use crate::error::{Result, StoreError};
use crate::path::default_db_path;

/// A minimal CRUD facade over one open SQLite database file.
///
/// A store owns exactly one connection, established when the store is
/// opened and released when the store is dropped or explicitly
/// [`close`](Self::close)d. All operations run synchronously on the
/// caller's thread and map to one bounded engine call each; there is no
/// pooling, no transactions, and no internal locking. If concurrent use
/// is required, wrap the whole store behind an external mutual-exclusion
/// boundary.
///
/// The mutating operations compile their statement, execute one step, and
/// finalize the statement on every exit path. `select` is deliberately
/// asymmetric: it returns a live [`Cursor`] whose iteration and release
/// belong to the caller.
///
/// Values in [`Row`]s are spliced into command text verbatim, so callers
/// must supply correctly quoted literals. [`insert_with`](Self::insert_with)
/// and [`update_with`](Self::update_with) are the safer, binding-based
/// alternative.
///
/// # Examples
///
/// ```no_run
/// use tablekit_core::Row;
/// use tablekit_sqlite::Store;
///
/// let store = Store::open_default("contacts.db").unwrap();
/// store
///     .create_table("PERSON", &["NAME TEXT".into(), "AGE DOUBLE".into()])
///     .unwrap();
/// store
///     .insert("PERSON", &Row::new().set("NAME", "'Bruce'").set("AGE", "18"))
///     .unwrap();
///
/// let mut cursor = store.select("PERSON", Some("AGE > 17"), Some("NAME")).unwrap();
/// for record in cursor.fetch_all().unwrap() {
///     println!("{:?}", record.get("NAME"));
/// }
/// ```
#[derive(Debug)]
pub struct Store {
    conn: Option<Connection>,
}

impl Store {
    /// Opens (or creates) a database file at an explicit path.
    ///
    /// # Errors
    ///
    /// Fails fast with the engine's open diagnostic if the file cannot be
    /// created or opened.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "Opening database");
        let conn = Connection::open(path)?;
        Ok(Self { conn: Some(conn) })
    }

    /// Opens (or creates) a named database inside the platform user-data
    /// directory.
    ///
    /// The name is appended to the directory verbatim; see
    /// [`default_db_path`](crate::default_db_path).
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DataDir`] if the platform provides no
    /// user-data directory, or the engine's open diagnostic.
    pub fn open_default(name: &str) -> Result<Self> {
        Self::open(default_db_path(name)?)
    }

    /// Opens a private in-memory database.
    pub fn open_in_memory() -> Result<Self> {
        Ok(Self {
            conn: Some(Connection::open_in_memory()?),
        })
    }

    /// Resolves the connection handle, failing fast once the store has
    /// been closed.
    fn conn(&self) -> Result<&Connection> {
        self.conn.as_ref().ok_or(StoreError::NotConnected)
    }

    /// Creates a table if it does not already exist.
    ///
    /// An `ID INTEGER PRIMARY KEY AUTOINCREMENT` column is always
    /// prepended; the given specs are used verbatim. Executes single-shot
    /// (no prepare/step cycle). Idempotent: repeated calls against an
    /// existing table succeed without changing its schema.
    ///
    /// # Errors
    ///
    /// Returns the engine diagnostic for malformed column specs, or
    /// [`StoreError::NotConnected`] after [`close`](Self::close).
    pub fn create_table(&self, table: &str, columns: &[ColumnSpec]) -> Result<()> {
        let sql = build::create_table(table, columns);
        debug!(%sql, "Creating table");
        self.conn()?.execute_batch(&sql)?;
        Ok(())
    }

    /// Inserts one row of pre-formatted literals, in the row's declared
    /// key order.
    ///
    /// # Errors
    ///
    /// Returns the engine diagnostic on compile failure (malformed
    /// literals) or execute failure (e.g. constraint violation).
    pub fn insert(&self, table: &str, row: &Row) -> Result<()> {
        self.execute_step(build::insert(table, row))
    }

    /// Compiles `SELECT * FROM <table>` with optional `WHERE` and
    /// `order by` fragments and returns the live [`Cursor`].
    ///
    /// The store does not step or finalize the statement; both are the
    /// caller's responsibility through the cursor.
    ///
    /// # Errors
    ///
    /// Returns the engine diagnostic if the statement fails to compile.
    pub fn select(
        &self,
        table: &str,
        filter: Option<&str>,
        order: Option<&str>,
    ) -> Result<Cursor<'_>> {
        let sql = build::select(table, filter, order);
        debug!(%sql, "Compiling select");
        let stmt = self.conn()?.prepare(&sql)?;
        Ok(Cursor::new(stmt))
    }

    /// Updates rows matching `condition` (all rows when `None`) with the
    /// row's column/literal assignments.
    ///
    /// An empty row renders an empty `SET` list, which the engine rejects
    /// at compile time; supplying a non-empty row is the caller's
    /// contract. Matching zero rows is a success.
    pub fn update(&self, table: &str, condition: Option<&str>, row: &Row) -> Result<()> {
        self.execute_step(build::update(table, condition, row))
    }

    /// Deletes rows matching `condition` (all rows when `None`).
    ///
    /// Matching zero rows is a success.
    pub fn delete(&self, table: &str, condition: Option<&str>) -> Result<()> {
        self.execute_step(build::delete(table, condition))
    }

    /// Inserts one row through the parameter-binding extension path.
    ///
    /// `values` are bound positionally to `columns`; the engine handles
    /// quoting, so values travel as-is (no caller-side escaping).
    ///
    /// # Errors
    ///
    /// Returns the engine diagnostic if the column/value counts disagree
    /// or the statement fails.
    pub fn insert_with(&self, table: &str, columns: &[&str], values: &[Value]) -> Result<()> {
        let sql = bind::insert(table, columns);
        debug!(%sql, "Executing bound insert");
        let mut stmt = self.conn()?.prepare(&sql)?;
        stmt.execute(params_from_iter(values.iter()))?;
        Ok(())
    }

    /// Updates rows matching `condition` through the parameter-binding
    /// extension path.
    pub fn update_with(
        &self,
        table: &str,
        condition: Option<&str>,
        assignments: &[(&str, Value)],
    ) -> Result<()> {
        let columns: Vec<&str> = assignments.iter().map(|(column, _)| *column).collect();
        let sql = bind::update(table, condition, &columns);
        debug!(%sql, "Executing bound update");
        let mut stmt = self.conn()?.prepare(&sql)?;
        stmt.execute(params_from_iter(assignments.iter().map(|(_, value)| value)))?;
        Ok(())
    }

    /// The auto-assigned `ID` of the most recent successful insert on this
    /// connection.
    pub fn last_insert_rowid(&self) -> Result<i64> {
        Ok(self.conn()?.last_insert_rowid())
    }

    /// Releases the connection. Subsequent operations return
    /// [`StoreError::NotConnected`].
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Close`] if the engine refuses to close; the
    /// store stays connected in that case.
    pub fn close(&mut self) -> Result<()> {
        match self.conn.take() {
            Some(conn) => conn.close().map_err(|(conn, source)| {
                self.conn = Some(conn);
                StoreError::Close { source }
            }),
            None => Err(StoreError::NotConnected),
        }
    }

    /// Shared path for the mutating operations: compile, execute one
    /// step, succeed iff the engine reports done. The statement is
    /// finalized when it drops, on success and failure alike.
    fn execute_step(&self, sql: String) -> Result<()> {
        debug!(%sql, "Executing statement");
        let mut stmt = self.conn()?.prepare(&sql)?;
        stmt.execute([])?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn person_store() -> Store {
        let store = Store::open_in_memory().unwrap();
        store
            .create_table("PERSON", &["NAME TEXT".into(), "AGE DOUBLE".into()])
            .unwrap();
        store
    }

    #[test]
    fn test_insert_and_select_round_trip() {
        let store = person_store();
        store
            .insert(
                "PERSON",
                &Row::new().set("NAME", "'Bruce'").set("AGE", "18"),
            )
            .unwrap();

        let mut cursor = store.select("PERSON", None, None).unwrap();
        let records = cursor.fetch_all().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(
            records[0].get("NAME"),
            Some(&Value::Text("Bruce".to_string()))
        );
    }

    #[test]
    fn test_operations_after_close_fail_fast() {
        let mut store = person_store();
        store.close().unwrap();

        let err = store.insert("PERSON", &Row::new().set("AGE", "1")).unwrap_err();
        assert!(matches!(err, StoreError::NotConnected));
        let err = store.delete("PERSON", None).unwrap_err();
        assert!(matches!(err, StoreError::NotConnected));
        let err = store.close().unwrap_err();
        assert!(matches!(err, StoreError::NotConnected));
    }

    #[test]
    fn test_compile_failure_reports_error() {
        let store = person_store();
        // Empty SET list is malformed; the engine rejects it at compile time.
        let err = store.update("PERSON", Some("ID = 1"), &Row::new()).unwrap_err();
        assert!(matches!(err, StoreError::Database(_)));
    }

    #[test]
    fn test_select_on_missing_table_reports_compile_failure() {
        let store = Store::open_in_memory().unwrap();
        assert!(store.select("NO_SUCH_TABLE", None, None).is_err());
    }
}
