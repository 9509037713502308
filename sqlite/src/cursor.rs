//! Live result cursors and decoded row records.

use std::sync::Arc;

use rusqlite::Statement;
use rusqlite::types::Value;

use crate::error::Result;

/// A live handle over a compiled `SELECT` statement.
///
/// Unlike the mutating operations, whose statements are compiled, stepped,
/// and finalized inside a single call, `select` hands the compiled
/// statement to the caller wrapped in a `Cursor`. Row iteration and
/// release are the caller's responsibility: the statement is finalized
/// when the cursor is dropped, never by the store on the caller's behalf.
///
/// While a cursor is alive it borrows the store's connection, so the
/// borrow checker prevents closing the store underneath it.
///
/// # Examples
///
/// ```no_run
/// use tablekit_sqlite::Store;
///
/// let store = Store::open("contacts.db").unwrap();
/// let mut cursor = store.select("PERSON", None, Some("AGE")).unwrap();
/// for record in cursor.fetch_all().unwrap() {
///     println!("{:?}", record.get("NAME"));
/// }
/// // dropping `cursor` finalizes the statement
/// ```
pub struct Cursor<'conn> {
    stmt: Statement<'conn>,
}

impl<'conn> Cursor<'conn> {
    pub(crate) fn new(stmt: Statement<'conn>) -> Self {
        Self { stmt }
    }

    /// Number of columns in the result set.
    pub fn column_count(&self) -> usize {
        self.stmt.column_count()
    }

    /// Column names in result-set order.
    pub fn column_names(&self) -> Vec<String> {
        self.stmt
            .column_names()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// Begins execution and returns the engine's row iterator for
    /// caller-driven stepping.
    ///
    /// # Errors
    ///
    /// Returns the engine's diagnostic if execution cannot begin.
    pub fn rows(&mut self) -> Result<rusqlite::Rows<'_>> {
        Ok(self.stmt.query([])?)
    }

    /// Steps through the entire result set, decoding every row into a
    /// [`Record`].
    ///
    /// # Errors
    ///
    /// Returns the engine's diagnostic if a step or a column read fails.
    pub fn fetch_all(&mut self) -> Result<Vec<Record>> {
        let columns: Arc<Vec<String>> = Arc::new(
            self.stmt
                .column_names()
                .into_iter()
                .map(str::to_string)
                .collect(),
        );
        let mut rows = self.stmt.query([])?;
        let mut records = Vec::new();
        while let Some(row) = rows.next()? {
            let mut values = Vec::with_capacity(columns.len());
            for index in 0..columns.len() {
                values.push(row.get::<_, Value>(index)?);
            }
            records.push(Record {
                columns: Arc::clone(&columns),
                values,
            });
        }
        Ok(records)
    }
}

/// One decoded result row: engine-typed values plus a shared column-name
/// list for name-based lookup.
#[derive(Debug, Clone)]
pub struct Record {
    columns: Arc<Vec<String>>,
    values: Vec<Value>,
}

impl Record {
    /// Column names in result-set order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Values in result-set order.
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Looks up a value by column name.
    pub fn get(&self, column: &str) -> Option<&Value> {
        self.columns
            .iter()
            .position(|name| name == column)
            .map(|index| &self.values[index])
    }
}
