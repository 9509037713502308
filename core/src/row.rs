//! Row and column-definition types shared by the statement renderers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An ordered mapping from column name to a pre-formatted SQL literal.
///
/// The literal is spliced into the command text exactly as given, so text
/// values must already carry their quotes (`"'Bruce'"`, not `"Bruce"`).
/// Entry order is preserved and determines the column order in rendered
/// `INSERT` and `UPDATE` statements. Setting a column that is already
/// present replaces its literal in place.
///
/// # Examples
///
/// ```
/// use tablekit_core::Row;
///
/// let row = Row::new()
///     .set("NAME", "'Bruce'")
///     .set("AGE", "18")
///     .set("HEIGHT", "173");
/// assert_eq!(row.len(), 3);
/// assert_eq!(row.columns().collect::<Vec<_>>(), vec!["NAME", "AGE", "HEIGHT"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row {
    entries: Vec<(String, String)>,
}

impl Row {
    /// Creates an empty row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a column to a pre-formatted literal, preserving insertion order.
    ///
    /// If the column is already present its literal is replaced and its
    /// position kept.
    pub fn set(mut self, column: impl Into<String>, literal: impl Into<String>) -> Self {
        let column = column.into();
        let literal = literal.into();
        match self.entries.iter_mut().find(|(name, _)| *name == column) {
            Some(entry) => entry.1 = literal,
            None => self.entries.push((column, literal)),
        }
        self
    }

    /// Returns the literal for a column, if present.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, literal)| literal.as_str())
    }

    /// Number of columns in the row.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the row has no columns.
    ///
    /// An empty row renders an empty `SET` list in `UPDATE` statements,
    /// which the engine rejects; avoiding that is the caller's contract.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over column names in insertion order.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// Iterates over literals in insertion order.
    pub fn literals(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(_, literal)| literal.as_str())
    }

    /// Iterates over `(column, literal)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, literal)| (name.as_str(), literal.as_str()))
    }
}

impl<C, L> FromIterator<(C, L)> for Row
where
    C: Into<String>,
    L: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (C, L)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Row::new(), |row, (column, literal)| row.set(column, literal))
    }
}

/// A raw column definition fragment, e.g. `"NAME TEXT"`.
///
/// Used verbatim inside `CREATE TABLE` statements. No SQL correctness
/// checking is performed.
///
/// # Examples
///
/// ```
/// use tablekit_core::ColumnSpec;
///
/// let spec = ColumnSpec::from("AGE DOUBLE");
/// assert_eq!(spec.as_str(), "AGE DOUBLE");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnSpec(String);

impl ColumnSpec {
    /// Creates a column spec from a raw fragment.
    pub fn new(fragment: impl Into<String>) -> Self {
        Self(fragment.into())
    }

    /// The raw fragment.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ColumnSpec {
    fn from(fragment: &str) -> Self {
        Self::new(fragment)
    }
}

impl From<String> for ColumnSpec {
    fn from(fragment: String) -> Self {
        Self(fragment)
    }
}

impl fmt::Display for ColumnSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_preserves_insertion_order() {
        let row = Row::new().set("B", "2").set("A", "1").set("C", "3");
        let columns: Vec<_> = row.columns().collect();
        assert_eq!(columns, vec!["B", "A", "C"]);
    }

    #[test]
    fn test_row_set_replaces_in_place() {
        let row = Row::new().set("A", "1").set("B", "2").set("A", "9");
        assert_eq!(row.len(), 2);
        assert_eq!(row.get("A"), Some("9"));
        let columns: Vec<_> = row.columns().collect();
        assert_eq!(columns, vec!["A", "B"]);
    }

    #[test]
    fn test_row_from_iterator() {
        let row: Row = [("NAME", "'Sarah'"), ("AGE", "30")].into_iter().collect();
        assert_eq!(row.get("NAME"), Some("'Sarah'"));
        assert_eq!(row.get("AGE"), Some("30"));
    }

    #[test]
    fn test_row_serde_round_trip() {
        let row = Row::new().set("NAME", "'Bruce'").set("AGE", "18");
        let json = serde_json::to_string(&row).unwrap();
        assert_eq!(json, r#"[["NAME","'Bruce'"],["AGE","18"]]"#);
        let back: Row = serde_json::from_str(&json).unwrap();
        assert_eq!(back, row);
    }

    #[test]
    fn test_column_spec_is_verbatim() {
        let spec = ColumnSpec::from("NAME TEXT NOT NULL );--");
        assert_eq!(spec.as_str(), "NAME TEXT NOT NULL );--");
    }
}
