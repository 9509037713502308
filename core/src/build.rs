//! Verbatim statement rendering for the five CRUD operations.
//!
//! These functions reproduce the access layer's command dialect exactly,
//! including its historical quirks: the space after `<table>(` in CREATE,
//! the lowercase `order by`, and the trailing space DELETE leaves after the
//! table name when no condition is given. Compatibility tests elsewhere
//! assert on these strings byte for byte, so the quirks are contract, not
//! accident.
//!
//! Fragments (`where`/`order`/`condition`, column specs, literals) are
//! spliced in unchanged. Nothing here protects against malformed or
//! attacker-controlled input; see [`crate::bind`] for the placeholder-based
//! alternative.

use crate::{ColumnSpec, Row};

/// Renders `CREATE TABLE IF NOT EXISTS <table>( ID INTEGER PRIMARY KEY
/// AUTOINCREMENT, <columns>)`.
///
/// The `ID` autoincrementing primary key is always prepended; the given
/// column specs follow, joined by commas.
///
/// # Examples
///
/// ```
/// use tablekit_core::build;
///
/// let sql = build::create_table("PERSON", &["NAME TEXT".into(), "AGE DOUBLE".into()]);
/// assert_eq!(
///     sql,
///     "CREATE TABLE IF NOT EXISTS PERSON( ID INTEGER PRIMARY KEY AUTOINCREMENT, NAME TEXT,AGE DOUBLE)"
/// );
/// ```
pub fn create_table(table: &str, columns: &[ColumnSpec]) -> String {
    let columns = columns
        .iter()
        .map(ColumnSpec::as_str)
        .collect::<Vec<_>>()
        .join(",");
    format!("CREATE TABLE IF NOT EXISTS {table}( ID INTEGER PRIMARY KEY AUTOINCREMENT, {columns})")
}

/// Renders `INSERT INTO <table> (<columns>) VALUES (<literals>)` using the
/// row's insertion order.
pub fn insert(table: &str, row: &Row) -> String {
    let columns = row.columns().collect::<Vec<_>>().join(",");
    let values = row.literals().collect::<Vec<_>>().join(",");
    format!("INSERT INTO {table} ({columns}) VALUES ({values})")
}

/// Renders `SELECT * FROM <table>`, optionally appending ` WHERE <filter>`
/// and ` order by <order>` verbatim.
///
/// # Examples
///
/// ```
/// use tablekit_core::build;
///
/// assert_eq!(
///     build::select("PERSON", Some("NAME == 'Sarah'"), Some("AGE")),
///     "SELECT * FROM PERSON WHERE NAME == 'Sarah' order by AGE"
/// );
/// assert_eq!(build::select("PERSON", None, None), "SELECT * FROM PERSON");
/// ```
pub fn select(table: &str, filter: Option<&str>, order: Option<&str>) -> String {
    let mut sql = format!("SELECT * FROM {table}");
    if let Some(filter) = filter {
        sql.push_str(&format!(" WHERE {filter}"));
    }
    if let Some(order) = order {
        sql.push_str(&format!(" order by {order}"));
    }
    sql
}

/// Renders `UPDATE <table> SET <col> = <literal>,...`, optionally appending
/// ` WHERE <condition>`.
///
/// An empty row renders an empty `SET` list, which the engine rejects at
/// compile time. Supplying a non-empty row is the caller's contract.
pub fn update(table: &str, condition: Option<&str>, row: &Row) -> String {
    let mut sql = format!("UPDATE {table} SET ");
    let assignments = row
        .iter()
        .map(|(column, literal)| format!("{column} = {literal}"))
        .collect::<Vec<_>>();
    sql.push_str(&assignments.join(","));
    if let Some(condition) = condition {
        sql.push_str(&format!(" WHERE {condition}"));
    }
    sql
}

/// Renders `DELETE FROM <table> `, optionally appending `WHERE <condition>`.
///
/// The trailing space after the table name is always present.
pub fn delete(table: &str, condition: Option<&str>) -> String {
    let mut sql = format!("DELETE FROM {table} ");
    if let Some(condition) = condition {
        sql.push_str(&format!("WHERE {condition}"));
    }
    sql
}
