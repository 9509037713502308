//! Placeholder-based statement rendering.
//!
//! Extension of the verbatim dialect in [`crate::build`]: the same INSERT
//! and UPDATE shapes, but with `?N` parameter placeholders in value
//! position instead of spliced literals. Values travel through the
//! engine's binding API, so callers no longer quote or escape them.
//!
//! Table names, column names, and WHERE fragments are still spliced
//! verbatim; binding covers values only.

/// Renders `INSERT INTO <table> (<columns>) VALUES (?1,...,?N)`.
///
/// # Examples
///
/// ```
/// use tablekit_core::bind;
///
/// assert_eq!(
///     bind::insert("PERSON", &["NAME", "AGE"]),
///     "INSERT INTO PERSON (NAME,AGE) VALUES (?1,?2)"
/// );
/// ```
pub fn insert(table: &str, columns: &[&str]) -> String {
    let placeholders = (1..=columns.len())
        .map(|n| format!("?{n}"))
        .collect::<Vec<_>>()
        .join(",");
    let columns = columns.join(",");
    format!("INSERT INTO {table} ({columns}) VALUES ({placeholders})")
}

/// Renders `UPDATE <table> SET <col> = ?1,...`, optionally appending
/// ` WHERE <condition>`.
///
/// Placeholders are numbered by column position, so bound values must be
/// supplied in the same order as `columns`.
pub fn update(table: &str, condition: Option<&str>, columns: &[&str]) -> String {
    let assignments = columns
        .iter()
        .enumerate()
        .map(|(i, column)| format!("{column} = ?{}", i + 1))
        .collect::<Vec<_>>();
    let mut sql = format!("UPDATE {table} SET {}", assignments.join(","));
    if let Some(condition) = condition {
        sql.push_str(&format!(" WHERE {condition}"));
    }
    sql
}
