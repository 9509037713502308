use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tablekit_core::{ColumnSpec, Row};
use tablekit_sqlite::{Record, Store, Value};

#[derive(Debug, Parser)]
#[command(name = "tablekit")]
#[command(about = "Minimal CRUD access layer over a local SQLite database file")]
struct Cli {
    /// Path to the database file (created if missing).
    #[arg(long, global = true, conflicts_with = "name")]
    db: Option<PathBuf>,
    /// Database name, resolved inside the platform user-data directory.
    #[arg(long, global = true)]
    name: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Create a table (an ID autoincrement primary key is always added).
    CreateTable(CreateTableArgs),
    /// Insert a row of pre-formatted SQL literals.
    Insert(InsertArgs),
    /// Select rows, printing one JSON object per row.
    Select(SelectArgs),
    /// Update rows matching a condition.
    Update(UpdateArgs),
    /// Delete rows matching a condition.
    Delete(DeleteArgs),
}

#[derive(Debug, Args)]
struct CreateTableArgs {
    /// Table name.
    table: String,
    /// Raw column definitions, used verbatim (e.g. "NAME TEXT" "AGE DOUBLE").
    #[arg(required = true)]
    columns: Vec<String>,
}

#[derive(Debug, Args)]
struct InsertArgs {
    /// Table name.
    table: String,
    /// JSON object mapping column names to pre-formatted SQL literals
    /// (quoting included), e.g. {"NAME": "'Bruce'", "AGE": "18"}.
    #[arg(long)]
    row: String,
}

#[derive(Debug, Args)]
struct SelectArgs {
    /// Table name.
    table: String,
    /// WHERE fragment, used verbatim (e.g. "AGE > 18").
    #[arg(long)]
    filter: Option<String>,
    /// ORDER BY fragment, used verbatim (e.g. "AGE").
    #[arg(long)]
    order: Option<String>,
}

#[derive(Debug, Args)]
struct UpdateArgs {
    /// Table name.
    table: String,
    /// JSON object mapping column names to pre-formatted SQL literals.
    #[arg(long)]
    row: String,
    /// WHERE fragment selecting the rows to update; all rows when omitted.
    #[arg(long)]
    filter: Option<String>,
}

#[derive(Debug, Args)]
struct DeleteArgs {
    /// Table name.
    table: String,
    /// WHERE fragment selecting the rows to delete; all rows when omitted.
    #[arg(long)]
    filter: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    let result = match open_store(&cli) {
        Ok(store) => match cli.command {
            Command::CreateTable(args) => run_create_table(&store, args),
            Command::Insert(args) => run_insert(&store, args),
            Command::Select(args) => run_select(&store, args),
            Command::Update(args) => run_update(&store, args),
            Command::Delete(args) => run_delete(&store, args),
        },
        Err(err) => Err(err),
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn open_store(cli: &Cli) -> Result<Store, String> {
    match (&cli.db, &cli.name) {
        (Some(path), _) => Store::open(path)
            .map_err(|e| format!("Failed to open database '{}': {e}", path.display())),
        (None, Some(name)) => {
            Store::open_default(name).map_err(|e| format!("Failed to open database '{name}': {e}"))
        }
        (None, None) => Err("either --db or --name is required".to_string()),
    }
}

fn run_create_table(store: &Store, args: CreateTableArgs) -> Result<(), String> {
    let columns: Vec<ColumnSpec> = args.columns.into_iter().map(ColumnSpec::from).collect();
    store
        .create_table(&args.table, &columns)
        .map_err(|e| format!("Create table failed: {e}"))?;
    println!("Table '{}' ready.", args.table);
    Ok(())
}

fn run_insert(store: &Store, args: InsertArgs) -> Result<(), String> {
    let row = parse_row(&args.row)?;
    store
        .insert(&args.table, &row)
        .map_err(|e| format!("Insert failed: {e}"))?;
    let id = store
        .last_insert_rowid()
        .map_err(|e| format!("Insert succeeded but ID lookup failed: {e}"))?;
    println!("Inserted row {id} into '{}'.", args.table);
    Ok(())
}

fn run_select(store: &Store, args: SelectArgs) -> Result<(), String> {
    let mut cursor = store
        .select(&args.table, args.filter.as_deref(), args.order.as_deref())
        .map_err(|e| format!("Select failed: {e}"))?;
    let records = cursor
        .fetch_all()
        .map_err(|e| format!("Row iteration failed: {e}"))?;
    for record in &records {
        println!("{}", record_to_json(record));
    }
    Ok(())
}

fn run_update(store: &Store, args: UpdateArgs) -> Result<(), String> {
    let row = parse_row(&args.row)?;
    store
        .update(&args.table, args.filter.as_deref(), &row)
        .map_err(|e| format!("Update failed: {e}"))?;
    println!("Updated '{}'.", args.table);
    Ok(())
}

fn run_delete(store: &Store, args: DeleteArgs) -> Result<(), String> {
    store
        .delete(&args.table, args.filter.as_deref())
        .map_err(|e| format!("Delete failed: {e}"))?;
    println!("Deleted from '{}'.", args.table);
    Ok(())
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Parses a `--row` argument: a JSON object whose values are pre-formatted
/// SQL literals (quoting included), e.g. `{"NAME": "'Bruce'", "AGE": "18"}`.
fn parse_row(raw: &str) -> Result<Row, String> {
    let object: serde_json::Map<String, serde_json::Value> = serde_json::from_str(raw)
        .map_err(|e| format!("--row must be a JSON object of column to literal: {e}"))?;
    let mut row = Row::new();
    for (column, literal) in object {
        let serde_json::Value::String(literal) = literal else {
            return Err(format!(
                "--row column '{column}': literal must be a JSON string (quoting included)"
            ));
        };
        row = row.set(column, literal);
    }
    Ok(row)
}

fn record_to_json(record: &Record) -> serde_json::Value {
    let object: serde_json::Map<String, serde_json::Value> = record
        .columns()
        .iter()
        .zip(record.values())
        .map(|(column, value)| (column.clone(), value_to_json(value)))
        .collect();
    serde_json::Value::Object(object)
}

fn value_to_json(value: &Value) -> serde_json::Value {
    match value {
        Value::Null => serde_json::Value::Null,
        Value::Integer(i) => serde_json::json!(i),
        Value::Real(f) => serde_json::json!(f),
        Value::Text(s) => serde_json::json!(s),
        Value::Blob(bytes) => serde_json::json!(bytes),
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_row, value_to_json};
    use tablekit_sqlite::Value;

    #[test]
    fn test_parse_row_keeps_literals_verbatim() {
        let row = parse_row(r#"{"NAME": "'Bruce'", "AGE": "18"}"#).unwrap();
        assert_eq!(row.get("NAME"), Some("'Bruce'"));
        assert_eq!(row.get("AGE"), Some("18"));
    }

    #[test]
    fn test_parse_row_rejects_non_object() {
        assert!(parse_row(r#"["NAME"]"#).is_err());
        assert!(parse_row("not json").is_err());
    }

    #[test]
    fn test_parse_row_rejects_non_string_literal() {
        let err = parse_row(r#"{"AGE": 18}"#).unwrap_err();
        assert!(err.contains("AGE"));
    }

    #[test]
    fn test_value_to_json_covers_engine_types() {
        assert_eq!(value_to_json(&Value::Null), serde_json::Value::Null);
        assert_eq!(value_to_json(&Value::Integer(7)), serde_json::json!(7));
        assert_eq!(value_to_json(&Value::Real(1.5)), serde_json::json!(1.5));
        assert_eq!(
            value_to_json(&Value::Text("hi".into())),
            serde_json::json!("hi")
        );
        assert_eq!(
            value_to_json(&Value::Blob(vec![1, 2])),
            serde_json::json!([1, 2])
        );
    }
}
