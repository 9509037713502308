//! SQLite statement builder and executor facade.
//!
//! This crate is the execution half of tablekit: it owns one
//! [`rusqlite::Connection`] per [`Store`] and runs the command text
//! produced by [`tablekit_core`] against it. The surface is the five CRUD
//! operations of the access layer (create table, insert, select, update,
//! delete) plus a binding-based extension path and explicit close.
//!
//! # Architecture
//!
//! - **`store`** — the [`Store`] facade: connection lifecycle and the five
//!   operations.
//! - **`cursor`** — the live [`Cursor`] handle returned by select, and the
//!   decoded [`Record`] row representation.
//! - **`path`** — resolution of named databases inside the platform
//!   user-data directory.
//! - **`error`** — the unified [`StoreError`] type.
//!
//! # Quick start
//!
//! ```no_run
//! use tablekit_core::Row;
//! use tablekit_sqlite::Store;
//!
//! let store = Store::open_default("contacts.db").unwrap();
//! store
//!     .create_table("PERSON", &["NAME TEXT".into(), "AGE DOUBLE".into()])
//!     .unwrap();
//! store
//!     .insert("PERSON", &Row::new().set("NAME", "'Bruce'").set("AGE", "18"))
//!     .unwrap();
//!
//! let mut cursor = store.select("PERSON", None, Some("AGE")).unwrap();
//! for record in cursor.fetch_all().unwrap() {
//!     println!("{:?} is {:?}", record.get("NAME"), record.get("AGE"));
//! }
//! ```
//!
//! # Resource discipline
//!
//! Mutating operations compile, step once, and finalize their statement on
//! every exit path. `select` instead hands the compiled statement to the
//! caller as a [`Cursor`]; dropping the cursor finalizes it. The borrow
//! checker keeps a live cursor from outliving its store.

mod cursor;
mod error;
mod path;
mod store;

pub use cursor::{Cursor, Record};
pub use error::{Result, StoreError};
pub use path::default_db_path;
pub use store::Store;

/// Engine value type used by the binding extension and decoded records.
pub use rusqlite::types::Value;
