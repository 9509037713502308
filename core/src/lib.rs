//! Statement text model for the tablekit access layer.
//!
//! This crate defines the data types and rendering functions that turn
//! structured CRUD parameters into the exact command text executed by the
//! `tablekit-sqlite` facade. It has no dependency on any database engine;
//! everything here is plain text composition.
//!
//! - [`Row`] — an ordered mapping from column name to a pre-formatted SQL
//!   literal (quoting included by the caller).
//! - [`ColumnSpec`] — a raw column definition fragment used verbatim when
//!   creating a table.
//! - [`build`] — renderers for the five operations, preserving the exact
//!   dialect of the access layer (spacing and casing included).
//! - [`bind`] — renderers for the parameter-binding variants, which emit
//!   `?N` placeholders instead of spliced literals.
//!
//! No validation or escaping is performed anywhere in this crate. Callers
//! supply correctly quoted literals and well-formed fragments; malformed
//! input is rejected by the engine at compile time, not here.
//!
//! # Example
//!
//! ```
//! use tablekit_core::{Row, build};
//!
//! let row = Row::new().set("NAME", "'Bruce'").set("AGE", "18");
//! assert_eq!(
//!     build::insert("PERSON", &row),
//!     "INSERT INTO PERSON (NAME,AGE) VALUES ('Bruce',18)"
//! );
//! ```

pub mod bind;
pub mod build;
mod row;

pub use row::{ColumnSpec, Row};
