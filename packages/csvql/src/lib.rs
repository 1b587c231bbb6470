//! Query CSV files with SQL through an in-memory SQLite database.
//!
//! `csvql` synthesizes a relational schema from a record-type description,
//! then bulk-loads a CSV file into it inside a single transaction. The
//! result is an ordinary [`rusqlite::Connection`] ready for arbitrary SQL.
//!
//! A record type describes one CSV row; per-field annotations
//! (`index`, `primarykey`, `unique`) become constraints and indexes, and
//! `Option` fields become nullable columns with empty/`null`/`NULL` tokens
//! stored as SQL NULL.
//!
//! ```no_run
//! use csvql::{FieldSpec, FieldType, Record, RecordShape, ShapeKind};
//!
//! struct Example {
//!     id: i64,
//!     name: String,
//!     test: f64,
//! }
//!
//! impl Record for Example {
//!     fn shape() -> RecordShape {
//!         RecordShape {
//!             type_name: "Example",
//!             kind: ShapeKind::Struct(vec![
//!                 FieldSpec::new("id", FieldType::I64),
//!                 FieldSpec::new("name", FieldType::Text),
//!                 FieldSpec::new("test", FieldType::F64),
//!             ]),
//!         }
//!     }
//! }
//!
//! # fn main() -> Result<(), csvql::Error> {
//! let conn = csvql::connect::<Example>("example.csv")?;
//! let _stmt = conn.prepare("SELECT name FROM Example WHERE test > 80;")?;
//! # Ok(())
//! # }
//! ```
//!
//! Loads are all-or-nothing: the first failure at any stage rolls back the
//! whole table, and the caller receives exactly one error.

pub mod coerce;
pub mod db;
pub mod ddl;
pub mod descriptor;
pub mod error;
mod loader;
pub mod options;
pub mod tag;

pub use db::{connect, connect_with_options, create_table, create_table_with_options};
pub use ddl::ConstraintPlan;
pub use descriptor::{
    FieldDescriptor, FieldSpec, FieldType, Record, RecordShape, SemanticType, ShapeKind,
    TypeDescriptor,
};
pub use error::{Error, ErrorKind};
pub use options::CsvOptions;
pub use tag::Tag;
