//! Public entry points: CSV file in, queryable SQLite handle out.

use std::path::Path;

use rusqlite::Connection;

use crate::descriptor::{Record, TypeDescriptor};
use crate::error::Error;
use crate::loader;
use crate::options::CsvOptions;

/// Creates an in-memory SQLite database holding one table synthesized from
/// `T` and loaded from the CSV file at `source`.
///
/// Assumes the default dialect: comma-delimited, no header row. Use
/// [`connect_with_options`] to customize. On success the returned handle is
/// immediately queryable; dropping it discards all data and schema. On
/// failure no usable table was created.
pub fn connect<T: Record>(source: impl AsRef<Path>) -> Result<Connection, Error> {
    connect_with_options::<T>(source, CsvOptions::default())
}

/// Like [`connect`], with an explicit CSV dialect.
pub fn connect_with_options<T: Record>(
    source: impl AsRef<Path>,
    options: CsvOptions,
) -> Result<Connection, Error> {
    let mut conn = Connection::open_in_memory()?;
    create_table_with_options::<T>(&mut conn, source, options)?;
    Ok(conn)
}

/// Adds one more table, synthesized from `T` and loaded from `source`, to an
/// already-open handle.
///
/// Assumes the default dialect; use [`create_table_with_options`] to
/// customize. The load is one atomic unit: on failure the handle is left
/// exactly as it was, with previously loaded tables untouched.
pub fn create_table<T: Record>(
    conn: &mut Connection,
    source: impl AsRef<Path>,
) -> Result<(), Error> {
    create_table_with_options::<T>(conn, source, CsvOptions::default())
}

/// Like [`create_table`], with an explicit CSV dialect.
pub fn create_table_with_options<T: Record>(
    conn: &mut Connection,
    source: impl AsRef<Path>,
    options: CsvOptions,
) -> Result<(), Error> {
    // Validation runs to completion before the source or the engine is
    // touched.
    let descriptor = TypeDescriptor::of::<T>()?;
    loader::load_table(conn, &descriptor, source.as_ref(), &options)
}
