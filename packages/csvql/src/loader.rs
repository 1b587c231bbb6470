//! Transactional bulk load of one CSV source into one table.

use std::path::Path;

use rusqlite::{Connection, params_from_iter};

use crate::coerce::bind_row;
use crate::ddl::{self, ConstraintPlan};
use crate::descriptor::TypeDescriptor;
use crate::error::Error;
use crate::options::CsvOptions;

/// Creates the descriptor's table and streams the CSV source into it inside
/// a single transaction.
///
/// The transaction commits only after schema creation, index creation, and
/// every row insert have succeeded; the first failure at any stage rolls the
/// whole unit back, so a partially loaded table is never observable. Rows are
/// inserted strictly in source order through one prepared statement, so a
/// constraint violation is attributable to the offending record.
pub(crate) fn load_table(
    conn: &mut Connection,
    descriptor: &TypeDescriptor,
    source: &Path,
    options: &CsvOptions,
) -> Result<(), Error> {
    // Dropping the transaction without an explicit commit rolls it back,
    // which covers every early return below.
    let tx = conn.transaction()?;

    let plan = ConstraintPlan::of(descriptor);
    let create = ddl::create_table_sql(descriptor, &plan);
    tracing::debug!(table = %descriptor.table_name, "creating table");
    tx.execute(&create, [])?;
    for index in &plan.index_statements {
        tx.execute(index, [])?;
    }

    let mut inserted: u64 = 0;
    {
        let mut insert = tx.prepare(&ddl::insert_sql(descriptor))?;
        let mut reader = options.reader_builder().from_path(source)?;
        for (i, record) in reader.records().enumerate() {
            let record = record?;
            let values = bind_row(&record, descriptor, i as u64 + 1)?;
            insert.execute(params_from_iter(values))?;
            inserted += 1;
        }
    }

    tracing::debug!(
        table = %descriptor.table_name,
        rows = inserted,
        "committing load"
    );
    tx.commit()?;
    Ok(())
}
