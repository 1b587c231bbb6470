//! Library error types.

use thiserror::Error;

/// Errors produced while turning a CSV file into a SQLite table.
#[derive(Error, Debug)]
pub enum Error {
    /// Record type is not a struct
    #[error("Type '{type_name}' is not a struct")]
    NotAStruct { type_name: String },

    /// Record type declares no fields
    #[error("Struct '{type_name}' has no fields")]
    NoFields { type_name: String },

    /// Field's declared type has no SQL mapping
    #[error("Field '{field}' of struct '{type_name}' has unsupported type '{declared}'")]
    UnsupportedFieldType {
        type_name: String,
        field: String,
        declared: String,
    },

    /// CSV record width differs from the table's column count
    #[error("Record {record} has {got} fields, table '{table}' has {expected} columns")]
    MismatchedColumnCount {
        table: String,
        expected: usize,
        got: usize,
        record: u64,
    },

    /// Source file could not be opened or read
    #[error("CSV source error: {0}")]
    Source(#[from] csv::Error),

    /// Failure reported by the SQLite engine
    #[error("SQLite error: {0}")]
    Engine(#[from] rusqlite::Error),
}

/// Coarse failure category, independent of message text.
///
/// Callers that branch on failure class should use [`Error::kind`] rather
/// than matching individual variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Record-type description was rejected before any I/O
    Validation,
    /// Data source could not be opened or read
    Source,
    /// A record's shape does not match the table schema
    Shape,
    /// The relational engine rejected a statement
    Engine,
}

impl Error {
    /// Returns the failure category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::NotAStruct { .. }
            | Error::NoFields { .. }
            | Error::UnsupportedFieldType { .. } => ErrorKind::Validation,
            Error::MismatchedColumnCount { .. } => ErrorKind::Shape,
            Error::Source(_) => ErrorKind::Source,
            Error::Engine(_) => ErrorKind::Engine,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_share_a_kind() {
        let errs = [
            Error::NotAStruct {
                type_name: "Foo".into(),
            },
            Error::NoFields {
                type_name: "Foo".into(),
            },
            Error::UnsupportedFieldType {
                type_name: "Foo".into(),
                field: "bar".into(),
                declared: "Vec<u8>".into(),
            },
        ];
        for e in errs {
            assert_eq!(e.kind(), ErrorKind::Validation);
        }
    }

    #[test]
    fn shape_error_kind_and_message() {
        let e = Error::MismatchedColumnCount {
            table: "People".into(),
            expected: 3,
            got: 2,
            record: 7,
        };
        assert_eq!(e.kind(), ErrorKind::Shape);
        assert_eq!(
            e.to_string(),
            "Record 7 has 2 fields, table 'People' has 3 columns"
        );
    }

    #[test]
    fn engine_error_preserves_sqlite_text() {
        let e = Error::from(rusqlite::Error::InvalidQuery);
        assert_eq!(e.kind(), ErrorKind::Engine);
        assert!(e.to_string().starts_with("SQLite error:"));
    }
}
