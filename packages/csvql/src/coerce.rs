//! Conversion of raw CSV records into positional bind values.

use csv::StringRecord;
use rusqlite::types::Value;

use crate::descriptor::TypeDescriptor;
use crate::error::Error;

/// Converts one CSV record into bind values for the prepared INSERT.
///
/// Tokens map positionally onto the descriptor's fields. For a nullable
/// column, a token that trims to the empty string, `null`, or `NULL` binds
/// SQL NULL. Every other token is bound as raw text and left to SQLite's
/// type affinity to convert into the declared column type.
///
/// Non-nullable columns never receive a substituted NULL: an empty token on
/// a NOT NULL TEXT column stores the empty string, and on a NOT NULL numeric
/// column it is passed through for the engine to accept or reject.
///
/// `position` is the 1-based data-record number, used only for error
/// attribution.
pub fn bind_row(
    record: &StringRecord,
    descriptor: &TypeDescriptor,
    position: u64,
) -> Result<Vec<Value>, Error> {
    if record.len() != descriptor.fields.len() {
        return Err(Error::MismatchedColumnCount {
            table: descriptor.table_name.clone(),
            expected: descriptor.fields.len(),
            got: record.len(),
            record: position,
        });
    }

    let values = record
        .iter()
        .zip(&descriptor.fields)
        .map(|(token, field)| {
            if field.nullable && is_null_token(token) {
                Value::Null
            } else {
                Value::Text(token.to_string())
            }
        })
        .collect();
    Ok(values)
}

fn is_null_token(token: &str) -> bool {
    matches!(token.trim(), "" | "null" | "NULL")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::{FieldSpec, FieldType, RecordShape, ShapeKind};
    use crate::error::ErrorKind;

    fn descriptor(specs: Vec<FieldSpec>) -> TypeDescriptor {
        TypeDescriptor::from_shape(RecordShape {
            type_name: "T",
            kind: ShapeKind::Struct(specs),
        })
        .unwrap()
    }

    fn record(tokens: &[&str]) -> StringRecord {
        StringRecord::from(tokens.to_vec())
    }

    #[test]
    fn tokens_pass_through_as_text() {
        let desc = descriptor(vec![
            FieldSpec::new("id", FieldType::I64),
            FieldSpec::new("score", FieldType::F64),
        ]);
        let values = bind_row(&record(&["1", "91.5"]), &desc, 1).unwrap();
        assert_eq!(
            values,
            vec![Value::Text("1".into()), Value::Text("91.5".into())]
        );
    }

    #[test]
    fn null_tokens_on_nullable_columns_bind_null() {
        let desc = descriptor(vec![FieldSpec::new(
            "note",
            FieldType::Optional(Box::new(FieldType::Text)),
        )]);
        for token in ["", "  ", "null", "NULL", " null "] {
            let values = bind_row(&record(&[token]), &desc, 1).unwrap();
            assert_eq!(values, vec![Value::Null], "token {token:?}");
        }
    }

    #[test]
    fn mixed_case_null_is_not_substituted() {
        let desc = descriptor(vec![FieldSpec::new(
            "note",
            FieldType::Optional(Box::new(FieldType::Text)),
        )]);
        let values = bind_row(&record(&["Null"]), &desc, 1).unwrap();
        assert_eq!(values, vec![Value::Text("Null".into())]);
    }

    #[test]
    fn non_nullable_columns_never_get_null() {
        let desc = descriptor(vec![
            FieldSpec::new("name", FieldType::Text),
            FieldSpec::new("count", FieldType::I64),
        ]);
        let values = bind_row(&record(&["", "null"]), &desc, 1).unwrap();
        assert_eq!(
            values,
            vec![Value::Text("".into()), Value::Text("null".into())]
        );
    }

    #[test]
    fn width_mismatch_is_a_shape_error() {
        let desc = descriptor(vec![
            FieldSpec::new("a", FieldType::I64),
            FieldSpec::new("b", FieldType::I64),
            FieldSpec::new("c", FieldType::I64),
        ]);
        let err = bind_row(&record(&["1", "2"]), &desc, 4).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Shape);
        match err {
            Error::MismatchedColumnCount {
                expected,
                got,
                record,
                ..
            } => {
                assert_eq!((expected, got, record), (3, 2, 4));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
