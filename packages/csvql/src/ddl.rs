//! SQL statement synthesis from a type descriptor.
//!
//! All emitted statements are deterministic for identical input: columns
//! follow field declaration order, and constraints and indexes are emitted
//! in field order, then annotation order within a field.

use crate::descriptor::{FieldDescriptor, SemanticType, TypeDescriptor};
use crate::tag::Tag;

/// Constraint placement derived from a [`TypeDescriptor`].
///
/// A `unique` tag on a nullable field never becomes a table constraint; it is
/// planned as a unique partial index excluding NULLs, so that multiple NULL
/// rows coexist while non-NULL duplicates are rejected.
#[derive(Debug, Clone, Default)]
pub struct ConstraintPlan {
    /// `CONSTRAINT ...` fragments for the CREATE TABLE body
    pub table_constraints: Vec<String>,
    /// Complete `CREATE [UNIQUE] INDEX ...;` statements
    pub index_statements: Vec<String>,
}

impl ConstraintPlan {
    /// Plans constraint placement for every tagged field of the descriptor.
    ///
    /// Tags are placed independently; a field tagged both `primarykey` and
    /// `unique` contributes two constraints. Redundant DDL from duplicate
    /// tags is passed through as written.
    pub fn of(descriptor: &TypeDescriptor) -> Self {
        let table = &descriptor.table_name;
        let mut plan = Self::default();
        for field in &descriptor.fields {
            for tag in &field.tags {
                match tag {
                    Tag::None => {}
                    Tag::PrimaryKey => plan.table_constraints.push(format!(
                        "CONSTRAINT PK_{table}_{field} PRIMARY KEY({col})",
                        field = field.name,
                        col = quote(&field.name),
                    )),
                    Tag::Unique if field.nullable => plan.index_statements.push(format!(
                        "CREATE UNIQUE INDEX Unique_{table}_{field} ON {tbl}({col}) WHERE {col} IS NOT NULL;",
                        field = field.name,
                        tbl = quote(table),
                        col = quote(&field.name),
                    )),
                    Tag::Unique => plan.table_constraints.push(format!(
                        "CONSTRAINT Unique_{table}_{field} UNIQUE({col})",
                        field = field.name,
                        col = quote(&field.name),
                    )),
                    Tag::Index => plan.index_statements.push(format!(
                        "CREATE INDEX NonClustered_{table}_{field} ON {tbl}({col});",
                        field = field.name,
                        tbl = quote(table),
                        col = quote(&field.name),
                    )),
                }
            }
        }
        plan
    }
}

/// Builds the CREATE TABLE statement for a descriptor and its plan.
pub fn create_table_sql(descriptor: &TypeDescriptor, plan: &ConstraintPlan) -> String {
    let mut parts: Vec<String> = descriptor.fields.iter().map(column_def).collect();
    parts.extend(plan.table_constraints.iter().cloned());
    format!(
        "CREATE TABLE {}({});",
        quote(&descriptor.table_name),
        parts.join(", ")
    )
}

/// Builds the parameterized INSERT statement, one placeholder per field.
pub fn insert_sql(descriptor: &TypeDescriptor) -> String {
    let placeholders = vec!["?"; descriptor.fields.len()].join(", ");
    format!(
        "INSERT INTO {} VALUES ({});",
        quote(&descriptor.table_name),
        placeholders
    )
}

fn column_def(field: &FieldDescriptor) -> String {
    let col = quote(&field.name);
    let null = if field.nullable { "NULL" } else { "NOT NULL" };
    match field.semantic_type {
        SemanticType::Bool => format!("{col} INTEGER {null} CHECK({col} IN (0,1))"),
        SemanticType::Int => format!("{col} INTEGER {null}"),
        SemanticType::Float => format!("{col} REAL {null}"),
        SemanticType::String => format!("{col} TEXT {null}"),
    }
}

/// Double-quotes an identifier so reserved words and mixed case survive.
///
/// Double quotes, not single: a single-quoted name in expression position
/// (the partial index WHERE clause) would parse as a string literal and make
/// the predicate vacuously true.
fn quote(ident: &str) -> String {
    format!("\"{}\"", ident.replace('"', "\"\""))
}
