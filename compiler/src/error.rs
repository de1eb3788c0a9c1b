use thiserror::Error;

/// Generation-time failures. Every variant is terminal for the run:
/// the invoker gets the diagnostic and no partial output is written.
#[derive(Debug, Error)]
pub enum CodingError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error at line {line}, column {column}: {msg}")]
    ParseError {
        msg: String,
        line: usize,
        column: usize,
    },

    #[error("Anonymous field of type {declared} at line {line}, column {column} is not supported")]
    UnsupportedField {
        declared: String,
        line: usize,
        column: usize,
    },

    #[error("Cannot resolve type expression {expr} for field \"{field}\"")]
    UnresolvedType { field: String, expr: String },

    #[error("Repeated field \"{field}\" must name a count field")]
    MissingCountTag { field: String },

    #[error("Repeated field \"{field}\" names count field \"{count}\", which is not declared earlier in the same type")]
    UnknownCountField { field: String, count: String },

    #[error("Type \"{0}\" not found in the schema source")]
    TypeNotFound(String),

    #[error("Expected exactly one .wire schema in {dir}, found {found}")]
    AmbiguousSchemaSource { dir: String, found: usize },
}
