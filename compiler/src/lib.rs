//! peerwire-compiler
//!
//! This crate implements:
//!  1) A tokenizer + parser for `.wire` schema files,
//!  2) The field descriptor model (`StructureDescriptor`, `FieldDescriptor`),
//!  3) The classifier turning raw field declarations into descriptors,
//!  4) Code emission (`generate_coding` → `String`) targeting the
//!     `peerwire-base` runtime,
//!  5) Error types (`CodingError`).

pub mod classifier;
pub mod error;
pub mod gen_rust;
pub mod parser;
pub mod tokenizer;
pub mod types;
pub mod utils;

pub use classifier::{classify_source, classify_type};
pub use gen_rust::{coding_file_name, generate_coding};
pub use parser::parse_schema;
pub use tokenizer::tokenize_schema;

use error::CodingError;
use types::StructureDescriptor;

/// Compile a textual schema into the ordered structure descriptors it
/// declares. Returns `Err(CodingError)` if tokenization, parsing, or
/// classification fails.
pub fn compile_schema(text: &str) -> Result<Vec<StructureDescriptor>, CodingError> {
    let tokens = tokenize_schema(text)?;
    let source = parse_schema(&tokens)?;
    classify_source(&source)
}
