//! peerwire
//!
//! This crate is the front door to the peerwire workspace:
//!
//! - the runtime surface (`Wire`, `ByteCursor`, `ByteSink`, the `basetype`
//!   primitive codecs) re-exported from `peerwire-base`,
//! - the schema surface (descriptors, classification, code emission)
//!   re-exported from `peerwire-compiler`,
//! - a helper for rendering a classified schema as JSON.

pub use peerwire_base::{basetype, ByteCursor, ByteSink, Wire, WireError};
pub use peerwire_compiler::error::CodingError;
pub use peerwire_compiler::types::{BaseType, FieldDescriptor, FieldKind, StructureDescriptor};
pub use peerwire_compiler::{compile_schema, generate_coding};

/// Classify a schema source and render its structure descriptors as a
/// pretty-printed JSON string.
pub fn describe_schema(text: &str) -> Result<String, CodingError> {
    let descriptors = compile_schema(text)?;
    Ok(serde_json::to_string_pretty(&descriptors).unwrap())
}

pub mod traits {
    pub use peerwire_base::traits::Wire;
}

pub mod error {
    pub use peerwire_base::error::WireError;
    pub use peerwire_compiler::error::CodingError;
}

pub mod schema {
    pub use peerwire_compiler::types::{
        BaseType, FieldDescriptor, FieldKind, RawField, RawType, SchemaSource,
        StructureDescriptor,
    };
}
