use serde::Serialize;

/// One field as written in the schema source, before classification:
/// a name, the declared type expression, and the optional count-field
/// reference for repeated fields. The parser produces these, but any
/// producer of ordered raw declarations satisfies the contract.
#[derive(Debug, Clone, PartialEq)]
pub struct RawField {
    pub name: String,
    pub type_expr: String,
    pub count_field: Option<String>,
    pub line: usize,
    pub column: usize,
}

/// One type as written in the schema source.
#[derive(Debug, Clone, PartialEq)]
pub struct RawType {
    pub name: String,
    pub line: usize,
    pub column: usize,
    pub fields: Vec<RawField>,
}

/// A parsed schema file: optional package name plus raw type declarations.
#[derive(Debug, PartialEq)]
pub struct SchemaSource {
    pub package: Option<String>,
    pub types: Vec<RawType>,
}

/// The recognized primitive wire types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BaseType {
    Hash,
    VarInt,
    Uint32,
    Int32,
    Uint32Time,
}

impl BaseType {
    pub fn from_name(name: &str) -> Option<BaseType> {
        match name {
            "Hash" => Some(BaseType::Hash),
            "VarInt" => Some(BaseType::VarInt),
            "Uint32" => Some(BaseType::Uint32),
            "Int32" => Some(BaseType::Int32),
            "Uint32Time" => Some(BaseType::Uint32Time),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            BaseType::Hash => "Hash",
            BaseType::VarInt => "VarInt",
            BaseType::Uint32 => "Uint32",
            BaseType::Int32 => "Int32",
            BaseType::Uint32Time => "Uint32Time",
        }
    }

    /// The `peerwire_base::basetype` decode routine emission dispatches to.
    pub fn decode_fn(self) -> &'static str {
        match self {
            BaseType::Hash => "decode_hash",
            BaseType::VarInt => "decode_var_int",
            BaseType::Uint32 => "decode_uint32",
            BaseType::Int32 => "decode_int32",
            BaseType::Uint32Time => "decode_uint32_time",
        }
    }

    /// The `peerwire_base::basetype` encode routine emission dispatches to.
    pub fn encode_fn(self) -> &'static str {
        match self {
            BaseType::Hash => "encode_hash",
            BaseType::VarInt => "encode_var_int",
            BaseType::Uint32 => "encode_uint32",
            BaseType::Int32 => "encode_int32",
            BaseType::Uint32Time => "encode_uint32_time",
        }
    }
}

/// How a classified field is carried on the wire.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum FieldKind {
    /// One of the recognized primitives; coded by `peerwire-base` directly.
    Scalar { base: BaseType },
    /// A type that satisfies the `Wire` contract itself; coded recursively.
    Composite,
    /// A length-driven element sequence. `count_field` names a sibling
    /// declared (and therefore decoded) earlier in the same type.
    Repeated {
        count_field: String,
        element_type: String,
    },
}

/// One classified schema field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldDescriptor {
    pub name: String,
    pub declared_type: String,
    pub kind: FieldKind,
}

/// The ordered schema for one message type. Insertion order is
/// serialization order; it is load-bearing, not cosmetic.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StructureDescriptor {
    pub type_name: String,
    pub fields: Vec<FieldDescriptor>,
}
