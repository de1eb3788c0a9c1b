use std::collections::BTreeSet;

use crate::types::{FieldKind, StructureDescriptor};

/// Converts a string to snake_case.
/// This implementation avoids inserting underscores between consecutive
/// uppercase letters, so that acronyms remain intact (e.g. "sessionID"
/// becomes "session_id").
fn to_snake_case(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut snake = String::new();
    for i in 0..chars.len() {
        let c = chars[i];
        if c.is_uppercase() {
            if i > 0 {
                let prev = chars[i - 1];
                // Insert an underscore if the previous character is not
                // uppercase, or if the next character exists and is lowercase.
                if !prev.is_uppercase() || (i + 1 < chars.len() && chars[i + 1].is_lowercase()) {
                    snake.push('_');
                }
            }
            snake.push(c.to_ascii_lowercase());
        } else {
            snake.push(c);
        }
    }
    snake
}

/// The canonical receiver symbol for a type: its first letter, lower-cased.
/// A naming convention with no semantic weight.
fn receiver_symbol(type_name: &str) -> String {
    type_name
        .rsplit('.')
        .next()
        .and_then(|segment| segment.chars().next())
        .map(|c| c.to_ascii_lowercase().to_string())
        .unwrap_or_else(|| "v".to_string())
}

/// A declared type name as a Rust path: qualified names become `::` paths.
fn rust_path(type_name: &str) -> String {
    type_name.replace('.', "::")
}

/// Output file name for a type's coding module.
pub fn coding_file_name(type_name: &str) -> String {
    format!("{}_coding.rs", to_snake_case(type_name))
}

/// The unqualified message types the generated module references, for the
/// `use super::{...}` import. Qualified names resolve through their own
/// path and are left out.
fn referenced_types(desc: &StructureDescriptor) -> Vec<String> {
    let mut names = BTreeSet::new();
    names.insert(desc.type_name.clone());
    for field in &desc.fields {
        match &field.kind {
            FieldKind::Composite => {
                if !field.declared_type.contains('.') {
                    names.insert(field.declared_type.clone());
                }
            }
            FieldKind::Repeated { element_type, .. } => {
                if !element_type.contains('.') {
                    names.insert(element_type.clone());
                }
            }
            FieldKind::Scalar { .. } => {}
        }
    }
    names.into_iter().collect()
}

/// Emit the complete coding module for one classified type: a `Wire`
/// implementation decoding fields in declared order and encoding them
/// back in the same order. Once a descriptor has passed classification,
/// emission cannot fail.
pub fn generate_coding(desc: &StructureDescriptor) -> String {
    let type_name = desc.type_name.as_str();
    let receiver = receiver_symbol(type_name);
    let mut lines: Vec<String> = Vec::new();

    lines.push(format!(
        "// Code generated by \"peerwire gen -t {}\"; DO NOT EDIT.",
        type_name
    ));
    lines.push(String::new());
    if desc
        .fields
        .iter()
        .any(|f| matches!(f.kind, FieldKind::Scalar { .. }))
    {
        lines.push("use peerwire_base::basetype;".to_string());
    }
    lines.push("use peerwire_base::{ByteCursor, ByteSink, Wire, WireError};".to_string());
    lines.push(String::new());

    let referenced = referenced_types(desc);
    if referenced.len() == 1 {
        lines.push(format!("use super::{};", referenced[0]));
    } else {
        lines.push(format!("use super::{{{}}};", referenced.join(", ")));
    }
    lines.push(String::new());

    lines.push(format!("impl Wire for {} {{", type_name));

    lines.push("    fn decode(cursor: &mut ByteCursor<'_>) -> Result<Self, WireError> {".to_string());
    for field in &desc.fields {
        let local = to_snake_case(&field.name);
        lines.push(format!("        // {}", field.name));
        match &field.kind {
            FieldKind::Scalar { base } => {
                lines.push(format!(
                    "        let {} = basetype::{}(cursor)?;",
                    local,
                    base.decode_fn()
                ));
            }
            FieldKind::Composite => {
                lines.push(format!(
                    "        let {} = {}::decode(cursor)?;",
                    local,
                    rust_path(&field.declared_type)
                ));
            }
            FieldKind::Repeated {
                count_field,
                element_type,
            } => {
                let count = to_snake_case(count_field);
                lines.push(format!(
                    "        let mut {} = Vec::with_capacity({} as usize);",
                    local, count
                ));
                lines.push(format!("        for _ in 0..{} {{", count));
                lines.push(format!(
                    "            {}.push({}::decode(cursor)?);",
                    local,
                    rust_path(element_type)
                ));
                lines.push("        }".to_string());
            }
        }
    }
    let field_list = desc
        .fields
        .iter()
        .map(|f| to_snake_case(&f.name))
        .collect::<Vec<_>>()
        .join(", ");
    lines.push(format!(
        "        let {} = {} {{ {} }};",
        receiver, type_name, field_list
    ));
    lines.push(format!("        Ok({})", receiver));
    lines.push("    }".to_string());
    lines.push(String::new());

    lines.push("    fn encode(&self, sink: &mut ByteSink) -> Result<(), WireError> {".to_string());
    for field in &desc.fields {
        let local = to_snake_case(&field.name);
        lines.push(format!("        // {}", field.name));
        match &field.kind {
            FieldKind::Scalar { base } => {
                lines.push(format!(
                    "        basetype::{}(sink, self.{})?;",
                    base.encode_fn(),
                    local
                ));
            }
            FieldKind::Composite => {
                lines.push(format!("        self.{}.encode(sink)?;", local));
            }
            FieldKind::Repeated { element_type, .. } => {
                let elem = receiver_symbol(element_type);
                lines.push(format!("        for {} in &self.{} {{", elem, local));
                lines.push(format!("            {}.encode(sink)?;", elem));
                lines.push("        }".to_string());
            }
        }
    }
    lines.push("        Ok(())".to_string());
    lines.push("    }".to_string());
    lines.push("}".to_string());

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
