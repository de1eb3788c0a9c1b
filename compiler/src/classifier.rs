use crate::{
    error::CodingError,
    types::{BaseType, FieldDescriptor, FieldKind, RawField, RawType, SchemaSource, StructureDescriptor},
};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // The two accepted name shapes: a simple identifier, or a single-dot
    // qualified identifier. Anything else is an unresolved expression.
    static ref SIMPLE_NAME: Regex = Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").unwrap();
    static ref QUALIFIED_NAME: Regex =
        Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*\.[A-Za-z_][A-Za-z0-9_]*$").unwrap();
}

/// Classify every type declared in a schema source, in declaration order.
pub fn classify_source(source: &SchemaSource) -> Result<Vec<StructureDescriptor>, CodingError> {
    let mut descriptors = Vec::with_capacity(source.types.len());
    for raw in &source.types {
        descriptors.push(classify_type(raw)?);
    }
    Ok(descriptors)
}

/// Turn one raw type declaration into a structure descriptor, applying
/// the per-field classification rules in field order. A repeated field's
/// count reference must name a field classified earlier in this same
/// type, so the count is always decoded before the sequence it governs.
pub fn classify_type(raw: &RawType) -> Result<StructureDescriptor, CodingError> {
    let mut fields: Vec<FieldDescriptor> = Vec::with_capacity(raw.fields.len());
    for field in &raw.fields {
        let descriptor = classify_field(field, &fields)?;
        fields.push(descriptor);
    }
    Ok(StructureDescriptor {
        type_name: raw.name.clone(),
        fields,
    })
}

fn classify_field(
    raw: &RawField,
    earlier: &[FieldDescriptor],
) -> Result<FieldDescriptor, CodingError> {
    if raw.name.is_empty() {
        return Err(CodingError::UnsupportedField {
            declared: raw.type_expr.clone(),
            line: raw.line,
            column: raw.column,
        });
    }

    let (element, is_array) = match raw.type_expr.strip_suffix("[]") {
        Some(element) => (element, true),
        None => (raw.type_expr.as_str(), false),
    };
    if !SIMPLE_NAME.is_match(element) && !QUALIFIED_NAME.is_match(element) {
        return Err(CodingError::UnresolvedType {
            field: raw.name.clone(),
            expr: raw.type_expr.clone(),
        });
    }

    let kind = if is_array {
        let count_field = raw
            .count_field
            .clone()
            .ok_or_else(|| CodingError::MissingCountTag {
                field: raw.name.clone(),
            })?;
        if !earlier.iter().any(|f| f.name == count_field) {
            return Err(CodingError::UnknownCountField {
                field: raw.name.clone(),
                count: count_field,
            });
        }
        FieldKind::Repeated {
            count_field,
            element_type: element.to_string(),
        }
    } else if let Some(base) = BaseType::from_name(element) {
        FieldKind::Scalar { base }
    } else {
        FieldKind::Composite
    };

    Ok(FieldDescriptor {
        name: raw.name.clone(),
        declared_type: raw.type_expr.clone(),
        kind,
    })
}
