#![cfg(test)]

use peerwire_compiler::{
    classifier::classify_type,
    compile_schema,
    error::CodingError,
    gen_rust::{coding_file_name, generate_coding},
    parser::parse_schema,
    tokenizer::tokenize_schema,
    types::{BaseType, FieldKind, RawField, RawType},
};

const BLOCK_SCHEMA: &str = r#"
    package message;

    struct BlockHeader {
      Int32 Version;
      Hash PrevBlock;
      Hash MerkleRoot;
      Uint32Time Timestamp;
      Uint32 Bits;
      Uint32 Nonce;
    }

    struct MsgTx {
      Hash Hash;
      Uint32 Index;
    }

    struct MsgBlock {
      BlockHeader Header;
      VarInt TxnCount;
      MsgTx[] Txn = TxnCount;
    }
    "#;

fn raw_field(name: &str, type_expr: &str, count: Option<&str>) -> RawField {
    RawField {
        name: name.to_string(),
        type_expr: type_expr.to_string(),
        count_field: count.map(str::to_string),
        line: 1,
        column: 1,
    }
}

fn raw_type(name: &str, fields: Vec<RawField>) -> RawType {
    RawType {
        name: name.to_string(),
        line: 1,
        column: 1,
        fields,
    }
}

#[test]
fn test_parse_schema() {
    let tokens = tokenize_schema(BLOCK_SCHEMA).expect("tokenize_schema failed");
    let source = parse_schema(&tokens).expect("parse_schema failed");

    assert_eq!(source.package.as_deref(), Some("message"));
    assert_eq!(source.types.len(), 3);

    let header = &source.types[0];
    assert_eq!(header.name, "BlockHeader");
    assert_eq!(header.fields.len(), 6);
    assert_eq!(header.fields[0].name, "Version");
    assert_eq!(header.fields[0].type_expr, "Int32");
    assert_eq!(header.fields[0].count_field, None);
    assert_eq!(header.fields[3].name, "Timestamp");
    assert_eq!(header.fields[3].type_expr, "Uint32Time");

    let tx = &source.types[1];
    assert_eq!(tx.name, "MsgTx");
    assert_eq!(tx.fields.len(), 2);
    assert_eq!(tx.fields[0].name, "Hash");
    assert_eq!(tx.fields[0].type_expr, "Hash");

    let block = &source.types[2];
    assert_eq!(block.name, "MsgBlock");
    assert_eq!(block.fields.len(), 3);
    assert_eq!(block.fields[0].type_expr, "BlockHeader");
    assert_eq!(block.fields[2].name, "Txn");
    assert_eq!(block.fields[2].type_expr, "MsgTx[]");
    assert_eq!(block.fields[2].count_field.as_deref(), Some("TxnCount"));
}

#[test]
fn test_tokenizer_rejects_stray_characters() {
    let err = tokenize_schema("struct Foo { @ }").unwrap_err();
    assert!(matches!(err, CodingError::ParseError { .. }));
}

#[test]
fn test_parser_reports_position() {
    let tokens = tokenize_schema("struct Foo {").expect("tokenize_schema failed");
    match parse_schema(&tokens).unwrap_err() {
        CodingError::ParseError { line, .. } => assert_eq!(line, 1),
        other => panic!("expected ParseError, got {:?}", other),
    }
}

#[test]
fn test_classify_kinds() {
    let descriptor = classify_type(&raw_type(
        "MsgBlock",
        vec![
            raw_field("Header", "BlockHeader", None),
            raw_field("TxnCount", "VarInt", None),
            raw_field("Txn", "MsgTx[]", Some("TxnCount")),
        ],
    ))
    .expect("classify_type failed");

    assert_eq!(descriptor.type_name, "MsgBlock");
    assert_eq!(descriptor.fields.len(), 3);
    assert_eq!(descriptor.fields[0].kind, FieldKind::Composite);
    assert_eq!(
        descriptor.fields[1].kind,
        FieldKind::Scalar {
            base: BaseType::VarInt
        }
    );
    assert_eq!(
        descriptor.fields[2].kind,
        FieldKind::Repeated {
            count_field: "TxnCount".to_string(),
            element_type: "MsgTx".to_string(),
        }
    );
}

#[test]
fn test_classify_recognizes_all_primitives() {
    let descriptor = classify_type(&raw_type(
        "Sample",
        vec![
            raw_field("A", "Hash", None),
            raw_field("B", "VarInt", None),
            raw_field("C", "Uint32", None),
            raw_field("D", "Int32", None),
            raw_field("E", "Uint32Time", None),
        ],
    ))
    .expect("classify_type failed");

    let bases: Vec<BaseType> = descriptor
        .fields
        .iter()
        .map(|f| match f.kind {
            FieldKind::Scalar { base } => base,
            _ => panic!("expected scalar field"),
        })
        .collect();
    assert_eq!(
        bases,
        [
            BaseType::Hash,
            BaseType::VarInt,
            BaseType::Uint32,
            BaseType::Int32,
            BaseType::Uint32Time,
        ]
    );
}

#[test]
fn test_classify_rejects_anonymous_field() {
    let err = classify_type(&raw_type("Hoge", vec![raw_field("", "Fuga", None)])).unwrap_err();
    assert!(matches!(err, CodingError::UnsupportedField { .. }));
}

#[test]
fn test_classify_rejects_array_without_count() {
    let err = classify_type(&raw_type(
        "MsgBlock",
        vec![
            raw_field("TxnCount", "VarInt", None),
            raw_field("Txn", "MsgTx[]", None),
        ],
    ))
    .unwrap_err();
    assert!(matches!(err, CodingError::MissingCountTag { .. }));
}

#[test]
fn test_classify_rejects_unknown_count_reference() {
    // Count field missing entirely.
    let err = classify_type(&raw_type(
        "MsgBlock",
        vec![raw_field("Txn", "MsgTx[]", Some("TxnCount"))],
    ))
    .unwrap_err();
    assert!(matches!(err, CodingError::UnknownCountField { .. }));

    // Count field declared after the repeated field it governs.
    let err = classify_type(&raw_type(
        "MsgBlock",
        vec![
            raw_field("Txn", "MsgTx[]", Some("TxnCount")),
            raw_field("TxnCount", "VarInt", None),
        ],
    ))
    .unwrap_err();
    assert!(matches!(err, CodingError::UnknownCountField { .. }));
}

#[test]
fn test_classify_rejects_malformed_type_expression() {
    for expr in ["Vec<MsgTx>", "a.b.c", "[]MsgTx", ""] {
        let err =
            classify_type(&raw_type("Hoge", vec![raw_field("Field", expr, None)])).unwrap_err();
        assert!(
            matches!(err, CodingError::UnresolvedType { .. }),
            "expression {:?} should not resolve",
            expr
        );
    }
}

#[test]
fn test_classify_qualified_name_is_composite() {
    let descriptor = classify_type(&raw_type(
        "Hoge",
        vec![raw_field("Fuga", "other.Fuga", None)],
    ))
    .expect("classify_type failed");
    assert_eq!(descriptor.fields[0].kind, FieldKind::Composite);
}

#[test]
fn test_generate_coding_for_block() {
    let descriptors = compile_schema(BLOCK_SCHEMA).expect("compile_schema failed");

    let block = descriptors
        .iter()
        .find(|d| d.type_name == "MsgBlock")
        .expect("MsgBlock missing");
    let code = generate_coding(block);
    assert!(code.starts_with("// Code generated by \"peerwire gen -t MsgBlock\"; DO NOT EDIT."));
    assert!(code.contains("use super::{BlockHeader, MsgBlock, MsgTx};"));
    assert!(code.contains("impl Wire for MsgBlock {"));
    assert!(code.contains("let header = BlockHeader::decode(cursor)?;"));
    assert!(code.contains("let txn_count = basetype::decode_var_int(cursor)?;"));
    assert!(code.contains("let mut txn = Vec::with_capacity(txn_count as usize);"));
    assert!(code.contains("for _ in 0..txn_count {"));
    assert!(code.contains("txn.push(MsgTx::decode(cursor)?);"));
    assert!(code.contains("let m = MsgBlock { header, txn_count, txn };"));
    assert!(code.contains("basetype::encode_var_int(sink, self.txn_count)?;"));
    assert!(code.contains("for m in &self.txn {"));

    let header = descriptors
        .iter()
        .find(|d| d.type_name == "BlockHeader")
        .expect("BlockHeader missing");
    let code = generate_coding(header);
    assert!(code.contains("use super::BlockHeader;"));
    assert!(code.contains("let version = basetype::decode_int32(cursor)?;"));
    assert!(code.contains(
        "let b = BlockHeader { version, prev_block, merkle_root, timestamp, bits, nonce };"
    ));
    assert!(code.contains("basetype::encode_uint32_time(sink, self.timestamp)?;"));
}

#[test]
fn test_coding_file_name() {
    assert_eq!(coding_file_name("BlockHeader"), "block_header_coding.rs");
    assert_eq!(coding_file_name("MsgTx"), "msg_tx_coding.rs");
    assert_eq!(coding_file_name("MsgBlock"), "msg_block_coding.rs");
}
