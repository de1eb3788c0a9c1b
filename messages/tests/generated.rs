use peerwire_compiler::{compile_schema, generate_coding};

// The committed coding modules must match what `peerwire gen` emits from
// `block.wire` today.
#[test]
fn generated_coding_is_up_to_date() {
    let descriptors = compile_schema(include_str!("../block.wire")).expect("compile failed");

    let expected = [
        ("BlockHeader", include_str!("../src/block_header_coding.rs")),
        ("MsgTx", include_str!("../src/msg_tx_coding.rs")),
        ("MsgBlock", include_str!("../src/msg_block_coding.rs")),
    ];

    for (type_name, committed) in expected {
        let descriptor = descriptors
            .iter()
            .find(|d| d.type_name == type_name)
            .expect("type missing from schema");
        assert_eq!(
            generate_coding(descriptor),
            committed,
            "stale coding module for {}; rerun peerwire gen",
            type_name
        );
    }
}
