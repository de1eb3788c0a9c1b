use std::time::{Duration, UNIX_EPOCH};

use peerwire_base::{ByteCursor, Wire, WireError};
use peerwire_messages::{BlockHeader, MsgBlock, MsgTx};

fn sample_header() -> BlockHeader {
    BlockHeader {
        version: 2,
        prev_block: [0x11; 32],
        merkle_root: [0x22; 32],
        timestamp: UNIX_EPOCH + Duration::from_secs(0x5dc1_7800),
        bits: 0x1d00_ffff,
        nonce: 0x9962_e301,
    }
}

fn sample_tx(tag: u8) -> MsgTx {
    MsgTx {
        hash: [tag; 32],
        index: u32::from(tag),
    }
}

#[test]
fn block_header_round_trip() {
    let header = sample_header();
    let bytes = header.encode_to_vec().expect("encode failed");
    assert_eq!(bytes.len(), 80);

    // Spot-check the layout: little-endian version up front, the previous
    // block hash right after it, seconds-since-epoch at offset 68.
    assert_eq!(bytes[0..4], [0x02, 0x00, 0x00, 0x00]);
    assert_eq!(bytes[4..36], [0x11; 32]);
    assert_eq!(bytes[68..72], [0x00, 0x78, 0xc1, 0x5d]);

    assert_eq!(BlockHeader::decode_from_slice(&bytes), Ok(header));
}

#[test]
fn msg_tx_round_trip() {
    let tx = sample_tx(7);
    let bytes = tx.encode_to_vec().expect("encode failed");
    assert_eq!(bytes.len(), 36);
    assert_eq!(MsgTx::decode_from_slice(&bytes), Ok(tx));
}

#[test]
fn msg_block_round_trip() {
    let block = MsgBlock {
        header: sample_header(),
        txn_count: 2,
        txn: vec![sample_tx(1), sample_tx(2)],
    };
    let bytes = block.encode_to_vec().expect("encode failed");
    assert_eq!(bytes.len(), 80 + 1 + 2 * 36);
    // A small transaction count takes a single varint byte.
    assert_eq!(bytes[80], 2);

    let decoded = MsgBlock::decode_from_slice(&bytes).expect("decode failed");
    assert_eq!(decoded.txn.len(), 2);
    assert_eq!(decoded.txn[0], sample_tx(1));
    assert_eq!(decoded.txn[1], sample_tx(2));
    assert_eq!(decoded, block);
}

#[test]
fn truncated_input_is_rejected() {
    assert!(matches!(
        BlockHeader::decode_from_slice(&[]),
        Err(WireError::TruncatedInput { .. })
    ));

    let block = MsgBlock {
        header: sample_header(),
        txn_count: 1,
        txn: vec![sample_tx(1)],
    };
    let bytes = block.encode_to_vec().expect("encode failed");
    assert!(matches!(
        MsgBlock::decode_from_slice(&bytes[..bytes.len() - 4]),
        Err(WireError::TruncatedInput { .. })
    ));
}

#[test]
fn non_canonical_txn_count_is_rejected() {
    let mut bytes = sample_header().encode_to_vec().expect("encode failed");
    // Count 0 padded out to the 2-byte varint form.
    bytes.extend_from_slice(&[0xfd, 0x00, 0x00]);
    assert_eq!(
        MsgBlock::decode_from_slice(&bytes),
        Err(WireError::NonCanonicalEncoding {
            value: 0,
            discriminant: 0xfd,
            min: 0xfd,
        })
    );
}

#[test]
fn stale_txn_count_is_encoded_verbatim() {
    // The count field is written from its own stored value, never derived
    // from the sequence length, so an out-of-sync block still encodes.
    let block = MsgBlock {
        header: sample_header(),
        txn_count: 1,
        txn: vec![sample_tx(1), sample_tx(2)],
    };
    let bytes = block.encode_to_vec().expect("encode failed");
    assert_eq!(bytes.len(), 80 + 1 + 2 * 36);

    let mut cursor = ByteCursor::new(&bytes);
    let decoded = MsgBlock::decode(&mut cursor).expect("decode failed");
    assert_eq!(decoded.txn.len(), 1);
    assert_eq!(cursor.remaining(), 36);
}
