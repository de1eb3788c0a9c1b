// Code generated by "peerwire gen -t BlockHeader"; DO NOT EDIT.

use peerwire_base::basetype;
use peerwire_base::{ByteCursor, ByteSink, Wire, WireError};

use super::BlockHeader;

impl Wire for BlockHeader {
    fn decode(cursor: &mut ByteCursor<'_>) -> Result<Self, WireError> {
        // Version
        let version = basetype::decode_int32(cursor)?;
        // PrevBlock
        let prev_block = basetype::decode_hash(cursor)?;
        // MerkleRoot
        let merkle_root = basetype::decode_hash(cursor)?;
        // Timestamp
        let timestamp = basetype::decode_uint32_time(cursor)?;
        // Bits
        let bits = basetype::decode_uint32(cursor)?;
        // Nonce
        let nonce = basetype::decode_uint32(cursor)?;
        let b = BlockHeader { version, prev_block, merkle_root, timestamp, bits, nonce };
        Ok(b)
    }

    fn encode(&self, sink: &mut ByteSink) -> Result<(), WireError> {
        // Version
        basetype::encode_int32(sink, self.version)?;
        // PrevBlock
        basetype::encode_hash(sink, self.prev_block)?;
        // MerkleRoot
        basetype::encode_hash(sink, self.merkle_root)?;
        // Timestamp
        basetype::encode_uint32_time(sink, self.timestamp)?;
        // Bits
        basetype::encode_uint32(sink, self.bits)?;
        // Nonce
        basetype::encode_uint32(sink, self.nonce)?;
        Ok(())
    }
}
