use std::time::SystemTime;

use peerwire_base::basetype::Hash;

/// The fixed 80-byte header of a block.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockHeader {
    pub version: i32,
    pub prev_block: Hash,
    pub merkle_root: Hash,
    pub timestamp: SystemTime,
    pub bits: u32,
    pub nonce: u32,
}

/// One transaction reference: a hash plus an output index. 36 bytes on
/// the wire.
#[derive(Debug, Clone, PartialEq)]
pub struct MsgTx {
    pub hash: Hash,
    pub index: u32,
}

/// A full block message. `txn_count` is written to the wire from its own
/// stored value; keeping it consistent with `txn.len()` is the caller's
/// responsibility.
#[derive(Debug, Clone, PartialEq)]
pub struct MsgBlock {
    pub header: BlockHeader,
    pub txn_count: u64,
    pub txn: Vec<MsgTx>,
}
