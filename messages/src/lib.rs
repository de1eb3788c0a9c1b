//! Message definitions for the peerwire block protocol, together with the
//! coding modules produced by `peerwire gen` from `block.wire`.

mod block;
mod block_header_coding;
mod msg_block_coding;
mod msg_tx_coding;

pub use block::{BlockHeader, MsgBlock, MsgTx};
