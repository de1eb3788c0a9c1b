// Code generated by "peerwire gen -t MsgBlock"; DO NOT EDIT.

use peerwire_base::basetype;
use peerwire_base::{ByteCursor, ByteSink, Wire, WireError};

use super::{BlockHeader, MsgBlock, MsgTx};

impl Wire for MsgBlock {
    fn decode(cursor: &mut ByteCursor<'_>) -> Result<Self, WireError> {
        // Header
        let header = BlockHeader::decode(cursor)?;
        // TxnCount
        let txn_count = basetype::decode_var_int(cursor)?;
        // Txn
        let mut txn = Vec::with_capacity(txn_count as usize);
        for _ in 0..txn_count {
            txn.push(MsgTx::decode(cursor)?);
        }
        let m = MsgBlock { header, txn_count, txn };
        Ok(m)
    }

    fn encode(&self, sink: &mut ByteSink) -> Result<(), WireError> {
        // Header
        self.header.encode(sink)?;
        // TxnCount
        basetype::encode_var_int(sink, self.txn_count)?;
        // Txn
        for m in &self.txn {
            m.encode(sink)?;
        }
        Ok(())
    }
}
