// Code generated by "peerwire gen -t MsgTx"; DO NOT EDIT.

use peerwire_base::basetype;
use peerwire_base::{ByteCursor, ByteSink, Wire, WireError};

use super::MsgTx;

impl Wire for MsgTx {
    fn decode(cursor: &mut ByteCursor<'_>) -> Result<Self, WireError> {
        // Hash
        let hash = basetype::decode_hash(cursor)?;
        // Index
        let index = basetype::decode_uint32(cursor)?;
        let m = MsgTx { hash, index };
        Ok(m)
    }

    fn encode(&self, sink: &mut ByteSink) -> Result<(), WireError> {
        // Hash
        basetype::encode_hash(sink, self.hash)?;
        // Index
        basetype::encode_uint32(sink, self.index)?;
        Ok(())
    }
}
