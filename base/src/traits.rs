use crate::cursor::{ByteCursor, ByteSink};
use crate::error::WireError;

/// The encode/decode contract every composite message type satisfies.
/// Generated coding modules implement this; nested message fields and
/// repeated elements recurse through it.
///
/// A type is either fully decoded or not decoded at all: any failure
/// propagates out of [`Wire::decode`] and no partial value escapes.
pub trait Wire: Sized {
    fn decode(cursor: &mut ByteCursor<'_>) -> Result<Self, WireError>;

    fn encode(&self, sink: &mut ByteSink) -> Result<(), WireError>;

    /// Decode a value from a standalone byte slice.
    fn decode_from_slice(bytes: &[u8]) -> Result<Self, WireError> {
        let mut cursor = ByteCursor::new(bytes);
        Self::decode(&mut cursor)
    }

    /// Encode a value into a freshly allocated byte vector.
    fn encode_to_vec(&self) -> Result<Vec<u8>, WireError> {
        let mut sink = ByteSink::new();
        self.encode(&mut sink)?;
        Ok(sink.into_bytes())
    }
}
