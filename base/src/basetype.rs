//! The five primitive wire types: fixed-width little-endian integers, a
//! 32-byte opaque hash, a Unix-seconds timestamp, and the canonical
//! variable-length integer.
//!
//! Decoders read from a [`ByteCursor`], encoders append to a [`ByteSink`].
//! All of them are pure over the caller's buffer; a failed decode
//! propagates without any partial state escaping.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::cursor::{ByteCursor, ByteSink};
use crate::error::WireError;

/// A 32-byte opaque hash, copied to and from the wire verbatim.
pub type Hash = [u8; 32];

/// Decode a 4-byte little-endian unsigned integer.
pub fn decode_uint32(cursor: &mut ByteCursor) -> Result<u32, WireError> {
    cursor.read_u32_le()
}

/// Encode a 4-byte little-endian unsigned integer.
pub fn encode_uint32(sink: &mut ByteSink, val: u32) -> Result<(), WireError> {
    sink.write_u32_le(val);
    Ok(())
}

/// Decode a 4-byte little-endian signed integer. Shares the `Uint32` bit
/// pattern; there is no separate wire representation.
pub fn decode_int32(cursor: &mut ByteCursor) -> Result<i32, WireError> {
    let rv = decode_uint32(cursor)?;
    Ok(rv as i32)
}

/// Encode a 4-byte little-endian signed integer as its two's-complement
/// bit pattern.
pub fn encode_int32(sink: &mut ByteSink, val: i32) -> Result<(), WireError> {
    encode_uint32(sink, val as u32)
}

/// Decode 32 raw hash bytes.
pub fn decode_hash(cursor: &mut ByteCursor) -> Result<Hash, WireError> {
    let bytes = cursor.read_bytes(32)?;
    let mut hash = [0u8; 32];
    hash.copy_from_slice(bytes);
    Ok(hash)
}

/// Encode 32 raw hash bytes.
pub fn encode_hash(sink: &mut ByteSink, val: Hash) -> Result<(), WireError> {
    sink.write_bytes(&val);
    Ok(())
}

/// Decode a `Uint32` holding Unix seconds into a timestamp.
pub fn decode_uint32_time(cursor: &mut ByteCursor) -> Result<SystemTime, WireError> {
    let secs = decode_uint32(cursor)?;
    Ok(UNIX_EPOCH + Duration::from_secs(u64::from(secs)))
}

/// Encode a timestamp as Unix seconds, truncating sub-second precision.
/// Timestamps before the epoch or beyond `u32::MAX` seconds after it are
/// rejected with [`WireError::RangeError`].
pub fn encode_uint32_time(sink: &mut ByteSink, val: SystemTime) -> Result<(), WireError> {
    let secs = val
        .duration_since(UNIX_EPOCH)
        .map_err(|_| WireError::RangeError("timestamp precedes the Unix epoch".to_string()))?
        .as_secs();
    if secs > u64::from(u32::MAX) {
        return Err(WireError::RangeError(format!(
            "timestamp {} seconds past the Unix epoch exceeds 4 bytes",
            secs
        )));
    }
    encode_uint32(sink, secs as u32)
}

/// Decode a canonical variable-length unsigned integer.
///
/// The discriminant byte selects the payload width; a decoded value below
/// the smallest value that required that width is rejected as
/// [`WireError::NonCanonicalEncoding`], so every logical value has exactly
/// one valid byte sequence.
pub fn decode_var_int(cursor: &mut ByteCursor) -> Result<u64, WireError> {
    let discriminant = cursor.read_u8()?;

    let rv = match discriminant {
        0xff => {
            let sv = cursor.read_u64_le()?;
            let min = 0x100000000;
            if sv < min {
                return Err(WireError::NonCanonicalEncoding {
                    value: sv,
                    discriminant,
                    min,
                });
            }
            sv
        }
        0xfe => {
            let sv = u64::from(cursor.read_u32_le()?);
            let min = 0x10000;
            if sv < min {
                return Err(WireError::NonCanonicalEncoding {
                    value: sv,
                    discriminant,
                    min,
                });
            }
            sv
        }
        0xfd => {
            let sv = u64::from(cursor.read_u16_le()?);
            let min = 0xfd;
            if sv < min {
                return Err(WireError::NonCanonicalEncoding {
                    value: sv,
                    discriminant,
                    min,
                });
            }
            sv
        }
        _ => u64::from(discriminant),
    };

    Ok(rv)
}

/// Encode a variable-length unsigned integer using the shortest of the
/// four wire forms for the value's magnitude.
pub fn encode_var_int(sink: &mut ByteSink, val: u64) -> Result<(), WireError> {
    if val < 0xfd {
        sink.write_u8(val as u8);
        return Ok(());
    }

    if val <= u64::from(u16::MAX) {
        sink.write_u8(0xfd);
        sink.write_u16_le(val as u16);
        return Ok(());
    }

    if val <= u64::from(u32::MAX) {
        sink.write_u8(0xfe);
        sink.write_u32_le(val as u32);
        return Ok(());
    }

    sink.write_u8(0xff);
    sink.write_u64_le(val);
    Ok(())
}

#[cfg(test)]
fn encode_once(cb: impl Fn(&mut ByteSink) -> Result<(), WireError>) -> Vec<u8> {
    let mut sink = ByteSink::new();
    cb(&mut sink).expect("encode failed");
    sink.into_bytes()
}

#[test]
fn uint32_round_trip() {
    let read = |bytes: &[u8]| decode_uint32(&mut ByteCursor::new(bytes));
    assert_eq!(read(&[0, 0, 0, 0]), Ok(0));
    assert_eq!(read(&[0x2a, 0, 0, 0]), Ok(42));
    assert_eq!(read(&[0xff, 0xff, 0xff, 0xff]), Ok(u32::MAX));
    assert_eq!(
        read(&[]),
        Err(WireError::TruncatedInput {
            needed: 4,
            remaining: 0
        })
    );
    assert_eq!(
        read(&[1, 2, 3]),
        Err(WireError::TruncatedInput {
            needed: 4,
            remaining: 3
        })
    );

    for val in [0, 1, 42, 0xffff, u32::MAX] {
        let bytes = encode_once(|sink| encode_uint32(sink, val));
        assert_eq!(bytes.len(), 4);
        assert_eq!(read(&bytes), Ok(val));
    }
}

#[test]
fn int32_shares_uint32_bit_pattern() {
    assert_eq!(
        encode_once(|sink| encode_int32(sink, -1)),
        [0xff, 0xff, 0xff, 0xff]
    );
    let read = |bytes: &[u8]| decode_int32(&mut ByteCursor::new(bytes));
    assert_eq!(read(&[0xff, 0xff, 0xff, 0xff]), Ok(-1));
    assert_eq!(read(&[0x00, 0x00, 0x00, 0x80]), Ok(i32::MIN));

    for val in [i32::MIN, -2, 0, 7, i32::MAX] {
        let bytes = encode_once(|sink| encode_int32(sink, val));
        assert_eq!(read(&bytes), Ok(val));
    }
}

#[test]
fn hash_round_trip() {
    let mut hash = [0u8; 32];
    for (i, byte) in hash.iter_mut().enumerate() {
        *byte = i as u8;
    }
    let bytes = encode_once(|sink| encode_hash(sink, hash));
    assert_eq!(bytes.len(), 32);
    assert_eq!(decode_hash(&mut ByteCursor::new(&bytes)), Ok(hash));
}

#[test]
fn hash_truncated() {
    let read = |bytes: &[u8]| decode_hash(&mut ByteCursor::new(bytes));
    assert_eq!(
        read(&[]),
        Err(WireError::TruncatedInput {
            needed: 32,
            remaining: 0
        })
    );
    assert_eq!(
        read(&[1, 2, 3]),
        Err(WireError::TruncatedInput {
            needed: 32,
            remaining: 3
        })
    );
}

#[test]
fn uint32_time_round_trip() {
    let t = UNIX_EPOCH + Duration::from_secs(0x5dc1_7800);
    let bytes = encode_once(|sink| encode_uint32_time(sink, t));
    assert_eq!(bytes.len(), 4);
    assert_eq!(decode_uint32_time(&mut ByteCursor::new(&bytes)), Ok(t));
}

#[test]
fn uint32_time_truncates_subseconds() {
    let t = UNIX_EPOCH + Duration::new(1000, 500_000_000);
    let bytes = encode_once(|sink| encode_uint32_time(sink, t));
    assert_eq!(
        decode_uint32_time(&mut ByteCursor::new(&bytes)),
        Ok(UNIX_EPOCH + Duration::from_secs(1000))
    );
}

#[test]
fn uint32_time_out_of_range() {
    let mut sink = ByteSink::new();
    let before_epoch = UNIX_EPOCH - Duration::from_secs(1);
    assert!(matches!(
        encode_uint32_time(&mut sink, before_epoch),
        Err(WireError::RangeError(_))
    ));

    let far_future = UNIX_EPOCH + Duration::from_secs(u64::from(u32::MAX) + 1);
    assert!(matches!(
        encode_uint32_time(&mut sink, far_future),
        Err(WireError::RangeError(_))
    ));

    // The last representable second is fine.
    let last = UNIX_EPOCH + Duration::from_secs(u64::from(u32::MAX));
    assert_eq!(encode_uint32_time(&mut sink, last), Ok(()));
}

#[test]
fn var_int_encodes_minimal_form() {
    assert_eq!(encode_once(|sink| encode_var_int(sink, 0)), [0x00]);
    assert_eq!(encode_once(|sink| encode_var_int(sink, 252)), [0xfc]);
    assert_eq!(
        encode_once(|sink| encode_var_int(sink, 253)),
        [0xfd, 0xfd, 0x00]
    );
    assert_eq!(
        encode_once(|sink| encode_var_int(sink, 0xffff)),
        [0xfd, 0xff, 0xff]
    );
    assert_eq!(
        encode_once(|sink| encode_var_int(sink, 0x10000)),
        [0xfe, 0x00, 0x00, 0x01, 0x00]
    );
    assert_eq!(
        encode_once(|sink| encode_var_int(sink, 0xffffffff)),
        [0xfe, 0xff, 0xff, 0xff, 0xff]
    );
    assert_eq!(
        encode_once(|sink| encode_var_int(sink, 0x100000000)),
        [0xff, 0x00, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00]
    );
    assert_eq!(
        encode_once(|sink| encode_var_int(sink, u64::MAX)),
        [0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff]
    );
}

#[test]
fn var_int_decode() {
    let read = |bytes: &[u8]| decode_var_int(&mut ByteCursor::new(bytes));
    assert_eq!(
        read(&[]),
        Err(WireError::TruncatedInput {
            needed: 1,
            remaining: 0
        })
    );
    assert_eq!(read(&[0x00]), Ok(0));
    assert_eq!(read(&[0xfc]), Ok(252));
    assert_eq!(read(&[0xfd, 0xfd, 0x00]), Ok(253));
    assert_eq!(read(&[0xfd, 0xff, 0xff]), Ok(0xffff));
    assert_eq!(read(&[0xfe, 0x00, 0x00, 0x01, 0x00]), Ok(0x10000));
    assert_eq!(
        read(&[0xff, 0x00, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00]),
        Ok(0x100000000)
    );
    assert_eq!(
        read(&[0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff]),
        Ok(u64::MAX)
    );

    // A discriminant promising more payload than the buffer holds.
    assert_eq!(
        read(&[0xfd, 0x01]),
        Err(WireError::TruncatedInput {
            needed: 2,
            remaining: 1
        })
    );
    assert_eq!(
        read(&[0xfe, 0x01, 0x02]),
        Err(WireError::TruncatedInput {
            needed: 4,
            remaining: 2
        })
    );
}

#[test]
fn var_int_rejects_non_canonical() {
    let read = |bytes: &[u8]| decode_var_int(&mut ByteCursor::new(bytes));

    // 2-byte form may not hold values below 0xfd.
    assert_eq!(
        read(&[0xfd, 0x00, 0x00]),
        Err(WireError::NonCanonicalEncoding {
            value: 0,
            discriminant: 0xfd,
            min: 0xfd
        })
    );
    assert_eq!(
        read(&[0xfd, 0xfc, 0x00]),
        Err(WireError::NonCanonicalEncoding {
            value: 0xfc,
            discriminant: 0xfd,
            min: 0xfd
        })
    );

    // 4-byte form may not hold values below 0x10000.
    assert_eq!(
        read(&[0xfe, 0xff, 0xff, 0x00, 0x00]),
        Err(WireError::NonCanonicalEncoding {
            value: 0xffff,
            discriminant: 0xfe,
            min: 0x10000
        })
    );

    // 8-byte form may not hold values below 0x100000000.
    assert_eq!(
        read(&[0xff, 0xff, 0xff, 0xff, 0xff, 0x00, 0x00, 0x00, 0x00]),
        Err(WireError::NonCanonicalEncoding {
            value: 0xffffffff,
            discriminant: 0xff,
            min: 0x100000000
        })
    );
}

#[test]
fn var_int_round_trip() {
    let read = |bytes: &[u8]| decode_var_int(&mut ByteCursor::new(bytes));
    for val in [
        0,
        1,
        0xfc,
        0xfd,
        0xffff,
        0x10000,
        0xffffffff,
        0x100000000,
        u64::MAX,
    ] {
        let bytes = encode_once(|sink| encode_var_int(sink, val));
        assert_eq!(read(&bytes), Ok(val));
    }
}
