use crate::error::WireError;

/// A wire byte buffer meant for reading.
///
/// Example usage:
///
/// ```
/// let mut cursor = peerwire_base::ByteCursor::new(&[0x2a, 0x00, 0x00, 0x00]);
/// assert_eq!(cursor.read_u32_le(), Ok(42));
/// ```
///
pub struct ByteCursor<'a> {
    data: &'a [u8],
    index: usize,
}

impl<'a> ByteCursor<'a> {
    /// Create a new ByteCursor that wraps the provided byte slice. The
    /// lifetime of the returned ByteCursor must not outlive the lifetime of
    /// the byte slice.
    pub fn new(data: &[u8]) -> ByteCursor {
        ByteCursor { data, index: 0 }
    }

    /// Retrieves the underlying byte slice.
    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    /// Retrieves the current index into the underlying byte slice. This
    /// starts off as 0 and ends up as `self.data().len()` when everything
    /// has been read.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Number of bytes left to read.
    pub fn remaining(&self) -> usize {
        self.data.len() - self.index
    }

    /// Try to read `len` raw bytes starting at the current index. The slice
    /// aliases the underlying memory; nothing is copied. The cursor does
    /// not advance on failure.
    pub fn read_bytes(&mut self, len: usize) -> Result<&'a [u8], WireError> {
        if self.remaining() < len {
            return Err(WireError::TruncatedInput {
                needed: len,
                remaining: self.remaining(),
            });
        }
        let value = &self.data[self.index..self.index + len];
        self.index += len;
        Ok(value)
    }

    /// Try to read a single byte starting at the current index.
    pub fn read_u8(&mut self) -> Result<u8, WireError> {
        let bytes = self.read_bytes(1)?;
        Ok(bytes[0])
    }

    /// Try to read a little-endian u16 starting at the current index.
    pub fn read_u16_le(&mut self) -> Result<u16, WireError> {
        let bytes = self.read_bytes(2)?;
        let mut buf = [0u8; 2];
        buf.copy_from_slice(bytes);
        Ok(u16::from_le_bytes(buf))
    }

    /// Try to read a little-endian u32 starting at the current index.
    pub fn read_u32_le(&mut self) -> Result<u32, WireError> {
        let bytes = self.read_bytes(4)?;
        let mut buf = [0u8; 4];
        buf.copy_from_slice(bytes);
        Ok(u32::from_le_bytes(buf))
    }

    /// Try to read a little-endian u64 starting at the current index.
    pub fn read_u64_le(&mut self) -> Result<u64, WireError> {
        let bytes = self.read_bytes(8)?;
        let mut buf = [0u8; 8];
        buf.copy_from_slice(bytes);
        Ok(u64::from_le_bytes(buf))
    }
}

/// A wire byte buffer meant for writing.
///
/// Example usage:
///
/// ```
/// let mut sink = peerwire_base::ByteSink::new();
/// sink.write_u8(0xfd);
/// sink.write_u16_le(253);
/// assert_eq!(sink.into_bytes(), [0xfd, 0xfd, 0x00]);
/// ```
///
pub struct ByteSink {
    data: Vec<u8>,
}

impl ByteSink {
    /// Creates an empty ByteSink ready for writing.
    pub fn new() -> ByteSink {
        ByteSink { data: vec![] }
    }

    /// Consumes this sink and returns the underlying backing store. Use
    /// this to get the data out when you're done writing.
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// Returns the number of bytes written so far.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if nothing has been written yet.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Write a single byte to the end of the buffer.
    pub fn write_u8(&mut self, value: u8) {
        self.data.push(value);
    }

    /// Write a raw byte slice to the end of the buffer.
    pub fn write_bytes(&mut self, value: &[u8]) {
        self.data.extend_from_slice(value);
    }

    /// Write a u16 to the end of the buffer, little-endian.
    pub fn write_u16_le(&mut self, value: u16) {
        self.data.extend_from_slice(&value.to_le_bytes());
    }

    /// Write a u32 to the end of the buffer, little-endian.
    pub fn write_u32_le(&mut self, value: u32) {
        self.data.extend_from_slice(&value.to_le_bytes());
    }

    /// Write a u64 to the end of the buffer, little-endian.
    pub fn write_u64_le(&mut self, value: u64) {
        self.data.extend_from_slice(&value.to_le_bytes());
    }
}

impl Default for ByteSink {
    fn default() -> ByteSink {
        ByteSink::new()
    }
}

#[test]
fn read_u8() {
    let read = |bytes: &[u8]| ByteCursor::new(bytes).read_u8();
    assert_eq!(
        read(&[]),
        Err(WireError::TruncatedInput {
            needed: 1,
            remaining: 0
        })
    );
    assert_eq!(read(&[0]), Ok(0));
    assert_eq!(read(&[255]), Ok(255));
}

#[test]
fn read_bytes() {
    let read = |bytes: &[u8], len| ByteCursor::new(bytes).read_bytes(len).map(<[u8]>::to_vec);
    assert_eq!(read(&[], 0), Ok(vec![]));
    assert_eq!(
        read(&[], 1),
        Err(WireError::TruncatedInput {
            needed: 1,
            remaining: 0
        })
    );
    assert_eq!(read(&[7], 1), Ok(vec![7]));
    assert_eq!(
        read(&[7], 2),
        Err(WireError::TruncatedInput {
            needed: 2,
            remaining: 1
        })
    );

    let mut cursor = ByteCursor::new(&[1, 2, 3, 4, 5]);
    assert_eq!(cursor.read_bytes(3), Ok(&[1, 2, 3][..]));
    assert_eq!(cursor.read_bytes(2), Ok(&[4, 5][..]));
    assert_eq!(
        cursor.read_bytes(1),
        Err(WireError::TruncatedInput {
            needed: 1,
            remaining: 0
        })
    );
}

#[test]
fn read_fixed_widths() {
    let mut cursor = ByteCursor::new(&[0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08]);
    assert_eq!(cursor.read_u16_le(), Ok(0x0201));
    assert_eq!(cursor.read_u32_le(), Ok(0x06050403));
    assert_eq!(
        cursor.read_u64_le(),
        Err(WireError::TruncatedInput {
            needed: 8,
            remaining: 2
        })
    );
    // A failed read leaves the cursor where it was.
    assert_eq!(cursor.index(), 6);
    assert_eq!(cursor.read_u16_le(), Ok(0x0807));
    assert_eq!(cursor.remaining(), 0);
}

#[test]
fn read_u64_le() {
    let read = |bytes: &[u8]| ByteCursor::new(bytes).read_u64_le();
    assert_eq!(read(&[1, 0, 0, 0, 0, 0, 0, 0]), Ok(1));
    assert_eq!(
        read(&[0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff]),
        Ok(u64::MAX)
    );
}

#[test]
fn write_fixed_widths() {
    let mut sink = ByteSink::new();
    sink.write_u8(0xab);
    sink.write_u16_le(0x0201);
    sink.write_u32_le(0x06050403);
    sink.write_u64_le(0x0e0d0c0b0a090807);
    assert_eq!(
        sink.into_bytes(),
        [0xab, 1, 2, 3, 4, 5, 6, 7, 8, 9, 0xa, 0xb, 0xc, 0xd, 0xe]
    );
}

#[test]
fn write_bytes() {
    let mut sink = ByteSink::new();
    sink.write_bytes(&[1, 2, 3]);
    sink.write_bytes(&[]);
    sink.write_bytes(&[4, 5]);
    assert_eq!(sink.len(), 5);
    assert_eq!(sink.into_bytes(), [1, 2, 3, 4, 5]);
}
