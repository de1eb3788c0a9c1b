//! Runtime support for the peerwire format: a byte cursor/sink pair and
//! the primitive codecs every generated `Wire` implementation calls into.
//!
//! ```
//! use peerwire_base::{basetype, ByteCursor, ByteSink};
//!
//! let mut sink = ByteSink::new();
//! basetype::encode_var_int(&mut sink, 253).unwrap();
//! let bytes = sink.into_bytes();
//! assert_eq!(bytes, [0xfd, 0xfd, 0x00]);
//!
//! let mut cursor = ByteCursor::new(&bytes);
//! assert_eq!(basetype::decode_var_int(&mut cursor), Ok(253));
//! ```

pub mod basetype;
pub mod cursor;
pub mod error;
pub mod traits;

pub use cursor::{ByteCursor, ByteSink};
pub use error::WireError;
pub use traits::Wire;
