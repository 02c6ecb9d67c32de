//! d64: an order-preserving, URL and HTML safe binary-to-text encoding.
//!
//! Integers are written most significant digit first in a 64-character
//! alphabet whose digits ascend in byte order, so zero-padded encodings sort
//! like the numbers they encode. Byte blobs use the base64 3-to-4 packing with
//! the same alphabet and no padding.
//!
//! ```
//! use d64::{decode_u64, encode_u64};
//!
//! let a = encode_u64(946_684_800, 6);
//! let b = encode_u64(1_464_739_200, 6);
//! assert_eq!(a, ".sQJD.");
//! assert!(a < b);
//! assert_eq!(decode_u64(&b).unwrap(), 1_464_739_200);
//! ```

mod alphabet;
mod config;
mod encoders;
pub mod prelude;

pub use alphabet::{ALPHABET, Alphabet, D64};
pub use config::{
    BytesConfig, Config, ConfigLayer, LogConfig, MAX_WIDTH, OutputConfig, UintConfig, check_width,
};
pub use encoders::algorithms::DecodeError;
pub use encoders::bytes::{
    decode_bytes, decoded_len, encode_bytes, encode_bytes_to_string, encoded_len,
};
pub use encoders::uint::{MAX_U64_WIDTH, decode_u64, encode_u64, min_width_for};
