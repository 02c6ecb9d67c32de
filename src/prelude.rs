//! Convenient re-exports for common usage.
//!
//! # Example
//!
//! ```
//! use d64::prelude::*;
//!
//! let encoded = encode_bytes(b"abcde");
//! assert_eq!(decode_bytes(&encoded).unwrap(), b"abcde");
//! ```

pub use crate::{
    DecodeError,
    // Integers
    decode_u64,
    encode_u64,
    min_width_for,

    // Byte blobs
    decode_bytes,
    encode_bytes,
    encode_bytes_to_string,
};
