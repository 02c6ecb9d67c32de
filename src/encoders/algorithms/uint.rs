use crate::alphabet::D64;

use super::errors::DecodeError;

/// Digits needed to encode `u64::MAX`.
pub const MAX_U64_WIDTH: usize = 11;

/// Encodes `n` most-significant digit first, left-padded with the zero digit
/// to at least `min_width` characters.
///
/// A `min_width` of 0 is treated as 1. Numbers encoded with the same width
/// compare lexicographically in the same order as the numbers themselves, as
/// long as that width covers the largest value in play (see [`min_width_for`]).
/// Wider values are never truncated.
///
/// The output buffer is allocated at `min_width` bytes up front, so an
/// absurd width panics with a capacity overflow or aborts on allocation
/// failure, like any oversized `Vec`. No value needs more than
/// [`MAX_U64_WIDTH`] digits; bound widths taken from user input.
pub fn encode_u64(mut n: u64, min_width: usize) -> String {
    let min_width = min_width.max(1);
    let zero = D64.digit_byte(0);

    // Digits come out least significant first; the pre-filled zeros end up as
    // the leading padding once the buffer is reversed.
    let mut buf = vec![zero; min_width];
    let mut i = 0;
    loop {
        if i == buf.len() {
            buf.push(zero);
        }
        buf[i] = D64.digit_byte((n & 0x3F) as u8);
        n >>= 6;
        if n == 0 {
            break;
        }
        i += 1;
    }
    buf.reverse();

    buf.into_iter().map(char::from).collect()
}

/// Decodes a d64 number, most significant digit first.
///
/// The empty string decodes to 0. Values wider than 64 bits wrap silently.
pub fn decode_u64(encoded: &str) -> Result<u64, DecodeError> {
    let bytes = encoded.as_bytes();
    let mut n = 0u64;

    for (position, &b) in bytes.iter().enumerate() {
        let digit = D64
            .decode_byte(b)
            .ok_or_else(|| DecodeError::invalid_digit(b, position, bytes))?;
        n = (n << 6) | u64::from(digit);
    }

    Ok(n)
}

/// Returns the smallest width that holds every value up to and including `max`.
///
/// Padding a data set to this width keeps the whole set in sort order.
pub fn min_width_for(max: u64) -> usize {
    let bits = (u64::BITS - max.leading_zeros()) as usize;
    bits.div_ceil(6).max(1)
}
