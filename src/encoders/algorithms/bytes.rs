use crate::alphabet::D64;

use super::errors::DecodeError;

/// Number of digits [`encode_bytes`] produces for `src_len` input bytes.
pub const fn encoded_len(src_len: usize) -> usize {
    let full = src_len / 3 * 4;
    match src_len % 3 {
        0 => full,
        1 => full + 2,
        _ => full + 3,
    }
}

/// Number of bytes [`decode_bytes`] produces for `encoded_len` input digits.
///
/// A trailing group of one digit contributes no bytes.
pub const fn decoded_len(encoded_len: usize) -> usize {
    let full = encoded_len / 4 * 3;
    match encoded_len % 4 {
        0 | 1 => full,
        2 => full + 1,
        _ => full + 2,
    }
}

/// Encodes a byte blob as d64 digits.
///
/// Every 3 input bytes become 4 digits, as in base64, but with the d64
/// alphabet and without `=` padding: a trailing 1 or 2 bytes become 2 or 3
/// digits, their last digit holding the leftover bits shifted to the top.
pub fn encode_bytes(src: &[u8]) -> Vec<u8> {
    let mut dst = Vec::with_capacity(encoded_len(src.len()));

    let mut hang = 0u8;
    for (i, &v) in src.iter().enumerate() {
        match i % 3 {
            0 => {
                dst.push(D64.digit_byte(v >> 2));
                hang = (v & 0x03) << 4;
            }
            1 => {
                dst.push(D64.digit_byte(hang | v >> 4));
                hang = (v & 0x0F) << 2;
            }
            _ => {
                dst.push(D64.digit_byte(hang | v >> 6));
                dst.push(D64.digit_byte(v & 0x3F));
                hang = 0;
            }
        }
    }

    if src.len() % 3 > 0 {
        dst.push(D64.digit_byte(hang));
    }

    dst
}

/// Like [`encode_bytes`], returning the digits as a `String`.
pub fn encode_bytes_to_string(src: &[u8]) -> String {
    encode_bytes(src).into_iter().map(char::from).collect()
}

/// Decodes d64 digits back into bytes.
///
/// Fails on the first byte outside the alphabet. Inputs whose length is
/// 1 mod 4 cannot come from [`encode_bytes`]; they are decoded best-effort,
/// the lone trailing digit contributing no output byte.
pub fn decode_bytes(src: &[u8]) -> Result<Vec<u8>, DecodeError> {
    let mut dst = Vec::with_capacity(decoded_len(src.len()));

    let mut hang = 0u8;
    for (position, &b) in src.iter().enumerate() {
        let v = D64
            .decode_byte(b)
            .ok_or_else(|| DecodeError::invalid_digit(b, position, src))?;

        match position % 4 {
            0 => hang = v << 2,
            1 => {
                dst.push(hang | v >> 4);
                hang = v << 4;
            }
            2 => {
                dst.push(hang | v >> 2);
                hang = v << 6;
            }
            _ => {
                dst.push(hang | v);
                hang = 0;
            }
        }
    }

    Ok(dst)
}
