/// The d64 digits, in value order.
///
/// Each character sorts strictly after the one before it, which is what makes
/// zero-padded integer encodings compare like the integers themselves. `.`
/// sorts before the digits and `_` sits between upper and lower case letters.
pub const ALPHABET: &str = ".0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ_abcdefghijklmnopqrstuvwxyz";

const INVALID: i8 = -1;

/// The process-wide d64 table. Built at compile time and never mutated.
pub static D64: Alphabet = Alphabet::build(ALPHABET.as_bytes());

/// A 64-digit alphabet together with its inverse lookup table.
///
/// The inverse table covers every possible byte, so decoders can look up
/// arbitrary input without bounds checks or panics.
#[derive(Debug)]
pub struct Alphabet {
    digits: [u8; 64],
    inverse: [i8; 256],
}

impl Alphabet {
    const fn build(chars: &[u8]) -> Self {
        assert!(chars.len() == 64, "d64 alphabet must have exactly 64 digits");

        let mut digits = [0u8; 64];
        let mut inverse = [INVALID; 256];

        let mut i = 0;
        while i < 64 {
            let c = chars[i];
            assert!(c.is_ascii_graphic(), "d64 digits must be printable ASCII");
            if i > 0 {
                // Strict ordering also rules out duplicates.
                assert!(chars[i - 1] < c, "d64 alphabet must be strictly ascending");
            }
            digits[i] = c;
            inverse[c as usize] = i as i8;
            i += 1;
        }

        Alphabet { digits, inverse }
    }

    /// Returns the radix, always 64.
    pub const fn base(&self) -> usize {
        self.digits.len()
    }

    /// Returns the digits as a string slice, in value order.
    pub fn chars(&self) -> &str {
        ALPHABET
    }

    /// The digit for value 0, used for left padding.
    pub const fn zero_digit(&self) -> char {
        self.digits[0] as char
    }

    /// Maps a 6-bit value to its digit byte. Bits above the low six are ignored.
    #[inline]
    pub const fn digit_byte(&self, value: u8) -> u8 {
        self.digits[(value & 0x3F) as usize]
    }

    /// Maps a value in `0..64` to its digit.
    ///
    /// Returns `None` for values outside the alphabet's range.
    pub fn encode_digit(&self, value: usize) -> Option<char> {
        self.digits.get(value).map(|&b| b as char)
    }

    /// Looks up the 6-bit value of a byte, or `None` if it is not a d64 digit.
    #[inline]
    pub const fn decode_byte(&self, byte: u8) -> Option<u8> {
        let v = self.inverse[byte as usize];
        if v < 0 { None } else { Some(v as u8) }
    }

    /// Looks up the 6-bit value of a character, or `None` if it is not a d64 digit.
    pub fn decode_char(&self, c: char) -> Option<u8> {
        if c.is_ascii() {
            self.decode_byte(c as u8)
        } else {
            None
        }
    }
}
