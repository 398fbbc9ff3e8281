//! Shared lookup tables for the base64 alphabet.

/// Standard base64 alphabet.
pub const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// Standard base64 alphabet as a byte array; index = sextet value (0-63).
pub const ALPHABET_BYTES: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// Padding character.
pub const PAD: u8 = b'=';

/// Reverse lookup table: input byte -> sextet value, `-1` for any byte
/// outside the alphabet (including the padding byte, which the decoder
/// handles structurally rather than through this table).
pub(crate) const DECODE_TABLE: [i16; 256] = {
    let mut table = [-1i16; 256];
    let mut i = 0;
    while i < 64 {
        table[ALPHABET_BYTES[i] as usize] = i as i16;
        i += 1;
    }
    table
};
