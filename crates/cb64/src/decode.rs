//! Base64 decoding into a caller-supplied buffer.

use crate::constants::{DECODE_TABLE, PAD};
use crate::Base64Error;

/// Returns the output capacity `decode` requires for an encoded input of
/// `encoded_len` bytes: `3 * (encoded_len / 4)`.
///
/// This bound is deliberately pessimistic: it over-counts by one or two
/// bytes when the input carries padding. The decoder rejects any output
/// buffer smaller than this bound even when the true (padding-reduced)
/// output would fit.
pub const fn decoded_len_bound(encoded_len: usize) -> usize {
    3 * (encoded_len / 4)
}

/// Decodes standard base64 from `input` into `output`.
///
/// The whole input is validated before anything is written: the length must
/// be a multiple of 4, every byte must be an alphabet character or padding,
/// and `=` may only appear as the last byte or as the second-to-last byte
/// immediately followed by another `=`.
///
/// # Arguments
///
/// * `input` - The base64-encoded bytes.
/// * `output` - The destination buffer; must hold at least
///   [`decoded_len_bound`]`(input.len())` bytes.
///
/// # Returns
///
/// The number of decoded bytes written. Empty input writes nothing and
/// returns `Ok(0)`.
///
/// # Errors
///
/// * [`Base64Error::InvalidLength`] - input length is not a multiple of 4.
/// * [`Base64Error::InsufficientCapacity`] - `output` is smaller than the
///   conservative bound.
/// * [`Base64Error::InvalidCharacter`] - a byte is outside the alphabet and
///   is not `=`.
/// * [`Base64Error::InvalidPadding`] - `=` in a non-final position.
///
/// # Example
///
/// ```
/// use cb64::decode;
///
/// let mut dest = [0u8; 3];
/// let len = decode(b"Zm8=", &mut dest).unwrap();
/// assert_eq!(&dest[..len], b"fo");
/// ```
pub fn decode(input: &[u8], output: &mut [u8]) -> Result<usize, Base64Error> {
    if input.len() % 4 != 0 {
        return Err(Base64Error::InvalidLength);
    }
    if input.is_empty() {
        return Ok(0);
    }

    let quadruplet_count = input.len() / 4;
    if output.len() < decoded_len_bound(input.len()) {
        return Err(Base64Error::InsufficientCapacity);
    }

    let last = input.len() - 1;
    for (i, &b) in input.iter().enumerate() {
        if b == PAD {
            // Legal positions: the last byte, or the second-to-last byte
            // when the last byte is also padding.
            let at_end = i == last || (i == last - 1 && input[last] == PAD);
            if !at_end {
                return Err(Base64Error::InvalidPadding);
            }
        } else if DECODE_TABLE[b as usize] < 0 {
            return Err(Base64Error::InvalidCharacter);
        }
    }

    let padded = input[last] == PAD;
    let bulk_count = quadruplet_count - padded as usize;

    for i in 0..bulk_count {
        let sextet1 = DECODE_TABLE[input[4 * i] as usize] as u8;
        let sextet2 = DECODE_TABLE[input[4 * i + 1] as usize] as u8;
        let sextet3 = DECODE_TABLE[input[4 * i + 2] as usize] as u8;
        let sextet4 = DECODE_TABLE[input[4 * i + 3] as usize] as u8;
        output[3 * i] = (sextet1 << 2) | (sextet2 >> 4);
        output[3 * i + 1] = (sextet2 << 4) | (sextet3 >> 2);
        output[3 * i + 2] = (sextet3 << 6) | sextet4;
    }

    let mut written = 3 * bulk_count;
    if padded {
        let quad = &input[4 * bulk_count..];
        let sextet1 = DECODE_TABLE[quad[0] as usize] as u8;
        let sextet2 = DECODE_TABLE[quad[1] as usize] as u8;
        if quad[2] == PAD {
            output[written] = (sextet1 << 2) | (sextet2 >> 4);
            written += 1;
        } else {
            let sextet3 = DECODE_TABLE[quad[2] as usize] as u8;
            output[written] = (sextet1 << 2) | (sextet2 >> 4);
            output[written + 1] = (sextet2 << 4) | (sextet3 >> 2);
            written += 2;
        }
    }

    Ok(written)
}
