//! Base64 encoding into a caller-supplied buffer.

use crate::constants::{ALPHABET_BYTES, PAD};
use crate::Base64Error;

/// Returns the exact number of bytes `encode` writes for an input of
/// `input_len` bytes: `4 * ceil(input_len / 3)`.
pub const fn encoded_len(input_len: usize) -> usize {
    4 * (input_len / 3 + (input_len % 3 != 0) as usize)
}

/// Encodes `input` as standard base64 into `output`.
///
/// # Arguments
///
/// * `input` - The bytes to encode.
/// * `output` - The destination buffer; must hold at least
///   [`encoded_len`]`(input.len())` bytes.
///
/// # Returns
///
/// The number of bytes written, always a multiple of 4. Empty input writes
/// nothing and returns `Ok(0)`.
///
/// # Errors
///
/// Returns [`Base64Error::InsufficientCapacity`] if `output` is too small,
/// in which case its contents are unspecified.
///
/// # Example
///
/// ```
/// use cb64::encode;
///
/// let mut dest = [0u8; 4];
/// let len = encode(b"foo", &mut dest).unwrap();
/// assert_eq!(&dest[..len], b"Zm9v");
/// ```
pub fn encode(input: &[u8], output: &mut [u8]) -> Result<usize, Base64Error> {
    let parity = input.len() % 3;
    let triplet_count = input.len() / 3;

    if output.len() < encoded_len(input.len()) {
        return Err(Base64Error::InsufficientCapacity);
    }

    for i in 0..triplet_count {
        let o1 = input[3 * i];
        let o2 = input[3 * i + 1];
        let o3 = input[3 * i + 2];
        let sextet1 = o1 >> 2;
        let sextet2 = ((o1 & 0x03) << 4) | (o2 >> 4);
        let sextet3 = ((o2 & 0x0F) << 2) | (o3 >> 6);
        let sextet4 = o3 & 0x3F;
        output[4 * i] = ALPHABET_BYTES[sextet1 as usize];
        output[4 * i + 1] = ALPHABET_BYTES[sextet2 as usize];
        output[4 * i + 2] = ALPHABET_BYTES[sextet3 as usize];
        output[4 * i + 3] = ALPHABET_BYTES[sextet4 as usize];
    }

    let mut written = 4 * triplet_count;
    if parity == 2 {
        let o1 = input[3 * triplet_count];
        let o2 = input[3 * triplet_count + 1];
        let sextet1 = o1 >> 2;
        let sextet2 = ((o1 & 0x03) << 4) | (o2 >> 4);
        let sextet3 = (o2 & 0x0F) << 2;
        output[written] = ALPHABET_BYTES[sextet1 as usize];
        output[written + 1] = ALPHABET_BYTES[sextet2 as usize];
        output[written + 2] = ALPHABET_BYTES[sextet3 as usize];
        output[written + 3] = PAD;
        written += 4;
    } else if parity == 1 {
        let o1 = input[3 * triplet_count];
        let sextet1 = o1 >> 2;
        let sextet2 = (o1 & 0x03) << 4;
        output[written] = ALPHABET_BYTES[sextet1 as usize];
        output[written + 1] = ALPHABET_BYTES[sextet2 as usize];
        output[written + 2] = PAD;
        output[written + 3] = PAD;
        written += 4;
    }

    Ok(written)
}
