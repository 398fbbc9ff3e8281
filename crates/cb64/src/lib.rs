//! Simple & fast base64 encoding and decoding.
//!
//! Both operations work over caller-supplied fixed-size buffers and never
//! allocate: the caller owns the input and output slices, the codec only
//! reads one and writes the other. Calls are stateless and side-effect-free,
//! so independent buffers may be encoded or decoded concurrently without any
//! synchronization.
//!
//! Only the standard alphabet (`A-Z a-z 0-9 + /`) with `=` padding is
//! supported; URL-safe alphabets and MIME line wrapping are out of scope.
//!
//! # Example
//!
//! ```
//! use cb64::{decode, encode, encoded_len};
//!
//! let data = b"foobar";
//! let mut encoded = [0u8; encoded_len(6)];
//! let written = encode(data, &mut encoded).unwrap();
//! assert_eq!(&encoded[..written], b"Zm9vYmFy");
//!
//! let mut decoded = [0u8; 6];
//! let written = decode(&encoded, &mut decoded).unwrap();
//! assert_eq!(&decoded[..written], data);
//! ```

mod constants;
mod decode;
mod encode;

pub use constants::{ALPHABET, ALPHABET_BYTES, PAD};
pub use decode::{decode, decoded_len_bound};
pub use encode::{encode, encoded_len};

use thiserror::Error;

/// Error type for base64 operations.
///
/// Every failure is total: the operation writes nothing meaningful to the
/// output buffer and reports immediately, with no partial-success states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Base64Error {
    /// The output buffer is smaller than the required capacity.
    #[error("insufficient output buffer capacity")]
    InsufficientCapacity,
    /// The encoded input length is not a multiple of 4.
    #[error("base64 input length must be a multiple of 4")]
    InvalidLength,
    /// An input byte is neither a base64 alphabet character nor padding.
    #[error("byte is not in the base64 alphabet")]
    InvalidCharacter,
    /// A padding character appears anywhere other than the end of the input.
    #[error("padding character in a non-final position")]
    InvalidPadding,
}
