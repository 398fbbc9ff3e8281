//! Shared fixtures for the cb64 benchmark drivers.
//!
//! The drivers compare cb64 against the `base64` registry crate's slice API
//! on identical, reproducible inputs. Large inputs come from a seeded
//! splitmix64 generator so that every run (and every implementation under
//! comparison) sees the same byte stream.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// Seed used by all drivers that need pseudorandom data.
pub const SPLITMIX64_SEED: u64 = 0x9735b39bf611d800;

/// splitmix64 pseudorandom generator: 64-bit state, fixed multiplicative
/// constants, sequence fully determined by the seed.
pub struct SplitMix64 {
    state: u64,
}

impl SplitMix64 {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    pub fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9e3779b97f4a7c15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
        z ^ (z >> 31)
    }

    /// Fills `buf` with generator output, 8 little-endian bytes at a time.
    pub fn fill(&mut self, buf: &mut [u8]) {
        let mut chunks = buf.chunks_exact_mut(8);
        for chunk in &mut chunks {
            chunk.copy_from_slice(&self.next_u64().to_le_bytes());
        }
        let rest = chunks.into_remainder();
        if !rest.is_empty() {
            let bytes = self.next_u64().to_le_bytes();
            rest.copy_from_slice(&bytes[..rest.len()]);
        }
    }
}

/// Encodes with the `base64` registry crate into a caller-supplied buffer,
/// matching cb64's calling convention for a fair comparison.
pub fn alt_encode(input: &[u8], output: &mut [u8]) -> usize {
    STANDARD
        .encode_slice(input, output)
        .expect("bench buffer sized via cb64::encoded_len")
}

/// Decodes with the `base64` registry crate into a caller-supplied buffer.
pub fn alt_decode(input: &[u8], output: &mut [u8]) -> usize {
    STANDARD
        .decode_slice(input, output)
        .expect("bench input produced by a base64 encoder")
}
