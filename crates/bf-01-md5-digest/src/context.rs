//! # MD5 Context
//!
//! Transient digest state: four working registers, the total message length
//! in bits (kept as low/high 32-bit halves), and a partially filled 64-byte
//! block. A context is created per digest and consumed by `finalize`.

use crate::constants::{BLOCK_LENGTH, DIGEST_LENGTH, INITIAL_STATE, LENGTH_FIELD_OFFSET, SHIFTS, SINE_TABLE};
use crate::digest::Md5Digest;

/// Streaming MD5 state.
#[derive(Clone, Debug)]
pub struct Md5Context {
    /// Working registers A, B, C, D
    state: [u32; 4],
    /// Message length in bits mod 2^64, as [low, high]
    count: [u32; 2],
    /// Input not yet compressed
    buffer: [u8; BLOCK_LENGTH],
}

impl Md5Context {
    /// Create a context with the standard initial registers.
    pub fn new() -> Self {
        Self {
            state: INITIAL_STATE,
            count: [0, 0],
            buffer: [0u8; BLOCK_LENGTH],
        }
    }

    /// Absorb `data`. May be called any number of times with any chunk sizes.
    pub fn update(&mut self, data: &[u8]) -> &mut Self {
        let buffered = self.buffered_len();
        self.add_length(data.len());

        let mut input = data;

        if buffered > 0 {
            let take = (BLOCK_LENGTH - buffered).min(input.len());
            self.buffer[buffered..buffered + take].copy_from_slice(&input[..take]);
            input = &input[take..];

            if buffered + take < BLOCK_LENGTH {
                return self;
            }

            let block = self.buffer;
            transform(&mut self.state, &block);
        }

        let mut blocks = input.chunks_exact(BLOCK_LENGTH);
        for block in &mut blocks {
            transform(&mut self.state, block);
        }

        let rest = blocks.remainder();
        self.buffer[..rest.len()].copy_from_slice(rest);
        self
    }

    /// Apply the final padding and length field and return the digest.
    pub fn finalize(mut self) -> Md5Digest {
        let length_field = self.length_field();

        let buffered = self.buffered_len();
        let pad_len = if buffered < LENGTH_FIELD_OFFSET {
            LENGTH_FIELD_OFFSET - buffered
        } else {
            BLOCK_LENGTH + LENGTH_FIELD_OFFSET - buffered
        };

        let mut padding = [0u8; BLOCK_LENGTH];
        padding[0] = 0x80;
        self.update(&padding[..pad_len]);
        self.update(&length_field);
        debug_assert_eq!(self.buffered_len(), 0);

        let mut out = [0u8; DIGEST_LENGTH];
        for (chunk, word) in out.chunks_exact_mut(4).zip(self.state.iter()) {
            chunk.copy_from_slice(&word.to_le_bytes());
        }
        out
    }

    /// Reset to the initial state for reuse.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Total bits absorbed so far (mod 2^64).
    pub fn bit_length(&self) -> u64 {
        (u64::from(self.count[1]) << 32) | u64::from(self.count[0])
    }

    fn buffered_len(&self) -> usize {
        ((self.count[0] >> 3) & 0x3f) as usize
    }

    fn add_length(&mut self, bytes: usize) {
        let bits = (bytes as u64).wrapping_mul(8);
        let (low, carry) = self.count[0].overflowing_add(bits as u32);
        self.count[0] = low;
        self.count[1] = self.count[1]
            .wrapping_add((bits >> 32) as u32)
            .wrapping_add(u32::from(carry));
    }

    fn length_field(&self) -> [u8; 8] {
        let mut field = [0u8; 8];
        field[..4].copy_from_slice(&self.count[0].to_le_bytes());
        field[4..].copy_from_slice(&self.count[1].to_le_bytes());
        field
    }
}

impl Default for Md5Context {
    fn default() -> Self {
        Self::new()
    }
}

/// Compress one 64-byte block into `state`.
fn transform(state: &mut [u32; 4], block: &[u8]) {
    debug_assert_eq!(block.len(), BLOCK_LENGTH);

    let mut words = [0u32; 16];
    for (word, bytes) in words.iter_mut().zip(block.chunks_exact(4)) {
        *word = u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
    }

    let [mut a, mut b, mut c, mut d] = *state;

    for step in 0..64 {
        let (mix, index) = match step / 16 {
            0 => ((b & c) | (!b & d), step),
            1 => ((b & d) | (c & !d), (5 * step + 1) % 16),
            2 => (b ^ c ^ d, (3 * step + 5) % 16),
            _ => (c ^ (b | !d), (7 * step) % 16),
        };

        let rotated = a
            .wrapping_add(mix)
            .wrapping_add(SINE_TABLE[step])
            .wrapping_add(words[index])
            .rotate_left(SHIFTS[step]);

        a = d;
        d = c;
        c = b;
        b = b.wrapping_add(rotated);
    }

    state[0] = state[0].wrapping_add(a);
    state[1] = state[1].wrapping_add(b);
    state[2] = state[2].wrapping_add(c);
    state[3] = state[3].wrapping_add(d);
}
