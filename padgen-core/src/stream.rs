// File:    stream.rs
// Author:  apezoo
// Date:    2025-07-17
//
// Description: A single additive lagged-Fibonacci random stream.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! Additive-feedback generator computing `x[n] = x[n-3] + x[n-31] mod 2^32`.
//!
//! The 31-word table is bootstrapped from a 32-bit seed with the
//! Park-Miller recurrence `x[i] = 16807 * x[i-1] mod (2^31 - 1)`, after which
//! the first [`DISCARDED_OUTPUTS`] values are thrown away.

/// Number of words in the circular state table (the long lag).
pub const STATE_WORDS: usize = 31;

/// Distance between the front and rear indices (the short lag).
const SHORT_LAG: usize = 3;

/// Outputs dropped after seeding, eleven passes over the table.
pub const DISCARDED_OUTPUTS: usize = 11 * STATE_WORDS;

const LEHMER_MODULUS: u64 = 0x7FFF_FFFF;
const LEHMER_MULTIPLIER: u64 = 16_807;

/// One independently seeded stream of 32-bit values.
#[derive(Debug, Clone)]
pub struct AdditiveStream {
    state: [u32; STATE_WORDS],
    front: usize,
    rear: usize,
}

impl AdditiveStream {
    /// Seeds a stream and mixes its state.
    #[must_use]
    pub fn new(seed: u32) -> Self {
        let mut state = [0u32; STATE_WORDS];
        let mut word = u64::from(seed) % LEHMER_MODULUS;
        if word == 0 {
            word = 1;
        }
        for slot in &mut state {
            *slot = u32::try_from(word).unwrap_or(u32::MAX);
            word = word * LEHMER_MULTIPLIER % LEHMER_MODULUS;
        }

        let mut stream = Self {
            state,
            front: SHORT_LAG,
            rear: 0,
        };
        for _ in 0..DISCARDED_OUTPUTS {
            stream.next_u32();
        }
        stream
    }

    /// Advances the stream by one step and returns the new value.
    pub fn next_u32(&mut self) -> u32 {
        let value = self.state[self.front].wrapping_add(self.state[self.rear]);
        self.state[self.front] = value;
        self.front = (self.front + 1) % STATE_WORDS;
        self.rear = (self.rear + 1) % STATE_WORDS;
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_one_reference_values() {
        let mut stream = AdditiveStream::new(1);
        assert_eq!(stream.next_u32(), 3_603_959_605);
        assert_eq!(stream.next_u32(), 2_631_268_044);
        assert_eq!(stream.next_u32(), 1_271_446_117);
    }

    #[test]
    fn test_zero_seed_behaves_like_one() {
        let mut zero = AdditiveStream::new(0);
        let mut one = AdditiveStream::new(1);
        for _ in 0..64 {
            assert_eq!(zero.next_u32(), one.next_u32());
        }
    }

    #[test]
    fn test_streams_are_independent_values() {
        let mut a = AdditiveStream::new(0xDEAD_BEEF);
        let mut b = a.clone();
        let from_a: Vec<u32> = (0..16).map(|_| a.next_u32()).collect();
        let from_b: Vec<u32> = (0..16).map(|_| b.next_u32()).collect();
        assert_eq!(from_a, from_b);

        let mut c = AdditiveStream::new(0xDEAD_BEEE);
        let from_c: Vec<u32> = (0..16).map(|_| c.next_u32()).collect();
        assert_ne!(from_a, from_c);
    }

    #[test]
    fn test_recurrence_holds_after_mixing() {
        let mut stream = AdditiveStream::new(42);
        let values: Vec<u32> = (0..100).map(|_| stream.next_u32()).collect();
        for n in STATE_WORDS..values.len() {
            assert_eq!(
                values[n],
                values[n - SHORT_LAG].wrapping_add(values[n - STATE_WORDS])
            );
        }
    }
}
