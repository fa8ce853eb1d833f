// File:    generator.rs
// Author:  apezoo
// Date:    2025-07-17
//
// Description: Combines four additive streams into the generator that drives pad generation.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! The combined generator.
//!
//! Four [`AdditiveStream`]s, each seeded from one big-endian word of a
//! 16-byte seed, advance in lockstep and every draw is the XOR of their
//! outputs. After seeding, `28 + seed[8]` draws are discarded.

use crate::digest::seed_digest;
use crate::stream::AdditiveStream;
use log::trace;
use rand_core::{RngCore, SeedableRng, impls};

/// Number of streams combined per draw.
pub const STREAM_COUNT: usize = 4;

/// Size in bytes of the generator seed.
pub const SEED_LEN: usize = 4 * STREAM_COUNT;

/// Minimum number of draws discarded after seeding.
pub const BASE_WARM_UP: usize = 28;

/// Seed byte that adds to the warm-up count.
const WARM_UP_SEED_BYTE: usize = 8;

/// XOR combination of four independently seeded streams.
#[derive(Debug, Clone)]
pub struct CombinedGenerator {
    streams: [AdditiveStream; STREAM_COUNT],
}

impl CombinedGenerator {
    /// Builds a generator from the digest of an arbitrary seed buffer.
    #[must_use]
    pub fn from_material(material: &[u8]) -> Self {
        let digest = seed_digest(material);
        let mut seed = [0u8; SEED_LEN];
        seed.copy_from_slice(&digest[..SEED_LEN]);
        Self::from_seed(seed)
    }

    /// Number of draws discarded after seeding with `seed`.
    #[must_use]
    pub fn warm_up_draws(seed: &[u8; SEED_LEN]) -> usize {
        BASE_WARM_UP + usize::from(seed[WARM_UP_SEED_BYTE])
    }

    /// Bytes for external randomness test suites, one draw per byte taken
    /// from bits 7 to 14 of the draw.
    pub fn raw_sample(&mut self, len: usize) -> Vec<u8> {
        (0..len)
            .map(|_| (self.next_u32() >> 7).to_le_bytes()[0])
            .collect()
    }
}

impl SeedableRng for CombinedGenerator {
    type Seed = [u8; SEED_LEN];

    fn from_seed(seed: Self::Seed) -> Self {
        let streams = std::array::from_fn(|k| {
            let word = u32::from_be_bytes([
                seed[4 * k],
                seed[4 * k + 1],
                seed[4 * k + 2],
                seed[4 * k + 3],
            ]);
            trace!("Stream {k} seeded with {word:08X}");
            AdditiveStream::new(word)
        });

        let mut generator = Self { streams };
        let warm_up = Self::warm_up_draws(&seed);
        for _ in 0..warm_up {
            generator.next_u32();
        }
        trace!("Generator warmed up with {warm_up} draws");
        generator
    }
}

impl RngCore for CombinedGenerator {
    fn next_u32(&mut self) -> u32 {
        self.streams
            .iter_mut()
            .fold(0, |acc, stream| acc ^ stream.next_u32())
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        impls::fill_bytes_via_next(self, dst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_seed() -> [u8; SEED_LEN] {
        let mut seed = [0u8; SEED_LEN];
        for (i, byte) in seed.iter_mut().enumerate() {
            *byte = u8::try_from(i * 17).unwrap();
        }
        seed
    }

    #[test]
    fn test_draw_is_xor_of_streams() {
        let seed = test_seed();
        let mut generator = CombinedGenerator::from_seed(seed);

        let mut streams: Vec<AdditiveStream> = (0..STREAM_COUNT)
            .map(|k| {
                let word = u32::from_be_bytes(seed[4 * k..4 * k + 4].try_into().unwrap());
                AdditiveStream::new(word)
            })
            .collect();
        for _ in 0..CombinedGenerator::warm_up_draws(&seed) {
            for stream in &mut streams {
                stream.next_u32();
            }
        }

        for _ in 0..100 {
            let expected = streams.iter_mut().fold(0, |acc, s| acc ^ s.next_u32());
            assert_eq!(generator.next_u32(), expected);
        }
    }

    #[test]
    fn test_warm_up_depends_on_seed_byte_eight() {
        let mut seed = test_seed();
        seed[8] = 0;
        assert_eq!(CombinedGenerator::warm_up_draws(&seed), 28);
        seed[8] = 255;
        assert_eq!(CombinedGenerator::warm_up_draws(&seed), 283);
    }

    #[test]
    fn test_same_material_same_sequence() {
        let mut a = CombinedGenerator::from_material(b"test");
        let mut b = CombinedGenerator::from_material(b"test");
        for _ in 0..1000 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
    }

    #[test]
    fn test_reference_sequence_for_test_seed() {
        let mut generator = CombinedGenerator::from_material(b"test");
        let draws: Vec<u32> = (0..4).map(|_| generator.next_u32()).collect();
        assert_eq!(
            draws,
            vec![1_563_149_063, 4_107_029_360, 1_142_728_098, 872_885_676]
        );
    }

    #[test]
    fn test_empty_material_is_valid() {
        let mut generator = CombinedGenerator::from_material(b"");
        assert_eq!(generator.next_u32(), 3_328_762_383);
        assert_eq!(generator.next_u32(), 2_970_407_303);
    }

    #[test]
    fn test_raw_sample_reference_bytes() {
        let mut generator = CombinedGenerator::from_material(b"rng");
        let sample = generator.raw_sample(8);
        assert_eq!(hex::encode(sample), "557f3168a33023da");
    }

    #[test]
    fn test_next_u64_takes_low_word_first() {
        let mut words = CombinedGenerator::from_material(b"u64");
        let mut wide = words.clone();
        let low = u64::from(words.next_u32());
        let high = u64::from(words.next_u32());
        assert_eq!(wide.next_u64(), (high << 32) | low);
    }

    #[test]
    fn test_fill_bytes_uses_little_endian_draws() {
        let mut words = CombinedGenerator::from_material(b"bytes");
        let mut bytes = words.clone();
        let mut buffer = [0u8; 8];
        bytes.fill_bytes(&mut buffer);
        let mut expected = Vec::new();
        expected.extend_from_slice(&words.next_u32().to_le_bytes());
        expected.extend_from_slice(&words.next_u32().to_le_bytes());
        assert_eq!(buffer.to_vec(), expected);
    }
}
