// File:    lib.rs
// Author:  apezoo
// Date:    2025-07-17
//
// Description: The main library crate for padgen-core, orchestrating seeding, generation and layout of one-time pads.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! # Pad Generator Core Library
//!
//! This library generates one-time pads of passwords or keys: numbered
//! lists of digits, letters, or English-like words drawn from a generator
//! that is fully determined by its seed.
//!
//! ```
//! use padgen_core::{PadConfig, PadSheet, PasswordSynthesizer, SeedMaterial};
//!
//! let config = PadConfig { count: 3, seed: Some("test".to_owned()), ..PadConfig::default() };
//! let material = SeedMaterial::gather(config.seed.as_deref());
//! let mut synthesizer = PasswordSynthesizer::new(config.clone(), material.generator()).unwrap();
//! let sheet = PadSheet::new(&config, synthesizer.generate().unwrap());
//! assert_eq!(sheet.entries().len(), 3);
//! ```

/// Seed digests and item signatures.
pub mod digest;
/// English letter-pair frequencies and weighted sampling.
pub mod digraph;
/// Seed material from user input or system entropy.
pub mod entropy;
/// Error types.
pub mod error;
/// The four-stream combined generator.
pub mod generator;
/// Pad item generation.
pub mod pad_generator;
/// Numbering, layout, and export of generated pads.
pub mod sheet;
/// The additive-feedback streams behind the generator.
pub mod stream;

pub use digest::Signature;
pub use entropy::{SeedMaterial, SeedSource};
pub use error::PadError;
pub use generator::CombinedGenerator;
pub use pad_generator::{LetterCase, Mode, PadConfig, PadItem, PasswordSynthesizer};
pub use rand_core::{RngCore, SeedableRng};
pub use sheet::PadSheet;
