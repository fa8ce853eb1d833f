// File:    pad_generator.rs
// Author:  apezoo
// Date:    2025-07-17
//
// Description: Generates the items of a one-time pad from a seeded generator.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

use crate::digest::Signature;
use crate::digraph::DigraphModel;
use crate::error::PadError;
use crate::generator::CombinedGenerator;
use log::{debug, info};
use rand_core::RngCore;
use serde::{Deserialize, Serialize};

/// Character inserted between groups of an item.
pub const SEPARATOR: char = '-';

/// Case of letters in English-like items.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LetterCase {
    /// `a` to `z`.
    #[default]
    Lower,
    /// `A` to `Z`.
    Upper,
}

/// The character class of generated items.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Uniform decimal digits.
    Numeric,
    /// Uniform lowercase letters.
    #[default]
    Lower,
    /// Uniform uppercase letters.
    Upper,
    /// Letters following English digraph frequencies.
    English(LetterCase),
}

/// Parameters of a pad run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PadConfig {
    /// Character class of the items.
    pub mode: Mode,
    /// Data characters per item, separators excluded.
    pub length: usize,
    /// Number of items to generate.
    pub count: usize,
    /// Insert a separator every this many characters; 0 disables.
    pub separator: usize,
    /// Explicit seed; `None` seeds from system entropy.
    pub seed: Option<String>,
    /// Whether to compute a signature for every item.
    pub signatures: bool,
}

impl Default for PadConfig {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            length: 8,
            count: 50,
            separator: 4,
            seed: None,
            signatures: false,
        }
    }
}

impl PadConfig {
    /// Checks the configuration before any generation happens.
    ///
    /// # Errors
    ///
    /// Returns [`PadError::InvalidLength`] or [`PadError::InvalidCount`] for
    /// zero values.
    pub const fn validate(&self) -> Result<(), PadError> {
        if self.length == 0 {
            return Err(PadError::InvalidLength);
        }
        if self.count == 0 {
            return Err(PadError::InvalidCount);
        }
        Ok(())
    }

    /// Printed width of one item, separators included.
    #[must_use]
    pub const fn item_width(&self) -> usize {
        if self.separator > 0 && self.length > 0 {
            self.length + (self.length - 1) / self.separator
        } else {
            self.length
        }
    }
}

/// One generated pad item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PadItem {
    /// The item as written, separators included.
    pub text: String,
    /// Signature of `text`, when requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signature: Option<Signature>,
}

/// Draws pad items in order from a single generator.
#[derive(Debug)]
pub struct PasswordSynthesizer<R = CombinedGenerator> {
    config: PadConfig,
    model: DigraphModel,
    rng: R,
}

impl<R: RngCore> PasswordSynthesizer<R> {
    /// Prepares a synthesizer that takes exclusive ownership of `rng`.
    ///
    /// # Errors
    ///
    /// Returns a configuration error for an invalid `config`, or a
    /// consistency error if the digraph tables are corrupt.
    pub fn new(config: PadConfig, rng: R) -> Result<Self, PadError> {
        config.validate()?;
        let model = DigraphModel::english()?;
        Ok(Self { config, model, rng })
    }

    /// The configuration in use.
    #[must_use]
    pub const fn config(&self) -> &PadConfig {
        &self.config
    }

    /// Draws the next item.
    ///
    /// # Errors
    ///
    /// Returns [`PadError::EmptyDigraphRow`] if English sampling reaches a
    /// letter with no successors.
    pub fn next_item(&mut self) -> Result<PadItem, PadError> {
        let data = match self.config.mode {
            Mode::Numeric => self.uniform(b'0', 10),
            Mode::Lower => self.uniform(b'a', 26),
            Mode::Upper => self.uniform(b'A', 26),
            Mode::English(case) => self.english(case)?,
        };
        let text = insert_separators(&data, self.config.separator);
        let signature = self.config.signatures.then(|| Signature::of(&text));
        Ok(PadItem { text, signature })
    }

    /// Draws all configured items. Nothing is returned unless every item
    /// was generated.
    ///
    /// # Errors
    ///
    /// Propagates the first error from [`PasswordSynthesizer::next_item`].
    pub fn generate(&mut self) -> Result<Vec<PadItem>, PadError> {
        info!(
            "Generating {} item(s) of {} {:?} character(s)",
            self.config.count, self.config.length, self.config.mode
        );
        let items = (0..self.config.count)
            .map(|_| self.next_item())
            .collect::<Result<Vec<_>, _>>()?;
        debug!("Generated {} item(s)", items.len());
        Ok(items)
    }

    /// Releases the generator, e.g. to keep drawing from it.
    pub fn into_inner(self) -> R {
        self.rng
    }

    fn uniform(&mut self, base: u8, alphabet: u32) -> Vec<u8> {
        (0..self.config.length)
            .map(|_| base + digit(self.rng.next_u32(), alphabet))
            .collect()
    }

    fn english(&mut self, case: LetterCase) -> Result<Vec<u8>, PadError> {
        let mut letters = Vec::with_capacity(self.config.length);
        let mut current = self.model.first_letter(&mut self.rng);
        letters.push(current);
        while letters.len() < self.config.length {
            current = self.model.next_letter(current, &mut self.rng)?;
            letters.push(current);
        }

        let base = match case {
            LetterCase::Lower => b'a',
            LetterCase::Upper => b'A',
        };
        Ok(letters
            .into_iter()
            .map(|index| base + u8::try_from(index).unwrap_or(0))
            .collect())
    }
}

/// Reduces a draw to `0..alphabet`.
fn digit(draw: u32, alphabet: u32) -> u8 {
    u8::try_from(draw % alphabet).unwrap_or(0)
}

/// Inserts [`SEPARATOR`] before every `interval`-th data character.
fn insert_separators(data: &[u8], interval: usize) -> String {
    let mut text = String::with_capacity(data.len() * 2);
    for (position, &byte) in data.iter().enumerate() {
        if interval > 0 && position > 0 && position % interval == 0 {
            text.push(SEPARATOR);
        }
        text.push(char::from(byte));
    }
    text
}
