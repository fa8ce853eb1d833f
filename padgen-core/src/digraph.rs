// File:    digraph.rs
// Author:  apezoo
// Date:    2025-07-17
//
// Description: English letter-pair frequencies and frequency-weighted letter sampling.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! English digraph model.
//!
//! Frequencies of English digraphs are from D. Edwards (1966), as used by
//! the MIT `mpw` password generator. Letters are indexed `0..26` for `a..z`.

use crate::error::PadError;
use rand_core::RngCore;

/// Letters in the alphabet.
pub const LETTERS: usize = 26;

/// How often letter `j` follows letter `i` in English text.
#[rustfmt::skip]
pub static FREQUENCY: [[u32; LETTERS]; LETTERS] = [
    [4, 20, 28, 52, 2, 11, 28, 4, 32, 4, 6, 62, 23, 167, 2, 14, 0, 83, 76, 127, 7, 25, 8, 1, 9, 1],        // a
    [13, 0, 0, 0, 55, 0, 0, 0, 8, 2, 0, 22, 0, 0, 11, 0, 0, 15, 4, 2, 13, 0, 0, 0, 15, 0],                  // b
    [32, 0, 7, 1, 69, 0, 0, 33, 17, 0, 10, 9, 1, 0, 50, 3, 0, 10, 0, 28, 11, 0, 0, 0, 3, 0],                // c
    [40, 16, 9, 5, 65, 18, 3, 9, 56, 0, 1, 4, 15, 6, 16, 4, 0, 21, 18, 53, 19, 5, 15, 0, 3, 0],             // d
    [84, 20, 55, 125, 51, 40, 19, 16, 50, 1, 4, 55, 54, 146, 35, 37, 6, 191, 149, 65, 9, 26, 21, 12, 5, 0], // e
    [19, 3, 5, 1, 19, 21, 1, 3, 30, 2, 0, 11, 1, 0, 51, 0, 0, 26, 8, 47, 6, 3, 3, 0, 2, 0],                 // f
    [20, 4, 3, 2, 35, 1, 3, 15, 18, 0, 0, 5, 1, 4, 21, 1, 1, 20, 9, 21, 9, 0, 5, 0, 1, 0],                  // g
    [101, 1, 3, 0, 270, 5, 1, 6, 57, 0, 0, 0, 3, 2, 44, 1, 0, 3, 10, 18, 6, 0, 5, 0, 3, 0],                 // h
    [40, 7, 51, 23, 25, 9, 11, 3, 0, 0, 2, 38, 25, 202, 56, 12, 1, 46, 79, 117, 1, 22, 0, 4, 0, 3],         // i
    [3, 0, 0, 0, 5, 0, 0, 0, 1, 0, 0, 0, 0, 0, 4, 0, 0, 0, 0, 0, 3, 0, 0, 0, 0, 0],                         // j
    [1, 0, 0, 0, 11, 0, 0, 0, 13, 0, 0, 0, 0, 2, 0, 0, 0, 0, 6, 2, 1, 0, 2, 0, 1, 0],                       // k
    [44, 2, 5, 12, 62, 7, 5, 2, 42, 1, 1, 53, 2, 2, 25, 1, 1, 2, 16, 23, 9, 0, 1, 0, 33, 0],                // l
    [52, 14, 1, 0, 64, 0, 0, 3, 37, 0, 0, 0, 7, 1, 17, 18, 1, 2, 12, 3, 8, 0, 1, 0, 2, 0],                  // m
    [42, 10, 47, 122, 63, 19, 106, 12, 30, 1, 6, 6, 9, 7, 54, 7, 1, 7, 44, 124, 6, 1, 15, 0, 12, 0],        // n
    [7, 12, 14, 17, 5, 95, 3, 5, 14, 0, 0, 19, 41, 134, 13, 23, 0, 91, 23, 42, 55, 16, 28, 0, 4, 1],        // o
    [19, 1, 0, 0, 37, 0, 0, 4, 8, 0, 0, 15, 1, 0, 27, 9, 0, 33, 14, 7, 6, 0, 0, 0, 0, 0],                   // p
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 17, 0, 0, 0, 0, 0],                        // q
    [83, 8, 16, 23, 169, 4, 8, 8, 77, 1, 10, 5, 26, 16, 60, 4, 0, 24, 37, 55, 6, 11, 4, 0, 28, 0],          // r
    [65, 9, 17, 9, 73, 13, 1, 47, 75, 3, 0, 7, 11, 12, 56, 17, 6, 9, 48, 116, 35, 1, 28, 0, 4, 0],          // s
    [57, 22, 3, 1, 76, 5, 2, 330, 126, 1, 0, 14, 10, 6, 79, 7, 0, 49, 50, 56, 21, 2, 27, 0, 24, 0],         // t
    [11, 5, 9, 6, 9, 1, 6, 0, 9, 0, 1, 19, 5, 31, 1, 15, 0, 47, 39, 31, 0, 3, 0, 0, 0, 0],                  // u
    [7, 0, 0, 0, 72, 0, 0, 0, 28, 0, 0, 0, 0, 0, 5, 0, 0, 0, 0, 0, 0, 0, 0, 0, 3, 0],                       // v
    [36, 1, 1, 0, 38, 0, 0, 33, 36, 0, 0, 4, 1, 8, 15, 0, 0, 0, 4, 2, 0, 0, 1, 0, 0, 0],                    // w
    [1, 0, 2, 0, 0, 1, 0, 0, 3, 0, 0, 0, 0, 0, 1, 5, 0, 0, 0, 3, 0, 0, 1, 0, 0, 0],                         // x
    [14, 5, 4, 2, 7, 12, 12, 6, 10, 0, 0, 3, 7, 5, 17, 3, 0, 4, 16, 30, 0, 0, 5, 0, 0, 0],                  // y
    [1, 0, 0, 0, 4, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],                         // z
];

/// Published sum of each row of [`FREQUENCY`].
#[rustfmt::skip]
pub static ROW_SUMS: [u32; LETTERS] = [
    796, 160, 284, 401, 1276, 262, 199, 539, 777,
    16, 39, 351, 243, 751, 662, 181, 17, 683,
    662, 968, 248, 115, 180, 17, 162, 5,
];

/// How often each letter starts an English word.
#[rustfmt::skip]
pub static START_FREQ: [u32; LETTERS] = [
    1299, 425, 725, 271, 375, 470, 93, 223, 1009,
    24, 20, 355, 379, 319, 823, 618, 21, 317,
    962, 1991, 271, 104, 516, 6, 16, 14,
];

/// Published sum of [`START_FREQ`].
pub const TOTAL_SUM: u32 = 11_646;

/// Letter for an index in `0..26`.
#[must_use]
pub fn letter(index: usize) -> char {
    char::from(b'a' + u8::try_from(index % LETTERS).unwrap_or(0))
}

/// Inclusive running totals of a frequency row.
fn cumulative(frequencies: &[u32; LETTERS]) -> [u32; LETTERS] {
    let mut running = 0;
    (*frequencies).map(|frequency| {
        running += frequency;
        running
    })
}

/// Frequency-weighted selection over one row of counts.
#[derive(Debug, Clone, PartialEq, Eq)]
struct WeightedRow {
    cumulative: [u32; LETTERS],
}

impl WeightedRow {
    fn new(frequencies: &[u32; LETTERS]) -> Self {
        Self {
            cumulative: cumulative(frequencies),
        }
    }

    fn total(&self) -> u32 {
        self.cumulative[LETTERS - 1]
    }

    /// First index whose running total exceeds `position`.
    ///
    /// `position` must be below [`WeightedRow::total`], which leaves the
    /// clamp unused.
    fn select(&self, position: u32) -> usize {
        self.cumulative
            .partition_point(|&total| total <= position)
            .min(LETTERS - 1)
    }
}

/// Verified digraph tables with precomputed running totals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigraphModel {
    start: WeightedRow,
    rows: Vec<WeightedRow>,
}

impl DigraphModel {
    /// The English model built from the static tables.
    ///
    /// # Errors
    ///
    /// Returns a consistency error if the tables disagree with their
    /// published sums.
    pub fn english() -> Result<Self, PadError> {
        Self::from_tables(&FREQUENCY, &ROW_SUMS, &START_FREQ, TOTAL_SUM)
    }

    /// Builds a model from arbitrary tables, checking every published sum.
    ///
    /// Rows summing to zero are accepted here but refused by
    /// [`DigraphModel::next_letter`] if sampling ever reaches them.
    ///
    /// # Errors
    ///
    /// Returns [`PadError::RowSumMismatch`] for the first row that does not
    /// match `row_sums`, [`PadError::TotalSumMismatch`] if the start
    /// frequencies do not add up to `total_sum`, or
    /// [`PadError::EmptyStartFrequencies`] if they are all zero.
    pub fn from_tables(
        frequency: &[[u32; LETTERS]; LETTERS],
        row_sums: &[u32; LETTERS],
        start_freq: &[u32; LETTERS],
        total_sum: u32,
    ) -> Result<Self, PadError> {
        let rows: Vec<WeightedRow> = frequency.iter().map(WeightedRow::new).collect();
        for (index, (row, &expected)) in rows.iter().zip(row_sums).enumerate() {
            if row.total() != expected {
                return Err(PadError::RowSumMismatch {
                    letter: letter(index),
                    expected,
                    actual: row.total(),
                });
            }
        }

        let start = WeightedRow::new(start_freq);
        if start.total() != total_sum {
            return Err(PadError::TotalSumMismatch {
                expected: total_sum,
                actual: start.total(),
            });
        }
        if start.total() == 0 {
            return Err(PadError::EmptyStartFrequencies);
        }

        Ok(Self { start, rows })
    }

    /// Draws the index of a word-initial letter.
    pub fn first_letter<R: RngCore + ?Sized>(&self, rng: &mut R) -> usize {
        self.start.select(rng.next_u32() % self.start.total())
    }

    /// Draws the index of the letter following `previous`.
    ///
    /// # Errors
    ///
    /// Returns [`PadError::EmptyDigraphRow`] if `previous` has no
    /// successors. No draw is consumed in that case.
    pub fn next_letter<R: RngCore + ?Sized>(
        &self,
        previous: usize,
        rng: &mut R,
    ) -> Result<usize, PadError> {
        let row = self
            .rows
            .get(previous)
            .ok_or_else(|| PadError::EmptyDigraphRow(letter(previous)))?;
        let total = row.total();
        if total == 0 {
            return Err(PadError::EmptyDigraphRow(letter(previous)));
        }
        Ok(row.select(rng.next_u32() % total))
    }
}
