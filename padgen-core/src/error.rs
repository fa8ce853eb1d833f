// File:    error.rs
// Author:  apezoo
// Date:    2025-07-17
//
// Description: Error taxonomy for pad configuration, entropy gathering and digraph model consistency.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! Errors produced while configuring, seeding, or generating a pad.

/// Errors produced by the pad generator.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PadError {
    /// The configured item length was zero.
    #[error("item length must be at least 1 character")]
    InvalidLength,

    /// The configured item count was zero.
    #[error("item count must be at least 1")]
    InvalidCount,

    /// No strong system entropy could be read.
    #[error("no strong entropy source available: {0}")]
    EntropyUnavailable(String),

    /// A digraph row does not add up to its published sum.
    #[error("digraph row '{letter}' sums to {actual}, expected {expected}")]
    RowSumMismatch {
        /// The leading letter of the row.
        letter: char,
        /// The published row sum.
        expected: u32,
        /// The sum of the row's frequencies.
        actual: u32,
    },

    /// The start frequencies do not add up to the published total.
    #[error("start frequencies sum to {actual}, expected {expected}")]
    TotalSumMismatch {
        /// The published total.
        expected: u32,
        /// The sum of the start frequencies.
        actual: u32,
    },

    /// Every start frequency is zero, so no word can begin.
    #[error("start frequencies are all zero")]
    EmptyStartFrequencies,

    /// Sampling reached a letter that has no successors.
    #[error("digraph row '{0}' has no successors")]
    EmptyDigraphRow(char),
}

impl PadError {
    /// Whether the error must abort the run.
    ///
    /// Only [`PadError::EntropyUnavailable`] is recoverable: generation
    /// proceeds on weaker seed material and the caller is warned.
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        !matches!(self, Self::EntropyUnavailable(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_row_sum_mismatch() {
        let err = PadError::RowSumMismatch {
            letter: 'q',
            expected: 17,
            actual: 16,
        };
        assert_eq!(
            err.to_string(),
            "digraph row 'q' sums to 16, expected 17"
        );
    }

    #[test]
    fn test_display_config_errors() {
        assert_eq!(
            PadError::InvalidLength.to_string(),
            "item length must be at least 1 character"
        );
        assert_eq!(
            PadError::InvalidCount.to_string(),
            "item count must be at least 1"
        );
    }

    #[test]
    fn test_only_entropy_is_recoverable() {
        assert!(!PadError::EntropyUnavailable("no device".to_owned()).is_fatal());
        assert!(PadError::InvalidCount.is_fatal());
        assert!(PadError::EmptyDigraphRow('z').is_fatal());
    }
}
