// File:    sheet.rs
// Author:  apezoo
// Date:    2025-07-17
//
// Description: Numbering, line layout and export of a finished pad.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! Printable and exportable form of a generated pad.

use crate::pad_generator::{PadConfig, PadItem};
use serde::{Deserialize, Serialize};

/// Default output line width.
pub const DEFAULT_WIDTH: usize = 79;

/// Gap between entries sharing a line.
const ENTRY_GAP: &str = "  ";

/// Room taken by an entry besides the item and its number: `") "`, the gap,
/// and one spare column.
const ENTRY_OVERHEAD: usize = 5;

/// A numbered item as exported.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SheetEntry {
    /// One-based position of the item in the pad.
    pub line: usize,
    /// The item itself.
    #[serde(flatten)]
    pub item: PadItem,
}

/// A finished pad: the configuration that produced it and its items.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PadSheet {
    /// The run configuration. The seed is never stored.
    pub config: PadConfig,
    /// The numbered items.
    pub items: Vec<SheetEntry>,
}

impl PadSheet {
    /// Numbers `items` from 1.
    #[must_use]
    pub fn new(config: &PadConfig, items: Vec<PadItem>) -> Self {
        let config = PadConfig {
            seed: None,
            ..config.clone()
        };
        let items = items
            .into_iter()
            .enumerate()
            .map(|(index, item)| SheetEntry {
                line: index + 1,
                item,
            })
            .collect();
        Self { config, items }
    }

    /// Digits needed for the largest item number.
    #[must_use]
    pub fn number_width(&self) -> usize {
        self.items.len().max(1).to_string().len()
    }

    /// Every entry formatted as `<line-number>) <item>`, numbers right-aligned.
    #[must_use]
    pub fn entries(&self) -> Vec<String> {
        let width = self.number_width();
        self.items
            .iter()
            .map(|entry| format!("{:>width$}) {}", entry.line, entry.item.text))
            .collect()
    }

    /// Entries packed into lines of at most `width` columns, at least one
    /// entry per line.
    #[must_use]
    pub fn lines(&self, width: usize) -> Vec<String> {
        let entry_width = self.config.item_width() + self.number_width() + ENTRY_OVERHEAD;
        let per_line = (width / entry_width).max(1);
        self.entries()
            .chunks(per_line)
            .map(|chunk| chunk.join(ENTRY_GAP))
            .collect()
    }

    /// Uppercase hex signatures, one per item, for items that carry one.
    #[must_use]
    pub fn signature_lines(&self) -> Vec<String> {
        self.items
            .iter()
            .filter_map(|entry| entry.item.signature.as_ref().map(ToString::to_string))
            .collect()
    }

    /// Pretty-printed JSON export.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
