// File:    entropy.rs
// Author:  apezoo
// Date:    2025-07-17
//
// Description: Assembles the seed material for a pad, either from a user supplied seed or from system entropy.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! Seed material gathering.
//!
//! An explicit seed string makes a run reproducible: the same string always
//! regenerates the same pad, so a correspondent holding only the seed can
//! rebuild it. Without one, the seed is assembled from the clock, process
//! identifiers, the host identifier and the operating system's random
//! source. If the OS source is unavailable the run still proceeds on the
//! weaker signals, and the material is flagged as degraded.

use crate::error::PadError;
use crate::generator::CombinedGenerator;
use log::{debug, warn};
use rand::{TryRngCore, rngs::OsRng};
use std::fs;
use std::time::{SystemTime, UNIX_EPOCH};

/// Bytes requested from the system random source.
pub const SYSTEM_ENTROPY_BYTES: usize = 32;

const MACHINE_ID_PATH: &str = "/etc/machine-id";

/// A source of unpredictable bytes.
pub trait EntropySource {
    /// Fills `buf` completely.
    ///
    /// # Errors
    ///
    /// Returns [`PadError::EntropyUnavailable`] if the source cannot be read.
    fn fill(&mut self, buf: &mut [u8]) -> Result<(), PadError>;
}

/// The operating system's cryptographic random source.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn fill(&mut self, buf: &mut [u8]) -> Result<(), PadError> {
        OsRng
            .try_fill_bytes(buf)
            .map_err(|e| PadError::EntropyUnavailable(e.to_string()))
    }
}

/// Where seed material came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedSource {
    /// A user supplied seed string.
    Explicit,
    /// System signals plus the OS random source.
    System,
    /// System signals only; the OS random source failed.
    Degraded(PadError),
}

/// The byte buffer that is hashed into the generator seed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedMaterial {
    bytes: Vec<u8>,
    source: SeedSource,
}

impl SeedMaterial {
    /// Uses an explicit seed if one is given, otherwise system entropy.
    #[must_use]
    pub fn gather(seed: Option<&str>) -> Self {
        seed.map_or_else(|| Self::ambient(&mut OsEntropy), Self::explicit)
    }

    /// Material taken verbatim from a seed string.
    #[must_use]
    pub fn explicit(seed: &str) -> Self {
        Self {
            bytes: seed.as_bytes().to_vec(),
            source: SeedSource::Explicit,
        }
    }

    /// Material assembled from the environment and `source`.
    ///
    /// Never fails: if `source` cannot be read, a warning is logged and the
    /// result carries [`SeedSource::Degraded`].
    pub fn ambient<E: EntropySource + ?Sized>(source: &mut E) -> Self {
        let mut bytes = Vec::with_capacity(64 + SYSTEM_ENTROPY_BYTES);

        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default();
        bytes.extend_from_slice(&now.as_secs().to_le_bytes());
        bytes.extend_from_slice(&now.subsec_nanos().to_le_bytes());
        bytes.extend_from_slice(&std::process::id().to_le_bytes());
        #[cfg(unix)]
        bytes.extend_from_slice(&std::os::unix::process::parent_id().to_le_bytes());
        bytes.extend_from_slice(&host_identifier());

        let mut random = [0u8; SYSTEM_ENTROPY_BYTES];
        let source = match source.fill(&mut random) {
            Ok(()) => {
                bytes.extend_from_slice(&random);
                SeedSource::System
            }
            Err(e) => {
                warn!("{e}; seeding from clock and process data only");
                SeedSource::Degraded(e)
            }
        };
        debug!("Assembled {} bytes of ambient seed material", bytes.len());

        Self { bytes, source }
    }

    /// The raw material.
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Where the material came from.
    #[must_use]
    pub const fn source(&self) -> &SeedSource {
        &self.source
    }

    /// Whether the same material can be produced again on request.
    #[must_use]
    pub const fn is_reproducible(&self) -> bool {
        matches!(self.source, SeedSource::Explicit)
    }

    /// The recoverable error recorded while gathering, if any.
    #[must_use]
    pub const fn warning(&self) -> Option<&PadError> {
        match &self.source {
            SeedSource::Degraded(e) => Some(e),
            SeedSource::Explicit | SeedSource::System => None,
        }
    }

    /// Seeds and warms up a generator from this material.
    #[must_use]
    pub fn generator(&self) -> CombinedGenerator {
        CombinedGenerator::from_material(&self.bytes)
    }
}

/// Best-effort host identifier: the machine id, else the host name.
fn host_identifier() -> Vec<u8> {
    fs::read(MACHINE_ID_PATH)
        .ok()
        .or_else(|| std::env::var("HOSTNAME").ok().map(String::into_bytes))
        .unwrap_or_default()
}
