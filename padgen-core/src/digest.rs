// File:    digest.rs
// Author:  apezoo
// Date:    2025-07-17
//
// Description: Hashing of seed material and pad items.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! Seed digests and per-item signatures.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

/// Size in bytes of a seed digest.
pub const DIGEST_LEN: usize = 32;

/// Hashes an arbitrary buffer into a fixed-size digest.
#[must_use]
pub fn seed_digest(bytes: &[u8]) -> [u8; DIGEST_LEN] {
    Sha256::digest(bytes).into()
}

/// Digest of a single pad item, used to check it was received unaltered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Signature([u8; DIGEST_LEN]);

impl Signature {
    /// Signs the bytes of a finished item.
    #[must_use]
    pub fn of(item: &str) -> Self {
        Self(seed_digest(item.as_bytes()))
    }

    /// Raw digest bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    /// Uppercase hex rendering, as written to signature files.
    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode_upper(self.0)
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl From<Signature> for String {
    fn from(signature: Signature) -> Self {
        signature.to_hex()
    }
}

impl TryFrom<String> for Signature {
    type Error = hex::FromHexError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let mut bytes = [0u8; DIGEST_LEN];
        hex::decode_to_slice(value, &mut bytes)?;
        Ok(Self(bytes))
    }
}
