//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

use std::collections::BTreeMap;

use ethnum::U256;

/// Sparse bitmap of initialized ticks, one `U256` word per chunk of
/// `CHUNK_SIZE` positions. Absent chunks are all zero.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tickmap {
    pub chunks: BTreeMap<u16, U256>,
}

impl Tickmap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn chunk(&self, index: u16) -> U256 {
        self.chunks.get(&index).copied().unwrap_or(U256::ZERO)
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }
}
