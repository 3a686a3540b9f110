//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

use crate::{MAX_TICK_CROSS, SEARCH_RANGE};

/// Per-call bounds on how far a simulation may look and travel.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SwapSimulationConfig {
    /// Tick spacings a single tickmap scan covers.
    pub search_range: i32,
    /// Crossed ticks after which the simulation stops.
    pub max_tick_cross: usize,
}

impl Default for SwapSimulationConfig {
    fn default() -> Self {
        Self {
            search_range: SEARCH_RANGE,
            max_tick_cross: MAX_TICK_CROSS,
        }
    }
}
