//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

/// Upper bound on ticks a single simulated swap may cross before it stops.
pub const MAX_TICK_CROSS: usize = 173;
