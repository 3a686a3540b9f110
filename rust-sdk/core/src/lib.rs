//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

//! Off-chain swap simulation for concentrated liquidity pools.
//!
//! All arithmetic is exact scaled-integer math over 256-bit values. The
//! `floats` feature adds lossy `f64` price conversions.

mod constants;
mod math;
mod quote;
mod types;

pub use constants::*;
pub use math::*;
pub use quote::*;
pub use types::*;
