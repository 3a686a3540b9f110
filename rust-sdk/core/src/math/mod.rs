//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

mod fixed_point;
mod slippage;
mod swap_step;
mod tick;
mod tickmap;
mod u256_math;

#[cfg(feature = "floats")]
mod price;

pub use fixed_point::*;
pub use slippage::*;
pub use swap_step::*;
pub use tick::*;
pub use tickmap::*;
pub use u256_math::*;

#[cfg(feature = "floats")]
pub use price::*;
