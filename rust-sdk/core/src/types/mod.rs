//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

mod config;
mod decimal;
mod fee_tier;
mod pool;
mod swap;
mod tick;
mod tickmap;

pub use config::*;
pub use decimal::*;
pub use fee_tier::*;
pub use pool::*;
pub use swap::*;
pub use tick::*;
pub use tickmap::*;
