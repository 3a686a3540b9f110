//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

/// The maximum tick index, symmetric around zero.
pub const GLOBAL_MAX_TICK: i32 = 221_818;

/// The minimum tick index.
pub const GLOBAL_MIN_TICK: i32 = -GLOBAL_MAX_TICK;

/// The sqrt price of `GLOBAL_MIN_TICK`.
pub const MIN_SQRT_PRICE: u128 = 15_258_932_000_000_000_000;

/// The sqrt price of `GLOBAL_MAX_TICK`.
pub const MAX_SQRT_PRICE: u128 = 65_535_383_934_512_647_000_000_000_000;

/// The number of bits in one tickmap chunk.
pub const CHUNK_SIZE: i32 = 256;

/// How many tick spacings a single tickmap scan may cover before giving up.
pub const SEARCH_RANGE: i32 = 256;

// sqrt(1.0001)^(2^k) at FIXED_POINT_SCALE, k = 0..=17
pub(crate) const TICK_PRICE_MULTIPLIERS: [u128; 18] = [
    1_000049998750,
    1_000100000000,
    1_000200010000,
    1_000400060004,
    1_000800280056,
    1_001601200560,
    1_003204964963,
    1_006420201726,
    1_012881622442,
    1_025929181080,
    1_052530684591,
    1_107820842005,
    1_227267017980,
    1_506184333421,
    2_268591246242,
    5_146506242525,
    26_486526504348,
    701_536086265529,
];
