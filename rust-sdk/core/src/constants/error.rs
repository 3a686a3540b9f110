//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

pub type CoreError = &'static str;

pub const ZERO_AMOUNT: CoreError = "Zero amount";

pub const WRONG_PRICE_LIMIT: CoreError = "Wrong price limit";

pub const NO_GAIN_SWAP: CoreError = "No gain swap";

pub const INVALID_TICK_INDEX: CoreError = "Invalid tick index";

pub const INVALID_TICK_SPACING: CoreError = "Invalid tick spacing";

pub const TICK_OVER_BOUNDS: CoreError = "Tick over bounds";

pub const SQRT_PRICE_OUT_OF_RANGE: CoreError = "Sqrt price out of range";

pub const CAST_OVERFLOW: CoreError = "Cast overflow";

pub const ADD_OVERFLOW: CoreError = "Add overflow";

pub const MUL_OVERFLOW: CoreError = "Mul overflow";

pub const SUB_UNDERFLOW: CoreError = "Sub underflow";

pub const DIV_NOT_POSITIVE_DIVISOR: CoreError = "Division by not positive divisor";

pub const DIV_NOT_POSITIVE_DENOMINATOR: CoreError = "Division by not positive denominator";

pub const INVALID_FEE: CoreError = "Invalid fee";

pub const TOKENS_ARE_SAME: CoreError = "Tokens are the same";

pub const POOL_NOT_FOUND: CoreError = "Pool not found";
