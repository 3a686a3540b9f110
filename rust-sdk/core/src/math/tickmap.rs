//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

use ethnum::U256;

use crate::{align_tick_to_spacing, get_max_tick, CoreError, Tickmap, CHUNK_SIZE, GLOBAL_MAX_TICK, INVALID_TICK_INDEX, INVALID_TICK_SPACING, SEARCH_RANGE};

const LAST_BIT: u8 = (CHUNK_SIZE - 1) as u8;

/// Maps a tick to its `(chunk, bit)` position in the tickmap.
///
/// # Returns
/// - `INVALID_TICK_INDEX` if the tick is outside the global range or is not
///   a multiple of `tick_spacing`
pub fn tick_to_position(tick: i32, tick_spacing: u16) -> Result<(u16, u8), CoreError> {
    if tick_spacing == 0 {
        return Err(INVALID_TICK_SPACING);
    }
    let tick_spacing = tick_spacing as i32;
    if !(-GLOBAL_MAX_TICK..=GLOBAL_MAX_TICK).contains(&tick) || tick % tick_spacing != 0 {
        return Err(INVALID_TICK_INDEX);
    }

    let bitmap_index = (tick + GLOBAL_MAX_TICK) / tick_spacing;
    Ok(((bitmap_index / CHUNK_SIZE) as u16, (bitmap_index % CHUNK_SIZE) as u8))
}

/// Inverse of `tick_to_position`.
pub fn position_to_tick(chunk: u16, bit: u8, tick_spacing: u16) -> i32 {
    let tick_spacing = tick_spacing as i32;
    let bitmap_index = chunk as i32 * CHUNK_SIZE + bit as i32;
    (bitmap_index - GLOBAL_MAX_TICK / tick_spacing) * tick_spacing
}

/// The furthest tick a single tickmap scan reaches from `tick`, clamped to
/// the usable tick range.
pub fn get_search_limit(tick: i32, tick_spacing: u16, up: bool) -> i32 {
    get_search_limit_within(tick, tick_spacing, up, SEARCH_RANGE)
}

pub fn get_search_limit_within(tick: i32, tick_spacing: u16, up: bool, search_range: i32) -> i32 {
    let tick_spacing = tick_spacing.max(1) as i32;
    let index = tick / tick_spacing;
    let max_index = GLOBAL_MAX_TICK / tick_spacing;

    let limit = if up {
        index.saturating_add(search_range).min(max_index)
    } else {
        index.saturating_sub(search_range).max(-max_index)
    };
    limit * tick_spacing
}

/// Index of the last chunk that holds a usable tick.
pub fn get_max_chunk(tick_spacing: u16) -> u16 {
    let tick_spacing_i32 = tick_spacing.max(1) as i32;
    ((get_max_tick(tick_spacing) + GLOBAL_MAX_TICK) / tick_spacing_i32 / CHUNK_SIZE) as u16
}

impl Tickmap {
    /// Builds a tickmap from a ledger snapshot of `(chunk, word)` pairs.
    /// Empty words are dropped.
    ///
    /// # Returns
    /// - `INVALID_TICK_INDEX` if a set bit lies past the last usable tick for `tick_spacing`
    pub fn from_chunks(chunks: impl IntoIterator<Item = (u16, U256)>, tick_spacing: u16) -> Result<Self, CoreError> {
        let (max_chunk, max_bit) = tick_to_position(get_max_tick(tick_spacing), tick_spacing)?;

        let mut tickmap = Tickmap::new();
        for (index, word) in chunks {
            if word == U256::ZERO {
                continue;
            }
            let is_past_max = index > max_chunk || (index == max_chunk && max_bit < LAST_BIT && word >> (max_bit as u32 + 1) != U256::ZERO);
            if is_past_max {
                return Err(INVALID_TICK_INDEX);
            }
            tickmap.chunks.insert(index, word);
        }
        Ok(tickmap)
    }

    pub fn flip(&mut self, tick: i32, tick_spacing: u16) -> Result<(), CoreError> {
        let (chunk, bit) = tick_to_position(tick, tick_spacing)?;
        let word = self.chunk(chunk) ^ (U256::ONE << bit as u32);
        if word == U256::ZERO {
            self.chunks.remove(&chunk);
        } else {
            self.chunks.insert(chunk, word);
        }
        Ok(())
    }

    pub fn get(&self, tick: i32, tick_spacing: u16) -> Result<bool, CoreError> {
        let (chunk, bit) = tick_to_position(tick, tick_spacing)?;
        Ok((self.chunk(chunk) >> bit as u32) & U256::ONE == U256::ONE)
    }

    /// The first initialized tick strictly above `tick`, within
    /// `SEARCH_RANGE` spacings.
    pub fn next_initialized(&self, tick: i32, tick_spacing: u16) -> Option<i32> {
        self.next_initialized_within(tick, tick_spacing, SEARCH_RANGE)
    }

    pub fn next_initialized_within(&self, tick: i32, tick_spacing: u16, search_range: i32) -> Option<i32> {
        if tick_spacing == 0 {
            return None;
        }
        let tick = align_tick_to_spacing(tick, tick_spacing as i32).max(-get_max_tick(tick_spacing));
        let limit = get_search_limit_within(tick, tick_spacing, true, search_range);
        let start = tick.checked_add(tick_spacing as i32)?;
        if start > limit {
            return None;
        }

        let (mut chunk, mut bit) = tick_to_position(start, tick_spacing).ok()?;
        let (limit_chunk, limit_bit) = tick_to_position(limit, tick_spacing).ok()?;

        while chunk < limit_chunk || (chunk == limit_chunk && bit <= limit_bit) {
            let shifted = self.chunk(chunk) >> bit as u32;
            if shifted != U256::ZERO {
                let found = (bit as u32 + shifted.trailing_zeros()) as u8;
                if chunk < limit_chunk || found <= limit_bit {
                    return Some(position_to_tick(chunk, found, tick_spacing));
                }
                return None;
            }
            chunk += 1;
            bit = 0;
        }

        None
    }

    /// The last initialized tick at or below `tick`, within `SEARCH_RANGE`
    /// spacings.
    pub fn prev_initialized(&self, tick: i32, tick_spacing: u16) -> Option<i32> {
        self.prev_initialized_within(tick, tick_spacing, SEARCH_RANGE)
    }

    pub fn prev_initialized_within(&self, tick: i32, tick_spacing: u16, search_range: i32) -> Option<i32> {
        if tick_spacing == 0 {
            return None;
        }
        let tick = align_tick_to_spacing(tick, tick_spacing as i32).min(get_max_tick(tick_spacing));
        let limit = get_search_limit_within(tick, tick_spacing, false, search_range);
        if tick < limit {
            return None;
        }

        let (mut chunk, mut bit) = tick_to_position(tick, tick_spacing).ok()?;
        let (limit_chunk, limit_bit) = tick_to_position(limit, tick_spacing).ok()?;

        while chunk > limit_chunk || (chunk == limit_chunk && bit >= limit_bit) {
            // keep bits at or below the current one
            let mask = if bit == LAST_BIT {
                U256::MAX
            } else {
                (U256::ONE << (bit as u32 + 1)) - U256::ONE
            };
            let masked = self.chunk(chunk) & mask;
            if masked != U256::ZERO {
                let found = (LAST_BIT as u32 - masked.leading_zeros()) as u8;
                if chunk > limit_chunk || found >= limit_bit {
                    return Some(position_to_tick(chunk, found, tick_spacing));
                }
                return None;
            }
            if chunk == 0 {
                return None;
            }
            chunk -= 1;
            bit = LAST_BIT;
        }

        None
    }

    /// Initialized ticks a swap starting at `tick` would meet, in swap order.
    ///
    /// Follows the simulator's own walk: going down a reached tick is crossed
    /// to `tick - tick_spacing`, going up the cursor stays on the reached
    /// tick. Stops at the first empty search window or after `max_ticks`.
    pub fn initialized_ticks_in_direction(&self, tick: i32, tick_spacing: u16, x_to_y: bool, max_ticks: usize) -> Vec<i32> {
        let mut ticks = Vec::new();
        let mut cursor = tick;

        while ticks.len() < max_ticks {
            let found = if x_to_y {
                self.prev_initialized(cursor, tick_spacing)
            } else {
                self.next_initialized(cursor, tick_spacing)
            };
            let Some(found) = found else {
                break;
            };
            ticks.push(found);
            cursor = if x_to_y { found - tick_spacing as i32 } else { found };
        }

        ticks
    }
}
