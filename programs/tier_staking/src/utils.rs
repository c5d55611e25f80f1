use crate::constants::TIER_THRESHOLDS;
use crate::error::ErrorCode;
use anchor_lang::prelude::*;
use anchor_lang::solana_program::clock;
use std::convert::TryFrom;

/// Tier of `amount` under an ascending threshold table: the number of
/// thresholds the amount reaches.
pub fn get_tier(amount: u64, thresholds: &[u64]) -> u8 {
    for (i, x) in thresholds.iter().enumerate() {
        if amount < *x {
            return i as u8;
        }
    }

    thresholds.len() as u8
}

pub fn classify(amount: u64, no_tier: bool) -> u8 {
    if no_tier {
        return 0;
    }
    get_tier(amount, &TIER_THRESHOLDS)
}

/// Current cluster time in seconds.
pub fn now_ts() -> Result<u64> {
    let clock = clock::Clock::get()?;
    u64::try_from(clock.unix_timestamp).map_err(|_| error!(ErrorCode::InvalidTimestamp))
}
