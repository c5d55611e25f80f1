use crate::account::{Pool, User};
use crate::constants::PRECISION;
use crate::error::ErrorCode;
use anchor_lang::prelude::*;
use std::convert::TryFrom;

pub fn update_rewards(pool: &mut Pool, user: Option<&mut User>, now: u64) -> Result<()> {
    settle(pool, now)?;

    if let Some(u) = user {
        settle_user(pool, u)?;
    }
    Ok(())
}

/// Brings `reward_per_token_stored` up to `now`. Never advances
/// `last_update_time` past the end of the funded epoch.
pub fn settle(pool: &mut Pool, now: u64) -> Result<()> {
    let last_time_reward_applicable = last_time_reward_applicable(pool.reward_duration_end, now);

    pool.reward_per_token_stored = reward_per_token(
        pool.total_staked,
        pool.reward_per_token_stored,
        last_time_reward_applicable,
        pool.last_update_time,
        pool.reward_rate,
    )?;

    pool.last_update_time = std::cmp::max(pool.last_update_time, last_time_reward_applicable);

    Ok(())
}

/// Must run after `settle` on the same pool.
pub fn settle_user(pool: &Pool, user: &mut User) -> Result<()> {
    user.reward_per_token_pending = earned(
        user.balance_staked,
        pool.reward_per_token_stored,
        user.reward_per_token_complete,
        user.reward_per_token_pending,
    )?;
    user.reward_per_token_complete = pool.reward_per_token_stored;
    Ok(())
}

pub fn last_time_reward_applicable(reward_duration_end: u64, now: u64) -> u64 {
    std::cmp::min(now, reward_duration_end)
}

pub fn reward_per_token(
    total_staked: u64,
    reward_per_token_stored: u128,
    last_time_reward_applicable: u64,
    last_update_time: u64,
    reward_rate: u128,
) -> Result<u128> {
    if total_staked == 0 {
        return Ok(reward_per_token_stored);
    }

    let elapsed = last_time_reward_applicable.saturating_sub(last_update_time) as u128;

    let delta = elapsed
        .checked_mul(reward_rate)
        .ok_or(ErrorCode::ArithmeticOverflow)?
        / total_staked as u128;

    reward_per_token_stored
        .checked_add(delta)
        .ok_or_else(|| error!(ErrorCode::ArithmeticOverflow))
}

/// Pending reward after crediting `balance_staked` with the accumulator
/// growth since `user_reward_per_token_paid`. Scaled by `PRECISION`.
pub fn earned(
    balance_staked: u64,
    reward_per_token: u128,
    user_reward_per_token_paid: u128,
    user_reward_pending: u128,
) -> Result<u128> {
    let growth = reward_per_token.saturating_sub(user_reward_per_token_paid);

    (balance_staked as u128)
        .checked_mul(growth)
        .and_then(|x| x.checked_add(user_reward_pending))
        .ok_or_else(|| error!(ErrorCode::ArithmeticOverflow))
}

/// Whole tokens in a scaled pending amount, plus the carried remainder.
pub fn split_pending(pending: u128) -> Result<(u64, u128)> {
    let whole = u64::try_from(pending / PRECISION)
        .map_err(|_| error!(ErrorCode::ArithmeticOverflow))?;
    Ok((whole, pending % PRECISION))
}

/// Scaled reward rate for a new epoch of `duration` seconds starting at
/// `now`, rolling over whatever the running epoch has not yet emitted.
pub fn funded_rate(pool: &Pool, amount: u64, now: u64) -> Result<u128> {
    let duration = pool.reward_duration as u128;
    if duration == 0 {
        return err!(ErrorCode::DurationTooShort);
    }

    let funded = (amount as u128)
        .checked_mul(PRECISION)
        .ok_or(ErrorCode::ArithmeticOverflow)?;

    if now >= pool.reward_duration_end {
        return Ok(funded / duration);
    }

    let remaining = (pool.reward_duration_end - now) as u128;
    let leftover = remaining
        .checked_mul(pool.reward_rate)
        .ok_or(ErrorCode::ArithmeticOverflow)?;

    Ok(funded
        .checked_add(leftover)
        .ok_or(ErrorCode::ArithmeticOverflow)?
        / duration)
}

/// Whole reward tokens `user` could claim at `now`, without mutating state.
pub fn pending_reward(pool: &Pool, user: &User, now: u64) -> Result<u64> {
    let mut pool = pool.clone();
    let mut user = user.clone();
    update_rewards(&mut pool, Some(&mut user), now)?;
    let (whole, _) = split_pending(user.reward_per_token_pending)?;
    Ok(whole)
}
