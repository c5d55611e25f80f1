//! Pool and user state transitions.
//!
//! Every operation works on copies of the pool and user, checks the
//! transfer preconditions, moves tokens and only then writes the copies
//! back. A failed operation leaves both accounts untouched.

use crate::account::{Pool, User};
use crate::constants::MIN_DURATION;
use crate::error::ErrorCode;
use crate::events::*;
use crate::reward::{funded_rate, split_pending, update_rewards};
use crate::utils::classify;
use crate::vault::TokenVault;
use anchor_lang::prelude::*;

/// Pool parameters fixed at initialization.
#[derive(Clone, Debug, Default)]
pub struct PoolConfig {
    pub nonce: u8,
    pub staking_mint: Pubkey,
    pub staking_vault: Pubkey,
    pub reward_mint: Pubkey,
    pub reward_vault: Pubkey,
    pub reward_duration: u64,
    pub lock_period: u64,
    pub no_tier: bool,
}

pub fn initialize_pool(pool: &mut Pool, authority: Pubkey, config: PoolConfig) -> Result<()> {
    require!(!pool.is_initialized(), ErrorCode::AlreadyInitialized);
    require!(authority != Pubkey::default(), ErrorCode::Unauthorized);
    require!(config.reward_duration >= MIN_DURATION, ErrorCode::DurationTooShort);

    *pool = Pool {
        authority,
        nonce: config.nonce,
        paused: false,
        staking_mint: config.staking_mint,
        staking_vault: config.staking_vault,
        reward_mint: config.reward_mint,
        reward_vault: config.reward_vault,
        reward_duration: config.reward_duration,
        reward_duration_end: 0,
        lock_period: config.lock_period,
        last_update_time: 0,
        reward_rate: 0,
        reward_per_token_stored: 0,
        user_stake_count: 0,
        total_staked: 0,
        no_tier: config.no_tier,
        funders: Default::default(),
    };

    msg!(
        "Pool initialized: duration {} lock {} no_tier {}",
        config.reward_duration,
        config.lock_period,
        config.no_tier
    );
    emit!(PoolInitialized {
        authority,
        reward_duration: config.reward_duration,
        lock_period: config.lock_period,
        no_tier: config.no_tier,
    });
    Ok(())
}

pub fn create_user(
    pool: &mut Pool,
    user: &mut User,
    pool_key: Pubkey,
    owner: Pubkey,
    nonce: u8,
) -> Result<()> {
    require!(!user.is_initialized(), ErrorCode::AlreadyInitialized);
    require!(owner != Pubkey::default(), ErrorCode::Unauthorized);

    let user_stake_count = pool
        .user_stake_count
        .checked_add(1)
        .ok_or(ErrorCode::ArithmeticOverflow)?;

    *user = User {
        pool: pool_key,
        owner,
        nonce,
        ..User::default()
    };
    pool.user_stake_count = user_stake_count;

    emit!(UserCreated {
        pool: pool_key,
        owner,
        user_stake_count,
    });
    Ok(())
}

pub fn stake<V: TokenVault>(
    pool: &mut Pool,
    user: &mut User,
    owner: &Pubkey,
    amount: u64,
    now: u64,
    vault: &mut V,
) -> Result<()> {
    require!(amount > 0, ErrorCode::InvalidAmount);
    require!(!pool.paused, ErrorCode::PoolPaused);
    require!(user.owner == *owner, ErrorCode::Unauthorized);
    require!(vault.holder_balance() >= amount, ErrorCode::InsufficientBalance);

    let mut next_pool = pool.clone();
    let mut next_user = user.clone();
    update_rewards(&mut next_pool, Some(&mut next_user), now)?;

    next_user.balance_staked = next_user
        .balance_staked
        .checked_add(amount)
        .ok_or(ErrorCode::ArithmeticOverflow)?;
    next_user.last_stake_time = now;
    next_user.tier = classify(next_user.balance_staked, next_pool.no_tier);
    next_pool.total_staked = next_pool
        .total_staked
        .checked_add(amount)
        .ok_or(ErrorCode::ArithmeticOverflow)?;

    // Transfer tokens into the stake vault.
    vault.deposit(amount)?;

    *pool = next_pool;
    *user = next_user;

    msg!("Staked {}, balance {} tier {}", amount, user.balance_staked, user.tier);
    emit!(Staked {
        owner: *owner,
        amount,
        balance_staked: user.balance_staked,
        tier: user.tier,
    });
    Ok(())
}

pub fn unstake<V: TokenVault>(
    pool: &mut Pool,
    user: &mut User,
    owner: &Pubkey,
    amount: u64,
    now: u64,
    vault: &mut V,
) -> Result<()> {
    require!(amount > 0, ErrorCode::InvalidAmount);
    require!(!pool.paused, ErrorCode::PoolPaused);
    require!(user.owner == *owner, ErrorCode::Unauthorized);
    require!(user.balance_staked >= amount, ErrorCode::InsufficientBalance);
    require!(
        user.is_unlocked(now, pool.lock_period),
        ErrorCode::LockPeriodActive
    );
    require!(vault.vault_balance() >= amount, ErrorCode::InsufficientBalance);

    let mut next_pool = pool.clone();
    let mut next_user = user.clone();
    update_rewards(&mut next_pool, Some(&mut next_user), now)?;

    next_user.balance_staked = next_user
        .balance_staked
        .checked_sub(amount)
        .ok_or(ErrorCode::InsufficientBalance)?;
    next_user.tier = classify(next_user.balance_staked, next_pool.no_tier);
    next_pool.total_staked = next_pool
        .total_staked
        .checked_sub(amount)
        .ok_or(ErrorCode::ArithmeticOverflow)?;

    // Transfer tokens from the pool vault to user vault.
    vault.withdraw(amount)?;

    *pool = next_pool;
    *user = next_user;

    msg!("Unstaked {}, balance {} tier {}", amount, user.balance_staked, user.tier);
    emit!(Unstaked {
        owner: *owner,
        amount,
        balance_staked: user.balance_staked,
        tier: user.tier,
    });
    Ok(())
}

/// Pays out the whole tokens of the user's pending reward and returns the
/// amount paid. Fractional reward stays pending.
pub fn claim<V: TokenVault>(
    pool: &mut Pool,
    user: &mut User,
    owner: &Pubkey,
    now: u64,
    vault: &mut V,
) -> Result<u64> {
    require!(!pool.paused, ErrorCode::PoolPaused);
    require!(user.owner == *owner, ErrorCode::Unauthorized);

    let mut next_pool = pool.clone();
    let mut next_user = user.clone();
    update_rewards(&mut next_pool, Some(&mut next_user), now)?;

    let (reward_amount, dust) = split_pending(next_user.reward_per_token_pending)?;
    require!(
        vault.vault_balance() >= reward_amount,
        ErrorCode::InsufficientBalance
    );
    next_user.reward_per_token_pending = dust;

    if reward_amount > 0 {
        vault.withdraw(reward_amount)?;
    }

    *pool = next_pool;
    *user = next_user;

    msg!("Claimed {}", reward_amount);
    emit!(RewardClaimed {
        owner: *owner,
        amount: reward_amount,
    });
    Ok(reward_amount)
}

/// Starts a new reward epoch of `pool.reward_duration` seconds, rolling the
/// unspent part of the running epoch into the new rate.
pub fn fund<V: TokenVault>(
    pool: &mut Pool,
    funder: &Pubkey,
    amount: u64,
    now: u64,
    vault: &mut V,
) -> Result<()> {
    require!(pool.can_fund(funder), ErrorCode::Unauthorized);
    require!(amount > 0, ErrorCode::InvalidAmount);
    require!(vault.holder_balance() >= amount, ErrorCode::InsufficientBalance);

    let mut next_pool = pool.clone();
    update_rewards(&mut next_pool, None, now)?;

    next_pool.reward_rate = funded_rate(&next_pool, amount, now)?;
    next_pool.last_update_time = now;
    next_pool.reward_duration_end = now
        .checked_add(next_pool.reward_duration)
        .ok_or(ErrorCode::ArithmeticOverflow)?;

    // Transfer reward tokens into the reward vault.
    vault.deposit(amount)?;

    *pool = next_pool;

    msg!(
        "Funded {}, rate {} until {}",
        amount,
        pool.reward_rate,
        pool.reward_duration_end
    );
    emit!(PoolFunded {
        funder: *funder,
        amount,
        reward_rate: pool.reward_rate,
        reward_duration_end: pool.reward_duration_end,
    });
    Ok(())
}

pub fn add_funder(pool: &mut Pool, caller: &Pubkey, funder_to_add: Pubkey) -> Result<()> {
    require!(*caller == pool.authority, ErrorCode::Unauthorized);
    if funder_to_add == pool.authority || funder_to_add == Pubkey::default() {
        return err!(ErrorCode::FunderAlreadyAuthorized);
    }
    let funders = &mut pool.funders;
    if funders.iter().any(|x| *x == funder_to_add) {
        return err!(ErrorCode::FunderAlreadyAuthorized);
    }
    let default_pubkey = Pubkey::default();
    if let Some(idx) = funders.iter().position(|x| *x == default_pubkey) {
        funders[idx] = funder_to_add;
    } else {
        return err!(ErrorCode::CapacityExceeded);
    }

    msg!("Funder added: {}", funder_to_add);
    emit!(FunderAdded {
        funder: funder_to_add,
    });
    Ok(())
}

pub fn remove_funder(pool: &mut Pool, caller: &Pubkey, funder_to_remove: Pubkey) -> Result<()> {
    require!(*caller == pool.authority, ErrorCode::Unauthorized);
    if funder_to_remove == pool.authority {
        return err!(ErrorCode::CannotDeauthorizePoolAuthority);
    }
    if funder_to_remove == Pubkey::default() {
        return err!(ErrorCode::NotFound);
    }
    let funders = &mut pool.funders;
    if let Some(idx) = funders.iter().position(|x| *x == funder_to_remove) {
        funders[idx] = Pubkey::default();
    } else {
        return err!(ErrorCode::NotFound);
    }

    msg!("Funder removed: {}", funder_to_remove);
    emit!(FunderRemoved {
        funder: funder_to_remove,
    });
    Ok(())
}

pub fn set_paused(pool: &mut Pool, caller: &Pubkey, paused: bool) -> Result<()> {
    require!(*caller == pool.authority, ErrorCode::Unauthorized);
    pool.paused = paused;

    msg!("Pool {}", if paused { "paused" } else { "unpaused" });
    emit!(PauseChanged { paused });
    Ok(())
}
