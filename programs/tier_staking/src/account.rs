use crate::constants::MAX_FUNDERS;
use anchor_lang::prelude::*;

#[account]
#[derive(Default)]
pub struct Pool {
    /// Priviledged account.
    pub authority: Pubkey,
    /// Nonce to derive the program-derived address owning the vaults.
    pub nonce: u8,
    /// Paused state of the program
    pub paused: bool,
    /// Mint of the token that can be staked.
    pub staking_mint: Pubkey,
    /// Vault to store staked tokens.
    pub staking_vault: Pubkey,
    /// Mint of the reward token.
    pub reward_mint: Pubkey,
    /// Vault to store reward tokens.
    pub reward_vault: Pubkey,
    /// The period which rewards are linearly distributed.
    pub reward_duration: u64,
    /// The timestamp at which the current reward period ends.
    pub reward_duration_end: u64,
    /// Minimum time between a user's last stake and an unstake.
    pub lock_period: u64,
    /// The last time reward states were updated.
    pub last_update_time: u64,
    /// Reward tokens emitted per second across all stakers, scaled by
    /// `PRECISION`.
    pub reward_rate: u128,
    /// Last calculated reward per pool token, scaled by `PRECISION`.
    pub reward_per_token_stored: u128,
    /// Users created against this pool
    pub user_stake_count: u32,
    /// Total staked amount
    pub total_staked: u64,
    /// Calculate tier or not
    pub no_tier: bool,
    /// authorized funders, `Pubkey::default()` marks a free slot
    pub funders: [Pubkey; MAX_FUNDERS],
}

impl Pool {
    pub const SIZE: usize = 8 + 32 + 1 + 1 + 32 * 4 + 8 * 4 + 16 * 2 + 4 + 8 + 1 + 32 * MAX_FUNDERS;

    pub fn is_initialized(&self) -> bool {
        self.authority != Pubkey::default()
    }

    pub fn is_funder(&self, key: &Pubkey) -> bool {
        *key != Pubkey::default() && self.funders.iter().any(|x| x == key)
    }

    /// The authority or any listed funder.
    pub fn can_fund(&self, key: &Pubkey) -> bool {
        *key == self.authority || self.is_funder(key)
    }

    pub fn funder_count(&self) -> usize {
        self.funders
            .iter()
            .filter(|x| **x != Pubkey::default())
            .count()
    }
}

#[account]
#[derive(Default)]
pub struct User {
    /// Pool the this user belongs to.
    pub pool: Pubkey,
    /// The owner of this account.
    pub owner: Pubkey,
    /// Pool reward per token at the last settlement.
    pub reward_per_token_complete: u128,
    /// Reward pending claim, scaled by `PRECISION`.
    pub reward_per_token_pending: u128,
    /// The amount staked.
    pub balance_staked: u64,
    /// Time of the most recent stake.
    pub last_stake_time: u64,
    /// User's tier
    pub tier: u8,
    /// Signer nonce.
    pub nonce: u8,
}

impl User {
    pub const SIZE: usize = 8 + 32 + 32 + 16 + 16 + 8 + 8 + 1 + 1;

    pub fn is_initialized(&self) -> bool {
        self.owner != Pubkey::default()
    }

    pub fn is_unlocked(&self, now: u64, lock_period: u64) -> bool {
        now.saturating_sub(self.last_stake_time) >= lock_period
    }
}
