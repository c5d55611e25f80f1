use anchor_lang::prelude::*;

#[event]
pub struct PoolInitialized {
    pub authority: Pubkey,
    pub reward_duration: u64,
    pub lock_period: u64,
    pub no_tier: bool,
}

#[event]
pub struct UserCreated {
    pub pool: Pubkey,
    pub owner: Pubkey,
    pub user_stake_count: u32,
}

#[event]
pub struct Staked {
    pub owner: Pubkey,
    pub amount: u64,
    pub balance_staked: u64,
    pub tier: u8,
}

#[event]
pub struct Unstaked {
    pub owner: Pubkey,
    pub amount: u64,
    pub balance_staked: u64,
    pub tier: u8,
}

#[event]
pub struct RewardClaimed {
    pub owner: Pubkey,
    pub amount: u64,
}

#[event]
pub struct PoolFunded {
    pub funder: Pubkey,
    pub amount: u64,
    pub reward_rate: u128,
    pub reward_duration_end: u64,
}

#[event]
pub struct FunderAdded {
    pub funder: Pubkey,
}

#[event]
pub struct FunderRemoved {
    pub funder: Pubkey,
}

#[event]
pub struct PauseChanged {
    pub paused: bool,
}
