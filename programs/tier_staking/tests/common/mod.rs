#![allow(dead_code)]

use anchor_lang::error::Error;
use anchor_lang::prelude::*;
use std::collections::HashMap;
use tier_staking::account::{Pool, User};
use tier_staking::error::ErrorCode;
use tier_staking::processor::{self, PoolConfig};
use tier_staking::vault::TokenVault;

pub const DAY: u64 = 86_400;
pub const GENESIS: u64 = 1_650_000_000;

/// Token balances moved in memory, standing in for the SPL token program.
pub struct MemoryVault<'a> {
    pub custody: &'a mut u64,
    pub holder: &'a mut u64,
}

impl<'a> TokenVault for MemoryVault<'a> {
    fn vault_balance(&self) -> u64 {
        *self.custody
    }

    fn holder_balance(&self) -> u64 {
        *self.holder
    }

    fn deposit(&mut self, amount: u64) -> Result<()> {
        *self.holder = self
            .holder
            .checked_sub(amount)
            .ok_or(ErrorCode::InsufficientBalance)?;
        *self.custody = self
            .custody
            .checked_add(amount)
            .ok_or(ErrorCode::ArithmeticOverflow)?;
        Ok(())
    }

    fn withdraw(&mut self, amount: u64) -> Result<()> {
        *self.custody = self
            .custody
            .checked_sub(amount)
            .ok_or(ErrorCode::InsufficientBalance)?;
        *self.holder = self
            .holder
            .checked_add(amount)
            .ok_or(ErrorCode::ArithmeticOverflow)?;
        Ok(())
    }
}

#[derive(Clone, Debug, Default)]
pub struct Wallet {
    pub staking: u64,
    pub reward: u64,
}

/// One pool, its users and every token balance involved.
pub struct Harness {
    pub pool_key: Pubkey,
    pub authority: Pubkey,
    pub pool: Pool,
    pub users: HashMap<Pubkey, User>,
    pub wallets: HashMap<Pubkey, Wallet>,
    pub staking_vault: u64,
    pub reward_vault: u64,
}

impl Harness {
    pub fn new(reward_duration: u64, lock_period: u64, no_tier: bool) -> Self {
        let authority = Pubkey::new_unique();
        let mut pool = Pool::default();
        let config = PoolConfig {
            nonce: 254,
            staking_mint: Pubkey::new_unique(),
            staking_vault: Pubkey::new_unique(),
            reward_mint: Pubkey::new_unique(),
            reward_vault: Pubkey::new_unique(),
            reward_duration,
            lock_period,
            no_tier,
        };
        processor::initialize_pool(&mut pool, authority, config).unwrap();

        Harness {
            pool_key: Pubkey::new_unique(),
            authority,
            pool,
            users: HashMap::new(),
            wallets: HashMap::new(),
            staking_vault: 0,
            reward_vault: 0,
        }
    }

    /// New owner with a created user account and `staking` tokens to stake.
    pub fn staker(&mut self, staking: u64) -> Pubkey {
        let owner = Pubkey::new_unique();
        self.mint(&owner, staking, 0);
        self.create_user(&owner).unwrap();
        owner
    }

    pub fn mint(&mut self, owner: &Pubkey, staking: u64, reward: u64) {
        let wallet = self.wallets.entry(*owner).or_default();
        wallet.staking += staking;
        wallet.reward += reward;
    }

    pub fn wallet(&self, owner: &Pubkey) -> Wallet {
        self.wallets.get(owner).cloned().unwrap_or_default()
    }

    pub fn user(&self, owner: &Pubkey) -> &User {
        &self.users[owner]
    }

    pub fn create_user(&mut self, owner: &Pubkey) -> Result<()> {
        let user = self.users.entry(*owner).or_default();
        processor::create_user(&mut self.pool, user, self.pool_key, *owner, 255)
    }

    pub fn stake(&mut self, owner: &Pubkey, amount: u64, now: u64) -> Result<()> {
        let user = self.users.get_mut(owner).ok_or(ErrorCode::NotFound)?;
        let wallet = self.wallets.entry(*owner).or_default();
        let mut vault = MemoryVault {
            custody: &mut self.staking_vault,
            holder: &mut wallet.staking,
        };
        processor::stake(&mut self.pool, user, owner, amount, now, &mut vault)
    }

    pub fn unstake(&mut self, owner: &Pubkey, amount: u64, now: u64) -> Result<()> {
        let user = self.users.get_mut(owner).ok_or(ErrorCode::NotFound)?;
        let wallet = self.wallets.entry(*owner).or_default();
        let mut vault = MemoryVault {
            custody: &mut self.staking_vault,
            holder: &mut wallet.staking,
        };
        processor::unstake(&mut self.pool, user, owner, amount, now, &mut vault)
    }

    pub fn claim(&mut self, owner: &Pubkey, now: u64) -> Result<u64> {
        let user = self.users.get_mut(owner).ok_or(ErrorCode::NotFound)?;
        let wallet = self.wallets.entry(*owner).or_default();
        let mut vault = MemoryVault {
            custody: &mut self.reward_vault,
            holder: &mut wallet.reward,
        };
        processor::claim(&mut self.pool, user, owner, now, &mut vault)
    }

    pub fn fund_as(&mut self, funder: &Pubkey, amount: u64, now: u64) -> Result<()> {
        let wallet = self.wallets.entry(*funder).or_default();
        let mut vault = MemoryVault {
            custody: &mut self.reward_vault,
            holder: &mut wallet.reward,
        };
        processor::fund(&mut self.pool, funder, amount, now, &mut vault)
    }

    /// Mints `amount` reward tokens to the authority and funds with them.
    pub fn fund(&mut self, amount: u64, now: u64) -> Result<()> {
        let authority = self.authority;
        self.mint(&authority, 0, amount);
        self.fund_as(&authority, amount, now)
    }
}

pub fn assert_error<T: std::fmt::Debug>(result: Result<T>, expected: ErrorCode) {
    match result {
        Err(Error::AnchorError(ref e)) => {
            assert_eq!(e.error_code_number, u32::from(expected), "{}", e.error_msg)
        }
        other => panic!("expected {:?}, got {:?}", expected, other),
    }
}
