pub mod account;
pub mod constants;
pub mod context;
pub mod error;
pub mod events;
pub mod processor;
pub mod reward;
pub mod utils;
pub mod vault;

use anchor_lang::prelude::*;
use context::*;
use error::ErrorCode;
use processor::PoolConfig;
use utils::now_ts;
use vault::SplVault;

declare_id!("8nr1qH1rCjMNkquELnBhrPkqf47kyb3tEvmuAYox2HeT");

#[program]
pub mod tier_staking {
    use super::*;

    pub fn initialize_pool(
        ctx: Context<InitializePool>,
        pool_nonce: u8,
        reward_duration: u64,
        lock_period: u64,
        no_tier: bool,
    ) -> Result<()> {
        let config = PoolConfig {
            nonce: pool_nonce,
            staking_mint: ctx.accounts.staking_mint.key(),
            staking_vault: ctx.accounts.staking_vault.key(),
            reward_mint: ctx.accounts.reward_mint.key(),
            reward_vault: ctx.accounts.reward_vault.key(),
            reward_duration,
            lock_period,
            no_tier,
        };
        processor::initialize_pool(&mut ctx.accounts.pool, ctx.accounts.authority.key(), config)
    }

    pub fn create_user(ctx: Context<CreateUser>) -> Result<()> {
        let nonce = *ctx.bumps.get("user").ok_or(ErrorCode::NotFound)?;
        let pool_key = ctx.accounts.pool.key();
        let owner = ctx.accounts.owner.key();
        processor::create_user(
            &mut ctx.accounts.pool,
            &mut ctx.accounts.user,
            pool_key,
            owner,
            nonce,
        )
    }

    pub fn pause(ctx: Context<Pause>) -> Result<()> {
        let authority = ctx.accounts.authority.key();
        processor::set_paused(&mut ctx.accounts.pool, &authority, true)
    }

    pub fn unpause(ctx: Context<Pause>) -> Result<()> {
        let authority = ctx.accounts.authority.key();
        processor::set_paused(&mut ctx.accounts.pool, &authority, false)
    }

    pub fn stake(ctx: Context<Stake>, amount: u64) -> Result<()> {
        let now = now_ts()?;
        let owner = ctx.accounts.owner.key();
        let accounts = &mut *ctx.accounts;

        let mut vault = SplVault {
            token_program: accounts.token_program.to_account_info(),
            vault: &accounts.staking_vault,
            holder: &accounts.stake_from_account,
            holder_authority: accounts.owner.to_account_info(),
            pool_signer: accounts.pool_signer.to_account_info(),
            signer_seeds: &[],
        };
        processor::stake(
            &mut accounts.pool,
            &mut accounts.user,
            &owner,
            amount,
            now,
            &mut vault,
        )
    }

    pub fn unstake(ctx: Context<Stake>, spt_amount: u64) -> Result<()> {
        let now = now_ts()?;
        let owner = ctx.accounts.owner.key();
        let pool_key = ctx.accounts.pool.key();
        let nonce = [ctx.accounts.pool.nonce];
        let seeds: &[&[u8]] = &[pool_key.as_ref(), &nonce];
        let pool_signer = &[seeds];
        let accounts = &mut *ctx.accounts;

        let mut vault = SplVault {
            token_program: accounts.token_program.to_account_info(),
            vault: &accounts.staking_vault,
            holder: &accounts.stake_from_account,
            holder_authority: accounts.owner.to_account_info(),
            pool_signer: accounts.pool_signer.to_account_info(),
            signer_seeds: pool_signer,
        };
        processor::unstake(
            &mut accounts.pool,
            &mut accounts.user,
            &owner,
            spt_amount,
            now,
            &mut vault,
        )
    }

    pub fn add_funder(ctx: Context<FunderChange>, funder: Pubkey) -> Result<()> {
        let authority = ctx.accounts.authority.key();
        processor::add_funder(&mut ctx.accounts.pool, &authority, funder)
    }

    pub fn remove_funder(ctx: Context<FunderChange>, funder: Pubkey) -> Result<()> {
        let authority = ctx.accounts.authority.key();
        processor::remove_funder(&mut ctx.accounts.pool, &authority, funder)
    }

    pub fn fund(ctx: Context<Fund>, amount: u64) -> Result<()> {
        let now = now_ts()?;
        let funder = ctx.accounts.funder.key();
        let accounts = &mut *ctx.accounts;

        let mut vault = SplVault {
            token_program: accounts.token_program.to_account_info(),
            vault: &accounts.reward_vault,
            holder: &accounts.from,
            holder_authority: accounts.funder.to_account_info(),
            pool_signer: accounts.pool_signer.to_account_info(),
            signer_seeds: &[],
        };
        processor::fund(&mut accounts.pool, &funder, amount, now, &mut vault)
    }

    pub fn claim(ctx: Context<ClaimReward>) -> Result<()> {
        let now = now_ts()?;
        let owner = ctx.accounts.owner.key();
        let pool_key = ctx.accounts.pool.key();
        let nonce = [ctx.accounts.pool.nonce];
        let seeds: &[&[u8]] = &[pool_key.as_ref(), &nonce];
        let pool_signer = &[seeds];
        let accounts = &mut *ctx.accounts;

        let mut vault = SplVault {
            token_program: accounts.token_program.to_account_info(),
            vault: &accounts.reward_vault,
            holder: &accounts.reward_account,
            holder_authority: accounts.owner.to_account_info(),
            pool_signer: accounts.pool_signer.to_account_info(),
            signer_seeds: pool_signer,
        };
        processor::claim(&mut accounts.pool, &mut accounts.user, &owner, now, &mut vault)?;
        Ok(())
    }
}
