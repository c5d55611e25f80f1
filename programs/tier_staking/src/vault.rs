use anchor_lang::prelude::*;
use anchor_spl::token::{self, TokenAccount};

/// A custody account paired with the external holder account on the other
/// side of a transfer.
pub trait TokenVault {
    /// Tokens held in custody.
    fn vault_balance(&self) -> u64;
    /// Tokens held by the external account.
    fn holder_balance(&self) -> u64;
    /// Moves `amount` from the holder into custody.
    fn deposit(&mut self, amount: u64) -> Result<()>;
    /// Moves `amount` from custody back to the holder.
    fn withdraw(&mut self, amount: u64) -> Result<()>;
}

/// SPL token vault. Deposits are signed by the holder's owner, withdrawals by
/// the pool signer.
pub struct SplVault<'a, 'info> {
    pub token_program: AccountInfo<'info>,
    pub vault: &'a Account<'info, TokenAccount>,
    pub holder: &'a Account<'info, TokenAccount>,
    pub holder_authority: AccountInfo<'info>,
    pub pool_signer: AccountInfo<'info>,
    pub signer_seeds: &'a [&'a [&'a [u8]]],
}

impl<'a, 'info> TokenVault for SplVault<'a, 'info> {
    fn vault_balance(&self) -> u64 {
        self.vault.amount
    }

    fn holder_balance(&self) -> u64 {
        self.holder.amount
    }

    fn deposit(&mut self, amount: u64) -> Result<()> {
        let cpi_ctx = CpiContext::new(
            self.token_program.clone(),
            token::Transfer {
                from: self.holder.to_account_info(),
                to: self.vault.to_account_info(),
                authority: self.holder_authority.clone(),
            },
        );
        token::transfer(cpi_ctx, amount)
    }

    fn withdraw(&mut self, amount: u64) -> Result<()> {
        let cpi_ctx = CpiContext::new_with_signer(
            self.token_program.clone(),
            token::Transfer {
                from: self.vault.to_account_info(),
                to: self.holder.to_account_info(),
                authority: self.pool_signer.clone(),
            },
            self.signer_seeds,
        );
        token::transfer(cpi_ctx, amount)
    }
}
