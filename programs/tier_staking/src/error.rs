use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("Caller is not allowed to perform this operation.")]
    Unauthorized,
    #[msg("Pool is paused.")]
    PoolPaused,
    #[msg("Need to wait until the lock period has passed to unstake.")]
    LockPeriodActive,
    #[msg("Insufficient balance for this operation.")]
    InsufficientBalance,
    #[msg("Account is already initialized.")]
    AlreadyInitialized,
    #[msg("Account or funder not found.")]
    NotFound,
    #[msg("Maximum funders already authorized.")]
    CapacityExceeded,
    #[msg("Amount must be greater than zero.")]
    InvalidAmount,
    #[msg("Arithmetic overflow.")]
    ArithmeticOverflow,
    #[msg("Duration cannot be shorter than the minimum reward duration.")]
    DurationTooShort,
    #[msg("Provided funder is already authorized to fund.")]
    FunderAlreadyAuthorized,
    #[msg("Cannot deauthorize the primary pool authority.")]
    CannotDeauthorizePoolAuthority,
    #[msg("Clock returned a negative timestamp.")]
    InvalidTimestamp,
}
