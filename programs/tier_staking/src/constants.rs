/// Fixed-point scale of `reward_per_token_stored` and pending rewards.
pub const PRECISION: u128 = u64::MAX as u128;

/// Shortest accepted reward epoch.
#[cfg(not(feature = "local-testing"))]
pub const MIN_DURATION: u64 = 86400;
#[cfg(feature = "local-testing")]
pub const MIN_DURATION: u64 = 1;

/// Slots in `Pool::funders`.
pub const MAX_FUNDERS: usize = 5;

/// Ascending stake thresholds; a balance at or above `TIER_THRESHOLDS[i]`
/// reaches tier `i + 1`.
pub const TIER_THRESHOLDS: [u64; 2] = [2_000_000_000, 6_000_000_000];
