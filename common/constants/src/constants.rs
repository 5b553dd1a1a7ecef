#![no_std]

pub const SECONDS_PER_YEAR: u64 = 31_556_926;

pub const RAY: u128 = 1_000_000_000_000_000_000_000_000_000;
pub const RAY_PRECISION: usize = 27;

/// Lower bound (raw asset units) used as the share-price denominator when the
/// pool has been drained close to zero assumed liquidity.
pub const ASSUMED_LIQUIDITY_FLOOR: u64 = 1_000_000_000_000;

/// Longest allowed position lifetime.
pub const MAX_BORROW_DURATION: u64 = SECONDS_PER_YEAR * 10;

/// Queue slots start at 1, an empty debtor slot mapper means "no position".
pub const FIRST_QUEUE_SLOT: u64 = 1;
