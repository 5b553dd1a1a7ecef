#![no_std]

pub static ERROR_INVALID_ASSET: &[u8] = b"Invalid asset.";

pub static ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO: &[u8] = b"Amount must be greater than zero.";

pub static ERROR_AMOUNT_BELOW_MIN_DEPOSIT: &[u8] = b"Amount is below the minimum deposit.";

pub static ERROR_ZERO_SHARES_MINTED: &[u8] = b"Deposit is too small to mint any share.";

pub static ERROR_INSUFFICIENT_SHARES: &[u8] = b"Not enough shares.";

pub static ERROR_EMPTY_SHARE_SUPPLY: &[u8] = b"Share supply is empty.";

pub static ERROR_SELF_TRANSFER: &[u8] = b"Cannot transfer shares to yourself.";

pub static ERROR_INSUFFICIENT_POOL_BALANCE: &[u8] =
    b"Pool balance is lower than the claimed rewards.";

pub static ERROR_DUPLICATE_POSITION: &[u8] = b"Debtor already has an open position.";

pub static ERROR_POSITION_NOT_FOUND: &[u8] = b"No open position for this debtor.";

pub static ERROR_BORROW_CAP_EXCEEDED: &[u8] = b"Borrow cap exceeded.";

pub static ERROR_INSUFFICIENT_PAYMENT: &[u8] = b"Payment does not cover the upfront interest.";

pub static ERROR_OUTSTANDING_SLASH: &[u8] = b"Position has an outstanding slash, top up first.";

pub static ERROR_CAP_DECREASED: &[u8] = b"Slashable caps cannot decrease.";

pub static ERROR_INSUFFICIENT_LIQUIDITY: &[u8] = b"Not enough liquidity in the pool.";

pub static ERROR_SLASH_CAP_EXCEEDED: &[u8] = b"Slash amount exceeds the position cap.";

pub static ERROR_TERMINATION_NOT_ALLOWED: &[u8] = b"Position cannot be terminated yet.";

pub static ERROR_EXCEEDS_SLASHED: &[u8] = b"Amount exceeds the slashed amount.";

pub static ERROR_NOT_REPORTER: &[u8] = b"Caller is not an authorized reporter.";

pub static ERROR_REPORTER_ALREADY_ADDED: &[u8] = b"Reporter already added.";

pub static ERROR_REPORTER_NOT_FOUND: &[u8] = b"Reporter not found.";

pub static ERROR_INVALID_RATE_MODEL: &[u8] = b"Invalid rate model parameters.";

pub static ERROR_INVALID_RATIO: &[u8] = b"Ratio must be between zero and one.";

pub static ERROR_INVALID_BORROW_DURATION: &[u8] =
    b"Borrow duration must be greater than zero and at most ten years.";

pub static ERROR_ADDRESS_IS_ZERO: &[u8] = b"Address is zero.";

pub static ERROR_REENTRANT_CALL: &[u8] = b"Another pool operation is in progress.";

pub static ERROR_NOTHING_TO_CLAIM: &[u8] = b"Nothing to claim.";
