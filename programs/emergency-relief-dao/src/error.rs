//! Error definitions

use anchor_lang::prelude::*;

#[error_code]
pub enum ReliefError {
    #[msg("Amount must be greater than zero")]
    InvalidAmount,
    #[msg("Description or category is empty, too long, or not ASCII")]
    InvalidInput,
    #[msg("Claim does not exist")]
    ClaimNotFound,
    #[msg("Claim has already been finalized")]
    ClaimNotPending,
    #[msg("Voting window for this claim has closed")]
    VotingClosed,
    #[msg("Voting window for this claim is still open")]
    VotingStillOpen,
    #[msg("Caller has already voted on this claim")]
    AlreadyVoted,
    #[msg("Fund balance is too low for this payout")]
    InsufficientFunds,
    #[msg("Unauthorized - not the DAO owner")]
    NotAuthorized,
    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,
}

#[cfg(test)]
pub(crate) fn assert_relief_err<T: std::fmt::Debug>(result: Result<T>, expected: ReliefError) {
    assert_eq!(
        result.unwrap_err(),
        anchor_lang::error::Error::from(expected)
    );
}
