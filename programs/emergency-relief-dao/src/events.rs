use anchor_lang::prelude::*;

use crate::state::ClaimStatus;

#[event]
pub struct ClaimSubmitted {
    pub claim_id: u64,
    pub beneficiary: Pubkey,
    pub amount: u64,
    pub voting_deadline: u64,
}

#[event]
pub struct VoteCast {
    pub claim_id: u64,
    pub voter: Pubkey,
    pub approve: bool,
    pub yes_votes: u64,
    pub no_votes: u64,
}

#[event]
pub struct ClaimFinalized {
    pub claim_id: u64,
    pub status: ClaimStatus,
    pub payout: u64,
    pub fund_balance: u64,
}

#[event]
pub struct FundsDeposited {
    pub depositor: Pubkey,
    pub amount: u64,
    pub fund_balance: u64,
}

#[event]
pub struct OwnerUpdated {
    pub previous_owner: Pubkey,
    pub new_owner: Pubkey,
}
