//! State definitions for the relief fund, its claims, and cast votes

use anchor_lang::prelude::*;

/// Blocks a claim stays open for voting after submission (about one day)
pub const VOTING_PERIOD: u64 = 144;
/// Minimum number of votes before a claim can be approved
pub const QUORUM: u64 = 3;
/// Maximum description length in bytes
pub const MAX_DESCRIPTION_LEN: usize = 256;
/// Maximum category length in bytes
pub const MAX_CATEGORY_LEN: usize = 32;

pub const DAO_SEED: &[u8] = b"dao";
pub const CLAIM_SEED: &[u8] = b"claim";
pub const VOTE_SEED: &[u8] = b"vote";

/// Governance knobs fixed when the DAO is created
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, InitSpace)]
pub struct GovernanceParams {
    /// Number of blocks after submission during which votes are accepted
    pub voting_period: u64,
    /// Minimum yes + no votes for a claim to be decided rather than expire
    pub quorum: u64,
}

impl Default for GovernanceParams {
    fn default() -> Self {
        Self {
            voting_period: VOTING_PERIOD,
            quorum: QUORUM,
        }
    }
}

/// Singleton DAO account: owner, pooled fund, and claim id allocator.
///
/// On chain the pooled lamports sit on this account on top of its rent
/// reserve; `fund_balance` tracks exactly that surplus.
#[account]
#[derive(InitSpace, Debug, PartialEq, Eq)]
pub struct DaoState {
    /// Principal allowed to deposit and to hand over ownership
    pub owner: Pubkey,
    /// Pooled relief funds available for payouts
    pub fund_balance: u64,
    /// Id of the most recently submitted claim (0 before the first)
    pub claim_count: u64,
    pub params: GovernanceParams,
    /// Bump seed for the DAO PDA
    pub bump: u8,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, InitSpace)]
pub enum ClaimStatus {
    Pending,
    Approved,
    Rejected,
    Expired,
}

impl ClaimStatus {
    pub fn is_terminal(self) -> bool {
        self != ClaimStatus::Pending
    }
}

/// A reimbursement request against the pooled fund
#[account]
#[derive(InitSpace, Debug, PartialEq, Eq)]
pub struct Claim {
    /// Sequential id, starting at 1
    pub id: u64,
    /// Submitter, and recipient of the payout on approval
    pub beneficiary: Pubkey,
    /// Requested amount in the smallest currency unit
    pub amount: u64,
    #[max_len(MAX_DESCRIPTION_LEN)]
    pub description: String,
    #[max_len(MAX_CATEGORY_LEN)]
    pub category: String,
    pub status: ClaimStatus,
    pub yes_votes: u64,
    pub no_votes: u64,
    /// Block height at submission
    pub created_at: u64,
    /// Last block height at which votes are accepted
    pub voting_deadline: u64,
    /// Bump seed for the claim PDA
    pub bump: u8,
}

/// Marker that `voter` has voted on `claim_id`.
///
/// One PDA per (claim, voter) pair, so a second vote finds this account
/// already populated.
#[account]
#[derive(InitSpace, Debug, PartialEq, Eq)]
pub struct VoteRecord {
    pub claim_id: u64,
    pub voter: Pubkey,
    pub approve: bool,
    pub bump: u8,
}

impl VoteRecord {
    /// Freshly allocated records are zeroed, so a default voter means unused.
    pub fn is_cast(&self) -> bool {
        self.voter != Pubkey::default()
    }
}
