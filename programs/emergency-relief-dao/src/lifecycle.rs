//! Claim lifecycle rules: submission, voting, and finalization
//!
//! These are the transitions behind both the on-chain instructions and the
//! host-side [`crate::engine::ReliefEngine`]. Every function performs all of
//! its checks before the first write, so a returned error never leaves a
//! claim or the fund half-updated.

use anchor_lang::prelude::*;

use crate::error::ReliefError;
use crate::state::{Claim, ClaimStatus, DaoState, MAX_CATEGORY_LEN, MAX_DESCRIPTION_LEN};

fn valid_text(text: &str, max_len: usize) -> bool {
    !text.is_empty() && text.len() <= max_len && text.is_ascii()
}

impl DaoState {
    /// Id the next successful submission will receive.
    pub fn pending_claim_id(&self) -> u64 {
        self.claim_count.saturating_add(1)
    }

    /// Validates a submission and allocates its id.
    ///
    /// The id counter only advances once every check has passed, so a
    /// rejected submission never burns an id.
    pub fn open_claim(
        &mut self,
        beneficiary: Pubkey,
        amount: u64,
        description: String,
        category: String,
        block_height: u64,
    ) -> Result<Claim> {
        require!(amount > 0, ReliefError::InvalidAmount);
        require!(
            valid_text(&description, MAX_DESCRIPTION_LEN),
            ReliefError::InvalidInput
        );
        require!(
            valid_text(&category, MAX_CATEGORY_LEN),
            ReliefError::InvalidInput
        );

        let id = self
            .claim_count
            .checked_add(1)
            .ok_or(ReliefError::ArithmeticOverflow)?;
        let voting_deadline = block_height
            .checked_add(self.params.voting_period)
            .ok_or(ReliefError::ArithmeticOverflow)?;

        self.claim_count = id;

        Ok(Claim {
            id,
            beneficiary,
            amount,
            description,
            category,
            status: ClaimStatus::Pending,
            yes_votes: 0,
            no_votes: 0,
            created_at: block_height,
            voting_deadline,
            bump: 0,
        })
    }
}

impl Claim {
    pub fn is_pending(&self) -> bool {
        self.status == ClaimStatus::Pending
    }

    /// Votes are accepted up to and including the deadline block.
    pub fn is_voting_open(&self, block_height: u64) -> bool {
        block_height <= self.voting_deadline
    }

    pub fn total_votes(&self) -> u64 {
        self.yes_votes.saturating_add(self.no_votes)
    }

    /// Counts one vote. `already_voted` comes from whichever vote tracker
    /// the caller keeps (a hash set on the host, a vote PDA on chain).
    pub fn record_vote(
        &mut self,
        approve: bool,
        block_height: u64,
        already_voted: bool,
    ) -> Result<()> {
        require!(self.is_pending(), ReliefError::ClaimNotPending);
        require!(
            self.is_voting_open(block_height),
            ReliefError::VotingClosed
        );
        require!(!already_voted, ReliefError::AlreadyVoted);

        if approve {
            self.yes_votes = self
                .yes_votes
                .checked_add(1)
                .ok_or(ReliefError::ArithmeticOverflow)?;
        } else {
            self.no_votes = self
                .no_votes
                .checked_add(1)
                .ok_or(ReliefError::ArithmeticOverflow)?;
        }
        Ok(())
    }

    /// Terminal status this claim would settle into against `balance`.
    ///
    /// Quorum is checked first: too few votes means the claim lapsed as
    /// `Expired`. A decided claim is `Approved` only with a strict yes
    /// majority and enough funds to pay it in full, otherwise `Rejected`.
    pub fn outcome(&self, quorum: u64, balance: u64) -> ClaimStatus {
        if self.total_votes() < quorum {
            ClaimStatus::Expired
        } else if self.yes_votes <= self.no_votes || balance < self.amount {
            ClaimStatus::Rejected
        } else {
            ClaimStatus::Approved
        }
    }

    /// Settles the claim once its voting window has closed, debiting the
    /// fund when it is approved.
    pub fn finalize(&mut self, dao: &mut DaoState, block_height: u64) -> Result<ClaimStatus> {
        require!(self.is_pending(), ReliefError::ClaimNotPending);
        require!(
            !self.is_voting_open(block_height),
            ReliefError::VotingStillOpen
        );

        let status = self.outcome(dao.params.quorum, dao.balance());
        if status == ClaimStatus::Approved {
            dao.withdraw(self.amount)?;
        }
        self.status = status;

        match status {
            ClaimStatus::Approved => msg!(
                "Claim {} APPROVED: paid {} ({} yes / {} no)",
                self.id,
                self.amount,
                self.yes_votes,
                self.no_votes
            ),
            ClaimStatus::Expired => msg!(
                "Claim {} EXPIRED (quorum not met: {} < {})",
                self.id,
                self.total_votes(),
                dao.params.quorum
            ),
            _ => msg!(
                "Claim {} REJECTED ({} yes / {} no, fund balance {})",
                self.id,
                self.yes_votes,
                self.no_votes,
                dao.balance()
            ),
        }
        Ok(status)
    }
}
