use anchor_lang::prelude::*;

use super::claim_account::{load_claim, store_claim};
use crate::events::VoteCast;
use crate::state::{VoteRecord, CLAIM_SEED, VOTE_SEED};

// ---------------------------------------------------------------------------
// Vote On Claim
// ---------------------------------------------------------------------------
// One VoteRecord PDA per (claim, voter). It is created on the first vote;
// on any later attempt it already carries the voter's key and the vote is
// refused with AlreadyVoted instead of a generic "account in use" failure.
// ---------------------------------------------------------------------------

#[derive(Accounts)]
#[instruction(claim_id: u64)]
pub struct VoteOnClaim<'info> {
    #[account(mut)]
    pub voter: Signer<'info>,

    /// CHECK: address pinned by seeds, contents decoded by `load_claim`
    #[account(
        mut,
        seeds = [CLAIM_SEED, claim_id.to_le_bytes().as_ref()],
        bump
    )]
    pub claim: UncheckedAccount<'info>,

    #[account(
        init_if_needed,
        payer = voter,
        space = 8 + VoteRecord::INIT_SPACE,
        seeds = [VOTE_SEED, claim_id.to_le_bytes().as_ref(), voter.key().as_ref()],
        bump
    )]
    pub vote_record: Account<'info, VoteRecord>,

    pub system_program: Program<'info, System>,
}

impl<'info> VoteOnClaim<'info> {
    pub fn vote_on_claim(&mut self, bumps: &VoteOnClaimBumps, approve: bool) -> Result<()> {
        let slot = Clock::get()?.slot;
        let mut claim = load_claim(&self.claim)?;
        claim.record_vote(approve, slot, self.vote_record.is_cast())?;
        store_claim(&self.claim, &claim)?;

        self.vote_record.set_inner(VoteRecord {
            claim_id: claim.id,
            voter: self.voter.key(),
            approve,
            bump: bumps.vote_record,
        });

        emit!(VoteCast {
            claim_id: claim.id,
            voter: self.voter.key(),
            approve,
            yes_votes: claim.yes_votes,
            no_votes: claim.no_votes,
        });
        msg!(
            "Vote recorded on claim {}: {}",
            claim.id,
            if approve { "YES" } else { "NO" }
        );
        Ok(())
    }
}
