use anchor_lang::prelude::*;

use crate::events::ClaimSubmitted;
use crate::state::{Claim, DaoState, CLAIM_SEED, DAO_SEED};

// ---------------------------------------------------------------------------
// Submit Claim
// ---------------------------------------------------------------------------
// The claim PDA is keyed by the id the DAO will allocate next, so clients
// derive it from `dao.claim_count + 1`. The submitter pays the claim's rent
// and becomes its beneficiary.
// ---------------------------------------------------------------------------

#[derive(Accounts)]
pub struct SubmitClaim<'info> {
    #[account(mut)]
    pub beneficiary: Signer<'info>,

    #[account(
        mut,
        seeds = [DAO_SEED],
        bump = dao.bump
    )]
    pub dao: Account<'info, DaoState>,

    #[account(
        init,
        payer = beneficiary,
        space = 8 + Claim::INIT_SPACE,
        seeds = [CLAIM_SEED, dao.pending_claim_id().to_le_bytes().as_ref()],
        bump
    )]
    pub claim: Account<'info, Claim>,

    pub system_program: Program<'info, System>,
}

impl<'info> SubmitClaim<'info> {
    pub fn submit_claim(
        &mut self,
        bumps: &SubmitClaimBumps,
        amount: u64,
        description: String,
        category: String,
    ) -> Result<u64> {
        let slot = Clock::get()?.slot;
        let claim = self.dao.open_claim(
            self.beneficiary.key(),
            amount,
            description,
            category,
            slot,
        )?;

        let claim_id = claim.id;
        let voting_deadline = claim.voting_deadline;
        self.claim.set_inner(Claim {
            bump: bumps.claim,
            ..claim
        });

        emit!(ClaimSubmitted {
            claim_id,
            beneficiary: self.beneficiary.key(),
            amount,
            voting_deadline,
        });
        msg!(
            "Claim {} submitted by {} for {} (voting closes after slot {})",
            claim_id,
            self.beneficiary.key(),
            amount,
            voting_deadline
        );
        Ok(claim_id)
    }
}
