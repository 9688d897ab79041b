use anchor_lang::prelude::*;

use super::claim_account::load_claim;
use crate::state::{Claim, DaoState, CLAIM_SEED, DAO_SEED};

// ---------------------------------------------------------------------------
// Read-only views
// ---------------------------------------------------------------------------
// Served through return data so callers can simulate instead of decoding
// account bytes themselves.
// ---------------------------------------------------------------------------

#[derive(Accounts)]
#[instruction(claim_id: u64)]
pub struct GetClaim<'info> {
    /// CHECK: address pinned by seeds, contents decoded by `load_claim`
    #[account(
        seeds = [CLAIM_SEED, claim_id.to_le_bytes().as_ref()],
        bump
    )]
    pub claim: UncheckedAccount<'info>,
}

impl<'info> GetClaim<'info> {
    pub fn get_claim(&self) -> Result<Claim> {
        load_claim(&self.claim)
    }
}

#[derive(Accounts)]
pub struct GetFundBalance<'info> {
    #[account(
        seeds = [DAO_SEED],
        bump = dao.bump
    )]
    pub dao: Account<'info, DaoState>,
}

impl<'info> GetFundBalance<'info> {
    pub fn get_fund_balance(&self) -> Result<u64> {
        Ok(self.dao.balance())
    }
}
