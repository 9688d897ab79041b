use anchor_lang::prelude::*;

use super::claim_account::{load_claim, store_claim};
use crate::error::ReliefError;
use crate::events::ClaimFinalized;
use crate::state::{ClaimStatus, DaoState, CLAIM_SEED, DAO_SEED};

// ---------------------------------------------------------------------------
// Finalize Claim
// ---------------------------------------------------------------------------
// Anyone may settle a claim once its voting window has closed. An approved
// payout moves lamports straight off the program-owned DAO account, in the
// same transaction that flips the claim status.
// ---------------------------------------------------------------------------

#[derive(Accounts)]
#[instruction(claim_id: u64)]
pub struct FinalizeClaim<'info> {
    pub caller: Signer<'info>,

    #[account(
        mut,
        seeds = [DAO_SEED],
        bump = dao.bump
    )]
    pub dao: Account<'info, DaoState>,

    /// CHECK: address pinned by seeds, contents decoded by `load_claim`
    #[account(
        mut,
        seeds = [CLAIM_SEED, claim_id.to_le_bytes().as_ref()],
        bump
    )]
    pub claim: UncheckedAccount<'info>,

    /// Receives the payout when the claim is approved. Must be the claim's
    /// beneficiary.
    #[account(mut)]
    pub beneficiary: SystemAccount<'info>,
}

impl<'info> FinalizeClaim<'info> {
    pub fn finalize_claim(&mut self) -> Result<ClaimStatus> {
        let slot = Clock::get()?.slot;
        let mut claim = load_claim(&self.claim)?;
        require_keys_eq!(
            self.beneficiary.key(),
            claim.beneficiary,
            anchor_lang::error::ErrorCode::ConstraintAddress
        );

        let status = claim.finalize(&mut self.dao, slot)?;
        store_claim(&self.claim, &claim)?;

        let payout = if status == ClaimStatus::Approved {
            self.pay_beneficiary(claim.amount)?;
            claim.amount
        } else {
            0
        };

        emit!(ClaimFinalized {
            claim_id: claim.id,
            status,
            payout,
            fund_balance: self.dao.balance(),
        });
        Ok(status)
    }

    fn pay_beneficiary(&self, amount: u64) -> Result<()> {
        let dao_info = self.dao.to_account_info();
        let beneficiary_info = self.beneficiary.to_account_info();

        let dao_lamports = dao_info
            .lamports()
            .checked_sub(amount)
            .ok_or(ReliefError::InsufficientFunds)?;
        let beneficiary_lamports = beneficiary_info
            .lamports()
            .checked_add(amount)
            .ok_or(ReliefError::ArithmeticOverflow)?;

        **dao_info.try_borrow_mut_lamports()? = dao_lamports;
        **beneficiary_info.try_borrow_mut_lamports()? = beneficiary_lamports;
        Ok(())
    }
}
