//! Emergency Relief DAO - Anchor Program
//!
//! Members submit reimbursement claims against a pooled relief fund. Other
//! members vote yes/no during a fixed window of slots. After the window
//! closes, anyone may finalize a claim:
//!
//! - quorum, a strict yes majority, and enough funds: APPROVED and paid out
//! - quorum but a tie, a losing vote, or too few funds: REJECTED
//! - below quorum: EXPIRED
//!
//! The fund is topped up by the DAO owner, who may hand ownership over.
//!
//! The rules live in plain methods on the account types (`access`, `fund`,
//! `lifecycle`) so the off-chain [`engine::ReliefEngine`] runs exactly the
//! same state machine.

#![allow(unexpected_cfgs)]

use anchor_lang::prelude::*;

pub mod access;
#[cfg(not(target_os = "solana"))]
pub mod engine;
pub mod error;
pub mod events;
pub mod fund;
pub mod instructions;
pub mod lifecycle;
pub mod state;

pub use instructions::*;
pub use state::*;

declare_id!("EpusaJs2Y1hCqmjwP21RcwULnhCrSdEhQN7x59P1mHRF");

#[program]
pub mod emergency_relief_dao {
    use super::*;

    /// Create the DAO account with the signer as owner
    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        ctx.accounts.initialize(&ctx.bumps)
    }

    /// Open a new pending claim for the signer. Returns the claim id.
    pub fn submit_claim(
        ctx: Context<SubmitClaim>,
        amount: u64,
        description: String,
        category: String,
    ) -> Result<u64> {
        ctx.accounts
            .submit_claim(&ctx.bumps, amount, description, category)
    }

    /// Cast the signer's single yes/no vote on a pending claim
    pub fn vote_on_claim(ctx: Context<VoteOnClaim>, _claim_id: u64, approve: bool) -> Result<()> {
        ctx.accounts.vote_on_claim(&ctx.bumps, approve)
    }

    /// Settle a claim after its voting window, paying it out if approved
    pub fn finalize_claim(ctx: Context<FinalizeClaim>, _claim_id: u64) -> Result<ClaimStatus> {
        ctx.accounts.finalize_claim()
    }

    /// Owner-only top-up of the relief fund
    pub fn deposit_funds(ctx: Context<DepositFunds>, amount: u64) -> Result<()> {
        ctx.accounts.deposit_funds(amount)
    }

    /// Owner-only handover of DAO ownership
    pub fn update_dao_owner(ctx: Context<UpdateDaoOwner>, new_owner: Pubkey) -> Result<()> {
        ctx.accounts.update_dao_owner(new_owner)
    }

    pub fn get_claim(ctx: Context<GetClaim>, _claim_id: u64) -> Result<Claim> {
        ctx.accounts.get_claim()
    }

    pub fn get_fund_balance(ctx: Context<GetFundBalance>) -> Result<u64> {
        ctx.accounts.get_fund_balance()
    }
}
