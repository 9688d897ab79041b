use anchor_lang::prelude::*;
use anchor_lang::system_program::{transfer, Transfer};

use crate::events::FundsDeposited;
use crate::state::{DaoState, DAO_SEED};

// ---------------------------------------------------------------------------
// Deposit Funds
// ---------------------------------------------------------------------------
// Owner-only. The ledger credit is checked first, so a non-owner or a zero
// amount fails before any lamports move.
// ---------------------------------------------------------------------------

#[derive(Accounts)]
pub struct DepositFunds<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        mut,
        seeds = [DAO_SEED],
        bump = dao.bump
    )]
    pub dao: Account<'info, DaoState>,

    pub system_program: Program<'info, System>,
}

impl<'info> DepositFunds<'info> {
    pub fn deposit_funds(&mut self, amount: u64) -> Result<()> {
        self.dao.deposit(&self.owner.key(), amount)?;

        transfer(
            CpiContext::new(
                self.system_program.to_account_info(),
                Transfer {
                    from: self.owner.to_account_info(),
                    to: self.dao.to_account_info(),
                },
            ),
            amount,
        )?;

        emit!(FundsDeposited {
            depositor: self.owner.key(),
            amount,
            fund_balance: self.dao.balance(),
        });
        msg!(
            "Deposited {} into relief fund, balance now {}",
            amount,
            self.dao.balance()
        );
        Ok(())
    }
}
