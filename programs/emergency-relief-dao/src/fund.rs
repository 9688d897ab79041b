//! Fund ledger: the pooled balance and its checked mutators

use anchor_lang::prelude::*;

use crate::error::ReliefError;
use crate::state::DaoState;

impl DaoState {
    pub fn balance(&self) -> u64 {
        self.fund_balance
    }

    /// Credits `amount` to the pool. Only the current owner may deposit.
    pub fn deposit(&mut self, caller: &Pubkey, amount: u64) -> Result<()> {
        self.require_owner(caller)?;
        require!(amount > 0, ReliefError::InvalidAmount);

        self.fund_balance = self
            .fund_balance
            .checked_add(amount)
            .ok_or(ReliefError::ArithmeticOverflow)?;
        Ok(())
    }

    /// Debits a payout. Never partial: either the full amount leaves the
    /// pool or nothing does.
    pub(crate) fn withdraw(&mut self, amount: u64) -> Result<()> {
        self.fund_balance = self
            .fund_balance
            .checked_sub(amount)
            .ok_or(ReliefError::InsufficientFunds)?;
        Ok(())
    }
}
