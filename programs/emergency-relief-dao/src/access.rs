//! Owner-gated administration

use anchor_lang::prelude::*;

use crate::error::ReliefError;
use crate::state::{DaoState, GovernanceParams};

impl GovernanceParams {
    /// Both the voting period and the quorum must be positive.
    pub fn validate(&self) -> Result<()> {
        require!(self.voting_period > 0, ReliefError::InvalidInput);
        require!(self.quorum > 0, ReliefError::InvalidInput);
        Ok(())
    }
}

impl DaoState {
    /// Fresh DAO state owned by `owner` with an empty fund. `params` are
    /// expected to have passed [`GovernanceParams::validate`].
    pub fn new(owner: Pubkey, params: GovernanceParams, bump: u8) -> Self {
        Self {
            owner,
            fund_balance: 0,
            claim_count: 0,
            params,
            bump,
        }
    }

    pub fn require_owner(&self, caller: &Pubkey) -> Result<()> {
        require_keys_eq!(*caller, self.owner, ReliefError::NotAuthorized);
        Ok(())
    }

    /// Hands ownership to `new_owner`. Effective for the very next call.
    pub fn update_owner(&mut self, caller: &Pubkey, new_owner: Pubkey) -> Result<()> {
        self.require_owner(caller)?;
        self.owner = new_owner;
        Ok(())
    }
}
