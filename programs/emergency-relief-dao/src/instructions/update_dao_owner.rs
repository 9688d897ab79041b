use anchor_lang::prelude::*;

use crate::events::OwnerUpdated;
use crate::state::{DaoState, DAO_SEED};

#[derive(Accounts)]
pub struct UpdateDaoOwner<'info> {
    /// Must be the current owner; checked against `dao.owner` in the handler
    pub owner: Signer<'info>,

    #[account(
        mut,
        seeds = [DAO_SEED],
        bump = dao.bump
    )]
    pub dao: Account<'info, DaoState>,
}

impl<'info> UpdateDaoOwner<'info> {
    pub fn update_dao_owner(&mut self, new_owner: Pubkey) -> Result<()> {
        let previous_owner = self.dao.owner;
        self.dao.update_owner(&self.owner.key(), new_owner)?;

        emit!(OwnerUpdated {
            previous_owner,
            new_owner,
        });
        msg!("DAO owner changed from {} to {}", previous_owner, new_owner);
        Ok(())
    }
}
