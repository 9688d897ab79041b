use anchor_lang::prelude::*;

use crate::state::{DaoState, GovernanceParams, DAO_SEED};

// ---------------------------------------------------------------------------
// Initialize DAO
// ---------------------------------------------------------------------------
// Creates the singleton DAO account. The deployer becomes the owner and the
// fund starts empty.
// ---------------------------------------------------------------------------

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        init,
        payer = owner,
        space = 8 + DaoState::INIT_SPACE,
        seeds = [DAO_SEED],
        bump
    )]
    pub dao: Account<'info, DaoState>,

    pub system_program: Program<'info, System>,
}

impl<'info> Initialize<'info> {
    pub fn initialize(&mut self, bumps: &InitializeBumps) -> Result<()> {
        let params = GovernanceParams::default();
        params.validate()?;
        self.dao
            .set_inner(DaoState::new(self.owner.key(), params, bumps.dao));

        msg!(
            "Relief DAO initialized: owner {}, voting period {} blocks, quorum {}",
            self.owner.key(),
            params.voting_period,
            params.quorum
        );
        Ok(())
    }
}
