use anchor_lang::prelude::*;

use crate::error::ReliefError;
use crate::state::Claim;

// ---------------------------------------------------------------------------
// Claim account access
// ---------------------------------------------------------------------------
// Instructions that address a claim by id take the PDA as a seeds-checked
// UncheckedAccount. An id that was never allocated has no account behind
// it, and is reported as ClaimNotFound rather than Anchor's
// AccountNotInitialized.
// ---------------------------------------------------------------------------

pub(crate) fn load_claim(info: &AccountInfo) -> Result<Claim> {
    require!(!info.data_is_empty(), ReliefError::ClaimNotFound);
    require_keys_eq!(
        *info.owner,
        crate::ID,
        anchor_lang::error::ErrorCode::AccountOwnedByWrongProgram
    );

    let data = info.try_borrow_data()?;
    Claim::try_deserialize(&mut &data[..])
}

/// Writes `claim` back over the account data. The encoded size never grows
/// after submission, so it always fits the allocation.
pub(crate) fn store_claim(info: &AccountInfo, claim: &Claim) -> Result<()> {
    let mut data = info.try_borrow_mut_data()?;
    let mut writer: &mut [u8] = &mut data;
    claim.try_serialize(&mut writer)
}
