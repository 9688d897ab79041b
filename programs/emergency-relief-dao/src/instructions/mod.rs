pub(crate) mod claim_account;
pub mod deposit_funds;
pub mod finalize_claim;
pub mod initialize;
pub mod submit_claim;
pub mod update_dao_owner;
pub mod views;
pub mod vote_on_claim;

pub use deposit_funds::*;
pub use finalize_claim::*;
pub use initialize::*;
pub use submit_claim::*;
pub use update_dao_owner::*;
pub use views::*;
pub use vote_on_claim::*;
