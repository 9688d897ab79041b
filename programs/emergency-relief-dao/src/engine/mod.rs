//! Host-side relief ledger.
//!
//! Runs the same lifecycle rules as the on-chain program against an
//! in-memory claim store, for simulations, off-chain tooling, and tests.
//! The caller identity and block height come from an [`ExecutionContext`]
//! supplied with every call, never from ambient state.
//!
//! All state sits behind one mutex and every public operation takes it
//! exactly once, so calls are serializable and each one observes a
//! single block height from start to finish.

mod store;

use anchor_lang::prelude::*;
use parking_lot::Mutex;

pub use store::{ClaimStore, VoteTracker};

use crate::state::{Claim, ClaimStatus, DaoState, GovernanceParams};

/// Authenticated caller and current block height for one call
pub trait ExecutionContext {
    fn caller(&self) -> Pubkey;
    fn block_height(&self) -> u64;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Call {
    pub caller: Pubkey,
    pub block_height: u64,
}

impl Call {
    pub fn new(caller: Pubkey, block_height: u64) -> Self {
        Self {
            caller,
            block_height,
        }
    }
}

impl ExecutionContext for Call {
    fn caller(&self) -> Pubkey {
        self.caller
    }

    fn block_height(&self) -> u64 {
        self.block_height
    }
}

#[derive(Debug)]
struct Ledger {
    dao: DaoState,
    claims: ClaimStore,
    votes: VoteTracker,
}

#[derive(Debug)]
pub struct ReliefEngine {
    ledger: Mutex<Ledger>,
}

impl ReliefEngine {
    /// Ledger owned by `owner` with the default voting period and quorum.
    pub fn new(owner: Pubkey) -> Self {
        Self::from_state(DaoState::new(owner, GovernanceParams::default(), 0))
    }

    pub fn with_params(owner: Pubkey, params: GovernanceParams) -> Result<Self> {
        params.validate()?;
        Ok(Self::from_state(DaoState::new(owner, params, 0)))
    }

    fn from_state(dao: DaoState) -> Self {
        Self {
            ledger: Mutex::new(Ledger {
                dao,
                claims: ClaimStore::default(),
                votes: VoteTracker::default(),
            }),
        }
    }

    pub fn submit_claim(
        &self,
        ctx: &impl ExecutionContext,
        amount: u64,
        description: &str,
        category: &str,
    ) -> Result<u64> {
        let (caller, height) = (ctx.caller(), ctx.block_height());
        let mut ledger = self.ledger.lock();

        let claim = ledger.dao.open_claim(
            caller,
            amount,
            description.to_string(),
            category.to_string(),
            height,
        )?;
        let claim_id = claim.id;
        msg!(
            "Claim {} submitted by {} for {} (voting closes after block {})",
            claim_id,
            caller,
            amount,
            claim.voting_deadline
        );
        ledger.claims.insert(claim);
        Ok(claim_id)
    }

    pub fn vote_on_claim(
        &self,
        ctx: &impl ExecutionContext,
        claim_id: u64,
        approve: bool,
    ) -> Result<()> {
        let (caller, height) = (ctx.caller(), ctx.block_height());
        let mut guard = self.ledger.lock();
        let Ledger { claims, votes, .. } = &mut *guard;

        let claim = claims.get_mut(claim_id)?;
        claim.record_vote(approve, height, votes.has_voted(claim_id, &caller))?;
        votes.record(claim_id, caller);

        msg!(
            "Vote recorded on claim {}: {}",
            claim_id,
            if approve { "YES" } else { "NO" }
        );
        Ok(())
    }

    /// Anyone may finalize once the window has closed.
    pub fn finalize_claim(
        &self,
        ctx: &impl ExecutionContext,
        claim_id: u64,
    ) -> Result<ClaimStatus> {
        let height = ctx.block_height();
        let mut guard = self.ledger.lock();
        let Ledger { dao, claims, .. } = &mut *guard;

        claims.get_mut(claim_id)?.finalize(dao, height)
    }

    pub fn get_claim(&self, claim_id: u64) -> Result<Claim> {
        self.ledger.lock().claims.get(claim_id).cloned()
    }

    pub fn deposit_funds(&self, ctx: &impl ExecutionContext, amount: u64) -> Result<()> {
        let caller = ctx.caller();
        let mut ledger = self.ledger.lock();

        ledger.dao.deposit(&caller, amount)?;
        msg!(
            "Deposited {} into relief fund, balance now {}",
            amount,
            ledger.dao.balance()
        );
        Ok(())
    }

    pub fn get_fund_balance(&self) -> u64 {
        self.ledger.lock().dao.balance()
    }

    pub fn update_dao_owner(&self, ctx: &impl ExecutionContext, new_owner: Pubkey) -> Result<()> {
        let caller = ctx.caller();
        let mut ledger = self.ledger.lock();

        ledger.dao.update_owner(&caller, new_owner)?;
        msg!("DAO owner changed from {} to {}", caller, new_owner);
        Ok(())
    }

    pub fn owner(&self) -> Pubkey {
        self.ledger.lock().dao.owner
    }

    pub fn has_voted(&self, claim_id: u64, voter: &Pubkey) -> bool {
        self.ledger.lock().votes.has_voted(claim_id, voter)
    }

    pub fn claim_count(&self) -> u64 {
        self.ledger.lock().dao.claim_count
    }

    pub fn governance_params(&self) -> GovernanceParams {
        self.ledger.lock().dao.params
    }

    /// Whether the cross-structure invariants hold: each claim's tally
    /// matches its recorded voters, and ids are dense from 1 to
    /// `claim_count`.
    pub fn is_consistent(&self) -> bool {
        let ledger = self.ledger.lock();

        ledger.claims.len() as u64 == ledger.dao.claim_count
            && ledger.claims.iter().all(|claim| {
                claim.total_votes() == ledger.votes.voter_count(claim.id) as u64
            })
            && (1..=ledger.dao.claim_count).all(|id| ledger.claims.get(id).is_ok())
    }
}
