//! In-memory claim store and vote tracker

use std::collections::{HashMap, HashSet};

use anchor_lang::prelude::*;

use crate::error::ReliefError;
use crate::state::Claim;

#[derive(Debug, Default)]
pub struct ClaimStore {
    claims: HashMap<u64, Claim>,
}

impl ClaimStore {
    pub fn insert(&mut self, claim: Claim) {
        self.claims.insert(claim.id, claim);
    }

    pub fn get(&self, claim_id: u64) -> Result<&Claim> {
        self.claims
            .get(&claim_id)
            .ok_or_else(|| error!(ReliefError::ClaimNotFound))
    }

    pub fn get_mut(&mut self, claim_id: u64) -> Result<&mut Claim> {
        self.claims
            .get_mut(&claim_id)
            .ok_or_else(|| error!(ReliefError::ClaimNotFound))
    }

    pub fn len(&self) -> usize {
        self.claims.len()
    }

    pub fn is_empty(&self) -> bool {
        self.claims.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Claim> {
        self.claims.values()
    }
}

/// Set of principals that have voted, per claim
#[derive(Debug, Default)]
pub struct VoteTracker {
    voters: HashMap<u64, HashSet<Pubkey>>,
}

impl VoteTracker {
    pub fn has_voted(&self, claim_id: u64, voter: &Pubkey) -> bool {
        self.voters
            .get(&claim_id)
            .is_some_and(|set| set.contains(voter))
    }

    /// Returns false if the pair was already present.
    pub fn record(&mut self, claim_id: u64, voter: Pubkey) -> bool {
        self.voters.entry(claim_id).or_default().insert(voter)
    }

    pub fn voter_count(&self, claim_id: u64) -> usize {
        self.voters.get(&claim_id).map_or(0, HashSet::len)
    }
}
