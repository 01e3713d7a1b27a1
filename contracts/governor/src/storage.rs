//! Storage keys and helpers for the Governor contract

use soroban_sdk::{contracttype, Address, Env};

use crate::error::GovernorError;
use crate::types::{GovernanceParameters, Proposal, VoteReceipt};

/// Ledgers a persistent entry stays live after each write (~30 days)
pub const PERSISTENT_BUMP_LEDGERS: u32 = 518_400;
/// Ledgers the contract instance stays live after each state change (~7 days)
pub const INSTANCE_BUMP_LEDGERS: u32 = 120_960;

/// Storage keys for the governor contract
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// Administrative identity (instance storage)
    Authority,
    /// Weight source contract (instance storage)
    WeightSource,
    /// Governance parameters (instance storage)
    Parameters,
    /// Highest assigned proposal id (instance storage)
    ProposalCount,
    /// A governance proposal (persistent storage)
    Proposal(u64),
    /// A voter's receipt on a proposal (persistent storage)
    Receipt(u64, Address),
}

// ============================================================================
// Initialization Helpers
// ============================================================================

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Authority)
}

pub fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_BUMP_LEDGERS, INSTANCE_BUMP_LEDGERS);
}

// ============================================================================
// Configuration Helpers
// ============================================================================

pub fn get_authority(env: &Env) -> Result<Address, GovernorError> {
    env.storage()
        .instance()
        .get(&DataKey::Authority)
        .ok_or(GovernorError::NotInitialized)
}

pub fn set_authority(env: &Env, authority: &Address) {
    env.storage().instance().set(&DataKey::Authority, authority);
}

pub fn get_weight_source(env: &Env) -> Result<Address, GovernorError> {
    env.storage()
        .instance()
        .get(&DataKey::WeightSource)
        .ok_or(GovernorError::NotInitialized)
}

pub fn set_weight_source(env: &Env, weight_source: &Address) {
    env.storage()
        .instance()
        .set(&DataKey::WeightSource, weight_source);
}

pub fn get_parameters(env: &Env) -> Result<GovernanceParameters, GovernorError> {
    env.storage()
        .instance()
        .get(&DataKey::Parameters)
        .ok_or(GovernorError::NotInitialized)
}

pub fn set_parameters(env: &Env, params: &GovernanceParameters) {
    env.storage().instance().set(&DataKey::Parameters, params);
}

// ============================================================================
// Proposal Helpers
// ============================================================================

pub fn get_proposal_count(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::ProposalCount)
        .unwrap_or(0)
}

/// Reserve the next proposal id. Ids start at 1; 0 is never assigned.
pub fn next_proposal_id(env: &Env) -> Result<u64, GovernorError> {
    let id = get_proposal_count(env)
        .checked_add(1)
        .ok_or(GovernorError::ArithmeticOverflow)?;
    env.storage().instance().set(&DataKey::ProposalCount, &id);
    Ok(id)
}

pub fn get_proposal(env: &Env, proposal_id: u64) -> Result<Proposal, GovernorError> {
    if proposal_id == 0 {
        return Err(GovernorError::ProposalNotFound);
    }
    env.storage()
        .persistent()
        .get(&DataKey::Proposal(proposal_id))
        .ok_or(GovernorError::ProposalNotFound)
}

pub fn set_proposal(env: &Env, proposal: &Proposal) {
    let key = DataKey::Proposal(proposal.id);
    env.storage().persistent().set(&key, proposal);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_BUMP_LEDGERS, PERSISTENT_BUMP_LEDGERS);
}

// ============================================================================
// Receipt Helpers
// ============================================================================

pub fn get_receipt(env: &Env, proposal_id: u64, voter: &Address) -> Option<VoteReceipt> {
    env.storage()
        .persistent()
        .get(&DataKey::Receipt(proposal_id, voter.clone()))
}

pub fn has_voted(env: &Env, proposal_id: u64, voter: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Receipt(proposal_id, voter.clone()))
}

pub fn set_receipt(env: &Env, proposal_id: u64, receipt: &VoteReceipt) {
    let key = DataKey::Receipt(proposal_id, receipt.voter.clone());
    env.storage().persistent().set(&key, receipt);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_BUMP_LEDGERS, PERSISTENT_BUMP_LEDGERS);
}
