//! Phase clock: maps a proposal's creation time and the current parameters
//! onto its lifecycle phase.
//!
//! Nothing is scheduled. Callers evaluate the phase against the ledger
//! timestamp every time they need it.

use crate::types::{GovernanceParameters, ProposalPhase};

/// Last timestamp at which votes are accepted.
pub fn voting_ends_at(created_at: u64, params: &GovernanceParameters) -> u64 {
    created_at.saturating_add(params.voting_period)
}

/// First timestamp at which execution is allowed.
pub fn executable_at(created_at: u64, params: &GovernanceParameters) -> u64 {
    voting_ends_at(created_at, params).saturating_add(params.execution_delay)
}

pub fn phase_at(created_at: u64, now: u64, params: &GovernanceParameters) -> ProposalPhase {
    if now <= voting_ends_at(created_at, params) {
        ProposalPhase::Voting
    } else if now < executable_at(created_at, params) {
        ProposalPhase::AwaitingExecutionDelay
    } else {
        ProposalPhase::ExecutionReady
    }
}
