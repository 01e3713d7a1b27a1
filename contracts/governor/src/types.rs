//! Data types for the Governor contract

use soroban_sdk::{contracttype, Address, Bytes, String};

use crate::error::GovernorError;

/// Maximum description length in bytes
pub const MAX_DESCRIPTION_LEN: u32 = 1_000;
/// Maximum payload length in bytes
pub const MAX_PAYLOAD_LEN: u32 = 4_096;

/// Default voting period: 7 days
pub const DEFAULT_VOTING_PERIOD: u64 = 7 * 24 * 60 * 60;
/// Default quorum: 10% of total weight supply
pub const DEFAULT_QUORUM_PERCENTAGE: u32 = 10;
/// Default execution delay: 2 days
pub const DEFAULT_EXECUTION_DELAY: u64 = 2 * 24 * 60 * 60;

/// A governance proposal dispatching `payload` to `target` once approved
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Proposal {
    /// Monotonic identifier, starting at 1
    pub id: u64,
    /// Address that created the proposal
    pub proposer: Address,
    /// Free-text rationale
    pub description: String,
    /// Contract the action is dispatched to
    pub target: Address,
    /// Opaque instruction interpreted by the target
    pub payload: Bytes,
    /// Ledger timestamp at creation
    pub created_at: u64,
    /// Accumulated weight in favour
    pub votes_for: u64,
    /// Accumulated weight against
    pub votes_against: u64,
    /// Number of distinct voters
    pub voter_count: u32,
    pub executed: bool,
    pub canceled: bool,
}

impl Proposal {
    /// Fails if the proposal can no longer transition.
    pub fn ensure_open(&self) -> Result<(), GovernorError> {
        if self.executed {
            return Err(GovernorError::ProposalAlreadyExecuted);
        }
        if self.canceled {
            return Err(GovernorError::ProposalCanceled);
        }
        Ok(())
    }
}

/// Record of a cast vote; the weight is a snapshot taken when it was cast
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VoteReceipt {
    pub voter: Address,
    pub support: bool,
    pub weight: u64,
    pub cast_at: u64,
}

/// Governance configuration
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GovernanceParameters {
    /// Seconds after creation during which votes are accepted
    pub voting_period: u64,
    /// Share of total weight supply (0-100) that `votes_for` must reach
    pub quorum_percentage: u32,
    /// Seconds after voting closes before execution is allowed
    pub execution_delay: u64,
}

impl GovernanceParameters {
    pub fn validate(&self) -> Result<(), GovernorError> {
        if self.voting_period == 0 || self.execution_delay == 0 || self.quorum_percentage > 100 {
            return Err(GovernorError::InvalidParameters);
        }
        Ok(())
    }
}

impl Default for GovernanceParameters {
    fn default() -> Self {
        Self {
            voting_period: DEFAULT_VOTING_PERIOD,
            quorum_percentage: DEFAULT_QUORUM_PERCENTAGE,
            execution_delay: DEFAULT_EXECUTION_DELAY,
        }
    }
}

/// Lifecycle phase derived from timestamps alone
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ProposalPhase {
    /// Votes are accepted
    Voting = 0,
    /// Voting closed, execution delay still running
    AwaitingExecutionDelay = 1,
    /// Execution delay elapsed
    ExecutionReady = 2,
}

/// Full proposal state combining flags, phase and current tallies
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ProposalState {
    Voting = 0,
    /// Voting closed and the proposal is passing, waiting out the delay
    Queued = 1,
    /// Executable now
    Succeeded = 2,
    /// Voting closed without quorum or majority
    Defeated = 3,
    Executed = 4,
    Canceled = 5,
}

/// Quorum and majority standing of a proposal against the current supply
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct QuorumStatus {
    pub votes_for: u64,
    pub votes_against: u64,
    pub total_weight_supply: u64,
    pub quorum_threshold: u64,
    pub quorum_reached: bool,
    pub majority_reached: bool,
}

/// Timing boundaries of a proposal under the current parameters
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ExecutionTimeline {
    pub created_at: u64,
    pub voting_ends_at: u64,
    pub executable_at: u64,
    pub now: u64,
    pub phase: ProposalPhase,
}
