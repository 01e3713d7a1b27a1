//! Error types for the Governor contract

use soroban_sdk::contracterror;

/// Governor contract errors
///
/// Codes are grouped by range; see [`GovernorError::category`].
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum GovernorError {
    /// Contract has already been initialized
    AlreadyInitialized = 1,
    /// Contract has not been initialized
    NotInitialized = 2,

    /// Proposal description is empty
    EmptyDescription = 10,
    /// Proposal description exceeds `MAX_DESCRIPTION_LEN`
    DescriptionTooLong = 11,
    /// Proposal payload exceeds `MAX_PAYLOAD_LEN`
    PayloadTooLong = 12,
    /// Target cannot receive governance actions (e.g. the governor itself)
    InvalidTarget = 13,
    /// Governance parameters are out of range
    InvalidParameters = 14,
    /// Caller holds no voting weight
    NoVotingWeight = 15,

    /// Caller lacks the role required for this operation
    Unauthorized = 20,

    /// Proposal id is 0 or was never assigned
    ProposalNotFound = 30,

    /// Proposal has been canceled
    ProposalCanceled = 40,
    /// Proposal has already been executed
    ProposalAlreadyExecuted = 41,
    /// Voting window for the proposal has closed
    VotingClosed = 42,
    /// Voter already has a receipt on this proposal
    AlreadyVoted = 43,
    /// Execution attempted while voting is still open
    VotingPeriodNotEnded = 44,
    /// Execution attempted before the execution delay elapsed
    ExecutionDelayNotPassed = 45,
    /// Votes in favour are below the quorum threshold
    QuorumNotReached = 46,
    /// Votes in favour do not strictly exceed votes against
    ProposalRejected = 47,
    /// Tally arithmetic overflowed
    ArithmeticOverflow = 48,

    /// The execution target reported a failure
    ExecutionFailed = 50,
}

/// Coarse classification of a [`GovernorError`].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ErrorCategory {
    Validation,
    Authorization,
    NotFound,
    State,
    Execution,
}

impl GovernorError {
    pub fn category(&self) -> ErrorCategory {
        match *self as u32 {
            10..=19 => ErrorCategory::Validation,
            20..=29 => ErrorCategory::Authorization,
            30..=39 => ErrorCategory::NotFound,
            50..=59 => ErrorCategory::Execution,
            _ => ErrorCategory::State,
        }
    }
}
