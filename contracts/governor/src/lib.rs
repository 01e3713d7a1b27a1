#![no_std]

//! # Agent Governor
//!
//! A Soroban smart contract through which holders of agent records propose,
//! vote on and execute administrative actions against the rest of the
//! AgentGov system (parameter changes, template and module approvals,
//! treasury reallocation).
//!
//! ## Features
//! - Weighted voting, one vote per address per proposal
//! - Vote weight snapshotted at cast time from an external weight source
//! - Quorum measured against the weight source's current total supply
//! - Strict majority required (ties reject)
//! - Mandatory execution delay after the voting period
//! - Atomic dispatch of an opaque payload to the proposal's target
//! - Event emission for every state transition
//!
//! ## Security
//! - Phase is recomputed from the ledger clock on every call
//! - Executed and canceled are terminal and mutually exclusive
//! - The executed flag is written before the external call; a failed
//!   dispatch rolls the whole invocation back
//! - The governor cannot target itself

use soroban_sdk::{contract, contractimpl, log, Address, Bytes, Env, String};

mod collaborators;
mod error;
mod events;
mod phase;
mod storage;
mod types;

pub use collaborators::{ExecutionTargetClient, WeightSourceClient};
pub use error::{ErrorCategory, GovernorError};
pub use phase::{executable_at, phase_at, voting_ends_at};
pub use types::{
    ExecutionTimeline, GovernanceParameters, Proposal, ProposalPhase, ProposalState,
    QuorumStatus, VoteReceipt, MAX_DESCRIPTION_LEN, MAX_PAYLOAD_LEN,
};

#[contract]
pub struct AgentGovernor;

#[contractimpl]
impl AgentGovernor {
    // ========================================================================
    // Initialization
    // ========================================================================

    /// Initialize the governor
    ///
    /// # Arguments
    /// * `authority` - Administrative identity allowed to update parameters
    ///   and cancel any proposal
    /// * `weight_source` - Contract answering `weight_of` / `total_weight_supply`
    /// * `voting_period` - Seconds during which votes are accepted
    /// * `quorum_percentage` - Share (0-100) of total weight `votes_for` must reach
    /// * `execution_delay` - Seconds between voting close and execution
    ///
    /// # Errors
    /// * `AlreadyInitialized` - Contract has already been initialized
    /// * `InvalidParameters` - A duration is zero or quorum exceeds 100
    pub fn initialize(
        env: Env,
        authority: Address,
        weight_source: Address,
        voting_period: u64,
        quorum_percentage: u32,
        execution_delay: u64,
    ) -> Result<(), GovernorError> {
        if storage::is_initialized(&env) {
            return Err(GovernorError::AlreadyInitialized);
        }

        authority.require_auth();

        let params = GovernanceParameters {
            voting_period,
            quorum_percentage,
            execution_delay,
        };
        params.validate()?;

        storage::set_authority(&env, &authority);
        storage::set_weight_source(&env, &weight_source);
        storage::set_parameters(&env, &params);
        storage::bump_instance(&env);

        events::emit_initialized(
            &env,
            &authority,
            &weight_source,
            voting_period,
            quorum_percentage,
            execution_delay,
        );

        Ok(())
    }

    // ========================================================================
    // Proposal Registry
    // ========================================================================

    /// Create a new proposal and return its id
    ///
    /// # Errors
    /// * `NotInitialized` - Contract not initialized
    /// * `InvalidTarget` - Target is the governor itself
    /// * `EmptyDescription` / `DescriptionTooLong` - Description out of bounds
    /// * `PayloadTooLong` - Payload exceeds `MAX_PAYLOAD_LEN`
    pub fn create_proposal(
        env: Env,
        proposer: Address,
        description: String,
        target: Address,
        payload: Bytes,
    ) -> Result<u64, GovernorError> {
        if !storage::is_initialized(&env) {
            return Err(GovernorError::NotInitialized);
        }

        proposer.require_auth();

        if target == env.current_contract_address() {
            return Err(GovernorError::InvalidTarget);
        }
        if description.is_empty() {
            return Err(GovernorError::EmptyDescription);
        }
        if description.len() > MAX_DESCRIPTION_LEN {
            return Err(GovernorError::DescriptionTooLong);
        }
        if payload.len() > MAX_PAYLOAD_LEN {
            return Err(GovernorError::PayloadTooLong);
        }

        let proposal_id = storage::next_proposal_id(&env)?;
        let created_at = env.ledger().timestamp();

        let proposal = Proposal {
            id: proposal_id,
            proposer: proposer.clone(),
            description,
            target: target.clone(),
            payload,
            created_at,
            votes_for: 0,
            votes_against: 0,
            voter_count: 0,
            executed: false,
            canceled: false,
        };
        storage::set_proposal(&env, &proposal);
        storage::bump_instance(&env);

        events::emit_proposal_created(&env, proposal_id, &proposer, &target, created_at);

        Ok(proposal_id)
    }

    /// Cancel a proposal (proposer or authority)
    ///
    /// # Errors
    /// * `ProposalNotFound` - Proposal does not exist
    /// * `Unauthorized` - Caller is neither the proposer nor the authority
    /// * `ProposalAlreadyExecuted` / `ProposalCanceled` - Proposal is terminal
    pub fn cancel(env: Env, caller: Address, proposal_id: u64) -> Result<(), GovernorError> {
        let authority = storage::get_authority(&env)?;

        caller.require_auth();

        let mut proposal = storage::get_proposal(&env, proposal_id)?;

        if caller != proposal.proposer && caller != authority {
            return Err(GovernorError::Unauthorized);
        }

        proposal.ensure_open()?;

        proposal.canceled = true;
        storage::set_proposal(&env, &proposal);

        events::emit_proposal_canceled(&env, proposal_id, &caller);

        Ok(())
    }

    // ========================================================================
    // Voting Ledger
    // ========================================================================

    /// Cast a weighted vote and return the weight recorded for it
    ///
    /// The recorded weight is the voter's weight at this moment; later
    /// changes at the weight source do not touch the tally.
    ///
    /// # Errors
    /// * `ProposalNotFound` - Proposal does not exist
    /// * `ProposalCanceled` / `ProposalAlreadyExecuted` - Proposal is terminal
    /// * `VotingClosed` - Voting period has ended
    /// * `AlreadyVoted` - Voter already has a receipt on this proposal
    /// * `NoVotingWeight` - Voter's current weight is zero
    pub fn cast_vote(
        env: Env,
        voter: Address,
        proposal_id: u64,
        support: bool,
    ) -> Result<u64, GovernorError> {
        let params = storage::get_parameters(&env)?;

        voter.require_auth();

        let mut proposal = storage::get_proposal(&env, proposal_id)?;
        proposal.ensure_open()?;

        let now = env.ledger().timestamp();
        if phase::phase_at(proposal.created_at, now, &params) != ProposalPhase::Voting {
            return Err(GovernorError::VotingClosed);
        }

        if storage::has_voted(&env, proposal_id, &voter) {
            return Err(GovernorError::AlreadyVoted);
        }

        let weight = Self::weight_source_client(&env)?.weight_of(&voter);
        if weight == 0 {
            return Err(GovernorError::NoVotingWeight);
        }

        if support {
            proposal.votes_for = proposal
                .votes_for
                .checked_add(weight)
                .ok_or(GovernorError::ArithmeticOverflow)?;
        } else {
            proposal.votes_against = proposal
                .votes_against
                .checked_add(weight)
                .ok_or(GovernorError::ArithmeticOverflow)?;
        }
        proposal.voter_count = proposal
            .voter_count
            .checked_add(1)
            .ok_or(GovernorError::ArithmeticOverflow)?;

        let receipt = VoteReceipt {
            voter: voter.clone(),
            support,
            weight,
            cast_at: now,
        };
        storage::set_receipt(&env, proposal_id, &receipt);
        storage::set_proposal(&env, &proposal);

        events::emit_vote_cast(&env, proposal_id, &voter, support, weight);

        Ok(weight)
    }

    // ========================================================================
    // Execution Dispatcher
    // ========================================================================

    /// Execute an approved proposal once its execution delay has elapsed
    ///
    /// Anyone may call this. The target is invoked with the stored payload;
    /// if it fails, nothing from this call persists and the proposal can be
    /// executed again later.
    ///
    /// # Errors
    /// * `ProposalNotFound` - Proposal does not exist
    /// * `ProposalAlreadyExecuted` / `ProposalCanceled` - Proposal is terminal
    /// * `VotingPeriodNotEnded` - Voting is still open
    /// * `ExecutionDelayNotPassed` - Execution delay is still running
    /// * `QuorumNotReached` - `votes_for` below the current quorum threshold
    /// * `ProposalRejected` - `votes_for` does not exceed `votes_against`
    /// * `ExecutionFailed` - The target reported a failure. The target's own
    ///   error code is not part of the return value: it is written to the
    ///   diagnostic log as `"execution target failed"` with the proposal id
    ///   and code, visible in tests and `release-with-logs` builds only.
    pub fn execute(env: Env, proposal_id: u64) -> Result<(), GovernorError> {
        let params = storage::get_parameters(&env)?;

        let mut proposal = storage::get_proposal(&env, proposal_id)?;
        proposal.ensure_open()?;

        let now = env.ledger().timestamp();
        match phase::phase_at(proposal.created_at, now, &params) {
            ProposalPhase::Voting => return Err(GovernorError::VotingPeriodNotEnded),
            ProposalPhase::AwaitingExecutionDelay => {
                return Err(GovernorError::ExecutionDelayNotPassed)
            }
            ProposalPhase::ExecutionReady => {}
        }

        let status = Self::tally(&env, &params, &proposal)?;
        if !status.quorum_reached {
            return Err(GovernorError::QuorumNotReached);
        }
        if !status.majority_reached {
            return Err(GovernorError::ProposalRejected);
        }

        // Mark as executed BEFORE the external call; an Err return below
        // discards this write together with everything the target did.
        proposal.executed = true;
        storage::set_proposal(&env, &proposal);

        let target = ExecutionTargetClient::new(&env, &proposal.target);
        match target.try_invoke(&proposal.payload) {
            Ok(Ok(())) => {}
            Err(Ok(err)) => {
                log!(&env, "execution target failed", proposal_id, err.get_code());
                return Err(GovernorError::ExecutionFailed);
            }
            _ => {
                log!(&env, "execution target aborted", proposal_id);
                return Err(GovernorError::ExecutionFailed);
            }
        }

        storage::bump_instance(&env);

        events::emit_proposal_executed(&env, proposal_id, &proposal.target, now);

        Ok(())
    }

    // ========================================================================
    // Administration
    // ========================================================================

    /// Replace the governance parameters (authority only)
    ///
    /// # Errors
    /// * `NotInitialized` - Contract not initialized
    /// * `InvalidParameters` - A duration is zero or quorum exceeds 100
    pub fn update_parameters(
        env: Env,
        voting_period: u64,
        quorum_percentage: u32,
        execution_delay: u64,
    ) -> Result<(), GovernorError> {
        let authority = storage::get_authority(&env)?;
        authority.require_auth();

        let params = GovernanceParameters {
            voting_period,
            quorum_percentage,
            execution_delay,
        };
        params.validate()?;

        storage::set_parameters(&env, &params);
        storage::bump_instance(&env);

        events::emit_parameters_updated(&env, voting_period, quorum_percentage, execution_delay);

        Ok(())
    }

    /// Rotate the administrative identity (current authority only)
    pub fn set_authority(env: Env, new_authority: Address) -> Result<(), GovernorError> {
        let authority = storage::get_authority(&env)?;
        authority.require_auth();

        storage::set_authority(&env, &new_authority);
        storage::bump_instance(&env);

        events::emit_authority_changed(&env, &authority, &new_authority);

        Ok(())
    }

    // ========================================================================
    // Query Functions
    // ========================================================================

    /// Get proposal details by ID
    pub fn get_proposal(env: Env, proposal_id: u64) -> Result<Proposal, GovernorError> {
        storage::get_proposal(&env, proposal_id)
    }

    /// Highest assigned proposal id (0 when none exist)
    pub fn proposal_count(env: Env) -> u64 {
        storage::get_proposal_count(&env)
    }

    pub fn has_voted(env: Env, proposal_id: u64, voter: Address) -> bool {
        storage::has_voted(&env, proposal_id, &voter)
    }

    /// Get the receipt of a cast vote, if any
    pub fn get_vote(env: Env, proposal_id: u64, voter: Address) -> Option<VoteReceipt> {
        storage::get_receipt(&env, proposal_id, &voter)
    }

    /// Current weight of `identity` at the weight source
    pub fn voting_weight(env: Env, identity: Address) -> Result<u64, GovernorError> {
        Ok(Self::weight_source_client(&env)?.weight_of(&identity))
    }

    /// Quorum and majority standing against the current total weight supply
    pub fn quorum_status(env: Env, proposal_id: u64) -> Result<QuorumStatus, GovernorError> {
        let params = storage::get_parameters(&env)?;
        let proposal = storage::get_proposal(&env, proposal_id)?;
        Self::tally(&env, &params, &proposal)
    }

    /// Voting and execution boundaries under the current parameters
    pub fn execution_timeline(
        env: Env,
        proposal_id: u64,
    ) -> Result<ExecutionTimeline, GovernorError> {
        let params = storage::get_parameters(&env)?;
        let proposal = storage::get_proposal(&env, proposal_id)?;
        let now = env.ledger().timestamp();

        Ok(ExecutionTimeline {
            created_at: proposal.created_at,
            voting_ends_at: phase::voting_ends_at(proposal.created_at, &params),
            executable_at: phase::executable_at(proposal.created_at, &params),
            now,
            phase: phase::phase_at(proposal.created_at, now, &params),
        })
    }

    /// Timing phase of a proposal, ignoring its flags and tallies
    pub fn proposal_phase(env: Env, proposal_id: u64) -> Result<ProposalPhase, GovernorError> {
        let params = storage::get_parameters(&env)?;
        let proposal = storage::get_proposal(&env, proposal_id)?;
        Ok(phase::phase_at(
            proposal.created_at,
            env.ledger().timestamp(),
            &params,
        ))
    }

    /// Combined lifecycle state of a proposal
    pub fn proposal_state(env: Env, proposal_id: u64) -> Result<ProposalState, GovernorError> {
        let params = storage::get_parameters(&env)?;
        let proposal = storage::get_proposal(&env, proposal_id)?;

        if proposal.canceled {
            return Ok(ProposalState::Canceled);
        }
        if proposal.executed {
            return Ok(ProposalState::Executed);
        }

        let phase = phase::phase_at(proposal.created_at, env.ledger().timestamp(), &params);
        if phase == ProposalPhase::Voting {
            return Ok(ProposalState::Voting);
        }

        let status = Self::tally(&env, &params, &proposal)?;
        if !(status.quorum_reached && status.majority_reached) {
            return Ok(ProposalState::Defeated);
        }

        Ok(match phase {
            ProposalPhase::ExecutionReady => ProposalState::Succeeded,
            _ => ProposalState::Queued,
        })
    }

    pub fn get_parameters(env: Env) -> Result<GovernanceParameters, GovernorError> {
        storage::get_parameters(&env)
    }

    pub fn authority(env: Env) -> Result<Address, GovernorError> {
        storage::get_authority(&env)
    }

    pub fn weight_source(env: Env) -> Result<Address, GovernorError> {
        storage::get_weight_source(&env)
    }
}

impl AgentGovernor {
    fn weight_source_client(env: &Env) -> Result<WeightSourceClient<'_>, GovernorError> {
        let address = storage::get_weight_source(env)?;
        Ok(WeightSourceClient::new(env, &address))
    }

    fn tally(
        env: &Env,
        params: &GovernanceParameters,
        proposal: &Proposal,
    ) -> Result<QuorumStatus, GovernorError> {
        let total_weight_supply = Self::weight_source_client(env)?.total_weight_supply();
        let quorum_threshold = quorum_threshold(params.quorum_percentage, total_weight_supply);

        Ok(QuorumStatus {
            votes_for: proposal.votes_for,
            votes_against: proposal.votes_against,
            total_weight_supply,
            quorum_threshold,
            quorum_reached: proposal.votes_for >= quorum_threshold,
            majority_reached: proposal.votes_for > proposal.votes_against,
        })
    }
}

/// `quorum_percentage * total / 100`, rounded down.
fn quorum_threshold(quorum_percentage: u32, total_weight_supply: u64) -> u64 {
    let threshold = u128::from(quorum_percentage) * u128::from(total_weight_supply) / 100;
    // quorum_percentage <= 100, so the threshold never exceeds the supply
    u64::try_from(threshold).unwrap_or(u64::MAX)
}
