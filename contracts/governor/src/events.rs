use soroban_sdk::{contractevent, Address, Env};

#[contractevent(topics = ["AgentGovernor", "INIT"])]
struct GovernorInitialized {
    authority: Address,
    weight_source: Address,
    voting_period: u64,
    quorum_percentage: u32,
    execution_delay: u64,
}

#[contractevent(topics = ["AgentGovernor", "PROPOSED"])]
struct ProposalCreated {
    proposal_id: u64,
    proposer: Address,
    target: Address,
    created_at: u64,
}

#[contractevent(topics = ["AgentGovernor", "VOTED"])]
struct VoteCast {
    proposal_id: u64,
    voter: Address,
    support: bool,
    weight: u64,
}

#[contractevent(topics = ["AgentGovernor", "EXECUTED"])]
struct ProposalExecuted {
    proposal_id: u64,
    target: Address,
    timestamp: u64,
}

#[contractevent(topics = ["AgentGovernor", "CANCELED"])]
struct ProposalCanceled {
    proposal_id: u64,
    canceled_by: Address,
}

#[contractevent(topics = ["AgentGovernor", "PARAMS"])]
struct ParametersUpdated {
    voting_period: u64,
    quorum_percentage: u32,
    execution_delay: u64,
}

#[contractevent(topics = ["AgentGovernor", "AUTHORITY"])]
struct AuthorityChanged {
    previous: Address,
    authority: Address,
}

pub fn emit_initialized(
    env: &Env,
    authority: &Address,
    weight_source: &Address,
    voting_period: u64,
    quorum_percentage: u32,
    execution_delay: u64,
) {
    GovernorInitialized {
        authority: authority.clone(),
        weight_source: weight_source.clone(),
        voting_period,
        quorum_percentage,
        execution_delay,
    }
    .publish(env);
}

pub fn emit_proposal_created(
    env: &Env,
    proposal_id: u64,
    proposer: &Address,
    target: &Address,
    created_at: u64,
) {
    ProposalCreated {
        proposal_id,
        proposer: proposer.clone(),
        target: target.clone(),
        created_at,
    }
    .publish(env);
}

pub fn emit_vote_cast(env: &Env, proposal_id: u64, voter: &Address, support: bool, weight: u64) {
    VoteCast {
        proposal_id,
        voter: voter.clone(),
        support,
        weight,
    }
    .publish(env);
}

pub fn emit_proposal_executed(env: &Env, proposal_id: u64, target: &Address, timestamp: u64) {
    ProposalExecuted {
        proposal_id,
        target: target.clone(),
        timestamp,
    }
    .publish(env);
}

pub fn emit_proposal_canceled(env: &Env, proposal_id: u64, canceled_by: &Address) {
    ProposalCanceled {
        proposal_id,
        canceled_by: canceled_by.clone(),
    }
    .publish(env);
}

pub fn emit_parameters_updated(
    env: &Env,
    voting_period: u64,
    quorum_percentage: u32,
    execution_delay: u64,
) {
    ParametersUpdated {
        voting_period,
        quorum_percentage,
        execution_delay,
    }
    .publish(env);
}

pub fn emit_authority_changed(env: &Env, previous: &Address, authority: &Address) {
    AuthorityChanged {
        previous: previous.clone(),
        authority: authority.clone(),
    }
    .publish(env);
}
