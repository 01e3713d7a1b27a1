use soroban_sdk::{contractevent, Address, BytesN, Env};

#[contractevent(topics = ["AgentRegistry", "INIT"])]
struct RegistryInitialized {
    admin: Address,
    timestamp: u64,
}

#[contractevent(topics = ["AgentRegistry", "REGISTERED"])]
struct AgentRegistered {
    agent_id: u64,
    owner: Address,
    metadata_hash: BytesN<32>,
}

#[contractevent(topics = ["AgentRegistry", "TRANSFERRED"])]
struct AgentTransferred {
    agent_id: u64,
    from: Address,
    to: Address,
}

#[contractevent(topics = ["AgentRegistry", "TERMINATED"])]
struct AgentTerminated {
    agent_id: u64,
    terminated_by: Address,
}

#[contractevent(topics = ["AgentRegistry", "ADMIN"])]
struct AdminChanged {
    previous: Address,
    admin: Address,
}

pub fn emit_initialized(env: &Env, admin: &Address, timestamp: u64) {
    RegistryInitialized {
        admin: admin.clone(),
        timestamp,
    }
    .publish(env);
}

pub fn emit_agent_registered(
    env: &Env,
    agent_id: u64,
    owner: &Address,
    metadata_hash: &BytesN<32>,
) {
    AgentRegistered {
        agent_id,
        owner: owner.clone(),
        metadata_hash: metadata_hash.clone(),
    }
    .publish(env);
}

pub fn emit_agent_transferred(env: &Env, agent_id: u64, from: &Address, to: &Address) {
    AgentTransferred {
        agent_id,
        from: from.clone(),
        to: to.clone(),
    }
    .publish(env);
}

pub fn emit_agent_terminated(env: &Env, agent_id: u64, terminated_by: &Address) {
    AgentTerminated {
        agent_id,
        terminated_by: terminated_by.clone(),
    }
    .publish(env);
}

pub fn emit_admin_changed(env: &Env, previous: &Address, admin: &Address) {
    AdminChanged {
        previous: previous.clone(),
        admin: admin.clone(),
    }
    .publish(env);
}
