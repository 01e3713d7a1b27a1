use soroban_sdk::{contracttype, Address, BytesN, Env};

use crate::error::RegistryError;

pub const PERSISTENT_BUMP_LEDGERS: u32 = 518_400;
pub const INSTANCE_BUMP_LEDGERS: u32 = 120_960;

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Admin,
    AgentCount,
    TotalActive,
    Agent(u64),
    Holdings(Address),
}

#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum AgentStatus {
    Active = 0,
    Terminated = 1,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AgentRecord {
    pub id: u64,
    pub owner: Address,
    pub metadata_hash: BytesN<32>,
    pub registered_at: u64,
    pub status: AgentStatus,
}

pub fn get_admin(env: &Env) -> Result<Address, RegistryError> {
    env.storage()
        .instance()
        .get(&DataKey::Admin)
        .ok_or(RegistryError::NotInitialized)
}

pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
}

/// Keeps the admin, id counter and active total alive with the agents.
pub fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_BUMP_LEDGERS, INSTANCE_BUMP_LEDGERS);
}

pub fn next_agent_id(env: &Env) -> Result<u64, RegistryError> {
    let id = env
        .storage()
        .instance()
        .get::<DataKey, u64>(&DataKey::AgentCount)
        .unwrap_or(0)
        .checked_add(1)
        .ok_or(RegistryError::ArithmeticOverflow)?;
    env.storage().instance().set(&DataKey::AgentCount, &id);
    Ok(id)
}

pub fn get_agent(env: &Env, agent_id: u64) -> Result<AgentRecord, RegistryError> {
    env.storage()
        .persistent()
        .get(&DataKey::Agent(agent_id))
        .ok_or(RegistryError::AgentNotFound)
}

pub fn set_agent(env: &Env, agent: &AgentRecord) {
    let key = DataKey::Agent(agent.id);
    env.storage().persistent().set(&key, agent);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_BUMP_LEDGERS, PERSISTENT_BUMP_LEDGERS);
}

pub fn get_holdings(env: &Env, holder: &Address) -> u64 {
    env.storage()
        .persistent()
        .get(&DataKey::Holdings(holder.clone()))
        .unwrap_or(0)
}

fn set_holdings(env: &Env, holder: &Address, count: u64) {
    let key = DataKey::Holdings(holder.clone());
    if count == 0 {
        env.storage().persistent().remove(&key);
        return;
    }
    env.storage().persistent().set(&key, &count);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_BUMP_LEDGERS, PERSISTENT_BUMP_LEDGERS);
}

pub fn increment_holdings(env: &Env, holder: &Address) -> Result<(), RegistryError> {
    let count = get_holdings(env, holder)
        .checked_add(1)
        .ok_or(RegistryError::ArithmeticOverflow)?;
    set_holdings(env, holder, count);
    Ok(())
}

pub fn decrement_holdings(env: &Env, holder: &Address) -> Result<(), RegistryError> {
    let count = get_holdings(env, holder)
        .checked_sub(1)
        .ok_or(RegistryError::ArithmeticOverflow)?;
    set_holdings(env, holder, count);
    Ok(())
}

pub fn get_total_active(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::TotalActive)
        .unwrap_or(0)
}

pub fn set_total_active(env: &Env, total: u64) {
    env.storage().instance().set(&DataKey::TotalActive, &total);
}
