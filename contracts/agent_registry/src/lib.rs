#![no_std]

//! # Agent Registry
//!
//! Stores AgentGov agent records and answers the governor's weight queries:
//! an address's voting weight is the number of active agents it owns.

mod error;
mod events;
mod storage;

use soroban_sdk::{contract, contractimpl, Address, BytesN, Env};

pub use error::RegistryError;
pub use storage::{AgentRecord, AgentStatus};

#[contract]
pub struct AgentRegistry;

#[contractimpl]
impl AgentRegistry {
    /// Initialize the registry with the address allowed to register agents
    pub fn initialize(env: Env, admin: Address) -> Result<(), RegistryError> {
        if storage::get_admin(&env).is_ok() {
            return Err(RegistryError::AlreadyInitialized);
        }

        admin.require_auth();
        storage::set_admin(&env, &admin);
        storage::bump_instance(&env);

        events::emit_initialized(&env, &admin, env.ledger().timestamp());
        Ok(())
    }

    /// Hand registry administration to another address (e.g. the governor)
    pub fn set_admin(env: Env, new_admin: Address) -> Result<(), RegistryError> {
        let admin = storage::get_admin(&env)?;
        admin.require_auth();

        storage::set_admin(&env, &new_admin);
        storage::bump_instance(&env);

        events::emit_admin_changed(&env, &admin, &new_admin);
        Ok(())
    }

    /// Register a new agent owned by `owner` and return its id
    pub fn register_agent(
        env: Env,
        owner: Address,
        metadata_hash: BytesN<32>,
    ) -> Result<u64, RegistryError> {
        let admin = storage::get_admin(&env)?;
        admin.require_auth();

        let agent_id = storage::next_agent_id(&env)?;
        let agent = AgentRecord {
            id: agent_id,
            owner: owner.clone(),
            metadata_hash: metadata_hash.clone(),
            registered_at: env.ledger().timestamp(),
            status: AgentStatus::Active,
        };
        storage::set_agent(&env, &agent);
        storage::increment_holdings(&env, &owner)?;

        let total = storage::get_total_active(&env)
            .checked_add(1)
            .ok_or(RegistryError::ArithmeticOverflow)?;
        storage::set_total_active(&env, total);
        storage::bump_instance(&env);

        events::emit_agent_registered(&env, agent_id, &owner, &metadata_hash);
        Ok(agent_id)
    }

    /// Move an active agent to a new owner
    pub fn transfer_agent(env: Env, agent_id: u64, to: Address) -> Result<(), RegistryError> {
        let mut agent = storage::get_agent(&env, agent_id)?;
        agent.owner.require_auth();

        if agent.status == AgentStatus::Terminated {
            return Err(RegistryError::AgentTerminated);
        }
        if agent.owner == to {
            return Err(RegistryError::SelfTransfer);
        }

        let from = agent.owner.clone();
        storage::decrement_holdings(&env, &from)?;
        storage::increment_holdings(&env, &to)?;

        agent.owner = to.clone();
        storage::set_agent(&env, &agent);
        storage::bump_instance(&env);

        events::emit_agent_transferred(&env, agent_id, &from, &to);
        Ok(())
    }

    /// Permanently retire an agent (owner or admin). Its weight is released.
    pub fn terminate_agent(env: Env, caller: Address, agent_id: u64) -> Result<(), RegistryError> {
        caller.require_auth();

        let mut agent = storage::get_agent(&env, agent_id)?;
        let admin = storage::get_admin(&env)?;
        if caller != agent.owner && caller != admin {
            return Err(RegistryError::Unauthorized);
        }
        if agent.status == AgentStatus::Terminated {
            return Err(RegistryError::AgentTerminated);
        }

        storage::decrement_holdings(&env, &agent.owner)?;
        let total = storage::get_total_active(&env)
            .checked_sub(1)
            .ok_or(RegistryError::ArithmeticOverflow)?;
        storage::set_total_active(&env, total);

        agent.status = AgentStatus::Terminated;
        storage::set_agent(&env, &agent);
        storage::bump_instance(&env);

        events::emit_agent_terminated(&env, agent_id, &caller);
        Ok(())
    }

    pub fn get_agent(env: Env, agent_id: u64) -> Result<AgentRecord, RegistryError> {
        storage::get_agent(&env, agent_id)
    }

    /// Number of active agents owned by `holder`
    pub fn weight_of(env: Env, holder: Address) -> u64 {
        storage::get_holdings(&env, &holder)
    }

    /// Number of active agents in the registry
    pub fn total_weight_supply(env: Env) -> u64 {
        storage::get_total_active(&env)
    }
}

mod test;
