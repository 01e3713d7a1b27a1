#![cfg(test)]

use super::*;
use soroban_sdk::{
    testutils::{storage::Instance as _, Address as _, Ledger},
    Address, BytesN, Env,
};

fn setup<'a>() -> (Env, AgentRegistryClient<'a>, Address) {
    let env = Env::default();
    env.mock_all_auths();

    let contract_id = env.register(AgentRegistry, ());
    let client = AgentRegistryClient::new(&env, &contract_id);
    let admin = Address::generate(&env);
    client.initialize(&admin);

    (env, client, admin)
}

fn metadata(env: &Env, seed: u8) -> BytesN<32> {
    BytesN::from_array(env, &[seed; 32])
}

#[test]
fn test_initialize_twice_fails() {
    let (_, client, admin) = setup();

    let result = client.try_initialize(&admin);
    assert_eq!(result, Err(Ok(RegistryError::AlreadyInitialized)));
}

#[test]
fn test_register_before_initialize_fails() {
    let env = Env::default();
    env.mock_all_auths();
    let client = AgentRegistryClient::new(&env, &env.register(AgentRegistry, ()));
    let owner = Address::generate(&env);

    let result = client.try_register_agent(&owner, &metadata(&env, 1));
    assert_eq!(result, Err(Ok(RegistryError::NotInitialized)));
}

#[test]
fn test_register_agents_accumulates_weight() {
    let (env, client, admin) = setup();
    let owner = Address::generate(&env);
    let other = Address::generate(&env);

    let first = client.register_agent(&owner, &metadata(&env, 1));
    assert_eq!(env.auths()[0].0, admin);
    let second = client.register_agent(&owner, &metadata(&env, 2));
    client.register_agent(&other, &metadata(&env, 3));

    assert_eq!(first, 1);
    assert_eq!(second, 2);
    assert_eq!(client.weight_of(&owner), 2);
    assert_eq!(client.weight_of(&other), 1);
    assert_eq!(client.total_weight_supply(), 3);

    let agent = client.get_agent(&first);
    assert_eq!(agent.owner, owner);
    assert_eq!(agent.status, AgentStatus::Active);
    assert_eq!(agent.metadata_hash, metadata(&env, 1));
}

#[test]
fn test_transfer_moves_weight() {
    let (env, client, _) = setup();
    let owner = Address::generate(&env);
    let buyer = Address::generate(&env);
    let agent_id = client.register_agent(&owner, &metadata(&env, 1));

    client.transfer_agent(&agent_id, &buyer);
    assert_eq!(env.auths()[0].0, owner);

    assert_eq!(client.weight_of(&owner), 0);
    assert_eq!(client.weight_of(&buyer), 1);
    assert_eq!(client.total_weight_supply(), 1);
    assert_eq!(client.get_agent(&agent_id).owner, buyer);
}

#[test]
fn test_transfer_to_self_fails() {
    let (env, client, _) = setup();
    let owner = Address::generate(&env);
    let agent_id = client.register_agent(&owner, &metadata(&env, 1));

    let result = client.try_transfer_agent(&agent_id, &owner);
    assert_eq!(result, Err(Ok(RegistryError::SelfTransfer)));
}

#[test]
fn test_terminate_releases_weight() {
    let (env, client, _) = setup();
    let owner = Address::generate(&env);
    let agent_id = client.register_agent(&owner, &metadata(&env, 1));
    client.register_agent(&owner, &metadata(&env, 2));

    client.terminate_agent(&owner, &agent_id);

    assert_eq!(client.weight_of(&owner), 1);
    assert_eq!(client.total_weight_supply(), 1);
    assert_eq!(client.get_agent(&agent_id).status, AgentStatus::Terminated);

    let result = client.try_terminate_agent(&owner, &agent_id);
    assert_eq!(result, Err(Ok(RegistryError::AgentTerminated)));

    let buyer = Address::generate(&env);
    let result = client.try_transfer_agent(&agent_id, &buyer);
    assert_eq!(result, Err(Ok(RegistryError::AgentTerminated)));
}

#[test]
fn test_terminate_by_admin_and_stranger() {
    let (env, client, admin) = setup();
    let owner = Address::generate(&env);
    let stranger = Address::generate(&env);
    let agent_id = client.register_agent(&owner, &metadata(&env, 1));

    let result = client.try_terminate_agent(&stranger, &agent_id);
    assert_eq!(result, Err(Ok(RegistryError::Unauthorized)));
    assert_eq!(client.weight_of(&owner), 1);

    client.terminate_agent(&admin, &agent_id);
    assert_eq!(client.total_weight_supply(), 0);
}

#[test]
fn test_unknown_agent() {
    let (env, client, _) = setup();
    let someone = Address::generate(&env);

    assert_eq!(client.try_get_agent(&7), Err(Ok(RegistryError::AgentNotFound)));
    assert_eq!(
        client.try_transfer_agent(&7, &someone),
        Err(Ok(RegistryError::AgentNotFound))
    );
    assert_eq!(client.weight_of(&someone), 0);
}

#[test]
fn test_set_admin() {
    let (env, client, admin) = setup();
    let governor = Address::generate(&env);

    client.set_admin(&governor);
    assert_eq!(env.auths()[0].0, admin);

    let owner = Address::generate(&env);
    client.register_agent(&owner, &metadata(&env, 9));
    assert_eq!(env.auths()[0].0, governor);
}

fn instance_ttl(env: &Env, client: &AgentRegistryClient) -> u32 {
    env.as_contract(&client.address, || env.storage().instance().get_ttl())
}

#[test]
fn test_weight_changes_extend_instance_ttl() {
    let (env, client, _) = setup();
    let owner = Address::generate(&env);
    let buyer = Address::generate(&env);
    let agent_id = client.register_agent(&owner, &metadata(&env, 1));
    client.register_agent(&owner, &metadata(&env, 2));

    let sequence = env.ledger().sequence();
    env.ledger().set_sequence_number(sequence + 1_000);
    let before = instance_ttl(&env, &client);
    client.transfer_agent(&agent_id, &buyer);
    assert!(instance_ttl(&env, &client) > before);

    env.ledger().set_sequence_number(sequence + 2_000);
    let before = instance_ttl(&env, &client);
    client.terminate_agent(&buyer, &agent_id);
    assert!(instance_ttl(&env, &client) > before);
    assert_eq!(client.total_weight_supply(), 1);
}
