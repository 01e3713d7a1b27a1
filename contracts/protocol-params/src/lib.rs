#![no_std]

//! # Protocol Params
//!
//! Versioned key/value store for AgentGov protocol parameters. Every write
//! creates a new version; older versions stay readable.
//!
//! The authority is normally the governor contract, which applies changes by
//! dispatching an approved proposal to `invoke`.

use soroban_sdk::{contract, contractimpl, xdr::FromXdr, Address, Bytes, Env};

mod error;
mod events;
mod storage;
mod types;

pub use error::ParamsError;
pub use types::{ParamChange, ParamKey, ParamValue, Version};

#[contract]
pub struct ProtocolParamsContract;

#[contractimpl]
impl ProtocolParamsContract {
    pub fn init(env: Env, authority: Address) -> Result<(), ParamsError> {
        if storage::has_authority(&env) {
            return Err(ParamsError::AlreadyInitialized);
        }
        storage::set_authority(&env, &authority);
        storage::bump_instance(&env);
        Ok(())
    }

    /// Write a new version of `key` (authority only) and return it
    pub fn set_param(env: Env, key: ParamKey, value: ParamValue) -> Result<Version, ParamsError> {
        let authority = storage::get_authority(&env)?;
        authority.require_auth();

        Self::apply(&env, key, value)
    }

    /// Governance entry point: `payload` is an XDR-encoded [`ParamChange`]
    pub fn invoke(env: Env, payload: Bytes) -> Result<(), ParamsError> {
        let authority = storage::get_authority(&env)?;
        authority.require_auth();

        if payload.is_empty() {
            return Err(ParamsError::InvalidPayload);
        }
        let change =
            ParamChange::from_xdr(&env, &payload).map_err(|_| ParamsError::InvalidPayload)?;

        Self::apply(&env, change.key, change.value)?;
        Ok(())
    }

    pub fn set_authority(env: Env, new_authority: Address) -> Result<(), ParamsError> {
        let authority = storage::get_authority(&env)?;
        authority.require_auth();

        storage::set_authority(&env, &new_authority);
        storage::bump_instance(&env);
        events::emit_authority_changed(&env, &authority, &new_authority);
        Ok(())
    }

    pub fn get_param(env: Env, key: ParamKey, version: Option<Version>) -> Option<ParamValue> {
        let ver = match version {
            Some(v) => v,
            None => storage::get_latest_version(&env, key.clone()),
        };
        storage::get_param(&env, key, ver)
    }

    pub fn get_latest_version(env: Env, key: ParamKey) -> Version {
        storage::get_latest_version(&env, key)
    }

    pub fn authority(env: Env) -> Result<Address, ParamsError> {
        storage::get_authority(&env)
    }
}

impl ProtocolParamsContract {
    fn apply(env: &Env, key: ParamKey, value: ParamValue) -> Result<Version, ParamsError> {
        let new_version = storage::get_latest_version(env, key.clone())
            .checked_add(1)
            .ok_or(ParamsError::VersionOverflow)?;

        storage::set_param(env, key.clone(), new_version, &value);
        storage::set_latest_version(env, key.clone(), new_version);
        storage::bump_instance(env);

        events::emit_param_set(env, &key, new_version, &value);
        Ok(new_version)
    }
}
