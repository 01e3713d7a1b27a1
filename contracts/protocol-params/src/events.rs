use soroban_sdk::{contractevent, Address, Env};

use crate::types::{ParamKey, ParamValue, Version};

#[contractevent(topics = ["ProtocolParams", "SET"])]
struct ParamSet {
    key: ParamKey,
    version: Version,
    value: ParamValue,
}

#[contractevent(topics = ["ProtocolParams", "AUTHORITY"])]
struct AuthorityChanged {
    previous: Address,
    authority: Address,
}

pub fn emit_param_set(env: &Env, key: &ParamKey, version: Version, value: &ParamValue) {
    ParamSet {
        key: key.clone(),
        version,
        value: value.clone(),
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
