use soroban_sdk::{Address, Env};

use crate::error::ParamsError;
use crate::types::{DataKey, ParamKey, ParamValue, Version};

pub const PERSISTENT_BUMP_LEDGERS: u32 = 518_400;
pub const INSTANCE_BUMP_LEDGERS: u32 = 120_960;

pub fn has_authority(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Authority)
}

pub fn get_authority(env: &Env) -> Result<Address, ParamsError> {
    env.storage()
        .instance()
        .get(&DataKey::Authority)
        .ok_or(ParamsError::NotInitialized)
}

pub fn set_authority(env: &Env, authority: &Address) {
    env.storage().instance().set(&DataKey::Authority, authority);
}

pub fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_BUMP_LEDGERS, INSTANCE_BUMP_LEDGERS);
}

pub fn get_latest_version(env: &Env, key: ParamKey) -> Version {
    env.storage().persistent().get(&DataKey::LatestVersion(key)).unwrap_or(0)
}

pub fn set_latest_version(env: &Env, key: ParamKey, version: Version) {
    let data_key = DataKey::LatestVersion(key);
    env.storage().persistent().set(&data_key, &version);
    env.storage()
        .persistent()
        .extend_ttl(&data_key, PERSISTENT_BUMP_LEDGERS, PERSISTENT_BUMP_LEDGERS);
}

pub fn get_param(env: &Env, key: ParamKey, version: Version) -> Option<ParamValue> {
    env.storage().persistent().get(&DataKey::Param(key, version))
}

pub fn set_param(env: &Env, key: ParamKey, version: Version, value: &ParamValue) {
    let data_key = DataKey::Param(key, version);
    env.storage().persistent().set(&data_key, value);
    env.storage()
        .persistent()
        .extend_ttl(&data_key, PERSISTENT_BUMP_LEDGERS, PERSISTENT_BUMP_LEDGERS);
}
