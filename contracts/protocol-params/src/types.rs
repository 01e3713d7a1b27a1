use soroban_sdk::{contracttype, Bytes, Symbol};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Authority,
    LatestVersion(Symbol),
    Param(Symbol, u32), // (Key, Version) -> Value
}

/// Governance action payload accepted by `invoke`, XDR-encoded
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParamChange {
    pub key: ParamKey,
    pub value: ParamValue,
}

pub type ParamKey = Symbol;
pub type ParamValue = Bytes;
pub type Version = u32;
