//! Interfaces of the contracts the governor talks to.
//!
//! Both are consumed through generated clients only; the governor never
//! caches anything they return.

use soroban_sdk::{contractclient, Address, Bytes, Env};

/// Answers how much decision weight an address currently holds.
#[contractclient(name = "WeightSourceClient")]
pub trait WeightSource {
    fn weight_of(env: Env, holder: Address) -> u64;
    fn total_weight_supply(env: Env) -> u64;
}

/// A contract that accepts governance actions.
///
/// `payload` is opaque to the governor. Any contract error or trap raised by
/// `invoke` counts as a failed dispatch.
#[contractclient(name = "ExecutionTargetClient")]
pub trait ExecutionTarget {
    fn invoke(env: Env, payload: Bytes);
}
