//! `cosmos.staking.v1beta1`: validators, delegations, staking messages and
//! staking queries

mod query;
mod staking;
mod tx;

pub use query::*;
pub use staking::*;
pub use tx::*;

use cosmwire_codec::TypeRegistry;

pub(crate) fn register(registry: &TypeRegistry) {
    staking::register(registry);
    tx::register(registry);
    query::register(registry);
}
