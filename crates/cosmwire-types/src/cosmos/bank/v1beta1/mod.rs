//! `cosmos.bank.v1beta1`: balances, denom metadata, send messages and
//! bank queries

mod bank;
mod query;
mod tx;

pub use bank::*;
pub use query::*;
pub use tx::*;

use cosmwire_codec::TypeRegistry;

pub(crate) fn register(registry: &TypeRegistry) {
    bank::register(registry);
    tx::register(registry);
    query::register(registry);
}
