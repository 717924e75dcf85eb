//! `cosmos.gov.v1beta1`: proposals, votes, deposits and the legacy
//! governance messages and queries

mod gov;
mod query;
mod tx;

pub use gov::*;
pub use query::*;
pub use tx::*;

use cosmwire_codec::TypeRegistry;

pub(crate) fn register(registry: &TypeRegistry) {
    gov::register(registry);
    tx::register(registry);
    query::register(registry);
}
