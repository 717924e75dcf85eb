//! `cosmos.auth.v1beta1`: accounts, module accounts and their queries

mod auth;
mod query;

pub use auth::*;
pub use query::*;

use cosmwire_codec::TypeRegistry;

pub(crate) fn register(registry: &TypeRegistry) {
    auth::register(registry);
    query::register(registry);
}
