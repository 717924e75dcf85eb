//! `cosmos.tx.v1beta1`: transaction envelope, signing documents and the
//! tx service request/response types

mod service;
mod tx;

pub use service::*;
pub use tx::*;

use cosmwire_codec::TypeRegistry;

pub(crate) fn register(registry: &TypeRegistry) {
    tx::register(registry);
    service::register(registry);
}
