//! Cosmos SDK message types
//!
//! One module per protobuf package. Every message derives (or hand-writes)
//! `prost::Message`, binds its type URL, and carries generated Amino and
//! partial companions. Call [`init`] once at startup so `Any` values can be
//! resolved through the global registry.

use cosmwire_codec::{TypeRegistry, GLOBAL_TYPE_REGISTRY};
use tracing::debug;

/// CometBFT types referenced by Cosmos SDK messages
pub mod tendermint {
    pub mod abci;
    pub mod types;
    pub mod version;
}

/// Cosmos SDK types
pub mod cosmos {
    pub mod base {
        pub mod v1beta1;

        pub mod abci {
            pub mod v1beta1;
        }

        pub mod query {
            pub mod v1beta1;
        }
    }

    pub mod crypto {
        pub mod ed25519;
        pub mod multisig;
        pub mod secp256k1;
    }

    pub mod tx {
        pub mod signing {
            pub mod v1beta1;
        }

        pub mod v1beta1;
    }

    pub mod auth {
        pub mod v1beta1;
    }

    pub mod bank {
        pub mod v1beta1;
    }

    pub mod staking {
        pub mod v1beta1;
    }

    pub mod gov {
        pub mod v1beta1;
    }
}

pub use cosmos::base::v1beta1::{Coin, DecCoin};

/// Register every message type of this crate
///
/// Modules are registered in a fixed order (tendermint, base, crypto, tx,
/// auth, bank, staking, gov); where several packages share an amino name
/// the earlier package keeps it.
pub fn register_all(registry: &TypeRegistry) {
    tendermint::abci::register(registry);
    tendermint::types::register(registry);
    tendermint::version::register(registry);
    cosmos::base::v1beta1::register(registry);
    cosmos::base::abci::v1beta1::register(registry);
    cosmos::base::query::v1beta1::register(registry);
    cosmos::crypto::ed25519::register(registry);
    cosmos::crypto::secp256k1::register(registry);
    cosmos::crypto::multisig::register(registry);
    cosmos::tx::v1beta1::register(registry);
    cosmos::auth::v1beta1::register(registry);
    cosmos::bank::v1beta1::register(registry);
    cosmos::staking::v1beta1::register(registry);
    cosmos::gov::v1beta1::register(registry);
    debug!(types = registry.len(), "message types registered");
}

/// Populate the global registry; calling it again is a no-op
pub fn init() {
    register_all(&GLOBAL_TYPE_REGISTRY);
}
