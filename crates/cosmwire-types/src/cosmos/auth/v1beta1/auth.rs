use cosmwire_codec::{cosmos_message, register_types, Any, TypeRegistry};

/// BaseAccount defines a base account type. It contains all the necessary fields
/// for basic account functionality. Any custom account type should extend this
/// type for additional functionality (e.g. vesting).
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct BaseAccount {
    #[prost(string, tag = "1")]
    pub address: String,
    #[prost(message, optional, tag = "2")]
    pub pub_key: Option<Any>,
    #[prost(uint64, tag = "3")]
    pub account_number: u64,
    #[prost(uint64, tag = "4")]
    pub sequence: u64,
}

/// ModuleAccount defines an account for modules that holds coins on a pool.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ModuleAccount {
    #[prost(message, optional, tag = "1")]
    pub base_account: Option<BaseAccount>,
    #[prost(string, tag = "2")]
    pub name: String,
    #[prost(string, repeated, tag = "3")]
    pub permissions: Vec<String>,
}

/// ModuleCredential represents a unclaimable pubkey for base accounts controlled by modules.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ModuleCredential {
    /// module_name is the name of the module used for address derivation (passed into address.Module).
    #[prost(string, tag = "1")]
    pub module_name: String,
    /// derivation_keys is for deriving a module account address (passed into address.Module)
    /// adding more keys creates sub-account addresses (passed into address.Derive)
    #[prost(bytes = "vec", repeated, tag = "2")]
    pub derivation_keys: Vec<Vec<u8>>,
}

/// Params defines the parameters for the auth module.
#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct Params {
    #[prost(uint64, tag = "1")]
    pub max_memo_characters: u64,
    #[prost(uint64, tag = "2")]
    pub tx_sig_limit: u64,
    #[prost(uint64, tag = "3")]
    pub tx_size_cost_per_byte: u64,
    #[prost(uint64, tag = "4")]
    pub sig_verify_cost_ed25519: u64,
    #[prost(uint64, tag = "5")]
    pub sig_verify_cost_secp256k1: u64,
}

impl BaseAccount {
    /// The public key, unpacked from its `Any` when it is a secp256k1 key
    pub fn secp256k1_pub_key(
        &self,
    ) -> cosmwire_codec::Result<Option<crate::cosmos::crypto::secp256k1::PubKey>> {
        self.pub_key
            .as_ref()
            .map(|any| any.unpack::<crate::cosmos::crypto::secp256k1::PubKey>())
            .transpose()
    }
}

cosmos_message!(BaseAccount => BaseAccountAmino, BaseAccountPartial;
    "/cosmos.auth.v1beta1.BaseAccount", "cosmos-sdk/BaseAccount" {
        address: string,
        pub_key: any,
        account_number: uint64,
        sequence: uint64,
    });

cosmos_message!(ModuleAccount => ModuleAccountAmino, ModuleAccountPartial;
    "/cosmos.auth.v1beta1.ModuleAccount", "cosmos-sdk/ModuleAccount" {
        base_account: message(BaseAccount),
        name: string,
        permissions: strings,
    });

cosmos_message!(ModuleCredential => ModuleCredentialAmino, ModuleCredentialPartial;
    "/cosmos.auth.v1beta1.ModuleCredential", "cosmos-sdk/GroupAccountCredential" {
        module_name: string,
        derivation_keys: bytes_list,
    });

cosmos_message!(Params => ParamsAmino, ParamsPartial;
    "/cosmos.auth.v1beta1.Params", "cosmos-sdk/x/auth/Params" {
        max_memo_characters: uint64,
        tx_sig_limit: uint64,
        tx_size_cost_per_byte: uint64,
        sig_verify_cost_ed25519: uint64,
        sig_verify_cost_secp256k1: uint64,
    });

pub(super) fn register(registry: &TypeRegistry) {
    register_types!(registry, [BaseAccount, ModuleAccount, ModuleCredential, Params]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cosmos::crypto::secp256k1::PubKey;
    use cosmwire_codec::{AminoConvert, MessageExt};
    use prost::Message;

    #[test]
    fn test_base_account_pub_key() {
        let key = PubKey {
            key: vec![2; 33],
        };
        let account = BaseAccount {
            address: "cosmos1abc".to_string(),
            pub_key: Some(key.to_any()),
            account_number: 7,
            sequence: 3,
        };
        let decoded = BaseAccount::decode(account.encode_to_vec().as_slice()).unwrap();
        assert_eq!(decoded.secp256k1_pub_key().unwrap(), Some(key));
        assert_eq!(BaseAccount::default().secp256k1_pub_key().unwrap(), None);
    }

    #[test]
    fn test_params_amino_strings() {
        let params = Params {
            max_memo_characters: 256,
            tx_sig_limit: 7,
            tx_size_cost_per_byte: 10,
            sig_verify_cost_ed25519: 590,
            sig_verify_cost_secp256k1: u64::MAX,
        };
        let msg = params.to_amino_msg().unwrap();
        assert_eq!(msg.r#type, "cosmos-sdk/x/auth/Params");
        assert_eq!(
            msg.value["sig_verify_cost_secp256k1"],
            serde_json::json!("18446744073709551615")
        );
        assert_eq!(Params::from_amino_msg(msg).unwrap(), params);
    }
}
