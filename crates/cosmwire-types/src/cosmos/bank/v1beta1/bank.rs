use crate::cosmos::base::v1beta1::Coin;
use cosmwire_codec::{cosmos_message, register_types, TypeRegistry};

/// Params defines the parameters for the bank module.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Params {
    /// Deprecated: Use of SendEnabled in params is deprecated.
    /// For genesis, use the newly added send_enabled field in the genesis object.
    /// Storage, lookup, and manipulation of this information is now in the keeper.
    ///
    /// As of cosmos-sdk 0.47, this only exists for backwards compatibility of genesis files.
    #[prost(message, repeated, tag = "1")]
    pub send_enabled: Vec<SendEnabled>,
    #[prost(bool, tag = "2")]
    pub default_send_enabled: bool,
}

/// SendEnabled maps coin denom to a send_enabled status (whether a denom is
/// sendable).
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SendEnabled {
    #[prost(string, tag = "1")]
    pub denom: String,
    #[prost(bool, tag = "2")]
    pub enabled: bool,
}

/// Input models transaction input.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Input {
    #[prost(string, tag = "1")]
    pub address: String,
    #[prost(message, repeated, tag = "2")]
    pub coins: Vec<Coin>,
}

/// Output models transaction outputs.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Output {
    #[prost(string, tag = "1")]
    pub address: String,
    #[prost(message, repeated, tag = "2")]
    pub coins: Vec<Coin>,
}

/// DenomUnit represents a struct that describes a given
/// denomination unit of the basic token.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DenomUnit {
    /// denom represents the string name of the given denom unit (e.g uatom).
    #[prost(string, tag = "1")]
    pub denom: String,
    /// exponent represents power of 10 exponent that one must
    /// raise the base_denom to in order to equal the given DenomUnit's denom
    /// 1 denom = 10^exponent base_denom
    /// (e.g. with a base_denom of uatom, one can create a DenomUnit of 'atom' with
    /// exponent = 6, thus: 1 atom = 10^6 uatom).
    #[prost(uint32, tag = "2")]
    pub exponent: u32,
    /// aliases is a list of string aliases for the given denom
    #[prost(string, repeated, tag = "3")]
    pub aliases: Vec<String>,
}

/// Metadata represents a struct that describes
/// a basic token.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Metadata {
    #[prost(string, tag = "1")]
    pub description: String,
    /// denom_units represents the list of DenomUnit's for a given coin
    #[prost(message, repeated, tag = "2")]
    pub denom_units: Vec<DenomUnit>,
    /// base represents the base denom (should be the DenomUnit with exponent = 0).
    #[prost(string, tag = "3")]
    pub base: String,
    /// display indicates the suggested denom that should be
    /// displayed in clients.
    #[prost(string, tag = "4")]
    pub display: String,
    /// name defines the name of the token (eg: Cosmos Atom)
    #[prost(string, tag = "5")]
    pub name: String,
    /// symbol is the token symbol usually shown on exchanges (eg: ATOM). This can
    /// be the same as the display.
    #[prost(string, tag = "6")]
    pub symbol: String,
    /// URI to a document (on or off-chain) that contains additional information. Optional.
    #[prost(string, tag = "7")]
    pub uri: String,
    /// URIHash is a sha256 hash of a document pointed by URI. It's used to verify that
    /// the document didn't change. Optional.
    #[prost(string, tag = "8")]
    pub uri_hash: String,
}

impl Metadata {
    /// The unit named by `display`, if it is listed
    pub fn display_unit(&self) -> Option<&DenomUnit> {
        self.denom_units.iter().find(|unit| unit.denom == self.display)
    }
}

cosmos_message!(Params => ParamsAmino, ParamsPartial;
    "/cosmos.bank.v1beta1.Params", "cosmos-sdk/x/bank/Params" {
        send_enabled: messages(SendEnabled),
        default_send_enabled: bool,
    });

cosmos_message!(SendEnabled => SendEnabledAmino, SendEnabledPartial;
    "/cosmos.bank.v1beta1.SendEnabled", "cosmos-sdk/SendEnabled" {
        denom: string,
        enabled: bool,
    });

cosmos_message!(Input => InputAmino, InputPartial;
    "/cosmos.bank.v1beta1.Input", "cosmos-sdk/Input" {
        address: string,
        coins: messages(Coin),
    });

cosmos_message!(Output => OutputAmino, OutputPartial;
    "/cosmos.bank.v1beta1.Output", "cosmos-sdk/Output" {
        address: string,
        coins: messages(Coin),
    });

cosmos_message!(DenomUnit => DenomUnitAmino, DenomUnitPartial;
    "/cosmos.bank.v1beta1.DenomUnit", "cosmos-sdk/DenomUnit" {
        denom: string,
        exponent: uint32,
        aliases: strings,
    });

cosmos_message!(Metadata => MetadataAmino, MetadataPartial;
    "/cosmos.bank.v1beta1.Metadata", "cosmos-sdk/Metadata" {
        description: string,
        denom_units: messages(DenomUnit),
        base: string,
        display: string,
        name: string,
        symbol: string,
        uri: string,
        uri_hash: string,
    });

pub(super) fn register(registry: &TypeRegistry) {
    register_types!(
        registry,
        [Params, SendEnabled, Input, Output, DenomUnit, Metadata]
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwire_codec::AminoConvert;

    fn atom() -> Metadata {
        Metadata {
            description: "The native staking token".to_string(),
            denom_units: vec![
                DenomUnit {
                    denom: "uatom".to_string(),
                    exponent: 0,
                    aliases: vec!["microatom".to_string()],
                },
                DenomUnit {
                    denom: "atom".to_string(),
                    exponent: 6,
                    aliases: vec![],
                },
            ],
            base: "uatom".to_string(),
            display: "atom".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_display_unit() {
        assert_eq!(atom().display_unit().map(|u| u.exponent), Some(6));
        assert_eq!(Metadata::default().display_unit(), None);
    }

    #[test]
    fn test_metadata_amino() {
        let json = atom().to_amino_json().unwrap();
        assert_eq!(json["denom_units"][0], serde_json::json!({
            "denom": "uatom",
            "aliases": ["microatom"],
        }));
        assert_eq!(json["denom_units"][1]["exponent"], serde_json::json!(6));
        assert!(json.get("uri").is_none());
        assert_eq!(Metadata::from_amino_json(json).unwrap(), atom());
    }
}
