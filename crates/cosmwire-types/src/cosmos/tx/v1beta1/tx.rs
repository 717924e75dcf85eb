use crate::cosmos::base::v1beta1::Coin;
use crate::cosmos::crypto::multisig::v1beta1::CompactBitArray;
use crate::cosmos::tx::signing::v1beta1::SignMode;
use cosmwire_codec::{
    cosmos_message, register_types, AminoConvert, Any, FromPartial, MessageExt, Timestamp,
    TypeRegistry,
};
use serde::{Deserialize, Serialize};

/// Tx is the standard type used for broadcasting transactions.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Tx {
    /// body is the processable content of the transaction
    #[prost(message, optional, tag = "1")]
    pub body: Option<TxBody>,
    /// auth_info is the authorization related content of the transaction,
    /// specifically signers, signer modes and fee
    #[prost(message, optional, tag = "2")]
    pub auth_info: Option<AuthInfo>,
    /// signatures is a list of signatures that matches the length and order of
    /// AuthInfo's signer_infos to allow connecting signature meta information like
    /// public key and signing mode by position.
    #[prost(bytes = "vec", repeated, tag = "3")]
    pub signatures: Vec<Vec<u8>>,
}

/// TxRaw is a variant of Tx that pins the signer's exact binary representation
/// of body and auth_info. This is used for signing, broadcasting and
/// verification. The binary `serialize(tx: TxRaw)` is stored in Tendermint and
/// the hash `sha256(serialize(tx: TxRaw))` becomes the "txhash", commonly used
/// as the transaction ID.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TxRaw {
    /// body_bytes is a protobuf serialization of a TxBody that matches the
    /// representation in SignDoc.
    #[prost(bytes = "vec", tag = "1")]
    pub body_bytes: Vec<u8>,
    /// auth_info_bytes is a protobuf serialization of an AuthInfo that matches the
    /// representation in SignDoc.
    #[prost(bytes = "vec", tag = "2")]
    pub auth_info_bytes: Vec<u8>,
    /// signatures is a list of signatures that matches the length and order of
    /// AuthInfo's signer_infos to allow connecting signature meta information like
    /// public key and signing mode by position.
    #[prost(bytes = "vec", repeated, tag = "3")]
    pub signatures: Vec<Vec<u8>>,
}

/// SignDoc is the type used for generating sign bytes for SIGN_MODE_DIRECT.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SignDoc {
    #[prost(bytes = "vec", tag = "1")]
    pub body_bytes: Vec<u8>,
    #[prost(bytes = "vec", tag = "2")]
    pub auth_info_bytes: Vec<u8>,
    /// chain_id is the unique identifier of the chain this transaction targets.
    /// It prevents signed transactions from being used on another chain by an
    /// attacker
    #[prost(string, tag = "3")]
    pub chain_id: String,
    /// account_number is the account number of the account in state
    #[prost(uint64, tag = "4")]
    pub account_number: u64,
}

/// SignDocDirectAux is the type used for generating sign bytes for
/// SIGN_MODE_DIRECT_AUX.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SignDocDirectAux {
    #[prost(bytes = "vec", tag = "1")]
    pub body_bytes: Vec<u8>,
    /// public_key is the public key of the signing account.
    #[prost(message, optional, tag = "2")]
    pub public_key: Option<Any>,
    #[prost(string, tag = "3")]
    pub chain_id: String,
    #[prost(uint64, tag = "4")]
    pub account_number: u64,
    /// sequence is the sequence number of the signing account.
    #[prost(uint64, tag = "5")]
    pub sequence: u64,
    /// tips have been deprecated and should not be used
    #[prost(message, optional, tag = "6")]
    pub tip: Option<Tip>,
}

/// TxBody is the body of a transaction that all signers sign over.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TxBody {
    /// messages is a list of messages to be executed. The required signers of
    /// those messages define the number and order of elements in AuthInfo's
    /// signer_infos and Tx's signatures. Each required signer address is added to
    /// the list only the first time it occurs.
    #[prost(message, repeated, tag = "1")]
    pub messages: Vec<Any>,
    /// memo is any arbitrary note/comment to be added to the transaction.
    #[prost(string, tag = "2")]
    pub memo: String,
    /// timeout_height is the block height after which this transaction will not
    /// be processed by the chain.
    #[prost(uint64, tag = "3")]
    pub timeout_height: u64,
    /// unordered, when set to true, indicates that the transaction signer(s)
    /// intend for the transaction to be evaluated and executed in an un-ordered
    /// fashion.
    #[prost(bool, tag = "4")]
    pub unordered: bool,
    /// timeout_timestamp is the block time after which this transaction will not
    /// be processed by the chain.
    #[prost(message, optional, tag = "5")]
    pub timeout_timestamp: Option<Timestamp>,
    /// extension_options are arbitrary options that can be added by chains
    /// when the default options are not sufficient.
    #[prost(message, repeated, tag = "1023")]
    pub extension_options: Vec<Any>,
    /// extension_options are arbitrary options that can be added by chains
    /// when the default options are not sufficient. If any of these are present
    /// and can't be handled, they will be ignored
    #[prost(message, repeated, tag = "2047")]
    pub non_critical_extension_options: Vec<Any>,
}

/// AuthInfo describes the fee and signer modes that are used to sign a
/// transaction.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AuthInfo {
    /// signer_infos defines the signing modes for the required signers. The number
    /// and order of elements must match the required signers from TxBody's
    /// messages. The first element is the primary signer and the one which pays
    /// the fee.
    #[prost(message, repeated, tag = "1")]
    pub signer_infos: Vec<SignerInfo>,
    /// Fee is the fee and gas limit for the transaction. The first signer is the
    /// primary signer and the one which pays the fee.
    #[prost(message, optional, tag = "2")]
    pub fee: Option<Fee>,
    /// Tip is the optional tip used for transactions fees paid in another denom.
    #[prost(message, optional, tag = "3")]
    pub tip: Option<Tip>,
}

/// SignerInfo describes the public key and signing mode of a single top-level
/// signer.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SignerInfo {
    /// public_key is the public key of the signer. It is optional for accounts
    /// that already exist in state. If unset, the verifier can use the required \
    /// signer address for this position and lookup the public key.
    #[prost(message, optional, tag = "1")]
    pub public_key: Option<Any>,
    /// mode_info describes the signing mode of the signer and is a nested
    /// structure to support nested multisig pubkey's
    #[prost(message, optional, tag = "2")]
    pub mode_info: Option<ModeInfo>,
    /// sequence is the sequence of the account, which describes the
    /// number of committed transactions signed by a given address. It is used to
    /// prevent replay attacks.
    #[prost(uint64, tag = "3")]
    pub sequence: u64,
}

/// ModeInfo describes the signing mode of a single or nested multisig signer.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ModeInfo {
    /// sum is the oneof that specifies whether this represents a single or nested
    /// multisig signer
    #[prost(oneof = "mode_info::Sum", tags = "1, 2")]
    pub sum: Option<mode_info::Sum>,
}

/// Nested message and enum types in `ModeInfo`.
pub mod mode_info {
    use super::{CompactBitArray, ModeInfo, SignMode};
    use cosmwire_codec::cosmos_message;

    /// Single is the mode info for a single signer. It is structured as a message
    /// to allow for additional fields such as locale for SIGN_MODE_TEXTUAL in the
    /// future
    #[derive(Clone, Copy, PartialEq, ::prost::Message)]
    pub struct Single {
        /// mode is the signing mode of the single signer
        #[prost(enumeration = "SignMode", tag = "1")]
        pub mode: i32,
    }

    /// Multi is the mode info for a multisig public key
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Multi {
        /// bitarray specifies which keys within the multisig are signing
        #[prost(message, optional, tag = "1")]
        pub bitarray: Option<CompactBitArray>,
        /// mode_infos is the corresponding modes of the signers of the multisig
        /// which could include nested multisig public keys
        #[prost(message, repeated, tag = "2")]
        pub mode_infos: Vec<ModeInfo>,
    }

    /// sum is the oneof that specifies whether this represents a single or nested
    /// multisig signer
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Sum {
        /// single represents a single signer
        #[prost(message, tag = "1")]
        Single(Single),
        /// multi represents a nested multisig signer
        #[prost(message, tag = "2")]
        Multi(Multi),
    }

    cosmos_message!(Single => SingleAmino, SinglePartial;
        "/cosmos.tx.v1beta1.ModeInfo.Single", "cosmos-sdk/Single" {
            mode: enumeration(SignMode),
        });

    cosmos_message!(Multi => MultiAmino, MultiPartial;
        "/cosmos.tx.v1beta1.ModeInfo.Multi", "cosmos-sdk/Multi" {
            bitarray: message(CompactBitArray),
            mode_infos: messages(ModeInfo),
        });
}

impl ModeInfo {
    pub fn single(mode: SignMode) -> Self {
        Self {
            sum: Some(mode_info::Sum::Single(mode_info::Single { mode: mode as i32 })),
        }
    }

    pub fn multi(bitarray: CompactBitArray, mode_infos: Vec<ModeInfo>) -> Self {
        Self {
            sum: Some(mode_info::Sum::Multi(mode_info::Multi {
                bitarray: Some(bitarray),
                mode_infos,
            })),
        }
    }
}

impl MessageExt for ModeInfo {
    const TYPE_URL: &'static str = "/cosmos.tx.v1beta1.ModeInfo";
}

/// Amino JSON form of [`ModeInfo`]; at most one of the two keys is present
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModeInfoAmino {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub single: Option<mode_info::SingleAmino>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multi: Option<mode_info::MultiAmino>,
}

impl AminoConvert for ModeInfo {
    type Amino = ModeInfoAmino;
    const AMINO_TYPE: &'static str = "cosmos-sdk/ModeInfo";

    fn to_amino(&self) -> cosmwire_codec::Result<ModeInfoAmino> {
        Ok(match &self.sum {
            Some(mode_info::Sum::Single(single)) => ModeInfoAmino {
                single: Some(single.to_amino()?),
                multi: None,
            },
            Some(mode_info::Sum::Multi(multi)) => ModeInfoAmino {
                single: None,
                multi: Some(multi.to_amino()?),
            },
            None => ModeInfoAmino::default(),
        })
    }

    fn from_amino(amino: ModeInfoAmino) -> cosmwire_codec::Result<Self> {
        let sum = match (amino.single, amino.multi) {
            (Some(single), _) => Some(mode_info::Sum::Single(mode_info::Single::from_amino(
                single,
            )?)),
            (None, Some(multi)) => Some(mode_info::Sum::Multi(mode_info::Multi::from_amino(
                multi,
            )?)),
            (None, None) => None,
        };
        Ok(Self { sum })
    }
}

/// Partially specified [`ModeInfo`]; `single` wins when both are given
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ModeInfoPartial {
    pub single: Option<mode_info::SinglePartial>,
    pub multi: Option<mode_info::MultiPartial>,
}

impl FromPartial for ModeInfo {
    type Partial = ModeInfoPartial;

    fn from_partial(partial: ModeInfoPartial) -> Self {
        let sum = match (partial.single, partial.multi) {
            (Some(single), _) => Some(mode_info::Sum::Single(mode_info::Single::from_partial(
                single,
            ))),
            (None, Some(multi)) => Some(mode_info::Sum::Multi(mode_info::Multi::from_partial(
                multi,
            ))),
            (None, None) => None,
        };
        Self { sum }
    }
}

/// Fee includes the amount of coins paid in fees and the maximum
/// gas to be used by the transaction. The ratio yields an effective "gasprice",
/// which must be above some miminum to be accepted into the mempool.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Fee {
    /// amount is the amount of coins to be paid as a fee
    #[prost(message, repeated, tag = "1")]
    pub amount: Vec<Coin>,
    /// gas_limit is the maximum gas that can be used in transaction processing
    /// before an out of gas error occurs
    #[prost(uint64, tag = "2")]
    pub gas_limit: u64,
    /// if unset, the first signer is responsible for paying the fees. If set, the specified account must pay the fees.
    /// the payer must be a tx signer (and thus have signed this field in AuthInfo).
    /// setting this field does *not* change the ordering of required signers for the transaction.
    #[prost(string, tag = "3")]
    pub payer: String,
    /// if set, the fee payer (either the first signer or the value of the payer field) requests that a fee grant be used
    /// to pay fees instead of the fee payer's own balance. If an appropriate fee grant does not exist or the chain does
    /// not support fee grants, this will fail
    #[prost(string, tag = "4")]
    pub granter: String,
}

/// Tip is the tip used for meta-transactions.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Tip {
    /// amount is the amount of the tip
    #[prost(message, repeated, tag = "1")]
    pub amount: Vec<Coin>,
    /// tipper is the address of the account paying for the tip
    #[prost(string, tag = "2")]
    pub tipper: String,
}

/// AuxSignerData is the intermediary format that an auxiliary signer (e.g. a
/// tipper) builds and sends to the fee payer (who will build and broadcast the
/// actual tx). AuxSignerData is not a valid tx in itself, and will be rejected
/// by the node if sent directly as-is.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AuxSignerData {
    /// address is the bech32-encoded address of the auxiliary signer. If using
    /// AuxSignerData across different chains, the bech32 prefix of the target
    /// chain (where the final transaction is broadcasted) should be used.
    #[prost(string, tag = "1")]
    pub address: String,
    /// sign_doc is the SIGN_MODE_DIRECT_AUX sign doc that the auxiliary signer
    /// signs. Note: we use the same sign doc even if we're signing with
    /// LEGACY_AMINO_JSON.
    #[prost(message, optional, tag = "2")]
    pub sign_doc: Option<SignDocDirectAux>,
    /// mode is the signing mode of the single signer.
    #[prost(enumeration = "SignMode", tag = "3")]
    pub mode: i32,
    /// sig is the signature of the sign doc.
    #[prost(bytes = "vec", tag = "4")]
    pub sig: Vec<u8>,
}

cosmos_message!(Tx => TxAmino, TxPartial;
    "/cosmos.tx.v1beta1.Tx", "cosmos-sdk/Tx" {
        body: message(TxBody),
        auth_info: message(AuthInfo),
        signatures: bytes_list,
    });

cosmos_message!(TxRaw => TxRawAmino, TxRawPartial;
    "/cosmos.tx.v1beta1.TxRaw", "cosmos-sdk/TxRaw" {
        body_bytes: bytes,
        auth_info_bytes: bytes,
        signatures: bytes_list,
    });

cosmos_message!(SignDoc => SignDocAmino, SignDocPartial;
    "/cosmos.tx.v1beta1.SignDoc", "cosmos-sdk/SignDoc" {
        body_bytes: bytes,
        auth_info_bytes: bytes,
        chain_id: string,
        account_number: uint64,
    });

cosmos_message!(TxBody => TxBodyAmino, TxBodyPartial;
    "/cosmos.tx.v1beta1.TxBody", "cosmos-sdk/TxBody" {
        messages: anys,
        memo: string,
        timeout_height: uint64,
        unordered: bool,
        timeout_timestamp: timestamp,
        extension_options: anys,
        non_critical_extension_options: anys,
    });

cosmos_message!(SignerInfo => SignerInfoAmino, SignerInfoPartial;
    "/cosmos.tx.v1beta1.SignerInfo", "cosmos-sdk/SignerInfo" {
        public_key: any,
        mode_info: message(ModeInfo),
        sequence: uint64,
    });

cosmos_message!(Fee => FeeAmino, FeePartial;
    "/cosmos.tx.v1beta1.Fee", "cosmos-sdk/Fee" {
        amount: messages(Coin),
        gas_limit: uint64,
        payer: string,
        granter: string,
    });

cosmos_message!(Tip => TipAmino, TipPartial;
    "/cosmos.tx.v1beta1.Tip", "cosmos-sdk/Tip" {
        amount: messages(Coin),
        tipper: string,
    });

cosmos_message!(AuxSignerData => AuxSignerDataAmino, AuxSignerDataPartial;
    "/cosmos.tx.v1beta1.AuxSignerData", "cosmos-sdk/AuxSignerData" {
        address: string,
        sign_doc: message(SignDocDirectAux),
        mode: enumeration(SignMode),
        sig: bytes,
    });

cosmos_message!(SignDocDirectAux => SignDocDirectAuxAmino, SignDocDirectAuxPartial;
    "/cosmos.tx.v1beta1.SignDocDirectAux", "cosmos-sdk/SignDocDirectAux" {
        body_bytes: bytes,
        public_key: any,
        chain_id: string,
        account_number: uint64,
        sequence: uint64,
        tip: message(Tip),
    });

cosmos_message!(AuthInfo => AuthInfoAmino, AuthInfoPartial;
    "/cosmos.tx.v1beta1.AuthInfo", "cosmos-sdk/AuthInfo" {
        signer_infos: messages(SignerInfo),
        fee: message(Fee),
        tip: message(Tip),
    });

pub(super) fn register(registry: &TypeRegistry) {
    register_types!(
        registry,
        [
            Tx,
            TxRaw,
            SignDoc,
            SignDocDirectAux,
            TxBody,
            AuthInfo,
            SignerInfo,
            ModeInfo,
            mode_info::Single,
            mode_info::Multi,
            Fee,
            Tip,
            AuxSignerData,
        ]
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use prost::Message;

    #[test]
    fn test_mode_info_oneof_wire() {
        let single = ModeInfo::single(SignMode::Direct);
        assert_eq!(single.encode_to_vec(), vec![0x0a, 0x02, 0x08, 0x01]);
        assert_eq!(ModeInfo::decode(&[0x0a, 0x02, 0x08, 0x01][..]).unwrap(), single);

        let nested = ModeInfo::multi(
            CompactBitArray::new(2),
            vec![single.clone(), ModeInfo::single(SignMode::LegacyAminoJson)],
        );
        let decoded = ModeInfo::decode(nested.encode_to_vec().as_slice()).unwrap();
        assert_eq!(decoded, nested);
    }

    #[test]
    fn test_mode_info_amino() {
        let info = ModeInfo::single(SignMode::LegacyAminoJson);
        let json = info.to_amino_json().unwrap();
        assert_eq!(json, serde_json::json!({ "single": { "mode": 127 } }));
        assert_eq!(ModeInfo::from_amino_json(json).unwrap(), info);

        let by_name = ModeInfo::from_amino_json(serde_json::json!({
            "single": { "mode": "SIGN_MODE_DIRECT" }
        }))
        .unwrap();
        assert_eq!(by_name, ModeInfo::single(SignMode::Direct));

        assert_eq!(
            ModeInfo::from_amino_json(serde_json::json!({})).unwrap(),
            ModeInfo::default()
        );
    }

    #[test]
    fn test_mode_info_partial_prefers_single() {
        let info = ModeInfo::from_partial(ModeInfoPartial {
            single: Some(mode_info::SinglePartial {
                mode: Some(SignMode::Direct as i32),
            }),
            multi: Some(mode_info::MultiPartial::default()),
        });
        assert_eq!(info, ModeInfo::single(SignMode::Direct));
        assert_eq!(ModeInfo::from_partial(ModeInfoPartial::default()).sum, None);
    }

    #[test]
    fn test_tx_body_extension_tags() {
        let body = TxBody {
            extension_options: vec![Any {
                type_url: "/x".to_string(),
                value: vec![],
            }],
            ..Default::default()
        };
        let bytes = body.encode_to_vec();
        // field 1023, wire type 2
        assert_eq!(&bytes[..2], &[0xfa, 0x3f]);
        assert_eq!(TxBody::decode(bytes.as_slice()).unwrap(), body);
    }
}
