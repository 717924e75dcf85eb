use super::bank::{Input, Output, Params, SendEnabled};
use crate::cosmos::base::v1beta1::Coin;
use cosmwire_codec::{cosmos_message, register_types, TypeRegistry};

/// MsgSend represents a message to send coins from one account to another.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MsgSend {
    #[prost(string, tag = "1")]
    pub from_address: String,
    #[prost(string, tag = "2")]
    pub to_address: String,
    #[prost(message, repeated, tag = "3")]
    pub amount: Vec<Coin>,
}

/// MsgSendResponse defines the Msg/Send response type.
#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct MsgSendResponse {}

/// MsgMultiSend represents an arbitrary multi-in, multi-out send message.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MsgMultiSend {
    /// Inputs, despite being `repeated`, only allows one sender input. This is
    /// checked in MsgMultiSend's ValidateBasic.
    #[prost(message, repeated, tag = "1")]
    pub inputs: Vec<Input>,
    #[prost(message, repeated, tag = "2")]
    pub outputs: Vec<Output>,
}

/// MsgMultiSendResponse defines the Msg/MultiSend response type.
#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct MsgMultiSendResponse {}

/// MsgUpdateParams is the Msg/UpdateParams request type.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MsgUpdateParams {
    /// authority is the address that controls the module (defaults to x/gov unless overwritten).
    #[prost(string, tag = "1")]
    pub authority: String,
    /// params defines the x/bank parameters to update.
    ///
    /// NOTE: All parameters must be supplied.
    #[prost(message, optional, tag = "2")]
    pub params: Option<Params>,
}

/// MsgUpdateParamsResponse defines the response structure for executing a
/// MsgUpdateParams message.
#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct MsgUpdateParamsResponse {}

/// MsgSetSendEnabled is the Msg/SetSendEnabled request type.
///
/// Only entries to add/update/delete need to be included.
/// Existing SendEnabled entries that are not included in this
/// message are left unchanged.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MsgSetSendEnabled {
    /// authority is the address that controls the module.
    #[prost(string, tag = "1")]
    pub authority: String,
    /// send_enabled is the list of entries to add or update.
    #[prost(message, repeated, tag = "2")]
    pub send_enabled: Vec<SendEnabled>,
    /// use_default_for is a list of denoms that should use the params.default_send_enabled value.
    /// Denoms listed here will have their SendEnabled entries deleted.
    /// If a denom is included that doesn't have a SendEnabled entry,
    /// it will be ignored.
    #[prost(string, repeated, tag = "3")]
    pub use_default_for: Vec<String>,
}

/// MsgSetSendEnabledResponse defines the Msg/SetSendEnabled response type.
#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct MsgSetSendEnabledResponse {}

impl MsgSend {
    pub fn new(from_address: impl Into<String>, to_address: impl Into<String>, amount: Vec<Coin>) -> Self {
        Self {
            from_address: from_address.into(),
            to_address: to_address.into(),
            amount,
        }
    }
}

cosmos_message!(MsgSend => MsgSendAmino, MsgSendPartial;
    "/cosmos.bank.v1beta1.MsgSend", "cosmos-sdk/MsgSend" {
        from_address: string,
        to_address: string,
        amount: messages(Coin),
    });

cosmos_message!(MsgSendResponse => MsgSendResponseAmino, MsgSendResponsePartial;
    "/cosmos.bank.v1beta1.MsgSendResponse", "cosmos-sdk/MsgSendResponse" {});

cosmos_message!(MsgMultiSend => MsgMultiSendAmino, MsgMultiSendPartial;
    "/cosmos.bank.v1beta1.MsgMultiSend", "cosmos-sdk/MsgMultiSend" {
        inputs: messages(Input),
        outputs: messages(Output),
    });

cosmos_message!(MsgMultiSendResponse => MsgMultiSendResponseAmino, MsgMultiSendResponsePartial;
    "/cosmos.bank.v1beta1.MsgMultiSendResponse", "cosmos-sdk/MsgMultiSendResponse" {});

cosmos_message!(MsgUpdateParams => MsgUpdateParamsAmino, MsgUpdateParamsPartial;
    "/cosmos.bank.v1beta1.MsgUpdateParams", "cosmos-sdk/x/bank/MsgUpdateParams" {
        authority: string,
        params: message(Params),
    });

cosmos_message!(MsgUpdateParamsResponse => MsgUpdateParamsResponseAmino, MsgUpdateParamsResponsePartial;
    "/cosmos.bank.v1beta1.MsgUpdateParamsResponse", "cosmos-sdk/MsgUpdateParamsResponse" {});

cosmos_message!(MsgSetSendEnabled => MsgSetSendEnabledAmino, MsgSetSendEnabledPartial;
    "/cosmos.bank.v1beta1.MsgSetSendEnabled", "cosmos-sdk/MsgSetSendEnabled" {
        authority: string,
        send_enabled: messages(SendEnabled),
        use_default_for: strings,
    });

cosmos_message!(MsgSetSendEnabledResponse => MsgSetSendEnabledResponseAmino, MsgSetSendEnabledResponsePartial;
    "/cosmos.bank.v1beta1.MsgSetSendEnabledResponse", "cosmos-sdk/MsgSetSendEnabledResponse" {});

pub(super) fn register(registry: &TypeRegistry) {
    register_types!(
        registry,
        [
            MsgSend,
            MsgSendResponse,
            MsgMultiSend,
            MsgMultiSendResponse,
            MsgUpdateParams,
            MsgUpdateParamsResponse,
            MsgSetSendEnabled,
            MsgSetSendEnabledResponse,
        ]
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwire_codec::{AminoConvert, FromPartial, MessageExt};
    use prost::Message;

    #[test]
    fn test_msg_send_amino_envelope() {
        let msg = MsgSend::new(
            "cosmos1from",
            "cosmos1to",
            vec![Coin::new("uatom", "1000")],
        );
        let amino = msg.to_amino_msg().unwrap();
        assert_eq!(amino.r#type, "cosmos-sdk/MsgSend");
        assert_eq!(
            amino.value,
            serde_json::json!({
                "from_address": "cosmos1from",
                "to_address": "cosmos1to",
                "amount": [{ "denom": "uatom", "amount": "1000" }],
            })
        );
        assert_eq!(MsgSend::from_amino_msg(amino).unwrap(), msg);
    }

    #[test]
    fn test_msg_send_any_round_trip() {
        let msg = MsgSend::new("a", "b", vec![]);
        let any = msg.to_any();
        assert_eq!(any.type_url, "/cosmos.bank.v1beta1.MsgSend");
        assert_eq!(MsgSend::from_any(&any).unwrap(), msg);
        assert!(MsgMultiSend::from_any(&any).is_err());
    }

    #[test]
    fn test_empty_response_is_empty() {
        assert!(MsgSendResponse {}.encode_to_vec().is_empty());
        assert_eq!(
            MsgSendResponse {}.to_amino_json().unwrap(),
            serde_json::json!({})
        );
    }

    #[test]
    fn test_update_params_partial() {
        let msg = MsgUpdateParams::from_partial(MsgUpdateParamsPartial {
            authority: Some("cosmos10d07y265gmmuvt4z0w9aw880jnsr700j6zn9kn".to_string()),
            params: Some(Default::default()),
        });
        assert_eq!(msg.params, Some(Params::default()));
        assert_eq!(
            msg.to_amino_msg().unwrap().r#type,
            "cosmos-sdk/x/bank/MsgUpdateParams"
        );
    }
}
