use super::staking::{CommissionRates, Description, Params};
use crate::cosmos::base::v1beta1::Coin;
use cosmwire_codec::{cosmos_message, register_types, Any, Timestamp, TypeRegistry};

/// MsgCreateValidator defines a SDK message for creating a new validator.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MsgCreateValidator {
    #[prost(message, optional, tag = "1")]
    pub description: Option<Description>,
    #[prost(message, optional, tag = "2")]
    pub commission: Option<CommissionRates>,
    #[prost(string, tag = "3")]
    pub min_self_delegation: String,
    /// Deprecated: Use of Delegator Address in MsgCreateValidator is deprecated.
    /// The validator address bytes and delegator address bytes refer to the same account while creating validator (defer
    /// only in bech32 notation).
    #[prost(string, tag = "4")]
    pub delegator_address: String,
    #[prost(string, tag = "5")]
    pub validator_address: String,
    #[prost(message, optional, tag = "6")]
    pub pubkey: Option<Any>,
    #[prost(message, optional, tag = "7")]
    pub value: Option<Coin>,
}

/// MsgCreateValidatorResponse defines the Msg/CreateValidator response type.
#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct MsgCreateValidatorResponse {}

/// MsgEditValidator defines a SDK message for editing an existing validator.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MsgEditValidator {
    #[prost(message, optional, tag = "1")]
    pub description: Option<Description>,
    #[prost(string, tag = "2")]
    pub validator_address: String,
    /// We pass a reference to the new commission rate and min self delegation as
    /// it's not mandatory to update. If not updated, the deserialized rate will be
    /// zero with no way to distinguish if an update was intended.
    /// REF: #2373
    #[prost(string, tag = "3")]
    pub commission_rate: String,
    #[prost(string, tag = "4")]
    pub min_self_delegation: String,
}

/// MsgEditValidatorResponse defines the Msg/EditValidator response type.
#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct MsgEditValidatorResponse {}

/// MsgDelegate defines a SDK message for performing a delegation of coins
/// from a delegator to a validator.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MsgDelegate {
    #[prost(string, tag = "1")]
    pub delegator_address: String,
    #[prost(string, tag = "2")]
    pub validator_address: String,
    #[prost(message, optional, tag = "3")]
    pub amount: Option<Coin>,
}

/// MsgDelegateResponse defines the Msg/Delegate response type.
#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct MsgDelegateResponse {}

/// MsgBeginRedelegate defines a SDK message for performing a redelegation
/// of coins from a delegator and source validator to a destination validator.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MsgBeginRedelegate {
    #[prost(string, tag = "1")]
    pub delegator_address: String,
    #[prost(string, tag = "2")]
    pub validator_src_address: String,
    #[prost(string, tag = "3")]
    pub validator_dst_address: String,
    #[prost(message, optional, tag = "4")]
    pub amount: Option<Coin>,
}

/// MsgBeginRedelegateResponse defines the Msg/BeginRedelegate response type.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MsgBeginRedelegateResponse {
    #[prost(message, optional, tag = "1")]
    pub completion_time: Option<Timestamp>,
}

/// MsgUndelegate defines a SDK message for performing an undelegation from a
/// delegate and a validator.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MsgUndelegate {
    #[prost(string, tag = "1")]
    pub delegator_address: String,
    #[prost(string, tag = "2")]
    pub validator_address: String,
    #[prost(message, optional, tag = "3")]
    pub amount: Option<Coin>,
}

/// MsgUndelegateResponse defines the Msg/Undelegate response type.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MsgUndelegateResponse {
    #[prost(message, optional, tag = "1")]
    pub completion_time: Option<Timestamp>,
    /// amount returns the amount of undelegated coins
    #[prost(message, optional, tag = "2")]
    pub amount: Option<Coin>,
}

/// MsgCancelUnbondingDelegation defines the SDK message for performing a cancel unbonding delegation for delegator
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MsgCancelUnbondingDelegation {
    #[prost(string, tag = "1")]
    pub delegator_address: String,
    #[prost(string, tag = "2")]
    pub validator_address: String,
    /// amount is always less than or equal to unbonding delegation entry balance
    #[prost(message, optional, tag = "3")]
    pub amount: Option<Coin>,
    /// creation_height is the height which the unbonding took place.
    #[prost(int64, tag = "4")]
    pub creation_height: i64,
}

/// MsgCancelUnbondingDelegationResponse
#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct MsgCancelUnbondingDelegationResponse {}

/// MsgUpdateParams is the Msg/UpdateParams request type.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MsgUpdateParams {
    /// authority is the address that controls the module (defaults to x/gov unless overwritten).
    #[prost(string, tag = "1")]
    pub authority: String,
    /// params defines the x/staking parameters to update.
    ///
    /// NOTE: All parameters must be supplied.
    #[prost(message, optional, tag = "2")]
    pub params: Option<Params>,
}

/// MsgUpdateParamsResponse defines the response structure for executing a
/// MsgUpdateParams message.
#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct MsgUpdateParamsResponse {}

impl MsgDelegate {
    pub fn new(
        delegator_address: impl Into<String>,
        validator_address: impl Into<String>,
        amount: Coin,
    ) -> Self {
        Self {
            delegator_address: delegator_address.into(),
            validator_address: validator_address.into(),
            amount: Some(amount),
        }
    }
}

cosmos_message!(MsgCreateValidator => MsgCreateValidatorAmino, MsgCreateValidatorPartial;
    "/cosmos.staking.v1beta1.MsgCreateValidator", "cosmos-sdk/MsgCreateValidator" {
        description: message(Description),
        commission: message(CommissionRates),
        min_self_delegation: string,
        delegator_address: string,
        validator_address: string,
        pubkey: any,
        value: message(Coin),
    });

cosmos_message!(MsgCreateValidatorResponse => MsgCreateValidatorResponseAmino, MsgCreateValidatorResponsePartial;
    "/cosmos.staking.v1beta1.MsgCreateValidatorResponse", "cosmos-sdk/MsgCreateValidatorResponse" {});

cosmos_message!(MsgEditValidator => MsgEditValidatorAmino, MsgEditValidatorPartial;
    "/cosmos.staking.v1beta1.MsgEditValidator", "cosmos-sdk/MsgEditValidator" {
        description: message(Description),
        validator_address: string,
        commission_rate: string,
        min_self_delegation: string,
    });

cosmos_message!(MsgEditValidatorResponse => MsgEditValidatorResponseAmino, MsgEditValidatorResponsePartial;
    "/cosmos.staking.v1beta1.MsgEditValidatorResponse", "cosmos-sdk/MsgEditValidatorResponse" {});

cosmos_message!(MsgDelegate => MsgDelegateAmino, MsgDelegatePartial;
    "/cosmos.staking.v1beta1.MsgDelegate", "cosmos-sdk/MsgDelegate" {
        delegator_address: string,
        validator_address: string,
        amount: message(Coin),
    });

cosmos_message!(MsgDelegateResponse => MsgDelegateResponseAmino, MsgDelegateResponsePartial;
    "/cosmos.staking.v1beta1.MsgDelegateResponse", "cosmos-sdk/MsgDelegateResponse" {});

cosmos_message!(MsgBeginRedelegate => MsgBeginRedelegateAmino, MsgBeginRedelegatePartial;
    "/cosmos.staking.v1beta1.MsgBeginRedelegate", "cosmos-sdk/MsgBeginRedelegate" {
        delegator_address: string,
        validator_src_address: string,
        validator_dst_address: string,
        amount: message(Coin),
    });

cosmos_message!(MsgBeginRedelegateResponse => MsgBeginRedelegateResponseAmino, MsgBeginRedelegateResponsePartial;
    "/cosmos.staking.v1beta1.MsgBeginRedelegateResponse", "cosmos-sdk/MsgBeginRedelegateResponse" {
        completion_time: timestamp,
    });

cosmos_message!(MsgUndelegate => MsgUndelegateAmino, MsgUndelegatePartial;
    "/cosmos.staking.v1beta1.MsgUndelegate", "cosmos-sdk/MsgUndelegate" {
        delegator_address: string,
        validator_address: string,
        amount: message(Coin),
    });

cosmos_message!(MsgUndelegateResponse => MsgUndelegateResponseAmino, MsgUndelegateResponsePartial;
    "/cosmos.staking.v1beta1.MsgUndelegateResponse", "cosmos-sdk/MsgUndelegateResponse" {
        completion_time: timestamp,
        amount: message(Coin),
    });

cosmos_message!(MsgCancelUnbondingDelegation => MsgCancelUnbondingDelegationAmino, MsgCancelUnbondingDelegationPartial;
    "/cosmos.staking.v1beta1.MsgCancelUnbondingDelegation", "cosmos-sdk/MsgCancelUnbondingDelegation" {
        delegator_address: string,
        validator_address: string,
        amount: message(Coin),
        creation_height: int64,
    });

cosmos_message!(MsgCancelUnbondingDelegationResponse => MsgCancelUnbondingDelegationResponseAmino, MsgCancelUnbondingDelegationResponsePartial;
    "/cosmos.staking.v1beta1.MsgCancelUnbondingDelegationResponse", "cosmos-sdk/MsgCancelUnbondingDelegationResponse" {});

cosmos_message!(MsgUpdateParams => MsgUpdateParamsAmino, MsgUpdateParamsPartial;
    "/cosmos.staking.v1beta1.MsgUpdateParams", "cosmos-sdk/x/staking/MsgUpdateParams" {
        authority: string,
        params: message(Params),
    });

cosmos_message!(MsgUpdateParamsResponse => MsgUpdateParamsResponseAmino, MsgUpdateParamsResponsePartial;
    "/cosmos.staking.v1beta1.MsgUpdateParamsResponse", "cosmos-sdk/MsgUpdateParamsResponse" {});

pub(super) fn register(registry: &TypeRegistry) {
    register_types!(
        registry,
        [
            MsgCreateValidator,
            MsgCreateValidatorResponse,
            MsgEditValidator,
            MsgEditValidatorResponse,
            MsgDelegate,
            MsgDelegateResponse,
            MsgBeginRedelegate,
            MsgBeginRedelegateResponse,
            MsgUndelegate,
            MsgUndelegateResponse,
            MsgCancelUnbondingDelegation,
            MsgCancelUnbondingDelegationResponse,
            MsgUpdateParams,
            MsgUpdateParamsResponse,
        ]
    );
}
