use super::staking::{
    BondStatus, DelegationResponse, HistoricalInfo, Params, Pool, RedelegationResponse,
    UnbondingDelegation, Validator,
};
use crate::cosmos::base::query::v1beta1::{PageRequest, PageResponse};
use cosmwire_codec::{cosmos_message, register_types, TypeRegistry};

/// QueryValidatorsRequest is request type for Query/Validators RPC method.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct QueryValidatorsRequest {
    /// status enables to query for validators matching a given status.
    #[prost(string, tag = "1")]
    pub status: String,
    /// pagination defines an optional pagination for the request.
    #[prost(message, optional, tag = "2")]
    pub pagination: Option<PageRequest>,
}

/// QueryValidatorsResponse is response type for the Query/Validators RPC method
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct QueryValidatorsResponse {
    /// validators contains all the queried validators.
    #[prost(message, repeated, tag = "1")]
    pub validators: Vec<Validator>,
    /// pagination defines the pagination in the response.
    #[prost(message, optional, tag = "2")]
    pub pagination: Option<PageResponse>,
}

/// QueryValidatorRequest is response type for the Query/Validator RPC method
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct QueryValidatorRequest {
    /// validator_addr defines the validator address to query for.
    #[prost(string, tag = "1")]
    pub validator_addr: String,
}

/// QueryValidatorResponse is response type for the Query/Validator RPC method
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct QueryValidatorResponse {
    /// validator defines the validator info.
    #[prost(message, optional, tag = "1")]
    pub validator: Option<Validator>,
}

/// QueryValidatorDelegationsRequest is request type for the
/// Query/ValidatorDelegations RPC method
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct QueryValidatorDelegationsRequest {
    /// validator_addr defines the validator address to query for.
    #[prost(string, tag = "1")]
    pub validator_addr: String,
    /// pagination defines an optional pagination for the request.
    #[prost(message, optional, tag = "2")]
    pub pagination: Option<PageRequest>,
}

/// QueryValidatorDelegationsResponse is response type for the
/// Query/ValidatorDelegations RPC method
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct QueryValidatorDelegationsResponse {
    #[prost(message, repeated, tag = "1")]
    pub delegation_responses: Vec<DelegationResponse>,
    /// pagination defines the pagination in the response.
    #[prost(message, optional, tag = "2")]
    pub pagination: Option<PageResponse>,
}

/// QueryValidatorUnbondingDelegationsRequest is required type for the
/// Query/ValidatorUnbondingDelegations RPC method
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct QueryValidatorUnbondingDelegationsRequest {
    /// validator_addr defines the validator address to query for.
    #[prost(string, tag = "1")]
    pub validator_addr: String,
    /// pagination defines an optional pagination for the request.
    #[prost(message, optional, tag = "2")]
    pub pagination: Option<PageRequest>,
}

/// QueryValidatorUnbondingDelegationsResponse is response type for the
/// Query/ValidatorUnbondingDelegations RPC method.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct QueryValidatorUnbondingDelegationsResponse {
    #[prost(message, repeated, tag = "1")]
    pub unbonding_responses: Vec<UnbondingDelegation>,
    /// pagination defines the pagination in the response.
    #[prost(message, optional, tag = "2")]
    pub pagination: Option<PageResponse>,
}

/// QueryDelegationRequest is request type for the Query/Delegation RPC method.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct QueryDelegationRequest {
    /// delegator_addr defines the delegator address to query for.
    #[prost(string, tag = "1")]
    pub delegator_addr: String,
    /// validator_addr defines the validator address to query for.
    #[prost(string, tag = "2")]
    pub validator_addr: String,
}

/// QueryDelegationResponse is response type for the Query/Delegation RPC method.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct QueryDelegationResponse {
    /// delegation_responses defines the delegation info of a delegation.
    #[prost(message, optional, tag = "1")]
    pub delegation_response: Option<DelegationResponse>,
}

/// QueryUnbondingDelegationRequest is request type for the
/// Query/UnbondingDelegation RPC method.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct QueryUnbondingDelegationRequest {
    /// delegator_addr defines the delegator address to query for.
    #[prost(string, tag = "1")]
    pub delegator_addr: String,
    /// validator_addr defines the validator address to query for.
    #[prost(string, tag = "2")]
    pub validator_addr: String,
}

/// QueryDelegationResponse is response type for the Query/UnbondingDelegation
/// RPC method.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct QueryUnbondingDelegationResponse {
    /// unbond defines the unbonding information of a delegation.
    #[prost(message, optional, tag = "1")]
    pub unbond: Option<UnbondingDelegation>,
}

/// QueryDelegatorDelegationsRequest is request type for the
/// Query/DelegatorDelegations RPC method.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct QueryDelegatorDelegationsRequest {
    /// delegator_addr defines the delegator address to query for.
    #[prost(string, tag = "1")]
    pub delegator_addr: String,
    /// pagination defines an optional pagination for the request.
    #[prost(message, optional, tag = "2")]
    pub pagination: Option<PageRequest>,
}

/// QueryDelegatorDelegationsResponse is response type for the
/// Query/DelegatorDelegations RPC method.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct QueryDelegatorDelegationsResponse {
    /// delegation_responses defines all the delegations' info of a delegator.
    #[prost(message, repeated, tag = "1")]
    pub delegation_responses: Vec<DelegationResponse>,
    /// pagination defines the pagination in the response.
    #[prost(message, optional, tag = "2")]
    pub pagination: Option<PageResponse>,
}

/// QueryDelegatorUnbondingDelegationsRequest is request type for the
/// Query/DelegatorUnbondingDelegations RPC method.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct QueryDelegatorUnbondingDelegationsRequest {
    /// delegator_addr defines the delegator address to query for.
    #[prost(string, tag = "1")]
    pub delegator_addr: String,
    /// pagination defines an optional pagination for the request.
    #[prost(message, optional, tag = "2")]
    pub pagination: Option<PageRequest>,
}

/// QueryUnbondingDelegationResponse is response type for the
/// Query/UnbondingDelegation RPC method.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct QueryDelegatorUnbondingDelegationsResponse {
    #[prost(message, repeated, tag = "1")]
    pub unbonding_responses: Vec<UnbondingDelegation>,
    /// pagination defines the pagination in the response.
    #[prost(message, optional, tag = "2")]
    pub pagination: Option<PageResponse>,
}

/// QueryRedelegationsRequest is request type for the Query/Redelegations RPC
/// method.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct QueryRedelegationsRequest {
    /// delegator_addr defines the delegator address to query for.
    #[prost(string, tag = "1")]
    pub delegator_addr: String,
    /// src_validator_addr defines the validator address to redelegate from.
    #[prost(string, tag = "2")]
    pub src_validator_addr: String,
    /// dst_validator_addr defines the validator address to redelegate to.
    #[prost(string, tag = "3")]
    pub dst_validator_addr: String,
    /// pagination defines an optional pagination for the request.
    #[prost(message, optional, tag = "4")]
    pub pagination: Option<PageRequest>,
}

/// QueryRedelegationsResponse is response type for the Query/Redelegations RPC
/// method.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct QueryRedelegationsResponse {
    #[prost(message, repeated, tag = "1")]
    pub redelegation_responses: Vec<RedelegationResponse>,
    /// pagination defines the pagination in the response.
    #[prost(message, optional, tag = "2")]
    pub pagination: Option<PageResponse>,
}

/// QueryDelegatorValidatorsRequest is request type for the
/// Query/DelegatorValidators RPC method.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct QueryDelegatorValidatorsRequest {
    /// delegator_addr defines the delegator address to query for.
    #[prost(string, tag = "1")]
    pub delegator_addr: String,
    /// pagination defines an optional pagination for the request.
    #[prost(message, optional, tag = "2")]
    pub pagination: Option<PageRequest>,
}

/// QueryDelegatorValidatorsResponse is response type for the
/// Query/DelegatorValidators RPC method.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct QueryDelegatorValidatorsResponse {
    /// validators defines the validators' info of a delegator.
    #[prost(message, repeated, tag = "1")]
    pub validators: Vec<Validator>,
    /// pagination defines the pagination in the response.
    #[prost(message, optional, tag = "2")]
    pub pagination: Option<PageResponse>,
}

/// QueryDelegatorValidatorRequest is request type for the
/// Query/DelegatorValidator RPC method.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct QueryDelegatorValidatorRequest {
    /// delegator_addr defines the delegator address to query for.
    #[prost(string, tag = "1")]
    pub delegator_addr: String,
    /// validator_addr defines the validator address to query for.
    #[prost(string, tag = "2")]
    pub validator_addr: String,
}

/// QueryDelegatorValidatorResponse response type for the
/// Query/DelegatorValidator RPC method.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct QueryDelegatorValidatorResponse {
    /// validator defines the validator info.
    #[prost(message, optional, tag = "1")]
    pub validator: Option<Validator>,
}

/// QueryHistoricalInfoRequest is request type for the Query/HistoricalInfo RPC
/// method.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct QueryHistoricalInfoRequest {
    /// height defines at which height to query the historical info.
    #[prost(int64, tag = "1")]
    pub height: i64,
}

/// QueryHistoricalInfoResponse is response type for the Query/HistoricalInfo RPC
/// method.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct QueryHistoricalInfoResponse {
    /// hist defines the historical info at the given height.
    #[prost(message, optional, tag = "1")]
    pub hist: Option<HistoricalInfo>,
}

/// QueryPoolRequest is request type for the Query/Pool RPC method.
#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct QueryPoolRequest {}

/// QueryPoolResponse is response type for the Query/Pool RPC method.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct QueryPoolResponse {
    /// pool defines the pool info.
    #[prost(message, optional, tag = "1")]
    pub pool: Option<Pool>,
}

/// QueryParamsRequest is request type for the Query/Params RPC method.
#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct QueryParamsRequest {}

/// QueryParamsResponse is response type for the Query/Params RPC method.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct QueryParamsResponse {
    /// params holds all the parameters of this module.
    #[prost(message, optional, tag = "1")]
    pub params: Option<Params>,
}

cosmos_message!(QueryValidatorsRequest => QueryValidatorsRequestAmino, QueryValidatorsRequestPartial;
    "/cosmos.staking.v1beta1.QueryValidatorsRequest", "cosmos-sdk/QueryValidatorsRequest" {
        status: string,
        pagination: message(PageRequest),
    });

cosmos_message!(QueryValidatorsResponse => QueryValidatorsResponseAmino, QueryValidatorsResponsePartial;
    "/cosmos.staking.v1beta1.QueryValidatorsResponse", "cosmos-sdk/QueryValidatorsResponse" {
        validators: messages(Validator),
        pagination: message(PageResponse),
    });

cosmos_message!(QueryValidatorRequest => QueryValidatorRequestAmino, QueryValidatorRequestPartial;
    "/cosmos.staking.v1beta1.QueryValidatorRequest", "cosmos-sdk/QueryValidatorRequest" {
        validator_addr: string,
    });

cosmos_message!(QueryValidatorResponse => QueryValidatorResponseAmino, QueryValidatorResponsePartial;
    "/cosmos.staking.v1beta1.QueryValidatorResponse", "cosmos-sdk/QueryValidatorResponse" {
        validator: message(Validator),
    });

cosmos_message!(QueryValidatorDelegationsRequest => QueryValidatorDelegationsRequestAmino, QueryValidatorDelegationsRequestPartial;
    "/cosmos.staking.v1beta1.QueryValidatorDelegationsRequest", "cosmos-sdk/QueryValidatorDelegationsRequest" {
        validator_addr: string,
        pagination: message(PageRequest),
    });

cosmos_message!(QueryValidatorDelegationsResponse => QueryValidatorDelegationsResponseAmino, QueryValidatorDelegationsResponsePartial;
    "/cosmos.staking.v1beta1.QueryValidatorDelegationsResponse", "cosmos-sdk/QueryValidatorDelegationsResponse" {
        delegation_responses: messages(DelegationResponse),
        pagination: message(PageResponse),
    });

cosmos_message!(QueryValidatorUnbondingDelegationsRequest => QueryValidatorUnbondingDelegationsRequestAmino, QueryValidatorUnbondingDelegationsRequestPartial;
    "/cosmos.staking.v1beta1.QueryValidatorUnbondingDelegationsRequest", "cosmos-sdk/QueryValidatorUnbondingDelegationsRequest" {
        validator_addr: string,
        pagination: message(PageRequest),
    });

cosmos_message!(QueryValidatorUnbondingDelegationsResponse => QueryValidatorUnbondingDelegationsResponseAmino, QueryValidatorUnbondingDelegationsResponsePartial;
    "/cosmos.staking.v1beta1.QueryValidatorUnbondingDelegationsResponse", "cosmos-sdk/QueryValidatorUnbondingDelegationsResponse" {
        unbonding_responses: messages(UnbondingDelegation),
        pagination: message(PageResponse),
    });

cosmos_message!(QueryDelegationRequest => QueryDelegationRequestAmino, QueryDelegationRequestPartial;
    "/cosmos.staking.v1beta1.QueryDelegationRequest", "cosmos-sdk/QueryDelegationRequest" {
        delegator_addr: string,
        validator_addr: string,
    });

cosmos_message!(QueryDelegationResponse => QueryDelegationResponseAmino, QueryDelegationResponsePartial;
    "/cosmos.staking.v1beta1.QueryDelegationResponse", "cosmos-sdk/QueryDelegationResponse" {
        delegation_response: message(DelegationResponse),
    });

cosmos_message!(QueryUnbondingDelegationRequest => QueryUnbondingDelegationRequestAmino, QueryUnbondingDelegationRequestPartial;
    "/cosmos.staking.v1beta1.QueryUnbondingDelegationRequest", "cosmos-sdk/QueryUnbondingDelegationRequest" {
        delegator_addr: string,
        validator_addr: string,
    });

cosmos_message!(QueryUnbondingDelegationResponse => QueryUnbondingDelegationResponseAmino, QueryUnbondingDelegationResponsePartial;
    "/cosmos.staking.v1beta1.QueryUnbondingDelegationResponse", "cosmos-sdk/QueryUnbondingDelegationResponse" {
        unbond: message(UnbondingDelegation),
    });

cosmos_message!(QueryDelegatorDelegationsRequest => QueryDelegatorDelegationsRequestAmino, QueryDelegatorDelegationsRequestPartial;
    "/cosmos.staking.v1beta1.QueryDelegatorDelegationsRequest", "cosmos-sdk/QueryDelegatorDelegationsRequest" {
        delegator_addr: string,
        pagination: message(PageRequest),
    });

cosmos_message!(QueryDelegatorDelegationsResponse => QueryDelegatorDelegationsResponseAmino, QueryDelegatorDelegationsResponsePartial;
    "/cosmos.staking.v1beta1.QueryDelegatorDelegationsResponse", "cosmos-sdk/QueryDelegatorDelegationsResponse" {
        delegation_responses: messages(DelegationResponse),
        pagination: message(PageResponse),
    });

cosmos_message!(QueryDelegatorUnbondingDelegationsRequest => QueryDelegatorUnbondingDelegationsRequestAmino, QueryDelegatorUnbondingDelegationsRequestPartial;
    "/cosmos.staking.v1beta1.QueryDelegatorUnbondingDelegationsRequest", "cosmos-sdk/QueryDelegatorUnbondingDelegationsRequest" {
        delegator_addr: string,
        pagination: message(PageRequest),
    });

cosmos_message!(QueryDelegatorUnbondingDelegationsResponse => QueryDelegatorUnbondingDelegationsResponseAmino, QueryDelegatorUnbondingDelegationsResponsePartial;
    "/cosmos.staking.v1beta1.QueryDelegatorUnbondingDelegationsResponse", "cosmos-sdk/QueryDelegatorUnbondingDelegationsResponse" {
        unbonding_responses: messages(UnbondingDelegation),
        pagination: message(PageResponse),
    });

cosmos_message!(QueryRedelegationsRequest => QueryRedelegationsRequestAmino, QueryRedelegationsRequestPartial;
    "/cosmos.staking.v1beta1.QueryRedelegationsRequest", "cosmos-sdk/QueryRedelegationsRequest" {
        delegator_addr: string,
        src_validator_addr: string,
        dst_validator_addr: string,
        pagination: message(PageRequest),
    });

cosmos_message!(QueryRedelegationsResponse => QueryRedelegationsResponseAmino, QueryRedelegationsResponsePartial;
    "/cosmos.staking.v1beta1.QueryRedelegationsResponse", "cosmos-sdk/QueryRedelegationsResponse" {
        redelegation_responses: messages(RedelegationResponse),
        pagination: message(PageResponse),
    });

cosmos_message!(QueryDelegatorValidatorsRequest => QueryDelegatorValidatorsRequestAmino, QueryDelegatorValidatorsRequestPartial;
    "/cosmos.staking.v1beta1.QueryDelegatorValidatorsRequest", "cosmos-sdk/QueryDelegatorValidatorsRequest" {
        delegator_addr: string,
        pagination: message(PageRequest),
    });

cosmos_message!(QueryDelegatorValidatorsResponse => QueryDelegatorValidatorsResponseAmino, QueryDelegatorValidatorsResponsePartial;
    "/cosmos.staking.v1beta1.QueryDelegatorValidatorsResponse", "cosmos-sdk/QueryDelegatorValidatorsResponse" {
        validators: messages(Validator),
        pagination: message(PageResponse),
    });

cosmos_message!(QueryDelegatorValidatorRequest => QueryDelegatorValidatorRequestAmino, QueryDelegatorValidatorRequestPartial;
    "/cosmos.staking.v1beta1.QueryDelegatorValidatorRequest", "cosmos-sdk/QueryDelegatorValidatorRequest" {
        delegator_addr: string,
        validator_addr: string,
    });

cosmos_message!(QueryDelegatorValidatorResponse => QueryDelegatorValidatorResponseAmino, QueryDelegatorValidatorResponsePartial;
    "/cosmos.staking.v1beta1.QueryDelegatorValidatorResponse", "cosmos-sdk/QueryDelegatorValidatorResponse" {
        validator: message(Validator),
    });

cosmos_message!(QueryHistoricalInfoRequest => QueryHistoricalInfoRequestAmino, QueryHistoricalInfoRequestPartial;
    "/cosmos.staking.v1beta1.QueryHistoricalInfoRequest", "cosmos-sdk/QueryHistoricalInfoRequest" {
        height: int64,
    });

cosmos_message!(QueryHistoricalInfoResponse => QueryHistoricalInfoResponseAmino, QueryHistoricalInfoResponsePartial;
    "/cosmos.staking.v1beta1.QueryHistoricalInfoResponse", "cosmos-sdk/QueryHistoricalInfoResponse" {
        hist: message(HistoricalInfo),
    });

cosmos_message!(QueryPoolRequest => QueryPoolRequestAmino, QueryPoolRequestPartial;
    "/cosmos.staking.v1beta1.QueryPoolRequest", "cosmos-sdk/QueryPoolRequest" {});

cosmos_message!(QueryPoolResponse => QueryPoolResponseAmino, QueryPoolResponsePartial;
    "/cosmos.staking.v1beta1.QueryPoolResponse", "cosmos-sdk/QueryPoolResponse" {
        pool: message(Pool),
    });

cosmos_message!(QueryParamsRequest => QueryParamsRequestAmino, QueryParamsRequestPartial;
    "/cosmos.staking.v1beta1.QueryParamsRequest", "cosmos-sdk/QueryParamsRequest" {});

cosmos_message!(QueryParamsResponse => QueryParamsResponseAmino, QueryParamsResponsePartial;
    "/cosmos.staking.v1beta1.QueryParamsResponse", "cosmos-sdk/QueryParamsResponse" {
        params: message(Params),
    });

pub(super) fn register(registry: &TypeRegistry) {
    register_types!(
        registry,
        [
            QueryValidatorsRequest,
            QueryValidatorsResponse,
            QueryValidatorRequest,
            QueryValidatorResponse,
            QueryValidatorDelegationsRequest,
            QueryValidatorDelegationsResponse,
            QueryValidatorUnbondingDelegationsRequest,
            QueryValidatorUnbondingDelegationsResponse,
            QueryDelegationRequest,
            QueryDelegationResponse,
            QueryUnbondingDelegationRequest,
            QueryUnbondingDelegationResponse,
            QueryDelegatorDelegationsRequest,
            QueryDelegatorDelegationsResponse,
            QueryDelegatorUnbondingDelegationsRequest,
            QueryDelegatorUnbondingDelegationsResponse,
            QueryRedelegationsRequest,
            QueryRedelegationsResponse,
            QueryDelegatorValidatorsRequest,
            QueryDelegatorValidatorsResponse,
            QueryDelegatorValidatorRequest,
            QueryDelegatorValidatorResponse,
            QueryHistoricalInfoRequest,
            QueryHistoricalInfoResponse,
            QueryPoolRequest,
            QueryPoolResponse,
            QueryParamsRequest,
            QueryParamsResponse,
        ]
    );
}

impl QueryValidatorsRequest {
    /// Filter validators by bond status; `Unspecified` lists all of them
    pub fn with_status(status: BondStatus, pagination: Option<PageRequest>) -> Self {
        let status = match status {
            BondStatus::Unspecified | BondStatus::Unrecognized => String::new(),
            other => other.as_str_name().to_string(),
        };
        Self { status, pagination }
    }
}
