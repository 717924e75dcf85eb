use super::bank::{Metadata, Params, SendEnabled};
use crate::cosmos::base::query::v1beta1::{PageRequest, PageResponse};
use crate::cosmos::base::v1beta1::Coin;
use cosmwire_codec::{cosmos_message, register_types, TypeRegistry};

/// QueryBalanceRequest is the request type for the Query/Balance RPC method.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct QueryBalanceRequest {
    /// address is the address to query balances for.
    #[prost(string, tag = "1")]
    pub address: String,
    /// denom is the coin denom to query balances for.
    #[prost(string, tag = "2")]
    pub denom: String,
}

/// QueryBalanceResponse is the response type for the Query/Balance RPC method.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct QueryBalanceResponse {
    /// balance is the balance of the coin.
    #[prost(message, optional, tag = "1")]
    pub balance: Option<Coin>,
}

/// QueryBalanceRequest is the request type for the Query/AllBalances RPC method.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct QueryAllBalancesRequest {
    /// address is the address to query balances for.
    #[prost(string, tag = "1")]
    pub address: String,
    /// pagination defines an optional pagination for the request.
    #[prost(message, optional, tag = "2")]
    pub pagination: Option<PageRequest>,
    /// resolve_denom is the flag to resolve the denom into a human-readable form from the metadata.
    #[prost(bool, tag = "3")]
    pub resolve_denom: bool,
}

/// QueryAllBalancesResponse is the response type for the Query/AllBalances RPC
/// method.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct QueryAllBalancesResponse {
    /// balances is the balances of all the coins.
    #[prost(message, repeated, tag = "1")]
    pub balances: Vec<Coin>,
    /// pagination defines the pagination in the response.
    #[prost(message, optional, tag = "2")]
    pub pagination: Option<PageResponse>,
}

/// QuerySpendableBalancesRequest defines the gRPC request structure for querying
/// an account's spendable balances.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct QuerySpendableBalancesRequest {
    #[prost(string, tag = "1")]
    pub address: String,
    #[prost(message, optional, tag = "2")]
    pub pagination: Option<PageRequest>,
}

/// QuerySpendableBalancesResponse defines the gRPC response structure for querying
/// an account's spendable balances.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct QuerySpendableBalancesResponse {
    #[prost(message, repeated, tag = "1")]
    pub balances: Vec<Coin>,
    #[prost(message, optional, tag = "2")]
    pub pagination: Option<PageResponse>,
}

/// QuerySpendableBalanceByDenomRequest defines the gRPC request structure for
/// querying an account's spendable balance for a specific denom.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct QuerySpendableBalanceByDenomRequest {
    #[prost(string, tag = "1")]
    pub address: String,
    #[prost(string, tag = "2")]
    pub denom: String,
}

/// QuerySpendableBalanceByDenomResponse defines the gRPC response structure for
/// querying an account's spendable balance for a specific denom.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct QuerySpendableBalanceByDenomResponse {
    #[prost(message, optional, tag = "1")]
    pub balance: Option<Coin>,
}

/// QueryTotalSupplyRequest is the request type for the Query/TotalSupply RPC
/// method.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct QueryTotalSupplyRequest {
    #[prost(message, optional, tag = "1")]
    pub pagination: Option<PageRequest>,
}

/// QueryTotalSupplyResponse is the response type for the Query/TotalSupply RPC
/// method
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct QueryTotalSupplyResponse {
    /// supply is the supply of the coins
    #[prost(message, repeated, tag = "1")]
    pub supply: Vec<Coin>,
    #[prost(message, optional, tag = "2")]
    pub pagination: Option<PageResponse>,
}

/// QuerySupplyOfRequest is the request type for the Query/SupplyOf RPC method.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct QuerySupplyOfRequest {
    #[prost(string, tag = "1")]
    pub denom: String,
}

/// QuerySupplyOfResponse is the response type for the Query/SupplyOf RPC method.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct QuerySupplyOfResponse {
    #[prost(message, optional, tag = "1")]
    pub amount: Option<Coin>,
}

/// QueryParamsRequest defines the request type for querying x/bank parameters.
#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct QueryParamsRequest {}

/// QueryParamsResponse defines the response type for querying x/bank parameters.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct QueryParamsResponse {
    #[prost(message, optional, tag = "1")]
    pub params: Option<Params>,
}

/// QueryDenomsMetadataRequest is the request type for the Query/DenomsMetadata RPC method.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct QueryDenomsMetadataRequest {
    #[prost(message, optional, tag = "1")]
    pub pagination: Option<PageRequest>,
}

/// QueryDenomsMetadataResponse is the response type for the Query/DenomsMetadata RPC
/// method.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct QueryDenomsMetadataResponse {
    /// metadata provides the client information for all the registered tokens.
    #[prost(message, repeated, tag = "1")]
    pub metadatas: Vec<Metadata>,
    #[prost(message, optional, tag = "2")]
    pub pagination: Option<PageResponse>,
}

/// QueryDenomMetadataRequest is the request type for the Query/DenomMetadata RPC method.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct QueryDenomMetadataRequest {
    #[prost(string, tag = "1")]
    pub denom: String,
}

/// QueryDenomMetadataResponse is the response type for the Query/DenomMetadata RPC
/// method.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct QueryDenomMetadataResponse {
    #[prost(message, optional, tag = "1")]
    pub metadata: Option<Metadata>,
}

/// QueryDenomMetadataByQueryStringRequest is the request type for the Query/DenomMetadata RPC method.
/// Identical with QueryDenomMetadataRequest but receives denom as query string.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct QueryDenomMetadataByQueryStringRequest {
    #[prost(string, tag = "1")]
    pub denom: String,
}

/// QueryDenomMetadataByQueryStringResponse is the response type for the Query/DenomMetadata RPC
/// method. Identical with QueryDenomMetadataResponse but receives denom as query string in request.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct QueryDenomMetadataByQueryStringResponse {
    #[prost(message, optional, tag = "1")]
    pub metadata: Option<Metadata>,
}

/// QueryDenomOwnersRequest defines the request type for the DenomOwners RPC query,
/// which queries for a paginated set of all account holders of a particular
/// denomination.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct QueryDenomOwnersRequest {
    #[prost(string, tag = "1")]
    pub denom: String,
    #[prost(message, optional, tag = "2")]
    pub pagination: Option<PageRequest>,
}

/// DenomOwner defines structure representing an account that owns or holds a
/// particular denominated token. It contains the account address and account
/// balance of the denominated token.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DenomOwner {
    #[prost(string, tag = "1")]
    pub address: String,
    #[prost(message, optional, tag = "2")]
    pub balance: Option<Coin>,
}

/// QueryDenomOwnersResponse defines the RPC response of a DenomOwners RPC query.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct QueryDenomOwnersResponse {
    #[prost(message, repeated, tag = "1")]
    pub denom_owners: Vec<DenomOwner>,
    #[prost(message, optional, tag = "2")]
    pub pagination: Option<PageResponse>,
}

/// QueryDenomOwnersByQueryRequest defines the request type for the DenomOwnersByQuery RPC query,
/// which queries for a paginated set of all account holders of a particular
/// denomination.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct QueryDenomOwnersByQueryRequest {
    #[prost(string, tag = "1")]
    pub denom: String,
    #[prost(message, optional, tag = "2")]
    pub pagination: Option<PageRequest>,
}

/// QueryDenomOwnersByQueryResponse defines the RPC response of a DenomOwnersByQuery RPC query.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct QueryDenomOwnersByQueryResponse {
    #[prost(message, repeated, tag = "1")]
    pub denom_owners: Vec<DenomOwner>,
    #[prost(message, optional, tag = "2")]
    pub pagination: Option<PageResponse>,
}

/// QuerySendEnabledRequest defines the RPC request for looking up SendEnabled entries.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct QuerySendEnabledRequest {
    /// denoms is the specific denoms you want look up. Leave empty to get all entries.
    #[prost(string, repeated, tag = "1")]
    pub denoms: Vec<String>,
    /// pagination defines an optional pagination for the request. This field is
    /// only read if the denoms field is empty.
    #[prost(message, optional, tag = "99")]
    pub pagination: Option<PageRequest>,
}

/// QuerySendEnabledResponse defines the RPC response of a SendEnable query.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct QuerySendEnabledResponse {
    #[prost(message, repeated, tag = "1")]
    pub send_enabled: Vec<SendEnabled>,
    /// pagination defines the pagination in the response. This field is only
    /// populated if the denoms field in the request is empty.
    #[prost(message, optional, tag = "99")]
    pub pagination: Option<PageResponse>,
}

cosmos_message!(QueryBalanceRequest => QueryBalanceRequestAmino, QueryBalanceRequestPartial;
    "/cosmos.bank.v1beta1.QueryBalanceRequest", "cosmos-sdk/QueryBalanceRequest" {
        address: string,
        denom: string,
    });

cosmos_message!(QueryBalanceResponse => QueryBalanceResponseAmino, QueryBalanceResponsePartial;
    "/cosmos.bank.v1beta1.QueryBalanceResponse", "cosmos-sdk/QueryBalanceResponse" {
        balance: message(Coin),
    });

cosmos_message!(QueryAllBalancesRequest => QueryAllBalancesRequestAmino, QueryAllBalancesRequestPartial;
    "/cosmos.bank.v1beta1.QueryAllBalancesRequest", "cosmos-sdk/QueryAllBalancesRequest" {
        address: string,
        pagination: message(PageRequest),
        resolve_denom: bool,
    });

cosmos_message!(QueryAllBalancesResponse => QueryAllBalancesResponseAmino, QueryAllBalancesResponsePartial;
    "/cosmos.bank.v1beta1.QueryAllBalancesResponse", "cosmos-sdk/QueryAllBalancesResponse" {
        balances: messages(Coin),
        pagination: message(PageResponse),
    });

cosmos_message!(QuerySpendableBalancesRequest => QuerySpendableBalancesRequestAmino, QuerySpendableBalancesRequestPartial;
    "/cosmos.bank.v1beta1.QuerySpendableBalancesRequest", "cosmos-sdk/QuerySpendableBalancesRequest" {
        address: string,
        pagination: message(PageRequest),
    });

cosmos_message!(QuerySpendableBalancesResponse => QuerySpendableBalancesResponseAmino, QuerySpendableBalancesResponsePartial;
    "/cosmos.bank.v1beta1.QuerySpendableBalancesResponse", "cosmos-sdk/QuerySpendableBalancesResponse" {
        balances: messages(Coin),
        pagination: message(PageResponse),
    });

cosmos_message!(QuerySpendableBalanceByDenomRequest => QuerySpendableBalanceByDenomRequestAmino, QuerySpendableBalanceByDenomRequestPartial;
    "/cosmos.bank.v1beta1.QuerySpendableBalanceByDenomRequest", "cosmos-sdk/QuerySpendableBalanceByDenomRequest" {
        address: string,
        denom: string,
    });

cosmos_message!(QuerySpendableBalanceByDenomResponse => QuerySpendableBalanceByDenomResponseAmino, QuerySpendableBalanceByDenomResponsePartial;
    "/cosmos.bank.v1beta1.QuerySpendableBalanceByDenomResponse", "cosmos-sdk/QuerySpendableBalanceByDenomResponse" {
        balance: message(Coin),
    });

cosmos_message!(QueryTotalSupplyRequest => QueryTotalSupplyRequestAmino, QueryTotalSupplyRequestPartial;
    "/cosmos.bank.v1beta1.QueryTotalSupplyRequest", "cosmos-sdk/QueryTotalSupplyRequest" {
        pagination: message(PageRequest),
    });

cosmos_message!(QueryTotalSupplyResponse => QueryTotalSupplyResponseAmino, QueryTotalSupplyResponsePartial;
    "/cosmos.bank.v1beta1.QueryTotalSupplyResponse", "cosmos-sdk/QueryTotalSupplyResponse" {
        supply: messages(Coin),
        pagination: message(PageResponse),
    });

cosmos_message!(QuerySupplyOfRequest => QuerySupplyOfRequestAmino, QuerySupplyOfRequestPartial;
    "/cosmos.bank.v1beta1.QuerySupplyOfRequest", "cosmos-sdk/QuerySupplyOfRequest" {
        denom: string,
    });

cosmos_message!(QuerySupplyOfResponse => QuerySupplyOfResponseAmino, QuerySupplyOfResponsePartial;
    "/cosmos.bank.v1beta1.QuerySupplyOfResponse", "cosmos-sdk/QuerySupplyOfResponse" {
        amount: message(Coin),
    });

cosmos_message!(QueryParamsRequest => QueryParamsRequestAmino, QueryParamsRequestPartial;
    "/cosmos.bank.v1beta1.QueryParamsRequest", "cosmos-sdk/QueryParamsRequest" {});

cosmos_message!(QueryParamsResponse => QueryParamsResponseAmino, QueryParamsResponsePartial;
    "/cosmos.bank.v1beta1.QueryParamsResponse", "cosmos-sdk/QueryParamsResponse" {
        params: message(Params),
    });

cosmos_message!(QueryDenomsMetadataRequest => QueryDenomsMetadataRequestAmino, QueryDenomsMetadataRequestPartial;
    "/cosmos.bank.v1beta1.QueryDenomsMetadataRequest", "cosmos-sdk/QueryDenomsMetadataRequest" {
        pagination: message(PageRequest),
    });

cosmos_message!(QueryDenomsMetadataResponse => QueryDenomsMetadataResponseAmino, QueryDenomsMetadataResponsePartial;
    "/cosmos.bank.v1beta1.QueryDenomsMetadataResponse", "cosmos-sdk/QueryDenomsMetadataResponse" {
        metadatas: messages(Metadata),
        pagination: message(PageResponse),
    });

cosmos_message!(QueryDenomMetadataRequest => QueryDenomMetadataRequestAmino, QueryDenomMetadataRequestPartial;
    "/cosmos.bank.v1beta1.QueryDenomMetadataRequest", "cosmos-sdk/QueryDenomMetadataRequest" {
        denom: string,
    });

cosmos_message!(QueryDenomMetadataResponse => QueryDenomMetadataResponseAmino, QueryDenomMetadataResponsePartial;
    "/cosmos.bank.v1beta1.QueryDenomMetadataResponse", "cosmos-sdk/QueryDenomMetadataResponse" {
        metadata: message(Metadata),
    });

cosmos_message!(QueryDenomMetadataByQueryStringRequest => QueryDenomMetadataByQueryStringRequestAmino, QueryDenomMetadataByQueryStringRequestPartial;
    "/cosmos.bank.v1beta1.QueryDenomMetadataByQueryStringRequest", "cosmos-sdk/QueryDenomMetadataByQueryStringRequest" {
        denom: string,
    });

cosmos_message!(QueryDenomMetadataByQueryStringResponse => QueryDenomMetadataByQueryStringResponseAmino, QueryDenomMetadataByQueryStringResponsePartial;
    "/cosmos.bank.v1beta1.QueryDenomMetadataByQueryStringResponse", "cosmos-sdk/QueryDenomMetadataByQueryStringResponse" {
        metadata: message(Metadata),
    });

cosmos_message!(QueryDenomOwnersRequest => QueryDenomOwnersRequestAmino, QueryDenomOwnersRequestPartial;
    "/cosmos.bank.v1beta1.QueryDenomOwnersRequest", "cosmos-sdk/QueryDenomOwnersRequest" {
        denom: string,
        pagination: message(PageRequest),
    });

cosmos_message!(DenomOwner => DenomOwnerAmino, DenomOwnerPartial;
    "/cosmos.bank.v1beta1.DenomOwner", "cosmos-sdk/DenomOwner" {
        address: string,
        balance: message(Coin),
    });

cosmos_message!(QueryDenomOwnersResponse => QueryDenomOwnersResponseAmino, QueryDenomOwnersResponsePartial;
    "/cosmos.bank.v1beta1.QueryDenomOwnersResponse", "cosmos-sdk/QueryDenomOwnersResponse" {
        denom_owners: messages(DenomOwner),
        pagination: message(PageResponse),
    });

cosmos_message!(QueryDenomOwnersByQueryRequest => QueryDenomOwnersByQueryRequestAmino, QueryDenomOwnersByQueryRequestPartial;
    "/cosmos.bank.v1beta1.QueryDenomOwnersByQueryRequest", "cosmos-sdk/QueryDenomOwnersByQueryRequest" {
        denom: string,
        pagination: message(PageRequest),
    });

cosmos_message!(QueryDenomOwnersByQueryResponse => QueryDenomOwnersByQueryResponseAmino, QueryDenomOwnersByQueryResponsePartial;
    "/cosmos.bank.v1beta1.QueryDenomOwnersByQueryResponse", "cosmos-sdk/QueryDenomOwnersByQueryResponse" {
        denom_owners: messages(DenomOwner),
        pagination: message(PageResponse),
    });

cosmos_message!(QuerySendEnabledRequest => QuerySendEnabledRequestAmino, QuerySendEnabledRequestPartial;
    "/cosmos.bank.v1beta1.QuerySendEnabledRequest", "cosmos-sdk/QuerySendEnabledRequest" {
        denoms: strings,
        pagination: message(PageRequest),
    });

cosmos_message!(QuerySendEnabledResponse => QuerySendEnabledResponseAmino, QuerySendEnabledResponsePartial;
    "/cosmos.bank.v1beta1.QuerySendEnabledResponse", "cosmos-sdk/QuerySendEnabledResponse" {
        send_enabled: messages(SendEnabled),
        pagination: message(PageResponse),
    });

pub(super) fn register(registry: &TypeRegistry) {
    register_types!(
        registry,
        [
            QueryBalanceRequest,
            QueryBalanceResponse,
            QueryAllBalancesRequest,
            QueryAllBalancesResponse,
            QuerySpendableBalancesRequest,
            QuerySpendableBalancesResponse,
            QuerySpendableBalanceByDenomRequest,
            QuerySpendableBalanceByDenomResponse,
            QueryTotalSupplyRequest,
            QueryTotalSupplyResponse,
            QuerySupplyOfRequest,
            QuerySupplyOfResponse,
            QueryParamsRequest,
            QueryParamsResponse,
            QueryDenomsMetadataRequest,
            QueryDenomsMetadataResponse,
            QueryDenomMetadataRequest,
            QueryDenomMetadataResponse,
            QueryDenomMetadataByQueryStringRequest,
            QueryDenomMetadataByQueryStringResponse,
            QueryDenomOwnersRequest,
            DenomOwner,
            QueryDenomOwnersResponse,
            QueryDenomOwnersByQueryRequest,
            QueryDenomOwnersByQueryResponse,
            QuerySendEnabledRequest,
            QuerySendEnabledResponse,
        ]
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use prost::Message;

    #[test]
    fn test_send_enabled_pagination_tag() {
        let req = QuerySendEnabledRequest {
            denoms: vec![],
            pagination: Some(PageRequest {
                limit: 1,
                ..Default::default()
            }),
        };
        // field 99, wire type 2
        assert_eq!(&req.encode_to_vec()[..2], &[0x9a, 0x06]);
        assert_eq!(
            QuerySendEnabledRequest::decode(req.encode_to_vec().as_slice()).unwrap(),
            req
        );
    }

    #[test]
    fn test_absent_balance_stays_absent() {
        let res = QueryBalanceResponse::decode(&[][..]).unwrap();
        assert_eq!(res.balance, None);
        let res = QueryBalanceResponse {
            balance: Some(Coin::default()),
        };
        assert_eq!(res.encode_to_vec(), vec![0x0a, 0x00]);
    }
}
