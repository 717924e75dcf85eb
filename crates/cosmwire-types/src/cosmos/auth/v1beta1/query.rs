use super::auth::{BaseAccount, Params};
use crate::cosmos::base::query::v1beta1::{PageRequest, PageResponse};
use cosmwire_codec::{cosmos_message, register_types, Any, TypeRegistry};

/// QueryAccountsRequest is the request type for the Query/Accounts RPC method.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct QueryAccountsRequest {
    /// pagination defines an optional pagination for the request.
    #[prost(message, optional, tag = "1")]
    pub pagination: Option<PageRequest>,
}

/// QueryAccountsResponse is the response type for the Query/Accounts RPC method.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct QueryAccountsResponse {
    /// accounts are the existing accounts
    #[prost(message, repeated, tag = "1")]
    pub accounts: Vec<Any>,
    /// pagination defines the pagination in the response.
    #[prost(message, optional, tag = "2")]
    pub pagination: Option<PageResponse>,
}

/// QueryAccountRequest is the request type for the Query/Account RPC method.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct QueryAccountRequest {
    /// address defines the address to query for.
    #[prost(string, tag = "1")]
    pub address: String,
}

/// QueryAccountResponse is the response type for the Query/Account RPC method.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct QueryAccountResponse {
    /// account defines the account of the corresponding address.
    #[prost(message, optional, tag = "1")]
    pub account: Option<Any>,
}

/// QueryParamsRequest is the request type for the Query/Params RPC method.
#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct QueryParamsRequest {}

/// QueryParamsResponse is the response type for the Query/Params RPC method.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct QueryParamsResponse {
    /// params defines the parameters of the module.
    #[prost(message, optional, tag = "1")]
    pub params: Option<Params>,
}

/// QueryModuleAccountsRequest is the request type for the Query/ModuleAccounts RPC method.
#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct QueryModuleAccountsRequest {}

/// QueryModuleAccountsResponse is the response type for the Query/ModuleAccounts RPC method.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct QueryModuleAccountsResponse {
    #[prost(message, repeated, tag = "1")]
    pub accounts: Vec<Any>,
}

/// QueryModuleAccountByNameRequest is the request type for the Query/ModuleAccountByName RPC method.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct QueryModuleAccountByNameRequest {
    #[prost(string, tag = "1")]
    pub name: String,
}

/// QueryModuleAccountByNameResponse is the response type for the Query/ModuleAccountByName RPC method.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct QueryModuleAccountByNameResponse {
    #[prost(message, optional, tag = "1")]
    pub account: Option<Any>,
}

/// Bech32PrefixRequest is the request type for Bech32Prefix rpc method.
#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct Bech32PrefixRequest {}

/// Bech32PrefixResponse is the response type for Bech32Prefix rpc method.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Bech32PrefixResponse {
    #[prost(string, tag = "1")]
    pub bech32_prefix: String,
}

/// AddressBytesToStringRequest is the request type for AddressString rpc method.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AddressBytesToStringRequest {
    #[prost(bytes = "vec", tag = "1")]
    pub address_bytes: Vec<u8>,
}

/// AddressBytesToStringResponse is the response type for AddressString rpc method.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AddressBytesToStringResponse {
    #[prost(string, tag = "1")]
    pub address_string: String,
}

/// AddressStringToBytesRequest is request type for AddressBytes rpc method.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AddressStringToBytesRequest {
    #[prost(string, tag = "1")]
    pub address_string: String,
}

/// AddressStringToBytesResponse is the response type for AddressBytes rpc method.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AddressStringToBytesResponse {
    #[prost(bytes = "vec", tag = "1")]
    pub address_bytes: Vec<u8>,
}

/// QueryAccountAddressByIDRequest is the request type for AccountAddressByID rpc method
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct QueryAccountAddressByIDRequest {
    /// Deprecated, use account_id instead
    ///
    /// id is the account number of the address to be queried. This field
    /// should have been an uint64 (like all account numbers), and will be
    /// updated to uint64 in a future version of the auth query.
    #[prost(int64, tag = "1")]
    pub id: i64,
    /// account_id is the account number of the address to be queried.
    #[prost(uint64, tag = "2")]
    pub account_id: u64,
}

/// QueryAccountAddressByIDResponse is the response type for AccountAddressByID rpc method
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct QueryAccountAddressByIDResponse {
    #[prost(string, tag = "1")]
    pub account_address: String,
}

/// QueryAccountInfoRequest is the Query/AccountInfo request type.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct QueryAccountInfoRequest {
    /// address is the account address string.
    #[prost(string, tag = "1")]
    pub address: String,
}

/// QueryAccountInfoResponse is the Query/AccountInfo response type.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct QueryAccountInfoResponse {
    /// info is the account info which is represented by BaseAccount.
    #[prost(message, optional, tag = "1")]
    pub info: Option<BaseAccount>,
}

cosmos_message!(QueryAccountsRequest => QueryAccountsRequestAmino, QueryAccountsRequestPartial;
    "/cosmos.auth.v1beta1.QueryAccountsRequest", "cosmos-sdk/QueryAccountsRequest" {
        pagination: message(PageRequest),
    });

cosmos_message!(QueryAccountsResponse => QueryAccountsResponseAmino, QueryAccountsResponsePartial;
    "/cosmos.auth.v1beta1.QueryAccountsResponse", "cosmos-sdk/QueryAccountsResponse" {
        accounts: anys,
        pagination: message(PageResponse),
    });

cosmos_message!(QueryAccountRequest => QueryAccountRequestAmino, QueryAccountRequestPartial;
    "/cosmos.auth.v1beta1.QueryAccountRequest", "cosmos-sdk/QueryAccountRequest" {
        address: string,
    });

cosmos_message!(QueryAccountResponse => QueryAccountResponseAmino, QueryAccountResponsePartial;
    "/cosmos.auth.v1beta1.QueryAccountResponse", "cosmos-sdk/QueryAccountResponse" {
        account: any,
    });

cosmos_message!(QueryParamsRequest => QueryParamsRequestAmino, QueryParamsRequestPartial;
    "/cosmos.auth.v1beta1.QueryParamsRequest", "cosmos-sdk/QueryParamsRequest" {});

cosmos_message!(QueryParamsResponse => QueryParamsResponseAmino, QueryParamsResponsePartial;
    "/cosmos.auth.v1beta1.QueryParamsResponse", "cosmos-sdk/QueryParamsResponse" {
        params: message(Params),
    });

cosmos_message!(QueryModuleAccountsRequest => QueryModuleAccountsRequestAmino, QueryModuleAccountsRequestPartial;
    "/cosmos.auth.v1beta1.QueryModuleAccountsRequest", "cosmos-sdk/QueryModuleAccountsRequest" {});

cosmos_message!(QueryModuleAccountsResponse => QueryModuleAccountsResponseAmino, QueryModuleAccountsResponsePartial;
    "/cosmos.auth.v1beta1.QueryModuleAccountsResponse", "cosmos-sdk/QueryModuleAccountsResponse" {
        accounts: anys,
    });

cosmos_message!(QueryModuleAccountByNameRequest => QueryModuleAccountByNameRequestAmino, QueryModuleAccountByNameRequestPartial;
    "/cosmos.auth.v1beta1.QueryModuleAccountByNameRequest", "cosmos-sdk/QueryModuleAccountByNameRequest" {
        name: string,
    });

cosmos_message!(QueryModuleAccountByNameResponse => QueryModuleAccountByNameResponseAmino, QueryModuleAccountByNameResponsePartial;
    "/cosmos.auth.v1beta1.QueryModuleAccountByNameResponse", "cosmos-sdk/QueryModuleAccountByNameResponse" {
        account: any,
    });

cosmos_message!(Bech32PrefixRequest => Bech32PrefixRequestAmino, Bech32PrefixRequestPartial;
    "/cosmos.auth.v1beta1.Bech32PrefixRequest", "cosmos-sdk/Bech32PrefixRequest" {});

cosmos_message!(Bech32PrefixResponse => Bech32PrefixResponseAmino, Bech32PrefixResponsePartial;
    "/cosmos.auth.v1beta1.Bech32PrefixResponse", "cosmos-sdk/Bech32PrefixResponse" {
        bech32_prefix: string,
    });

cosmos_message!(AddressBytesToStringRequest => AddressBytesToStringRequestAmino, AddressBytesToStringRequestPartial;
    "/cosmos.auth.v1beta1.AddressBytesToStringRequest", "cosmos-sdk/AddressBytesToStringRequest" {
        address_bytes: bytes,
    });

cosmos_message!(AddressBytesToStringResponse => AddressBytesToStringResponseAmino, AddressBytesToStringResponsePartial;
    "/cosmos.auth.v1beta1.AddressBytesToStringResponse", "cosmos-sdk/AddressBytesToStringResponse" {
        address_string: string,
    });

cosmos_message!(AddressStringToBytesRequest => AddressStringToBytesRequestAmino, AddressStringToBytesRequestPartial;
    "/cosmos.auth.v1beta1.AddressStringToBytesRequest", "cosmos-sdk/AddressStringToBytesRequest" {
        address_string: string,
    });

cosmos_message!(AddressStringToBytesResponse => AddressStringToBytesResponseAmino, AddressStringToBytesResponsePartial;
    "/cosmos.auth.v1beta1.AddressStringToBytesResponse", "cosmos-sdk/AddressStringToBytesResponse" {
        address_bytes: bytes,
    });

cosmos_message!(QueryAccountAddressByIDRequest => QueryAccountAddressByIDRequestAmino, QueryAccountAddressByIDRequestPartial;
    "/cosmos.auth.v1beta1.QueryAccountAddressByIDRequest", "cosmos-sdk/QueryAccountAddressByIDRequest" {
        id: int64,
        account_id: uint64,
    });

cosmos_message!(QueryAccountAddressByIDResponse => QueryAccountAddressByIDResponseAmino, QueryAccountAddressByIDResponsePartial;
    "/cosmos.auth.v1beta1.QueryAccountAddressByIDResponse", "cosmos-sdk/QueryAccountAddressByIDResponse" {
        account_address: string,
    });

cosmos_message!(QueryAccountInfoRequest => QueryAccountInfoRequestAmino, QueryAccountInfoRequestPartial;
    "/cosmos.auth.v1beta1.QueryAccountInfoRequest", "cosmos-sdk/QueryAccountInfoRequest" {
        address: string,
    });

cosmos_message!(QueryAccountInfoResponse => QueryAccountInfoResponseAmino, QueryAccountInfoResponsePartial;
    "/cosmos.auth.v1beta1.QueryAccountInfoResponse", "cosmos-sdk/QueryAccountInfoResponse" {
        info: message(BaseAccount),
    });

pub(super) fn register(registry: &TypeRegistry) {
    register_types!(
        registry,
        [
            QueryAccountsRequest,
            QueryAccountsResponse,
            QueryAccountRequest,
            QueryAccountResponse,
            QueryParamsRequest,
            QueryParamsResponse,
            QueryModuleAccountsRequest,
            QueryModuleAccountsResponse,
            QueryModuleAccountByNameRequest,
            QueryModuleAccountByNameResponse,
            Bech32PrefixRequest,
            Bech32PrefixResponse,
            AddressBytesToStringRequest,
            AddressBytesToStringResponse,
            AddressStringToBytesRequest,
            AddressStringToBytesResponse,
            QueryAccountAddressByIDRequest,
            QueryAccountAddressByIDResponse,
            QueryAccountInfoRequest,
            QueryAccountInfoResponse,
        ]
    );
}

impl QueryAccountResponse {
    /// Unpack the account when it is a plain [`BaseAccount`]
    pub fn base_account(&self) -> cosmwire_codec::Result<Option<BaseAccount>> {
        match &self.account {
            Some(any) if any.is::<BaseAccount>() => any.unpack().map(Some),
            _ => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwire_codec::{AminoConvert, MessageExt};
    use prost::Message;

    #[test]
    fn test_account_response_unpacks_base_account() {
        let account = BaseAccount {
            address: "cosmos1xyz".to_string(),
            account_number: 42,
            ..Default::default()
        };
        let res = QueryAccountResponse {
            account: Some(account.to_any()),
        };
        let decoded = QueryAccountResponse::decode(res.encode_to_vec().as_slice()).unwrap();
        assert_eq!(decoded.base_account().unwrap(), Some(account));

        let other = QueryAccountResponse {
            account: Some(Params::default().to_any()),
        };
        assert_eq!(other.base_account().unwrap(), None);
    }

    #[test]
    fn test_account_address_by_id_fields() {
        let req = QueryAccountAddressByIDRequest {
            id: 0,
            account_id: u64::MAX,
        };
        let bytes = req.encode_to_vec();
        assert_eq!(bytes[0], 0x10);
        let json = req.to_amino_json().unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "account_id": "18446744073709551615" })
        );
        assert_eq!(QueryAccountAddressByIDRequest::from_amino_json(json).unwrap(), req);
    }
}
