//! Client for `cosmos.auth.v1beta1.Query`.

use crate::{rpc_methods, Rpc};
use cosmwire_types::cosmos::auth::v1beta1::*;
use std::sync::Arc;

const SERVICE: &str = "cosmos.auth.v1beta1.Query";

/// Auth module query client
#[derive(Clone)]
pub struct QueryClient {
    rpc: Arc<dyn Rpc>,
}

impl QueryClient {
    pub fn new(rpc: Arc<dyn Rpc>) -> Self {
        Self { rpc }
    }

    rpc_methods! { SERVICE;
        /// All accounts, paginated
        accounts => "Accounts" (QueryAccountsRequest) -> QueryAccountsResponse;
        /// Account by bech32 address, packed in an `Any`
        account => "Account" (QueryAccountRequest) -> QueryAccountResponse;
        account_address_by_id => "AccountAddressByID" (QueryAccountAddressByIDRequest) -> QueryAccountAddressByIDResponse;
        params => "Params" (QueryParamsRequest) -> QueryParamsResponse;
        module_accounts => "ModuleAccounts" (QueryModuleAccountsRequest) -> QueryModuleAccountsResponse;
        module_account_by_name => "ModuleAccountByName" (QueryModuleAccountByNameRequest) -> QueryModuleAccountByNameResponse;
        bech32_prefix => "Bech32Prefix" (Bech32PrefixRequest) -> Bech32PrefixResponse;
        address_bytes_to_string => "AddressBytesToString" (AddressBytesToStringRequest) -> AddressBytesToStringResponse;
        address_string_to_bytes => "AddressStringToBytes" (AddressStringToBytesRequest) -> AddressStringToBytesResponse;
        /// Base account info without unpacking the account type
        account_info => "AccountInfo" (QueryAccountInfoRequest) -> QueryAccountInfoResponse;
    }
}
