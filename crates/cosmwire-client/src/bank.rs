//! Client for `cosmos.bank.v1beta1.Query`.

use crate::{rpc_methods, Rpc};
use cosmwire_types::cosmos::bank::v1beta1::*;
use std::sync::Arc;

const SERVICE: &str = "cosmos.bank.v1beta1.Query";

/// Bank module query client
#[derive(Clone)]
pub struct QueryClient {
    rpc: Arc<dyn Rpc>,
}

impl QueryClient {
    pub fn new(rpc: Arc<dyn Rpc>) -> Self {
        Self { rpc }
    }

    rpc_methods! { SERVICE;
        /// Balance of a single denom for an account
        balance => "Balance" (QueryBalanceRequest) -> QueryBalanceResponse;
        /// All balances of an account
        all_balances => "AllBalances" (QueryAllBalancesRequest) -> QueryAllBalancesResponse;
        /// Balances not locked by vesting or delegation
        spendable_balances => "SpendableBalances" (QuerySpendableBalancesRequest) -> QuerySpendableBalancesResponse;
        spendable_balance_by_denom => "SpendableBalanceByDenom" (QuerySpendableBalanceByDenomRequest) -> QuerySpendableBalanceByDenomResponse;
        /// Total supply of every coin
        total_supply => "TotalSupply" (QueryTotalSupplyRequest) -> QueryTotalSupplyResponse;
        supply_of => "SupplyOf" (QuerySupplyOfRequest) -> QuerySupplyOfResponse;
        params => "Params" (QueryParamsRequest) -> QueryParamsResponse;
        denom_metadata => "DenomMetadata" (QueryDenomMetadataRequest) -> QueryDenomMetadataResponse;
        denom_metadata_by_query_string => "DenomMetadataByQueryString" (QueryDenomMetadataByQueryStringRequest) -> QueryDenomMetadataByQueryStringResponse;
        denoms_metadata => "DenomsMetadata" (QueryDenomsMetadataRequest) -> QueryDenomsMetadataResponse;
        /// Every account holding a denom, with its balance
        denom_owners => "DenomOwners" (QueryDenomOwnersRequest) -> QueryDenomOwnersResponse;
        denom_owners_by_query => "DenomOwnersByQuery" (QueryDenomOwnersByQueryRequest) -> QueryDenomOwnersByQueryResponse;
        send_enabled => "SendEnabled" (QuerySendEnabledRequest) -> QuerySendEnabledResponse;
    }
}
