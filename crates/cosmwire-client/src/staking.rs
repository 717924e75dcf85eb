//! Client for `cosmos.staking.v1beta1.Query`.

use crate::{rpc_methods, Rpc};
use cosmwire_types::cosmos::staking::v1beta1::*;
use std::sync::Arc;

const SERVICE: &str = "cosmos.staking.v1beta1.Query";

/// Staking module query client
#[derive(Clone)]
pub struct QueryClient {
    rpc: Arc<dyn Rpc>,
}

impl QueryClient {
    pub fn new(rpc: Arc<dyn Rpc>) -> Self {
        Self { rpc }
    }

    rpc_methods! { SERVICE;
        /// Validators matching a bond status
        validators => "Validators" (QueryValidatorsRequest) -> QueryValidatorsResponse;
        validator => "Validator" (QueryValidatorRequest) -> QueryValidatorResponse;
        validator_delegations => "ValidatorDelegations" (QueryValidatorDelegationsRequest) -> QueryValidatorDelegationsResponse;
        validator_unbonding_delegations => "ValidatorUnbondingDelegations" (QueryValidatorUnbondingDelegationsRequest) -> QueryValidatorUnbondingDelegationsResponse;
        delegation => "Delegation" (QueryDelegationRequest) -> QueryDelegationResponse;
        unbonding_delegation => "UnbondingDelegation" (QueryUnbondingDelegationRequest) -> QueryUnbondingDelegationResponse;
        delegator_delegations => "DelegatorDelegations" (QueryDelegatorDelegationsRequest) -> QueryDelegatorDelegationsResponse;
        delegator_unbonding_delegations => "DelegatorUnbondingDelegations" (QueryDelegatorUnbondingDelegationsRequest) -> QueryDelegatorUnbondingDelegationsResponse;
        redelegations => "Redelegations" (QueryRedelegationsRequest) -> QueryRedelegationsResponse;
        delegator_validators => "DelegatorValidators" (QueryDelegatorValidatorsRequest) -> QueryDelegatorValidatorsResponse;
        delegator_validator => "DelegatorValidator" (QueryDelegatorValidatorRequest) -> QueryDelegatorValidatorResponse;
        /// Header and validator set stored at a past height
        historical_info => "HistoricalInfo" (QueryHistoricalInfoRequest) -> QueryHistoricalInfoResponse;
        pool => "Pool" (QueryPoolRequest) -> QueryPoolResponse;
        params => "Params" (QueryParamsRequest) -> QueryParamsResponse;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockRpc;
    use prost::Message;

    #[tokio::test]
    async fn test_validators_sends_status_filter() {
        let reply = QueryValidatorsResponse {
            validators: vec![Validator {
                operator_address: "cosmosvaloper1abc".to_string(),
                status: BondStatus::Bonded as i32,
                tokens: "5000".to_string(),
                ..Default::default()
            }],
            pagination: None,
        };
        let rpc = Arc::new(MockRpc::replying(&reply));
        let client = QueryClient::new(rpc.clone());

        let request = QueryValidatorsRequest::with_status(BondStatus::Bonded, None);
        let response = client.validators(&request).await.unwrap();

        assert_eq!(response.validators.len(), 1);
        assert!(response.validators[0].is_bonded());
        let sent = QueryValidatorsRequest::decode(rpc.calls()[0].2.as_slice()).unwrap();
        assert_eq!(sent.status, "BOND_STATUS_BONDED");
        assert_eq!(rpc.calls()[0].1, "Validators");
    }

    #[tokio::test]
    async fn test_pool() {
        let rpc = Arc::new(MockRpc::replying(&QueryPoolResponse {
            pool: Some(Pool {
                not_bonded_tokens: "10".to_string(),
                bonded_tokens: "90".to_string(),
            }),
        }));
        let client = QueryClient::new(rpc.clone());

        let pool = client.pool(&QueryPoolRequest {}).await.unwrap().pool.unwrap();

        assert_eq!(pool.bonded_tokens, "90");
        assert_eq!(rpc.calls()[0].0, "cosmos.staking.v1beta1.Query");
    }

    #[tokio::test]
    async fn test_every_method_routes_to_its_rpc() {
        let rpc = Arc::new(MockRpc::default());
        let client = QueryClient::new(rpc.clone());

        client.validators(&QueryValidatorsRequest::default()).await.unwrap();
        client.validator(&QueryValidatorRequest::default()).await.unwrap();
        client.validator_delegations(&QueryValidatorDelegationsRequest::default()).await.unwrap();
        client.validator_unbonding_delegations(&QueryValidatorUnbondingDelegationsRequest::default()).await.unwrap();
        client.delegation(&QueryDelegationRequest::default()).await.unwrap();
        client.unbonding_delegation(&QueryUnbondingDelegationRequest::default()).await.unwrap();
        client.delegator_delegations(&QueryDelegatorDelegationsRequest::default()).await.unwrap();
        client.delegator_unbonding_delegations(&QueryDelegatorUnbondingDelegationsRequest::default()).await.unwrap();
        client.redelegations(&QueryRedelegationsRequest::default()).await.unwrap();
        client.delegator_validators(&QueryDelegatorValidatorsRequest::default()).await.unwrap();
        client.delegator_validator(&QueryDelegatorValidatorRequest::default()).await.unwrap();
        client.historical_info(&QueryHistoricalInfoRequest::default()).await.unwrap();
        client.pool(&QueryPoolRequest::default()).await.unwrap();
        client.params(&QueryParamsRequest::default()).await.unwrap();

        let calls = rpc.calls();
        assert!(calls.iter().all(|(service, _, _)| service == "cosmos.staking.v1beta1.Query"));
        let methods: Vec<&str> = calls.iter().map(|(_, method, _)| method.as_str()).collect();
        assert_eq!(
            methods,
            [
                "Validators",
                "Validator",
                "ValidatorDelegations",
                "ValidatorUnbondingDelegations",
                "Delegation",
                "UnbondingDelegation",
                "DelegatorDelegations",
                "DelegatorUnbondingDelegations",
                "Redelegations",
                "DelegatorValidators",
                "DelegatorValidator",
                "HistoricalInfo",
                "Pool",
                "Params",
            ]
        );
    }
}
