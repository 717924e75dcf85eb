//! Client for `cosmos.gov.v1beta1.Query`.

use crate::{rpc_methods, Rpc};
use cosmwire_types::cosmos::gov::v1beta1::*;
use std::sync::Arc;

const SERVICE: &str = "cosmos.gov.v1beta1.Query";

/// Governance module query client
#[derive(Clone)]
pub struct QueryClient {
    rpc: Arc<dyn Rpc>,
}

impl QueryClient {
    pub fn new(rpc: Arc<dyn Rpc>) -> Self {
        Self { rpc }
    }

    rpc_methods! { SERVICE;
        proposal => "Proposal" (QueryProposalRequest) -> QueryProposalResponse;
        /// Proposals filtered by status, voter and depositor
        proposals => "Proposals" (QueryProposalsRequest) -> QueryProposalsResponse;
        vote => "Vote" (QueryVoteRequest) -> QueryVoteResponse;
        votes => "Votes" (QueryVotesRequest) -> QueryVotesResponse;
        /// One parameter set, selected by `params_type`
        params => "Params" (QueryParamsRequest) -> QueryParamsResponse;
        deposit => "Deposit" (QueryDepositRequest) -> QueryDepositResponse;
        deposits => "Deposits" (QueryDepositsRequest) -> QueryDepositsResponse;
        tally_result => "TallyResult" (QueryTallyResultRequest) -> QueryTallyResultResponse;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockRpc;
    use prost::Message;

    #[tokio::test]
    async fn test_params_sends_params_type() {
        let rpc = Arc::new(MockRpc::replying(&QueryParamsResponse::default()));
        let client = QueryClient::new(rpc.clone());

        client
            .params(&QueryParamsRequest {
                params_type: params_type::TALLYING.to_string(),
            })
            .await
            .unwrap();

        let calls = rpc.calls();
        assert_eq!(calls[0].0, "cosmos.gov.v1beta1.Query");
        assert_eq!(calls[0].1, "Params");
        let sent = QueryParamsRequest::decode(calls[0].2.as_slice()).unwrap();
        assert_eq!(sent.params_type, "tallying");
    }

    #[tokio::test]
    async fn test_proposal_status_survives() {
        let rpc = Arc::new(MockRpc::replying(&QueryProposalResponse {
            proposal: Some(Proposal {
                proposal_id: 4,
                status: ProposalStatus::VotingPeriod as i32,
                ..Default::default()
            }),
        }));
        let client = QueryClient::new(rpc);

        let proposal = client
            .proposal(&QueryProposalRequest { proposal_id: 4 })
            .await
            .unwrap()
            .proposal
            .unwrap();

        assert_eq!(proposal.proposal_id, 4);
        assert_eq!(proposal.status(), ProposalStatus::VotingPeriod);
    }

    #[tokio::test]
    async fn test_every_method_routes_to_its_rpc() {
        let rpc = Arc::new(MockRpc::default());
        let client = QueryClient::new(rpc.clone());

        client.proposal(&QueryProposalRequest::default()).await.unwrap();
        client.proposals(&QueryProposalsRequest::default()).await.unwrap();
        client.vote(&QueryVoteRequest::default()).await.unwrap();
        client.votes(&QueryVotesRequest::default()).await.unwrap();
        client.params(&QueryParamsRequest::default()).await.unwrap();
        client.deposit(&QueryDepositRequest::default()).await.unwrap();
        client.deposits(&QueryDepositsRequest::default()).await.unwrap();
        client.tally_result(&QueryTallyResultRequest::default()).await.unwrap();

        let calls = rpc.calls();
        assert!(calls.iter().all(|(service, _, _)| service == "cosmos.gov.v1beta1.Query"));
        let methods: Vec<&str> = calls.iter().map(|(_, method, _)| method.as_str()).collect();
        assert_eq!(
            methods,
            [
                "Proposal",
                "Proposals",
                "Vote",
                "Votes",
                "Params",
                "Deposit",
                "Deposits",
                "TallyResult",
            ]
        );
    }
}
