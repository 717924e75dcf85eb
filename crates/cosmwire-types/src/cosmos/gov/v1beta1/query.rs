use super::gov::{
    Deposit, DepositParams, Proposal, ProposalStatus, TallyParams, TallyResult, Vote, VotingParams,
};
use crate::cosmos::base::query::v1beta1::{PageRequest, PageResponse};
use cosmwire_codec::{cosmos_message, register_types, TypeRegistry};

/// QueryProposalRequest is the request type for the Query/Proposal RPC method.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct QueryProposalRequest {
    /// proposal_id defines the unique id of the proposal.
    #[prost(uint64, tag = "1")]
    pub proposal_id: u64,
}

/// QueryProposalResponse is the response type for the Query/Proposal RPC method.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct QueryProposalResponse {
    #[prost(message, optional, tag = "1")]
    pub proposal: Option<Proposal>,
}

/// QueryProposalsRequest is the request type for the Query/Proposals RPC method.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct QueryProposalsRequest {
    /// proposal_status defines the status of the proposals.
    #[prost(enumeration = "ProposalStatus", tag = "1")]
    pub proposal_status: i32,
    /// voter defines the voter address for the proposals.
    #[prost(string, tag = "2")]
    pub voter: String,
    /// depositor defines the deposit addresses from the proposals.
    #[prost(string, tag = "3")]
    pub depositor: String,
    /// pagination defines an optional pagination for the request.
    #[prost(message, optional, tag = "4")]
    pub pagination: Option<PageRequest>,
}

/// QueryProposalsResponse is the response type for the Query/Proposals RPC
/// method.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct QueryProposalsResponse {
    /// proposals defines all the requested governance proposals.
    #[prost(message, repeated, tag = "1")]
    pub proposals: Vec<Proposal>,
    /// pagination defines the pagination in the response.
    #[prost(message, optional, tag = "2")]
    pub pagination: Option<PageResponse>,
}

/// QueryVoteRequest is the request type for the Query/Vote RPC method.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct QueryVoteRequest {
    /// proposal_id defines the unique id of the proposal.
    #[prost(uint64, tag = "1")]
    pub proposal_id: u64,
    /// voter defines the voter address for the proposals.
    #[prost(string, tag = "2")]
    pub voter: String,
}

/// QueryVoteResponse is the response type for the Query/Vote RPC method.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct QueryVoteResponse {
    /// vote defines the queried vote.
    #[prost(message, optional, tag = "1")]
    pub vote: Option<Vote>,
}

/// QueryVotesRequest is the request type for the Query/Votes RPC method.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct QueryVotesRequest {
    /// proposal_id defines the unique id of the proposal.
    #[prost(uint64, tag = "1")]
    pub proposal_id: u64,
    /// pagination defines an optional pagination for the request.
    #[prost(message, optional, tag = "2")]
    pub pagination: Option<PageRequest>,
}

/// QueryVotesResponse is the response type for the Query/Votes RPC method.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct QueryVotesResponse {
    /// votes defines the queried votes.
    #[prost(message, repeated, tag = "1")]
    pub votes: Vec<Vote>,
    /// pagination defines the pagination in the response.
    #[prost(message, optional, tag = "2")]
    pub pagination: Option<PageResponse>,
}

/// QueryParamsRequest is the request type for the Query/Params RPC method.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct QueryParamsRequest {
    /// params_type defines which parameters to query for, can be one of "voting",
    /// "tallying" or "deposit".
    #[prost(string, tag = "1")]
    pub params_type: String,
}

/// QueryParamsResponse is the response type for the Query/Params RPC method.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct QueryParamsResponse {
    /// voting_params defines the parameters related to voting.
    #[prost(message, optional, tag = "1")]
    pub voting_params: Option<VotingParams>,
    /// deposit_params defines the parameters related to deposit.
    #[prost(message, optional, tag = "2")]
    pub deposit_params: Option<DepositParams>,
    /// tally_params defines the parameters related to tally.
    #[prost(message, optional, tag = "3")]
    pub tally_params: Option<TallyParams>,
}

/// QueryDepositRequest is the request type for the Query/Deposit RPC method.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct QueryDepositRequest {
    /// proposal_id defines the unique id of the proposal.
    #[prost(uint64, tag = "1")]
    pub proposal_id: u64,
    /// depositor defines the deposit addresses from the proposals.
    #[prost(string, tag = "2")]
    pub depositor: String,
}

/// QueryDepositResponse is the response type for the Query/Deposit RPC method.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct QueryDepositResponse {
    /// deposit defines the requested deposit.
    #[prost(message, optional, tag = "1")]
    pub deposit: Option<Deposit>,
}

/// QueryDepositsRequest is the request type for the Query/Deposits RPC method.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct QueryDepositsRequest {
    /// proposal_id defines the unique id of the proposal.
    #[prost(uint64, tag = "1")]
    pub proposal_id: u64,
    /// pagination defines an optional pagination for the request.
    #[prost(message, optional, tag = "2")]
    pub pagination: Option<PageRequest>,
}

/// QueryDepositsResponse is the response type for the Query/Deposits RPC method.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct QueryDepositsResponse {
    /// deposits defines the requested deposits.
    #[prost(message, repeated, tag = "1")]
    pub deposits: Vec<Deposit>,
    /// pagination defines the pagination in the response.
    #[prost(message, optional, tag = "2")]
    pub pagination: Option<PageResponse>,
}

/// QueryTallyResultRequest is the request type for the Query/Tally RPC method.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct QueryTallyResultRequest {
    /// proposal_id defines the unique id of the proposal.
    #[prost(uint64, tag = "1")]
    pub proposal_id: u64,
}

/// QueryTallyResultResponse is the response type for the Query/Tally RPC method.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct QueryTallyResultResponse {
    /// tally defines the requested tally.
    #[prost(message, optional, tag = "1")]
    pub tally: Option<TallyResult>,
}

cosmos_message!(QueryProposalRequest => QueryProposalRequestAmino, QueryProposalRequestPartial;
    "/cosmos.gov.v1beta1.QueryProposalRequest", "cosmos-sdk/QueryProposalRequest" {
        proposal_id: uint64,
    });

cosmos_message!(QueryProposalResponse => QueryProposalResponseAmino, QueryProposalResponsePartial;
    "/cosmos.gov.v1beta1.QueryProposalResponse", "cosmos-sdk/QueryProposalResponse" {
        proposal: message(Proposal),
    });

cosmos_message!(QueryProposalsRequest => QueryProposalsRequestAmino, QueryProposalsRequestPartial;
    "/cosmos.gov.v1beta1.QueryProposalsRequest", "cosmos-sdk/QueryProposalsRequest" {
        proposal_status: enumeration(ProposalStatus),
        voter: string,
        depositor: string,
        pagination: message(PageRequest),
    });

cosmos_message!(QueryProposalsResponse => QueryProposalsResponseAmino, QueryProposalsResponsePartial;
    "/cosmos.gov.v1beta1.QueryProposalsResponse", "cosmos-sdk/QueryProposalsResponse" {
        proposals: messages(Proposal),
        pagination: message(PageResponse),
    });

cosmos_message!(QueryVoteRequest => QueryVoteRequestAmino, QueryVoteRequestPartial;
    "/cosmos.gov.v1beta1.QueryVoteRequest", "cosmos-sdk/QueryVoteRequest" {
        proposal_id: uint64,
        voter: string,
    });

cosmos_message!(QueryVoteResponse => QueryVoteResponseAmino, QueryVoteResponsePartial;
    "/cosmos.gov.v1beta1.QueryVoteResponse", "cosmos-sdk/QueryVoteResponse" {
        vote: message(Vote),
    });

cosmos_message!(QueryVotesRequest => QueryVotesRequestAmino, QueryVotesRequestPartial;
    "/cosmos.gov.v1beta1.QueryVotesRequest", "cosmos-sdk/QueryVotesRequest" {
        proposal_id: uint64,
        pagination: message(PageRequest),
    });

cosmos_message!(QueryVotesResponse => QueryVotesResponseAmino, QueryVotesResponsePartial;
    "/cosmos.gov.v1beta1.QueryVotesResponse", "cosmos-sdk/QueryVotesResponse" {
        votes: messages(Vote),
        pagination: message(PageResponse),
    });

cosmos_message!(QueryParamsRequest => QueryParamsRequestAmino, QueryParamsRequestPartial;
    "/cosmos.gov.v1beta1.QueryParamsRequest", "cosmos-sdk/QueryParamsRequest" {
        params_type: string,
    });

cosmos_message!(QueryParamsResponse => QueryParamsResponseAmino, QueryParamsResponsePartial;
    "/cosmos.gov.v1beta1.QueryParamsResponse", "cosmos-sdk/QueryParamsResponse" {
        voting_params: message(VotingParams),
        deposit_params: message(DepositParams),
        tally_params: message(TallyParams),
    });

cosmos_message!(QueryDepositRequest => QueryDepositRequestAmino, QueryDepositRequestPartial;
    "/cosmos.gov.v1beta1.QueryDepositRequest", "cosmos-sdk/QueryDepositRequest" {
        proposal_id: uint64,
        depositor: string,
    });

cosmos_message!(QueryDepositResponse => QueryDepositResponseAmino, QueryDepositResponsePartial;
    "/cosmos.gov.v1beta1.QueryDepositResponse", "cosmos-sdk/QueryDepositResponse" {
        deposit: message(Deposit),
    });

cosmos_message!(QueryDepositsRequest => QueryDepositsRequestAmino, QueryDepositsRequestPartial;
    "/cosmos.gov.v1beta1.QueryDepositsRequest", "cosmos-sdk/QueryDepositsRequest" {
        proposal_id: uint64,
        pagination: message(PageRequest),
    });

cosmos_message!(QueryDepositsResponse => QueryDepositsResponseAmino, QueryDepositsResponsePartial;
    "/cosmos.gov.v1beta1.QueryDepositsResponse", "cosmos-sdk/QueryDepositsResponse" {
        deposits: messages(Deposit),
        pagination: message(PageResponse),
    });

cosmos_message!(QueryTallyResultRequest => QueryTallyResultRequestAmino, QueryTallyResultRequestPartial;
    "/cosmos.gov.v1beta1.QueryTallyResultRequest", "cosmos-sdk/QueryTallyResultRequest" {
        proposal_id: uint64,
    });

cosmos_message!(QueryTallyResultResponse => QueryTallyResultResponseAmino, QueryTallyResultResponsePartial;
    "/cosmos.gov.v1beta1.QueryTallyResultResponse", "cosmos-sdk/QueryTallyResultResponse" {
        tally: message(TallyResult),
    });

pub(super) fn register(registry: &TypeRegistry) {
    register_types!(
        registry,
        [
            QueryProposalRequest,
            QueryProposalResponse,
            QueryProposalsRequest,
            QueryProposalsResponse,
            QueryVoteRequest,
            QueryVoteResponse,
            QueryVotesRequest,
            QueryVotesResponse,
            QueryParamsRequest,
            QueryParamsResponse,
            QueryDepositRequest,
            QueryDepositResponse,
            QueryDepositsRequest,
            QueryDepositsResponse,
            QueryTallyResultRequest,
            QueryTallyResultResponse,
        ]
    );
}

/// Accepted values of [`QueryParamsRequest::params_type`]
pub mod params_type {
    pub const VOTING: &str = "voting";
    pub const TALLYING: &str = "tallying";
    pub const DEPOSIT: &str = "deposit";
}

#[cfg(test)]
mod tests {
    use super::*;
    use prost::Message;

    #[test]
    fn test_proposals_request_status_tag() {
        let req = QueryProposalsRequest {
            proposal_status: ProposalStatus::Passed as i32,
            ..Default::default()
        };
        assert_eq!(req.encode_to_vec(), vec![0x08, 0x03]);
        assert_eq!(req.proposal_status(), ProposalStatus::Passed);
    }

    #[test]
    fn test_params_response_sections() {
        let res = QueryParamsResponse {
            tally_params: Some(TallyParams {
                quorum: b"334000000000000000".to_vec(),
                ..Default::default()
            }),
            ..Default::default()
        };
        let decoded = QueryParamsResponse::decode(res.encode_to_vec().as_slice()).unwrap();
        assert_eq!(decoded.voting_params, None);
        assert_eq!(decoded.deposit_params, None);
        assert_eq!(decoded, res);
    }
}
