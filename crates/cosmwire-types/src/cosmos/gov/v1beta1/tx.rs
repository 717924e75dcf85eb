use super::gov::{VoteOption, WeightedVoteOption};
use crate::cosmos::base::v1beta1::Coin;
use cosmwire_codec::{cosmos_message, register_types, Any, MessageExt, TypeRegistry};

/// MsgSubmitProposal defines an sdk.Msg type that supports submitting arbitrary
/// proposal Content.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MsgSubmitProposal {
    /// content is the proposal's content.
    #[prost(message, optional, tag = "1")]
    pub content: Option<Any>,
    /// initial_deposit is the deposit value that must be paid at proposal submission.
    #[prost(message, repeated, tag = "2")]
    pub initial_deposit: Vec<Coin>,
    /// proposer is the account address of the proposer.
    #[prost(string, tag = "3")]
    pub proposer: String,
}

/// MsgSubmitProposalResponse defines the Msg/SubmitProposal response type.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MsgSubmitProposalResponse {
    /// proposal_id defines the unique id of the proposal.
    #[prost(uint64, tag = "1")]
    pub proposal_id: u64,
}

/// MsgVote defines a message to cast a vote.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MsgVote {
    /// proposal_id defines the unique id of the proposal.
    #[prost(uint64, tag = "1")]
    pub proposal_id: u64,
    /// voter is the voter address for the proposal.
    #[prost(string, tag = "2")]
    pub voter: String,
    /// option defines the vote option.
    #[prost(enumeration = "VoteOption", tag = "3")]
    pub option: i32,
}

/// MsgVoteResponse defines the Msg/Vote response type.
#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct MsgVoteResponse {}

/// MsgVoteWeighted defines a message to cast a vote.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MsgVoteWeighted {
    /// proposal_id defines the unique id of the proposal.
    #[prost(uint64, tag = "1")]
    pub proposal_id: u64,
    /// voter is the voter address for the proposal.
    #[prost(string, tag = "2")]
    pub voter: String,
    /// options defines the weighted vote options.
    #[prost(message, repeated, tag = "3")]
    pub options: Vec<WeightedVoteOption>,
}

/// MsgVoteWeightedResponse defines the Msg/VoteWeighted response type.
#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct MsgVoteWeightedResponse {}

/// MsgDeposit defines a message to submit a deposit to an existing proposal.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MsgDeposit {
    /// proposal_id defines the unique id of the proposal.
    #[prost(uint64, tag = "1")]
    pub proposal_id: u64,
    /// depositor defines the deposit addresses from the proposals.
    #[prost(string, tag = "2")]
    pub depositor: String,
    /// amount to be deposited by depositor.
    #[prost(message, repeated, tag = "3")]
    pub amount: Vec<Coin>,
}

/// MsgDepositResponse defines the Msg/Deposit response type.
#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct MsgDepositResponse {}

cosmos_message!(MsgSubmitProposal => MsgSubmitProposalAmino, MsgSubmitProposalPartial;
    "/cosmos.gov.v1beta1.MsgSubmitProposal", "cosmos-sdk/MsgSubmitProposal" {
        content: any,
        initial_deposit: messages(Coin),
        proposer: string,
    });

cosmos_message!(MsgSubmitProposalResponse => MsgSubmitProposalResponseAmino, MsgSubmitProposalResponsePartial;
    "/cosmos.gov.v1beta1.MsgSubmitProposalResponse", "cosmos-sdk/MsgSubmitProposalResponse" {
        proposal_id: uint64,
    });

cosmos_message!(MsgVote => MsgVoteAmino, MsgVotePartial;
    "/cosmos.gov.v1beta1.MsgVote", "cosmos-sdk/MsgVote" {
        proposal_id: uint64,
        voter: string,
        option: enumeration(VoteOption),
    });

cosmos_message!(MsgVoteResponse => MsgVoteResponseAmino, MsgVoteResponsePartial;
    "/cosmos.gov.v1beta1.MsgVoteResponse", "cosmos-sdk/MsgVoteResponse" {});

cosmos_message!(MsgVoteWeighted => MsgVoteWeightedAmino, MsgVoteWeightedPartial;
    "/cosmos.gov.v1beta1.MsgVoteWeighted", "cosmos-sdk/MsgVoteWeighted" {
        proposal_id: uint64,
        voter: string,
        options: messages(WeightedVoteOption),
    });

cosmos_message!(MsgVoteWeightedResponse => MsgVoteWeightedResponseAmino, MsgVoteWeightedResponsePartial;
    "/cosmos.gov.v1beta1.MsgVoteWeightedResponse", "cosmos-sdk/MsgVoteWeightedResponse" {});

cosmos_message!(MsgDeposit => MsgDepositAmino, MsgDepositPartial;
    "/cosmos.gov.v1beta1.MsgDeposit", "cosmos-sdk/MsgDeposit" {
        proposal_id: uint64,
        depositor: string,
        amount: messages(Coin),
    });

cosmos_message!(MsgDepositResponse => MsgDepositResponseAmino, MsgDepositResponsePartial;
    "/cosmos.gov.v1beta1.MsgDepositResponse", "cosmos-sdk/MsgDepositResponse" {});

pub(super) fn register(registry: &TypeRegistry) {
    register_types!(
        registry,
        [
            MsgSubmitProposal,
            MsgSubmitProposalResponse,
            MsgVote,
            MsgVoteResponse,
            MsgVoteWeighted,
            MsgVoteWeightedResponse,
            MsgDeposit,
            MsgDepositResponse,
        ]
    );
}

impl MsgSubmitProposal {
    /// Pack `content` and build the submission
    pub fn new<C: MessageExt>(
        content: &C,
        initial_deposit: Vec<Coin>,
        proposer: impl Into<String>,
    ) -> Self {
        Self {
            content: Some(content.to_any()),
            initial_deposit,
            proposer: proposer.into(),
        }
    }
}

impl MsgVote {
    pub fn new(proposal_id: u64, voter: impl Into<String>, option: VoteOption) -> Self {
        Self {
            proposal_id,
            voter: voter.into(),
            option: option as i32,
        }
    }
}
