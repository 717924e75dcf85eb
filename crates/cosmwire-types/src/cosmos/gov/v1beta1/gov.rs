use crate::cosmos::base::v1beta1::Coin;
use bytes::{Buf, BufMut};
use cosmwire_codec::amino::enum_from_json;
use cosmwire_codec::{
    amino_message, cosmos_message, dec, partial_message, register_types, type_url, Any, Dec,
    Duration, Timestamp, TypeRegistry,
};
use prost::encoding::{int32, DecodeContext, WireType};
use prost::DecodeError;

/// VoteOption enumerates the valid vote options for a given governance proposal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum VoteOption {
    /// VOTE_OPTION_UNSPECIFIED defines a no-op vote option.
    Unspecified = 0,
    /// VOTE_OPTION_YES defines a yes vote option.
    Yes = 1,
    /// VOTE_OPTION_ABSTAIN defines an abstain vote option.
    Abstain = 2,
    /// VOTE_OPTION_NO defines a no vote option.
    No = 3,
    /// VOTE_OPTION_NO_WITH_VETO defines a no with veto vote option.
    NoWithVeto = 4,
    Unrecognized = -1,
}

impl VoteOption {
    pub fn as_str_name(&self) -> &'static str {
        match self {
            VoteOption::Unspecified => "VOTE_OPTION_UNSPECIFIED",
            VoteOption::Yes => "VOTE_OPTION_YES",
            VoteOption::Abstain => "VOTE_OPTION_ABSTAIN",
            VoteOption::No => "VOTE_OPTION_NO",
            VoteOption::NoWithVeto => "VOTE_OPTION_NO_WITH_VETO",
            VoteOption::Unrecognized => "UNRECOGNIZED",
        }
    }

    pub fn from_str_name(value: &str) -> Option<Self> {
        match value {
            "VOTE_OPTION_UNSPECIFIED" => Some(Self::Unspecified),
            "VOTE_OPTION_YES" => Some(Self::Yes),
            "VOTE_OPTION_ABSTAIN" => Some(Self::Abstain),
            "VOTE_OPTION_NO" => Some(Self::No),
            "VOTE_OPTION_NO_WITH_VETO" => Some(Self::NoWithVeto),
            _ => None,
        }
    }

    pub fn from_json(value: &serde_json::Value) -> Self {
        enum_from_json(value, Self::from_str_name, |n| Self::try_from(n).ok())
            .unwrap_or(Self::Unrecognized)
    }
}

/// ProposalStatus enumerates the valid statuses of a proposal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum ProposalStatus {
    /// PROPOSAL_STATUS_UNSPECIFIED defines the default proposal status.
    Unspecified = 0,
    /// PROPOSAL_STATUS_DEPOSIT_PERIOD defines a proposal status during the deposit
    /// period.
    DepositPeriod = 1,
    /// PROPOSAL_STATUS_VOTING_PERIOD defines a proposal status during the voting
    /// period.
    VotingPeriod = 2,
    /// PROPOSAL_STATUS_PASSED defines a proposal status of a proposal that has
    /// passed.
    Passed = 3,
    /// PROPOSAL_STATUS_REJECTED defines a proposal status of a proposal that has
    /// been rejected.
    Rejected = 4,
    /// PROPOSAL_STATUS_FAILED defines a proposal status of a proposal that has
    /// failed.
    Failed = 5,
    Unrecognized = -1,
}

impl ProposalStatus {
    pub fn as_str_name(&self) -> &'static str {
        match self {
            ProposalStatus::Unspecified => "PROPOSAL_STATUS_UNSPECIFIED",
            ProposalStatus::DepositPeriod => "PROPOSAL_STATUS_DEPOSIT_PERIOD",
            ProposalStatus::VotingPeriod => "PROPOSAL_STATUS_VOTING_PERIOD",
            ProposalStatus::Passed => "PROPOSAL_STATUS_PASSED",
            ProposalStatus::Rejected => "PROPOSAL_STATUS_REJECTED",
            ProposalStatus::Failed => "PROPOSAL_STATUS_FAILED",
            ProposalStatus::Unrecognized => "UNRECOGNIZED",
        }
    }

    pub fn from_str_name(value: &str) -> Option<Self> {
        match value {
            "PROPOSAL_STATUS_UNSPECIFIED" => Some(Self::Unspecified),
            "PROPOSAL_STATUS_DEPOSIT_PERIOD" => Some(Self::DepositPeriod),
            "PROPOSAL_STATUS_VOTING_PERIOD" => Some(Self::VotingPeriod),
            "PROPOSAL_STATUS_PASSED" => Some(Self::Passed),
            "PROPOSAL_STATUS_REJECTED" => Some(Self::Rejected),
            "PROPOSAL_STATUS_FAILED" => Some(Self::Failed),
            _ => None,
        }
    }

    pub fn from_json(value: &serde_json::Value) -> Self {
        enum_from_json(value, Self::from_str_name, |n| Self::try_from(n).ok())
            .unwrap_or(Self::Unrecognized)
    }
}

/// WeightedVoteOption defines a unit of vote for vote split.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WeightedVoteOption {
    /// option defines the valid vote options, it must not contain duplicate vote options.
    pub option: i32,
    /// weight is the vote weight associated with the vote option.
    pub weight: Dec,
}

impl WeightedVoteOption {
    pub fn new(option: VoteOption, weight: Dec) -> Self {
        Self {
            option: option as i32,
            weight,
        }
    }

    pub fn option(&self) -> VoteOption {
        VoteOption::try_from(self.option).unwrap_or_default()
    }
}

impl prost::Message for WeightedVoteOption {
    fn encode_raw(&self, buf: &mut impl BufMut) {
        if self.option != 0 {
            int32::encode(1, &self.option, buf);
        }
        dec::encode(2, &self.weight, buf);
    }

    fn merge_field(
        &mut self,
        tag: u32,
        wire_type: WireType,
        buf: &mut impl Buf,
        ctx: DecodeContext,
    ) -> Result<(), DecodeError> {
        match tag {
            1 => int32::merge(wire_type, &mut self.option, buf, ctx),
            2 => dec::merge(wire_type, &mut self.weight, buf, ctx),
            _ => prost::encoding::skip_field(wire_type, tag, buf, ctx),
        }
    }

    fn encoded_len(&self) -> usize {
        let option = if self.option != 0 {
            int32::encoded_len(1, &self.option)
        } else {
            0
        };
        option + dec::encoded_len(2, &self.weight)
    }

    fn clear(&mut self) {
        *self = Self::default();
    }
}

type_url!(WeightedVoteOption => "/cosmos.gov.v1beta1.WeightedVoteOption");

amino_message!(WeightedVoteOption => WeightedVoteOptionAmino = "cosmos-sdk/WeightedVoteOption" {
    option: enumeration(VoteOption),
    weight: dec,
});

partial_message!(WeightedVoteOption => WeightedVoteOptionPartial {
    option: enumeration(VoteOption),
    weight: dec,
});

/// TextProposal defines a standard text proposal whose changes need to be
/// manually updated in case of approval.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TextProposal {
    /// title of the proposal.
    #[prost(string, tag = "1")]
    pub title: String,
    /// description associated with the proposal.
    #[prost(string, tag = "2")]
    pub description: String,
}

/// Deposit defines an amount deposited by an account address to an active
/// proposal.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Deposit {
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

/// Proposal defines the core field members of a governance proposal.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Proposal {
    /// proposal_id defines the unique id of the proposal.
    #[prost(uint64, tag = "1")]
    pub proposal_id: u64,
    /// content is the proposal's content.
    #[prost(message, optional, tag = "2")]
    pub content: Option<Any>,
    /// status defines the proposal status.
    #[prost(enumeration = "ProposalStatus", tag = "3")]
    pub status: i32,
    /// final_tally_result is the final tally result of the proposal. When
    /// querying a proposal via gRPC, this field is not populated until the
    /// proposal's voting period has ended.
    #[prost(message, optional, tag = "4")]
    pub final_tally_result: Option<TallyResult>,
    /// submit_time is the time of proposal submission.
    #[prost(message, optional, tag = "5")]
    pub submit_time: Option<Timestamp>,
    /// deposit_end_time is the end time for deposition.
    #[prost(message, optional, tag = "6")]
    pub deposit_end_time: Option<Timestamp>,
    /// total_deposit is the total deposit on the proposal.
    #[prost(message, repeated, tag = "7")]
    pub total_deposit: Vec<Coin>,
    /// voting_start_time is the starting time to vote on a proposal.
    #[prost(message, optional, tag = "8")]
    pub voting_start_time: Option<Timestamp>,
    /// voting_end_time is the end time of voting on a proposal.
    #[prost(message, optional, tag = "9")]
    pub voting_end_time: Option<Timestamp>,
}

/// TallyResult defines a standard tally for a governance proposal.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TallyResult {
    /// yes is the number of yes votes on a proposal.
    #[prost(string, tag = "1")]
    pub yes: String,
    /// abstain is the number of abstain votes on a proposal.
    #[prost(string, tag = "2")]
    pub abstain: String,
    /// no is the number of no votes on a proposal.
    #[prost(string, tag = "3")]
    pub no: String,
    /// no_with_veto is the number of no with veto votes on a proposal.
    #[prost(string, tag = "4")]
    pub no_with_veto: String,
}

/// Vote defines a vote on a governance proposal.
/// A Vote consists of a proposal ID, the voter, and the vote option.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Vote {
    /// proposal_id defines the unique id of the proposal.
    #[prost(uint64, tag = "1")]
    pub proposal_id: u64,
    /// voter is the voter address of the proposal.
    #[prost(string, tag = "2")]
    pub voter: String,
    /// Deprecated: Prefer to use `options` instead. This field is set in queries
    /// if and only if `len(options) == 1` and that option has weight 1. In all
    /// other cases, this field will default to VOTE_OPTION_UNSPECIFIED.
    #[prost(enumeration = "VoteOption", tag = "3")]
    pub option: i32,
    /// options is the weighted vote options.
    #[prost(message, repeated, tag = "4")]
    pub options: Vec<WeightedVoteOption>,
}

/// DepositParams defines the params for deposits on governance proposals.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DepositParams {
    /// Minimum deposit for a proposal to enter voting period.
    #[prost(message, repeated, tag = "1")]
    pub min_deposit: Vec<Coin>,
    /// Maximum period for Atom holders to deposit on a proposal. Initial value: 2
    /// months.
    #[prost(message, optional, tag = "2")]
    pub max_deposit_period: Option<Duration>,
}

/// VotingParams defines the params for voting on governance proposals.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct VotingParams {
    /// Duration of the voting period.
    #[prost(message, optional, tag = "1")]
    pub voting_period: Option<Duration>,
}

/// TallyParams defines the params for tallying votes on governance proposals.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TallyParams {
    /// Minimum percentage of total stake needed to vote for a result to be
    /// considered valid.
    #[prost(bytes = "vec", tag = "1")]
    pub quorum: Vec<u8>,
    /// Minimum proportion of Yes votes for proposal to pass. Default value: 0.5.
    #[prost(bytes = "vec", tag = "2")]
    pub threshold: Vec<u8>,
    /// Minimum value of Veto votes to Total votes ratio for proposal to be
    /// vetoed. Default value: 1/3.
    #[prost(bytes = "vec", tag = "3")]
    pub veto_threshold: Vec<u8>,
}

cosmos_message!(TextProposal => TextProposalAmino, TextProposalPartial;
    "/cosmos.gov.v1beta1.TextProposal", "cosmos-sdk/TextProposal" {
        title: string,
        description: string,
    });

cosmos_message!(Deposit => DepositAmino, DepositPartial;
    "/cosmos.gov.v1beta1.Deposit", "cosmos-sdk/Deposit" {
        proposal_id: uint64,
        depositor: string,
        amount: messages(Coin),
    });

cosmos_message!(Proposal => ProposalAmino, ProposalPartial;
    "/cosmos.gov.v1beta1.Proposal", "cosmos-sdk/Proposal" {
        proposal_id: uint64,
        content: any,
        status: enumeration(ProposalStatus),
        final_tally_result: message(TallyResult),
        submit_time: timestamp,
        deposit_end_time: timestamp,
        total_deposit: messages(Coin),
        voting_start_time: timestamp,
        voting_end_time: timestamp,
    });

cosmos_message!(TallyResult => TallyResultAmino, TallyResultPartial;
    "/cosmos.gov.v1beta1.TallyResult", "cosmos-sdk/TallyResult" {
        yes: string,
        abstain: string,
        no: string,
        no_with_veto: string,
    });

cosmos_message!(Vote => VoteAmino, VotePartial;
    "/cosmos.gov.v1beta1.Vote", "cosmos-sdk/Vote" {
        proposal_id: uint64,
        voter: string,
        option: enumeration(VoteOption),
        options: messages(WeightedVoteOption),
    });

cosmos_message!(DepositParams => DepositParamsAmino, DepositParamsPartial;
    "/cosmos.gov.v1beta1.DepositParams", "cosmos-sdk/DepositParams" {
        min_deposit: messages(Coin),
        max_deposit_period: duration,
    });

cosmos_message!(VotingParams => VotingParamsAmino, VotingParamsPartial;
    "/cosmos.gov.v1beta1.VotingParams", "cosmos-sdk/VotingParams" {
        voting_period: duration,
    });

cosmos_message!(TallyParams => TallyParamsAmino, TallyParamsPartial;
    "/cosmos.gov.v1beta1.TallyParams", "cosmos-sdk/TallyParams" {
        quorum: bytes,
        threshold: bytes,
        veto_threshold: bytes,
    });

pub(super) fn register(registry: &TypeRegistry) {
    register_types!(
        registry,
        [
            WeightedVoteOption,
            TextProposal,
            Deposit,
            Proposal,
            TallyResult,
            Vote,
            DepositParams,
            VotingParams,
            TallyParams,
        ]
    );
}

impl Vote {
    /// The weighted options, falling back to the deprecated single option
    pub fn effective_options(&self) -> Vec<WeightedVoteOption> {
        if !self.options.is_empty() || self.option == 0 {
            return self.options.clone();
        }
        vec![WeightedVoteOption {
            option: self.option,
            weight: Dec::one(),
        }]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwire_codec::{AminoConvert, MessageExt};
    use prost::Message;

    #[test]
    fn test_unknown_vote_option_survives_amino() {
        let option = WeightedVoteOption::decode(&[0x08, 0x09][..]).unwrap();
        assert_eq!(option.option, 9);

        let json = option.to_amino_json().unwrap();
        assert_eq!(json["option"], 9);
        let back = WeightedVoteOption::from_amino_json(json).unwrap();
        assert_eq!(back, option);

        let vote = Vote {
            proposal_id: 3,
            voter: "cosmos1voter".to_string(),
            option: 7,
            options: vec![option],
        };
        let back = Vote::from_amino_json(vote.to_amino_json().unwrap()).unwrap();
        assert_eq!(back, vote);
    }

    #[test]
    fn test_named_vote_option_from_amino() {
        let option = WeightedVoteOption::from_amino_json(serde_json::json!({
            "option": "VOTE_OPTION_NO_WITH_VETO",
            "weight": "1.000000000000000000",
        }))
        .unwrap();
        assert_eq!(option.option(), VoteOption::NoWithVeto);

        let unknown = WeightedVoteOption::from_amino_json(serde_json::json!({
            "option": "VOTE_OPTION_MAYBE",
        }))
        .unwrap();
        assert_eq!(unknown.option, VoteOption::Unrecognized as i32);
    }

    #[test]
    fn test_weighted_vote_weight_on_wire() {
        let option = WeightedVoteOption::new(VoteOption::Yes, "0.5".parse().unwrap());
        let bytes = option.encode_to_vec();
        let mut expected = vec![0x08, 0x01, 0x12, 18];
        expected.extend_from_slice(b"500000000000000000");
        assert_eq!(bytes, expected);

        let decoded = WeightedVoteOption::decode(bytes.as_slice()).unwrap();
        assert_eq!(decoded.weight.to_string(), "0.5");
        assert_eq!(decoded.option(), VoteOption::Yes);
    }

    #[test]
    fn test_weighted_vote_amino() {
        let option = WeightedVoteOption::new(VoteOption::NoWithVeto, "0.25".parse().unwrap());
        let json = option.to_amino_json().unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "option": 4, "weight": "0.250000000000000000" })
        );
        assert_eq!(WeightedVoteOption::from_amino_json(json).unwrap(), option);
        let by_name = WeightedVoteOption::from_amino_json(serde_json::json!({
            "option": "VOTE_OPTION_NO_WITH_VETO",
            "weight": "0.25",
        }))
        .unwrap();
        assert_eq!(by_name, option);
    }

    #[test]
    fn test_proposal_with_text_content() {
        crate::init();
        let content = TextProposal {
            title: "Upgrade".to_string(),
            description: "Do it".to_string(),
        };
        let proposal = Proposal {
            proposal_id: 12,
            content: Some(content.to_any()),
            status: ProposalStatus::VotingPeriod as i32,
            submit_time: Some(Timestamp {
                seconds: 1_600_000_000,
                nanos: 0,
            }),
            ..Default::default()
        };
        let decoded = Proposal::decode(proposal.encode_to_vec().as_slice()).unwrap();
        assert_eq!(decoded.status(), ProposalStatus::VotingPeriod);
        let inner: TextProposal = decoded.content.as_ref().unwrap().unpack().unwrap();
        assert_eq!(inner, content);

        let json = proposal.to_amino_json().unwrap();
        assert_eq!(json["proposal_id"], serde_json::json!("12"));
        assert_eq!(json["content"]["type"], serde_json::json!("cosmos-sdk/TextProposal"));
        assert_eq!(json["submit_time"], serde_json::json!("2020-09-13T12:26:40Z"));
        assert_eq!(Proposal::from_amino_json(json).unwrap(), proposal);
    }

    #[test]
    fn test_vote_effective_options() {
        let legacy = Vote {
            option: VoteOption::No as i32,
            ..Default::default()
        };
        assert_eq!(
            legacy.effective_options(),
            vec![WeightedVoteOption::new(VoteOption::No, Dec::one())]
        );
        assert!(Vote::default().effective_options().is_empty());
    }

    #[test]
    fn test_unknown_vote_option_is_kept_on_wire() {
        let decoded = WeightedVoteOption::decode(&[0x08, 0x09][..]).unwrap();
        assert_eq!(decoded.option, 9);
        assert_eq!(decoded.option(), VoteOption::Unspecified);
        assert_eq!(decoded.encode_to_vec(), vec![0x08, 0x09]);
    }
}
