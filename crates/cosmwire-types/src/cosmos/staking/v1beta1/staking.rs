use crate::cosmos::base::v1beta1::Coin;
use crate::tendermint::types::Header;
use bytes::{Buf, BufMut};
use cosmwire_codec::amino::enum_from_json;
use cosmwire_codec::{
    amino_message, cosmos_message, dec, partial_message, register_types, type_url, Any, Dec,
    Duration, Timestamp, TypeRegistry,
};
use prost::encoding::{
    bool as pb_bool, int32, int64, message, string, uint32, uint64, DecodeContext, WireType,
};
use prost::DecodeError;

/// BondStatus is the status of a validator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum BondStatus {
    /// UNSPECIFIED defines an invalid validator status.
    Unspecified = 0,
    /// UNBONDED defines a validator that is not bonded.
    Unbonded = 1,
    /// UNBONDING defines a validator that is unbonding.
    Unbonding = 2,
    /// BONDED defines a validator that is bonded.
    Bonded = 3,
    Unrecognized = -1,
}

impl BondStatus {
    pub fn as_str_name(&self) -> &'static str {
        match self {
            BondStatus::Unspecified => "BOND_STATUS_UNSPECIFIED",
            BondStatus::Unbonded => "BOND_STATUS_UNBONDED",
            BondStatus::Unbonding => "BOND_STATUS_UNBONDING",
            BondStatus::Bonded => "BOND_STATUS_BONDED",
            BondStatus::Unrecognized => "UNRECOGNIZED",
        }
    }

    pub fn from_str_name(value: &str) -> Option<Self> {
        match value {
            "BOND_STATUS_UNSPECIFIED" => Some(Self::Unspecified),
            "BOND_STATUS_UNBONDED" => Some(Self::Unbonded),
            "BOND_STATUS_UNBONDING" => Some(Self::Unbonding),
            "BOND_STATUS_BONDED" => Some(Self::Bonded),
            _ => None,
        }
    }

    pub fn from_json(value: &serde_json::Value) -> Self {
        enum_from_json(value, Self::from_str_name, |n| Self::try_from(n).ok())
            .unwrap_or(Self::Unrecognized)
    }
}

/// HistoricalInfo contains header and validator information for a given block.
/// It is stored as part of staking module's state, which persists the `n` most
/// recent HistoricalInfo
/// (`n` is set by the staking module's `historical_entries` parameter).
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct HistoricalInfo {
    #[prost(message, optional, tag = "1")]
    pub header: Option<Header>,
    #[prost(message, repeated, tag = "2")]
    pub valset: Vec<Validator>,
}

/// CommissionRates defines the initial commission rates to be used for creating
/// a validator.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CommissionRates {
    /// rate is the commission rate charged to delegators, as a fraction.
    pub rate: Dec,
    /// max_rate defines the maximum commission rate which validator can ever charge, as a fraction.
    pub max_rate: Dec,
    /// max_change_rate defines the maximum daily increase of the validator commission, as a fraction.
    pub max_change_rate: Dec,
}

impl prost::Message for CommissionRates {
    fn encode_raw(&self, buf: &mut impl BufMut) {
        dec::encode(1, &self.rate, buf);
        dec::encode(2, &self.max_rate, buf);
        dec::encode(3, &self.max_change_rate, buf);
    }

    fn merge_field(
        &mut self,
        tag: u32,
        wire_type: WireType,
        buf: &mut impl Buf,
        ctx: DecodeContext,
    ) -> Result<(), DecodeError> {
        match tag {
            1 => dec::merge(wire_type, &mut self.rate, buf, ctx),
            2 => dec::merge(wire_type, &mut self.max_rate, buf, ctx),
            3 => dec::merge(wire_type, &mut self.max_change_rate, buf, ctx),
            _ => prost::encoding::skip_field(wire_type, tag, buf, ctx),
        }
    }

    fn encoded_len(&self) -> usize {
        dec::encoded_len(1, &self.rate)
            + dec::encoded_len(2, &self.max_rate)
            + dec::encoded_len(3, &self.max_change_rate)
    }

    fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Commission defines commission parameters for a given validator.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Commission {
    /// commission_rates defines the initial commission rates to be used for creating a validator.
    #[prost(message, optional, tag = "1")]
    pub commission_rates: Option<CommissionRates>,
    /// update_time is the last time the commission rate was changed.
    #[prost(message, optional, tag = "2")]
    pub update_time: Option<Timestamp>,
}

/// Description defines a validator description.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Description {
    /// moniker defines a human-readable name for the validator.
    #[prost(string, tag = "1")]
    pub moniker: String,
    /// identity defines an optional identity signature (ex. UPort or Keybase).
    #[prost(string, tag = "2")]
    pub identity: String,
    /// website defines an optional website link.
    #[prost(string, tag = "3")]
    pub website: String,
    /// security_contact defines an optional email for security contact.
    #[prost(string, tag = "4")]
    pub security_contact: String,
    /// details define other optional details.
    #[prost(string, tag = "5")]
    pub details: String,
}

/// Validator defines a validator, together with the total amount of the
/// Validator's bond shares and their exchange rate to coins. Slashing results in
/// a decrease in the exchange rate, allowing correct calculation of future
/// undelegations without iterating over delegators. When coins are delegated to
/// this validator, the validator is credited with a delegation whose number of
/// bond shares is based on the amount of coins delegated divided by the current
/// exchange rate. Voting power can be calculated as total bonded shares
/// multiplied by exchange rate.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Validator {
    /// operator_address defines the address of the validator's operator; bech encoded in JSON.
    pub operator_address: String,
    /// consensus_pubkey is the consensus public key of the validator, as a Protobuf Any.
    pub consensus_pubkey: Option<Any>,
    /// jailed defined whether the validator has been jailed from bonded status or not.
    pub jailed: bool,
    /// status is the validator status (bonded/unbonding/unbonded).
    pub status: i32,
    /// tokens define the delegated tokens (incl. self-delegation).
    pub tokens: String,
    /// delegator_shares defines total shares issued to a validator's delegators.
    pub delegator_shares: Dec,
    /// description defines the description terms for the validator.
    pub description: Option<Description>,
    /// unbonding_height defines, if unbonding, the height at which this validator has begun unbonding.
    pub unbonding_height: i64,
    /// unbonding_time defines, if unbonding, the min time for the validator to complete unbonding.
    pub unbonding_time: Option<Timestamp>,
    /// commission defines the commission parameters.
    pub commission: Option<Commission>,
    /// min_self_delegation is the validator's self declared minimum self delegation.
    pub min_self_delegation: String,
    /// strictly positive if this validator's unbonding has been stopped by external modules
    pub unbonding_on_hold_ref_count: i64,
    /// list of unbonding ids, each uniquely identifing an unbonding of this validator
    pub unbonding_ids: Vec<u64>,
}

impl Validator {
    /// Returns the enum value of `status`, or the default if the field is set to an invalid enum value.
    pub fn status(&self) -> BondStatus {
        BondStatus::try_from(self.status).unwrap_or_default()
    }

    pub fn is_bonded(&self) -> bool {
        self.status() == BondStatus::Bonded
    }
}

impl prost::Message for Validator {
    fn encode_raw(&self, buf: &mut impl BufMut) {
        if !self.operator_address.is_empty() {
            string::encode(1, &self.operator_address, buf);
        }
        if let Some(pubkey) = &self.consensus_pubkey {
            message::encode(2, pubkey, buf);
        }
        if self.jailed {
            pb_bool::encode(3, &self.jailed, buf);
        }
        if self.status != 0 {
            int32::encode(4, &self.status, buf);
        }
        if !self.tokens.is_empty() {
            string::encode(5, &self.tokens, buf);
        }
        dec::encode(6, &self.delegator_shares, buf);
        if let Some(description) = &self.description {
            message::encode(7, description, buf);
        }
        if self.unbonding_height != 0 {
            int64::encode(8, &self.unbonding_height, buf);
        }
        if let Some(time) = &self.unbonding_time {
            message::encode(9, time, buf);
        }
        if let Some(commission) = &self.commission {
            message::encode(10, commission, buf);
        }
        if !self.min_self_delegation.is_empty() {
            string::encode(11, &self.min_self_delegation, buf);
        }
        if self.unbonding_on_hold_ref_count != 0 {
            int64::encode(12, &self.unbonding_on_hold_ref_count, buf);
        }
        uint64::encode_packed(13, &self.unbonding_ids, buf);
    }

    fn merge_field(
        &mut self,
        tag: u32,
        wire_type: WireType,
        buf: &mut impl Buf,
        ctx: DecodeContext,
    ) -> Result<(), DecodeError> {
        match tag {
            1 => string::merge(wire_type, &mut self.operator_address, buf, ctx),
            2 => message::merge(
                wire_type,
                self.consensus_pubkey.get_or_insert_with(Default::default),
                buf,
                ctx,
            ),
            3 => pb_bool::merge(wire_type, &mut self.jailed, buf, ctx),
            4 => int32::merge(wire_type, &mut self.status, buf, ctx),
            5 => string::merge(wire_type, &mut self.tokens, buf, ctx),
            6 => dec::merge(wire_type, &mut self.delegator_shares, buf, ctx),
            7 => message::merge(
                wire_type,
                self.description.get_or_insert_with(Default::default),
                buf,
                ctx,
            ),
            8 => int64::merge(wire_type, &mut self.unbonding_height, buf, ctx),
            9 => message::merge(
                wire_type,
                self.unbonding_time.get_or_insert_with(Default::default),
                buf,
                ctx,
            ),
            10 => message::merge(
                wire_type,
                self.commission.get_or_insert_with(Default::default),
                buf,
                ctx,
            ),
            11 => string::merge(wire_type, &mut self.min_self_delegation, buf, ctx),
            12 => int64::merge(wire_type, &mut self.unbonding_on_hold_ref_count, buf, ctx),
            13 => uint64::merge_repeated(wire_type, &mut self.unbonding_ids, buf, ctx),
            _ => prost::encoding::skip_field(wire_type, tag, buf, ctx),
        }
    }

    fn encoded_len(&self) -> usize {
        let mut len = 0;
        if !self.operator_address.is_empty() {
            len += string::encoded_len(1, &self.operator_address);
        }
        if let Some(pubkey) = &self.consensus_pubkey {
            len += message::encoded_len(2, pubkey);
        }
        if self.jailed {
            len += pb_bool::encoded_len(3, &self.jailed);
        }
        if self.status != 0 {
            len += int32::encoded_len(4, &self.status);
        }
        if !self.tokens.is_empty() {
            len += string::encoded_len(5, &self.tokens);
        }
        len += dec::encoded_len(6, &self.delegator_shares);
        if let Some(description) = &self.description {
            len += message::encoded_len(7, description);
        }
        if self.unbonding_height != 0 {
            len += int64::encoded_len(8, &self.unbonding_height);
        }
        if let Some(time) = &self.unbonding_time {
            len += message::encoded_len(9, time);
        }
        if let Some(commission) = &self.commission {
            len += message::encoded_len(10, commission);
        }
        if !self.min_self_delegation.is_empty() {
            len += string::encoded_len(11, &self.min_self_delegation);
        }
        if self.unbonding_on_hold_ref_count != 0 {
            len += int64::encoded_len(12, &self.unbonding_on_hold_ref_count);
        }
        len + uint64::encoded_len_packed(13, &self.unbonding_ids)
    }

    fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Delegation represents the bond with tokens held by an account. It is
/// owned by one delegator, and is associated with the voting power of one
/// validator.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Delegation {
    /// delegator_address is the encoded address of the delegator.
    pub delegator_address: String,
    /// validator_address is the encoded address of the validator.
    pub validator_address: String,
    /// shares define the delegation shares received.
    pub shares: Dec,
}

impl prost::Message for Delegation {
    fn encode_raw(&self, buf: &mut impl BufMut) {
        if !self.delegator_address.is_empty() {
            string::encode(1, &self.delegator_address, buf);
        }
        if !self.validator_address.is_empty() {
            string::encode(2, &self.validator_address, buf);
        }
        dec::encode(3, &self.shares, buf);
    }

    fn merge_field(
        &mut self,
        tag: u32,
        wire_type: WireType,
        buf: &mut impl Buf,
        ctx: DecodeContext,
    ) -> Result<(), DecodeError> {
        match tag {
            1 => string::merge(wire_type, &mut self.delegator_address, buf, ctx),
            2 => string::merge(wire_type, &mut self.validator_address, buf, ctx),
            3 => dec::merge(wire_type, &mut self.shares, buf, ctx),
            _ => prost::encoding::skip_field(wire_type, tag, buf, ctx),
        }
    }

    fn encoded_len(&self) -> usize {
        let mut len = 0;
        if !self.delegator_address.is_empty() {
            len += string::encoded_len(1, &self.delegator_address);
        }
        if !self.validator_address.is_empty() {
            len += string::encoded_len(2, &self.validator_address);
        }
        len + dec::encoded_len(3, &self.shares)
    }

    fn clear(&mut self) {
        *self = Self::default();
    }
}

/// UnbondingDelegation stores all of a single delegator's unbonding bonds
/// for a single validator in an time-ordered list.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct UnbondingDelegation {
    #[prost(string, tag = "1")]
    pub delegator_address: String,
    #[prost(string, tag = "2")]
    pub validator_address: String,
    /// entries are the unbonding delegation entries.
    ///
    /// unbonding delegation entries
    #[prost(message, repeated, tag = "3")]
    pub entries: Vec<UnbondingDelegationEntry>,
}

/// UnbondingDelegationEntry defines an unbonding object with relevant metadata.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct UnbondingDelegationEntry {
    /// creation_height is the height which the unbonding took place.
    #[prost(int64, tag = "1")]
    pub creation_height: i64,
    /// completion_time is the unix time for unbonding completion.
    #[prost(message, optional, tag = "2")]
    pub completion_time: Option<Timestamp>,
    /// initial_balance defines the tokens initially scheduled to receive at completion.
    #[prost(string, tag = "3")]
    pub initial_balance: String,
    /// balance defines the tokens to receive at completion.
    #[prost(string, tag = "4")]
    pub balance: String,
    /// Incrementing id that uniquely identifies this entry
    #[prost(uint64, tag = "5")]
    pub unbonding_id: u64,
    /// Strictly positive if this entry's unbonding has been stopped by external modules
    #[prost(int64, tag = "6")]
    pub unbonding_on_hold_ref_count: i64,
}

/// RedelegationEntry defines a redelegation object with relevant metadata.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RedelegationEntry {
    /// creation_height  defines the height which the redelegation took place.
    pub creation_height: i64,
    /// completion_time defines the unix time for redelegation completion.
    pub completion_time: Option<Timestamp>,
    /// initial_balance defines the initial balance when redelegation started.
    pub initial_balance: String,
    /// shares_dst is the amount of destination-validator shares created by redelegation.
    pub shares_dst: Dec,
    /// Incrementing id that uniquely identifies this entry
    pub unbonding_id: u64,
    /// Strictly positive if this entry's unbonding has been stopped by external modules
    pub unbonding_on_hold_ref_count: i64,
}

impl prost::Message for RedelegationEntry {
    fn encode_raw(&self, buf: &mut impl BufMut) {
        if self.creation_height != 0 {
            int64::encode(1, &self.creation_height, buf);
        }
        if let Some(time) = &self.completion_time {
            message::encode(2, time, buf);
        }
        if !self.initial_balance.is_empty() {
            string::encode(3, &self.initial_balance, buf);
        }
        dec::encode(4, &self.shares_dst, buf);
        if self.unbonding_id != 0 {
            uint64::encode(5, &self.unbonding_id, buf);
        }
        if self.unbonding_on_hold_ref_count != 0 {
            int64::encode(6, &self.unbonding_on_hold_ref_count, buf);
        }
    }

    fn merge_field(
        &mut self,
        tag: u32,
        wire_type: WireType,
        buf: &mut impl Buf,
        ctx: DecodeContext,
    ) -> Result<(), DecodeError> {
        match tag {
            1 => int64::merge(wire_type, &mut self.creation_height, buf, ctx),
            2 => message::merge(
                wire_type,
                self.completion_time.get_or_insert_with(Default::default),
                buf,
                ctx,
            ),
            3 => string::merge(wire_type, &mut self.initial_balance, buf, ctx),
            4 => dec::merge(wire_type, &mut self.shares_dst, buf, ctx),
            5 => uint64::merge(wire_type, &mut self.unbonding_id, buf, ctx),
            6 => int64::merge(wire_type, &mut self.unbonding_on_hold_ref_count, buf, ctx),
            _ => prost::encoding::skip_field(wire_type, tag, buf, ctx),
        }
    }

    fn encoded_len(&self) -> usize {
        let mut len = 0;
        if self.creation_height != 0 {
            len += int64::encoded_len(1, &self.creation_height);
        }
        if let Some(time) = &self.completion_time {
            len += message::encoded_len(2, time);
        }
        if !self.initial_balance.is_empty() {
            len += string::encoded_len(3, &self.initial_balance);
        }
        len += dec::encoded_len(4, &self.shares_dst);
        if self.unbonding_id != 0 {
            len += uint64::encoded_len(5, &self.unbonding_id);
        }
        if self.unbonding_on_hold_ref_count != 0 {
            len += int64::encoded_len(6, &self.unbonding_on_hold_ref_count);
        }
        len
    }

    fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Redelegation contains the list of a particular delegator's redelegating bonds
/// from a particular source validator to a particular destination validator.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Redelegation {
    /// delegator_address is the bech32-encoded address of the delegator.
    #[prost(string, tag = "1")]
    pub delegator_address: String,
    /// validator_src_address is the validator redelegation source operator address.
    #[prost(string, tag = "2")]
    pub validator_src_address: String,
    /// validator_dst_address is the validator redelegation destination operator address.
    #[prost(string, tag = "3")]
    pub validator_dst_address: String,
    /// entries are the redelegation entries.
    ///
    /// redelegation entries
    #[prost(message, repeated, tag = "4")]
    pub entries: Vec<RedelegationEntry>,
}

/// Params defines the parameters for the x/staking module.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Params {
    /// unbonding_time is the time duration of unbonding.
    pub unbonding_time: Option<Duration>,
    /// max_validators is the maximum number of validators.
    pub max_validators: u32,
    /// max_entries is the max entries for either unbonding delegation or redelegation (per pair/trio).
    pub max_entries: u32,
    /// historical_entries is the number of historical entries to persist.
    pub historical_entries: u32,
    /// bond_denom defines the bondable coin denomination.
    pub bond_denom: String,
    /// min_commission_rate is the chain-wide minimum commission rate that a validator can charge their delegators
    pub min_commission_rate: Dec,
}

impl prost::Message for Params {
    fn encode_raw(&self, buf: &mut impl BufMut) {
        if let Some(time) = &self.unbonding_time {
            message::encode(1, time, buf);
        }
        if self.max_validators != 0 {
            uint32::encode(2, &self.max_validators, buf);
        }
        if self.max_entries != 0 {
            uint32::encode(3, &self.max_entries, buf);
        }
        if self.historical_entries != 0 {
            uint32::encode(4, &self.historical_entries, buf);
        }
        if !self.bond_denom.is_empty() {
            string::encode(5, &self.bond_denom, buf);
        }
        dec::encode(6, &self.min_commission_rate, buf);
    }

    fn merge_field(
        &mut self,
        tag: u32,
        wire_type: WireType,
        buf: &mut impl Buf,
        ctx: DecodeContext,
    ) -> Result<(), DecodeError> {
        match tag {
            1 => message::merge(
                wire_type,
                self.unbonding_time.get_or_insert_with(Default::default),
                buf,
                ctx,
            ),
            2 => uint32::merge(wire_type, &mut self.max_validators, buf, ctx),
            3 => uint32::merge(wire_type, &mut self.max_entries, buf, ctx),
            4 => uint32::merge(wire_type, &mut self.historical_entries, buf, ctx),
            5 => string::merge(wire_type, &mut self.bond_denom, buf, ctx),
            6 => dec::merge(wire_type, &mut self.min_commission_rate, buf, ctx),
            _ => prost::encoding::skip_field(wire_type, tag, buf, ctx),
        }
    }

    fn encoded_len(&self) -> usize {
        let mut len = 0;
        if let Some(time) = &self.unbonding_time {
            len += message::encoded_len(1, time);
        }
        if self.max_validators != 0 {
            len += uint32::encoded_len(2, &self.max_validators);
        }
        if self.max_entries != 0 {
            len += uint32::encoded_len(3, &self.max_entries);
        }
        if self.historical_entries != 0 {
            len += uint32::encoded_len(4, &self.historical_entries);
        }
        if !self.bond_denom.is_empty() {
            len += string::encoded_len(5, &self.bond_denom);
        }
        len + dec::encoded_len(6, &self.min_commission_rate)
    }

    fn clear(&mut self) {
        *self = Self::default();
    }
}

/// DelegationResponse is equivalent to Delegation except that it contains a
/// balance in addition to shares which is more suitable for client responses.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DelegationResponse {
    #[prost(message, optional, tag = "1")]
    pub delegation: Option<Delegation>,
    #[prost(message, optional, tag = "2")]
    pub balance: Option<Coin>,
}

/// RedelegationEntryResponse is equivalent to a RedelegationEntry except that it
/// contains a balance in addition to shares which is more suitable for client
/// responses.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RedelegationEntryResponse {
    #[prost(message, optional, tag = "1")]
    pub redelegation_entry: Option<RedelegationEntry>,
    #[prost(string, tag = "4")]
    pub balance: String,
}

/// RedelegationResponse is equivalent to a Redelegation except that its entries
/// contain a balance in addition to shares which is more suitable for client
/// responses.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RedelegationResponse {
    #[prost(message, optional, tag = "1")]
    pub redelegation: Option<Redelegation>,
    #[prost(message, repeated, tag = "2")]
    pub entries: Vec<RedelegationEntryResponse>,
}

/// Pool is used for tracking bonded and not-bonded token supply of the bond
/// denomination.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Pool {
    #[prost(string, tag = "1")]
    pub not_bonded_tokens: String,
    #[prost(string, tag = "2")]
    pub bonded_tokens: String,
}

cosmos_message!(HistoricalInfo => HistoricalInfoAmino, HistoricalInfoPartial;
    "/cosmos.staking.v1beta1.HistoricalInfo", "cosmos-sdk/HistoricalInfo" {
        header: message(Header),
        valset: messages(Validator),
    });

type_url!(
    CommissionRates => "/cosmos.staking.v1beta1.CommissionRates",
    Validator => "/cosmos.staking.v1beta1.Validator",
    Delegation => "/cosmos.staking.v1beta1.Delegation",
    RedelegationEntry => "/cosmos.staking.v1beta1.RedelegationEntry",
    Params => "/cosmos.staking.v1beta1.Params",
);

amino_message!(CommissionRates => CommissionRatesAmino = "cosmos-sdk/CommissionRates" {
    rate: dec,
    max_rate: dec,
    max_change_rate: dec,
});

partial_message!(CommissionRates => CommissionRatesPartial {
    rate: dec,
    max_rate: dec,
    max_change_rate: dec,
});

cosmos_message!(Commission => CommissionAmino, CommissionPartial;
    "/cosmos.staking.v1beta1.Commission", "cosmos-sdk/Commission" {
        commission_rates: message(CommissionRates),
        update_time: timestamp,
    });

cosmos_message!(Description => DescriptionAmino, DescriptionPartial;
    "/cosmos.staking.v1beta1.Description", "cosmos-sdk/Description" {
        moniker: string,
        identity: string,
        website: string,
        security_contact: string,
        details: string,
    });

amino_message!(Validator => ValidatorAmino = "cosmos-sdk/Validator" {
    operator_address: string,
    consensus_pubkey: any,
    jailed: bool,
    status: enumeration(BondStatus),
    tokens: string,
    delegator_shares: dec,
    description: message(Description),
    unbonding_height: int64,
    unbonding_time: timestamp,
    commission: message(Commission),
    min_self_delegation: string,
    unbonding_on_hold_ref_count: int64,
    unbonding_ids: uint64s,
});

partial_message!(Validator => ValidatorPartial {
    operator_address: string,
    consensus_pubkey: any,
    jailed: bool,
    status: enumeration(BondStatus),
    tokens: string,
    delegator_shares: dec,
    description: message(Description),
    unbonding_height: int64,
    unbonding_time: timestamp,
    commission: message(Commission),
    min_self_delegation: string,
    unbonding_on_hold_ref_count: int64,
    unbonding_ids: uint64s,
});

amino_message!(Delegation => DelegationAmino = "cosmos-sdk/Delegation" {
    delegator_address: string,
    validator_address: string,
    shares: dec,
});

partial_message!(Delegation => DelegationPartial {
    delegator_address: string,
    validator_address: string,
    shares: dec,
});

cosmos_message!(UnbondingDelegation => UnbondingDelegationAmino, UnbondingDelegationPartial;
    "/cosmos.staking.v1beta1.UnbondingDelegation", "cosmos-sdk/UnbondingDelegation" {
        delegator_address: string,
        validator_address: string,
        entries: messages(UnbondingDelegationEntry),
    });

cosmos_message!(UnbondingDelegationEntry => UnbondingDelegationEntryAmino, UnbondingDelegationEntryPartial;
    "/cosmos.staking.v1beta1.UnbondingDelegationEntry", "cosmos-sdk/UnbondingDelegationEntry" {
        creation_height: int64,
        completion_time: timestamp,
        initial_balance: string,
        balance: string,
        unbonding_id: uint64,
        unbonding_on_hold_ref_count: int64,
    });

amino_message!(RedelegationEntry => RedelegationEntryAmino = "cosmos-sdk/RedelegationEntry" {
    creation_height: int64,
    completion_time: timestamp,
    initial_balance: string,
    shares_dst: dec,
    unbonding_id: uint64,
    unbonding_on_hold_ref_count: int64,
});

partial_message!(RedelegationEntry => RedelegationEntryPartial {
    creation_height: int64,
    completion_time: timestamp,
    initial_balance: string,
    shares_dst: dec,
    unbonding_id: uint64,
    unbonding_on_hold_ref_count: int64,
});

cosmos_message!(Redelegation => RedelegationAmino, RedelegationPartial;
    "/cosmos.staking.v1beta1.Redelegation", "cosmos-sdk/Redelegation" {
        delegator_address: string,
        validator_src_address: string,
        validator_dst_address: string,
        entries: messages(RedelegationEntry),
    });

amino_message!(Params => ParamsAmino = "cosmos-sdk/x/staking/Params" {
    unbonding_time: duration,
    max_validators: uint32,
    max_entries: uint32,
    historical_entries: uint32,
    bond_denom: string,
    min_commission_rate: dec,
});

partial_message!(Params => ParamsPartial {
    unbonding_time: duration,
    max_validators: uint32,
    max_entries: uint32,
    historical_entries: uint32,
    bond_denom: string,
    min_commission_rate: dec,
});

cosmos_message!(DelegationResponse => DelegationResponseAmino, DelegationResponsePartial;
    "/cosmos.staking.v1beta1.DelegationResponse", "cosmos-sdk/DelegationResponse" {
        delegation: message(Delegation),
        balance: message(Coin),
    });

cosmos_message!(RedelegationEntryResponse => RedelegationEntryResponseAmino, RedelegationEntryResponsePartial;
    "/cosmos.staking.v1beta1.RedelegationEntryResponse", "cosmos-sdk/RedelegationEntryResponse" {
        redelegation_entry: message(RedelegationEntry),
        balance: string,
    });

cosmos_message!(RedelegationResponse => RedelegationResponseAmino, RedelegationResponsePartial;
    "/cosmos.staking.v1beta1.RedelegationResponse", "cosmos-sdk/RedelegationResponse" {
        redelegation: message(Redelegation),
        entries: messages(RedelegationEntryResponse),
    });

cosmos_message!(Pool => PoolAmino, PoolPartial;
    "/cosmos.staking.v1beta1.Pool", "cosmos-sdk/Pool" {
        not_bonded_tokens: string,
        bonded_tokens: string,
    });

pub(super) fn register(registry: &TypeRegistry) {
    register_types!(
        registry,
        [
            HistoricalInfo,
            CommissionRates,
            Commission,
            Description,
            Validator,
            Delegation,
            UnbondingDelegation,
            UnbondingDelegationEntry,
            RedelegationEntry,
            Redelegation,
            Params,
            DelegationResponse,
            RedelegationEntryResponse,
            RedelegationResponse,
            Pool,
        ]
    );
}
