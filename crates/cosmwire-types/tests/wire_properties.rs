//! Wire-level properties shared by every message type: round trips,
//! forward compatibility, zero omission and 64-bit precision.

use cosmwire_codec::{AminoConvert, Dec};
use cosmwire_types::cosmos::bank::v1beta1::{MsgSend, QueryAllBalancesResponse, QueryBalanceRequest};
use cosmwire_types::cosmos::base::query::v1beta1::PageResponse;
use cosmwire_types::cosmos::gov::v1beta1::{MsgVoteWeighted, VoteOption, WeightedVoteOption};
use cosmwire_types::cosmos::staking::v1beta1::{Delegation, UnbondingDelegationEntry};
use cosmwire_types::Coin;
use prost::Message;
use proptest::prelude::*;

fn coin_strategy() -> impl Strategy<Value = Coin> {
    ("[a-z][a-z0-9/]{0,15}", "[0-9]{0,30}").prop_map(|(denom, amount)| Coin { denom, amount })
}

fn msg_send_strategy() -> impl Strategy<Value = MsgSend> {
    (
        "[a-z0-9]{0,45}",
        "[a-z0-9]{0,45}",
        prop::collection::vec(coin_strategy(), 0..5),
    )
        .prop_map(|(from_address, to_address, amount)| MsgSend {
            from_address,
            to_address,
            amount,
        })
}

fn dec_strategy() -> impl Strategy<Value = Dec> {
    (any::<u64>(), 0u64..1_000_000_000_000_000_000).prop_map(|(whole, frac)| {
        format!("{whole}.{frac:018}")
            .parse()
            .expect("generated decimal is well formed")
    })
}

proptest! {
    #[test]
    fn msg_send_wire_round_trip(msg in msg_send_strategy()) {
        let decoded = MsgSend::decode(msg.encode_to_vec().as_slice()).unwrap();
        prop_assert_eq!(decoded, msg);
    }

    #[test]
    fn msg_send_amino_round_trip(msg in msg_send_strategy()) {
        let json = msg.to_amino_json().unwrap();
        prop_assert_eq!(MsgSend::from_amino_json(json).unwrap(), msg);
    }

    #[test]
    fn unbonding_entry_round_trip(
        creation_height in any::<i64>(),
        unbonding_id in any::<u64>(),
        on_hold in any::<i64>(),
        balance in "[0-9]{0,20}",
    ) {
        let entry = UnbondingDelegationEntry {
            creation_height,
            completion_time: None,
            initial_balance: balance.clone(),
            balance,
            unbonding_id,
            unbonding_on_hold_ref_count: on_hold,
        };
        let decoded = UnbondingDelegationEntry::decode(entry.encode_to_vec().as_slice()).unwrap();
        prop_assert_eq!(&decoded, &entry);
        let json = entry.to_amino_json().unwrap();
        prop_assert_eq!(UnbondingDelegationEntry::from_amino_json(json).unwrap(), entry);
    }

    #[test]
    fn delegation_shares_round_trip(shares in dec_strategy()) {
        let delegation = Delegation {
            delegator_address: "cosmos1d".to_string(),
            validator_address: "cosmosvaloper1v".to_string(),
            shares,
        };
        let decoded = Delegation::decode(delegation.encode_to_vec().as_slice()).unwrap();
        prop_assert_eq!(&decoded, &delegation);
        let json = delegation.to_amino_json().unwrap();
        prop_assert_eq!(Delegation::from_amino_json(json).unwrap(), delegation);
    }

    #[test]
    fn unknown_fields_are_skipped(
        msg in msg_send_strategy(),
        tag in 4u32..1000,
        varint in any::<u64>(),
        blob in prop::collection::vec(any::<u8>(), 0..32),
    ) {
        let mut bytes = Vec::new();
        // unknown varint field first, then the message, then an unknown blob
        prost::encoding::uint64::encode(tag, &varint, &mut bytes);
        msg.encode(&mut bytes).unwrap();
        prost::encoding::bytes::encode(tag + 1, &blob, &mut bytes);
        let decoded = MsgSend::decode(bytes.as_slice()).unwrap();
        prop_assert_eq!(decoded, msg);
    }
}

#[test]
fn zero_valued_messages_encode_empty() {
    assert!(MsgSend::default().encode_to_vec().is_empty());
    assert!(QueryBalanceRequest::default().encode_to_vec().is_empty());
    assert!(Delegation::default().encode_to_vec().is_empty());
    assert!(WeightedVoteOption::default().encode_to_vec().is_empty());
    assert!(UnbondingDelegationEntry::default().encode_to_vec().is_empty());
    let explicit_zero = PageResponse {
        next_key: vec![],
        total: 0,
    };
    assert!(explicit_zero.encode_to_vec().is_empty());
}

#[test]
fn u64_max_keeps_precision() {
    let page = PageResponse {
        next_key: vec![1],
        total: u64::MAX,
    };
    let decoded = PageResponse::decode(page.encode_to_vec().as_slice()).unwrap();
    assert_eq!(decoded.total, u64::MAX);

    let json = page.to_amino_json().unwrap();
    assert_eq!(json["total"], serde_json::json!("18446744073709551615"));
    assert_eq!(PageResponse::from_amino_json(json).unwrap().total, u64::MAX);
}

#[test]
fn balance_request_has_two_string_fields() {
    let req = QueryBalanceRequest {
        address: "cosmos1abc".to_string(),
        denom: "uatom".to_string(),
    };
    let bytes = req.encode_to_vec();
    let mut expected = vec![0x0a, 10];
    expected.extend_from_slice(b"cosmos1abc");
    expected.extend_from_slice(&[0x12, 5]);
    expected.extend_from_slice(b"uatom");
    assert_eq!(bytes, expected);
    assert_eq!(QueryBalanceRequest::decode(bytes.as_slice()).unwrap(), req);
}

#[test]
fn repeated_coins_share_one_tag_in_order() {
    let res = QueryAllBalancesResponse {
        balances: vec![
            Coin::new("a", 1),
            Coin::new("b", 2),
            Coin::new("c", 3),
        ],
        pagination: None,
    };
    let bytes = res.encode_to_vec();
    // each entry: tag 1 LEN, len 6, denom (0a 01 x), amount (12 01 n)
    assert_eq!(bytes.len(), 3 * 8);
    for (i, chunk) in bytes.chunks(8).enumerate() {
        assert_eq!(chunk[0], 0x0a);
        assert_eq!(chunk[1], 6);
        assert_eq!(chunk[4], b"abc"[i]);
    }
    let decoded = QueryAllBalancesResponse::decode(bytes.as_slice()).unwrap();
    let denoms: Vec<_> = decoded.balances.iter().map(|c| c.denom.as_str()).collect();
    assert_eq!(denoms, ["a", "b", "c"]);
}

#[test]
fn absent_submessage_stays_absent() {
    let res = QueryAllBalancesResponse {
        balances: vec![],
        pagination: None,
    };
    assert!(res.encode_to_vec().is_empty());
    let decoded = QueryAllBalancesResponse::decode(&[][..]).unwrap();
    assert_eq!(decoded.pagination, None);

    let present = QueryAllBalancesResponse {
        balances: vec![],
        pagination: Some(PageResponse::default()),
    };
    assert_eq!(present.encode_to_vec(), vec![0x12, 0x00]);
    let decoded = QueryAllBalancesResponse::decode(&[0x12, 0x00][..]).unwrap();
    assert_eq!(decoded.pagination, Some(PageResponse::default()));
}

#[test]
fn weighted_vote_keeps_weight_on_wire() {
    let msg = MsgVoteWeighted {
        proposal_id: 1,
        voter: "cosmos1v".to_string(),
        options: vec![WeightedVoteOption::new(
            VoteOption::Yes,
            "0.5".parse().unwrap(),
        )],
    };
    let decoded = MsgVoteWeighted::decode(msg.encode_to_vec().as_slice()).unwrap();
    assert_eq!(decoded.options[0].weight.to_atomics(), "500000000000000000");
    assert_eq!(decoded.options[0].option(), VoteOption::Yes);
}

#[test]
fn truncated_input_fails() {
    let req = QueryBalanceRequest {
        address: "cosmos1abc".to_string(),
        denom: "uatom".to_string(),
    };
    let bytes = req.encode_to_vec();
    assert!(QueryBalanceRequest::decode(&bytes[..bytes.len() - 1]).is_err());
    // a varint that never terminates
    assert!(QueryBalanceRequest::decode(&[0x08, 0xff, 0xff][..]).is_err());
}
