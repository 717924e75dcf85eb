//! Resolution of `Any` values and Amino envelopes through the global
//! registry once every package has been registered.

use cosmwire_codec::{AminoConvert, AminoMsg, Any, MessageExt, TypeRegistry, GLOBAL_TYPE_REGISTRY};
use cosmwire_types::cosmos::auth::v1beta1::{BaseAccount, QueryAccountResponse};
use cosmwire_types::cosmos::bank::v1beta1::MsgSend;
use cosmwire_types::cosmos::crypto::secp256k1::PubKey;
use cosmwire_types::cosmos::tx::v1beta1::{Fee, Tx, TxBody};
use cosmwire_types::Coin;
use prost::Message;

fn account() -> BaseAccount {
    BaseAccount {
        address: "cosmos1qypqxpq9qcrsszg2pvxq6rs0zqg3yyc5lzv7xu".to_string(),
        pub_key: Some(
            PubKey {
                key: vec![3; 33],
            }
            .to_any(),
        ),
        account_number: 17,
        sequence: 4,
    }
}

#[test]
fn base_account_any_resolves() {
    cosmwire_types::init();
    let any = account().to_any();

    let dynamic = GLOBAL_TYPE_REGISTRY.unwrap_any(&any).unwrap();
    assert_eq!(dynamic.dyn_type_url(), "/cosmos.auth.v1beta1.BaseAccount");
    assert_eq!(dynamic.downcast_ref::<BaseAccount>(), Some(&account()));

    let envelope = GLOBAL_TYPE_REGISTRY.any_to_amino_msg(&any).unwrap();
    assert_eq!(envelope.r#type, "cosmos-sdk/BaseAccount");
    assert_eq!(envelope.value["account_number"], serde_json::json!("17"));
    assert_eq!(
        envelope.value["pub_key"]["type"],
        serde_json::json!("tendermint/PubKeySecp256k1")
    );

    let back = GLOBAL_TYPE_REGISTRY.amino_msg_to_any(&envelope).unwrap();
    assert_eq!(back, any);
}

#[test]
fn account_query_response_json() {
    cosmwire_types::init();
    let res = QueryAccountResponse {
        account: Some(account().to_any()),
    };
    let bytes = res.encode_to_vec();
    let decoded = QueryAccountResponse::decode(bytes.as_slice()).unwrap();
    let json = decoded.to_amino_json().unwrap();
    assert_eq!(json["account"]["type"], serde_json::json!("cosmos-sdk/BaseAccount"));
    assert_eq!(QueryAccountResponse::from_amino_json(json).unwrap(), res);
}

#[test]
fn tx_with_messages_round_trips_through_amino() {
    cosmwire_types::init();
    let send = MsgSend::new("cosmos1a", "cosmos1b", vec![Coin::new("uatom", 5)]);
    let tx = Tx {
        body: Some(TxBody {
            messages: vec![send.to_any()],
            memo: "hello".to_string(),
            ..Default::default()
        }),
        auth_info: None,
        signatures: vec![vec![0xde, 0xad]],
    };
    let json = tx.to_amino_json().unwrap();
    assert_eq!(
        json["body"]["messages"][0],
        serde_json::json!({
            "type": "cosmos-sdk/MsgSend",
            "value": {
                "from_address": "cosmos1a",
                "to_address": "cosmos1b",
                "amount": [{ "denom": "uatom", "amount": "5" }],
            }
        })
    );
    assert_eq!(json["signatures"], serde_json::json!(["3q0="]));
    assert_eq!(Tx::from_amino_json(json).unwrap(), tx);
}

#[test]
fn unknown_type_url_is_reported() {
    cosmwire_types::init();
    let any = Any {
        type_url: "/cosmos.nope.v1.Missing".to_string(),
        value: vec![],
    };
    assert!(GLOBAL_TYPE_REGISTRY.unwrap_any(&any).is_err());
    let envelope = AminoMsg {
        r#type: "cosmos-sdk/Missing".to_string(),
        value: serde_json::json!({}),
    };
    assert!(GLOBAL_TYPE_REGISTRY.amino_msg_to_any(&envelope).is_err());
}

#[test]
fn shared_amino_names_keep_first_registration() {
    let registry = TypeRegistry::new();
    cosmwire_types::register_all(&registry);
    assert_eq!(
        registry.type_url_for_amino("cosmos-sdk/QueryParamsRequest"),
        Some("/cosmos.auth.v1beta1.QueryParamsRequest".to_string())
    );
    assert_eq!(
        registry.amino_type_for("/cosmos.bank.v1beta1.QueryParamsRequest"),
        Some("cosmos-sdk/QueryParamsRequest")
    );
    assert!(registry.contains(Fee::TYPE_URL));

    let count = registry.len();
    cosmwire_types::register_all(&registry);
    assert_eq!(registry.len(), count);
}
