use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const MSG_SEND_HEX: &str = "0a01611201621a0a0a057561746f6d120131";
const MSG_SEND_AMINO: &str = r#"{"type":"cosmos-sdk/MsgSend","value":{"from_address":"a","to_address":"b","amount":[{"denom":"uatom","amount":"1"}]}}"#;

#[test]
fn test_version_command() {
    let mut cmd = Command::cargo_bin("cosmwire").unwrap();
    cmd.arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("cosmwire"))
        .stdout(predicate::str::contains("types:"));
}

#[test]
fn test_types_lists_amino_names() {
    let mut cmd = Command::cargo_bin("cosmwire").unwrap();
    cmd.arg("types")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "/cosmos.bank.v1beta1.MsgSend\tcosmos-sdk/MsgSend",
        ))
        .stdout(predicate::str::contains(
            "/cosmos.auth.v1beta1.BaseAccount\tcosmos-sdk/BaseAccount",
        ));
}

#[test]
fn test_decode_hex() {
    let mut cmd = Command::cargo_bin("cosmwire").unwrap();
    cmd.arg("decode")
        .arg("/cosmos.bank.v1beta1.MsgSend")
        .arg(MSG_SEND_HEX)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"type\": \"cosmos-sdk/MsgSend\""))
        .stdout(predicate::str::contains("\"denom\": \"uatom\""));
}

#[test]
fn test_decode_base64() {
    let mut cmd = Command::cargo_bin("cosmwire").unwrap();
    cmd.arg("decode")
        .arg("/cosmos.bank.v1beta1.MsgSend")
        .arg("CgFhEgFiGgoKBXVhdG9tEgEx")
        .arg("--base64")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"from_address\": \"a\""));
}

#[test]
fn test_decode_unknown_type() {
    let mut cmd = Command::cargo_bin("cosmwire").unwrap();
    cmd.arg("decode")
        .arg("/cosmos.nothing.v1.Msg")
        .arg("00")
        .assert()
        .failure()
        .code(5)
        .stderr(predicate::str::contains("failed to decode /cosmos.nothing.v1.Msg"));
}

#[test]
fn test_decode_missing_args() {
    let mut cmd = Command::cargo_bin("cosmwire").unwrap();
    cmd.arg("decode")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "required arguments were not provided",
        ));
}

#[test]
fn test_encode_amino() {
    let mut cmd = Command::cargo_bin("cosmwire").unwrap();
    cmd.arg("encode")
        .arg(MSG_SEND_AMINO)
        .assert()
        .success()
        .stdout(predicate::str::diff(format!("{MSG_SEND_HEX}\n")));
}

#[test]
fn test_encode_unknown_amino_type() {
    let mut cmd = Command::cargo_bin("cosmwire").unwrap();
    cmd.arg("encode")
        .arg(r#"{"type":"cosmos-sdk/Nothing","value":{}}"#)
        .assert()
        .failure()
        .code(5)
        .stderr(predicate::str::contains("cosmos-sdk/Nothing"));
}

#[test]
fn test_decode_bad_hex_is_invalid_argument() {
    let mut cmd = Command::cargo_bin("cosmwire").unwrap();
    cmd.arg("decode")
        .arg("/cosmos.bank.v1beta1.MsgSend")
        .arg("zz")
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("DATA is not valid hex"));
}

#[test]
fn test_decode_truncated_bytes() {
    let mut cmd = Command::cargo_bin("cosmwire").unwrap();
    cmd.arg("decode")
        .arg("/cosmos.bank.v1beta1.MsgSend")
        .arg("0a05")
        .assert()
        .failure()
        .code(2);
}

#[test]
fn test_query_with_malformed_config() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, "timeout_seconds = \"never\"").unwrap();

    let mut cmd = Command::cargo_bin("cosmwire").unwrap();
    cmd.arg("query")
        .arg("balance")
        .arg("cosmos1abc")
        .arg("uatom")
        .arg("--config")
        .arg(&config_path)
        .assert()
        .failure()
        .code(10)
        .stderr(predicate::str::contains("failed to load config"));
}

#[test]
fn test_query_unreachable_node() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, "timeout_seconds = 2\n").unwrap();

    let mut cmd = Command::cargo_bin("cosmwire").unwrap();
    cmd.arg("query")
        .arg("account")
        .arg("cosmos1abc")
        .arg("--config")
        .arg(&config_path)
        .arg("--node")
        .arg("http://127.0.0.1:1")
        .assert()
        .failure()
        .code(8)
        .stderr(predicate::str::contains("http request failed"));
}
