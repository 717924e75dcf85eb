use anyhow::{Context, Result};
use base64::Engine;
use clap::{Parser, Subcommand};
use cosmwire_client::{auth, bank, AbciQueryRpc, ClientConfig};
use cosmwire_client::{ConfigError, RpcError};
use cosmwire_codec::{AminoConvert, AminoMsg, Any, CodecError, GLOBAL_TYPE_REGISTRY};
use cosmwire_errors::{codes, ErrorCode};
use cosmwire_types::cosmos::auth::v1beta1::QueryAccountRequest;
use cosmwire_types::cosmos::bank::v1beta1::QueryBalanceRequest;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(
    name = "cosmwire",
    about = "Cosmos SDK protobuf and Amino message tool",
    version,
    author
)]
struct Cli {
    #[arg(
        long,
        global = true,
        value_name = "LEVEL",
        default_value = "warn",
        help = "Log level (trace, debug, info, warn, error)"
    )]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "List registered type URLs with their Amino names")]
    Types,

    #[command(about = "Decode protobuf bytes and print their Amino JSON")]
    Decode {
        #[arg(value_name = "TYPE_URL", help = "Type URL, e.g. /cosmos.bank.v1beta1.MsgSend")]
        type_url: String,

        #[arg(value_name = "DATA", help = "Encoded message bytes (hex unless --base64)")]
        data: String,

        #[arg(long, help = "Read DATA as base64 instead of hex")]
        base64: bool,
    },

    #[command(about = "Encode an Amino JSON envelope to hex protobuf bytes")]
    Encode {
        #[arg(value_name = "AMINO_JSON", help = "Envelope of the form {\"type\":...,\"value\":...}")]
        amino_json: String,
    },

    #[command(about = "Query a node over ABCI")]
    Query {
        #[arg(long, global = true, value_name = "URL", help = "Node RPC endpoint")]
        node: Option<String>,

        #[arg(long, global = true, value_name = "FILE", help = "Client configuration file path")]
        config: Option<PathBuf>,

        #[arg(long, global = true, value_name = "HEIGHT", help = "Query state at this height")]
        height: Option<u64>,

        #[command(subcommand)]
        command: QueryCommands,
    },

    #[command(about = "Display version information")]
    Version,
}

#[derive(Subcommand)]
enum QueryCommands {
    #[command(about = "Balance of one denom held by an address")]
    Balance {
        #[arg(value_name = "ADDRESS", help = "Bech32 account address")]
        address: String,

        #[arg(value_name = "DENOM", help = "Coin denomination")]
        denom: String,
    },

    #[command(about = "Account stored at an address")]
    Account {
        #[arg(value_name = "ADDRESS", help = "Bech32 account address")]
        address: String,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli).await {
        eprintln!("Error: {err:?}");
        std::process::exit(exit_code(&err));
    }
}

async fn run(cli: Cli) -> Result<()> {
    setup_logging(&cli.log_level)?;
    cosmwire_types::init();

    match cli.command {
        Commands::Types => types_command(),
        Commands::Decode {
            type_url,
            data,
            base64,
        } => decode_command(&type_url, &data, base64),
        Commands::Encode { amino_json } => encode_command(&amino_json),
        Commands::Query {
            node,
            config,
            height,
            command,
        } => {
            let config = load_config(config, node, height)?;
            query_command(config, command).await
        }
        Commands::Version => version_command(),
    }
}

fn types_command() -> Result<()> {
    let mut type_urls = GLOBAL_TYPE_REGISTRY.type_urls();
    type_urls.sort();

    for type_url in type_urls {
        let amino_type = GLOBAL_TYPE_REGISTRY.amino_type_for(&type_url).unwrap_or("-");
        println!("{type_url}\t{amino_type}");
    }
    Ok(())
}

fn decode_command(type_url: &str, data: &str, base64: bool) -> Result<()> {
    let value = if base64 {
        base64::engine::general_purpose::STANDARD
            .decode(data.trim())
            .context("DATA is not valid base64")?
    } else {
        hex::decode(data.trim().trim_start_matches("0x")).context("DATA is not valid hex")?
    };

    let any = Any {
        type_url: type_url.to_string(),
        value,
    };
    let json = GLOBAL_TYPE_REGISTRY
        .any_to_json(&any)
        .with_context(|| format!("failed to decode {type_url}"))?;

    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}

fn encode_command(amino_json: &str) -> Result<()> {
    let msg: AminoMsg =
        serde_json::from_str(amino_json).context("expected an amino envelope {\"type\", \"value\"}")?;
    let any = GLOBAL_TYPE_REGISTRY
        .amino_msg_to_any(&msg)
        .with_context(|| format!("failed to encode {}", msg.r#type))?;

    tracing::debug!(type_url = %any.type_url, len = any.value.len(), "encoded message");
    println!("{}", hex::encode(&any.value));
    Ok(())
}

async fn query_command(config: ClientConfig, command: QueryCommands) -> Result<()> {
    let rpc = Arc::new(AbciQueryRpc::from_config(&config)?);
    tracing::info!(endpoint = %rpc.endpoint(), "querying node");

    let json = match command {
        QueryCommands::Balance { address, denom } => {
            let client = bank::QueryClient::new(rpc);
            let response = client
                .balance(&QueryBalanceRequest { address, denom })
                .await?;
            response.to_amino_json()?
        }
        QueryCommands::Account { address } => {
            let client = auth::QueryClient::new(rpc);
            let response = client
                .account(&QueryAccountRequest {
                    address: address.clone(),
                })
                .await?;
            match response.account {
                Some(account) => GLOBAL_TYPE_REGISTRY.any_to_json(&account)?,
                None => {
                    let err = cosmwire_errors::Error::NotFound(format!("account {address}"));
                    return Err(err.into());
                }
            }
        }
    };

    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}

fn version_command() -> Result<()> {
    println!("cosmwire {}", env!("CARGO_PKG_VERSION"));
    println!("types: {}", GLOBAL_TYPE_REGISTRY.len());
    Ok(())
}

// Helper functions

/// Classify a failure by the first coded error in its chain. Input the CLI
/// itself rejects (bad hex, malformed envelope) is an invalid argument.
fn boundary_error(err: &anyhow::Error) -> cosmwire_errors::Error {
    for cause in err.chain() {
        if let Some(coded) = cause.downcast_ref::<CodecError>() {
            return cosmwire_errors::Error::from_coded(coded);
        }
        if let Some(coded) = cause.downcast_ref::<RpcError>() {
            return cosmwire_errors::Error::from_coded(coded);
        }
        if let Some(coded) = cause.downcast_ref::<ConfigError>() {
            return cosmwire_errors::Error::from_coded(coded);
        }
        if let Some(coded) = cause.downcast_ref::<cosmwire_errors::Error>() {
            return cosmwire_errors::Error::from_coded(coded);
        }
    }
    cosmwire_errors::Error::InvalidRequest(format!("{err:#}"))
}

fn exit_code(err: &anyhow::Error) -> i32 {
    match boundary_error(err).code() {
        codes::OK => codes::INTERNAL as i32,
        code => i32::try_from(code).unwrap_or(codes::INTERNAL as i32),
    }
}

fn setup_logging(level: &str) -> Result<()> {
    cosmwire_log::init_tracing_with_level(level)
        .map_err(|err| anyhow::anyhow!("failed to initialize logging: {err}"))
}

fn load_config(path: Option<PathBuf>, node: Option<String>, height: Option<u64>) -> Result<ClientConfig> {
    let mut config = match path {
        Some(path) => ClientConfig::load_from_file(&path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => ClientConfig::load_or_default()?,
    };

    if let Some(node) = node {
        config.rpc_endpoint = node;
    }
    if height.is_some() {
        config.height = height;
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_from_codec_error() {
        let err = anyhow::Error::new(CodecError::TypeNotFound("/x.Msg".to_string()))
            .context("failed to decode /x.Msg");
        assert_eq!(exit_code(&err), codes::NOT_FOUND as i32);
        assert_eq!(boundary_error(&err).code(), codes::NOT_FOUND);
    }

    #[test]
    fn test_exit_code_from_rpc_error() {
        let err = anyhow::Error::new(RpcError::Abci {
            code: 18,
            log: "invalid address".to_string(),
        });
        assert_eq!(exit_code(&err), codes::ABCI as i32);
    }

    #[test]
    fn test_exit_code_for_cli_input() {
        let err = anyhow::anyhow!("odd length").context("DATA is not valid hex");
        let boundary = boundary_error(&err);
        assert_eq!(boundary.code(), codes::INVALID_ARGUMENT);
        assert_eq!(boundary.to_string(), "invalid request:: DATA is not valid hex: odd length");
    }

    #[test]
    fn test_exit_code_for_missing_account() {
        let err: anyhow::Error =
            cosmwire_errors::Error::NotFound("account cosmos1abc".to_string()).into();
        assert_eq!(exit_code(&err), codes::NOT_FOUND as i32);
    }
}
