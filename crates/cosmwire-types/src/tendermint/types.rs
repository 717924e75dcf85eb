//! `tendermint.types` block types

use super::version::Consensus;
use cosmwire_codec::amino::enum_from_json;
use cosmwire_codec::{cosmos_message, register_types, Timestamp, TypeRegistry};

/// BlockIdFlag indicates which BlockID the signature is for
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum BlockIdFlag {
    /// indicates an error condition
    Unknown = 0,
    /// the vote was not received
    Absent = 1,
    /// voted for the block that received the majority
    Commit = 2,
    /// voted for nil
    Nil = 3,
    Unrecognized = -1,
}

impl BlockIdFlag {
    pub fn as_str_name(&self) -> &'static str {
        match self {
            BlockIdFlag::Unknown => "BLOCK_ID_FLAG_UNKNOWN",
            BlockIdFlag::Absent => "BLOCK_ID_FLAG_ABSENT",
            BlockIdFlag::Commit => "BLOCK_ID_FLAG_COMMIT",
            BlockIdFlag::Nil => "BLOCK_ID_FLAG_NIL",
            BlockIdFlag::Unrecognized => "UNRECOGNIZED",
        }
    }

    pub fn from_str_name(value: &str) -> Option<Self> {
        match value {
            "BLOCK_ID_FLAG_UNKNOWN" => Some(Self::Unknown),
            "BLOCK_ID_FLAG_ABSENT" => Some(Self::Absent),
            "BLOCK_ID_FLAG_COMMIT" => Some(Self::Commit),
            "BLOCK_ID_FLAG_NIL" => Some(Self::Nil),
            _ => None,
        }
    }

    pub fn from_json(value: &serde_json::Value) -> Self {
        enum_from_json(value, Self::from_str_name, |n| Self::try_from(n).ok())
            .unwrap_or(Self::Unrecognized)
    }
}

/// Header of a parted set
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct PartSetHeader {
    #[prost(uint32, tag = "1")]
    pub total: u32,
    #[prost(bytes = "vec", tag = "2")]
    pub hash: Vec<u8>,
}

#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct BlockId {
    #[prost(bytes = "vec", tag = "1")]
    pub hash: Vec<u8>,
    #[prost(message, optional, tag = "2")]
    pub part_set_header: Option<PartSetHeader>,
}

/// Header defines the structure of a block header.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Header {
    /// basic block info
    #[prost(message, optional, tag = "1")]
    pub version: Option<Consensus>,
    #[prost(string, tag = "2")]
    pub chain_id: String,
    #[prost(int64, tag = "3")]
    pub height: i64,
    #[prost(message, optional, tag = "4")]
    pub time: Option<Timestamp>,
    /// prev block info
    #[prost(message, optional, tag = "5")]
    pub last_block_id: Option<BlockId>,
    /// hashes of block data
    #[prost(bytes = "vec", tag = "6")]
    pub last_commit_hash: Vec<u8>,
    #[prost(bytes = "vec", tag = "7")]
    pub data_hash: Vec<u8>,
    /// hashes from the app output from the prev block
    #[prost(bytes = "vec", tag = "8")]
    pub validators_hash: Vec<u8>,
    #[prost(bytes = "vec", tag = "9")]
    pub next_validators_hash: Vec<u8>,
    #[prost(bytes = "vec", tag = "10")]
    pub consensus_hash: Vec<u8>,
    #[prost(bytes = "vec", tag = "11")]
    pub app_hash: Vec<u8>,
    #[prost(bytes = "vec", tag = "12")]
    pub last_results_hash: Vec<u8>,
    /// consensus info
    #[prost(bytes = "vec", tag = "13")]
    pub evidence_hash: Vec<u8>,
    /// original proposer of the block
    #[prost(bytes = "vec", tag = "14")]
    pub proposer_address: Vec<u8>,
}

/// Data contains the set of transactions included in the block
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Data {
    /// Txs that will be applied by state @ block.Height+1.
    /// NOTE: not all txs here are valid.  We're just agreeing on the order first.
    #[prost(bytes = "vec", repeated, tag = "1")]
    pub txs: Vec<Vec<u8>>,
}

/// CommitSig is a part of the Vote included in a Commit.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CommitSig {
    #[prost(enumeration = "BlockIdFlag", tag = "1")]
    pub block_id_flag: i32,
    #[prost(bytes = "vec", tag = "2")]
    pub validator_address: Vec<u8>,
    #[prost(message, optional, tag = "3")]
    pub timestamp: Option<Timestamp>,
    #[prost(bytes = "vec", tag = "4")]
    pub signature: Vec<u8>,
}

/// Commit contains the evidence that a block was committed by a set of validators.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Commit {
    #[prost(int64, tag = "1")]
    pub height: i64,
    #[prost(int32, tag = "2")]
    pub round: i32,
    #[prost(message, optional, tag = "3")]
    pub block_id: Option<BlockId>,
    #[prost(message, repeated, tag = "4")]
    pub signatures: Vec<CommitSig>,
}

/// Block of the chain. The evidence list (tag 3) is not modelled and is
/// dropped on decode.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Block {
    #[prost(message, optional, tag = "1")]
    pub header: Option<Header>,
    #[prost(message, optional, tag = "2")]
    pub data: Option<Data>,
    #[prost(message, optional, tag = "4")]
    pub last_commit: Option<Commit>,
}

cosmos_message!(PartSetHeader => PartSetHeaderAmino, PartSetHeaderPartial;
    "/tendermint.types.PartSetHeader", "/tendermint.types.PartSetHeader" {
        total: uint32,
        hash: bytes,
    });

cosmos_message!(BlockId => BlockIdAmino, BlockIdPartial;
    "/tendermint.types.BlockID", "/tendermint.types.BlockID" {
        hash: bytes,
        part_set_header: message(PartSetHeader),
    });

cosmos_message!(Header => HeaderAmino, HeaderPartial;
    "/tendermint.types.Header", "/tendermint.types.Header" {
        version: message(Consensus),
        chain_id: string,
        height: int64,
        time: timestamp,
        last_block_id: message(BlockId),
        last_commit_hash: bytes,
        data_hash: bytes,
        validators_hash: bytes,
        next_validators_hash: bytes,
        consensus_hash: bytes,
        app_hash: bytes,
        last_results_hash: bytes,
        evidence_hash: bytes,
        proposer_address: bytes,
    });

cosmos_message!(Data => DataAmino, DataPartial;
    "/tendermint.types.Data", "/tendermint.types.Data" {
        txs: bytes_list,
    });

cosmos_message!(CommitSig => CommitSigAmino, CommitSigPartial;
    "/tendermint.types.CommitSig", "/tendermint.types.CommitSig" {
        block_id_flag: enumeration(BlockIdFlag),
        validator_address: bytes,
        timestamp: timestamp,
        signature: bytes,
    });

cosmos_message!(Commit => CommitAmino, CommitPartial;
    "/tendermint.types.Commit", "/tendermint.types.Commit" {
        height: int64,
        round: int32,
        block_id: message(BlockId),
        signatures: messages(CommitSig),
    });

cosmos_message!(Block => BlockAmino, BlockPartial;
    "/tendermint.types.Block", "/tendermint.types.Block" {
        header: message(Header),
        data: message(Data),
        last_commit: message(Commit),
    });

pub(crate) fn register(registry: &TypeRegistry) {
    register_types!(
        registry,
        [PartSetHeader, BlockId, Header, Data, CommitSig, Commit, Block]
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwire_codec::AminoConvert;
    use prost::Message;

    #[test]
    fn test_block_skips_evidence() {
        // header { height: 5 }, data { txs: [0xab] }, evidence {}, last_commit { round: 1 }
        let bytes = [
            0x0a, 0x02, 0x18, 0x05, 0x12, 0x03, 0x0a, 0x01, 0xab, 0x1a, 0x00, 0x22, 0x02, 0x10,
            0x01,
        ];
        let block = Block::decode(&bytes[..]).unwrap();

        assert_eq!(block.header.as_ref().map(|h| h.height), Some(5));
        assert_eq!(block.data.as_ref().map(|d| d.txs.clone()), Some(vec![vec![0xab]]));
        assert_eq!(block.last_commit.as_ref().map(|c| c.round), Some(1));
    }

    #[test]
    fn test_commit_sig_amino() {
        let sig = CommitSig {
            block_id_flag: BlockIdFlag::Commit as i32,
            validator_address: vec![0x01, 0x02],
            timestamp: Some(Timestamp {
                seconds: 1_700_000_000,
                nanos: 0,
            }),
            signature: vec![0xff],
        };

        let json = sig.to_amino_json().unwrap();
        assert_eq!(json["block_id_flag"], 2);
        assert_eq!(json["validator_address"], "AQI=");
        assert_eq!(CommitSig::from_amino_json(json).unwrap(), sig);
        assert_eq!(sig.block_id_flag(), BlockIdFlag::Commit);
    }
}
