use crate::deserialize::{Address, Bytes, Bytes32, HexQuantity, Quantity};
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BlockId {
    #[default]
    Latest,
    Number(u64),
}

impl BlockId {
    /// Block tag as expected by `eth_getBlockByNumber`.
    pub fn to_tag(self) -> String {
        match self {
            BlockId::Latest => "latest".to_owned(),
            BlockId::Number(number) => block_number_to_hex(number),
        }
    }
}

impl FromStr for BlockId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("latest") {
            return Ok(BlockId::Latest);
        }

        if s.starts_with("0x") || s.starts_with("0X") {
            return crate::deserialize::parse_hex_u64(s).map(BlockId::Number);
        }

        s.parse::<u64>()
            .map(BlockId::Number)
            .map_err(|e| format!("invalid block identifier {:?}: {}", s, e))
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlockId::Latest => f.write_str("latest"),
            BlockId::Number(number) => write!(f, "{}", number),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockSource {
    Rpc,
    Rest,
}

impl FromStr for BlockSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rpc" | "web3" => Ok(BlockSource::Rpc),
            "rest" | "explorer" | "etherscan" => Ok(BlockSource::Rest),
            other => Err(format!("unknown block source {:?}, expected rpc or rest", other)),
        }
    }
}

impl fmt::Display for BlockSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlockSource::Rpc => f.write_str("rpc"),
            BlockSource::Rest => f.write_str("rest"),
        }
    }
}

/// Block as decoded from a JSON-RPC node, numeric fields are native integers.
///
/// Only `number`, `timestamp` and `transactions` are required.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RpcBlock {
    pub number: Quantity,
    pub hash: Option<Bytes32>,
    pub parent_hash: Option<Bytes32>,
    pub miner: Option<Address>,
    pub gas_limit: Option<Quantity>,
    pub gas_used: Option<Quantity>,
    pub base_fee_per_gas: Option<Quantity>,
    pub timestamp: Quantity,
    pub transactions: Vec<Transaction>,
}

/// Block as returned by the explorer api, numeric fields stay hex encoded.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestBlock {
    pub number: HexQuantity,
    pub hash: Option<Bytes32>,
    pub parent_hash: Option<Bytes32>,
    pub miner: Option<Address>,
    pub gas_limit: Option<HexQuantity>,
    pub gas_used: Option<HexQuantity>,
    pub base_fee_per_gas: Option<HexQuantity>,
    pub timestamp: HexQuantity,
    pub transactions: Vec<Transaction>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub hash: Option<Bytes32>,
    pub from: Option<Address>,
    pub to: Option<Address>,
    pub value: Option<Bytes>,
    pub nonce: Option<Quantity>,
    pub transaction_index: Option<Quantity>,
}

#[derive(Debug, Clone)]
pub enum Block {
    Rpc(RpcBlock),
    Rest(RestBlock),
}

impl Block {
    pub fn source(&self) -> BlockSource {
        match self {
            Block::Rpc(_) => BlockSource::Rpc,
            Block::Rest(_) => BlockSource::Rest,
        }
    }

    pub fn summary(&self) -> BlockSummary {
        match self {
            Block::Rpc(block) => BlockSummary {
                number: *block.number,
                timestamp: *block.timestamp,
                transaction_count: block.transactions.len(),
            },
            Block::Rest(block) => BlockSummary {
                number: block.number.value(),
                timestamp: block.timestamp.value(),
                transaction_count: block.transactions.len(),
            },
        }
    }
}

impl From<RpcBlock> for Block {
    fn from(block: RpcBlock) -> Self {
        Block::Rpc(block)
    }
}

impl From<RestBlock> for Block {
    fn from(block: RestBlock) -> Self {
        Block::Rest(block)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockSummary {
    pub number: u64,
    pub timestamp: u64,
    pub transaction_count: usize,
}

impl fmt::Display for BlockSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Block Number: {}", self.number)?;
        writeln!(f, "Timestamp: {}", self.timestamp)?;
        write!(f, "Transactions: {}", self.transaction_count)
    }
}

pub fn block_number_to_hex(block_number: u64) -> String {
    format!("0x{:x}", block_number)
}
