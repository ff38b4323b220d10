use crate::types::{BlockId, RpcBlock};
use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;

pub trait EthRequest {
    type Resp: DeserializeOwned;

    fn to_body(&self, id: usize) -> JsonValue;
}

#[derive(Debug, Clone, Copy)]
pub struct GetBlockByNumber {
    pub block: BlockId,
}

impl EthRequest for GetBlockByNumber {
    type Resp = Option<RpcBlock>;

    fn to_body(&self, id: usize) -> JsonValue {
        serde_json::json!({
            "jsonrpc": "2.0",
            "method": "eth_getBlockByNumber",
            "params": [
                self.block.to_tag(),
                true,
            ],
            "id": id,
        })
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ClientVersion {}

impl EthRequest for ClientVersion {
    type Resp = String;

    fn to_body(&self, id: usize) -> JsonValue {
        serde_json::json!({
            "jsonrpc": "2.0",
            "method": "web3_clientVersion",
            "params": [],
            "id": id,
        })
    }
}
