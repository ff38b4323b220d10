use crate::config::FetcherConfig;
use crate::error::{Error, Result};
use crate::eth_request::{ClientVersion, EthRequest, GetBlockByNumber};
use crate::types::{BlockId, RpcBlock};
use serde_json::Value as JsonValue;
use url::Url;

pub struct EthClient {
    http_client: reqwest::Client,
    rpc_url: Url,
}

impl EthClient {
    pub fn new(rpc_url: Url, cfg: &FetcherConfig) -> Result<EthClient> {
        let http_client = cfg.http_client().map_err(Error::BuildHttpClient)?;

        Ok(EthClient {
            http_client,
            rpc_url,
        })
    }

    pub fn rpc_url(&self) -> &Url {
        &self.rpc_url
    }

    pub async fn send<R: EthRequest>(&self, req: R) -> Result<R::Resp> {
        let resp = self
            .http_client
            .post(self.rpc_url.clone())
            .json(&req.to_body(1))
            .send()
            .await
            .map_err(Error::HttpRequest)?;

        let resp_status = resp.status();
        if !resp_status.is_success() {
            let body = resp.text().await.ok();
            return Err(Error::RpcResponseStatus(resp_status.as_u16(), body));
        }

        let rpc_result = resp.json().await.map_err(Error::RpcResponseParse)?;

        parse_rpc_response(rpc_result)
    }

    /// Probes the node with `web3_clientVersion`.
    pub async fn is_connected(&self) -> bool {
        match self.send(ClientVersion {}).await {
            Ok(version) => {
                log::debug!("connected to {}, client version {}", self.rpc_url, version);
                true
            }
            Err(e) => {
                log::debug!("connectivity check against {} failed:\n{}", self.rpc_url, e);
                false
            }
        }
    }

    pub async fn get_block(&self, block: BlockId) -> Result<RpcBlock> {
        log::debug!("requesting block {} from {}", block, self.rpc_url);

        self.send(GetBlockByNumber { block })
            .await?
            .ok_or_else(|| Error::BlockNotFound(block.to_string()))
    }
}

fn parse_rpc_response<T: serde::de::DeserializeOwned>(rpc_result: JsonValue) -> Result<T> {
    let mut rpc_result = match rpc_result {
        JsonValue::Object(rpc_result) => rpc_result,
        _ => return Err(Error::InvalidRpcResponse),
    };

    if let Some(err) = rpc_result.remove("error").filter(|err| !err.is_null()) {
        let code = err.get("code").and_then(JsonValue::as_i64).unwrap_or_default();
        let message = match err.get("message").and_then(JsonValue::as_str) {
            Some(message) => message.to_owned(),
            None => err.to_string(),
        };
        return Err(Error::RpcError { code, message });
    }

    let rpc_result = rpc_result
        .remove("result")
        .ok_or(Error::InvalidRpcResponse)?;

    serde_json::from_value(rpc_result).map_err(Error::RpcResultParse)
}
