use crate::config::FetcherConfig;
use crate::error::{Error, Result};
use crate::types::{block_number_to_hex, RestBlock};
use serde_json::Value as JsonValue;
use url::Url;

/// Client for the `proxy` module of an etherscan compatible explorer api.
pub struct ExplorerClient {
    http_client: reqwest::Client,
    base_url: Url,
    api_key: String,
}

impl ExplorerClient {
    pub fn new(base_url: Url, api_key: String, cfg: &FetcherConfig) -> Result<Self> {
        let http_client = cfg.http_client().map_err(Error::BuildHttpClient)?;

        Ok(Self {
            http_client,
            base_url,
            api_key,
        })
    }

    pub async fn get_block(&self, block_number: u64) -> Result<RestBlock> {
        let tag = block_number_to_hex(block_number);

        log::debug!("requesting block {} ({}) from {}", block_number, tag, self.base_url);

        let resp = self
            .http_client
            .get(self.base_url.clone())
            .query(&[
                ("module", "proxy"),
                ("action", "eth_getBlockByNumber"),
                ("tag", tag.as_str()),
                ("boolean", "true"),
                ("apikey", self.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(Error::HttpRequest)?;

        let resp_status = resp.status();
        if !resp_status.is_success() {
            let body = resp.text().await.ok();
            return Err(Error::ExplorerResponseStatus(resp_status.as_u16(), body));
        }

        let resp_body = resp.json().await.map_err(Error::ExplorerResponseParse)?;

        parse_explorer_response(resp_body, block_number)
    }
}

/// Unwraps the `result` member of an explorer envelope into a block.
pub fn parse_explorer_response(resp_body: JsonValue, block_number: u64) -> Result<RestBlock> {
    let mut resp_body = match resp_body {
        JsonValue::Object(resp_body) => resp_body,
        _ => return Err(Error::ExplorerError("response is not a json object".to_owned())),
    };

    if let Some(err) = resp_body.remove("error").filter(|err| !err.is_null()) {
        let message = match err.get("message").and_then(JsonValue::as_str) {
            Some(message) => message.to_owned(),
            None => err.to_string(),
        };
        return Err(Error::ExplorerError(message));
    }

    match resp_body.remove("result") {
        None => Err(Error::MissingResult),
        Some(JsonValue::Null) => Err(Error::BlockNotFound(block_number.to_string())),
        // rejected keys and rate limits come back as {"status":"0","result":"<reason>"}
        Some(JsonValue::String(reason)) => Err(Error::ExplorerError(reason)),
        Some(result) => serde_json::from_value(result).map_err(Error::ExplorerResultParse),
    }
}
