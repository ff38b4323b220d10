use clap::Args;
use serde::Deserialize;
use std::num::NonZeroU64;
use std::time::Duration;
use url::Url;

pub const DEFAULT_EXPLORER_URL: &str = "https://api.etherscan.io/api";

#[derive(Args, Deserialize, Clone, Debug)]
pub struct FetcherConfig {
    /// Ethereum json-rpc endpoint. Rpc fetches are unavailable without it
    #[clap(long, env = "ETH_RPC_URL")]
    pub eth_rpc_url: Option<Url>,
    /// Block explorer api key. Rest fetches are unavailable without it
    #[clap(long, env = "EXPLORER_API_KEY")]
    pub explorer_api_key: Option<String>,
    /// Block explorer api base url
    #[clap(long, env = "EXPLORER_URL", default_value_t = default_explorer_url())]
    #[serde(default = "default_explorer_url")]
    pub explorer_url: Url,
    /// Http request timeout in seconds
    #[clap(long, env = "REQUEST_TIMEOUT_SECS")]
    pub request_timeout_secs: Option<NonZeroU64>,
    /// Http connect timeout in milliseconds
    #[clap(long, env = "CONNECT_TIMEOUT_MS")]
    pub connect_timeout_ms: Option<NonZeroU64>,
}

impl FetcherConfig {
    pub fn api_key(&self) -> Option<&str> {
        self.explorer_api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }

    pub(crate) fn http_client(&self) -> reqwest::Result<reqwest::Client> {
        let mut builder = reqwest::ClientBuilder::new().gzip(true);

        if let Some(secs) = self.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs.get()));
        }
        if let Some(ms) = self.connect_timeout_ms {
            builder = builder.connect_timeout(Duration::from_millis(ms.get()));
        }

        builder.build()
    }
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            eth_rpc_url: None,
            explorer_api_key: None,
            explorer_url: default_explorer_url(),
            request_timeout_secs: None,
            connect_timeout_ms: None,
        }
    }
}

fn default_explorer_url() -> Url {
    // constant is a valid url
    Url::parse(DEFAULT_EXPLORER_URL).unwrap()
}
