use std::result::Result as StdResult;

use thiserror::Error as ThisError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A required credential or url was not configured.
    Configuration,
    /// The upstream could not be reached.
    Connectivity,
    /// The upstream answered with something malformed or error-flagged.
    Data,
}

#[derive(Debug, ThisError)]
pub enum Error {
    #[error("ethereum rpc url is not configured")]
    MissingRpcUrl,
    #[error("block explorer api key is not configured")]
    MissingApiKey,
    #[error("block explorer api requires a block number, \"latest\" is not supported")]
    LatestUnsupportedByExplorer,
    #[error("failed to build http client:\n{0}")]
    BuildHttpClient(reqwest::Error),
    #[error("failed to connect to ethereum node at {0}")]
    NodeUnreachable(url::Url),
    #[error("failed to execute http request:\n{0}")]
    HttpRequest(reqwest::Error),
    #[error("failed to parse rpc response:\n{0}")]
    RpcResponseParse(reqwest::Error),
    #[error("failed to parse rpc result:\n{0}")]
    RpcResultParse(serde_json::Error),
    #[error("invalid rpc response")]
    InvalidRpcResponse,
    #[error("rpc returned error {code}: {message}")]
    RpcError { code: i64, message: String },
    #[error("error: rpc response status is {0}. payload:\n{1:?}")]
    RpcResponseStatus(u16, Option<String>),
    #[error("error: explorer response status is {0}. payload:\n{1:?}")]
    ExplorerResponseStatus(u16, Option<String>),
    #[error("failed to parse explorer response:\n{0}")]
    ExplorerResponseParse(reqwest::Error),
    #[error("failed to parse explorer result:\n{0}")]
    ExplorerResultParse(serde_json::Error),
    #[error("explorer returned error: {0}")]
    ExplorerError(String),
    #[error("explorer response has no result field")]
    MissingResult,
    #[error("block {0} not found")]
    BlockNotFound(String),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::MissingRpcUrl
            | Error::MissingApiKey
            | Error::LatestUnsupportedByExplorer
            | Error::BuildHttpClient(_) => ErrorKind::Configuration,
            Error::NodeUnreachable(_) | Error::HttpRequest(_) => ErrorKind::Connectivity,
            Error::RpcResponseParse(_)
            | Error::RpcResultParse(_)
            | Error::InvalidRpcResponse
            | Error::RpcError { .. }
            | Error::RpcResponseStatus(..)
            | Error::ExplorerResponseStatus(..)
            | Error::ExplorerResponseParse(_)
            | Error::ExplorerResultParse(_)
            | Error::ExplorerError(_)
            | Error::MissingResult
            | Error::BlockNotFound(_) => ErrorKind::Data,
        }
    }
}

pub type Result<T> = StdResult<T, Error>;
