pub mod config;
pub mod deserialize;
pub mod error;
pub mod eth_client;
pub mod eth_request;
pub mod explorer_client;
pub mod fetcher;
pub mod types;

pub use config::FetcherConfig;
pub use error::{Error, ErrorKind, Result};
pub use fetcher::BlockDataFetcher;
pub use types::{Block, BlockId, BlockSource, BlockSummary, RestBlock, RpcBlock};
