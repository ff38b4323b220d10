use crate::config::FetcherConfig;
use crate::error::{Error, Result};
use crate::eth_client::EthClient;
use crate::explorer_client::ExplorerClient;
use crate::types::{Block, BlockId, BlockSource, BlockSummary, RestBlock, RpcBlock};

/// Fetches single blocks from a json-rpc node or a block explorer api.
///
/// Either source is optional. Calls against a source that was not configured
/// fail with a configuration error.
pub struct BlockDataFetcher {
    eth_client: Option<EthClient>,
    explorer_client: Option<ExplorerClient>,
}

impl BlockDataFetcher {
    pub fn new(cfg: FetcherConfig) -> Result<Self> {
        let eth_client = match &cfg.eth_rpc_url {
            Some(url) => Some(EthClient::new(url.clone(), &cfg)?),
            None => None,
        };

        let explorer_client = match cfg.api_key() {
            Some(api_key) => Some(ExplorerClient::new(
                cfg.explorer_url.clone(),
                api_key.to_owned(),
                &cfg,
            )?),
            None => None,
        };

        Ok(Self {
            eth_client,
            explorer_client,
        })
    }

    pub fn has_rpc(&self) -> bool {
        self.eth_client.is_some()
    }

    pub fn has_explorer(&self) -> bool {
        self.explorer_client.is_some()
    }

    pub async fn fetch_via_rpc(&self, block: BlockId) -> Result<RpcBlock> {
        let client = self.eth_client.as_ref().ok_or(Error::MissingRpcUrl)?;

        if !client.is_connected().await {
            return Err(Error::NodeUnreachable(client.rpc_url().clone()));
        }

        client.get_block(block).await
    }

    pub async fn fetch_via_rest(&self, block_number: u64) -> Result<RestBlock> {
        let client = self.explorer_client.as_ref().ok_or(Error::MissingApiKey)?;

        client.get_block(block_number).await
    }

    pub async fn fetch(&self, block: BlockId, source: BlockSource) -> Result<Block> {
        match source {
            BlockSource::Rpc => self.fetch_via_rpc(block).await.map(Block::Rpc),
            BlockSource::Rest => {
                if !self.has_explorer() {
                    return Err(Error::MissingApiKey);
                }
                let block_number = match block {
                    BlockId::Number(number) => number,
                    BlockId::Latest => return Err(Error::LatestUnsupportedByExplorer),
                };
                self.fetch_via_rest(block_number).await.map(Block::Rest)
            }
        }
    }

    /// Prints number, timestamp and transaction count of `block` to stdout.
    pub fn print_summary(&self, block: &Block) -> BlockSummary {
        let summary = block.summary();
        println!("{}", summary);
        summary
    }

    pub async fn fetch_summary(&self, block: BlockId, source: BlockSource) -> Result<BlockSummary> {
        let block = self.fetch(block, source).await?;

        Ok(self.print_summary(&block))
    }

    /// Same as `fetch_summary` but logs failures instead of returning them.
    pub async fn fetch_and_print(&self, block: BlockId, source: BlockSource) -> Option<BlockSummary> {
        match self.fetch_summary(block, source).await {
            Ok(summary) => Some(summary),
            Err(e) => {
                log::error!("failed to fetch block {} via {}:\n{}", block, source, e);
                None
            }
        }
    }
}
