use clap::Parser;
use eth_block_fetcher_core::{BlockId, BlockSource, FetcherConfig};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct Config {
    #[command(flatten)]
    pub fetcher: FetcherConfig,
    /// Block to fetch, either "latest" or a block number
    #[clap(long, env = "BLOCK", default_value_t = BlockId::Latest)]
    pub block: BlockId,
    /// Where to fetch the block from, "rpc" or "rest"
    #[clap(long, env = "BLOCK_SOURCE", default_value_t = BlockSource::Rpc)]
    pub source: BlockSource,
    /// Dotenv file to read before resolving environment backed options
    #[clap(long, default_value = ".env")]
    pub env_file: PathBuf,
}

impl Config {
    /// Parses arguments, loading `env_file` into the environment first.
    pub fn parse() -> Self {
        let config = <Self as Parser>::parse();

        match dotenv::from_path(&config.env_file) {
            Ok(()) => <Self as Parser>::parse(),
            Err(e) => {
                log::debug!(
                    "not loading env file {}: {}",
                    config.env_file.display(),
                    e
                );
                config
            }
        }
    }
}
