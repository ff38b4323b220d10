use eth_block_fetcher::Config;
use eth_block_fetcher_core::BlockDataFetcher;
use std::process::ExitCode;

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();

    let config = Config::parse();

    let fetcher = match BlockDataFetcher::new(config.fetcher) {
        Ok(fetcher) => fetcher,
        Err(e) => {
            log::error!("failed to create block data fetcher:\n{}", e);
            return ExitCode::FAILURE;
        }
    };

    match fetcher.fetch_and_print(config.block, config.source).await {
        Some(_) => ExitCode::SUCCESS,
        None => ExitCode::FAILURE,
    }
}
