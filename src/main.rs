use std::process;

use crtsh_core::cli;
use crtsh_core::logger;
use crtsh_core::Config;
use tracing::error;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = cli::parse_cli();
    logger::init(cli.verbose, cli.silent)?;

    let config = Config::from(cli);
    if let Err(e) = crtsh_core::run(config).await {
        error!("{}", e);
        process::exit(1);
    }

    Ok(())
}
