//! Subdomain discovery through the crt.sh certificate transparency search.
//!
//! Queries are drained from a FIFO work queue one at a time. Every name found
//! in a matching certificate is written out, and with recursion enabled any
//! wildcard name (`*.sub.example.com`) is pushed back as a new query.

pub mod cli;
pub mod collector;
pub mod config;
pub mod driver;
pub mod error;
pub mod expand;
pub mod extract;
pub mod fetch;
pub mod logger;
pub mod output;
pub mod queue;

pub use config::Config;
pub use driver::{Driver, DriverState, RunSummary};
pub use error::{CrtshError, Result};
pub use fetch::{CrtShFetcher, Fetch};
pub use output::OutputSink;
pub use queue::WorkQueue;

use tracing::info;

/// Load queries, open the output and drain the queue against crt.sh.
/// Only startup failures are returned; per-query failures are logged.
pub async fn run(config: Config) -> Result<RunSummary> {
    let fetcher = CrtShFetcher::new(&config)?;
    let mut driver = Driver::new(&config, fetcher);

    // Queries first: a run with nothing to ask must not touch the output file.
    driver.load(&config)?;
    let mut sink = OutputSink::create(config.output.as_deref(), config.json)?;
    let summary = driver.run(&mut sink).await;

    info!(
        "Done. {} queries, {} names written, {} wildcard names skipped, {} requeued",
        summary.queries, summary.names_written, summary.wildcards_skipped, summary.requeued
    );
    Ok(summary)
}
