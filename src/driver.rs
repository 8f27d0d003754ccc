use std::io::Write;

use tracing::{debug, info};

use crate::collector;
use crate::config::Config;
use crate::error::Result;
use crate::expand::{self, contains_wildcard};
use crate::fetch::Fetch;
use crate::output::OutputSink;
use crate::queue::WorkQueue;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverState {
    Loading,
    Running,
    Done,
    Failed,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub queries: usize,
    pub names_written: usize,
    pub wildcards_skipped: usize,
    pub requeued: usize,
}

/// Loading fills the queue before any output exists; the sink is only handed
/// over for the Running phase.
pub struct Driver<F> {
    state: DriverState,
    queue: WorkQueue,
    fetcher: F,
    recurse: bool,
    wildcard: bool,
}

impl<F: Fetch> Driver<F> {
    pub fn new(config: &Config, fetcher: F) -> Self {
        Self {
            state: DriverState::Loading,
            queue: WorkQueue::new(),
            fetcher,
            recurse: config.recurse,
            wildcard: config.wildcard,
        }
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    pub fn queue(&self) -> &WorkQueue {
        &self.queue
    }

    pub fn load(&mut self, config: &Config) -> Result<()> {
        match collector::collect_from_config(config) {
            Ok(queries) => {
                info!("Loaded {} queries", queries.len());
                self.queue.extend(queries);
                Ok(())
            }
            Err(e) => {
                self.state = DriverState::Failed;
                Err(e)
            }
        }
    }

    /// Seed the queue directly, skipping the collector.
    pub fn load_queries<I, S>(&mut self, queries: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.queue.extend(queries);
    }

    pub async fn run<W: Write>(&mut self, sink: &mut OutputSink<W>) -> RunSummary {
        self.state = DriverState::Running;
        let mut summary = RunSummary::default();

        while let Some(query) = self.queue.pop() {
            summary.queries += 1;
            info!("Querying crt.sh for {} ({} pending)", query, self.queue.len());

            let names = self.fetcher.fetch(&query).await;
            summary.requeued += expand::expand(&mut self.queue, &names, self.recurse);

            for name in &names {
                if contains_wildcard(name) && !self.wildcard {
                    summary.wildcards_skipped += 1;
                    continue;
                }
                if sink.write(name, &query) {
                    summary.names_written += 1;
                }
            }
        }

        sink.flush();
        self.state = DriverState::Done;
        debug!("{:?}", summary);
        summary
    }
}
