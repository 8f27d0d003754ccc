use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::{CrtshError, Result};
use crate::expand::WILDCARD;
use crate::extract;

/// crt.sh treats a raw `*` as its own wildcard operator; `%25` forces a
/// literal match so the caller decides wildcard semantics per query.
pub const WILDCARD_ENCODE: &str = "%25";

#[async_trait]
pub trait Fetch: Send + Sync {
    async fn try_fetch(&self, query: &str) -> Result<Vec<String>>;

    /// Never fails: transport and parse errors are logged and the query
    /// contributes nothing.
    async fn fetch(&self, query: &str) -> Vec<String> {
        match self.try_fetch(query).await {
            Ok(names) => {
                debug!("{} names for {}", names.len(), query);
                names
            }
            Err(e) => {
                warn!("Skipping {}: {}", query, e);
                Vec::new()
            }
        }
    }
}

pub fn build_url(endpoint: &str, query: &str, wildcard_mode: bool) -> String {
    let query = if wildcard_mode {
        query.replace(WILDCARD, WILDCARD_ENCODE)
    } else {
        query.to_string()
    };
    format!("{}?q={}&output=json", endpoint, query)
}

pub struct CrtShFetcher {
    client: Client,
    endpoint: String,
    wildcard_mode: bool,
}

impl CrtShFetcher {
    pub fn new(config: &Config) -> Result<Self> {
        let mut builder = Client::builder().user_agent(config.user_agent.as_str());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(CrtshError::Client)?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            wildcard_mode: config.wildcard_mode(),
        })
    }
}

#[async_trait]
impl Fetch for CrtShFetcher {
    async fn try_fetch(&self, query: &str) -> Result<Vec<String>> {
        let url = build_url(&self.endpoint, query, self.wildcard_mode);
        debug!("GET {}", url);

        let transport = |source| CrtshError::Transport {
            url: url.clone(),
            source,
        };
        let res = self
            .client
            .get(&url)
            .send()
            .await
            // Non-2xx bodies are not parsed, even if they happen to hold records.
            .and_then(|r| r.error_for_status())
            .map_err(transport)?;
        let body = res.bytes().await.map_err(transport)?;

        extract::extract(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_every_wildcard() {
        let url = build_url("https://crt.sh/", "*.*.example.com", true);
        assert_eq!(url, "https://crt.sh/?q=%25.%25.example.com&output=json");
        assert!(!url.contains('*'));
    }

    #[test]
    fn leaves_wildcards_raw_otherwise() {
        let url = build_url("https://crt.sh/", "*.example.com", false);
        assert_eq!(url, "https://crt.sh/?q=*.example.com&output=json");
    }

    #[test]
    fn fetcher_picks_up_config() {
        let config = Config {
            recurse: true,
            endpoint: "http://127.0.0.1:9/".to_string(),
            ..Config::default()
        };
        let fetcher = CrtShFetcher::new(&config).unwrap();
        assert!(fetcher.wildcard_mode);
        assert_eq!(fetcher.endpoint, "http://127.0.0.1:9/");
    }
}
