use std::path::PathBuf;
use std::time::Duration;

use crate::cli::Cli;

pub const DEFAULT_ENDPOINT: &str = "https://crt.sh/";
pub const DEFAULT_USER_AGENT: &str = concat!("crtsh/", env!("CARGO_PKG_VERSION"));

/// Resolved run configuration. Built once at startup and handed to every
/// component by reference.
#[derive(Debug, Clone)]
pub struct Config {
    pub query: Option<String>,
    pub input_file: Option<PathBuf>,
    pub recurse: bool,
    pub wildcard: bool,
    pub json: bool,
    pub output: Option<PathBuf>,
    pub endpoint: String,
    pub timeout: Option<Duration>,
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            query: None,
            input_file: None,
            recurse: false,
            wildcard: false,
            json: false,
            output: None,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl Config {
    /// Literal `*` must be encoded whenever wildcard names are either shown
    /// or followed.
    pub fn wildcard_mode(&self) -> bool {
        self.wildcard || self.recurse
    }
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Self {
            query: cli.query.filter(|q| !q.is_empty()),
            input_file: cli.file.filter(|p| !p.as_os_str().is_empty()),
            recurse: cli.recurse,
            wildcard: cli.wildcard,
            json: cli.json,
            output: cli.output.filter(|p| !p.as_os_str().is_empty()),
            endpoint: cli.endpoint,
            timeout: cli.timeout.map(Duration::from_secs),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn wildcard_mode_follows_either_flag() {
        let mut config = Config::default();
        assert!(!config.wildcard_mode());
        config.recurse = true;
        assert!(config.wildcard_mode());
        config.recurse = false;
        config.wildcard = true;
        assert!(config.wildcard_mode());
    }

    #[test]
    fn empty_strings_mean_absent() {
        let cli = Cli::try_parse_from(["crtsh", "-q", "", "-o", "", "-t", "30"]).unwrap();
        let config = Config::from(cli);
        assert!(config.query.is_none());
        assert!(config.output.is_none());
        assert_eq!(config.timeout, Some(Duration::from_secs(30)));
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn empty_file_falls_back_to_query() {
        let cli = Cli::try_parse_from(["crtsh", "-f", "", "-q", "x"]).unwrap();
        let config = Config::from(cli);
        assert!(config.input_file.is_none());
        assert!(config.output.is_none());
        assert_eq!(crate::collector::collect_from_config(&config).unwrap(), vec!["x"]);
    }
}
