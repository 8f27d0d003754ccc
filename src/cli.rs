use std::path::PathBuf;

use clap::builder::{OsStringValueParser, TypedValueParser};
use clap::{ArgAction, Parser};

#[derive(Parser, Debug, Clone)]
#[command(name = "crtsh", version, about = "Find subdomains through crt.sh certificate transparency search", long_about = None)]
pub struct Cli {
    /// Domain query to get subdomains of
    #[arg(short, long)]
    pub query: Option<String>,

    /// Path to file containing queries, one per line
    #[arg(short, long, value_parser = OsStringValueParser::new().map(PathBuf::from))]
    pub file: Option<PathBuf>,

    /// Recursively search wildcard subdomains
    #[arg(short, long, default_value_t = false)]
    pub recurse: bool,

    /// Include wildcard subdomains in output
    #[arg(short, long, default_value_t = false)]
    pub wildcard: bool,

    /// Write JSON lines instead of plain names
    #[arg(short, long, default_value_t = false)]
    pub json: bool,

    /// Write to output file instead of terminal (empty means terminal)
    #[arg(short, long, value_parser = OsStringValueParser::new().map(PathBuf::from))]
    pub output: Option<PathBuf>,

    /// Request timeout in seconds (no timeout unless set)
    #[arg(short, long)]
    pub timeout: Option<u64>,

    /// Alternate crt.sh compatible endpoint
    #[arg(long, hide = true, default_value = crate::config::DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log warnings and errors
    #[arg(short, long, default_value_t = false)]
    pub silent: bool,
}

pub fn parse_cli() -> Cli {
    Cli::parse()
}
