use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::config::Config;
use crate::error::{CrtshError, Result};

/// Gather the initial queries: the direct query first, then every non-empty
/// line of the input file in file order. Query syntax is left to crt.sh.
pub fn collect(direct_query: Option<&str>, input_file: Option<&Path>) -> Result<Vec<String>> {
    let mut queries = Vec::new();

    if let Some(query) = direct_query.filter(|q| !q.is_empty()) {
        queries.push(query.to_string());
    }

    if let Some(path) = input_file {
        let read_err = |source| CrtshError::InputFile {
            path: path.to_path_buf(),
            source,
        };
        let file = File::open(path).map_err(read_err)?;

        let before = queries.len();
        for line in BufReader::new(file).lines() {
            let line = line.map_err(read_err)?;
            if !line.is_empty() {
                queries.push(line);
            }
        }
        debug!("Read {} queries from {}", queries.len() - before, path.display());
    }

    if queries.is_empty() {
        return Err(CrtshError::NoQueries);
    }

    Ok(queries)
}

pub fn collect_from_config(config: &Config) -> Result<Vec<String>> {
    collect(config.query.as_deref(), config.input_file.as_deref())
}
