use std::fs::File;
use std::io::{self, LineWriter, Write};
use std::path::Path;

use serde::Serialize;
use tracing::{info, warn};

use crate::error::{CrtshError, Result};

#[derive(Serialize, Debug)]
struct OutputRecord<'a> {
    name: &'a str,
    query: &'a str,
}

/// Where accepted names end up: the terminal, or a file created (and
/// truncated) once per run. One name per line, or one JSON object per line
/// with `--json`.
pub struct OutputSink<W: Write = Box<dyn Write + Send>> {
    writer: W,
    to_file: bool,
    json: bool,
}

impl OutputSink {
    pub fn create(path: Option<&Path>, json: bool) -> Result<Self> {
        match path {
            Some(path) => {
                let file = File::create(path).map_err(|source| CrtshError::OutputFile {
                    path: path.to_path_buf(),
                    source,
                })?;
                info!("Writing results to {}", path.display());
                Ok(Self {
                    writer: Box::new(LineWriter::new(file)),
                    to_file: true,
                    json,
                })
            }
            None => Ok(Self {
                writer: Box::new(io::stdout()),
                to_file: false,
                json,
            }),
        }
    }
}

impl<W: Write> OutputSink<W> {
    pub fn with_writer(writer: W, json: bool) -> Self {
        Self {
            writer,
            to_file: false,
            json,
        }
    }

    pub fn should_write_to_file(&self) -> bool {
        self.to_file
    }

    /// Best effort: a failed write is logged and reported as `false`.
    pub fn write(&mut self, name: &str, query: &str) -> bool {
        let res = if self.json {
            serde_json::to_string(&OutputRecord { name, query })
                .map_err(io::Error::from)
                .and_then(|line| writeln!(self.writer, "{}", line))
        } else {
            writeln!(self.writer, "{}", name)
        };

        match res {
            Ok(()) => true,
            Err(e) => {
                warn!("Failed to write {}: {}", name, e);
                false
            }
        }
    }

    pub fn flush(&mut self) {
        if let Err(e) = self.writer.flush() {
            warn!("Failed to flush output: {}", e);
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}
