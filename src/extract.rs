use serde::Deserialize;

use crate::error::Result;

/// One certificate record from crt.sh. Only `name_value` matters here; it
/// holds one or more subject names joined by `\n`.
#[derive(Debug, Deserialize)]
pub struct CrtShEntry {
    pub name_value: Option<String>,
}

pub fn extract(payload: &[u8]) -> Result<Vec<String>> {
    let entries: Vec<CrtShEntry> = serde_json::from_slice(payload)?;

    let mut names = Vec::new();
    for e in entries {
        if let Some(name_value) = e.name_value {
            names.extend(
                name_value
                    .split('\n')
                    .filter(|n| !n.is_empty())
                    .map(str::to_string),
            );
        }
    }
    Ok(names)
}
