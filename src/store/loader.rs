use std::{fs, path::Path};

use serde_json::Value;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use super::record::{Document, RawRecord};
use crate::{
    constants::STORE_EXTENSIONS,
    error::{Error, Result},
};

/// Reads a store file, or every store file below a directory.
pub fn load_store(path: &Path) -> Result<Vec<Document>> {
    if !path.is_dir() {
        return parse_store(&fs::read_to_string(path)?);
    }

    let mut documents = Vec::new();

    for entry in WalkDir::new(path).sort_by_file_name() {
        let entry = entry?;

        if !entry.file_type().is_file() || !is_store_file(entry.path()) {
            continue;
        }

        let loaded = parse_store(&fs::read_to_string(entry.path())?)?;
        debug!(path = %entry.path().display(), records = loaded.len(), "Loaded store file");
        documents.extend(loaded);
    }

    info!(path = %path.display(), records = documents.len(), "Loaded store directory");

    Ok(documents)
}

/// Parses a store: a JSON array, optionally wrapped as `var store = [...];`.
///
/// Entries that cannot become a [`Document`] are skipped with a warning.
pub fn parse_store(text: &str) -> Result<Vec<Document>> {
    let values: Vec<Value> = serde_json::from_str(array_body(text)?)?;
    let mut documents = Vec::with_capacity(values.len());

    for (position, value) in values.into_iter().enumerate() {
        let record: RawRecord = match serde_json::from_value(value) {
            Ok(record) => record,
            Err(e) => {
                warn!(position, "Skipping malformed record: {e}");
                continue;
            }
        };

        let title = record.title.clone().unwrap_or_default();
        match Document::try_from(record) {
            Ok(document) => documents.push(document),
            Err(e) => warn!(position, title = %title, "Skipping record: {e}"),
        }
    }

    Ok(documents)
}

fn array_body(text: &str) -> Result<&str> {
    let text = text.trim_start_matches('\u{feff}').trim();

    if text.starts_with('[') {
        return Ok(text);
    }

    let (declaration, body) = text
        .split_once('=')
        .ok_or_else(|| Error::InvalidStore("expected a JSON array".to_string()))?;

    let mut words = declaration.split_whitespace();
    let is_declaration = matches!(words.next(), Some("var" | "let" | "const"))
        && words.next().is_some()
        && words.next().is_none();

    if !is_declaration {
        return Err(Error::InvalidStore(format!(
            "unexpected preamble `{}`",
            declaration.trim()
        )));
    }

    Ok(body.trim().trim_end_matches(';').trim_end())
}

fn is_store_file(path: &Path) -> bool {
    path.extension()
        .and_then(|extension| extension.to_str())
        .is_some_and(|extension| STORE_EXTENSIONS.contains(&extension))
}
