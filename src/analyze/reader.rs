use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::lang::extractor_for;
use crate::types::{Dialect, SourceSymbols};

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("could not open {}: {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Read a file as text, replacing undecodable bytes
pub fn read_source(path: &Path) -> io::Result<String> {
    let bytes = fs::read(path)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Scan one file with the extractor for `dialect`
pub fn extract_file(path: &Path, dialect: Dialect) -> Result<SourceSymbols, ExtractError> {
    let content = read_source(path).map_err(|source| ExtractError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;

    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default();

    Ok(extractor_for(dialect).extract(file_name, &content))
}
