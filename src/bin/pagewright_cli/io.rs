#![deny(clippy::all, clippy::pedantic)]

use std::fs;
use std::path::Path;

use bytes::Bytes;

use crate::client::CliError;

pub fn read_text(path: &Path) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|source| CliError::InputFile {
        path: path.display().to_string(),
        source,
    })
}

pub fn read_bytes(path: &Path) -> Result<Bytes, CliError> {
    fs::read(path).map(Bytes::from).map_err(|source| CliError::InputFile {
        path: path.display().to_string(),
        source,
    })
}

/// A password from a file, without the trailing newline editors add.
pub fn read_password(path: &Path) -> Result<String, CliError> {
    Ok(read_text(path)?.trim_end_matches(['\r', '\n']).to_string())
}

pub fn write_text(path: &Path, contents: &str) -> Result<(), CliError> {
    fs::write(path, contents).map_err(|source| CliError::OutputFile {
        path: path.display().to_string(),
        source,
    })
}

/// Final path segment, used as the upload file name.
pub fn file_name(path: &Path) -> Result<String, CliError> {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(str::to_string)
        .ok_or_else(|| CliError::InvalidInput(format!("{} has no file name", path.display())))
}
