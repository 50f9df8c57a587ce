//! Icon metadata loading.
//!
//! The metadata cache is a gzip-compressed JSON array of icon objects as
//! published upstream. Only `codepoint` and `name` are read; every other
//! field is ignored.

use flate2::read::GzDecoder;
use serde::{Deserialize, Deserializer};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

/// One upstream icon entry.
///
/// A missing key is absent; a key that is present must hold a string.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct IconRecord {
    #[serde(default, deserialize_with = "present_string")]
    pub codepoint: Option<String>,
    #[serde(default, deserialize_with = "present_string")]
    pub name: Option<String>,
}

// Only reached when the key exists, so `null` is rejected like any non-string.
fn present_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    String::deserialize(deserializer).map(Some)
}

impl IconRecord {
    pub fn new(codepoint: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            codepoint: Some(codepoint.into()),
            name: Some(name.into()),
        }
    }
}

/// Errors from loading the metadata cache.
#[derive(Debug, thiserror::Error)]
pub enum MetadataError {
    #[error("icon metadata cache not found at {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read icon metadata at {path}: {source}")]
    ReadFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decompress icon metadata at {path}: {source}")]
    Decompress {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid icon metadata json at {path}: {source}")]
    ParseJson {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Decode a gzip-compressed JSON array of icon records.
///
/// `origin` only labels errors.
pub fn read_metadata(reader: impl Read, origin: &str) -> Result<Vec<IconRecord>, MetadataError> {
    let mut bytes = Vec::new();
    GzDecoder::new(reader)
        .read_to_end(&mut bytes)
        .map_err(|source| MetadataError::Decompress {
            path: origin.to_string(),
            source,
        })?;
    serde_json::from_slice(&bytes).map_err(|source| MetadataError::ParseJson {
        path: origin.to_string(),
        source,
    })
}

/// Load the metadata cache from disk.
pub fn load_metadata(path: impl AsRef<Path>) -> Result<Vec<IconRecord>, MetadataError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(MetadataError::NotFound(path.to_path_buf()));
    }
    let origin = path.display().to_string();
    let file = File::open(path).map_err(|source| MetadataError::ReadFile {
        path: origin.clone(),
        source,
    })?;
    read_metadata(BufReader::new(file), &origin)
}
