//! Codepoint declarations embedded in a shell script.
//!
//! A declaration line looks like
//!
//! ```text
//! MDI_ICONS+=",0xF0006"    # account
//! ```
//!
//! Every other line is structure and contributes nothing.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_DECLARATION_LABEL: &str = "MDI_ICONS";

/// One matched declaration line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DeclarationEntry {
    /// 1-based line number.
    pub line: usize,
    /// Uppercase hex, no `0x` prefix.
    pub codepoint: String,
    pub comment: String,
    pub raw: String,
}

#[derive(Debug, thiserror::Error)]
pub enum DeclarationError {
    #[error("declaration file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read declarations at {path}: {source}")]
    ReadFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid declaration pattern for label {label:?}: {source}")]
    Pattern {
        label: String,
        #[source]
        source: regex::Error,
    },
}

/// Line matcher for one declaration label.
#[derive(Debug, Clone)]
pub struct DeclarationParser {
    pattern: Regex,
}

impl DeclarationParser {
    pub fn new(label: &str) -> Result<Self, DeclarationError> {
        let source = format!(
            r#"{}\+?=.*"?,?(0x[A-Fa-f0-9]+)"?\s*#\s*(.+)"#,
            regex::escape(label)
        );
        let pattern = Regex::new(&source).map_err(|source| DeclarationError::Pattern {
            label: label.to_string(),
            source,
        })?;
        Ok(Self { pattern })
    }

    /// Match a single line. `line_no` is carried into the entry as-is.
    pub fn parse_line(&self, line_no: usize, line: &str) -> Option<DeclarationEntry> {
        let caps = self.pattern.captures(line)?;
        let codepoint = caps.get(1)?.as_str().to_uppercase();
        let codepoint = codepoint
            .strip_prefix("0X")
            .map(str::to_string)
            .unwrap_or(codepoint);
        let comment = caps.get(2)?.as_str().trim().to_string();
        Some(DeclarationEntry {
            line: line_no,
            codepoint,
            comment,
            raw: line.trim().to_string(),
        })
    }

    /// All declarations in `text`, in line order.
    pub fn parse_str(&self, text: &str) -> Vec<DeclarationEntry> {
        text.lines()
            .enumerate()
            .filter_map(|(idx, line)| self.parse_line(idx + 1, line))
            .collect()
    }

    pub fn parse_path(
        &self,
        path: impl AsRef<Path>,
    ) -> Result<Vec<DeclarationEntry>, DeclarationError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(DeclarationError::NotFound(path.to_path_buf()));
        }
        let text = fs::read_to_string(path).map_err(|source| DeclarationError::ReadFile {
            path: path.display().to_string(),
            source,
        })?;
        Ok(self.parse_str(&text))
    }
}

impl Default for DeclarationParser {
    fn default() -> Self {
        Self::new(DEFAULT_DECLARATION_LABEL).expect("default declaration pattern must compile")
    }
}

/// Parse a declaration file with the given label.
pub fn parse_declarations(
    path: impl AsRef<Path>,
    label: &str,
) -> Result<Vec<DeclarationEntry>, DeclarationError> {
    DeclarationParser::new(label)?.parse_path(path)
}
