use crate::cli::SourceArgs;
use mdicheck_core::{CheckConfig, DEFAULT_CONFIG_FILE, IconIndex, IconRecord, load_metadata};
use std::path::{Path, PathBuf};

/// Verification found problems, or a declaration/config input is missing.
pub const EXIT_FAILURE: i32 = 1;
/// The metadata cache is missing or unreadable.
pub const EXIT_PREREQUISITE: i32 = 2;

pub fn resolve_path(repo_root: &Path, path: &str) -> PathBuf {
    let candidate = PathBuf::from(path);
    if candidate.is_absolute() {
        candidate
    } else {
        repo_root.join(candidate)
    }
}

/// Config file layered under explicit flags.
///
/// An explicit `--config` must exist; the default `mdicheck.toml` is optional.
pub fn load_config_or_exit(source: &SourceArgs, overrides: CheckConfig) -> CheckConfig {
    let repo_root = PathBuf::from(&source.repo_root);
    let loaded = match &source.config {
        Some(path) => CheckConfig::load(resolve_path(&repo_root, path)),
        None => CheckConfig::load_if_present(repo_root.join(DEFAULT_CONFIG_FILE)),
    };
    let config = loaded.unwrap_or_else(|e| {
        eprintln!("error: {e}");
        std::process::exit(EXIT_FAILURE);
    });
    config.overlay(CheckConfig {
        metadata: source.metadata.clone(),
        ..overrides
    })
}

pub fn load_records_or_exit(path: &Path, remediation: &str) -> Vec<IconRecord> {
    load_metadata(path).unwrap_or_else(|e| {
        eprintln!("error: {e}");
        eprintln!("   Run: {remediation}");
        std::process::exit(EXIT_PREREQUISITE);
    })
}

pub fn load_index_or_exit(path: &Path, remediation: &str) -> IconIndex {
    IconIndex::from_records(&load_records_or_exit(path, remediation))
}
