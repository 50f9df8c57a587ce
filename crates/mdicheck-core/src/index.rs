//! Codepoint and name lookup tables over loaded icon records.

use crate::metadata::IconRecord;
use std::collections::HashMap;

/// Normalize a codepoint key for lookup: uppercase, without a `0X` prefix.
pub fn codepoint_key(codepoint: &str) -> String {
    let upper = codepoint.trim().to_uppercase();
    match upper.strip_prefix("0X") {
        Some(rest) => rest.to_string(),
        None => upper,
    }
}

/// Codepoint → canonical name, plus the inverse name → codepoint table.
///
/// Built once per run and read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct IconIndex {
    by_codepoint: HashMap<String, String>,
    by_name: HashMap<String, String>,
}

impl IconIndex {
    pub fn from_records(records: &[IconRecord]) -> Self {
        let mut by_codepoint: HashMap<String, String> = HashMap::new();
        // First-seen order of codepoint keys; drives the inverse table.
        let mut order = Vec::new();

        for record in records {
            let codepoint = record.codepoint.as_deref().unwrap_or_default().to_uppercase();
            let name = record.name.as_deref().unwrap_or_default();
            if codepoint.is_empty() || name.is_empty() {
                continue;
            }
            if by_codepoint
                .insert(codepoint.clone(), name.to_string())
                .is_none()
            {
                order.push(codepoint);
            }
        }

        let mut by_name = HashMap::with_capacity(by_codepoint.len());
        for codepoint in &order {
            if let Some(name) = by_codepoint.get(codepoint) {
                by_name.insert(name.clone(), codepoint.clone());
            }
        }

        Self {
            by_codepoint,
            by_name,
        }
    }

    /// Registered name for an already-normalized codepoint key.
    pub fn get(&self, codepoint: &str) -> Option<&str> {
        self.by_codepoint.get(codepoint).map(String::as_str)
    }

    /// Registered name for a codepoint in any case, with or without `0x`.
    pub fn name_for(&self, codepoint: &str) -> Option<&str> {
        self.get(&codepoint_key(codepoint))
    }

    pub fn codepoint_for(&self, name: &str) -> Option<&str> {
        self.by_name.get(name).map(String::as_str)
    }
}
