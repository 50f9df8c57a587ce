//! Declaration verification against the icon index.

use crate::declaration::DeclarationEntry;
use crate::index::IconIndex;
use crate::normalize::{canonicalize_claim, presumed_name};
use serde::{Deserialize, Serialize};

/// Outcome for one declaration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Verdict {
    Ok,
    Mismatch { claimed: String, actual: String },
    Invalid { message: String },
}

impl Verdict {
    pub fn is_error(&self) -> bool {
        !matches!(self, Verdict::Ok)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VerificationResult {
    pub line: usize,
    pub codepoint: String,
    pub comment: String,
    pub verdict: Verdict,
}

/// Whether `claimed` (already hyphen-canonical) is accepted for `actual`.
///
/// Exact match first, then prefix, then substring. A generic name such as
/// `wifi` is accepted for `wifi-strength-1`.
pub fn claim_matches(claimed: &str, actual: &str) -> bool {
    claimed == actual || actual.starts_with(claimed) || actual.contains(claimed)
}

pub fn verify_entry(index: &IconIndex, entry: &DeclarationEntry) -> VerificationResult {
    let verdict = match index.get(&entry.codepoint) {
        None => Verdict::Invalid {
            message: format!(
                "Codepoint {} does not exist in the icon metadata",
                entry.codepoint
            ),
        },
        Some(actual) => {
            let claimed = presumed_name(&entry.comment);
            if claim_matches(&canonicalize_claim(&claimed), actual) {
                Verdict::Ok
            } else {
                Verdict::Mismatch {
                    claimed,
                    actual: actual.to_string(),
                }
            }
        }
    };

    VerificationResult {
        line: entry.line,
        codepoint: entry.codepoint.clone(),
        comment: entry.comment.clone(),
        verdict,
    }
}

/// One result per entry, in entry order.
pub fn verify_entries(index: &IconIndex, entries: &[DeclarationEntry]) -> Vec<VerificationResult> {
    entries
        .iter()
        .map(|entry| verify_entry(index, entry))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::IconRecord;

    fn index() -> IconIndex {
        IconIndex::from_records(&[
            IconRecord::new("F0006", "account"),
            IconRecord::new("F02DC", "home"),
            IconRecord::new("F091F", "wifi-strength-1"),
            IconRecord::new("F0E5B", "printer-3d-nozzle"),
            IconRecord::new("F0156", "close"),
        ])
    }

    fn entry(codepoint: &str, comment: &str) -> DeclarationEntry {
        DeclarationEntry {
            line: 7,
            codepoint: codepoint.to_string(),
            comment: comment.to_string(),
            raw: format!("MDI_ICONS+=\",0x{codepoint}\" # {comment}"),
        }
    }

    #[test]
    fn unknown_codepoint_is_invalid_regardless_of_comment() {
        let index = index();
        for comment in ["account", "", "home (house)", "anything at all"] {
            let result = verify_entry(&index, &entry("FFFFF", comment));
            assert_eq!(
                result.verdict,
                Verdict::Invalid {
                    message: "Codepoint FFFFF does not exist in the icon metadata".to_string()
                }
            );
            assert_eq!(result.comment, comment);
        }
    }

    #[test]
    fn exact_name_after_canonicalization_is_ok() {
        let index = index();
        assert_eq!(verify_entry(&index, &entry("F0006", "account")).verdict, Verdict::Ok);
        assert_eq!(
            verify_entry(&index, &entry("F0E5B", "Printer_3D Nozzle")).verdict,
            Verdict::Ok
        );
        assert_eq!(
            verify_entry(&index, &entry("F0156", "close (xmark)")).verdict,
            Verdict::Ok
        );
    }

    #[test]
    fn prefix_and_substring_claims_are_tolerated() {
        let index = index();
        assert_eq!(verify_entry(&index, &entry("F091F", "wifi")).verdict, Verdict::Ok);
        assert_eq!(
            verify_entry(&index, &entry("F0E5B", "3d nozzle")).verdict,
            Verdict::Ok
        );
        assert_eq!(verify_entry(&index, &entry("F091F", "strength")).verdict, Verdict::Ok);
    }

    #[test]
    fn unrelated_claim_is_mismatch_with_indexed_actual() {
        let index = index();
        let result = verify_entry(&index, &entry("F0006", "Home - main screen"));
        assert_eq!(
            result.verdict,
            Verdict::Mismatch {
                claimed: "home".to_string(),
                actual: index.get("F0006").unwrap_or_default().to_string(),
            }
        );
        assert!(result.verdict.is_error());
    }

    #[test]
    fn mismatch_keeps_claim_before_hyphen_folding() {
        let result = verify_entry(&index(), &entry("F02DC", "printer_3d"));
        assert_eq!(
            result.verdict,
            Verdict::Mismatch {
                claimed: "printer_3d".to_string(),
                actual: "home".to_string(),
            }
        );
    }

    #[test]
    fn longer_claim_than_actual_is_mismatch() {
        let result = verify_entry(&index(), &entry("F02DC", "home-outline"));
        assert!(matches!(result.verdict, Verdict::Mismatch { .. }));
    }

    #[test]
    fn every_entry_gets_exactly_one_result_in_order() {
        let entries = vec![
            entry("F0006", "account"),
            entry("FFFFF", "ghost"),
            entry("F02DC", "account"),
        ];
        let results = verify_entries(&index(), &entries);
        assert_eq!(results.len(), entries.len());
        for (result, entry) in results.iter().zip(&entries) {
            assert_eq!(result.codepoint, entry.codepoint);
            assert_eq!(result.line, entry.line);
        }
        assert_eq!(results[0].verdict, Verdict::Ok);
        assert!(matches!(results[1].verdict, Verdict::Invalid { .. }));
        assert!(matches!(results[2].verdict, Verdict::Mismatch { .. }));
    }
}
