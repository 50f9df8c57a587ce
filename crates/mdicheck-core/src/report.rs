//! Verification summary and console rendering.

use crate::index::IconIndex;
use crate::verify::{Verdict, VerificationResult};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

const RULE_WIDTH: usize = 70;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VerificationSummary {
    pub entry_count: usize,
    pub ok_count: usize,
    pub mismatch_count: usize,
    pub invalid_count: usize,
}

impl VerificationSummary {
    pub fn error_count(&self) -> usize {
        self.mismatch_count + self.invalid_count
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VerificationReport {
    pub results: Vec<VerificationResult>,
    pub summary: VerificationSummary,
}

impl VerificationReport {
    pub fn new(results: Vec<VerificationResult>) -> Self {
        let mut summary = VerificationSummary {
            entry_count: results.len(),
            ..VerificationSummary::default()
        };
        for result in &results {
            match result.verdict {
                Verdict::Ok => summary.ok_count += 1,
                Verdict::Mismatch { .. } => summary.mismatch_count += 1,
                Verdict::Invalid { .. } => summary.invalid_count += 1,
            }
        }
        Self { results, summary }
    }

    /// Non-OK results in encounter order.
    pub fn errors(&self) -> impl Iterator<Item = &VerificationResult> {
        self.results.iter().filter(|result| result.verdict.is_error())
    }

    pub fn accepted(&self) -> bool {
        self.summary.error_count() == 0
    }

    /// 0 when every declaration verified, 1 otherwise.
    pub fn exit_code(&self) -> i32 {
        if self.accepted() { 0 } else { 1 }
    }
}

/// Render the results block printed after parsing.
///
/// `index` supplies the "is at" hint when a mismatched claim is itself a
/// registered name.
pub fn render_report(report: &VerificationReport, index: &IconIndex) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let mut out = String::new();

    let _ = writeln!(out, "{rule}");
    let _ = writeln!(out, "VERIFICATION RESULTS");
    let _ = writeln!(out, "{rule}");
    let _ = writeln!(
        out,
        "\n✓ OK: {} icons verified correctly",
        report.summary.ok_count
    );

    if report.accepted() {
        let _ = writeln!(out, "\n✓ All icon names match their codepoints!");
    } else {
        let _ = writeln!(
            out,
            "\n✗ ERRORS: {} icons have issues:\n",
            report.summary.error_count()
        );
        for result in report.errors() {
            match &result.verdict {
                Verdict::Invalid { .. } => {
                    let _ = writeln!(out, "  Line {}: INVALID CODEPOINT", result.line);
                    let _ = writeln!(out, "    Codepoint: 0x{}", result.codepoint);
                    let _ = writeln!(out, "    Comment: {}", result.comment);
                }
                Verdict::Mismatch { claimed, actual } => {
                    let _ = writeln!(out, "  Line {}: NAME MISMATCH", result.line);
                    let _ = writeln!(out, "    Codepoint: 0x{}", result.codepoint);
                    let _ = writeln!(out, "    Comment says: {claimed}");
                    let _ = writeln!(out, "    Actually is:  {actual}");
                    if let Some(correct) = index.codepoint_for(&claimed.replace('_', "-")) {
                        let _ = writeln!(out, "    → '{claimed}' is at 0x{correct}");
                    }
                }
                Verdict::Ok => continue,
            }
            out.push('\n');
        }
    }

    let _ = writeln!(out, "{rule}");
    out
}
