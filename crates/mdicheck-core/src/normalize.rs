//! Presumed icon names from free-text declaration comments.

/// Best-effort icon name from a comment such as
/// `arrow-up-down (bidirectional vertical)` or `close - dismiss`.
///
/// Keeps the text before the first `(`, then before the first ` - `,
/// lowercased and trimmed.
pub fn presumed_name(comment: &str) -> String {
    let name = comment.split('(').next().unwrap_or_default().trim();
    let name = name.split(" - ").next().unwrap_or_default().trim();
    name.to_lowercase().trim().to_string()
}

/// Fold `_` and spaces to `-` so a claim compares against canonical names.
pub fn canonicalize_claim(name: &str) -> String {
    name.replace(['_', ' '], "-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_parenthetical_descriptions() {
        assert_eq!(
            presumed_name("arrow-up-down (bidirectional vertical)"),
            "arrow-up-down"
        );
        assert_eq!(presumed_name("close (xmark)"), "close");
        assert_eq!(
            presumed_name("check-circle-outline (check-circle)"),
            "check-circle-outline"
        );
    }

    #[test]
    fn drops_dash_separated_suffix() {
        assert_eq!(presumed_name("fan - part cooling"), "fan");
        assert_eq!(presumed_name("wifi-strength-1 - weak"), "wifi-strength-1");
        assert_eq!(presumed_name("Thermometer - hotend (nozzle)"), "thermometer");
    }

    #[test]
    fn lowercases_and_trims() {
        assert_eq!(presumed_name("  Home  "), "home");
        assert_eq!(presumed_name("Printer 3D Nozzle"), "printer 3d nozzle");
    }

    #[test]
    fn comment_that_starts_with_parenthesis_yields_empty_name() {
        assert_eq!(presumed_name("(unused)"), "");
    }

    #[test]
    fn normalizing_is_idempotent() {
        for comment in [
            "arrow-up-down (bidirectional vertical)",
            "close (xmark)",
            "Fan - part cooling",
            "  printer_3d  ",
            "home",
        ] {
            let once = presumed_name(comment);
            assert_eq!(presumed_name(&once), once, "comment: {comment:?}");
        }
    }

    #[test]
    fn claim_canonicalization_folds_underscores_and_spaces() {
        assert_eq!(canonicalize_claim("printer_3d nozzle"), "printer-3d-nozzle");
        assert_eq!(canonicalize_claim("already-canonical"), "already-canonical");
    }
}
