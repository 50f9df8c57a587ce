//! # mdicheck-core
//!
//! Cross-checks icon codepoint declarations embedded in a shell script
//! against upstream icon metadata.
//!
//! Each declaration carries a human-written name in a trailing comment.
//! A declaration is INVALID when its codepoint is unknown upstream, and a
//! MISMATCH when the comment names a different icon than the one registered
//! for that codepoint.
//!
//! ## Pipeline
//!
//! ```text
//! metadata.json.gz ──load──▶ Vec<IconRecord> ──index──▶ IconIndex
//!                                                          │
//! declarations.sh ──parse──▶ Vec<DeclarationEntry> ──verify┘
//!                                                          │
//!                                   VerificationReport ◀───┘ ──render──▶ text
//! ```
//!
//! Every stage is a pure transform over the previous stage's output; the
//! only I/O is reading the two input files.

pub mod config;
pub mod declaration;
pub mod index;
pub mod metadata;
pub mod normalize;
pub mod report;
pub mod verify;

pub use config::{
    CheckConfig, ConfigError, DEFAULT_CONFIG_FILE, DEFAULT_DECLARATIONS_PATH,
    DEFAULT_METADATA_PATH, DEFAULT_REMEDIATION,
};
pub use declaration::{
    DEFAULT_DECLARATION_LABEL, DeclarationEntry, DeclarationError, DeclarationParser,
    parse_declarations,
};
pub use index::{IconIndex, codepoint_key};
pub use metadata::{IconRecord, MetadataError, load_metadata, read_metadata};
pub use normalize::{canonicalize_claim, presumed_name};
pub use report::{VerificationReport, VerificationSummary, render_report};
pub use verify::{Verdict, VerificationResult, claim_matches, verify_entries, verify_entry};
