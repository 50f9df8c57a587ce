use crate::cli::SourceArgs;
use crate::support::{self, EXIT_FAILURE};
use mdicheck_core::{
    CheckConfig, DeclarationParser, IconIndex, VerificationReport, render_report, verify_entries,
};
use std::path::PathBuf;

pub struct Args {
    pub source: SourceArgs,
    pub declarations: Option<String>,
    pub label: Option<String>,
}

pub fn run(args: Args) {
    let repo_root = PathBuf::from(&args.source.repo_root);
    let config = support::load_config_or_exit(
        &args.source,
        CheckConfig {
            declarations: args.declarations,
            label: args.label,
            ..CheckConfig::default()
        },
    );
    let declarations_path = support::resolve_path(&repo_root, config.declarations_path());
    let metadata_path = support::resolve_path(&repo_root, config.metadata_path());

    if !declarations_path.exists() {
        eprintln!("error: cannot find {}", declarations_path.display());
        std::process::exit(EXIT_FAILURE);
    }
    let parser = DeclarationParser::new(config.label()).unwrap_or_else(|e| {
        eprintln!("error: {e}");
        std::process::exit(EXIT_FAILURE);
    });

    println!("Loading icon metadata from {}...", metadata_path.display());
    let records = support::load_records_or_exit(&metadata_path, config.remediation());
    println!("  Found {} icons in metadata", records.len());
    let index = IconIndex::from_records(&records);

    println!("\nParsing {}...", declarations_path.display());
    let entries = parser.parse_path(&declarations_path).unwrap_or_else(|e| {
        eprintln!("error: {e}");
        std::process::exit(EXIT_FAILURE);
    });
    println!("  Found {} icon entries\n", entries.len());

    let report = VerificationReport::new(verify_entries(&index, &entries));
    print!("{}", render_report(&report, &index));

    let code = report.exit_code();
    if code != 0 {
        std::process::exit(code);
    }
}
