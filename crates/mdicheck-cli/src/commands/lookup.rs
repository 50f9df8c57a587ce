use crate::cli::SourceArgs;
use crate::support::{self, EXIT_FAILURE};
use mdicheck_core::{CheckConfig, IconIndex, codepoint_key};
use std::path::PathBuf;

enum Hit<'a> {
    Codepoint { codepoint: String, name: &'a str },
    Name { name: String, codepoint: &'a str },
}

fn resolve<'a>(index: &'a IconIndex, query: &str) -> Option<Hit<'a>> {
    if let Some(name) = index.name_for(query) {
        return Some(Hit::Codepoint {
            codepoint: codepoint_key(query),
            name,
        });
    }
    let name = query.trim().to_lowercase().replace('_', "-");
    index
        .codepoint_for(&name)
        .map(|codepoint| Hit::Name { name, codepoint })
}

pub fn run(query: String, source: SourceArgs) {
    let repo_root = PathBuf::from(&source.repo_root);
    let config = support::load_config_or_exit(&source, CheckConfig::default());
    let metadata_path = support::resolve_path(&repo_root, config.metadata_path());
    let index = support::load_index_or_exit(&metadata_path, config.remediation());

    match resolve(&index, &query) {
        Some(Hit::Codepoint { codepoint, name }) => println!("0x{codepoint}  {name}"),
        Some(Hit::Name { name, codepoint }) => println!("{name}  0x{codepoint}"),
        None => {
            eprintln!("error: no icon matches {query}");
            std::process::exit(EXIT_FAILURE);
        }
    }
}
