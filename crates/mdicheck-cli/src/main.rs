//! mdicheck CLI: the `mdicheck` command.

mod cli;
mod commands;
mod support;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Verify {
            source,
            declarations,
            label,
        } => commands::verify::run(commands::verify::Args {
            source,
            declarations,
            label,
        }),

        Commands::Lookup { query, source } => commands::lookup::run(query, source),
    }
}
