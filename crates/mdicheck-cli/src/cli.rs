use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "mdicheck",
    about = "mdicheck: verify icon codepoint declarations against upstream icon metadata",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Input locations shared by every command.
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// Repository root used to resolve relative paths
    #[arg(long, default_value = ".")]
    pub repo_root: String,

    /// Config file (defaults to mdicheck.toml in the repo root, if present)
    #[arg(long)]
    pub config: Option<String>,

    /// Gzip-compressed icon metadata cache
    #[arg(long)]
    pub metadata: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check every declared codepoint and its comment against the metadata
    Verify {
        #[command(flatten)]
        source: SourceArgs,

        /// Shell script containing the codepoint declarations
        #[arg(long)]
        declarations: Option<String>,

        /// Variable name that prefixes declaration lines
        #[arg(long)]
        label: Option<String>,
    },

    /// Resolve a codepoint to its registered name, or a name to its codepoint
    Lookup {
        /// Codepoint (e.g. 0xF0006) or icon name (e.g. account)
        query: String,

        #[command(flatten)]
        source: SourceArgs,
    },
}
