//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

/// Slipway - a declarative, manifest-driven project generator
#[derive(Parser)]
#[command(name = "slipway")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print a single manifest as JSON
    Dump(DumpArgs),

    /// Load a project or workspace and print its dependency closure
    Graph(GraphArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args)]
pub struct DumpArgs {
    /// Directory containing the manifest (defaults to current directory)
    pub path: Option<PathBuf>,

    /// Manifest kind to dump
    #[arg(long, value_enum, default_value_t = ManifestKindArg::Project)]
    pub kind: ManifestKindArg,
}

/// Manifest kinds addressable from the command line.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ManifestKindArg {
    Project,
    Workspace,
    Config,
    Dependencies,
    Plugin,
}

#[derive(Args)]
pub struct GraphArgs {
    /// Directory to load from (defaults to current directory)
    pub path: Option<PathBuf>,

    /// Print the closure as JSON instead of a tree
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
