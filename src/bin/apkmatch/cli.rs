//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

/// apkmatch - select the APKs of a multi-variant build for a device
#[derive(Parser)]
#[command(name = "apkmatch")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the APKs that should be installed on a device
    Resolve(ResolveArgs),

    /// Print the variant that covers a device
    Variant(VariantArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args)]
pub struct ResolveArgs {
    /// Build output table of contents (JSON)
    #[arg(long)]
    pub toc: PathBuf,

    /// Device spec JSON; repeat to resolve several devices
    #[arg(long = "device-spec")]
    pub device_specs: Vec<PathBuf>,

    /// Only deliver split APKs of these modules (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub modules: Option<Vec<String>>,
}

#[derive(Args)]
pub struct VariantArgs {
    /// Build output table of contents (JSON)
    #[arg(long)]
    pub toc: PathBuf,

    /// Device spec JSON
    #[arg(long = "device-spec")]
    pub device_spec: Option<PathBuf>,
}

#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
