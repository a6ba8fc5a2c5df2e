use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use file_license_auditor::Nesting;

#[derive(Parser)]
#[command(name = "file-license-auditor")]
#[command(about = "Check that every file in a repository is covered by its root license")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Audit the files of a repository
    Check(CheckArgs),
    /// Write starter mapping.json and ignore.json
    Init {
        /// Overwrite existing files
        #[arg(long)]
        force: bool,
    },
    /// Show or validate configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Validate configuration, mapping and ignore files
        #[arg(long)]
        validate: bool,
    },
}

#[derive(Args)]
pub struct CheckArgs {
    /// Local directory or git URL to audit
    pub target: String,

    /// Root license identifier; skips license detection (repeatable)
    #[arg(short, long = "license", value_name = "SPDX_ID")]
    pub licenses: Vec<String>,

    /// Mapping document (default: mapping.json)
    #[arg(short, long)]
    pub mapping: Option<PathBuf>,

    /// Ignore document (default: ignore.json if present)
    #[arg(short, long)]
    pub ignore: Option<PathBuf>,

    /// Output format
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Skip directories whose name starts with "."
    #[arg(long)]
    pub skip_hidden_dirs: bool,

    /// Skip files directly in the repository root
    #[arg(long)]
    pub skip_root_files: bool,

    /// How deep unanchored ignore patterns match
    #[arg(long)]
    pub nesting: Option<NestingArg>,

    /// License detector program
    #[arg(long)]
    pub detector: Option<String>,

    /// Exit with code 1 when the score is below this percentage
    #[arg(long, value_name = "PERCENT")]
    pub fail_under: Option<f64>,
}

#[derive(Clone, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum NestingArg {
    OneLevel,
    AnyDepth,
}

impl From<NestingArg> for Nesting {
    fn from(arg: NestingArg) -> Self {
        match arg {
            NestingArg::OneLevel => Nesting::OneLevel,
            NestingArg::AnyDepth => Nesting::AnyDepth,
        }
    }
}
