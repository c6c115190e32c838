//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{ArgAction, ArgGroup, Parser};

use super::commands::{self, ScanRequest};
use contrib_check::output::OutputMode;

/// contrib-check - DCO compliance scanning
#[derive(Parser, Debug)]
#[command(
    name = "contrib-check",
    version,
    about = "Scan a single repo or organization for various contribution checks (such as DCO)",
    long_about = "Scan a single repo or organization for various contribution checks (such as DCO).\n\n\
                  Every non-merge commit needs a Signed-off-by line, a past signoff record\n\
                  committed to the repository, or a later remediation commit.\n\
                  Violations are written to <owner>-<repo>.csv together with remediation\n\
                  templates for each author."
)]
#[command(group(ArgGroup::new("target").required(true).args(["config", "repo", "org"])))]
pub struct Cli {
    /// Name of YAML config file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// URL or path to the repo to search
    #[arg(long, value_name = "URL|PATH")]
    pub repo: Option<String>,

    /// URL to GitHub org to search
    #[arg(long, value_name = "URL")]
    pub org: Option<String>,

    /// Perform a DCO check
    #[arg(long, value_name = "BOOL", default_value_t = true, action = ArgAction::Set)]
    pub dco: bool,

    /// Directory for CSV reports
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long)]
    pub json: bool,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    commands::scan(
        ScanRequest {
            config: cli.config,
            repo: cli.repo,
            org: cli.org,
            dco: cli.dco,
            output_dir: cli.output_dir,
        },
        output_mode,
    )
}
