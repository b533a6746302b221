use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "baseliner")]
#[command(version)]
#[command(about = "Audit installed-software drift across managed endpoints", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Compare a source endpoint's software against target endpoints
    Baseline(BaselineArgs),

    /// List the managed endpoints in the network
    Devices(DevicesArgs),

    /// Show the filtered software inventory of one endpoint
    Software(SoftwareArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

// ============================================================================
// Shared credential options
// ============================================================================

/// Credentials for the management service, shared by every network-touching
/// command. Values left unset fall back to the in-process override, then the
/// environment (see `config`).
#[derive(Args)]
pub struct ApiArgs {
    /// Dashboard API key
    #[arg(short = 'k', long)]
    pub api_key: Option<String>,

    /// Systems Manager network id
    #[arg(short, long)]
    pub network: Option<String>,
}

// ============================================================================
// Baseline
// ============================================================================

#[derive(Parser)]
pub struct BaselineArgs {
    /// Source endpoint used as the comparison baseline
    pub source: String,

    /// Target endpoints (defaults to every other endpoint)
    pub targets: Vec<String>,

    /// Exclusions file, one application name per line
    #[arg(short, long)]
    pub exclusions: Option<PathBuf>,

    #[command(flatten)]
    pub api: ApiArgs,
}

// ============================================================================
// Devices / Software
// ============================================================================

#[derive(Parser)]
pub struct DevicesArgs {
    #[command(flatten)]
    pub api: ApiArgs,
}

#[derive(Parser)]
pub struct SoftwareArgs {
    /// Endpoint whose inventory to print
    pub endpoint: String,

    /// Exclusions file, one application name per line
    #[arg(short, long)]
    pub exclusions: Option<PathBuf>,

    #[command(flatten)]
    pub api: ApiArgs,
}
