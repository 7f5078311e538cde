//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.

use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::config::CliOverrides;

/// telegraf-deploy - install or update the Telegraf agent on this host
#[derive(Parser, Debug)]
#[command(name = "telegraf-deploy")]
#[command(author, version, about, long_about = None)]
#[command(
    after_help = "Exit codes: 0 ok, 1 I/O or config, 2 usage, 3 validation, \
4 service, 5 role detection, 6 integrity, 7 aborted."
)]
pub struct Cli {
    /// Directory holding the agent binary, its .sha256 digest and the configs
    /// [default: directory of this executable]
    #[arg(long, value_name = "PATH")]
    pub source: Option<PathBuf>,

    /// Install root [default: %ProgramFiles%\Telegraf or /opt/telegraf]
    #[arg(long, value_name = "PATH")]
    pub destination: Option<PathBuf>,

    /// Install, start or restart the background service [default: true]
    #[arg(long, value_name = "BOOL", action = ArgAction::Set)]
    pub install_service: Option<bool>,

    /// Service name (no whitespace) [default: telegraf]
    #[arg(long, value_name = "NAME")]
    pub service_name: Option<String>,

    /// Service display name [default: Telegraf]
    #[arg(long, value_name = "NAME")]
    pub service_display_name: Option<String>,

    /// Transcript file [default: <temp dir>/telegraf-deploy.log]
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Detect and compare only; change nothing
    #[arg(long)]
    pub dry_run: bool,

    /// Ask once before making any change
    #[arg(long)]
    pub confirm: bool,

    /// Configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print the run result as JSON
    #[arg(long)]
    pub json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            source: self.source.clone(),
            destination: self.destination.clone(),
            install_service: self.install_service,
            service_name: self.service_name.clone(),
            service_display_name: self.service_display_name.clone(),
            log_path: self.log_path.clone(),
        }
    }
}
