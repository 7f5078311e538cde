//! telegraf-deploy CLI
//!
//! Usage: telegraf-deploy [--source <PATH>] [--destination <PATH>] [--dry-run] ...

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use is_terminal::IsTerminal;

use telegraf_deploy::config::{self, default_source, ENV_SOURCE};
use telegraf_deploy::domain::entities::ValidationOutcome;
use telegraf_deploy::presentation::{factory, render_json, Cli, OutputFormat, TextReport};
use telegraf_deploy::{logging, DeployError};

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::from(exit_code(&err))
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let source_hint = cli
        .source
        .clone()
        .or_else(|| std::env::var_os(ENV_SOURCE).map(PathBuf::from))
        .unwrap_or_else(default_source);
    let (config, warnings, config_file) =
        config::load(cli.config.as_deref(), Some(source_hint.as_path()))?;
    let settings = config.resolve(&cli.overrides())?;

    let _guard = logging::init(&settings.log_path, cli.verbose);
    for warning in &warnings {
        tracing::warn!("{}", warning);
    }
    if let Some(file) = &config_file {
        tracing::info!(config = %file.display(), "configuration loaded");
    }

    let outcome = deploy(cli, &settings);
    if let Err(err) = &outcome {
        tracing::debug!(error = %err, "run failed");
    }
    outcome
}

fn deploy(cli: &Cli, settings: &config::Settings) -> Result<()> {
    tracing::info!(
        source = %settings.layout.source.display(),
        destination = %settings.layout.destination.display(),
        dry_run = cli.dry_run,
        "starting deployment"
    );

    let use_case = factory::create_deploy_use_case(settings, cli.confirm);
    let options = factory::deploy_options(settings, cli.dry_run);
    let result = use_case.execute(&options)?;

    match OutputFormat::from_json_flag(cli.json) {
        OutputFormat::Json => println!("{}", render_json(&result)?),
        OutputFormat::Text => {
            let report = TextReport {
                color: std::io::stdout().is_terminal(),
                verbose: cli.verbose,
            };
            println!("{}", report.render(&result));
        }
    }

    if let ValidationOutcome::Invalid { code } = result.validation {
        return Err(DeployError::ValidationFailed {
            binary: settings.layout.binary_destination(),
            code,
        }
        .into());
    }
    Ok(())
}

fn exit_code(err: &anyhow::Error) -> u8 {
    let code = err
        .downcast_ref::<DeployError>()
        .map(DeployError::exit_code)
        .unwrap_or(1);
    u8::try_from(code).unwrap_or(1)
}
