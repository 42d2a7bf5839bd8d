mod commands;
mod error;
mod services;
mod ui;

use clap::{Parser, Subcommand};
use commands::{demo::DemoCommand, score::ScoreCommand, session::SessionCommand};
use error::CliError;
use services::config::{ConfigError, ConfigService, Settings};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "risk-register")]
#[command(about = "Assess security, compliance and operational risks", long_about = None)]
#[command(version)]
struct Cli {
    /// Settings file (defaults to ~/.risk-register/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run an interactive assessment session (default)
    Session(SessionCommand),
    /// Score a single likelihood/impact pair
    Score(ScoreCommand),
    /// Show a register pre-filled with sample risks
    Demo(DemoCommand),
}

fn load_settings(explicit: Option<PathBuf>) -> Result<(ConfigService, Settings), CliError> {
    let service = ConfigService::new(explicit).map_err(|e| CliError::Config(e.to_string()))?;
    match service.load() {
        Ok(settings) => Ok((service, settings)),
        Err(ConfigError::Syntax(diag)) => {
            ui::diagnostic::report_config_error(diag);
            Err(CliError::Config(format!(
                "{} could not be parsed",
                service.path().display()
            )))
        }
        Err(other) => Err(CliError::Config(other.to_string())),
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let (config, settings) = load_settings(cli.config)?;
    services::logging::init(cli.verbose, &settings.logging.level);
    ui::Theme::set_color(settings.display.color && !cli.no_color);
    match config.source() {
        Some(path) => tracing::debug!(path = %path.display(), ?settings, "settings loaded"),
        None => tracing::debug!(
            path = %config.path().display(),
            "no settings file, using defaults"
        ),
    }

    match cli.command.unwrap_or_default() {
        Commands::Session(cmd) => cmd.execute(&settings),
        Commands::Score(cmd) => cmd.execute(),
        Commands::Demo(cmd) => cmd.execute(&settings),
    }
}

impl Default for Commands {
    fn default() -> Self {
        Commands::Session(SessionCommand::default())
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => match err.downcast_ref::<CliError>() {
            Some(CliError::Cancelled) => {
                let _ = cliclack::outro_cancel("Session ended.");
                ExitCode::from(130)
            }
            Some(cli_err) => {
                cli_err.render();
                ExitCode::FAILURE
            }
            None => {
                eprintln!("\n{} {:#}", console::style("Error:").red().bold(), err);
                ExitCode::FAILURE
            }
        },
    }
}
