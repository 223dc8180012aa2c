mod commands;
mod helpers;

use clap::Parser;
use term_core::domain::{TermError, TermErrorCategory};
use tracing_subscriber::EnvFilter;

pub fn run_from_env() -> i32 {
    let args: Vec<String> = std::env::args().collect();

    match parse_and_dispatch(args) {
        Ok(code) => code,
        Err(error) => {
            eprintln!("{}", error.diagnostic_line());
            eprintln!("FATAL EXIT CODE: {}", error.exit_code());
            error.exit_code()
        }
    }
}

fn parse_and_dispatch(args: Vec<String>) -> Result<i32, CliError> {
    match Cli::try_parse_from(&args) {
        Ok(cli) => {
            init_tracing(cli.verbose);
            dispatch_parsed(cli.command)
        }
        Err(err) => match err.kind() {
            clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
                print!("{}", err);
                Ok(0)
            }
            _ => Err(CliError::Usage(err.to_string())),
        },
    }
}

/// Logs go to stderr; `RUST_LOG` applies unless `--verbose` forces debug.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[derive(Parser)]
#[command(
    name = "term-symbols",
    version,
    about = "Russell-Saunders term symbols and Landé g-factors"
)]
struct Cli {
    /// Log pipeline details to stderr
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: CliCommand,
}

#[derive(clap::Subcommand)]
enum CliCommand {
    /// List terms and g-factors for a configuration, for every J or one J
    Terms(commands::TermsArgs),
    /// Show the expanded configuration and its single-electron l values
    Expand(commands::ExpandArgs),
    /// Evaluate one Landé g-factor
    Lande(commands::LandeArgs),
}

fn dispatch_parsed(command: CliCommand) -> Result<i32, CliError> {
    match command {
        CliCommand::Terms(args) => commands::run_terms_command(args),
        CliCommand::Expand(args) => commands::run_expand_command(args),
        CliCommand::Lande(args) => commands::run_lande_command(args),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),
    #[error("{0}")]
    Compute(TermError),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl CliError {
    fn code(&self) -> &'static str {
        match self {
            Self::Usage(_) => "INPUT.CLI_USAGE",
            Self::Compute(error) => error.code(),
            Self::Internal(_) => "IO.CLI",
        }
    }

    fn exit_code(&self) -> i32 {
        match self {
            Self::Usage(_) => TermErrorCategory::InputValidationError.exit_code(),
            Self::Compute(error) => error.exit_code(),
            Self::Internal(_) => TermErrorCategory::IoSystemError.exit_code(),
        }
    }

    fn diagnostic_line(&self) -> String {
        match self {
            Self::Compute(error) => error.diagnostic_line(),
            Self::Usage(message) => format!("ERROR: [{}] {}", self.code(), message.trim_end()),
            Self::Internal(error) => format!("ERROR: [{}] {error:#}", self.code()),
        }
    }
}
