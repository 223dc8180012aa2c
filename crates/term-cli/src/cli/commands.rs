use super::CliError;
use super::helpers::{ExpansionSummary, OutputFormat, emit_report, resolve_enumeration_config};
use std::path::PathBuf;
use term_core::domain::HalfInteger;
use term_core::modules::serialization::{render_json_report, render_text_report};
use term_core::modules::{ElectronConfiguration, TermEnumerator, lande_g_for_term, parse_target_j};
use tracing::info;

#[derive(clap::Args)]
pub(super) struct TermsArgs {
    /// Electron configuration, e.g. 'sp2d' for s p^2 d
    #[arg(value_name = "CONFIG")]
    configuration: String,

    /// Total J as integer, fraction or decimal (e.g. 2, 3/2, 1.5); omit to list every J
    #[arg(value_name = "J", allow_hyphen_values = true)]
    j: Option<String>,

    /// Cap on total L (overrides the settings file)
    #[arg(long)]
    max_l: Option<u32>,

    /// JSON settings file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Report format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Write the report to a file instead of stdout
    #[arg(long, value_name = "FILE")]
    output: Option<PathBuf>,
}

#[derive(clap::Args)]
pub(super) struct ExpandArgs {
    /// Electron configuration, e.g. 'sp3d'
    #[arg(value_name = "CONFIG")]
    configuration: String,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[derive(clap::Args)]
pub(super) struct LandeArgs {
    /// Total angular momentum J
    #[arg(long)]
    j: HalfInteger,

    /// Total orbital angular momentum L
    #[arg(long)]
    l: u32,

    /// Total spin S
    #[arg(long)]
    s: HalfInteger,
}

pub(super) fn run_terms_command(args: TermsArgs) -> Result<i32, CliError> {
    let settings = resolve_enumeration_config(args.config.as_deref(), args.max_l)?;
    let configuration =
        ElectronConfiguration::parse(&args.configuration).map_err(CliError::Compute)?;
    let target_j = args
        .j
        .as_deref()
        .map(|text| parse_target_j(text, &configuration))
        .transpose()
        .map_err(CliError::Compute)?;

    let enumerator = TermEnumerator::new(settings).map_err(CliError::Compute)?;
    let report = enumerator
        .enumerate(&configuration, target_j)
        .map_err(CliError::Compute)?;

    let rendered = match args.format {
        OutputFormat::Text => render_text_report(&report),
        OutputFormat::Json => render_json_report(&report).map_err(CliError::Compute)?,
    };
    emit_report(&rendered, args.output.as_deref())?;
    info!(records = report.record_count(), "terms command completed");
    Ok(0)
}

pub(super) fn run_expand_command(args: ExpandArgs) -> Result<i32, CliError> {
    let configuration =
        ElectronConfiguration::parse(&args.configuration).map_err(CliError::Compute)?;
    let summary = ExpansionSummary::from_configuration(&configuration);

    match args.format {
        OutputFormat::Text => print!("{}", summary.render_text()),
        OutputFormat::Json => println!("{}", summary.render_json()?),
    }
    Ok(0)
}

pub(super) fn run_lande_command(args: LandeArgs) -> Result<i32, CliError> {
    let g = lande_g_for_term(args.j, args.l, args.s);
    println!("g = {g:.3}");
    Ok(0)
}
