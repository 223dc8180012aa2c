use super::CliError;
use anyhow::Context;
use serde::Serialize;
use std::fs;
use std::path::Path;
use term_core::common::config::EnumerationConfig;
use term_core::domain::Parity;
use term_core::modules::ElectronConfiguration;
use term_core::modules::serialization::write_text_artifact;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub(super) enum OutputFormat {
    Text,
    Json,
}

/// Settings file first, then `--max-l` on top.
pub(super) fn resolve_enumeration_config(
    settings_path: Option<&Path>,
    max_l_override: Option<u32>,
) -> Result<EnumerationConfig, CliError> {
    let mut config = match settings_path {
        Some(path) => {
            let source = fs::read_to_string(path)
                .with_context(|| format!("failed to read settings file '{}'", path.display()))?;
            EnumerationConfig::from_json_str(&source).map_err(CliError::Compute)?
        }
        None => EnumerationConfig::default(),
    };

    if let Some(max_l) = max_l_override {
        config = EnumerationConfig::with_global_max_l(max_l).map_err(CliError::Compute)?;
    }
    debug!(global_max_l = config.global_max_l, "resolved enumeration settings");
    Ok(config)
}

pub(super) fn emit_report(rendered: &str, output: Option<&Path>) -> Result<(), CliError> {
    match output {
        Some(path) => {
            write_text_artifact(path, rendered).map_err(CliError::Compute)?;
            println!("Report written to {}", path.display());
        }
        None if rendered.ends_with('\n') => print!("{rendered}"),
        None => println!("{rendered}"),
    }
    Ok(())
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct ExpansionSummary {
    configuration: String,
    expanded: String,
    l_values: Vec<u32>,
    electron_count: usize,
    parity: Parity,
}

impl ExpansionSummary {
    pub(super) fn from_configuration(configuration: &ElectronConfiguration) -> Self {
        Self {
            configuration: configuration.raw().to_owned(),
            expanded: configuration.expanded().to_owned(),
            l_values: configuration.l_values().to_vec(),
            electron_count: configuration.electron_count(),
            parity: configuration.parity(),
        }
    }

    pub(super) fn render_text(&self) -> String {
        let l_values = self
            .l_values
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "Config. = {} = {}\nl = [{}]\nNumber of electrons = {}\nParity: {}\n",
            self.configuration, self.expanded, l_values, self.electron_count, self.parity
        )
    }

    pub(super) fn render_json(&self) -> Result<String, CliError> {
        serde_json::to_string_pretty(self)
            .context("failed to serialize expansion summary")
            .map_err(CliError::Internal)
    }
}
