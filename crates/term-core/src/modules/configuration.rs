//! Electron-configuration shorthand (`sp3d`, `d10s`) and its per-electron l-list.

use crate::common::symbols::l_from_symbol;
use crate::domain::{Parity, TermError, TermResult};
use tracing::debug;

/// One orbital letter and how many electrons it stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrbitalGroup {
    pub symbol: char,
    pub count: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ExpanderState {
    Start,
    AfterLetter,
    AfterOneDigit(u32),
    AfterTwoDigits,
}

impl ExpanderState {
    const fn has_count(self) -> bool {
        matches!(self, Self::AfterOneDigit(_) | Self::AfterTwoDigits)
    }
}

/// Splits a configuration into letter groups. Counts are one or two digits;
/// a missing count means one electron.
pub fn parse_orbital_groups(config: &str) -> TermResult<Vec<OrbitalGroup>> {
    let mut groups: Vec<OrbitalGroup> = Vec::new();
    let mut state = ExpanderState::Start;
    let mut count_start = 0;

    for (position, ch) in config.chars().enumerate() {
        state = match (state, ch.to_digit(10)) {
            (_, None) => {
                close_group(config, &groups, state, count_start)?;
                groups.push(OrbitalGroup {
                    symbol: ch,
                    count: 1,
                });
                ExpanderState::AfterLetter
            }
            (ExpanderState::Start, Some(_)) => {
                return Err(TermError::parse(
                    config,
                    position,
                    format!("repeat count '{ch}' appears before any orbital letter"),
                ));
            }
            (ExpanderState::AfterLetter, Some(digit)) => {
                count_start = position;
                set_last_count(&mut groups, digit);
                ExpanderState::AfterOneDigit(digit)
            }
            (ExpanderState::AfterOneDigit(first), Some(digit)) => {
                set_last_count(&mut groups, 10 * first + digit);
                ExpanderState::AfterTwoDigits
            }
            (ExpanderState::AfterTwoDigits, Some(_)) => {
                return Err(TermError::parse(
                    config,
                    position,
                    "repeat counts are limited to two digits",
                ));
            }
        };
    }
    close_group(config, &groups, state, count_start)?;

    Ok(groups)
}

fn set_last_count(groups: &mut [OrbitalGroup], count: u32) {
    if let Some(group) = groups.last_mut() {
        group.count = count;
    }
}

fn close_group(
    config: &str,
    groups: &[OrbitalGroup],
    state: ExpanderState,
    count_start: usize,
) -> TermResult<()> {
    match groups.last() {
        Some(group) if state.has_count() && group.count == 0 => Err(TermError::parse(
            config,
            count_start,
            format!("repeat count of zero after '{}' is not supported", group.symbol),
        )),
        _ => Ok(()),
    }
}

/// `sp3d` -> `spppd`.
pub fn expand_configuration(config: &str) -> TermResult<String> {
    let groups = parse_orbital_groups(config)?;
    Ok(groups
        .iter()
        .flat_map(|group| std::iter::repeat_n(group.symbol, group.count as usize))
        .collect())
}

/// Translates an already expanded configuration, one l per character.
pub fn l_values_from_expanded(expanded: &str) -> TermResult<Vec<u32>> {
    expanded.chars().map(l_from_symbol).collect()
}

/// `sp3d` -> `[0, 1, 1, 1, 2]`.
pub fn form_l_list(config: &str) -> TermResult<Vec<u32>> {
    l_values_from_expanded(&expand_configuration(config)?)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElectronConfiguration {
    raw: String,
    expanded: String,
    l_values: Vec<u32>,
}

impl ElectronConfiguration {
    pub fn parse(config: &str) -> TermResult<Self> {
        let raw = config.trim();
        let expanded = expand_configuration(raw)?;
        let l_values = l_values_from_expanded(&expanded)?;
        debug!(config = raw, expanded = %expanded, electrons = l_values.len(), "parsed configuration");

        Ok(Self {
            raw: raw.to_owned(),
            expanded,
            l_values,
        })
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn expanded(&self) -> &str {
        &self.expanded
    }

    pub fn l_values(&self) -> &[u32] {
        &self.l_values
    }

    pub fn electron_count(&self) -> usize {
        self.l_values.len()
    }

    pub fn parity(&self) -> Parity {
        Parity::from_l_values(&self.l_values)
    }
}
