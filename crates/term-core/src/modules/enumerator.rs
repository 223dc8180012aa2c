//! (L, S, J) walk producing Russell-Saunders terms.
//!
//! L runs from the range calculator's lower bound to `min(max_l, global_max_l)`,
//! S ascends in integer steps, and in all-J mode J ascends within each (L, S).
//! With a target J the same walk keeps only that J.

use super::configuration::ElectronConfiguration;
use super::lande::lande_g_for_term;
use super::ranges::quantum_ranges;
use crate::common::config::EnumerationConfig;
use crate::common::symbols::symbol_from_l;
use crate::domain::{
    EnumerationMode, HalfInteger, QuantumRanges, TermError, TermGroup, TermRecord, TermReport,
    TermResult,
};
use tracing::{debug, trace};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TermEnumerator {
    config: EnumerationConfig,
}

impl TermEnumerator {
    pub fn new(config: EnumerationConfig) -> TermResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Builds the full report; nothing is returned unless every check passes.
    pub fn enumerate(
        &self,
        configuration: &ElectronConfiguration,
        target_j: Option<HalfInteger>,
    ) -> TermResult<TermReport> {
        let ranges = quantum_ranges(configuration.l_values())?;
        let effective_max_l = ranges.max_l.min(self.config.global_max_l);
        debug!(
            min_l = ranges.min_l,
            max_l = ranges.max_l,
            effective_max_l,
            min_two_s = ranges.min_two_s,
            max_two_s = ranges.max_two_s,
            "computed quantum number ranges"
        );

        if let Some(j) = target_j {
            validate_target_j(j, configuration.electron_count(), &ranges, effective_max_l)?;
        }

        let groups = walk_terms(&ranges, effective_max_l, target_j)?;
        let mode = match target_j {
            Some(j) => EnumerationMode::SingleJ(j),
            None => EnumerationMode::AllJ,
        };

        let report = TermReport {
            configuration: configuration.raw().to_owned(),
            expanded: configuration.expanded().to_owned(),
            electron_count: configuration.electron_count(),
            parity: configuration.parity(),
            ranges,
            effective_max_l,
            mode,
            groups,
        };
        debug!(
            groups = report.groups.len(),
            records = report.record_count(),
            "enumerated terms"
        );
        Ok(report)
    }
}

/// Parses and enumerates in one call.
pub fn enumerate_terms(
    config: &str,
    target_j: Option<HalfInteger>,
    settings: EnumerationConfig,
) -> TermResult<TermReport> {
    let configuration = ElectronConfiguration::parse(config)?;
    TermEnumerator::new(settings)?.enumerate(&configuration, target_j)
}

/// Reads a user-supplied J; malformed or negative values count as invalid J.
pub fn parse_target_j(
    text: &str,
    configuration: &ElectronConfiguration,
) -> TermResult<HalfInteger> {
    text.parse::<HalfInteger>()
        .map_err(|error| TermError::InvalidJ {
            j: error.input,
            electron_count: configuration.electron_count(),
            reason: error.reason.to_string(),
        })
}

pub fn validate_target_j(
    j: HalfInteger,
    electron_count: usize,
    ranges: &QuantumRanges,
    effective_max_l: u32,
) -> TermResult<()> {
    let even_electrons = electron_count % 2 == 0;
    if even_electrons && !j.is_integer() {
        return Err(TermError::invalid_j(
            j,
            electron_count,
            "half-integer J requires an odd electron count",
        ));
    }
    if !even_electrons && j.is_integer() {
        return Err(TermError::invalid_j(
            j,
            electron_count,
            "integer J requires an even electron count",
        ));
    }

    let largest = HalfInteger::from_integer(effective_max_l) + ranges.max_spin();
    if j > largest {
        return Err(TermError::invalid_j(
            j,
            electron_count,
            format!("J exceeds the largest reachable L + S = {largest}"),
        ));
    }
    Ok(())
}

fn walk_terms(
    ranges: &QuantumRanges,
    effective_max_l: u32,
    target_j: Option<HalfInteger>,
) -> TermResult<Vec<TermGroup>> {
    let mut groups = Vec::new();

    for l in ranges.min_l..=effective_max_l {
        let term_symbol = symbol_from_l(l)?;
        match target_j {
            None => {
                for two_s in ranges.two_s_values() {
                    let records = two_j_candidates(l, two_s)
                        .filter(|&two_j| satisfies_coupling(l, two_s, two_j))
                        .map(|two_j| term_record(l, term_symbol, two_s, two_j))
                        .collect();
                    groups.push(TermGroup {
                        l,
                        two_s: Some(two_s),
                        records,
                    });
                }
            }
            Some(j) => {
                if !within_spin_window(l, ranges.max_two_s, j.twice()) {
                    continue;
                }
                // Stricter than `L - S <= J <= L + S`: also drops spins with J < S - L.
                // L values left without records get no group.
                let records: Vec<TermRecord> = ranges
                    .two_s_values()
                    .filter(|&two_s| satisfies_coupling(l, two_s, j.twice()))
                    .map(|two_s| term_record(l, term_symbol, two_s, j.twice()))
                    .collect();
                if !records.is_empty() {
                    groups.push(TermGroup {
                        l,
                        two_s: None,
                        records,
                    });
                }
            }
        }
    }

    Ok(groups)
}

/// Doubled J from `2L - 2S` (or `2S` when that is negative) up to `2L + 2S`.
fn two_j_candidates(l: u32, two_s: u32) -> impl Iterator<Item = u32> {
    let two_l = 2 * l;
    let lower = two_l.checked_sub(two_s).unwrap_or(two_s);
    (lower..=two_l + two_s).step_by(2)
}

/// `L - S <= J <= L + S` in doubled units.
fn within_spin_window(l: u32, two_s: u32, two_j: u32) -> bool {
    let two_l = 2 * l;
    two_j + two_s >= two_l && two_j <= two_l + two_s
}

/// `|L - S| <= J <= L + S` in doubled units.
fn satisfies_coupling(l: u32, two_s: u32, two_j: u32) -> bool {
    within_spin_window(l, two_s, two_j) && two_j + 2 * l >= two_s
}

fn term_record(l: u32, term_symbol: char, two_s: u32, two_j: u32) -> TermRecord {
    let j = HalfInteger::from_twice(two_j);
    let spin = HalfInteger::from_twice(two_s);
    let record = TermRecord {
        multiplicity: two_s + 1,
        l,
        term_symbol,
        two_s,
        j,
        g: lande_g_for_term(j, l, spin),
    };
    trace!(term = %record, "term");
    record
}
