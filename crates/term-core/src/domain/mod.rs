pub mod errors;

pub use errors::{TermError, TermErrorCategory, TermResult};

use serde::{Serialize, Serializer};
use std::fmt::{Display, Formatter};
use std::ops::Add;
use std::str::FromStr;

/// Non-negative integer or half-integer, stored doubled so J and S stay exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct HalfInteger {
    twice: u32,
}

impl HalfInteger {
    pub const ZERO: Self = Self { twice: 0 };

    pub const fn from_twice(twice: u32) -> Self {
        Self { twice }
    }

    pub const fn from_integer(value: u32) -> Self {
        Self { twice: 2 * value }
    }

    pub const fn twice(self) -> u32 {
        self.twice
    }

    pub const fn is_integer(self) -> bool {
        self.twice % 2 == 0
    }

    pub fn as_f64(self) -> f64 {
        f64::from(self.twice) * 0.5
    }
}

impl Add for HalfInteger {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::from_twice(self.twice + rhs.twice)
    }
}

impl Display for HalfInteger {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.twice / 2)
        } else {
            write!(f, "{}/2", self.twice)
        }
    }
}

impl Serialize for HalfInteger {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{input}' is not a non-negative integer or half-integer: {reason}")]
pub struct HalfIntegerParseError {
    pub input: String,
    pub reason: &'static str,
}

impl FromStr for HalfInteger {
    type Err = HalfIntegerParseError;

    /// Accepts `2`, `3/2`, `6/4` and `1.5`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        let fail = |reason| HalfIntegerParseError {
            input: input.to_owned(),
            reason,
        };

        if input.starts_with('-') {
            return Err(fail("value is negative"));
        }

        let twice = if let Some((numerator, denominator)) = input.split_once('/') {
            let numerator: u64 = numerator
                .trim()
                .parse()
                .map_err(|_| fail("numerator is not an integer"))?;
            let denominator: u64 = denominator
                .trim()
                .parse()
                .map_err(|_| fail("denominator is not an integer"))?;
            if denominator == 0 {
                return Err(fail("denominator is zero"));
            }
            let doubled = numerator
                .checked_mul(2)
                .ok_or_else(|| fail("value is too large"))?;
            if doubled % denominator != 0 {
                return Err(fail("value is not a multiple of 1/2"));
            }
            doubled / denominator
        } else if let Ok(integer) = input.parse::<u64>() {
            integer
                .checked_mul(2)
                .ok_or_else(|| fail("value is too large"))?
        } else {
            let value: f64 = input.parse().map_err(|_| fail("not a number"))?;
            let doubled = 2.0 * value;
            if !doubled.is_finite() || doubled.fract() != 0.0 {
                return Err(fail("value is not a multiple of 1/2"));
            }
            if doubled > f64::from(u32::MAX) {
                return Err(fail("value is too large"));
            }
            doubled as u64
        };

        u32::try_from(twice)
            .map(Self::from_twice)
            .map_err(|_| fail("value is too large"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Parity {
    Even,
    Odd,
}

impl Parity {
    pub fn from_l_values(l_values: &[u32]) -> Self {
        if l_values.iter().sum::<u32>() % 2 == 0 {
            Self::Even
        } else {
            Self::Odd
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Even => "even",
            Self::Odd => "odd",
        }
    }
}

impl Display for Parity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).as_str())
    }
}

/// Allowed total L and doubled total S for an l-list.
///
/// `min_l` is the `2*max(l) - sum(l)` coupling bound clamped to zero. It is
/// exact for two electrons only; for more electrons the true minimum can be
/// larger, so L values near the bottom of the range are candidates, not
/// guaranteed terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuantumRanges {
    pub min_l: u32,
    pub max_l: u32,
    pub min_two_s: u32,
    pub max_two_s: u32,
}

impl QuantumRanges {
    pub fn max_spin(&self) -> HalfInteger {
        HalfInteger::from_twice(self.max_two_s)
    }

    /// Spin values in ascending order, doubled.
    pub fn two_s_values(&self) -> impl Iterator<Item = u32> {
        (self.min_two_s..=self.max_two_s).step_by(2)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TermRecord {
    pub multiplicity: u32,
    pub l: u32,
    pub term_symbol: char,
    pub two_s: u32,
    pub j: HalfInteger,
    pub g: f64,
}

impl Display for TermRecord {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {}_{}  g = {:.3}",
            self.multiplicity, self.term_symbol, self.j, self.g
        )
    }
}

/// Records sharing one L (and in all-J mode one S); rendered as one block.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TermGroup {
    pub l: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub two_s: Option<u32>,
    pub records: Vec<TermRecord>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "j", rename_all = "camelCase")]
pub enum EnumerationMode {
    AllJ,
    SingleJ(HalfInteger),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TermReport {
    pub configuration: String,
    pub expanded: String,
    pub electron_count: usize,
    pub parity: Parity,
    pub ranges: QuantumRanges,
    pub effective_max_l: u32,
    pub mode: EnumerationMode,
    pub groups: Vec<TermGroup>,
}

impl TermReport {
    pub fn records(&self) -> impl Iterator<Item = &TermRecord> {
        self.groups.iter().flat_map(|group| group.records.iter())
    }

    pub fn record_count(&self) -> usize {
        self.groups.iter().map(|group| group.records.len()).sum()
    }
}
