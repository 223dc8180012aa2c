//! Spectroscopic letter tables.
//!
//! Index in the table is the angular momentum quantum number. `j` is skipped
//! and `p` appears a second time at L = 12, so lookups by letter always
//! resolve `p` to 1 and L = 12 prints as `P`.

use crate::domain::{TermError, TermResult};

pub const SYMBOL_COUNT: usize = 22;

pub const SINGLE_ELECTRON_SYMBOLS: [char; SYMBOL_COUNT] = [
    's', 'p', 'd', 'f', 'g', 'h', 'i', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 't', 'u', 'v', 'w',
    'x', 'y', 'z',
];

pub const TOTAL_L_SYMBOLS: [char; SYMBOL_COUNT] = [
    'S', 'P', 'D', 'F', 'G', 'H', 'I', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'T', 'U', 'V', 'W',
    'X', 'Y', 'Z',
];

/// Largest L with a spectroscopic letter.
pub const MAX_REPRESENTABLE_L: u32 = (SYMBOL_COUNT - 1) as u32;

/// L whose letter repeats an earlier entry; it never comes back from `l_from_symbol`.
pub const DUPLICATE_P_L: u32 = 12;

pub fn l_from_symbol(symbol: char) -> TermResult<u32> {
    SINGLE_ELECTRON_SYMBOLS
        .iter()
        .position(|candidate| *candidate == symbol)
        .map(|index| index as u32)
        .ok_or(TermError::UnknownSymbol { symbol })
}

pub fn symbol_from_l(l: u32) -> TermResult<char> {
    TOTAL_L_SYMBOLS
        .get(l as usize)
        .copied()
        .ok_or(TermError::Range {
            l,
            max: MAX_REPRESENTABLE_L,
        })
}
