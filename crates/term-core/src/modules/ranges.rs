use crate::domain::{QuantumRanges, TermError, TermResult};

pub fn max_l(l_values: &[u32]) -> u32 {
    l_values.iter().sum()
}

/// Lower bound on total L: the largest l minus the sum of the rest, or zero.
///
/// Tight for two electrons. With three or more electrons, or equivalent
/// electrons, the true minimum may be higher and this returns too little.
pub fn min_l(l_values: &[u32]) -> u32 {
    let largest = l_values.iter().copied().max().unwrap_or(0);
    (2 * largest).saturating_sub(max_l(l_values))
}

/// All spins parallel. Pauli exclusion between equivalent electrons is not applied.
pub fn max_two_s(l_values: &[u32]) -> u32 {
    l_values.len() as u32
}

pub fn min_two_s(l_values: &[u32]) -> u32 {
    (l_values.len() % 2) as u32
}

pub fn quantum_ranges(l_values: &[u32]) -> TermResult<QuantumRanges> {
    if l_values.is_empty() {
        return Err(TermError::EmptyConfiguration);
    }

    Ok(QuantumRanges {
        min_l: min_l(l_values),
        max_l: max_l(l_values),
        min_two_s: min_two_s(l_values),
        max_two_s: max_two_s(l_values),
    })
}

#[cfg(test)]
mod tests {
    use super::quantum_ranges;
    use crate::domain::{QuantumRanges, TermError};

    #[test]
    fn single_s_electron_is_a_doublet_s() {
        assert_eq!(
            quantum_ranges(&[0]),
            Ok(QuantumRanges {
                min_l: 0,
                max_l: 0,
                min_two_s: 1,
                max_two_s: 1,
            })
        );
    }

    #[test]
    fn two_p_electrons_span_s_through_d() {
        assert_eq!(
            quantum_ranges(&[1, 1]),
            Ok(QuantumRanges {
                min_l: 0,
                max_l: 2,
                min_two_s: 0,
                max_two_s: 2,
            })
        );
    }

    #[test]
    fn dominant_l_sets_a_nonzero_lower_bound() {
        let ranges = quantum_ranges(&[3, 1]).expect("non-empty list");
        assert_eq!(ranges.min_l, 2);
        assert_eq!(ranges.max_l, 4);

        let ranges = quantum_ranges(&[0, 4, 1]).expect("non-empty list");
        assert_eq!(ranges.min_l, 3);
    }

    #[test]
    fn three_electron_bound_sets_largest_l_against_the_rest() {
        let ranges = quantum_ranges(&[1, 1, 1]).expect("non-empty list");
        assert_eq!(ranges.min_l, 0);

        let ranges = quantum_ranges(&[1, 1, 4]).expect("non-empty list");
        assert_eq!(ranges.min_l, 2);
        assert_eq!(ranges.max_two_s - ranges.min_two_s, 2);
    }

    #[test]
    fn empty_l_list_is_rejected() {
        assert_eq!(quantum_ranges(&[]), Err(TermError::EmptyConfiguration));
    }
}
