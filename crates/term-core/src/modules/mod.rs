pub mod configuration;
pub mod enumerator;
pub mod lande;
pub mod ranges;
pub mod serialization;

pub use configuration::{
    ElectronConfiguration, OrbitalGroup, expand_configuration, form_l_list, parse_orbital_groups,
};
pub use enumerator::{TermEnumerator, enumerate_terms, parse_target_j, validate_target_j};
pub use lande::{lande_g, lande_g_for_term};
pub use ranges::quantum_ranges;
