//! Russell-Saunders term symbols and Landé g-factors for electron configurations.
//!
//! The pipeline runs configuration expansion, symbol translation, L/S range
//! derivation, (L, S, J) enumeration and g-factor evaluation, in that order.

pub mod common;
pub mod domain;
pub mod modules;
