//! # Hadron Physics
//!
//! Quark-model data for mesons and baryons: exact additive quantum numbers,
//! quarks, composite states and the catalog that holds them. Every particle
//! is checked against the Gell-Mann–Nishijima relation `Y = 2(Q - Iz)` when
//! it is constructed.

pub mod catalog;
pub mod composite;
pub mod constants;
pub mod error;
pub mod quantum;
pub mod quark;
pub mod standard;

pub use catalog::*;
pub use composite::*;
pub use constants::*;
pub use error::*;
pub use quantum::*;
pub use quark::*;
