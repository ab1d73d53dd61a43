//! Errors raised while building particles and catalogs

use thiserror::Error;

use crate::quantum::QuantumNumber;

/// Errors of the quark model
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PhysicsError {
    /// Hypercharge does not satisfy the Gell-Mann–Nishijima relation
    #[error("creation of {name} failed: hypercharge {hypercharge} != 2(Q - Iz) = {expected}")]
    InvalidQuantumNumbers {
        name: String,
        hypercharge: QuantumNumber,
        expected: QuantumNumber,
    },

    #[error("composite state {name} has no constituents")]
    InvalidComposition { name: String },

    #[error("{numerator}/{denominator} is not a multiple of 1/6")]
    UnrepresentableFraction { numerator: i64, denominator: i64 },

    #[error("unknown particle: {0}")]
    UnknownParticle(String),

    #[error("duplicate particle name: {0}")]
    DuplicateName(String),
}

pub type Result<T> = std::result::Result<T, PhysicsError>;
