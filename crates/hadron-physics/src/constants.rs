//! Constants of the quark model
//!
//! Quantum numbers are stored exactly as multiples of 1/6, the common
//! denominator of the thirds (charge, baryon number, hypercharge) and halves
//! (isospin projection) that appear in this domain.

use crate::quantum::QuantumNumber;

/// Denominator of the fixed-point representation used by [`QuantumNumber`]
pub const QUANTUM_DENOMINATOR: i64 = 6;

/// Allowed deviation between hypercharge and 2(Q - Iz)
pub const HYPERCHARGE_TOLERANCE: f64 = 1e-6;

/// Baryon number carried by every quark unless stated otherwise
pub const DEFAULT_BARYON_NUMBER: QuantumNumber = QuantumNumber::thirds(1);

/// Prefix of the default name given to a conjugated particle
pub const ANTI_PREFIX: &str = "anti-";

/// Up-type quark charge (u, c, t)
pub const UP_TYPE_CHARGE: QuantumNumber = QuantumNumber::thirds(2);

/// Down-type quark charge (d, s, b)
pub const DOWN_TYPE_CHARGE: QuantumNumber = QuantumNumber::thirds(-1);

/// Isospin projection of the up and down quarks
pub const LIGHT_ISOSPIN: QuantumNumber = QuantumNumber::halves(1);
