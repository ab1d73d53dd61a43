//! Exact additive quantum numbers

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Neg, Sub};

use crate::constants::{HYPERCHARGE_TOLERANCE, QUANTUM_DENOMINATOR};
use crate::error::{PhysicsError, Result};

/// A rational quantum number stored as an integer count of sixths
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct QuantumNumber(i64);

impl QuantumNumber {
    pub const ZERO: Self = Self(0);
    pub const ONE: Self = Self(QUANTUM_DENOMINATOR);

    /// Build `numerator / denominator`, which must be a multiple of 1/6
    pub fn new(numerator: i64, denominator: i64) -> Result<Self> {
        let unrepresentable = PhysicsError::UnrepresentableFraction {
            numerator,
            denominator,
        };
        if denominator == 0 || QUANTUM_DENOMINATOR % denominator != 0 {
            return Err(unrepresentable);
        }
        numerator
            .checked_mul(QUANTUM_DENOMINATOR / denominator)
            .map(Self)
            .ok_or(unrepresentable)
    }

    pub const fn integer(value: i64) -> Self {
        Self(value * QUANTUM_DENOMINATOR)
    }

    pub const fn thirds(value: i64) -> Self {
        Self(value * (QUANTUM_DENOMINATOR / 3))
    }

    pub const fn halves(value: i64) -> Self {
        Self(value * (QUANTUM_DENOMINATOR / 2))
    }

    pub const fn from_sixths(sixths: i64) -> Self {
        Self(sixths)
    }

    pub const fn sixths(self) -> i64 {
        self.0
    }

    pub const fn abs(self) -> Self {
        Self(self.0.abs())
    }

    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    pub const fn is_integer(self) -> bool {
        self.0 % QUANTUM_DENOMINATOR == 0
    }

    pub fn to_f64(self) -> f64 {
        self.0 as f64 / QUANTUM_DENOMINATOR as f64
    }

    pub fn to_f32(self) -> f32 {
        self.0 as f32 / QUANTUM_DENOMINATOR as f32
    }

    /// Numerator and positive denominator in lowest terms
    pub fn reduced(self) -> (i64, i64) {
        let divisor = gcd(self.0.abs(), QUANTUM_DENOMINATOR);
        (self.0 / divisor, QUANTUM_DENOMINATOR / divisor)
    }
}

fn gcd(mut a: i64, mut b: i64) -> i64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a.max(1)
}

impl fmt::Display for QuantumNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (numerator, denominator) = self.reduced();
        let text = if denominator == 1 {
            numerator.to_string()
        } else {
            format!("{numerator}/{denominator}")
        };
        f.pad(&text)
    }
}

impl From<i32> for QuantumNumber {
    fn from(value: i32) -> Self {
        Self::integer(value as i64)
    }
}

impl From<i64> for QuantumNumber {
    fn from(value: i64) -> Self {
        Self::integer(value)
    }
}

impl Add for QuantumNumber {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for QuantumNumber {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for QuantumNumber {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl Neg for QuantumNumber {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl Mul<i64> for QuantumNumber {
    type Output = Self;

    fn mul(self, rhs: i64) -> Self {
        Self(self.0 * rhs)
    }
}

impl Sum for QuantumNumber {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a QuantumNumber> for QuantumNumber {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// The additive quantum numbers of a particle
///
/// Hypercharge is not stored; it is always derived from the baryon number
/// and the flavour quantum numbers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct QuantumNumbers {
    /// Electric charge, Q
    pub charge: QuantumNumber,
    /// Baryon number, B
    pub baryon_number: QuantumNumber,
    /// Third component of isospin, Iz
    pub isospin_z: QuantumNumber,
    /// Strangeness, S
    pub strangeness: QuantumNumber,
    /// Charmness, C
    pub charm: QuantumNumber,
    /// Bottomness, B'
    pub bottomness: QuantumNumber,
    /// Topness, T
    pub topness: QuantumNumber,
}

impl QuantumNumbers {
    /// Y = B + S + C + B' + T
    pub fn hypercharge(&self) -> QuantumNumber {
        self.baryon_number + self.strangeness + self.charm + self.bottomness + self.topness
    }

    /// Right-hand side of the Gell-Mann–Nishijima relation, 2(Q - Iz)
    pub fn nishijima_hypercharge(&self) -> QuantumNumber {
        (self.charge - self.isospin_z) * 2
    }

    pub fn is_consistent(&self) -> bool {
        let residual = self.hypercharge() - self.nishijima_hypercharge();
        residual.to_f64().abs() <= HYPERCHARGE_TOLERANCE
    }

    /// Check Y == 2(Q - Iz), naming `particle` in the error
    pub fn validate(&self, particle: &str) -> Result<()> {
        if self.is_consistent() {
            return Ok(());
        }
        Err(PhysicsError::InvalidQuantumNumbers {
            name: particle.to_string(),
            hypercharge: self.hypercharge(),
            expected: self.nishijima_hypercharge(),
        })
    }
}

impl Add for QuantumNumbers {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            charge: self.charge + rhs.charge,
            baryon_number: self.baryon_number + rhs.baryon_number,
            isospin_z: self.isospin_z + rhs.isospin_z,
            strangeness: self.strangeness + rhs.strangeness,
            charm: self.charm + rhs.charm,
            bottomness: self.bottomness + rhs.bottomness,
            topness: self.topness + rhs.topness,
        }
    }
}

impl Neg for QuantumNumbers {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            charge: -self.charge,
            baryon_number: -self.baryon_number,
            isospin_z: -self.isospin_z,
            strangeness: -self.strangeness,
            charm: -self.charm,
            bottomness: -self.bottomness,
            topness: -self.topness,
        }
    }
}

impl Sum for QuantumNumbers {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}

impl<'a> Sum<&'a QuantumNumbers> for QuantumNumbers {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Read access to the quantum numbers of quarks and composite states
pub trait QuantumState {
    fn name(&self) -> &str;
    fn title(&self) -> &str;
    fn numbers(&self) -> &QuantumNumbers;

    fn charge(&self) -> QuantumNumber {
        self.numbers().charge
    }

    fn baryon_number(&self) -> QuantumNumber {
        self.numbers().baryon_number
    }

    fn isospin_z(&self) -> QuantumNumber {
        self.numbers().isospin_z
    }

    fn strangeness(&self) -> QuantumNumber {
        self.numbers().strangeness
    }

    fn charm(&self) -> QuantumNumber {
        self.numbers().charm
    }

    fn bottomness(&self) -> QuantumNumber {
        self.numbers().bottomness
    }

    fn topness(&self) -> QuantumNumber {
        self.numbers().topness
    }

    fn hypercharge(&self) -> QuantumNumber {
        self.numbers().hypercharge()
    }
}
