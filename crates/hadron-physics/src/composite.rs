//! Composite states (mesons and baryons) built from shared quarks

use std::fmt;
use std::sync::Arc;

use crate::constants::ANTI_PREFIX;
use crate::error::{PhysicsError, Result};
use crate::quantum::{QuantumNumber, QuantumNumbers, QuantumState};
use crate::quark::Quark;

/// Classification of a composite state by its baryon number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HadronKind {
    Meson,
    Baryon,
    AntiBaryon,
    Exotic,
}

/// A named particle whose quantum numbers are the sums of its constituents'
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompositeState {
    name: String,
    title: String,
    constituents: Vec<Arc<Quark>>,
    numbers: QuantumNumbers,
}

impl CompositeState {
    /// Sum the constituents and check the Gell-Mann–Nishijima relation
    ///
    /// Constituent order is kept for display and does not affect the sums.
    pub fn new(
        name: impl Into<String>,
        title: impl Into<String>,
        constituents: Vec<Arc<Quark>>,
    ) -> Result<Self> {
        let name = name.into();
        if constituents.is_empty() {
            return Err(PhysicsError::InvalidComposition { name });
        }

        let numbers: QuantumNumbers = constituents.iter().map(|quark| *quark.numbers()).sum();
        numbers.validate(&name)?;

        Ok(Self {
            name,
            title: title.into(),
            constituents,
            numbers,
        })
    }

    /// The anti-state, built from freshly conjugated constituents
    pub fn conjugate(&self, name: Option<&str>, title: Option<&str>) -> Result<Self> {
        let constituents = self
            .constituents
            .iter()
            .map(|quark| quark.conjugate(None, None).map(Arc::new))
            .collect::<Result<Vec<_>>>()?;

        let name = match name {
            Some(name) => name.to_string(),
            None => format!("{ANTI_PREFIX}{}", self.name),
        };
        Self::new(name, title.unwrap_or_default(), constituents)
    }

    pub fn constituents(&self) -> &[Arc<Quark>] {
        &self.constituents
    }

    pub fn constituent_names(&self) -> impl Iterator<Item = &str> {
        self.constituents.iter().map(|quark| quark.name())
    }

    /// Quark content label, e.g. `uud` for the proton
    pub fn content(&self) -> String {
        self.constituents.iter().map(|q| q.title()).collect()
    }

    pub fn kind(&self) -> HadronKind {
        match self.numbers.baryon_number {
            b if b.is_zero() => HadronKind::Meson,
            b if b == QuantumNumber::ONE => HadronKind::Baryon,
            b if b == -QuantumNumber::ONE => HadronKind::AntiBaryon,
            _ => HadronKind::Exotic,
        }
    }
}

impl QuantumState for CompositeState {
    fn name(&self) -> &str {
        &self.name
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn numbers(&self) -> &QuantumNumbers {
        &self.numbers
    }
}

impl fmt::Display for CompositeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let content: Vec<&str> = self.constituent_names().collect();
        write!(
            f,
            "{}({}) Iz={},S={},C={},B={}",
            self.name,
            content.join(","),
            self.numbers.isospin_z,
            self.numbers.strangeness,
            self.numbers.charm,
            self.numbers.baryon_number
        )
    }
}
