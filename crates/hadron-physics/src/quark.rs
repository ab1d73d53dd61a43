//! Quarks and antiquarks

use std::fmt;

use crate::constants::{ANTI_PREFIX, DEFAULT_BARYON_NUMBER};
use crate::error::Result;
use crate::quantum::{QuantumNumber, QuantumNumbers, QuantumState};

/// An elementary constituent carrying additive quantum numbers
///
/// A `Quark` can only be obtained through [`Quark::new`], [`QuarkBuilder::build`]
/// or [`Quark::conjugate`], all of which enforce the Gell-Mann–Nishijima
/// relation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Quark {
    name: String,
    title: String,
    numbers: QuantumNumbers,
}

impl Quark {
    pub fn new(
        name: impl Into<String>,
        title: impl Into<String>,
        numbers: QuantumNumbers,
    ) -> Result<Self> {
        let name = name.into();
        numbers.validate(&name)?;
        Ok(Self {
            name,
            title: title.into(),
            numbers,
        })
    }

    /// Start a quark with B = 1/3 and every other quantum number zero
    pub fn builder(name: impl Into<String>, title: impl Into<String>) -> QuarkBuilder {
        QuarkBuilder {
            name: name.into(),
            title: title.into(),
            numbers: QuantumNumbers {
                baryon_number: DEFAULT_BARYON_NUMBER,
                ..Default::default()
            },
        }
    }

    /// The antiquark: every quantum number negated
    ///
    /// The name defaults to `anti-<name>` and the title to an empty string.
    pub fn conjugate(&self, name: Option<&str>, title: Option<&str>) -> Result<Self> {
        let name = match name {
            Some(name) => name.to_string(),
            None => format!("{ANTI_PREFIX}{}", self.name),
        };
        Self::new(name, title.unwrap_or_default(), -self.numbers)
    }
}

impl QuantumState for Quark {
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

impl fmt::Display for Quark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "quark({},Iz={},S={},C={},Bt={},T={})",
            self.name,
            self.numbers.isospin_z,
            self.numbers.strangeness,
            self.numbers.charm,
            self.numbers.bottomness,
            self.numbers.topness
        )
    }
}

/// Builder for [`Quark`] mirroring the defaulted constructor arguments
#[derive(Clone, Debug)]
pub struct QuarkBuilder {
    name: String,
    title: String,
    numbers: QuantumNumbers,
}

impl QuarkBuilder {
    pub fn charge(mut self, value: impl Into<QuantumNumber>) -> Self {
        self.numbers.charge = value.into();
        self
    }

    pub fn baryon_number(mut self, value: impl Into<QuantumNumber>) -> Self {
        self.numbers.baryon_number = value.into();
        self
    }

    pub fn isospin_z(mut self, value: impl Into<QuantumNumber>) -> Self {
        self.numbers.isospin_z = value.into();
        self
    }

    pub fn strangeness(mut self, value: impl Into<QuantumNumber>) -> Self {
        self.numbers.strangeness = value.into();
        self
    }

    pub fn charm(mut self, value: impl Into<QuantumNumber>) -> Self {
        self.numbers.charm = value.into();
        self
    }

    pub fn bottomness(mut self, value: impl Into<QuantumNumber>) -> Self {
        self.numbers.bottomness = value.into();
        self
    }

    pub fn topness(mut self, value: impl Into<QuantumNumber>) -> Self {
        self.numbers.topness = value.into();
        self
    }

    pub fn build(self) -> Result<Quark> {
        Quark::new(self.name, self.title, self.numbers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PhysicsError;

    fn up() -> Quark {
        Quark::builder("u", "u")
            .charge(QuantumNumber::thirds(2))
            .isospin_z(QuantumNumber::halves(1))
            .build()
            .unwrap()
    }

    #[test]
    fn up_and_down_quarks_are_consistent() {
        let u = up();
        assert_eq!(u.hypercharge(), QuantumNumber::thirds(1));
        assert_eq!(u.baryon_number(), DEFAULT_BARYON_NUMBER);

        let d = Quark::builder("d", "d")
            .charge(QuantumNumber::thirds(-1))
            .isospin_z(QuantumNumber::halves(-1))
            .build()
            .unwrap();
        assert_eq!(d.hypercharge(), QuantumNumber::thirds(1));
    }

    #[test]
    fn inconsistent_hypercharge_is_rejected() {
        let result = Quark::builder("x", "x")
            .charge(1)
            .baryon_number(0)
            .isospin_z(0)
            .build();
        assert!(matches!(
            result,
            Err(PhysicsError::InvalidQuantumNumbers { ref name, .. }) if name == "x"
        ));
    }

    #[test]
    fn conjugate_negates_and_names() {
        let u = up();
        let anti = u.conjugate(None, None).unwrap();
        assert_eq!(anti.name(), "anti-u");
        assert_eq!(anti.title(), "");
        assert_eq!(*anti.numbers(), -*u.numbers());
        assert_eq!(anti.hypercharge(), QuantumNumber::thirds(-1));

        let ubar = u.conjugate(Some("ubar"), Some("ū")).unwrap();
        assert_eq!(ubar.name(), "ubar");
        assert_eq!(ubar.title(), "ū");
    }

    #[test]
    fn display_lists_flavour_numbers() {
        let strange = Quark::builder("s", "s")
            .charge(QuantumNumber::thirds(-1))
            .strangeness(-1)
            .build()
            .unwrap();
        assert_eq!(strange.to_string(), "quark(s,Iz=0,S=-1,C=0,Bt=0,T=0)");
    }
}
