//! Immutable registry of quarks, mesons and baryons
//!
//! A [`Catalog`] is assembled once through [`CatalogBuilder`] and then only
//! read. Consumers such as reports and diagrams receive it by reference.

use std::sync::Arc;

use crate::composite::CompositeState;
use crate::error::{PhysicsError, Result};
use crate::quantum::QuantumState;
use crate::quark::Quark;

/// Validated, ordered collection of every particle known to the program
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    quarks: Vec<Arc<Quark>>,
    mesons: Vec<CompositeState>,
    baryons: Vec<CompositeState>,
}

impl Catalog {
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::default()
    }

    pub fn quarks(&self) -> &[Arc<Quark>] {
        &self.quarks
    }

    pub fn mesons(&self) -> &[CompositeState] {
        &self.mesons
    }

    pub fn baryons(&self) -> &[CompositeState] {
        &self.baryons
    }

    pub fn quark(&self, name: &str) -> Option<&Arc<Quark>> {
        self.quarks.iter().find(|quark| quark.name() == name)
    }

    pub fn meson(&self, name: &str) -> Option<&CompositeState> {
        self.mesons.iter().find(|state| state.name() == name)
    }

    pub fn baryon(&self, name: &str) -> Option<&CompositeState> {
        self.baryons.iter().find(|state| state.name() == name)
    }

    /// Resolve a list of meson names, keeping the requested order
    pub fn select_mesons(&self, names: &[&str]) -> Result<Vec<&CompositeState>> {
        select(&self.mesons, names)
    }

    /// Resolve a list of baryon names, keeping the requested order
    pub fn select_baryons(&self, names: &[&str]) -> Result<Vec<&CompositeState>> {
        select(&self.baryons, names)
    }
}

fn select<'a>(states: &'a [CompositeState], names: &[&str]) -> Result<Vec<&'a CompositeState>> {
    names
        .iter()
        .map(|name| {
            states
                .iter()
                .find(|state| state.name() == *name)
                .ok_or_else(|| PhysicsError::UnknownParticle(name.to_string()))
        })
        .collect()
}

/// Incremental, validating construction of a [`Catalog`]
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    catalog: Catalog,
}

impl CatalogBuilder {
    /// Register a quark and return the shared handle states will reference
    pub fn quark(&mut self, quark: Quark) -> Result<Arc<Quark>> {
        if self.catalog.quark(quark.name()).is_some() {
            return Err(PhysicsError::DuplicateName(quark.name().to_string()));
        }
        log::debug!("Registered {quark}");
        let quark = Arc::new(quark);
        self.catalog.quarks.push(Arc::clone(&quark));
        Ok(quark)
    }

    /// Register the antiquark of an already registered quark
    pub fn conjugate_quark(&mut self, of: &str, name: &str, title: &str) -> Result<Arc<Quark>> {
        let anti = self.lookup(of)?.conjugate(Some(name), Some(title))?;
        self.quark(anti)
    }

    /// Build and register a meson from registered quark names
    pub fn meson(&mut self, name: &str, title: &str, quarks: &[&str]) -> Result<&CompositeState> {
        let state = self.compose(name, title, quarks)?;
        push_unique(&mut self.catalog.mesons, state)
    }

    /// Build and register a baryon from registered quark names
    pub fn baryon(&mut self, name: &str, title: &str, quarks: &[&str]) -> Result<&CompositeState> {
        let state = self.compose(name, title, quarks)?;
        push_unique(&mut self.catalog.baryons, state)
    }

    pub fn build(self) -> Catalog {
        log::info!(
            "Catalog ready: {} quarks, {} mesons, {} baryons",
            self.catalog.quarks.len(),
            self.catalog.mesons.len(),
            self.catalog.baryons.len()
        );
        self.catalog
    }

    fn lookup(&self, name: &str) -> Result<Arc<Quark>> {
        self.catalog
            .quark(name)
            .cloned()
            .ok_or_else(|| PhysicsError::UnknownParticle(name.to_string()))
    }

    fn compose(&self, name: &str, title: &str, content: &[&str]) -> Result<CompositeState> {
        let constituents = content
            .iter()
            .map(|quark| self.lookup(quark))
            .collect::<Result<Vec<_>>>()?;
        CompositeState::new(name, title, constituents)
    }
}

fn push_unique(list: &mut Vec<CompositeState>, state: CompositeState) -> Result<&CompositeState> {
    let name = state.name();
    if list.iter().any(|existing| existing.name() == name) {
        return Err(PhysicsError::DuplicateName(name.to_string()));
    }
    log::debug!("Registered {state}");
    list.push(state);
    Ok(&list[list.len() - 1])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quantum::QuantumNumber;

    fn light_quarks(builder: &mut CatalogBuilder) {
        builder
            .quark(
                Quark::builder("u", "u")
                    .charge(QuantumNumber::thirds(2))
                    .isospin_z(QuantumNumber::halves(1))
                    .build()
                    .unwrap(),
            )
            .unwrap();
        builder
            .quark(
                Quark::builder("d", "d")
                    .charge(QuantumNumber::thirds(-1))
                    .isospin_z(QuantumNumber::halves(-1))
                    .build()
                    .unwrap(),
            )
            .unwrap();
        builder.conjugate_quark("d", "dbar", "d̄").unwrap();
    }

    #[test]
    fn states_reference_registered_quarks() {
        let mut builder = Catalog::builder();
        light_quarks(&mut builder);
        builder.meson("pip", "π⁺", &["u", "dbar"]).unwrap();
        builder.baryon("p", "p", &["u", "u", "d"]).unwrap();
        let catalog = builder.build();

        let u = catalog.quark("u").unwrap();
        let p = catalog.baryon("p").unwrap();
        assert!(Arc::ptr_eq(&p.constituents()[0], u));
        let pip = catalog.meson("pip").unwrap();
        assert_eq!(pip.charge(), QuantumNumber::ONE);
        assert_eq!(catalog.quark("dbar").unwrap().title(), "d̄");
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let mut builder = Catalog::builder();
        light_quarks(&mut builder);
        builder.meson("pip", "π⁺", &["u", "dbar"]).unwrap();

        assert_eq!(
            builder.meson("pip", "π⁺", &["u", "dbar"]).unwrap_err(),
            PhysicsError::DuplicateName("pip".to_string())
        );
        assert_eq!(
            builder.conjugate_quark("d", "dbar", "").unwrap_err(),
            PhysicsError::DuplicateName("dbar".to_string())
        );
    }

    #[test]
    fn unknown_constituents_and_selections_fail() {
        let mut builder = Catalog::builder();
        light_quarks(&mut builder);
        assert_eq!(
            builder.meson("Kp", "K⁺", &["u", "sbar"]).unwrap_err(),
            PhysicsError::UnknownParticle("sbar".to_string())
        );

        builder.meson("pip", "π⁺", &["u", "dbar"]).unwrap();
        let catalog = builder.build();
        assert!(catalog.select_mesons(&["pip"]).is_ok());
        assert_eq!(
            catalog.select_mesons(&["pip", "pim"]).unwrap_err(),
            PhysicsError::UnknownParticle("pim".to_string())
        );
    }

    #[test]
    fn empty_meson_is_an_invalid_composition() {
        let mut builder = Catalog::builder();
        assert_eq!(
            builder.meson("void", "", &[]).unwrap_err(),
            PhysicsError::InvalidComposition {
                name: "void".to_string(),
            }
        );
    }
}
