//! The standard-model quark catalog with the light and charmed hadrons

use crate::catalog::Catalog;
use crate::constants::{DOWN_TYPE_CHARGE, LIGHT_ISOSPIN, UP_TYPE_CHARGE};
use crate::error::Result;
use crate::quark::Quark;

/// (name, title, quark content)
type StateEntry = (&'static str, &'static str, &'static [&'static str]);

const ANTIQUARKS: [(&str, &str, &str); 6] = [
    ("u", "ubar", "ū"),
    ("d", "dbar", "d̄"),
    ("s", "sbar", "s̄"),
    ("c", "cbar", "c̄"),
    ("b", "bbar", "b̄"),
    ("t", "tbar", "t̄"),
];

const MESONS: [StateEntry; 32] = [
    // light unflavoured
    ("pip", "π⁺", &["u", "dbar"]),
    ("pim", "π⁻", &["ubar", "d"]),
    ("piz", "π⁰", &["u", "ubar"]),
    ("eta", "η", &["d", "dbar"]),
    ("etapr", "η′", &["s", "sbar"]),
    ("rhop", "ρ⁺", &["u", "dbar"]),
    ("rhom", "ρ⁻", &["ubar", "d"]),
    ("rhoz", "ρ⁰", &["u", "ubar"]),
    // strange
    ("Kp", "K⁺", &["u", "sbar"]),
    ("Km", "K⁻", &["ubar", "s"]),
    ("Kz", "K⁰", &["d", "sbar"]),
    ("Kzb", "K̄⁰", &["dbar", "s"]),
    ("omega", "ω", &["d", "dbar"]),
    ("phi", "φ", &["s", "sbar"]),
    ("Kstp", "K*⁺", &["u", "sbar"]),
    ("Kstm", "K*⁻", &["ubar", "s"]),
    ("Kstz", "K*⁰", &["d", "sbar"]),
    ("Kstzb", "K̄*⁰", &["dbar", "s"]),
    // charm
    ("etac", "ηc", &["c", "cbar"]),
    ("Dm", "D⁻", &["cbar", "d"]),
    ("Dp", "D⁺", &["c", "dbar"]),
    ("Dz", "D⁰", &["c", "ubar"]),
    ("Dzb", "D̄⁰", &["cbar", "u"]),
    ("Dsm", "Ds⁻", &["cbar", "s"]),
    ("Dsp", "Ds⁺", &["c", "sbar"]),
    ("jpsi", "J/ψ", &["c", "cbar"]),
    ("Dstm", "D*⁻", &["cbar", "d"]),
    ("Dstp", "D*⁺", &["c", "dbar"]),
    ("Dstz", "D*⁰", &["c", "ubar"]),
    ("Dstzb", "D̄*⁰", &["cbar", "u"]),
    ("Dsstm", "Ds*⁻", &["cbar", "s"]),
    ("Dsstp", "Ds*⁺", &["c", "sbar"]),
];

const BARYONS: [StateEntry; 29] = [
    // unflavoured, spin 1/2
    ("p", "p", &["u", "u", "d"]),
    ("n", "n", &["u", "d", "d"]),
    // unflavoured, spin 3/2
    ("delm", "Δ⁻", &["d", "d", "d"]),
    ("delz", "Δ⁰", &["u", "d", "d"]),
    ("delp", "Δ⁺", &["u", "u", "d"]),
    ("delpp", "Δ⁺⁺", &["u", "u", "u"]),
    // strange, spin 1/2
    ("sigp", "Σ⁺", &["u", "u", "s"]),
    ("sigm", "Σ⁻", &["d", "d", "s"]),
    ("sigz", "Σ⁰", &["u", "d", "s"]),
    ("lbz", "Λ⁰", &["u", "d", "s"]),
    ("xim", "Ξ⁻", &["d", "s", "s"]),
    ("xiz", "Ξ⁰", &["u", "s", "s"]),
    // strange, spin 3/2
    ("sigstp", "Σ*⁺", &["u", "u", "s"]),
    ("sigstm", "Σ*⁻", &["d", "d", "s"]),
    ("sigstz", "Σ*⁰", &["u", "d", "s"]),
    ("xistm", "Ξ*⁻", &["d", "s", "s"]),
    ("xistz", "Ξ*⁰", &["u", "s", "s"]),
    ("Omega", "Ω⁻", &["s", "s", "s"]),
    // charm, spin 1/2
    ("sigcz", "Σc⁰", &["d", "d", "c"]),
    ("sigcp", "Σc⁺", &["u", "d", "c"]),
    ("sigcpp", "Σc⁺⁺", &["u", "u", "c"]),
    ("xicz", "Ξc⁰", &["d", "s", "c"]),
    ("xicp", "Ξc⁺", &["u", "s", "c"]),
    ("lbcp", "Λc⁺", &["u", "d", "c"]),
    ("Omegacz", "Ωc⁰", &["s", "s", "c"]),
    ("Omegaccp", "Ωcc⁺", &["s", "c", "c"]),
    ("xiccp", "Ξcc⁺", &["d", "c", "c"]),
    ("xiccpp", "Ξcc⁺⁺", &["u", "c", "c"]),
    ("Omegaccpp", "Ωccc⁺⁺", &["c", "c", "c"]),
];

impl Catalog {
    /// Six quark flavours, their antiquarks and the hadrons drawn in the
    /// standard multiplet diagrams
    pub fn standard() -> Result<Self> {
        let mut builder = Catalog::builder();

        builder.quark(
            Quark::builder("u", "u")
                .charge(UP_TYPE_CHARGE)
                .isospin_z(LIGHT_ISOSPIN)
                .build()?,
        )?;
        builder.quark(
            Quark::builder("d", "d")
                .charge(DOWN_TYPE_CHARGE)
                .isospin_z(-LIGHT_ISOSPIN)
                .build()?,
        )?;
        builder.quark(
            Quark::builder("s", "s")
                .charge(DOWN_TYPE_CHARGE)
                .strangeness(-1)
                .build()?,
        )?;
        builder.quark(
            Quark::builder("c", "c")
                .charge(UP_TYPE_CHARGE)
                .charm(1)
                .build()?,
        )?;
        builder.quark(
            Quark::builder("b", "b")
                .charge(DOWN_TYPE_CHARGE)
                .bottomness(-1)
                .build()?,
        )?;
        builder.quark(
            Quark::builder("t", "t")
                .charge(UP_TYPE_CHARGE)
                .topness(1)
                .build()?,
        )?;

        for (quark, name, title) in ANTIQUARKS {
            builder.conjugate_quark(quark, name, title)?;
        }
        for (name, title, content) in MESONS {
            builder.meson(name, title, content)?;
        }
        for (name, title, content) in BARYONS {
            builder.baryon(name, title, content)?;
        }

        Ok(builder.build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::composite::HadronKind;
    use crate::quantum::{QuantumNumber, QuantumState};

    #[test]
    fn standard_catalog_is_complete() {
        let catalog = Catalog::standard().unwrap();
        assert_eq!(catalog.quarks().len(), 12);
        assert_eq!(catalog.mesons().len(), 32);
        assert_eq!(catalog.baryons().len(), 29);
        let mesons = catalog.mesons();
        assert!(mesons.iter().all(|m| m.kind() == HadronKind::Meson));
        let baryons = catalog.baryons();
        assert!(baryons.iter().all(|b| b.kind() == HadronKind::Baryon));
    }

    #[test]
    fn heavy_flavours() {
        let catalog = Catalog::standard().unwrap();
        let b = catalog.quark("b").unwrap();
        assert_eq!(b.bottomness(), QuantumNumber::integer(-1));
        assert_eq!(b.hypercharge(), QuantumNumber::thirds(-2));

        let tbar = catalog.quark("tbar").unwrap();
        assert_eq!(tbar.topness(), QuantumNumber::integer(-1));
        assert_eq!(tbar.charge(), QuantumNumber::thirds(-2));

        let omega_ccc = catalog.baryon("Omegaccpp").unwrap();
        assert_eq!(omega_ccc.charge(), QuantumNumber::integer(2));
        assert_eq!(omega_ccc.charm(), QuantumNumber::integer(3));
    }

    #[test]
    fn charmed_mesons() {
        let catalog = Catalog::standard().unwrap();
        let ds = catalog.meson("Dsp").unwrap();
        assert_eq!(ds.charge(), QuantumNumber::ONE);
        assert_eq!(ds.charm(), QuantumNumber::ONE);
        assert_eq!(ds.strangeness(), QuantumNumber::ONE);
        assert_eq!(ds.isospin_z(), QuantumNumber::ZERO);
        assert_eq!(ds.content(), "cs̄");
    }
}
