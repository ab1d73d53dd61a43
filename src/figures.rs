//! The named multiplet figures

use anyhow::{Context, Result};
use glam::Vec2;
use hadron_physics::{Catalog, CompositeState};
use hadron_renderer::{
    render_charm_diagram, render_weight_diagram, CharmDiagramOptions, Hexagon, MultipletFamily,
    SvgCanvas, WeightDiagramOptions,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sector {
    Mesons,
    Baryons,
}

/// Guide shape drawn behind a weight diagram
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WeightOverlay {
    MesonNonet,
    BaryonOctet,
    BaryonDecuplet,
}

impl WeightOverlay {
    fn options(self) -> WeightDiagramOptions {
        let defaults = WeightDiagramOptions::default();
        match self {
            Self::MesonNonet => defaults,
            Self::BaryonOctet => WeightDiagramOptions {
                hexagon: Some(Hexagon {
                    center: Vec2::new(0.0, -1.0),
                    radius: 1.0,
                }),
                ..defaults
            },
            Self::BaryonDecuplet => WeightDiagramOptions {
                hexagon: None,
                outline: vec![
                    Vec2::new(-1.5, 0.0),
                    Vec2::new(1.5, 0.0),
                    Vec2::new(0.0, -3.0),
                    Vec2::new(-1.5, 0.0),
                ],
                ..defaults
            },
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Diagram {
    Weight(WeightOverlay),
    Charm(MultipletFamily),
}

#[derive(Clone, Copy, Debug)]
pub struct Figure {
    pub name: &'static str,
    pub sector: Sector,
    pub members: &'static [&'static str],
    pub diagram: Diagram,
}

pub const FIGURES: [Figure; 8] = [
    Figure {
        name: "ch_mes_s0",
        sector: Sector::Mesons,
        members: &[
            "pip", "pim", "piz", "Kp", "Km", "Kz", "Kzb", "eta", "etapr", "etac", "Dm", "Dp",
            "Dz", "Dzb", "Dsm", "Dsp",
        ],
        diagram: Diagram::Charm(MultipletFamily::Meson),
    },
    Figure {
        name: "ch_mes_s1",
        sector: Sector::Mesons,
        members: &[
            "rhop", "rhom", "rhoz", "Kstp", "Kstm", "Kstz", "Kstzb", "omega", "phi", "jpsi",
            "Dstm", "Dstp", "Dstz", "Dstzb", "Dsstm", "Dsstp",
        ],
        diagram: Diagram::Charm(MultipletFamily::Meson),
    },
    Figure {
        name: "ch_bar_s0",
        sector: Sector::Baryons,
        members: &[
            "p", "n", "sigp", "sigm", "sigz", "lbz", "xim", "xiz", "sigcz", "sigcp", "sigcpp",
            "xicz", "xicp", "lbcp", "Omegacz", "xiccp", "xiccpp", "Omegaccp",
        ],
        diagram: Diagram::Charm(MultipletFamily::BaryonMixed),
    },
    Figure {
        name: "ch_bar_s1",
        sector: Sector::Baryons,
        members: &[
            "delm",
            "delz",
            "delp",
            "delpp",
            "sigstp",
            "sigstm",
            "sigstz",
            "xistm",
            "xistz",
            "Omega",
            "sigcz",
            "sigcp",
            "sigcpp",
            "xicz",
            "xicp",
            "Omegacz",
            "xiccp",
            "xiccpp",
            "Omegaccp",
            "Omegaccpp",
        ],
        diagram: Diagram::Charm(MultipletFamily::BaryonSymmetric),
    },
    Figure {
        name: "st_mes_s0",
        sector: Sector::Mesons,
        members: &[
            "pip", "pim", "piz", "Kp", "Km", "Kz", "Kzb", "eta", "etapr",
        ],
        diagram: Diagram::Weight(WeightOverlay::MesonNonet),
    },
    Figure {
        name: "st_mes_s1",
        sector: Sector::Mesons,
        members: &[
            "rhop", "rhom", "rhoz", "omega", "phi", "Kstp", "Kstm", "Kstz", "Kstzb",
        ],
        diagram: Diagram::Weight(WeightOverlay::MesonNonet),
    },
    Figure {
        name: "st_bar_s0",
        sector: Sector::Baryons,
        members: &["p", "n", "sigp", "sigm", "sigz", "lbz", "xim", "xiz"],
        diagram: Diagram::Weight(WeightOverlay::BaryonOctet),
    },
    Figure {
        name: "st_bar_s1",
        sector: Sector::Baryons,
        members: &[
            "delm", "delz", "delp", "delpp", "sigstm", "sigstz", "sigstp", "xistm", "xistz",
            "Omega",
        ],
        diagram: Diagram::Weight(WeightOverlay::BaryonDecuplet),
    },
];

pub fn find(name: &str) -> Option<&'static Figure> {
    FIGURES.iter().find(|figure| figure.name == name)
}

impl Figure {
    pub fn select<'a>(&self, catalog: &'a Catalog) -> Result<Vec<&'a CompositeState>> {
        let states = match self.sector {
            Sector::Mesons => catalog.select_mesons(self.members),
            Sector::Baryons => catalog.select_baryons(self.members),
        };
        states.with_context(|| format!("Selecting states for {}", self.name))
    }

    pub fn render(&self, catalog: &Catalog) -> Result<SvgCanvas> {
        let states = self.select(catalog)?;
        let canvas = match self.diagram {
            Diagram::Weight(overlay) => render_weight_diagram(&states, &overlay.options()),
            Diagram::Charm(family) => {
                render_charm_diagram(&states, &CharmDiagramOptions::for_family(family))
            }
        };
        canvas.with_context(|| format!("Rendering {}", self.name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn figure_names_are_unique() {
        for (i, figure) in FIGURES.iter().enumerate() {
            let rest = &FIGURES[i + 1..];
            assert!(rest.iter().all(|other| other.name != figure.name));
        }
        assert_eq!(find("st_bar_s1").map(|f| f.members.len()), Some(10));
        assert!(find("st_bar_s2").is_none());
    }

    #[test]
    fn every_member_is_in_the_standard_catalog() {
        let catalog = Catalog::standard().unwrap();
        for figure in &FIGURES {
            let states = figure.select(&catalog).unwrap();
            assert_eq!(states.len(), figure.members.len(), "{}", figure.name);
        }
    }

    #[test]
    fn every_figure_renders_one_marker_per_member() {
        let catalog = Catalog::standard().unwrap();
        for figure in &FIGURES {
            let svg = figure.render(&catalog).unwrap().to_svg();
            assert_eq!(
                svg.matches("<circle").count(),
                figure.members.len(),
                "{}",
                figure.name
            );
        }
    }

    #[test]
    fn decuplet_draws_its_triangle_instead_of_a_hexagon() {
        let options = WeightOverlay::BaryonDecuplet.options();
        assert!(options.hexagon.is_none());
        assert_eq!(options.outline.first(), options.outline.last());
        let octet = WeightOverlay::BaryonOctet.options();
        let center = octet.hexagon.map(|h| h.center);
        assert_eq!(center, Some(Vec2::new(0.0, -1.0)));
    }

    #[test]
    fn wrong_sector_is_reported() {
        let figure = Figure {
            name: "mixed",
            sector: Sector::Mesons,
            members: &["pip", "p"],
            diagram: Diagram::Weight(WeightOverlay::MesonNonet),
        };
        let catalog = Catalog::standard().unwrap();
        let error = figure.select(&catalog).unwrap_err();
        assert_eq!(error.to_string(), "Selecting states for mixed");
    }
}
