//! Hadron multiplets
//!
//! Builds the quark model catalog, prints the quark, meson and baryon tables
//! and draws the strange and charmed multiplet diagrams as SVG.

mod figures;
mod report;

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use figures::{Figure, FIGURES};
use hadron_physics::Catalog;

/// Print hadron quantum number tables and draw multiplet diagrams.
#[derive(Parser)]
#[command(name = "hadrons", version)]
struct Args {
    /// Directory for the SVG figures
    #[arg(long, default_value = "figures")]
    out: PathBuf,

    /// Skip printing the tables
    #[arg(long)]
    no_tables: bool,

    /// Skip drawing the figures
    #[arg(long)]
    no_diagrams: bool,

    /// Only draw the named figure (repeatable)
    #[arg(long = "figure", value_name = "NAME")]
    figures: Vec<String>,
}

impl Args {
    fn selected_figures(&self) -> Result<Vec<&'static Figure>> {
        if self.figures.is_empty() {
            return Ok(FIGURES.iter().collect());
        }
        self.figures
            .iter()
            .map(|name| match figures::find(name) {
                Some(figure) => Ok(figure),
                None => {
                    let known: Vec<&str> = FIGURES.iter().map(|figure| figure.name).collect();
                    bail!(
                        "Unknown figure '{name}' (expected one of {})",
                        known.join(", ")
                    )
                }
            })
            .collect()
    }
}

fn main() -> Result<()> {
    // Initialize logger (RUST_LOG=debug for per-state output)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let selected = args.selected_figures()?;

    let catalog = Catalog::standard().context("Building the standard catalog")?;

    if !args.no_tables {
        println!("{}", report::quark_table(catalog.quarks()));
        println!("{}", report::state_table("Mesons", catalog.mesons()));
        println!("{}", report::state_table("Baryons", catalog.baryons()));
    }

    if args.no_diagrams {
        return Ok(());
    }

    fs::create_dir_all(&args.out)
        .with_context(|| format!("Creating output directory {}", args.out.display()))?;
    for figure in &selected {
        let path = args.out.join(format!("{}.svg", figure.name));
        figure.render(&catalog)?.save(&path)?;
    }
    log::info!("{} figures in {}", selected.len(), args.out.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_figures_by_default() {
        let args = Args::parse_from(["hadrons"]);
        assert_eq!(args.out, PathBuf::from("figures"));
        assert_eq!(args.selected_figures().unwrap().len(), 8);
    }

    #[test]
    fn figure_flag_restricts_and_keeps_order() {
        let args = Args::parse_from([
            "hadrons",
            "--figure",
            "st_bar_s1",
            "--figure",
            "ch_mes_s0",
            "--no-tables",
        ]);
        assert!(args.no_tables);
        let names: Vec<&str> = args
            .selected_figures()
            .unwrap()
            .iter()
            .map(|figure| figure.name)
            .collect();
        assert_eq!(names, ["st_bar_s1", "ch_mes_s0"]);
    }

    #[test]
    fn unknown_figure_is_rejected() {
        let args = Args::parse_from(["hadrons", "--figure", "nope"]);
        let error = args.selected_figures().unwrap_err();
        assert!(error.to_string().starts_with("Unknown figure 'nope'"));
    }
}
