//! Weight diagrams in the isospin–strangeness plane

use glam::Vec2;
use hadron_physics::{CompositeState, QuantumState};

use crate::error::{RenderError, Result};
use crate::layout::{coincident_offsets, linspace, tick_label};
use crate::palette::Palette;
use crate::svg::{Anchor, Stroke, SvgCanvas, TextStyle};
use crate::view::{Margins, Viewport};

/// Regular multiplet hexagon in (Iz, S) units
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hexagon {
    pub center: Vec2,
    pub radius: f32,
}

impl Hexagon {
    /// Closed outline, first vertex repeated at the end
    pub fn vertices(&self) -> [Vec2; 7] {
        let r = self.radius;
        [
            Vec2::new(-r, 0.0),
            Vec2::new(-r / 2.0, r),
            Vec2::new(r / 2.0, r),
            Vec2::new(r, 0.0),
            Vec2::new(r / 2.0, -r),
            Vec2::new(-r / 2.0, -r),
            Vec2::new(-r, 0.0),
        ]
        .map(|vertex| vertex + self.center)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct WeightDiagramOptions {
    pub width: f32,
    pub height: f32,
    /// Marker radius in isospin units
    pub marker_radius: f32,
    /// Space between the outermost states and the frame, in data units
    pub padding: f32,
    pub hexagon: Option<Hexagon>,
    /// Additional outline such as the decuplet triangle
    pub outline: Vec<Vec2>,
    pub palette: Palette,
}

impl Default for WeightDiagramOptions {
    fn default() -> Self {
        Self {
            width: 600.0,
            height: 600.0,
            marker_radius: 0.15,
            padding: 0.2,
            hexagon: Some(Hexagon {
                center: Vec2::ZERO,
                radius: 1.0,
            }),
            outline: Vec::new(),
            palette: Palette::default(),
        }
    }
}

const CHARGE_LINES: [f32; 5] = [-2.0, -1.0, 0.0, 1.0, 2.0];
const STRANGENESS_LINES: [f32; 5] = [-2.0, -1.0, 0.0, 1.0, 2.0];
const MARGINS: Margins = Margins {
    left: 80.0,
    right: 20.0,
    top: 20.0,
    bottom: 70.0,
};

/// Draw `states` at (Iz, S) with multiplet guides
///
/// Charge lines follow Q = Iz + (B + S) / 2 for the baryon number of the
/// first state, so meson and baryon multiplets both get correct diagonals.
pub fn render_weight_diagram(
    states: &[&CompositeState],
    options: &WeightDiagramOptions,
) -> Result<SvgCanvas> {
    let first = states.first().ok_or(RenderError::EmptySelection)?;
    let baryon_number = first.baryon_number().to_f32();

    let positions: Vec<Vec2> = states
        .iter()
        .map(|state| Vec2::new(state.isospin_z().to_f32(), state.strangeness().to_f32()))
        .collect();
    let mut lo = Vec2::splat(f32::MAX);
    let mut hi = Vec2::splat(f32::MIN);
    for position in &positions {
        lo = lo.min(*position);
        hi = hi.max(*position);
    }
    let x_ticks = linspace(lo.x, hi.x, 5);
    let (box_min, box_max) = (lo - options.padding, hi + options.padding);

    let palette = &options.palette;
    let mut canvas = SvgCanvas::new(options.width, options.height, palette.background);
    let viewport = Viewport::new(box_min, box_max, canvas.size(), MARGINS);
    let guide = Stroke::dashed(palette.guide, 1.0);

    for s in STRANGENESS_LINES {
        if s >= box_min.y && s <= box_max.y {
            canvas.line(
                viewport.to_pixel(Vec2::new(box_min.x, s)),
                viewport.to_pixel(Vec2::new(box_max.x, s)),
                &guide,
            );
        }
    }

    for q in CHARGE_LINES {
        if let Some((from, to)) = charge_line(q, baryon_number, box_min, box_max) {
            canvas.line(viewport.to_pixel(from), viewport.to_pixel(to), &guide);
        }
    }

    let outline = Stroke::solid(palette.outline, 3.0);
    let project = |v: &Vec2| viewport.to_pixel(*v);
    if let Some(hexagon) = &options.hexagon {
        let points: Vec<Vec2> = hexagon.vertices().iter().map(&project).collect();
        canvas.polyline(&points, &outline);
    }
    if !options.outline.is_empty() {
        let points: Vec<Vec2> = options.outline.iter().map(&project).collect();
        canvas.polyline(&points, &outline);
    }

    let keys: Vec<_> = states
        .iter()
        .map(|state| (state.isospin_z(), state.strangeness()))
        .collect();
    let offsets = coincident_offsets(&keys);
    let radius_px = options.marker_radius * viewport.scale().x;
    let fill = palette.marker_fill;
    let marker_edge = Stroke::solid(palette.marker_edge, 3.0);
    let label = TextStyle::new(palette.text, 16.0);

    for ((state, position), offset) in states.iter().zip(&positions).zip(&offsets) {
        let center = viewport.to_pixel(*position + *offset * options.marker_radius);
        canvas.circle(center, radius_px, fill, Some(&marker_edge));
        if !state.title().is_empty() {
            canvas.text(center, state.title(), &label);
        }
    }

    draw_axes(&mut canvas, &viewport, &x_ticks, lo.y, hi.y, palette);
    log::debug!("Weight diagram with {} states", states.len());
    Ok(canvas)
}

/// Segment of the constant-charge line S = 2(Q - Iz) - B inside the box
fn charge_line(charge: f32, baryon_number: f32, min: Vec2, max: Vec2) -> Option<(Vec2, Vec2)> {
    let strangeness = |isospin: f32| 2.0 * (charge - isospin) - baryon_number;
    let isospin = |strangeness: f32| charge - (strangeness + baryon_number) / 2.0;

    let start = min.x.max(isospin(max.y));
    let end = max.x.min(isospin(min.y));
    if start >= end {
        return None;
    }
    let from = Vec2::new(start, strangeness(start));
    let to = Vec2::new(end, strangeness(end));
    Some((from, to))
}

fn draw_axes(
    canvas: &mut SvgCanvas,
    viewport: &Viewport,
    x_ticks: &[f32],
    s_min: f32,
    s_max: f32,
    palette: &Palette,
) {
    let (min, max) = (viewport.data_min(), viewport.data_max());
    let frame = Stroke::solid(palette.text, 1.5);
    let corners = [
        Vec2::new(min.x, min.y),
        Vec2::new(max.x, min.y),
        Vec2::new(max.x, max.y),
        Vec2::new(min.x, max.y),
        Vec2::new(min.x, min.y),
    ];
    let points: Vec<Vec2> = corners.iter().map(|c| viewport.to_pixel(*c)).collect();
    canvas.polyline(&points, &frame);

    let tick_text = TextStyle::new(palette.text, 14.0);
    for x in x_ticks {
        let base = viewport.to_pixel(Vec2::new(*x, min.y));
        canvas.line(base, base + Vec2::new(0.0, 6.0), &frame);
        canvas.text(base + Vec2::new(0.0, 20.0), &tick_label(*x), &tick_text);
    }

    let mut s = s_min.ceil();
    while s <= s_max.floor() {
        let base = viewport.to_pixel(Vec2::new(min.x, s));
        canvas.line(base, base - Vec2::new(6.0, 0.0), &frame);
        canvas.text(
            base - Vec2::new(10.0, 0.0),
            &tick_label(s),
            &tick_text.anchored(Anchor::End),
        );
        s += 1.0;
    }

    let bottom = viewport.to_pixel(Vec2::new((min.x + max.x) / 2.0, min.y));
    canvas.text(bottom + Vec2::new(0.0, 48.0), "Isospin, Iz", &tick_text);
    let left = viewport.to_pixel(Vec2::new(min.x, (min.y + max.y) / 2.0));
    canvas.text(
        left - Vec2::new(55.0, 0.0),
        "Strangeness, S",
        &tick_text.rotated(-90.0),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use hadron_physics::Catalog;

    #[test]
    fn meson_charge_lines_pass_through_pions() {
        let (min, max) = (Vec2::splat(-1.2), Vec2::splat(1.2));
        let (from, to) = charge_line(1.0, 0.0, min, max).unwrap();
        // Q = 1 runs through pi+ (1, 0) and K+ (1/2, 1)
        let direction = (to - from).normalize();
        let expected = (Vec2::new(0.5, 1.0) - Vec2::new(1.0, 0.0)).normalize();
        assert!((direction.dot(expected).abs() - 1.0).abs() < 1e-5);
        let along = Vec2::new(1.0, 0.0) - from;
        assert!(along.perp_dot(direction).abs() < 1e-5);
    }

    #[test]
    fn charge_lines_outside_the_box_are_skipped() {
        let (min, max) = (Vec2::splat(-1.2), Vec2::splat(1.2));
        assert!(charge_line(-2.0, 0.0, min, max).is_none());
    }

    #[test]
    fn hexagon_is_closed() {
        let hexagon = Hexagon {
            center: Vec2::new(0.0, -1.0),
            radius: 1.0,
        };
        let vertices = hexagon.vertices();
        assert_eq!(vertices[0], vertices[6]);
        assert_eq!(vertices[3], Vec2::new(1.0, -1.0));
    }

    #[test]
    fn meson_nonet_draws_every_state() {
        let catalog = Catalog::standard().unwrap();
        let nonet = [
            "pip", "pim", "piz", "Kp", "Km", "Kz", "Kzb", "eta", "etapr",
        ];
        let states = catalog.select_mesons(&nonet).unwrap();
        let options = WeightDiagramOptions::default();
        let canvas = render_weight_diagram(&states, &options).unwrap();
        let svg = canvas.to_svg();
        assert_eq!(svg.matches("<circle").count(), 9);
        assert!(svg.contains(">π⁺</text>"));
        assert!(svg.contains(">Strangeness, S</text>"));
    }

    #[test]
    fn empty_selection_is_an_error() {
        let result = render_weight_diagram(&[], &WeightDiagramOptions::default());
        assert!(matches!(result, Err(RenderError::EmptySelection)));
    }
}
