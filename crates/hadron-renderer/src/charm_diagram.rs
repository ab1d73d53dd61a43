//! Three-dimensional isospin–strangeness–charm multiplet diagrams
//!
//! States are placed at (Iz, S, C) inside a box whose floor and walls are
//! gridded by hand, the charm layers of the SU(4) multiplets are drawn as
//! translucent polygons, and the whole scene is projected orthographically.

use glam::{Vec2, Vec3};
use hadron_physics::{CompositeState, QuantumNumber, QuantumState};

use crate::error::{RenderError, Result};
use crate::layout::{coincident_groups, coincident_offsets, linspace, tick_label};
use crate::palette::{Palette, Rgb};
use crate::svg::{Anchor, Stroke, SvgCanvas, TextStyle};
use crate::view::{Bounds3, Margins, View3d, Viewport};
use crate::weight_diagram::Hexagon;

/// Which SU(4) multiplet shape to draw behind the states
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MultipletFamily {
    /// Pseudoscalar or vector meson 16-plet: hexagon with a triangle above and below
    Meson,
    /// Spin-1/2 baryon 20-plet: hexagon at C = 0 under two stacked triangles
    BaryonMixed,
    /// Spin-3/2 baryon 20-plet: pyramid of three triangles
    BaryonSymmetric,
}

impl MultipletFamily {
    pub fn bounds(self) -> Bounds3 {
        let (min, max) = match self {
            Self::Meson => ([-1.0, -1.0, -1.0], [1.0, 1.0, 1.0]),
            Self::BaryonMixed => ([-1.0, -2.0, 0.0], [1.0, 0.0, 2.0]),
            Self::BaryonSymmetric => ([-1.5, -3.0, 0.0], [1.5, 0.0, 3.0]),
        };
        Bounds3::new(Vec3::from_array(min), Vec3::from_array(max))
    }

    /// Number of ticks along Iz, S and C
    fn tick_counts(self) -> [usize; 3] {
        match self {
            Self::Meson | Self::BaryonMixed => [5, 3, 3],
            Self::BaryonSymmetric => [7, 4, 4],
        }
    }

    /// Filled polygons, one per charm layer
    pub fn layers(self) -> Vec<Vec<Vec3>> {
        match self {
            Self::Meson => vec![
                hexagon(Vec2::ZERO, 0.0),
                layer(&[(-0.5, 0.0), (0.0, 1.0), (0.5, 0.0)], 1.0),
                layer(&[(-0.5, 0.0), (0.0, -1.0), (0.5, 0.0)], -1.0),
            ],
            Self::BaryonMixed => vec![
                hexagon(Vec2::new(0.0, -1.0), 0.0),
                layer(&[(0.0, -2.0), (-1.0, 0.0), (1.0, 0.0)], 1.0),
                layer(&[(0.0, -1.0), (-0.5, 0.0), (0.5, 0.0)], 2.0),
            ],
            Self::BaryonSymmetric => vec![
                layer(&[(0.0, -3.0), (-1.5, 0.0), (1.5, 0.0)], 0.0),
                layer(&[(0.0, -2.0), (-1.0, 0.0), (1.0, 0.0)], 1.0),
                layer(&[(0.0, -1.0), (-0.5, 0.0), (0.5, 0.0)], 2.0),
            ],
        }
    }

    /// Edges joining the layers
    pub fn edges(self) -> Vec<Vec<Vec3>> {
        match self {
            Self::Meson => vec![
                path(&[(-0.5, 0.0, 1.0), (-1.0, 0.0, 0.0), (-0.5, 0.0, -1.0)]),
                path(&[(0.5, 0.0, 1.0), (1.0, 0.0, 0.0), (0.5, 0.0, -1.0)]),
                path(&[(0.0, 1.0, 1.0), (-0.5, 1.0, 0.0), (-0.5, 0.0, -1.0)]),
                path(&[(0.0, 1.0, 1.0), (0.5, 1.0, 0.0), (0.5, 0.0, -1.0)]),
                path(&[(-0.5, 0.0, 1.0), (-0.5, -1.0, 0.0), (0.0, -1.0, -1.0)]),
                path(&[(0.5, 0.0, 1.0), (0.5, -1.0, 0.0), (0.0, -1.0, -1.0)]),
            ],
            Self::BaryonMixed => vec![
                path(&[(-0.5, 0.0, 2.0), (-1.0, 0.0, 1.0), (-1.0, -1.0, 0.0)]),
                path(&[(-1.0, 0.0, 1.0), (-0.5, 0.0, 0.0)]),
                path(&[(0.5, 0.0, 2.0), (1.0, 0.0, 1.0), (1.0, -1.0, 0.0)]),
                path(&[(1.0, 0.0, 1.0), (0.5, 0.0, 0.0)]),
                path(&[(0.0, -1.0, 2.0), (0.0, -2.0, 1.0), (-0.5, -2.0, 0.0)]),
                path(&[(0.0, -2.0, 1.0), (0.5, -2.0, 0.0)]),
            ],
            Self::BaryonSymmetric => vec![
                path(&[(0.0, 0.0, 3.0), (0.0, -3.0, 0.0)]),
                path(&[(0.0, 0.0, 3.0), (-1.5, 0.0, 0.0)]),
                path(&[(0.0, 0.0, 3.0), (1.5, 0.0, 0.0)]),
            ],
        }
    }

    fn outlined_layers(self) -> bool {
        self == Self::BaryonSymmetric
    }
}

/// Unit hexagon at charm `z`, without the closing vertex
fn hexagon(center: Vec2, z: f32) -> Vec<Vec3> {
    let outline = Hexagon {
        center,
        radius: 1.0,
    }
    .vertices();
    outline[..6].iter().map(|v| v.extend(z)).collect()
}

fn layer(xy: &[(f32, f32)], z: f32) -> Vec<Vec3> {
    xy.iter().map(|&(x, y)| Vec3::new(x, y, z)).collect()
}

fn path(points: &[(f32, f32, f32)]) -> Vec<Vec3> {
    points.iter().copied().map(Vec3::from).collect()
}

#[derive(Clone, Debug, PartialEq)]
pub struct CharmDiagramOptions {
    pub width: f32,
    pub height: f32,
    pub family: MultipletFamily,
    /// Camera elevation in degrees
    pub elevation: f32,
    /// Camera azimuth in degrees
    pub azimuth: f32,
    /// Separation of coincident states along Iz
    pub marker_spread: f32,
    /// Extra stretch of the separation along S, which is foreshortened
    pub depth_spread: f32,
    /// Print the quark content next to each title
    pub show_content: bool,
    pub palette: Palette,
}

impl CharmDiagramOptions {
    pub fn for_family(family: MultipletFamily) -> Self {
        Self {
            family,
            ..Self::default()
        }
    }
}

impl Default for CharmDiagramOptions {
    fn default() -> Self {
        Self {
            width: 700.0,
            height: 600.0,
            family: MultipletFamily::Meson,
            elevation: 18.0,
            azimuth: -84.0,
            marker_spread: 0.025,
            depth_spread: 5.0,
            show_content: true,
            palette: Palette::default(),
        }
    }
}

const MARGINS: Margins = Margins {
    left: 50.0,
    right: 130.0,
    top: 30.0,
    bottom: 90.0,
};

const TITLE_SIZE: f32 = 14.0;
const CONTENT_SIZE: f32 = 9.0;
/// Line pitch of titles stacked beside a coincident group
const TITLE_PITCH: f32 = TITLE_SIZE + 4.0;
/// Horizontal gap between a coincident group and its title column
const GROUP_GAP: f32 = 12.0;

/// Projects data points straight to pixels
struct Scene {
    view: View3d,
    viewport: Viewport,
}

impl Scene {
    fn new(options: &CharmDiagramOptions) -> Self {
        let bounds = options.family.bounds();
        let view = View3d::new(bounds, options.elevation, options.azimuth);
        let (screen_min, screen_max) = view.screen_bounds();
        let canvas = Vec2::new(options.width, options.height);
        Self {
            view,
            viewport: Viewport::uniform(screen_min, screen_max, canvas, MARGINS),
        }
    }

    fn px(&self, point: Vec3) -> Vec2 {
        self.viewport.to_pixel(self.view.project(point))
    }

    fn line(&self, canvas: &mut SvgCanvas, from: Vec3, to: Vec3, stroke: &Stroke) {
        canvas.line(self.px(from), self.px(to), stroke);
    }
}

pub fn render_charm_diagram(
    states: &[&CompositeState],
    options: &CharmDiagramOptions,
) -> Result<SvgCanvas> {
    if states.is_empty() {
        return Err(RenderError::EmptySelection);
    }

    let family = options.family;
    let bounds = family.bounds();
    let scene = Scene::new(options);
    let palette = &options.palette;
    let mut canvas = SvgCanvas::new(options.width, options.height, palette.background);

    let [nx, ny, nz] = family.tick_counts();
    let ticks = Ticks {
        x: linspace(bounds.min.x, bounds.max.x, nx),
        y: linspace(bounds.min.y, bounds.max.y, ny),
        z: linspace(bounds.min.z, bounds.max.z, nz),
    };

    draw_grid(&mut canvas, &scene, &ticks, palette);
    draw_layers(&mut canvas, &scene, options);

    let positions = marker_positions(states, options);
    for position in &positions {
        canvas.circle(scene.px(*position), 3.5, palette.text, None);
    }
    let labels = label_placements(&scene, states, &positions, options.show_content);
    draw_labels(&mut canvas, states, &labels, palette);
    draw_axes(&mut canvas, &scene, &ticks, palette);

    log::debug!("Charm diagram ({family:?}) with {} states", states.len());
    Ok(canvas)
}

struct Ticks {
    x: Vec<f32>,
    y: Vec<f32>,
    z: Vec<f32>,
}

type StateKey = (QuantumNumber, QuantumNumber, QuantumNumber);

fn state_keys(states: &[&CompositeState]) -> Vec<StateKey> {
    states
        .iter()
        .map(|state| (state.isospin_z(), state.strangeness(), state.charm()))
        .collect()
}

fn state_point(state: &CompositeState) -> Vec3 {
    Vec3::new(
        state.isospin_z().to_f32(),
        state.strangeness().to_f32(),
        state.charm().to_f32(),
    )
}

fn marker_positions(states: &[&CompositeState], options: &CharmDiagramOptions) -> Vec<Vec3> {
    let spread = Vec2::new(
        options.marker_spread,
        options.marker_spread * options.depth_spread,
    );
    let offsets = coincident_offsets(&state_keys(states));

    states
        .iter()
        .zip(offsets)
        .map(|(state, offset)| state_point(state) + (offset * spread).extend(0.0))
        .collect()
}

/// Pixel positions of the text belonging to one state
#[derive(Clone, Copy, Debug, PartialEq)]
struct LabelPlacement {
    title: Vec2,
    anchor: Anchor,
    /// Quark content, left out for coincident states
    content: Option<Vec2>,
}

/// Lone states are labelled beside their marker. States sharing a
/// coordinate get one column of titles next to the group, stacked in order
/// of appearance, and no quark content.
fn label_placements(
    scene: &Scene,
    states: &[&CompositeState],
    positions: &[Vec3],
    show_content: bool,
) -> Vec<LabelPlacement> {
    let groups = coincident_groups(&state_keys(states));

    states
        .iter()
        .zip(positions)
        .zip(groups)
        .map(|((state, position), group)| {
            // labels point away from the Iz = 0 plane
            let (side, anchor) = if state.isospin_z() >= QuantumNumber::ZERO {
                (1.0, Anchor::Start)
            } else {
                (-1.0, Anchor::End)
            };

            if group.is_shared() {
                let center = scene.px(state_point(state));
                let row = group.rank as f32 - (group.count - 1) as f32 / 2.0;
                return LabelPlacement {
                    title: center + Vec2::new(GROUP_GAP * side, row * TITLE_PITCH),
                    anchor,
                    content: None,
                };
            }

            let marker = scene.px(*position);
            LabelPlacement {
                title: marker + Vec2::new(7.0 * side, -8.0),
                anchor,
                content: show_content.then_some(marker + Vec2::new(7.0 * side, 8.0)),
            }
        })
        .collect()
}

fn draw_grid(canvas: &mut SvgCanvas, scene: &Scene, ticks: &Ticks, palette: &Palette) {
    let Bounds3 { min, max } = scene.view.bounds;
    let mut segments = Vec::new();

    for &x in &ticks.x {
        segments.push((Vec3::new(x, max.y, min.z), Vec3::new(x, max.y, max.z)));
        for &z in &ticks.z {
            segments.push((Vec3::new(x, min.y, z), Vec3::new(x, max.y, z)));
        }
    }
    for (i, &y) in ticks.y.iter().enumerate() {
        for &z in &ticks.z {
            segments.push((Vec3::new(min.x, y, z), Vec3::new(max.x, y, z)));
        }
        if i == 0 || i + 1 == ticks.y.len() {
            continue;
        }
        segments.push((Vec3::new(min.x, y, min.z), Vec3::new(min.x, y, max.z)));
        segments.push((Vec3::new(max.x, y, min.z), Vec3::new(max.x, y, max.z)));
    }

    let grid = Stroke::solid(palette.grid, 1.0).with_opacity(0.5);
    for (from, to) in segments {
        scene.line(canvas, from, to, &grid);
    }
}

fn draw_layers(canvas: &mut SvgCanvas, scene: &Scene, options: &CharmDiagramOptions) {
    let family = options.family;
    let palette = &options.palette;
    let mut layers = family.layers();
    // back to front
    let depth = |layer: &Vec<Vec3>| scene.view.depth(centroid(layer));
    layers.sort_by(|a, b| depth(a).total_cmp(&depth(b)));

    let edge = Stroke::solid(Rgb::BLACK, 1.0);
    let outline = family.outlined_layers().then_some(&edge);
    for layer in &layers {
        let points: Vec<Vec2> = layer.iter().map(|p| scene.px(*p)).collect();
        canvas.polygon(&points, palette.layer, palette.layer_opacity, outline);
    }
    for path in family.edges() {
        let points: Vec<Vec2> = path.iter().map(|p| scene.px(*p)).collect();
        canvas.polyline(&points, &edge);
    }
}

fn centroid(points: &[Vec3]) -> Vec3 {
    points.iter().copied().sum::<Vec3>() / points.len().max(1) as f32
}

fn draw_labels(
    canvas: &mut SvgCanvas,
    states: &[&CompositeState],
    labels: &[LabelPlacement],
    palette: &Palette,
) {
    let title = TextStyle::new(palette.text, TITLE_SIZE);
    let content = TextStyle::new(palette.text, CONTENT_SIZE);

    for (state, label) in states.iter().zip(labels) {
        let anchored = title.anchored(label.anchor);
        canvas.text(label.title, state.title(), &anchored);
        if let Some(position) = label.content {
            let anchored = content.anchored(label.anchor);
            canvas.text(position, &state.content(), &anchored);
        }
    }
}

fn draw_axes(canvas: &mut SvgCanvas, scene: &Scene, ticks: &Ticks, palette: &Palette) {
    let Bounds3 { min, max } = scene.view.bounds;
    let axis = Stroke::solid(palette.text, 1.2);
    let tick_text = TextStyle::new(palette.text, 11.0);
    let side_text = tick_text.anchored(Anchor::Start);
    let axis_text = TextStyle::new(palette.text, 13.0);

    let isospin_end = Vec3::new(max.x, min.y, min.z);
    let strangeness_end = Vec3::new(max.x, max.y, min.z);
    let charm_end = max;

    // Iz along the front floor edge
    scene.line(canvas, min, isospin_end, &axis);
    for &x in &ticks.x {
        let base = scene.px(Vec3::new(x, min.y, min.z));
        canvas.line(base, base + Vec2::new(0.0, 5.0), &axis);
        canvas.text(base + Vec2::new(0.0, 16.0), &tick_label(x), &tick_text);
    }
    let middle = scene.px(Vec3::new((min.x + max.x) / 2.0, min.y, min.z));
    canvas.text(middle + Vec2::new(0.0, 40.0), "Isospin, Iz", &axis_text);

    // S along the right floor edge
    scene.line(canvas, isospin_end, strangeness_end, &axis);
    for &y in &ticks.y {
        let base = scene.px(Vec3::new(max.x, y, min.z));
        canvas.line(base, base + Vec2::new(5.0, 0.0), &axis);
        canvas.text(base + Vec2::new(9.0, 0.0), &tick_label(y), &side_text);
    }
    let middle = scene.px(Vec3::new(max.x, (min.y + max.y) / 2.0, min.z));
    canvas.text(
        middle + Vec2::new(45.0, 12.0),
        "Strangeness, S",
        &axis_text.anchored(Anchor::Start),
    );

    // C up the back right edge
    scene.line(canvas, strangeness_end, charm_end, &axis);
    for &z in ticks.z.iter().skip(1) {
        let base = scene.px(Vec3::new(max.x, max.y, z));
        canvas.line(base, base + Vec2::new(5.0, 0.0), &axis);
        canvas.text(base + Vec2::new(9.0, 0.0), &tick_label(z), &side_text);
    }
    let middle = scene.px(Vec3::new(max.x, max.y, (min.z + max.z) / 2.0));
    canvas.text(
        middle + Vec2::new(45.0, 0.0),
        "Charmness, C",
        &axis_text.rotated(-90.0),
    );
}
