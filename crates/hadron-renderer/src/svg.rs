//! Minimal SVG document builder
//!
//! Elements are appended in paint order: later elements are drawn on top.
//! All coordinates are pixels with the origin at the top-left corner.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use glam::Vec2;

use crate::error::{RenderError, Result};
use crate::palette::Rgb;

const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";
const FONT_FAMILY: &str = "DejaVu Sans, Helvetica, sans-serif";

/// Line appearance
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub color: Rgb,
    pub width: f32,
    /// Dash and gap length
    pub dash: Option<(f32, f32)>,
    pub opacity: f32,
}

impl Stroke {
    pub const fn solid(color: Rgb, width: f32) -> Self {
        Self {
            color,
            width,
            dash: None,
            opacity: 1.0,
        }
    }

    pub const fn dashed(color: Rgb, width: f32) -> Self {
        Self {
            color,
            width,
            dash: Some((6.0, 4.0)),
            opacity: 1.0,
        }
    }

    pub const fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    fn attributes(&self) -> String {
        let mut attrs = format!(
            r#"stroke="{}" stroke-width="{}""#,
            self.color,
            fmt_num(self.width)
        );
        if let Some((dash, gap)) = self.dash {
            let _ = write!(
                attrs,
                r#" stroke-dasharray="{} {}""#,
                fmt_num(dash),
                fmt_num(gap)
            );
        }
        if self.opacity < 1.0 {
            let opacity = fmt_num(self.opacity);
            let _ = write!(attrs, r#" stroke-opacity="{opacity}""#);
        }
        attrs
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    Start,
    Middle,
    End,
}

impl Anchor {
    fn as_str(self) -> &'static str {
        match self {
            Anchor::Start => "start",
            Anchor::Middle => "middle",
            Anchor::End => "end",
        }
    }
}

/// Text appearance; text is vertically centred on its position
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    pub color: Rgb,
    pub size: f32,
    pub anchor: Anchor,
    /// Clockwise rotation in degrees around the text position
    pub rotation: f32,
}

impl TextStyle {
    pub const fn new(color: Rgb, size: f32) -> Self {
        Self {
            color,
            size,
            anchor: Anchor::Middle,
            rotation: 0.0,
        }
    }

    pub const fn anchored(mut self, anchor: Anchor) -> Self {
        self.anchor = anchor;
        self
    }

    pub const fn rotated(mut self, degrees: f32) -> Self {
        self.rotation = degrees;
        self
    }
}

/// An SVG document under construction
#[derive(Clone, Debug)]
pub struct SvgCanvas {
    size: Vec2,
    elements: Vec<String>,
}

impl SvgCanvas {
    pub fn new(width: f32, height: f32, background: Rgb) -> Self {
        let rect = format!(r#"<rect width="100%" height="100%" fill="{background}"/>"#);
        Self {
            size: Vec2::new(width, height),
            elements: vec![rect],
        }
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    /// Number of drawn elements, background included
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    pub fn line(&mut self, from: Vec2, to: Vec2, stroke: &Stroke) {
        self.elements.push(format!(
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}" {} stroke-linecap="round"/>"#,
            fmt_num(from.x),
            fmt_num(from.y),
            fmt_num(to.x),
            fmt_num(to.y),
            stroke.attributes()
        ));
    }

    pub fn polyline(&mut self, points: &[Vec2], stroke: &Stroke) {
        if points.len() < 2 {
            return;
        }
        self.elements.push(format!(
            r#"<polyline points="{}" fill="none" {} stroke-linejoin="round"/>"#,
            fmt_points(points),
            stroke.attributes()
        ));
    }

    /// Closed, filled shape with an optional outline
    pub fn polygon(
        &mut self,
        points: &[Vec2],
        fill: Rgb,
        fill_opacity: f32,
        stroke: Option<&Stroke>,
    ) {
        if points.len() < 3 {
            return;
        }
        let outline = match stroke {
            Some(stroke) => stroke.attributes(),
            None => r#"stroke="none""#.to_string(),
        };
        self.elements.push(format!(
            r#"<polygon points="{}" fill="{fill}" fill-opacity="{}" {outline}/>"#,
            fmt_points(points),
            fmt_num(fill_opacity)
        ));
    }

    pub fn circle(&mut self, center: Vec2, radius: f32, fill: Rgb, stroke: Option<&Stroke>) {
        let outline = match stroke {
            Some(stroke) => stroke.attributes(),
            None => r#"stroke="none""#.to_string(),
        };
        self.elements.push(format!(
            r#"<circle cx="{}" cy="{}" r="{}" fill="{fill}" {outline}/>"#,
            fmt_num(center.x),
            fmt_num(center.y),
            fmt_num(radius)
        ));
    }

    pub fn text(&mut self, position: Vec2, content: &str, style: &TextStyle) {
        let (x, y) = (fmt_num(position.x), fmt_num(position.y));
        let mut element = format!(
            r#"<text x="{x}" y="{y}" font-family="{FONT_FAMILY}" font-size="{}" fill="{}""#,
            fmt_num(style.size),
            style.color
        );
        let _ = write!(
            element,
            r#" text-anchor="{}" dominant-baseline="central""#,
            style.anchor.as_str()
        );
        if style.rotation != 0.0 {
            let rotation = fmt_num(style.rotation);
            let _ = write!(element, r#" transform="rotate({rotation} {x} {y})""#);
        }
        let _ = write!(element, ">{}</text>", escape(content));
        self.elements.push(element);
    }

    pub fn to_svg(&self) -> String {
        let (w, h) = (fmt_num(self.size.x), fmt_num(self.size.y));
        let mut document = String::new();
        let _ = writeln!(document, r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        let size = format!(r#"width="{w}" height="{h}" viewBox="0 0 {w} {h}""#);
        let _ = writeln!(
            document,
            r#"<svg xmlns="{SVG_NAMESPACE}" version="1.1" {size}>"#
        );
        for element in &self.elements {
            document.push_str("  ");
            document.push_str(element);
            document.push('\n');
        }
        document.push_str("</svg>\n");
        document
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Err(source) = fs::write(path, self.to_svg()) {
            return Err(RenderError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
        log::info!("Wrote {}", path.display());
        Ok(())
    }
}

/// Two decimals, trailing zeros trimmed
fn fmt_num(value: f32) -> String {
    let text = format!("{value:.2}");
    let text = text.trim_end_matches('0').trim_end_matches('.');
    match text {
        "-0" | "" => "0".to_string(),
        _ => text.to_string(),
    }
}

fn fmt_points(points: &[Vec2]) -> String {
    points
        .iter()
        .map(|p| format!("{},{}", fmt_num(p.x), fmt_num(p.y)))
        .collect::<Vec<_>>()
        .join(" ")
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_are_compact() {
        assert_eq!(fmt_num(1.0), "1");
        assert_eq!(fmt_num(-0.5), "-0.5");
        assert_eq!(fmt_num(12.346), "12.35");
        assert_eq!(fmt_num(-0.001), "0");
        assert_eq!(fmt_num(0.0), "0");
        assert_eq!(fmt_num(100.0), "100");
    }

    #[test]
    fn document_contains_elements_in_order() {
        let mut canvas = SvgCanvas::new(100.0, 50.0, Rgb::WHITE);
        canvas.line(
            Vec2::ZERO,
            Vec2::new(10.0, 10.0),
            &Stroke::dashed(Rgb::BLACK, 1.0),
        );
        canvas.circle(Vec2::new(5.0, 5.0), 2.5, Rgb::new(255, 0, 0), None);
        canvas.text(
            Vec2::new(1.0, 2.0),
            "J/ψ & <K>",
            &TextStyle::new(Rgb::BLACK, 12.0),
        );

        let svg = canvas.to_svg();
        assert!(svg.starts_with("<?xml"));
        assert!(svg.contains(r#"width="100" height="50""#));
        assert!(svg.contains(r#"stroke-dasharray="6 4""#));
        assert!(svg.contains("J/ψ &amp; &lt;K&gt;</text>"));
        let line = svg.find("<line").unwrap();
        let circle = svg.find("<circle").unwrap();
        assert!(line < circle);
        assert!(svg.trim_end().ends_with("</svg>"));
        assert_eq!(canvas.element_count(), 4);
    }

    #[test]
    fn degenerate_shapes_are_skipped() {
        let mut canvas = SvgCanvas::new(10.0, 10.0, Rgb::WHITE);
        canvas.polyline(&[Vec2::ZERO], &Stroke::solid(Rgb::BLACK, 1.0));
        canvas.polygon(&[Vec2::ZERO, Vec2::ONE], Rgb::BLACK, 1.0, None);
        assert_eq!(canvas.element_count(), 1);
    }
}
