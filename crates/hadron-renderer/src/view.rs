//! Mapping diagram coordinates to the page
//!
//! [`Viewport`] maps a 2D data rectangle onto a pixel rectangle.
//! [`View3d`] orthographically projects the isospin–strangeness–charm box
//! from a given elevation and azimuth, the way an axonometric plot does.

use glam::{Mat3, Vec2, Vec3};

/// Empty space around the plotting area, in pixels
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Margins {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Margins {
    pub const fn uniform(value: f32) -> Self {
        Self {
            left: value,
            right: value,
            top: value,
            bottom: value,
        }
    }
}

/// Affine map from data space (y up) to pixel space (y down)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    data_min: Vec2,
    data_max: Vec2,
    origin: Vec2,
    size: Vec2,
}

impl Viewport {
    pub fn new(data_min: Vec2, data_max: Vec2, canvas: Vec2, margins: Margins) -> Self {
        Self {
            data_min,
            data_max,
            origin: Vec2::new(margins.left, margins.top),
            size: Vec2::new(
                canvas.x - margins.left - margins.right,
                canvas.y - margins.top - margins.bottom,
            ),
        }
    }

    /// Like [`Viewport::new`] but with equal scale on both axes, centred
    pub fn uniform(data_min: Vec2, data_max: Vec2, canvas: Vec2, margins: Margins) -> Self {
        let mut viewport = Self::new(data_min, data_max, canvas, margins);
        let scale = viewport.scale();
        let common = scale.x.min(scale.y);
        let used = (data_max - data_min) * common;
        viewport.origin += (viewport.size - used) / 2.0;
        viewport.size = used;
        viewport
    }

    /// Pixels per data unit along each axis
    pub fn scale(&self) -> Vec2 {
        let extent = self.data_max - self.data_min;
        Vec2::new(
            self.size.x / extent.x.max(f32::EPSILON),
            self.size.y / extent.y.max(f32::EPSILON),
        )
    }

    pub fn data_min(&self) -> Vec2 {
        self.data_min
    }

    pub fn data_max(&self) -> Vec2 {
        self.data_max
    }

    pub fn to_pixel(&self, point: Vec2) -> Vec2 {
        let scale = self.scale();
        Vec2::new(
            self.origin.x + (point.x - self.data_min.x) * scale.x,
            self.origin.y + self.size.y - (point.y - self.data_min.y) * scale.y,
        )
    }
}

/// Axis-aligned data box of a 3D diagram
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds3 {
    pub min: Vec3,
    pub max: Vec3,
}

impl Bounds3 {
    pub const fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) / 2.0
    }

    pub fn extent(&self) -> Vec3 {
        (self.max - self.min).max(Vec3::splat(f32::EPSILON))
    }

    /// Map into the unit cube centred on the origin
    pub fn normalize(&self, point: Vec3) -> Vec3 {
        (point - self.center()) / self.extent()
    }

    pub fn corners(&self) -> [Vec3; 8] {
        let (lo, hi) = (self.min, self.max);
        [
            Vec3::new(lo.x, lo.y, lo.z),
            Vec3::new(hi.x, lo.y, lo.z),
            Vec3::new(lo.x, hi.y, lo.z),
            Vec3::new(hi.x, hi.y, lo.z),
            Vec3::new(lo.x, lo.y, hi.z),
            Vec3::new(hi.x, lo.y, hi.z),
            Vec3::new(lo.x, hi.y, hi.z),
            Vec3::new(hi.x, hi.y, hi.z),
        ]
    }
}

/// Orthographic view of a [`Bounds3`] box
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct View3d {
    pub bounds: Bounds3,
    /// Rows are the screen right, screen up and towards-viewer directions
    basis: Mat3,
}

impl View3d {
    /// Elevation above the x-y plane and azimuth around z, in degrees
    pub fn new(bounds: Bounds3, elevation: f32, azimuth: f32) -> Self {
        let (sin_el, cos_el) = elevation.to_radians().sin_cos();
        let (sin_az, cos_az) = azimuth.to_radians().sin_cos();

        let right = Vec3::new(-sin_az, cos_az, 0.0);
        let up = Vec3::new(-sin_el * cos_az, -sin_el * sin_az, cos_el);
        let toward_viewer = Vec3::new(cos_el * cos_az, cos_el * sin_az, sin_el);

        Self {
            bounds,
            basis: Mat3::from_cols(right, up, toward_viewer).transpose(),
        }
    }

    /// Screen position (y up) in normalized box units
    pub fn project(&self, point: Vec3) -> Vec2 {
        (self.basis * self.bounds.normalize(point)).truncate()
    }

    /// Distance towards the viewer; larger values are drawn later
    pub fn depth(&self, point: Vec3) -> f32 {
        (self.basis * self.bounds.normalize(point)).z
    }

    /// Smallest screen rectangle containing the projected box
    pub fn screen_bounds(&self) -> (Vec2, Vec2) {
        let mut lo = Vec2::splat(f32::MAX);
        let mut hi = Vec2::splat(f32::MIN);
        for corner in self.bounds.corners() {
            let p = self.project(corner);
            lo = lo.min(p);
            hi = hi.max(p);
        }
        (lo, hi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Vec2, b: Vec2) -> bool {
        (a - b).length() < 1e-4
    }

    #[test]
    fn viewport_flips_y() {
        let viewport = Viewport::new(
            Vec2::new(-1.0, -1.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(220.0, 220.0),
            Margins::uniform(10.0),
        );
        let pixel = |x, y| viewport.to_pixel(Vec2::new(x, y));
        assert!(approx(pixel(-1.0, 1.0), Vec2::new(10.0, 10.0)));
        assert!(approx(pixel(1.0, -1.0), Vec2::new(210.0, 210.0)));
        assert!(approx(pixel(0.0, 0.0), Vec2::new(110.0, 110.0)));
    }

    #[test]
    fn uniform_viewport_centres_the_short_axis() {
        let viewport = Viewport::uniform(
            Vec2::new(0.0, 0.0),
            Vec2::new(2.0, 1.0),
            Vec2::new(200.0, 200.0),
            Margins::uniform(0.0),
        );
        assert_eq!(viewport.scale(), Vec2::splat(100.0));
        let top_left = viewport.to_pixel(Vec2::new(0.0, 1.0));
        assert!(approx(top_left, Vec2::new(0.0, 50.0)));
    }

    #[test]
    fn front_view_keeps_isospin_horizontal() {
        let bounds = Bounds3::new(Vec3::splat(-1.0), Vec3::splat(1.0));
        let view = View3d::new(bounds, 0.0, -90.0);

        let screen = |x, y, z| view.project(Vec3::new(x, y, z));
        assert!(approx(screen(1.0, 0.0, 0.0), Vec2::new(0.5, 0.0)));
        assert!(approx(screen(0.0, 0.0, 1.0), Vec2::new(0.0, 0.5)));
        // strangeness runs into the page
        assert!(approx(screen(0.0, 1.0, 0.0), Vec2::ZERO));

        let near = view.depth(Vec3::new(0.0, -1.0, 0.0));
        let far = view.depth(Vec3::new(0.0, 1.0, 0.0));
        assert!(near > far);
    }

    #[test]
    fn raised_view_tilts_strangeness_upwards() {
        let bounds = Bounds3::new(Vec3::splat(-1.0), Vec3::splat(1.0));
        let view = View3d::new(bounds, 18.0, -84.0);
        let back = view.project(Vec3::new(0.0, 1.0, 0.0));
        assert!(back.y > 0.0);

        let (lo, hi) = view.screen_bounds();
        assert!(lo.x < 0.0 && hi.x > 0.0);
        assert!(lo.y < 0.0 && hi.y > 0.0);
    }
}
