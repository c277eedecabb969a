//! Pan/zoom viewport with 3x3 matrices.
//!
//! Two matrices describe the view:
//!
//! - `projection` maps viewport pixels to clip space (`[-1, 1]` on both
//!   axes, y up). It depends only on the viewport size.
//! - `transform` accumulates pan and zoom in clip space. It starts as the
//!   identity and is only ever multiplied by translations and positive
//!   scales, so it stays invertible.
//!
//! A renderer draws pixel-space geometry with [`Viewport::final_matrix`];
//! input handlers map pointer positions back with [`Viewport::to_grid_coords`].
//!
//! # Example
//!
//! ```
//! use rhizome_petri_viewport::Viewport;
//!
//! let mut view = Viewport::new(800.0, 600.0).unwrap();
//! let before = view.to_grid_coords(200.0, 150.0);
//! view.zoom_at(200.0, 150.0, 0.4f32.exp());
//! let after = view.to_grid_coords(200.0, 150.0);
//! assert!((before - after).length() < 1e-2);
//! ```

mod error;
mod zoom;

pub use error::{ViewportError, ViewportResult};
pub use zoom::{DEFAULT_MAX_ZOOM, DEFAULT_ZOOM_STEP, ZoomLevel};

use glam::{Mat3, Vec2, Vec3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Builds the pixel to clip space projection for a viewport.
///
/// `(0, 0)` maps to `(-1, 1)` and `(width, height)` to `(1, -1)`.
pub fn projection_matrix(width: f32, height: f32) -> Mat3 {
    Mat3::from_cols(
        Vec3::new(2.0 / width, 0.0, 0.0),
        Vec3::new(0.0, -2.0 / height, 0.0),
        Vec3::new(-1.0, 1.0, 1.0),
    )
}

/// Screen to grid mapping under an accumulated pan and zoom.
///
/// With the `serde` feature only the size and the transform are stored.
/// Loading rebuilds the projection and rejects a transform that could not
/// have come from pans and zooms.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "RawViewport")
)]
pub struct Viewport {
    width: f32,
    height: f32,
    #[cfg_attr(feature = "serde", serde(skip_serializing))]
    projection: Mat3,
    transform: Mat3,
}

impl Viewport {
    /// Creates a viewport of `width x height` pixels with no pan or zoom.
    pub fn new(width: f32, height: f32) -> ViewportResult<Self> {
        validate(width, height)?;
        Ok(Self {
            width,
            height,
            projection: projection_matrix(width, height),
            transform: Mat3::IDENTITY,
        })
    }

    /// Rebuilds the projection for a new size and drops any pan or zoom.
    pub fn resize(&mut self, width: f32, height: f32) -> ViewportResult<()> {
        validate(width, height)?;
        self.width = width;
        self.height = height;
        self.projection = projection_matrix(width, height);
        self.transform = Mat3::IDENTITY;
        log::debug!("viewport resized to {width}x{height}");
        Ok(())
    }

    /// Drops any pan or zoom.
    pub fn reset(&mut self) {
        self.transform = Mat3::IDENTITY;
    }

    /// Returns the viewport width in pixels.
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Returns the viewport height in pixels.
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Returns the projection matrix.
    pub fn projection(&self) -> Mat3 {
        self.projection
    }

    /// Returns the pan/zoom matrix.
    pub fn transform(&self) -> Mat3 {
        self.transform
    }

    /// Applies the projection to a screen point.
    pub fn projected_point(&self, x: f32, y: f32) -> Vec2 {
        self.projection.transform_point2(Vec2::new(x, y))
    }

    /// Maps a screen point to the pixel space the grid geometry lives in.
    ///
    /// Undoes the pan and zoom, so edits land on the cell drawn under the
    /// pointer.
    pub fn to_grid_coords(&self, x: f32, y: f32) -> Vec2 {
        let projected = self.projected_point(x, y);
        let untransformed = self.transform.inverse().transform_point2(projected);
        self.projection.inverse().transform_point2(untransformed)
    }

    /// Translates the view so content moves by `from - to` in clip space.
    ///
    /// The shift is measured in the transform's own space, which keeps pan
    /// speed 1:1 with the pointer at every zoom level.
    pub fn pan(&mut self, from: Vec2, to: Vec2) {
        let inverse = self.transform.inverse();
        let shift = inverse.transform_point2(from) - inverse.transform_point2(to);
        self.transform *= Mat3::from_translation(shift);
    }

    /// Scales the view by `scale` around a screen point.
    ///
    /// The content under `(x, y)` stays under `(x, y)`. Non-positive or
    /// non-finite scales are ignored.
    pub fn zoom_at(&mut self, x: f32, y: f32, scale: f32) {
        if !(scale.is_finite() && scale > 0.0) {
            return;
        }

        let projected = self.projected_point(x, y);
        let anchor = self.transform.inverse().transform_point2(projected);

        self.transform *= Mat3::from_scale(Vec2::splat(scale));

        let moved = self.transform.transform_point2(anchor);
        self.pan(projected, moved);
    }

    /// Pulls the content back over an exposed viewport corner.
    ///
    /// Each viewport corner is placed through the projection and transform.
    /// A placed corner with either coordinate strictly inside `(-1, 1)`
    /// means the content edge is visible there. The last such corner, in
    /// the order top-left, top-right, bottom-left, bottom-right, is panned
    /// back onto its clip-space corner. One corner is fixed per call.
    ///
    /// Returns true if a correction was applied.
    pub fn enforce_bounds(&mut self) -> bool {
        let corners = [
            Vec2::ZERO,
            Vec2::new(self.width, 0.0),
            Vec2::new(0.0, self.height),
            Vec2::new(self.width, self.height),
        ];

        let mut exposed = None;
        for corner in corners {
            let target = self.projection.transform_point2(corner);
            let placed = self.transform.transform_point2(target);
            if placed.x.abs() < 1.0 || placed.y.abs() < 1.0 {
                exposed = Some((target, placed));
            }
        }

        match exposed {
            Some((target, placed)) => {
                log::debug!("content edge exposed at {placed}, pulling back to {target}");
                self.pan(target, placed);
                true
            }
            None => false,
        }
    }

    /// Returns `transform * projection`, mapping grid pixels straight to clip space.
    pub fn final_matrix(&self) -> Mat3 {
        self.transform * self.projection
    }
}

fn validate(width: f32, height: f32) -> ViewportResult<()> {
    let valid = |v: f32| v.is_finite() && v > 0.0;
    if valid(width) && valid(height) {
        Ok(())
    } else {
        Err(ViewportError::InvalidDimensions { width, height })
    }
}

#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawViewport {
    width: f32,
    height: f32,
    transform: Mat3,
}

#[cfg(feature = "serde")]
impl TryFrom<RawViewport> for Viewport {
    type Error = ViewportError;

    fn try_from(raw: RawViewport) -> ViewportResult<Self> {
        let mut viewport = Self::new(raw.width, raw.height)?;

        let det = raw.transform.determinant();
        let affine = raw.transform.row(2) == Vec3::Z;
        if !(raw.transform.is_finite() && affine && det.is_finite() && det != 0.0) {
            return Err(ViewportError::InvalidTransform(raw.transform));
        }

        viewport.transform = raw.transform;
        Ok(viewport)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    fn view() -> Viewport {
        Viewport::new(800.0, 600.0).unwrap()
    }

    #[test]
    fn test_invalid_dimensions() {
        assert!(Viewport::new(0.0, 600.0).is_err());
        assert!(Viewport::new(800.0, -1.0).is_err());
        assert!(Viewport::new(f32::NAN, 600.0).is_err());
        assert!(Viewport::new(f32::INFINITY, 600.0).is_err());
    }

    #[test]
    fn test_projection_corners() {
        let v = view();
        assert!((v.projected_point(0.0, 0.0) - Vec2::new(-1.0, 1.0)).length() < EPS);
        assert!((v.projected_point(800.0, 600.0) - Vec2::new(1.0, -1.0)).length() < EPS);
        assert!(v.projected_point(400.0, 300.0).length() < EPS);
    }

    #[test]
    fn test_identity_grid_coords() {
        let v = view();
        let p = v.to_grid_coords(123.0, 456.0);
        assert!((p - Vec2::new(123.0, 456.0)).length() < 1e-2);
    }

    #[test]
    fn test_zoom_keeps_point_under_cursor() {
        let mut v = view();
        for &(x, y) in &[(400.0, 300.0), (10.0, 590.0), (712.5, 33.0)] {
            let before = v.to_grid_coords(x, y);
            v.zoom_at(x, y, 0.4f32.exp());
            let after = v.to_grid_coords(x, y);
            assert!(
                (before - after).length() < 1e-2,
                "point ({x}, {y}) drifted from {before} to {after}"
            );
        }
    }

    #[test]
    fn test_zoom_out_keeps_point_under_cursor() {
        let mut v = view();
        v.zoom_at(300.0, 200.0, 0.8f32.exp());
        let before = v.to_grid_coords(520.0, 410.0);
        v.zoom_at(520.0, 410.0, (-0.4f32).exp());
        let after = v.to_grid_coords(520.0, 410.0);
        assert!((before - after).length() < 1e-2);
    }

    #[test]
    fn test_zoom_scales_distances() {
        let mut v = view();
        v.zoom_at(400.0, 300.0, 2.0);
        // 100 screen pixels right of the anchor is 50 grid pixels right of it.
        let p = v.to_grid_coords(500.0, 300.0);
        assert!((p - Vec2::new(450.0, 300.0)).length() < 1e-2);
    }

    #[test]
    fn test_zoom_ignores_bad_scale() {
        let mut v = view();
        v.zoom_at(100.0, 100.0, 0.0);
        v.zoom_at(100.0, 100.0, -2.0);
        v.zoom_at(100.0, 100.0, f32::NAN);
        assert_eq!(v.transform(), Mat3::IDENTITY);
    }

    #[test]
    fn test_pan_follows_pointer() {
        let mut v = view();
        let grabbed = v.to_grid_coords(300.0, 300.0);

        let from = v.projected_point(350.0, 320.0);
        let to = v.projected_point(300.0, 300.0);
        v.pan(from, to);

        let released = v.to_grid_coords(350.0, 320.0);
        assert!((grabbed - released).length() < 1e-2);
    }

    #[test]
    fn test_pan_follows_pointer_while_zoomed() {
        let mut v = view();
        v.zoom_at(400.0, 300.0, 1.2f32.exp());
        let grabbed = v.to_grid_coords(300.0, 300.0);

        let from = v.projected_point(360.0, 250.0);
        let to = v.projected_point(300.0, 300.0);
        v.pan(from, to);

        let released = v.to_grid_coords(360.0, 250.0);
        assert!((grabbed - released).length() < 1e-2);
    }

    #[test]
    fn test_enforce_bounds_noop_at_identity() {
        let mut v = view();
        assert!(!v.enforce_bounds());
        assert_eq!(v.transform(), Mat3::IDENTITY);
    }

    #[test]
    fn test_enforce_bounds_undoes_unzoomed_pan() {
        let mut v = view();
        v.pan(v.projected_point(500.0, 300.0), v.projected_point(400.0, 300.0));
        assert!(v.enforce_bounds());
        assert!(v.transform().abs_diff_eq(Mat3::IDENTITY, EPS));
    }

    #[test]
    fn test_enforce_bounds_idempotent() {
        let mut v = view();
        v.zoom_at(400.0, 300.0, 0.4f32.exp());
        v.pan(v.projected_point(700.0, 300.0), v.projected_point(400.0, 300.0));

        assert!(v.enforce_bounds());
        let corrected = v.transform();

        v.enforce_bounds();
        assert!(v.transform().abs_diff_eq(corrected, EPS));
    }

    #[test]
    fn test_enforce_bounds_covers_viewport() {
        let mut v = view();
        v.zoom_at(400.0, 300.0, 0.4f32.exp());
        v.pan(v.projected_point(700.0, 300.0), v.projected_point(400.0, 300.0));
        v.enforce_bounds();

        let m = v.final_matrix();
        for corner in [
            Vec2::ZERO,
            Vec2::new(800.0, 0.0),
            Vec2::new(0.0, 600.0),
            Vec2::new(800.0, 600.0),
        ] {
            let placed = m.transform_point2(corner);
            assert!(placed.x.abs() > 1.0 - EPS, "corner {corner} at {placed}");
            assert!(placed.y.abs() > 1.0 - EPS, "corner {corner} at {placed}");
        }
    }

    #[test]
    fn test_final_matrix_composition() {
        let mut v = view();
        v.zoom_at(250.0, 100.0, 1.5);
        let expected = v.transform() * v.projection();
        assert_eq!(v.final_matrix(), expected);

        let grid = v.to_grid_coords(640.0, 480.0);
        let clip = v.final_matrix().transform_point2(grid);
        assert!((clip - v.projected_point(640.0, 480.0)).length() < EPS);
    }

    #[test]
    fn test_transform_stays_invertible() {
        let mut v = view();
        for i in 0..20 {
            let x = (i * 37 % 800) as f32;
            let y = (i * 53 % 600) as f32;
            let scale = if i % 3 == 0 { (-0.4f32).exp() } else { 0.4f32.exp() };
            v.zoom_at(x, y, scale);
            v.enforce_bounds();
        }
        assert!(v.transform().determinant().abs() > 1e-6);
    }

    #[test]
    fn test_resize_resets_transform() {
        let mut v = view();
        v.zoom_at(100.0, 100.0, 2.0);
        v.resize(1024.0, 768.0).unwrap();
        assert_eq!(v.transform(), Mat3::IDENTITY);
        assert!((v.projected_point(1024.0, 768.0) - Vec2::new(1.0, -1.0)).length() < EPS);
        assert!(v.resize(0.0, 1.0).is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_roundtrip() {
        let mut v = view();
        v.zoom_at(200.0, 150.0, 2.0);
        v.pan(Vec2::new(0.1, 0.0), Vec2::ZERO);

        let json = serde_json::to_string(&v).unwrap();
        assert!(!json.contains("projection"));
        let back: Viewport = serde_json::from_str(&json).unwrap();
        assert_eq!(back, v);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_rejects_singular_transform() {
        let mut value = serde_json::to_value(view()).unwrap();
        value["transform"] = serde_json::to_value(Mat3::ZERO).unwrap();
        assert!(serde_json::from_value::<Viewport>(value).is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_rejects_bad_size() {
        let mut value = serde_json::to_value(view()).unwrap();
        value["width"] = serde_json::json!(0.0);
        assert!(serde_json::from_value::<Viewport>(value).is_err());
    }
}
