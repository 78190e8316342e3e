//! Outbound primitives of the external mapping library.

use geo::{Coord, Rect};

/// Visual style of the route polyline.
#[derive(Debug, Clone, PartialEq)]
pub struct PolylineStyle {
    /// Stroke colour as a CSS hex string.
    pub colour: String,
    /// Stroke width in pixels.
    pub weight: u32,
    /// Stroke opacity in `0.0..=1.0`.
    pub opacity: f64,
}

impl Default for PolylineStyle {
    fn default() -> Self {
        Self {
            colour: "#4f46e5".to_string(),
            weight: 5,
            opacity: 0.7,
        }
    }
}

/// The live map surface: markers, one polyline, and the shared viewport.
///
/// These operations are treated as provided primitives of an external
/// mapping library. The surface is a single mutable resource; callers
/// sequence mutations themselves (last write to the viewport wins).
pub trait MapSurface {
    /// Place a marker keyed by `id` at `position` with a display label.
    fn add_marker(&mut self, id: &str, position: Coord<f64>, label: &str);

    /// Remove the marker keyed by `id`; unknown ids are a no-op.
    fn remove_marker(&mut self, id: &str);

    /// Reposition an existing marker in place without recreating it.
    fn move_marker(&mut self, id: &str, position: Coord<f64>);

    /// Draw a polyline over `points`; any previous polyline must already
    /// have been cleared by the caller.
    fn draw_polyline(&mut self, points: &[Coord<f64>], style: &PolylineStyle);

    /// Remove the active polyline, if any.
    fn clear_polyline(&mut self);

    /// Adjust the viewport to fit `bounds` with a pixel padding margin.
    fn fit_bounds(&mut self, bounds: Rect<f64>, padding: u32);

    /// Animate the viewport to `position` at `zoom`.
    fn fly_to(&mut self, position: Coord<f64>, zoom: u8);
}
