//! In-memory map surface used by unit and behaviour tests.
//!
//! The surface records every primitive call so tests can replay the
//! visible state (current markers, active polyline) and assert on call
//! patterns such as rebuild-versus-move.

use std::collections::BTreeSet;

use geo::{Coord, Rect};

use crate::surface::{MapSurface, PolylineStyle};

/// One recorded surface operation.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceOp {
    /// A marker was placed.
    AddMarker {
        /// Marker key.
        id: String,
        /// Marker position.
        position: Coord<f64>,
        /// Display label.
        label: String,
    },
    /// A marker was removed.
    RemoveMarker {
        /// Marker key.
        id: String,
    },
    /// A marker was repositioned in place.
    MoveMarker {
        /// Marker key.
        id: String,
        /// New position.
        position: Coord<f64>,
    },
    /// A polyline was drawn.
    DrawPolyline {
        /// Path coordinates.
        points: Vec<Coord<f64>>,
        /// Stroke style.
        style: PolylineStyle,
    },
    /// The active polyline was cleared.
    ClearPolyline,
    /// The viewport was fitted to a bounding box.
    FitBounds {
        /// Fitted bounds.
        bounds: Rect<f64>,
        /// Padding in pixels.
        padding: u32,
    },
    /// The viewport flew to a position.
    FlyTo {
        /// Target position.
        position: Coord<f64>,
        /// Target zoom level.
        zoom: u8,
    },
}

/// Map surface that records operations instead of drawing.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    /// Operations in call order.
    pub ops: Vec<SurfaceOp>,
}

impl RecordingSurface {
    /// Create an empty surface.
    pub fn new() -> Self {
        Self::default()
    }

    /// Ids of markers currently on the surface, by replaying the log.
    pub fn marker_ids(&self) -> BTreeSet<String> {
        let mut ids = BTreeSet::new();
        for op in &self.ops {
            match op {
                SurfaceOp::AddMarker { id, .. } => {
                    ids.insert(id.clone());
                }
                SurfaceOp::RemoveMarker { id } => {
                    ids.remove(id);
                }
                _ => {}
            }
        }
        ids
    }

    /// Current position of the marker keyed by `id`, if present.
    pub fn marker_position(&self, id: &str) -> Option<Coord<f64>> {
        let mut position = None;
        for op in &self.ops {
            match op {
                SurfaceOp::AddMarker {
                    id: op_id,
                    position: p,
                    ..
                }
                | SurfaceOp::MoveMarker {
                    id: op_id,
                    position: p,
                } if op_id == id => position = Some(*p),
                SurfaceOp::RemoveMarker { id: op_id } if op_id == id => position = None,
                _ => {}
            }
        }
        position
    }

    /// How many times a marker with `id` was created from scratch.
    pub fn add_count(&self, id: &str) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, SurfaceOp::AddMarker { id: op_id, .. } if op_id == id))
            .count()
    }

    /// The active polyline after replaying draws and clears.
    pub fn polyline(&self) -> Option<Vec<Coord<f64>>> {
        let mut current = None;
        for op in &self.ops {
            match op {
                SurfaceOp::DrawPolyline { points, .. } => current = Some(points.clone()),
                SurfaceOp::ClearPolyline => current = None,
                _ => {}
            }
        }
        current
    }

    /// The most recent viewport fit, if any.
    pub fn last_fit(&self) -> Option<(Rect<f64>, u32)> {
        self.ops.iter().rev().find_map(|op| match op {
            SurfaceOp::FitBounds { bounds, padding } => Some((*bounds, *padding)),
            _ => None,
        })
    }

    /// The most recent fly-to, if any.
    pub fn last_fly_to(&self) -> Option<(Coord<f64>, u8)> {
        self.ops.iter().rev().find_map(|op| match op {
            SurfaceOp::FlyTo { position, zoom } => Some((*position, *zoom)),
            _ => None,
        })
    }
}

impl MapSurface for RecordingSurface {
    fn add_marker(&mut self, id: &str, position: Coord<f64>, label: &str) {
        self.ops.push(SurfaceOp::AddMarker {
            id: id.to_owned(),
            position,
            label: label.to_owned(),
        });
    }

    fn remove_marker(&mut self, id: &str) {
        self.ops.push(SurfaceOp::RemoveMarker { id: id.to_owned() });
    }

    fn move_marker(&mut self, id: &str, position: Coord<f64>) {
        self.ops.push(SurfaceOp::MoveMarker {
            id: id.to_owned(),
            position,
        });
    }

    fn draw_polyline(&mut self, points: &[Coord<f64>], style: &PolylineStyle) {
        self.ops.push(SurfaceOp::DrawPolyline {
            points: points.to_vec(),
            style: style.clone(),
        });
    }

    fn clear_polyline(&mut self) {
        self.ops.push(SurfaceOp::ClearPolyline);
    }

    fn fit_bounds(&mut self, bounds: Rect<f64>, padding: u32) {
        self.ops.push(SurfaceOp::FitBounds { bounds, padding });
    }

    fn fly_to(&mut self, position: Coord<f64>, zoom: u8) {
        self.ops.push(SurfaceOp::FlyTo { position, zoom });
    }
}
