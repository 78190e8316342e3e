//! Map rendering for the GeoNav routing console.
//!
//! The crate maintains a 1:1 mapping between the POI catalogue and visible
//! markers, tracks the user-location marker, and renders at most one
//! active route polyline. The actual drawing surface is abstracted behind
//! [`MapSurface`] so the same view logic drives a real tile-backed map or
//! the in-memory [`test_support::RecordingSurface`].

#![forbid(unsafe_code)]

mod path;
mod surface;
pub mod test_support;
mod view;

pub use path::{build_route_path, path_bounds};
pub use surface::{MapSurface, PolylineStyle};
pub use view::{MapView, FIT_PADDING, POI_ZOOM, USER_MARKER_ID, USER_ZOOM};
