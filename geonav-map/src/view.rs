//! Map view state: marker sync, route rendering, and viewport actions.

use geo::Coord;

use geonav_core::{NotificationSink, OrderedRoute, Poi, RouteOracle, Stop, StopSelection, Toast};

use crate::path::{build_route_path, path_bounds};
use crate::surface::{MapSurface, PolylineStyle};

/// Reserved marker id tracking the live device position.
pub const USER_MARKER_ID: &str = "user-location";

/// Pixel padding applied when fitting the viewport to a route.
pub const FIT_PADDING: u32 = 50;

/// Zoom level used when recentring on the user.
pub const USER_ZOOM: u8 = 16;

/// Zoom level used when flying to a single POI.
pub const POI_ZOOM: u8 = 17;

/// View logic over a live map surface.
///
/// The view owns the surface and the notification sink and tracks which
/// POI markers it has drawn, the user-location marker, and the active
/// route polyline. All methods take `&mut self`; mutations happen in call
/// order on one logical thread, so the marker rebuild can never race a
/// route draw.
pub struct MapView<S: MapSurface, N: NotificationSink> {
    surface: S,
    notifier: N,
    marker_ids: Vec<String>,
    user_location: Option<Coord<f64>>,
    style: PolylineStyle,
}

impl<S: MapSurface, N: NotificationSink> MapView<S, N> {
    /// Create a view over `surface` delivering toasts to `notifier`.
    pub fn new(surface: S, notifier: N) -> Self {
        Self {
            surface,
            notifier,
            marker_ids: Vec::new(),
            user_location: None,
            style: PolylineStyle::default(),
        }
    }

    /// Use a custom polyline style for rendered routes.
    #[must_use]
    pub fn with_style(mut self, style: PolylineStyle) -> Self {
        self.style = style;
        self
    }

    /// Borrow the underlying surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Borrow the notification sink.
    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Last known user location, if any.
    pub fn user_location(&self) -> Option<Coord<f64>> {
        self.user_location
    }

    /// Rebuild the POI marker layer from the current catalogue.
    ///
    /// Full rebuild: every tracked marker is removed, then one marker per
    /// POI is recreated, keyed by POI id. POI sets are small and change
    /// infrequently, so no incremental diff is attempted. The user
    /// location marker is left untouched.
    pub fn sync_markers(&mut self, pois: &[Poi]) {
        for id in self.marker_ids.drain(..) {
            self.surface.remove_marker(&id);
        }
        for poi in pois {
            self.surface.add_marker(&poi.id, poi.location, &poi.name);
            self.marker_ids.push(poi.id.clone());
        }
    }

    /// Track the live device position.
    ///
    /// The user marker is created once and repositioned in place on later
    /// updates, unlike the rebuild-on-every-change policy for POI markers.
    pub fn update_user_location(&mut self, position: Coord<f64>) {
        if self.user_location.is_some() {
            self.surface.move_marker(USER_MARKER_ID, position);
        } else {
            self.surface.add_marker(USER_MARKER_ID, position, "You");
        }
        self.user_location = Some(position);
    }

    /// Render an ordered route, replacing any previous polyline.
    ///
    /// Builds the path from `start` through each resolvable id in order,
    /// skipping unknown ids. Draws and fits the viewport only when at
    /// least two points resolved; the degenerate case clears the old
    /// polyline and draws nothing. Returns the number of resolved points.
    pub fn render_route(&mut self, start: Coord<f64>, route: &OrderedRoute, pois: &[Poi]) -> usize {
        let points = build_route_path(start, &route.ordered_ids, pois);
        self.surface.clear_polyline();
        if points.len() < 2 {
            log::debug!(
                "route resolved to {} point(s); polyline suppressed",
                points.len()
            );
            return points.len();
        }
        self.surface.draw_polyline(&points, &self.style);
        if let Some(bounds) = path_bounds(&points) {
            self.surface.fit_bounds(bounds, FIT_PADDING);
        }
        points.len()
    }

    /// Order the selected stops and render the result.
    ///
    /// Filters the catalogue by the selection (catalogue order), picks the
    /// start point (last known user location, else the first stop's own
    /// position so the call never lacks a start), consults the oracle, and
    /// draws whatever comes back. Emits a success toast for a real result
    /// and a failure toast for a degraded one. Returns `None` when the
    /// selection resolves to no stops.
    pub fn optimize_route<O: RouteOracle>(
        &mut self,
        oracle: &O,
        pois: &[Poi],
        selection: &StopSelection,
    ) -> Option<OrderedRoute> {
        let stops: Vec<Stop> = pois
            .iter()
            .filter(|poi| selection.contains(&poi.id))
            .map(Stop::from_poi)
            .collect();
        let first = stops.first()?;
        let start = self.user_location.unwrap_or(first.location);

        let route = oracle.order_stops(start, &stops);
        self.render_route(start, &route, pois);
        if route.degraded {
            self.notifier
                .notify(Toast::failure("Could not optimise the route"));
        } else {
            self.notifier.notify(Toast::success("Route optimised"));
        }
        Some(route)
    }

    /// Fly the viewport back to the user's position.
    pub fn recenter(&mut self) {
        if let Some(position) = self.user_location {
            self.surface.fly_to(position, USER_ZOOM);
            self.notifier
                .notify(Toast::success("Centred on your position"));
        } else {
            self.notifier.notify(Toast::failure("Location unavailable"));
        }
    }

    /// Fly the viewport to a single POI.
    pub fn fly_to_poi(&mut self, poi: &Poi) {
        self.surface.fly_to(poi.location, POI_ZOOM);
    }
}
