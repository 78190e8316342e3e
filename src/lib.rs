//! Facade crate for the GeoNav routing console engine.
//!
//! Re-exports the core domain types, the map renderer, and (behind the
//! `oracle-gemini` feature) the HTTP oracle client.

#![forbid(unsafe_code)]

pub use geonav_core::{
    Category, NotificationSink, OrderedRoute, Poi, RouteOracle, Stop, StopSelection, Toast,
    ToastTone, TransportMode, DEGRADED_EXPLANATION, NOT_OPTIMISED_EXPLANATION,
};

pub use geonav_map::{
    build_route_path, path_bounds, MapSurface, MapView, PolylineStyle, FIT_PADDING, POI_ZOOM,
    USER_MARKER_ID, USER_ZOOM,
};

#[cfg(feature = "oracle-gemini")]
pub use geonav_oracle::{
    GeminiRouteOracle, GeminiRouteOracleConfig, OracleBuildError, OracleError, OrderingReply,
    API_KEY_ENV, DEFAULT_BASE_URL, DEFAULT_MODEL,
};
