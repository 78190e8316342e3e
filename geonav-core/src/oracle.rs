//! Seam for the external route-ordering oracle.

use geo::Coord;

use crate::{OrderedRoute, Stop};

/// Order a set of stops into a best-effort visiting sequence.
///
/// Implementations consult an untrusted external service and must treat it
/// as unreliable: every failure path (missing credential, transport error,
/// malformed reply) degrades to the pass-through ordering rather than
/// surfacing an error. `order_stops` is therefore total; callers only ever
/// see a success-shaped [`OrderedRoute`], possibly flagged `degraded`.
///
/// Implementations must be `Send + Sync` so a single oracle can be shared
/// across views.
///
/// # Examples
///
/// ```rust
/// use geo::Coord;
/// use geonav_core::{OrderedRoute, RouteOracle, Stop, NOT_OPTIMISED_EXPLANATION};
///
/// struct PassThroughOracle;
///
/// impl RouteOracle for PassThroughOracle {
///     fn order_stops(&self, _start: Coord<f64>, stops: &[Stop]) -> OrderedRoute {
///         OrderedRoute::passthrough(stops, NOT_OPTIMISED_EXPLANATION)
///     }
/// }
///
/// let stops = vec![Stop::new("1", "A", Coord { x: 0.0, y: 0.0 })];
/// let route = PassThroughOracle.order_stops(Coord { x: 0.0, y: 0.0 }, &stops);
/// assert_eq!(route.ordered_ids, vec!["1".to_string()]);
/// ```
pub trait RouteOracle: Send + Sync {
    /// Produce a visiting order for `stops` starting from `start`.
    ///
    /// The returned id sequence is not guaranteed to be a permutation of
    /// the input; consumers resolve ids defensively.
    fn order_stops(&self, start: Coord<f64>, stops: &[Stop]) -> OrderedRoute;
}
