//! Ordered routes and the stops that feed them.

use geo::Coord;

use crate::Poi;

/// Explanation carried by the pass-through result when the oracle was
/// never consulted (missing credential or empty stop list).
pub const NOT_OPTIMISED_EXPLANATION: &str =
    "No optimisation was performed; stops are in their original order.";

/// Explanation carried by the pass-through result when the oracle was
/// consulted but its reply could not be used.
pub const DEGRADED_EXPLANATION: &str = "The route could not be optimised at this time.";

/// The per-stop payload handed to the ordering oracle.
///
/// A stop is the id, name, and position of a selected POI; nothing else
/// leaves the process.
#[derive(Debug, Clone, PartialEq)]
pub struct Stop {
    /// Id of the underlying POI.
    pub id: String,
    /// Display name, included in the prompt for context.
    pub name: String,
    /// Geospatial position (`x = longitude`, `y = latitude`).
    pub location: Coord<f64>,
}

impl Stop {
    /// Construct a stop from raw parts.
    pub fn new(id: impl Into<String>, name: impl Into<String>, location: Coord<f64>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            location,
        }
    }

    /// Derive a stop from a catalogue POI.
    pub fn from_poi(poi: &Poi) -> Self {
        Self {
            id: poi.id.clone(),
            name: poi.name.clone(),
            location: poi.location,
        }
    }
}

/// The oracle's best-effort visiting order plus a human-readable rationale.
///
/// `ordered_ids` is *not* guaranteed to be a permutation of the input
/// stops: the oracle may omit ids, repeat them, or invent unknown ones.
/// Consumers must resolve each id against the known POI set and skip the
/// unresolvable rather than fail.
///
/// A route is created fresh per optimize request and fully replaces any
/// previously rendered route; it is never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderedRoute {
    /// Stop ids in suggested visiting order.
    pub ordered_ids: Vec<String>,
    /// Short free-text rationale for the ordering.
    pub explanation: String,
    /// Whether this is a pass-through fallback rather than a real reply.
    pub degraded: bool,
}

impl OrderedRoute {
    /// Wrap a reply the oracle actually produced.
    pub fn from_oracle(ordered_ids: Vec<String>, explanation: impl Into<String>) -> Self {
        Self {
            ordered_ids,
            explanation: explanation.into(),
            degraded: false,
        }
    }

    /// Build the pass-through fallback: input order, fixed explanation.
    ///
    /// # Examples
    /// ```
    /// use geo::Coord;
    /// use geonav_core::{OrderedRoute, Stop, NOT_OPTIMISED_EXPLANATION};
    ///
    /// let stops = vec![Stop::new("2", "B", Coord { x: 0.0, y: 0.0 })];
    /// let route = OrderedRoute::passthrough(&stops, NOT_OPTIMISED_EXPLANATION);
    /// assert_eq!(route.ordered_ids, vec!["2".to_string()]);
    /// assert!(route.degraded);
    /// ```
    pub fn passthrough(stops: &[Stop], explanation: impl Into<String>) -> Self {
        Self {
            ordered_ids: stops.iter().map(|stop| stop.id.clone()).collect(),
            explanation: explanation.into(),
            degraded: true,
        }
    }
}
