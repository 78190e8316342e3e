//! Behaviour tests for the optimize-and-render flow.

use geo::Coord;

use geonav_core::test_support::{sample_poi, RecordingSink};
use geonav_core::{OrderedRoute, Poi, RouteOracle, Stop, StopSelection, ToastTone};
use geonav_map::test_support::RecordingSurface;
use geonav_map::{MapView, FIT_PADDING};

struct FixedOracle(OrderedRoute);

impl RouteOracle for FixedOracle {
    fn order_stops(&self, _start: Coord<f64>, _stops: &[Stop]) -> OrderedRoute {
        self.0.clone()
    }
}

fn catalogue() -> Vec<Poi> {
    vec![
        sample_poi("1", "A", -13.6785, 9.537),
        sample_poi("2", "B", -13.71, 9.5123),
    ]
}

#[test]
fn oracle_ordering_renders_start_then_stops_in_reply_order() {
    let pois = catalogue();
    let mut view = MapView::new(RecordingSurface::new(), RecordingSink::new());
    view.update_user_location(Coord { x: -13.7122, y: 9.5092 });
    let mut selection = StopSelection::new();
    selection.toggle("1");
    selection.toggle("2");
    let oracle = FixedOracle(OrderedRoute::from_oracle(
        vec!["2".to_string(), "1".to_string()],
        "B then A",
    ));

    let route = view
        .optimize_route(&oracle, &pois, &selection)
        .expect("selection is non-empty");

    assert_eq!(route.explanation, "B then A");
    let polyline = view.surface().polyline().expect("route should be drawn");
    assert_eq!(
        polyline,
        vec![
            Coord { x: -13.7122, y: 9.5092 },
            Coord { x: -13.71, y: 9.5123 },
            Coord { x: -13.6785, y: 9.537 },
        ]
    );
    let (_, padding) = view.surface().last_fit().expect("viewport should be fitted");
    assert_eq!(padding, FIT_PADDING);
    assert_eq!(
        view.notifier().last().map(|toast| toast.tone),
        Some(ToastTone::Success)
    );
}

#[test]
fn reply_with_unknown_ids_still_renders_resolvable_subset() {
    let pois = catalogue();
    let mut view = MapView::new(RecordingSurface::new(), RecordingSink::new());
    view.update_user_location(Coord { x: -13.7122, y: 9.5092 });
    let mut selection = StopSelection::new();
    selection.toggle("1");
    selection.toggle("2");
    let oracle = FixedOracle(OrderedRoute::from_oracle(
        vec!["2".to_string(), "unknown".to_string(), "1".to_string()],
        "with a stray id",
    ));

    view.optimize_route(&oracle, &pois, &selection)
        .expect("selection is non-empty");

    let polyline = view.surface().polyline().expect("route should be drawn");
    assert_eq!(polyline.len(), 3);
}

#[test]
fn fully_unresolvable_reply_renders_no_polyline_but_succeeds() {
    let pois = catalogue();
    let mut view = MapView::new(RecordingSurface::new(), RecordingSink::new());
    let mut selection = StopSelection::new();
    selection.toggle("1");
    let oracle = FixedOracle(OrderedRoute::from_oracle(
        vec!["nope".to_string(), "missing".to_string()],
        "all strays",
    ));

    let route = view
        .optimize_route(&oracle, &pois, &selection)
        .expect("selection is non-empty");

    assert!(!route.degraded);
    assert!(view.surface().polyline().is_none());
}
