//! Pure helpers turning an ordered id sequence into drawable geometry.

use geo::{Coord, Rect};
use geonav_core::Poi;

/// Build the rendered path: the start point followed by the position of
/// each resolvable id in `ordered_ids`, in that order.
///
/// Ids not present in `pois` are skipped silently; repeated ids repeat
/// their coordinate. The oracle's output is untrusted, so resolution is
/// defensive rather than validating.
pub fn build_route_path(
    start: Coord<f64>,
    ordered_ids: &[String],
    pois: &[Poi],
) -> Vec<Coord<f64>> {
    let mut points = vec![start];
    for id in ordered_ids {
        if let Some(poi) = pois.iter().find(|poi| poi.id == *id) {
            points.push(poi.location);
        }
    }
    points
}

/// Axis-aligned bounding rectangle of `points`, or `None` when empty.
pub fn path_bounds(points: &[Coord<f64>]) -> Option<Rect<f64>> {
    let first = points.first()?;
    let mut min = *first;
    let mut max = *first;
    for point in points {
        min.x = min.x.min(point.x);
        min.y = min.y.min(point.y);
        max.x = max.x.max(point.x);
        max.y = max.y.max(point.y);
    }
    Some(Rect::new(min, max))
}

#[cfg(test)]
mod tests {
    use super::*;
    use geonav_core::test_support::sample_poi;
    use rstest::{fixture, rstest};

    #[fixture]
    fn catalogue() -> Vec<Poi> {
        vec![
            sample_poi("1", "A", -13.6785, 9.537),
            sample_poi("2", "B", -13.71, 9.5123),
        ]
    }

    #[rstest]
    fn path_follows_ordered_ids(catalogue: Vec<Poi>) {
        let start = Coord { x: -13.7122, y: 9.5092 };
        let ids = vec!["2".to_string(), "1".to_string()];

        let path = build_route_path(start, &ids, &catalogue);

        assert_eq!(
            path,
            vec![
                Coord { x: -13.7122, y: 9.5092 },
                Coord { x: -13.71, y: 9.5123 },
                Coord { x: -13.6785, y: 9.537 },
            ]
        );
    }

    #[rstest]
    fn unknown_ids_are_skipped(catalogue: Vec<Poi>) {
        let start = Coord { x: 0.0, y: 0.0 };
        let ids = vec!["ghost".to_string(), "1".to_string(), "missing".to_string()];

        let path = build_route_path(start, &ids, &catalogue);

        assert_eq!(path.len(), 2);
        assert_eq!(path[1], Coord { x: -13.6785, y: 9.537 });
    }

    #[rstest]
    fn repeated_ids_repeat_their_coordinate(catalogue: Vec<Poi>) {
        let ids = vec!["1".to_string(), "1".to_string()];
        let path = build_route_path(Coord { x: 0.0, y: 0.0 }, &ids, &catalogue);
        assert_eq!(path.len(), 3);
        assert_eq!(path[1], path[2]);
    }

    #[rstest]
    fn bounds_cover_all_points() {
        let points = vec![
            Coord { x: -13.7122, y: 9.5092 },
            Coord { x: -13.6785, y: 9.537 },
            Coord { x: -13.71, y: 9.5123 },
        ];

        let bounds = path_bounds(&points).expect("non-empty path has bounds");

        assert_eq!(bounds.min(), Coord { x: -13.7122, y: 9.5092 });
        assert_eq!(bounds.max(), Coord { x: -13.6785, y: 9.537 });
    }

    #[rstest]
    fn bounds_of_empty_path_is_none() {
        assert!(path_bounds(&[]).is_none());
    }
}
