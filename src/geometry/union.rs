//! Polygon union
//!
//! Stroke quads and joint circles overlap on purpose. Before they become
//! glyph contours they are merged into disjoint filled regions, otherwise a
//! renderer would double-count the overlaps or show seams.
//!
//! The boolean algorithm itself is borrowed: [`PolygonUnion`] is the seam,
//! and [`GeoUnion`] plugs in the `geo` crate.

use super::polygon::{Contour, OutlinePolygon};
use crate::core::errors::MergeError;
use geo::{BooleanOps, Coord, LineString, MultiPolygon, Polygon};
use kurbo::Point;

/// Smallest absolute ring area accepted as input
const MIN_RING_AREA: f64 = 1e-9;

/// Planar union of a set of polygons
pub trait PolygonUnion: Send + Sync {
    /// Merge `polygons` into non-overlapping polygons covering the same area
    fn union(&self, polygons: &[OutlinePolygon]) -> Result<Vec<OutlinePolygon>, MergeError>;
}

/// Union backed by `geo::BooleanOps`
#[derive(Debug, Clone, Copy, Default)]
pub struct GeoUnion;

impl PolygonUnion for GeoUnion {
    fn union(&self, polygons: &[OutlinePolygon]) -> Result<Vec<OutlinePolygon>, MergeError> {
        for (index, polygon) in polygons.iter().enumerate() {
            validate_polygon(index, polygon)?;
        }

        let merged = polygons
            .iter()
            .map(to_geo_polygon)
            .fold(MultiPolygon::new(Vec::new()), |acc, polygon| {
                acc.union(&MultiPolygon::new(vec![polygon]))
            });

        let result: Vec<OutlinePolygon> = merged.0.iter().map(from_geo_polygon).collect();
        if result
            .iter()
            .flat_map(OutlinePolygon::contours)
            .any(|contour| !contour.is_finite())
        {
            return Err(MergeError::NonFiniteOutput);
        }
        Ok(result)
    }
}

/// Reject rings the union cannot treat as simple closed polygons
fn validate_polygon(index: usize, polygon: &OutlinePolygon) -> Result<(), MergeError> {
    let invalid = |reason: &str| MergeError::InvalidInput {
        index,
        reason: reason.to_string(),
    };

    for contour in polygon.contours() {
        if !contour.is_finite() {
            return Err(invalid("non-finite coordinate"));
        }
        let mut distinct: Vec<Point> = Vec::with_capacity(contour.len());
        for &p in contour.points() {
            if !distinct.contains(&p) {
                distinct.push(p);
            }
        }
        if distinct.len() < 3 {
            return Err(invalid("fewer than three distinct vertices"));
        }
        if contour.signed_area().abs() < MIN_RING_AREA {
            return Err(invalid("zero area"));
        }
    }
    Ok(())
}

fn to_line_string(contour: &Contour) -> LineString<f64> {
    LineString::new(
        contour
            .points()
            .iter()
            .map(|p| Coord { x: p.x, y: p.y })
            .collect(),
    )
}

fn to_geo_polygon(polygon: &OutlinePolygon) -> Polygon<f64> {
    Polygon::new(
        to_line_string(&polygon.exterior),
        polygon.holes.iter().map(to_line_string).collect(),
    )
}

/// Ring without the repeated closing coordinate `geo` keeps
fn from_line_string(ring: &LineString<f64>) -> Contour {
    let mut points: Vec<Point> = ring.coords().map(|c| Point::new(c.x, c.y)).collect();
    if points.len() > 1 && points.first() == points.last() {
        points.pop();
    }
    Contour::new(points)
}

fn from_geo_polygon(polygon: &Polygon<f64>) -> OutlinePolygon {
    OutlinePolygon {
        exterior: from_line_string(polygon.exterior()),
        holes: polygon.interiors().iter().map(from_line_string).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Vec2;

    fn square(x: f64, y: f64, size: f64) -> OutlinePolygon {
        OutlinePolygon::simple(Contour::new(vec![
            Point::new(x, y),
            Point::new(x + size, y),
            Point::new(x + size, y + size),
            Point::new(x, y + size),
        ]))
    }

    fn total_area(polygons: &[OutlinePolygon]) -> f64 {
        polygons.iter().map(OutlinePolygon::area).sum()
    }

    #[test]
    fn overlapping_squares_merge_into_one() {
        let merged = GeoUnion.union(&[square(0.0, 0.0, 2.0), square(1.0, 1.0, 2.0)]).unwrap();
        assert_eq!(merged.len(), 1);
        assert!((total_area(&merged) - 7.0).abs() < 1e-6);
    }

    #[test]
    fn disjoint_squares_stay_separate() {
        let merged = GeoUnion.union(&[square(0.0, 0.0, 1.0), square(5.0, 0.0, 1.0)]).unwrap();
        assert_eq!(merged.len(), 2);
        assert!((total_area(&merged) - 2.0).abs() < 1e-6);
    }

    #[test]
    fn ring_of_squares_keeps_its_hole() {
        let ring = [
            square(0.0, 0.0, 3.0).map_points(|p| Point::new(p.x, p.y / 3.0)),
            square(0.0, 0.0, 3.0).map_points(|p| Point::new(p.x, p.y / 3.0 + 2.0)),
            square(0.0, 0.0, 3.0).map_points(|p| Point::new(p.x / 3.0, p.y)),
            square(0.0, 0.0, 3.0).map_points(|p| Point::new(p.x / 3.0 + 2.0, p.y)),
        ];
        let merged = GeoUnion.union(&ring).unwrap();
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].holes.len(), 1);
        assert!((merged[0].area() - 8.0).abs() < 1e-6);
    }

    #[test]
    fn empty_input_gives_empty_output() {
        assert!(GeoUnion.union(&[]).unwrap().is_empty());
    }

    #[test]
    fn output_rings_are_not_explicitly_closed() {
        let merged = GeoUnion.union(&[square(0.0, 0.0, 1.0)]).unwrap();
        let points = merged[0].exterior.points();
        assert_eq!(points.len(), 4);
        assert_ne!(points.first(), points.last());
    }

    #[test]
    fn degenerate_rings_are_rejected() {
        let flat = OutlinePolygon::simple(Contour::new(vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(2.0, 0.0),
        ]));
        let err = GeoUnion.union(&[square(0.0, 0.0, 1.0), flat]).unwrap_err();
        assert!(matches!(err, MergeError::InvalidInput { index: 1, .. }));

        let nan = OutlinePolygon::simple(Contour::new(vec![Point::new(f64::NAN, 0.0); 3]));
        assert!(GeoUnion.union(&[nan]).is_err());
    }

    #[test]
    fn union_is_deterministic() {
        let input: Vec<OutlinePolygon> = (0..6)
            .map(|i| square(0.0, 0.0, 1.0).translate(Vec2::new(i as f64 * 0.5, 0.0)))
            .collect();
        let first = GeoUnion.union(&input).unwrap();
        let second = GeoUnion.union(&input).unwrap();
        assert_eq!(first, second);
    }
}
