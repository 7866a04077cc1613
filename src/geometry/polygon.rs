//! Closed rings and filled outline polygons
//!
//! Geometry is kept as plain point lists. Every ring is implicitly closed:
//! the first point is not repeated at the end.

use kurbo::{BezPath, Point, Rect, Vec2};
use std::f64::consts::PI;

/// A closed ring of points
#[derive(Debug, Clone, PartialEq)]
pub struct Contour {
    points: Vec<Point>,
}

impl Contour {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// A regular polygon approximating a circle.
    ///
    /// Vertices start at angle zero and advance with increasing angle, so
    /// every circle has the same orientation.
    pub fn regular_polygon(center: Point, radius: f64, segments: usize) -> Self {
        let points = (0..segments)
            .map(|j| {
                let angle = 2.0 * PI * j as f64 / segments as f64;
                center + Vec2::from_angle(angle) * radius
            })
            .collect();
        Self { points }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Shoelace area; positive when the ring turns with increasing angle
    pub fn signed_area(&self) -> f64 {
        let n = self.points.len();
        if n < 3 {
            return 0.0;
        }
        let twice_area: f64 = (0..n)
            .map(|i| {
                let a = self.points[i];
                let b = self.points[(i + 1) % n];
                a.x * b.y - b.x * a.y
            })
            .sum();
        twice_area / 2.0
    }

    pub fn bounding_box(&self) -> Option<Rect> {
        let (first, rest) = self.points.split_first()?;
        Some(
            rest.iter()
                .fold(Rect::from_points(*first, *first), |rect, &p| rect.union_pt(p)),
        )
    }

    pub fn map_points(&self, f: impl Fn(Point) -> Point) -> Self {
        Self {
            points: self.points.iter().map(|&p| f(p)).collect(),
        }
    }

    pub fn translate(&self, offset: Vec2) -> Self {
        self.map_points(|p| p + offset)
    }

    pub fn is_finite(&self) -> bool {
        self.points.iter().all(|p| p.is_finite())
    }

    /// Append this ring to a kurbo path as a closed subpath
    pub fn append_to(&self, path: &mut BezPath) {
        let Some((first, rest)) = self.points.split_first() else {
            return;
        };
        path.move_to(*first);
        for &point in rest {
            path.line_to(point);
        }
        path.close_path();
    }
}

/// One filled region: an outer ring plus any holes cut out of it
#[derive(Debug, Clone, PartialEq)]
pub struct OutlinePolygon {
    pub exterior: Contour,
    pub holes: Vec<Contour>,
}

impl OutlinePolygon {
    /// A polygon without holes
    pub fn simple(exterior: Contour) -> Self {
        Self {
            exterior,
            holes: Vec::new(),
        }
    }

    /// Exterior first, then holes
    pub fn contours(&self) -> impl Iterator<Item = &Contour> + '_ {
        std::iter::once(&self.exterior).chain(self.holes.iter())
    }

    pub fn bounding_box(&self) -> Option<Rect> {
        self.exterior.bounding_box()
    }

    pub fn map_points(&self, f: impl Fn(Point) -> Point) -> Self {
        Self {
            exterior: self.exterior.map_points(&f),
            holes: self.holes.iter().map(|hole| hole.map_points(&f)).collect(),
        }
    }

    pub fn translate(&self, offset: Vec2) -> Self {
        self.map_points(|p| p + offset)
    }

    /// Net filled area, exterior minus holes
    pub fn area(&self) -> f64 {
        self.exterior.signed_area().abs()
            - self
                .holes
                .iter()
                .map(|hole| hole.signed_area().abs())
                .sum::<f64>()
    }

    pub fn to_bezpath(&self) -> BezPath {
        let mut path = BezPath::new();
        for contour in self.contours() {
            contour.append_to(&mut path);
        }
        path
    }
}

/// Bounding box over a set of polygons, `None` when there are no points
pub fn bounding_box_of(polygons: &[OutlinePolygon]) -> Option<Rect> {
    polygons
        .iter()
        .filter_map(OutlinePolygon::bounding_box)
        .reduce(|a, b| a.union(b))
}
