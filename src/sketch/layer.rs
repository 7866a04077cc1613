//! Stroke and dot layers
//!
//! The sketch format encodes meaning in the number of points of a layer.
//! [`Layer`] turns that into an explicit variant so the rest of the
//! pipeline can match on it.

use super::same_point;
use kurbo::Point;

/// One drawn layer of a character
#[derive(Debug, Clone, PartialEq)]
pub enum Layer {
    /// A single point rendered as a filled circle
    Dot(Point),
    /// An open polyline with at least two distinct consecutive points
    Stroke(Vec<Point>),
}

impl Layer {
    /// Classify a raw point list.
    ///
    /// Consecutive duplicate points are collapsed first, so a stroke never
    /// carries a zero-length segment. A list that collapses to one point is
    /// a dot, and an empty list is discarded.
    pub fn from_points(points: &[Point]) -> Option<Self> {
        let mut cleaned: Vec<Point> = Vec::with_capacity(points.len());
        for &point in points {
            match cleaned.last() {
                Some(&last) if same_point(last, point) => {}
                _ => cleaned.push(point),
            }
        }

        match cleaned.len() {
            0 => None,
            1 => Some(Layer::Dot(cleaned[0])),
            _ => Some(Layer::Stroke(cleaned)),
        }
    }

    /// Build a layer from `[x, y]` pairs as they appear in definition files
    pub fn from_pairs(pairs: &[[f64; 2]]) -> Option<Self> {
        let points: Vec<Point> = pairs.iter().map(|&[x, y]| Point::new(x, y)).collect();
        Self::from_points(&points)
    }

    /// All points of the layer in drawing order
    pub fn points(&self) -> &[Point] {
        match self {
            Layer::Dot(point) => std::slice::from_ref(point),
            Layer::Stroke(points) => points,
        }
    }

    /// Points as `[x, y]` pairs, the inverse of [`Layer::from_pairs`]
    pub fn to_pairs(&self) -> Vec<[f64; 2]> {
        self.points().iter().map(|p| [p.x, p.y]).collect()
    }

    pub fn is_dot(&self) -> bool {
        matches!(self, Layer::Dot(_))
    }

    /// Consecutive point pairs of a stroke; empty for a dot
    pub fn segments(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        let points: &[Point] = match self {
            Layer::Dot(_) => &[],
            Layer::Stroke(points) => points,
        };
        points.windows(2).map(|pair| (pair[0], pair[1]))
    }
}
