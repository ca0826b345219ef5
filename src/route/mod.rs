//! Route loading and representation.
//!
//! This module handles reading plain-text result files and representing the
//! tour as an ordered sequence of 2D stops.

mod reader;

pub use reader::RouteReader;

use crate::error::{MeanderError, Result};

/// A single 2D stop on the route.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Point {
    /// Create a new point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Axis-aligned coordinate bounds of a route.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Smallest x coordinate.
    pub x_min: f64,
    /// Largest x coordinate.
    pub x_max: f64,
    /// Smallest y coordinate.
    pub y_min: f64,
    /// Largest y coordinate.
    pub y_max: f64,
}

/// An ordered tour of 2D stops, visited in input order.
///
/// Built once by [`RouteReader`] and never mutated afterwards. The visit
/// order is the input order; the tour closes from the last stop back to
/// the first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Route {
    points: Vec<Point>,
}

impl Route {
    /// Create a route from an ordered list of stops.
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Number of stops.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True when the route has no stops.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// All stops in visit order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Stop at `index`, if present.
    pub fn get(&self, index: usize) -> Option<Point> {
        self.points.get(index).copied()
    }

    /// First stop of the tour.
    pub fn first(&self) -> Option<Point> {
        self.points.first().copied()
    }

    /// Last stop of the tour.
    pub fn last(&self) -> Option<Point> {
        self.points.last().copied()
    }

    /// The segment that closes the tour, from the last stop back to the first.
    ///
    /// A single-stop route closes onto itself with a zero-length segment.
    /// An empty route has no stops to close and fails.
    pub fn closing_segment(&self) -> Result<(Point, Point)> {
        match (self.last(), self.first()) {
            (Some(last), Some(first)) => Ok((last, first)),
            _ => Err(MeanderError::EmptyRoute),
        }
    }

    /// Min/max coordinate bounds over all stops, or `None` for an empty route.
    pub fn bounds(&self) -> Option<Bounds> {
        let first = self.first()?;
        let mut bounds = Bounds {
            x_min: first.x,
            x_max: first.x,
            y_min: first.y,
            y_max: first.y,
        };
        for p in &self.points {
            bounds.x_min = bounds.x_min.min(p.x);
            bounds.x_max = bounds.x_max.max(p.x);
            bounds.y_min = bounds.y_min.min(p.y);
            bounds.y_max = bounds.y_max.max(p.y);
        }
        Some(bounds)
    }

    /// Euclidean length of the closed tour, including the closing segment.
    pub fn total_length(&self) -> f64 {
        let mut length: f64 = self
            .points
            .windows(2)
            .map(|pair| pair[0].distance_to(pair[1]))
            .sum();
        if let Ok((last, first)) = self.closing_segment() {
            length += last.distance_to(first);
        }
        length
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Route {
        Route::new(vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 1.0),
        ])
    }

    #[test]
    fn closing_segment_connects_last_to_first() {
        let (last, first) = square().closing_segment().unwrap();
        assert_eq!(last, Point::new(0.0, 1.0));
        assert_eq!(first, Point::new(0.0, 0.0));
    }

    #[test]
    fn closing_segment_on_single_stop_is_degenerate() {
        let route = Route::new(vec![Point::new(2.5, -3.0)]);
        let (last, first) = route.closing_segment().unwrap();
        assert_eq!(last, first);
        assert_eq!(last.distance_to(first), 0.0);
    }

    #[test]
    fn closing_segment_on_empty_route_fails() {
        assert!(matches!(
            Route::default().closing_segment(),
            Err(MeanderError::EmptyRoute)
        ));
    }

    #[test]
    fn total_length_includes_closing_segment() {
        assert!((square().total_length() - 4.0).abs() < 1e-12);
    }

    #[test]
    fn total_length_of_single_stop_is_zero() {
        assert_eq!(Route::new(vec![Point::new(1.0, 2.0)]).total_length(), 0.0);
    }

    #[test]
    fn bounds_cover_all_stops() {
        let b = square().bounds().unwrap();
        assert_eq!((b.x_min, b.x_max), (0.0, 1.0));
        assert_eq!((b.y_min, b.y_max), (0.0, 1.0));
    }

    #[test]
    fn empty_route_has_no_bounds() {
        assert!(Route::default().bounds().is_none());
    }
}
