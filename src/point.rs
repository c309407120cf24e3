//! Points

/// Coordinate pair
///
/// Polygon vertices and scanline crossings use `Point<f64>`,
///   filled pixels use `Point<i64>`
#[derive(Debug,Default,Copy,Clone,PartialEq)]
pub struct Point<T> {
    pub x: T,
    pub y: T,
}

impl<T> Point<T> {
    /// Create a new point at (`x`,`y`)
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl<T> From<(T,T)> for Point<T> {
    fn from((x,y): (T,T)) -> Self {
        Self::new(x, y)
    }
}

impl Point<f64> {
    /// Both coordinates are finite
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Convert a slice of (x,y) pairs to polygon vertices
///
///     use scanfill::{points, Point};
///
///     let p = points(&[(0.0,0.0), (4.0,0.0), (4.0,4.0)]);
///     assert_eq!(p[1], Point::new(4.0, 0.0));
///
pub fn points(xy: &[(f64,f64)]) -> Vec<Point<f64>> {
    xy.iter().map(|&p| Point::from(p)).collect()
}
