//! Polygon edges

use log::warn;

use crate::point::Point;

/// Which zero-extent edges are dropped when building edges
///
/// `Horizontal` drops edges whose endpoints share a `y`; such edges never
///   cross a scanline.
///
/// `Vertical` drops edges whose endpoints share an `x`. This is the older
///   rule and it discards the sides of axis-aligned boxes, so a rectangle
///   fills nothing. It is kept so callers depending on it can opt in.
#[derive(Debug,PartialEq,Copy,Clone)]
pub enum DegenerateEdges {
    Horizontal,
    Vertical,
}
impl Default for DegenerateEdges {
    fn default() -> DegenerateEdges {
        DegenerateEdges::Horizontal
    }
}

/// Directed polygon edge from `p1` to `p2`
///
/// Endpoints keep the order they had in the polygon loop
#[derive(Debug,Copy,Clone,PartialEq)]
pub struct Edge {
    pub p1: Point<f64>,
    pub p2: Point<f64>,
}

impl Edge {
    pub fn new(p1: Point<f64>, p2: Point<f64>) -> Self {
        Self { p1, p2 }
    }
    pub fn min_y(&self) -> f64 {
        self.p1.y.min(self.p2.y)
    }
    pub fn max_y(&self) -> f64 {
        self.p1.y.max(self.p2.y)
    }
    /// x of the endpoint with the smaller y
    pub fn x_at_min_y(&self) -> f64 {
        if self.p1.y <= self.p2.y { self.p1.x } else { self.p2.x }
    }
    /// x of the endpoint with the larger y
    pub fn x_at_max_y(&self) -> f64 {
        if self.p1.y <= self.p2.y { self.p2.x } else { self.p1.x }
    }
    /// Edge is dropped under `rule`
    pub fn is_degenerate(&self, rule: DegenerateEdges) -> bool {
        match rule {
            DegenerateEdges::Horizontal => self.p1.y == self.p2.y,
            DegenerateEdges::Vertical   => self.p1.x == self.p2.x,
        }
    }
    /// x where the edge crosses the horizontal line at `y`
    ///
    /// Endpoints are returned exactly when `y` lands on one
    ///
    ///     use scanfill::{Edge, Point};
    ///
    ///     let e = Edge::new(Point::new(8.0, 0.0), Point::new(4.0, 4.0));
    ///     assert_eq!(e.intersect_x(0.0), 8.0);
    ///     assert_eq!(e.intersect_x(1.0), 7.0);
    ///     assert_eq!(e.intersect_x(4.0), 4.0);
    ///
    pub fn intersect_x(&self, y: f64) -> f64 {
        let (p1, p2) = (self.p1, self.p2);
        if y == p1.y {
            return p1.x;
        }
        if y == p2.y {
            return p2.x;
        }
        p1.x + (y - p1.y) * (p2.x - p1.x) / (p2.y - p1.y)
    }
}

/// Build the edges of the closed loop through `points`
///
/// The last point connects back to the first. Edges matching `rule`
///   and edges with non-finite coordinates are discarded. Fewer than
///   3 points is not a polygon and gives no edges.
///
///     use scanfill::{build_edges, points, DegenerateEdges};
///
///     let square = points(&[(0.,0.), (4.,0.), (4.,4.), (0.,4.)]);
///     let edges = build_edges(&square, DegenerateEdges::Horizontal);
///     assert_eq!(edges.len(), 2);
///
pub fn build_edges(points: &[Point<f64>], rule: DegenerateEdges) -> Vec<Edge> {
    if points.len() < 3 {
        return vec![];
    }
    let n = points.len();
    (0 .. n)
        .map(|i| Edge::new(points[i], points[(i + 1) % n]))
        .filter(|e| {
            if ! e.p1.is_finite() || ! e.p2.is_finite() {
                warn!("BUILD_EDGES: dropping non-finite edge {:?}", e);
                return false;
            }
            ! e.is_degenerate(rule)
        })
        .collect()
}
