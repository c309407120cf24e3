//! Edge Table and Active Edge List

use crate::edge::Edge;

/// Edges not yet reached by the scanline
///
/// Sorted once by descending minimum y; the next edge to activate is
///   always the last one. The only way to take edges out is
///   [`pop_ready`](#method.pop_ready), which keeps the ordering intact.
#[derive(Debug,Default,Clone)]
pub struct EdgeTable {
    edges: Vec<Edge>,
}

impl EdgeTable {
    /// Create a table holding `edges`
    pub fn new(mut edges: Vec<Edge>) -> Self {
        edges.sort_by(|a,b| b.min_y().total_cmp(&a.min_y()));
        Self { edges }
    }
    pub fn len(&self) -> usize {
        self.edges.len()
    }
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
    /// Next edge to activate
    pub fn peek(&self) -> Option<&Edge> {
        self.edges.last()
    }
    /// Smallest minimum y of any remaining edge
    pub fn min_y(&self) -> Option<f64> {
        self.peek().map(Edge::min_y)
    }
    /// Largest maximum y of any remaining edge
    pub fn max_y(&self) -> Option<f64> {
        self.edges.iter().map(Edge::max_y).fold(None, |m, y| {
            Some(m.map_or(y, |m: f64| m.max(y)))
        })
    }
    /// Remove the next edge if the scanline at `y` has reached it
    pub fn pop_ready(&mut self, y: f64) -> Option<Edge> {
        match self.edges.last() {
            Some(e) if e.min_y() <= y => self.edges.pop(),
            _ => None,
        }
    }
}

/// Edges crossing or touching the current scanline
#[derive(Debug,Default,Clone)]
pub struct ActiveEdges {
    edges: Vec<Edge>,
}

impl ActiveEdges {
    pub fn new() -> Self {
        Self { edges: vec![] }
    }
    pub fn len(&self) -> usize {
        self.edges.len()
    }
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }
    /// Move every edge the scanline at `y` has reached out of `table`
    ///
    /// Returns the number of edges added
    pub fn activate(&mut self, table: &mut EdgeTable, y: f64) -> usize {
        let n = self.edges.len();
        while let Some(e) = table.pop_ready(y) {
            self.edges.push(e);
        }
        self.edges.len() - n
    }
    /// Drop edges the scanline at `y` has passed, `y >= max_y`
    ///
    /// Returns the number of edges removed
    pub fn retire(&mut self, y: f64) -> usize {
        let n = self.edges.len();
        let kept : Vec<Edge> = self.edges.iter()
            .filter(|e| y < e.max_y())
            .copied()
            .collect();
        self.edges = kept;
        n - self.edges.len()
    }
    /// Order by x at minimum y, then by x at maximum y
    pub fn sort(&mut self) {
        self.edges.sort_by(|a,b| {
            a.x_at_min_y().total_cmp(&b.x_at_min_y())
                .then_with(|| a.x_at_max_y().total_cmp(&b.x_at_max_y()))
        });
    }
    /// Crossing x of each active edge at `y`, in list order
    pub fn crossings(&self, y: f64) -> Vec<f64> {
        self.edges.iter().map(|e| e.intersect_x(y)).collect()
    }
}
