//! Fill configuration

use crate::edge::DegenerateEdges;

/// Options shared by every fill
///
///     use scanfill::{FillConfig, DegenerateEdges};
///
///     let config = FillConfig::new()
///         .with_degenerate_edges(DegenerateEdges::Vertical)
///         .with_max_scanlines(4096);
///     assert_eq!(config.max_scanlines, Some(4096));
///
#[derive(Debug,Default,Copy,Clone,PartialEq)]
pub struct FillConfig {
    /// Edges dropped while building the edge table
    pub degenerate: DegenerateEdges,
    /// Scanlines swept before the fill is aborted
    ///
    /// `None` uses the y-extent of the polygon plus two
    pub max_scanlines: Option<usize>,
}

impl FillConfig {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn with_degenerate_edges(mut self, rule: DegenerateEdges) -> Self {
        self.degenerate = rule;
        self
    }
    pub fn with_max_scanlines(mut self, n: usize) -> Self {
        self.max_scanlines = Some(n);
        self
    }
}
