//! Scanline Rasterizer

use log::{debug, trace, warn};

use crate::config::FillConfig;
use crate::edge::{build_edges, Edge};
use crate::point::Point;
use crate::scan::Scanline;
use crate::table::{ActiveEdges, EdgeTable};

/// Rows beyond 2^53 no longer advance in f64
const MAX_EXACT_Y: f64 = 9_007_199_254_740_992.0;

/// Progress of a sweep
#[derive(Debug,PartialEq,Copy,Clone)]
pub enum SweepState {
    /// No sweep started
    Initial,
    /// Scanlines remain
    Sweeping,
    /// Edge Table and Active Edge List both drained
    Complete,
    /// Scanline limit reached before the sweep finished
    Aborted,
}
impl Default for SweepState {
    fn default() -> SweepState {
        SweepState::Initial
    }
}

/// Summary of a finished (or abandoned) sweep
#[derive(Debug,Default,Clone,PartialEq)]
pub struct FillReport {
    /// Scanlines swept
    pub scanlines: usize,
    /// Rows dropped for an odd crossing count
    pub skipped: Vec<i64>,
    pub state: SweepState,
}

impl FillReport {
    pub fn is_complete(&self) -> bool {
        self.state == SweepState::Complete
    }
    pub fn is_aborted(&self) -> bool {
        self.state == SweepState::Aborted
    }
}

/// Scanline polygon rasterizer
///
/// Edges are loaded with [`add_polygon`](#method.add_polygon) or
///   [`add_edges`](#method.add_edges), then
///   [`rewind_scanlines`](#method.rewind_scanlines) positions the scanline
///   at the lowest row and each call to
///   [`sweep_scanline`](#method.sweep_scanline) produces the next row that
///   has spans.
///
///     use scanfill::{points, Rasterizer, Scanline};
///
///     let mut ras = Rasterizer::new();
///     ras.add_polygon(&points(&[(0.,0.), (4.,0.), (4.,2.), (0.,2.)]));
///     assert!(ras.rewind_scanlines());
///
///     let mut sl = Scanline::new();
///     let mut rows = vec![];
///     while ras.sweep_scanline(&mut sl) {
///         rows.push(sl.y);
///     }
///     assert_eq!(rows, vec![0, 1]);
///     assert!(ras.report().is_complete());
///
#[derive(Debug,Default)]
pub struct Rasterizer {
    config: FillConfig,
    table: EdgeTable,
    active: ActiveEdges,
    scan_y: i64,
    limit: usize,
    report: FillReport,
}

impl Rasterizer {
    pub fn new() -> Self {
        Self::with_config(FillConfig::default())
    }
    pub fn with_config(config: FillConfig) -> Self {
        Self { config, .. Self::default() }
    }
    pub fn config(&self) -> &FillConfig {
        &self.config
    }
    /// Drop all edges and sweep progress
    pub fn reset(&mut self) {
        self.table = EdgeTable::default();
        self.active = ActiveEdges::new();
        self.scan_y = 0;
        self.limit = 0;
        self.report = FillReport::default();
    }
    /// Load the closed polygon through `points`, replacing any previous edges
    pub fn add_polygon(&mut self, points: &[Point<f64>]) {
        let edges = build_edges(points, self.config.degenerate);
        debug!("ADD_POLYGON: {} points -> {} edges", points.len(), edges.len());
        self.add_edges(edges);
    }
    /// Load an edge set as is, replacing any previous edges
    pub fn add_edges(&mut self, edges: Vec<Edge>) {
        self.reset();
        self.table = EdgeTable::new(edges);
    }
    /// Position the scanline at the first row
    ///
    /// Returns false if there is nothing to sweep
    pub fn rewind_scanlines(&mut self) -> bool {
        let (y0, y1) = match (self.table.min_y(), self.table.max_y()) {
            (Some(y0), Some(y1)) => (y0, y1),
            _ => {
                self.report.state = SweepState::Complete;
                return false;
            }
        };
        if y0 < -MAX_EXACT_Y || y1 > MAX_EXACT_Y {
            warn!("REWIND SCANLINES: y {} .. {} outside exact integer rows", y0, y1);
            self.report.state = SweepState::Aborted;
            return false;
        }
        self.scan_y = y0.floor() as i64;
        self.limit = match self.config.max_scanlines {
            Some(n) => n,
            None => {
                let extent = (y1.ceil() as i64).saturating_sub(self.scan_y);
                (extent.max(0) as usize).saturating_add(2)
            }
        };
        self.report.state = SweepState::Sweeping;
        debug!("REWIND SCANLINES: y {} .. {} edges {} limit {}",
               y0, y1, self.table.len(), self.limit);
        true
    }
    /// Sweep to the next row with spans and store it in `sl`
    ///
    /// Returns false once the sweep is complete or aborted
    pub fn sweep_scanline(&mut self, sl: &mut Scanline) -> bool {
        loop {
            if self.report.state != SweepState::Sweeping {
                return false;
            }
            let y = self.scan_y as f64;
            let added = self.active.activate(&mut self.table, y);
            let removed = self.active.retire(y);
            if self.table.is_empty() && self.active.is_empty() {
                debug!("SWEEP SCANLINES: complete at y {} after {} scanlines",
                       self.scan_y, self.report.scanlines);
                self.report.state = SweepState::Complete;
                return false;
            }
            if self.report.scanlines >= self.limit {
                warn!("SWEEP SCANLINES: aborted at y {} after {} scanlines",
                      self.scan_y, self.report.scanlines);
                self.report.state = SweepState::Aborted;
                return false;
            }
            self.report.scanlines += 1;
            trace!("SWEEP SCANLINES: y {} added {} removed {} active {}",
                   self.scan_y, added, removed, self.active.len());

            sl.reset_spans();
            if ! self.active.is_empty() {
                self.active.sort();
                let mut xs = self.active.crossings(y);
                if xs.len() % 2 == 0 {
                    xs.sort_by(|a,b| a.total_cmp(b));
                    sl.add_crossings(self.scan_y, &xs);
                } else {
                    warn!("SWEEP SCANLINES: odd crossing count {} at y {}, skipping",
                          xs.len(), self.scan_y);
                    self.report.skipped.push(self.scan_y);
                }
            }
            let y = self.scan_y;
            self.scan_y = match y.checked_add(1) {
                Some(next) => next,
                None => {
                    warn!("SWEEP SCANLINES: row overflow after y {}", y);
                    self.report.state = SweepState::Aborted;
                    y
                }
            };
            if sl.num_spans() != 0 {
                sl.finalize(y);
                return true;
            }
        }
    }
    /// State of the current sweep
    pub fn report(&self) -> &FillReport {
        &self.report
    }
}
