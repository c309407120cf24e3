//! Scanlines

use std::ops::Range;

use crate::point::Point;

/// Interior interval `[x1, x2)` on one scanline
#[derive(Debug,Default,Copy,Clone,PartialEq)]
pub struct Span {
    pub x1: f64,
    pub x2: f64,
}

impl Span {
    pub fn new(x1: f64, x2: f64) -> Self {
        Self { x1, x2 }
    }
    /// Integer columns `x` with `x1 <= x < x2`
    ///
    ///     use scanfill::Span;
    ///
    ///     assert_eq!(Span::new(0.0, 4.0).pixels(), 0 .. 4);
    ///     assert_eq!(Span::new(1.5, 3.2).pixels(), 2 .. 4);
    ///     assert_eq!(Span::new(2.0, 2.0).pixels().count(), 0);
    ///
    pub fn pixels(&self) -> Range<i64> {
        (self.x1.ceil() as i64) .. (self.x2.ceil() as i64)
    }
}

/// One row of paired boundary crossings
#[derive(Debug,Default,Clone)]
pub struct Scanline {
    /// Row
    pub y: i64,
    /// Crossings ordered left to right; always an even count
    pub crossings: Vec<Point<f64>>,
}

impl Scanline {
    pub fn new() -> Self {
        Self { y: 0, crossings: vec![] }
    }
    pub fn reset_spans(&mut self) {
        self.crossings.clear();
    }
    pub fn finalize(&mut self, y: i64) {
        self.y = y;
    }
    pub fn num_spans(&self) -> usize {
        self.crossings.len() / 2
    }
    /// Store crossings `xs` at row `y`
    ///
    /// `xs` must be ordered left to right and hold an even number of values
    pub fn add_crossings(&mut self, y: i64, xs: &[f64]) {
        debug_assert!(xs.len() % 2 == 0);
        debug_assert!(xs.windows(2).all(|w| w[0] <= w[1]));
        let yf = y as f64;
        self.crossings.extend(xs.iter().map(|&x| Point::new(x, yf)));
    }
    /// Consecutive crossings paired into interior spans
    pub fn spans(&self) -> impl Iterator<Item = Span> + '_ {
        self.crossings.chunks_exact(2).map(|p| Span::new(p[0].x, p[1].x))
    }
}
