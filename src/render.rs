//! Renderers

use log::trace;

use crate::point::Point;
use crate::raster::{FillReport, Rasterizer};
use crate::scan::Scanline;
use crate::PixelSink;
use crate::Render;

/// Every interior pixel, row by row, left to right
#[derive(Debug,Default,Clone)]
pub struct PointCloud {
    pub points: Vec<Point<i64>>,
}

impl PointCloud {
    pub fn new() -> Self {
        Self { points: vec![] }
    }
}

impl Render for PointCloud {
    fn render(&mut self, sl: &Scanline) {
        for span in sl.spans() {
            self.points.extend(span.pixels().map(|x| Point::new(x, sl.y)));
        }
    }
}

/// Boundary crossings of each row, unexpanded
///
/// Each entry holds the ordered crossings of one row; consecutive
///   pairs bound the interior
#[derive(Debug,Default,Clone)]
pub struct SpanList {
    pub rows: Vec<Vec<Point<f64>>>,
}

impl SpanList {
    pub fn new() -> Self {
        Self { rows: vec![] }
    }
}

impl Render for SpanList {
    fn render(&mut self, sl: &Scanline) {
        self.rows.push(sl.crossings.clone());
    }
}

/// Writes interior pixels to a [PixelSink]
///
/// Spans are clipped to the sink before writing
///
/// [PixelSink]: ../trait.PixelSink.html
#[derive(Debug)]
pub struct PixelRenderer<'a,S> where S: PixelSink, S: 'a {
    pub sink: &'a mut S,
}

impl<'a,S> PixelRenderer<'a,S> where S: PixelSink {
    pub fn with_sink(sink: &'a mut S) -> Self {
        Self { sink }
    }
    /// Visible part of `x1 .. x2` on row `y`
    fn clip(&self, x1: i64, x2: i64, y: i64) -> Option<(usize, usize, usize)> {
        let (w, h) = (self.sink.width() as i64, self.sink.height() as i64);
        if y < 0 || y >= h {
            return None;
        }
        let x1 = x1.max(0);
        let x2 = x2.min(w);
        if x1 >= x2 {
            return None;
        }
        Some((x1 as usize, x2 as usize, y as usize))
    }
}

impl<'a,S> Render for PixelRenderer<'a,S> where S: PixelSink {
    fn render(&mut self, sl: &Scanline) {
        for span in sl.spans() {
            let r = span.pixels();
            match self.clip(r.start, r.end, sl.y) {
                Some((x1, x2, y)) => {
                    for x in x1 .. x2 {
                        self.sink.set_pixel(x, y);
                    }
                },
                None => trace!("RENDER PIXELS: span {:?} on row {} clipped", r, sl.y),
            }
        }
    }
}

/// Sweep all scanlines of `ras` into `ren`
///
/// Anything rendered before an aborted sweep stays in `ren`
pub fn render_scanlines<R: Render>(ras: &mut Rasterizer, ren: &mut R) -> FillReport {
    if ras.rewind_scanlines() {
        let mut sl = Scanline::new();
        while ras.sweep_scanline(&mut sl) {
            ren.render(&sl);
        }
    }
    ras.report().clone()
}
