//! One call fills
//!
//! Each fill builds its own Edge Table and Active Edge List; nothing is
//!   kept between calls

use crate::config::FillConfig;
use crate::point::Point;
use crate::raster::{FillReport, Rasterizer};
use crate::render::{render_scanlines, PixelRenderer, PointCloud, SpanList};
use crate::PixelSink;
use crate::Render;

fn fill_with<R: Render>(points: &[Point<f64>], config: &FillConfig, ren: &mut R) -> FillReport {
    let mut ras = Rasterizer::with_config(*config);
    ras.add_polygon(points);
    render_scanlines(&mut ras, ren)
}

/// Integer points inside the polygon, row by row, left to right
///
///     use scanfill::{fill_points, points, Point};
///
///     let square = points(&[(0.,0.), (2.,0.), (2.,2.), (0.,2.)]);
///     assert_eq!(fill_points(&square), vec![
///         Point::new(0,0), Point::new(1,0),
///         Point::new(0,1), Point::new(1,1),
///     ]);
///
pub fn fill_points(points: &[Point<f64>]) -> Vec<Point<i64>> {
    fill_points_with(points, &FillConfig::default()).0
}

/// [fill_points](fn.fill_points.html) with explicit options
pub fn fill_points_with(points: &[Point<f64>], config: &FillConfig) -> (Vec<Point<i64>>, FillReport) {
    let mut ren = PointCloud::new();
    let report = fill_with(points, config, &mut ren);
    (ren.points, report)
}

/// Ordered boundary crossings of each row that has interior
pub fn fill_spans(points: &[Point<f64>]) -> Vec<Vec<Point<f64>>> {
    fill_spans_with(points, &FillConfig::default()).0
}

/// [fill_spans](fn.fill_spans.html) with explicit options
pub fn fill_spans_with(points: &[Point<f64>], config: &FillConfig) -> (Vec<Vec<Point<f64>>>, FillReport) {
    let mut ren = SpanList::new();
    let report = fill_with(points, config, &mut ren);
    (ren.rows, report)
}

/// Paint every interior pixel of the polygon into `sink`
///
///     use scanfill::{fill_pixels, points, RenderingBuffer};
///
///     let mut buf = RenderingBuffer::new(4, 4);
///     fill_pixels(&points(&[(1.,1.), (3.,1.), (3.,3.), (1.,3.)]), &mut buf);
///     assert_eq!(buf.pixel(1,1), [255,255,255,255]);
///     assert_eq!(buf.pixel(3,3), [0,0,0,0]);
///
pub fn fill_pixels<S: PixelSink>(points: &[Point<f64>], sink: &mut S) -> FillReport {
    fill_pixels_with(points, &FillConfig::default(), sink)
}

/// [fill_pixels](fn.fill_pixels.html) with explicit options
pub fn fill_pixels_with<S: PixelSink>(points: &[Point<f64>], config: &FillConfig, sink: &mut S) -> FillReport {
    let mut ren = PixelRenderer::with_sink(sink);
    fill_with(points, config, &mut ren)
}
