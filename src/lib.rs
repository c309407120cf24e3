//! How does this work
//!
//! ```text
//!    ras = Rasterizer()
//!    sl  = Scanline()
//!  Rasterizer Operations
//!    add_polygon
//!      build_edges()     -- drop degenerate edges
//!      EdgeTable::new()  -- sorted by descending min y
//!  Render
//!   render_scanlines(ras, ren)
//!     rewind_scanlines  -- first row, scanline limit
//!     sweep_scanline()
//!       activate()      -- Edge Table -> Active Edge List
//!       retire()        -- drop passed edges
//!       sort(), crossings()
//!       add_crossings() -- paired into spans
//!     render()          -- PointCloud, SpanList, PixelRenderer
//! ```

pub mod point;
pub mod edge;
pub mod table;
pub mod scan;
pub mod raster;
pub mod render;
pub mod buffer;
pub mod ppm;
pub mod config;
pub mod error;
pub mod fill;

pub use point::*;
pub use edge::*;
pub use table::*;
pub use scan::*;
pub use raster::*;
pub use render::*;
pub use buffer::*;
pub use config::*;
pub use error::*;
pub use fill::*;

/// Render a single Scanline
pub trait Render {
    /// Render a single Scanline Row
    fn render(&mut self, sl: &Scanline);
}

/// Destination for filled pixels
///
/// Coordinates passed to `set_pixel` are always inside
///   `width` x `height`
pub trait PixelSink {
    fn width(&self) -> usize;
    fn height(&self) -> usize;
    /// Paint one opaque white pixel
    fn set_pixel(&mut self, x: usize, y: usize);
}
