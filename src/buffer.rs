//! Rendering buffer

use std::path::Path;

use crate::error::{FillError, Result};
use crate::ppm;
use crate::PixelSink;

/// Bytes per pixel: red, green, blue, alpha
pub const BPP: usize = 4;

/// Rendering Buffer
///
/// RGBA data stored in row-major order (C-format)
#[derive(Debug,Default,Clone)]
pub struct RenderingBuffer {
    /// Pixel / Component level data of Image
    pub data: Vec<u8>,
    /// Image Width in pixels
    pub width: usize,
    /// Image Height in pixels
    pub height: usize,
}

impl RenderingBuffer {
    /// Create a new buffer of width and height
    ///
    /// All components start at 0
    pub fn new(width: usize, height: usize) -> Self {
        RenderingBuffer {
            width, height, data: vec![0u8; width * height * BPP]
        }
    }
    /// Wrap existing RGBA data
    ///
    ///     use scanfill::RenderingBuffer;
    ///
    ///     assert!(RenderingBuffer::from_vec(vec![0; 16], 2, 2).is_ok());
    ///     assert!(RenderingBuffer::from_vec(vec![0; 15], 2, 2).is_err());
    ///
    pub fn from_vec(data: Vec<u8>, width: usize, height: usize) -> Result<Self> {
        let expected = width * height * BPP;
        if data.len() != expected {
            return Err(FillError::BufferSize { len: data.len(), expected, width, height });
        }
        Ok(RenderingBuffer { data, width, height })
    }
    /// Size of underlying Rendering Buffer
    pub fn len(&self) -> usize {
        self.data.len()
    }
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
    /// Set every component to `v`
    pub fn clear(&mut self, v: u8) {
        self.data.iter_mut().for_each(|c| *c = v);
    }
    /// Components of pixel (`x`,`y`)
    pub fn pixel(&self, x: usize, y: usize) -> [u8; BPP] {
        let p = &self[(x,y)];
        [p[0], p[1], p[2], p[3]]
    }
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }
    /// Write the buffer to an image file, format from the extension
    pub fn to_file<P: AsRef<Path>>(&self, filename: P) -> Result<()> {
        ppm::write_file(&self.data, self.width, self.height, filename)
    }
}

impl PixelSink for RenderingBuffer {
    fn width(&self) -> usize {
        self.width
    }
    fn height(&self) -> usize {
        self.height
    }
    /// Paint (`x`,`y`) opaque white
    fn set_pixel(&mut self, x: usize, y: usize) {
        self[(x,y)].copy_from_slice(&[255; BPP]);
    }
}

use std::ops::Index;
use std::ops::IndexMut;

impl Index<(usize,usize)> for RenderingBuffer {
    type Output = [u8];
    fn index(&self, index: (usize, usize)) -> &[u8] {
        assert!(index.0 < self.width, "request {} >= {} width :: index", index.0, self.width);
        assert!(index.1 < self.height, "request {} >= {} height :: index", index.1, self.height);
        let i = ((index.1 * self.width) + index.0) * BPP;
        &self.data[i .. i + BPP]
    }
}
impl IndexMut<(usize,usize)> for RenderingBuffer {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut [u8] {
        assert!(index.0 < self.width, "request {} >= {} width :: index_mut", index.0, self.width);
        assert!(index.1 < self.height, "request {} >= {} height :: index_mut", index.1, self.height);
        let i = ((index.1 * self.width) + index.0) * BPP;
        &mut self.data[i .. i + BPP]
    }
}
