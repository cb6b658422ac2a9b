//! Rendering buffer
//!
//! A thin view over caller-owned weight memory. The buffer is attached
//! to an existing byte slice and never allocates, clears, or frees
//! pixel storage; ownership stays with the regridding pipeline.

use std::ops::{Index, IndexMut};

/// Borrowed single-channel pixel buffer, row-major, one byte per pixel.
#[derive(Debug)]
pub struct RenderingBuffer<'a> {
    /// Weight data, `width * height` bytes.
    pub data: &'a mut [u8],
    /// Width in pixels.
    pub width: usize,
    /// Height in pixels.
    pub height: usize,
}

impl<'a> RenderingBuffer<'a> {
    /// Attach to caller memory of exactly `width * height` bytes.
    ///
    /// The slice length is validated by the public entry point before a
    /// buffer is ever constructed.
    pub fn attach(data: &'a mut [u8], width: usize, height: usize) -> Self {
        debug_assert_eq!(data.len(), width * height);
        RenderingBuffer {
            data,
            width,
            height,
        }
    }
    /// Buffer size in bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
    /// One row of pixels.
    pub fn row(&self, y: usize) -> &[u8] {
        debug_assert!(y < self.height);
        let start = y * self.width;
        &self.data[start..start + self.width]
    }
    /// One row of pixels, mutable.
    pub fn row_mut(&mut self, y: usize) -> &mut [u8] {
        debug_assert!(y < self.height);
        let start = y * self.width;
        &mut self.data[start..start + self.width]
    }
}

impl Index<(usize, usize)> for RenderingBuffer<'_> {
    type Output = u8;
    fn index(&self, (x, y): (usize, usize)) -> &u8 {
        assert!(x < self.width, "x {} >= width {}", x, self.width);
        assert!(y < self.height, "y {} >= height {}", y, self.height);
        &self.data[y * self.width + x]
    }
}
impl IndexMut<(usize, usize)> for RenderingBuffer<'_> {
    fn index_mut(&mut self, (x, y): (usize, usize)) -> &mut u8 {
        assert!(x < self.width, "x {} >= width {}", x, self.width);
        assert!(y < self.height, "y {} >= height {}", y, self.height);
        &mut self.data[y * self.width + x]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_are_row_major() {
        let mut data = [0u8, 1, 2, 3, 4, 5];
        let mut rbuf = RenderingBuffer::attach(&mut data, 3, 2);
        assert_eq!(rbuf.len(), 6);
        assert_eq!(rbuf.row(1), &[3, 4, 5]);
        rbuf.row_mut(0)[2] = 9;
        assert_eq!(rbuf[(2, 0)], 9);
    }
}
