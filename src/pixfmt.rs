//! Gray8 pixel format
//!
//! Single-channel compositing over a borrowed [`RenderingBuffer`]. The
//! arithmetic reproduces the classic gray8 fixed-point blend:
//!
//! ```text
//! alpha = (a * (cover + 1)) >> 8
//! pixel = pixel + (((value - pixel) * alpha) >> 8)     when alpha < 255
//! pixel = value                                        when alpha == 255
//! ```
//!
//! The truncating shift matters: it is why an exactly half-covered
//! pixel reads back as 127 and a quarter-covered one as 63, and those
//! values are locked in by the integration tests.

use crate::buffer::RenderingBuffer;

/// Grayscale color with alpha, both 8-bit.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Gray8 {
    /// Luminance value.
    pub v: u8,
    /// Opacity.
    pub a: u8,
}

impl Gray8 {
    /// Fully opaque gray value.
    pub fn new(v: u8) -> Self {
        Gray8 { v, a: 255 }
    }
    pub fn new_with_alpha(v: u8, a: u8) -> Self {
        Gray8 { v, a }
    }
    /// Opaque white, the solid paint used for coverage weights.
    pub fn white() -> Self {
        Gray8::new(255)
    }
}

/// Gray8 pixel format over borrowed memory.
#[derive(Debug)]
pub struct PixfmtGray8<'a> {
    rbuf: RenderingBuffer<'a>,
}

impl<'a> PixfmtGray8<'a> {
    /// Wrap caller memory of `width * height` bytes.
    pub fn attach(data: &'a mut [u8], width: usize, height: usize) -> Self {
        PixfmtGray8 {
            rbuf: RenderingBuffer::attach(data, width, height),
        }
    }
    pub fn width(&self) -> usize {
        self.rbuf.width
    }
    pub fn height(&self) -> usize {
        self.rbuf.height
    }
    /// Raw pixel value.
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.rbuf[(x, y)]
    }
    /// Overwrite a pixel, no blending.
    pub fn set(&mut self, x: usize, y: usize, v: u8) {
        self.rbuf[(x, y)] = v;
    }

    fn blend_value(p: u8, v: u8, alpha: u32) -> u8 {
        // (v - p) may be negative; the arithmetic shift truncates
        // toward negative infinity just as the fixed-point original
        let d = (i32::from(v) - i32::from(p)) * alpha as i32;
        (i32::from(p) + (d >> 8)) as u8
    }

    /// Composite `c` onto one pixel with the given coverage (0..=255).
    pub fn blend_pix(&mut self, x: usize, y: usize, c: Gray8, cover: u64) {
        if c.a == 0 {
            return;
        }
        let alpha = (u32::from(c.a) * (cover as u32 + 1)) >> 8;
        if alpha == 255 {
            self.rbuf[(x, y)] = c.v;
        } else {
            let p = self.rbuf[(x, y)];
            self.rbuf[(x, y)] = Self::blend_value(p, c.v, alpha);
        }
    }

    /// Composite a horizontal run of `len` pixels with uniform coverage.
    ///
    /// Coordinates must already be clamped to the buffer; the
    /// [`RenderingBase`](crate::base::RenderingBase) does that.
    pub fn blend_hline(&mut self, x: usize, y: usize, len: usize, c: Gray8, cover: u64) {
        if c.a == 0 || len == 0 {
            return;
        }
        let alpha = (u32::from(c.a) * (cover as u32 + 1)) >> 8;
        let row = &mut self.rbuf.row_mut(y)[x..x + len];
        if alpha == 255 {
            row.fill(c.v);
        } else {
            for p in row.iter_mut() {
                *p = Self::blend_value(*p, c.v, alpha);
            }
        }
    }

    /// Composite a horizontal span with per-pixel coverage values.
    pub fn blend_solid_hspan(&mut self, x: usize, y: usize, c: Gray8, covers: &[u8]) {
        if c.a == 0 {
            return;
        }
        for (i, &cover) in covers.iter().enumerate() {
            self.blend_pix(x + i, y, c, u64::from(cover));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blend_half_coverage_truncates() {
        let mut data = [0u8; 1];
        let mut pix = PixfmtGray8::attach(&mut data, 1, 1);
        pix.blend_pix(0, 0, Gray8::white(), 128);
        assert_eq!(data[0], 127);
    }

    #[test]
    fn blend_quarter_coverage() {
        let mut data = [0u8; 1];
        let mut pix = PixfmtGray8::attach(&mut data, 1, 1);
        pix.blend_pix(0, 0, Gray8::white(), 64);
        assert_eq!(data[0], 63);
    }

    #[test]
    fn full_coverage_copies_source() {
        let mut data = [9u8; 1];
        let mut pix = PixfmtGray8::attach(&mut data, 1, 1);
        pix.blend_pix(0, 0, Gray8::white(), 255);
        assert_eq!(pix.get(0, 0), 255);
    }

    #[test]
    fn zero_alpha_is_a_noop() {
        let mut data = [42u8; 1];
        let mut pix = PixfmtGray8::attach(&mut data, 1, 1);
        pix.blend_pix(0, 0, Gray8::new_with_alpha(255, 0), 255);
        assert_eq!(data[0], 42);
    }

    #[test]
    fn hline_mixes_over_existing_contents() {
        let mut data = [100u8; 4];
        let mut pix = PixfmtGray8::attach(&mut data, 4, 1);
        pix.blend_hline(1, 0, 2, Gray8::white(), 128);
        // 100 + ((255 - 100) * 128 >> 8) = 177
        assert_eq!(data, [100, 177, 177, 100]);
    }
}
