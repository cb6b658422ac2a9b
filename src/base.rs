//! Base renderer
//!
//! Sits between the scanline sweep and the pixel format and clamps
//! every span to the buffer viewport. All rasterizer output funnels
//! through here, so no write can land outside the caller's buffer no
//! matter where the quadrilateral's vertices fall.

use crate::pixfmt::{Gray8, PixfmtGray8};

#[derive(Debug)]
pub struct RenderingBase<'a> {
    pub pixf: PixfmtGray8<'a>,
}

impl<'a> RenderingBase<'a> {
    pub fn new(pixf: PixfmtGray8<'a>) -> Self {
        RenderingBase { pixf }
    }

    /// Inclusive viewport limits: `(xmin, xmax, ymin, ymax)`.
    pub fn limits(&self) -> (i64, i64, i64, i64) {
        let w = self.pixf.width() as i64;
        let h = self.pixf.height() as i64;
        (0, w - 1, 0, h - 1)
    }

    /// Blend a horizontal line from `x1` to `x2` inclusive with one
    /// coverage value, clipped to the viewport.
    pub fn blend_hline(&mut self, x1: i64, y: i64, x2: i64, c: Gray8, cover: u64) {
        let (xmin, xmax, ymin, ymax) = self.limits();
        let (x1, x2) = if x2 > x1 { (x1, x2) } else { (x2, x1) };
        if y < ymin || y > ymax || x1 > xmax || x2 < xmin {
            return;
        }
        let x1 = x1.max(xmin);
        let x2 = x2.min(xmax);
        self.pixf
            .blend_hline(x1 as usize, y as usize, (x2 - x1 + 1) as usize, c, cover);
    }

    /// Blend a span of per-pixel coverage values, clipped to the
    /// viewport; covers outside the buffer are dropped.
    pub fn blend_solid_hspan(&mut self, x: i64, y: i64, c: Gray8, covers: &[u8]) {
        let (xmin, xmax, ymin, ymax) = self.limits();
        if y < ymin || y > ymax {
            return;
        }
        let (mut x, mut len, mut off) = (x, covers.len() as i64, 0i64);
        if x < xmin {
            len -= xmin - x;
            if len <= 0 {
                return;
            }
            off = xmin - x;
            x = xmin;
        }
        if x + len - 1 > xmax {
            len = xmax - x + 1;
            if len <= 0 {
                return;
            }
        }
        let covers = &covers[off as usize..(off + len) as usize];
        self.pixf.blend_solid_hspan(x as usize, y as usize, c, covers);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spans_clip_to_viewport() {
        let mut data = [0u8; 4 * 2];
        let pixf = PixfmtGray8::attach(&mut data, 4, 2);
        let mut base = RenderingBase::new(pixf);
        // span hangs off both sides of row 0
        base.blend_solid_hspan(-2, 0, Gray8::white(), &[255u8; 8]);
        // completely outside rows are dropped
        base.blend_solid_hspan(0, 5, Gray8::white(), &[255u8; 4]);
        base.blend_hline(-10, -1, 10, Gray8::white(), 255);
        assert_eq!(&data[..4], &[255, 255, 255, 255]);
        assert_eq!(&data[4..], &[0, 0, 0, 0]);
    }
}
