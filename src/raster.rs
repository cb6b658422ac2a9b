//! Scanline rasterizer
//!
//! Converts a closed polygon path, supplied in double precision, into
//! anti-aliased coverage spans one pixel row at a time. Coordinates are
//! upscaled to 24.8 fixed point, edges are accumulated as coverage
//! cells, and each row is swept left to right summing signed covers to
//! recover exact sub-pixel coverage.
//!
//! No gamma table is applied: the computed coverage maps linearly onto
//! the 0..=255 alpha range, which is what a weight mask needs.

use log::trace;

use crate::cell::CellTable;
use crate::clip::Clip;
use crate::scan::ScanlineU8;
use crate::{POLY_SUBPIXEL_SCALE, POLY_SUBPIXEL_SHIFT};

const AA_SHIFT: i64 = 8;
const AA_SCALE: i64 = 1 << AA_SHIFT;
const AA_MASK: i64 = AA_SCALE - 1;
const AA_SCALE2: i64 = AA_SCALE * 2;
const AA_MASK2: i64 = AA_SCALE2 - 1;

/// Winding rule deciding which regions of a self-intersecting polygon
/// count as inside.
///
/// `NonZero` is the default, matching the solid-fill convention of the
/// regridding kernel this crate reproduces.
#[derive(Debug, Default, PartialEq, Eq, Copy, Clone)]
pub enum FillingRule {
    #[default]
    NonZero,
    EvenOdd,
}

#[derive(Debug, Default, PartialEq, Eq, Copy, Clone)]
enum PathStatus {
    #[default]
    Initial,
    Closed,
    MoveTo,
    LineTo,
}

fn upscale(v: f64) -> i64 {
    (v * POLY_SUBPIXEL_SCALE as f64).round() as i64
}

/// Anti-aliased scanline rasterizer.
///
/// All working state (clip stage, cell table, sweep cursor) is owned by
/// the instance and rebuilt by [`reset`](Self::reset), so one
/// rasterizer can be reused across many cells of a regridding loop
/// while independent instances stay safe to drive from independent
/// threads.
#[derive(Debug, Default)]
pub struct RasterizerScanline {
    clipper: Clip,
    outline: CellTable,
    status: PathStatus,
    x0: i64,
    y0: i64,
    scan_y: i64,
    filling_rule: FillingRule,
}

impl RasterizerScanline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Discard all accumulated edges and start a new polygon.
    pub fn reset(&mut self) {
        self.outline.reset();
        self.status = PathStatus::Initial;
    }

    /// Select the winding rule; takes effect at sweep time.
    pub fn filling_rule(&mut self, rule: FillingRule) {
        self.filling_rule = rule;
    }

    /// Restrict rasterization to a box in pixel coordinates.
    pub fn clip_box(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
        self.clipper
            .clip_box(upscale(x1), upscale(y1), upscale(x2), upscale(y2));
    }

    /// Start a new contour at `(x, y)` in pixel coordinates.
    pub fn move_to_d(&mut self, x: f64, y: f64) {
        self.x0 = upscale(x);
        self.y0 = upscale(y);
        self.clipper.move_to(self.x0, self.y0);
        self.status = PathStatus::MoveTo;
    }

    /// Add an edge from the current point to `(x, y)`.
    pub fn line_to_d(&mut self, x: f64, y: f64) {
        self.clipper
            .line_to(&mut self.outline, upscale(x), upscale(y));
        self.status = PathStatus::LineTo;
    }

    /// Close the contour back to its starting point. Idempotent, and
    /// performed implicitly by [`rewind_scanlines`](Self::rewind_scanlines).
    pub fn close_polygon(&mut self) {
        if self.status == PathStatus::LineTo {
            self.clipper.line_to(&mut self.outline, self.x0, self.y0);
            self.status = PathStatus::Closed;
        }
    }

    pub fn min_x(&self) -> i64 {
        self.outline.min_x
    }
    pub fn max_x(&self) -> i64 {
        self.outline.max_x
    }

    /// Finish the path and prepare the sweep. Returns false when the
    /// polygon produced no coverage at all.
    pub fn rewind_scanlines(&mut self) -> bool {
        self.close_polygon();
        self.outline.sort_cells();
        if self.outline.total_cells() == 0 {
            return false;
        }
        trace!(
            "sweep prepared: {} cells, rows {}..={}",
            self.outline.total_cells(),
            self.outline.min_y,
            self.outline.max_y
        );
        self.scan_y = self.outline.min_y.max(0);
        true
    }

    /// Produce the next non-empty scanline. Returns false when all rows
    /// are exhausted.
    pub fn sweep_scanline(&mut self, sl: &mut ScanlineU8) -> bool {
        loop {
            if self.scan_y > self.outline.max_y {
                return false;
            }
            sl.reset_spans();

            let cells = self.outline.scanline_cells(self.scan_y);
            let mut cover: i64 = 0;
            let mut i = 0;
            while i < cells.len() {
                let mut x = cells[i].x;
                let mut area = cells[i].area;
                cover += cells[i].cover;
                i += 1;
                // Accumulate every cell sharing this x
                while i < cells.len() && cells[i].x == x {
                    area += cells[i].area;
                    cover += cells[i].cover;
                    i += 1;
                }
                if area != 0 {
                    let alpha =
                        self.calculate_alpha((cover << (POLY_SUBPIXEL_SHIFT + 1)) - area);
                    if alpha > 0 {
                        sl.add_cell(x, alpha);
                    }
                    x += 1;
                }
                if i < cells.len() && cells[i].x > x {
                    let alpha = self.calculate_alpha(cover << (POLY_SUBPIXEL_SHIFT + 1));
                    if alpha > 0 {
                        sl.add_span(x, cells[i].x - x, alpha);
                    }
                }
            }

            if sl.num_spans() != 0 {
                break;
            }
            self.scan_y += 1;
        }
        sl.finalize(self.scan_y);
        self.scan_y += 1;
        true
    }

    /// Map a doubled signed area to an 8-bit coverage value under the
    /// current winding rule.
    fn calculate_alpha(&self, area: i64) -> u8 {
        let mut cover = area >> (POLY_SUBPIXEL_SHIFT * 2 + 1 - AA_SHIFT);
        cover = cover.abs();
        if self.filling_rule == FillingRule::EvenOdd {
            cover &= AA_MASK2;
            if cover > AA_SCALE {
                cover = AA_SCALE2 - cover;
            }
        }
        cover.min(AA_MASK) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alpha_clamps_to_cover_mask() {
        let ras = RasterizerScanline::new();
        // one full pixel of doubled area
        let full = 2 * POLY_SUBPIXEL_SCALE * POLY_SUBPIXEL_SCALE;
        assert_eq!(ras.calculate_alpha(full), 255);
        assert_eq!(ras.calculate_alpha(-full), 255);
        assert_eq!(ras.calculate_alpha(full / 2), 128);
        assert_eq!(ras.calculate_alpha(0), 0);
    }

    #[test]
    fn even_odd_folds_double_winding() {
        let mut ras = RasterizerScanline::new();
        ras.filling_rule(FillingRule::EvenOdd);
        // winding number 2: full under nonzero, empty under even-odd
        let double = 4 * POLY_SUBPIXEL_SCALE * POLY_SUBPIXEL_SCALE;
        assert_eq!(ras.calculate_alpha(double), 0);
    }

    #[test]
    fn empty_path_has_no_scanlines() {
        let mut ras = RasterizerScanline::new();
        ras.move_to_d(1.0, 1.0);
        assert!(!ras.rewind_scanlines());
    }

    #[test]
    fn degenerate_point_quad_has_no_scanlines() {
        let mut ras = RasterizerScanline::new();
        ras.move_to_d(2.5, 2.5);
        for _ in 0..3 {
            ras.line_to_d(2.5, 2.5);
        }
        assert!(!ras.rewind_scanlines());
    }
}
