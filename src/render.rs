//! Scanline rendering
//!
//! Drives the rasterizer sweep and composites each scanline onto the
//! base renderer with a single solid gray source, the "paint it white"
//! operation that turns coverage into weights.

use crate::base::RenderingBase;
use crate::pixfmt::Gray8;
use crate::raster::RasterizerScanline;
use crate::scan::ScanlineU8;

/// Composite one finished scanline onto the base.
fn render_scanline_aa_solid(sl: &ScanlineU8, base: &mut RenderingBase, color: Gray8) {
    let y = sl.y;
    for span in sl.spans() {
        base.blend_solid_hspan(span.x, y, color, &span.covers);
    }
}

/// Rasterize the accumulated path and paint it with `color`.
///
/// The scanline is caller-provided so its span storage can be reused
/// across many polygons.
pub fn render_scanlines_aa_solid(
    ras: &mut RasterizerScanline,
    sl: &mut ScanlineU8,
    base: &mut RenderingBase,
    color: Gray8,
) {
    if ras.rewind_scanlines() {
        while ras.sweep_scanline(sl) {
            render_scanline_aa_solid(sl, base, color);
        }
    }
}
