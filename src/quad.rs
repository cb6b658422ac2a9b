//! Quadrilateral coverage kernel
//!
//! The public entry point of the crate: rasterize one destination grid
//! cell, given as a quadrilateral in source pixel space, into a weight
//! buffer.

use log::debug;

use crate::base::RenderingBase;
use crate::error::RasterError;
use crate::pixfmt::{Gray8, PixfmtGray8};
use crate::raster::RasterizerScanline;
use crate::render::render_scanlines_aa_solid;
use crate::scan::ScanlineU8;

/// Paint the anti-aliased coverage of one quadrilateral into `weights`.
///
/// `x` and `y` are parallel coordinate arrays; only the first four
/// entries are read. The boundary is traced in the fixed order
/// `0 -> 1 -> 3 -> 2` and closed implicitly. The order is part of the
/// caller contract: vertex pairs come from a 2x2 corner block of a
/// curvilinear grid, where row-major order zigzags. Visiting them as
/// `0,1,2,3` instead generally yields a self-intersecting bowtie, so
/// callers handing in ad-hoc quads must lay their vertices out
/// accordingly.
///
/// `weights` must hold exactly `nx * ny` bytes, row-major, one byte per
/// pixel. It is **not cleared**: coverage is alpha-composited over the
/// existing contents with an opaque white source,
/// `out = cover * 255 + (1 - cover) * old` in fixed point. Callers
/// wanting a pure coverage map must zero the buffer beforehand; leaving
/// prior paint in place to accumulate several shapes is equally
/// supported.
///
/// Vertices may lie anywhere in the finite plane: the path is clipped
/// to the raster rectangle before rasterization, so geometry outside
/// `[0, nx] x [0, ny]` is simply invisible. Fully valid input cannot
/// fail; every [`RasterError`] is detected before the first buffer
/// write.
///
/// ```
/// use regrid_raster::rasterize_quad;
///
/// // unit-aligned cell covering pixel (1, 1) of a 3x3 raster
/// let x = [1.0, 2.0, 1.0, 2.0];
/// let y = [1.0, 1.0, 2.0, 2.0];
/// let mut weights = [0u8; 9];
/// rasterize_quad(&mut weights, &x, &y, 3, 3).unwrap();
/// assert_eq!(weights, [0, 0, 0, 0, 255, 0, 0, 0, 0]);
/// ```
pub fn rasterize_quad(
    weights: &mut [u8],
    x: &[f64],
    y: &[f64],
    nx: usize,
    ny: usize,
) -> Result<(), RasterError> {
    if x.len() < 4 || y.len() < 4 {
        return Err(RasterError::TooFewVertices {
            x_len: x.len(),
            y_len: y.len(),
        });
    }
    for i in 0..4 {
        if !x[i].is_finite() || !y[i].is_finite() {
            return Err(RasterError::NonFiniteVertex {
                index: i,
                x: x[i],
                y: y[i],
            });
        }
    }
    let expected = nx
        .checked_mul(ny)
        .ok_or(RasterError::InvalidDimension { nx, ny })?;
    if weights.len() != expected {
        return Err(RasterError::BufferSizeMismatch {
            expected,
            got: weights.len(),
            nx,
            ny,
        });
    }
    if nx == 0 || ny == 0 {
        return Ok(());
    }
    debug!(
        "rasterizing quad ({},{}) ({},{}) ({},{}) ({},{}) into {}x{}",
        x[0], y[0], x[1], y[1], x[3], y[3], x[2], y[2], nx, ny
    );

    let pixf = PixfmtGray8::attach(weights, nx, ny);
    let mut base = RenderingBase::new(pixf);
    let mut ras = RasterizerScanline::new();
    let mut sl = ScanlineU8::new();

    // Clip to the raster rectangle so the cell table's memory is
    // bounded by the raster, however far away the vertices lie.
    ras.clip_box(0.0, 0.0, nx as f64, ny as f64);
    ras.move_to_d(x[0], y[0]);
    ras.line_to_d(x[1], y[1]);
    ras.line_to_d(x[3], y[3]);
    ras.line_to_d(x[2], y[2]);

    render_scanlines_aa_solid(&mut ras, &mut sl, &mut base, Gray8::white());
    Ok(())
}
