//! Anti-aliased quadrilateral coverage rasterization.
//!
//! This crate computes, for a single quadrilateral, the fractional
//! pixel-coverage ("weight") of that shape against a raster grid. It is
//! the numeric kernel of an area-weighted regridding scheme: the caller
//! walks every destination grid cell, projects its corners into source
//! pixel space, and calls [`rasterize_quad`] to paint the cell's
//! coverage into a byte buffer, one weight per source pixel.
//!
//! The pipeline follows the classic Anti-Grain Geometry layout:
//!
//! ```text
//! rasterize_quad
//!   RasterizerScanline        subpixel edge walk -> coverage cells
//!     Clip                    clip box, set to the raster bounds
//!     CellTable               per-cell cover/area accumulation
//!   ScanlineU8                one row of coverage spans
//!   RenderingBase             span clamping to the buffer viewport
//!     PixfmtGray8             gray8 alpha compositing
//!       RenderingBuffer       borrowed caller memory, row-major
//! ```
//!
//! Two conventions are easy to miss and are part of the contract:
//!
//! * Vertices are visited in the order `0, 1, 3, 2` (not `0, 1, 2, 3`).
//! * The destination buffer is never cleared; coverage is composited
//!   over whatever the caller left in it.
//!
//! See [`rasterize_quad`] for the details.

pub mod base;
pub mod buffer;
pub mod cell;
pub mod clip;
pub mod error;
pub mod pgm;
pub mod pixfmt;
pub mod quad;
pub mod raster;
pub mod render;
pub mod scan;

pub use base::RenderingBase;
pub use buffer::RenderingBuffer;
pub use clip::Rectangle;
pub use error::RasterError;
pub use pixfmt::{Gray8, PixfmtGray8};
pub use quad::rasterize_quad;
pub use raster::{FillingRule, RasterizerScanline};
pub use render::render_scanlines_aa_solid;
pub use scan::ScanlineU8;

/// Subpixel resolution used by the rasterizer, as a bit shift.
pub(crate) const POLY_SUBPIXEL_SHIFT: i64 = 8;
/// Subpixel resolution used by the rasterizer (256 subpixels per pixel).
pub(crate) const POLY_SUBPIXEL_SCALE: i64 = 1 << POLY_SUBPIXEL_SHIFT;
/// Mask extracting the subpixel fraction of a coordinate.
pub(crate) const POLY_SUBPIXEL_MASK: i64 = POLY_SUBPIXEL_SCALE - 1;
