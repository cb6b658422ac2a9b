//! Scanline container
//!
//! Holds one pixel row of coverage spans between the rasterizer sweep
//! and the renderer. Unpacked form: every span keeps one cover byte per
//! pixel, and touching spans are merged into a single run.

/// A horizontal run of pixels with per-pixel coverage.
#[derive(Debug, Default)]
pub struct Span {
    pub x: i64,
    pub len: i64,
    pub covers: Vec<u8>,
}

/// One row of spans, reused across scanlines.
#[derive(Debug)]
pub struct ScanlineU8 {
    last_x: i64,
    spans: Vec<Span>,
    pub y: i64,
}

const LAST_X: i64 = 0x7FFF_FFF0;

impl Default for ScanlineU8 {
    fn default() -> Self {
        Self::new()
    }
}

impl ScanlineU8 {
    pub fn new() -> Self {
        ScanlineU8 {
            last_x: LAST_X,
            spans: vec![],
            y: 0,
        }
    }
    /// Forget accumulated spans, keeping allocations where possible.
    pub fn reset_spans(&mut self) {
        self.last_x = LAST_X;
        self.spans.clear();
    }
    /// Stamp the row index once the row is complete.
    pub fn finalize(&mut self, y: i64) {
        self.y = y;
    }
    pub fn num_spans(&self) -> usize {
        self.spans.len()
    }
    pub fn spans(&self) -> &[Span] {
        &self.spans
    }
    /// Add a single pixel of coverage.
    pub fn add_cell(&mut self, x: i64, cover: u8) {
        if x == self.last_x + 1 {
            if let Some(span) = self.spans.last_mut() {
                span.len += 1;
                span.covers.push(cover);
            }
        } else {
            self.spans.push(Span {
                x,
                len: 1,
                covers: vec![cover],
            });
        }
        self.last_x = x;
    }
    /// Add `len` pixels of uniform coverage starting at `x`.
    pub fn add_span(&mut self, x: i64, len: i64, cover: u8) {
        if x == self.last_x + 1 {
            if let Some(span) = self.spans.last_mut() {
                span.len += len;
                span.covers
                    .extend(std::iter::repeat(cover).take(len as usize));
            }
        } else {
            self.spans.push(Span {
                x,
                len,
                covers: vec![cover; len as usize],
            });
        }
        self.last_x = x + len - 1;
    }
}
