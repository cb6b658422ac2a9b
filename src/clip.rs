//! Clipping region
//!
//! Optional clip box applied while edges are fed into the
//! [`CellTable`]. [`rasterize_quad`](crate::rasterize_quad) sets the
//! box to the raster rectangle, which keeps the cell table's memory
//! proportional to the raster instead of to the quad's extent; callers
//! driving the rasterizer directly can set a tighter box, or none.

use crate::cell::CellTable;

/// Axis-aligned rectangle with sorted bounds.
#[derive(Debug, Default, Copy, Clone)]
pub struct Rectangle<T: PartialOrd + Copy> {
    pub x1: T,
    pub y1: T,
    pub x2: T,
    pub y2: T,
}

impl<T: PartialOrd + Copy> Rectangle<T> {
    pub fn new(x1: T, y1: T, x2: T, y2: T) -> Self {
        let (x1, x2) = if x1 > x2 { (x2, x1) } else { (x1, x2) };
        let (y1, y2) = if y1 > y2 { (y2, y1) } else { (y1, y2) };
        Rectangle { x1, y1, x2, y2 }
    }
    /// Cohen-Sutherland style region code for a point.
    pub fn clip_flags(&self, x: T, y: T) -> u8 {
        clip_flags(x, y, self.x1, self.y1, self.x2, self.y2)
    }
}

pub const INSIDE: u8 = 0b0000;
pub const LEFT: u8 = 0b0001;
pub const RIGHT: u8 = 0b0010;
pub const BOTTOM: u8 = 0b0100;
pub const TOP: u8 = 0b1000;

fn clip_flags<T: PartialOrd>(x: T, y: T, x1: T, y1: T, x2: T, y2: T) -> u8 {
    let mut code = INSIDE;
    if x < x1 {
        code |= LEFT;
    }
    if x > x2 {
        code |= RIGHT;
    }
    if y < y1 {
        code |= BOTTOM;
    }
    if y > y2 {
        code |= TOP;
    }
    code
}

fn mul_div(a: i64, b: i64, c: i64) -> i64 {
    let (a, b, c) = (a as f64, b as f64, c as f64);
    (a * b / c).round() as i64
}

/// Clip stage between the path source and the cell accumulator.
///
/// Tracks the current point in subpixel coordinates; with no clip box
/// configured every segment is passed through untouched.
#[derive(Debug, Default)]
pub struct Clip {
    x1: i64,
    y1: i64,
    clip_box: Option<Rectangle<i64>>,
    clip_flag: u8,
}

impl Clip {
    pub fn new() -> Self {
        Clip {
            x1: 0,
            y1: 0,
            clip_box: None,
            clip_flag: INSIDE,
        }
    }

    /// Emit a segment already clipped in x, cutting it against the top
    /// and bottom of the box.
    fn line_clip_y(
        &self,
        cells: &mut CellTable,
        b: &Rectangle<i64>,
        x1: i64,
        y1: i64,
        x2: i64,
        y2: i64,
        f1: u8,
        f2: u8,
    ) {
        let f1 = f1 & (TOP | BOTTOM);
        let f2 = f2 & (TOP | BOTTOM);
        if f1 == INSIDE && f2 == INSIDE {
            cells.line(x1, y1, x2, y2);
            return;
        }
        // Both endpoints above or both below: nothing visible
        if f1 == f2 {
            return;
        }
        let (mut tx1, mut ty1, mut tx2, mut ty2) = (x1, y1, x2, y2);
        if f1 == BOTTOM {
            tx1 = x1 + mul_div(b.y1 - y1, x2 - x1, y2 - y1);
            ty1 = b.y1;
        }
        if f1 == TOP {
            tx1 = x1 + mul_div(b.y2 - y1, x2 - x1, y2 - y1);
            ty1 = b.y2;
        }
        if f2 == BOTTOM {
            tx2 = x1 + mul_div(b.y1 - y1, x2 - x1, y2 - y1);
            ty2 = b.y1;
        }
        if f2 == TOP {
            tx2 = x1 + mul_div(b.y2 - y1, x2 - x1, y2 - y1);
            ty2 = b.y2;
        }
        cells.line(tx1, ty1, tx2, ty2);
    }

    /// Feed the segment from the current point to `(x2, y2)` into the
    /// cell table, clipped if a box is set. `(x2, y2)` becomes the new
    /// current point.
    pub fn line_to(&mut self, cells: &mut CellTable, x2: i64, y2: i64) {
        if let Some(ref b) = self.clip_box {
            let f2 = b.clip_flags(x2, y2);
            // Both endpoints above or both below the box
            let fy1 = (TOP | BOTTOM) & self.clip_flag;
            let fy2 = (TOP | BOTTOM) & f2;
            if fy1 != INSIDE && fy1 == fy2 {
                self.x1 = x2;
                self.y1 = y2;
                self.clip_flag = f2;
                return;
            }
            let (x1, y1, f1) = (self.x1, self.y1, self.clip_flag);
            match (f1 & (LEFT | RIGHT), f2 & (LEFT | RIGHT)) {
                (INSIDE, INSIDE) => self.line_clip_y(cells, b, x1, y1, x2, y2, f1, f2),
                (INSIDE, RIGHT) => {
                    let y3 = y1 + mul_div(b.x2 - x1, y2 - y1, x2 - x1);
                    let f3 = b.clip_flags(b.x2, y3);
                    self.line_clip_y(cells, b, x1, y1, b.x2, y3, f1, f3);
                    self.line_clip_y(cells, b, b.x2, y3, b.x2, y2, f3, f2);
                }
                (RIGHT, INSIDE) => {
                    let y3 = y1 + mul_div(b.x2 - x1, y2 - y1, x2 - x1);
                    let f3 = b.clip_flags(b.x2, y3);
                    self.line_clip_y(cells, b, b.x2, y1, b.x2, y3, f1, f3);
                    self.line_clip_y(cells, b, b.x2, y3, x2, y2, f3, f2);
                }
                (INSIDE, LEFT) => {
                    let y3 = y1 + mul_div(b.x1 - x1, y2 - y1, x2 - x1);
                    let f3 = b.clip_flags(b.x1, y3);
                    self.line_clip_y(cells, b, x1, y1, b.x1, y3, f1, f3);
                    self.line_clip_y(cells, b, b.x1, y3, b.x1, y2, f3, f2);
                }
                (RIGHT, LEFT) => {
                    let y3 = y1 + mul_div(b.x2 - x1, y2 - y1, x2 - x1);
                    let y4 = y1 + mul_div(b.x1 - x1, y2 - y1, x2 - x1);
                    let f3 = b.clip_flags(b.x2, y3);
                    let f4 = b.clip_flags(b.x1, y4);
                    self.line_clip_y(cells, b, b.x2, y1, b.x2, y3, f1, f3);
                    self.line_clip_y(cells, b, b.x2, y3, b.x1, y4, f3, f4);
                    self.line_clip_y(cells, b, b.x1, y4, b.x1, y2, f4, f2);
                }
                (LEFT, INSIDE) => {
                    let y3 = y1 + mul_div(b.x1 - x1, y2 - y1, x2 - x1);
                    let f3 = b.clip_flags(b.x1, y3);
                    self.line_clip_y(cells, b, b.x1, y1, b.x1, y3, f1, f3);
                    self.line_clip_y(cells, b, b.x1, y3, x2, y2, f3, f2);
                }
                (LEFT, RIGHT) => {
                    let y3 = y1 + mul_div(b.x1 - x1, y2 - y1, x2 - x1);
                    let y4 = y1 + mul_div(b.x2 - x1, y2 - y1, x2 - x1);
                    let f3 = b.clip_flags(b.x1, y3);
                    let f4 = b.clip_flags(b.x2, y4);
                    self.line_clip_y(cells, b, b.x1, y1, b.x1, y3, f1, f3);
                    self.line_clip_y(cells, b, b.x1, y3, b.x2, y4, f3, f4);
                    self.line_clip_y(cells, b, b.x2, y4, b.x2, y2, f4, f2);
                }
                (LEFT, LEFT) => self.line_clip_y(cells, b, b.x1, y1, b.x1, y2, f1, f2),
                (RIGHT, RIGHT) => self.line_clip_y(cells, b, b.x2, y1, b.x2, y2, f1, f2),
                (_, _) => unreachable!("clip flags {:02b} {:02b}", f1, f2),
            }
            self.clip_flag = f2;
        } else {
            cells.line(self.x1, self.y1, x2, y2);
        }
        self.x1 = x2;
        self.y1 = y2;
    }

    /// Move the current point without emitting a segment.
    pub fn move_to(&mut self, x2: i64, y2: i64) {
        self.x1 = x2;
        self.y1 = y2;
        if let Some(ref b) = self.clip_box {
            self.clip_flag = b.clip_flags(x2, y2);
        }
    }

    /// Set the clip box, in subpixel coordinates.
    pub fn clip_box(&mut self, x1: i64, y1: i64, x2: i64, y2: i64) {
        self.clip_box = Some(Rectangle::new(x1, y1, x2, y2));
    }
}
