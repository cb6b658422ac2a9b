//! Coverage cells
//!
//! Every polygon edge is decomposed into per-pixel cells carrying a
//! `cover` (signed vertical extent crossed, in subpixel units) and an
//! `area` (twice the signed area swept inside the cell). Summing covers
//! left-to-right along a pixel row reconstructs exact sub-pixel
//! coverage for the scanline sweep in
//! [`RasterizerScanline`](crate::raster::RasterizerScanline).

use std::cmp::{max, min};

use crate::{POLY_SUBPIXEL_MASK, POLY_SUBPIXEL_SCALE, POLY_SUBPIXEL_SHIFT};

/// One pixel's worth of accumulated edge contributions.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Cell {
    pub x: i64,
    pub y: i64,
    pub cover: i64,
    pub area: i64,
}

impl Cell {
    fn initial() -> Self {
        Cell {
            x: i64::MAX,
            y: i64::MAX,
            cover: 0,
            area: 0,
        }
    }
    fn at(x: i64, y: i64) -> Self {
        Cell {
            x,
            y,
            cover: 0,
            area: 0,
        }
    }
    fn is_empty(&self) -> bool {
        self.cover == 0 && self.area == 0
    }
}

/// Cell accumulator for one polygon.
///
/// All state is scoped to a single rasterization; `reset` returns the
/// table to its freshly-built condition.
#[derive(Debug)]
pub struct CellTable {
    cells: Vec<Cell>,
    curr: Cell,
    pub min_x: i64,
    pub min_y: i64,
    pub max_x: i64,
    pub max_y: i64,
    sorted_y: Vec<Vec<Cell>>,
    row_offset: i64,
}

impl Default for CellTable {
    fn default() -> Self {
        Self::new()
    }
}

impl CellTable {
    pub fn new() -> Self {
        CellTable {
            cells: vec![],
            curr: Cell::initial(),
            min_x: i64::MAX,
            min_y: i64::MAX,
            max_x: i64::MIN,
            max_y: i64::MIN,
            sorted_y: vec![],
            row_offset: 0,
        }
    }

    pub fn reset(&mut self) {
        self.cells.clear();
        self.curr = Cell::initial();
        self.min_x = i64::MAX;
        self.min_y = i64::MAX;
        self.max_x = i64::MIN;
        self.max_y = i64::MIN;
        self.sorted_y.clear();
        self.row_offset = 0;
    }

    pub fn total_cells(&self) -> usize {
        self.cells.len() + usize::from(!self.curr.is_empty())
    }

    fn flush_curr(&mut self) {
        if !self.curr.is_empty() {
            self.cells.push(self.curr);
        }
        self.curr = Cell::initial();
    }

    fn set_curr_cell(&mut self, x: i64, y: i64) {
        if self.curr.x != x || self.curr.y != y {
            if !self.curr.is_empty() {
                self.cells.push(self.curr);
            }
            self.curr = Cell::at(x, y);
        }
    }

    /// Bin cells by row and order each row by x. Idempotent; called
    /// once per polygon before sweeping.
    pub fn sort_cells(&mut self) {
        if !self.sorted_y.is_empty() {
            return;
        }
        self.flush_curr();
        if self.max_y < 0 {
            return;
        }
        // Rows above the raster (y < 0) can never produce visible
        // spans, so binning starts at the first non-negative row. The
        // row count is the polygon's height, not its absolute position.
        self.row_offset = self.min_y.max(0);
        self.sorted_y = vec![vec![]; (self.max_y - self.row_offset + 1) as usize];
        for c in &self.cells {
            if c.y >= self.row_offset {
                self.sorted_y[(c.y - self.row_offset) as usize].push(*c);
            }
        }
        for row in &mut self.sorted_y {
            row.sort_by_key(|c| c.x);
        }
    }

    /// Cells of one row, ordered by x. Valid after `sort_cells` for
    /// `min_y.max(0) <= y <= max_y`.
    pub fn scanline_cells(&self, y: i64) -> &[Cell] {
        &self.sorted_y[(y - self.row_offset) as usize]
    }

    /// Accumulate one edge segment that stays within pixel row `ey`.
    /// `y1` and `y2` are subpixel offsets within that row.
    fn render_hline(&mut self, ey: i64, x1: i64, y1: i64, x2: i64, y2: i64) {
        let ex1 = x1 >> POLY_SUBPIXEL_SHIFT;
        let ex2 = x2 >> POLY_SUBPIXEL_SHIFT;
        let fx1 = x1 & POLY_SUBPIXEL_MASK;
        let fx2 = x2 & POLY_SUBPIXEL_MASK;

        // Horizontal segments carry no cover
        if y1 == y2 {
            self.set_curr_cell(ex2, ey);
            return;
        }

        // Segment within a single cell
        if ex1 == ex2 {
            self.curr.cover += y2 - y1;
            self.curr.area += (fx1 + fx2) * (y2 - y1);
            return;
        }

        // Run of adjacent cells on the same row
        let (mut p, first, incr, dx) = if x2 - x1 < 0 {
            (fx1 * (y2 - y1), 0, -1, x1 - x2)
        } else {
            ((POLY_SUBPIXEL_SCALE - fx1) * (y2 - y1), POLY_SUBPIXEL_SCALE, 1, x2 - x1)
        };
        let mut delta = p / dx;
        let mut xmod = p % dx;
        if xmod < 0 {
            delta -= 1;
            xmod += dx;
        }
        self.curr.cover += delta;
        self.curr.area += (fx1 + first) * delta;

        let mut ex1 = ex1 + incr;
        self.set_curr_cell(ex1, ey);
        let mut y1 = y1 + delta;

        if ex1 != ex2 {
            p = POLY_SUBPIXEL_SCALE * (y2 - y1 + delta);
            let mut lift = p / dx;
            let mut rem = p % dx;
            if rem < 0 {
                lift -= 1;
                rem += dx;
            }
            xmod -= dx;

            while ex1 != ex2 {
                delta = lift;
                xmod += rem;
                if xmod >= 0 {
                    xmod -= dx;
                    delta += 1;
                }
                self.curr.cover += delta;
                self.curr.area += POLY_SUBPIXEL_SCALE * delta;
                y1 += delta;
                ex1 += incr;
                self.set_curr_cell(ex1, ey);
            }
        }
        delta = y2 - y1;
        self.curr.cover += delta;
        self.curr.area += (fx2 + POLY_SUBPIXEL_SCALE - first) * delta;
    }

    /// Accumulate one polygon edge in subpixel coordinates.
    pub fn line(&mut self, x1: i64, y1: i64, x2: i64, y2: i64) {
        let dx_limit = 16384 << POLY_SUBPIXEL_SHIFT;
        let dx = x2 - x1;
        // Split very long edges so the fixed-point products below
        // cannot overflow
        if dx >= dx_limit || dx <= -dx_limit {
            let cx = (x1 + x2) / 2;
            let cy = (y1 + y2) / 2;
            self.line(x1, y1, cx, cy);
            self.line(cx, cy, x2, y2);
            return;
        }
        let dy = y2 - y1;
        let ex1 = x1 >> POLY_SUBPIXEL_SHIFT;
        let ex2 = x2 >> POLY_SUBPIXEL_SHIFT;
        let ey1 = y1 >> POLY_SUBPIXEL_SHIFT;
        let ey2 = y2 >> POLY_SUBPIXEL_SHIFT;
        let fy1 = y1 & POLY_SUBPIXEL_MASK;
        let fy2 = y2 & POLY_SUBPIXEL_MASK;

        self.min_x = min(ex2, min(ex1, self.min_x));
        self.min_y = min(ey2, min(ey1, self.min_y));
        self.max_x = max(ex2, max(ex1, self.max_x));
        self.max_y = max(ey2, max(ey1, self.max_y));

        self.set_curr_cell(ex1, ey1);

        // Edge contained in one pixel row
        if ey1 == ey2 {
            self.render_hline(ey1, x1, fy1, x2, fy2);
            return;
        }

        // Strictly vertical edge
        if dx == 0 {
            let ex = x1 >> POLY_SUBPIXEL_SHIFT;
            let two_fx = (x1 - (ex << POLY_SUBPIXEL_SHIFT)) << 1;

            let (first, incr) = if dy < 0 { (0, -1) } else { (POLY_SUBPIXEL_SCALE, 1) };
            let delta = first - fy1;
            self.curr.cover += delta;
            self.curr.area += two_fx * delta;

            let mut ey1 = ey1 + incr;
            self.set_curr_cell(ex, ey1);
            let delta = first + first - POLY_SUBPIXEL_SCALE;
            let area = two_fx * delta;
            while ey1 != ey2 {
                self.curr.cover = delta;
                self.curr.area = area;
                ey1 += incr;
                self.set_curr_cell(ex, ey1);
            }
            let delta = fy2 - POLY_SUBPIXEL_SCALE + first;
            self.curr.cover += delta;
            self.curr.area += two_fx * delta;
            return;
        }

        // General case: one hline per pixel row crossed
        let (p, first, incr, dy) = if dy < 0 {
            (fy1 * dx, 0, -1, -dy)
        } else {
            ((POLY_SUBPIXEL_SCALE - fy1) * dx, POLY_SUBPIXEL_SCALE, 1, dy)
        };
        let mut delta = p / dy;
        let mut xmod = p % dy;
        if xmod < 0 {
            delta -= 1;
            xmod += dy;
        }
        let mut x_from = x1 + delta;
        self.render_hline(ey1, x1, fy1, x_from, first);
        let mut ey1 = ey1 + incr;
        self.set_curr_cell(x_from >> POLY_SUBPIXEL_SHIFT, ey1);
        if ey1 != ey2 {
            let p = POLY_SUBPIXEL_SCALE * dx;
            let mut lift = p / dy;
            let mut rem = p % dy;
            if rem < 0 {
                lift -= 1;
                rem += dy;
            }
            xmod -= dy;
            while ey1 != ey2 {
                delta = lift;
                xmod += rem;
                if xmod >= 0 {
                    xmod -= dy;
                    delta += 1;
                }
                let x_to = x_from + delta;
                self.render_hline(ey1, x_from, POLY_SUBPIXEL_SCALE - first, x_to, first);
                x_from = x_to;
                ey1 += incr;
                self.set_curr_cell(x_from >> POLY_SUBPIXEL_SHIFT, ey1);
            }
        }
        self.render_hline(ey1, x_from, POLY_SUBPIXEL_SCALE - first, x2, fy2);
    }
}
