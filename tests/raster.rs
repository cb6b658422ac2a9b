//! Coverage grids for single-cell rasterization.
//!
//! Expected values reproduce the reference weight grids of the original
//! area-weighted regridding kernel: full coverage is 255, an exactly
//! half-covered pixel reads 127, a quarter-covered one 63.

use regrid_raster::rasterize_quad;

const NX: usize = 8;
const NY: usize = 6;

/// Rasterize one quad into a zeroed NX x NY buffer. Vertices are given
/// the way a 2x2 corner block flattens: (x0,y0) top-left, (x1,y1)
/// top-right, (x2,y2) bottom-left, (x3,y3) bottom-right.
fn raster(x: [f64; 4], y: [f64; 4]) -> Vec<u8> {
    let mut weights = vec![0u8; NX * NY];
    rasterize_quad(&mut weights, &x, &y, NX, NY).unwrap();
    weights
}

fn at(w: &[u8], col: usize, row: usize) -> u8 {
    w[row * NX + col]
}

fn sum(w: &[u8]) -> u64 {
    w.iter().map(|&v| u64::from(v)).sum()
}

#[test]
fn top_left_cell() {
    let w = raster([0.0, 1.0, 0.0, 1.0], [0.0, 0.0, 1.0, 1.0]);
    assert_eq!(sum(&w), 255);
    assert_eq!(at(&w, 0, 0), 255);
}

#[test]
fn top_right_cell() {
    let (x0, x1) = (NX as f64 - 1.0, NX as f64);
    let w = raster([x0, x1, x0, x1], [0.0, 0.0, 1.0, 1.0]);
    assert_eq!(sum(&w), 255);
    assert_eq!(at(&w, NX - 1, 0), 255);
}

#[test]
fn bottom_left_cell() {
    let (y0, y1) = (NY as f64 - 1.0, NY as f64);
    let w = raster([0.0, 1.0, 0.0, 1.0], [y0, y0, y1, y1]);
    assert_eq!(sum(&w), 255);
    assert_eq!(at(&w, 0, NY - 1), 255);
}

#[test]
fn bottom_right_cell() {
    let (x0, x1) = (NX as f64 - 1.0, NX as f64);
    let (y0, y1) = (NY as f64 - 1.0, NY as f64);
    let w = raster([x0, x1, x0, x1], [y0, y0, y1, y1]);
    assert_eq!(sum(&w), 255);
    assert_eq!(at(&w, NX - 1, NY - 1), 255);
}

#[test]
fn full_coverage() {
    // Quad boundary lies exactly on the raster boundary: every pixel,
    // including the rim, is fully inside.
    let (nx, ny) = (NX as f64, NY as f64);
    let w = raster([0.0, nx, 0.0, nx], [0.0, 0.0, ny, ny]);
    assert!(w.iter().all(|&v| v == 255));
}

#[test]
fn inset_by_one_cell() {
    let (nx, ny) = (NX as f64, NY as f64);
    let w = raster(
        [1.0, nx - 1.0, 1.0, nx - 1.0],
        [1.0, 1.0, ny - 1.0, ny - 1.0],
    );
    for row in 0..NY {
        for col in 0..NX {
            let interior = row >= 1 && row < NY - 1 && col >= 1 && col < NX - 1;
            let expected = if interior { 255 } else { 0 };
            assert_eq!(at(&w, col, row), expected, "pixel ({},{})", col, row);
        }
    }
}

#[test]
fn inset_by_half_cell() {
    let (nx, ny) = (NX as f64, NY as f64);
    let w = raster(
        [0.5, nx - 0.5, 0.5, nx - 0.5],
        [0.5, 0.5, ny - 0.5, ny - 0.5],
    );
    let (half, quarter) = (127, 63);
    for row in 0..NY {
        for col in 0..NX {
            let edge_x = col == 0 || col == NX - 1;
            let edge_y = row == 0 || row == NY - 1;
            let expected = match (edge_x, edge_y) {
                (true, true) => quarter,
                (true, false) | (false, true) => half,
                (false, false) => 255,
            };
            assert_eq!(at(&w, col, row), expected, "pixel ({},{})", col, row);
        }
    }
}

#[test]
fn rotated_cell() {
    // 45-degree rotated square; corners land on pixel centers so the
    // expected pattern is exact quarters and halves.
    let w = raster([1.5, 4.5, 3.5, 6.5], [3.5, 0.5, 5.5, 2.5]);

    let mut expected = vec![0u8; NX * NY];
    let mut set = |col: usize, row: usize, v: u8| expected[row * NX + col] = v;
    let (full, half, quarter) = (255, 127, 63);
    // corners
    set(1, 3, quarter);
    set(4, 0, quarter);
    set(3, 5, quarter);
    set(6, 2, quarter);
    // edges
    set(2, 2, half);
    set(3, 1, half);
    set(2, 4, half);
    set(5, 1, half);
    set(4, 4, half);
    set(5, 3, half);
    // interior
    set(4, 1, full);
    set(3, 2, full);
    set(4, 2, full);
    set(5, 2, full);
    set(2, 3, full);
    set(3, 3, full);
    set(4, 3, full);
    set(3, 4, full);

    assert_eq!(w, expected);
}
