//! Round-trip of weight masks through the grayscale dump helpers.

use regrid_raster::{pgm, rasterize_quad};

#[test]
fn mask_dump_round_trips() {
    let (nx, ny) = (8usize, 6usize);
    let mut weights = vec![0u8; nx * ny];
    rasterize_quad(&mut weights, &[1.5, 4.5, 3.5, 6.5], &[3.5, 0.5, 5.5, 2.5], nx, ny).unwrap();

    let dir = std::env::temp_dir().join("regrid-raster-tests");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join(format!("rotated-{}.pgm", std::process::id()));

    pgm::write_mask(&weights, nx, ny, &path).unwrap();
    let (read, w, h) = pgm::read_mask(&path).unwrap();
    assert_eq!((w, h), (nx, ny));
    assert_eq!(read, weights);
    assert!(pgm::mask_diff(&path, &path).unwrap());

    std::fs::remove_file(&path).ok();
}
