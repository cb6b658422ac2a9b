//! Reading and writing of weight masks as grayscale images
//!
//! Debug and test support: a weight buffer is a plain gray image, so
//! dumping one to disk (PGM or PNG, chosen by extension) is the
//! quickest way to eyeball a regridding run.

use std::path::Path;

/// Write a `width * height` weight buffer to a grayscale image file.
pub fn write_mask<P: AsRef<Path>>(
    buf: &[u8],
    width: usize,
    height: usize,
    filename: P,
) -> Result<(), image::ImageError> {
    image::save_buffer(
        filename,
        buf,
        width as u32,
        height as u32,
        image::ColorType::L8,
    )
}

/// Read a grayscale image back as a weight buffer.
pub fn read_mask<P: AsRef<Path>>(filename: P) -> Result<(Vec<u8>, usize, usize), image::ImageError> {
    let img = image::open(filename)?.to_luma8();
    let (w, h) = img.dimensions();
    Ok((img.into_raw(), w as usize, h as usize))
}

/// Byte-exact comparison of two mask files, reporting differing pixels
/// on stdout the way a failing regression test wants to see them.
pub fn mask_diff<P: AsRef<Path>>(f1: P, f2: P) -> Result<bool, image::ImageError> {
    let (d1, w1, h1) = read_mask(f1)?;
    let (d2, w2, h2) = read_mask(f2)?;
    if w1 != w2 || h1 != h2 {
        println!("mask dimensions differ: {}x{} vs {}x{}", w1, h1, w2, h2);
        return Ok(false);
    }
    let mut same = true;
    for (i, (v1, v2)) in d1.iter().zip(d2.iter()).enumerate() {
        if v1 != v2 {
            println!("({},{}): {} != {}", i % w1, i / w1, v1, v2);
            same = false;
        }
    }
    Ok(same)
}
