use image::{DynamicImage, Rgb, RgbImage};
use std::path::Path;
use tempfile::TempDir;

pub fn create_temp_directory() -> TempDir {
    TempDir::new().unwrap()
}

/// Write a small gradient JPEG that re-encoding can work on.
pub fn write_test_jpeg(path: &Path) {
    let img = RgbImage::from_fn(64, 64, |x, y| {
        Rgb([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8])
    });
    DynamicImage::ImageRgb8(img)
        .save_with_format(path, image::ImageFormat::Jpeg)
        .unwrap();
}

pub fn write_test_png(path: &Path) {
    let img = RgbImage::from_fn(48, 48, |x, y| {
        Rgb([(x * 5 % 256) as u8, (y * 5 % 256) as u8, 40])
    });
    DynamicImage::ImageRgb8(img)
        .save_with_format(path, image::ImageFormat::Png)
        .unwrap();
}
