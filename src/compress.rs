/// In-place re-encoding of a single image file
///
/// Each candidate is decoded, flattened if it carries alpha, re-encoded
/// with format-specific settings to a `.tmp` sibling, and the original is
/// replaced only when the result is strictly smaller. A failure at any
/// step leaves the original untouched and no `.tmp` behind.
use crate::constants::{
    AVIF_SPEED, LIBDEFLATER_HIGH_LEVEL, LIBDEFLATER_LOW_LEVEL, WEBP_METHOD, ZOPFLI_ITERATIONS,
};
use crate::error::{CompressionError, Result};
use crate::formats::{logical_extension, quality_for_extension, TargetFormat};
use image::codecs::avif::AvifEncoder;
use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ImageReader, Rgb, RgbImage};
use oxipng::{Deflaters, InFile, Options, OutFile};
use std::fs;
use std::num::NonZeroU8;
use std::path::{Path, PathBuf};

/// What happened to one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    /// The re-encoded file was smaller and replaced the original.
    Replaced { original_size: u64, new_size: u64 },
    /// The re-encoded file was not smaller; the original was kept as-is.
    Kept { original_size: u64 },
    /// No encoder handles this logical extension; the file was not touched.
    Skipped { original_size: u64 },
}

impl FileOutcome {
    /// Size attributed to the compressed-size accumulator: the new size
    /// when the file was replaced, otherwise the untouched original size.
    pub fn counted_size(&self) -> u64 {
        match *self {
            FileOutcome::Replaced { new_size, .. } => new_size,
            FileOutcome::Kept { original_size } => original_size,
            FileOutcome::Skipped { original_size } => original_size,
        }
    }

    /// Per-file percentage reduction, 0.0 for kept/skipped files and for
    /// zero-byte originals.
    pub fn reduction_percent(&self) -> f64 {
        match *self {
            FileOutcome::Replaced {
                original_size,
                new_size,
            } => crate::stats::reduction_percent(original_size, new_size),
            _ => 0.0,
        }
    }
}

/// Removes the temp file on drop. Replacing the original renames the temp
/// away first, so the removal quietly fails in the success path.
struct TempFileGuard(PathBuf);

impl Drop for TempFileGuard {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.0);
    }
}

/// Re-encode one file in place, replacing it only if the result is smaller.
pub fn compress_in_place(path: &Path) -> Result<FileOutcome> {
    let original_size = fs::metadata(path)?.len();

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let ext = logical_extension(&file_name);
    let Some(format) = TargetFormat::from_logical_extension(&ext) else {
        return Ok(FileOutcome::Skipped { original_size });
    };
    let quality = quality_for_extension(&ext);

    // Sniff the actual format rather than trusting the extension;
    // compound-suffix files carry the inner codec's bytes.
    let img = ImageReader::open(path)?
        .with_guessed_format()?
        .decode()?;
    let img = flatten_onto_white(img);

    let tmp_path = temp_sibling(path);
    let _guard = TempFileGuard(tmp_path.clone());
    encode_to_path(&img, &tmp_path, format, quality)?;

    let new_size = fs::metadata(&tmp_path)?.len();
    if new_size < original_size {
        // Same-directory rename, atomic on POSIX filesystems
        fs::rename(&tmp_path, path)?;
        Ok(FileOutcome::Replaced {
            original_size,
            new_size,
        })
    } else {
        fs::remove_file(&tmp_path)?;
        Ok(FileOutcome::Kept { original_size })
    }
}

/// `<original>.tmp`, next to the original.
fn temp_sibling(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(".tmp");
    PathBuf::from(name)
}

/// Composite transparent pixels onto an opaque white background.
///
/// JPEG cannot represent transparency, so any image whose color type
/// carries an alpha channel is blended down to 3-channel RGB. Paletted
/// sources are already expanded by the decoder and land here when their
/// palette had transparency.
fn flatten_onto_white(img: DynamicImage) -> DynamicImage {
    if !img.color().has_alpha() {
        return img;
    }

    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    let mut flat = RgbImage::from_pixel(width, height, Rgb([255, 255, 255]));
    for (x, y, pixel) in rgba.enumerate_pixels() {
        let alpha = pixel[3] as u32;
        let out = flat.get_pixel_mut(x, y);
        for channel in 0..3 {
            let src = pixel[channel] as u32;
            out[channel] = ((src * alpha + 255 * (255 - alpha)) / 255) as u8;
        }
    }
    DynamicImage::ImageRgb8(flat)
}

fn encode_to_path(
    img: &DynamicImage,
    out: &Path,
    format: TargetFormat,
    quality: u8,
) -> Result<()> {
    match format {
        TargetFormat::Jpeg => {
            let rgb = img.to_rgb8();
            let mut buf = Vec::new();
            let encoder = JpegEncoder::new_with_quality(&mut buf, quality);
            rgb.write_with_encoder(encoder)?;
            fs::write(out, &buf)?;
        }
        TargetFormat::Png => {
            img.save_with_format(out, image::ImageFormat::Png)?;
            optimize_png(out, quality)?;
        }
        TargetFormat::WebP => {
            let rgb = img.to_rgb8();
            let encoder = webp::Encoder::from_rgb(rgb.as_raw(), rgb.width(), rgb.height());
            let mut config = webp::WebPConfig::new()
                .map_err(|_| CompressionError::WebPEncoding("invalid encoder config".into()))?;
            config.quality = quality as f32;
            config.method = WEBP_METHOD;
            let encoded = encoder
                .encode_advanced(&config)
                .map_err(|e| CompressionError::WebPEncoding(format!("{:?}", e)))?;
            fs::write(out, &*encoded)?;
        }
        TargetFormat::Avif => {
            let rgb = img.to_rgb8();
            let mut buf = Vec::new();
            let encoder = AvifEncoder::new_with_speed_quality(&mut buf, AVIF_SPEED, quality);
            rgb.write_with_encoder(encoder)?;
            fs::write(out, &buf)?;
        }
    }
    Ok(())
}

/// Run the oxipng optimize pass over a freshly written PNG, in place.
fn optimize_png(path: &Path, quality: u8) -> Result<()> {
    let mut options = Options::from_preset(4);
    options.force = true;

    options.deflate = if quality >= 90 {
        Deflaters::Zopfli {
            iterations: NonZeroU8::new(ZOPFLI_ITERATIONS)
                .ok_or_else(|| CompressionError::PngOptimization("zero iterations".into()))?,
        }
    } else if quality >= 70 {
        Deflaters::Libdeflater {
            compression: LIBDEFLATER_HIGH_LEVEL,
        }
    } else {
        Deflaters::Libdeflater {
            compression: LIBDEFLATER_LOW_LEVEL,
        }
    };

    let input = InFile::Path(path.to_path_buf());
    let output = OutFile::Path {
        path: Some(path.to_path_buf()),
        preserve_attrs: false,
    };
    oxipng::optimize(&input, &output, &options)
        .map_err(|e| CompressionError::PngOptimization(e.to_string()))?;

    Ok(())
}
