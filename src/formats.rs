/// Logical-extension classification and target format selection
///
/// Files are bucketed by a "logical extension" derived from the file name.
/// Most files map to their plain suffix, but double-converted assets keep
/// compound suffixes like `.jpg.avif` so they can be re-encoded with the
/// outer codec's settings.
use crate::constants::{
    AVIF_QUALITY, DEFAULT_QUALITY, JPEG_QUALITY, PNG_QUALITY, WEBP_QUALITY,
};
use std::fmt;
use std::path::Path;

/// Logical extensions accepted by the scanner. Anything else is ignored.
pub const SUPPORTED_LOGICAL_EXTENSIONS: &[&str] = &[
    ".jpg",
    ".jpeg",
    ".png",
    ".webp",
    ".avif",
    ".jpg.avif",
    ".png.avif",
    ".jpg.webp",
    ".png.webp",
];

/// Extract the logical extension from a file name, lowercased.
///
/// Compound suffixes (`.jpg.avif`, `.jpg.webp`, `.png.avif`, `.png.webp`)
/// are kept whole; everything else falls back to the last dot-segment.
pub fn logical_extension(file_name: &str) -> String {
    let name = file_name.to_lowercase();
    if name.ends_with(".jpg.avif")
        || name.ends_with(".jpg.webp")
        || name.ends_with(".png.avif")
        || name.ends_with(".png.webp")
    {
        name[name.len() - 9..].to_string()
    } else {
        match Path::new(&name).extension() {
            Some(ext) => format!(".{}", ext.to_string_lossy()),
            None => String::new(),
        }
    }
}

/// Check whether a path classifies as a supported image file.
///
/// Purely name-based; the decoder decides later whether the bytes are
/// actually an image.
pub fn is_image_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(|name| {
            let ext = logical_extension(name);
            SUPPORTED_LOGICAL_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

/// Encoder quality for a logical extension (0-100 scale).
///
/// PNG is lossless; its entry only selects the optimization effort band.
pub fn quality_for_extension(ext: &str) -> u8 {
    match ext {
        ".jpg" | ".jpeg" => JPEG_QUALITY,
        ".png" => PNG_QUALITY,
        ".webp" | ".jpg.webp" | ".png.webp" => WEBP_QUALITY,
        ".avif" | ".jpg.avif" | ".png.avif" => AVIF_QUALITY,
        _ => DEFAULT_QUALITY,
    }
}

/// Encoder selected for a candidate file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetFormat {
    Jpeg,
    Png,
    WebP,
    Avif,
}

impl TargetFormat {
    pub fn from_logical_extension(ext: &str) -> Option<Self> {
        match ext {
            ".jpg" | ".jpeg" => Some(TargetFormat::Jpeg),
            ".png" => Some(TargetFormat::Png),
            ".webp" | ".jpg.webp" | ".png.webp" => Some(TargetFormat::WebP),
            ".avif" | ".jpg.avif" | ".png.avif" => Some(TargetFormat::Avif),
            _ => None,
        }
    }
}

impl fmt::Display for TargetFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TargetFormat::Jpeg => "JPEG",
            TargetFormat::Png => "PNG",
            TargetFormat::WebP => "WebP",
            TargetFormat::Avif => "AVIF",
        };
        write!(f, "{}", name)
    }
}
