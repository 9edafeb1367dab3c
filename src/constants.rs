pub const DEFAULT_QUALITY: u8 = 85;

pub const JPEG_QUALITY: u8 = 85;
pub const PNG_QUALITY: u8 = 95;
pub const WEBP_QUALITY: u8 = 85;
pub const AVIF_QUALITY: u8 = 80;

// 6 is libwebp's slowest, best-compressing method
pub const WEBP_METHOD: i32 = 6;
pub const AVIF_SPEED: u8 = 4;

pub const ZOPFLI_ITERATIONS: u8 = 15;
pub const LIBDEFLATER_HIGH_LEVEL: u8 = 12;
pub const LIBDEFLATER_LOW_LEVEL: u8 = 8;

pub const SUMMARY_RULE_WIDTH: usize = 50;
