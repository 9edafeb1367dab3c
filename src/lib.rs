pub mod batch;
pub mod cli;
pub mod compress;
pub mod constants;
pub mod error;
pub mod formats;
pub mod scanner;
pub mod stats;

pub use batch::run;
pub use compress::{compress_in_place, FileOutcome};
pub use error::{CompressionError, Result};
pub use formats::{
    is_image_file, logical_extension, quality_for_extension, TargetFormat,
    SUPPORTED_LOGICAL_EXTENSIONS,
};
pub use scanner::collect_image_files;
pub use stats::{format_size, reduction_percent, RunStatistics};
