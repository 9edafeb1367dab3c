/// Sequential batch driver: scan, compress each file, accumulate totals
use crate::compress::{compress_in_place, FileOutcome};
use crate::error::{CompressionError, Result};
use crate::scanner::collect_image_files;
use crate::stats::RunStatistics;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// Process every supported image under `root` in place, one at a time.
///
/// Per-file errors are printed and counted, never propagated; only a
/// missing directory or an empty scan aborts the run, both before any
/// file is touched.
pub fn run(root: &Path) -> Result<RunStatistics> {
    let image_files = collect_image_files(root)?;
    if image_files.is_empty() {
        return Err(CompressionError::NoImagesFound(root.to_path_buf()));
    }

    let mut stats = RunStatistics::new(image_files.len());
    println!("\n🖼️  Processing {} image(s)...\n", stats.total_files);

    for (index, path) in image_files.iter().enumerate() {
        let original_size = fs::metadata(path).map(|m| m.len()).unwrap_or(0);
        stats.record_original_size(original_size);

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        print!("[{}/{}] {}... ", index + 1, stats.total_files, name);
        let _ = io::stdout().flush();

        match compress_in_place(path) {
            Ok(FileOutcome::Skipped { original_size }) => {
                stats.record_outcome(&FileOutcome::Skipped { original_size });
                println!("– skipped");
            }
            Ok(outcome) => {
                stats.record_outcome(&outcome);
                println!("✓ reduced {:.1}%", outcome.reduction_percent());
            }
            Err(e) => {
                stats.record_failure();
                println!("✗");
                println!("❌ Error with {}: {}", path.display(), e);
            }
        }
    }

    Ok(stats)
}
