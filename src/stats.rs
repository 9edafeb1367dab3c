/// Run-wide statistics accumulation and summary reporting
use crate::compress::FileOutcome;
use crate::constants::SUMMARY_RULE_WIDTH;

/// Aggregate counters for one batch run.
///
/// Owned by the driver; updated once per processed file and read once at
/// the end for the summary.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunStatistics {
    pub total_files: usize,
    pub compressed: usize,
    pub failed: usize,
    pub original_size: u64,
    pub compressed_size: u64,
}

impl RunStatistics {
    pub fn new(total_files: usize) -> Self {
        Self {
            total_files,
            ..Self::default()
        }
    }

    /// Record the size of a file about to be processed.
    pub fn record_original_size(&mut self, size: u64) {
        self.original_size += size;
    }

    /// Fold one successful (or skipped) per-file outcome into the totals.
    pub fn record_outcome(&mut self, outcome: &FileOutcome) {
        self.compressed_size += outcome.counted_size();
        if !matches!(outcome, FileOutcome::Skipped { .. }) {
            self.compressed += 1;
        }
    }

    pub fn record_failure(&mut self) {
        self.failed += 1;
    }

    pub fn bytes_saved(&self) -> u64 {
        self.original_size.saturating_sub(self.compressed_size)
    }

    pub fn overall_reduction_percent(&self) -> f64 {
        reduction_percent(self.original_size, self.compressed_size)
    }

    /// Print the boxed end-of-run summary.
    pub fn print_summary(&self) {
        let end_time = chrono::Local::now();
        println!(
            "🕐 Finished at: {}",
            end_time.format("%d/%m/%Y %H:%M:%S")
        );

        let rule = "=".repeat(SUMMARY_RULE_WIDTH);
        println!("\n{}", rule);
        println!("📊 COMPRESSION SUMMARY");
        println!("{}", rule);
        println!("Total images: {}", self.total_files);
        println!("Successfully compressed: {}", self.compressed);
        println!("Errors: {}", self.failed);
        println!("Original size: {}", format_size(self.original_size));
        println!("Compressed size: {}", format_size(self.compressed_size));

        if self.original_size > 0 {
            println!(
                "Space saved: {} ({:.1}%)",
                format_size(self.bytes_saved()),
                self.overall_reduction_percent()
            );
        }
        println!("{}\n", rule);
    }
}

/// Percentage reduction from `original` to `new`, 0.0 when `original` is 0.
pub fn reduction_percent(original: u64, new: u64) -> f64 {
    if original == 0 {
        return 0.0;
    }
    (1.0 - new as f64 / original as f64) * 100.0
}

/// Format a byte count as a human-readable size, scaling through
/// B/KB/MB/GB/TB by powers of 1024 with two decimal places.
pub fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];
    let mut size = bytes as f64;
    for unit in UNITS {
        if size < 1024.0 {
            return format!("{:.2} {}", size, unit);
        }
        size /= 1024.0;
    }
    format!("{:.2} TB", size)
}
