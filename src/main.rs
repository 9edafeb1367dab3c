use clap::Parser;
use img_slim::batch::run;
use img_slim::cli::Args;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

fn main() {
    let args = Args::parse();

    let folder = match args.directory {
        Some(dir) => dir,
        None => prompt_for_directory(),
    };

    // Both failure preconditions print a message and still exit 0; the
    // error only picks the closing line.
    match run(&folder) {
        Ok(stats) => {
            stats.print_summary();
            println!("✅ Compression complete!");
        }
        Err(e) => {
            println!("❌ {}", e);
            println!("❌ Compression could not be completed.");
        }
    }
}

fn prompt_for_directory() -> PathBuf {
    print!("📁 Enter the path of the folder containing images: ");
    let _ = io::stdout().flush();

    let mut line = String::new();
    match io::stdin().lock().read_line(&mut line) {
        Ok(_) => PathBuf::from(line.trim()),
        Err(_) => PathBuf::new(),
    }
}
