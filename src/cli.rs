use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "img-slim",
    about = "Recursively re-encode images in place, keeping the result only when it is smaller",
    long_about = "img-slim walks a directory tree, re-encodes every supported image \
                  (JPEG, PNG, WebP, AVIF, including compound suffixes like .jpg.avif) \
                  with format-specific settings, and replaces the original only when the \
                  re-encoded file is smaller. Originals are never left larger than they \
                  started.",
    version,
    after_help = "EXAMPLES:\n  \
    img-slim ./photos\n  \
    img-slim            (prompts for the directory)"
)]
pub struct Args {
    #[arg(
        help = "Directory to scan for images",
        long_help = "Root directory to scan recursively. When omitted, the path is read \
                     from an interactive prompt on standard input."
    )]
    pub directory: Option<PathBuf>,
}
