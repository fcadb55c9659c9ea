//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "untag")]
#[command(about = "Strip HTML tags from files in place", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Files to strip (default: text.html next to the executable, or in UNTAG_ROOT)
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Descend into directories and strip every .html/.htm file
    #[arg(short, long)]
    pub recursive: bool,

    /// Show what would change without writing files
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Log each step to stderr
    #[arg(short, long)]
    pub verbose: bool,
}
