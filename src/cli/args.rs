//! CLI argument parsing

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "permcheck")]
#[command(author, version, about = "Check a path's permission bits against a warning threshold", long_about = None)]
pub struct Args {
    /// File or directory path to check
    #[arg(long)]
    pub path: PathBuf,

    /// Config file path
    #[arg(long, default_value = "config.json")]
    pub config: PathBuf,
}
