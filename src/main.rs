//! Permcheck CLI - warn when a path's permissions exceed a threshold

use clap::Parser;
use permcheck::cli::Args;
use permcheck::{check_path, logging, render_report, Config};

fn main() {
    let args = Args::parse();

    // Logging failure must not block the check itself
    if let Err(e) = logging::init() {
        eprintln!("Warning: logging unavailable: {}", e);
    }

    let config = Config::load(&args.config);
    let outcome = check_path(&args.path, &config);
    println!("{}", render_report(&args.path, &outcome));
}
