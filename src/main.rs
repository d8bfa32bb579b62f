//! CLI entry point for podcrab

use podcrab::cli;

fn main() {
    if let Err(error) = cli::run() {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}
