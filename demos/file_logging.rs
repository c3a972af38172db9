//! Structured file logging example
//!
//! Sends console output to stderr and line-delimited JSON to a file, then
//! prints the file back.
//!
//! Run with: cargo run --example file_logging

use std::fs;
use vlog::prelude::*;
use vlog::{facade, info, warn};

fn main() -> Result<()> {
    println!("=== vlog - File Logging Example ===\n");

    let path = std::env::temp_dir().join("vlog_file_logging.jsonl");
    let _ = fs::remove_file(&path);

    facade::configure_file(&path, None)?;

    info!("job started", "job", "nightly-export");
    warn!("slow query", "table", "orders", "ms", 1830);
    facade::default_logger()
        .with_group("export")
        .info("rows written", &[&"count", &52000]);

    facade::flush()?;

    println!("\nContents of {}:", path.display());
    for line in fs::read_to_string(&path)?.lines() {
        println!("  {}", line);
    }

    facade::reset();
    println!("\n=== Example completed successfully! ===");

    Ok(())
}
