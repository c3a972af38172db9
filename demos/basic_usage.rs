//! Basic logger usage example
//!
//! Demonstrates the default logger, the logging macros and runtime level
//! changes.
//!
//! Run with: cargo run --example basic_usage

use vlog::prelude::*;
use vlog::{debug, error, facade, info, infof, warn};

fn main() -> Result<()> {
    println!("=== vlog - Basic Usage Example ===\n");

    println!("1. Logging through the default logger (INFO and above):");
    debug!("cache warmed", "entries", 128);
    info!("server started", "port", 8080);
    warn!("disk space low", "free_mb", 512);
    error!("upstream unreachable", "host", "db-1", "attempt", 3);

    println!("\n2. Lowering the level at runtime:");
    facade::set_level(LogLevel::DEBUG);
    debug!("now visible", "entries", 128);
    infof!("processed {} items in {}ms", 100, 42);
    facade::set_level(LogLevel::INFO);

    println!("\n3. A dedicated logger with scoped attributes:");
    let logger = Logger::builder()
        .handler(PrettyHandler::new())
        .build()
        .with(&[&"service", &"billing"]);
    let request = logger.with_group("request").with(&[&"id", &"r-17"]);
    request.info("invoice created", &[&"amount", &99]);
    logger.notice("batch finished", &[]);

    logger.flush()?;
    println!("\n=== Example completed successfully! ===");

    Ok(())
}
