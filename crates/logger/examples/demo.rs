//! Walkthrough of the logger's sinks and runtime switches.

use logger::{
    debug, enable_debug, enable_verbose, error, info, init_file_logging, set_level, verbose, warn,
    Level,
};
use std::path::PathBuf;

fn main() {
    println!("=== logger demo ===\n");

    set_level(Level::Debug);
    enable_debug();

    let log_file = PathBuf::from(format!("{}/logger_demo.log", std::env::temp_dir().display()));
    if init_file_logging(&log_file) {
        println!("✓ File sink active at: {}\n", log_file.display());
    } else {
        println!("✗ Could not open the file sink\n");
    }

    enable_verbose();

    println!("--- Tagged messages (file only once the sink is active) ---");
    error!("an error message");
    warn!("a warning message");
    info!("an info message");
    debug!("a debug message");

    println!("\n--- Verbose output (console only) ---");
    verbose!("checking roster row {} of {}", 1, 3);
    verbose!("checking roster row {} of {}", 2, 3);
    verbose!("checking roster row {} of {}", 3, 3);
    verbose!("done");

    println!("\nInspect the sink with: cat {}", log_file.display());
}
