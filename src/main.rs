// Rust Data Cleaner - Main executable
// Author: Gabriel Demetrios Lafis

use std::path::Path;
use std::process;

use log::error;

use rust_data_cleaner::{
    job::CleaningJob,
    utils::{init_logging, Config},
};

const CONFIG_FILES: &[&str] = &["cleaner.yaml", "cleaner.json"];

fn main() {
    // Load configuration from the optional config file
    let config = match CONFIG_FILES.iter().find(|path| Path::new(path).exists()) {
        Some(path) => match Config::from_file(path) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("Error loading config file: {}", err);
                Config::default()
            }
        },
        None => Config::default(),
    };

    // Initialize logging
    if let Err(err) = init_logging(config.log_level_filter(), &config.logging.file) {
        eprintln!("Error initializing logger: {}", err);
    }

    // Run the cleaning job
    let job = CleaningJob::new(config);

    match job.run() {
        Ok(outcome) => {
            println!(
                "Cleaned {} rows down to {} ({})",
                outcome.rows_before,
                outcome.rows_after,
                outcome.output_path.display()
            );
        }
        Err(err) => {
            error!("Data cleaning failed: {}", err);
            eprintln!("Data cleaning failed: {}", err);
            process::exit(1);
        }
    }
}
