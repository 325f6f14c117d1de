// Configuration utilities
// Author: Gabriel Demetrios Lafis

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub job: JobConfig,
    pub logging: LoggingConfig,
}

/// Cleaning job configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobConfig {
    pub input_path: String,
    pub output_prefix: String,
    pub report_path: String,
    pub placeholder: String,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub file: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            job: JobConfig {
                input_path: "input.csv".to_string(),
                output_prefix: "cleaned".to_string(),
                report_path: "report.txt".to_string(),
                placeholder: "Unknown".to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                file: "process.log".to_string(),
            },
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let mut file = File::open(&path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        let config = if path.as_ref().extension().map_or(false, |ext| ext == "json") {
            serde_json::from_str(&contents)?
        } else if path
            .as_ref()
            .extension()
            .map_or(false, |ext| ext == "yaml" || ext == "yml")
        {
            serde_yaml::from_str(&contents)?
        } else {
            return Err("Unsupported config file format".into());
        };

        Ok(config)
    }

    /// Get the log level filter
    pub fn log_level_filter(&self) -> log::LevelFilter {
        match self.logging.level.to_lowercase().as_str() {
            "off" => log::LevelFilter::Off,
            "error" => log::LevelFilter::Error,
            "warn" => log::LevelFilter::Warn,
            "info" => log::LevelFilter::Info,
            "debug" => log::LevelFilter::Debug,
            "trace" => log::LevelFilter::Trace,
            _ => log::LevelFilter::Info,
        }
    }
}
