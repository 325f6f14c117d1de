// Logging utilities
// Author: Gabriel Demetrios Lafis

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;

use log::{LevelFilter, Metadata, Record};

use super::AppError;

/// Initialize logging to an append-only file.
///
/// Installs the process-wide logger once at startup; every later step logs
/// through the `log` facade into the same sink.
pub fn init_logging<P: AsRef<Path>>(level: LevelFilter, path: P) -> Result<(), AppError> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    log::set_boxed_logger(Box::new(FileLogger {
        file: Mutex::new(file),
    }))
    .map(|()| log::set_max_level(level))
    .map_err(|err| AppError::Other(err.to_string()))
}

/// Logger appending timestamped lines to a file
struct FileLogger {
    file: Mutex<File>,
}

impl log::Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            if let Ok(mut file) = self.file.lock() {
                let _ = writeln!(
                    file,
                    "{} - {} - {}",
                    chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                    record.level(),
                    record.args()
                );
            }
        }
    }

    fn flush(&self) {
        if let Ok(mut file) = self.file.lock() {
            let _ = file.flush();
        }
    }
}
