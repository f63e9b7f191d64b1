use log::{Level, LevelFilter, Metadata, Record};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{Result, RichPrintError};

struct FileLogger {
    file_path: PathBuf,
}

impl log::Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Debug
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            if let Ok(mut file) = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.file_path)
            {
                let _ = writeln!(file, "[{}] {}", record.level(), record.args());
            }
        }
    }

    fn flush(&self) {}
}

/// Install a debug-level logger that appends `[LEVEL] message` lines to `path`.
///
/// Fails if a logger is already installed for this process.
pub fn init_logger(path: impl AsRef<Path>) -> Result<()> {
    let logger = FileLogger {
        file_path: path.as_ref().to_path_buf(),
    };
    log::set_boxed_logger(Box::new(logger))
        .map_err(|e| RichPrintError::Logger(e.to_string()))?;
    log::set_max_level(LevelFilter::Debug);
    Ok(())
}
