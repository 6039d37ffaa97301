use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::{Mutex, OnceLock};
use chrono::Local;

static LOGGER: OnceLock<Logger> = OnceLock::new();

/// Stdout belongs to the game board, so log lines only go to a file.
pub struct Logger {
    prefix: Option<String>,
    sink: Option<Mutex<File>>,
}

impl Logger {
    fn new(prefix: Option<String>, sink: Option<File>) -> Self {
        Self {
            prefix,
            sink: sink.map(Mutex::new),
        }
    }

    pub fn format_line(&self, file: &str, line: u32, message: &str) -> String {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        let file_name = file.rsplit(['/', '\\']).next().unwrap_or(file);
        match self.prefix {
            Some(ref prefix) => {
                format!("[{}][{}][{}:{}] {}", timestamp, prefix, file_name, line, message)
            }
            None => format!("[{}][{}:{}] {}", timestamp, file_name, line, message),
        }
    }

    pub fn log(&self, file: &str, line: u32, message: &str) {
        let Some(sink) = &self.sink else {
            return;
        };
        let formatted = self.format_line(file, line, message);
        if let Ok(mut out) = sink.lock() {
            let _ = writeln!(out, "{}", formatted);
        }
    }
}

/// Sets up the process-wide logger. Without a log file every message is
/// dropped. Only the first successful call has an effect; a log file that
/// can't be opened leaves the logger unset.
pub fn init_logger(prefix: Option<String>, log_file: Option<&Path>) -> Result<(), String> {
    let sink = match log_file {
        Some(path) => Some(
            OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| format!("Failed to open log file {}: {}", path.display(), e))?,
        ),
        None => None,
    };
    LOGGER.get_or_init(|| Logger::new(prefix, sink));
    Ok(())
}

pub fn log(file: &str, line: u32, message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.log(file, line, message);
    }
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log(file!(), line!(), &format!($($arg)*))
    };
}
