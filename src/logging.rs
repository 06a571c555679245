// src/logging.rs

use crate::errors::{HarnessError, HarnessResult};
use chrono::Utc;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

/// Initializes the `log` facade. `RUST_LOG` takes precedence over `level`.
pub fn init_logging(level: &str) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

/// Line-oriented destination for logged messages.
pub trait LineSink {
    fn write_line(&mut self, line: &str);
}

impl LineSink for Vec<String> {
    fn write_line(&mut self, line: &str) {
        self.push(line.to_string());
    }
}

/// Writes each message to stdout as `Log: <message>`, and appends it with a
/// timestamp to the capture file when one is open.
pub struct DiagnosticSink<W: Write = io::Stdout> {
    out: W,
    capture: Option<File>,
}

impl DiagnosticSink {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> DiagnosticSink<W> {
    pub fn new(out: W) -> Self {
        Self { out, capture: None }
    }

    /// Opens `path` for appending and mirrors every message into it.
    pub fn with_capture(mut self, path: &Path) -> HarnessResult<Self> {
        let file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(path)
            .map_err(|e| {
                HarnessError::asset_error(path, format!("Failed to open capture file: {}", e))
            })?;
        log::info!("Capturing log messages to {}", path.display());
        self.capture = Some(file);
        Ok(self)
    }
}

impl<W: Write> LineSink for DiagnosticSink<W> {
    fn write_line(&mut self, line: &str) {
        if let Err(e) = writeln!(self.out, "Log: {}", line) {
            log::warn!("Failed to write diagnostic line: {}", e);
        }

        if let Some(file) = self.capture.as_mut() {
            let entry = format!("[{}] {}\n", Utc::now().to_rfc3339(), line);
            if let Err(e) = file.write_all(entry.as_bytes()) {
                log::warn!("Failed to write to capture file: {}", e);
                self.capture = None;
            }
        }
    }
}
