use crate::domain::model::{Level, LogEvent};
use crate::domain::ports::Logger;
use crate::utils::error::{MathsError, Result};
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::{Arc, Mutex};

/// Forwards guest events to the process-wide `tracing` subscriber.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn log(&self, level: Level, context: &str, message: &str) -> Result<()> {
        match level {
            Level::Trace => tracing::trace!(context, "{}", message),
            Level::Debug => tracing::debug!(context, "{}", message),
            Level::Info => tracing::info!(context, "{}", message),
            Level::Warn => tracing::warn!(context, "{}", message),
            // tracing has no level above error
            Level::Error | Level::Critical => {
                tracing::error!(context, critical = level == Level::Critical, "{}", message)
            }
        }
        Ok(())
    }
}

/// Keeps every event in memory, in emission order.
#[derive(Debug, Clone, Default)]
pub struct RecordingLogger {
    events: Arc<Mutex<Vec<LogEvent>>>,
}

impl RecordingLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<LogEvent> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.events().into_iter().map(|e| e.message).collect()
    }

    pub fn clear(&self) {
        if let Ok(mut events) = self.events.lock() {
            events.clear();
        }
    }
}

impl Logger for RecordingLogger {
    fn log(&self, level: Level, context: &str, message: &str) -> Result<()> {
        let mut events = self.events.lock().map_err(|_| MathsError::Logging {
            message: "event buffer poisoned".to_string(),
        })?;
        events.push(LogEvent::new(level, context, message));
        Ok(())
    }
}

/// Appends each event to a file as one JSON object per line.
#[derive(Debug)]
pub struct JsonLinesLogger {
    file: Mutex<File>,
}

impl JsonLinesLogger {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            file: Mutex::new(file),
        })
    }
}

impl Logger for JsonLinesLogger {
    fn log(&self, level: Level, context: &str, message: &str) -> Result<()> {
        let mut line = serde_json::to_string(&LogEvent::new(level, context, message))?;
        line.push('\n');

        let mut file = self.file.lock().map_err(|_| MathsError::Logging {
            message: "log file handle poisoned".to_string(),
        })?;
        file.write_all(line.as_bytes())
            .and_then(|_| file.flush())
            .map_err(|e| MathsError::Logging {
                message: e.to_string(),
            })
    }
}
