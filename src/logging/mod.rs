use serde::Serialize;
use serde_json::{Map, Value};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::{SystemTime, UNIX_EPOCH};

use thiserror::Error;

pub type LogFields = Map<String, Value>;

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

/// Structured event emitted by the layout engine, serialized as one JSON
/// object per line.
#[derive(Debug, Clone, Serialize)]
pub struct LogEvent {
    pub ts_ms: u128,
    pub level: LogLevel,
    pub target: String,
    pub message: String,
    #[serde(skip_serializing_if = "LogFields::is_empty", default)]
    pub fields: LogFields,
}

impl LogEvent {
    pub fn new(level: LogLevel, target: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            ts_ms: current_ms(),
            level,
            target: target.into(),
            message: message.into(),
            fields: LogFields::new(),
        }
    }

    pub fn with_fields(
        level: LogLevel,
        target: impl Into<String>,
        message: impl Into<String>,
        fields: LogFields,
    ) -> Self {
        Self {
            fields,
            ..Self::new(level, target, message)
        }
    }
}

fn current_ms() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0)
}

pub type LoggingResult<T> = std::result::Result<T, LoggingError>;

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub trait LogSink: Send + Sync {
    fn log(&self, event: &LogEvent) -> LoggingResult<()>;
}

#[derive(Clone)]
pub struct Logger {
    sink: Arc<dyn LogSink>,
}

impl Logger {
    pub fn new<S>(sink: S) -> Self
    where
        S: LogSink + 'static,
    {
        Self {
            sink: Arc::new(sink),
        }
    }

    pub fn log(&self, level: LogLevel, target: &str, message: &str) -> LoggingResult<()> {
        self.sink.log(&LogEvent::new(level, target, message))
    }

    pub fn log_event(&self, event: LogEvent) -> LoggingResult<()> {
        self.sink.log(&event)
    }
}

/// Append-only JSON-lines sink with a byte cap; the file is truncated and
/// restarted once a write would push it past `max_bytes` (0 disables the cap).
pub struct FileSink {
    path: PathBuf,
    max_bytes: u64,
    writer: Mutex<BufWriter<File>>,
}

impl FileSink {
    pub fn new(path: impl AsRef<Path>, max_bytes: u64) -> LoggingResult<Self> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .append(true)
            .open(&path)?;
        Ok(Self {
            path,
            max_bytes,
            writer: Mutex::new(BufWriter::new(file)),
        })
    }

    fn write_line(&self, mut line: String) -> LoggingResult<()> {
        line.push('\n');
        let mut guard = self.writer.lock().expect("logger mutex poisoned");

        if self.should_rotate(guard.get_ref(), line.len() as u64)? {
            let file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(&self.path)?;
            *guard = BufWriter::new(file);
        }

        guard.write_all(line.as_bytes())?;
        guard.flush()?;
        Ok(())
    }

    fn should_rotate(&self, file: &File, incoming_len: u64) -> std::io::Result<bool> {
        if self.max_bytes == 0 {
            return Ok(false);
        }
        let current = file.metadata()?.len();
        Ok(current + incoming_len > self.max_bytes)
    }
}

impl LogSink for FileSink {
    fn log(&self, event: &LogEvent) -> LoggingResult<()> {
        let line = serde_json::to_string(event)?;
        self.write_line(line)
    }
}

/// In-memory sink that records every event it receives; used by tests to
/// assert on what the engine emitted.
#[derive(Default)]
pub struct MemorySink {
    events: Mutex<Vec<LogEvent>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<LogEvent> {
        self.events.lock().expect("sink mutex poisoned").clone()
    }
}

impl LogSink for Arc<MemorySink> {
    fn log(&self, event: &LogEvent) -> LoggingResult<()> {
        self.events
            .lock()
            .expect("sink mutex poisoned")
            .push(event.clone());
        Ok(())
    }
}

pub fn event_with_fields(
    level: LogLevel,
    target: &str,
    message: &str,
    fields: impl IntoIterator<Item = (String, Value)>,
) -> LogEvent {
    let mut map = LogFields::new();
    for (k, v) in fields.into_iter() {
        map.insert(k, v);
    }
    LogEvent::with_fields(level, target, message, map)
}

pub fn json_kv(key: &str, value: impl Into<Value>) -> (String, Value) {
    (key.to_string(), value.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn memory_sink_captures_events() {
        let sink = Arc::new(MemorySink::new());
        let logger = Logger::new(Arc::clone(&sink));

        logger
            .log(LogLevel::Info, "layout.test", "hello")
            .expect("log");

        let events = sink.events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].target, "layout.test");
        assert_eq!(events[0].message, "hello");
    }

    #[test]
    fn event_with_fields_collects_pairs() {
        let event = event_with_fields(
            LogLevel::Debug,
            "layout.columns",
            "columns_derived",
            [json_kv("column_length", json!(3))],
        );

        assert_eq!(event.fields.get("column_length"), Some(&json!(3)));
    }

    fn temp_log_path(tag: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock")
            .as_nanos();
        std::env::temp_dir().join(format!(
            "masonry_{}_{}_{}.jsonl",
            tag,
            std::process::id(),
            nanos
        ))
    }

    #[test]
    fn file_sink_with_zero_cap_never_rotates() {
        let path = temp_log_path("uncapped");
        let sink = FileSink::new(&path, 0).expect("sink");

        sink.log(&LogEvent::new(LogLevel::Info, "layout", "first"))
            .expect("first write");
        sink.log(&LogEvent::new(LogLevel::Info, "layout", "second"))
            .expect("second write");

        let contents = std::fs::read_to_string(&path).expect("read log");
        std::fs::remove_file(&path).ok();

        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("\"message\":\"first\""));
        assert!(lines[1].contains("\"message\":\"second\""));
    }

    #[test]
    fn file_sink_truncates_once_cap_is_exceeded() {
        let path = temp_log_path("capped");
        // every serialized event is longer than 16 bytes, so each write
        // truncates and restarts the file
        let sink = FileSink::new(&path, 16).expect("sink");

        sink.log(&LogEvent::new(LogLevel::Info, "layout", "first"))
            .expect("first write");
        sink.log(&LogEvent::new(LogLevel::Info, "layout", "second"))
            .expect("second write");

        let contents = std::fs::read_to_string(&path).expect("read log");
        std::fs::remove_file(&path).ok();

        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("\"message\":\"second\""));
    }

    #[test]
    fn events_serialize_without_empty_fields() {
        let event = LogEvent::new(LogLevel::Warn, "layout", "plain");
        let line = serde_json::to_string(&event).expect("serialize");
        assert!(!line.contains("fields"));
        assert!(line.contains("\"level\":\"warn\""));
    }
}
