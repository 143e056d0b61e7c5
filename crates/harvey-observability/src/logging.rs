//! Structured logging scoped to a storefront component.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, Mutex};

use serde::Serialize;

/// Log level for structured logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Trace => write!(f, "TRACE"),
            Self::Debug => write!(f, "DEBUG"),
            Self::Info => write!(f, "INFO"),
            Self::Warn => write!(f, "WARN"),
            Self::Error => write!(f, "ERROR"),
        }
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            other => Err(format!("unknown log level: {}", other)),
        }
    }
}

/// A structured log entry.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LogEntry {
    /// Log level.
    pub level: LogLevel,
    /// Log message.
    pub message: String,
    /// Component that produced the entry (e.g. "contact-form").
    pub scope: String,
    /// Page the component was rendered on.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<String>,
    /// Additional structured fields.
    #[serde(flatten)]
    pub fields: BTreeMap<String, serde_json::Value>,
    /// Microseconds since the logger was created. Absent in the browser.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elapsed_us: Option<u64>,
}

impl LogEntry {
    /// Format as JSON string.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| self.message.clone())
    }

    /// Format as human-readable string.
    pub fn to_human(&self) -> String {
        let mut s = format!("[{}] {}: {}", self.level, self.scope, self.message);

        if let Some(elapsed) = self.elapsed_us {
            s.push_str(&format!(" ({}us)", elapsed));
        }

        if !self.fields.is_empty() {
            s.push_str(" | ");
            let fields: Vec<String> = self
                .fields
                .iter()
                .map(|(k, v)| format!("{}={}", k, v))
                .collect();
            s.push_str(&fields.join(" "));
        }

        s
    }

    /// Look up a field value.
    pub fn field(&self, key: &str) -> Option<&serde_json::Value> {
        self.fields.get(key)
    }
}

/// Output format for logs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// JSON format (for log aggregation).
    #[default]
    Json,
    /// Human-readable format (for development).
    Human,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "human" | "text" | "pretty" => Ok(Self::Human),
            other => Err(format!("unknown log format: {}", other)),
        }
    }
}

/// In-memory buffer of log entries, shared between clones.
#[derive(Debug, Clone, Default)]
pub struct MemorySink(Arc<Mutex<Vec<LogEntry>>>);

impl MemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything recorded so far.
    pub fn entries(&self) -> Vec<LogEntry> {
        match self.0.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Number of recorded entries.
    pub fn len(&self) -> usize {
        self.entries().len()
    }

    /// Check if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn push(&self, entry: LogEntry) {
        match self.0.lock() {
            Ok(mut guard) => guard.push(entry),
            Err(poisoned) => poisoned.into_inner().push(entry),
        }
    }
}

/// Where formatted entries are written.
#[derive(Debug, Clone, Default)]
pub enum LogTarget {
    /// Standard error.
    #[default]
    Stderr,
    /// Browser developer console. Falls back to stderr off the web.
    Console,
    /// Keep entries in memory.
    Memory(MemorySink),
}

/// Structured logger scoped to one storefront component.
#[derive(Debug, Clone)]
pub struct StructuredLogger {
    scope: String,
    page: Option<String>,
    started: Option<std::time::Instant>,
    min_level: LogLevel,
    format: LogFormat,
    target: LogTarget,
}

impl StructuredLogger {
    /// Create a new logger for a component scope.
    pub fn new(scope: impl Into<String>) -> Self {
        Self {
            scope: scope.into(),
            page: None,
            started: now(),
            min_level: LogLevel::Info,
            format: LogFormat::Json,
            target: LogTarget::Stderr,
        }
    }

    /// Logger that writes human-readable lines to the browser console.
    pub fn browser(scope: impl Into<String>) -> Self {
        Self::new(scope)
            .with_format(LogFormat::Human)
            .with_target(LogTarget::Console)
    }

    /// Set the page name.
    pub fn with_page(mut self, page: impl Into<String>) -> Self {
        self.page = Some(page.into());
        self
    }

    /// Set minimum log level.
    pub fn with_min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    /// Set output format.
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    /// Set output target.
    pub fn with_target(mut self, target: LogTarget) -> Self {
        self.target = target;
        self
    }

    /// Derive a logger for a child scope sharing level, format and target.
    pub fn child(&self, scope: impl Into<String>) -> Self {
        Self {
            scope: format!("{}.{}", self.scope, scope.into()),
            ..self.clone()
        }
    }

    /// Log at debug level.
    pub fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message, BTreeMap::new());
    }

    /// Log at info level.
    pub fn info(&self, message: &str) {
        self.log(LogLevel::Info, message, BTreeMap::new());
    }

    /// Log at warn level.
    pub fn warn(&self, message: &str) {
        self.log(LogLevel::Warn, message, BTreeMap::new());
    }

    /// Log at error level.
    pub fn error(&self, message: &str) {
        self.log(LogLevel::Error, message, BTreeMap::new());
    }

    fn log(&self, level: LogLevel, message: &str, fields: BTreeMap<String, serde_json::Value>) {
        if level < self.min_level {
            return;
        }

        let entry = LogEntry {
            level,
            message: message.to_string(),
            scope: self.scope.clone(),
            page: self.page.clone(),
            fields,
            elapsed_us: self.started.map(|s| s.elapsed().as_micros() as u64),
        };

        let output = match self.format {
            LogFormat::Json => entry.to_json(),
            LogFormat::Human => entry.to_human(),
        };

        match &self.target {
            LogTarget::Stderr => eprintln!("{}", output),
            LogTarget::Console => write_console(level, &output),
            LogTarget::Memory(sink) => sink.push(entry),
        }
    }

    /// Get the scope name.
    pub fn scope(&self) -> &str {
        &self.scope
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn now() -> Option<std::time::Instant> {
    Some(std::time::Instant::now())
}

// `Instant::now` panics on wasm32-unknown-unknown.
#[cfg(target_arch = "wasm32")]
fn now() -> Option<std::time::Instant> {
    None
}

#[cfg(target_arch = "wasm32")]
fn write_console(level: LogLevel, output: &str) {
    let value = wasm_bindgen::JsValue::from_str(output);
    match level {
        LogLevel::Trace | LogLevel::Debug => web_sys::console::debug_1(&value),
        LogLevel::Info => web_sys::console::info_1(&value),
        LogLevel::Warn => web_sys::console::warn_1(&value),
        LogLevel::Error => web_sys::console::error_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_console(_level: LogLevel, output: &str) {
    eprintln!("{}", output);
}

/// Builder for log entries with fluent API.
pub struct LogBuilder<'a> {
    logger: &'a StructuredLogger,
    level: LogLevel,
    message: String,
    fields: BTreeMap<String, serde_json::Value>,
}

impl<'a> LogBuilder<'a> {
    /// Create a new log builder.
    pub fn new(logger: &'a StructuredLogger, level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            logger,
            level,
            message: message.into(),
            fields: BTreeMap::new(),
        }
    }

    /// Add a string field.
    pub fn field(mut self, key: &str, value: impl Into<String>) -> Self {
        self.fields
            .insert(key.to_string(), serde_json::json!(value.into()));
        self
    }

    /// Add an integer field.
    pub fn field_i64(mut self, key: &str, value: i64) -> Self {
        self.fields.insert(key.to_string(), serde_json::json!(value));
        self
    }

    /// Add a boolean field.
    pub fn field_bool(mut self, key: &str, value: bool) -> Self {
        self.fields.insert(key.to_string(), serde_json::json!(value));
        self
    }

    /// Add a duration field (in milliseconds).
    pub fn duration_ms(mut self, key: &str, duration: std::time::Duration) -> Self {
        self.fields
            .insert(key.to_string(), serde_json::json!(duration.as_millis() as u64));
        self
    }

    /// Emit the log entry.
    pub fn emit(self) {
        self.logger.log(self.level, &self.message, self.fields);
    }
}

impl StructuredLogger {
    /// Start building an info log entry.
    pub fn info_builder(&self, message: impl Into<String>) -> LogBuilder<'_> {
        LogBuilder::new(self, LogLevel::Info, message)
    }

    /// Start building a debug log entry.
    pub fn debug_builder(&self, message: impl Into<String>) -> LogBuilder<'_> {
        LogBuilder::new(self, LogLevel::Debug, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn captured(scope: &str) -> (StructuredLogger, MemorySink) {
        let sink = MemorySink::new();
        let logger = StructuredLogger::new(scope).with_target(LogTarget::Memory(sink.clone()));
        (logger, sink)
    }

    #[test]
    fn test_min_level_filters() {
        let (logger, sink) = captured("carousel");
        logger.debug("tick");
        logger.info("paused");
        logger.error("timer failed");

        let entries = sink.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].level, LogLevel::Info);
        assert_eq!(entries[1].message, "timer failed");
    }

    #[test]
    fn test_builder_fields() {
        let (logger, sink) = captured("contact-form");
        logger
            .info_builder("submission received")
            .field("subject", "Sizing")
            .field_i64("message_len", 42)
            .field_bool("stub", true)
            .emit();

        let entry = &sink.entries()[0];
        assert_eq!(entry.scope, "contact-form");
        assert_eq!(entry.field("subject"), Some(&serde_json::json!("Sizing")));
        assert_eq!(entry.field("message_len"), Some(&serde_json::json!(42)));
        assert_eq!(entry.field("stub"), Some(&serde_json::json!(true)));
    }

    #[test]
    fn test_json_flattens_fields() {
        let (logger, sink) = captured("catalog");
        logger.info_builder("filtered").field_i64("shown", 3).emit();

        let json = sink.entries()[0].to_json();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["level"], "info");
        assert_eq!(value["scope"], "catalog");
        assert_eq!(value["shown"], 3);
        assert!(value.get("page").is_none());
    }

    #[test]
    fn test_human_format() {
        let entry = LogEntry {
            level: LogLevel::Warn,
            message: "empty result".to_string(),
            scope: "catalog".to_string(),
            page: None,
            fields: BTreeMap::from([("query".to_string(), serde_json::json!("xyz"))]),
            elapsed_us: None,
        };
        assert_eq!(entry.to_human(), r#"[WARN] catalog: empty result | query="xyz""#);
    }

    #[test]
    fn test_child_scope_shares_sink() {
        let (logger, sink) = captured("storefront");
        let child = logger.child("carousel").with_page("home");
        child.info("started");

        let entry = &sink.entries()[0];
        assert_eq!(entry.scope, "storefront.carousel");
        assert_eq!(entry.page.as_deref(), Some("home"));
    }

    #[test]
    fn test_parse_level_and_format() {
        assert_eq!("WARNING".parse::<LogLevel>(), Ok(LogLevel::Warn));
        assert!("loud".parse::<LogLevel>().is_err());
        assert_eq!("human".parse::<LogFormat>(), Ok(LogFormat::Human));
        assert_eq!("json".parse::<LogFormat>(), Ok(LogFormat::Json));
    }
}
