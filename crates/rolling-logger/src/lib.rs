//! Rolling Logger
//!
//! A `tracing` layer that mirrors every event to the browser console and
//! keeps the most recent lines in a circular buffer, so the widget can
//! hand back a short history without any storage.

use std::collections::VecDeque;
use std::fmt::{self, Write as _};
use std::sync::{Arc, Mutex};

use thiserror::Error;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Metadata, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
use tracing_subscriber::Registry;

/// Lines kept when no capacity is given
pub const DEFAULT_CAPACITY: usize = 200;

#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("a global tracing subscriber is already installed")]
    AlreadyInitialized(#[from] tracing::subscriber::SetGlobalDefaultError),
}

/// Fixed-size buffer of formatted log lines; oldest lines fall off first
#[derive(Debug)]
pub struct RollingBuffer {
    lines: Mutex<VecDeque<String>>,
    capacity: usize,
}

impl RollingBuffer {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            lines: Mutex::new(VecDeque::with_capacity(capacity)),
            capacity,
        }
    }

    pub fn push(&self, line: String) {
        let mut lines = match self.lines.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        if lines.len() == self.capacity {
            lines.pop_front();
        }
        lines.push_back(line);
    }

    /// Snapshot, oldest first
    pub fn lines(&self) -> Vec<String> {
        match self.lines.lock() {
            Ok(guard) => guard.iter().cloned().collect(),
            Err(poisoned) => poisoned.into_inner().iter().cloned().collect(),
        }
    }

    pub fn clear(&self) {
        match self.lines.lock() {
            Ok(mut guard) => guard.clear(),
            Err(poisoned) => poisoned.into_inner().clear(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

/// Handle returned by [`init_logger`] for reading the buffered history
#[derive(Debug, Clone)]
pub struct LoggerHandle {
    buffer: Arc<RollingBuffer>,
}

impl LoggerHandle {
    /// Handle over a buffer fed by a [`RollingLayer`]
    pub fn new(buffer: Arc<RollingBuffer>) -> Self {
        Self { buffer }
    }

    pub fn recent(&self) -> Vec<String> {
        self.buffer.lines()
    }

    pub fn clear(&self) {
        self.buffer.clear();
    }
}

/// Layer writing formatted events to the console and the rolling buffer
pub struct RollingLayer {
    app_name: String,
    max_level: Level,
    buffer: Arc<RollingBuffer>,
    echo: bool,
}

impl RollingLayer {
    pub fn new(app_name: impl Into<String>, max_level: Level, buffer: Arc<RollingBuffer>) -> Self {
        Self {
            app_name: app_name.into(),
            max_level,
            buffer,
            echo: true,
        }
    }

    /// Keep lines in the buffer only, without console output
    pub fn quiet(mut self) -> Self {
        self.echo = false;
        self
    }

    fn format(&self, event: &Event<'_>) -> String {
        let meta = event.metadata();
        let mut visitor = LineVisitor::default();
        event.record(&mut visitor);

        let mut line = format!(
            "[{}] {:<5} {}: {}",
            chrono::Local::now().format("%H:%M:%S%.3f"),
            meta.level().as_str(),
            meta.target(),
            visitor.message
        );
        if !visitor.fields.is_empty() {
            line.push(' ');
            line.push_str(&visitor.fields);
        }
        line
    }
}

impl<S: Subscriber> Layer<S> for RollingLayer {
    fn enabled(&self, metadata: &Metadata<'_>, _ctx: Context<'_, S>) -> bool {
        metadata.level() <= &self.max_level
    }

    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let line = self.format(event);
        if self.echo {
            write_console(&self.app_name, *event.metadata().level(), &line);
        }
        self.buffer.push(line);
    }
}

#[derive(Default)]
struct LineVisitor {
    message: String,
    fields: String,
}

impl Visit for LineVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message.push_str(value);
        } else {
            self.record_debug(field, &value);
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            let _ = write!(self.message, "{:?}", value);
            return;
        }
        if !self.fields.is_empty() {
            self.fields.push(' ');
        }
        let _ = write!(self.fields, "{}={:?}", field.name(), value);
    }
}

#[cfg(target_arch = "wasm32")]
fn write_console(app_name: &str, level: Level, line: &str) {
    use wasm_bindgen::JsValue;

    let value = JsValue::from_str(&format!("[{}] {}", app_name, line));
    match level {
        Level::ERROR => web_sys::console::error_1(&value),
        Level::WARN => web_sys::console::warn_1(&value),
        Level::INFO => web_sys::console::info_1(&value),
        _ => web_sys::console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_console(app_name: &str, _level: Level, line: &str) {
    eprintln!("[{}] {}", app_name, line);
}

/// Install the rolling layer as the global subscriber
pub fn init_logger(app_name: &str, max_level: Level, capacity: usize) -> Result<LoggerHandle, LoggerError> {
    let buffer = Arc::new(RollingBuffer::new(capacity));
    let layer = RollingLayer::new(app_name, max_level, buffer.clone());
    tracing::subscriber::set_global_default(Registry::default().with(layer))?;
    Ok(LoggerHandle::new(buffer))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn capture<F: FnOnce()>(max_level: Level, capacity: usize, f: F) -> Vec<String> {
        let buffer = Arc::new(RollingBuffer::new(capacity));
        let layer = RollingLayer::new("test", max_level, buffer.clone()).quiet();
        let subscriber = Registry::default().with(layer);
        tracing::subscriber::with_default(subscriber, f);
        buffer.lines()
    }

    #[test]
    fn test_buffer_drops_oldest() {
        let buffer = RollingBuffer::new(2);
        buffer.push("a".into());
        buffer.push("b".into());
        buffer.push("c".into());
        assert_eq!(buffer.lines(), vec!["b".to_string(), "c".to_string()]);
    }

    #[test]
    fn test_zero_capacity_keeps_one_line() {
        let buffer = RollingBuffer::new(0);
        assert_eq!(buffer.capacity(), 1);
        buffer.push("x".into());
        buffer.push("y".into());
        assert_eq!(buffer.lines(), vec!["y".to_string()]);
    }

    #[test]
    fn test_formats_message_and_fields() {
        let lines = capture(Level::DEBUG, 10, || {
            tracing::info!(target: "demo", count = 3, "hello");
        });
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with('['));
        assert!(lines[0].ends_with("INFO  demo: hello count=3"), "{}", lines[0]);
    }

    #[test]
    fn test_level_filter() {
        let lines = capture(Level::WARN, 10, || {
            tracing::debug!("hidden");
            tracing::warn!("shown");
        });
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("shown"));
    }

    #[test]
    fn test_handle_clear() {
        let handle = LoggerHandle {
            buffer: Arc::new(RollingBuffer::new(4)),
        };
        handle.buffer.push("line".into());
        assert_eq!(handle.recent().len(), 1);
        handle.clear();
        assert!(handle.recent().is_empty());
    }
}
