//! Browser console logging for `tracing`.
//!
//! Events are formatted by `tracing-subscriber`'s fmt layer (no timestamps,
//! no ANSI) and each formatted line is handed to the matching `console.*`
//! method so browser devtools can filter by level.

use std::io;

use tracing::{Level, Metadata};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;
use wasm_bindgen::JsValue;

use crate::config::PageConfig;

/// Filter used when the page does not ask for anything else.
pub const DEFAULT_DIRECTIVE: &str = "info";

/// `console` method an event is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleMethod {
    /// `console.error`
    Error,
    /// `console.warn`
    Warn,
    /// `console.info`
    Info,
    /// `console.log`
    Log,
    /// `console.debug`
    Debug,
}

impl From<&Level> for ConsoleMethod {
    fn from(level: &Level) -> Self {
        if *level == Level::ERROR {
            ConsoleMethod::Error
        } else if *level == Level::WARN {
            ConsoleMethod::Warn
        } else if *level == Level::INFO {
            ConsoleMethod::Info
        } else if *level == Level::DEBUG {
            ConsoleMethod::Log
        } else {
            ConsoleMethod::Debug
        }
    }
}

impl ConsoleMethod {
    fn emit(self, line: &str) {
        let value = JsValue::from_str(line);
        match self {
            ConsoleMethod::Error => web_sys::console::error_1(&value),
            ConsoleMethod::Warn => web_sys::console::warn_1(&value),
            ConsoleMethod::Info => web_sys::console::info_1(&value),
            ConsoleMethod::Log => web_sys::console::log_1(&value),
            ConsoleMethod::Debug => web_sys::console::debug_1(&value),
        }
    }
}

/// Buffers one formatted event and flushes it to the console on drop.
pub struct ConsoleWriter {
    method: ConsoleMethod,
    buffer: Vec<u8>,
}

impl ConsoleWriter {
    fn new(method: ConsoleMethod) -> Self {
        Self {
            method,
            buffer: Vec::new(),
        }
    }
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        if self.buffer.is_empty() {
            return;
        }
        let text = String::from_utf8_lossy(&self.buffer);
        self.method.emit(text.trim_end());
    }
}

/// `MakeWriter` handing out level-aware [`ConsoleWriter`]s.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleMakeWriter;

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(ConsoleMethod::Log)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(ConsoleMethod::from(meta.level()))
    }
}

/// Build the level filter; an invalid directive falls back to [`DEFAULT_DIRECTIVE`].
pub fn filter_for(directive: &str) -> (EnvFilter, Option<String>) {
    match EnvFilter::try_new(directive) {
        Ok(filter) => (filter, None),
        Err(err) => (EnvFilter::new(DEFAULT_DIRECTIVE), Some(err.to_string())),
    }
}

/// Install the console subscriber. Safe to call more than once.
pub fn init(config: &PageConfig) {
    let (filter, rejected) = filter_for(&config.log_directive);

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(ConsoleMakeWriter)
        .with_ansi(false)
        .without_time()
        .with_target(true)
        .try_init()
        .is_ok();

    if !installed {
        return;
    }

    if let Some(err) = rejected {
        tracing::warn!(
            directive = %config.log_directive,
            %err,
            "invalid log directive, falling back to {DEFAULT_DIRECTIVE}"
        );
    }
    tracing::debug!(?config, "telemetry initialised");
}
