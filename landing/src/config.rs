//! Page configuration from the URL query string.
//!
//! The page has no config files and no environment; the only knobs are
//! optional query parameters:
//!
//! - `log=<directive>` - `tracing` filter directive (default `info`)
//! - `console=off` - skip the console banner and `window.prevacare` commands

use std::borrow::Cow;

use crate::telemetry::DEFAULT_DIRECTIVE;

/// Settings resolved once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageConfig {
    /// `EnvFilter` directive for browser console logging
    pub log_directive: String,
    /// Whether to install the console banner and commands
    pub console_commands: bool,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            log_directive: DEFAULT_DIRECTIVE.to_string(),
            console_commands: true,
        }
    }
}

impl PageConfig {
    /// Parse a raw query string (with or without the leading `?`).
    ///
    /// Pairs are split before percent-decoding, so an encoded `&` or `=`
    /// stays inside its value. A component that fails to decode is kept
    /// verbatim. Unknown keys are ignored; later occurrences of a key win.
    pub fn from_query(query: &str) -> Self {
        let mut config = Self::default();
        let query = query.strip_prefix('?').unwrap_or(query);

        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            let (key, value) = (decode(key), decode(value));
            match &*key {
                "log" if !value.trim().is_empty() => {
                    config.log_directive = value.trim().to_string();
                }
                "console" => {
                    config.console_commands = !matches!(&*value, "off" | "0" | "false");
                }
                _ => {}
            }
        }

        config
    }

    /// Read the current page's query string; defaults when unavailable.
    pub fn from_location() -> Self {
        web_sys::window()
            .and_then(|w| w.location().search().ok())
            .map(|search| Self::from_query(&search))
            .unwrap_or_default()
    }
}

fn decode(component: &str) -> Cow<'_, str> {
    urlencoding::decode(component).unwrap_or(Cow::Borrowed(component))
}
