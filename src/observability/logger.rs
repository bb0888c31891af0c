//! Structured JSON query-event logger.
//!
//! One log line = one event. The event key comes first, then severity,
//! then the caller's fields in alphabetical order, so identical events
//! always serialize identically. Writes are synchronous and unbuffered;
//! a failed write is silently dropped, since logging must never affect
//! query execution.

use std::fmt;
use std::io::{self, Write};

/// Log severity levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Normal operation
    Info = 0,
    /// Recoverable issue
    Warn = 1,
    /// Operation failure
    Error = 2,
    /// Unrecoverable upstream failure
    Fatal = 3,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
            Severity::Fatal => "FATAL",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Synchronous structured logger.
pub struct Logger;

impl Logger {
    /// Logs one event. `Error` and above go to stderr, the rest to stdout.
    pub fn log(severity: Severity, event: &str, fields: &[(&str, &str)]) {
        let line = Self::render(severity, event, fields);
        if severity >= Severity::Error {
            let _ = io::stderr().write_all(line.as_bytes());
        } else {
            let _ = io::stdout().write_all(line.as_bytes());
        }
    }

    /// Renders one event as a JSON line with deterministic key order.
    fn render(severity: Severity, event: &str, fields: &[(&str, &str)]) -> String {
        let mut line = String::with_capacity(128);

        line.push_str("{\"event\":\"");
        Self::escape_into(&mut line, event);
        line.push_str("\",\"severity\":\"");
        line.push_str(severity.as_str());
        line.push('"');

        let mut sorted: Vec<_> = fields.iter().collect();
        sorted.sort_by_key(|(key, _)| *key);
        for (key, value) in sorted {
            line.push_str(",\"");
            Self::escape_into(&mut line, key);
            line.push_str("\":\"");
            Self::escape_into(&mut line, value);
            line.push('"');
        }

        line.push_str("}\n");
        line
    }

    fn escape_into(line: &mut String, s: &str) {
        for c in s.chars() {
            match c {
                '"' => line.push_str("\\\""),
                '\\' => line.push_str("\\\\"),
                '\n' => line.push_str("\\n"),
                '\r' => line.push_str("\\r"),
                '\t' => line.push_str("\\t"),
                c if c.is_control() => {
                    line.push_str(&format!("\\u{:04x}", c as u32));
                }
                c => line.push(c),
            }
        }
    }
}
