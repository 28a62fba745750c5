use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::model::error::GeneratorError;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub const MESSAGES: [&str; 10] = [
    "User logged in successfully",
    "Database connection established",
    "Failed to process request",
    "Cache cleared",
    "Memory usage high",
    "Network timeout occurred",
    "File processing completed",
    "Invalid input received",
    "System update initiated",
    "Configuration loaded",
];

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum Level {
    Info,
    Warning,
    Error,
    Debug,
}

impl Level {
    pub const ALL: [Level; 4] = [Level::Info, Level::Warning, Level::Error, Level::Debug];

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Info => "INFO",
            Level::Warning => "WARNING",
            Level::Error => "ERROR",
            Level::Debug => "DEBUG",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = GeneratorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Level::ALL
            .into_iter()
            .find(|level| level.as_str() == s)
            .ok_or_else(|| GeneratorError::InvalidLine(format!("unknown level '{}'", s)))
    }
}

/// A single line as written to the log file: `[timestamp] LEVEL: message`.
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub timestamp: NaiveDateTime,
    pub level: Level,
    pub message: String,
}

impl LogEntry {
    pub fn new(timestamp: NaiveDateTime, level: Level, message: impl Into<String>) -> Self {
        LogEntry {
            timestamp,
            level,
            message: message.into(),
        }
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "[{}] {}: {}",
            self.timestamp.format(TIMESTAMP_FORMAT),
            self.level,
            self.message
        )
    }
}

/// Reads a line back from a file this tool wrote, for consumers that tail it.
impl FromStr for LogEntry {
    type Err = GeneratorError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let invalid = || GeneratorError::InvalidLine(line.to_string());

        let rest = line.strip_prefix('[').ok_or_else(invalid)?;
        let (timestamp, rest) = rest.split_once(']').ok_or_else(invalid)?;
        let (level, message) = rest.split_once(':').ok_or_else(invalid)?;

        let timestamp =
            NaiveDateTime::parse_from_str(timestamp, TIMESTAMP_FORMAT).map_err(|_| invalid())?;
        let level = level.trim().parse::<Level>()?;

        // Message may contain further colons, only the first one separates the level
        let message = message.trim();
        if message.is_empty() {
            return Err(invalid());
        }

        Ok(LogEntry::new(timestamp, level, message))
    }
}
