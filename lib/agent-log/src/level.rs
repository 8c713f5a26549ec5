/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2023-2025 ByteDance and/or its affiliates.
 */

use std::fmt;
use std::str::FromStr;

use slog::Level;
use thiserror::Error;

/// Level for entries that carry no severity tag.
///
/// Critical is never used as a threshold, so these entries pass every filter,
/// and they are written without a `level` field. This covers entries logged
/// with `crit!` as well: they show up with no `level` and can't be told apart
/// from untagged ones.
pub const UNTAGGED_LEVEL: Level = Level::Critical;

#[derive(Debug, Error)]
#[error("unsupported log level {0}, should be one of error, warn, info or debug")]
pub struct InvalidLogLevel(String);

/// Filter threshold of a logger, ordered from the most restrictive to the
/// least restrictive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
}

impl LogLevel {
    pub const fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        }
    }

    pub(crate) fn tag_name(level: Level) -> Option<&'static str> {
        match level {
            Level::Critical => None,
            Level::Error => Some("error"),
            Level::Warning => Some("warn"),
            Level::Info => Some("info"),
            Level::Debug => Some("debug"),
            Level::Trace => Some("trace"),
        }
    }
}

impl From<LogLevel> for Level {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Error => Level::Error,
            LogLevel::Warn => Level::Warning,
            LogLevel::Info => Level::Info,
            LogLevel::Debug => Level::Debug,
        }
    }
}

impl FromStr for LogLevel {
    type Err = InvalidLogLevel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "error" => Ok(LogLevel::Error),
            "warn" => Ok(LogLevel::Warn),
            "info" => Ok(LogLevel::Info),
            "debug" => Ok(LogLevel::Debug),
            _ => Err(InvalidLogLevel(s.to_string())),
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
