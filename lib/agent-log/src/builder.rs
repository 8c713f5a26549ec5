/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2023-2025 ByteDance and/or its affiliates.
 */

use std::io::{self, Write};
use std::str::FromStr;

use slog::{Drain, FnValue, Logger, o};

use crate::{LogFormat, LogLevel, SyncWriterDrain};

#[derive(Clone, Debug)]
pub struct LoggerBuilder {
    level: LogLevel,
    format: LogFormat,
    debug_name: Option<String>,
}

impl LoggerBuilder {
    pub fn new(level: LogLevel) -> Self {
        LoggerBuilder {
            level,
            format: LogFormat::default(),
            debug_name: None,
        }
    }

    pub fn format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    /// An empty name leaves the `name` field out.
    pub fn debug_name(mut self, name: &str) -> Self {
        if name.is_empty() {
            self.debug_name = None;
        } else {
            self.debug_name = Some(name.to_string());
        }
        self
    }

    pub fn build(self) -> Logger {
        self.build_with_writer(io::stderr())
    }

    pub fn build_with_writer<W>(self, io: W) -> Logger
    where
        W: Write + Send + 'static,
    {
        let drain = SyncWriterDrain::new(io, self.format)
            .filter_level(self.level.into())
            .ignore_res();

        let mut logger = Logger::root(drain, o!());
        if let Some(name) = self.debug_name {
            logger = logger.new(o!("name" => name));
        }
        logger.new(o!(
            "ts" => FnValue(crate::timestamp_utc),
            "caller" => FnValue(crate::caller),
        ))
    }
}

/// Create a logger writing to stderr in the given format, keeping entries at
/// `log_level` or more severe, with a UTC timestamp and the caller attached to
/// every entry. A non-empty `debug_name` is attached as `name`.
///
/// An empty or unknown `log_format` means logfmt.
///
/// # Panics
///
/// If `log_level` is not one of error, warn, info or debug. Callers are
/// expected to validate it first, see [`crate::opts`].
pub fn new_logger(log_level: &str, log_format: &str, debug_name: &str) -> Logger {
    let Ok(level) = LogLevel::from_str(log_level) else {
        // already restricted by the command line parser
        panic!("unexpected log level");
    };

    LoggerBuilder::new(level)
        .format(LogFormat::from_flag(log_format))
        .debug_name(debug_name)
        .build()
}
