/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2023-2025 ByteDance and/or its affiliates.
 */

use std::str::FromStr;

use anyhow::Context;
use clap::{Arg, ArgMatches, Command};
use slog::Logger;

use crate::{LogFormat, LogLevel, LoggerBuilder};

const ARGS_LOG_LEVEL: &str = "log-level";
const ARGS_LOG_FORMAT: &str = "log-format";
const ARGS_DEBUG_NAME: &str = "debug-name";

pub trait LogArgsExt {
    fn append_log_args(self) -> Self;
}

#[derive(Debug)]
pub struct LogArgs {
    pub level: LogLevel,
    pub format: LogFormat,
    pub debug_name: String,
}

impl Default for LogArgs {
    fn default() -> Self {
        LogArgs {
            level: LogLevel::Info,
            format: LogFormat::Logfmt,
            debug_name: String::new(),
        }
    }
}

impl LogArgs {
    pub fn parse_clap(&mut self, args: &ArgMatches) -> anyhow::Result<()> {
        if let Some(level) = args.get_one::<String>(ARGS_LOG_LEVEL) {
            self.level = LogLevel::from_str(level)
                .context(format!("invalid value for {ARGS_LOG_LEVEL}"))?;
        }
        if let Some(format) = args.get_one::<String>(ARGS_LOG_FORMAT) {
            self.format = LogFormat::from_flag(format);
        }
        if let Some(name) = args.get_one::<String>(ARGS_DEBUG_NAME) {
            self.debug_name.clone_from(name);
        }
        Ok(())
    }

    pub fn new_logger(&self) -> Logger {
        LoggerBuilder::new(self.level)
            .format(self.format)
            .debug_name(&self.debug_name)
            .build()
    }
}

impl LogArgsExt for Command {
    fn append_log_args(self) -> Self {
        self.arg(
            Arg::new(ARGS_LOG_LEVEL)
                .help("Log level")
                .num_args(1)
                .value_name("LEVEL")
                .value_parser(["error", "warn", "info", "debug"])
                .default_value("info")
                .long(ARGS_LOG_LEVEL),
        )
        .arg(
            Arg::new(ARGS_LOG_FORMAT)
                .help("Log format")
                .num_args(1)
                .value_name("FORMAT")
                .value_parser([LogFormat::LOGFMT, LogFormat::JSON])
                .default_value(LogFormat::LOGFMT)
                .long(ARGS_LOG_FORMAT),
        )
        .arg(
            Arg::new(ARGS_DEBUG_NAME)
                .help("Name attached to every log entry")
                .num_args(1)
                .value_name("NAME")
                .long(ARGS_DEBUG_NAME),
        )
    }
}
