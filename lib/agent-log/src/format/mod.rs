/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2023-2025 ByteDance and/or its affiliates.
 */

use std::io;

use crate::entry::LogEntry;

mod json;
mod logfmt;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Logfmt,
    Json,
}

impl LogFormat {
    pub const LOGFMT: &'static str = "logfmt";
    pub const JSON: &'static str = "json";

    /// Anything but "json" selects logfmt, including the empty string.
    pub fn from_flag(s: &str) -> Self {
        match s {
            LogFormat::JSON => LogFormat::Json,
            _ => LogFormat::Logfmt,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            LogFormat::Logfmt => LogFormat::LOGFMT,
            LogFormat::Json => LogFormat::JSON,
        }
    }

    pub(crate) fn format_entry(&self, w: &mut Vec<u8>, entry: &LogEntry) -> io::Result<()> {
        match self {
            LogFormat::Logfmt => {
                logfmt::format_entry(w, entry);
                Ok(())
            }
            LogFormat::Json => json::format_entry(w, entry),
        }
    }
}
