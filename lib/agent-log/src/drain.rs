/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2023-2025 ByteDance and/or its affiliates.
 */

use std::cell::RefCell;
use std::io::Write;
use std::sync::{Mutex, PoisonError};

use slog::{Drain, OwnedKVList, Record};

use crate::entry::LogEntry;
use crate::format::LogFormat;

thread_local! {
    static TL_LINE: RefCell<Vec<u8>> = RefCell::new(Vec::with_capacity(1024));
}

/// Drain that serializes each record to one line and writes it with a single
/// `write_all` under a mutex, so lines from concurrent callers never mix.
pub struct SyncWriterDrain<W> {
    io: Mutex<W>,
    format: LogFormat,
}

impl<W: Write> SyncWriterDrain<W> {
    pub fn new(io: W, format: LogFormat) -> Self {
        SyncWriterDrain {
            io: Mutex::new(io),
            format,
        }
    }

    fn write_line(&self, line: &[u8]) -> std::io::Result<()> {
        let mut io = self.io.lock().unwrap_or_else(PoisonError::into_inner);
        io.write_all(line)?;
        io.flush()
    }
}

impl<W: Write> Drain for SyncWriterDrain<W> {
    type Ok = ();
    type Err = slog::Error;

    fn log(&self, record: &Record, logger_values: &OwnedKVList) -> Result<(), slog::Error> {
        let entry = LogEntry::collect(record, logger_values)?;

        TL_LINE.with_borrow_mut(|buf| {
            buf.clear();
            self.format.format_entry(buf, &entry)?;
            buf.push(b'\n');
            self.write_line(buf)?;
            Ok(())
        })
    }
}
