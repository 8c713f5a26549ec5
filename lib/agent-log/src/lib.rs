/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2023-2025 ByteDance and/or its affiliates.
 */

#[macro_use]
mod macros;

mod entry;

mod level;
pub use level::{InvalidLogLevel, LogLevel, UNTAGGED_LEVEL};

mod format;
pub use format::LogFormat;

mod drain;
pub use drain::SyncWriterDrain;

mod values;
pub use values::{caller, timestamp_utc};

mod builder;
pub use builder::{LoggerBuilder, new_logger};

pub mod opts;
