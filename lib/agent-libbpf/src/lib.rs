/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2023-2025 ByteDance and/or its affiliates.
 */

use slog::{Logger, debug, info, o, warn};

use agent_log::UNTAGGED_LEVEL;

#[cfg(feature = "libbpf-rs")]
mod print;
#[cfg(feature = "libbpf-rs")]
pub use print::{install, uninstall};

/// Values of `enum libbpf_print_level`
pub const LIBBPF_WARN_LEVEL: i32 = 0;
pub const LIBBPF_INFO_LEVEL: i32 = 1;
pub const LIBBPF_DEBUG_LEVEL: i32 = 2;

pub type LogCallback = Box<dyn Fn(i32, &str) + Send + Sync>;

/// Callbacks handed to libbpf so its diagnostics go through our logger.
pub struct LibbpfCallbacks {
    log: LogCallback,
}

impl LibbpfCallbacks {
    /// May be called from any thread, including ones created by libbpf.
    pub fn log(&self, level: i32, msg: &str) {
        (self.log)(level, msg)
    }
}

pub fn new_libbpf_log_callbacks(logger: &Logger) -> LibbpfCallbacks {
    let logger = logger.clone();
    LibbpfCallbacks {
        log: Box::new(move |level: i32, msg: &str| {
            let logger = logger.new(o!("component" => "libbpf"));
            match level {
                LIBBPF_DEBUG_LEVEL => debug!(logger, "{}", msg),
                LIBBPF_INFO_LEVEL => info!(logger, "{}", msg),
                LIBBPF_WARN_LEVEL => warn!(logger, "{}", msg),
                // written without a level, so it bypasses the threshold too
                _ => slog::log!(logger, UNTAGGED_LEVEL, "", "{}", msg),
            }
        }),
    }
}
