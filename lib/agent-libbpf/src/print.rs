/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2023-2025 ByteDance and/or its affiliates.
 */

use std::sync::{Arc, Mutex, PoisonError};

use arc_swap::ArcSwapOption;
use libbpf_rs::{PrintCallback, PrintLevel};

use super::{LIBBPF_DEBUG_LEVEL, LIBBPF_INFO_LEVEL, LIBBPF_WARN_LEVEL, LibbpfCallbacks};

// libbpf keeps a single print function for the whole process
static INSTALLED: ArcSwapOption<LibbpfCallbacks> = ArcSwapOption::const_empty();
// print function that was registered before the first install
static REPLACED: Mutex<Option<(PrintLevel, PrintCallback)>> = Mutex::new(None);

/// Route libbpf output at every level to `callbacks`, returning the set that
/// was installed before.
pub fn install(callbacks: LibbpfCallbacks) -> Option<Arc<LibbpfCallbacks>> {
    let mut replaced = REPLACED.lock().unwrap_or_else(PoisonError::into_inner);
    let prev = INSTALLED.swap(Some(Arc::new(callbacks)));
    let old = libbpf_rs::set_print(Some((PrintLevel::Debug, forward)));
    if prev.is_none() {
        *replaced = old;
    }
    prev
}

/// Drop the installed callbacks and give libbpf back the print function that
/// was registered before [`install`].
pub fn uninstall() -> Option<Arc<LibbpfCallbacks>> {
    let mut replaced = REPLACED.lock().unwrap_or_else(PoisonError::into_inner);
    let prev = INSTALLED.swap(None);
    if prev.is_some() {
        let _ = libbpf_rs::set_print(replaced.take());
    }
    prev
}

fn forward(level: PrintLevel, msg: String) {
    if let Some(callbacks) = INSTALLED.load().as_ref() {
        callbacks.log(native_level(level), msg.trim_end_matches('\n'));
    }
}

fn native_level(level: PrintLevel) -> i32 {
    match level {
        PrintLevel::Warn => LIBBPF_WARN_LEVEL,
        PrintLevel::Info => LIBBPF_INFO_LEVEL,
        PrintLevel::Debug => LIBBPF_DEBUG_LEVEL,
    }
}
