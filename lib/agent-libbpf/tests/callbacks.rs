/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2023-2025 ByteDance and/or its affiliates.
 */

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use slog::Logger;

use agent_libbpf::{
    LIBBPF_DEBUG_LEVEL, LIBBPF_INFO_LEVEL, LIBBPF_WARN_LEVEL, new_libbpf_log_callbacks,
};
use agent_log::{LogFormat, LogLevel, LoggerBuilder};

#[derive(Clone, Default)]
struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    fn lines(&self) -> Vec<String> {
        let buf = self.0.lock().unwrap();
        String::from_utf8(buf.clone())
            .unwrap()
            .lines()
            .map(|s| s.to_string())
            .collect()
    }

    fn json_lines(&self) -> Vec<serde_json::Value> {
        self.lines()
            .iter()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn build(level: LogLevel, format: LogFormat) -> (Logger, SharedBuffer) {
    let buf = SharedBuffer::default();
    let logger = LoggerBuilder::new(level)
        .format(format)
        .build_with_writer(buf.clone());
    (logger, buf)
}

#[test]
fn debug_code() {
    let (logger, buf) = build(LogLevel::Debug, LogFormat::Logfmt);
    let callbacks = new_libbpf_log_callbacks(&logger);
    callbacks.log(LIBBPF_DEBUG_LEVEL, "hello");

    let lines = buf.lines();
    assert_eq!(lines.len(), 1);
    let line = &lines[0];
    assert!(line.starts_with("level=debug "), "{line}");
    assert!(line.contains(" component=libbpf "), "{line}");
    assert!(line.ends_with(" msg=hello"), "{line}");
}

#[test]
fn level_mapping() {
    let (logger, buf) = build(LogLevel::Debug, LogFormat::Json);
    let callbacks = new_libbpf_log_callbacks(&logger);
    callbacks.log(LIBBPF_WARN_LEVEL, "w");
    callbacks.log(LIBBPF_INFO_LEVEL, "i");
    callbacks.log(LIBBPF_DEBUG_LEVEL, "d");

    let levels: Vec<_> = buf
        .json_lines()
        .into_iter()
        .map(|v| {
            assert_eq!(v["component"], "libbpf");
            v["level"].as_str().unwrap().to_string()
        })
        .collect();
    assert_eq!(levels, ["warn", "info", "debug"]);
}

#[test]
fn unknown_code_is_untagged() {
    let (logger, buf) = build(LogLevel::Debug, LogFormat::Json);
    let callbacks = new_libbpf_log_callbacks(&logger);
    callbacks.log(999, "strange");

    let lines = buf.json_lines();
    assert_eq!(lines.len(), 1);
    let v = &lines[0];
    assert!(v.get("level").is_none());
    assert_eq!(v["component"], "libbpf");
    assert_eq!(v["msg"], "strange");
    assert!(v["ts"].is_string());
    assert!(v["caller"].is_string());
}

#[test]
fn threshold_applies() {
    let (logger, buf) = build(LogLevel::Warn, LogFormat::Logfmt);
    let callbacks = new_libbpf_log_callbacks(&logger);
    callbacks.log(LIBBPF_DEBUG_LEVEL, "libbpf: loading object");
    callbacks.log(LIBBPF_INFO_LEVEL, "libbpf: map created");
    assert!(buf.lines().is_empty());

    callbacks.log(LIBBPF_WARN_LEVEL, "libbpf: kernel too old");
    assert_eq!(buf.lines().len(), 1);
}

#[test]
fn untagged_passes_error_threshold() {
    let (logger, buf) = build(LogLevel::Error, LogFormat::Logfmt);
    let callbacks = new_libbpf_log_callbacks(&logger);
    callbacks.log(LIBBPF_WARN_LEVEL, "dropped");
    callbacks.log(-1, "kept");

    let lines = buf.lines();
    assert_eq!(lines.len(), 1);
    assert!(!lines[0].contains("level="));
    assert!(lines[0].ends_with(" msg=kept"));
}

#[test]
fn keeps_bound_fields() {
    let buf = SharedBuffer::default();
    let logger = LoggerBuilder::new(LogLevel::Info)
        .format(LogFormat::Json)
        .debug_name("agent")
        .build_with_writer(buf.clone());
    let callbacks = new_libbpf_log_callbacks(&logger);
    callbacks.log(LIBBPF_INFO_LEVEL, "libbpf: prog 'x': attached");

    let v = &buf.json_lines()[0];
    assert_eq!(v["name"], "agent");
    assert_eq!(v["component"], "libbpf");
    assert_eq!(v["msg"], "libbpf: prog 'x': attached");
}

#[test]
fn called_from_other_threads() {
    let (logger, buf) = build(LogLevel::Info, LogFormat::Json);
    let callbacks = Arc::new(new_libbpf_log_callbacks(&logger));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let callbacks = Arc::clone(&callbacks);
            std::thread::spawn(move || {
                for _ in 0..50 {
                    callbacks.log(LIBBPF_INFO_LEVEL, "libbpf: from a native thread");
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }

    let lines = buf.json_lines();
    assert_eq!(lines.len(), 200);
    assert!(lines.iter().all(|v| v["component"] == "libbpf"));
}
