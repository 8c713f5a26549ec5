/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2023-2025 ByteDance and/or its affiliates.
 */

use std::io::Write;

use crate::entry::{FieldValue, LogEntry};

pub(super) fn format_entry(w: &mut Vec<u8>, entry: &LogEntry) {
    let mut f = FormatterLogfmt::new(w);
    if let Some(level) = entry.level {
        f.push_str_field("level", level);
    }
    for (key, value) in &entry.fields {
        match value {
            FieldValue::Str(s) => f.push_str_field(key, s),
            FieldValue::Number(n) => f.push_raw_field(key, n),
            FieldValue::Bool(true) => f.push_raw_field(key, "true"),
            FieldValue::Bool(false) => f.push_raw_field(key, "false"),
            FieldValue::Null => f.push_raw_field(key, "null"),
        }
    }
}

struct FormatterLogfmt<'a> {
    w: &'a mut Vec<u8>,
    has_field: bool,
}

impl<'a> FormatterLogfmt<'a> {
    fn new(w: &'a mut Vec<u8>) -> Self {
        FormatterLogfmt { w, has_field: false }
    }

    /// Returns false if the key has nothing printable in it.
    fn push_key(&mut self, key: &str) -> bool {
        if key.is_empty() {
            return false;
        }

        self.w.reserve(key.len() + 2);
        if self.has_field {
            self.w.push(b' ');
        }
        self.has_field = true;
        for c in key.chars() {
            if c <= ' ' || c == '=' || c == '"' {
                self.w.push(b'_');
            } else {
                self.w
                    .extend_from_slice(c.encode_utf8(&mut [0u8; 4]).as_bytes());
            }
        }
        self.w.push(b'=');
        true
    }

    fn push_raw_field(&mut self, key: &str, value: &str) {
        if self.push_key(key) {
            self.w.extend_from_slice(value.as_bytes());
        }
    }

    fn push_str_field(&mut self, key: &str, value: &str) {
        if self.push_key(key) {
            self.push_str_value(value);
        }
    }

    fn push_str_value(&mut self, v: &str) {
        if v == "null" || v.chars().any(need_quote) {
            self.push_quoted_value(v);
        } else {
            self.w.extend_from_slice(v.as_bytes());
        }
    }

    fn push_quoted_value(&mut self, v: &str) {
        self.w.reserve(v.len() + 2);
        self.w.push(b'"');
        for c in v.chars() {
            match c {
                '"' => self.w.extend_from_slice(b"\\\""),
                '\\' => self.w.extend_from_slice(b"\\\\"),
                '\n' => self.w.extend_from_slice(b"\\n"),
                '\r' => self.w.extend_from_slice(b"\\r"),
                '\t' => self.w.extend_from_slice(b"\\t"),
                c if c < ' ' => {
                    let _ = write!(self.w, "\\u{:04x}", c as u32);
                }
                c => self
                    .w
                    .extend_from_slice(c.encode_utf8(&mut [0u8; 4]).as_bytes()),
            }
        }
        self.w.push(b'"');
    }
}

fn need_quote(c: char) -> bool {
    c <= ' ' || c == '=' || c == '"' || c == char::REPLACEMENT_CHARACTER
}
