/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2023-2025 ByteDance and/or its affiliates.
 */

use std::io;

use crate::entry::{FieldValue, LogEntry};

/// A key that occurs more than once is written only at its last occurrence,
/// so the object keeps the value a JSON reader would see anyway.
pub(super) fn format_entry(w: &mut Vec<u8>, entry: &LogEntry) -> io::Result<()> {
    let mut f = FormatterJson::new(w);
    if let Some(level) = entry.level {
        if !entry.fields.iter().any(|(k, _)| *k == "level") {
            f.push_key("level")?;
            f.push_str_value(level)?;
        }
    }
    for (i, (key, value)) in entry.fields.iter().enumerate() {
        if entry.fields[i + 1..].iter().any(|(k, _)| k == key) {
            continue;
        }
        f.push_key(key)?;
        match value {
            FieldValue::Str(s) => f.push_str_value(s)?,
            FieldValue::Number(n) => f.w.extend_from_slice(n.as_bytes()),
            FieldValue::Bool(true) => f.w.extend_from_slice(b"true"),
            FieldValue::Bool(false) => f.w.extend_from_slice(b"false"),
            FieldValue::Null => f.w.extend_from_slice(b"null"),
        }
    }
    f.finish();
    Ok(())
}

struct FormatterJson<'a> {
    w: &'a mut Vec<u8>,
    has_field: bool,
}

impl<'a> FormatterJson<'a> {
    fn new(w: &'a mut Vec<u8>) -> Self {
        w.push(b'{');
        FormatterJson {
            w,
            has_field: false,
        }
    }

    fn push_key(&mut self, key: &str) -> io::Result<()> {
        if self.has_field {
            self.w.push(b',');
        }
        self.has_field = true;
        self.push_str_value(key)?;
        self.w.push(b':');
        Ok(())
    }

    fn push_str_value(&mut self, v: &str) -> io::Result<()> {
        serde_json::to_writer(&mut *self.w, v)?;
        Ok(())
    }

    fn finish(self) {
        self.w.push(b'}');
    }
}
