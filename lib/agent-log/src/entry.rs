/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2023-2025 ByteDance and/or its affiliates.
 */

use std::fmt::Arguments;

use itoa::Integer;
use ryu::Float;
use slog::{KV, Key, OwnedKVList, Record, Serializer};

use crate::level::LogLevel;

#[derive(Debug, PartialEq)]
pub(crate) enum FieldValue {
    Str(String),
    /// Already rendered by itoa or ryu
    Number(String),
    Bool(bool),
    Null,
}

/// A record flattened into the order it is written out.
#[derive(Debug)]
pub(crate) struct LogEntry {
    pub(crate) level: Option<&'static str>,
    pub(crate) fields: Vec<(Key, FieldValue)>,
}

impl LogEntry {
    /// slog hands out key-value pairs newest first, so both the bound values
    /// and the per-call values are reversed back into declaration order.
    pub(crate) fn collect(
        record: &Record,
        logger_values: &OwnedKVList,
    ) -> Result<LogEntry, slog::Error> {
        let mut fields = Vec::with_capacity(8);

        logger_values.serialize(record, &mut FieldCollector(&mut fields))?;
        fields.reverse();

        // rendering may run Display impls that log again on this thread
        fields.push(("msg", FieldValue::Str(record.msg().to_string())));

        let offset = fields.len();
        record.kv().serialize(record, &mut FieldCollector(&mut fields))?;
        fields[offset..].reverse();

        Ok(LogEntry {
            level: LogLevel::tag_name(record.level()),
            fields,
        })
    }
}

struct FieldCollector<'a>(&'a mut Vec<(Key, FieldValue)>);

impl FieldCollector<'_> {
    fn emit_integer<T: Integer>(&mut self, key: Key, value: T) -> slog::Result {
        let mut buffer = itoa::Buffer::new();
        let value_s = buffer.format(value);
        self.0.push((key, FieldValue::Number(value_s.to_string())));
        Ok(())
    }

    fn emit_float<T: Float>(&mut self, key: Key, value: T) -> slog::Result {
        let mut buffer = ryu::Buffer::new();
        let value_s = buffer.format_finite(value);
        self.0.push((key, FieldValue::Number(value_s.to_string())));
        Ok(())
    }
}

impl Serializer for FieldCollector<'_> {
    impl_integer_by_itoa! {
        /// Emit `usize`
        usize => emit_usize
    }
    impl_integer_by_itoa! {
        /// Emit `isize`
        isize => emit_isize
    }
    impl_integer_by_itoa! {
        /// Emit `u8`
        u8 => emit_u8
    }
    impl_integer_by_itoa! {
        /// Emit `i8`
        i8 => emit_i8
    }
    impl_integer_by_itoa! {
        /// Emit `u16`
        u16 => emit_u16
    }
    impl_integer_by_itoa! {
        /// Emit `i16`
        i16 => emit_i16
    }
    impl_integer_by_itoa! {
        /// Emit `u32`
        u32 => emit_u32
    }
    impl_integer_by_itoa! {
        /// Emit `i32`
        i32 => emit_i32
    }
    impl_float_by_ryu! {
        /// Emit `f32`
        f32 => emit_f32
    }
    impl_integer_by_itoa! {
        /// Emit `u64`
        u64 => emit_u64
    }
    impl_integer_by_itoa! {
        /// Emit `i64`
        i64 => emit_i64
    }
    impl_float_by_ryu! {
        /// Emit `f64`
        f64 => emit_f64
    }

    fn emit_bool(&mut self, key: Key, value: bool) -> slog::Result {
        self.0.push((key, FieldValue::Bool(value)));
        Ok(())
    }

    fn emit_char(&mut self, key: Key, value: char) -> slog::Result {
        self.emit_str(key, value.encode_utf8(&mut [0u8; 4]))
    }

    fn emit_none(&mut self, key: Key) -> slog::Result {
        self.0.push((key, FieldValue::Null));
        Ok(())
    }

    fn emit_str(&mut self, key: Key, value: &str) -> slog::Result {
        self.0.push((key, FieldValue::Str(value.to_string())));
        Ok(())
    }

    fn emit_arguments(&mut self, key: Key, value: &Arguments) -> slog::Result {
        if let Some(s) = value.as_str() {
            self.emit_str(key, s)
        } else {
            self.0.push((key, FieldValue::Str(value.to_string())));
            Ok(())
        }
    }
}
