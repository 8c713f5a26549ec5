/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2023-2025 ByteDance and/or its affiliates.
 */

use chrono::format::Numeric::*;
use chrono::format::{Fixed, Item, Pad};
use chrono::{DateTime, Utc};
use slog::Record;

/// RFC 3339 in UTC. The fraction is left out for whole seconds and
/// otherwise takes 3, 6 or 9 digits, so `.1s` is written as `.100`.
const RFC3339_NANO_UTC: &[Item<'static>] = &[
    Item::Numeric(Year, Pad::Zero),
    Item::Literal("-"),
    Item::Numeric(Month, Pad::Zero),
    Item::Literal("-"),
    Item::Numeric(Day, Pad::Zero),
    Item::Literal("T"),
    Item::Numeric(Hour, Pad::Zero),
    Item::Literal(":"),
    Item::Numeric(Minute, Pad::Zero),
    Item::Literal(":"),
    Item::Numeric(Second, Pad::Zero),
    Item::Fixed(Fixed::Nanosecond),
    Item::Fixed(Fixed::TimezoneOffsetColonZ),
];

fn format_timestamp(datetime: &DateTime<Utc>) -> String {
    datetime
        .format_with_items(RFC3339_NANO_UTC.iter())
        .to_string()
}

/// Value of the `ts` field, taken when the entry is written.
pub fn timestamp_utc(_record: &Record) -> String {
    format_timestamp(&Utc::now())
}

/// Value of the `caller` field: base name of the source file and the line of
/// the logging macro.
pub fn caller(record: &Record) -> String {
    let file = record.file();
    let file = file.rsplit(['/', '\\']).next().unwrap_or(file);
    format!("{file}:{}", record.line())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_utc() {
        let datetime = DateTime::parse_from_rfc3339("2021-12-01T10:20:30.123456789Z").unwrap();
        let dt = datetime.with_timezone(&Utc);
        assert_eq!(format_timestamp(&dt), "2021-12-01T10:20:30.123456789Z");

        let datetime = DateTime::parse_from_rfc3339("2021-12-01T10:20:30.123Z").unwrap();
        let dt = datetime.with_timezone(&Utc);
        assert_eq!(format_timestamp(&dt), "2021-12-01T10:20:30.123Z");

        let datetime = DateTime::parse_from_rfc3339("2021-12-01T10:20:30.1Z").unwrap();
        let dt = datetime.with_timezone(&Utc);
        assert_eq!(format_timestamp(&dt), "2021-12-01T10:20:30.100Z");

        let datetime = DateTime::parse_from_rfc3339("2021-12-01T10:20:30.1234Z").unwrap();
        let dt = datetime.with_timezone(&Utc);
        assert_eq!(format_timestamp(&dt), "2021-12-01T10:20:30.123400Z");

        let datetime = DateTime::parse_from_rfc3339("2021-12-01T10:20:30+08:00").unwrap();
        let dt = datetime.with_timezone(&Utc);
        assert_eq!(format_timestamp(&dt), "2021-12-01T02:20:30Z");
    }
}
