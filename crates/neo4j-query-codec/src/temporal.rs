use neo4j_query_types::{
    DateTimeValue, Error, IntegerPolicy, IntegerValue, LocalDateTimeValue, LocalDateValue,
    LocalTimeValue, Result, TimeValue,
};

fn bad(kind: &str, text: &str) -> Error {
    Error::protocol(format!("invalid {kind} payload {text:?}"))
}

fn iv(value: i64, policy: IntegerPolicy) -> IntegerValue {
    IntegerValue::from_i64(value, policy)
}

/// `[±]YYYY-MM-DD`. The sign, if present, is concatenated with the year
/// digits before integer parsing, so `-0044-03-15` parses to year `-44`.
pub fn parse_date(text: &str, policy: IntegerPolicy) -> Result<LocalDateValue> {
    let (sign, rest) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.strip_prefix('+').unwrap_or(text)),
    };
    let parts: Vec<&str> = rest.splitn(3, '-').collect();
    if parts.len() != 3 {
        return Err(bad("Date", text));
    }
    let year: i64 = format!("{sign}{}", parts[0])
        .parse()
        .map_err(|_| bad("Date", text))?;
    let month: i64 = parts[1].parse().map_err(|_| bad("Date", text))?;
    let day: i64 = parts[2].parse().map_err(|_| bad("Date", text))?;
    Ok(LocalDateValue {
        year: iv(year, policy),
        month: iv(month, policy),
        day: iv(day, policy),
    })
}

/// Right-pads a nanosecond fraction to exactly 9 digits before parsing.
/// Empty input yields 0.
fn parse_nanos(fraction: &str) -> i64 {
    if fraction.is_empty() {
        return 0;
    }
    let mut digits = fraction.to_string();
    digits.truncate(9);
    while digits.len() < 9 {
        digits.push('0');
    }
    digits.parse().unwrap_or(0)
}

/// `HH:MM:SS[.fffffffff]`.
pub fn parse_local_time(text: &str, policy: IntegerPolicy) -> Result<LocalTimeValue> {
    let parts: Vec<&str> = text.splitn(3, ':').collect();
    if parts.len() != 3 {
        return Err(bad("LocalTime", text));
    }
    let hour: i64 = parts[0].parse().map_err(|_| bad("LocalTime", text))?;
    let minute: i64 = parts[1].parse().map_err(|_| bad("LocalTime", text))?;
    let (seconds_str, nanos_str) = match parts[2].split_once('.') {
        Some((s, frac)) => (s, frac),
        None => (parts[2], ""),
    };
    let second: i64 = seconds_str.parse().map_err(|_| bad("LocalTime", text))?;
    Ok(LocalTimeValue {
        hour: iv(hour, policy),
        minute: iv(minute, policy),
        second: iv(second, policy),
        nanosecond: iv(parse_nanos(nanos_str), policy),
    })
}

/// A `Time` payload decodes to either a `Time` (offset present) or a bare
/// `LocalTime` (offset absent); see [`parse_time`].
pub enum ParsedTime {
    WithOffset(TimeValue),
    Local(LocalTimeValue),
}

/// Splits `s` at its first `+`, `-`, or `Z`, if any.
fn split_offset_marker(s: &str) -> (&str, Option<&str>) {
    match s.find(['+', '-', 'Z']) {
        Some(idx) => (&s[..idx], Some(&s[idx..])),
        None => (s, None),
    }
}

fn parse_signed_offset(text: &str, original: &str) -> Result<i64> {
    let mut chars = text.chars();
    let sign = match chars.next() {
        Some('+') => 1,
        Some('-') => -1,
        _ => return Err(bad("Time", original)),
    };
    let rest = &text[1..];
    let (hh, mm) = match rest.split_once(':') {
        Some((h, m)) => (h, m),
        None if rest.len() >= 4 => (&rest[..2], &rest[2..4]),
        None => (rest, ""),
    };
    let hours: i64 = hh.parse().map_err(|_| bad("Time", original))?;
    let minutes: i64 = if mm.is_empty() { 0 } else { mm.parse().map_err(|_| bad("Time", original))? };
    Ok(sign * (hours * 3600 + minutes * 60))
}

/// `HH:MM:SS[.fffffffff](Z | ±HH[:MM] | nothing)`.
///
/// The seconds fragment is split on `:` into its own piece; an offset
/// marker is searched for in the nanosecond fraction if one is present,
/// otherwise in the seconds fragment itself (defending against the offset
/// digits running straight into the seconds text). The seconds fragment
/// itself is truncated to its first 2 characters before parsing.
pub fn parse_time(text: &str, policy: IntegerPolicy) -> Result<ParsedTime> {
    let parts: Vec<&str> = text.splitn(3, ':').collect();
    if parts.len() != 3 {
        return Err(bad("Time", text));
    }
    let hour: i64 = parts[0].parse().map_err(|_| bad("Time", text))?;
    let minute: i64 = parts[1].parse().map_err(|_| bad("Time", text))?;
    let third = parts[2];

    let (seconds_raw, nanos_raw) = match third.find('.') {
        Some(dot) => (&third[..dot], Some(&third[dot + 1..])),
        None => (third, None),
    };

    let (seconds_digits, nanos_digits, offset_marker) = match nanos_raw {
        Some(nanos_part) => {
            let (digits, marker) = split_offset_marker(nanos_part);
            (seconds_raw, digits, marker)
        }
        None => {
            let (digits, marker) = split_offset_marker(seconds_raw);
            (digits, "", marker)
        }
    };

    let seconds_truncated = &seconds_digits[..seconds_digits.len().min(2)];
    let second: i64 = seconds_truncated.parse().map_err(|_| bad("Time", text))?;
    let local = LocalTimeValue {
        hour: iv(hour, policy),
        minute: iv(minute, policy),
        second: iv(second, policy),
        nanosecond: iv(parse_nanos(nanos_digits), policy),
    };

    match offset_marker {
        None => Ok(ParsedTime::Local(local)),
        Some("Z") => Ok(ParsedTime::WithOffset(TimeValue { time: local, offset_seconds: iv(0, policy) })),
        Some(rest) => {
            let offset_seconds = parse_signed_offset(rest, text)?;
            Ok(ParsedTime::WithOffset(TimeValue { time: local, offset_seconds: iv(offset_seconds, policy) }))
        }
    }
}

/// `date 'T' localTime`, recombined.
pub fn parse_local_date_time(text: &str, policy: IntegerPolicy) -> Result<LocalDateTimeValue> {
    let (date_part, time_part) = text.split_once('T').ok_or_else(|| bad("LocalDateTime", text))?;
    Ok(LocalDateTimeValue {
        date: parse_date(date_part, policy)?,
        time: parse_local_time(time_part, policy)?,
    })
}

/// A `OffsetDateTime` payload decodes to either a `DateTime` with offset
/// (time portion had one) or a bare `LocalDateTime` (tolerant fallback).
pub enum ParsedOffsetDateTime {
    WithOffset(DateTimeValue),
    Local(LocalDateTimeValue),
}

/// `date 'T' time`.
pub fn parse_offset_date_time(text: &str, policy: IntegerPolicy) -> Result<ParsedOffsetDateTime> {
    let (date_part, time_part) = text.split_once('T').ok_or_else(|| bad("OffsetDateTime", text))?;
    let date = parse_date(date_part, policy)?;
    match parse_time(time_part, policy)? {
        ParsedTime::WithOffset(t) => Ok(ParsedOffsetDateTime::WithOffset(DateTimeValue {
            date,
            time: t.time,
            offset_seconds: Some(t.offset_seconds),
            zone_id: None,
        })),
        ParsedTime::Local(t) => Ok(ParsedOffsetDateTime::Local(LocalDateTimeValue { date, time: t })),
    }
}

/// `offsetDateTime '[' zoneId ']'`. Always produces a `DateTime`: the zone
/// bracket is itself the signal that this is zoned, independent of
/// whether the inner payload carried an offset.
pub fn parse_zoned_date_time(text: &str, policy: IntegerPolicy) -> Result<DateTimeValue> {
    let (offset_part, bracketed) = text.split_once('[').ok_or_else(|| bad("ZonedDateTime", text))?;
    let zone_id = bracketed
        .strip_suffix(']')
        .ok_or_else(|| bad("ZonedDateTime", text))?
        .to_string();
    match parse_offset_date_time(offset_part, policy)? {
        ParsedOffsetDateTime::WithOffset(mut dt) => {
            dt.zone_id = Some(zone_id);
            Ok(dt)
        }
        ParsedOffsetDateTime::Local(local) => Ok(DateTimeValue {
            date: local.date,
            time: local.time,
            offset_seconds: None,
            zone_id: Some(zone_id),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_with_negative_year() {
        let d = parse_date("-0044-03-15", IntegerPolicy::LosslessInteger).unwrap();
        assert_eq!(d.year, IntegerValue::Lossless(-44));
        assert_eq!(d.month, IntegerValue::Lossless(3));
        assert_eq!(d.day, IntegerValue::Lossless(15));
    }

    #[test]
    fn local_time_pads_nanoseconds() {
        let t = parse_local_time("12:50:35.5", IntegerPolicy::LosslessInteger).unwrap();
        assert_eq!(t.nanosecond, IntegerValue::Lossless(500_000_000));
    }

    #[test]
    fn time_with_offset_matches_scenario() {
        // "12:50:35.556+01:00" -> Time(12, 50, 35, 556000000, +3600)
        match parse_time("12:50:35.556+01:00", IntegerPolicy::LosslessInteger).unwrap() {
            ParsedTime::WithOffset(t) => {
                assert_eq!(t.time.hour, IntegerValue::Lossless(12));
                assert_eq!(t.time.minute, IntegerValue::Lossless(50));
                assert_eq!(t.time.second, IntegerValue::Lossless(35));
                assert_eq!(t.time.nanosecond, IntegerValue::Lossless(556_000_000));
                assert_eq!(t.offset_seconds, IntegerValue::Lossless(3600));
            }
            ParsedTime::Local(_) => panic!("expected offset"),
        }
    }

    #[test]
    fn time_without_offset_decodes_local() {
        match parse_time("12:50:35", IntegerPolicy::LosslessInteger).unwrap() {
            ParsedTime::Local(t) => assert_eq!(t.second, IntegerValue::Lossless(35)),
            ParsedTime::WithOffset(_) => panic!("expected local"),
        }
    }

    #[test]
    fn time_with_z_is_zero_offset() {
        match parse_time("00:00:00Z", IntegerPolicy::LosslessInteger).unwrap() {
            ParsedTime::WithOffset(t) => assert_eq!(t.offset_seconds, IntegerValue::Lossless(0)),
            ParsedTime::Local(_) => panic!("expected offset"),
        }
    }

    #[test]
    fn offset_date_time_without_offset_falls_back_to_local() {
        match parse_offset_date_time("2015-06-24T12:50:35", IntegerPolicy::LosslessInteger).unwrap() {
            ParsedOffsetDateTime::Local(_) => {}
            ParsedOffsetDateTime::WithOffset(_) => panic!("expected local fallback"),
        }
    }

    #[test]
    fn zoned_date_time_carries_zone_and_offset() {
        let dt = parse_zoned_date_time(
            "2015-06-24T12:50:35.556+02:00[Europe/Berlin]",
            IntegerPolicy::LosslessInteger,
        )
        .unwrap();
        assert_eq!(dt.zone_id.as_deref(), Some("Europe/Berlin"));
        assert_eq!(dt.offset_seconds, Some(IntegerValue::Lossless(7200)));
    }

    #[test]
    fn zoned_date_time_without_inner_offset_still_produces_datetime() {
        let dt = parse_zoned_date_time("2015-06-24T12:50:35[Europe/Berlin]", IntegerPolicy::LosslessInteger).unwrap();
        assert_eq!(dt.zone_id.as_deref(), Some("Europe/Berlin"));
        assert_eq!(dt.offset_seconds, None);
    }
}
