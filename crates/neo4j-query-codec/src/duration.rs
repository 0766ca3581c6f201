use neo4j_query_types::{DurationValue, Error, Result};

fn bad(text: &str) -> Error {
    Error::protocol(format!("invalid Duration payload {text:?}"))
}

fn take_int(acc: &mut String, original: &str) -> Result<i64> {
    if acc.is_empty() {
        return Err(bad(original));
    }
    let value: i64 = acc.parse().map_err(|_| bad(original))?;
    acc.clear();
    Ok(value)
}

fn pad_nanos(fraction: &str) -> i64 {
    let mut digits = fraction.to_string();
    digits.truncate(9);
    while digits.len() < 9 {
        digits.push('0');
    }
    digits.parse().unwrap_or(0)
}

fn take_seconds(acc: &mut String, original: &str) -> Result<(i64, i64)> {
    if acc.is_empty() {
        return Err(bad(original));
    }
    let normalized = acc.replace(',', ".");
    let (seconds, nanos) = match normalized.split_once('.') {
        Some((s, frac)) => (s, pad_nanos(frac)),
        None => (normalized.as_str(), 0),
    };
    let seconds: i64 = seconds.parse().map_err(|_| bad(original))?;
    acc.clear();
    Ok((seconds, nanos))
}

/// `P[<n>Y]<n>M<n>W<n>DT<n>H<n>M<n>.<n>S`, minus year support. Walks the
/// tail after `P` one character at a time, accumulating a run of digits
/// (plus `.`, `,`, and a leading `-`) and consuming it whenever a
/// designator character is hit. `M` means minutes after `T`, months
/// before it; `H`/`S` are only valid after `T`; `W`/`D` only before it.
pub fn parse_duration(text: &str) -> Result<DurationValue> {
    let tail = text.strip_prefix('P').ok_or_else(|| bad(text))?;

    let mut months = 0i64;
    let mut days = 0i64;
    let mut seconds = 0i64;
    let mut nanoseconds = 0i64;
    let mut in_time = false;
    let mut acc = String::new();

    for ch in tail.chars() {
        match ch {
            '0'..='9' | '.' | ',' => acc.push(ch),
            '-' if acc.is_empty() => acc.push(ch),
            'T' => in_time = true,
            'W' if !in_time => days += take_int(&mut acc, text)? * 7,
            'D' if !in_time => days += take_int(&mut acc, text)?,
            'M' if in_time => seconds += take_int(&mut acc, text)? * 60,
            'M' if !in_time => months += take_int(&mut acc, text)?,
            'H' if in_time => seconds += take_int(&mut acc, text)? * 3600,
            'S' if in_time => {
                let (secs, nanos) = take_seconds(&mut acc, text)?;
                seconds += secs;
                nanoseconds += nanos;
            }
            _ => return Err(bad(text)),
        }
    }

    if !acc.is_empty() {
        return Err(bad(text));
    }

    Ok(DurationValue::new(months, days, seconds, nanoseconds))
}

/// Inverse of [`parse_duration`]. Handles the common positive-duration
/// case cleanly; negative components are emitted per-designator rather
/// than normalized into a single leading sign.
pub fn format_duration(d: &DurationValue) -> String {
    let mut out = String::from("P");
    if d.months != 0 {
        out.push_str(&format!("{}M", d.months));
    }
    if d.days != 0 {
        out.push_str(&format!("{}D", d.days));
    }

    let has_time_component = d.seconds != 0 || d.nanoseconds != 0;
    if has_time_component {
        out.push('T');
        let hours = d.seconds / 3600;
        let minutes = (d.seconds % 3600) / 60;
        let seconds = d.seconds % 60;
        if hours != 0 {
            out.push_str(&format!("{hours}H"));
        }
        if minutes != 0 {
            out.push_str(&format!("{minutes}M"));
        }
        if seconds != 0 || d.nanoseconds != 0 {
            if d.nanoseconds != 0 {
                out.push_str(&format!("{seconds}.{:09}S", d.nanoseconds.abs()));
            } else {
                out.push_str(&format!("{seconds}S"));
            }
        }
    }

    if out == "P" {
        out.push_str("T0S");
    }
    out
}
