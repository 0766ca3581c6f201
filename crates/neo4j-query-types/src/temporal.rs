use crate::integer::IntegerValue;

/// A calendar date with no time-of-day component.
#[derive(Debug, Clone, PartialEq)]
pub struct LocalDateValue {
    pub year: IntegerValue,
    pub month: IntegerValue,
    pub day: IntegerValue,
}

/// A time-of-day with no date or offset.
#[derive(Debug, Clone, PartialEq)]
pub struct LocalTimeValue {
    pub hour: IntegerValue,
    pub minute: IntegerValue,
    pub second: IntegerValue,
    pub nanosecond: IntegerValue,
}

/// A time-of-day carrying a UTC offset, in seconds.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeValue {
    pub time: LocalTimeValue,
    pub offset_seconds: IntegerValue,
}

/// A date and time-of-day with no offset.
#[derive(Debug, Clone, PartialEq)]
pub struct LocalDateTimeValue {
    pub date: LocalDateValue,
    pub time: LocalTimeValue,
}

/// A date and time-of-day carrying an optional UTC offset and, optionally,
/// a named zone id (`Europe/Berlin`-style). Produced by both
/// `OffsetDateTime` (always with an offset; a same-shaped payload lacking
/// one decodes to [`LocalDateTimeValue`] instead) and `ZonedDateTime`
/// (always with a zone id; the offset is carried only if the inner
/// payload had one).
#[derive(Debug, Clone, PartialEq)]
pub struct DateTimeValue {
    pub date: LocalDateValue,
    pub time: LocalTimeValue,
    pub offset_seconds: Option<IntegerValue>,
    pub zone_id: Option<String>,
}
