/// A decoded ISO-8601-style duration: months, days, seconds, nanoseconds.
///
/// Unlike the other temporal types, duration components are not routed
/// through the integer policy, since the wire form has no 64-bit range
/// concern here: each component is bounded by the grammar itself (the
/// nanosecond fraction is always exactly 9 digits, for instance).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DurationValue {
    pub months: i64,
    pub days: i64,
    pub seconds: i64,
    pub nanoseconds: i64,
}

impl DurationValue {
    pub fn new(months: i64, days: i64, seconds: i64, nanoseconds: i64) -> Self {
        Self {
            months,
            days,
            seconds,
            nanoseconds,
        }
    }
}
