use num_bigint::BigInt;
use serde::{Deserialize, Serialize};

/// Caller-selectable representation for 64-bit wire integers.
///
/// Resolved once at codec construction and applied uniformly by every
/// integer-bearing field: record values, counters, and temporal sub-fields
/// (hour, minute, offset, …) all go through the same policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum IntegerPolicy {
    /// Keep a 64-bit integer abstraction. Default.
    #[default]
    LosslessInteger,
    /// Arbitrary-precision integer.
    BigInt,
    /// JS-style double; callers accept precision loss beyond 2^53.
    Number,
}

/// A decoded integer value, shaped by the [`IntegerPolicy`] in force when it
/// was produced.
#[derive(Debug, Clone, PartialEq)]
pub enum IntegerValue {
    Lossless(i64),
    Big(BigInt),
    Number(f64),
}

impl IntegerValue {
    pub fn from_decimal(text: &str, policy: IntegerPolicy) -> Result<Self, String> {
        match policy {
            IntegerPolicy::LosslessInteger => text
                .parse::<i64>()
                .map(IntegerValue::Lossless)
                .map_err(|e| e.to_string()),
            IntegerPolicy::BigInt => text
                .parse::<BigInt>()
                .map(IntegerValue::Big)
                .map_err(|e| e.to_string()),
            IntegerPolicy::Number => text
                .parse::<f64>()
                .map(IntegerValue::Number)
                .map_err(|e| e.to_string()),
        }
    }

    pub fn from_i64(value: i64, policy: IntegerPolicy) -> Self {
        match policy {
            IntegerPolicy::LosslessInteger => IntegerValue::Lossless(value),
            IntegerPolicy::BigInt => IntegerValue::Big(BigInt::from(value)),
            IntegerPolicy::Number => IntegerValue::Number(value as f64),
        }
    }

    /// Best-effort conversion back to `i64`, for internal bookkeeping (e.g.
    /// computing a time offset in seconds) regardless of the active policy.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            IntegerValue::Lossless(v) => Some(*v),
            IntegerValue::Big(v) => {
                use num_bigint::ToBigInt;
                let max = i64::MAX.to_bigint().unwrap();
                let min = i64::MIN.to_bigint().unwrap();
                if *v >= min && *v <= max {
                    let digits = v.to_string();
                    digits.parse::<i64>().ok()
                } else {
                    None
                }
            }
            IntegerValue::Number(v) => {
                if v.fract() == 0.0 && *v >= i64::MIN as f64 && *v <= i64::MAX as f64 {
                    Some(*v as i64)
                } else {
                    None
                }
            }
        }
    }
}
