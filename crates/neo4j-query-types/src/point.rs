use crate::error::Error;

/// A decoded spatial point: SRID plus 2-D or 3-D coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct PointValue {
    pub srid: i64,
    pub x: f64,
    pub y: f64,
    pub z: Option<f64>,
}

/// The result of parsing a `Point` payload.
///
/// A malformed point does not fail the decode of its surrounding row or
/// map. The parse error is captured here and only raised when the caller
/// actually reads the point, so one bad value does not poison the rest of
/// an otherwise valid record.
#[derive(Debug, Clone, PartialEq)]
pub enum DecodedPoint {
    Ok(PointValue),
    Broken(Error),
}

impl DecodedPoint {
    pub fn get(&self) -> Result<&PointValue, Error> {
        match self {
            DecodedPoint::Ok(p) => Ok(p),
            DecodedPoint::Broken(err) => Err(err.clone()),
        }
    }

    pub fn into_result(self) -> Result<PointValue, Error> {
        match self {
            DecodedPoint::Ok(p) => Ok(p),
            DecodedPoint::Broken(err) => Err(err),
        }
    }
}
