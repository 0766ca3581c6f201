use neo4j_query_types::{DecodedPoint, Error, PointValue, Result};

fn bad(text: &str) -> Error {
    Error::protocol(format!("invalid Point payload {text:?}"))
}

fn try_parse(text: &str) -> Result<PointValue> {
    let parts: Vec<&str> = text.split(';').collect();
    if parts.len() != 2 {
        return Err(bad(text));
    }
    let srid: i64 = parts[0].strip_prefix("SRID=").ok_or_else(|| bad(text))?.parse().map_err(|_| bad(text))?;

    let (is_3d, coords_str) = if let Some(rest) = parts[1].strip_prefix("POINT Z (") {
        (true, rest)
    } else if let Some(rest) = parts[1].strip_prefix("POINT (") {
        (false, rest)
    } else {
        return Err(bad(text));
    };
    let coords_str = coords_str.strip_suffix(')').ok_or_else(|| bad(text))?;
    let coords: Vec<&str> = coords_str.split_whitespace().collect();

    if is_3d {
        if coords.len() != 3 {
            return Err(bad(text));
        }
        Ok(PointValue {
            srid,
            x: coords[0].parse().map_err(|_| bad(text))?,
            y: coords[1].parse().map_err(|_| bad(text))?,
            z: Some(coords[2].parse().map_err(|_| bad(text))?),
        })
    } else {
        if coords.len() != 2 {
            return Err(bad(text));
        }
        Ok(PointValue {
            srid,
            x: coords[0].parse().map_err(|_| bad(text))?,
            y: coords[1].parse().map_err(|_| bad(text))?,
            z: None,
        })
    }
}

/// `SRID=<n>;POINT (<x> <y>)` or `SRID=<n>;POINT Z (<x> <y> <z>)`.
///
/// Never fails outright: a malformed payload becomes
/// [`DecodedPoint::Broken`], so one bad point does not poison the rest of
/// an otherwise valid row or map.
pub fn parse_point(text: &str) -> DecodedPoint {
    match try_parse(text) {
        Ok(p) => DecodedPoint::Ok(p),
        Err(e) => DecodedPoint::Broken(e),
    }
}

/// Inverse of [`parse_point`], emitting the 3-D variant iff `z` is set.
pub fn format_point(p: &PointValue) -> String {
    match p.z {
        Some(z) => format!("SRID={};POINT Z ({} {} {})", p.srid, p.x, p.y, z),
        None => format!("SRID={};POINT ({} {})", p.srid, p.x, p.y),
    }
}
