//! Point geometry text codec.
//!
//! The geospatial store reads and writes single points as
//! `POINT(<lon> <lat>)`: longitude first, one ASCII space, numbers in
//! their default textual form. Rust's `Display` for `f64` prints the
//! shortest text that parses back to the same value, so encoding and
//! decoding round-trip exactly.

use crate::types::location::Coordinate;

const POINT_KEYWORD: &str = "POINT";

/// Renders `coordinate` as `POINT(<lon> <lat>)`.
pub fn encode(coordinate: &Coordinate) -> String {
    format!(
        "{}({} {})",
        POINT_KEYWORD, coordinate.longitude, coordinate.latitude
    )
}

/// Parses `POINT(<lon> <lat>)` into a [`Coordinate`].
///
/// Returns [`None`] for missing or empty input and for anything that is
/// not a point with exactly two finite numbers. The keyword is matched
/// case-insensitively and an EWKT `SRID=<n>;` prefix is accepted, as
/// stores commonly emit `SRID=4326;POINT(..)`.
pub fn decode(text: Option<&str>) -> Option<Coordinate> {
    let text = text?.trim();
    if text.is_empty() {
        return None;
    }

    let text = match text.split_once(';') {
        Some((srid, rest)) if is_srid_prefix(srid) => rest.trim_start(),
        Some(_) => return None,
        None => text,
    };

    let keyword = text.get(..POINT_KEYWORD.len())?;
    if !keyword.eq_ignore_ascii_case(POINT_KEYWORD) {
        return None;
    }

    let body = text[POINT_KEYWORD.len()..]
        .trim_start()
        .strip_prefix('(')?
        .strip_suffix(')')?;

    let mut parts = body.split_whitespace();
    let longitude = parse_finite(parts.next()?)?;
    let latitude = parse_finite(parts.next()?)?;
    if parts.next().is_some() {
        return None;
    }

    Some(Coordinate::new(latitude, longitude))
}

fn is_srid_prefix(prefix: &str) -> bool {
    let Some((key, value)) = prefix.trim().split_once('=') else {
        return false;
    };
    key.trim().eq_ignore_ascii_case("SRID")
        && !value.trim().is_empty()
        && value.trim().chars().all(|c| c.is_ascii_digit())
}

fn parse_finite(number: &str) -> Option<f64> {
    number.parse::<f64>().ok().filter(|value| value.is_finite())
}
