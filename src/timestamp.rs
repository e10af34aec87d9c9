//! Timestamp Conversion
//!
//! Turns the `datetime-local` input value into the `YYYY-MM-DD HH:MM:SS`
//! UTC string the backend stores.

use chrono::{FixedOffset, NaiveDateTime, TimeZone};

use crate::error::{ApiError, ApiResult};

const INPUT_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"];
const BACKEND_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

fn parse_local(input: &str) -> ApiResult<NaiveDateTime> {
    INPUT_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(input, fmt).ok())
        .ok_or_else(|| ApiError::InvalidTimestamp(input.to_string()))
}

/// Interpret `input` as wall-clock time at `offset` and format its UTC instant.
///
/// An empty input stays empty; the backend fills in the current date-time.
pub fn to_backend_timestamp(input: &str, offset: FixedOffset) -> ApiResult<String> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(String::new());
    }
    let local = parse_local(input)?;
    let instant = offset
        .from_local_datetime(&local)
        .single()
        .ok_or_else(|| ApiError::InvalidTimestamp(input.to_string()))?;
    Ok(instant.naive_utc().format(BACKEND_FORMAT).to_string())
}

/// Offset of the browser's timezone in effect at the given local date-time
///
/// A wall time inside a spring-forward gap does not exist locally. The
/// browser moves it forward past the gap and reports the post-transition
/// offset; `to_backend_timestamp` applies that offset to the wall time as
/// typed, which lands one DST delta earlier than the browser's own reading.
pub fn browser_offset(input: &str) -> ApiResult<FixedOffset> {
    if input.trim().is_empty() {
        return FixedOffset::east_opt(0).ok_or_else(|| ApiError::InvalidTimestamp(input.to_string()));
    }
    let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_str(input));
    // minutes to add to local time to reach UTC
    let minutes = date.get_timezone_offset();
    if minutes.is_nan() {
        return Err(ApiError::InvalidTimestamp(input.to_string()));
    }
    FixedOffset::west_opt((minutes * 60.0) as i32)
        .ok_or_else(|| ApiError::InvalidTimestamp(input.to_string()))
}
