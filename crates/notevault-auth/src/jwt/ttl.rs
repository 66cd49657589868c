//! Parsing of relative token lifetimes such as `"1h"` or `"7d"`.

use chrono::Duration;

use crate::error::AuthError;

const MILLIS_PER_SECOND: i64 = 1_000;
const MILLIS_PER_MINUTE: i64 = 60 * MILLIS_PER_SECOND;
const MILLIS_PER_HOUR: i64 = 60 * MILLIS_PER_MINUTE;
const MILLIS_PER_DAY: i64 = 24 * MILLIS_PER_HOUR;
const MILLIS_PER_WEEK: i64 = 7 * MILLIS_PER_DAY;
// 365.25 days
const MILLIS_PER_YEAR: i64 = 31_557_600 * MILLIS_PER_SECOND;

/// Parses a lifetime of the form `<digits><unit>`.
///
/// Units: `ms`, `s`, `m`, `h`, `d`, `w`, `y` and their long spellings
/// (`"2 days"`, `"30 minutes"`). Bare digits are seconds.
pub fn parse_ttl(input: &str) -> Result<Duration, AuthError> {
    let s = input.trim().to_ascii_lowercase();
    let split = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    let (num_str, unit) = s.split_at(split);

    if num_str.is_empty() {
        return Err(invalid(input));
    }

    let num: i64 = num_str.parse().map_err(|_| invalid(input))?;

    let per_unit = match unit.trim() {
        "ms" | "msec" | "msecs" | "millisecond" | "milliseconds" => 1,
        "" | "s" | "sec" | "secs" | "second" | "seconds" => MILLIS_PER_SECOND,
        "m" | "min" | "mins" | "minute" | "minutes" => MILLIS_PER_MINUTE,
        "h" | "hr" | "hrs" | "hour" | "hours" => MILLIS_PER_HOUR,
        "d" | "day" | "days" => MILLIS_PER_DAY,
        "w" | "week" | "weeks" => MILLIS_PER_WEEK,
        "y" | "yr" | "yrs" | "year" | "years" => MILLIS_PER_YEAR,
        _ => return Err(invalid(input)),
    };

    num.checked_mul(per_unit)
        .and_then(Duration::try_milliseconds)
        .ok_or_else(|| invalid(input))
}

fn invalid(input: &str) -> AuthError {
    AuthError::InvalidTokenRequest(format!("unrecognised token lifetime {input:?}"))
}
