use chrono::{DateTime, NaiveDateTime, TimeDelta, Utc};

/// Lifetime of a cookie written without an explicit duration
pub const DEFAULT_COOKIE_DAYS: i64 = 365;

/// Expiry date that removes a cookie immediately
pub const EXPIRED_DATE: &str = "Thu, 01 Jan 1970 00:00:00 UTC";

/// `Date.prototype.toUTCString` layout
const UTC_STRING_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";

/// Expiry `days` after `now_ms` (milliseconds since the epoch), as an HTTP date.
///
/// `None` when the date is out of range; the cookie then lives for the session.
pub fn expires_at(now_ms: f64, days: i64) -> Option<String> {
    let now = DateTime::<Utc>::from_timestamp_millis(now_ms as i64).unwrap_or_default();
    let expires = now.checked_add_signed(TimeDelta::try_days(days)?)?;
    Some(expires.format(UTC_STRING_FORMAT).to_string())
}

/// Parse an `expires` attribute value written by [`expires_at`] or [`EXPIRED_DATE`]
pub fn parse_expires(value: &str) -> Option<DateTime<Utc>> {
    let trimmed = value.trim();
    let without_zone = trimmed
        .strip_suffix(" GMT")
        .or_else(|| trimmed.strip_suffix(" UTC"))
        .unwrap_or(trimmed);
    NaiveDateTime::parse_from_str(without_zone, "%a, %d %b %Y %H:%M:%S")
        .ok()
        .map(|naive| naive.and_utc())
}

/// `name=value;expires=...;path=/` with the value percent-encoded.
/// The `expires` attribute is left out when `days` overflows the calendar.
pub fn set_cookie_string(name: &str, value: &str, days: i64, now_ms: f64) -> String {
    let value = urlencoding::encode(value);
    match expires_at(now_ms, days) {
        Some(expires) => format!("{}={};expires={};path=/", name, value, expires),
        None => format!("{}={};path=/", name, value),
    }
}

/// Overwrite `name` with an empty value that has already expired
pub fn delete_cookie_string(name: &str) -> String {
    format!("{}=; expires={}; path=/;", name, EXPIRED_DATE)
}

/// Value of `name` in a `document.cookie` string.
///
/// The whole string is percent-decoded first. Stray `%` signs are kept as
/// they are, and if decoding yields invalid UTF-8 the raw text is searched.
pub fn find_cookie(cookie_header: &str, name: &str) -> Option<String> {
    let decoded = urlencoding::decode(cookie_header)
        .map(|value| value.into_owned())
        .unwrap_or_else(|_| cookie_header.to_string());
    let prefix = format!("{}=", name);

    decoded
        .split(';')
        .map(|pair| pair.trim_start_matches(' '))
        .find_map(|pair| pair.strip_prefix(prefix.as_str()).map(str::to_string))
}
