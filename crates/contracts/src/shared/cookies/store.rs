use super::codec::{delete_cookie_string, find_cookie, set_cookie_string, DEFAULT_COOKIE_DAYS};

/// Read/write access to a cookie jar through the `document.cookie` protocol.
///
/// Implementors provide the three raw operations; the named helpers are
/// shared by every backend.
pub trait CookieStore {
    /// All visible cookies as `a=1; b=2`
    fn raw(&self) -> String;

    /// Store one `name=value; attr=...` string
    fn write_raw(&self, cookie: &str);

    /// Current time in milliseconds since the epoch
    fn now_ms(&self) -> f64;

    /// Store `value` for [`DEFAULT_COOKIE_DAYS`]
    fn set(&self, name: &str, value: &str) {
        self.set_for_days(name, value, DEFAULT_COOKIE_DAYS);
    }

    fn set_for_days(&self, name: &str, value: &str, days: i64) {
        self.write_raw(&set_cookie_string(name, value, days, self.now_ms()));
    }

    /// Decoded value of `name`, or an empty string
    fn get(&self, name: &str) -> String {
        self.get_or(name, "")
    }

    fn get_or(&self, name: &str, default: &str) -> String {
        find_cookie(&self.raw(), name).unwrap_or_else(|| default.to_string())
    }

    fn delete(&self, name: &str) {
        self.write_raw(&delete_cookie_string(name));
    }
}
