use std::cell::{Cell, RefCell};

use chrono::{DateTime, Utc};

use super::codec::parse_expires;
use super::store::CookieStore;

struct StoredCookie {
    name: String,
    value: String,
    /// `None` for session cookies
    expires: Option<DateTime<Utc>>,
}

/// Cookie jar kept in memory, with a settable clock.
///
/// Follows browser semantics for the parts the widgets use: cookies keep
/// creation order, rewriting a name replaces it in place and an `expires`
/// in the past removes it.
pub struct MemoryCookieJar {
    cookies: RefCell<Vec<StoredCookie>>,
    now_ms: Cell<f64>,
}

impl MemoryCookieJar {
    pub fn new(now_ms: f64) -> Self {
        Self {
            cookies: RefCell::new(Vec::new()),
            now_ms: Cell::new(now_ms),
        }
    }

    pub fn set_now_ms(&self, now_ms: f64) {
        self.now_ms.set(now_ms);
    }

    fn now(&self) -> DateTime<Utc> {
        DateTime::<Utc>::from_timestamp_millis(self.now_ms.get() as i64).unwrap_or_default()
    }
}

fn is_live(cookie: &StoredCookie, now: DateTime<Utc>) -> bool {
    cookie.expires.map_or(true, |expires| expires > now)
}

impl CookieStore for MemoryCookieJar {
    fn raw(&self) -> String {
        let now = self.now();
        self.cookies
            .borrow()
            .iter()
            .filter(|cookie| is_live(cookie, now))
            .map(|cookie| format!("{}={}", cookie.name, cookie.value))
            .collect::<Vec<_>>()
            .join("; ")
    }

    fn write_raw(&self, cookie: &str) {
        let mut parts = cookie.split(';');
        let Some((name, value)) = parts.next().and_then(|pair| pair.split_once('=')) else {
            log::warn!("ignoring cookie without name: {}", cookie);
            return;
        };
        let name = name.trim().to_string();

        let expires = parts
            .map(str::trim)
            .filter_map(|attr| attr.split_once('='))
            .find(|(key, _)| key.trim().eq_ignore_ascii_case("expires"))
            .and_then(|(_, date)| parse_expires(date));

        let mut cookies = self.cookies.borrow_mut();
        if expires.is_some_and(|expires| expires <= self.now()) {
            cookies.retain(|stored| stored.name != name);
            return;
        }

        let stored = StoredCookie {
            name,
            value: value.trim().to_string(),
            expires,
        };
        match cookies.iter_mut().find(|existing| existing.name == stored.name) {
            Some(existing) => *existing = stored,
            None => cookies.push(stored),
        }
    }

    fn now_ms(&self) -> f64 {
        self.now_ms.get()
    }
}
