//! `document.cookie` access and its JavaScript exports.

use contracts::shared::cookies::{CookieStore, DEFAULT_COOKIE_DAYS};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;

/// The page's cookie jar
pub struct DocumentCookies {
    document: HtmlDocument,
}

impl DocumentCookies {
    /// `None` outside an HTML document (workers, XML documents)
    pub fn current() -> Option<Self> {
        let document = web_sys::window()?.document()?;
        let document = document.dyn_into::<HtmlDocument>().ok()?;
        Some(Self { document })
    }
}

impl CookieStore for DocumentCookies {
    fn raw(&self) -> String {
        self.document.cookie().unwrap_or_default()
    }

    fn write_raw(&self, cookie: &str) {
        if let Err(err) = self.document.set_cookie(cookie) {
            log::warn!("cookie write rejected: {:?}", err);
        }
    }

    fn now_ms(&self) -> f64 {
        js_sys::Date::now()
    }
}

/// Store `value` under `name`, for `days` days (365 when omitted)
#[wasm_bindgen(js_name = setCookie)]
pub fn set_cookie(name: &str, value: &str, days: Option<i32>) {
    if let Some(cookies) = DocumentCookies::current() {
        let days = days.map(i64::from).unwrap_or(DEFAULT_COOKIE_DAYS);
        cookies.set_for_days(name, value, days);
    }
}

/// Decoded value of `name`, or `default_value` (empty string when omitted)
#[wasm_bindgen(js_name = getCookie)]
pub fn get_cookie(name: &str, default_value: Option<String>) -> String {
    let default_value = default_value.unwrap_or_default();
    match DocumentCookies::current() {
        Some(cookies) => cookies.get_or(name, &default_value),
        None => default_value,
    }
}

#[wasm_bindgen(js_name = deleteCookie)]
pub fn delete_cookie(name: &str) {
    if let Some(cookies) = DocumentCookies::current() {
        cookies.delete(name);
    }
}
