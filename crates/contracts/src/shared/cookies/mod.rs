//! Cookie access shared by widgets.
//!
//! [`CookieStore`] works on the raw `document.cookie` protocol: reading
//! returns every visible `name=value` pair joined by `; `, writing takes a
//! single `Set-Cookie`-style string.

pub mod codec;
pub mod memory;
pub mod store;

pub use codec::{delete_cookie_string, find_cookie, set_cookie_string, DEFAULT_COOKIE_DAYS};
pub use memory::MemoryCookieJar;
pub use store::CookieStore;
