//! Header menu behaviour, independent of the browser
//!
//! The frontend crate implements [`MenuElement`] and [`Viewport`] over web-sys
//! and feeds DOM events into a [`MenuController`].

pub mod config;
pub mod controller;
pub mod element;
pub mod entry;
pub mod geometry;

#[cfg(test)]
pub(crate) mod test_dom;

pub use config::{ConfigError, MenuClasses, MenuConfig};
pub use controller::{MenuBinding, MenuController, MenuEvent};
pub use element::{MenuElement, Viewport};
pub use entry::MenuEntry;
pub use geometry::{center_offset, submenu_side, Rect, SubmenuSide};
