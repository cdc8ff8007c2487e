pub mod header_menu;
pub mod menu_view;
pub mod registry;

pub use header_menu::{attach, MenuListeners};
pub use menu_view::HeaderMenu;
pub use registry::define_header_menu;
