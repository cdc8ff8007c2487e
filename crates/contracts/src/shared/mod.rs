pub mod cookies;
pub mod menu;
