pub mod config;
pub mod cookies;
pub mod dom;
