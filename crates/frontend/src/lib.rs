pub mod layout;
pub mod shared;

use contracts::shared::menu::MenuConfig;
use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen(start)]
pub fn start() {
    let config = shared::config::read_config();
    let level = config
        .as_ref()
        .ok()
        .and_then(|config| config.log_level().ok())
        .unwrap_or(log::Level::Debug);

    // initializes logging using the `log` crate
    _ = console_log::init_with_level(level);
    console_error_panic_hook::set_once();

    let config = config.unwrap_or_else(|err| {
        log::warn!("{}, using defaults", err);
        MenuConfig::default()
    });
    if let Err(err) = config.log_level() {
        log::warn!("{}, logging at debug", err);
    }

    layout::header::define_header_menu(config);
}
