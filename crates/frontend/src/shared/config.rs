//! Page-level and per-element configuration.
//!
//! A page may carry `<script type="application/json" id="header-menu-config">`
//! with a [`MenuConfig`]; a single menu may override its classes through a
//! `data-menu-classes` JSON attribute.

use contracts::shared::menu::{ConfigError, MenuClasses, MenuConfig};
use web_sys::Element;

pub const CONFIG_ELEMENT_ID: &str = "header-menu-config";
pub const CLASSES_ATTR: &str = "data-menu-classes";

/// Page configuration, defaults when the page has none
pub fn read_config() -> Result<MenuConfig, ConfigError> {
    let text = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content());

    match text {
        Some(json) if !json.trim().is_empty() => MenuConfig::from_json(&json),
        _ => Ok(MenuConfig::default()),
    }
}

/// Classes for one menu element.
///
/// Without the attribute, or when it does not parse, `fallback` is used.
/// Fields missing from the attribute take their default values.
pub fn classes_for(element: &Element, fallback: &MenuClasses) -> MenuClasses {
    let Some(json) = element.get_attribute(CLASSES_ATTR) else {
        return fallback.clone();
    };
    match serde_json::from_str::<MenuClasses>(&json) {
        Ok(classes) => classes,
        Err(err) => {
            log::warn!("ignoring {} on <{}>: {}", CLASSES_ATTR, element.tag_name().to_lowercase(), err);
            fallback.clone()
        }
    }
}
