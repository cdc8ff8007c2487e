use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Tag name the widget is registered under
pub const DEFAULT_TAG: &str = "custom-header-menu";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid menu configuration: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unknown log level `{0}`")]
    LogLevel(String),
}

/// Marker classes the widget looks for and toggles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuClasses {
    /// Top-level entry of the header bar
    pub list_item: String,
    /// Link of a top-level entry, the dropdown is centered under it
    pub link: String,
    /// Panel owned by a top-level entry
    pub dropdown: String,
    /// Entry inside a dropdown panel
    pub submenu_item: String,
    /// Link of a submenu entry
    pub submenu_link: String,
    /// Panel owned by a submenu entry
    pub submenu: String,
    /// Set on an item while it is open
    pub open: String,
    /// Set on a panel while it is shown
    pub visible: String,
    /// Set on submenu panels that open leftward
    pub reverse: String,
}

impl Default for MenuClasses {
    fn default() -> Self {
        Self {
            list_item: "custom-header-menu__list-item".to_string(),
            link: "custom-header-menu__link".to_string(),
            dropdown: "custom-header__dropdown-menu".to_string(),
            submenu_item: "custom-header-dropdown-menu__item".to_string(),
            submenu_link: "custom-header-dropdown-menu__link".to_string(),
            submenu: "custom-header-dropdown-menu__submenu".to_string(),
            open: "dropdown-open".to_string(),
            visible: "dropdown-visible".to_string(),
            reverse: "dropdown-reverse".to_string(),
        }
    }
}

impl MenuClasses {
    /// `.class` selector for a single marker class
    pub fn selector(class: &str) -> String {
        format!(".{}", class)
    }

    /// Selector matching either panel kind, first match in document order wins
    pub fn any_panel_selector(&self) -> String {
        format!(".{}, .{}", self.dropdown, self.submenu)
    }
}

/// Widget configuration, every field optional in JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    pub tag: String,
    pub classes: MenuClasses,
    pub log_level: String,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            tag: DEFAULT_TAG.to_string(),
            classes: MenuClasses::default(),
            log_level: "debug".to_string(),
        }
    }
}

impl MenuConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn log_level(&self) -> Result<log::Level, ConfigError> {
        self.log_level
            .parse::<log::Level>()
            .map_err(|_| ConfigError::LogLevel(self.log_level.clone()))
    }
}
