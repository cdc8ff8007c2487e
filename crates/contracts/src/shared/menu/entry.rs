use serde::{Deserialize, Serialize};

use super::config::ConfigError;

/// One link of a header menu, with its nested entries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuEntry {
    pub title: String,
    #[serde(default = "default_url")]
    pub url: String,
    #[serde(default)]
    pub children: Vec<MenuEntry>,
}

fn default_url() -> String {
    "#".to_string()
}

impl MenuEntry {
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Deepest nesting below this entry, 0 for a leaf
    pub fn depth(&self) -> usize {
        self.children
            .iter()
            .map(|child| child.depth() + 1)
            .max()
            .unwrap_or(0)
    }

    /// Parse a top-level entry list
    pub fn list_from_json(json: &str) -> Result<Vec<MenuEntry>, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}
