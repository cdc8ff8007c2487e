//! Horizontal placement of dropdown and submenu panels.
//!
//! All values are CSS pixels in viewport coordinates, as returned by
//! `getBoundingClientRect`.

/// Bounding box of an element
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }
}

/// `left` offset of a dropdown panel relative to its item.
///
/// The panel is centered under the link. When its right edge passes the
/// viewport it moves left by half the overflow, and it never starts left
/// of the viewport: the result is clamped to one pixel inside it.
pub fn center_offset(link: Rect, panel: Rect, viewport_width: f64) -> f64 {
    let mut left = link.width / 2.0 - panel.width / 2.0;

    if viewport_width < panel.right() {
        left -= (panel.right() - viewport_width) / 2.0;
    }

    if link.left + left < 0.0 {
        left = -link.left + 1.0;
    }

    left
}

/// Side a nested submenu opens on
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SubmenuSide {
    /// Flush against the right edge of the parent item
    Right,
    /// Flush against the left, shifted by the trigger link width
    Left { link_width: f64 },
}

impl SubmenuSide {
    pub fn is_reversed(&self) -> bool {
        matches!(self, SubmenuSide::Left { .. })
    }

    /// Value for the panel's inline `left` style
    pub fn css_left(&self) -> String {
        match self {
            SubmenuSide::Right => "100%".to_string(),
            SubmenuSide::Left { link_width } => format!("-{}px", link_width),
        }
    }
}

/// Decide where a submenu opens. `panel` is measured while the panel sits
/// on the right; a panel already marked reversed stays on the left.
pub fn submenu_side(link: Rect, panel: Rect, viewport_width: f64, reversed: bool) -> SubmenuSide {
    if viewport_width < panel.right() || reversed {
        SubmenuSide::Left {
            link_width: link.width,
        }
    } else {
        SubmenuSide::Right
    }
}

/// `left` style value for a pixel offset
pub fn px(value: f64) -> String {
    format!("{}px", value)
}
