use super::geometry::Rect;

/// The slice of the DOM element API the menu needs.
///
/// Handles are cheap to clone and compare by identity, like JS references.
pub trait MenuElement: Clone {
    /// First descendant matching `selector` (the element itself excluded)
    fn query(&self, selector: &str) -> Option<Self>;

    /// All descendants matching `selector`, in document order
    fn query_all(&self, selector: &str) -> Vec<Self>;

    fn has_class(&self, class: &str) -> bool;

    fn add_class(&self, class: &str);

    fn remove_class(&self, class: &str);

    /// Inclusive containment: an element contains itself
    fn contains(&self, other: &Self) -> bool;

    /// Set the inline `left` style
    fn set_left(&self, value: &str);

    fn bounding_rect(&self) -> Rect;
}

pub trait Viewport {
    /// Layout viewport width in CSS pixels
    fn width(&self) -> f64;
}

/// Fixed width, for hosts without a window
impl Viewport for f64 {
    fn width(&self) -> f64 {
        *self
    }
}
