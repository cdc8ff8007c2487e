//! web-sys bindings for the menu controller.

use contracts::shared::menu::{MenuElement, Rect, Viewport};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, Node};

/// A DOM element as seen by [`contracts::shared::menu::MenuController`]
#[derive(Debug, Clone, PartialEq)]
pub struct DomElement(pub Element);

impl MenuElement for DomElement {
    fn query(&self, selector: &str) -> Option<Self> {
        self.0.query_selector(selector).ok().flatten().map(DomElement)
    }

    fn query_all(&self, selector: &str) -> Vec<Self> {
        let Ok(list) = self.0.query_selector_all(selector) else {
            return Vec::new();
        };
        (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .map(DomElement)
            .collect()
    }

    fn has_class(&self, class: &str) -> bool {
        self.0.class_list().contains(class)
    }

    fn add_class(&self, class: &str) {
        let _ = self.0.class_list().add_1(class);
    }

    fn remove_class(&self, class: &str) {
        let _ = self.0.class_list().remove_1(class);
    }

    fn contains(&self, other: &Self) -> bool {
        let node: &Node = &other.0;
        self.0.contains(Some(node))
    }

    fn set_left(&self, value: &str) {
        // SVG and MathML elements have no inline style to position
        if let Some(html) = self.0.dyn_ref::<HtmlElement>() {
            let _ = html.style().set_property("left", value);
        }
    }

    fn bounding_rect(&self) -> Rect {
        let bounds = self.0.get_bounding_client_rect();
        Rect::new(bounds.left(), bounds.top(), bounds.width(), bounds.height())
    }
}

/// `window.innerWidth`, unbounded when there is no window
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowViewport;

impl Viewport for WindowViewport {
    fn width(&self) -> f64 {
        web_sys::window()
            .and_then(|w| w.inner_width().ok())
            .and_then(|width| width.as_f64())
            .unwrap_or(f64::INFINITY)
    }
}
