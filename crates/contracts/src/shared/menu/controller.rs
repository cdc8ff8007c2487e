//! Open/close handling and panel placement for a header menu.
//!
//! State lives in the DOM: an item is open while it carries the `open`
//! marker class. The controller reads that class, runs the transition from
//! [`Disclosure::after`] and writes classes and inline `left` back.

use crate::enums::{Disclosure, MenuLevel, MenuTrigger};

use super::config::MenuClasses;
use super::element::{MenuElement, Viewport};
use super::geometry::{center_offset, px, submenu_side};

/// A DOM event delivered to a bound item
#[derive(Debug, Clone)]
pub enum MenuEvent<E> {
    PointerEnter,
    PointerLeave,
    FocusIn,
    /// `related` is the element receiving focus, if any
    FocusOut { related: Option<E> },
}

/// An item that owns a panel and gets listeners
#[derive(Debug, Clone, PartialEq)]
pub struct MenuBinding<E> {
    pub item: E,
    pub level: MenuLevel,
}

pub struct MenuController<V> {
    classes: MenuClasses,
    viewport: V,
}

impl<V: Viewport> MenuController<V> {
    pub fn new(classes: MenuClasses, viewport: V) -> Self {
        Self { classes, viewport }
    }

    /// Collect every item under `root` that owns a panel.
    ///
    /// Top-level items without a dropdown are skipped along with everything
    /// inside them. Submenu items are bound at any depth below a top-level item.
    pub fn scan<E: MenuElement>(&self, root: &E) -> Vec<MenuBinding<E>> {
        let dropdown = MenuClasses::selector(&self.classes.dropdown);
        let submenu = MenuClasses::selector(&self.classes.submenu);
        let mut bindings = Vec::new();

        for item in root.query_all(&MenuClasses::selector(&self.classes.list_item)) {
            if item.query(&dropdown).is_none() {
                continue;
            }

            let nested = item.query_all(&MenuClasses::selector(&self.classes.submenu_item));
            bindings.push(MenuBinding {
                item,
                level: MenuLevel::TopLevel,
            });

            for sub_item in nested {
                if sub_item.query(&submenu).is_some() {
                    bindings.push(MenuBinding {
                        item: sub_item,
                        level: MenuLevel::Submenu,
                    });
                }
            }
        }

        bindings
    }

    pub fn state<E: MenuElement>(&self, item: &E) -> Disclosure {
        if item.has_class(&self.classes.open) {
            Disclosure::Open
        } else {
            Disclosure::Closed
        }
    }

    /// Classify an event for `item`; focus moving to a node inside the item is not a leave
    pub fn trigger<E: MenuElement>(&self, item: &E, event: &MenuEvent<E>) -> MenuTrigger {
        match event {
            MenuEvent::PointerEnter => MenuTrigger::PointerEnter,
            MenuEvent::PointerLeave => MenuTrigger::PointerLeave,
            MenuEvent::FocusIn => MenuTrigger::FocusIn,
            MenuEvent::FocusOut {
                related: Some(target),
            } if item.contains(target) => MenuTrigger::FocusMovedInside,
            MenuEvent::FocusOut { .. } => MenuTrigger::FocusMovedOutside,
        }
    }

    /// Apply `event` to a bound item and return its new state
    pub fn handle<E: MenuElement>(&self, binding: &MenuBinding<E>, event: &MenuEvent<E>) -> Disclosure {
        let trigger = self.trigger(&binding.item, event);
        let current = self.state(&binding.item);
        if trigger == MenuTrigger::FocusMovedInside {
            return current;
        }

        let next = current.after(trigger);
        match (next, binding.level) {
            (Disclosure::Open, MenuLevel::TopLevel) => self.open_dropdown(&binding.item),
            (Disclosure::Open, MenuLevel::Submenu) => self.open_submenu(&binding.item),
            (Disclosure::Closed, _) => self.close(&binding.item),
        }

        if next != current {
            log::debug!("{} item {} on {:?}", binding.level.as_str(), next, trigger);
        }
        next
    }

    /// Open a top-level item and center its dropdown under the link
    pub fn open_dropdown<E: MenuElement>(&self, item: &E) {
        item.add_class(&self.classes.open);

        let Some(panel) = item.query(&MenuClasses::selector(&self.classes.dropdown)) else {
            return;
        };
        panel.add_class(&self.classes.visible);

        let Some(link) = item.query(&MenuClasses::selector(&self.classes.link)) else {
            return;
        };

        // Measure from the natural position, not the previous offset
        panel.set_left("auto");
        let left = center_offset(
            link.bounding_rect(),
            panel.bounding_rect(),
            self.viewport.width(),
        );
        panel.set_left(&px(left));
    }

    /// Open a submenu item, flipping its panel leftward when it would overflow
    pub fn open_submenu<E: MenuElement>(&self, item: &E) {
        item.add_class(&self.classes.open);

        let submenu = MenuClasses::selector(&self.classes.submenu);
        let Some(panel) = item.query(&submenu) else {
            return;
        };
        panel.add_class(&self.classes.visible);

        let Some(link) = item.query(&MenuClasses::selector(&self.classes.submenu_link)) else {
            return;
        };

        panel.set_left("100%");
        let side = submenu_side(
            link.bounding_rect(),
            panel.bounding_rect(),
            self.viewport.width(),
            panel.has_class(&self.classes.reverse),
        );

        if side.is_reversed() {
            panel.set_left(&side.css_left());
            panel.add_class(&self.classes.reverse);
            // Deeper levels keep opening leftward
            for nested in panel.query_all(&submenu) {
                nested.add_class(&self.classes.reverse);
            }
        }
    }

    /// Close an item. Only the first panel inside it is hidden; reversal stays.
    pub fn close<E: MenuElement>(&self, item: &E) {
        item.remove_class(&self.classes.open);
        if let Some(panel) = item.query(&self.classes.any_panel_selector()) {
            panel.remove_class(&self.classes.visible);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::menu::test_dom::TestNode;

    const VIEWPORT: f64 = 1000.0;

    struct Fixture {
        root: TestNode,
        top: TestNode,
        top_panel: TestNode,
        plain: TestNode,
        fits: TestNode,
        fits_panel: TestNode,
        deep: TestNode,
        deep_panel: TestNode,
        overflow: TestNode,
        overflow_panel: TestNode,
        overflow_nested: TestNode,
        overflow_nested_panel: TestNode,
        leaf_link: TestNode,
    }

    fn submenu_item(link_left: f64, panel: TestNode) -> TestNode {
        TestNode::new("custom-header-dropdown-menu__item")
            .child(TestNode::new("custom-header-dropdown-menu__link").with_rect(link_left, 180.0))
            .child(panel)
    }

    fn fixture() -> Fixture {
        let leaf_link = TestNode::new("custom-header-dropdown-menu__link").with_rect(780.0, 180.0);
        let deep_panel = TestNode::new("custom-header-dropdown-menu__submenu")
            .with_rect(760.0, 200.0)
            .child(TestNode::new("custom-header-dropdown-menu__item").child(leaf_link.clone()));
        let deep = submenu_item(580.0, deep_panel.clone());
        let fits_panel = TestNode::new("custom-header-dropdown-menu__submenu")
            .with_rect(580.0, 200.0)
            .child(deep.clone());
        let fits = submenu_item(400.0, fits_panel.clone());

        // Fits on its own: right edge at 900
        let overflow_nested_panel =
            TestNode::new("custom-header-dropdown-menu__submenu").with_rect(700.0, 200.0);
        let overflow_nested = submenu_item(720.0, overflow_nested_panel.clone());
        let overflow_panel = TestNode::new("custom-header-dropdown-menu__submenu")
            .with_rect(900.0, 200.0)
            .child(overflow_nested.clone());
        let overflow = submenu_item(720.0, overflow_panel.clone());

        let top_panel = TestNode::new("custom-header__dropdown-menu")
            .with_rect(400.0, 200.0)
            .child(fits.clone())
            .child(overflow.clone());
        let top = TestNode::new("custom-header-menu__list-item")
            .child(TestNode::new("custom-header-menu__link").with_rect(400.0, 100.0))
            .child(top_panel.clone());

        let plain = TestNode::new("custom-header-menu__list-item")
            .child(TestNode::new("custom-header-menu__link").with_rect(520.0, 80.0))
            .child(
                TestNode::new("custom-header-dropdown-menu__item")
                    .child(TestNode::new("custom-header-dropdown-menu__submenu")),
            );

        let root = TestNode::new("custom-header-menu")
            .child(top.clone())
            .child(plain.clone());

        Fixture {
            root,
            top,
            top_panel,
            plain,
            fits,
            fits_panel,
            deep,
            deep_panel,
            overflow,
            overflow_panel,
            overflow_nested,
            overflow_nested_panel,
            leaf_link,
        }
    }

    fn controller() -> MenuController<f64> {
        MenuController::new(MenuClasses::default(), VIEWPORT)
    }

    fn binding(item: &TestNode, level: MenuLevel) -> MenuBinding<TestNode> {
        MenuBinding {
            item: item.clone(),
            level,
        }
    }

    #[test]
    fn test_scan_binds_items_with_panels() {
        let f = fixture();
        let bindings = controller().scan(&f.root);

        let items: Vec<_> = bindings.iter().map(|b| (b.item.clone(), b.level)).collect();
        assert_eq!(items.len(), 5);
        assert_eq!(items[0], (f.top.clone(), MenuLevel::TopLevel));
        assert_eq!(items[1], (f.fits.clone(), MenuLevel::Submenu));
        assert_eq!(items[2], (f.deep.clone(), MenuLevel::Submenu));
        assert_eq!(items[3], (f.overflow.clone(), MenuLevel::Submenu));
        assert!(items.iter().all(|(item, _)| *item != f.plain));
    }

    #[test]
    fn test_hover_opens_and_leave_closes() {
        let f = fixture();
        let c = controller();
        let top = binding(&f.top, MenuLevel::TopLevel);

        assert_eq!(c.handle(&top, &MenuEvent::PointerEnter), Disclosure::Open);
        assert!(f.top.has_class("dropdown-open"));
        assert!(f.top_panel.has_class("dropdown-visible"));

        assert_eq!(c.handle(&top, &MenuEvent::PointerLeave), Disclosure::Closed);
        assert!(!f.top.has_class("dropdown-open"));
        assert!(!f.top_panel.has_class("dropdown-visible"));
    }

    #[test]
    fn test_dropdown_is_centered_under_link() {
        let f = fixture();
        controller().open_dropdown(&f.top);
        // link 100 wide, panel 200 wide
        assert_eq!(f.top_panel.left().as_deref(), Some("-50px"));
    }

    #[test]
    fn test_focus_out_inside_keeps_submenu_open() {
        let f = fixture();
        let c = controller();
        let fits = binding(&f.fits, MenuLevel::Submenu);

        c.handle(&fits, &MenuEvent::FocusIn);
        assert_eq!(c.state(&f.fits), Disclosure::Open);

        let inside = MenuEvent::FocusOut {
            related: Some(f.leaf_link.clone()),
        };
        assert_eq!(c.handle(&fits, &inside), Disclosure::Open);
        assert!(f.fits_panel.has_class("dropdown-visible"));
    }

    #[test]
    fn test_focus_out_outside_closes_submenu() {
        let f = fixture();
        let c = controller();
        let fits = binding(&f.fits, MenuLevel::Submenu);

        c.handle(&fits, &MenuEvent::FocusIn);
        let outside = MenuEvent::FocusOut {
            related: Some(f.overflow.clone()),
        };
        assert_eq!(c.handle(&fits, &outside), Disclosure::Closed);
        assert!(!f.fits.has_class("dropdown-open"));
        assert!(!f.fits_panel.has_class("dropdown-visible"));
    }

    #[test]
    fn test_focus_out_to_nothing_closes() {
        let f = fixture();
        let c = controller();
        let top = binding(&f.top, MenuLevel::TopLevel);

        c.handle(&top, &MenuEvent::FocusIn);
        assert_eq!(c.handle(&top, &MenuEvent::FocusOut { related: None }), Disclosure::Closed);
    }

    #[test]
    fn test_submenu_opens_right_when_it_fits() {
        let f = fixture();
        controller().open_submenu(&f.fits);
        assert_eq!(f.fits_panel.left().as_deref(), Some("100%"));
        assert!(!f.fits_panel.has_class("dropdown-reverse"));
        assert!(!f.deep_panel.has_class("dropdown-reverse"));
    }

    #[test]
    fn test_overflowing_submenu_reverses_with_descendants() {
        let f = fixture();
        controller().open_submenu(&f.overflow);

        assert_eq!(f.overflow_panel.left().as_deref(), Some("-180px"));
        assert!(f.overflow_panel.has_class("dropdown-reverse"));
        assert!(f.overflow_nested_panel.has_class("dropdown-reverse"));
    }

    #[test]
    fn test_fitting_submenu_opens_left_under_reversed_parent() {
        let f = fixture();
        let c = controller();

        c.open_submenu(&f.overflow);
        c.open_submenu(&f.overflow_nested);

        assert_eq!(f.overflow_nested_panel.left().as_deref(), Some("-180px"));
        assert!(f.overflow_nested_panel.has_class("dropdown-reverse"));
    }

    #[test]
    fn test_reversal_is_inherited_and_sticky() {
        let f = fixture();
        let c = controller();

        // Fits on its own
        c.open_submenu(&f.deep);
        assert_eq!(f.deep_panel.left().as_deref(), Some("100%"));

        // Parent level flipped: the deep panel now opens leftward too
        f.fits_panel.add_class("dropdown-reverse");
        f.deep_panel.add_class("dropdown-reverse");
        c.close(&f.deep);
        c.open_submenu(&f.deep);
        assert_eq!(f.deep_panel.left().as_deref(), Some("-180px"));

        c.close(&f.deep);
        assert!(f.deep_panel.has_class("dropdown-reverse"));
    }

    #[test]
    fn test_close_hides_first_panel_only() {
        let f = fixture();
        let c = controller();
        c.open_dropdown(&f.top);
        c.open_submenu(&f.fits);

        c.close(&f.top);
        assert!(!f.top_panel.has_class("dropdown-visible"));
        assert!(f.fits_panel.has_class("dropdown-visible"));
    }

    #[test]
    fn test_missing_link_skips_positioning() {
        let panel = TestNode::new("custom-header__dropdown-menu").with_rect(0.0, 200.0);
        let item = TestNode::new("custom-header-menu__list-item").child(panel.clone());

        controller().open_dropdown(&item);
        assert!(item.has_class("dropdown-open"));
        assert!(panel.has_class("dropdown-visible"));
        assert_eq!(panel.left(), None);
    }
}
