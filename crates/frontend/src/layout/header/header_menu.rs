//! Event wiring for one header menu.
//!
//! [`attach`] scans a menu root, adds four listeners to every item that owns
//! a panel and returns them as [`MenuListeners`]. The listeners live exactly
//! as long as that value.

use std::rc::Rc;

use contracts::shared::menu::{MenuClasses, MenuController, MenuEvent};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, FocusEvent};

use crate::shared::dom::{DomElement, WindowViewport};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEventKind {
    MouseEnter,
    MouseLeave,
    FocusIn,
    FocusOut,
}

impl MenuEventKind {
    pub const ALL: [MenuEventKind; 4] = [
        MenuEventKind::MouseEnter,
        MenuEventKind::FocusIn,
        MenuEventKind::MouseLeave,
        MenuEventKind::FocusOut,
    ];

    pub fn dom_name(&self) -> &'static str {
        match self {
            MenuEventKind::MouseEnter => "mouseenter",
            MenuEventKind::MouseLeave => "mouseleave",
            MenuEventKind::FocusIn => "focusin",
            MenuEventKind::FocusOut => "focusout",
        }
    }

    fn to_menu_event(self, event: &Event) -> MenuEvent<DomElement> {
        match self {
            MenuEventKind::MouseEnter => MenuEvent::PointerEnter,
            MenuEventKind::MouseLeave => MenuEvent::PointerLeave,
            MenuEventKind::FocusIn => MenuEvent::FocusIn,
            MenuEventKind::FocusOut => MenuEvent::FocusOut {
                related: event
                    .dyn_ref::<FocusEvent>()
                    .and_then(|focus| focus.related_target())
                    .and_then(|target| target.dyn_into::<Element>().ok())
                    .map(DomElement),
            },
        }
    }
}

struct Listener {
    target: Element,
    kind: MenuEventKind,
    callback: Closure<dyn FnMut(Event)>,
}

/// Listeners added by [`attach`]. Dropping the value removes them from the DOM.
pub struct MenuListeners {
    listeners: Vec<Listener>,
}

impl MenuListeners {
    pub fn len(&self) -> usize {
        self.listeners.len()
    }
}

impl Drop for MenuListeners {
    fn drop(&mut self) {
        for listener in &self.listeners {
            let _ = listener.target.remove_event_listener_with_callback(
                listener.kind.dom_name(),
                listener.callback.as_ref().unchecked_ref(),
            );
        }
    }
}

/// Bind every item under `root` that owns a dropdown or submenu panel
pub fn attach(root: &Element, classes: MenuClasses) -> MenuListeners {
    let controller = Rc::new(MenuController::new(classes, WindowViewport));
    let bindings = controller.scan(&DomElement(root.clone()));
    let mut listeners = Vec::with_capacity(bindings.len() * MenuEventKind::ALL.len());

    for binding in bindings.into_iter().map(Rc::new) {
        for kind in MenuEventKind::ALL {
            let controller = Rc::clone(&controller);
            let handler_binding = Rc::clone(&binding);
            let callback = Closure::wrap(Box::new(move |event: Event| {
                controller.handle(&handler_binding, &kind.to_menu_event(&event));
            }) as Box<dyn FnMut(Event)>);

            let target = binding.item.0.clone();
            let _ = target
                .add_event_listener_with_callback(kind.dom_name(), callback.as_ref().unchecked_ref());
            listeners.push(Listener {
                target,
                kind,
                callback,
            });
        }
    }

    log::debug!(
        "header menu attached: {} items, {} listeners",
        listeners.len() / MenuEventKind::ALL.len(),
        listeners.len()
    );
    MenuListeners { listeners }
}
