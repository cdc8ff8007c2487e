//! Custom-element lifecycle for the header menu tag.
//!
//! Every element carrying the configured tag is attached when it is in the
//! document, whether it was parsed with the page or inserted later, and
//! detached when it leaves. A `MutationObserver` on the document root plays
//! the part of the connected/disconnected callbacks.

use std::cell::RefCell;

use contracts::shared::menu::MenuConfig;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, MutationObserver, MutationObserverInit, MutationRecord, Node};

use super::header_menu::{attach, MenuListeners};
use crate::shared::config::classes_for;

/// Set on elements whose listeners are installed
pub const ATTACHED_ATTR: &str = "data-menu-attached";

struct Registry {
    config: MenuConfig,
    mounted: Vec<(Element, MenuListeners)>,
    _observer: MutationObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, MutationObserver)>,
}

thread_local! {
    static REGISTRY: RefCell<Option<Registry>> = const { RefCell::new(None) };
}

/// Register the header menu tag. Returns `false` if it was already
/// registered or there is no document to observe.
pub fn define_header_menu(config: MenuConfig) -> bool {
    if REGISTRY.with(|registry| registry.borrow().is_some()) {
        log::debug!("<{}> already defined", config.tag);
        return false;
    }

    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return false;
    };

    let callback = Closure::wrap(Box::new(move |records: js_sys::Array, _: MutationObserver| {
        on_mutations(&records);
    }) as Box<dyn FnMut(js_sys::Array, MutationObserver)>);

    let Ok(observer) = MutationObserver::new(callback.as_ref().unchecked_ref()) else {
        return false;
    };
    let init = MutationObserverInit::new();
    init.set_child_list(true);
    init.set_subtree(true);
    if observer.observe_with_options(&root, &init).is_err() {
        return false;
    }

    log::debug!("<{}> defined", config.tag);
    REGISTRY.with(|registry| {
        *registry.borrow_mut() = Some(Registry {
            config,
            mounted: Vec::new(),
            _observer: observer,
            _callback: callback,
        });
    });

    connect_within(&root);
    true
}

fn registered_tag() -> Option<String> {
    REGISTRY.with(|registry| registry.borrow().as_ref().map(|r| r.config.tag.clone()))
}

fn on_mutations(records: &js_sys::Array) {
    let mut removed_any = false;

    for record in records.iter() {
        let Ok(record) = record.dyn_into::<MutationRecord>() else {
            continue;
        };

        let added = record.added_nodes();
        for i in 0..added.length() {
            if let Some(node) = added.item(i) {
                connect_within(&node);
            }
        }
        removed_any |= record.removed_nodes().length() > 0;
    }

    if removed_any {
        disconnect_stale();
    }
}

/// Attach `node` itself and every tagged element below it
fn connect_within(node: &Node) {
    let Some(element) = node.dyn_ref::<Element>() else {
        return;
    };
    let Some(tag) = registered_tag() else {
        return;
    };

    if element.matches(&tag).unwrap_or(false) {
        connect(element);
    }
    if let Ok(list) = element.query_selector_all(&tag) {
        for i in 0..list.length() {
            if let Some(found) = list.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
                connect(&found);
            }
        }
    }
}

fn connect(element: &Element) {
    if element.has_attribute(ATTACHED_ATTR) || !element.is_connected() {
        return;
    }

    REGISTRY.with(|registry| {
        let mut registry = registry.borrow_mut();
        let Some(registry) = registry.as_mut() else {
            return;
        };

        let classes = classes_for(element, &registry.config.classes);
        let _ = element.set_attribute(ATTACHED_ATTR, "");
        let listeners = attach(element, classes);
        registry.mounted.push((element.clone(), listeners));
    });
}

/// Drop listeners of menus that are no longer in the document
fn disconnect_stale() {
    let stale: Vec<(Element, MenuListeners)> = REGISTRY.with(|registry| {
        let mut registry = registry.borrow_mut();
        let Some(registry) = registry.as_mut() else {
            return Vec::new();
        };
        let (live, stale): (Vec<_>, Vec<_>) = std::mem::take(&mut registry.mounted)
            .into_iter()
            .partition(|(element, _)| element.is_connected());
        registry.mounted = live;
        stale
    });

    for (element, listeners) in stale {
        // Re-inserting the element attaches it again
        let _ = element.remove_attribute(ATTACHED_ATTR);
        log::debug!("header menu detached, {} listeners removed", listeners.len());
    }
}
