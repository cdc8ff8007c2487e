//! Header menu rendered from data.
//!
//! Produces the same markup the tag-based widget expects and wires the same
//! behaviour on mount, for pages that build their navigation from JSON.

use contracts::enums::MenuLevel;
use contracts::shared::menu::{MenuClasses, MenuEntry};
use leptos::html::Nav;
use leptos::prelude::*;
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, HtmlElement};

use super::header_menu::{attach, MenuListeners};
use crate::shared::config::classes_for;

#[component]
pub fn HeaderMenu(
    /// Top-level entries, nested entries become dropdowns and submenus
    entries: Vec<MenuEntry>,
    #[prop(optional)]
    classes: Option<MenuClasses>,
) -> impl IntoView {
    let classes = classes.unwrap_or_default();
    let nav_ref = NodeRef::<Nav>::new();

    // Removed from the DOM together with the component
    let listeners = StoredValue::new_local(None::<MenuListeners>);
    let attach_classes = classes.clone();
    Effect::new(move |_| {
        if let Some(nav) = nav_ref.get() {
            let root: &Element = &nav;
            listeners.set_value(Some(attach(root, attach_classes.clone())));
        }
    });

    let items = entries
        .into_iter()
        .map(|entry| menu_item(entry, &classes, MenuLevel::TopLevel))
        .collect_view();

    view! {
        <nav class="header-menu" node_ref=nav_ref>
            <ul class="header-menu__list">{items}</ul>
        </nav>
    }
}

/// One `<li>` with its link and, when it has children, its panel.
/// Children of either level render as submenu items.
fn menu_item(entry: MenuEntry, classes: &MenuClasses, level: MenuLevel) -> AnyView {
    let has_panel = entry.has_children();
    let MenuEntry { title, url, children } = entry;
    let (item_class, link_class, panel_class) = match level {
        MenuLevel::TopLevel => (&classes.list_item, &classes.link, &classes.dropdown),
        MenuLevel::Submenu => (&classes.submenu_item, &classes.submenu_link, &classes.submenu),
    };
    let (item_class, link_class, panel_class) =
        (item_class.clone(), link_class.clone(), panel_class.clone());

    let panel = has_panel.then(|| {
        let nested = children
            .into_iter()
            .map(|child| menu_item(child, classes, MenuLevel::Submenu))
            .collect_view();
        view! { <ul class=panel_class>{nested}</ul> }
    });

    view! {
        <li class=item_class>
            <a class=link_class href=url>{title}</a>
            {panel}
        </li>
    }
    .into_any()
}

/// Render `menu_json` (a list of entries) into the element with `target_id`
#[wasm_bindgen(js_name = mountHeaderMenu)]
pub fn mount_header_menu(target_id: &str, menu_json: &str) -> Result<(), JsValue> {
    let entries =
        MenuEntry::list_from_json(menu_json).map_err(|err| JsValue::from_str(&err.to_string()))?;

    let target = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(target_id))
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .ok_or_else(|| JsValue::from_str(&format!("no element with id `{}`", target_id)))?;

    let classes = classes_for(&target, &MenuClasses::default());
    log::debug!(
        "mounting header menu into #{} ({} entries, {} levels)",
        target_id,
        entries.len(),
        entries.iter().map(|entry| entry.depth() + 1).max().unwrap_or(0)
    );

    leptos::mount::mount_to(target, move || {
        view! { <HeaderMenu entries=entries classes=classes /> }
    })
    .forget();
    Ok(())
}
