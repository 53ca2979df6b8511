// Accessibility helpers
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

const FOCUSABLE: &str =
    "a[href], button:not([disabled]), input:not([disabled]), select:not([disabled]), [tabindex]:not([tabindex='-1'])";

/// Id of the polite live region rendered by the app shell.
pub const STATUS_REGION_ID: &str = "planner-status";

/// Get CSS for visible focus indicators and screen reader utilities
///
/// Returns critical accessibility CSS that should be injected early in the page load.
/// Includes focus ring styles, the drop-zone highlight and screen reader helper classes.
#[must_use]
pub const fn visible_focus_css() -> &'static str {
    ":focus{outline:3px solid #2563eb;outline-offset:2px} .drop-zone--active{outline:2px dashed #2563eb;background:#eff6ff} .sr-only{position:absolute;width:1px;height:1px;margin:-1px;overflow:hidden;clip:rect(0 0 0 0);white-space:nowrap;}"
}

/// Update the live region status for screen readers
///
/// Announces slot assignments and step changes to assistive technology users.
pub fn set_status(msg: &str) {
    log::debug!("status: {msg}");
    #[cfg(target_arch = "wasm32")]
    if let Some(node) = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.get_element_by_id(STATUS_REGION_ID))
    {
        node.set_text_content(Some(msg));
    }
}

/// Keep Tab and Shift+Tab cycling inside the element with `container_id`.
pub fn trap_focus_in(container_id: &str) {
    let Some(container) = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.get_element_by_id(container_id))
    else {
        return;
    };

    let scope = container.clone();
    let handler = Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(move |e: web_sys::KeyboardEvent| {
        if e.key() != "Tab" {
            return;
        }
        let Ok(nodes) = scope.query_selector_all(FOCUSABLE) else {
            return;
        };
        let len = nodes.length();
        if len == 0 {
            return;
        }
        let first = nodes.item(0).and_then(|n| n.dyn_into::<web_sys::HtmlElement>().ok());
        let last = nodes
            .item(len - 1)
            .and_then(|n| n.dyn_into::<web_sys::HtmlElement>().ok());
        let active = web_sys::window()
            .and_then(|win| win.document())
            .and_then(|doc| doc.active_element());
        let wrap_to = match (e.shift_key(), active) {
            (true, Some(active)) if first.as_deref().is_some_and(|el| *el == active) => last,
            (false, Some(active)) if last.as_deref().is_some_and(|el| *el == active) => first,
            _ => None,
        };
        if let Some(target) = wrap_to {
            e.prevent_default();
            let _ = target.focus();
        }
    });
    let _ = container
        .add_event_listener_with_callback("keydown", handler.as_ref().unchecked_ref());
    // The container is dropped with the dialog, taking the listener with it.
    handler.forget();
}

/// Return focus to the element that opened a dialog.
pub fn restore_focus(element_id: &str) {
    if let Some(el) = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.get_element_by_id(element_id))
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
    {
        let _ = el.focus();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_css_covers_drop_zones() {
        let css = visible_focus_css();
        assert!(css.contains(":focus"));
        assert!(css.contains(".drop-zone--active"));
        assert!(css.contains(".sr-only"));
    }
}
